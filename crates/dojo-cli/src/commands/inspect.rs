//! Inspect command implementation.

use std::path::Path;

use anyhow::{Context, Result};
use dojo_core::{DanCourse, ExamCondition};

pub fn run(course_path: &Path) -> Result<()> {
    let course = DanCourse::load(course_path)
        .with_context(|| format!("Failed to load course from {}", course_path.display()))?;

    println!("{}", course.title.as_deref().unwrap_or("(untitled)"));
    if !course.is_dan {
        println!("  warning: document is not marked as a Dan course");
    }

    println!("Exams:");
    for exam in &course.dan_exams {
        println!("  {}", describe_exam(exam));
    }

    println!("Songs:");
    for (idx, song) in course.dan_songs.iter().enumerate() {
        println!("  {}. {} [{}]", idx + 1, song.title, song.wave);
        if let Some(exam) = &song.exam {
            println!("       {}", describe_exam(exam));
        }
    }

    Ok(())
}

fn describe_exam(exam: &ExamCondition) -> String {
    let cmp = if exam.is_lower_better() { "<=" } else { ">=" };
    let scope = if exam.scope.is_per_song() { "per song" } else { "overall" };
    format!(
        "{}: red {} {} / gold {} {} ({})",
        exam.condition_type.label(),
        cmp,
        exam.red,
        cmp,
        exam.gold,
        scope
    )
}
