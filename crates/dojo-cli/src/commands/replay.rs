//! Replay command implementation.

use std::path::Path;

use anyhow::{Context, Result};
use dojo_core::export::format_colored_status;
use dojo_core::{
    DanCourse, ExamCondition, ExamTracker, HitEvent, SongExamEntry, TrackerSummary,
    format_exam_status_console, parse_hit_log,
};
use tracing::{debug, info};

/// Run the replay command
pub fn run(
    hits_path: &Path,
    course_path: Option<&Path>,
    extra_exams: Vec<ExamCondition>,
    json: bool,
) -> Result<()> {
    let course = match course_path {
        Some(path) => DanCourse::load(path)
            .with_context(|| format!("Failed to load course from {}", path.display()))?,
        None => DanCourse::default(),
    };

    let log = std::fs::read_to_string(hits_path)
        .with_context(|| format!("Failed to read hit log {}", hits_path.display()))?;
    let events = parse_hit_log(&log)
        .with_context(|| format!("Failed to parse hit log {}", hits_path.display()))?;
    info!("Replaying {} events", events.len());

    let (tracker, song_exams) = replay(&course, &events, extra_exams);

    if json {
        let summary = TrackerSummary::from_tracker(&tracker).with_song_exams(song_exams);
        println!("{}", summary.to_json_pretty()?);
    } else {
        for entry in &song_exams {
            println!("{}", format_song_exam(entry));
        }
        println!("{}", format_exam_status_console(&tracker));
    }

    Ok(())
}

/// Feed every event into a fresh tracker for the course.
///
/// Song-local exams are evaluated as each song closes, before its
/// counters reset.
fn replay(
    course: &DanCourse,
    events: &[HitEvent],
    extra_exams: Vec<ExamCondition>,
) -> (ExamTracker, Vec<SongExamEntry>) {
    let mut exams = course.dan_exams.clone();
    exams.extend(extra_exams);
    let mut tracker = ExamTracker::new(exams, course.song_ids());
    let mut song_exams = Vec::new();

    for event in events {
        if matches!(event, HitEvent::NextSong) {
            debug!(
                "Song {} ({}) finished",
                tracker.current_song_index() + 1,
                tracker.current_song_id().unwrap_or("?")
            );
            song_exams.extend(course.check_song_exam(&tracker));
        }
        tracker.apply(event);
    }

    (tracker, song_exams)
}

fn format_song_exam(entry: &SongExamEntry) -> String {
    format!(
        "  {}. {} - {} {} {}",
        entry.song_index + 1,
        entry.song,
        entry.exam.condition_type.label(),
        entry.result.current,
        format_colored_status(&entry.result.status)
    )
}
