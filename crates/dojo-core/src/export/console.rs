//! Console output formatting with colored display

use std::fmt::Write as _;

use owo_colors::OwoColorize;

use crate::exam::{ConditionType, DanResult, ExamResult, ExamStatus};
use crate::tracker::ExamTracker;

const MIN_BORDER_WIDTH: usize = 50;

/// Format the live exam state of a tracker as a boxed, colored block.
///
/// ```text
/// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
///   Song 2/3  RESULT: PASS
/// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
///   Gauge             85.00   red 80 / gold 95   RED
///   Bad Count (song)  3       red 5 / gold 0     RED
/// ```
pub fn format_exam_status_console(tracker: &ExamTracker) -> String {
    let mut output = String::new();

    let song_count = tracker.songs().len();
    let song_label = if tracker.is_finished() {
        "Finished".to_string()
    } else {
        format!("Song {}/{}", tracker.current_song_index() + 1, song_count)
    };

    let entries = tracker.all_exam_status();
    let labels: Vec<String> = entries
        .iter()
        .map(|entry| format_label(&entry.result))
        .collect();
    let label_width = labels.iter().map(|l| l.chars().count()).max().unwrap_or(0);

    let border: String = "━".repeat(MIN_BORDER_WIDTH.max(label_width + 40));
    let border_dim = border.dimmed();

    let _ = writeln!(output, "{}", border_dim);
    let _ = writeln!(
        output,
        "  {}  RESULT: {}",
        song_label.bold(),
        format_colored_result(&tracker.result())
    );
    let _ = writeln!(output, "{}", border_dim);
    let _ = writeln!(
        output,
        "  ACCURACY : {:.2}%   MAX COMBO : {}",
        tracker.accuracy(),
        tracker.max_combo()
    );

    for (entry, label) in entries.iter().zip(&labels) {
        let result = &entry.result;
        let _ = writeln!(
            output,
            "  {:<width$}  {:<8} red {} / gold {}   {}",
            label,
            format_value(result),
            result.red_target,
            result.gold_target,
            format_colored_status(&result.status),
            width = label_width
        );
    }

    let _ = write!(output, "{}", border_dim);
    output
}

fn format_label(result: &ExamResult) -> String {
    let label = result.condition_type.label();
    if result.scope.is_per_song() {
        format!("{} (song)", label)
    } else {
        label.to_string()
    }
}

fn format_value(result: &ExamResult) -> String {
    if result.condition_type == ConditionType::Gauge {
        format!("{:.2}", result.current)
    } else {
        format!("{}", result.current)
    }
}

pub fn format_colored_status(status: &ExamStatus) -> String {
    let text = status.as_str().to_uppercase();
    match status {
        ExamStatus::Gold => text.yellow().bold().to_string(),
        ExamStatus::Red => text.red().to_string(),
        ExamStatus::Fail => text.dimmed().to_string(),
    }
}

pub fn format_colored_result(result: &DanResult) -> String {
    let text = result.as_str().to_uppercase();
    match result {
        DanResult::Gold => text.yellow().bold().to_string(),
        DanResult::Pass => text.red().bold().to_string(),
        DanResult::Fail => text.dimmed().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::exam::HitResult;

    fn sample_tracker() -> ExamTracker {
        let exams = vec![
            "g,80,95,m".parse().unwrap(),
            "jb,5,0,per-song".parse().unwrap(),
        ];
        let mut tracker = ExamTracker::new(exams, vec!["A".to_string(), "B".to_string()]);
        tracker.record_hit(HitResult::Good, 8);
        tracker.record_hit(HitResult::Ok, 1);
        tracker.record_hit(HitResult::Bad, 1);
        tracker
    }

    #[test]
    fn test_console_lists_every_exam() {
        let output = format_exam_status_console(&sample_tracker());
        assert!(output.contains("Song 1/2"));
        assert!(output.contains("Gauge"));
        assert!(output.contains("85.00"));
        assert!(output.contains("Bad Count (song)"));
        assert!(output.contains("RED"));
    }

    #[test]
    fn test_console_finished() {
        let mut tracker = sample_tracker();
        tracker.next_song();
        tracker.next_song();
        let output = format_exam_status_console(&tracker);
        assert!(output.contains("Finished"));
    }

    #[test]
    fn test_colored_status_text() {
        assert!(format_colored_status(&ExamStatus::Gold).contains("GOLD"));
        assert!(format_colored_result(&DanResult::Fail).contains("FAIL"));
    }
}
