use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::exam::{DanResult, ExamCondition, ExamResult};
use crate::tracker::{ExamStatusEntry, ExamTracker, HitCounters};

/// Song-local exam evaluated when its song was closed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SongExamEntry {
    pub song_index: usize,
    pub song: String,
    pub exam: ExamCondition,
    pub result: ExamResult,
}

/// Snapshot of an attempt for machine-readable output
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackerSummary {
    pub result: DanResult,
    pub accuracy: f64,
    pub total_notes: u32,
    pub songs_completed: usize,
    pub overall: HitCounters,
    pub current_song: HitCounters,
    pub songs: Vec<HitCounters>,
    pub max_combo: u64,
    pub exams: Vec<ExamStatusEntry>,
    #[serde(default)]
    pub song_exams: Vec<SongExamEntry>,
}

impl TrackerSummary {
    pub fn from_tracker(tracker: &ExamTracker) -> Self {
        Self {
            result: tracker.result(),
            accuracy: tracker.accuracy(),
            total_notes: tracker.total_notes(),
            songs_completed: tracker.current_song_index(),
            overall: *tracker.overall(),
            current_song: *tracker.current_song(),
            songs: tracker.snapshots().to_vec(),
            max_combo: tracker.max_combo(),
            exams: tracker.all_exam_status(),
            song_exams: Vec::new(),
        }
    }

    /// Attach the song-local exam results collected during the attempt
    pub fn with_song_exams(mut self, song_exams: Vec<SongExamEntry>) -> Self {
        self.song_exams = song_exams;
        self
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Pretty-printed JSON summary of a tracker
pub fn format_json_summary(tracker: &ExamTracker) -> Result<String> {
    TrackerSummary::from_tracker(tracker).to_json_pretty()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::exam::HitResult;
    use serde_json::Value;

    #[test]
    fn test_json_summary_fields() {
        let mut tracker = ExamTracker::new(
            vec!["jb,5,0,m".parse().unwrap()],
            vec!["A".to_string(), "B".to_string()],
        );
        tracker.set_total_notes(20);
        tracker.record_hit(HitResult::Good, 9);
        tracker.record_hit(HitResult::Bad, 1);
        tracker.next_song();

        let json: Value = serde_json::from_str(&format_json_summary(&tracker).unwrap()).unwrap();
        assert_eq!(json["result"], "pass");
        assert_eq!(json["accuracy"], 90.0);
        assert_eq!(json["total_notes"], 20);
        assert_eq!(json["songs_completed"], 1);
        assert_eq!(json["songs"][0]["good"], 9);
        assert_eq!(json["exams"][0]["exam"]["type"], "jb");
        assert_eq!(json["exams"][0]["result"]["status"], "red");
        assert_eq!(json["exams"][0]["result"]["is_lower_better"], true);
        assert_eq!(json["song_exams"].as_array().map(Vec::len), Some(0));
    }

    #[test]
    fn test_json_summary_with_song_exams() {
        let mut tracker = ExamTracker::new(vec![], vec!["A".to_string()]);
        tracker.record_hit(HitResult::Drumroll, 45);

        let exam: ExamCondition = "r,40,60,per-song".parse().unwrap();
        let entry = SongExamEntry {
            song_index: 0,
            song: "A".to_string(),
            result: tracker.check_exam(&exam),
            exam,
        };
        let summary = TrackerSummary::from_tracker(&tracker).with_song_exams(vec![entry]);

        let json: Value = serde_json::from_str(&summary.to_json_pretty().unwrap()).unwrap();
        assert_eq!(json["song_exams"][0]["song"], "A");
        assert_eq!(json["song_exams"][0]["exam"]["type"], "r");
        assert_eq!(json["song_exams"][0]["result"]["status"], "red");
        assert_eq!(json["song_exams"][0]["result"]["current"], 45.0);
    }
}
