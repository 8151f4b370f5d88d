//! Dan course documents as stored by the song database.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::Result;
use crate::exam::ExamCondition;
use crate::export::SongExamEntry;
use crate::tracker::ExamTracker;

/// One song of a Dan course
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DanSong {
    pub title: String,
    pub subtitle: String,
    pub genre: String,
    pub wave: String,
    pub scoreinit: f64,
    pub scorediff: f64,
    /// Seconds of silence before the song starts
    pub delay: f64,
    /// Song-local condition (EXAM4 following `#NEXTSONG`)
    pub exam: Option<ExamCondition>,
}

/// Dan course: course-wide exam conditions and the ordered song list
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DanCourse {
    pub title: Option<String>,
    pub is_dan: bool,
    pub dan_exams: Vec<ExamCondition>,
    pub dan_songs: Vec<DanSong>,
}

impl DanCourse {
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        let course = Self::from_json_str(&content)?;
        debug!(
            "Loaded course {:?} ({} songs, {} exams) from {:?}",
            course.title.as_deref().unwrap_or("-"),
            course.dan_songs.len(),
            course.dan_exams.len(),
            path.as_ref()
        );
        Ok(course)
    }

    /// Song titles in play order
    pub fn song_ids(&self) -> Vec<String> {
        self.dan_songs.iter().map(|s| s.title.clone()).collect()
    }

    /// Song-local condition for the song at `index`
    pub fn song_exam(&self, index: usize) -> Option<&ExamCondition> {
        self.dan_songs.get(index).and_then(|s| s.exam.as_ref())
    }

    /// Evaluate the song-local exam of the song in progress.
    ///
    /// Must run before `next_song`, while the per-song counters still hold
    /// that song's hits.
    pub fn check_song_exam(&self, tracker: &ExamTracker) -> Option<SongExamEntry> {
        let index = tracker.current_song_index();
        let exam = self.song_exam(index)?;
        Some(SongExamEntry {
            song_index: index,
            song: tracker.current_song_id().unwrap_or_default().to_string(),
            exam: exam.clone(),
            result: tracker.check_exam(exam),
        })
    }

    /// Start a tracker for a fresh attempt at this course
    pub fn tracker(&self) -> ExamTracker {
        ExamTracker::new(self.dan_exams.clone(), self.song_ids())
    }
}
