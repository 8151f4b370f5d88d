use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use super::HitCounters;
use crate::event::HitEvent;
use crate::exam::{
    ConditionType, DanResult, ExamCondition, ExamResult, ExamStatus, HitResult,
};

/// Accuracy reported before any judged note
pub const EMPTY_ACCURACY: f64 = 100.0;

/// Accuracy weight of a good hit
pub const GOOD_WEIGHT: f64 = 100.0;

/// Accuracy weight of an ok hit
pub const OK_WEIGHT: f64 = 50.0;

/// A configured condition paired with its current evaluation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExamStatusEntry {
    pub exam: ExamCondition,
    pub result: ExamResult,
}

/// Live exam state for one Dan attempt.
///
/// Owned by a single session and mutated only through [`record_hit`],
/// [`set_total_notes`] and [`next_song`]. Every query is a pure read.
///
/// [`record_hit`]: ExamTracker::record_hit
/// [`set_total_notes`]: ExamTracker::set_total_notes
/// [`next_song`]: ExamTracker::next_song
#[derive(Debug, Clone)]
pub struct ExamTracker {
    exams: Vec<ExamCondition>,
    songs: Vec<String>,
    total_notes: u32,
    overall: HitCounters,
    current_song: HitCounters,
    snapshots: Vec<HitCounters>,
    current_song_index: usize,
    current_combo: u64,
    max_combo: u64,
}

impl ExamTracker {
    pub fn new(exams: Vec<ExamCondition>, songs: Vec<String>) -> Self {
        Self {
            exams,
            songs,
            total_notes: 0,
            overall: HitCounters::default(),
            current_song: HitCounters::default(),
            snapshots: Vec::new(),
            current_song_index: 0,
            current_combo: 0,
            max_combo: 0,
        }
    }

    /// Record `count` judged hits of one result.
    ///
    /// Good and ok extend the combo, bad breaks it regardless of `count`,
    /// drumroll ticks leave it untouched.
    pub fn record_hit(&mut self, result: HitResult, count: u32) {
        self.overall.add(result, count);
        self.current_song.add(result, count);

        match result {
            HitResult::Good | HitResult::Ok => {
                self.current_combo += u64::from(count);
                self.max_combo = self.max_combo.max(self.current_combo);
            }
            HitResult::Bad => self.current_combo = 0,
            HitResult::Drumroll => {}
        }
    }

    /// Record hits from a raw result tag. Unknown tags are ignored.
    pub fn record_hit_tag(&mut self, tag: &str, count: u32) {
        match tag.parse::<HitResult>() {
            Ok(result) => self.record_hit(result, count),
            Err(_) => trace!("Ignoring unknown hit result {:?}", tag),
        }
    }

    /// Store the session note count (metadata only, accuracy does not use it)
    pub fn set_total_notes(&mut self, count: u32) {
        self.total_notes = count;
    }

    /// Close the current song: snapshot its counters and start the next one.
    ///
    /// Callers invoke this exactly once per finished song, in play order.
    pub fn next_song(&mut self) {
        let finished = std::mem::take(&mut self.current_song);
        self.snapshots.push(finished);
        self.current_song_index += 1;
        debug!(
            "Song {} finished (good={}, ok={}, bad={}, drumroll={})",
            self.current_song_index, finished.good, finished.ok, finished.bad, finished.drumroll
        );
    }

    /// Apply one event from a hit feed
    pub fn apply(&mut self, event: &HitEvent) {
        match event {
            HitEvent::Hit { result, count } => self.record_hit(*result, *count),
            HitEvent::TotalNotes(count) => self.set_total_notes(*count),
            HitEvent::NextSong => self.next_song(),
            HitEvent::Ignored(tag) => trace!("Ignoring unknown hit result {:?}", tag),
        }
    }

    /// Weighted accuracy over all judged notes, in `[0, 100]`.
    ///
    /// Good counts fully, ok half, bad nothing. Returns 100 before any
    /// judged note so gauges start full.
    pub fn accuracy(&self) -> f64 {
        let total = self.overall.judged();
        if total == 0 {
            return EMPTY_ACCURACY;
        }
        (self.overall.good as f64 * GOOD_WEIGHT + self.overall.ok as f64 * OK_WEIGHT)
            / total as f64
    }

    /// Evaluate one condition against the current (possibly mid-song) state
    pub fn check_exam(&self, exam: &ExamCondition) -> ExamResult {
        let current = self.current_value(exam);
        ExamResult {
            status: exam.classify(current),
            current,
            red_target: exam.red,
            gold_target: exam.gold,
            condition_type: exam.condition_type.clone(),
            scope: exam.scope.clone(),
            is_lower_better: exam.is_lower_better(),
        }
    }

    fn current_value(&self, exam: &ExamCondition) -> f64 {
        let counters = if exam.scope.is_per_song() {
            &self.current_song
        } else {
            &self.overall
        };

        match exam.condition_type {
            // Gauge is a cumulative ratio, scope does not apply
            ConditionType::Gauge => self.accuracy(),
            ConditionType::JudgePerfect | ConditionType::Hits => counters.good as f64,
            ConditionType::JudgeBad => counters.bad as f64,
            ConditionType::Roll => counters.drumroll as f64,
            ConditionType::Combo | ConditionType::Unknown(_) => 0.0,
        }
    }

    /// Every configured condition with its evaluation, in configuration order
    pub fn all_exam_status(&self) -> Vec<ExamStatusEntry> {
        self.exams
            .iter()
            .map(|exam| ExamStatusEntry {
                exam: exam.clone(),
                result: self.check_exam(exam),
            })
            .collect()
    }

    /// True when no condition is failing (vacuously true without conditions)
    pub fn is_passed(&self) -> bool {
        self.exams
            .iter()
            .all(|exam| self.check_exam(exam).status.is_cleared())
    }

    /// True when every condition is at gold
    pub fn is_gold_pass(&self) -> bool {
        self.exams
            .iter()
            .all(|exam| self.check_exam(exam).status == ExamStatus::Gold)
    }

    pub fn result(&self) -> DanResult {
        if self.is_gold_pass() {
            DanResult::Gold
        } else if self.is_passed() {
            DanResult::Pass
        } else {
            DanResult::Fail
        }
    }

    pub fn exams(&self) -> &[ExamCondition] {
        &self.exams
    }

    pub fn songs(&self) -> &[String] {
        &self.songs
    }

    pub fn total_notes(&self) -> u32 {
        self.total_notes
    }

    /// Cumulative counters for the whole attempt
    pub fn overall(&self) -> &HitCounters {
        &self.overall
    }

    /// Counters for the song in progress
    pub fn current_song(&self) -> &HitCounters {
        &self.current_song
    }

    /// Counters of each finished song, in play order
    pub fn snapshots(&self) -> &[HitCounters] {
        &self.snapshots
    }

    pub fn current_song_index(&self) -> usize {
        self.current_song_index
    }

    /// Identifier of the song in progress, `None` once every song is done
    pub fn current_song_id(&self) -> Option<&str> {
        self.songs.get(self.current_song_index).map(String::as_str)
    }

    pub fn is_finished(&self) -> bool {
        self.current_song_index >= self.songs.len()
    }

    pub fn current_combo(&self) -> u64 {
        self.current_combo
    }

    pub fn max_combo(&self) -> u64 {
        self.max_combo
    }
}
