//! Exam tracking for a Dan attempt.
//!
//! - `HitCounters` - good/ok/bad/drumroll counts for a window of play
//! - `ExamTracker` - cumulative and per-song counters, combo, and exam evaluation

mod counters;
mod exam_tracker;

pub use counters::*;
pub use exam_tracker::*;
