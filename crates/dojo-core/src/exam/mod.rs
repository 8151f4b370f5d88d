//! Exam vocabulary for Dan courses.
//!
//! This module contains the types shared by course documents and the tracker:
//! - `ConditionType` - which statistic a condition measures (gauge, good count, ...)
//! - `Scope` - whether a condition is measured per song or over the whole attempt
//! - `HitResult` - judged note results fed into the tracker
//! - `ExamStatus`, `DanResult` - per-condition and overall verdicts
//! - `ExamCondition`, `ExamResult` - a condition and its evaluation

mod condition;
mod enums;

pub use condition::*;
pub use enums::*;
