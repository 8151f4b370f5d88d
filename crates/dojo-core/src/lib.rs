pub mod course;
pub mod error;
pub mod event;
pub mod exam;
pub mod export;
pub mod tracker;

pub use course::{DanCourse, DanSong};
pub use error::{Error, Result};
pub use event::{HitEvent, parse_hit_log};
pub use exam::{
    ConditionType, DanResult, ExamCondition, ExamResult, ExamStatus, HitResult, Scope,
};
pub use export::{
    SongExamEntry, TrackerSummary, format_exam_status_console, format_json_summary,
};
pub use tracker::{ExamStatusEntry, ExamTracker, HitCounters};
