//! Presentation helpers for exam state.
//!
//! - `console` - colored boxed status for terminals
//! - `json` - serializable summary of an attempt

mod console;
mod json;

pub use console::*;
pub use json::*;
