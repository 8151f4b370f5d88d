//! Text hit-log feed.
//!
//! One event per line:
//!
//! ```text
//! notes 412
//! good
//! ok 2
//! drumroll 18
//! next
//! ```
//!
//! Blank lines and `#` comments are skipped.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::exam::HitResult;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum HitEvent {
    Hit { result: HitResult, count: u32 },
    TotalNotes(u32),
    NextSong,
    /// Unrecognized result tag, kept so the tracker can skip it
    Ignored(String),
}

impl HitEvent {
    /// Parse a single non-empty log line. `line_no` is used for error reporting.
    pub fn parse_line(line: &str, line_no: usize) -> Result<Self> {
        let mut fields = line.split_whitespace();
        let tag = fields.next().unwrap_or_default();
        let arg = fields.next();

        let parse_count = |value: Option<&str>, default: Option<u32>| -> Result<u32> {
            match (value, default) {
                (Some(v), _) => v.parse::<u32>().map_err(|_| Error::InvalidEvent {
                    line: line_no,
                    message: format!("count {:?} is not a non-negative integer", v),
                }),
                (None, Some(d)) => Ok(d),
                (None, None) => Err(Error::InvalidEvent {
                    line: line_no,
                    message: format!("{:?} requires a count", tag),
                }),
            }
        };

        if tag.eq_ignore_ascii_case("next") {
            return Ok(Self::NextSong);
        }
        if tag.eq_ignore_ascii_case("notes") {
            return Ok(Self::TotalNotes(parse_count(arg, None)?));
        }

        match HitResult::from_str(tag) {
            Ok(result) => Ok(Self::Hit {
                result,
                count: parse_count(arg, Some(1))?,
            }),
            Err(_) => Ok(Self::Ignored(tag.to_string())),
        }
    }
}

/// Parse a whole hit log, skipping blank lines and comments
pub fn parse_hit_log(text: &str) -> Result<Vec<HitEvent>> {
    text.lines()
        .enumerate()
        .map(|(idx, line)| (idx + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty() && !line.starts_with('#'))
        .map(|(line_no, line)| HitEvent::parse_line(line, line_no))
        .collect()
}
