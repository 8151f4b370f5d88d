use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::{ConditionType, ExamStatus, Scope};
use crate::error::Error;

/// A single Dan exam condition with its red (pass) and gold thresholds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExamCondition {
    #[serde(rename = "type")]
    pub condition_type: ConditionType,
    pub red: f64,
    pub gold: f64,
    pub scope: Scope,
    /// EXAM slot number (1-4) when read from course data
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u8>,
}

impl ExamCondition {
    pub fn new(condition_type: ConditionType, red: f64, gold: f64, scope: Scope) -> Self {
        Self {
            condition_type,
            red,
            gold,
            scope,
            id: None,
        }
    }

    pub fn is_lower_better(&self) -> bool {
        self.condition_type.is_lower_better()
    }

    /// Classify a measured value against the thresholds.
    ///
    /// Gold is checked before red, so a value meeting both reports gold.
    pub fn classify(&self, current: f64) -> ExamStatus {
        if self.is_lower_better() {
            if current <= self.gold {
                ExamStatus::Gold
            } else if current <= self.red {
                ExamStatus::Red
            } else {
                ExamStatus::Fail
            }
        } else if current >= self.gold {
            ExamStatus::Gold
        } else if current >= self.red {
            ExamStatus::Red
        } else {
            ExamStatus::Fail
        }
    }
}

/// Parses an EXAM line value such as `g,97,100,m`.
///
/// Fields are `type,red,gold,scope`; anything after the fourth field is ignored.
impl FromStr for ExamCondition {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split(',').map(str::trim).collect();
        if parts.len() < 4 {
            return Err(Error::invalid_exam(
                s,
                format!("expected 4 fields, got {}", parts.len()),
            ));
        }

        let parse_threshold = |name: &str, value: &str| {
            value.parse::<f64>().map_err(|_| {
                Error::invalid_exam(s, format!("{} threshold {:?} is not a number", name, value))
            })
        };

        let red = parse_threshold("red", parts[1])?;
        let gold = parse_threshold("gold", parts[2])?;

        Ok(Self::new(
            ConditionType::from(parts[0].to_ascii_lowercase()),
            red,
            gold,
            Scope::from(parts[3].to_ascii_lowercase()),
        ))
    }
}

impl std::fmt::Display for ExamCondition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{},{},{},{}",
            self.condition_type, self.red, self.gold, self.scope
        )
    }
}

/// Evaluation of one exam condition against the tracker state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExamResult {
    pub status: ExamStatus,
    pub current: f64,
    pub red_target: f64,
    pub gold_target: f64,
    #[serde(rename = "type")]
    pub condition_type: ConditionType,
    pub scope: Scope,
    pub is_lower_better: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_exam_line() {
        let exam: ExamCondition = "g,97,100,m".parse().unwrap();
        assert_eq!(exam.condition_type, ConditionType::Gauge);
        assert_eq!(exam.red, 97.0);
        assert_eq!(exam.gold, 100.0);
        assert_eq!(exam.scope, Scope::Overall);
        assert_eq!(exam.id, None);
    }

    #[test]
    fn test_parse_exam_line_normalizes_case_and_whitespace() {
        let exam: ExamCondition = " JB , 5 , 0 , M ,extra".parse().unwrap();
        assert_eq!(exam.condition_type, ConditionType::JudgeBad);
        assert_eq!(exam.red, 5.0);
        assert_eq!(exam.gold, 0.0);
        assert_eq!(exam.scope, Scope::Overall);
    }

    #[test]
    fn test_parse_exam_line_too_few_fields() {
        let err = "g,97,100".parse::<ExamCondition>().unwrap_err();
        assert!(matches!(err, Error::InvalidExam { .. }));
    }

    #[test]
    fn test_parse_exam_line_bad_threshold() {
        let err = "g,abc,100,m".parse::<ExamCondition>().unwrap_err();
        assert!(err.to_string().contains("red threshold"));
    }

    #[test]
    fn test_classify_higher_is_better() {
        let exam = ExamCondition::new(ConditionType::Gauge, 80.0, 95.0, Scope::Overall);
        assert_eq!(exam.classify(100.0), ExamStatus::Gold);
        assert_eq!(exam.classify(95.0), ExamStatus::Gold);
        assert_eq!(exam.classify(85.0), ExamStatus::Red);
        assert_eq!(exam.classify(80.0), ExamStatus::Red);
        assert_eq!(exam.classify(79.9), ExamStatus::Fail);
    }

    #[test]
    fn test_classify_lower_is_better() {
        let exam = ExamCondition::new(ConditionType::JudgeBad, 5.0, 0.0, Scope::Overall);
        assert_eq!(exam.classify(0.0), ExamStatus::Gold);
        assert_eq!(exam.classify(3.0), ExamStatus::Red);
        assert_eq!(exam.classify(5.0), ExamStatus::Red);
        assert_eq!(exam.classify(6.0), ExamStatus::Fail);
    }

    #[test]
    fn test_deserialize_course_exam() {
        let exam: ExamCondition =
            serde_json::from_str(r#"{"type":"jp","red":900,"gold":1000,"scope":"m","id":2}"#)
                .unwrap();
        assert_eq!(exam.condition_type, ConditionType::JudgePerfect);
        assert_eq!(exam.id, Some(2));
        assert_eq!(exam.to_string(), "jp,900,1000,m");
    }
}
