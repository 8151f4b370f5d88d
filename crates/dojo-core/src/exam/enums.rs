use serde::{Deserialize, Serialize};
use strum::{EnumString, IntoStaticStr};

/// Statistic selected by an exam condition.
///
/// Unrecognized codes are kept verbatim in `Unknown` so that course data
/// from newer song databases still loads and displays.
#[derive(Debug, Clone, PartialEq, Eq, Hash, EnumString, Serialize, Deserialize)]
#[strum(ascii_case_insensitive)]
#[serde(from = "String", into = "String")]
pub enum ConditionType {
    /// Soul gauge / accuracy ratio
    #[strum(serialize = "g")]
    Gauge,
    /// Good-hit count
    #[strum(serialize = "jp")]
    JudgePerfect,
    /// Good-hit count (alternate code)
    #[strum(serialize = "h")]
    Hits,
    /// Bad-hit count, lower is better
    #[strum(serialize = "jb")]
    JudgeBad,
    /// Drumroll hit count
    #[strum(serialize = "r")]
    Roll,
    /// Max combo (display only)
    #[strum(serialize = "c")]
    Combo,
    #[strum(default)]
    Unknown(String),
}

impl ConditionType {
    /// Condition code as written in course data
    pub fn code(&self) -> &str {
        match self {
            Self::Gauge => "g",
            Self::JudgePerfect => "jp",
            Self::Hits => "h",
            Self::JudgeBad => "jb",
            Self::Roll => "r",
            Self::Combo => "c",
            Self::Unknown(code) => code,
        }
    }

    /// Human-readable name for result screens
    pub fn label(&self) -> &str {
        match self {
            Self::Gauge => "Gauge",
            Self::JudgePerfect | Self::Hits => "Good Count",
            Self::JudgeBad => "Bad Count",
            Self::Roll => "Drumroll Count",
            Self::Combo => "Max Combo",
            Self::Unknown(code) => code,
        }
    }

    pub fn is_lower_better(&self) -> bool {
        matches!(self, Self::JudgeBad)
    }

    /// All known condition types, in display order
    pub fn known() -> [ConditionType; 6] {
        [
            Self::Gauge,
            Self::JudgePerfect,
            Self::Hits,
            Self::JudgeBad,
            Self::Roll,
            Self::Combo,
        ]
    }
}

impl From<String> for ConditionType {
    fn from(code: String) -> Self {
        code.parse().unwrap_or(Self::Unknown(code))
    }
}

impl From<ConditionType> for String {
    fn from(value: ConditionType) -> Self {
        value.code().to_string()
    }
}

impl std::fmt::Display for ConditionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Measurement window of an exam condition.
#[derive(Debug, Clone, PartialEq, Eq, Hash, EnumString, Serialize, Deserialize)]
#[strum(ascii_case_insensitive)]
#[serde(from = "String", into = "String")]
pub enum Scope {
    /// Cumulative over the whole attempt
    #[strum(serialize = "m", serialize = "overall")]
    Overall,
    /// Current song only, reset at each song boundary
    #[strum(serialize = "per-song", serialize = "p", serialize = "s")]
    PerSong,
    #[strum(default)]
    Other(String),
}

impl Scope {
    pub fn code(&self) -> &str {
        match self {
            Self::Overall => "m",
            Self::PerSong => "per-song",
            Self::Other(code) => code,
        }
    }

    pub fn is_per_song(&self) -> bool {
        matches!(self, Self::PerSong)
    }
}

impl From<String> for Scope {
    fn from(code: String) -> Self {
        code.parse().unwrap_or(Self::Other(code))
    }
}

impl From<Scope> for String {
    fn from(value: Scope) -> Self {
        value.code().to_string()
    }
}

impl std::fmt::Display for Scope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Judged note result reported by the note-judgment layer.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    EnumString,
    IntoStaticStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum HitResult {
    Good,
    Ok,
    Bad,
    Drumroll,
}

impl HitResult {
    pub fn as_str(&self) -> &'static str {
        self.into()
    }
}

impl std::fmt::Display for HitResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Verdict for a single exam condition
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Default,
    Serialize,
    Deserialize,
    IntoStaticStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ExamStatus {
    #[default]
    Fail,
    Red,
    Gold,
}

impl ExamStatus {
    pub fn as_str(&self) -> &'static str {
        self.into()
    }

    pub fn is_cleared(&self) -> bool {
        *self != Self::Fail
    }
}

impl std::fmt::Display for ExamStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Overall verdict of a Dan attempt
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Default,
    Serialize,
    Deserialize,
    IntoStaticStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum DanResult {
    #[default]
    Fail,
    Pass,
    Gold,
}

impl DanResult {
    pub fn as_str(&self) -> &'static str {
        self.into()
    }
}

impl std::fmt::Display for DanResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
