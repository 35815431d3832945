use crate::{error::Error, stats::AggregateStats, stats::StatsConfig, Result};
use derive_deref::Deref;
use parse_display::{Display, FromStr};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::path::Path;

/// Offensive play classification that selects the grading rules for a play.
#[derive(
    Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Display, FromStr, Serialize, Deserialize,
)]
pub enum PlayCategory {
    #[display("Run (No QB Read)")]
    #[serde(rename = "Run (No QB Read)")]
    RunNoRead,
    #[display("RPO")]
    #[serde(rename = "RPO")]
    Rpo,
    Pass,
    Screen,
    #[display("Designed QB Run (No Reads)")]
    #[serde(rename = "Designed QB Run (No Reads)")]
    DesignedQbRunNoReads,
    #[display("Designed QB Run (With Read)")]
    #[serde(rename = "Designed QB Run (With Read)")]
    DesignedQbRunWithRead,
    #[display("PRO (Pass Run Option)")]
    #[serde(rename = "PRO (Pass Run Option)")]
    Pro,
}

impl PlayCategory {
    pub const ALL: [PlayCategory; 7] = [
        PlayCategory::RunNoRead,
        PlayCategory::Rpo,
        PlayCategory::Pass,
        PlayCategory::Screen,
        PlayCategory::DesignedQbRunNoReads,
        PlayCategory::DesignedQbRunWithRead,
        PlayCategory::Pro,
    ];
}

#[derive(
    Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Display, FromStr, Serialize, Deserialize,
)]
pub enum PlayOutcome {
    Rush,
    #[display("Rush TD")]
    #[serde(rename = "Rush TD")]
    RushTd,
    Complete,
    #[display("Complete TD")]
    #[serde(rename = "Complete TD")]
    CompleteTd,
    Incomplete,
    Scramble,
    #[display("Scramble TD")]
    #[serde(rename = "Scramble TD")]
    ScrambleTd,
    Sack,
    #[display("QB Rush")]
    #[serde(rename = "QB Rush")]
    QbRush,
    #[display("QB Rush TD")]
    #[serde(rename = "QB Rush TD")]
    QbRushTd,
    Penalty,
    Interception,
    Fumble,
}

impl PlayOutcome {
    pub const ALL: [PlayOutcome; 13] = [
        PlayOutcome::Rush,
        PlayOutcome::RushTd,
        PlayOutcome::Complete,
        PlayOutcome::CompleteTd,
        PlayOutcome::Incomplete,
        PlayOutcome::Scramble,
        PlayOutcome::ScrambleTd,
        PlayOutcome::Sack,
        PlayOutcome::QbRush,
        PlayOutcome::QbRushTd,
        PlayOutcome::Penalty,
        PlayOutcome::Interception,
        PlayOutcome::Fumble,
    ];
}

/// Grade shared by every graded dimension, ordered `VeryPoor < Poor < Good < Best`.
#[derive(
    Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Display, FromStr, Serialize, Deserialize,
)]
pub enum ExecutionLevel {
    #[display("Very Poor")]
    #[serde(rename = "Very Poor")]
    VeryPoor,
    Poor,
    Good,
    Best,
}

impl ExecutionLevel {
    pub fn is_good_or_best(self) -> bool {
        matches!(self, ExecutionLevel::Good | ExecutionLevel::Best)
    }
}

/// The category a play was logged under.
///
/// Any string deserializes: names outside the fixed taxonomy are kept as
/// `Unrecognized` so they still reach the evaluator's fallback rule.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Grouping {
    Known(PlayCategory),
    Unrecognized(String),
}

impl Grouping {
    pub fn category(&self) -> Option<PlayCategory> {
        match self {
            Grouping::Known(category) => Some(*category),
            Grouping::Unrecognized(_) => None,
        }
    }
}

impl From<PlayCategory> for Grouping {
    fn from(category: PlayCategory) -> Self {
        Grouping::Known(category)
    }
}

impl From<String> for Grouping {
    fn from(name: String) -> Self {
        match name.parse::<PlayCategory>() {
            Ok(category) => Grouping::Known(category),
            Err(_) => Grouping::Unrecognized(name),
        }
    }
}

impl From<&str> for Grouping {
    fn from(name: &str) -> Self {
        Grouping::from(name.to_string())
    }
}

impl From<Grouping> for String {
    fn from(grouping: Grouping) -> Self {
        grouping.to_string()
    }
}

impl fmt::Display for Grouping {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Grouping::Known(category) => write!(f, "{}", category),
            Grouping::Unrecognized(name) => write!(f, "{}", name),
        }
    }
}

// A blank category is one that has not been chosen yet.
fn category_or_blank<'de, D>(deserializer: D) -> std::result::Result<Option<Grouping>, D::Error>
where
    D: Deserializer<'de>,
{
    let name: Option<String> = Option::deserialize(deserializer)?;
    Ok(name
        .filter(|name| !name.trim().is_empty())
        .map(Grouping::from))
}

pub fn parse_category(name: &str) -> Result<PlayCategory> {
    name.parse()
        .map_err(|_| Error::UnknownCategory(name.to_string()))
}

pub fn parse_outcome(name: &str) -> Result<PlayOutcome> {
    name.parse()
        .map_err(|_| Error::UnknownOutcome(name.to_string()))
}

/// One snap as logged by the coaching staff.
///
/// Grading fields are sparse: which ones apply depends on the category and
/// outcome (see [`crate::fields::visible_fields`]). Absent values never count
/// as a passing grade.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggedPlay {
    pub id: Option<String>,
    pub qb: Option<String>,
    pub block: Option<String>,
    pub session: Option<String>,
    #[serde(deserialize_with = "category_or_blank")]
    pub category: Option<Grouping>,
    pub outcome: Option<PlayOutcome>,
    pub yards_gained: i32,
    /// `None` when the down was not recorded.
    pub down: Option<u8>,
    pub distance: i32,

    pub rb_in: Option<String>,
    pub pocket_presence: Option<ExecutionLevel>,
    pub pass_read: Option<ExecutionLevel>,
    pub pass_ball_placement: Option<ExecutionLevel>,
    pub scramble_execution: Option<ExecutionLevel>,
    pub qb_run_execution: Option<ExecutionLevel>,
    pub rb_vision: Option<ExecutionLevel>,
    pub rb_run_execution: Option<ExecutionLevel>,
    pub rpo_read_keys: Option<bool>,
    pub read_option_read_keys: Option<bool>,
    pub sack_on_qb: Option<bool>,

    pub audible_opportunity_missed: Option<bool>,
    pub audible_called: Option<bool>,
    pub audible_success: Option<bool>,
}

impl LoggedPlay {
    pub fn new(category: impl Into<Grouping>, outcome: PlayOutcome) -> Self {
        Self {
            category: Some(category.into()),
            outcome: Some(outcome),
            ..Self::default()
        }
    }

    pub fn is_penalty(&self) -> bool {
        self.outcome == Some(PlayOutcome::Penalty)
    }

    /// The category if it is one of the fixed taxonomy values.
    pub fn known_category(&self) -> Option<PlayCategory> {
        self.category.as_ref().and_then(Grouping::category)
    }
}

#[derive(Clone, Debug, Default, Deref, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Plays(Vec<LoggedPlay>);

impl Plays {
    pub fn new(plays: Vec<LoggedPlay>) -> Self {
        Plays(plays)
    }

    /// Reads a JSON array of logged plays.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let plays: Vec<LoggedPlay> = crate::load_json(path)?;
        log::debug!("{} plays loaded", plays.len());
        Ok(Plays(plays))
    }

    pub fn filter(self, filter: crate::filter::Predicate) -> Self {
        let before = self.0.len();
        let plays: Plays = self.0.into_iter().filter(|play| filter(play)).collect();
        log::debug!("{} of {} plays kept by filter", plays.len(), before);
        plays
    }

    pub fn stats(&self, config: StatsConfig) -> AggregateStats {
        AggregateStats::compute_with(&self.0, config)
    }
}

impl FromIterator<LoggedPlay> for Plays {
    fn from_iter<I: IntoIterator<Item = LoggedPlay>>(iter: I) -> Self {
        Plays(iter.into_iter().collect())
    }
}
