use parse_display::{Display, FromStr};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use std::path::Path;

pub mod error;
pub mod evaluate;
pub mod fields;
pub mod filter;
pub mod play;
pub mod stats;

pub use evaluate::{evaluate_play, Verdict};
pub use fields::{missing_fields, readable_field_name, visible_fields, GradingField};
pub use filter::PlayFilter;
pub use play::{ExecutionLevel, Grouping, LoggedPlay, PlayCategory, PlayOutcome, Plays};
pub use stats::{AggregateStats, Ratio, StatsConfig};

pub type Result<T> = std::result::Result<T, error::Error>;

/// The player a grading field is attributed to.
#[derive(
    Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Display, FromStr, Serialize, Deserialize,
)]
#[display(style = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Position {
    Qb,
    Rb,
}

pub fn load_json<T: DeserializeOwned, P: AsRef<Path>>(path: P) -> Result<T> {
    let file = std::fs::File::open(path)?;
    let value = serde_json::from_reader(std::io::BufReader::new(file))?;
    Ok(value)
}
