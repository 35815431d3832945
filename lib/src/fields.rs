use crate::play::{LoggedPlay, PlayCategory, PlayOutcome};
use crate::Position;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A grading input collected on the play logging form.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GradingField {
    PocketPresence,
    PassRead,
    PassBallPlacement,
    ScrambleExecution,
    QbRun,
    RbIn,
    RbVision,
    RbRunExecution,
    RpoReadKeys,
    ReadOptionReadKeys,
    SackOnQb,
}

impl GradingField {
    pub const ALL: [GradingField; 11] = [
        GradingField::PocketPresence,
        GradingField::PassRead,
        GradingField::PassBallPlacement,
        GradingField::ScrambleExecution,
        GradingField::QbRun,
        GradingField::RbIn,
        GradingField::RbVision,
        GradingField::RbRunExecution,
        GradingField::RpoReadKeys,
        GradingField::ReadOptionReadKeys,
        GradingField::SackOnQb,
    ];

    pub fn id(self) -> &'static str {
        match self {
            GradingField::PocketPresence => "pocket_presence",
            GradingField::PassRead => "pass_read",
            GradingField::PassBallPlacement => "pass_ball_placement",
            GradingField::ScrambleExecution => "scramble_execution",
            GradingField::QbRun => "qb_run",
            GradingField::RbIn => "rb_in",
            GradingField::RbVision => "rb_vision",
            GradingField::RbRunExecution => "rb_run_execution",
            GradingField::RpoReadKeys => "rpo_read_keys",
            GradingField::ReadOptionReadKeys => "read_option_read_keys",
            GradingField::SackOnQb => "sack_on_qb",
        }
    }

    pub fn label(self) -> &'static str {
        readable_field_name(self.id())
    }

    pub fn position(self) -> Position {
        match self {
            GradingField::RbIn | GradingField::RbVision | GradingField::RbRunExecution => {
                Position::Rb
            }
            _ => Position::Qb,
        }
    }
}

impl fmt::Display for GradingField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for GradingField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        GradingField::ALL
            .into_iter()
            .find(|field| field.id() == s)
            .ok_or_else(|| format!("Unknown grading field: {s}"))
    }
}

static READABLE_NAMES: &[(&str, &str)] = &[
    ("pocket_presence", "Pocket Presence"),
    ("pass_read", "Pass Read"),
    ("pass_ball_placement", "Ball Placement"),
    ("scramble_execution", "Scramble Execution"),
    ("qb_run", "QB Run Execution"),
    ("rb_in", "RB In"),
    ("rb_vision", "RB Vision"),
    ("rb_run_execution", "RB Run Execution"),
    ("rpo_read_keys", "RPO Read Keys"),
    ("read_option_read_keys", "Read Option Read Keys"),
    ("sack_on_qb", "Sack on QB"),
    ("audible_opportunity_missed", "Audible Opportunity Missed"),
    ("audible_called", "Audible Called"),
    ("audible_success", "Audible Success"),
];

/// Human-readable label for a field id. Unknown ids are their own label.
pub fn readable_field_name(field_id: &str) -> &str {
    READABLE_NAMES
        .iter()
        .find(|(id, _)| *id == field_id)
        .map(|(_, label)| *label)
        .unwrap_or(field_id)
}

/// Grading fields that apply to a category and outcome, in display order.
///
/// Combinations without an entry (including an unset category or outcome)
/// have no applicable fields.
pub fn visible_fields(
    category: Option<PlayCategory>,
    outcome: Option<PlayOutcome>,
) -> &'static [GradingField] {
    use GradingField::*;
    use PlayCategory as C;
    use PlayOutcome as O;

    let (Some(category), Some(outcome)) = (category, outcome) else {
        return &[];
    };

    match (category, outcome) {
        (C::Pass, O::Complete | O::CompleteTd | O::Incomplete | O::Interception) => {
            &[PocketPresence, PassRead, PassBallPlacement]
        }
        (C::Pass, O::Scramble | O::ScrambleTd) => &[PocketPresence, ScrambleExecution],
        (C::Pass, O::Sack) => &[PocketPresence, SackOnQb],

        (C::RunNoRead, O::Rush | O::RushTd) => &[RbIn, RbVision, RbRunExecution],

        (C::Rpo, O::Complete | O::CompleteTd | O::Incomplete | O::Interception) => {
            &[RpoReadKeys, PassBallPlacement]
        }
        (C::Rpo, O::Scramble | O::ScrambleTd) => &[RpoReadKeys, ScrambleExecution],
        (C::Rpo, O::Rush | O::RushTd) => &[RpoReadKeys, RbIn, RbVision, RbRunExecution],
        (C::Rpo, O::Sack) => &[RpoReadKeys, SackOnQb],

        (C::Screen, O::Complete | O::CompleteTd | O::Incomplete | O::Interception) => {
            &[PassBallPlacement]
        }
        (C::Screen, O::Scramble | O::ScrambleTd) => &[ScrambleExecution],
        (C::Screen, O::Sack) => &[SackOnQb],

        (C::DesignedQbRunNoReads, O::QbRush | O::QbRushTd) => &[QbRun],

        (C::DesignedQbRunWithRead, O::QbRush | O::QbRushTd) => &[ReadOptionReadKeys, QbRun],
        (C::DesignedQbRunWithRead, O::Rush | O::RushTd) => {
            &[ReadOptionReadKeys, RbIn, RbVision, RbRunExecution]
        }

        (C::Pro, O::Complete | O::CompleteTd | O::Incomplete | O::Interception) => {
            &[RpoReadKeys, PassBallPlacement]
        }
        (C::Pro, O::Scramble | O::ScrambleTd) => &[RpoReadKeys, ScrambleExecution],
        (C::Pro, O::QbRush | O::QbRushTd) => &[RpoReadKeys, QbRun],
        (C::Pro, O::Rush | O::RushTd) => &[RpoReadKeys, RbIn, RbVision, RbRunExecution],
        (C::Pro, O::Sack) => &[RpoReadKeys, SackOnQb],

        _ => &[],
    }
}

/// String form of [`visible_fields`] for callers holding raw form values.
/// Empty or unrecognized names yield no fields.
pub fn visible_field_ids(category: &str, outcome: &str) -> Vec<&'static str> {
    visible_fields(category.parse().ok(), outcome.parse().ok())
        .iter()
        .map(|field| field.id())
        .collect()
}

/// Visible fields the play has no value for yet.
pub fn missing_fields(play: &LoggedPlay) -> Vec<GradingField> {
    visible_fields(play.known_category(), play.outcome)
        .iter()
        .copied()
        .filter(|field| !play.has_value(*field))
        .collect()
}

impl LoggedPlay {
    pub fn has_value(&self, field: GradingField) -> bool {
        match field {
            GradingField::PocketPresence => self.pocket_presence.is_some(),
            GradingField::PassRead => self.pass_read.is_some(),
            GradingField::PassBallPlacement => self.pass_ball_placement.is_some(),
            GradingField::ScrambleExecution => self.scramble_execution.is_some(),
            GradingField::QbRun => self.qb_run_execution.is_some(),
            GradingField::RbIn => self.rb_in.is_some(),
            GradingField::RbVision => self.rb_vision.is_some(),
            GradingField::RbRunExecution => self.rb_run_execution.is_some(),
            GradingField::RpoReadKeys => self.rpo_read_keys.is_some(),
            GradingField::ReadOptionReadKeys => self.read_option_read_keys.is_some(),
            GradingField::SackOnQb => self.sack_on_qb.is_some(),
        }
    }

    pub fn clear_field(&mut self, field: GradingField) {
        match field {
            GradingField::PocketPresence => self.pocket_presence = None,
            GradingField::PassRead => self.pass_read = None,
            GradingField::PassBallPlacement => self.pass_ball_placement = None,
            GradingField::ScrambleExecution => self.scramble_execution = None,
            GradingField::QbRun => self.qb_run_execution = None,
            GradingField::RbIn => self.rb_in = None,
            GradingField::RbVision => self.rb_vision = None,
            GradingField::RbRunExecution => self.rb_run_execution = None,
            GradingField::RpoReadKeys => self.rpo_read_keys = None,
            GradingField::ReadOptionReadKeys => self.read_option_read_keys = None,
            GradingField::SackOnQb => self.sack_on_qb = None,
        }
    }

    /// Drops grading values that do not apply to the current category and outcome.
    pub fn clear_hidden_fields(&mut self) {
        let visible = visible_fields(self.known_category(), self.outcome);
        for field in GradingField::ALL {
            if !visible.contains(&field) {
                self.clear_field(field);
            }
        }
    }

    /// Changes the category. All grading values are reset when it differs.
    pub fn set_category(&mut self, category: Option<crate::play::Grouping>) {
        if self.category == category {
            return;
        }
        for field in GradingField::ALL {
            self.clear_field(field);
        }
        self.category = category;
    }
}
