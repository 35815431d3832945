use crate::play::{ExecutionLevel, LoggedPlay, PlayCategory, PlayOutcome};
use serde::{Deserialize, Serialize};

/// Whether a play counts toward QB grading, and if so whether it was executed.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Verdict {
    pub involved: bool,
    pub executed: bool,
}

impl Verdict {
    /// Outside QB grading and never a failure: penalties and called runs.
    pub const EXCLUDED: Verdict = Verdict {
        involved: false,
        executed: true,
    };

    pub const NOT_INVOLVED: Verdict = Verdict {
        involved: false,
        executed: false,
    };

    pub fn involved(executed: bool) -> Self {
        Verdict {
            involved: true,
            executed,
        }
    }
}

type Rule = fn(&LoggedPlay) -> Verdict;

fn rule_for(category: PlayCategory) -> Rule {
    match category {
        PlayCategory::Pass => pass,
        PlayCategory::RunNoRead => run_no_read,
        PlayCategory::Rpo => rpo,
        PlayCategory::DesignedQbRunWithRead => designed_run_with_read,
        PlayCategory::Screen => screen,
        PlayCategory::DesignedQbRunNoReads => designed_run_no_reads,
        PlayCategory::Pro => pass_run_option,
    }
}

/// Grades a single play.
///
/// Returns `None` when the play has no category. Missing grading values fail
/// any rule that depends on them.
pub fn evaluate_play(play: &LoggedPlay) -> Option<Verdict> {
    let grouping = play.category.as_ref()?;
    let verdict = match grouping.category() {
        Some(category) => rule_for(category)(play),
        None => unrecognized(play),
    };

    if play.is_penalty() {
        return Some(Verdict::EXCLUDED);
    }
    Some(verdict)
}

fn good(level: Option<ExecutionLevel>) -> bool {
    level.is_some_and(ExecutionLevel::is_good_or_best)
}

fn yes(flag: Option<bool>) -> bool {
    flag == Some(true)
}

// An unanswered sack_on_qb is not a clean sack.
fn not_qb_fault(sack_on_qb: Option<bool>) -> bool {
    sack_on_qb == Some(false)
}

fn pass(play: &LoggedPlay) -> Verdict {
    use PlayOutcome::*;
    let executed = match play.outcome {
        Some(Complete | CompleteTd | Incomplete) => {
            good(play.pocket_presence) && good(play.pass_read) && good(play.pass_ball_placement)
        }
        Some(Scramble | ScrambleTd) => {
            good(play.pocket_presence) && good(play.scramble_execution)
        }
        Some(Sack) => good(play.pocket_presence) && not_qb_fault(play.sack_on_qb),
        // Interceptions are never executed.
        _ => false,
    };
    Verdict::involved(executed)
}

fn run_no_read(_play: &LoggedPlay) -> Verdict {
    Verdict::EXCLUDED
}

fn rpo(play: &LoggedPlay) -> Verdict {
    use PlayOutcome::*;
    let executed = match play.outcome {
        Some(Complete | CompleteTd | Incomplete) => {
            yes(play.rpo_read_keys) && good(play.pass_ball_placement)
        }
        Some(Scramble | ScrambleTd) => good(play.scramble_execution),
        Some(Rush | RushTd) => yes(play.rpo_read_keys),
        Some(Sack) => yes(play.rpo_read_keys) && not_qb_fault(play.sack_on_qb),
        _ => false,
    };
    Verdict::involved(executed)
}

fn designed_run_with_read(play: &LoggedPlay) -> Verdict {
    use PlayOutcome::*;
    match play.outcome {
        Some(QbRush | QbRushTd) => Verdict::involved(
            yes(play.read_option_read_keys) && good(play.qb_run_execution),
        ),
        // Handoff: the QB is credited for the read alone.
        Some(Rush | RushTd) => Verdict::involved(yes(play.read_option_read_keys)),
        _ => Verdict::NOT_INVOLVED,
    }
}

fn screen(play: &LoggedPlay) -> Verdict {
    use PlayOutcome::*;
    let executed = match play.outcome {
        Some(Complete | CompleteTd | Incomplete) => good(play.pass_ball_placement),
        Some(Scramble | ScrambleTd) => good(play.scramble_execution),
        Some(Sack) => not_qb_fault(play.sack_on_qb),
        _ => false,
    };
    Verdict::involved(executed)
}

fn designed_run_no_reads(play: &LoggedPlay) -> Verdict {
    use PlayOutcome::*;
    let executed = match play.outcome {
        Some(QbRush | QbRushTd) => good(play.qb_run_execution),
        _ => false,
    };
    Verdict::involved(executed)
}

fn pass_run_option(play: &LoggedPlay) -> Verdict {
    use PlayOutcome::*;
    let executed = match play.outcome {
        Some(Complete | CompleteTd | Incomplete) => {
            yes(play.rpo_read_keys) && good(play.pass_ball_placement)
        }
        Some(Scramble | ScrambleTd) => good(play.scramble_execution),
        Some(QbRush | QbRushTd) => yes(play.rpo_read_keys) && good(play.qb_run_execution),
        Some(Rush | RushTd) => yes(play.rpo_read_keys),
        Some(Sack) => yes(play.rpo_read_keys) && not_qb_fault(play.sack_on_qb),
        _ => false,
    };
    Verdict::involved(executed)
}

fn unrecognized(play: &LoggedPlay) -> Verdict {
    Verdict::involved(play.yards_gained > 0)
}
