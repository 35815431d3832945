//! Shared test helpers.

#![allow(dead_code)]

use qbgrade::{ExecutionLevel, LoggedPlay, PlayCategory, PlayOutcome};

pub fn play(category: PlayCategory, outcome: PlayOutcome) -> LoggedPlay {
    LoggedPlay::new(category, outcome)
}

/// A pass play with all three passing grades set.
pub fn graded_pass(
    outcome: PlayOutcome,
    pocket: ExecutionLevel,
    read: ExecutionLevel,
    placement: ExecutionLevel,
) -> LoggedPlay {
    LoggedPlay {
        pocket_presence: Some(pocket),
        pass_read: Some(read),
        pass_ball_placement: Some(placement),
        ..play(PlayCategory::Pass, outcome)
    }
}

pub fn situation(mut play: LoggedPlay, down: u8, distance: i32, yards: i32) -> LoggedPlay {
    play.down = Some(down);
    play.distance = distance;
    play.yards_gained = yards;
    play
}
