use crate::evaluate::{evaluate_play, Verdict};
use crate::play::{ExecutionLevel, Grouping, LoggedPlay, PlayCategory, PlayOutcome};
use itertools::Itertools;
use serde::{Deserialize, Serialize};

/// Down-and-distance thresholds used by the aggregator.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StatsConfig {
    /// Gain that keeps a 1st or 2nd down on schedule.
    pub early_down_gain: i32,
    /// 3rd/4th downs longer than this are long yardage.
    pub long_distance: i32,
    /// Gain that keeps a long-yardage 3rd/4th down on schedule.
    pub long_distance_gain: i32,
    pub big_play_yards: i32,
}

impl StatsConfig {
    pub fn standard() -> Self {
        Self {
            early_down_gain: 4,
            long_distance: 12,
            long_distance_gain: 6,
            big_play_yards: 10,
        }
    }
}

impl Default for StatsConfig {
    fn default() -> Self {
        Self::standard()
    }
}

/// A count-over-count metric. `percentage` is 0 when there is no denominator;
/// use [`Ratio::has_data`] to tell that apart from a true zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ratio {
    pub numerator: usize,
    pub denominator: usize,
    pub percentage: u32,
}

impl Ratio {
    pub fn new(numerator: usize, denominator: usize) -> Self {
        Self {
            numerator,
            denominator,
            percentage: percentage(numerator, denominator),
        }
    }

    fn count<'a, I, N, D>(plays: I, numerator: N, denominator: D) -> Self
    where
        I: IntoIterator<Item = &'a LoggedPlay>,
        N: Fn(&LoggedPlay) -> bool,
        D: Fn(&LoggedPlay) -> bool,
    {
        let (num, den) = plays.into_iter().fold((0, 0), |(num, den), play| {
            (
                num + usize::from(numerator(play)),
                den + usize::from(denominator(play)),
            )
        });
        Self::new(num, den)
    }

    pub fn has_data(&self) -> bool {
        self.denominator > 0
    }
}

pub fn percentage(numerator: usize, denominator: usize) -> u32 {
    if denominator == 0 {
        return 0;
    }
    (numerator as f64 * 100.0 / denominator as f64).round() as u32
}

// Halves round up, so -2.25 becomes -2.2.
fn round_tenths(value: f64) -> f64 {
    (value * 10.0 + 0.5).floor() / 10.0
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryRow {
    /// `None` collects plays logged without a category.
    pub category: Option<Grouping>,
    pub count: usize,
    pub involved_count: usize,
    pub executed_count: usize,
    pub success_percentage: u32,
    pub avg_yards: f64,
    pub best_yards: i32,
    pub worst_yards: i32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SubMetrics {
    pub pass_reads: Ratio,
    pub ball_placement: Ratio,
    pub scrambles_runs: Ratio,
    pub option_reads: Ratio,
    pub pocket_presence: Ratio,
    /// Share of sacks that were the QB's fault. Lower is better.
    pub sack_on_qb: Ratio,
    pub audible_hit_rate: Ratio,
    pub audible_opportunities_missed: usize,
    pub rb_vision: Ratio,
    pub rb_run_execution: Ratio,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AggregateStats {
    pub total_plays: usize,
    pub execution: Ratio,
    pub on_schedule: Ratio,
    pub big_plays: usize,
    pub great_plays: usize,
    pub categories: Vec<CategoryRow>,
    pub metrics: SubMetrics,
}

impl AggregateStats {
    pub fn compute(plays: &[LoggedPlay]) -> Self {
        Self::compute_with(plays, StatsConfig::standard())
    }

    pub fn compute_with(plays: &[LoggedPlay], config: StatsConfig) -> Self {
        log::trace!("stats::compute_with {:?}", config);
        let graded: Vec<(&LoggedPlay, Option<Verdict>)> =
            plays.iter().map(|play| (play, evaluate_play(play))).collect();

        let counted = |play: &LoggedPlay, verdict: Option<Verdict>| {
            is_involved(verdict) && !play.is_penalty()
        };

        let execution = Ratio::new(
            graded
                .iter()
                .filter(|(_, verdict)| is_executed(*verdict))
                .count(),
            graded
                .iter()
                .filter(|(play, verdict)| counted(*play, *verdict))
                .count(),
        );

        let eligible: Vec<&LoggedPlay> = graded
            .iter()
            .filter(|(play, verdict)| {
                counted(*play, *verdict) && is_on_schedule_eligible(play, &config)
            })
            .map(|(play, _)| *play)
            .collect();
        let on_schedule = Ratio::new(
            eligible
                .iter()
                .filter(|play| is_on_schedule(play, &config))
                .count(),
            eligible.len(),
        );

        let stats = Self {
            total_plays: plays.len(),
            execution,
            on_schedule,
            big_plays: plays.iter().filter(|p| is_big_play(p, &config)).count(),
            great_plays: plays.iter().filter(|p| is_great_play(p)).count(),
            categories: category_rows(&graded),
            metrics: SubMetrics::compute(plays),
        };
        log::debug!(
            "{} plays, {} categories, execution {}/{}",
            stats.total_plays,
            stats.categories.len(),
            stats.execution.numerator,
            stats.execution.denominator
        );
        stats
    }

    pub fn category(&self, category: PlayCategory) -> Option<&CategoryRow> {
        self.categories
            .iter()
            .find(|row| row.category == Some(Grouping::Known(category)))
    }
}

fn is_involved(verdict: Option<Verdict>) -> bool {
    verdict.is_some_and(|v| v.involved)
}

fn is_executed(verdict: Option<Verdict>) -> bool {
    verdict.is_some_and(|v| v.involved && v.executed)
}

fn category_rows(graded: &[(&LoggedPlay, Option<Verdict>)]) -> Vec<CategoryRow> {
    graded
        .iter()
        .into_group_map_by(|(play, _)| play.category.clone())
        .into_iter()
        .map(|(category, group)| {
            let count = group.len();
            let involved_count = group.iter().filter(|(_, v)| is_involved(*v)).count();
            let executed_count = group.iter().filter(|(_, v)| is_executed(*v)).count();
            let yards = group.iter().map(|(play, _)| play.yards_gained);
            let total: i64 = yards.clone().map(i64::from).sum();
            let row = CategoryRow {
                count,
                involved_count,
                executed_count,
                success_percentage: percentage(executed_count, involved_count),
                avg_yards: round_tenths(total as f64 / count as f64),
                best_yards: yards.clone().max().unwrap_or_default(),
                worst_yards: yards.min().unwrap_or_default(),
                category,
            };
            log::debug!(
                "{} plays in category {:?}",
                row.count,
                row.category.as_ref().map(ToString::to_string)
            );
            row
        })
        .sorted_by_key(|row| (row.category.is_none(), row.category.clone()))
        .collect()
}

/// Whether a play stayed ahead of the chains.
pub fn is_on_schedule(play: &LoggedPlay, config: &StatsConfig) -> bool {
    match play.down {
        Some(1 | 2) => play.yards_gained >= config.early_down_gain,
        Some(3 | 4) if play.distance <= config.long_distance => {
            play.yards_gained >= play.distance
        }
        Some(3 | 4) => play.yards_gained >= config.long_distance_gain,
        _ => false,
    }
}

/// Long-yardage 3rd and 4th downs, and plays without a recorded down, are
/// left out of the on-schedule rate.
pub fn is_on_schedule_eligible(play: &LoggedPlay, config: &StatsConfig) -> bool {
    match play.down {
        Some(1 | 2) => true,
        Some(3 | 4) => play.distance <= config.long_distance,
        _ => false,
    }
}

pub fn is_big_play(play: &LoggedPlay, config: &StatsConfig) -> bool {
    use PlayOutcome::*;
    matches!(
        play.outcome,
        Some(Complete | CompleteTd | QbRush | QbRushTd | Scramble | ScrambleTd)
    ) && play.yards_gained >= config.big_play_yards
}

pub fn is_great_play(play: &LoggedPlay) -> bool {
    let best = Some(ExecutionLevel::Best);
    play.pass_ball_placement == best
        || play.qb_run_execution == best
        || play.scramble_execution == best
}

fn good(level: Option<ExecutionLevel>) -> bool {
    level.is_some_and(ExecutionLevel::is_good_or_best)
}

fn is_throw(play: &LoggedPlay) -> bool {
    use PlayOutcome::*;
    matches!(
        play.outcome,
        Some(Complete | Incomplete | Interception | CompleteTd)
    )
}

impl SubMetrics {
    pub fn compute(plays: &[LoggedPlay]) -> Self {
        use PlayOutcome::*;
        let category_is = |play: &LoggedPlay, category| play.known_category() == Some(category);

        Self {
            pass_reads: Ratio::count(
                plays,
                |p| good(p.pass_read) && !p.is_penalty(),
                |p| is_throw(p) && category_is(p, PlayCategory::Pass),
            ),
            ball_placement: Ratio::count(
                plays,
                |p| good(p.pass_ball_placement) && !p.is_penalty(),
                is_throw,
            ),
            scrambles_runs: Ratio::count(
                plays,
                |p| good(p.qb_run_execution) || (good(p.scramble_execution) && !p.is_penalty()),
                |p| matches!(p.outcome, Some(Scramble | ScrambleTd | QbRush | QbRushTd)),
            ),
            option_reads: Ratio::count(
                plays,
                |p| p.read_option_read_keys == Some(true)
                    || (p.rpo_read_keys == Some(true) && !p.is_penalty()),
                |p| {
                    matches!(
                        p.known_category(),
                        Some(PlayCategory::Rpo | PlayCategory::DesignedQbRunWithRead)
                    ) && !p.is_penalty()
                },
            ),
            pocket_presence: Ratio::count(
                plays,
                |p| good(p.pocket_presence) && !p.is_penalty(),
                |p| category_is(p, PlayCategory::Pass) && !p.is_penalty(),
            ),
            sack_on_qb: Ratio::count(
                plays,
                |p| p.outcome == Some(Sack) && p.sack_on_qb == Some(true),
                |p| p.outcome == Some(Sack),
            ),
            audible_hit_rate: Ratio::count(
                plays,
                |p| p.audible_success == Some(true),
                |p| p.audible_called == Some(true),
            ),
            audible_opportunities_missed: plays
                .iter()
                .filter(|p| p.audible_opportunity_missed == Some(true))
                .count(),
            rb_vision: Ratio::count(
                plays,
                |p| good(p.rb_vision) && !p.is_penalty(),
                |p| matches!(p.outcome, Some(Rush | RushTd)),
            ),
            rb_run_execution: Ratio::count(
                plays,
                |p| good(p.rb_run_execution) && !p.is_penalty(),
                |p| matches!(p.outcome, Some(Rush | RushTd)),
            ),
        }
    }
}
