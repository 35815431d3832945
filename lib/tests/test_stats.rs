mod common;

use common::{graded_pass, play, situation};
use qbgrade::stats::{is_big_play, is_great_play, is_on_schedule, is_on_schedule_eligible};
use qbgrade::ExecutionLevel::{Best, Good, Poor, VeryPoor};
use qbgrade::PlayCategory::*;
use qbgrade::PlayOutcome::*;
use qbgrade::{AggregateStats, Grouping, LoggedPlay, Ratio, StatsConfig};

#[test]
fn test_empty_input_is_all_zero() {
    let stats = AggregateStats::compute(&[]);
    assert_eq!(stats.total_plays, 0);
    assert_eq!(stats.execution, Ratio::new(0, 0));
    assert_eq!(stats.execution.percentage, 0);
    assert_eq!(stats.on_schedule.percentage, 0);
    assert!(stats.categories.is_empty());
    let m = &stats.metrics;
    for ratio in [
        m.pass_reads,
        m.ball_placement,
        m.scrambles_runs,
        m.option_reads,
        m.pocket_presence,
        m.sack_on_qb,
        m.audible_hit_rate,
        m.rb_vision,
        m.rb_run_execution,
    ] {
        assert_eq!(ratio.percentage, 0);
        assert!(!ratio.has_data());
    }
    assert_eq!(m.audible_opportunities_missed, 0);
}

#[test]
fn test_execution_percentage_skips_uninvolved_plays() {
    let plays = vec![
        graded_pass(Complete, Best, Best, Best),
        graded_pass(Complete, Best, Poor, Best),
        graded_pass(Incomplete, Good, Good, Good),
        play(RunNoRead, Rush),
        graded_pass(Penalty, Best, Best, Best),
        LoggedPlay {
            category: None,
            ..play(Pass, Complete)
        },
    ];
    let stats = AggregateStats::compute(&plays);
    assert_eq!(stats.execution, Ratio::new(2, 3));
    assert_eq!(stats.execution.percentage, 67);
}

#[test]
fn test_category_counts_sum_to_play_count() {
    let plays = vec![
        play(Pass, Complete),
        play(Pass, Sack),
        play(Rpo, Rush),
        play(RunNoRead, Rush),
        LoggedPlay::new("Trick Play", Complete),
        LoggedPlay {
            category: None,
            ..play(Pass, Complete)
        },
    ];
    let stats = AggregateStats::compute(&plays);
    let total: usize = stats.categories.iter().map(|row| row.count).sum();
    assert_eq!(total, plays.len());
    assert_eq!(stats.categories.len(), 5);

    // Known categories first in declaration order, missing category last.
    assert_eq!(stats.categories[0].category, Some(Grouping::Known(RunNoRead)));
    assert_eq!(stats.categories[1].category, Some(Grouping::Known(Rpo)));
    assert_eq!(stats.categories[2].category, Some(Grouping::Known(Pass)));
    assert_eq!(
        stats.categories[3].category,
        Some(Grouping::Unrecognized("Trick Play".into()))
    );
    assert_eq!(stats.categories[4].category, None);
}

#[test]
fn test_category_row_yardage() {
    let plays = vec![
        situation(graded_pass(Complete, Best, Best, Best), 1, 10, 12),
        situation(graded_pass(Incomplete, Best, Best, Poor), 2, 10, 0),
        situation(graded_pass(Sack, Best, Best, Best), 3, 10, -7),
    ];
    let stats = AggregateStats::compute(&plays);
    let row = stats.category(Pass).expect("pass row");
    assert_eq!(row.count, 3);
    assert_eq!(row.involved_count, 3);
    assert_eq!(row.executed_count, 1);
    assert_eq!(row.success_percentage, 33);
    assert_eq!(row.avg_yards, 1.7);
    assert_eq!(row.best_yards, 12);
    assert_eq!(row.worst_yards, -7);
}

#[test]
fn test_called_run_row_has_no_graded_plays() {
    let plays = vec![
        situation(play(RunNoRead, Rush), 1, 10, 3),
        situation(play(RunNoRead, RushTd), 1, 10, 8),
    ];
    let stats = AggregateStats::compute(&plays);
    let row = stats.category(RunNoRead).expect("run row");
    assert_eq!(row.involved_count, 0);
    assert_eq!(row.success_percentage, 0);
    assert_eq!(row.avg_yards, 5.5);
}

#[test]
fn test_on_schedule_predicate() {
    let config = StatsConfig::standard();
    let check = |down: u8, distance: i32, yards: i32| {
        is_on_schedule(&situation(play(Pass, Complete), down, distance, yards), &config)
    };
    assert!(check(1, 10, 4));
    assert!(!check(2, 7, 3));
    assert!(check(3, 5, 5));
    assert!(!check(4, 2, 1));
    assert!(check(3, 15, 7));
    assert!(!check(3, 15, 5));
}

#[test]
fn test_long_yardage_is_not_eligible() {
    let config = StatsConfig::standard();
    let long = situation(play(Pass, Complete), 3, 15, 7);
    assert!(is_on_schedule(&long, &config));
    assert!(!is_on_schedule_eligible(&long, &config));
    assert!(is_on_schedule_eligible(&situation(play(Pass, Complete), 3, 12, 0), &config));
    assert!(is_on_schedule_eligible(&situation(play(Pass, Complete), 1, 25, 0), &config));
}

#[test]
fn test_on_schedule_percentage() {
    let plays = vec![
        situation(graded_pass(Complete, Best, Best, Best), 1, 10, 5),
        situation(graded_pass(Incomplete, Best, Best, Best), 2, 6, 0),
        situation(graded_pass(Complete, Best, Best, Best), 3, 4, 4),
        // Long yardage: left out even though it gained enough.
        situation(graded_pass(Complete, Best, Best, Best), 3, 15, 7),
        // Not involved.
        situation(play(RunNoRead, Rush), 1, 10, 9),
        situation(graded_pass(Penalty, Best, Best, Best), 1, 10, 15),
    ];
    let stats = AggregateStats::compute(&plays);
    assert_eq!(stats.on_schedule, Ratio::new(2, 3));
}

#[test]
fn test_big_and_great_plays() {
    let config = StatsConfig::standard();
    assert!(is_big_play(&situation(play(Pass, Complete), 1, 10, 10), &config));
    assert!(is_big_play(&situation(play(Pro, ScrambleTd), 1, 10, 40), &config));
    assert!(!is_big_play(&situation(play(Rpo, Rush), 1, 10, 30), &config));
    assert!(!is_big_play(&situation(play(Pass, Complete), 1, 10, 9), &config));

    let mut great = play(DesignedQbRunNoReads, QbRush);
    great.qb_run_execution = Some(Best);
    assert!(is_great_play(&great));
    great.qb_run_execution = Some(Good);
    assert!(!is_great_play(&great));

    let plays = vec![
        situation(graded_pass(Complete, Good, Good, Best), 1, 10, 25),
        situation(graded_pass(Complete, Good, Good, Good), 1, 10, 11),
        situation(play(RunNoRead, Rush), 1, 10, 50),
    ];
    let stats = AggregateStats::compute(&plays);
    assert_eq!(stats.big_plays, 2);
    assert_eq!(stats.great_plays, 1);

    let strict = StatsConfig {
        big_play_yards: 20,
        ..StatsConfig::standard()
    };
    assert_eq!(AggregateStats::compute_with(&plays, strict).big_plays, 1);
}

#[test]
fn test_passing_sub_metrics() {
    let mut rpo_throw = play(Rpo, Complete);
    rpo_throw.pass_ball_placement = Some(Good);
    rpo_throw.rpo_read_keys = Some(true);

    let plays = vec![
        graded_pass(Complete, Good, Good, Good),
        graded_pass(Interception, Poor, VeryPoor, Good),
        graded_pass(Sack, Best, Best, Best),
        rpo_throw,
        graded_pass(Penalty, Best, Best, Best),
    ];
    let m = AggregateStats::compute(&plays).metrics;

    // Pass reads: throws by Pass plays only, penalty grades never count.
    assert_eq!(m.pass_reads, Ratio::new(2, 2));
    // Placement credit is counted on every play, not only throws.
    assert_eq!(m.ball_placement, Ratio::new(4, 3));
    assert_eq!(m.pocket_presence, Ratio::new(2, 3));
}

#[test]
fn test_run_and_read_sub_metrics() {
    let mut keep = play(DesignedQbRunWithRead, QbRush);
    keep.read_option_read_keys = Some(true);
    keep.qb_run_execution = Some(Best);

    let mut scramble = play(Pass, Scramble);
    scramble.scramble_execution = Some(Poor);

    let mut give = play(Rpo, Rush);
    give.rpo_read_keys = Some(true);
    give.rb_vision = Some(Good);
    give.rb_run_execution = Some(Poor);

    let mut missed = play(Rpo, Rush);
    missed.rpo_read_keys = Some(false);

    let plays = vec![keep, scramble, give, missed, play(Rpo, Penalty)];
    let m = AggregateStats::compute(&plays).metrics;

    assert_eq!(m.scrambles_runs, Ratio::new(1, 2));
    assert_eq!(m.option_reads, Ratio::new(2, 3));
    assert_eq!(m.option_reads.percentage, 67);
    assert_eq!(m.rb_vision, Ratio::new(1, 2));
    assert_eq!(m.rb_run_execution, Ratio::new(0, 2));
}

#[test]
fn test_sack_and_audible_metrics() {
    let mut fault = play(Pass, Sack);
    fault.sack_on_qb = Some(true);
    fault.audible_called = Some(true);
    fault.audible_success = Some(true);

    let mut clean = play(Screen, Sack);
    clean.sack_on_qb = Some(false);
    clean.audible_called = Some(true);
    clean.audible_success = Some(false);

    let mut unknown = play(Pro, Sack);
    unknown.audible_opportunity_missed = Some(true);

    let m = AggregateStats::compute(&[fault, clean, unknown]).metrics;
    assert_eq!(m.sack_on_qb, Ratio::new(1, 3));
    assert_eq!(m.audible_hit_rate, Ratio::new(1, 2));
    assert_eq!(m.audible_hit_rate.percentage, 50);
    assert_eq!(m.audible_opportunities_missed, 1);
}

#[test]
fn test_missing_down_is_left_out_of_on_schedule() {
    let config = StatsConfig::standard();
    let mut no_down = play(Pass, Complete);
    no_down.yards_gained = 15;
    no_down.distance = 10;
    assert_eq!(no_down.down, None);
    assert!(!is_on_schedule_eligible(&no_down, &config));
    assert!(!is_on_schedule(&no_down, &config));

    let mut graded = graded_pass(Complete, Good, Good, Good);
    graded.yards_gained = 15;
    let stats = AggregateStats::compute(&[graded.clone()]);
    assert_eq!(stats.execution, Ratio::new(1, 1));
    assert_eq!(stats.on_schedule, Ratio::new(0, 0));

    let stats = AggregateStats::compute(&[graded.clone(), situation(graded, 1, 10, 5)]);
    assert_eq!(stats.execution, Ratio::new(2, 2));
    assert_eq!(stats.on_schedule, Ratio::new(1, 1));
}

#[test]
fn test_down_is_optional_in_json() {
    let absent: LoggedPlay =
        serde_json::from_str(r#"{"category": "Pass", "outcome": "Sack"}"#).unwrap();
    assert_eq!(absent.down, None);

    let recorded: LoggedPlay =
        serde_json::from_str(r#"{"category": "Pass", "outcome": "Sack", "down": 3}"#).unwrap();
    assert_eq!(recorded.down, Some(3));
}

#[test]
fn test_blank_category_gets_no_row_of_its_own() {
    let blank: LoggedPlay =
        serde_json::from_str(r#"{"category": "", "outcome": "Complete", "yards_gained": 5}"#)
            .unwrap();
    let stats = AggregateStats::compute(&[blank, play(Screen, Complete)]);
    assert_eq!(stats.execution, Ratio::new(0, 1));
    let names: Vec<Option<Grouping>> =
        stats.categories.iter().map(|r| r.category.clone()).collect();
    assert_eq!(names, vec![Some(Grouping::Known(Screen)), None]);
}
