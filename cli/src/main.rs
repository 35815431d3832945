use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use itertools::Itertools;
use log::LevelFilter;
use qbgrade::{
    evaluate_play, fields, stats::CategoryRow, AggregateStats, PlayCategory, PlayFilter,
    PlayOutcome, Plays, Ratio, StatsConfig,
};
use simplelog::{ColorChoice, ConfigBuilder, TermLogger, TerminalMode};
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    #[command(subcommand)]
    command: Command,

    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Aggregate grading statistics for a file of logged plays
    Stats {
        #[arg(short = 'f', long = "file", value_name = "FILE")]
        file: PathBuf,

        #[command(flatten)]
        selection: Selection,

        #[arg(long)]
        big_play_yards: Option<i32>,

        #[arg(long)]
        early_down_yards: Option<i32>,

        /// Print the full statistics structure as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print the grading verdict of each play
    Evaluate {
        #[arg(short = 'f', long = "file", value_name = "FILE")]
        file: PathBuf,

        #[command(flatten)]
        selection: Selection,
    },
    /// List the grading fields collected for a category and outcome
    Fields {
        category: String,
        outcome: Option<String>,
    },
}

#[derive(clap::Args, Debug)]
struct Selection {
    #[arg(short = 'q', long = "qb")]
    qb: Option<String>,

    #[arg(short = 'b', long = "block")]
    block: Option<String>,

    #[arg(short = 's', long = "session")]
    session: Option<String>,

    #[arg(short = 'c', long = "category")]
    category: Option<String>,

    #[arg(long = "rb")]
    running_back: Option<String>,
}

impl Selection {
    fn filter(&self) -> Result<PlayFilter> {
        let mut filter = PlayFilter::new();
        if let Some(qb) = &self.qb {
            filter = filter.qb(qb);
        }
        if let Some(block) = &self.block {
            filter = filter.block(block);
        }
        if let Some(session) = &self.session {
            filter = filter.session(session);
        }
        if let Some(category) = &self.category {
            filter = filter.category(parse_category(category)?);
        }
        if let Some(rb) = &self.running_back {
            filter = filter.running_back(rb);
        }
        Ok(filter)
    }

    fn load(&self, file: &Path) -> Result<Plays> {
        let plays = Plays::load(file)?;
        log::info!("Loaded {} plays", plays.len());
        Ok(plays.filter(self.filter()?.build()))
    }
}

fn parse_category(name: &str) -> Result<PlayCategory> {
    match qbgrade::play::parse_category(name) {
        Ok(category) => Ok(category),
        Err(err) => bail!("{}. Use one of: {}", err, PlayCategory::ALL.iter().join(", ")),
    }
}

fn parse_outcome(name: &str) -> Result<PlayOutcome> {
    match qbgrade::play::parse_outcome(name) {
        Ok(outcome) => Ok(outcome),
        Err(err) => bail!("{}. Use one of: {}", err, PlayOutcome::ALL.iter().join(", ")),
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Set the default level based on verbosity
    let default_level = match args.verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };

    let config = ConfigBuilder::new().add_filter_allow_str("qbgrade").build();

    TermLogger::init(
        default_level,
        config,
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )?;

    log::trace!("Args {:#?}", args);

    match args.command {
        Command::Stats {
            file,
            selection,
            big_play_yards,
            early_down_yards,
            json,
        } => {
            let mut config = StatsConfig::standard();
            if let Some(yards) = big_play_yards {
                config.big_play_yards = yards;
            }
            if let Some(yards) = early_down_yards {
                config.early_down_gain = yards;
            }

            let stats = selection.load(&file)?.stats(config);
            if json {
                println!("{}", serde_json::to_string_pretty(&stats)?);
            } else {
                print_stats(&stats);
            }
        }
        Command::Evaluate { file, selection } => {
            for (idx, play) in selection.load(&file)?.iter().enumerate() {
                let id = play.id.clone().unwrap_or_else(|| format!("#{}", idx + 1));
                let verdict = match evaluate_play(play) {
                    Some(v) if !v.involved => "not graded",
                    Some(v) if v.executed => "executed",
                    Some(_) => "missed",
                    None => "no category",
                };
                let missing = fields::missing_fields(play);
                if missing.is_empty() {
                    println!("{}\t{}", id, verdict);
                } else {
                    println!(
                        "{}\t{}\tmissing: {}",
                        id,
                        verdict,
                        missing.iter().map(|f| f.label()).join(", ")
                    );
                }
            }
        }
        Command::Fields { category, outcome } => {
            let category = parse_category(&category)?;
            let outcomes = match outcome {
                Some(outcome) => vec![parse_outcome(&outcome)?],
                None => PlayOutcome::ALL.to_vec(),
            };
            for outcome in outcomes {
                let visible = fields::visible_fields(Some(category), Some(outcome));
                if visible.is_empty() {
                    continue;
                }
                println!("{}", outcome);
                for field in visible {
                    println!("  {:<24}{:<26}{}", field.id(), field.label(), field.position());
                }
            }
        }
    }

    Ok(())
}

fn print_stats(stats: &AggregateStats) {
    println!("Plays           {}", stats.total_plays);
    println!("Execution       {}", ratio(&stats.execution));
    println!("On schedule     {}", ratio(&stats.on_schedule));
    println!("Big plays       {}", stats.big_plays);
    println!("Great plays     {}", stats.great_plays);
    println!();

    println!(
        "{:<30}{:>7}{:>9}{:>6}{:>7}{:>6}{:>7}",
        "Category", "Plays", "Graded", "Pct", "Avg", "Best", "Worst"
    );
    for row in &stats.categories {
        print_row(row);
    }
    println!();

    let m = &stats.metrics;
    println!("Pass reads      {}", ratio(&m.pass_reads));
    println!("Ball placement  {}", ratio(&m.ball_placement));
    println!("Scrambles/runs  {}", ratio(&m.scrambles_runs));
    println!("RPO/option      {}", ratio(&m.option_reads));
    println!("Pocket presence {}", ratio(&m.pocket_presence));
    println!("Sack on QB      {}", ratio(&m.sack_on_qb));
    println!("Audibles        {}", ratio(&m.audible_hit_rate));
    println!("Audibles missed {}", m.audible_opportunities_missed);
    println!("RB vision       {}", ratio(&m.rb_vision));
    println!("RB execution    {}", ratio(&m.rb_run_execution));
}

fn print_row(row: &CategoryRow) {
    let name = row
        .category
        .as_ref()
        .map(ToString::to_string)
        .unwrap_or_else(|| "Uncategorized".to_string());
    let pct = if row.involved_count == 0 {
        "-".to_string()
    } else {
        format!("{}%", row.success_percentage)
    };
    println!(
        "{:<30}{:>7}{:>9}{:>6}{:>7.1}{:>6}{:>7}",
        name,
        row.count,
        format!("{}/{}", row.executed_count, row.involved_count),
        pct,
        row.avg_yards,
        row.best_yards,
        row.worst_yards
    );
}

fn ratio(ratio: &Ratio) -> String {
    if ratio.has_data() {
        format!("{}% ({}/{})", ratio.percentage, ratio.numerator, ratio.denominator)
    } else {
        "-".to_string()
    }
}
