mod logging;
mod table;
mod tui;

use std::collections::BTreeMap;
use std::path::PathBuf;

use anyhow::{anyhow, Result};
use chrono::{Local, NaiveDate};
use clap::Parser;
use serde_json::json;
use tracing::{debug, info};
use periodism_core::{
    get_date_format, get_date_type_date_str, get_single_season_display, get_week_map,
    get_week_start_and_end_date, get_week_start_and_end_display, parse_human_date, summarize,
    ConfigRepository, DayType, FileConfigRepository, OutputFormat, PeriodType,
    DATE_STRING_FORMAT_MAP,
};

#[derive(Parser)]
#[command(name = "periodism")]
#[command(about = "Week, quarter and period labels for reporting views", long_about = None)]
struct Cli {
    /// Log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Print JSON regardless of the configured output
    #[arg(long, global = true)]
    json: bool,

    /// Directory holding config.json (default: ~/.periodism)
    #[arg(long, global = true)]
    config_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Show the week containing DATE (usage: week 2023-11-29, week +1w)
    Week { date: Option<String> },
    /// Show the Monday and Sunday of the week containing DATE
    Range { date: Option<String> },
    /// Show the quarter of DATE, e.g. 2023年第4季
    Season { date: Option<String> },
    /// Render DATE with a pattern (usage: format "YYYY-[W]ww" tom)
    Format {
        pattern: String,
        date: Option<String>,
    },
    /// Render DATE for a period type (Daily, Weekly, Monthly, SingleQuarter, FullYearQuarters, EachYear)
    Period {
        period: Option<String>,
        date: Option<String>,
    },
    /// Show every label for DATE
    Summary { date: Option<String> },
    /// List the period type patterns
    Patterns,
    /// Show or change the configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
    /// Browse weeks interactively
    Tui { date: Option<String> },
}

#[derive(clap::Subcommand)]
enum ConfigAction {
    /// Print the current configuration
    Show,
    /// Set the period type used when `period` gets none
    SetPeriod { period: String },
    /// Set the default output (text or json)
    SetOutput { format: String },
}

fn resolve_date(input: Option<&str>) -> Result<NaiveDate> {
    match input {
        Some(s) => parse_human_date(s),
        None => Ok(Local::now().date_naive()),
    }
}

// Days as an array, Monday first.
fn week_json(display: &str, week: &BTreeMap<DayType, NaiveDate>) -> serde_json::Value {
    let days: Vec<_> = week
        .iter()
        .map(|(day, date)| json!({ "day": day, "date": date }))
        .collect();
    json!({ "display": display, "days": days })
}

fn print_json(value: &serde_json::Value) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let repo = FileConfigRepository::new(cli.config_dir.clone())?;
    let config = repo.load()?;
    let as_json = cli.json || config.output == OutputFormat::Json;
    debug!(path = %repo.path().display(), as_json, "configuration resolved");

    match cli.command {
        Some(Commands::Week { date }) => {
            let date = resolve_date(date.as_deref())?;
            let week = get_week_map(Some(date));
            let display = get_week_start_and_end_display(Some(date));
            if as_json {
                print_json(&week_json(&display, &week))?;
            } else {
                println!("{}", display);
                println!("{}", table::week_table(&week, date));
            }
        },
        Some(Commands::Range { date }) => {
            let date = resolve_date(date.as_deref())?;
            let (monday, sunday) = get_week_start_and_end_date(Some(date))
                .ok_or_else(|| anyhow!("Week of {} is out of range", date))?;
            if as_json {
                print_json(&json!({ "start": monday, "end": sunday }))?;
            } else {
                println!("{} ~ {}", monday, sunday);
            }
        },
        Some(Commands::Season { date }) => {
            let date = resolve_date(date.as_deref())?;
            let season = get_single_season_display(Some(date));
            if as_json {
                print_json(&json!({ "season": season }))?;
            } else {
                println!("{}", season);
            }
        },
        Some(Commands::Format { pattern, date }) => {
            let date = resolve_date(date.as_deref())?;
            let label = get_date_format(Some(date), &pattern);
            if as_json {
                print_json(&json!({ "pattern": pattern, "label": label }))?;
            } else {
                println!("{}", label);
            }
        },
        Some(Commands::Period { period, date }) => {
            let date = resolve_date(date.as_deref())?;
            let period = period.unwrap_or_else(|| config.default_period.to_string());
            let label = get_date_type_date_str(&period, Some(date));
            if as_json {
                print_json(&json!({ "period": period, "label": label }))?;
            } else {
                println!("{}", label);
            }
        },
        Some(Commands::Summary { date }) => {
            let date = resolve_date(date.as_deref())?;
            let summary = summarize(Some(date))
                .ok_or_else(|| anyhow!("Week of {} is out of range", date))?;
            if as_json {
                println!("{}", serde_json::to_string_pretty(&summary)?);
            } else {
                println!("{}  {}", summary.week_display, summary.season_display);
                println!("{}", table::summary_table(&summary));
            }
        },
        Some(Commands::Patterns) => {
            if as_json {
                let entries: Vec<_> = DATE_STRING_FORMAT_MAP
                    .iter()
                    .map(|(period, pattern)| json!({ "period": period, "pattern": pattern }))
                    .collect();
                print_json(&json!(entries))?;
            } else {
                println!("{}", table::patterns_table());
            }
        },
        Some(Commands::Config { action }) => match action {
            ConfigAction::Show => {
                if !as_json {
                    println!("# {}", repo.path().display());
                }
                println!("{}", serde_json::to_string_pretty(&config)?);
            },
            ConfigAction::SetPeriod { period } => {
                let mut updated = config.clone();
                updated.default_period = period.parse::<PeriodType>()?;
                repo.save(&updated)?;
                info!(period = %updated.default_period, "default period updated");
                println!("Default period: {}", updated.default_period);
            },
            ConfigAction::SetOutput { format } => {
                let mut updated = config.clone();
                updated.output = format.parse::<OutputFormat>()?;
                repo.save(&updated)?;
                info!(output = ?updated.output, "default output updated");
                println!("Default output: {:?}", updated.output);
            },
        },
        Some(Commands::Tui { date }) => {
            tui::run(resolve_date(date.as_deref())?)?;
        },
        None => {
            tui::run(Local::now().date_naive())?;
        }
    }
    Ok(())
}
