//! `calview` CLI: render month grids and week layouts, validate and commit
//! events from the command line.
//!
//! ## Usage
//!
//! ```sh
//! # Month grid with per-day event counts
//! calview month --date 2024-01-15 -i events.json
//!
//! # Month cells as JSON, at most 2 events listed per cell
//! echo '{"max_visible_per_cell": 2}' > view.json
//! calview --config view.json month --date 2024-01-15 -i events.json --json
//!
//! # Positioned events for each day of the week
//! calview week --date 2024-01-15 -i events.json
//!
//! # Validate a candidate event (stdin → report)
//! echo '{"title":"","start":"2024-01-15T10:00:00","end":"2024-01-15T09:00:00"}' | calview validate
//!
//! # Create, update, delete against an events file
//! calview add --events events.json -i draft.json
//! calview update --events events.json --id evt-1 -i patch.json
//! calview delete --events events.json --id evt-1
//! ```

use std::io::{self, Read};
use std::path::Path;
use std::process;

use anyhow::{Context, Result};
use calendar_engine::{
    build_month_cells, grid, lay_out_week, summarize_cell, validate, CalendarConfig, CellSummary,
    CommitOutcome, Event, EventDraft, EventPatch, EventStore,
};
use chrono::{Datelike, Local, NaiveDate};
use clap::{Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "calview",
    version,
    about = "Calendar grid, layout, and event validation CLI"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// JSON view configuration (slot height, grouping, layout, ...)
    #[arg(long, global = true)]
    config: Option<String>,

    /// Log debug output to stderr (overrides RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the month grid containing a date
    Month {
        /// Reference date (defaults to today)
        #[arg(long)]
        date: Option<NaiveDate>,
        /// JSON array of events (no events if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Print cell summaries as JSON instead of a text grid
        #[arg(long)]
        json: bool,
    },
    /// Print the positioned events of each day in the week containing a date
    Week {
        /// Reference date (defaults to today)
        #[arg(long)]
        date: Option<NaiveDate>,
        /// JSON array of events (no events if omitted)
        #[arg(short, long)]
        input: Option<String>,
    },
    /// Validate a candidate event
    Validate {
        /// Candidate event JSON (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
    },
    /// Create an event in an events file
    Add {
        /// Events file to update (created if missing)
        #[arg(long)]
        events: String,
        /// Draft event JSON (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
    },
    /// Update an event in an events file
    Update {
        /// Events file to update
        #[arg(long)]
        events: String,
        /// Id of the event to change
        #[arg(long)]
        id: String,
        /// Patch JSON with the fields to replace (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
    },
    /// Delete an event from an events file
    Delete {
        /// Events file to update
        #[arg(long)]
        events: String,
        /// Id of the event to remove
        #[arg(long)]
        id: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = load_config(cli.config.as_deref())?;
    debug!(?config, "loaded configuration");

    match cli.command {
        Commands::Month { date, input, json } => {
            let reference = date.unwrap_or_else(today);
            let events = load_events(input.as_deref())?;
            let summaries: Vec<_> = build_month_cells(reference)
                .into_iter()
                .map(|cell| summarize_cell(&events, cell, config.max_visible_per_cell))
                .collect();

            if json {
                println!("{}", serde_json::to_string_pretty(&summaries)?);
            } else {
                print!("{}", render_month(reference, &summaries));
            }
        }
        Commands::Week { date, input } => {
            let reference = date.unwrap_or_else(today);
            let events = load_events(input.as_deref())?;
            let week = lay_out_week(&events, reference, &config.layout());
            println!("{}", serde_json::to_string_pretty(&week)?);
        }
        Commands::Validate { input } => {
            let raw = read_input(input.as_deref())?;
            let draft: EventDraft =
                serde_json::from_str(&raw).context("Failed to parse candidate event JSON")?;
            let report = validate(&draft);
            println!("{}", serde_json::to_string_pretty(&report)?);
            if !report.valid {
                process::exit(1);
            }
        }
        Commands::Add { events, input } => {
            let raw = read_input(input.as_deref())?;
            let draft: EventDraft =
                serde_json::from_str(&raw).context("Failed to parse draft event JSON")?;
            commit(&events, |store| store.create(draft))?;
        }
        Commands::Update { events, id, input } => {
            let raw = read_input(input.as_deref())?;
            let patch: EventPatch =
                serde_json::from_str(&raw).context("Failed to parse event patch JSON")?;
            commit(&events, |store| store.update(&id, &patch))?;
        }
        Commands::Delete { events, id } => {
            commit(&events, |store| store.delete(&id))?;
        }
    }

    Ok(())
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    // A subscriber may already be installed when embedded; keep the existing one.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init();
}

fn load_config(path: Option<&str>) -> Result<CalendarConfig> {
    match path {
        Some(path) => {
            let raw = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config file: {}", path))?;
            CalendarConfig::from_json_str(&raw)
                .with_context(|| format!("Invalid config file: {}", path))
        }
        None => Ok(CalendarConfig::default()),
    }
}

fn load_events(path: Option<&str>) -> Result<Vec<Event>> {
    match path {
        Some(path) => {
            let raw = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read events file: {}", path))?;
            serde_json::from_str(&raw)
                .with_context(|| format!("Failed to parse events file: {}", path))
        }
        None => Ok(Vec::new()),
    }
}

/// Run one commit against the events file at `path`.
///
/// The file is rewritten only when the commit succeeds. A failed commit
/// prints its outcome and exits with status 1.
fn commit<F>(path: &str, op: F) -> Result<()>
where
    F: FnOnce(&mut EventStore) -> CommitOutcome,
{
    let existing = if Path::new(path).exists() {
        load_events(Some(path))?
    } else {
        Vec::new()
    };
    let mut store = EventStore::from_events(existing);

    let outcome = op(&mut store);
    println!("{}", serde_json::to_string_pretty(&outcome)?);
    if !outcome.success {
        process::exit(1);
    }

    let json = serde_json::to_string_pretty(store.events())?;
    std::fs::write(path, json).with_context(|| format!("Failed to write events file: {}", path))
}

/// Text month grid: Sunday-first rows, padding days in parentheses, and the
/// number of events on a day in brackets.
fn render_month(reference: NaiveDate, cells: &[CellSummary]) -> String {
    const CELL: usize = 8;
    let mut out = String::new();

    out.push_str(&grid::month_title(reference));
    out.push('\n');
    for name in ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"] {
        out.push_str(&format!("{:<width$}", name, width = CELL));
    }
    out.push('\n');

    for week in cells.chunks(7) {
        let row: Vec<String> = week
            .iter()
            .map(|cell| {
                let day = cell.date.day();
                let mut label = if cell.in_focal_month {
                    day.to_string()
                } else {
                    format!("({})", day)
                };
                if cell.total() > 0 {
                    label.push_str(&format!("[{}]", cell.total()));
                }
                format!("{:<width$}", label, width = CELL)
            })
            .collect();
        out.push_str(row.concat().trim_end());
        out.push('\n');
    }

    out
}

fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path))
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
            Ok(buf)
        }
    }
}
