mod commands;
mod config;
mod render;

use std::path::PathBuf;

use anyhow::Result;
use calstore_core::{CalendarStore, Storage};
use clap::{Parser, Subcommand};

use crate::config::GlobalConfig;

#[derive(Parser)]
#[command(name = "calstore")]
#[command(about = "Manage your local calendar events, view mode and current date")]
struct Cli {
    /// Storage directory (overrides the config file and the default)
    #[arg(long, global = true)]
    dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Add a new event
    Add {
        /// Event title
        title: Option<String>,

        /// Event id (generated if omitted)
        #[arg(long)]
        id: Option<String>,

        /// Time-of-day sort key (e.g. "15:00")
        #[arg(short, long)]
        time: Option<String>,

        /// Extra fields as key=value (repeatable)
        #[arg(short, long = "field")]
        fields: Vec<String>,
    },
    /// Replace the first event with the given id
    Update {
        id: String,

        /// New event title
        title: Option<String>,

        /// Time-of-day sort key (e.g. "15:00")
        #[arg(short, long)]
        time: Option<String>,

        /// Extra fields as key=value (repeatable)
        #[arg(short, long = "field")]
        fields: Vec<String>,
    },
    /// Delete every event with the given id
    Delete { id: String },
    /// List events
    List {
        /// Order by time (untimed events first)
        #[arg(short, long)]
        sort: bool,
    },
    /// Show or set the view mode
    View { mode: Option<String> },
    /// Show or set the current date (YYYY-MM-DD)
    Date { date: Option<String> },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut store = CalendarStore::load(Storage::open(resolve_dir(cli.dir)?));

    match cli.command {
        Commands::Add {
            title,
            id,
            time,
            fields,
        } => commands::add::run(&mut store, title, id, time, fields),
        Commands::Update {
            id,
            title,
            time,
            fields,
        } => commands::update::run(&mut store, &id, title, time, fields),
        Commands::Delete { id } => commands::delete::run(&mut store, &id),
        Commands::List { sort } => commands::list::run(&store, sort),
        Commands::View { mode } => commands::view::run(&mut store, mode),
        Commands::Date { date } => commands::date::run(&mut store, date),
    }
}

/// Storage directory precedence: --dir flag, then the config file's
/// data_dir, then the platform default.
fn resolve_dir(flag: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(dir) = flag {
        return Ok(dir);
    }

    let config = GlobalConfig::load()?;
    if let Some(dir) = config.data_dir {
        return Ok(dir);
    }

    Ok(Storage::default_dir()?)
}
