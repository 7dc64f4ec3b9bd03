//! CLI interface for FoodQuest.
//!
//! Each subcommand is non-interactive: arguments in, text out.
//! Notifications from a transition go to stderr; listings go to stdout.
//!
//! `--date` pins "today" for every command, which makes backfilling a missed
//! log (or trying out the streak rules) possible without touching the system
//! clock. Entries logged for another day are stamped at its local midnight.

mod format;

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use jiff::civil::Date;

use foodquest::model::{Category, SHOP_ITEMS};
use foodquest::{
    Clock, FixedClock, PersistentStore, ProgressionEngine, ProgressionError, SqliteStore,
    SystemClock,
};

use crate::config::Config;

use format::{
    format_badges, format_history, format_notifications, format_quests, format_shop,
    format_status,
};

/// FoodQuest: level up your eating habits.
#[derive(Debug, Parser)]
#[command(name = "foodquest")]
pub struct Cli {
    /// Treat this day (YYYY-MM-DD) as today.
    #[arg(long, global = true)]
    date: Option<Date>,

    /// Database path. Overrides the configured one.
    #[arg(long, global = true)]
    db: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Log a food. Prints any rewards it earned.
    Log {
        /// What you ate or drank.
        name: String,

        /// What kind of food it was.
        #[arg(long, short, value_enum, default_value_t = CategoryArg::Meal)]
        category: CategoryArg,
    },

    /// Show points, level, and streak.
    Status,

    /// Show daily quests and weekly challenges.
    Quests,

    /// List unlocked badges in the order they were earned.
    Badges,

    /// List logged foods, newest first.
    History {
        /// Show at most this many entries.
        #[arg(long, default_value_t = 20)]
        limit: usize,
    },

    /// List what points can buy.
    Shop,

    /// Buy a shop item by name.
    Buy {
        /// Item name, e.g. "Special Theme".
        item: String,
    },
}

/// CLI-facing category, mapped to the domain `Category`.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum CategoryArg {
    Meal,
    Fruit,
    Vegetable,
    Water,
    Snack,
}

impl CategoryArg {
    fn to_domain(self) -> Category {
        match self {
            Self::Meal => Category::Meal,
            Self::Fruit => Category::Fruit,
            Self::Vegetable => Category::Vegetable,
            Self::Water => Category::Water,
            Self::Snack => Category::Snack,
        }
    }
}

/// Run a parsed command, returning an error message on failure.
pub fn run(cli: Cli, config: &Config) -> Result<(), String> {
    let path = cli
        .db
        .or_else(|| config.database.clone())
        .or_else(SqliteStore::default_path)
        .ok_or("could not determine home directory")?;
    let store = SqliteStore::open(&path)
        .map_err(|e| format!("failed to open {}: {e}", path.display()))?;

    match cli.date {
        Some(today) => dispatch(cli.command, FixedClock::on(today), store),
        None => dispatch(cli.command, SystemClock, store),
    }
}

fn dispatch(
    command: Command,
    clock: impl Clock,
    store: impl PersistentStore,
) -> Result<(), String> {
    let mut engine = ProgressionEngine::open(clock, store)
        .map_err(|e| format!("failed to load progress: {e}"))?;

    match command {
        Command::Log { name, category } => cmd_log(&mut engine, &name, category),
        Command::Status => cmd_status(&engine),
        Command::Quests => cmd_quests(&engine),
        Command::Badges => cmd_badges(&engine),
        Command::History { limit } => cmd_history(&engine, limit),
        Command::Shop => cmd_shop(&engine),
        Command::Buy { item } => cmd_buy(&mut engine, &item),
    }
}

fn cmd_log<C: Clock, S: PersistentStore>(
    engine: &mut ProgressionEngine<C, S>,
    name: &str,
    category: CategoryArg,
) -> Result<(), String> {
    let notifications = engine
        .log_food(name, category.to_domain())
        .map_err(|e| e.to_string())?;
    eprint!("{}", format_notifications(&notifications));
    cmd_status(engine)
}

fn cmd_status<C: Clock, S: PersistentStore>(
    engine: &ProgressionEngine<C, S>,
) -> Result<(), String> {
    println!("{}", format_status(engine.state(), engine.clock().today()));
    Ok(())
}

fn cmd_quests<C: Clock, S: PersistentStore>(
    engine: &ProgressionEngine<C, S>,
) -> Result<(), String> {
    print!("{}", format_quests(engine.state()));
    Ok(())
}

fn cmd_badges<C: Clock, S: PersistentStore>(
    engine: &ProgressionEngine<C, S>,
) -> Result<(), String> {
    print!("{}", format_badges(engine.state()));
    Ok(())
}

fn cmd_history<C: Clock, S: PersistentStore>(
    engine: &ProgressionEngine<C, S>,
    limit: usize,
) -> Result<(), String> {
    print!("{}", format_history(engine.state(), limit));
    Ok(())
}

fn cmd_shop<C: Clock, S: PersistentStore>(
    engine: &ProgressionEngine<C, S>,
) -> Result<(), String> {
    print!("{}", format_shop(&SHOP_ITEMS, engine.state().points));
    Ok(())
}

/// Not having enough points is reported like any other notification and
/// leaves the exit status alone. An unknown item is an error.
fn cmd_buy<C: Clock, S: PersistentStore>(
    engine: &mut ProgressionEngine<C, S>,
    item: &str,
) -> Result<(), String> {
    match engine.purchase(item) {
        Ok(notifications) => eprint!("{}", format_notifications(&notifications)),
        Err(e @ ProgressionError::InsufficientPoints { .. }) => eprintln!("❌ {e}"),
        Err(e) => return Err(format!("❌ {e}")),
    }
    println!("{} points left", engine.state().points);
    Ok(())
}
