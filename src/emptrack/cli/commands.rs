//! # CLI Layer
//!
//! One possible UI client for emptrack. It is the only place that touches the terminal,
//! reads the environment, or decides exit codes.
//!
//! ## Structure
//!
//! - `run()`: Main dispatch logic (called by `main.rs`)
//! - `init_tracing()`: Log filter setup, logs go to stderr
//! - `init_context()`: Resolves config and database path, opens the store
//! - `handle_*()`: Per-command handlers that call the API and print results
//!
//! ## Store lifecycle
//!
//! The database is opened once in `init_context()`, before any command runs, and closed
//! explicitly when the command is done. The `config` command never opens it.

use super::prompt::DialoguerPrompter;
use super::render::{print_messages, print_result, render_banner, render_config};
use super::setup::{Cli, Commands};
use clap::Parser;
use directories::ProjectDirs;
use emptrack::api::{ConfigAction, Table, TrackerApi};
use emptrack::commands;
use emptrack::config::TrackerConfig;
use emptrack::error::{Result, TrackerError};
use emptrack::menu;
use emptrack::store::sqlite::SqliteStore;
use std::path::PathBuf;
use std::time::Duration;
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

/// Overrides the database path from the config file.
pub const DATABASE_ENV: &str = "EMPTRACK_DB";

struct Dirs {
    config: PathBuf,
    data: PathBuf,
}

struct AppContext {
    api: TrackerApi<SqliteStore>,
    pause: Duration,
    banner: bool,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    let dirs = project_dirs()?;

    if let Some(Commands::Config { key, value }) = &cli.command {
        return handle_config(&dirs, key.clone(), value.clone());
    }

    let ctx = init_context(&cli, &dirs)?;
    match cli.command {
        Some(Commands::View { table }) => handle_view(ctx, table.into()),
        Some(Commands::Seed) => handle_seed(ctx),
        Some(Commands::Menu) | None => handle_menu(ctx),
        Some(Commands::Config { .. }) => Ok(()),
    }
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("emptrack=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("emptrack=warn"))
    };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn project_dirs() -> Result<Dirs> {
    let proj_dirs = ProjectDirs::from("com", "emptrack", "emptrack")
        .ok_or_else(|| TrackerError::Api("Could not determine config dir".to_string()))?;
    Ok(Dirs {
        config: proj_dirs.config_dir().to_path_buf(),
        data: proj_dirs.data_dir().to_path_buf(),
    })
}

fn init_context(cli: &Cli, dirs: &Dirs) -> Result<AppContext> {
    let config = TrackerConfig::load(&dirs.config).unwrap_or_else(|e| {
        warn!(error = %e, "unreadable config file, using defaults");
        TrackerConfig::default()
    });

    let database = cli
        .database
        .clone()
        .or_else(|| std::env::var_os(DATABASE_ENV).map(PathBuf::from))
        .unwrap_or_else(|| config.database_path(&dirs.data));
    debug!(database = %database.display(), "opening database");
    let store = SqliteStore::open(&database)?;

    Ok(AppContext {
        api: TrackerApi::new(store),
        pause: cli
            .pause_ms
            .map(Duration::from_millis)
            .unwrap_or_else(|| config.pause()),
        banner: config.banner && !cli.no_banner,
    })
}

fn handle_menu(ctx: AppContext) -> Result<()> {
    let AppContext { mut api, pause, banner } = ctx;
    if banner {
        print!("{}", render_banner());
    }

    let mut prompter = DialoguerPrompter::new();
    let outcome = menu::run(&mut api, &mut prompter, pause, |_, result| {
        print_result(result)
    });
    let closed = api.into_store().close();

    let summary = outcome?;
    closed?;
    info!(iterations = summary.iterations, "session ended");
    println!();
    Ok(())
}

fn handle_view(ctx: AppContext, table: Table) -> Result<()> {
    let result = ctx.api.view(table);
    let closed = ctx.api.into_store().close();
    print_result(&result?);
    closed
}

fn handle_seed(mut ctx: AppContext) -> Result<()> {
    let result = ctx.api.seed();
    let closed = ctx.api.into_store().close();
    print_messages(&result?.messages);
    closed
}

fn handle_config(dirs: &Dirs, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(key), None) => ConfigAction::ShowKey(key),
        (Some(key), Some(value)) => ConfigAction::Set(key, value),
    };

    let result = commands::config::run(&dirs.config, action)?;
    if let Some(config) = &result.config {
        print!("{}", render_config(config));
    }
    print_messages(&result.messages);
    Ok(())
}
