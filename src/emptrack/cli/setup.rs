use clap::{Parser, Subcommand, ValueEnum};
use emptrack::api::Table;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "emptrack", bin_name = "emptrack", version)]
#[command(about = "Interactive employee directory: departments, roles and employees", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// SQLite database file (overrides EMPTRACK_DB and the config file)
    #[arg(long, global = true, value_name = "PATH", help_heading = "Options")]
    pub database: Option<PathBuf>,

    /// Skip the intro banner
    #[arg(long, global = true, help_heading = "Options")]
    pub no_banner: bool,

    /// Pause between menu iterations, in milliseconds
    #[arg(long, global = true, value_name = "MS", help_heading = "Options")]
    pub pause_ms: Option<u64>,

    /// Verbose output
    #[arg(short, long, global = true, help_heading = "Options")]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the interactive menu (default)
    #[command(display_order = 1)]
    Menu,

    /// Print one table and exit
    #[command(display_order = 2)]
    View {
        #[arg(value_enum)]
        table: TableArg,
    },

    /// Fill an empty directory with sample data
    #[command(display_order = 3)]
    Seed,

    /// Get or set configuration
    #[command(display_order = 4)]
    Config {
        /// Configuration key (database, pause-ms, banner)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum TableArg {
    Departments,
    Roles,
    Employees,
}

impl From<TableArg> for Table {
    fn from(arg: TableArg) -> Self {
        match arg {
            TableArg::Departments => Table::Departments,
            TableArg::Roles => Table::Roles,
            TableArg::Employees => Table::Employees,
        }
    }
}
