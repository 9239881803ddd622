//! # CLI Behavior
//!
//! This is **one possible UI client** for emptrack, not the application itself.
//! For the overall architecture, see the crate-level documentation of the `emptrack` library.
//!
//! ### Naked Execution (`emptrack`)
//!
//! Running `emptrack` with no command starts the interactive menu: the banner, then
//! "What would you like to do?" until Quit. Quit exits with status 0.
//!
//! ### One-shot commands
//!
//! `view`, `seed` and `config` do their job and exit without prompting, so they work in
//! scripts and pipes where the menu cannot.
//!
//! ### Database location
//!
//! `--database` beats `EMPTRACK_DB`, which beats the `database` config key. Without any of
//! them the file lives in the platform data directory.
//!
//! ## Module Structure
//!
//! - `commands`: Dispatch and per-command handlers
//! - `prompt`: dialoguer-backed `Prompter`
//! - `render`: Output formatting (tables, banner, messages)
//! - `setup`: Argument parsing via clap
//! - `styles`: Terminal styling theme
//! - `templates`: Output templates

mod commands;
mod prompt;
mod render;
pub mod setup;
mod styles;
mod templates;

pub use commands::run;
