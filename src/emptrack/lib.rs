//! # Emptrack Architecture
//!
//! Emptrack is a small employee directory: departments, the roles inside them, and the
//! employees holding those roles (optionally reporting to another employee). It is a library
//! with an interactive terminal client, not a terminal script with some helpers attached.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, prompts with dialoguer, draws tables   │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Menu Loop (menu.rs) + API Layer (api.rs)                   │
//! │  - One action at a time, errors logged, loop continues      │
//! │  - Thin facade dispatching actions to commands              │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs, lookup.rs)                   │
//! │  - Mutation flows, listers, label → id resolution           │
//! │  - Ask through a `Prompter`, return `CmdResult`             │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - DataStore trait over a fixed set of statements           │
//! │  - SqliteStore (production), InMemoryStore (testing)        │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Labels and ids
//!
//! Users never type ids. Every choice prompt is fed from a [`lookup::Lookup`] built from a
//! fresh read, and the chosen label is mapped back to the row id right before the write.
//! See lookup.rs for the resolution rules.
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `menu.rs` inward, code never writes to stdout/stderr and never exits the process.
//! Questions go through [`prompt::Prompter`], results come back as
//! [`commands::CmdResult`], and diagnostics go to `tracing`.
//!
//! ## Testing Strategy
//!
//! 1. **Commands**: unit tests against `InMemoryStore` fixtures with a scripted prompter.
//! 2. **Store**: `SqliteStore` against in-memory and temp-file databases.
//! 3. **Menu/API**: dispatch and loop pacing with scripted answers and zero pause.
//! 4. **CLI**: rendering unit tests, plus `tests/cli.rs` driving the binary.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade
//! - [`menu`]: Menu actions and the loop driver
//! - [`commands`]: Flows, listers, views, seeding, config
//! - [`lookup`]: Choice lists and label → id resolution
//! - [`prompt`]: The prompt abstraction
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: Rows, values, and the three record types
//! - [`config`]: Configuration management
//! - [`error`]: Error types
//! - `cli`: Argument parsing, dialoguer prompts and rendering for the binary (not part of the lib API)

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod lookup;
pub mod menu;
pub mod model;
pub mod prompt;
pub mod store;
