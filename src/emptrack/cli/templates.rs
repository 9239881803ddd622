//! # CLI Templates
//!
//! Output is rendered from minijinja templates kept in stand-alone files under `templates/`,
//! included here as string constants. Layout math (column widths, padding, box sizes) is
//! done in Rust before rendering; templates only place the pieces and pick styles through
//! the `style` filter.
//!
//! Templates spell out their line breaks: each output line ends with a literal newline and
//! block tags trim around themselves with `-`.

pub const TABLE_TEMPLATE: &str = include_str!("templates/table.tmp");
pub const MESSAGES_TEMPLATE: &str = include_str!("templates/messages.tmp");
pub const BANNER_TEMPLATE: &str = include_str!("templates/banner.tmp");
pub const CONFIG_TEMPLATE: &str = include_str!("templates/config.tmp");

/// "Employee Manager" in figlet's Standard font.
pub const BANNER_ART: &str = include_str!("templates/banner_art.txt");
