//! Styles for the emptrack CLI.
//!
//! Templates refer to semantic style names (a table header, a success message) and never to
//! colors. The theme below maps each name to a `console::Style`; it is built once through
//! `once_cell::sync::Lazy`.
//!
//! A name missing from the theme renders with a `(!?)` prefix so typos in templates show
//! up in the output instead of silently losing their style.

use console::Style;
use once_cell::sync::Lazy;
use std::collections::HashMap;

const MISSING_STYLE_INDICATOR: &str = "(!?)";

pub mod names {
    pub const BORDER: &str = "border";
    pub const HEADER: &str = "header";
    pub const CELL: &str = "cell";
    pub const MUTED: &str = "muted";
    pub const BANNER: &str = "banner";
    pub const CONFIG_KEY: &str = "config-key";
    pub const ERROR: &str = "error";
    pub const WARNING: &str = "warning";
    pub const SUCCESS: &str = "success";
    pub const INFO: &str = "info";
}

#[derive(Debug, Clone, Default)]
pub struct Theme {
    styles: HashMap<&'static str, Style>,
}

impl Theme {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(mut self, name: &'static str, style: Style) -> Self {
        self.styles.insert(name, style);
        self
    }

    /// Styles `text` with the named style, or leaves it plain when `use_color` is off.
    pub fn apply(&self, name: &str, text: &str, use_color: bool) -> String {
        match self.styles.get(name) {
            Some(style) if use_color => style.clone().force_styling(true).apply_to(text).to_string(),
            Some(_) => text.to_string(),
            None => format!("{} {}", MISSING_STYLE_INDICATOR, text),
        }
    }
}

pub static EMPTRACK_THEME: Lazy<Theme> = Lazy::new(|| {
    let muted = Style::new().color256(245);
    Theme::new()
        .add(names::BORDER, muted.clone())
        .add(names::HEADER, Style::new().cyan().bold())
        .add(names::CELL, Style::new())
        .add(names::MUTED, muted.clone())
        .add(names::BANNER, Style::new().white().bright().bold())
        .add(names::CONFIG_KEY, Style::new().cyan())
        .add(names::ERROR, Style::new().red().bold())
        .add(names::WARNING, Style::new().yellow().bold())
        .add(names::SUCCESS, Style::new().green())
        .add(names::INFO, muted.italic())
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_mode_keeps_text_untouched() {
        assert_eq!(EMPTRACK_THEME.apply(names::SUCCESS, "done", false), "done");
    }

    #[test]
    fn color_mode_wraps_in_ansi_codes() {
        let styled = EMPTRACK_THEME.apply(names::ERROR, "boom", true);
        assert!(styled.contains("boom"));
        assert!(styled.starts_with("\u{1b}["));
    }

    #[test]
    fn unknown_style_is_flagged() {
        assert_eq!(EMPTRACK_THEME.apply("nope", "x", false), "(!?) x");
    }
}
