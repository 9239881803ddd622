//! # Rendering Module
//!
//! Turns command results into terminal text: bordered tables for the view actions, the
//! intro banner, config listings, and colored messages.
//!
//! Widths, padding and the banner box are computed here with `unicode-width`, so a name
//! like "Zoë" or "山田" still lines up. Templates (see templates.rs) only arrange the
//! precomputed strings and choose styles.

use super::styles::{names, EMPTRACK_THEME};
use super::templates::{
    BANNER_ART, BANNER_TEMPLATE, CONFIG_TEMPLATE, MESSAGES_TEMPLATE, TABLE_TEMPLATE,
};
use console::Term;
use emptrack::api::{CmdMessage, CmdResult, MessageLevel};
use emptrack::config::TrackerConfig;
use emptrack::model::Row;
use minijinja::{Environment, Value};
use serde::Serialize;
use unicode_width::UnicodeWidthStr;

pub const EMPTY_TABLE_MESSAGE: &str = "No rows.";
/// Blank columns between the banner box border and the art (boxen's `padding: 1`).
const BANNER_PADDING_X: usize = 3;

#[derive(Serialize)]
struct TableLine {
    cells: Vec<String>,
    style: &'static str,
}

#[derive(Serialize)]
struct TableData {
    empty: bool,
    empty_message: &'static str,
    rule: String,
    lines: Vec<TableLine>,
}

#[derive(Serialize)]
struct MessageData {
    content: String,
    style: &'static str,
}

#[derive(Serialize)]
struct MessagesData {
    messages: Vec<MessageData>,
}

#[derive(Serialize)]
struct BannerData {
    lines: Vec<String>,
}

#[derive(Serialize)]
struct ConfigEntry {
    key: &'static str,
    value: String,
}

#[derive(Serialize)]
struct ConfigData {
    entries: Vec<ConfigEntry>,
}

fn use_color() -> bool {
    Term::stdout().features().colors_supported()
}

fn render_template<T: Serialize>(
    template: &str,
    data: &T,
    use_color: bool,
) -> Result<String, minijinja::Error> {
    let mut env = Environment::new();
    env.add_filter("style", move |value: Value, name: String| -> String {
        EMPTRACK_THEME.apply(&name, &value.to_string(), use_color)
    });
    env.add_template("output", template)?;
    env.get_template("output")?.render(data)
}

/// Renders rows as a bordered table with a rule under the header and between rows.
///
/// Column order and header text come from the first row. Null values are empty cells.
pub fn render_table(rows: &[Row]) -> String {
    render_table_internal(rows, use_color())
}

fn render_table_internal(rows: &[Row], use_color: bool) -> String {
    let Some(first) = rows.first() else {
        let data = TableData {
            empty: true,
            empty_message: EMPTY_TABLE_MESSAGE,
            rule: String::new(),
            lines: Vec::new(),
        };
        return render_template(TABLE_TEMPLATE, &data, use_color)
            .unwrap_or_else(|_| format!("{}\n", EMPTY_TABLE_MESSAGE));
    };

    let header: Vec<String> = first.column_names().map(str::to_string).collect();
    let body: Vec<Vec<String>> = rows
        .iter()
        .map(|row| row.values().map(|v| v.to_string()).collect())
        .collect();

    let mut widths: Vec<usize> = header.iter().map(|h| h.width()).collect();
    for cells in &body {
        for (width, cell) in widths.iter_mut().zip(cells) {
            *width = (*width).max(cell.width());
        }
    }

    let rule = widths.iter().fold(String::from("+"), |mut rule, width| {
        rule.push_str(&"-".repeat(width + 2));
        rule.push('+');
        rule
    });

    let mut lines = vec![TableLine {
        cells: pad_cells(&header, &widths),
        style: names::HEADER,
    }];
    lines.extend(body.iter().map(|cells| TableLine {
        cells: pad_cells(cells, &widths),
        style: names::CELL,
    }));

    let data = TableData {
        empty: false,
        empty_message: EMPTY_TABLE_MESSAGE,
        rule,
        lines,
    };
    render_template(TABLE_TEMPLATE, &data, use_color)
        .unwrap_or_else(|e| format!("Render error: {}\n", e))
}

fn pad_cells(cells: &[String], widths: &[usize]) -> Vec<String> {
    widths
        .iter()
        .enumerate()
        .map(|(i, width)| {
            let cell = cells.get(i).map(String::as_str).unwrap_or("");
            let padding = width.saturating_sub(cell.width());
            format!("{}{}", cell, " ".repeat(padding))
        })
        .collect()
}

/// The "Employee Manager" intro, boxed with `+ - |` and one line of padding all around.
pub fn render_banner() -> String {
    render_banner_internal(use_color())
}

fn render_banner_internal(use_color: bool) -> String {
    let art: Vec<&str> = BANNER_ART.lines().collect();
    let art_width = art.iter().map(|l| l.width()).max().unwrap_or(0);
    let inner = art_width + 2 * BANNER_PADDING_X;

    let edge = format!("+{}+", "-".repeat(inner));
    let blank = format!("|{}|", " ".repeat(inner));
    let mut lines = vec![edge.clone(), blank.clone()];
    for line in &art {
        lines.push(format!(
            "|{pad}{line}{fill}{pad}|",
            pad = " ".repeat(BANNER_PADDING_X),
            fill = " ".repeat(art_width - line.width()),
        ));
    }
    lines.push(blank);
    lines.push(edge);

    render_template(BANNER_TEMPLATE, &BannerData { lines }, use_color)
        .unwrap_or_else(|_| format!("{}\n", BANNER_ART))
}

pub fn render_config(config: &TrackerConfig) -> String {
    let entries = TrackerConfig::KEYS
        .iter()
        .map(|&key| ConfigEntry {
            key,
            value: config.get(key).unwrap_or_default(),
        })
        .collect();
    render_template(CONFIG_TEMPLATE, &ConfigData { entries }, use_color())
        .unwrap_or_else(|e| format!("Render error: {}\n", e))
}

/// Renders command messages using the template system with themed styles.
pub fn render_messages(messages: &[CmdMessage]) -> String {
    render_messages_internal(messages, use_color())
}

fn render_messages_internal(messages: &[CmdMessage], use_color: bool) -> String {
    if messages.is_empty() {
        return String::new();
    }

    let data = MessagesData {
        messages: messages
            .iter()
            .map(|msg| MessageData {
                content: msg.content.clone(),
                style: match msg.level {
                    MessageLevel::Info => names::INFO,
                    MessageLevel::Success => names::SUCCESS,
                    MessageLevel::Warning => names::WARNING,
                    MessageLevel::Error => names::ERROR,
                },
            })
            .collect(),
    };

    render_template(MESSAGES_TEMPLATE, &data, use_color).unwrap_or_else(|_| {
        messages
            .iter()
            .map(|m| format!("{}\n", m.content))
            .collect()
    })
}

pub fn print_messages(messages: &[CmdMessage]) {
    let output = render_messages(messages);
    if !output.is_empty() {
        print!("{}", output);
    }
}

/// Prints a command result: its table first (when it has rows), then its messages.
pub fn print_result(result: &CmdResult) {
    if let Some(rows) = &result.rows {
        if !rows.is_empty() || result.messages.is_empty() {
            println!();
            print!("{}", render_table(rows));
        }
    }
    print_messages(&result.messages);
}

#[cfg(test)]
mod tests {
    use super::*;
    use emptrack::model::Value;

    fn departments() -> Vec<Row> {
        vec![
            Row::new().with("id", 1).with("name", "Engineering"),
            Row::new().with("id", 2).with("name", "Sales"),
        ]
    }

    #[test]
    fn test_render_table_layout() {
        let output = render_table_internal(&departments(), false);
        let expected = "\
+----+-------------+
| id | name        |
+----+-------------+
| 1  | Engineering |
+----+-------------+
| 2  | Sales       |
+----+-------------+
";
        assert_eq!(output, expected);
    }

    #[test]
    fn test_render_table_null_is_empty_cell() {
        let rows = vec![Row::new()
            .with("first_name", "Grace")
            .with("manager", Value::Null)];
        let output = render_table_internal(&rows, false);
        assert!(output.contains("| Grace      |         |"));
    }

    #[test]
    fn test_render_table_aligns_wide_characters() {
        let rows = vec![
            Row::new().with("name", "山田"),
            Row::new().with("name", "Bob"),
        ];
        let output = render_table_internal(&rows, false);
        let widths: Vec<usize> = output.lines().map(|l| l.width()).collect();
        assert!(widths.iter().all(|w| *w == widths[0]));
    }

    #[test]
    fn test_render_empty_table() {
        assert_eq!(render_table_internal(&[], false), "No rows.\n");
    }

    #[test]
    fn test_render_banner_box() {
        let output = render_banner_internal(false);
        let lines: Vec<&str> = output.lines().collect();
        assert!(lines[0].starts_with("+-") && lines[0].ends_with("-+"));
        assert_eq!(lines.first(), lines.last());
        assert!(lines[1..lines.len() - 1]
            .iter()
            .all(|l| l.starts_with('|') && l.ends_with('|')));
        let width = lines[0].width();
        assert!(lines.iter().all(|l| l.width() == width));
        assert_eq!(lines.len(), BANNER_ART.lines().count() + 4);
    }

    #[test]
    fn test_render_messages_plain() {
        let messages = vec![
            CmdMessage::success("Role added successfully!"),
            CmdMessage::info("No role added."),
        ];
        assert_eq!(
            render_messages_internal(&messages, false),
            "Role added successfully!\nNo role added.\n"
        );
    }

    #[test]
    fn test_render_messages_colored() {
        let output = render_messages_internal(&[CmdMessage::error("boom")], true);
        assert!(output.contains("\u{1b}["));
        assert!(output.contains("boom"));
    }

    #[test]
    fn test_render_no_messages() {
        assert_eq!(render_messages_internal(&[], true), "");
    }
}
