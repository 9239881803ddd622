use crate::config::TrackerConfig;
use crate::model::Row;

pub mod add_department;
pub mod add_employee;
pub mod add_role;
pub mod config;
pub mod list;
pub mod seed;
pub mod update_role;
pub mod view;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    /// Rows to show as a table (view actions only).
    pub rows: Option<Vec<Row>>,
    /// Number of rows written by the command.
    pub written: usize,
    pub config: Option<TrackerConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_rows(mut self, rows: Vec<Row>) -> Self {
        self.rows = Some(rows);
        self
    }

    pub fn with_written(mut self, written: usize) -> Self {
        self.written = written;
        self
    }

    pub fn with_config(mut self, config: TrackerConfig) -> Self {
        self.config = Some(config);
        self
    }

    pub fn with_message(mut self, message: CmdMessage) -> Self {
        self.messages.push(message);
        self
    }

    /// A flow that stopped before writing because an answer was missing.
    pub fn skipped(what: &str) -> Self {
        Self::default().with_message(CmdMessage::info(format!("No {} added.", what)))
    }
}
