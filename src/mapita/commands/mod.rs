//! Business logic for each user operation. Commands operate on the store
//! and return structured results; they make no I/O assumptions beyond
//! import/export touching their named files, and never print.

use crate::list::ListRow;
use crate::model::Poi;

pub mod add;
pub mod delete;
pub mod export;
pub mod import;
pub mod list;
pub mod reset;
pub mod search;
pub mod update;

#[derive(Debug, Clone)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
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
    pub affected: Vec<Poi>,
    pub rows: Vec<ListRow>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected(mut self, pois: Vec<Poi>) -> Self {
        self.affected = pois;
        self
    }

    pub fn with_rows(mut self, rows: Vec<ListRow>) -> Self {
        self.rows = rows;
        self
    }
}
