//! # Command Layer
//!
//! This module holds the business operations of smartnotes. Each command lives
//! in its own submodule as a plain function over a [`NoteStore`].
//!
//! ## Role and Responsibilities
//!
//! Commands:
//! - Resolve selectors to note ids (see [`helpers`])
//! - Call the store's lifecycle operations
//! - Return a structured [`CmdResult`]: affected notes, listed notes and
//!   levelled messages
//!
//! They never print, prompt or decide exit codes; the client renders the
//! result however it likes.
//!
//! ## Reporting Indexes
//!
//! Notes in a `CmdResult` are [`DisplayNote`]s carrying the index the note
//! has *after* the command ran. A note pinned by `pinning::toggle` is
//! reported as `p1`, not under the regular index it was selected by.
//!
//! ## Testing Strategy
//!
//! Most of the crate's tests live here, against a fresh [`NoteStore`] or a
//! [`crate::store::fixtures::StoreFixture`].
//!
//! ## Command Modules
//!
//! - [`create`]: Create a note from a draft
//! - [`update`]: Merge a patch into notes
//! - [`delete`]: Remove notes permanently
//! - [`pinning`]: Toggle the pinned flag
//! - [`archive`]: Toggle the archived flag
//! - [`save`]: Editor save (create, update or discard)
//! - [`tagging`]: Add and remove single tags
//! - [`get`]: Run the query engine
//! - [`view`]: Full notes by selector
//! - [`categories`]: Active note counts per preset category

use serde::Serialize;

use crate::index::DisplayNote;
use crate::model::PresetCategory;

#[cfg(doc)]
use crate::store::NoteStore;

pub mod archive;
pub mod categories;
pub mod create;
pub mod delete;
pub mod get;
pub mod helpers;
pub mod pinning;
pub mod save;
pub mod tagging;
pub mod update;
pub mod view;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
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

/// Number of active notes filed under a preset category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CategoryCount {
    pub category: PresetCategory,
    pub count: usize,
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_notes: Vec<DisplayNote>,
    pub listed_notes: Vec<DisplayNote>,
    pub categories: Vec<CategoryCount>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected_notes(mut self, notes: Vec<DisplayNote>) -> Self {
        self.affected_notes = notes;
        self
    }

    pub fn with_listed_notes(mut self, notes: Vec<DisplayNote>) -> Self {
        self.listed_notes = notes;
        self
    }

    pub fn with_categories(mut self, categories: Vec<CategoryCount>) -> Self {
        self.categories = categories;
        self
    }
}
