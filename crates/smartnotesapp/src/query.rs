//! # Query Engine
//!
//! A pure pipeline from a snapshot to the notes a view shows:
//!
//! 1. **View**: [`View::Active`] keeps unarchived notes, [`View::Archived`]
//!    keeps archived ones. There is no "all" view.
//! 2. **Category**: when set, keeps notes whose category string equals it
//!    exactly (case-sensitive).
//! 3. **Query**: when the trimmed query is non-empty, keeps notes for which
//!    any signal of [`crate::search`] fires.
//!
//! The result is a [`NoteListing`]. In the active view it is split into
//! pinned and other notes; the archived view is flat, pins are ignored there.
//! Snapshot order is kept within each group and nothing is re-sorted.
//!
//! The engine never mutates its input and holds no state between calls: the
//! caller re-runs it after every store mutation.

use log::trace;
use serde::Serialize;

use crate::model::{Note, View};
use crate::search::SearchTerm;

/// View, category and free-text criteria for a listing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoteFilter {
    pub view: View,
    pub category: Option<String>,
    pub search_term: Option<String>,
}

impl NoteFilter {
    pub fn new(view: View) -> Self {
        Self {
            view,
            ..Self::default()
        }
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_search(mut self, query: impl Into<String>) -> Self {
        self.search_term = Some(query.into());
        self
    }
}

/// Result of running the engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum NoteListing {
    Grouped { pinned: Vec<Note>, others: Vec<Note> },
    Flat(Vec<Note>),
}

impl NoteListing {
    pub fn len(&self) -> usize {
        match self {
            NoteListing::Grouped { pinned, others } => pinned.len() + others.len(),
            NoteListing::Flat(notes) => notes.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// All notes, pinned group first.
    pub fn iter(&self) -> impl Iterator<Item = &Note> {
        let (first, second) = match self {
            NoteListing::Grouped { pinned, others } => (pinned.as_slice(), others.as_slice()),
            NoteListing::Flat(notes) => (notes.as_slice(), &notes[..0]),
        };
        first.iter().chain(second.iter())
    }

    pub fn into_notes(self) -> Vec<Note> {
        match self {
            NoteListing::Grouped { mut pinned, others } => {
                pinned.extend(others);
                pinned
            }
            NoteListing::Flat(notes) => notes,
        }
    }
}

/// Applies the view, category and query stages, keeping snapshot order.
pub fn filter_notes<'a>(notes: &'a [Note], filter: &NoteFilter) -> Vec<&'a Note> {
    let term = filter.search_term.as_deref().and_then(SearchTerm::parse);
    let category = filter.category.as_deref();

    let kept: Vec<&Note> = notes
        .iter()
        .filter(|n| filter.view.includes(n.is_archived))
        .filter(|n| category.map_or(true, |c| n.category.as_str() == c))
        .filter(|n| term.as_ref().map_or(true, |t| t.matches(n)))
        .collect();

    trace!(
        "event=query view={} total={} kept={}",
        filter.view,
        notes.len(),
        kept.len()
    );
    kept
}

/// Runs the full pipeline and groups the result for the filter's view.
pub fn run(notes: &[Note], filter: &NoteFilter) -> NoteListing {
    let kept = filter_notes(notes, filter);
    match filter.view {
        View::Active => {
            let (pinned, others): (Vec<&Note>, Vec<&Note>) =
                kept.into_iter().partition(|n| n.is_pinned);
            NoteListing::Grouped {
                pinned: pinned.into_iter().cloned().collect(),
                others: others.into_iter().cloned().collect(),
            }
        }
        View::Archived => NoteListing::Flat(kept.into_iter().cloned().collect()),
    }
}

/// Positional form of [`run`].
pub fn query(notes: &[Note], view: View, category: Option<&str>, text: &str) -> NoteListing {
    let filter = NoteFilter {
        view,
        category: category.map(str::to_string),
        search_term: Some(text.to_string()),
    };
    run(notes, &filter)
}
