//! # Query Signals
//!
//! A free-text query is matched against a note through four independent
//! signals. A note is a hit when any of them fires:
//!
//! | Signal | Fires when |
//! |--------|------------|
//! | [`MatchSignal::Text`] | the whole query is a substring of the title or content |
//! | [`MatchSignal::Category`] | the query mentions a preset category and the note is in it |
//! | [`MatchSignal::Color`] | the query mentions a color name and the note has that color |
//! | [`MatchSignal::Tag`] | one of the note's tags appears inside the query |
//!
//! All comparisons are case-insensitive and use the trimmed query.
//!
//! ## Mentions, Not Words
//!
//! "Mentions" means plain substring containment, not word matching: `"redo"`
//! mentions `red`, `"network"` mentions `work`. The same goes for tags, with
//! the direction reversed relative to the text signal: the *tag* must sit
//! inside the *query*. A note tagged `urgent` matches the query
//! `"urgent stuff"`, but the query `"urg"` does not match it by tag.

use serde::Serialize;
use std::fmt;

use crate::model::{Note, NoteColor, PresetCategory};

/// Which signal made a note match a query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchSignal {
    Text,
    Category,
    Color,
    Tag,
}

impl fmt::Display for MatchSignal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            MatchSignal::Text => "text",
            MatchSignal::Category => "category",
            MatchSignal::Color => "color",
            MatchSignal::Tag => "tag",
        };
        f.write_str(name)
    }
}

/// A normalized, non-empty query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchTerm {
    lowered: String,
    categories: Vec<PresetCategory>,
    colors: Vec<NoteColor>,
}

impl SearchTerm {
    /// `None` for an empty or whitespace-only query, which filters nothing.
    pub fn parse(query: &str) -> Option<Self> {
        let lowered = query.trim().to_lowercase();
        if lowered.is_empty() {
            return None;
        }

        let categories = PresetCategory::ALL
            .into_iter()
            .filter(|p| lowered.contains(&p.name().to_lowercase()))
            .collect();
        let colors = NoteColor::ALL
            .into_iter()
            .filter(|c| lowered.contains(c.name()))
            .collect();

        Some(Self {
            lowered,
            categories,
            colors,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.lowered
    }

    /// Every signal that fires for `note`, in declaration order.
    pub fn signals(&self, note: &Note) -> Vec<MatchSignal> {
        let mut signals = Vec::new();
        if self.text_matches(note) {
            signals.push(MatchSignal::Text);
        }
        if self.category_matches(note) {
            signals.push(MatchSignal::Category);
        }
        if self.color_matches(note) {
            signals.push(MatchSignal::Color);
        }
        if self.tag_matches(note) {
            signals.push(MatchSignal::Tag);
        }
        signals
    }

    pub fn matches(&self, note: &Note) -> bool {
        self.text_matches(note)
            || self.category_matches(note)
            || self.color_matches(note)
            || self.tag_matches(note)
    }

    fn text_matches(&self, note: &Note) -> bool {
        note.title.to_lowercase().contains(&self.lowered)
            || note.content.to_lowercase().contains(&self.lowered)
    }

    // Custom categories take part too when they equal a preset name in
    // another case, e.g. a note filed under "work".
    fn category_matches(&self, note: &Note) -> bool {
        self.categories
            .iter()
            .any(|p| note.category.as_str().eq_ignore_ascii_case(p.name()))
    }

    fn color_matches(&self, note: &Note) -> bool {
        self.colors.contains(&note.color)
    }

    fn tag_matches(&self, note: &Note) -> bool {
        note.tags
            .iter()
            .any(|tag| self.lowered.contains(&tag.to_lowercase()))
    }
}

/// Signals firing for `note` under `query`. Empty when the query is blank.
pub fn match_signals(note: &Note, query: &str) -> Vec<MatchSignal> {
    SearchTerm::parse(query)
        .map(|term| term.signals(note))
        .unwrap_or_default()
}
