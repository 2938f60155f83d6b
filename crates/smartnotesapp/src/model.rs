//! # Domain Model
//!
//! This module defines the core data structures: [`Note`], its identifier
//! [`NoteId`], and the vocabularies a note is described with.
//!
//! ## Closed and Open Vocabularies
//!
//! Notes are described by three kinds of labels:
//!
//! | Label | Type | Vocabulary |
//! |-------|------|------------|
//! | color | [`NoteColor`] | closed: 11 named colors |
//! | category | [`Category`] | a [`PresetCategory`] or any custom string |
//! | tags | [`TagSet`] | open: any non-blank strings |
//!
//! The closed vocabularies double as search signals: typing a color or preset
//! category name anywhere in a query pulls in every note carrying it (see
//! [`crate::search`]).
//!
//! ## Drafts and Patches
//!
//! - [`NoteDraft`]: everything optional, consumed by create. Missing fields get
//!   defaults (empty text, no tags, `Personal`, unpinned, white).
//! - [`NotePatch`]: everything optional, merged over an existing note by
//!   update. A patch has no id and no archive flag, so applying one can never
//!   change identity or move a note between views.
//!
//! ## Timestamps
//!
//! `created_at` is fixed at creation. `updated_at` is refreshed by content
//! edits only; pin and archive toggles leave it alone.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use crate::error::NotesError;
use crate::tags::TagSet;

/// Opaque, immutable note identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NoteId(Uuid);

impl NoteId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }

    /// First eight hex digits, for compact display.
    pub fn short(&self) -> String {
        self.0.simple().to_string()[..8].to_string()
    }
}

impl Default for NoteId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Uuid> for NoteId {
    fn from(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl fmt::Display for NoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for NoteId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s).map(Self)
    }
}

/// Which half of the note space is being looked at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum View {
    #[default]
    Active,
    Archived,
}

impl View {
    /// Whether a note with the given archive flag belongs to this view.
    pub fn includes(self, is_archived: bool) -> bool {
        match self {
            View::Active => !is_archived,
            View::Archived => is_archived,
        }
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            View::Active => write!(f, "active"),
            View::Archived => write!(f, "archived"),
        }
    }
}

/// Named color tag of a note.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoteColor {
    #[default]
    White,
    Red,
    Orange,
    Yellow,
    Green,
    Teal,
    Blue,
    Purple,
    Pink,
    Brown,
    Gray,
}

impl NoteColor {
    pub const ALL: [NoteColor; 11] = [
        NoteColor::White,
        NoteColor::Red,
        NoteColor::Orange,
        NoteColor::Yellow,
        NoteColor::Green,
        NoteColor::Teal,
        NoteColor::Blue,
        NoteColor::Purple,
        NoteColor::Pink,
        NoteColor::Brown,
        NoteColor::Gray,
    ];

    /// Lowercase name, as matched against search queries.
    pub fn name(self) -> &'static str {
        match self {
            NoteColor::White => "white",
            NoteColor::Red => "red",
            NoteColor::Orange => "orange",
            NoteColor::Yellow => "yellow",
            NoteColor::Green => "green",
            NoteColor::Teal => "teal",
            NoteColor::Blue => "blue",
            NoteColor::Purple => "purple",
            NoteColor::Pink => "pink",
            NoteColor::Brown => "brown",
            NoteColor::Gray => "gray",
        }
    }
}

impl fmt::Display for NoteColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for NoteColor {
    type Err = NotesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        NoteColor::ALL
            .into_iter()
            .find(|c| c.name() == wanted)
            .ok_or_else(|| NotesError::InvalidColor(s.to_string()))
    }
}

/// The fixed list of suggested categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum PresetCategory {
    #[default]
    Personal,
    Work,
    Ideas,
    #[serde(rename = "To-Do")]
    ToDo,
}

impl PresetCategory {
    /// In display order. The first entry is the default category.
    pub const ALL: [PresetCategory; 4] = [
        PresetCategory::Personal,
        PresetCategory::Work,
        PresetCategory::Ideas,
        PresetCategory::ToDo,
    ];

    pub fn name(self) -> &'static str {
        match self {
            PresetCategory::Personal => "Personal",
            PresetCategory::Work => "Work",
            PresetCategory::Ideas => "Ideas",
            PresetCategory::ToDo => "To-Do",
        }
    }

    /// Exact, case-sensitive lookup by name.
    pub fn from_name(name: &str) -> Option<Self> {
        PresetCategory::ALL.into_iter().find(|p| p.name() == name)
    }
}

impl fmt::Display for PresetCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A note's category: one of the presets, or whatever the user typed.
///
/// Strings exactly equal to a preset's name become [`Category::Preset`];
/// anything else (including `"work"`) is kept verbatim as
/// [`Category::Custom`]. Both compare and filter by their string form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Category {
    Preset(PresetCategory),
    Custom(String),
}

impl Category {
    pub fn parse(s: &str) -> Self {
        match PresetCategory::from_name(s) {
            Some(preset) => Category::Preset(preset),
            None => Category::Custom(s.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Category::Preset(preset) => preset.name(),
            Category::Custom(name) => name,
        }
    }

    pub fn preset(&self) -> Option<PresetCategory> {
        match self {
            Category::Preset(preset) => Some(*preset),
            Category::Custom(_) => None,
        }
    }
}

impl Default for Category {
    fn default() -> Self {
        Category::Preset(PresetCategory::default())
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<PresetCategory> for Category {
    fn from(preset: PresetCategory) -> Self {
        Category::Preset(preset)
    }
}

impl From<&str> for Category {
    fn from(s: &str) -> Self {
        Category::parse(s)
    }
}

impl From<String> for Category {
    fn from(s: String) -> Self {
        match PresetCategory::from_name(&s) {
            Some(preset) => Category::Preset(preset),
            None => Category::Custom(s),
        }
    }
}

impl From<Category> for String {
    fn from(category: Category) -> Self {
        match category {
            Category::Preset(preset) => preset.name().to_string(),
            Category::Custom(name) => name,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub id: NoteId,
    pub title: String,
    pub content: String,
    pub tags: TagSet,
    pub category: Category,
    pub is_pinned: bool,
    pub is_archived: bool,
    pub color: NoteColor,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Note {
    /// Builds a fresh, unarchived note from a draft, applying defaults for
    /// every missing field.
    pub fn from_draft(id: NoteId, draft: NoteDraft, now: DateTime<Utc>) -> Self {
        Self {
            id,
            title: draft.title.unwrap_or_default(),
            content: draft.content.unwrap_or_default(),
            tags: draft.tags.unwrap_or_default(),
            category: draft.category.unwrap_or_default(),
            is_pinned: draft.is_pinned.unwrap_or(false),
            is_archived: false,
            color: draft.color.unwrap_or_default(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Title for messages and listings; falls back when the title is blank.
    pub fn display_title(&self) -> &str {
        let title = self.title.trim();
        if !title.is_empty() {
            return title;
        }
        self.content
            .lines()
            .map(str::trim)
            .find(|line| !line.is_empty())
            .unwrap_or("(untitled)")
    }
}

/// Input for creating a note. Unset fields take the documented defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoteDraft {
    pub title: Option<String>,
    pub content: Option<String>,
    pub tags: Option<TagSet>,
    pub category: Option<Category>,
    pub is_pinned: Option<bool>,
    pub color: Option<NoteColor>,
}

impl NoteDraft {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.tags = Some(tags.into_iter().collect());
        self
    }

    pub fn with_category(mut self, category: impl Into<Category>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_pinned(mut self, is_pinned: bool) -> Self {
        self.is_pinned = Some(is_pinned);
        self
    }

    pub fn with_color(mut self, color: NoteColor) -> Self {
        self.color = Some(color);
        self
    }

    /// True when neither title nor content carries any text.
    pub fn is_blank(&self) -> bool {
        let blank = |s: &Option<String>| s.as_deref().map_or(true, |s| s.trim().is_empty());
        blank(&self.title) && blank(&self.content)
    }
}

/// Loads a note into an editor draft, field for field.
impl From<&Note> for NoteDraft {
    fn from(note: &Note) -> Self {
        Self {
            title: Some(note.title.clone()),
            content: Some(note.content.clone()),
            tags: Some(note.tags.clone()),
            category: Some(note.category.clone()),
            is_pinned: Some(note.is_pinned),
            color: Some(note.color),
        }
    }
}

/// Partial update merged over an existing note.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NotePatch {
    pub title: Option<String>,
    pub content: Option<String>,
    pub tags: Option<TagSet>,
    pub category: Option<Category>,
    pub is_pinned: Option<bool>,
    pub color: Option<NoteColor>,
}

impl NotePatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    pub fn with_tags(mut self, tags: TagSet) -> Self {
        self.tags = Some(tags);
        self
    }

    pub fn with_category(mut self, category: impl Into<Category>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_pinned(mut self, is_pinned: bool) -> Self {
        self.is_pinned = Some(is_pinned);
        self
    }

    pub fn with_color(mut self, color: NoteColor) -> Self {
        self.color = Some(color);
        self
    }

    pub fn is_empty(&self) -> bool {
        *self == NotePatch::default()
    }

    /// Overwrites the note's fields with every field set in the patch.
    /// Timestamps are the caller's concern.
    pub fn apply(&self, note: &mut Note) {
        if let Some(title) = &self.title {
            note.title = title.clone();
        }
        if let Some(content) = &self.content {
            note.content = content.clone();
        }
        if let Some(tags) = &self.tags {
            note.tags = tags.clone();
        }
        if let Some(category) = &self.category {
            note.category = category.clone();
        }
        if let Some(is_pinned) = self.is_pinned {
            note.is_pinned = is_pinned;
        }
        if let Some(color) = self.color {
            note.color = color;
        }
    }
}

/// Saving an edited draft over an existing note replaces every field the
/// editor holds.
impl From<NoteDraft> for NotePatch {
    fn from(draft: NoteDraft) -> Self {
        Self {
            title: draft.title,
            content: draft.content,
            tags: draft.tags,
            category: draft.category,
            is_pinned: draft.is_pinned,
            color: draft.color,
        }
    }
}
