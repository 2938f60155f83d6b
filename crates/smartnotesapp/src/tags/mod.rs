//! Tag support for notes.
//!
//! Tags are free-form labels attached to a single note. Unlike categories and
//! colors there is no registry: any non-blank string is a valid tag.
//!
//! ## Tag Set Semantics
//!
//! A note's tags form a [`TagSet`]:
//! - Display order is insertion order
//! - Duplicates are rejected (case-sensitive: `work` and `Work` are distinct)
//! - Tags are normalized on the way in (see [`validation`])
//!
//! ## Search
//!
//! Tags take part in the query engine's tag signal: a note matches when one of
//! its tags, lowercased, appears inside the lowercased query. See
//! [`crate::search`].

pub mod validation;

use serde::{Deserialize, Serialize};

pub use validation::{normalize_tag, TagValidationError};

/// Ordered, duplicate-free set of tags.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct TagSet(Vec<String>);

impl TagSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a tag, normalizing it first.
    ///
    /// Returns `Ok(false)` when the normalized tag was already present.
    pub fn insert(&mut self, tag: &str) -> Result<bool, TagValidationError> {
        let tag = normalize_tag(tag)?;
        if self.0.contains(&tag) {
            return Ok(false);
        }
        self.0.push(tag);
        Ok(true)
    }

    /// Removes a tag. Returns `false` when it was not present.
    pub fn remove(&mut self, tag: &str) -> bool {
        let tag = tag.trim();
        match self.0.iter().position(|t| t == tag) {
            Some(pos) => {
                self.0.remove(pos);
                true
            }
            None => false,
        }
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.0.iter().any(|t| t == tag)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.0.iter()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Collects tags, silently dropping blank and duplicate entries.
impl<S: AsRef<str>> FromIterator<S> for TagSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = TagSet::new();
        for tag in iter {
            let _ = set.insert(tag.as_ref());
        }
        set
    }
}

impl From<Vec<String>> for TagSet {
    fn from(tags: Vec<String>) -> Self {
        tags.into_iter().collect()
    }
}

impl From<TagSet> for Vec<String> {
    fn from(set: TagSet) -> Self {
        set.0
    }
}

impl<'a> IntoIterator for &'a TagSet {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
