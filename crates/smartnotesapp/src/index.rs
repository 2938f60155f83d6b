//! # Display Indexes
//!
//! Notes are identified by UUIDs, which nobody wants to type. A terminal user
//! refers to notes through short **display indexes** instead:
//!
//! | Bucket | Index | Members |
//! |--------|-------|---------|
//! | pinned | `p1`, `p2`, ... | active notes with `is_pinned` |
//! | regular | `1`, `2`, ... | active notes without `is_pinned` |
//! | archived | `a1`, `a2`, ... | archived notes, pinned or not |
//!
//! ## Canonical Ordering
//!
//! Indexes are assigned over the **whole snapshot**, in snapshot order, never
//! over a filtered listing. A search that shows only the third regular note
//! still labels it `3`, so `pin 3` afterwards targets the note the user saw.
//!
//! Indexes are positional: any create, pin, archive or delete may shift
//! them. Callers re-index after every mutation, which [`index_notes`] makes
//! cheap enough for the note counts this crate is built for.
//!
//! ## Selectors
//!
//! User input is turned into [`NoteSelector`]s by the API layer (see
//! [`crate::api`]). Index-like input goes through [`parse_index_or_range`],
//! which also accepts ranges such as `1-3` or `p1-p2`.

use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::model::{Note, NoteId};
use crate::search::MatchSignal;

/// A user-facing index for a note.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DisplayIndex {
    Pinned(usize),
    Regular(usize),
    Archived(usize),
}

impl DisplayIndex {
    pub(crate) fn number(self) -> usize {
        match self {
            DisplayIndex::Pinned(n) | DisplayIndex::Regular(n) | DisplayIndex::Archived(n) => n,
        }
    }

    pub(crate) fn same_kind(self, other: Self) -> bool {
        std::mem::discriminant(&self) == std::mem::discriminant(&other)
    }
}

impl fmt::Display for DisplayIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DisplayIndex::Pinned(i) => write!(f, "p{}", i),
            DisplayIndex::Regular(i) => write!(f, "{}", i),
            DisplayIndex::Archived(i) => write!(f, "a{}", i),
        }
    }
}

impl FromStr for DisplayIndex {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Only plain digits; `usize::from_str` would also take a leading '+'.
        let number = |digits: &str| -> Option<usize> {
            if !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()) {
                digits.parse().ok()
            } else {
                None
            }
        };

        let parsed = if let Some(rest) = s.strip_prefix('p') {
            number(rest).map(DisplayIndex::Pinned)
        } else if let Some(rest) = s.strip_prefix('a') {
            number(rest).map(DisplayIndex::Archived)
        } else {
            number(s).map(DisplayIndex::Regular)
        };

        match parsed {
            Some(index) if index.number() > 0 => Ok(index),
            _ => Err(format!("Invalid index format: {}", s)),
        }
    }
}

impl Serialize for DisplayIndex {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Parses an index (`"3"`, `"p1"`) or an inclusive range (`"1-3"`,
/// `"a2-a4"`) into a selector.
///
/// Ranges stay as their two endpoints; they are resolved against the notes
/// that exist, never expanded up front.
///
/// Range errors start with `"Invalid range"` so callers can tell them apart
/// from input that is simply not an index.
pub fn parse_index_or_range(s: &str) -> Result<NoteSelector, String> {
    let Some((start_str, end_str)) = s.split_once('-').filter(|(start, _)| !start.is_empty())
    else {
        return DisplayIndex::from_str(s).map(NoteSelector::Index);
    };

    let start = DisplayIndex::from_str(start_str)?;
    let end = DisplayIndex::from_str(end_str)?;

    if !start.same_kind(end) {
        return Err(format!("Invalid range: cannot mix index types ({})", s));
    }
    if start.number() > end.number() {
        return Err(format!(
            "Invalid range: start ({}) must be <= end ({})",
            start, end
        ));
    }

    Ok(NoteSelector::Range(start, end))
}

/// A user input to select a note.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum NoteSelector {
    Index(DisplayIndex),
    /// Inclusive, both ends of the same kind.
    Range(DisplayIndex, DisplayIndex),
    Uuid(NoteId),
    /// Free text that must match exactly one note's title or content.
    Title(String),
}

impl fmt::Display for NoteSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NoteSelector::Index(idx) => write!(f, "{}", idx),
            NoteSelector::Range(start, end) => write!(f, "{}-{}", start, end),
            NoteSelector::Uuid(id) => write!(f, "{}", id),
            NoteSelector::Title(t) => write!(f, "\"{}\"", t),
        }
    }
}

/// A note paired with its canonical index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisplayNote {
    pub index: DisplayIndex,
    #[serde(flatten)]
    pub note: Note,
    /// Signals that made the note match the listing's query, if any.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub matches: Vec<MatchSignal>,
}

/// Assigns canonical display indexes to every note of a snapshot.
///
/// The result is in snapshot order, one entry per note.
pub fn index_notes(notes: &[Note]) -> Vec<DisplayNote> {
    let mut pinned = 0;
    let mut regular = 0;
    let mut archived = 0;

    notes
        .iter()
        .map(|note| {
            let index = if note.is_archived {
                archived += 1;
                DisplayIndex::Archived(archived)
            } else if note.is_pinned {
                pinned += 1;
                DisplayIndex::Pinned(pinned)
            } else {
                regular += 1;
                DisplayIndex::Regular(regular)
            };
            DisplayNote {
                index,
                note: note.clone(),
                matches: Vec::new(),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::fixtures::StoreFixture;

    #[test]
    fn test_indexing_buckets() {
        // Snapshot order is newest first: R2, A1, P1, R1
        let fixture = StoreFixture::new()
            .with_note("Regular 1")
            .with_pinned_note("Pinned 1")
            .with_archived_note("Archived 1")
            .with_note("Regular 2");
        let indexed = index_notes(&fixture.store.snapshot());

        let labels: Vec<(String, &str)> = indexed
            .iter()
            .map(|dn| (dn.index.to_string(), dn.note.title.as_str()))
            .collect();
        assert_eq!(
            labels,
            [
                ("1".to_string(), "Regular 2"),
                ("a1".to_string(), "Archived 1"),
                ("p1".to_string(), "Pinned 1"),
                ("2".to_string(), "Regular 1"),
            ]
        );
    }

    #[test]
    fn test_archived_pinned_note_gets_archive_index() {
        let mut fixture = StoreFixture::new().with_pinned_note("P");
        let id = fixture.id_of("P");
        fixture.store.toggle_archive(id);

        let indexed = index_notes(&fixture.store.snapshot());
        assert_eq!(indexed[0].index, DisplayIndex::Archived(1));
    }

    #[test]
    fn test_parsing() {
        assert_eq!(DisplayIndex::from_str("1"), Ok(DisplayIndex::Regular(1)));
        assert_eq!(DisplayIndex::from_str("42"), Ok(DisplayIndex::Regular(42)));
        assert_eq!(DisplayIndex::from_str("p1"), Ok(DisplayIndex::Pinned(1)));
        assert_eq!(DisplayIndex::from_str("a5"), Ok(DisplayIndex::Archived(5)));

        assert!(DisplayIndex::from_str("").is_err());
        assert!(DisplayIndex::from_str("0").is_err());
        assert!(DisplayIndex::from_str("p").is_err());
        assert!(DisplayIndex::from_str("a").is_err());
        assert!(DisplayIndex::from_str("+3").is_err());
        assert!(DisplayIndex::from_str("12a").is_err());
        assert!(DisplayIndex::from_str("abc").is_err());
    }

    #[test]
    fn test_display_roundtrip() {
        for s in ["3", "p2", "a7"] {
            assert_eq!(DisplayIndex::from_str(s).unwrap().to_string(), s);
        }
    }

    #[test]
    fn test_parse_single_index() {
        assert_eq!(
            parse_index_or_range("p2"),
            Ok(NoteSelector::Index(DisplayIndex::Pinned(2)))
        );
    }

    #[test]
    fn test_parse_ranges() {
        assert_eq!(
            parse_index_or_range("1-3"),
            Ok(NoteSelector::Range(
                DisplayIndex::Regular(1),
                DisplayIndex::Regular(3)
            ))
        );
        assert_eq!(
            parse_index_or_range("a2-a3"),
            Ok(NoteSelector::Range(
                DisplayIndex::Archived(2),
                DisplayIndex::Archived(3)
            ))
        );
        assert_eq!(
            parse_index_or_range("p4-p4"),
            Ok(NoteSelector::Range(
                DisplayIndex::Pinned(4),
                DisplayIndex::Pinned(4)
            ))
        );
    }

    #[test]
    fn test_parse_huge_range_stays_lazy() {
        let input = format!("1-{}", usize::MAX);
        assert_eq!(
            parse_index_or_range(&input),
            Ok(NoteSelector::Range(
                DisplayIndex::Regular(1),
                DisplayIndex::Regular(usize::MAX)
            ))
        );
    }

    #[test]
    fn test_parse_range_errors() {
        let mixed = parse_index_or_range("1-p3").unwrap_err();
        assert!(mixed.starts_with("Invalid range"));
        assert!(mixed.contains("cannot mix"));

        let reversed = parse_index_or_range("5-3").unwrap_err();
        assert_eq!(reversed, "Invalid range: start (5) must be <= end (3)");

        assert!(!parse_index_or_range("abc-5")
            .unwrap_err()
            .starts_with("Invalid range"));
        assert!(parse_index_or_range("3-").is_err());
        assert!(parse_index_or_range("-5").is_err());
    }

    #[test]
    fn test_display_note_serializes_flat() {
        let fixture = StoreFixture::new().with_pinned_note("Flat");
        let indexed = index_notes(&fixture.store.snapshot());
        let json = serde_json::to_value(&indexed[0]).unwrap();
        assert_eq!(json["index"], "p1");
        assert_eq!(json["title"], "Flat");
        assert!(json.get("matches").is_none());
    }
}
