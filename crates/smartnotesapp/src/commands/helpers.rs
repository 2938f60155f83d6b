use std::collections::HashSet;

use crate::error::{NotesError, Result};
use crate::index::{index_notes, DisplayIndex, DisplayNote, NoteSelector};
use crate::model::NoteId;
use crate::store::NoteStore;

pub fn indexed_notes(store: &NoteStore) -> Vec<DisplayNote> {
    index_notes(&store.snapshot())
}

/// Maps selectors to note ids, in selector order, without duplicates.
///
/// Title selectors match case-insensitively against title and content of
/// every note, archived ones included, and must hit exactly one note.
pub fn resolve_selectors(store: &NoteStore, selectors: &[NoteSelector]) -> Result<Vec<NoteId>> {
    let indexed = indexed_notes(store);
    let mut seen = HashSet::new();
    let mut results = Vec::new();

    for selector in selectors {
        let ids = match selector {
            NoteSelector::Index(index) => vec![find_by_index(&indexed, *index)
                .ok_or_else(|| NotesError::Api(format!("Index {} not found", index)))?],
            NoteSelector::Range(start, end) => find_range(&indexed, *start, *end)?,
            NoteSelector::Uuid(id) => {
                if !store.contains(*id) {
                    return Err(NotesError::NoteNotFound(*id));
                }
                vec![*id]
            }
            NoteSelector::Title(term) => vec![find_by_title(&indexed, term)?],
        };
        for id in ids {
            if seen.insert(id) {
                results.push(id);
            }
        }
    }

    Ok(results)
}

fn find_by_index(indexed: &[DisplayNote], index: DisplayIndex) -> Option<NoteId> {
    indexed
        .iter()
        .find(|dn| dn.index == index)
        .map(|dn| dn.note.id)
}

/// Bucket numbers run from 1 without gaps, so a range exists when its end does.
fn find_range(
    indexed: &[DisplayNote],
    start: DisplayIndex,
    end: DisplayIndex,
) -> Result<Vec<NoteId>> {
    if find_by_index(indexed, end).is_none() {
        return Err(NotesError::Api(format!("Index {} not found", end)));
    }

    let mut in_range: Vec<&DisplayNote> = indexed
        .iter()
        .filter(|dn| {
            dn.index.same_kind(start)
                && (start.number()..=end.number()).contains(&dn.index.number())
        })
        .collect();
    in_range.sort_by_key(|dn| dn.index.number());
    Ok(in_range.iter().map(|dn| dn.note.id).collect())
}

fn find_by_title(indexed: &[DisplayNote], term: &str) -> Result<NoteId> {
    let term_lower = term.to_lowercase();
    let matches: Vec<&DisplayNote> = indexed
        .iter()
        .filter(|dn| {
            dn.note.title.to_lowercase().contains(&term_lower)
                || dn.note.content.to_lowercase().contains(&term_lower)
        })
        .collect();

    match matches.as_slice() {
        [] => Err(NotesError::Api(format!(
            "No note found matching \"{}\"",
            term
        ))),
        [only] => Ok(only.note.id),
        many => Err(NotesError::Api(format!(
            "Term \"{}\" matches {} notes ({}). Please be more specific.",
            term,
            many.len(),
            many.iter()
                .map(|dn| dn.index.to_string())
                .collect::<Vec<_>>()
                .join(", ")
        ))),
    }
}

/// Current display entries for `ids`, in the given order. Ids no longer in
/// the store are skipped.
pub fn display_notes_for(store: &NoteStore, ids: &[NoteId]) -> Vec<DisplayNote> {
    let indexed = indexed_notes(store);
    ids.iter()
        .filter_map(|id| indexed.iter().find(|dn| dn.note.id == *id).cloned())
        .collect()
}

/// Resolves selectors straight to display entries.
pub fn notes_by_selectors(
    store: &NoteStore,
    selectors: &[NoteSelector],
) -> Result<Vec<DisplayNote>> {
    let ids = resolve_selectors(store, selectors)?;
    Ok(display_notes_for(store, &ids))
}
