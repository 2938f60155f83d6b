//! # Note Store
//!
//! [`NoteStore`] exclusively owns the authoritative note collection. Every
//! other layer reads immutable [`Snapshot`]s of it.
//!
//! ## Ordering
//!
//! The collection is kept newest-created-first: [`NoteStore::create`]
//! prepends. Nothing else reorders notes, so snapshot order is creation order
//! reversed for the whole session.
//!
//! ## Snapshots
//!
//! The collection lives behind an `Rc`. A snapshot is a cheap clone of that
//! pointer. Mutators go through `Rc::make_mut`, which copies the vector only
//! while an older snapshot is still alive, so a snapshot handed out before a
//! mutation never observes it.
//!
//! ## Missing Ids
//!
//! Mutating an id that is not in the collection is a silent no-op. Mutators
//! return `false` in that case so callers may log it, but it is never an
//! error: in a single-actor session the only way to hold a stale id is a bug.
//!
//! ## Timestamps
//!
//! | Operation | `updated_at` |
//! |-----------|--------------|
//! | create | `= created_at = now` |
//! | update | refreshed, strictly increasing |
//! | toggle pin / archive | untouched |

use chrono::{DateTime, TimeDelta, Utc};
use log::debug;
use std::ops::Deref;
use std::rc::Rc;

use crate::model::{Note, NoteDraft, NoteId, NotePatch};

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures;

/// Immutable point-in-time view of the note collection.
#[derive(Debug, Clone, Default)]
pub struct Snapshot(Rc<Vec<Note>>);

impl Snapshot {
    pub fn notes(&self) -> &[Note] {
        &self.0
    }

    pub fn get(&self, id: NoteId) -> Option<&Note> {
        self.0.iter().find(|n| n.id == id)
    }

    /// Whether both snapshots share the same underlying collection.
    pub fn ptr_eq(&self, other: &Snapshot) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl Deref for Snapshot {
    type Target = [Note];

    fn deref(&self) -> &[Note] {
        &self.0
    }
}

impl PartialEq for Snapshot {
    fn eq(&self, other: &Self) -> bool {
        self.notes() == other.notes()
    }
}

impl Eq for Snapshot {}

#[derive(Debug, Default)]
pub struct NoteStore {
    notes: Rc<Vec<Note>>,
}

impl NoteStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts from an existing collection, kept in the given order.
    /// Later notes reusing an earlier note's id are dropped.
    pub fn with_notes(notes: Vec<Note>) -> Self {
        let mut unique: Vec<Note> = Vec::with_capacity(notes.len());
        for note in notes {
            if unique.iter().any(|n| n.id == note.id) {
                debug!("event=note_seed status=duplicate_id id={}", note.id);
                continue;
            }
            unique.push(note);
        }
        Self {
            notes: Rc::new(unique),
        }
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot(Rc::clone(&self.notes))
    }

    pub fn get(&self, id: NoteId) -> Option<&Note> {
        self.notes.iter().find(|n| n.id == id)
    }

    pub fn contains(&self, id: NoteId) -> bool {
        self.get(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    /// Creates a note from a draft and puts it at the front.
    pub fn create(&mut self, draft: NoteDraft) -> NoteId {
        let id = self.fresh_id();
        let note = Note::from_draft(id, draft, Utc::now());
        Rc::make_mut(&mut self.notes).insert(0, note);
        debug!("event=note_create id={} total={}", id, self.notes.len());
        id
    }

    /// Merges `patch` over the note and refreshes `updated_at`.
    pub fn update(&mut self, id: NoteId, patch: &NotePatch) -> bool {
        let Some(note) = self.note_mut(id) else {
            debug!("event=note_update status=missing id={}", id);
            return false;
        };
        patch.apply(note);
        note.updated_at = next_update_time(note.updated_at);
        debug!("event=note_update id={}", id);
        true
    }

    /// Permanently removes the note.
    pub fn delete(&mut self, id: NoteId) -> bool {
        let Some(pos) = self.position(id) else {
            debug!("event=note_delete status=missing id={}", id);
            return false;
        };
        Rc::make_mut(&mut self.notes).remove(pos);
        debug!("event=note_delete id={} total={}", id, self.notes.len());
        true
    }

    pub fn toggle_pin(&mut self, id: NoteId) -> bool {
        let Some(note) = self.note_mut(id) else {
            debug!("event=note_pin status=missing id={}", id);
            return false;
        };
        note.is_pinned = !note.is_pinned;
        debug!("event=note_pin id={} pinned={}", id, note.is_pinned);
        true
    }

    pub fn toggle_archive(&mut self, id: NoteId) -> bool {
        let Some(note) = self.note_mut(id) else {
            debug!("event=note_archive status=missing id={}", id);
            return false;
        };
        note.is_archived = !note.is_archived;
        debug!("event=note_archive id={} archived={}", id, note.is_archived);
        true
    }

    fn position(&self, id: NoteId) -> Option<usize> {
        self.notes.iter().position(|n| n.id == id)
    }

    // Look up before make_mut so a miss never copies a shared collection.
    fn note_mut(&mut self, id: NoteId) -> Option<&mut Note> {
        let pos = self.position(id)?;
        Some(&mut Rc::make_mut(&mut self.notes)[pos])
    }

    fn fresh_id(&self) -> NoteId {
        loop {
            let id = NoteId::new();
            if !self.contains(id) {
                return id;
            }
        }
    }
}

/// `now`, or one nanosecond past `previous` when the clock has not moved on.
fn next_update_time(previous: DateTime<Utc>) -> DateTime<Utc> {
    let now = Utc::now();
    if now > previous {
        now
    } else {
        previous + TimeDelta::nanoseconds(1)
    }
}
