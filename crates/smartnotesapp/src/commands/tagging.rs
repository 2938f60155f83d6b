//! Single-tag editing commands.
//!
//! - `add_tag`: append a tag to the selected notes
//! - `remove_tag`: drop a tag from the selected notes
//!
//! Both are idempotent per note. Tag edits count as content edits, so a
//! note that actually changes gets a fresh `updated_at`.

use crate::commands::helpers::{display_notes_for, resolve_selectors};
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::index::NoteSelector;
use crate::model::NotePatch;
use crate::store::NoteStore;
use crate::tags::normalize_tag;

pub fn add_tag(store: &mut NoteStore, selectors: &[NoteSelector], tag: &str) -> Result<CmdResult> {
    let tag = normalize_tag(tag)?;
    let ids = resolve_selectors(store, selectors)?;
    let mut modified_count = 0;

    for id in &ids {
        let Some(note) = store.get(*id) else {
            continue;
        };
        let mut tags = note.tags.clone();
        if tags.insert(&tag)? {
            store.update(*id, &NotePatch::new().with_tags(tags));
            modified_count += 1;
        }
    }

    let mut result = CmdResult::default();
    if modified_count > 0 {
        result.add_message(CmdMessage::success(format!(
            "Added tag [{}] to {} note{}",
            tag,
            modified_count,
            plural(modified_count)
        )));
    } else {
        result.add_message(CmdMessage::info(format!(
            "All notes already have tag [{}]",
            tag
        )));
    }
    Ok(result.with_affected_notes(display_notes_for(store, &ids)))
}

pub fn remove_tag(
    store: &mut NoteStore,
    selectors: &[NoteSelector],
    tag: &str,
) -> Result<CmdResult> {
    let tag = normalize_tag(tag)?;
    let ids = resolve_selectors(store, selectors)?;
    let mut modified_count = 0;

    for id in &ids {
        let Some(note) = store.get(*id) else {
            continue;
        };
        let mut tags = note.tags.clone();
        if tags.remove(&tag) {
            store.update(*id, &NotePatch::new().with_tags(tags));
            modified_count += 1;
        }
    }

    let mut result = CmdResult::default();
    if modified_count > 0 {
        result.add_message(CmdMessage::success(format!(
            "Removed tag [{}] from {} note{}",
            tag,
            modified_count,
            plural(modified_count)
        )));
    } else {
        result.add_message(CmdMessage::info(format!(
            "No selected note has tag [{}]",
            tag
        )));
    }
    Ok(result.with_affected_notes(display_notes_for(store, &ids)))
}

fn plural(count: usize) -> &'static str {
    if count == 1 {
        ""
    } else {
        "s"
    }
}
