use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::index::NoteSelector;
use crate::model::NotePatch;
use crate::store::NoteStore;

use super::helpers::{display_notes_for, resolve_selectors};

/// Merges `patch` into every selected note.
pub fn run(
    store: &mut NoteStore,
    selectors: &[NoteSelector],
    patch: &NotePatch,
) -> Result<CmdResult> {
    let ids = resolve_selectors(store, selectors)?;
    let mut result = CmdResult::default();

    if patch.is_empty() {
        result.add_message(CmdMessage::info("Nothing to update"));
        return Ok(result.with_affected_notes(display_notes_for(store, &ids)));
    }

    for id in &ids {
        store.update(*id, patch);
    }

    let affected = display_notes_for(store, &ids);
    for dn in &affected {
        result.add_message(CmdMessage::success(format!(
            "Note updated ({}): {}",
            dn.index,
            dn.note.display_title()
        )));
    }
    Ok(result.with_affected_notes(affected))
}
