use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::index::NoteSelector;
use crate::store::NoteStore;

use super::helpers::{display_notes_for, resolve_selectors};

/// Moves each selected note to the other view.
pub fn toggle(store: &mut NoteStore, selectors: &[NoteSelector]) -> Result<CmdResult> {
    let ids = resolve_selectors(store, selectors)?;
    for id in &ids {
        store.toggle_archive(*id);
    }

    let affected = display_notes_for(store, &ids);
    let mut result = CmdResult::default();
    for dn in &affected {
        let verb = if dn.note.is_archived {
            "archived"
        } else {
            "unarchived"
        };
        result.add_message(CmdMessage::success(format!(
            "Note {} ({}): {}",
            verb,
            dn.index,
            dn.note.display_title()
        )));
    }
    Ok(result.with_affected_notes(affected))
}
