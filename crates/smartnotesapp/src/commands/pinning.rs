use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::index::NoteSelector;
use crate::store::NoteStore;

use super::helpers::{display_notes_for, resolve_selectors};

/// Flips the pinned flag of each selected note.
///
/// Selecting a pinned and an unpinned note together swaps both. Pins only
/// group notes in the active view; archived notes keep their flag but are
/// listed flat.
pub fn toggle(store: &mut NoteStore, selectors: &[NoteSelector]) -> Result<CmdResult> {
    let ids = resolve_selectors(store, selectors)?;
    for id in &ids {
        store.toggle_pin(*id);
    }

    let affected = display_notes_for(store, &ids);
    let mut result = CmdResult::default();
    for dn in &affected {
        let verb = if dn.note.is_pinned { "pinned" } else { "unpinned" };
        result.add_message(CmdMessage::success(format!(
            "Note {} ({}): {}",
            verb,
            dn.index,
            dn.note.display_title()
        )));
    }
    Ok(result.with_affected_notes(affected))
}
