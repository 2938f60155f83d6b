use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::index::NoteSelector;
use crate::store::NoteStore;

use super::helpers::notes_by_selectors;

/// Removes the selected notes. There is no trash: deletion is final.
pub fn run(store: &mut NoteStore, selectors: &[NoteSelector]) -> Result<CmdResult> {
    let targets = notes_by_selectors(store, selectors)?;
    let mut result = CmdResult::default();

    for dn in &targets {
        if store.delete(dn.note.id) {
            result.add_message(CmdMessage::success(format!(
                "Note deleted ({}): {}",
                dn.index,
                dn.note.display_title()
            )));
        }
    }

    // Reported with the index they had before deletion.
    Ok(result.with_affected_notes(targets))
}
