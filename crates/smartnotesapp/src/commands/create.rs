use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::NoteDraft;
use crate::store::NoteStore;

use super::helpers::display_notes_for;

pub fn run(store: &mut NoteStore, draft: NoteDraft) -> Result<CmdResult> {
    let id = store.create(draft);
    let affected = display_notes_for(store, &[id]);

    let mut result = CmdResult::default();
    for dn in &affected {
        result.add_message(CmdMessage::success(format!(
            "Note created ({}): {}",
            dn.index,
            dn.note.display_title()
        )));
    }
    Ok(result.with_affected_notes(affected))
}
