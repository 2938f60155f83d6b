//! Editor save.
//!
//! The note editor holds a full draft. Saving it either creates a note (no
//! id yet) or overwrites every editable field of an existing one. A draft
//! with neither title nor content is discarded instead of saved, so an
//! editor closed without typing anything leaves no empty note behind.

use crate::commands::{create, update, CmdMessage, CmdResult};
use crate::error::{NotesError, Result};
use crate::index::NoteSelector;
use crate::model::{NoteDraft, NoteId, NotePatch};
use crate::store::NoteStore;

pub fn run(store: &mut NoteStore, id: Option<NoteId>, draft: NoteDraft) -> Result<CmdResult> {
    if draft.is_blank() {
        let mut result = CmdResult::default();
        result.add_message(CmdMessage::info("Empty note discarded"));
        return Ok(result);
    }

    match id {
        None => create::run(store, draft),
        Some(id) => {
            if !store.contains(id) {
                return Err(NotesError::NoteNotFound(id));
            }
            update::run(store, &[NoteSelector::Uuid(id)], &NotePatch::from(draft))
        }
    }
}
