//! Demo notes a fresh session starts with.

use chrono::Utc;

use crate::model::{Note, NoteColor, NoteDraft, NoteId, PresetCategory};

/// The demo collection, in snapshot order.
pub fn demo_notes() -> Vec<Note> {
    let now = Utc::now();
    let drafts = [
        NoteDraft::new()
            .with_title("Project Ideas")
            .with_content(
                "1. AI Plant identifier\n2. Smart Recipe Manager\n3. Personal Finance Dashboard",
            )
            .with_tags(["brainstorm", "dev"])
            .with_category(PresetCategory::Ideas)
            .with_pinned(true)
            .with_color(NoteColor::Yellow),
        NoteDraft::new()
            .with_title("Grocery List")
            .with_content("- Milk\n- Eggs\n- Bread\n- Spinach")
            .with_tags(["shopping"])
            .with_category(PresetCategory::Personal)
            .with_color(NoteColor::White),
        NoteDraft::new()
            .with_title("Meeting Notes")
            .with_content(
                "Discuss Q3 roadmap. \nKey points:\n- Performance optimization\n- New UI Refresh",
            )
            .with_tags(["meeting", "urgent"])
            .with_category(PresetCategory::Work)
            .with_pinned(true)
            .with_color(NoteColor::Red),
    ];

    drafts
        .into_iter()
        .map(|draft| Note::from_draft(NoteId::new(), draft, now))
        .collect()
}
