use super::NoteStore;
use crate::model::{Category, NoteColor, NoteDraft, NoteId};

pub struct StoreFixture {
    pub store: NoteStore,
}

impl Default for StoreFixture {
    fn default() -> Self {
        Self::new()
    }
}

impl StoreFixture {
    pub fn new() -> Self {
        Self {
            store: NoteStore::new(),
        }
    }

    pub fn with_notes(mut self, count: usize) -> Self {
        for i in 0..count {
            self.store.create(
                NoteDraft::new()
                    .with_title(format!("Test Note {}", i + 1))
                    .with_content(format!("Content for note {}", i + 1)),
            );
        }
        self
    }

    pub fn with_note(mut self, title: &str) -> Self {
        self.store
            .create(NoteDraft::new().with_title(title).with_content("Some content"));
        self
    }

    pub fn with_pinned_note(mut self, title: &str) -> Self {
        self.store.create(
            NoteDraft::new()
                .with_title(title)
                .with_content("Pinned content")
                .with_pinned(true),
        );
        self
    }

    pub fn with_archived_note(mut self, title: &str) -> Self {
        let id = self.store.create(
            NoteDraft::new()
                .with_title(title)
                .with_content("Archived content"),
        );
        self.store.toggle_archive(id);
        self
    }

    pub fn with_categorized_note(mut self, title: &str, category: impl Into<Category>) -> Self {
        self.store
            .create(NoteDraft::new().with_title(title).with_category(category));
        self
    }

    pub fn with_colored_note(mut self, title: &str, color: NoteColor) -> Self {
        self.store
            .create(NoteDraft::new().with_title(title).with_color(color));
        self
    }

    pub fn with_draft(mut self, draft: NoteDraft) -> Self {
        self.store.create(draft);
        self
    }

    /// Id of the note whose title equals `title`.
    pub fn id_of(&self, title: &str) -> NoteId {
        self.store
            .snapshot()
            .iter()
            .find(|n| n.title == title)
            .map(|n| n.id)
            .unwrap_or_else(|| panic!("no fixture note titled {title:?}"))
    }
}
