use std::collections::HashMap;

use crate::commands::CmdResult;
use crate::error::Result;
use crate::index::{index_notes, DisplayIndex, DisplayNote};
use crate::model::NoteId;
use crate::query::{self, NoteFilter};
use crate::search::SearchTerm;
use crate::store::NoteStore;

/// Runs the query engine and pairs each hit with its canonical index.
///
/// `listed_notes` follows the engine's order: in the active view all pinned
/// hits come first. When the filter carries a non-blank query, each entry
/// records the signals that matched it.
pub fn run(store: &NoteStore, filter: &NoteFilter) -> Result<CmdResult> {
    let snapshot = store.snapshot();
    let indexes: HashMap<NoteId, DisplayIndex> = index_notes(&snapshot)
        .into_iter()
        .map(|dn| (dn.note.id, dn.index))
        .collect();
    let term = filter.search_term.as_deref().and_then(SearchTerm::parse);

    let listed: Vec<DisplayNote> = query::run(&snapshot, filter)
        .into_notes()
        .into_iter()
        .filter_map(|note| {
            let index = *indexes.get(&note.id)?;
            let matches = term
                .as_ref()
                .map(|t| t.signals(&note))
                .unwrap_or_default();
            Some(DisplayNote {
                index,
                note,
                matches,
            })
        })
        .collect();

    Ok(CmdResult::default().with_listed_notes(listed))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{NoteColor, NoteDraft, PresetCategory, View};
    use crate::search::MatchSignal;
    use crate::store::fixtures::StoreFixture;

    #[test]
    fn lists_active_notes_pinned_first() {
        let fixture = StoreFixture::new()
            .with_pinned_note("Pinned")
            .with_note("Newest")
            .with_archived_note("Gone");

        let result = run(&fixture.store, &NoteFilter::default()).unwrap();
        let listed: Vec<(String, &str)> = result
            .listed_notes
            .iter()
            .map(|dn| (dn.index.to_string(), dn.note.title.as_str()))
            .collect();
        assert_eq!(
            listed,
            [("p1".to_string(), "Pinned"), ("1".to_string(), "Newest")]
        );
    }

    #[test]
    fn search_keeps_canonical_indexes() {
        let fixture = StoreFixture::new()
            .with_note("Alpha")
            .with_note("Beta")
            .with_note("Gamma");

        let result = run(&fixture.store, &NoteFilter::default().with_search("alpha")).unwrap();
        assert_eq!(result.listed_notes.len(), 1);
        assert_eq!(result.listed_notes[0].index, DisplayIndex::Regular(3));
        assert_eq!(result.listed_notes[0].matches, [MatchSignal::Text]);
    }

    #[test]
    fn records_color_and_category_signals() {
        let fixture = StoreFixture::new()
            .with_colored_note("Alert", NoteColor::Red)
            .with_categorized_note("Standup", PresetCategory::Work);

        let red = run(&fixture.store, &NoteFilter::default().with_search("red")).unwrap();
        assert_eq!(red.listed_notes.len(), 1);
        assert_eq!(red.listed_notes[0].matches, [MatchSignal::Color]);

        let work = run(&fixture.store, &NoteFilter::default().with_search("Work")).unwrap();
        assert_eq!(work.listed_notes[0].note.title, "Standup");
        assert_eq!(work.listed_notes[0].matches, [MatchSignal::Category]);
    }

    #[test]
    fn archived_view_uses_archive_indexes() {
        let fixture = StoreFixture::new()
            .with_archived_note("Old")
            .with_draft(NoteDraft::new().with_title("Older").with_pinned(true))
            .with_archived_note("Oldest");

        let result = run(&fixture.store, &NoteFilter::new(View::Archived)).unwrap();
        let indexes: Vec<String> = result
            .listed_notes
            .iter()
            .map(|dn| dn.index.to_string())
            .collect();
        assert_eq!(indexes, ["a1", "a2"]);
        assert!(result.listed_notes.iter().all(|dn| dn.matches.is_empty()));
    }
}
