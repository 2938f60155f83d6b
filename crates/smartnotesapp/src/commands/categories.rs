use crate::commands::{CategoryCount, CmdResult};
use crate::error::Result;
use crate::model::PresetCategory;
use crate::store::NoteStore;

/// Counts active notes per preset category, in preset order.
///
/// Custom categories are not listed, not even ones that differ from a preset
/// only in case.
pub fn run(store: &NoteStore) -> Result<CmdResult> {
    let snapshot = store.snapshot();
    let counts = PresetCategory::ALL
        .into_iter()
        .map(|category| CategoryCount {
            category,
            count: snapshot
                .iter()
                .filter(|n| !n.is_archived && n.category.preset() == Some(category))
                .count(),
        })
        .collect();

    Ok(CmdResult::default().with_categories(counts))
}
