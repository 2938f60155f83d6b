use smartnotesapp::api::NotesApi;
use smartnotesapp::error::NotesError;
use smartnotesapp::model::NoteDraft;
use smartnotesapp::store::NoteStore;

fn setup() -> NotesApi {
    let mut api = NotesApi::new(NoteStore::new());
    api.create_note(
        NoteDraft::new()
            .with_title("Groceries")
            .with_content("Milk, Eggs"),
    )
    .unwrap();
    api.create_note(
        NoteDraft::new()
            .with_title("Grocery List")
            .with_content("Bread, Butter"),
    )
    .unwrap();
    api.create_note(NoteDraft::new().with_title("Gold").with_content("Au"))
        .unwrap();
    api
}

#[test]
fn test_referencing_by_index() {
    let api = setup();
    // Newest first: Gold (1), Grocery List (2), Groceries (3)
    let res = api.view_notes(&["1"]).unwrap();
    assert_eq!(res.listed_notes[0].note.title, "Gold");

    let res = api.view_notes(&["3"]).unwrap();
    assert_eq!(res.listed_notes[0].note.title, "Groceries");
}

#[test]
fn test_referencing_range() {
    let api = setup();
    let res = api.view_notes(&["1-3"]).unwrap();
    assert_eq!(res.listed_notes.len(), 3);
}

#[test]
fn test_referencing_by_title_partial() {
    let api = setup();
    let res = api.view_notes(&["old"]).unwrap();
    assert_eq!(res.listed_notes.len(), 1);
    assert_eq!(res.listed_notes[0].note.title, "Gold");
}

#[test]
fn test_referencing_by_content() {
    let api = setup();
    let res = api.view_notes(&["butter"]).unwrap();
    assert_eq!(res.listed_notes[0].note.title, "Grocery List");
}

#[test]
fn test_referencing_by_title_multi_word_arg() {
    let api = setup();
    let res = api.view_notes(&["Grocery", "List"]).unwrap();
    assert_eq!(res.listed_notes.len(), 1);
    assert_eq!(res.listed_notes[0].note.title, "Grocery List");
}

#[test]
fn test_referencing_ambiguous_title_fails() {
    let api = setup();
    let err = api.view_notes(&["groc"]).unwrap_err();
    assert!(matches!(err, NotesError::Api(msg) if msg.contains("Please be more specific")));
}

#[test]
fn test_referencing_missing_index_fails() {
    let api = setup();
    assert!(api.view_notes(&["p1"]).is_err());
    assert!(api.view_notes(&["9"]).is_err());
}

#[test]
fn test_referencing_survives_pin() {
    let mut api = setup();
    api.toggle_pin(&["2"]).unwrap();

    let res = api.view_notes(&["p1"]).unwrap();
    assert_eq!(res.listed_notes[0].note.title, "Grocery List");

    // Regular indexes close the gap left by the pinned note.
    let res = api.view_notes(&["2"]).unwrap();
    assert_eq!(res.listed_notes[0].note.title, "Groceries");
}
