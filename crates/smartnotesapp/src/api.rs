//! # API Facade
//!
//! [`NotesApi`] is the single entry point for clients. It is a thin layer
//! over [`crate::commands`]:
//!
//! - **Dispatches** to the command for each operation
//! - **Normalizes inputs**: user selector strings become [`NoteSelector`]s
//! - **Returns structured types** (`Result<CmdResult>`), never text
//!
//! Business rules live in the commands and the store; the API adds none.
//!
//! ## Selector Grammar
//!
//! - **Regular index**: `N` (`1`, `42`)
//! - **Pinned index**: `pN` (`p1`)
//! - **Archived index**: `aN` (`a3`)
//! - **Ranges**: `Start-End` (`1-5`, `p1-p3`). Both ends must be the same
//!   kind and start must not exceed end.
//! - **UUID**: a note's full id
//!
//! When every input is an index, range or UUID, each is used as such, with
//! duplicates removed. Otherwise all inputs are joined with spaces into one
//! title search, so `pin grocery list` works without quoting.
//!
//! ## Raw Access
//!
//! Clients that want the engine's own output instead of indexed results can
//! use [`NotesApi::snapshot`] and [`NotesApi::query`].

use std::collections::HashSet;

use crate::commands;
use crate::error::{NotesError, Result};
use crate::index::{parse_index_or_range, NoteSelector};
use crate::model::{NoteDraft, NoteId, NotePatch};
use crate::query::{self, NoteFilter, NoteListing};
use crate::store::{NoteStore, Snapshot};

pub struct NotesApi {
    store: NoteStore,
}

impl NotesApi {
    pub fn new(store: NoteStore) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &NoteStore {
        &self.store
    }

    pub fn snapshot(&self) -> Snapshot {
        self.store.snapshot()
    }

    pub fn query(&self, filter: &NoteFilter) -> NoteListing {
        query::run(&self.store.snapshot(), filter)
    }

    pub fn create_note(&mut self, draft: NoteDraft) -> Result<commands::CmdResult> {
        commands::create::run(&mut self.store, draft)
    }

    pub fn get_notes(&self, filter: &NoteFilter) -> Result<commands::CmdResult> {
        commands::get::run(&self.store, filter)
    }

    pub fn view_notes<I: AsRef<str>>(&self, indexes: &[I]) -> Result<commands::CmdResult> {
        let selectors = parse_selectors(indexes)?;
        commands::view::run(&self.store, &selectors)
    }

    pub fn update_notes<I: AsRef<str>>(
        &mut self,
        indexes: &[I],
        patch: &NotePatch,
    ) -> Result<commands::CmdResult> {
        let selectors = parse_selectors(indexes)?;
        commands::update::run(&mut self.store, &selectors, patch)
    }

    pub fn delete_notes<I: AsRef<str>>(&mut self, indexes: &[I]) -> Result<commands::CmdResult> {
        let selectors = parse_selectors(indexes)?;
        commands::delete::run(&mut self.store, &selectors)
    }

    pub fn toggle_pin<I: AsRef<str>>(&mut self, indexes: &[I]) -> Result<commands::CmdResult> {
        let selectors = parse_selectors(indexes)?;
        commands::pinning::toggle(&mut self.store, &selectors)
    }

    pub fn toggle_archive<I: AsRef<str>>(
        &mut self,
        indexes: &[I],
    ) -> Result<commands::CmdResult> {
        let selectors = parse_selectors(indexes)?;
        commands::archive::toggle(&mut self.store, &selectors)
    }

    pub fn save_note(
        &mut self,
        id: Option<NoteId>,
        draft: NoteDraft,
    ) -> Result<commands::CmdResult> {
        commands::save::run(&mut self.store, id, draft)
    }

    pub fn add_tag<I: AsRef<str>>(
        &mut self,
        indexes: &[I],
        tag: &str,
    ) -> Result<commands::CmdResult> {
        let selectors = parse_selectors(indexes)?;
        commands::tagging::add_tag(&mut self.store, &selectors, tag)
    }

    pub fn remove_tag<I: AsRef<str>>(
        &mut self,
        indexes: &[I],
        tag: &str,
    ) -> Result<commands::CmdResult> {
        let selectors = parse_selectors(indexes)?;
        commands::tagging::remove_tag(&mut self.store, &selectors, tag)
    }

    pub fn categories(&self) -> Result<commands::CmdResult> {
        commands::categories::run(&self.store)
    }
}

/// Turns raw selector strings into selectors.
pub fn parse_selectors<I: AsRef<str>>(inputs: &[I]) -> Result<Vec<NoteSelector>> {
    if inputs.is_empty() {
        return Err(NotesError::Api("No note selected".to_string()));
    }

    let mut selectors: Vec<NoteSelector> = Vec::new();
    let mut parse_failed = false;

    for input in inputs {
        let input = input.as_ref().trim();
        match parse_index_or_range(input) {
            Ok(selector) => selectors.push(selector),
            Err(e) if e.starts_with("Invalid range") => return Err(NotesError::Api(e)),
            Err(_) => match input.parse::<NoteId>() {
                Ok(id) => selectors.push(NoteSelector::Uuid(id)),
                Err(_) => {
                    parse_failed = true;
                    break;
                }
            },
        }
    }

    if !parse_failed {
        let mut seen = HashSet::new();
        return Ok(selectors
            .into_iter()
            .filter(|s| seen.insert(s.clone()))
            .collect());
    }

    let search_term = inputs
        .iter()
        .map(|s| s.as_ref())
        .collect::<Vec<&str>>()
        .join(" ");
    if search_term.trim().is_empty() {
        return Err(NotesError::Api("No note selected".to_string()));
    }

    Ok(vec![NoteSelector::Title(search_term)])
}
