//! Session state and per-command handlers.
//!
//! A [`Session`] holds what a notes window would: the API, the current view,
//! the selected category, the search query and the open draft. Handlers call
//! the API and return rendered text; they never print, which keeps them
//! testable without a terminal.

use clap::error::ErrorKind;
use clap::Parser;
use log::debug;
use smartnotesapp::api::NotesApi;
use smartnotesapp::commands::{CmdMessage, CmdResult};
use smartnotesapp::error::{NotesError, Result};
use smartnotesapp::model::{Category, NoteColor, NoteDraft, NoteId, View};
use smartnotesapp::query::NoteFilter;

use super::render::{
    render_categories, render_full_notes, render_json, render_listing, render_messages,
    render_state,
};
use super::setup::{session_help, DraftArgs, SessionCommand, SessionLine};

/// What the read loop does after a line.
#[derive(Debug, PartialEq, Eq)]
pub enum Flow {
    Continue(String),
    Quit,
}

struct Editor {
    id: Option<NoteId>,
    draft: NoteDraft,
}

pub struct Session {
    api: NotesApi,
    view: View,
    category: Option<String>,
    search: String,
    editor: Option<Editor>,
    line_width: usize,
}

impl Session {
    pub fn new(api: NotesApi, line_width: usize) -> Self {
        Self {
            api,
            view: View::Active,
            category: None,
            search: String::new(),
            editor: None,
            line_width,
        }
    }

    pub fn prompt(&self) -> &'static str {
        if self.editor.is_some() {
            "smartnotes (draft)> "
        } else {
            "smartnotes> "
        }
    }

    /// Splits, parses and runs one input line. Blank lines and `#` comments
    /// do nothing.
    pub fn execute_line(&mut self, line: &str) -> Result<Flow> {
        let words = shell_words::split(line).map_err(|e| NotesError::Api(e.to_string()))?;
        let Some(name) = words.first() else {
            return Ok(Flow::Continue(String::new()));
        };
        debug!("event=session_command command={}", name);

        match SessionLine::try_parse_from(&words) {
            Ok(parsed) => self.execute(parsed.command),
            Err(e) if e.kind() == ErrorKind::DisplayHelp => Ok(Flow::Continue(e.to_string())),
            Err(e) => {
                let rendered = e.to_string();
                let first = rendered.lines().next().unwrap_or_default();
                Err(NotesError::Api(
                    first.strip_prefix("error: ").unwrap_or(first).to_string(),
                ))
            }
        }
    }

    pub fn execute(&mut self, command: SessionCommand) -> Result<Flow> {
        let output = match command {
            SessionCommand::New { words, draft } => self.handle_new(words, draft)?,
            SessionCommand::Edit { selectors, draft } => self.handle_edit(selectors, draft)?,
            SessionCommand::Save => self.handle_save()?,
            SessionCommand::Cancel => self.handle_cancel(),
            SessionCommand::View { indexes } => self.handle_view(&indexes)?,
            SessionCommand::Rm { indexes } => messages(self.api.delete_notes(&indexes)?),
            SessionCommand::Pin { indexes } => messages(self.api.toggle_pin(&indexes)?),
            SessionCommand::Archive { indexes } => messages(self.api.toggle_archive(&indexes)?),
            SessionCommand::Tag { tag, indexes } => messages(self.api.add_tag(&indexes, &tag)?),
            SessionCommand::Untag { tag, indexes } => {
                messages(self.api.remove_tag(&indexes, &tag)?)
            }
            SessionCommand::Ls { json } => self.handle_list(json)?,
            SessionCommand::Notes => {
                self.view = View::Active;
                self.category = None;
                self.handle_list(false)?
            }
            SessionCommand::Archived => {
                self.view = View::Archived;
                self.handle_list(false)?
            }
            SessionCommand::Category { name } => self.handle_category(name)?,
            SessionCommand::Search { query } => {
                self.search = query.join(" ");
                self.handle_list(false)?
            }
            SessionCommand::Categories => {
                let result = self.api.categories()?;
                render_categories(&result.categories, self.category.as_deref())
            }
            SessionCommand::Help => session_help(),
            SessionCommand::Quit => return Ok(Flow::Quit),
        };

        Ok(Flow::Continue(output))
    }

    fn filter(&self) -> NoteFilter {
        let mut filter = NoteFilter::new(self.view);
        if let Some(category) = &self.category {
            filter = filter.with_category(category.clone());
        }
        if !self.search.trim().is_empty() {
            filter = filter.with_search(self.search.clone());
        }
        filter
    }

    fn handle_list(&self, json: bool) -> Result<String> {
        let result = self.api.get_notes(&self.filter())?;
        if json {
            return render_json(&result.listed_notes, self.view);
        }

        let mut output = render_state(self.view, self.category.as_deref(), &self.search);
        output.push_str(&render_listing(&result.listed_notes, self.line_width));
        Ok(output)
    }

    fn handle_category(&mut self, name: Vec<String>) -> Result<String> {
        let name = name.join(" ");
        if name.trim().is_empty() {
            self.category = None;
        } else {
            self.view = View::Active;
            self.category = Some(name.trim().to_string());
        }
        self.handle_list(false)
    }

    fn handle_view(&self, indexes: &[String]) -> Result<String> {
        let result = self.api.view_notes(indexes)?;
        let mut output = render_messages(&result.messages);
        output.push_str(&render_full_notes(&result.listed_notes));
        Ok(output)
    }

    fn handle_new(&mut self, words: Vec<String>, args: DraftArgs) -> Result<String> {
        let mut draft = NoteDraft::new();
        if !words.is_empty() {
            draft = draft.with_title(words.join(" "));
        }
        let draft = apply_draft_args(draft, args)?;

        let mut out = self.open_editor(None, draft);
        out.push(CmdMessage::info(
            "Editing a new note. Type 'save' to keep it or 'cancel' to drop it.",
        ));
        Ok(render_messages(&out))
    }

    fn handle_edit(&mut self, selectors: Vec<String>, args: DraftArgs) -> Result<String> {
        if selectors.is_empty() {
            let editor = self
                .editor
                .as_mut()
                .ok_or_else(|| NotesError::Api("Nothing is being edited".to_string()))?;
            editor.draft = apply_draft_args(editor.draft.clone(), args)?;
            return Ok(render_messages(&[CmdMessage::info("Draft updated")]));
        }

        let result = self.api.view_notes(&selectors)?;
        let [selected] = result.listed_notes.as_slice() else {
            return Err(NotesError::Api(format!(
                "Select exactly one note to edit ({} selected)",
                result.listed_notes.len()
            )));
        };
        let heading = format!(
            "Editing ({}): {}",
            selected.index,
            selected.note.display_title()
        );
        let draft = apply_draft_args(NoteDraft::from(&selected.note), args)?;

        let mut out = self.open_editor(Some(selected.note.id), draft);
        out.push(CmdMessage::info(heading));
        Ok(render_messages(&out))
    }

    fn open_editor(&mut self, id: Option<NoteId>, draft: NoteDraft) -> Vec<CmdMessage> {
        let replaced = self.editor.replace(Editor { id, draft });
        match replaced {
            Some(_) => vec![CmdMessage::warning("Unsaved draft discarded")],
            None => Vec::new(),
        }
    }

    /// The draft stays open when saving fails.
    fn handle_save(&mut self) -> Result<String> {
        let editor = self
            .editor
            .as_ref()
            .ok_or_else(|| NotesError::Api("Nothing to save".to_string()))?;
        let result = self.api.save_note(editor.id, editor.draft.clone())?;
        self.editor = None;
        Ok(messages(result))
    }

    fn handle_cancel(&mut self) -> String {
        let message = match self.editor.take() {
            Some(_) => CmdMessage::info("Draft discarded"),
            None => CmdMessage::info("Nothing to cancel"),
        };
        render_messages(&[message])
    }
}

fn messages(result: CmdResult) -> String {
    render_messages(&result.messages)
}

/// Overlays the `new`/`edit` flags on a draft. Tags are added to the ones the
/// draft already has. A literal `\n` in the content becomes a line break.
fn apply_draft_args(mut draft: NoteDraft, args: DraftArgs) -> Result<NoteDraft> {
    if let Some(title) = args.title {
        draft = draft.with_title(title);
    }
    if let Some(content) = args.content {
        draft = draft.with_content(content.replace("\\n", "\n"));
    }
    if !args.tags.is_empty() {
        let mut tags = draft.tags.take().unwrap_or_default();
        for tag in &args.tags {
            tags.insert(tag)?;
        }
        draft.tags = Some(tags);
    }
    if let Some(category) = args.category {
        draft = draft.with_category(Category::parse(&category));
    }
    if let Some(color) = args.color {
        draft = draft.with_color(color.parse::<NoteColor>()?);
    }
    if args.pin {
        draft = draft.with_pinned(true);
    }
    Ok(draft)
}

#[cfg(test)]
mod tests {
    use super::*;
    use smartnotesapp::model::PresetCategory;
    use smartnotesapp::seed::demo_notes;
    use smartnotesapp::store::NoteStore;

    fn session() -> Session {
        colored::control::set_override(false);
        Session::new(NotesApi::new(NoteStore::new()), 100)
    }

    fn demo_session() -> Session {
        colored::control::set_override(false);
        Session::new(NotesApi::new(NoteStore::with_notes(demo_notes())), 100)
    }

    fn run(session: &mut Session, line: &str) -> String {
        match session.execute_line(line).unwrap() {
            Flow::Continue(output) => output,
            Flow::Quit => panic!("unexpected quit on {line}"),
        }
    }

    #[test]
    fn test_new_then_save_creates_note() {
        let mut s = session();
        let out = run(&mut s, "new Buy milk -c '2 liters' -t shopping --color blue");
        assert!(out.contains("Editing a new note"));
        assert_eq!(s.prompt(), "smartnotes (draft)> ");
        assert!(s.api.snapshot().is_empty());

        let out = run(&mut s, "save");
        assert!(out.contains("Note created (1): Buy milk"));
        assert_eq!(s.prompt(), "smartnotes> ");

        let note = &s.api.snapshot()[0];
        assert_eq!(note.content, "2 liters");
        assert!(note.tags.contains("shopping"));
        assert_eq!(note.color, NoteColor::Blue);
    }

    #[test]
    fn test_saving_blank_draft_discards_it() {
        let mut s = session();
        run(&mut s, "new");
        let out = run(&mut s, "save");
        assert!(out.contains("Empty note discarded"));
        assert!(s.api.snapshot().is_empty());
    }

    #[test]
    fn test_save_without_draft_is_error() {
        let mut s = session();
        let err = s.execute_line("save").unwrap_err();
        assert_eq!(err.to_string(), "Api Error: Nothing to save");
    }

    #[test]
    fn test_failed_save_keeps_draft_open() {
        let mut s = session();
        run(&mut s, "new Keep -c 'first body'");
        run(&mut s, "save");
        run(&mut s, "edit 1 -c 'edited body'");
        run(&mut s, "rm 1");

        let err = s.execute_line("save").unwrap_err();
        assert!(matches!(err, NotesError::NoteNotFound(_)));
        assert_eq!(s.prompt(), "smartnotes (draft)> ");
        assert_eq!(
            s.editor.as_ref().and_then(|e| e.draft.content.as_deref()),
            Some("edited body")
        );

        assert!(run(&mut s, "cancel").contains("Draft discarded"));
        assert!(s.api.snapshot().is_empty());
    }

    #[test]
    fn test_cancel_drops_draft() {
        let mut s = session();
        run(&mut s, "new Draft");
        assert!(run(&mut s, "cancel").contains("Draft discarded"));
        assert!(s.execute_line("save").is_err());
        assert!(run(&mut s, "cancel").contains("Nothing to cancel"));
    }

    #[test]
    fn test_new_over_open_draft_warns() {
        let mut s = session();
        run(&mut s, "new First");
        let out = run(&mut s, "new Second");
        assert!(out.contains("Unsaved draft discarded"));
        run(&mut s, "save");
        assert_eq!(s.api.snapshot()[0].title, "Second");
    }

    #[test]
    fn test_edit_existing_note() {
        let mut s = demo_session();
        let out = run(&mut s, "edit grocery --title Groceries --category Work");
        assert!(out.contains("Editing (1): Grocery List"));

        run(&mut s, "edit -t weekly");
        let out = run(&mut s, "save");
        assert!(out.contains("Note updated (1): Groceries"));

        let note = s
            .api
            .snapshot()
            .iter()
            .find(|n| n.title == "Groceries")
            .cloned()
            .unwrap();
        assert_eq!(note.category, Category::Preset(PresetCategory::Work));
        assert!(note.tags.contains("shopping"));
        assert!(note.tags.contains("weekly"));
        assert_eq!(s.api.snapshot().len(), 3);
    }

    #[test]
    fn test_edit_needs_exactly_one_note() {
        let mut s = demo_session();
        let err = s.execute_line("edit p1-p2").unwrap_err();
        assert!(err.to_string().contains("Select exactly one note"));

        let mut s = session();
        let err = s.execute_line("edit --title X").unwrap_err();
        assert!(err.to_string().contains("Nothing is being edited"));
    }

    #[test]
    fn test_bad_color_keeps_previous_state() {
        let mut s = session();
        let err = s.execute_line("new Paint --color mauve").unwrap_err();
        assert!(matches!(err, NotesError::InvalidColor(c) if c == "mauve"));
        assert_eq!(s.prompt(), "smartnotes> ");
    }

    #[test]
    fn test_blank_tag_is_rejected() {
        let mut s = session();
        let err = s.execute_line("new X -t '  '").unwrap_err();
        assert!(matches!(err, NotesError::InvalidTag(_)));
    }

    #[test]
    fn test_listing_follows_session_state() {
        let mut s = demo_session();
        let out = run(&mut s, "ls");
        assert!(out.starts_with("Notes\nPinned\n"));
        assert!(out.contains("Others"));

        let out = run(&mut s, "category Work");
        assert!(out.starts_with("Notes / Work\n"));
        assert!(out.contains("Meeting Notes"));
        assert!(!out.contains("Grocery List"));

        let out = run(&mut s, "search shopping");
        assert!(out.contains("No notes found"));

        let out = run(&mut s, "notes");
        assert!(out.starts_with("Notes  search: \"shopping\"\n"));
        assert!(out.contains("Grocery List"));

        let out = run(&mut s, "search");
        assert!(out.contains("Project Ideas"));
    }

    #[test]
    fn test_archive_flow() {
        let mut s = demo_session();
        let out = run(&mut s, "archive grocery");
        assert!(out.contains("Note archived (a1): Grocery List"));

        let out = run(&mut s, "archived");
        assert!(out.starts_with("Archive\n"));
        assert!(out.contains("a1. "));
        assert!(!out.contains("Pinned"));

        run(&mut s, "archive a1");
        let out = run(&mut s, "ls");
        assert!(out.contains("No notes found"));
    }

    #[test]
    fn test_category_keeps_archive_until_selected() {
        let mut s = demo_session();
        run(&mut s, "archived");
        run(&mut s, "category Work");
        assert_eq!(s.view, View::Active);
        run(&mut s, "archived");
        assert_eq!(s.category.as_deref(), Some("Work"));
        run(&mut s, "category");
        assert!(s.category.is_none());
        assert_eq!(s.view, View::Archived);
    }

    #[test]
    fn test_json_listing() {
        let mut s = demo_session();
        let out = run(&mut s, "ls --json");
        let json: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(json["pinned"].as_array().unwrap().len(), 2);
        assert_eq!(json["others"][0]["title"], "Grocery List");
    }

    #[test]
    fn test_tag_pin_and_delete() {
        let mut s = demo_session();
        assert!(run(&mut s, "tag todo 1").contains("Added tag [todo] to 1 note(s)"));
        assert!(run(&mut s, "untag todo 1").contains("Removed tag [todo] from 1 note(s)"));
        assert!(run(&mut s, "pin 1").contains("Note pinned"));
        assert!(run(&mut s, "rm p1-p3").contains("Note deleted"));
        assert!(s.api.snapshot().is_empty());
    }

    #[test]
    fn test_view_and_categories() {
        let mut s = demo_session();
        let out = run(&mut s, "view p2");
        assert!(out.starts_with("p2 Meeting Notes\n"));
        assert!(out.contains("Discuss Q3 roadmap"));

        run(&mut s, "category Ideas");
        let out = run(&mut s, "categories");
        assert!(out.contains("  > Ideas"));
        assert!(out.contains("    Personal       1"));
    }

    #[test]
    fn test_unknown_selectors_are_errors() {
        let mut s = demo_session();
        assert!(s.execute_line("pin 9").is_err());
        assert!(s.execute_line("pin 3-1").is_err());
        assert!(s.execute_line("pin nothing like this").is_err());
    }

    #[test]
    fn test_parse_errors_are_one_line() {
        let mut s = session();
        let err = s.execute_line("frobnicate").unwrap_err().to_string();
        assert!(err.contains("unrecognized subcommand"));
        assert!(!err.contains('\n'));

        let err = s.execute_line("new \"open").unwrap_err().to_string();
        assert!(err.contains("missing closing quote"));
    }

    #[test]
    fn test_content_escapes_become_line_breaks() {
        let mut s = session();
        run(&mut s, r#"new Steps -c "first\nsecond""#);
        assert_eq!(
            s.editor.as_ref().unwrap().draft.content.as_deref(),
            Some("first\nsecond")
        );
        run(&mut s, r"edit -c 'one\ntwo\nthree'");
        assert_eq!(
            s.editor.as_ref().unwrap().draft.content.as_deref(),
            Some("one\ntwo\nthree")
        );
    }

    #[test]
    fn test_blank_comment_help_and_quit() {
        let mut s = session();
        assert_eq!(run(&mut s, "   "), "");
        assert_eq!(run(&mut s, "# note to self"), "");
        assert!(run(&mut s, "help").contains("Commands:"));
        assert!(run(&mut s, "pin --help").contains("Usage"));
        assert_eq!(s.execute_line("quit").unwrap(), Flow::Quit);
        assert_eq!(s.execute_line("exit").unwrap(), Flow::Quit);
    }
}
