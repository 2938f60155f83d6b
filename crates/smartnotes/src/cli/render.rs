use chrono::{DateTime, Utc};
use colored::{ColoredString, Colorize};
use smartnotesapp::commands::{CategoryCount, CmdMessage, MessageLevel};
use smartnotesapp::error::Result;
use smartnotesapp::index::{DisplayIndex, DisplayNote};
use smartnotesapp::model::{Note, NoteColor, View};
use timeago::Formatter;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const TIME_WIDTH: usize = 14;
const CATEGORY_WIDTH: usize = 10;
const PREVIEW_CHARS: usize = 50;
const PIN_MARKER: &str = "⚲";
const COLOR_MARKER: &str = "●";

pub(super) fn render_messages(messages: &[CmdMessage]) -> String {
    let mut output = String::new();
    for message in messages {
        let line = match message.level {
            MessageLevel::Info => message.content.dimmed(),
            MessageLevel::Success => message.content.green(),
            MessageLevel::Warning => message.content.yellow(),
            MessageLevel::Error => message.content.red(),
        };
        output.push_str(&format!("{}\n", line));
    }
    output
}

/// The session state above a listing: `Notes / Work  search: "milk"`.
pub(super) fn render_state(view: View, category: Option<&str>, search: &str) -> String {
    let mut header = match view {
        View::Active => "Notes".to_string(),
        View::Archived => "Archive".to_string(),
    };
    if let Some(category) = category {
        header.push_str(&format!(" / {}", category));
    }
    let mut line = header.bold().to_string();
    if !search.trim().is_empty() {
        line.push_str(&format!("  search: \"{}\"", search.trim()).dimmed().to_string());
    }
    line.push('\n');
    line
}

/// Renders a listing in engine order. Pinned entries come first in the
/// active view; the "Pinned" heading shows whenever there are any, the
/// "Others" heading only when both groups are present.
pub(super) fn render_listing(notes: &[DisplayNote], line_width: usize) -> String {
    if notes.is_empty() {
        return format!(
            "{}\n{}\n",
            "No notes found",
            "Try adjusting your search or create a new note.".dimmed()
        );
    }

    let pinned_count = notes
        .iter()
        .filter(|dn| matches!(dn.index, DisplayIndex::Pinned(_)))
        .count();
    let has_others = pinned_count < notes.len();

    let mut output = String::new();
    for (i, dn) in notes.iter().enumerate() {
        if i == 0 && pinned_count > 0 {
            output.push_str(&format!("{}\n", "Pinned".bold()));
        }
        if i == pinned_count && pinned_count > 0 && has_others {
            output.push_str(&format!("\n{}\n", "Others".bold()));
        }
        output.push_str(&render_row(dn, line_width));
        output.push('\n');
    }
    output
}

fn render_row(dn: &DisplayNote, line_width: usize) -> String {
    let note = &dn.note;

    let left_prefix = if note.is_pinned {
        format!("  {} ", PIN_MARKER)
    } else {
        "    ".to_string()
    };
    let idx_str = format!("{}. ", dn.index);
    let marker = format!("{} ", COLOR_MARKER);

    let category = truncate_to_width(note.category.as_str(), CATEGORY_WIDTH);
    let category = format!(
        " {}{}",
        category,
        " ".repeat(CATEGORY_WIDTH.saturating_sub(category.width()))
    );

    let time_ago = format_time_ago(note.updated_at);

    let fixed_width = left_prefix.width()
        + idx_str.width()
        + marker.width()
        + category.width()
        + TIME_WIDTH;
    let available = line_width.saturating_sub(fixed_width);

    let title_display = truncate_to_width(&summary_line(note), available);
    let padding = available.saturating_sub(title_display.width());

    let idx_colored = match dn.index {
        DisplayIndex::Pinned(_) => idx_str.yellow(),
        DisplayIndex::Archived(_) => idx_str.red(),
        DisplayIndex::Regular(_) => idx_str.normal(),
    };

    format!(
        "{}{}{}{}{}{}{}",
        left_prefix,
        idx_colored,
        paint(&marker, note.color),
        title_display,
        " ".repeat(padding),
        category.dimmed(),
        time_ago.dimmed()
    )
}

/// Title, tags and the start of the content on one line.
fn summary_line(note: &Note) -> String {
    let mut line = note.display_title().to_string();
    for tag in &note.tags {
        line.push_str(&format!(" #{}", tag));
    }

    let preview: String = note
        .content
        .chars()
        .take(PREVIEW_CHARS)
        .map(|c| if c == '\n' { ' ' } else { c })
        .collect();
    let preview = preview.trim();
    if !preview.is_empty() {
        line.push_str("  ");
        line.push_str(preview);
    }
    line
}

pub(super) fn render_full_notes(notes: &[DisplayNote]) -> String {
    let mut output = String::new();
    for (i, dn) in notes.iter().enumerate() {
        if i > 0 {
            output.push_str("\n================================\n\n");
        }
        let note = &dn.note;
        output.push_str(&format!(
            "{} {}\n",
            dn.index.to_string().yellow(),
            note.display_title().bold()
        ));

        let mut meta = vec![
            note.category.to_string(),
            paint(note.color.name(), note.color).to_string(),
        ];
        if !note.tags.is_empty() {
            let tags: Vec<String> = note.tags.iter().map(|t| format!("#{}", t)).collect();
            meta.push(tags.join(" "));
        }
        if note.is_pinned {
            meta.push("pinned".to_string());
        }
        if note.is_archived {
            meta.push("archived".to_string());
        }
        output.push_str(&format!("{}\n", meta.join(" · ")));
        output.push_str(&format!(
            "{}\n",
            format!(
                "created {}, updated {}",
                note.created_at.format("%Y-%m-%d %H:%M"),
                note.updated_at.format("%Y-%m-%d %H:%M")
            )
            .dimmed()
        ));
        output.push_str("--------------------------------\n");
        if !note.content.is_empty() {
            output.push_str(&note.content);
            output.push('\n');
        }
    }
    output
}

pub(super) fn render_categories(categories: &[CategoryCount], selected: Option<&str>) -> String {
    let mut output = format!("{}\n", "Categories".bold());
    for entry in categories {
        let name = entry.category.name();
        let line = format!("{:<12}{:>4}", name, entry.count);
        if selected == Some(name) {
            output.push_str(&format!("  > {}\n", line.yellow()));
        } else {
            output.push_str(&format!("    {}\n", line));
        }
    }
    output
}

/// The listing as JSON: `{ "pinned": [...], "others": [...] }` for active
/// notes, a plain array for the archive.
pub(super) fn render_json(notes: &[DisplayNote], view: View) -> Result<String> {
    let value = match view {
        View::Active => {
            let (pinned, others): (Vec<&DisplayNote>, Vec<&DisplayNote>) = notes
                .iter()
                .partition(|dn| matches!(dn.index, DisplayIndex::Pinned(_)));
            serde_json::json!({ "pinned": pinned, "others": others })
        }
        View::Archived => serde_json::to_value(notes)?,
    };
    let mut json = serde_json::to_string_pretty(&value)?;
    json.push('\n');
    Ok(json)
}

fn paint(text: &str, color: NoteColor) -> ColoredString {
    match color {
        NoteColor::White => text.normal(),
        NoteColor::Red => text.red(),
        NoteColor::Orange => text.truecolor(255, 165, 0),
        NoteColor::Yellow => text.yellow(),
        NoteColor::Green => text.green(),
        NoteColor::Teal => text.cyan(),
        NoteColor::Blue => text.blue(),
        NoteColor::Purple => text.purple(),
        NoteColor::Pink => text.bright_magenta(),
        NoteColor::Brown => text.truecolor(165, 42, 42),
        NoteColor::Gray => text.bright_black(),
    }
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;
    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            break;
        }
        result.push(c);
        current_width += char_width;
    }
    if max_width > 0 {
        result.push('…');
    }
    result
}

fn format_time_ago(timestamp: DateTime<Utc>) -> String {
    let duration = Utc::now().signed_duration_since(timestamp);

    let mut formatter = Formatter::new();
    formatter.num_items(1);
    let time_str = formatter.convert(duration.to_std().unwrap_or_default());

    format!("{:>width$}", time_str, width = TIME_WIDTH)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeDelta;
    use smartnotesapp::index::index_notes;
    use smartnotesapp::model::{NoteDraft, NoteId, PresetCategory};
    use smartnotesapp::search::MatchSignal;

    fn plain() {
        colored::control::set_override(false);
    }

    fn note(title: &str, pinned: bool, archived: bool) -> Note {
        let mut note = Note::from_draft(
            NoteId::new(),
            NoteDraft::new()
                .with_title(title)
                .with_content("Body text")
                .with_pinned(pinned),
            Utc::now(),
        );
        note.is_archived = archived;
        note
    }

    fn listing(notes: &[Note]) -> Vec<DisplayNote> {
        // Engine order for the active view: pinned first.
        let mut indexed = index_notes(notes);
        indexed.sort_by_key(|dn| !matches!(dn.index, DisplayIndex::Pinned(_)));
        indexed
    }

    #[test]
    fn test_empty_listing() {
        plain();
        let out = render_listing(&[], 80);
        assert!(out.starts_with("No notes found\n"));
    }

    #[test]
    fn test_headings_with_both_groups() {
        plain();
        let out = render_listing(
            &listing(&[note("Loose", false, false), note("Stuck", true, false)]),
            80,
        );
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], "Pinned");
        assert!(lines[1].contains("p1. ") && lines[1].contains("Stuck"));
        assert!(lines[1].starts_with(&format!("  {} ", PIN_MARKER)));
        assert_eq!(lines[2], "");
        assert_eq!(lines[3], "Others");
        assert!(lines[4].contains("1. ") && lines[4].contains("Loose"));
    }

    #[test]
    fn test_only_pinned_has_no_others_heading() {
        plain();
        let out = render_listing(&listing(&[note("Stuck", true, false)]), 80);
        assert!(out.starts_with("Pinned\n"));
        assert!(!out.contains("Others"));
    }

    #[test]
    fn test_only_regular_has_no_headings() {
        plain();
        let out = render_listing(&listing(&[note("Loose", false, false)]), 80);
        assert!(!out.contains("Pinned"));
        assert!(!out.contains("Others"));
        assert!(out.contains("    1. "));
    }

    #[test]
    fn test_archived_rows_use_archive_index() {
        plain();
        let out = render_listing(&index_notes(&[note("Old", true, true)]), 80);
        assert!(out.contains("a1. "));
        assert!(!out.contains("Pinned"));
    }

    #[test]
    fn test_rows_fit_line_width() {
        plain();
        let long = note(&"Very long title ".repeat(10), false, false);
        let out = render_listing(&index_notes(&[long]), 60);
        let row = out.lines().next().unwrap();
        assert_eq!(row.width(), 60);
        assert!(row.contains('…'));
    }

    #[test]
    fn test_row_shows_tags_and_category() {
        plain();
        let mut n = note("Meeting", false, false);
        n.tags = ["urgent"].into_iter().collect();
        n.category = PresetCategory::Work.into();
        let row = render_listing(&index_notes(&[n]), 100);
        assert!(row.contains("Meeting #urgent  Body text"));
        assert!(row.contains(" Work "));
    }

    #[test]
    fn test_truncate_to_width() {
        assert_eq!(truncate_to_width("hello", 10), "hello");
        assert_eq!(truncate_to_width("hello world", 6), "hello…");
        assert_eq!(truncate_to_width("日本語テキスト", 7), "日本語…");
        assert_eq!(truncate_to_width("abc", 0), "");
    }

    #[test]
    fn test_format_time_ago_is_right_aligned() {
        let out = format_time_ago(Utc::now() - TimeDelta::hours(3) - TimeDelta::minutes(10));
        assert_eq!(out.len(), TIME_WIDTH);
        assert!(out.trim_start().starts_with("3 hours"));
    }

    #[test]
    fn test_messages_one_per_line() {
        plain();
        let out = render_messages(&[
            CmdMessage::success("Note created (1): A"),
            CmdMessage::info("Nothing to update"),
        ]);
        assert_eq!(out, "Note created (1): A\nNothing to update\n");
    }

    #[test]
    fn test_state_line() {
        plain();
        assert_eq!(render_state(View::Active, None, ""), "Notes\n");
        assert_eq!(
            render_state(View::Archived, Some("Work"), " milk "),
            "Archive / Work  search: \"milk\"\n"
        );
    }

    #[test]
    fn test_full_note_metadata() {
        plain();
        let mut n = note("Plan", true, false);
        n.color = NoteColor::Blue;
        let out = render_full_notes(&index_notes(&[n.clone(), n]));
        assert!(out.starts_with("p1 Plan\nPersonal · blue · pinned\n"));
        assert!(out.contains("Body text\n"));
        assert!(out.contains("================================"));
    }

    #[test]
    fn test_categories_mark_selection() {
        plain();
        let counts = vec![
            CategoryCount {
                category: PresetCategory::Personal,
                count: 2,
            },
            CategoryCount {
                category: PresetCategory::Work,
                count: 0,
            },
        ];
        let out = render_categories(&counts, Some("Work"));
        assert!(out.contains("    Personal       2\n"));
        assert!(out.contains("  > Work           0\n"));
    }

    #[test]
    fn test_json_groups_active_listing() {
        let mut notes = listing(&[note("Loose", false, false), note("Stuck", true, false)]);
        notes[1].matches = vec![MatchSignal::Text];

        let json: serde_json::Value =
            serde_json::from_str(&render_json(&notes, View::Active).unwrap()).unwrap();
        assert_eq!(json["pinned"][0]["index"], "p1");
        assert_eq!(json["others"][0]["title"], "Loose");
        assert_eq!(json["others"][0]["matches"][0], "text");
    }

    #[test]
    fn test_json_archive_is_flat() {
        let notes = index_notes(&[note("Old", false, true)]);
        let json: serde_json::Value =
            serde_json::from_str(&render_json(&notes, View::Archived).unwrap()).unwrap();
        assert_eq!(json[0]["index"], "a1");
    }
}
