use clap::{ArgAction, Args, CommandFactory, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "smartnotes", bin_name = "smartnotes", version)]
#[command(about = "Take, pin, archive and search notes in a terminal session", long_about = None)]
pub struct Cli {
    /// Read settings from this file instead of the default location
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Start with an empty collection instead of the demo notes
    #[arg(long)]
    pub no_seed: bool,

    /// Verbose logging (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

/// One line typed into the session.
#[derive(Parser, Debug)]
#[command(
    name = "smartnotes",
    no_binary_name = true,
    disable_help_subcommand = true,
    disable_version_flag = true
)]
pub struct SessionLine {
    #[command(subcommand)]
    pub command: SessionCommand,
}

/// Note fields shared by `new` and `edit`.
#[derive(Args, Debug, Default, Clone, PartialEq, Eq)]
pub struct DraftArgs {
    /// Note title
    #[arg(long)]
    pub title: Option<String>,

    /// Note body
    #[arg(short, long)]
    pub content: Option<String>,

    /// Add a tag (repeatable)
    #[arg(short, long = "tag", value_name = "TAG")]
    pub tags: Vec<String>,

    /// A preset (Personal, Work, Ideas, To-Do) or any custom name
    #[arg(long)]
    pub category: Option<String>,

    /// white, red, orange, yellow, green, teal, blue, purple, pink, brown or gray
    #[arg(long)]
    pub color: Option<String>,

    /// Pin the note
    #[arg(long)]
    pub pin: bool,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum SessionCommand {
    /// Open a draft for a new note
    #[command(alias = "n")]
    New {
        /// Title words
        #[arg(value_name = "TITLE")]
        words: Vec<String>,

        #[command(flatten)]
        draft: DraftArgs,
    },

    /// Open a note in the editor, or change the open draft
    #[command(alias = "e")]
    Edit {
        /// Index, UUID or title of the note (omit to change the open draft)
        #[arg(value_name = "NOTE")]
        selectors: Vec<String>,

        #[command(flatten)]
        draft: DraftArgs,
    },

    /// Save the open draft
    Save,

    /// Discard the open draft
    Cancel,

    /// View notes in full
    #[command(alias = "v")]
    View {
        /// Indexes (1, p1, a1, ranges like 1-3), UUIDs or a title
        #[arg(required = true, value_name = "NOTE")]
        indexes: Vec<String>,
    },

    /// Delete notes
    #[command(alias = "delete")]
    Rm {
        #[arg(required = true, value_name = "NOTE")]
        indexes: Vec<String>,
    },

    /// Pin or unpin notes
    Pin {
        #[arg(required = true, value_name = "NOTE")]
        indexes: Vec<String>,
    },

    /// Archive or unarchive notes
    Archive {
        #[arg(required = true, value_name = "NOTE")]
        indexes: Vec<String>,
    },

    /// Add a tag to notes
    Tag {
        tag: String,
        #[arg(required = true, value_name = "NOTE")]
        indexes: Vec<String>,
    },

    /// Remove a tag from notes
    Untag {
        tag: String,
        #[arg(required = true, value_name = "NOTE")]
        indexes: Vec<String>,
    },

    /// List notes for the current view, category and search
    #[command(alias = "list")]
    Ls {
        /// Print the listing as JSON
        #[arg(long)]
        json: bool,
    },

    /// Switch to active notes and clear the category
    Notes,

    /// Switch to archived notes
    Archived,

    /// Select a category (no name clears it)
    Category {
        #[arg(value_name = "NAME")]
        name: Vec<String>,
    },

    /// Set the search query (no text clears it)
    Search {
        #[arg(value_name = "TEXT", allow_hyphen_values = true)]
        query: Vec<String>,
    },

    /// Show active note counts per category
    Categories,

    /// Show this help
    Help,

    /// End the session
    #[command(alias = "exit")]
    Quit,
}

/// Session help, one line per command.
pub fn session_help() -> String {
    let cmd = SessionLine::command();

    let mut output = String::new();
    output.push_str("Commands:\n");
    for sc in cmd.get_subcommands().filter(|sc| !sc.is_hide_set()) {
        let about = sc.get_about().map(|s| s.to_string()).unwrap_or_default();
        output.push_str(&format!("  {:<12} {}\n", sc.get_name(), about));
    }
    output.push('\n');
    output.push_str("Notes are selected by index (1, p1, a1), range (1-3), UUID or title.\n");
    output.push_str("Use '<command> --help' for the options of one command.\n");

    output
}
