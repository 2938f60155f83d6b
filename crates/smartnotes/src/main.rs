//! # SmartNotes CLI Architecture
//!
//! The binary is intentionally thin: the terminal client lives in `src/cli/`,
//! while this file only invokes `cli::run()` and handles process termination.
//!
//! ## Workspace Structure
//!
//! - `crates/smartnotesapp/`: Core library, UI-agnostic note store and query engine
//! - `crates/smartnotes/`: This terminal client, depends on `smartnotesapp`
//!
//! ## Layering
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (crates/smartnotes/src/cli/)                     │
//! │  - clap parsing of process args and session lines (setup.rs)│
//! │  - Startup, logging and the read loop (commands.rs)         │
//! │  - Session state and dispatch (handlers.rs)                 │
//! │  - Terminal rendering (render.rs)                           │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (crates/smartnotesapp/src/api.rs)                │
//! │  - Normalizes display indexes and titles into note ids      │
//! │  - Returns structured `CmdResult` values                    │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! Notes live in memory for the lifetime of one session. The session reads
//! one command per line from stdin, so it works both interactively and with a
//! piped script.
//!
//! ## Testing Approach
//!
//! - **Library**: unit tests next to each command, plus integration tests in
//!   `crates/smartnotesapp/tests/`.
//! - **CLI**: session lines are parsed and dispatched in unit tests without
//!   touching stdout; rendering is checked against canned `DisplayNote`s; and
//!   `tests/session_e2e.rs` drives the real binary with scripted stdin.

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
