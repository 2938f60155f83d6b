//! # CLI Behavior
//!
//! This is **one possible UI client** for smartnotes, not the application
//! itself. The CLI is the only place that knows about terminal I/O, exit
//! codes and output formatting.
//!
//! ## The Session
//!
//! `smartnotes` starts a session over an in-memory store (seeded with demo
//! notes unless disabled) and reads commands line by line:
//!
//! ```text
//! smartnotes> new Buy milk --content "2 liters" --tag shopping
//! smartnotes> save
//! smartnotes> category Personal
//! smartnotes> search milk
//! smartnotes> pin 1
//! ```
//!
//! The session keeps the state a notes window would: the current view
//! (notes or archive), the selected category, the search query and at most
//! one open draft. `ls` lists through the query engine with that state.
//!
//! A failing command prints `Error: ...` on stderr and the session carries
//! on. Only startup failures (bad config, bad arguments) end the process
//! with a non-zero exit code.
//!
//! ## Module Structure
//!
//! - `commands`: Startup and the read loop
//! - `handlers`: Session state and per-command handlers
//! - `render`: Output formatting (listings, colors, messages)
//! - `setup`: Argument parsing via clap and session line splitting

mod commands;
mod handlers;
mod render;
pub mod setup;

pub use commands::run;
