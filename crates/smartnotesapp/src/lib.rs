//! # SmartNotes Architecture
//!
//! SmartNotes is a **UI-agnostic note-taking core**: an in-memory note
//! collection with pinning, archiving and a multi-signal search. The
//! `smartnotes` terminal session is one client of it; nothing in this crate
//! knows about terminals.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Client (the smartnotes binary, or any other UI)            │
//! │  - Parses input, renders output, owns stdout/stderr         │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Normalizes selectors (indexes, UUIDs, titles)            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Business operations returning CmdResult                  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Query Engine (query.rs, search.rs)                         │
//! │  - Pure view / category / text filtering over a snapshot    │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Note Store (store/)                                        │
//! │  - Owns the collection, hands out immutable snapshots       │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## No I/O in the Core
//!
//! Everything in this crate takes plain arguments and returns plain Rust
//! types. It never prints, never exits the process and never touches the
//! file system, with the single exception of [`config`] reading its TOML
//! file. Diagnostics go through the `log` facade; installing a logger is the
//! client's job.
//!
//! ## Testing Strategy
//!
//! 1. **Store and engine** (`store/`, `query.rs`, `search.rs`): the
//!    lifecycle and filtering properties.
//! 2. **Commands** (`commands/*.rs`): the bulk of the tests, against
//!    [`store::fixtures::StoreFixture`] (enabled by the `test_utils` feature
//!    outside this crate).
//! 3. **API** (`api.rs`): selector parsing and dispatch.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade
//! - [`commands`]: Business logic for each command
//! - [`store`]: The note collection and snapshots
//! - [`query`]: The Query Engine
//! - [`search`]: Query signals (text, category, color, tag)
//! - [`index`]: Display indexing (`p1`, `1`, `a1` notation)
//! - [`model`]: Core data types (`Note`, `NoteDraft`, `NotePatch`, ...)
//! - [`tags`]: Tag sets and tag normalization
//! - [`seed`]: Demo notes
//! - [`config`]: Configuration loading
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod index;
pub mod model;
pub mod query;
pub mod search;
pub mod seed;
pub mod store;
pub mod tags;
