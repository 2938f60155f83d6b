//! # Configuration
//!
//! Settings are loaded with [`confique`] from, in priority order:
//!
//! 1. **Environment variables**: `SMARTNOTES_SEED_DEMO_NOTES`, ...
//! 2. **Config file**: an explicit path, or `smartnotes.toml` in the
//!    OS-appropriate config directory (via `directories`). A missing file is
//!    not an error.
//! 3. **Compiled defaults**: via `#[config(default = ...)]`.
//!
//! ## Available Settings
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `seed_demo_notes` | `true` | Start a session with the demo notes |
//! | `log_level` | `warn` | Log filter when `RUST_LOG` is unset |
//! | `line_width` | `100` | Width of rendered note listings |

use confique::Config;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{NotesError, Result};

pub const CONFIG_FILE_NAME: &str = "smartnotes.toml";

/// Configuration for smartnotes, stored in `smartnotes.toml`.
#[derive(Config, Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct SmartNotesConfig {
    /// Start each session with the demo notes.
    #[config(env = "SMARTNOTES_SEED_DEMO_NOTES", default = true)]
    pub seed_demo_notes: bool,

    /// Log filter used when RUST_LOG is not set (e.g. "warn", "debug").
    #[config(env = "SMARTNOTES_LOG_LEVEL", default = "warn")]
    pub log_level: String,

    /// Width in columns of rendered listings.
    #[config(env = "SMARTNOTES_LINE_WIDTH", default = 100)]
    pub line_width: usize,
}

impl Default for SmartNotesConfig {
    fn default() -> Self {
        Self {
            seed_demo_notes: true,
            log_level: "warn".to_string(),
            line_width: 100,
        }
    }
}

impl SmartNotesConfig {
    /// Loads the layered configuration. `path` overrides the default file
    /// location.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let file = path.map(Path::to_path_buf).or_else(default_config_path);

        let mut builder = Self::builder().env();
        if let Some(file) = &file {
            builder = builder.file(file);
        }
        let config = builder
            .load()
            .map_err(|e| NotesError::Config(e.to_string()))?;

        if config.line_width == 0 {
            return Err(NotesError::Config(
                "line_width must be greater than 0".to_string(),
            ));
        }
        Ok(config)
    }
}

/// `<config_dir>/smartnotes.toml`, when the platform has a config directory.
pub fn default_config_path() -> Option<PathBuf> {
    directories::ProjectDirs::from("", "", "smartnotes")
        .map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
}
