//! # History File Management
//!
//! Manages the location of the CLI history file. By default, history is
//! stored in `~/.treelab_history`.
//!
//! ## Configuration
//!
//! The location can be overridden with the `TREELAB_HISTORY` environment
//! variable; setting it to an empty string disables persistence. The path
//! is resolved once at startup and handed to rustyline, which does the
//! actual file I/O.

use std::env;
use std::path::PathBuf;

const DEFAULT_HISTORY_FILE: &str = ".treelab_history";
const HISTORY_ENV_VAR: &str = "TREELAB_HISTORY";

pub fn history_path() -> Option<PathBuf> {
    if let Ok(custom_path) = env::var(HISTORY_ENV_VAR) {
        if custom_path.is_empty() {
            return None;
        }
        return Some(PathBuf::from(custom_path));
    }

    home_dir().map(|home| home.join(DEFAULT_HISTORY_FILE))
}

fn home_dir() -> Option<PathBuf> {
    env::var("HOME").ok().map(PathBuf::from)
}
