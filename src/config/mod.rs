//! Configuration document loading for `config.json`.
//!
//! The document is untyped JSON; its source of truth is the on-disk file
//! edited by a human between renders. Serve mode re-reads it on every
//! request so edits show up on the next refresh, build mode reads it once.
//! No component mutates the loaded document.
//!
//! No schema validation happens here beyond JSON parsing; wrong shapes
//! surface later as `TemplateFieldError` when the renderer dereferences
//! them.

mod error;

pub use error::ConfigError;

use serde_json::Value;
use std::{
    fs,
    path::{Path, PathBuf},
};

/// Default configuration file name.
pub const CONFIG_FILE: &str = "config.json";

/// Static build output, relative to the project root. GitHub Pages can
/// serve straight from /docs.
pub const OUTPUT_FILE: &str = "docs/index.html";

/// Directory of user-supplied images, served under /static/.
pub const STATIC_DIR: &str = "static";

/// Resolved project layout, anchored next to the config file.
#[derive(Debug, Clone)]
pub struct Paths {
    /// Project root (parent of the config file)
    pub root: PathBuf,
    /// The configuration document
    pub config: PathBuf,
    /// Rendered output file for build mode
    pub output: PathBuf,
    /// Static assets directory for serve mode
    pub static_dir: PathBuf,
}

impl Paths {
    /// Derive all paths from the `-C/--config` flag.
    pub fn from_config_path(config: PathBuf) -> Self {
        let root = match config.parent() {
            Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
            _ => PathBuf::from("."),
        };
        Self {
            output: root.join(OUTPUT_FILE),
            static_dir: root.join(STATIC_DIR),
            root,
            config,
        }
    }
}

/// Read and parse the configuration document.
pub fn load_document(path: &Path) -> Result<Value, ConfigError> {
    let raw = fs::read_to_string(path).map_err(|e| ConfigError::Io(path.to_path_buf(), e))?;
    serde_json::from_str(&raw).map_err(|e| ConfigError::Json(path.to_path_buf(), e))
}
