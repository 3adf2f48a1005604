//! Fatal errors, annotated with the path that caused them.
//!
//! Only a handful of operations can abort a run: reading or validating the
//! configuration, creating the content root, and writing the index. Listing
//! a collection folder never produces one of these.

use std::io;
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum IndexError {
    #[error("failed to read config file {}: {source}", path.display())]
    ReadConfig { path: PathBuf, source: io::Error },

    #[error("invalid config file {}: {source}", path.display())]
    ParseConfig {
        path: PathBuf,
        source: serde_yaml::Error,
    },

    /// The index file name must be a bare file name inside the content root.
    #[error("invalid output file {name:?}: expected a plain file name inside the content directory")]
    InvalidOutputFile { name: String },

    #[error("failed to create content directory {}: {source}", path.display())]
    CreateContentDir { path: PathBuf, source: io::Error },

    #[error("failed to serialize index: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("failed to write index file {}: {source}", path.display())]
    WriteIndex { path: PathBuf, source: io::Error },
}
