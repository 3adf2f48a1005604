//! JSON output of the content index.
//!
//! The index is written in a single shot, replacing any previous file. The
//! document is pretty-printed with two-space indentation so that changes
//! between runs produce readable diffs.
//!
//! ```json
//! {
//!   "articles": [
//!     "articles/hello-world.md"
//!   ],
//!   "teams": [],
//!   "services": []
//! }
//! ```

use std::error::Error;
use std::path::PathBuf;
use tokio::fs;
use tracing::{error, info, instrument};

use crate::config::IndexConfig;
use crate::error::IndexError;
use crate::models::IndexDocument;

/// Write an [`IndexDocument`] to the configured index file.
///
/// Creates the content directory (and any missing parents) first, then
/// overwrites `{content_dir}/{output_file}`.
///
/// # Returns
///
/// The path of the written file.
///
/// # Errors
///
/// Returns an error if the content directory cannot be created or the file
/// cannot be written. A failed write may leave a truncated file behind.
#[instrument(level = "info", skip_all, fields(content_dir = %config.content_dir.display()))]
pub async fn write_index(
    document: &IndexDocument,
    config: &IndexConfig,
) -> Result<PathBuf, Box<dyn Error>> {
    let json = document.to_pretty_json().map_err(IndexError::from)?;

    info!("Ensuring content directory exists");
    if let Err(e) = fs::create_dir_all(&config.content_dir).await {
        error!(error = %e, "Failed to create content directory");
        return Err(IndexError::CreateContentDir {
            path: config.content_dir.clone(),
            source: e,
        }
        .into());
    }

    let output_path = config.output_path();
    info!(path = %output_path.display(), "Writing index");
    if let Err(e) = fs::write(&output_path, json).await {
        error!(path = %output_path.display(), error = %e, "Failed to write index");
        return Err(IndexError::WriteIndex {
            path: output_path,
            source: e,
        }
        .into());
    }
    info!(
        path = %output_path.display(),
        collections = document.len(),
        files = document.total_files(),
        "Wrote index file"
    );

    Ok(output_path)
}
