//! Collection scanning: find the Markdown files in each content folder.
//!
//! Each collection maps to `<content_dir>/<name>`. Scanning follows two steps:
//!
//! 1. **Listing**: read the folder entries and keep names ending in `.md`
//!    (any case), in the order the directory listing returns them
//! 2. **Assembly**: turn every name into `<name>/<file>` and record it in an
//!    [`IndexDocument`] under the collection name
//!
//! A folder that is missing or cannot be listed contributes an empty list.
//! The distinction is only visible at `debug` level.

use futures::future::join_all;
use std::io;
use std::path::Path;
use tokio::fs;
use tracing::{debug, info, instrument};

use crate::config::IndexConfig;
use crate::models::{CollectionScan, IndexDocument};
use crate::utils::{entry_path, is_markdown, sort_file_names};

/// List the Markdown files of a single collection folder.
///
/// Returns bare file names (no collection prefix). Names that are not valid
/// UTF-8 are converted lossily. Only the entry name is checked, so a
/// subdirectory called `drafts.md` is listed as well.
#[instrument(level = "debug", skip(content_dir), fields(content_dir = %content_dir.display()))]
pub async fn scan_collection(content_dir: &Path, name: &str) -> CollectionScan {
    let folder = content_dir.join(name);

    let mut entries = match fs::read_dir(&folder).await {
        Ok(entries) => entries,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return CollectionScan::Missing,
        Err(e) => return CollectionScan::Unreadable(e),
    };

    let mut files = Vec::new();
    loop {
        match entries.next_entry().await {
            Ok(Some(entry)) => {
                let file_name = entry.file_name().to_string_lossy().into_owned();
                if is_markdown(&file_name) {
                    files.push(file_name);
                }
            }
            Ok(None) => break,
            Err(e) => return CollectionScan::Unreadable(e),
        }
    }

    CollectionScan::Found(files)
}

/// Build the index for every configured collection.
///
/// Collections are scanned concurrently; the resulting document keeps the
/// configured order regardless of which scan finishes first.
#[instrument(level = "info", skip_all, fields(content_dir = %config.content_dir.display()))]
pub async fn build_index(config: &IndexConfig) -> IndexDocument {
    let scans = join_all(
        config
            .collections
            .iter()
            .map(|name| scan_collection(&config.content_dir, name)),
    )
    .await;

    let mut document = IndexDocument::new();
    for (name, scan) in config.collections.iter().zip(scans) {
        match &scan {
            CollectionScan::Found(files) => {
                info!(collection = %name, count = files.len(), "Scanned collection");
            }
            CollectionScan::Missing => {
                debug!(collection = %name, "Collection folder missing; indexing as empty");
            }
            CollectionScan::Unreadable(e) => {
                debug!(collection = %name, error = %e, "Collection folder unreadable; indexing as empty");
            }
        }

        let mut files = scan.into_files();
        if config.sort {
            sort_file_names(&mut files);
        }
        let paths = files.iter().map(|f| entry_path(name, f)).collect();
        document.insert(name.as_str(), paths);
    }

    document
}
