//! Small helpers for file name classification and index entry formatting.
//!
//! This module provides helper functions used by the scanner:
//! - Markdown detection by file extension
//! - Relative path formatting for index entries
//! - Deterministic ordering of file names

/// Extension (without the dot) that marks a file as Markdown content.
const MARKDOWN_EXTENSION: &str = "md";

/// Check whether a file name has a `.md` extension.
///
/// The comparison is ASCII case-insensitive, so `post.md`, `POST.MD` and
/// `Post.Md` all match. Only the name is inspected; the file itself is never
/// opened.
///
/// # Examples
///
/// ```ignore
/// assert!(is_markdown("hello.md"));
/// assert!(is_markdown("HELLO.MD"));
/// assert!(!is_markdown("notes.txt"));
/// ```
pub fn is_markdown(file_name: &str) -> bool {
    let suffix_len = MARKDOWN_EXTENSION.len() + 1;
    if file_name.len() < suffix_len {
        return false;
    }
    match file_name.get(file_name.len() - suffix_len..) {
        Some(suffix) => {
            suffix.starts_with('.') && suffix[1..].eq_ignore_ascii_case(MARKDOWN_EXTENSION)
        }
        None => false,
    }
}

/// Format the path recorded in the index for a file inside a collection.
///
/// Always uses `/` as the separator so the manifest is identical on every
/// platform.
pub fn entry_path(collection: &str, file_name: &str) -> String {
    format!("{}/{}", collection, file_name)
}

/// Sort file names in byte order.
pub fn sort_file_names(names: &mut [String]) {
    names.sort_unstable();
}
