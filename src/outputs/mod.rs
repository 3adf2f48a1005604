//! Output generation for the content index.
//!
//! # Submodules
//!
//! - [`json`]: Writes the [`IndexDocument`](crate::models::IndexDocument) to the index file
//!
//! # Output Structure
//!
//! ```text
//! content/
//! ├── articles/
//! │   └── hello-world.md
//! ├── teams/
//! ├── services/
//! └── index.json          # Generated manifest
//! ```

pub mod json;
