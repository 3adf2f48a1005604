//! Command-line interface definitions for the content index builder.
//!
//! Every option is optional. Without any flags the tool indexes
//! `./content/{articles,teams,services}` into `./content/index.json`.

use clap::Parser;
use std::path::PathBuf;

use crate::config::ConfigOverrides;

/// Command-line arguments for the content index builder.
///
/// # Examples
///
/// ```sh
/// # Default layout
/// content_index
///
/// # Different root and collections, sorted output
/// content_index -d ./site/content -c articles,events --sort
///
/// # Settings from a YAML file
/// content_index --config content_index.yaml
/// ```
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Content root holding the collection folders [default: ./content]
    #[arg(short = 'd', long, env = "CONTENT_INDEX_DIR")]
    pub content_dir: Option<PathBuf>,

    /// Name of the index file inside the content root [default: index.json]
    #[arg(short, long)]
    pub output_file: Option<String>,

    /// Collections to index, comma-separated [default: articles,teams,services]
    #[arg(short, long, value_delimiter = ',')]
    pub collections: Option<Vec<String>>,

    /// Optional path to a YAML configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Sort file names within each collection instead of keeping directory order
    #[arg(long)]
    pub sort: bool,
}

impl Cli {
    /// Settings given on the command line, as the topmost configuration layer.
    pub fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            content_dir: self.content_dir.clone(),
            output_file: self.output_file.clone(),
            collections: self.collections.clone(),
            sort: self.sort.then_some(true),
        }
    }
}
