//! wikitoc - Regenerate table-of-contents home pages for markdown wikis
//!
//! Scans a directory tree of markdown documents and rewrites its `Home.md`,
//! plus any per-folder `<folder>.md` home files, with naturally ordered
//! link listings.

pub mod cli;
pub mod config;
pub mod error;
pub mod naming;
pub mod output;
pub mod sort;
pub mod synthesize;
pub mod tree;

// Re-export main types
pub use config::Config;
pub use error::{Error, Result};
pub use output::{render, render_page, HomeWriter};
pub use synthesize::{synthesize, SynthesisReport, Synthesizer};
pub use tree::{Document, Folder, TreeBuilder};
