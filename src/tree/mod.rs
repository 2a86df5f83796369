// Document tree discovery

pub mod builder;
pub mod model;

pub use builder::{ScanIssue, TreeBuilder};
pub use model::{Document, Folder, FolderMeta};
