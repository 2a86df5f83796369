// Folder and document nodes
//
// Nodes are built top-down and carry their precomputed display name and
// link, so no node refers back to its parent.

use crate::naming::{humanize, strip_markdown_suffix};
use crate::sort::natural_cmp;
use std::collections::BTreeMap;
use std::path::PathBuf;

/// A markdown file in the scanned tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    /// Entry name on disk, including the markdown suffix
    pub raw_name: String,
    /// Entry name with the markdown suffix stripped
    pub base_name: String,
    pub display_name: String,
    /// Link fragment used when a home page cites this document
    pub link: String,
    pub absolute_path: PathBuf,
}

impl Document {
    pub fn new(
        raw_name: impl Into<String>,
        link: String,
        absolute_path: PathBuf,
        suffix: &str,
    ) -> Self {
        let raw_name = raw_name.into();
        let base_name = strip_markdown_suffix(&raw_name, suffix).to_string();
        let display_name = humanize(&base_name);

        Self {
            raw_name,
            base_name,
            display_name,
            link,
            absolute_path,
        }
    }

    /// `[Display Name](link)`
    pub fn link_line(&self) -> String {
        format!("[{}]({})", self.display_name, self.link)
    }
}

/// Identity of a folder, computed before its contents are attached
#[derive(Debug, Clone, Default)]
pub struct FolderMeta {
    pub name: String,
    pub display_name: String,
    pub link: String,
    pub absolute_path: PathBuf,
}

/// A directory in the scanned tree
#[derive(Debug, Clone)]
pub struct Folder {
    pub name: String,
    /// `Parent > Child` below the root's direct children
    pub display_name: String,
    /// Empty only for the synthetic root folder
    pub link: String,
    pub absolute_path: PathBuf,
    /// Direct markdown files, minus any relocated override home files
    pub documents: BTreeMap<String, Document>,
    /// Child folder name -> the `<child>.md` file serving as its home page
    pub override_home_files: BTreeMap<String, Document>,
    pub subfolders: BTreeMap<String, Folder>,
}

impl Folder {
    /// Build a folder from its collected contents.
    ///
    /// Every `<child><suffix>` document whose child folder exists is moved out
    /// of `documents` and into `override_home_files`.
    pub fn new(
        meta: FolderMeta,
        mut documents: BTreeMap<String, Document>,
        subfolders: BTreeMap<String, Folder>,
        suffix: &str,
    ) -> Self {
        let mut override_home_files = BTreeMap::new();
        for child in subfolders.keys() {
            let file_name = format!("{}{}", child, suffix);
            if let Some(doc) = documents.remove(&file_name) {
                override_home_files.insert(child.clone(), doc);
            }
        }

        Self {
            name: meta.name,
            display_name: meta.display_name,
            link: meta.link,
            absolute_path: meta.absolute_path,
            documents,
            override_home_files,
            subfolders,
        }
    }

    /// The synthetic top-level folder for a scan root
    pub fn root(
        absolute_path: PathBuf,
        documents: BTreeMap<String, Document>,
        subfolders: BTreeMap<String, Folder>,
        suffix: &str,
    ) -> Self {
        let meta = FolderMeta {
            absolute_path,
            ..Default::default()
        };
        Self::new(meta, documents, subfolders, suffix)
    }

    pub fn is_root(&self) -> bool {
        self.link.is_empty()
    }

    pub fn has_documents(&self) -> bool {
        !self.documents.is_empty()
    }

    /// `# [Display Name](link)`
    pub fn heading_line(&self) -> String {
        format!("# [{}]({})", self.display_name, self.link)
    }

    pub fn override_home_file(&self, child: &str) -> Option<&Document> {
        self.override_home_files.get(child)
    }

    /// Direct documents in natural display order
    pub fn sorted_documents(&self) -> Vec<&Document> {
        let mut docs: Vec<&Document> = self.documents.values().collect();
        docs.sort_by(|a, b| {
            natural_cmp(&a.display_name, &b.display_name).then_with(|| a.raw_name.cmp(&b.raw_name))
        });
        docs
    }

    /// Direct subfolders in natural display order
    pub fn sorted_subfolders(&self) -> Vec<&Folder> {
        let mut folders: Vec<&Folder> = self.subfolders.values().collect();
        folders.sort_by(|a, b| {
            natural_cmp(&a.display_name, &b.display_name).then_with(|| a.name.cmp(&b.name))
        });
        folders
    }

    /// Listed documents in this folder and every descendant
    pub fn document_count(&self) -> usize {
        self.documents.len()
            + self
                .subfolders
                .values()
                .map(Folder::document_count)
                .sum::<usize>()
    }

    /// Descendant folders, excluding this one
    pub fn folder_count(&self) -> usize {
        self.subfolders.len()
            + self
                .subfolders
                .values()
                .map(Folder::folder_count)
                .sum::<usize>()
    }
}
