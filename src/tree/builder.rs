// Filesystem walk producing the document tree
//
// Entries are listed and stat'ed one at a time with awaited tokio::fs calls.
// A failure on one entry is recorded and skipped; siblings keep scanning.
// Directories are followed through symlinks, except ones that resolve to a
// directory already being scanned.

use crate::config::{Config, ScanConfig};
use crate::error::Result;
use crate::naming::{folder_display_name, LinkDeriver};
use crate::tree::model::{Document, Folder, FolderMeta};
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// A non-fatal problem met while scanning a single entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScanIssue {
    pub path: PathBuf,
    pub message: String,
}

impl fmt::Display for ScanIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.path.display(), self.message)
    }
}

#[derive(Debug, Default)]
struct FolderContents {
    documents: BTreeMap<String, Document>,
    subfolders: BTreeMap<String, Folder>,
}

/// Walks a root directory into a [`Folder`] tree
pub struct TreeBuilder {
    scan: ScanConfig,
    links: LinkDeriver,
    issues: Vec<ScanIssue>,
    /// Canonical paths of the directories currently being scanned
    ancestors: Vec<PathBuf>,
}

impl TreeBuilder {
    pub fn new(config: &Config) -> Self {
        Self {
            scan: config.scan.clone(),
            links: LinkDeriver::new(
                config.scan.markdown_suffix.clone(),
                config.links.strip_root_suffix,
            ),
            issues: Vec::new(),
            ancestors: Vec::new(),
        }
    }

    /// Build the tree below `root`.
    ///
    /// Only failing to list the root itself is an error. Anything that goes
    /// wrong deeper is collected and returned by [`TreeBuilder::into_issues`].
    pub async fn build(&mut self, root: &Path) -> Result<Folder> {
        self.ancestors = vec![tokio::fs::canonicalize(root).await?];
        let scanned = self.scan_dir(root, "", "", 0).await;
        self.ancestors.clear();
        let contents = scanned?;

        Ok(Folder::root(
            root.to_path_buf(),
            contents.documents,
            contents.subfolders,
            &self.scan.markdown_suffix,
        ))
    }

    pub fn into_issues(self) -> Vec<ScanIssue> {
        self.issues
    }

    async fn scan_dir(
        &mut self,
        dir: &Path,
        ancestor_link: &str,
        ancestor_display_name: &str,
        depth: usize,
    ) -> std::io::Result<FolderContents> {
        debug!("scanning {} (depth {})", dir.display(), depth);

        let mut contents = FolderContents::default();
        let mut entries = tokio::fs::read_dir(dir).await?;

        loop {
            let entry = match entries.next_entry().await {
                Ok(Some(entry)) => entry,
                Ok(None) => break,
                Err(e) => {
                    self.record(dir.to_path_buf(), format!("failed to read entry: {}", e));
                    break;
                }
            };

            let path = entry.path();
            let name = match entry.file_name().into_string() {
                Ok(name) => name,
                Err(_) => {
                    self.record(path, "entry name is not valid UTF-8");
                    continue;
                }
            };

            let metadata = match tokio::fs::metadata(&path).await {
                Ok(metadata) => metadata,
                Err(e) => {
                    self.record(path, format!("failed to stat: {}", e));
                    continue;
                }
            };

            if metadata.is_dir() {
                if self.scan.is_excluded_folder(&name, depth) {
                    debug!("skipping excluded folder {}", path.display());
                    continue;
                }

                let canonical = match tokio::fs::canonicalize(&path).await {
                    Ok(canonical) => canonical,
                    Err(e) => {
                        self.record(path, format!("failed to resolve: {}", e));
                        continue;
                    }
                };
                if self.ancestors.contains(&canonical) {
                    let message = format!("directory loops back to {}", canonical.display());
                    self.record(path, message);
                    continue;
                }

                let meta = FolderMeta {
                    link: self.links.derive(&name, ancestor_link, depth),
                    display_name: folder_display_name(&name, ancestor_display_name),
                    absolute_path: path.clone(),
                    name: name.clone(),
                };

                self.ancestors.push(canonical);
                let scanned =
                    Box::pin(self.scan_dir(&path, &meta.link, &meta.display_name, depth + 1))
                        .await;
                self.ancestors.pop();
                let children = match scanned {
                    Ok(children) => children,
                    Err(e) => {
                        self.record(path, format!("failed to read directory: {}", e));
                        FolderContents::default()
                    }
                };

                let folder = Folder::new(
                    meta,
                    children.documents,
                    children.subfolders,
                    &self.scan.markdown_suffix,
                );
                contents.subfolders.insert(name, folder);
            } else if metadata.is_file() && self.is_document_name(&name) {
                let link = self.links.derive(&name, ancestor_link, depth);
                let document = Document::new(name.clone(), link, path, &self.scan.markdown_suffix);
                contents.documents.insert(name, document);
            }
        }

        Ok(contents)
    }

    fn is_document_name(&self, name: &str) -> bool {
        let suffix = &self.scan.markdown_suffix;
        name.len() > suffix.len()
            && name.ends_with(suffix.as_str())
            && !self.scan.is_excluded_file(name)
    }

    fn record(&mut self, path: PathBuf, message: impl Into<String>) {
        let issue = ScanIssue {
            path,
            message: message.into(),
        };
        warn!("skipping {}", issue);
        self.issues.push(issue);
    }
}
