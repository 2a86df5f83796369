// Orchestrates a full run: precondition checks, tree walk, home page writes

use crate::config::Config;
use crate::error::{Error, Result};
use crate::output::{plan_home_pages, HomePage, HomeWriter};
use crate::tree::{ScanIssue, TreeBuilder};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::{debug, error, info};

/// A home file that could not be rewritten
#[derive(Debug, Clone, Serialize)]
pub struct FailedWrite {
    pub path: PathBuf,
    pub message: String,
}

/// A page rendered in dry-run mode
#[derive(Debug, Clone, Serialize)]
pub struct RenderedPage {
    pub path: PathBuf,
    pub content: String,
}

/// Outcome of a synthesis run
#[derive(Debug, Default, Serialize)]
pub struct SynthesisReport {
    pub documents: usize,
    pub folders: usize,
    /// Home files rewritten, in write order
    pub written: Vec<PathBuf>,
    pub failed_writes: Vec<FailedWrite>,
    pub scan_issues: Vec<ScanIssue>,
    /// Filled instead of `written` in dry-run mode
    pub rendered: Vec<RenderedPage>,
}

impl SynthesisReport {
    pub fn is_success(&self) -> bool {
        self.failed_writes.is_empty()
    }

    pub fn summary(&self) -> String {
        let pages = if self.rendered.is_empty() {
            format!("wrote {} home files", self.written.len())
        } else {
            format!("rendered {} home files (dry run)", self.rendered.len())
        };

        format!(
            "Indexed {} documents in {} folders, {}, {} failed, {} entries skipped",
            self.documents,
            self.folders,
            pages,
            self.failed_writes.len(),
            self.scan_issues.len()
        )
    }
}

/// Runs the scan and regenerates home files for one root directory
pub struct Synthesizer {
    config: Config,
    writer: HomeWriter,
}

impl Synthesizer {
    /// Create a synthesizer with the given configuration
    pub fn new(config: Config) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            writer: HomeWriter::new(),
        })
    }

    /// Regenerate the home files below `root`.
    ///
    /// Fails before touching anything if `root` is not a directory or has no
    /// home file. Per-entry scan problems and per-file write failures are
    /// reported, not raised.
    pub async fn run(&self, root: &Path) -> Result<SynthesisReport> {
        let root_home = self.check_preconditions(root).await?;

        let mut builder = TreeBuilder::new(&self.config);
        let tree = builder.build(root).await?;

        let mut report = SynthesisReport {
            documents: tree.document_count(),
            folders: tree.folder_count(),
            scan_issues: builder.into_issues(),
            ..Default::default()
        };

        let pages = plan_home_pages(root_home, &tree);
        if self.config.dry_run {
            report.rendered = render_pages(pages);
        } else {
            self.write_pages(pages, &mut report).await;
        }

        info!("{}", report.summary());
        Ok(report)
    }

    /// Write each page in order. A failed write is recorded and the
    /// remaining pages are still written.
    async fn write_pages(&self, pages: Vec<HomePage<'_>>, report: &mut SynthesisReport) {
        for page in pages {
            let written = self.writer.write_home(&page.target, page.folder).await;
            match written {
                Ok(_) => report.written.push(page.target),
                Err(e) => {
                    error!("{}", e);
                    report.failed_writes.push(FailedWrite {
                        path: page.target,
                        message: e.to_string(),
                    });
                }
            }
        }
    }

    /// Returns the root home file path
    async fn check_preconditions(&self, root: &Path) -> Result<PathBuf> {
        let metadata = tokio::fs::metadata(root)
            .await
            .map_err(|_| Error::DirectoryNotFound(root.to_path_buf()))?;
        if !metadata.is_dir() {
            return Err(Error::NotADirectory(root.to_path_buf()));
        }

        let root_home = root.join(&self.config.scan.home_file);
        match tokio::fs::metadata(&root_home).await {
            Ok(m) if m.is_file() => Ok(root_home),
            _ => Err(Error::HomeFileNotFound(root_home)),
        }
    }
}

fn render_pages(pages: Vec<HomePage<'_>>) -> Vec<RenderedPage> {
    pages
        .into_iter()
        .map(|page| {
            debug!("rendered {}", page.target.display());
            RenderedPage {
                content: page.content(),
                path: page.target,
            }
        })
        .collect()
}

/// Regenerate the home files below `root` with the default configuration
pub async fn synthesize(root: &Path) -> Result<SynthesisReport> {
    Synthesizer::new(Config::default())?.run(root).await
}
