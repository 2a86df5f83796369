// Home file writer
//
// Replaces the whole content of an existing home file. Content goes to a
// sibling temp file first and is renamed over the target, so a failed write
// leaves the original untouched.

use crate::error::{Error, Result};
use crate::output::render::{page_content, render_page};
use crate::tree::Folder;
use std::ffi::OsString;
use std::io;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Writes rendered home pages to disk
#[derive(Debug, Clone, Copy, Default)]
pub struct HomeWriter;

impl HomeWriter {
    pub fn new() -> Self {
        Self
    }

    /// Render `folder` as a standalone page and replace `target` with it
    pub async fn write_home(&self, target: &Path, folder: &Folder) -> Result<String> {
        let content = page_content(&render_page(folder));
        self.write_content(target, &content).await?;
        Ok(content)
    }

    /// Replace `target` with `content`. The target must already exist.
    pub async fn write_content(&self, target: &Path, content: &str) -> Result<()> {
        replace_file(target, content)
            .await
            .map_err(|e| Error::write(target, e))?;
        debug!("wrote {} ({} bytes)", target.display(), content.len());
        Ok(())
    }
}

async fn replace_file(target: &Path, content: &str) -> io::Result<()> {
    // A symlinked home file is rewritten through the link, leaving the link
    // itself in place.
    let resolved = tokio::fs::canonicalize(target).await?;
    let metadata = tokio::fs::metadata(&resolved).await?;
    if !metadata.is_file() {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            "home file target is not a regular file",
        ));
    }

    let temp = temp_path(&resolved)?;
    let result = write_then_rename(&temp, &resolved, content, metadata.permissions()).await;

    if result.is_err() {
        let _ = tokio::fs::remove_file(&temp).await;
    }
    result
}

async fn write_then_rename(
    temp: &Path,
    target: &Path,
    content: &str,
    permissions: std::fs::Permissions,
) -> io::Result<()> {
    tokio::fs::write(temp, content).await?;
    tokio::fs::set_permissions(temp, permissions).await?;
    tokio::fs::rename(temp, target).await
}

fn temp_path(target: &Path) -> io::Result<PathBuf> {
    let file_name = target.file_name().ok_or_else(|| {
        io::Error::new(io::ErrorKind::InvalidInput, "home file target has no file name")
    })?;

    let mut temp_name = OsString::from(".");
    temp_name.push(file_name);
    temp_name.push(".wikitoc.tmp");
    Ok(target.with_file_name(temp_name))
}
