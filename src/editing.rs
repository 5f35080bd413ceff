//! Transactional file editing.
//!
//! [`EditTransaction`] commits a whole-file rewrite via temp file + atomic
//! rename, so an extraction's two mutations (replacement and declaration
//! insert) land together or not at all and the host never observes a torn
//! document.

use anyhow::Result;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;
use uuid::Uuid;

pub struct EditTransaction {
    file_path: PathBuf,
    original_content: Option<String>,
}

impl EditTransaction {
    /// Begin a transaction for a file, snapshotting its current content so
    /// the caller can roll back.
    pub fn begin(file_path: &Path) -> Result<Self> {
        let original_content = if file_path.exists() {
            Some(fs::read_to_string(file_path)?)
        } else {
            None
        };
        debug!("started transaction for {}", file_path.display());

        Ok(Self {
            file_path: file_path.to_path_buf(),
            original_content,
        })
    }

    /// Commit new content atomically: write a uniquely named temp file next
    /// to the target, then rename over it.
    pub fn commit(self, content: &str) -> Result<()> {
        let base_name = self
            .file_path
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or("scss-refactor");
        let temp_name = format!("{}.tmp.{}", base_name, Uuid::new_v4().simple());
        let temp_path = self.file_path.with_file_name(&temp_name);

        fs::write(&temp_path, content)?;
        if let Err(e) = fs::rename(&temp_path, &self.file_path) {
            let _ = fs::remove_file(&temp_path);
            return Err(e.into());
        }

        debug!("transaction committed for {}", self.file_path.display());
        Ok(())
    }

    /// Restore the content snapshotted at `begin`.
    pub fn rollback(self) -> Result<()> {
        match &self.original_content {
            Some(content) => {
                fs::write(&self.file_path, content)?;
                debug!("transaction rolled back for {}", self.file_path.display());
            }
            None => {
                if self.file_path.exists() {
                    fs::remove_file(&self.file_path)?;
                    debug!(
                        "transaction rolled back - removed {}",
                        self.file_path.display()
                    );
                }
            }
        }
        Ok(())
    }
}
