use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tokio::process::Command;

/// Handle to the workspace's git repository, used to stage file removals so
/// they land in the next commit.
pub struct GitManager {
    repo_path: PathBuf,
}

impl GitManager {
    /// Open the repository rooted at `repo_path`, or `None` if the workspace
    /// is not under git control.
    pub fn discover(repo_path: &Path) -> Option<Self> {
        if repo_path.join(".git").exists() {
            Some(Self {
                repo_path: repo_path.to_path_buf(),
            })
        } else {
            None
        }
    }

    pub fn repo_path(&self) -> &Path {
        &self.repo_path
    }

    /// Remove a file from the working tree and stage the deletion (`git rm`).
    ///
    /// Not idempotent: removing an absent or untracked path fails, so callers
    /// check existence first.
    pub async fn rm(&self, abs_path: &Path) -> Result<()> {
        let output = Command::new("git")
            .args(["rm", "--"])
            .arg(abs_path)
            .current_dir(&self.repo_path)
            .output()
            .await
            .context("Failed to run git rm")?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            anyhow::bail!("git rm failed: {}", stderr.trim());
        }

        tracing::debug!("Staged removal of {}", abs_path.display());
        Ok(())
    }

    /// Get current git status (short form)
    pub async fn status(&self) -> Result<String> {
        let output = Command::new("git")
            .args(["status", "--short"])
            .current_dir(&self.repo_path)
            .output()
            .await
            .context("Failed to get git status")?;

        Ok(String::from_utf8_lossy(&output.stdout).to_string())
    }
}
