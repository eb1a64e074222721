//! Executes a single `DELETE FILE:` directive against the workspace
//!
//! Removal goes through git when the workspace is a repository, so the
//! deletion is staged for the next commit; otherwise it is a plain filesystem
//! delete. Every directive produces an outcome the round folds into its
//! bookkeeping and summary.

use std::path::{Path, PathBuf};

use crate::git::GitManager;
use crate::io::Io;

use super::parser::DeletionDirective;

/// What happened to one directive's target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeletionStatus {
    Deleted,
    /// Target was already absent; the intent is still honored for bookkeeping
    NotFound,
    /// Removal was attempted and failed; the file is untouched
    Failed(String),
}

#[derive(Debug, Clone)]
pub struct DeletionOutcome {
    pub rel_path: String,
    pub status: DeletionStatus,
}

impl DeletionOutcome {
    /// Whether the path counts toward the round's deleted-files bookkeeping.
    /// `NotFound` counts: already-absent is the desired end state.
    pub fn counts_as_deleted(&self) -> bool {
        matches!(self.status, DeletionStatus::Deleted | DeletionStatus::NotFound)
    }
}

/// Resolve a directive target against the workspace root. Absolute targets
/// pass through unchanged.
fn resolve_target(workspace_root: &Path, target: &str) -> PathBuf {
    let target_path = Path::new(target);
    if target_path.is_absolute() {
        target_path.to_path_buf()
    } else {
        workspace_root.join(target_path)
    }
}

/// Workspace-relative display path for an absolute target, falling back to
/// the absolute form when the target lies outside the root.
fn rel_display_path(workspace_root: &Path, abs_path: &Path) -> String {
    abs_path
        .strip_prefix(workspace_root)
        .unwrap_or(abs_path)
        .to_string_lossy()
        .to_string()
}

/// Execute one directive with a non-empty target.
///
/// The informational message is emitted before the removal attempt, since the
/// removal may fail midway. `dry_run` skips the mutation but still reports
/// `Deleted` so plan-only rounds account the same way.
pub async fn execute(
    directive: &DeletionDirective,
    workspace_root: &Path,
    dry_run: bool,
    git: Option<&GitManager>,
    io: &dyn Io,
) -> DeletionOutcome {
    debug_assert!(!directive.target.is_empty());

    let abs_path = resolve_target(workspace_root, &directive.target);
    let rel_path = rel_display_path(workspace_root, &abs_path);

    if !abs_path.exists() {
        io.tool_warning(&format!(
            "Architect requested deletion of non-existent file: {}",
            rel_path
        ));
        return DeletionOutcome {
            rel_path,
            status: DeletionStatus::NotFound,
        };
    }

    io.tool_output(&format!(
        "Deleting {} as per architect's instruction.",
        rel_path
    ));

    if dry_run {
        tracing::info!("Dry run: skipping removal of {}", rel_path);
        return DeletionOutcome {
            rel_path,
            status: DeletionStatus::Deleted,
        };
    }

    let removal = match git {
        Some(git) => git.rm(&abs_path).await,
        None => tokio::fs::remove_file(&abs_path)
            .await
            .map_err(anyhow::Error::from),
    };

    match removal {
        Ok(()) => DeletionOutcome {
            rel_path,
            status: DeletionStatus::Deleted,
        },
        Err(e) => {
            io.tool_error(&format!("Error trying to delete {}: {}", rel_path, e));
            DeletionOutcome {
                rel_path,
                status: DeletionStatus::Failed(e.to_string()),
            }
        }
    }
}
