//! One architect round: planning output in, round summary out
//!
//! The architect model replies with free-form instructions, possibly mixed
//! with `DELETE FILE:` directives. The round executes the directives locally
//! in order, asks for confirmation, hands the rest to a fresh editor agent,
//! and merges the editor's accounting back into the session.

pub mod deletion;
pub mod parser;

pub use deletion::{DeletionOutcome, DeletionStatus};
pub use parser::{parse, DeletionDirective, ParsedPlan, PlanLine};

use anyhow::{Context, Result};
use std::collections::BTreeSet;
use std::path::PathBuf;
use std::sync::Arc;

use crate::approval;
use crate::config::Config;
use crate::editor::{EditorConfig, EditorSpawner};
use crate::git::GitManager;
use crate::io::Io;
use crate::session::SessionState;

/// Fallback acknowledgment when a round ran but nothing reportable changed.
const GENERIC_ACK: &str = "Ok, I've processed the architect's instructions.";

/// Coordinator for a single round. Holds borrows of the caller's config and
/// session state plus the shared I/O surface; dropped when the round ends.
pub struct ArchitectRound<'a> {
    config: &'a Config,
    session: &'a mut SessionState,
    workspace_root: PathBuf,
    io: Arc<dyn Io>,
}

impl<'a> ArchitectRound<'a> {
    pub fn new(
        config: &'a Config,
        session: &'a mut SessionState,
        workspace_root: PathBuf,
        io: Arc<dyn Io>,
    ) -> Self {
        Self {
            config,
            session,
            workspace_root,
            io,
        }
    }

    /// Process one planning output to completion.
    ///
    /// Returns the round summary, or `None` when nothing happened: empty
    /// planning output, a plan with no directives and no instructions, or a
    /// declined confirmation. Deletions performed before a decline stand.
    pub async fn process(
        &mut self,
        planning_output: &str,
        spawner: &dyn EditorSpawner,
    ) -> Result<Option<String>> {
        if planning_output.trim().is_empty() {
            return Ok(None);
        }

        let plan = parser::parse(planning_output);
        let git = GitManager::discover(&self.workspace_root);
        let dry_run = self.config.architect.dry_run;

        let mut editor_lines: Vec<String> = Vec::new();
        let mut deleted_files: BTreeSet<String> = BTreeSet::new();

        // Walk lines in order so a failed or malformed directive re-enters
        // the editor instructions at its original position.
        for line in &plan.lines {
            match line {
                PlanLine::Text(text) => editor_lines.push(text.clone()),
                PlanLine::Directive(directive) if directive.target.is_empty() => {
                    self.io
                        .tool_warning("Architect specified `DELETE FILE:` with no path.");
                    editor_lines.push(directive.raw_line.clone());
                }
                PlanLine::Directive(directive) => {
                    let outcome = deletion::execute(
                        directive,
                        &self.workspace_root,
                        dry_run,
                        git.as_ref(),
                        self.io.as_ref(),
                    )
                    .await;

                    if outcome.counts_as_deleted() {
                        deleted_files.insert(outcome.rel_path);
                    } else {
                        // Structured deletion failed; let the editor agent
                        // handle the original line instead.
                        editor_lines.push(directive.raw_line.clone());
                    }
                }
            }
        }

        // Deletions count as edits for commit purposes, whether or not an
        // editor run follows.
        if !deleted_files.is_empty() {
            self.session.record_edits(deleted_files.iter().cloned());
        }

        let editor_content = editor_lines.join("\n").trim().to_string();

        if editor_content.is_empty() && deleted_files.is_empty() {
            return Ok(None);
        }

        if editor_content.is_empty() {
            // Deletions only; no editor agent is spawned.
            return Ok(Some(format!(
                "Ok, I have deleted {}.",
                join_files(&deleted_files)
            )));
        }

        if !approval::should_proceed(self.config.architect.auto_accept, self.io.as_ref()) {
            tracing::debug!("Editor run declined; dropping remaining instructions this round");
            return Ok(None);
        }

        let editor_config = EditorConfig::for_round(self.config, self.session.total_cost);
        tracing::info!(
            model = %editor_config.model,
            edit_format = %editor_config.edit_format,
            "Spawning editor agent"
        );

        let mut editor = spawner.spawn(editor_config, self.io.clone())?;
        editor
            .run(&editor_content)
            .await
            .context("Editor agent failed")?;

        let mut parts: Vec<String> = Vec::new();
        if !deleted_files.is_empty() {
            parts.push(format!("deleted {}", join_files(&deleted_files)));
        }

        // Report editor changes without double-listing paths deleted above.
        let editor_changed: Vec<String> = editor
            .edited_files()
            .iter()
            .filter(|f| !deleted_files.contains(*f))
            .cloned()
            .collect();
        if !editor_changed.is_empty() {
            parts.push(format!("made other changes to {}", editor_changed.join(", ")));
        }

        // The editor's total already includes our starting cost.
        self.session.total_cost = editor.total_cost();
        self.session.record_edits(editor.edited_files().iter().cloned());
        self.session
            .record_commits(editor.commit_records(), editor.last_commit());

        let summary = if parts.is_empty() {
            GENERIC_ACK.to_string()
        } else {
            format!("Ok, I have {}.", parts.join(", and "))
        };

        Ok(Some(summary))
    }
}

fn join_files(files: &BTreeSet<String>) -> String {
    files.iter().map(String::as_str).collect::<Vec<_>>().join(", ")
}
