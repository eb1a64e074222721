//! Editor-agent contract
//!
//! The architect round never edits files itself. It builds an `EditorConfig`
//! from the caller's configuration, asks an `EditorSpawner` for a fresh agent
//! scoped to the round, runs it to completion on the remaining instruction
//! text, then reads back its accounting. The agent's conversation state dies
//! with the round; its cost, edited files, and commits are merged into the
//! session.

use anyhow::Result;
use async_trait::async_trait;
use std::collections::{BTreeMap, BTreeSet};
use std::sync::Arc;

use crate::config::Config;
use crate::io::Io;
use crate::session::CommitRef;

/// Configuration for a single editor run, derived from the caller's
/// configuration with a fixed list of named overrides.
#[derive(Debug, Clone)]
pub struct EditorConfig {
    /// Caller's editor model if set, else its main model
    pub model: String,
    /// Caller's configured editor edit format
    pub edit_format: String,
    /// Editors never suggest shell commands
    pub suggest_shell_commands: bool,
    /// Repo-map budget; editors work from the instruction text alone
    pub map_tokens: usize,
    pub cache_prompts: bool,
    pub cache_warming_pings: usize,
    /// Editors never summarize the parent's conversation
    pub summarize_from_parent: bool,
    /// Caller's running total, so the editor reports an inclusive final cost
    pub starting_cost: f64,
    pub dry_run: bool,
}

impl EditorConfig {
    /// Snapshot the caller's configuration and apply the per-round overrides.
    pub fn for_round(config: &Config, starting_cost: f64) -> Self {
        Self {
            model: config.editor_model().to_string(),
            edit_format: config.llm.editor_edit_format.clone(),
            suggest_shell_commands: false,
            map_tokens: 0,
            cache_prompts: false,
            cache_warming_pings: 0,
            summarize_from_parent: false,
            starting_cost,
            dry_run: config.architect.dry_run,
        }
    }
}

/// One subordinate editing agent, scoped to a single round.
///
/// `run` is awaited to completion before anything else happens; afterwards the
/// accessors expose what the run cost and changed.
#[async_trait]
pub trait EditorAgent: Send {
    /// Run the agent on the instruction text. Errors propagate to the caller
    /// unrecovered; deletions performed earlier in the round stand.
    async fn run(&mut self, instructions: &str) -> Result<()>;

    /// Final cost in dollars, inclusive of the inherited starting cost
    fn total_cost(&self) -> f64;

    /// Workspace-relative paths the agent edited
    fn edited_files(&self) -> &BTreeSet<String>;

    /// Commits the agent made, by id and message
    fn commit_records(&self) -> &BTreeMap<String, String>;

    /// The agent's most recent commit, if it made any
    fn last_commit(&self) -> Option<&CommitRef>;
}

/// Factory for editor agents. Each round spawns exactly one agent with empty
/// conversation history, sharing the caller's I/O surface.
pub trait EditorSpawner: Send + Sync {
    fn spawn(&self, config: EditorConfig, io: Arc<dyn Io>) -> Result<Box<dyn EditorAgent>>;
}
