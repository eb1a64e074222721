//! Session-wide accounting threaded through every architect round
//!
//! The caller owns one `SessionState` for the whole session and passes it by
//! mutable reference into each round. Rounds only ever add to it; nothing here
//! is reset between rounds.

use std::collections::{BTreeMap, BTreeSet};

/// A commit produced by an editor agent, by id and message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitRef {
    pub id: String,
    pub message: String,
}

/// Running totals for the session.
///
/// `total_cost` is in dollars and already includes everything spent by
/// subordinate agents, since they inherit the running total as their starting
/// value and report back an inclusive final figure.
#[derive(Debug, Clone, Default)]
pub struct SessionState {
    pub total_cost: f64,
    pub edited_files: BTreeSet<String>,
    pub commit_records: BTreeMap<String, String>,
    pub last_commit: Option<CommitRef>,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record files touched this round. Deletions count as edits for commit
    /// purposes.
    pub fn record_edits<I>(&mut self, files: I)
    where
        I: IntoIterator<Item = String>,
    {
        self.edited_files.extend(files);
    }

    /// Merge commit records reported by an editor agent, moving the last
    /// commit pointer only when the editor actually committed something.
    pub fn record_commits(
        &mut self,
        records: &BTreeMap<String, String>,
        last_commit: Option<&CommitRef>,
    ) {
        self.commit_records
            .extend(records.iter().map(|(k, v)| (k.clone(), v.clone())));
        if let Some(commit) = last_commit {
            self.last_commit = Some(commit.clone());
        }
    }
}
