//! Confirmation gate between the architect's plan and the editor run
//!
//! Consulted only when there are instructions left to delegate. Deletions
//! already performed this round are committed decisions and are never rolled
//! back on a decline.

use crate::io::Io;

/// Fixed prompt shown before handing instructions to the editor agent.
pub const EDIT_CONFIRM_PROMPT: &str = "Edit the files based on architect's plan?";

/// Decide whether to proceed with the editor run. `auto_accept` bypasses the
/// prompt entirely.
pub fn should_proceed(auto_accept: bool, io: &dyn Io) -> bool {
    if auto_accept {
        return true;
    }
    io.confirm_ask(EDIT_CONFIRM_PROMPT)
}
