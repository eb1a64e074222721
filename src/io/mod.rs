//! I/O surface shared by the architect round and its editor agent
//!
//! The round reports progress through three channels (output, warning, error)
//! and asks for at most one yes/no confirmation per round. Editor agents are
//! handed the same surface so everything the user sees comes from one place.

use std::io::Write;

/// Reporting and confirmation surface for a round.
///
/// Implementations must be shareable between the round and the editor agent
/// it spawns, hence `Send + Sync`.
pub trait Io: Send + Sync {
    /// Informational progress message
    fn tool_output(&self, message: &str);

    /// Recoverable problem the user should know about
    fn tool_warning(&self, message: &str);

    /// Operation failure (the round itself continues)
    fn tool_error(&self, message: &str);

    /// Ask a yes/no question; returns true to proceed
    fn confirm_ask(&self, prompt: &str) -> bool;
}

/// Terminal-backed implementation: output to stdout, warnings and errors to
/// stderr, confirmation read from stdin.
pub struct TerminalIo;

impl Io for TerminalIo {
    fn tool_output(&self, message: &str) {
        println!("{}", message);
    }

    fn tool_warning(&self, message: &str) {
        eprintln!("Warning: {}", message);
    }

    fn tool_error(&self, message: &str) {
        eprintln!("Error: {}", message);
    }

    fn confirm_ask(&self, prompt: &str) -> bool {
        print!("{} (y/n): ", prompt);
        let _ = std::io::stdout().flush();

        let mut answer = String::new();
        if std::io::stdin().read_line(&mut answer).is_err() {
            return false;
        }

        matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
    }
}
