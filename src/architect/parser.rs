//! Splits the architect's planning output into deletion directives and
//! free-form editor instructions
//!
//! One directive form is recognized: a line reading `DELETE FILE: <path>`,
//! case-insensitive, anchored at the start of the (trimmed) line. Everything
//! else passes through untouched for the editor agent.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref DELETE_PATTERN: Regex = Regex::new(r"(?i)^DELETE FILE:\s*(.*)$").unwrap();
}

/// A recognized `DELETE FILE:` line. `target` is the trailing text trimmed of
/// whitespace and may be empty, which marks the directive malformed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeletionDirective {
    pub raw_line: String,
    pub target: String,
}

/// One line of planning output, classified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlanLine {
    Directive(DeletionDirective),
    Text(String),
}

/// The ordered partition of a planning output.
#[derive(Debug, Clone, Default)]
pub struct ParsedPlan {
    pub lines: Vec<PlanLine>,
}

impl ParsedPlan {
    pub fn directives(&self) -> impl Iterator<Item = &DeletionDirective> {
        self.lines.iter().filter_map(|line| match line {
            PlanLine::Directive(directive) => Some(directive),
            PlanLine::Text(_) => None,
        })
    }

    /// All non-directive lines re-joined in original order, trimmed. May be
    /// empty.
    pub fn remaining_instructions(&self) -> String {
        let text_lines: Vec<&str> = self
            .lines
            .iter()
            .filter_map(|line| match line {
                PlanLine::Text(text) => Some(text.as_str()),
                PlanLine::Directive(_) => None,
            })
            .collect();

        text_lines.join("\n").trim().to_string()
    }
}

/// Classify each line of the planning output. Pure function, no side effects.
///
/// Directive matching happens against the trimmed line, but `Text` lines keep
/// their original form so the editor sees exactly what the architect wrote.
pub fn parse(planning_output: &str) -> ParsedPlan {
    let mut lines = Vec::new();

    for line in planning_output.lines() {
        match DELETE_PATTERN.captures(line.trim()) {
            Some(captures) => {
                lines.push(PlanLine::Directive(DeletionDirective {
                    raw_line: line.to_string(),
                    target: captures[1].trim().to_string(),
                }));
            }
            None => lines.push(PlanLine::Text(line.to_string())),
        }
    }

    ParsedPlan { lines }
}
