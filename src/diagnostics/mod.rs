//! Positioned diagnostics for runtime faults
//!
//! A [`Diagnostic`] pairs a message with the instruction offset where the
//! machine stopped and the canonical rendering of the whole program. Each
//! canonical operation renders as exactly one character, so the offset is
//! also the caret column.
//!
//! Rendering assumes the program fits on one line. Long programs are not
//! wrapped, so the caret lands past the terminal edge for faults deep into
//! a large program.

use std::fmt;

/// Marker printed under the offending instruction
pub const CARET: &str = "^ here";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    message: String,
    offset: usize,
    program: String,
}

impl Diagnostic {
    pub fn new(message: impl Into<String>, offset: usize, program: impl Into<String>) -> Self {
        Diagnostic {
            message: message.into(),
            offset,
            program: program.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Canonical text of the program the fault happened in
    pub fn program(&self) -> &str {
        &self.program
    }

    /// Two lines: the program text, then a caret under the offending offset
    pub fn render(&self) -> String {
        format!("{}\n{}{}", self.program, " ".repeat(self.offset), CARET)
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\n{}", self.message, self.render())
    }
}
