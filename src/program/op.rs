//! The canonical operation set
//!
//! Every dialect lowers to these eight operations. The engine never sees
//! surface syntax.

use std::fmt;

/// One of the eight primitive tape machine instructions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CanonicalOp {
    /// Move the cursor one cell to the right, growing the tape if needed
    MoveRight,
    /// Move the cursor one cell to the left
    MoveLeft,
    /// Add one to the current cell
    Increment,
    /// Subtract one from the current cell
    Decrement,
    /// Write the current cell as a character
    Output,
    /// Read one character into the current cell
    Input,
    /// Skip past the matching `LoopEnd` when the current cell is zero
    LoopStart,
    /// Jump back past the matching `LoopStart` when the current cell is non-zero
    LoopEnd,
}

impl CanonicalOp {
    /// All operations in canonical order.
    pub const ALL: [CanonicalOp; 8] = [
        CanonicalOp::MoveRight,
        CanonicalOp::MoveLeft,
        CanonicalOp::Increment,
        CanonicalOp::Decrement,
        CanonicalOp::Output,
        CanonicalOp::Input,
        CanonicalOp::LoopStart,
        CanonicalOp::LoopEnd,
    ];

    /// The representative symbol used when rendering a program for display.
    pub fn symbol(self) -> char {
        match self {
            CanonicalOp::MoveRight => '>',
            CanonicalOp::MoveLeft => '<',
            CanonicalOp::Increment => '+',
            CanonicalOp::Decrement => '-',
            CanonicalOp::Output => '.',
            CanonicalOp::Input => ',',
            CanonicalOp::LoopStart => '[',
            CanonicalOp::LoopEnd => ']',
        }
    }

    /// Position of this operation in [`CanonicalOp::ALL`].
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn is_loop(self) -> bool {
        matches!(self, CanonicalOp::LoopStart | CanonicalOp::LoopEnd)
    }
}

impl fmt::Display for CanonicalOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CanonicalOp::MoveRight => "MoveRight",
            CanonicalOp::MoveLeft => "MoveLeft",
            CanonicalOp::Increment => "Increment",
            CanonicalOp::Decrement => "Decrement",
            CanonicalOp::Output => "Output",
            CanonicalOp::Input => "Input",
            CanonicalOp::LoopStart => "LoopStart",
            CanonicalOp::LoopEnd => "LoopEnd",
        };
        f.write_str(name)
    }
}
