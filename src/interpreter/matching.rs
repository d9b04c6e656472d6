//! On-demand loop matching
//!
//! There is no jump table. Each time a loop needs to jump, the partner
//! bracket is found by a depth-counting scan from the bracket that triggered
//! the jump. That costs O(loop body) per jump and re-scans on every
//! iteration, which is fine for the size of programs this machine runs and
//! means unbalanced brackets are only reported if execution reaches them.

use crate::program::CanonicalOp;

/// Find the `LoopEnd` matching the `LoopStart` at `start`.
///
/// Scans forward; nested loop starts raise the depth and loop ends lower it.
/// Returns `None` if the program ends first.
pub fn find_loop_end(ops: &[CanonicalOp], start: usize) -> Option<usize> {
    let mut depth = 0usize;
    for (offset, op) in ops.iter().enumerate().skip(start + 1) {
        match op {
            CanonicalOp::LoopStart => depth += 1,
            CanonicalOp::LoopEnd if depth == 0 => return Some(offset),
            CanonicalOp::LoopEnd => depth -= 1,
            _ => {}
        }
    }
    None
}

/// Find the `LoopStart` matching the `LoopEnd` at `end`.
///
/// Scans backward; nested loop ends raise the depth and loop starts lower it.
/// Returns `None` if the scan runs off the front of the program.
pub fn find_loop_start(ops: &[CanonicalOp], end: usize) -> Option<usize> {
    let mut depth = 0usize;
    for offset in (0..end.min(ops.len())).rev() {
        match ops[offset] {
            CanonicalOp::LoopEnd => depth += 1,
            CanonicalOp::LoopStart if depth == 0 => return Some(offset),
            CanonicalOp::LoopStart => depth -= 1,
            _ => {}
        }
    }
    None
}
