//! Canonical program representation
//!
//! - [`op`]: the closed set of eight [`CanonicalOp`]s
//! - [`Program`]: an ordered, fixed-length sequence of operations
//!
//! A program carries no structural guarantees: loop brackets are not checked
//! for balance when a program is built. Balance is discovered lazily by the
//! tape machine when a jump actually needs its partner.

pub mod op;

pub use op::CanonicalOp;

use std::fmt;
use std::ops::Index;

/// An ordered, 0-indexed sequence of canonical operations
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Program {
    ops: Vec<CanonicalOp>,
}

impl Program {
    pub fn new(ops: Vec<CanonicalOp>) -> Self {
        Program { ops }
    }

    pub fn len(&self) -> usize {
        self.ops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    /// Get the operation at `offset`, if any
    pub fn get(&self, offset: usize) -> Option<CanonicalOp> {
        self.ops.get(offset).copied()
    }

    pub fn ops(&self) -> &[CanonicalOp] {
        &self.ops
    }

    /// Render each operation back to its representative symbol.
    ///
    /// Every operation renders to exactly one character, so offsets into the
    /// program are also column offsets into the rendered text.
    pub fn render(&self) -> String {
        self.ops.iter().map(|op| op.symbol()).collect()
    }
}

impl Index<usize> for Program {
    type Output = CanonicalOp;

    fn index(&self, offset: usize) -> &CanonicalOp {
        &self.ops[offset]
    }
}

impl From<Vec<CanonicalOp>> for Program {
    fn from(ops: Vec<CanonicalOp>) -> Self {
        Program::new(ops)
    }
}

impl FromIterator<CanonicalOp> for Program {
    fn from_iter<I: IntoIterator<Item = CanonicalOp>>(iter: I) -> Self {
        Program::new(iter.into_iter().collect())
    }
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_uses_one_symbol_per_op() {
        let program: Program = CanonicalOp::ALL.into_iter().collect();
        assert_eq!(program.render(), "><+-.,[]");
        assert_eq!(program.render().chars().count(), program.len());
    }

    #[test]
    fn test_index_matches_all_order() {
        for (i, op) in CanonicalOp::ALL.iter().enumerate() {
            assert_eq!(op.index(), i);
        }
    }

    #[test]
    fn test_get_out_of_range() {
        let program = Program::new(vec![CanonicalOp::Increment]);
        assert_eq!(program.get(0), Some(CanonicalOp::Increment));
        assert_eq!(program.get(1), None);
        assert!(!program.is_empty());
    }
}
