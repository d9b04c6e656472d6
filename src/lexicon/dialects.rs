//! Built-in dialect tables
//!
//! These are data, not engine logic. Each function builds one lexicon; the
//! registry decides what to do if a table turns out to be malformed.

use super::{Lexicon, LexiconError, SymbolLexicon, WordLexicon};
use crate::program::CanonicalOp::{self, *};
use std::path::Path;

pub const BRAINFUCK: &str = "Brainfuck";
pub const TENX: &str = "TenX";
pub const PIKALANG: &str = "Pikalang";

/// Constructor for a built-in dialect
pub type DialectBuilder = fn() -> Result<Lexicon, LexiconError>;

/// Every built-in dialect, in registration order
pub const BUILTIN_DIALECTS: &[(&str, DialectBuilder)] = &[
    (BRAINFUCK, brainfuck),
    (TENX, tenx),
    (PIKALANG, pikalang),
];

const BRAINFUCK_SYMBOLS: &[(char, CanonicalOp)] = &[
    ('>', MoveRight),
    ('<', MoveLeft),
    ('+', Increment),
    ('-', Decrement),
    ('.', Output),
    (',', Input),
    ('[', LoopStart),
    (']', LoopEnd),
];

const TENX_SYMBOLS: &[(char, CanonicalOp)] = &[
    ('\u{2715}', MoveRight),   // ✕
    ('\u{00D7}', MoveLeft),    // ×
    ('\u{0058}', Increment),   // X
    ('\u{0087}', Decrement),
    ('\u{2716}', Output),      // ✖
    ('\u{1D4CD}', Input),      // 𝓍
    ('\u{2717}', LoopStart),   // ✗
    ('\u{2613}', LoopEnd),     // ☓
];

const PIKALANG_WORDS: &[(&str, CanonicalOp)] = &[
    ("pipi", MoveRight),
    ("pichu", MoveLeft),
    ("pi", Increment),
    ("ka", Decrement),
    ("pikachu", Output),
    ("pikapi", Input),
    ("pika", LoopStart),
    ("chu", LoopEnd),
];

pub fn brainfuck() -> Result<Lexicon, LexiconError> {
    SymbolLexicon::new(BRAINFUCK_SYMBOLS).map(Lexicon::from)
}

pub fn tenx() -> Result<Lexicon, LexiconError> {
    SymbolLexicon::new(TENX_SYMBOLS).map(Lexicon::from)
}

pub fn pikalang() -> Result<Lexicon, LexiconError> {
    WordLexicon::new(PIKALANG_WORDS, true).map(Lexicon::from)
}

/// Guess a dialect name from a source file's extension
pub fn dialect_for_path(path: &Path) -> Option<&'static str> {
    let ext = path.extension()?.to_str()?.to_ascii_lowercase();
    match ext.as_str() {
        "b" | "bf" => Some(BRAINFUCK),
        "ten" => Some(TENX),
        "pika" => Some(PIKALANG),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_tables_are_complete() {
        for (name, build) in BUILTIN_DIALECTS {
            assert!(build().is_ok(), "dialect {} failed to build", name);
        }
    }

    #[test]
    fn test_dialect_for_path() {
        assert_eq!(dialect_for_path(Path::new("hello.b")), Some(BRAINFUCK));
        assert_eq!(dialect_for_path(Path::new("HELLO.PIKA")), Some(PIKALANG));
        assert_eq!(dialect_for_path(Path::new("dir/x.ten")), Some(TENX));
        assert_eq!(dialect_for_path(Path::new("notes.txt")), None);
        assert_eq!(dialect_for_path(Path::new("Makefile")), None);
    }
}
