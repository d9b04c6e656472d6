//! Surface lexicons and the machinery that lowers them to canonical operations
//!
//! - [`Lexicon`]: a closed tagged union of [`SymbolLexicon`] and [`WordLexicon`]
//! - [`registry`]: named lexicons, write-once per name
//! - [`dialects`]: the built-in dialect tables
//! - [`tokenizer`]: source text + lexicon → [`Program`](crate::program::Program)
//!
//! # Lexicon kinds
//!
//! A *symbol* lexicon maps single characters to operations; anything else in
//! the source is a comment. A *word* lexicon maps whitespace-delimited words,
//! optionally case-insensitively. The two kinds only differ in which
//! tokenizer runs and in the separator used when rendering back to text, so
//! there is no trait here, just an enum.

pub mod dialects;
pub mod registry;
pub mod tokenizer;

pub use registry::LexiconRegistry;
pub use tokenizer::{load, tokenize, LoadError};

use crate::program::CanonicalOp;
use rustc_hash::FxHashMap;
use thiserror::Error;

/// Errors raised while building lexicons or using the registry
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexiconError {
    #[error("dialect {0:?} is already registered")]
    DuplicateDialect(String),

    #[error("dialect {0:?} doesn't exist")]
    UnknownDialect(String),

    #[error("token {token:?} is mapped more than once")]
    DuplicateToken { token: String },

    #[error("no token provided for operation {op}")]
    MissingOperation { op: CanonicalOp },
}

/// Which tokenizer a lexicon uses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LexiconKind {
    Symbol,
    Word,
}

/// Maps single characters to operations
#[derive(Debug, Clone)]
pub struct SymbolLexicon {
    table: FxHashMap<char, CanonicalOp>,
    // first token given for each op, indexed by `CanonicalOp::index`
    inverse: [char; 8],
}

impl SymbolLexicon {
    /// Build a symbol lexicon from `(symbol, op)` pairs.
    ///
    /// Several symbols may map to the same operation; the first one listed is
    /// the one used when rendering into this dialect.
    pub fn new(entries: &[(char, CanonicalOp)]) -> Result<Self, LexiconError> {
        let mut table = FxHashMap::default();
        let mut inverse: [Option<char>; 8] = [None; 8];

        for &(symbol, op) in entries {
            if table.insert(symbol, op).is_some() {
                return Err(LexiconError::DuplicateToken {
                    token: symbol.to_string(),
                });
            }
            if inverse[op.index()].is_none() {
                inverse[op.index()] = Some(symbol);
            }
        }

        let mut resolved = ['\0'; 8];
        for op in CanonicalOp::ALL {
            resolved[op.index()] = inverse[op.index()].ok_or(LexiconError::MissingOperation { op })?;
        }

        Ok(SymbolLexicon {
            table,
            inverse: resolved,
        })
    }

    pub fn get(&self, symbol: char) -> Option<CanonicalOp> {
        self.table.get(&symbol).copied()
    }

    pub fn symbol_for(&self, op: CanonicalOp) -> char {
        self.inverse[op.index()]
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }
}

/// Maps whitespace-delimited words to operations
#[derive(Debug, Clone)]
pub struct WordLexicon {
    table: FxHashMap<String, CanonicalOp>,
    inverse: Vec<String>,
    case_sensitive: bool,
}

impl WordLexicon {
    /// Build a word lexicon from `(word, op)` pairs.
    ///
    /// When `case_sensitive` is false, words are compared after lowercasing
    /// both the table keys and the source words. Rendering keeps the spelling
    /// given here.
    pub fn new(entries: &[(&str, CanonicalOp)], case_sensitive: bool) -> Result<Self, LexiconError> {
        let mut table = FxHashMap::default();
        let mut inverse: [Option<String>; 8] = Default::default();

        for &(word, op) in entries {
            let key = normalize(word, case_sensitive);
            if table.insert(key, op).is_some() {
                return Err(LexiconError::DuplicateToken {
                    token: word.to_string(),
                });
            }
            if inverse[op.index()].is_none() {
                inverse[op.index()] = Some(word.to_string());
            }
        }

        let mut resolved = Vec::with_capacity(CanonicalOp::ALL.len());
        for op in CanonicalOp::ALL {
            let word = inverse[op.index()]
                .take()
                .ok_or(LexiconError::MissingOperation { op })?;
            resolved.push(word);
        }

        Ok(WordLexicon {
            table,
            inverse: resolved,
            case_sensitive,
        })
    }

    pub fn get(&self, word: &str) -> Option<CanonicalOp> {
        if self.case_sensitive {
            self.table.get(word).copied()
        } else {
            self.table.get(&word.to_lowercase()).copied()
        }
    }

    pub fn word_for(&self, op: CanonicalOp) -> &str {
        &self.inverse[op.index()]
    }

    pub fn is_case_sensitive(&self) -> bool {
        self.case_sensitive
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }
}

fn normalize(word: &str, case_sensitive: bool) -> String {
    if case_sensitive {
        word.to_string()
    } else {
        word.to_lowercase()
    }
}

/// A surface lexicon: one named mapping from tokens to canonical operations
#[derive(Debug, Clone)]
pub enum Lexicon {
    Symbol(SymbolLexicon),
    Word(WordLexicon),
}

impl Lexicon {
    pub fn kind(&self) -> LexiconKind {
        match self {
            Lexicon::Symbol(_) => LexiconKind::Symbol,
            Lexicon::Word(_) => LexiconKind::Word,
        }
    }

    /// The surface token used when rendering `op` into this lexicon
    pub fn token_for(&self, op: CanonicalOp) -> String {
        match self {
            Lexicon::Symbol(lexicon) => lexicon.symbol_for(op).to_string(),
            Lexicon::Word(lexicon) => lexicon.word_for(op).to_string(),
        }
    }

    /// Text placed between rendered tokens
    pub fn separator(&self) -> &'static str {
        match self {
            Lexicon::Symbol(_) => "",
            Lexicon::Word(_) => " ",
        }
    }
}

impl From<SymbolLexicon> for Lexicon {
    fn from(lexicon: SymbolLexicon) -> Self {
        Lexicon::Symbol(lexicon)
    }
}

impl From<WordLexicon> for Lexicon {
    fn from(lexicon: WordLexicon) -> Self {
        Lexicon::Word(lexicon)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::program::CanonicalOp::*;

    const ASCII: [(char, CanonicalOp); 8] = [
        ('>', MoveRight),
        ('<', MoveLeft),
        ('+', Increment),
        ('-', Decrement),
        ('.', Output),
        (',', Input),
        ('[', LoopStart),
        (']', LoopEnd),
    ];

    #[test]
    fn test_symbol_lexicon_rejects_duplicate_symbol() {
        let mut entries = ASCII.to_vec();
        entries.push(('+', Decrement));
        let err = SymbolLexicon::new(&entries).unwrap_err();
        assert_eq!(
            err,
            LexiconError::DuplicateToken {
                token: "+".to_string()
            }
        );
    }

    #[test]
    fn test_symbol_lexicon_requires_every_op() {
        let err = SymbolLexicon::new(&ASCII[..7]).unwrap_err();
        assert_eq!(err, LexiconError::MissingOperation { op: LoopEnd });
    }

    #[test]
    fn test_first_alias_wins_for_rendering() {
        let mut entries = ASCII.to_vec();
        entries.push(('p', Increment));
        let lexicon = SymbolLexicon::new(&entries).unwrap();
        assert_eq!(lexicon.get('p'), Some(Increment));
        assert_eq!(lexicon.symbol_for(Increment), '+');
    }

    #[test]
    fn test_case_insensitive_word_lexicon() {
        let words = [
            ("Right", MoveRight),
            ("Left", MoveLeft),
            ("Up", Increment),
            ("Down", Decrement),
            ("Say", Output),
            ("Hear", Input),
            ("Begin", LoopStart),
            ("End", LoopEnd),
        ];
        let lexicon = WordLexicon::new(&words, false).unwrap();
        assert_eq!(lexicon.get("UP"), Some(Increment));
        assert_eq!(lexicon.get("up"), Some(Increment));
        assert_eq!(lexicon.word_for(Increment), "Up");

        let strict = WordLexicon::new(&words, true).unwrap();
        assert_eq!(strict.get("up"), None);
        assert_eq!(strict.get("Up"), Some(Increment));
    }

    #[test]
    fn test_case_insensitive_collision_is_duplicate() {
        let mut words = vec![
            ("a", MoveRight),
            ("b", MoveLeft),
            ("c", Increment),
            ("d", Decrement),
            ("e", Output),
            ("f", Input),
            ("g", LoopStart),
            ("h", LoopEnd),
        ];
        words.push(("A", Output));
        assert!(WordLexicon::new(&words, true).is_ok());
        assert!(matches!(
            WordLexicon::new(&words, false),
            Err(LexiconError::DuplicateToken { .. })
        ));
    }

    #[test]
    fn test_separator_by_kind() {
        let symbol: Lexicon = SymbolLexicon::new(&ASCII).unwrap().into();
        assert_eq!(symbol.kind(), LexiconKind::Symbol);
        assert_eq!(symbol.separator(), "");
        assert_eq!(symbol.token_for(LoopStart), "[");
    }
}
