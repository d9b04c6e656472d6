//! Tokenizer (loader) for dialect source text
//!
//! Converts raw source bytes into a [`Program`] using one [`Lexicon`].
//! Anything the lexicon does not recognise is dropped, which is how comments
//! and prose in source files are ignored. No structural validation happens
//! here: unbalanced loops are only discovered when the machine runs.

use super::registry::LexiconRegistry;
use super::{Lexicon, LexiconError, SymbolLexicon, WordLexicon};
use crate::program::{CanonicalOp, Program};
use thiserror::Error;

/// Errors raised while loading a program
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoadError {
    #[error(transparent)]
    Lexicon(#[from] LexiconError),

    #[error("no commands read from source; was {dialect:?} the correct dialect?")]
    EmptyProgram { dialect: String },
}

/// Look up `dialect` in `registry` and tokenize `source` with it
pub fn load(source: &[u8], dialect: &str, registry: &LexiconRegistry) -> Result<Program, LoadError> {
    let lexicon = registry.lookup(dialect)?;
    let program = tokenize(source, lexicon).ok_or_else(|| LoadError::EmptyProgram {
        dialect: dialect.to_string(),
    })?;
    tracing::debug!(dialect, ops = program.len(), "loaded program");
    Ok(program)
}

/// Tokenize `source` with `lexicon`. Returns `None` when nothing was recognised.
///
/// Source bytes are decoded as UTF-8; malformed sequences decode to U+FFFD,
/// which no lexicon maps, so they are discarded like any other comment.
pub fn tokenize(source: &[u8], lexicon: &Lexicon) -> Option<Program> {
    let text = String::from_utf8_lossy(source);
    let ops = match lexicon {
        Lexicon::Symbol(symbols) => tokenize_symbols(&text, symbols),
        Lexicon::Word(words) => tokenize_words(&text, words),
    };

    if ops.is_empty() {
        None
    } else {
        Some(Program::new(ops))
    }
}

fn tokenize_symbols(text: &str, lexicon: &SymbolLexicon) -> Vec<CanonicalOp> {
    text.chars().filter_map(|c| lexicon.get(c)).collect()
}

fn tokenize_words(text: &str, lexicon: &WordLexicon) -> Vec<CanonicalOp> {
    // Runs of whitespace are a single delimiter
    text.split_whitespace()
        .filter_map(|word| lexicon.get(word))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexicon::{dialects, registry};
    use crate::program::CanonicalOp::*;

    #[test]
    fn test_symbols_skip_comments() {
        let lexicon = dialects::brainfuck().unwrap();
        let program = tokenize(b"add two: ++ then print it .\n", &lexicon).unwrap();
        assert_eq!(program.ops(), &[Increment, Increment, Output]);
    }

    #[test]
    fn test_unicode_symbols() {
        let lexicon = dialects::tenx().unwrap();
        let source = "XX\u{2717}\u{2715}X\u{00D7}\u{0087}\u{2613} note".as_bytes();
        let program = tokenize(source, &lexicon).unwrap();
        assert_eq!(program.render(), "++[>+<-]");
    }

    #[test]
    fn test_words_split_on_any_whitespace() {
        let lexicon = dialects::pikalang().unwrap();
        let program = tokenize(b"pi \t pi\r\n\n pikachu  hello chu", &lexicon).unwrap();
        assert_eq!(program.ops(), &[Increment, Increment, Output, LoopEnd]);
    }

    #[test]
    fn test_words_are_matched_whole() {
        let lexicon = dialects::pikalang().unwrap();
        // "pipi" must not be read as two "pi"
        let program = tokenize(b"pipi", &lexicon).unwrap();
        assert_eq!(program.ops(), &[MoveRight]);
        assert!(tokenize(b"Pipi PIKA", &lexicon).is_none());
    }

    #[test]
    fn test_empty_or_comment_only_source() {
        for dialect in ["Brainfuck", "TenX", "Pikalang"] {
            for source in [&b""[..], b"just some prose", b"\n\t  \n"] {
                let err = load(source, dialect, registry::builtin()).unwrap_err();
                assert_eq!(
                    err,
                    LoadError::EmptyProgram {
                        dialect: dialect.to_string()
                    }
                );
            }
        }
    }

    #[test]
    fn test_unknown_dialect() {
        let err = load(b"+", "Ook", registry::builtin()).unwrap_err();
        assert_eq!(
            err,
            LoadError::Lexicon(LexiconError::UnknownDialect("Ook".to_string()))
        );
    }

    #[test]
    fn test_invalid_utf8_is_discarded() {
        let lexicon = dialects::brainfuck().unwrap();
        let program = tokenize(&[b'+', 0xff, 0xfe, b'.'], &lexicon).unwrap();
        assert_eq!(program.ops(), &[Increment, Output]);
    }

    #[test]
    fn test_unbalanced_loops_load() {
        let program = load(b"]][", "Brainfuck", registry::builtin()).unwrap();
        assert_eq!(program.len(), 3);
    }
}
