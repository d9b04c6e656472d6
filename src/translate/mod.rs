//! Dialect-to-dialect translation
//!
//! A thin consumer of the core: load with the source dialect, then render
//! every canonical operation with the destination lexicon's first token for
//! it. Symbol dialects are joined with no separator, word dialects with a
//! single space. Comments in the source do not survive translation.

use crate::lexicon::{load, Lexicon, LexiconError, LexiconRegistry, LoadError};
use crate::program::Program;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TranslateError {
    #[error("unable to load source program: {0}")]
    Load(#[from] LoadError),

    #[error("both dialects are {0:?}")]
    SameDialect(String),

    #[error("destination {0}")]
    Lexicon(#[from] LexiconError),
}

/// Translate `source` from dialect `from` into dialect `to`
pub fn translate(
    source: &[u8],
    from: &str,
    to: &str,
    registry: &LexiconRegistry,
) -> Result<String, TranslateError> {
    let program = load(source, from, registry)?;

    if from == to {
        return Err(TranslateError::SameDialect(from.to_string()));
    }

    let lexicon = registry.lookup(to)?;
    tracing::debug!(from, to, ops = program.len(), "translating program");
    Ok(render(&program, lexicon))
}

/// Render `program` in the surface syntax of `lexicon`
pub fn render(program: &Program, lexicon: &Lexicon) -> String {
    let tokens: Vec<String> = program.ops().iter().map(|&op| lexicon.token_for(op)).collect();
    tokens.join(lexicon.separator())
}
