//! Named lexicon registry
//!
//! Registration is write-once per name and happens before any lookup. After
//! construction the registry is only read, so the process-wide instance
//! returned by [`builtin`] is shared without locking.

use super::dialects::BUILTIN_DIALECTS;
use super::{Lexicon, LexiconError};
use rustc_hash::FxHashMap;
use std::sync::OnceLock;

/// Lexicons looked up by dialect name
#[derive(Debug, Clone, Default)]
pub struct LexiconRegistry {
    lexicons: FxHashMap<String, Lexicon>,
}

impl LexiconRegistry {
    pub fn new() -> Self {
        LexiconRegistry::default()
    }

    /// A registry holding every built-in dialect.
    ///
    /// Fails on the first table that cannot be built or registered.
    pub fn with_builtin_dialects() -> Result<Self, LexiconError> {
        let mut registry = LexiconRegistry::new();
        for (name, build) in BUILTIN_DIALECTS {
            registry.register(*name, build()?)?;
        }
        Ok(registry)
    }

    /// Register `lexicon` under `name`. A name can only be registered once.
    pub fn register(&mut self, name: impl Into<String>, lexicon: Lexicon) -> Result<(), LexiconError> {
        let name = name.into();
        if self.lexicons.contains_key(&name) {
            return Err(LexiconError::DuplicateDialect(name));
        }
        tracing::debug!(dialect = %name, kind = ?lexicon.kind(), "registered dialect");
        self.lexicons.insert(name, lexicon);
        Ok(())
    }

    pub fn lookup(&self, name: &str) -> Result<&Lexicon, LexiconError> {
        self.lexicons
            .get(name)
            .ok_or_else(|| LexiconError::UnknownDialect(name.to_string()))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.lexicons.contains_key(name)
    }

    /// Registered dialect names, sorted
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.lexicons.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.lexicons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lexicons.is_empty()
    }
}

/// The process-wide registry of built-in dialects.
///
/// Built on first use. A malformed built-in table is logged and skipped
/// rather than taking the process down; use
/// [`LexiconRegistry::with_builtin_dialects`] to hard-fail instead.
pub fn builtin() -> &'static LexiconRegistry {
    static BUILTIN: OnceLock<LexiconRegistry> = OnceLock::new();
    BUILTIN.get_or_init(|| {
        let mut registry = LexiconRegistry::new();
        for (name, build) in BUILTIN_DIALECTS {
            let result = build().and_then(|lexicon| registry.register(*name, lexicon));
            if let Err(e) = result {
                tracing::error!(dialect = %name, error = %e, "skipping built-in dialect");
            }
        }
        registry
    })
}
