//! # Introduction
//!
//! polytape runs programs for a minimal tape machine: eight primitive
//! operations acting on a growable tape of integer cells. The same eight
//! operations can be written in several surface *dialects* — single ASCII
//! symbols, Unicode glyphs, or whitespace-delimited words — and every dialect
//! is lowered to one canonical [`program::Program`] before execution.
//!
//! ## Execution pipeline
//!
//! ```text
//! Source → Lexicon → Tokenizer → Program → TapeMachine → Output
//!                                              ↓
//!                                     Fault → Diagnostic
//! ```
//!
//! 1. [`lexicon`] — named surface lexicons, the registry that holds them, and
//!    the tokenizer that turns source text into canonical operations.
//! 2. [`program`] — the canonical operation set and the loaded program.
//! 3. [`interpreter`] — the tape machine: step semantics, on-demand loop
//!    matching, character I/O, and the replayable execution trace.
//! 4. [`memory`] — the tape itself.
//! 5. [`diagnostics`] — positioned, caret-annotated rendering of faults.
//! 6. [`translate`] — re-rendering a program from one dialect into another.
//! 7. [`snapshot`] — snapshot storage with a memory budget, used by the trace.
//! 8. [`ui`] — ratatui step-through debugger; not part of the stable library API.
//!
//! ## Quick example
//!
//! ```
//! use polytape::lexicon::{load, registry};
//!
//! let program = load(b",.", "Brainfuck", registry::builtin()).unwrap();
//! let mut output = Vec::new();
//! polytape::interpreter::run(program, &mut &b"A"[..], &mut output).unwrap();
//! assert_eq!(output, b"A");
//! ```

pub mod diagnostics;
pub mod interpreter;
pub mod lexicon;
pub mod memory;
pub mod program;
pub mod snapshot;
pub mod translate;
pub mod ui;
