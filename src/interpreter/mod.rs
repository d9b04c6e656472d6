//! Tape machine execution engine
//!
//! This module provides the core execution logic:
//! - [`engine`]: the [`TapeMachine`] and its step semantics
//! - [`matching`]: on-demand forward/backward loop matching
//! - [`io`]: character-level reads and writes over byte streams
//! - [`errors`]: runtime fault types
//! - [`trace`]: recorded execution for replay in the debugger
//! - [`constants`]: defaults shared by the library and the CLI
//!
//! # Execution Model
//!
//! The machine executes one canonical operation at a time and advances the
//! program counter by one afterwards. Loop instructions move the program
//! counter onto their partner bracket first, so the usual advance lands just
//! past it. Partners are found by scanning at the moment of the jump.

pub mod constants;
pub mod engine;
pub mod errors;
pub mod io;
pub mod matching;
pub mod trace;

pub use engine::{run, ExecutionState, MachineStatus, StepOutcome, TapeMachine};
pub use errors::{Fault, FaultKind};
pub use trace::{ExecutionTrace, TraceOutcome};
