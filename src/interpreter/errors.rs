//! Runtime fault types for the tape machine
//!
//! This module defines [`FaultKind`], every condition that stops a run, and
//! [`Fault`], which pairs a kind with a positioned [`Diagnostic`].
//!
//! All faults are terminal. The machine never retries or repairs anything;
//! after a fault the caller may inspect the execution state but cannot
//! resume it.

use super::engine::MachineStatus;
use crate::diagnostics::Diagnostic;
use crate::program::Program;
use std::io;
use thiserror::Error;

/// Conditions that terminate a run
#[derive(Debug, Error)]
pub enum FaultKind {
    /// `MoveLeft` with the cursor already on cell zero
    #[error("cursor moved below cell zero")]
    CursorUnderflow,

    /// A loop start on a zero cell whose matching loop end does not exist
    #[error("no matching loop end for loop start")]
    UnmatchedLoopStart,

    /// A loop end on a non-zero cell whose matching loop start does not exist
    #[error("no matching loop start for loop end")]
    UnmatchedLoopEnd,

    /// The input sink failed, including running out of input
    #[error("input failure: {0}")]
    InputFailure(#[source] io::Error),

    /// The output sink failed
    #[error("output failure: {0}")]
    OutputFailure(#[source] io::Error),

    /// `run` or `step` on a machine that has already halted or faulted
    #[error("machine is {0} and cannot be run again")]
    NotReady(MachineStatus),
}

/// A terminal runtime error with its positional diagnostic
#[derive(Debug, Error)]
#[error("{diagnostic}")]
pub struct Fault {
    #[source]
    kind: FaultKind,
    diagnostic: Diagnostic,
}

impl Fault {
    pub fn new(kind: FaultKind, offset: usize, program: &Program) -> Self {
        let message = format!("[instruction {}] {}", offset, kind);
        Fault {
            kind,
            diagnostic: Diagnostic::new(message, offset, program.render()),
        }
    }

    pub fn kind(&self) -> &FaultKind {
        &self.kind
    }

    pub fn into_kind(self) -> FaultKind {
        self.kind
    }

    pub fn offset(&self) -> usize {
        self.diagnostic.offset()
    }

    pub fn diagnostic(&self) -> &Diagnostic {
        &self.diagnostic
    }
}
