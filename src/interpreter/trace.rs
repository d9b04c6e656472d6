//! Recorded execution for step-through replay
//!
//! [`ExecutionTrace::record`] runs a fresh [`TapeMachine`] to completion and
//! keeps a [`Snapshot`] before the first instruction and after every
//! instruction. The trace can then be walked forward and backward without
//! re-executing anything, which is what the terminal debugger does.
//!
//! Output is captured once for the whole run; each snapshot only remembers
//! how many bytes had been written at that point.

use super::engine::{MachineStatus, StepOutcome, TapeMachine};
use super::errors::Fault;
use crate::program::Program;
use crate::snapshot::{Snapshot, SnapshotManager};
use std::borrow::Cow;
use std::io::Read;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TraceError {
    #[error("already at the beginning of execution")]
    AtStart,
    #[error("no more snapshots available (execution finished)")]
    AtEnd,
}

/// How the recorded run ended
#[derive(Debug)]
pub enum TraceOutcome {
    Halted,
    Faulted(Fault),
    /// The snapshot budget ran out before the program stopped
    Truncated,
}

pub struct ExecutionTrace {
    program: Program,
    snapshots: SnapshotManager,
    position: usize,
    output: Vec<u8>,
    outcome: TraceOutcome,
}

impl ExecutionTrace {
    /// Run `program` against `input`, recording a snapshot per step.
    ///
    /// Recording stops at halt, at the first fault, or when the next snapshot
    /// would exceed `snapshot_limit` bytes.
    pub fn record<R: Read + ?Sized>(program: Program, input: &mut R, snapshot_limit: usize) -> Self {
        let mut machine = TapeMachine::new(program);
        let mut snapshots = SnapshotManager::new(snapshot_limit);
        let mut output = Vec::new();

        let mut outcome = match snapshots.push(Snapshot::capture(machine.state(), machine.status(), 0, 0)) {
            Ok(()) => None,
            Err(_) => Some(TraceOutcome::Truncated),
        };

        while outcome.is_none() {
            let stepped = machine.step(input, &mut output);
            let snapshot = Snapshot::capture(machine.state(), machine.status(), machine.steps(), output.len());

            if let Err(e) = snapshots.push(snapshot) {
                tracing::warn!(steps = machine.steps(), "stopped recording: {}", e);
                outcome = Some(TraceOutcome::Truncated);
                break;
            }

            outcome = match stepped {
                Ok(StepOutcome::Continue) => None,
                Ok(StepOutcome::Halted) => Some(TraceOutcome::Halted),
                Err(fault) => Some(TraceOutcome::Faulted(fault)),
            };
        }

        tracing::debug!(
            snapshots = snapshots.len(),
            memory = snapshots.memory_usage(),
            "recorded execution trace"
        );

        ExecutionTrace {
            program: machine.into_program(),
            snapshots,
            position: 0,
            output,
            outcome: outcome.unwrap_or(TraceOutcome::Truncated),
        }
    }

    pub fn program(&self) -> &Program {
        &self.program
    }

    pub fn outcome(&self) -> &TraceOutcome {
        &self.outcome
    }

    pub fn fault(&self) -> Option<&Fault> {
        match &self.outcome {
            TraceOutcome::Faulted(fault) => Some(fault),
            _ => None,
        }
    }

    pub fn is_truncated(&self) -> bool {
        matches!(self.outcome, TraceOutcome::Truncated)
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    pub fn memory_usage(&self) -> usize {
        self.snapshots.memory_usage()
    }

    pub fn current(&self) -> Option<&Snapshot> {
        self.snapshots.get(self.position)
    }

    pub fn is_at_start(&self) -> bool {
        self.position == 0
    }

    pub fn is_at_end(&self) -> bool {
        self.position + 1 >= self.snapshots.len()
    }

    /// Everything the program wrote up to the current snapshot
    pub fn output_at_current(&self) -> Cow<'_, str> {
        let len = self.current().map_or(0, |s| s.output_len);
        String::from_utf8_lossy(&self.output[..len])
    }

    /// The complete output of the recorded run
    pub fn output(&self) -> &[u8] {
        &self.output
    }

    pub fn step_forward(&mut self) -> Result<(), TraceError> {
        if self.is_at_end() {
            return Err(TraceError::AtEnd);
        }
        self.position += 1;
        Ok(())
    }

    pub fn step_backward(&mut self) -> Result<(), TraceError> {
        if self.position == 0 {
            return Err(TraceError::AtStart);
        }
        self.position -= 1;
        Ok(())
    }

    pub fn rewind_to_start(&mut self) {
        self.position = 0;
    }

    pub fn jump_to_end(&mut self) {
        self.position = self.snapshots.len().saturating_sub(1);
    }

    /// Whether the current snapshot is the faulted end state
    pub fn is_at_fault(&self) -> bool {
        self.current()
            .is_some_and(|s| s.status == MachineStatus::Faulted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interpreter::errors::FaultKind;
    use crate::lexicon::{load, registry};

    fn record(source: &str, input: &str, limit: usize) -> ExecutionTrace {
        let program = load(source.as_bytes(), "Brainfuck", registry::builtin()).unwrap();
        ExecutionTrace::record(program, &mut input.as_bytes(), limit)
    }

    #[test]
    fn test_one_snapshot_per_step_plus_initial() {
        let trace = record("+[-].", "", usize::MAX);
        // + [ - ] . => 5 steps, the loop body runs once
        assert_eq!(trace.len(), 6);
        assert!(matches!(trace.outcome(), TraceOutcome::Halted));
        assert_eq!(trace.output(), b"\0");
    }

    #[test]
    fn test_navigation() {
        let mut trace = record(",.", "Z", usize::MAX);
        assert!(trace.is_at_start());
        assert_eq!(trace.step_backward(), Err(TraceError::AtStart));
        assert_eq!(trace.output_at_current(), "");

        trace.jump_to_end();
        assert!(trace.is_at_end());
        assert_eq!(trace.output_at_current(), "Z");
        assert_eq!(trace.step_forward(), Err(TraceError::AtEnd));

        trace.step_backward().unwrap();
        assert_eq!(trace.current().map(|s| s.tape.cells().to_vec()), Some(vec![90]));
        assert_eq!(trace.output_at_current(), "");

        trace.rewind_to_start();
        assert_eq!(trace.position(), 0);
        assert_eq!(trace.current().map(|s| s.step), Some(0));
    }

    #[test]
    fn test_fault_is_last_snapshot() {
        let mut trace = record("+<", "", usize::MAX);
        let fault = trace.fault().unwrap();
        assert!(matches!(fault.kind(), FaultKind::CursorUnderflow));
        trace.jump_to_end();
        assert!(trace.is_at_fault());
        assert_eq!(trace.current().map(|s| s.pc), Some(1));
    }

    #[test]
    fn test_budget_truncates_infinite_loop() {
        let size = std::mem::size_of::<Snapshot>() + 8;
        let trace = record("+[]", "", size * 10);
        assert!(trace.is_truncated());
        assert_eq!(trace.len(), 10);
    }
}
