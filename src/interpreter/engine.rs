// Execution engine for the tape machine

use super::errors::{Fault, FaultKind};
use super::io::{read_char, write_cell};
use super::matching::{find_loop_end, find_loop_start};
use crate::memory::{Cell, Tape};
use crate::program::{CanonicalOp, Program};
use std::fmt;
use std::io::{Read, Write};

/// Lifecycle of a [`TapeMachine`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MachineStatus {
    /// Loaded, nothing executed yet
    Ready,
    /// Inside `run`, or between `step` calls
    Running,
    /// The program counter ran past the last instruction
    Halted,
    /// Stopped by a fault
    Faulted,
}

impl fmt::Display for MachineStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            MachineStatus::Ready => "ready",
            MachineStatus::Running => "running",
            MachineStatus::Halted => "halted",
            MachineStatus::Faulted => "faulted",
        };
        f.write_str(name)
    }
}

/// What a single step left the machine doing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    Continue,
    Halted,
}

/// Program counter, cursor and tape
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ExecutionState {
    pc: usize,
    cursor: usize,
    tape: Tape,
}

impl ExecutionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Offset of the next instruction to execute
    pub fn pc(&self) -> usize {
        self.pc
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn tape(&self) -> &Tape {
        &self.tape
    }

    /// Value of the cell under the cursor
    pub fn current_cell(&self) -> Cell {
        self.tape.get(self.cursor).unwrap_or_default()
    }
}

/// The tape machine: owns one program and one execution state
pub struct TapeMachine {
    program: Program,
    state: ExecutionState,
    status: MachineStatus,
    steps: u64,
}

impl TapeMachine {
    pub fn new(program: Program) -> Self {
        TapeMachine {
            program,
            state: ExecutionState::new(),
            status: MachineStatus::Ready,
            steps: 0,
        }
    }

    pub fn program(&self) -> &Program {
        &self.program
    }

    pub fn state(&self) -> &ExecutionState {
        &self.state
    }

    pub fn status(&self) -> MachineStatus {
        self.status
    }

    /// Number of instructions executed so far
    pub fn steps(&self) -> u64 {
        self.steps
    }

    /// Give the program back, e.g. to build a fresh machine for another run
    pub fn into_program(self) -> Program {
        self.program
    }

    /// Run the program until it halts or faults.
    ///
    /// Only valid on a `Ready` machine. The output sink is flushed before
    /// returning, on both halt and fault.
    pub fn run<R, W>(&mut self, input: &mut R, output: &mut W) -> Result<(), Fault>
    where
        R: Read + ?Sized,
        W: Write + ?Sized,
    {
        if self.status != MachineStatus::Ready {
            return Err(self.fault(FaultKind::NotReady(self.status)));
        }
        self.status = MachineStatus::Running;

        let result = loop {
            match self.execute(input, output) {
                Ok(StepOutcome::Continue) => {}
                Ok(StepOutcome::Halted) => break Ok(()),
                Err(fault) => break Err(fault),
            }
        };

        let flushed = output.flush();
        match (result, flushed) {
            (Ok(()), Err(e)) => {
                self.status = MachineStatus::Faulted;
                Err(self.fault(FaultKind::OutputFailure(e)))
            }
            (result, _) => result,
        }
    }

    /// Execute exactly one instruction.
    ///
    /// A loop jump is part of the instruction that triggers it. Returns
    /// [`StepOutcome::Halted`] once the program counter is past the end.
    pub fn step<R, W>(&mut self, input: &mut R, output: &mut W) -> Result<StepOutcome, Fault>
    where
        R: Read + ?Sized,
        W: Write + ?Sized,
    {
        match self.status {
            MachineStatus::Ready => self.status = MachineStatus::Running,
            MachineStatus::Running => {}
            status => return Err(self.fault(FaultKind::NotReady(status))),
        }
        self.execute(input, output)
    }

    fn execute<R, W>(&mut self, input: &mut R, output: &mut W) -> Result<StepOutcome, Fault>
    where
        R: Read + ?Sized,
        W: Write + ?Sized,
    {
        let Some(op) = self.program.get(self.state.pc) else {
            return Ok(self.halt());
        };

        if let Err(kind) = self.apply(op, input, output) {
            self.status = MachineStatus::Faulted;
            let fault = self.fault(kind);
            tracing::debug!(offset = fault.offset(), steps = self.steps, "run faulted: {}", fault.kind());
            return Err(fault);
        }

        self.steps += 1;
        self.state.pc += 1;

        if self.state.pc >= self.program.len() {
            Ok(self.halt())
        } else {
            Ok(StepOutcome::Continue)
        }
    }

    /// Apply one operation. Leaves `pc` on the instruction to advance from.
    fn apply<R, W>(&mut self, op: CanonicalOp, input: &mut R, output: &mut W) -> Result<(), FaultKind>
    where
        R: Read + ?Sized,
        W: Write + ?Sized,
    {
        let state = &mut self.state;
        match op {
            CanonicalOp::MoveRight => {
                state.cursor += 1;
                state.tape.extend_to(state.cursor);
            }

            CanonicalOp::MoveLeft => {
                state.cursor = state
                    .cursor
                    .checked_sub(1)
                    .ok_or(FaultKind::CursorUnderflow)?;
            }

            CanonicalOp::Increment => state.tape.increment(state.cursor),

            CanonicalOp::Decrement => state.tape.decrement(state.cursor),

            CanonicalOp::Output => {
                write_cell(output, state.current_cell()).map_err(FaultKind::OutputFailure)?;
            }

            CanonicalOp::Input => {
                // Pending output (a prompt) must reach the sink before Input blocks
                output.flush().map_err(FaultKind::OutputFailure)?;
                let c = read_char(input).map_err(FaultKind::InputFailure)?;
                state.tape.set(state.cursor, Cell::from(u32::from(c)));
            }

            CanonicalOp::LoopStart => {
                if state.current_cell() == 0 {
                    let end = find_loop_end(self.program.ops(), state.pc)
                        .ok_or(FaultKind::UnmatchedLoopStart)?;
                    tracing::trace!(from = state.pc, to = end + 1, "skip loop");
                    state.pc = end;
                }
            }

            CanonicalOp::LoopEnd => {
                if state.current_cell() != 0 {
                    let start = find_loop_start(self.program.ops(), state.pc)
                        .ok_or(FaultKind::UnmatchedLoopEnd)?;
                    tracing::trace!(from = state.pc, to = start + 1, "repeat loop");
                    state.pc = start;
                }
            }
        }
        Ok(())
    }

    fn halt(&mut self) -> StepOutcome {
        if self.status != MachineStatus::Halted {
            tracing::debug!(steps = self.steps, tape_len = self.state.tape.len(), "run halted");
        }
        self.status = MachineStatus::Halted;
        StepOutcome::Halted
    }

    fn fault(&self, kind: FaultKind) -> Fault {
        Fault::new(kind, self.state.pc, &self.program)
    }
}

/// Run `program` on a fresh machine
pub fn run<R, W>(program: Program, input: &mut R, output: &mut W) -> Result<(), Fault>
where
    R: Read + ?Sized,
    W: Write + ?Sized,
{
    TapeMachine::new(program).run(input, output)
}
