// Snapshot management for step-through replay

use crate::interpreter::engine::{ExecutionState, MachineStatus};
use crate::memory::Tape;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SnapshotError {
    #[error("snapshot memory limit exceeded: {current} + {requested} > {limit}")]
    LimitExceeded {
        current: usize,
        requested: usize,
        limit: usize,
    },
}

/// Snapshot of execution state after a given number of steps
#[derive(Debug, Clone)]
pub struct Snapshot {
    /// Instructions executed when the snapshot was taken
    pub step: u64,
    /// Offset of the next instruction (or of the faulting one)
    pub pc: usize,
    pub cursor: usize,
    pub tape: Tape,
    /// Bytes of output written so far
    pub output_len: usize,
    pub status: MachineStatus,
}

impl Snapshot {
    pub fn capture(state: &ExecutionState, status: MachineStatus, step: u64, output_len: usize) -> Self {
        Snapshot {
            step,
            pc: state.pc(),
            cursor: state.cursor(),
            tape: state.tape().clone(),
            output_len,
            status,
        }
    }

    /// Estimate the memory usage of this snapshot in bytes
    pub fn estimated_size(&self) -> usize {
        std::mem::size_of::<Snapshot>() + self.tape.size_in_bytes()
    }
}

/// Stores snapshots in order, up to a memory budget
#[derive(Debug)]
pub struct SnapshotManager {
    snapshots: Vec<Snapshot>,
    max_memory: usize,
    current_memory: usize,
}

impl SnapshotManager {
    pub fn new(max_memory: usize) -> Self {
        SnapshotManager {
            snapshots: Vec::new(),
            max_memory,
            current_memory: 0,
        }
    }

    /// Add a snapshot to history
    pub fn push(&mut self, snapshot: Snapshot) -> Result<(), SnapshotError> {
        let snapshot_size = snapshot.estimated_size();

        if self.current_memory + snapshot_size > self.max_memory {
            return Err(SnapshotError::LimitExceeded {
                current: self.current_memory,
                requested: snapshot_size,
                limit: self.max_memory,
            });
        }

        self.current_memory += snapshot_size;
        self.snapshots.push(snapshot);
        Ok(())
    }

    pub fn get(&self, index: usize) -> Option<&Snapshot> {
        self.snapshots.get(index)
    }

    pub fn last(&self) -> Option<&Snapshot> {
        self.snapshots.last()
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    pub fn memory_usage(&self) -> usize {
        self.current_memory
    }

    pub fn memory_limit(&self) -> usize {
        self.max_memory
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot(step: u64) -> Snapshot {
        Snapshot::capture(&ExecutionState::new(), MachineStatus::Running, step, 0)
    }

    #[test]
    fn test_push_within_budget() {
        let size = snapshot(0).estimated_size();
        let mut manager = SnapshotManager::new(size * 2);
        manager.push(snapshot(0)).unwrap();
        manager.push(snapshot(1)).unwrap();
        assert_eq!(manager.len(), 2);
        assert_eq!(manager.memory_usage(), size * 2);
        assert_eq!(manager.get(1).map(|s| s.step), Some(1));
    }

    #[test]
    fn test_push_over_budget_is_rejected() {
        let size = snapshot(0).estimated_size();
        let mut manager = SnapshotManager::new(size + size / 2);
        manager.push(snapshot(0)).unwrap();
        let err = manager.push(snapshot(1)).unwrap_err();
        assert_eq!(
            err,
            SnapshotError::LimitExceeded {
                current: size,
                requested: size,
                limit: manager.memory_limit(),
            }
        );
        assert_eq!(manager.len(), 1);
    }
}
