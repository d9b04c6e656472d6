// Defaults for the tape machine and its CLI

use crate::lexicon::dialects::BRAINFUCK;

/// Dialect used when none is given and the file extension is not recognised
pub const DEFAULT_DIALECT: &str = BRAINFUCK;

/// Default snapshot budget for recorded traces, in MiB
pub const DEFAULT_SNAPSHOT_LIMIT_MIB: usize = 256;

pub const BYTES_PER_MIB: usize = 1024 * 1024;
