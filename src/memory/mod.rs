//! Memory model for the tape machine
//!
//! - [`tape`]: the growable tape of [`Cell`]s
//!
//! # Cell Width
//!
//! Cells are signed 64-bit integers with wrapping arithmetic. There is no
//! overflow fault: `i64::MAX + 1` wraps to `i64::MIN`. The width is the same
//! for every dialect.

pub mod tape;

pub use tape::{Cell, Tape};
