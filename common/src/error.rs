use thiserror::Error;

use crate::{Disk, peg::Peg};

/// A placement that breaks one of the two stacking rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConstraintViolation {
    #[error("disk {disk} is larger than disk {top} on top of peg {peg}")]
    Size { disk: Disk, top: Disk, peg: Peg },

    #[error("disk {disk} has the same color as disk {top} on top of peg {peg}")]
    Color { disk: Disk, top: Disk, peg: Peg },
}

/// Reasons a recorded move sequence does not replay cleanly.
///
/// `step` is the zero-based index of the offending move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ReplayError {
    #[error("move {step}: origin and destination are both peg {peg}")]
    SamePeg { step: usize, peg: Peg },

    #[error("move {step}: peg {peg} is empty")]
    EmptyPeg { step: usize, peg: Peg },

    #[error("move {step}: expected a disk of size {expected} on top of peg {peg}, found {found}")]
    WrongDisk {
        step: usize,
        peg: Peg,
        expected: u32,
        found: Disk,
    },

    #[error("move {step} is blocked")]
    Blocked {
        step: usize,
        #[source]
        violation: ConstraintViolation,
    },

    #[error("tower was not fully transferred to peg {peg}")]
    Incomplete { peg: Peg },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("unknown color {0:?}, expected one of red, blue, green, yellow")]
    UnknownColor(String),

    #[error("invalid disk {0:?}, expected <size>:<color>")]
    MalformedDisk(String),

    #[error("invalid disk size {0:?}")]
    InvalidSize(String),
}
