use std::fmt;

use serde::{Deserialize, Serialize};

/// One of the three pegs a disk can sit on.
///
/// Invariant: can only represent valid pegs
#[derive(PartialEq, Eq, Debug, Clone, Copy, Hash, Serialize, Deserialize)]
pub enum Peg {
    A,
    B,
    C,
}

impl Peg {
    /// Position of this peg in the A, B, C order, used to index per-peg storage.
    pub const fn index(self) -> usize {
        match self {
            Peg::A => 0,
            Peg::B => 1,
            Peg::C => 2,
        }
    }
}

impl fmt::Display for Peg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Peg::A => "A",
            Peg::B => "B",
            Peg::C => "C",
        };
        f.write_str(name)
    }
}
