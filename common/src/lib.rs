pub mod error;
pub mod peg;
pub mod replay;
pub mod state;

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

pub use crate::{
    error::{ConstraintViolation, ParseError, ReplayError},
    peg::Peg,
    replay::{replay, verify},
    state::PegState,
};

#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Red,
    Blue,
    Green,
    Yellow,
}

impl Color {
    pub const PALETTE: [Color; 4] = [Color::Red, Color::Blue, Color::Green, Color::Yellow];

    pub fn name(self) -> &'static str {
        match self {
            Color::Red => "red",
            Color::Blue => "blue",
            Color::Green => "green",
            Color::Yellow => "yellow",
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Color {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Color::PALETTE
            .into_iter()
            .find(|c| c.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| ParseError::UnknownColor(s.to_string()))
    }
}

/// A disk is nothing more than its size and color. Two disks with the same
/// size and color are interchangeable.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Serialize, Deserialize)]
pub struct Disk {
    pub size: u32,
    pub color: Color,
}

impl Disk {
    pub fn new(size: u32, color: Color) -> Self {
        Self { size, color }
    }
}

impl fmt::Display for Disk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.size, self.color)
    }
}

/// Parses the `<size>:<color>` notation, e.g. `3:red`.
impl FromStr for Disk {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let Some((size, color)) = s.trim().split_once(':') else {
            return Err(ParseError::MalformedDisk(s.to_string()));
        };
        let size = size
            .trim()
            .parse()
            .map_err(|_| ParseError::InvalidSize(size.to_string()))?;

        Ok(Disk {
            size,
            color: color.parse()?,
        })
    }
}

/// One relocation of the top disk of `from` onto `to`.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Serialize, Deserialize)]
pub struct Move {
    pub size: u32,
    pub from: Peg,
    pub to: Peg,
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}->{}", self.size, self.from, self.to)
    }
}

#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(tag = "outcome", content = "moves", rename_all = "lowercase")]
pub enum Outcome {
    Solved(Vec<Move>),
    Infeasible,
}

impl Outcome {
    pub fn is_solved(&self) -> bool {
        matches!(self, Outcome::Solved(_))
    }

    pub fn moves(&self) -> Option<&[Move]> {
        match self {
            Outcome::Solved(moves) => Some(moves),
            Outcome::Infeasible => None,
        }
    }
}

/// Number of moves the classic decomposition takes for a tower of
/// `nr_disks` disks, `None` if that does not fit into a u64.
pub fn classic_move_count(nr_disks: usize) -> Option<u64> {
    match nr_disks {
        0..64 => Some((1u64 << nr_disks) - 1),
        64 => Some(u64::MAX),
        _ => None,
    }
}

/// Peg state and move log of a single solve run.
struct Transfer {
    state: PegState,
    moves: Vec<Move>,
}

impl Transfer {
    fn new(disks: &[Disk]) -> Self {
        Self {
            state: PegState::new(disks),
            moves: Vec::new(),
        }
    }

    /// Move the top `n` disks of `origin` to `destination` with the classic
    /// recursive decomposition. The first blocked placement aborts the whole
    /// transfer; already applied moves stay applied.
    fn relocate(
        &mut self,
        n: usize,
        origin: Peg,
        destination: Peg,
        auxiliary: Peg,
    ) -> Result<(), ConstraintViolation> {
        if n == 0 {
            return Ok(());
        }

        self.relocate(n - 1, origin, auxiliary, destination)?;

        let disk = self
            .state
            .top(origin)
            .expect("origin holds the largest disk of the sub-problem");
        self.state.check_placement(disk, destination)?;

        self.state.move_top(origin, destination);
        self.moves.push(Move {
            size: disk.size,
            from: origin,
            to: destination,
        });

        self.relocate(n - 1, auxiliary, destination, origin)
    }

    /// Unwind every applied move, leaving the state as it was initially.
    fn rollback(&mut self) {
        while let Some(mv) = self.moves.pop() {
            self.state.revert(mv);
        }
    }
}

/// Transfer the tower from peg A to peg C.
///
/// `disks` lists the tower from the bottom up, so the conventional
/// largest-first input puts the largest disk at the bottom. Only the classic
/// three-peg decomposition is attempted: `Infeasible` means that this strategy
/// runs into a blocked placement, not that no valid sequence exists.
pub fn solve(disks: &[Disk]) -> Outcome {
    if disks.is_empty() {
        return Outcome::Solved(vec![]);
    }

    let mut transfer = Transfer::new(disks);
    match transfer.relocate(disks.len(), Peg::A, Peg::C, Peg::B) {
        Ok(()) => {
            log::debug!(
                "solved tower of {} disks in {} moves",
                disks.len(),
                transfer.moves.len()
            );
            Outcome::Solved(transfer.moves)
        }
        Err(violation) => {
            log::debug!(
                "tower of {} disks blocked after {} moves: {violation}",
                disks.len(),
                transfer.moves.len()
            );
            transfer.rollback();
            debug_assert!(transfer.state.holds_tower(Peg::A, disks));
            Outcome::Infeasible
        }
    }
}
