//! Re-run a recorded move sequence against the stacking rules.
//!
//! The solver never produces an invalid sequence, so this is mostly useful
//! for callers that receive moves from elsewhere, e.g. a JSON file.

use crate::{Disk, Move, ReplayError, peg::Peg, state::PegState};

/// Apply `moves` one by one, starting with the whole tower on peg A.
///
/// Returns the final state, or the first move that could not be applied.
pub fn replay(disks: &[Disk], moves: &[Move]) -> Result<PegState, ReplayError> {
    let mut state = PegState::new(disks);

    for (step, &mv) in moves.iter().enumerate() {
        if mv.from == mv.to {
            return Err(ReplayError::SamePeg { step, peg: mv.from });
        }

        let Some(disk) = state.top(mv.from) else {
            return Err(ReplayError::EmptyPeg { step, peg: mv.from });
        };
        if disk.size != mv.size {
            return Err(ReplayError::WrongDisk {
                step,
                peg: mv.from,
                expected: mv.size,
                found: disk,
            });
        }

        state
            .check_placement(disk, mv.to)
            .map_err(|violation| ReplayError::Blocked { step, violation })?;
        state.move_top(mv.from, mv.to);
    }

    Ok(state)
}

/// Like [`replay`], but additionally require the complete tower to end up on
/// peg C in its original order.
pub fn verify(disks: &[Disk], moves: &[Move]) -> Result<(), ReplayError> {
    let end = replay(disks, moves)?;
    if !end.holds_tower(Peg::C, disks) {
        return Err(ReplayError::Incomplete { peg: Peg::C });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Color, ConstraintViolation};

    fn mv(size: u32, from: Peg, to: Peg) -> Move {
        Move { size, from, to }
    }

    fn two_disks() -> [Disk; 2] {
        [Disk::new(2, Color::Red), Disk::new(1, Color::Blue)]
    }

    #[test]
    fn test_valid_sequence() {
        let disks = two_disks();
        let moves = [
            mv(1, Peg::A, Peg::B),
            mv(2, Peg::A, Peg::C),
            mv(1, Peg::B, Peg::C),
        ];
        let end = replay(&disks, &moves).unwrap();
        assert_eq!(end.stack(Peg::C), &disks);
        assert_eq!(verify(&disks, &moves), Ok(()));
    }

    #[test]
    fn test_partial_sequence_is_incomplete() {
        let disks = two_disks();
        let moves = [mv(1, Peg::A, Peg::B), mv(2, Peg::A, Peg::C)];
        assert!(replay(&disks, &moves).is_ok());
        assert_eq!(
            verify(&disks, &moves),
            Err(ReplayError::Incomplete { peg: Peg::C })
        );
    }

    #[test]
    fn test_rejects_same_peg() {
        assert_eq!(
            replay(&two_disks(), &[mv(1, Peg::A, Peg::A)]),
            Err(ReplayError::SamePeg { step: 0, peg: Peg::A })
        );
    }

    #[test]
    fn test_rejects_empty_origin() {
        assert_eq!(
            replay(&two_disks(), &[mv(1, Peg::A, Peg::B), mv(1, Peg::C, Peg::A)]),
            Err(ReplayError::EmptyPeg { step: 1, peg: Peg::C })
        );
    }

    #[test]
    fn test_rejects_wrong_disk() {
        assert_eq!(
            replay(&two_disks(), &[mv(2, Peg::A, Peg::B)]),
            Err(ReplayError::WrongDisk {
                step: 0,
                peg: Peg::A,
                expected: 2,
                found: Disk::new(1, Color::Blue),
            })
        );
    }

    #[test]
    fn test_rejects_blocked_placements() {
        let disks = two_disks();
        let moves = [mv(1, Peg::A, Peg::B), mv(2, Peg::A, Peg::B)];
        assert_eq!(
            replay(&disks, &moves),
            Err(ReplayError::Blocked {
                step: 1,
                violation: ConstraintViolation::Size {
                    disk: Disk::new(2, Color::Red),
                    top: Disk::new(1, Color::Blue),
                    peg: Peg::B,
                },
            })
        );

        let disks = [Disk::new(2, Color::Red), Disk::new(1, Color::Red)];
        let moves = [
            mv(1, Peg::A, Peg::B),
            mv(2, Peg::A, Peg::C),
            mv(1, Peg::B, Peg::C),
        ];
        assert!(matches!(
            replay(&disks, &moves),
            Err(ReplayError::Blocked {
                step: 2,
                violation: ConstraintViolation::Color { .. },
            })
        ));
    }
}
