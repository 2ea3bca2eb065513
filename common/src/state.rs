use crate::{ConstraintViolation, Disk, Move, peg::Peg};

/// The three stacks of disks.
///
/// Each stack is stored bottom to top, so the last element is the only disk
/// that can be moved or compared against.
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct PegState {
    stacks: [Vec<Disk>; 3],
}

impl PegState {
    /// Put the whole tower on peg A. The first disk ends up at the bottom.
    pub fn new(disks: &[Disk]) -> Self {
        Self {
            stacks: [disks.to_vec(), Vec::new(), Vec::new()],
        }
    }

    pub fn stack(&self, peg: Peg) -> &[Disk] {
        &self.stacks[peg.index()]
    }

    pub fn top(&self, peg: Peg) -> Option<Disk> {
        self.stack(peg).last().copied()
    }

    /// Total number of disks on all pegs
    pub fn nr_disks(&self) -> usize {
        self.stacks.iter().map(Vec::len).sum()
    }

    /// Check whether `disk` may be put on top of `peg`.
    pub fn check_placement(&self, disk: Disk, peg: Peg) -> Result<(), ConstraintViolation> {
        let Some(top) = self.top(peg) else {
            return Ok(());
        };

        if disk.size > top.size {
            Err(ConstraintViolation::Size { disk, top, peg })
        } else if disk.color == top.color {
            Err(ConstraintViolation::Color { disk, top, peg })
        } else {
            Ok(())
        }
    }

    /// Move the top disk of `from` onto `to` without checking the stacking
    /// rules. Returns the moved disk, or `None` if `from` is empty.
    pub fn move_top(&mut self, from: Peg, to: Peg) -> Option<Disk> {
        let disk = self.stacks[from.index()].pop()?;
        self.stacks[to.index()].push(disk);
        Some(disk)
    }

    /// Undo a move that was the last one applied to this state.
    pub fn revert(&mut self, mv: Move) {
        let disk = self.move_top(mv.to, mv.from);
        debug_assert_eq!(disk.map(|d| d.size), Some(mv.size));
    }

    /// True if `peg` holds exactly `disks` in their original order and the
    /// other two pegs are empty.
    pub fn holds_tower(&self, peg: Peg, disks: &[Disk]) -> bool {
        self.stack(peg) == disks && self.nr_disks() == disks.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Color;

    fn disk(size: u32, color: Color) -> Disk {
        Disk { size, color }
    }

    #[test]
    fn test_new_stacks_everything_on_a() {
        let disks = [disk(3, Color::Red), disk(2, Color::Blue), disk(1, Color::Red)];
        let state = PegState::new(&disks);

        assert_eq!(state.stack(Peg::A), &disks);
        assert!(state.stack(Peg::B).is_empty());
        assert!(state.stack(Peg::C).is_empty());
        assert_eq!(state.top(Peg::A), Some(disk(1, Color::Red)));
        assert_eq!(state.nr_disks(), 3);
        assert!(state.holds_tower(Peg::A, &disks));
        assert!(!state.holds_tower(Peg::C, &disks));
    }

    #[test]
    fn test_empty_peg_accepts_anything() {
        let state = PegState::new(&[disk(1, Color::Red)]);
        assert_eq!(state.check_placement(disk(100, Color::Red), Peg::B), Ok(()));
    }

    #[test]
    fn test_size_rule() {
        let state = PegState::new(&[disk(2, Color::Red)]);
        assert_eq!(
            state.check_placement(disk(3, Color::Blue), Peg::A),
            Err(ConstraintViolation::Size {
                disk: disk(3, Color::Blue),
                top: disk(2, Color::Red),
                peg: Peg::A,
            })
        );
        // equal sizes may be stacked
        assert_eq!(state.check_placement(disk(2, Color::Blue), Peg::A), Ok(()));
    }

    #[test]
    fn test_color_rule() {
        let state = PegState::new(&[disk(5, Color::Green)]);
        assert_eq!(
            state.check_placement(disk(1, Color::Green), Peg::A),
            Err(ConstraintViolation::Color {
                disk: disk(1, Color::Green),
                top: disk(5, Color::Green),
                peg: Peg::A,
            })
        );
    }

    #[test]
    fn test_size_is_checked_before_color() {
        let state = PegState::new(&[disk(1, Color::Red)]);
        assert!(matches!(
            state.check_placement(disk(2, Color::Red), Peg::A),
            Err(ConstraintViolation::Size { .. })
        ));
    }

    #[test]
    fn test_move_and_revert() {
        let disks = [disk(2, Color::Red), disk(1, Color::Blue)];
        let mut state = PegState::new(&disks);

        assert_eq!(state.move_top(Peg::A, Peg::C), Some(disk(1, Color::Blue)));
        assert_eq!(state.top(Peg::C), Some(disk(1, Color::Blue)));
        assert_eq!(state.nr_disks(), 2);

        state.revert(Move {
            size: 1,
            from: Peg::A,
            to: Peg::C,
        });
        assert_eq!(state, PegState::new(&disks));

        assert_eq!(state.move_top(Peg::B, Peg::C), None);
    }
}
