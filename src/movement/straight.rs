use std::iter::FusedIterator;

use super::direction::Direction;

/// Repeats one direction `steps` times.
#[derive(Debug, Clone)]
pub struct StraightMoves<'a> {
    direction: Direction<'a>,
    remaining: u32,
}

impl<'a> Iterator for StraightMoves<'a> {
    type Item = Direction<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        Some(self.direction)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.remaining as usize;
        (len, Some(len))
    }
}
impl ExactSizeIterator for StraightMoves<'_> {}
impl FusedIterator for StraightMoves<'_> {}

pub fn straight(direction: Direction<'_>, steps: u32) -> StraightMoves<'_> {
    StraightMoves {
        direction,
        remaining: steps,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::movement::direction::{RIGHT, UP};

    #[test]
    fn test_straight_repeats_direction() {
        for steps in 0..=10 {
            let moves: Vec<Direction> = straight(UP, steps).collect();
            assert_eq!(moves.len(), steps as usize);
            assert!(moves.iter().all(|direction| *direction == UP));
        }
    }

    #[test]
    fn test_straight_rook_right_3() {
        let moves: Vec<&str> = straight(RIGHT, 3).map(|d| d.label()).collect();
        assert_eq!(moves, vec!["Right", "Right", "Right"]);
    }

    #[test]
    fn test_straight_zero_is_empty() {
        let mut moves = straight(UP, 0);
        assert_eq!(moves.len(), 0);
        assert_eq!(moves.next(), None);
        assert_eq!(moves.next(), None);
    }

    #[test]
    fn test_straight_size_hint_shrinks() {
        let mut moves = straight(UP, 2);
        assert_eq!(moves.len(), 2);
        moves.next();
        assert_eq!(moves.len(), 1);
    }
}
