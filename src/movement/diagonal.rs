use std::iter::{self, FusedIterator};

use super::direction::Direction;

// horizontal sub-steps taken inside each diagonal step
const HORIZONTAL_PER_STEP: u32 = 1;

/// Emits `vertical` then `horizontal` once per diagonal step.
#[derive(Debug, Clone)]
pub struct DiagonalMoves<'a> {
    vertical: Direction<'a>,
    horizontal: Direction<'a>,
    remaining: u32,
    horizontal_pending: bool,
}

impl<'a> Iterator for DiagonalMoves<'a> {
    type Item = Direction<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.horizontal_pending {
            self.horizontal_pending = false;
            return Some(self.horizontal);
        }
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        self.horizontal_pending = true;
        Some(self.vertical)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.remaining as usize * 2 + usize::from(self.horizontal_pending);
        (len, Some(len))
    }
}
impl ExactSizeIterator for DiagonalMoves<'_> {}
impl FusedIterator for DiagonalMoves<'_> {}

pub fn diagonal<'a>(
    vertical: Direction<'a>,
    horizontal: Direction<'a>,
    steps: u32,
) -> DiagonalMoves<'a> {
    DiagonalMoves {
        vertical,
        horizontal,
        remaining: steps,
        horizontal_pending: false,
    }
}

/// Same sequence as [`diagonal`], written as two counted loops: the outer
/// one over vertical steps, the inner one over horizontal sub-steps.
pub fn diagonal_nested<'a>(
    vertical: Direction<'a>,
    horizontal: Direction<'a>,
    steps: u32,
) -> impl Iterator<Item = Direction<'a>> {
    (0..steps).flat_map(move |_| {
        iter::once(vertical).chain((0..HORIZONTAL_PER_STEP).map(move |_| horizontal))
    })
}
