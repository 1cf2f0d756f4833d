use std::iter::FusedIterator;

use super::direction::Direction;

pub const VERTICAL_PER_L: u8 = 2;
pub const HORIZONTAL_PER_L: u8 = 1;
const L_LEN: u8 = VERTICAL_PER_L + HORIZONTAL_PER_L;

/// Knight "L" moves: two `vertical` steps then one `horizontal` step,
/// repeated `movements` times.
#[derive(Debug, Clone)]
pub struct KnightMoves<'a> {
    vertical: Direction<'a>,
    horizontal: Direction<'a>,
    remaining: u32,
    // position inside the current L, 0 when between two L
    step: u8,
}

impl<'a> Iterator for KnightMoves<'a> {
    type Item = Direction<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.step == 0 {
            if self.remaining == 0 {
                return None;
            }
            self.remaining -= 1;
        }
        let direction = if self.step < VERTICAL_PER_L {
            self.vertical
        } else {
            self.horizontal
        };
        self.step = (self.step + 1) % L_LEN;
        Some(direction)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let in_progress = if self.step == 0 { 0 } else { L_LEN - self.step };
        let len = self.remaining as usize * L_LEN as usize + in_progress as usize;
        (len, Some(len))
    }
}
impl ExactSizeIterator for KnightMoves<'_> {}
impl FusedIterator for KnightMoves<'_> {}

pub fn knight<'a>(
    vertical: Direction<'a>,
    horizontal: Direction<'a>,
    movements: u32,
) -> KnightMoves<'a> {
    KnightMoves {
        vertical,
        horizontal,
        remaining: movements,
        step: 0,
    }
}

/// Same sequence as [`knight`], one outer loop per L and one inner loop per
/// leg of the L.
pub fn knight_nested<'a>(
    vertical: Direction<'a>,
    horizontal: Direction<'a>,
    movements: u32,
) -> impl Iterator<Item = Direction<'a>> {
    (0..movements).flat_map(move |_| {
        (0..VERTICAL_PER_L)
            .map(move |_| vertical)
            .chain((0..HORIZONTAL_PER_L).map(move |_| horizontal))
    })
}
