//! Recursive renditions of the generators. Each call emits one unit of
//! movement into `moves` and recurses on the remaining count.
use super::direction::Direction;
use super::knight::{HORIZONTAL_PER_L, VERTICAL_PER_L};

pub fn straight<'a>(direction: Direction<'a>, steps: u32, moves: &mut Vec<Direction<'a>>) {
    if steps == 0 {
        return;
    }
    moves.push(direction);
    straight(direction, steps - 1, moves);
}

pub fn diagonal<'a>(
    vertical: Direction<'a>,
    horizontal: Direction<'a>,
    steps: u32,
    moves: &mut Vec<Direction<'a>>,
) {
    if steps == 0 {
        return;
    }
    moves.push(vertical);
    moves.push(horizontal);
    diagonal(vertical, horizontal, steps - 1, moves);
}

/// Each L reuses [`straight`] for its two legs.
pub fn knight<'a>(
    vertical: Direction<'a>,
    horizontal: Direction<'a>,
    movements: u32,
    moves: &mut Vec<Direction<'a>>,
) {
    if movements == 0 {
        return;
    }
    straight(vertical, u32::from(VERTICAL_PER_L), moves);
    straight(horizontal, u32::from(HORIZONTAL_PER_L), moves);
    knight(vertical, horizontal, movements - 1, moves);
}
