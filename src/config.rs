use crate::movement::direction::{self, Direction};
use crate::movement::Pattern;

// Build-time move parameters. Negative values yield empty sequences.
pub const ROOK_STEPS: i32 = 3;
pub const BISHOP_STEPS: i32 = 4;
pub const QUEEN_STRAIGHT_STEPS: i32 = 2;
pub const QUEEN_DIAGONAL_STEPS: i32 = 3;
pub const KNIGHT_MOVEMENTS: i32 = 3;

pub fn clamp_steps(steps: i32) -> u32 {
    u32::try_from(steps).unwrap_or(0)
}

#[derive(Debug, Clone, PartialEq)]
pub struct StraightConf {
    pub direction: Direction<'static>,
    pub steps: u32,
}
impl StraightConf {
    pub fn new(direction: Direction<'static>, steps: i32) -> Self {
        Self {
            direction,
            steps: clamp_steps(steps),
        }
    }
    pub fn pattern(&self) -> Pattern<'static> {
        Pattern::Straight {
            direction: self.direction,
            steps: self.steps,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DiagonalConf {
    pub vertical: Direction<'static>,
    pub horizontal: Direction<'static>,
    pub steps: u32,
}
impl DiagonalConf {
    pub fn new(vertical: Direction<'static>, horizontal: Direction<'static>, steps: i32) -> Self {
        Self {
            vertical,
            horizontal,
            steps: clamp_steps(steps),
        }
    }
    pub fn pattern(&self) -> Pattern<'static> {
        Pattern::Diagonal {
            vertical: self.vertical,
            horizontal: self.horizontal,
            steps: self.steps,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct KnightConf {
    pub vertical: Direction<'static>,
    pub horizontal: Direction<'static>,
    pub movements: u32,
}
impl KnightConf {
    pub fn new(vertical: Direction<'static>, horizontal: Direction<'static>, movements: i32) -> Self {
        Self {
            vertical,
            horizontal,
            movements: clamp_steps(movements),
        }
    }
    pub fn pattern(&self) -> Pattern<'static> {
        Pattern::Knight {
            vertical: self.vertical,
            horizontal: self.horizontal,
            movements: self.movements,
        }
    }
}

/// Parameters of every printed block.
#[derive(Debug, Clone, PartialEq)]
pub struct Configuration {
    pub rook: StraightConf,
    pub bishop: DiagonalConf,
    pub queen_straight: StraightConf,
    pub queen_diagonal: DiagonalConf,
    pub knight: KnightConf,
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            rook: StraightConf::new(direction::RIGHT, ROOK_STEPS),
            bishop: DiagonalConf::new(direction::UP, direction::RIGHT, BISHOP_STEPS),
            queen_straight: StraightConf::new(direction::UP, QUEEN_STRAIGHT_STEPS),
            queen_diagonal: DiagonalConf::new(direction::UP, direction::RIGHT, QUEEN_DIAGONAL_STEPS),
            knight: KnightConf::new(direction::UP, direction::RIGHT, KNIGHT_MOVEMENTS),
        }
    }
}
