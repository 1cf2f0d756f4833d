//! Direction sequence generators.
//!
//! Each generator is an independent, finite iterator over [`Direction`]
//! labels. The `recursive` module and the `*_nested` functions produce the
//! same sequences with the other two control-flow styles.
pub mod diagonal;
pub mod direction;
pub mod knight;
pub mod pattern;
pub mod recursive;
pub mod straight;

pub use diagonal::{diagonal, diagonal_nested, DiagonalMoves};
pub use direction::Direction;
pub use knight::{knight, knight_nested, KnightMoves};
pub use pattern::{Pattern, Style};
pub use straight::{straight, StraightMoves};
