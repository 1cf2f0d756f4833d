use std::fmt;

use super::direction::Direction;
use super::{diagonal, diagonal_nested, knight, knight_nested, recursive, straight};

/// Control-flow style used to produce a sequence.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Style {
    Recursive,
    NestedLoops,
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Style::Recursive => write!(f, "recursive"),
            Style::NestedLoops => write!(f, "nested loops"),
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Pattern<'a> {
    Straight {
        direction: Direction<'a>,
        steps: u32,
    },
    Diagonal {
        vertical: Direction<'a>,
        horizontal: Direction<'a>,
        steps: u32,
    },
    Knight {
        vertical: Direction<'a>,
        horizontal: Direction<'a>,
        movements: u32,
    },
}

impl<'a> Pattern<'a> {
    /// Canonical lazy iterator over the pattern, whatever its shape.
    pub fn iter(&self) -> Box<dyn ExactSizeIterator<Item = Direction<'a>> + 'a> {
        match *self {
            Pattern::Straight { direction, steps } => Box::new(straight(direction, steps)),
            Pattern::Diagonal {
                vertical,
                horizontal,
                steps,
            } => Box::new(diagonal(vertical, horizontal, steps)),
            Pattern::Knight {
                vertical,
                horizontal,
                movements,
            } => Box::new(knight(vertical, horizontal, movements)),
        }
    }

    /// Streams the pattern produced with the requested control-flow style.
    /// The recursive style fills a buffer first, the nested loops are lazy.
    pub fn stream(&self, style: Style) -> Box<dyn Iterator<Item = Direction<'a>> + 'a> {
        match (*self, style) {
            (Pattern::Straight { direction, steps }, Style::Recursive) => {
                let mut moves = Vec::with_capacity(self.len());
                recursive::straight(direction, steps, &mut moves);
                Box::new(moves.into_iter())
            }
            (Pattern::Straight { direction, steps }, Style::NestedLoops) => {
                Box::new(straight(direction, steps))
            }
            (
                Pattern::Diagonal {
                    vertical,
                    horizontal,
                    steps,
                },
                Style::Recursive,
            ) => {
                let mut moves = Vec::with_capacity(self.len());
                recursive::diagonal(vertical, horizontal, steps, &mut moves);
                Box::new(moves.into_iter())
            }
            (
                Pattern::Diagonal {
                    vertical,
                    horizontal,
                    steps,
                },
                Style::NestedLoops,
            ) => Box::new(diagonal_nested(vertical, horizontal, steps)),
            (
                Pattern::Knight {
                    vertical,
                    horizontal,
                    movements,
                },
                Style::Recursive,
            ) => {
                let mut moves = Vec::with_capacity(self.len());
                recursive::knight(vertical, horizontal, movements, &mut moves);
                Box::new(moves.into_iter())
            }
            (
                Pattern::Knight {
                    vertical,
                    horizontal,
                    movements,
                },
                Style::NestedLoops,
            ) => Box::new(knight_nested(vertical, horizontal, movements)),
        }
    }

    pub fn moves(&self, style: Style) -> Vec<Direction<'a>> {
        self.stream(style).collect()
    }

    /// Number of labels the pattern produces.
    pub fn len(&self) -> usize {
        self.iter().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Pattern::Straight { .. } => "straight",
            Pattern::Diagonal { .. } => "diagonal",
            Pattern::Knight { .. } => "L",
        }
    }
}

impl fmt::Display for Pattern<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Pattern::Straight { direction, steps } => {
                write!(f, "{} for {} squares", direction, steps)
            }
            Pattern::Diagonal {
                vertical,
                horizontal,
                steps,
            } => write!(f, "{} + {} for {} squares", vertical, horizontal, steps),
            Pattern::Knight { movements, .. } => write!(f, "{} moves", movements),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::movement::direction::{RIGHT, UP};

    fn all_patterns(count: u32) -> [Pattern<'static>; 3] {
        [
            Pattern::Straight {
                direction: RIGHT,
                steps: count,
            },
            Pattern::Diagonal {
                vertical: UP,
                horizontal: RIGHT,
                steps: count,
            },
            Pattern::Knight {
                vertical: UP,
                horizontal: RIGHT,
                movements: count,
            },
        ]
    }

    #[test]
    fn test_styles_are_observably_identical() {
        for count in 0..=10 {
            for pattern in all_patterns(count) {
                let recursive = pattern.moves(Style::Recursive);
                let nested = pattern.moves(Style::NestedLoops);
                let lazy: Vec<Direction> = pattern.iter().collect();
                assert_eq!(recursive, nested, "{:?}", pattern);
                assert_eq!(recursive, lazy, "{:?}", pattern);
                assert_eq!(recursive.len(), pattern.len());
            }
        }
    }

    #[test]
    fn test_len_counts_every_label() {
        let [straight, diagonal, knight] = all_patterns(4);
        assert_eq!(straight.len(), 4);
        assert_eq!(diagonal.len(), 8);
        assert_eq!(knight.len(), 12);
        assert_eq!(knight.stream(Style::NestedLoops).count(), knight.len());
    }

    #[test]
    fn test_zero_count_patterns_are_empty() {
        for pattern in all_patterns(0) {
            assert!(pattern.is_empty());
            assert!(pattern.moves(Style::Recursive).is_empty());
        }
    }

    #[test]
    fn test_pattern_display() {
        let [straight, diagonal, knight] = all_patterns(3);
        assert_eq!(straight.to_string(), "Right for 3 squares");
        assert_eq!(diagonal.to_string(), "Up + Right for 3 squares");
        assert_eq!(knight.to_string(), "3 moves");
        assert_eq!(Style::NestedLoops.to_string(), "nested loops");
    }
}
