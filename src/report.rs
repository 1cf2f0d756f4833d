use std::fmt;
use std::io::{self, Write};

use thiserror::Error;

use crate::config::Configuration;
use crate::movement::knight::{HORIZONTAL_PER_L, VERTICAL_PER_L};
use crate::movement::{Direction, Pattern, Style};
use crate::span_debug;

fn span_debug() -> tracing::Span {
    span_debug!("report")
}

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("cannot write block '{header}': {source}")]
    Block {
        header: String,
        #[source]
        source: io::Error,
    },

    #[error("IO error occurred: {0}")]
    Io(#[from] io::Error),
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Piece {
    Rook,
    Bishop,
    Queen,
    Knight,
}

impl Piece {
    /// Pieces printed with more than one pattern get the pattern kind in
    /// their header.
    fn has_several_patterns(&self) -> bool {
        matches!(self, Piece::Queen)
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Piece::Rook => "Rook",
            Piece::Bishop => "Bishop",
            Piece::Queen => "Queen",
            Piece::Knight => "Knight",
        };
        write!(f, "{}", name)
    }
}

/// One printed block: a header line, one label per line, a blank line.
#[derive(Debug, Clone, PartialEq)]
pub struct Block<'a> {
    piece: Piece,
    style: Style,
    pattern: Pattern<'a>,
}

impl<'a> Block<'a> {
    pub fn new(piece: Piece, style: Style, pattern: Pattern<'a>) -> Self {
        Self {
            piece,
            style,
            pattern,
        }
    }
    pub fn piece(&self) -> Piece {
        self.piece
    }
    pub fn style(&self) -> Style {
        self.style
    }
    pub fn pattern(&self) -> &Pattern<'a> {
        &self.pattern
    }
    pub fn moves(&self) -> Vec<Direction<'a>> {
        self.pattern.moves(self.style)
    }

    pub fn write_to<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "{}", self)?;
        for direction in self.pattern.stream(self.style) {
            writeln!(out, "{}", direction)?;
        }
        writeln!(out)
    }
}

impl fmt::Display for Block<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut tags = vec![self.style.to_string()];
        match self.pattern {
            Pattern::Knight {
                vertical,
                horizontal,
                ..
            } => tags.push(format!(
                "L = {}x {} + {}x {}",
                VERTICAL_PER_L, vertical, HORIZONTAL_PER_L, horizontal
            )),
            pattern if self.piece.has_several_patterns() => tags.push(pattern.kind().to_string()),
            _ => {}
        }
        write!(f, "{} ({}) - {}:", self.piece, tags.join(", "), self.pattern)
    }
}

/// Blocks in print order: rook, bishop (both styles), queen (straight then
/// diagonal), knight.
pub fn blocks(conf: &Configuration) -> Vec<Block<'static>> {
    vec![
        Block::new(Piece::Rook, Style::Recursive, conf.rook.pattern()),
        Block::new(Piece::Bishop, Style::Recursive, conf.bishop.pattern()),
        Block::new(Piece::Bishop, Style::NestedLoops, conf.bishop.pattern()),
        Block::new(Piece::Queen, Style::Recursive, conf.queen_straight.pattern()),
        Block::new(Piece::Queen, Style::Recursive, conf.queen_diagonal.pattern()),
        Block::new(Piece::Knight, Style::NestedLoops, conf.knight.pattern()),
    ]
}

pub fn render_blocks<W: Write>(blocks: &[Block], out: &mut W) -> Result<(), RenderError> {
    let span = span_debug();
    let _enter = span.enter();
    for block in blocks {
        tracing::debug!(
            piece = %block.piece(),
            style = %block.style(),
            moves = block.pattern().len(),
            "rendering block"
        );
        block.write_to(out).map_err(|source| RenderError::Block {
            header: block.to_string(),
            source,
        })?;
    }
    out.flush()?;
    Ok(())
}

pub fn render<W: Write>(conf: &Configuration, out: &mut W) -> Result<(), RenderError> {
    render_blocks(&blocks(conf), out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{DiagonalConf, KnightConf, StraightConf};
    use crate::movement::direction::{RIGHT, UP};

    fn lines(block: &Block) -> Vec<String> {
        let mut out = vec![];
        block.write_to(&mut out).unwrap();
        String::from_utf8(out)
            .unwrap()
            .lines()
            .map(str::to_string)
            .collect()
    }

    #[test]
    fn test_headers() {
        let headers: Vec<String> = blocks(&Configuration::default())
            .iter()
            .map(|block| block.to_string())
            .collect();
        assert_eq!(
            headers,
            vec![
                "Rook (recursive) - Right for 3 squares:",
                "Bishop (recursive) - Up + Right for 4 squares:",
                "Bishop (nested loops) - Up + Right for 4 squares:",
                "Queen (recursive, straight) - Up for 2 squares:",
                "Queen (recursive, diagonal) - Up + Right for 3 squares:",
                "Knight (nested loops, L = 2x Up + 1x Right) - 3 moves:",
            ]
        );
    }

    #[test]
    fn test_rook_block_lines() {
        let conf = Configuration {
            rook: StraightConf::new(RIGHT, 3),
            ..Configuration::default()
        };
        let rook = &blocks(&conf)[0];
        assert_eq!(
            lines(rook),
            vec!["Rook (recursive) - Right for 3 squares:", "Right", "Right", "Right", ""]
        );
    }

    #[test]
    fn test_bishop_styles_render_identically() {
        let conf = Configuration {
            bishop: DiagonalConf::new(UP, RIGHT, 2),
            ..Configuration::default()
        };
        let all = blocks(&conf);
        let labels: Vec<&str> = all[1].moves().iter().map(|d| d.label()).collect();
        assert_eq!(labels, vec!["Up", "Right", "Up", "Right"]);
        assert_eq!(all[1].moves(), all[2].moves());
    }

    #[test]
    fn test_knight_block_single_movement() {
        let conf = Configuration {
            knight: KnightConf::new(UP, RIGHT, 1),
            ..Configuration::default()
        };
        let knight = &blocks(&conf)[5];
        assert_eq!(&lines(knight)[1..], ["Up", "Up", "Right", ""]);
    }

    #[test]
    fn test_empty_block_keeps_header_and_blank_line() {
        let conf = Configuration {
            queen_straight: StraightConf::new(UP, -2),
            ..Configuration::default()
        };
        let queen = &blocks(&conf)[3];
        assert_eq!(
            lines(queen),
            vec!["Queen (recursive, straight) - Up for 0 squares:", ""]
        );
    }

    struct FailingWriter;
    impl Write for FailingWriter {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }
        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_render_reports_write_failure() {
        let result = render(&Configuration::default(), &mut FailingWriter);
        match result {
            Err(RenderError::Block { header, source }) => {
                assert_eq!(header, "Rook (recursive) - Right for 3 squares:");
                assert_eq!(source.kind(), io::ErrorKind::BrokenPipe);
            }
            other => panic!("unexpected result {:?}", other),
        }
    }
}
