//! Pipe shapes and the glyph alphabet.

use crate::direction::Direction;

/// The shape drawn on a single tile.
///
/// Each shape is identified by one input glyph and connects through a
/// fixed set of sides.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Pipe {
    /// `S`: the start tile. Its real shape is unknown, so it is treated
    /// as connecting through all four sides.
    Start,
    /// `|`: top and bottom.
    Vertical,
    /// `-`: right and left.
    Horizontal,
    /// `L`: top and right.
    NorthEast,
    /// `J`: top and left.
    NorthWest,
    /// `7`: bottom and left.
    SouthWest,
    /// `F`: right and bottom.
    SouthEast,
    /// `.`: no pipe.
    Ground,
}

impl Pipe {
    /// Every glyph accepted in puzzle input.
    pub const GLYPHS: [char; 8] = ['S', '|', '-', 'L', 'J', '7', 'F', '.'];

    /// Parse a glyph, returning `None` outside the alphabet.
    pub fn from_glyph(c: char) -> Option<Self> {
        let pipe = match c {
            'S' => Self::Start,
            '|' => Self::Vertical,
            '-' => Self::Horizontal,
            'L' => Self::NorthEast,
            'J' => Self::NorthWest,
            '7' => Self::SouthWest,
            'F' => Self::SouthEast,
            '.' => Self::Ground,
            _ => return None,
        };
        Some(pipe)
    }

    /// The glyph this shape is written as.
    pub fn glyph(self) -> char {
        match self {
            Self::Start => 'S',
            Self::Vertical => '|',
            Self::Horizontal => '-',
            Self::NorthEast => 'L',
            Self::NorthWest => 'J',
            Self::SouthWest => '7',
            Self::SouthEast => 'F',
            Self::Ground => '.',
        }
    }

    /// Sides this shape connects through, in [`Direction::ALL`] order.
    pub fn connections(self) -> &'static [Direction] {
        use Direction::*;
        match self {
            Self::Start => &[Top, Right, Bottom, Left],
            Self::Vertical => &[Top, Bottom],
            Self::Horizontal => &[Right, Left],
            Self::NorthEast => &[Top, Right],
            Self::NorthWest => &[Top, Left],
            Self::SouthWest => &[Bottom, Left],
            Self::SouthEast => &[Right, Bottom],
            Self::Ground => &[],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_glyph_round_trips() {
        for c in Pipe::GLYPHS {
            let pipe = Pipe::from_glyph(c).unwrap();
            assert_eq!(pipe.glyph(), c);
        }
    }

    #[test]
    fn unknown_glyphs_are_rejected() {
        for c in ['I', 'O', ' ', '#', '\t', 's'] {
            assert_eq!(Pipe::from_glyph(c), None, "{c:?} accepted");
        }
    }

    #[test]
    fn degrees() {
        assert_eq!(Pipe::Start.connections().len(), 4);
        assert_eq!(Pipe::Ground.connections().len(), 0);
        for pipe in [
            Pipe::Vertical,
            Pipe::Horizontal,
            Pipe::NorthEast,
            Pipe::NorthWest,
            Pipe::SouthWest,
            Pipe::SouthEast,
        ] {
            assert_eq!(pipe.connections().len(), 2, "{pipe:?}");
        }
    }

    #[test]
    fn connections_are_in_enumeration_order() {
        for c in Pipe::GLYPHS {
            let conns = Pipe::from_glyph(c).unwrap().connections();
            assert!(conns.windows(2).all(|w| w[0] < w[1]), "{c}: {conns:?}");
        }
    }

    #[test]
    fn corner_shapes() {
        assert_eq!(
            Pipe::NorthEast.connections(),
            &[Direction::Top, Direction::Right]
        );
        assert_eq!(
            Pipe::SouthWest.connections(),
            &[Direction::Bottom, Direction::Left]
        );
    }
}
