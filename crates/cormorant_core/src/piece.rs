use crate::square::Square;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Color {
    White,
    Black,
}

impl Color {
    pub fn opposite(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    pub fn idx(self) -> usize {
        match self {
            Color::White => 0,
            Color::Black => 1,
        }
    }

    pub fn piece(self, figure: Figure) -> Piece {
        Piece::new(self, figure)
    }

    pub fn letter(self) -> char {
        match self {
            Color::White => 'w',
            Color::Black => 'b',
        }
    }

    pub fn from_letter(c: char) -> Option<Color> {
        match c {
            'w' => Some(Color::White),
            'b' => Some(Color::Black),
            _ => None,
        }
    }

    // Pawn geometry, rank 0 being this color's home rank side.
    pub fn pawn_step(self) -> i8 {
        match self {
            Color::White => 1,
            Color::Black => -1,
        }
    }

    pub fn home_rank(self) -> i8 {
        match self {
            Color::White => 0,
            Color::Black => 7,
        }
    }

    pub fn pawn_start_rank(self) -> i8 {
        match self {
            Color::White => 1,
            Color::Black => 6,
        }
    }

    pub fn promotion_rank(self) -> i8 {
        match self {
            Color::White => 7,
            Color::Black => 0,
        }
    }

    /// Rank a pawn of this color must stand on to capture en passant.
    pub fn en_passant_rank(self) -> i8 {
        match self {
            Color::White => 4,
            Color::Black => 3,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Figure {
    King,
    Queen,
    Rook,
    Bishop,
    Knight,
    Pawn,
}

impl Figure {
    /// Enum order; also the register scan order during move generation.
    pub const ALL: [Figure; 6] = [
        Figure::King,
        Figure::Queen,
        Figure::Rook,
        Figure::Bishop,
        Figure::Knight,
        Figure::Pawn,
    ];

    /// Promotion candidates, in fan-out order.
    pub const PROMOTABLE: [Figure; 4] =
        [Figure::Queen, Figure::Rook, Figure::Bishop, Figure::Knight];

    pub fn idx(self) -> usize {
        self as usize
    }

    /// Notation letter; pawns have none.
    pub fn letter(self) -> Option<char> {
        match self {
            Figure::King => Some('K'),
            Figure::Queen => Some('Q'),
            Figure::Rook => Some('R'),
            Figure::Bishop => Some('B'),
            Figure::Knight => Some('N'),
            Figure::Pawn => None,
        }
    }

    pub fn from_letter(c: char) -> Option<Figure> {
        match c {
            'K' => Some(Figure::King),
            'Q' => Some(Figure::Queen),
            'R' => Some(Figure::Rook),
            'B' => Some(Figure::Bishop),
            'N' => Some(Figure::Knight),
            _ => None,
        }
    }
}

/// One of the 12 concrete pieces. Color and figure are derived from the
/// ordinal: white occupies 0..6, black 6..12, in `Figure` order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum Piece {
    WhiteKing,
    WhiteQueen,
    WhiteRook,
    WhiteBishop,
    WhiteKnight,
    WhitePawn,
    BlackKing,
    BlackQueen,
    BlackRook,
    BlackBishop,
    BlackKnight,
    BlackPawn,
}

impl Piece {
    pub const ALL: [Piece; 12] = [
        Piece::WhiteKing,
        Piece::WhiteQueen,
        Piece::WhiteRook,
        Piece::WhiteBishop,
        Piece::WhiteKnight,
        Piece::WhitePawn,
        Piece::BlackKing,
        Piece::BlackQueen,
        Piece::BlackRook,
        Piece::BlackBishop,
        Piece::BlackKnight,
        Piece::BlackPawn,
    ];

    pub fn new(color: Color, figure: Figure) -> Piece {
        Piece::ALL[color.idx() * 6 + figure.idx()]
    }

    pub fn color(self) -> Color {
        if (self as u8) < 6 {
            Color::White
        } else {
            Color::Black
        }
    }

    pub fn figure(self) -> Figure {
        Figure::ALL[(self as u8 % 6) as usize]
    }

    pub fn is(self, figure: Figure) -> bool {
        self.figure() == figure
    }

    /// Board-diagram character: uppercase white, lowercase black.
    pub fn glyph(self) -> char {
        let c = match self.figure() {
            Figure::King => 'K',
            Figure::Queen => 'Q',
            Figure::Rook => 'R',
            Figure::Bishop => 'B',
            Figure::Knight => 'N',
            Figure::Pawn => 'P',
        };
        match self.color() {
            Color::White => c,
            Color::Black => c.to_ascii_lowercase(),
        }
    }
}

/// "This piece stands here."
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Placement {
    pub piece: Piece,
    pub square: Square,
}

impl Placement {
    pub fn new(piece: Piece, square: Square) -> Placement {
        Placement { piece, square }
    }
}

/// The spatial component shared by every move kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Relocation {
    pub piece: Piece,
    pub from: Square,
    pub to: Square,
}

impl Relocation {
    pub fn new(piece: Piece, from: Square, to: Square) -> Relocation {
        Relocation { piece, from, to }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_and_figure_derive_from_ordinal() {
        for color in [Color::White, Color::Black] {
            for figure in Figure::ALL {
                let piece = Piece::new(color, figure);
                assert_eq!(piece.color(), color);
                assert_eq!(piece.figure(), figure);
            }
        }
    }

    #[test]
    fn opposite_color_round_trip() {
        assert_eq!(Color::White.opposite(), Color::Black);
        assert_eq!(Color::Black.opposite().opposite(), Color::Black);
    }

    #[test]
    fn figure_letters_round_trip() {
        for figure in Figure::ALL {
            if let Some(c) = figure.letter() {
                assert_eq!(Figure::from_letter(c), Some(figure));
            }
        }
        assert_eq!(Figure::Pawn.letter(), None);
    }
}
