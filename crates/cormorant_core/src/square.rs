use std::fmt;

/// One of the 64 board cells. Cells are grouped by file: index = file * 8 + rank.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Square(u8);

/// A signed file/rank delta applied to a square.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Offset {
    pub files: i8,
    pub ranks: i8,
}

impl Offset {
    pub const fn new(files: i8, ranks: i8) -> Offset {
        Offset { files, ranks }
    }
}

impl Square {
    pub fn new(index: u8) -> Option<Square> {
        if index < 64 { Some(Square(index)) } else { None }
    }

    pub fn from_file_rank(file: i8, rank: i8) -> Option<Square> {
        if (0..8).contains(&file) && (0..8).contains(&rank) {
            Some(Square((file as u8) * 8 + (rank as u8)))
        } else {
            None
        }
    }

    pub fn index(self) -> usize {
        self.0 as usize
    }

    pub fn file(self) -> i8 {
        (self.0 / 8) as i8
    }

    pub fn rank(self) -> i8 {
        (self.0 % 8) as i8
    }

    /// Destination reached by applying `by`, or None past a board edge.
    pub fn offset(self, by: Offset) -> Option<Square> {
        Square::from_file_rank(self.file() + by.files, self.rank() + by.ranks)
    }

    pub fn all() -> impl Iterator<Item = Square> {
        (0..64u8).map(Square)
    }

    /// Parse two-character text like "e4".
    pub fn parse(text: &str) -> Option<Square> {
        let b = text.as_bytes();
        if b.len() != 2 {
            return None;
        }
        if !(b'a'..=b'h').contains(&b[0]) || !(b'1'..=b'8').contains(&b[1]) {
            return None;
        }
        Square::from_file_rank((b[0] - b'a') as i8, (b[1] - b'1') as i8)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let file = (b'a' + self.0 / 8) as char;
        let rank = (b'1' + self.0 % 8) as char;
        write!(f, "{file}{rank}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_major_indexing() {
        let a1 = Square::from_file_rank(0, 0).unwrap();
        let a8 = Square::from_file_rank(0, 7).unwrap();
        let h1 = Square::from_file_rank(7, 0).unwrap();
        assert_eq!(a1.index(), 0);
        assert_eq!(a8.index(), 7);
        assert_eq!(h1.index(), 56);
    }

    #[test]
    fn offsets_respect_edges() {
        let a1 = Square::parse("a1").unwrap();
        assert_eq!(a1.offset(Offset::new(1, 1)), Square::parse("b2"));
        assert_eq!(a1.offset(Offset::new(-1, 0)), None);
        assert_eq!(a1.offset(Offset::new(0, -1)), None);
        let h8 = Square::parse("h8").unwrap();
        assert_eq!(h8.offset(Offset::new(1, 0)), None);
        assert_eq!(h8.offset(Offset::new(0, 1)), None);
    }

    #[test]
    fn text_round_trip() {
        for sq in Square::all() {
            assert_eq!(Square::parse(&sq.to_string()), Some(sq));
        }
    }

    #[test]
    fn rejects_malformed_text() {
        assert_eq!(Square::parse(""), None);
        assert_eq!(Square::parse("e"), None);
        assert_eq!(Square::parse("i1"), None);
        assert_eq!(Square::parse("a9"), None);
        assert_eq!(Square::parse("e44"), None);
    }
}
