use crate::piece::Figure;
use crate::square::Square;

/// Per-color piece-location lists, one per figure kind.
///
/// Lists grow as needed (promotion can exceed the starting piece counts) and
/// are kept sorted by square index, so structural equality and scan order do
/// not depend on the history of insertions and removals.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct Register {
    slots: [Vec<Square>; 6],
}

impl Register {
    pub fn new() -> Register {
        Register::default()
    }

    pub fn squares(&self, figure: Figure) -> &[Square] {
        &self.slots[figure.idx()]
    }

    pub fn count(&self, figure: Figure) -> usize {
        self.slots[figure.idx()].len()
    }

    pub fn total(&self) -> usize {
        self.slots.iter().map(Vec::len).sum()
    }

    pub fn king(&self) -> Option<Square> {
        self.slots[Figure::King.idx()].first().copied()
    }

    pub fn contains(&self, figure: Figure, square: Square) -> bool {
        self.slots[figure.idx()].binary_search(&square).is_ok()
    }

    /// Panics if the square is already registered for this figure; the board
    /// and register are mutated together, so that means corruption.
    pub fn insert(&mut self, figure: Figure, square: Square) {
        let slot = &mut self.slots[figure.idx()];
        match slot.binary_search(&square) {
            Err(i) => slot.insert(i, square),
            Ok(_) => panic!("register already holds {figure:?} at {square}"),
        }
    }

    /// Panics if the square is not registered for this figure.
    pub fn remove(&mut self, figure: Figure, square: Square) {
        let slot = &mut self.slots[figure.idx()];
        match slot.binary_search(&square) {
            Ok(i) => {
                slot.remove(i);
            }
            Err(_) => panic!("register does not hold {figure:?} at {square}"),
        }
    }
}
