use crate::moves::Move;
use crate::position::Position;

/// One live position plus the ordered list of moves that produced it, with a
/// replay cursor. Forward and backward re-run stored moves directly; the
/// rules engine is never consulted here.
#[derive(Clone, Debug)]
pub struct Game {
    position: Position,
    history: Vec<Move>,
    cursor: usize,
}

impl Game {
    pub fn new(position: Position) -> Game {
        Game {
            position,
            history: Vec::new(),
            cursor: 0,
        }
    }

    pub fn position(&self) -> &Position {
        &self.position
    }

    /// Mutable access for the search, which restores the position before
    /// returning.
    pub fn position_mut(&mut self) -> &mut Position {
        &mut self.position
    }

    pub fn history(&self) -> &[Move] {
        &self.history
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Execute an already-validated move, discard any redo tail, and append.
    pub fn apply(&mut self, mut mv: Move) {
        self.history.truncate(self.cursor);
        mv.execute(&mut self.position);
        self.history.push(mv);
        self.cursor += 1;
    }

    /// Reverse the move at the cursor. False at the start of history.
    pub fn backward(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        self.cursor -= 1;
        self.history[self.cursor].reverse(&mut self.position);
        true
    }

    /// Re-execute the move after the cursor. False at the end of history.
    pub fn forward(&mut self) -> bool {
        if self.cursor == self.history.len() {
            return false;
        }
        self.history[self.cursor].execute(&mut self.position);
        self.cursor += 1;
        true
    }
}
