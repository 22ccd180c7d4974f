use crate::Evaluator;
use crate::notation;
use crate::piece::{Color, Figure, Piece, Placement};
use crate::register::Register;
use crate::rules;
use crate::square::Square;

/// Board wing, from the king's point of view.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Wing {
    Kingside,
    Queenside,
}

impl Wing {
    /// Generation order: kingside candidates come first.
    pub const BOTH: [Wing; 2] = [Wing::Kingside, Wing::Queenside];

    pub fn idx(self) -> usize {
        match self {
            Wing::Kingside => 0,
            Wing::Queenside => 1,
        }
    }

    pub fn rook_home_file(self) -> i8 {
        match self {
            Wing::Kingside => 7,
            Wing::Queenside => 0,
        }
    }

    pub fn king_target_file(self) -> i8 {
        match self {
            Wing::Kingside => 6,
            Wing::Queenside => 2,
        }
    }

    pub fn rook_target_file(self) -> i8 {
        match self {
            Wing::Kingside => 5,
            Wing::Queenside => 3,
        }
    }
}

/// Castling-rights flags for one color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct CastlingState {
    pub king_moved: bool,
    pub rook_moved: [bool; 2], // indexed by Wing
    pub has_castled: bool,
}

impl CastlingState {
    pub fn may_castle(&self, wing: Wing) -> bool {
        !self.king_moved && !self.has_castled && !self.rook_moved[wing.idx()]
    }
}

/// The authoritative board state: a 64-cell piece mapping plus per-color
/// location registers that always agree with it, and the game-state flags.
///
/// Mutators update board and register together; callers are expected to have
/// validated chess legality beforehand, and a mismatch panics.
#[derive(Clone, Debug)]
pub struct Position {
    board: [Option<Piece>; 64],
    registers: [Register; 2],
    en_passant_file: Option<i8>,
    castling: [CastlingState; 2],
    // Bumped by every mutation; stamps the score cache.
    generation: u64,
    score_cache: Option<(u64, f64)>,
}

impl Default for Position {
    fn default() -> Self {
        Position::new()
    }
}

// The generation counter and score cache are not part of the board state.
impl PartialEq for Position {
    fn eq(&self, other: &Self) -> bool {
        self.board == other.board
            && self.registers == other.registers
            && self.en_passant_file == other.en_passant_file
            && self.castling == other.castling
    }
}

impl Position {
    pub fn new() -> Position {
        Position {
            board: [None; 64],
            registers: [Register::new(), Register::new()],
            en_passant_file: None,
            castling: [CastlingState::default(); 2],
            generation: 0,
            score_cache: None,
        }
    }

    /// The standard starting array.
    pub fn initial() -> Position {
        let mut pos = Position::new();
        let back = [
            Figure::Rook,
            Figure::Knight,
            Figure::Bishop,
            Figure::Queen,
            Figure::King,
            Figure::Bishop,
            Figure::Knight,
            Figure::Rook,
        ];
        for (file, &figure) in back.iter().enumerate() {
            let file = file as i8;
            for color in [Color::White, Color::Black] {
                let home = Square::from_file_rank(file, color.home_rank()).unwrap();
                let pawn = Square::from_file_rank(file, color.pawn_start_rank()).unwrap();
                pos.place(Placement::new(color.piece(figure), home));
                pos.place(Placement::new(color.piece(Figure::Pawn), pawn));
            }
        }
        pos
    }

    /// Build a position from a whitespace-separated placement list, e.g.
    /// "Kwe1 Qwd1 wa2 Kbe8". Malformed or duplicated tokens fail the whole
    /// construction; there is no partial position.
    pub fn from_placements(text: &str) -> Result<Position, String> {
        let mut pos = Position::new();
        for token in text.split_whitespace() {
            let placement = notation::parse_placement(token)?;
            if pos.piece_at(placement.square).is_some() {
                return Err(format!("square {} is assigned twice", placement.square));
            }
            pos.place(placement);
        }
        Ok(pos)
    }

    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.board[square.index()]
    }

    /// All squares currently holding this piece, ascending.
    pub fn squares_of(&self, piece: Piece) -> &[Square] {
        self.registers[piece.color().idx()].squares(piece.figure())
    }

    pub fn count_of(&self, piece: Piece) -> usize {
        self.registers[piece.color().idx()].count(piece.figure())
    }

    pub fn piece_count(&self, color: Color) -> usize {
        self.registers[color.idx()].total()
    }

    pub fn king_square(&self, color: Color) -> Option<Square> {
        self.registers[color.idx()].king()
    }

    pub fn en_passant_file(&self) -> Option<i8> {
        self.en_passant_file
    }

    pub fn set_en_passant_file(&mut self, file: Option<i8>) {
        self.en_passant_file = file;
        self.generation += 1;
    }

    pub fn castling(&self, color: Color) -> CastlingState {
        self.castling[color.idx()]
    }

    pub fn set_castling(&mut self, color: Color, state: CastlingState) {
        self.castling[color.idx()] = state;
        self.generation += 1;
    }

    /// Put a piece on an empty square.
    pub fn place(&mut self, placement: Placement) {
        let cell = &mut self.board[placement.square.index()];
        if cell.is_some() {
            panic!("placing {:?} on occupied {}", placement.piece, placement.square);
        }
        *cell = Some(placement.piece);
        self.registers[placement.piece.color().idx()]
            .insert(placement.piece.figure(), placement.square);
        self.generation += 1;
    }

    /// Take the piece off a square and return it.
    pub fn lift(&mut self, square: Square) -> Piece {
        let piece = self.board[square.index()]
            .take()
            .unwrap_or_else(|| panic!("lifting from empty {square}"));
        self.registers[piece.color().idx()].remove(piece.figure(), square);
        self.generation += 1;
        piece
    }

    /// Move a piece between squares; the destination must be empty
    /// (captures lift the victim first).
    pub fn relocate(&mut self, from: Square, to: Square) {
        let piece = self.lift(from);
        self.place(Placement::new(piece, to));
    }

    /// True if any piece of `by` attacks `target` under the rules engine's
    /// attack enumeration.
    pub fn is_attacked(&self, target: Square, by: Color) -> bool {
        rules::is_square_attacked(self, target, by)
    }

    /// The cached score, if one was stored and no mutation happened since.
    pub fn score(&self) -> Option<f64> {
        match self.score_cache {
            Some((stamp, value)) if stamp == self.generation => Some(value),
            _ => None,
        }
    }

    /// Recompute and cache the evaluation for `side`.
    pub fn refresh_score<E: Evaluator + ?Sized>(&mut self, eval: &mut E, side: Color) -> f64 {
        let value = eval.score(self, side);
        self.score_cache = Some((self.generation, value));
        value
    }
}

#[cfg(test)]
#[path = "position_tests.rs"]
mod position_tests;
