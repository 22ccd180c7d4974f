use crate::piece::{Color, Figure, Piece, Placement, Relocation};
use crate::position::{CastlingState, Position, Wing};
use crate::rules;
use crate::square::Square;

/// State restored on reversal. Executing any move rewrites the position's
/// en-passant eligibility, and king/rook moves rewrite castling flags, so
/// both are captured at execution time.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Snapshot {
    en_passant_file: Option<i8>,
    castling: [CastlingState; 2],
}

/// An ordinary move: one piece relocates, possibly capturing on the
/// destination square. A pawn double-step records the file on which it
/// grants en passant.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BasicMove {
    pub relocation: Relocation,
    pub capture: Option<Piece>,
    pub grants_en_passant: Option<i8>,
    snapshot: Option<Snapshot>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CastlingMove {
    pub color: Color,
    pub wing: Wing,
    pub king: Relocation,
    pub rook: Relocation,
    snapshot: Option<Snapshot>,
}

/// The captured pawn does not stand on the destination square, so its
/// placement is carried explicitly.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EnPassantMove {
    pub pawn: Relocation,
    pub captured: Placement,
    snapshot: Option<Snapshot>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PromotionMove {
    pub origin: Placement,
    pub promoted: Placement,
    pub capture: Option<Piece>,
    snapshot: Option<Snapshot>,
}

/// The closed set of move kinds. Dispatch is by matching on the variant;
/// every variant can exactly reverse its own execution.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Move {
    Basic(BasicMove),
    Castling(CastlingMove),
    EnPassant(EnPassantMove),
    Promotion(PromotionMove),
}

impl Move {
    pub fn basic(relocation: Relocation, capture: Option<Piece>) -> Move {
        Move::Basic(BasicMove {
            relocation,
            capture,
            grants_en_passant: None,
            snapshot: None,
        })
    }

    /// A pawn double-step, granting en passant on its file.
    pub fn double_step(relocation: Relocation) -> Move {
        Move::Basic(BasicMove {
            grants_en_passant: Some(relocation.to.file()),
            relocation,
            capture: None,
            snapshot: None,
        })
    }

    /// Castling for `color` on `wing`; both relocations follow from geometry.
    pub fn castling(color: Color, wing: Wing) -> Move {
        let home = color.home_rank();
        let king_from = Square::from_file_rank(4, home).unwrap();
        let king_to = Square::from_file_rank(wing.king_target_file(), home).unwrap();
        let rook_from = Square::from_file_rank(wing.rook_home_file(), home).unwrap();
        let rook_to = Square::from_file_rank(wing.rook_target_file(), home).unwrap();
        Move::Castling(CastlingMove {
            color,
            wing,
            king: Relocation::new(color.piece(Figure::King), king_from, king_to),
            rook: Relocation::new(color.piece(Figure::Rook), rook_from, rook_to),
            snapshot: None,
        })
    }

    /// En passant; the captured pawn stands on the destination file at the
    /// capturing pawn's starting rank.
    pub fn en_passant(pawn: Relocation) -> Move {
        let victim = pawn.piece.color().opposite().piece(Figure::Pawn);
        let victim_square = Square::from_file_rank(pawn.to.file(), pawn.from.rank()).unwrap();
        Move::EnPassant(EnPassantMove {
            pawn,
            captured: Placement::new(victim, victim_square),
            snapshot: None,
        })
    }

    pub fn promotion(origin: Placement, to: Square, figure: Figure, capture: Option<Piece>) -> Move {
        let color = origin.piece.color();
        Move::Promotion(PromotionMove {
            origin,
            promoted: Placement::new(color.piece(figure), to),
            capture,
            snapshot: None,
        })
    }

    /// The piece executing the move (the pawn for promotions and en passant,
    /// the king for castling).
    pub fn piece(&self) -> Piece {
        match self {
            Move::Basic(m) => m.relocation.piece,
            Move::Castling(m) => m.king.piece,
            Move::EnPassant(m) => m.pawn.piece,
            Move::Promotion(m) => m.origin.piece,
        }
    }

    pub fn origin(&self) -> Square {
        match self {
            Move::Basic(m) => m.relocation.from,
            Move::Castling(m) => m.king.from,
            Move::EnPassant(m) => m.pawn.from,
            Move::Promotion(m) => m.origin.square,
        }
    }

    /// The moving piece's destination; the king's for castling.
    pub fn destination(&self) -> Square {
        match self {
            Move::Basic(m) => m.relocation.to,
            Move::Castling(m) => m.king.to,
            Move::EnPassant(m) => m.pawn.to,
            Move::Promotion(m) => m.promoted.square,
        }
    }

    pub fn captured(&self) -> Option<Piece> {
        match self {
            Move::Basic(m) => m.capture,
            Move::Castling(_) => None,
            Move::EnPassant(m) => Some(m.captured.piece),
            Move::Promotion(m) => m.capture,
        }
    }

    /// Apply the move to `pos`, snapshotting what reversal needs.
    pub fn execute(&mut self, pos: &mut Position) {
        let snapshot = Snapshot {
            en_passant_file: pos.en_passant_file(),
            castling: [pos.castling(Color::White), pos.castling(Color::Black)],
        };
        match self {
            Move::Basic(m) => {
                m.snapshot = Some(snapshot);
                if m.capture.is_some() {
                    pos.lift(m.relocation.to);
                }
                pos.relocate(m.relocation.from, m.relocation.to);
                touch_castling_flags(pos, m.relocation);
                pos.set_en_passant_file(m.grants_en_passant);
            }
            Move::Castling(m) => {
                m.snapshot = Some(snapshot);
                pos.relocate(m.king.from, m.king.to);
                pos.relocate(m.rook.from, m.rook.to);
                let mut state = pos.castling(m.color);
                state.king_moved = true;
                state.rook_moved[m.wing.idx()] = true;
                state.has_castled = true;
                pos.set_castling(m.color, state);
                pos.set_en_passant_file(None);
            }
            Move::EnPassant(m) => {
                m.snapshot = Some(snapshot);
                pos.lift(m.captured.square);
                pos.relocate(m.pawn.from, m.pawn.to);
                pos.set_en_passant_file(None);
            }
            Move::Promotion(m) => {
                m.snapshot = Some(snapshot);
                pos.lift(m.origin.square);
                if m.capture.is_some() {
                    pos.lift(m.promoted.square);
                }
                pos.place(m.promoted);
                pos.set_en_passant_file(None);
            }
        }
    }

    /// Restore `pos` to its state before the matching `execute`.
    /// Panics if the move was never executed.
    pub fn reverse(&mut self, pos: &mut Position) {
        let snapshot = match self {
            Move::Basic(m) => m.snapshot.take(),
            Move::Castling(m) => m.snapshot.take(),
            Move::EnPassant(m) => m.snapshot.take(),
            Move::Promotion(m) => m.snapshot.take(),
        }
        .expect("reversing a move that was not executed");

        match self {
            Move::Basic(m) => {
                pos.relocate(m.relocation.to, m.relocation.from);
                if let Some(piece) = m.capture {
                    pos.place(Placement::new(piece, m.relocation.to));
                }
            }
            Move::Castling(m) => {
                pos.relocate(m.rook.to, m.rook.from);
                pos.relocate(m.king.to, m.king.from);
            }
            Move::EnPassant(m) => {
                pos.relocate(m.pawn.to, m.pawn.from);
                pos.place(m.captured);
            }
            Move::Promotion(m) => {
                pos.lift(m.promoted.square);
                if let Some(piece) = m.capture {
                    pos.place(Placement::new(piece, m.promoted.square));
                }
                pos.place(m.origin);
            }
        }

        pos.set_en_passant_file(snapshot.en_passant_file);
        pos.set_castling(Color::White, snapshot.castling[0]);
        pos.set_castling(Color::Black, snapshot.castling[1]);
    }

    /// Interactive legality check, independent of execute/reverse: confirms
    /// the stated piece stands on the origin, belongs to the side to move,
    /// matches the move kind, and appears in the rules engine's enumeration.
    /// The search never calls this; it only applies moves it generated.
    pub fn validate(&self, pos: &Position, side_to_move: Color) -> Result<(), String> {
        let piece = self.piece();
        let origin = self.origin();
        match pos.piece_at(origin) {
            None => return Err(format!("no piece on {origin}")),
            Some(found) if found != piece => {
                return Err(format!("{origin} holds {:?}, not {:?}", found, piece));
            }
            Some(_) => {}
        }
        if piece.color() != side_to_move {
            return Err(format!("it is not {:?}'s turn", piece.color()));
        }
        match self {
            Move::Castling(_) => {
                if !piece.is(Figure::King) {
                    return Err("only a king may castle".to_string());
                }
                if !rules::castling_moves(pos, side_to_move).contains(self) {
                    return Err("castling is not available here".to_string());
                }
            }
            Move::EnPassant(_) => {
                if !piece.is(Figure::Pawn) {
                    return Err("only a pawn may capture en passant".to_string());
                }
                if !rules::en_passant_moves(pos, side_to_move).contains(self) {
                    return Err("en passant is not available here".to_string());
                }
            }
            Move::Promotion(_) => {
                if !piece.is(Figure::Pawn) {
                    return Err("only a pawn may promote".to_string());
                }
                if !rules::piece_moves(pos, piece, origin).contains(self) {
                    return Err(format!("{:?} cannot promote via {origin}", piece));
                }
            }
            Move::Basic(_) => {
                if !rules::piece_moves(pos, piece, origin).contains(self) {
                    return Err(format!(
                        "{:?} on {origin} cannot reach {}",
                        piece,
                        self.destination()
                    ));
                }
            }
        }
        Ok(())
    }
}

/// King and rook departures burn castling rights for their color.
fn touch_castling_flags(pos: &mut Position, relocation: Relocation) {
    let color = relocation.piece.color();
    match relocation.piece.figure() {
        Figure::King => {
            let mut state = pos.castling(color);
            if !state.king_moved {
                state.king_moved = true;
                pos.set_castling(color, state);
            }
        }
        Figure::Rook => {
            for wing in Wing::BOTH {
                let home = Square::from_file_rank(wing.rook_home_file(), color.home_rank()).unwrap();
                if relocation.from == home {
                    let mut state = pos.castling(color);
                    if !state.rook_moved[wing.idx()] {
                        state.rook_moved[wing.idx()] = true;
                        pos.set_castling(color, state);
                    }
                }
            }
        }
        _ => {}
    }
}

#[cfg(test)]
#[path = "moves_tests.rs"]
mod moves_tests;
