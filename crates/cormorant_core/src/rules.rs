//! Pseudo-legal move generation and attack enumeration.
//!
//! Nothing here excludes moves that leave the mover's own king attacked;
//! check-legality filtering is a layer callers can build from
//! `is_square_attacked` if they want it.

use crate::moves::Move;
use crate::piece::{Color, Figure, Piece, Placement, Relocation};
use crate::position::{Position, Wing};
use crate::square::{Offset, Square};

const ORTHOGONAL: [Offset; 4] = [
    Offset::new(1, 0),
    Offset::new(-1, 0),
    Offset::new(0, 1),
    Offset::new(0, -1),
];

const DIAGONAL: [Offset; 4] = [
    Offset::new(1, 1),
    Offset::new(1, -1),
    Offset::new(-1, 1),
    Offset::new(-1, -1),
];

const ROYAL: [Offset; 8] = [
    Offset::new(1, 0),
    Offset::new(-1, 0),
    Offset::new(0, 1),
    Offset::new(0, -1),
    Offset::new(1, 1),
    Offset::new(1, -1),
    Offset::new(-1, 1),
    Offset::new(-1, -1),
];

const KNIGHT_JUMPS: [Offset; 8] = [
    Offset::new(1, 2),
    Offset::new(2, 1),
    Offset::new(-1, 2),
    Offset::new(-2, 1),
    Offset::new(1, -2),
    Offset::new(2, -1),
    Offset::new(-1, -2),
    Offset::new(-2, -1),
];

/// Every pseudo-legal move for `side`: each register scanned in `Figure`
/// order with squares ascending, then castling, then en passant. Search
/// tie-breaks depend on this order.
pub fn moves_for(pos: &Position, side: Color) -> Vec<Move> {
    let mut out = Vec::with_capacity(64);
    for figure in Figure::ALL {
        let piece = side.piece(figure);
        for &from in pos.squares_of(piece) {
            piece_moves_into(pos, piece, from, &mut out);
        }
    }
    out.extend(castling_moves(pos, side));
    out.extend(en_passant_moves(pos, side));
    out
}

/// Pseudo-legal destinations for one piece on one square. Castling and
/// en passant are enumerated separately.
pub fn piece_moves(pos: &Position, piece: Piece, from: Square) -> Vec<Move> {
    let mut out = Vec::new();
    piece_moves_into(pos, piece, from, &mut out);
    out
}

fn piece_moves_into(pos: &Position, piece: Piece, from: Square, out: &mut Vec<Move>) {
    match piece.figure() {
        Figure::King => stepper_moves(pos, piece, from, &ROYAL, out),
        Figure::Queen => slider_moves(pos, piece, from, &ROYAL, out),
        Figure::Rook => slider_moves(pos, piece, from, &ORTHOGONAL, out),
        Figure::Bishop => slider_moves(pos, piece, from, &DIAGONAL, out),
        Figure::Knight => stepper_moves(pos, piece, from, &KNIGHT_JUMPS, out),
        Figure::Pawn => pawn_moves(pos, piece, from, out),
    }
}

/// Walk each direction until the edge or the first occupied square, which is
/// included only as an opponent capture.
fn slider_moves(pos: &Position, piece: Piece, from: Square, dirs: &[Offset], out: &mut Vec<Move>) {
    for &dir in dirs {
        let mut cursor = from;
        while let Some(to) = cursor.offset(dir) {
            match pos.piece_at(to) {
                None => out.push(Move::basic(Relocation::new(piece, from, to), None)),
                Some(other) if other.color() != piece.color() => {
                    out.push(Move::basic(Relocation::new(piece, from, to), Some(other)));
                    break;
                }
                Some(_) => break,
            }
            cursor = to;
        }
    }
}

/// Test each fixed offset once.
fn stepper_moves(pos: &Position, piece: Piece, from: Square, jumps: &[Offset], out: &mut Vec<Move>) {
    for &jump in jumps {
        let Some(to) = from.offset(jump) else { continue };
        match pos.piece_at(to) {
            None => out.push(Move::basic(Relocation::new(piece, from, to), None)),
            Some(other) if other.color() != piece.color() => {
                out.push(Move::basic(Relocation::new(piece, from, to), Some(other)));
            }
            Some(_) => {}
        }
    }
}

fn pawn_moves(pos: &Position, piece: Piece, from: Square, out: &mut Vec<Move>) {
    let color = piece.color();
    let step = color.pawn_step();

    if let Some(to) = from.offset(Offset::new(0, step))
        && pos.piece_at(to).is_none()
    {
        push_pawn_move(piece, from, to, None, out);

        // Double step only from the start rank, and only when the single
        // advance was itself open.
        if from.rank() == color.pawn_start_rank()
            && let Some(two) = to.offset(Offset::new(0, step))
            && pos.piece_at(two).is_none()
        {
            out.push(Move::double_step(Relocation::new(piece, from, two)));
        }
    }

    for df in [-1, 1] {
        if let Some(to) = from.offset(Offset::new(df, step))
            && let Some(victim) = pos.piece_at(to)
            && victim.color() != color
        {
            push_pawn_move(piece, from, to, Some(victim), out);
        }
    }
}

/// A pawn reaching the far rank fans out into the four promotions.
fn push_pawn_move(piece: Piece, from: Square, to: Square, capture: Option<Piece>, out: &mut Vec<Move>) {
    if to.rank() == piece.color().promotion_rank() {
        for figure in Figure::PROMOTABLE {
            out.push(Move::promotion(Placement::new(piece, from), to, figure, capture));
        }
    } else {
        out.push(Move::basic(Relocation::new(piece, from, to), capture));
    }
}

/// Castling candidates for `side`, kingside first. Requires unspent rights,
/// king and rook still on their home squares, empty between-squares, and no
/// opponent attack on any king transit square, the origin included.
pub fn castling_moves(pos: &Position, side: Color) -> Vec<Move> {
    let mut out = Vec::new();
    let state = pos.castling(side);
    let home = side.home_rank();
    let king_home = Square::from_file_rank(4, home).unwrap();
    if pos.piece_at(king_home) != Some(side.piece(Figure::King)) {
        return out;
    }
    let enemy = side.opposite();
    for wing in Wing::BOTH {
        if !state.may_castle(wing) {
            continue;
        }
        let rook_home = Square::from_file_rank(wing.rook_home_file(), home).unwrap();
        if pos.piece_at(rook_home) != Some(side.piece(Figure::Rook)) {
            continue;
        }
        // Occupancy and attack checks cover different square sets: the king's
        // origin is attack-checked but not occupancy-checked, and the
        // queenside b-file is occupancy-checked but never transited.
        let (between, transit): (&[i8], &[i8]) = match wing {
            Wing::Kingside => (&[5, 6], &[4, 5, 6]),
            Wing::Queenside => (&[1, 2, 3], &[2, 3, 4]),
        };
        let occupied = between
            .iter()
            .any(|&f| pos.piece_at(Square::from_file_rank(f, home).unwrap()).is_some());
        if occupied {
            continue;
        }
        let threatened = transit
            .iter()
            .any(|&f| pos.is_attacked(Square::from_file_rank(f, home).unwrap(), enemy));
        if threatened {
            continue;
        }
        out.push(Move::castling(side, wing));
    }
    out
}

/// En-passant captures for `side`, valid only while the one-move eligibility
/// file set by the preceding double step is present. Lower origin file first.
pub fn en_passant_moves(pos: &Position, side: Color) -> Vec<Move> {
    let mut out = Vec::new();
    let Some(file) = pos.en_passant_file() else {
        return out;
    };
    let rank = side.en_passant_rank();
    let pawn = side.piece(Figure::Pawn);
    let victim = side.opposite().piece(Figure::Pawn);
    let Some(victim_square) = Square::from_file_rank(file, rank) else {
        return out;
    };
    let Some(landing) = Square::from_file_rank(file, rank + side.pawn_step()) else {
        return out;
    };
    if pos.piece_at(victim_square) != Some(victim) || pos.piece_at(landing).is_some() {
        return out;
    }
    for df in [-1, 1] {
        if let Some(from) = Square::from_file_rank(file + df, rank)
            && pos.piece_at(from) == Some(pawn)
        {
            out.push(Move::en_passant(Relocation::new(pawn, from, landing)));
        }
    }
    out
}

/// The squares a piece attacks from `from`: the same rays and offsets as
/// move generation, but pawn capture geometry only, and friendly-occupied
/// squares excluded.
pub fn attack_squares(pos: &Position, piece: Piece, from: Square) -> Vec<Square> {
    let mut out = Vec::new();
    match piece.figure() {
        Figure::King => stepper_attacks(pos, piece, from, &ROYAL, &mut out),
        Figure::Queen => slider_attacks(pos, piece, from, &ROYAL, &mut out),
        Figure::Rook => slider_attacks(pos, piece, from, &ORTHOGONAL, &mut out),
        Figure::Bishop => slider_attacks(pos, piece, from, &DIAGONAL, &mut out),
        Figure::Knight => stepper_attacks(pos, piece, from, &KNIGHT_JUMPS, &mut out),
        Figure::Pawn => {
            let step = piece.color().pawn_step();
            for df in [-1, 1] {
                if let Some(to) = from.offset(Offset::new(df, step))
                    && pos.piece_at(to).map(|p| p.color()) != Some(piece.color())
                {
                    out.push(to);
                }
            }
        }
    }
    out
}

fn slider_attacks(pos: &Position, piece: Piece, from: Square, dirs: &[Offset], out: &mut Vec<Square>) {
    for &dir in dirs {
        let mut cursor = from;
        while let Some(to) = cursor.offset(dir) {
            match pos.piece_at(to) {
                None => out.push(to),
                Some(other) => {
                    if other.color() != piece.color() {
                        out.push(to);
                    }
                    break;
                }
            }
            cursor = to;
        }
    }
}

fn stepper_attacks(pos: &Position, piece: Piece, from: Square, jumps: &[Offset], out: &mut Vec<Square>) {
    for &jump in jumps {
        if let Some(to) = from.offset(jump)
            && pos.piece_at(to).map(|p| p.color()) != Some(piece.color())
        {
            out.push(to);
        }
    }
}

/// True if any piece of `by` attacks `target`.
pub fn is_square_attacked(pos: &Position, target: Square, by: Color) -> bool {
    for figure in Figure::ALL {
        let piece = by.piece(figure);
        for &from in pos.squares_of(piece) {
            if attack_squares(pos, piece, from).contains(&target) {
                return true;
            }
        }
    }
    false
}

#[cfg(test)]
#[path = "rules_tests.rs"]
mod rules_tests;
