//! Textual forms: placement tokens, relocation text, move display, and an
//! ASCII board diagram.
//!
//! A placement token is figure letter + color letter + square, with the
//! figure letter omitted for pawns: "Kwe1", "Qbd8", "wa2".

use std::fmt;

use crate::moves::Move;
use crate::piece::{Color, Figure, Placement};
use crate::position::Position;
use crate::rules;
use crate::square::Square;

pub fn placement_text(placement: Placement) -> String {
    let mut out = String::new();
    if let Some(c) = placement.piece.figure().letter() {
        out.push(c);
    }
    out.push(placement.piece.color().letter());
    out.push_str(&placement.square.to_string());
    out
}

pub fn parse_placement(token: &str) -> Result<Placement, String> {
    let bad = || format!("bad placement token '{token}'");
    let chars: Vec<char> = token.chars().collect();
    let (figure, rest) = match chars.len() {
        3 => (Figure::Pawn, &chars[..]),
        4 => (Figure::from_letter(chars[0]).ok_or_else(bad)?, &chars[1..]),
        _ => return Err(bad()),
    };
    let color = Color::from_letter(rest[0]).ok_or_else(bad)?;
    let square_text: String = rest[1..].iter().collect();
    let square = Square::parse(&square_text).ok_or_else(bad)?;
    Ok(Placement::new(color.piece(figure), square))
}

/// Origin and destination concatenated: "e2e4".
pub fn parse_squares(text: &str) -> Result<(Square, Square), String> {
    if text.len() < 4 || !text.is_char_boundary(2) || !text.is_char_boundary(4) {
        return Err(format!("bad relocation text '{text}'"));
    }
    let from = Square::parse(&text[0..2]).ok_or_else(|| format!("bad square '{}'", &text[0..2]))?;
    let to = Square::parse(&text[2..4]).ok_or_else(|| format!("bad square '{}'", &text[2..4]))?;
    Ok((from, to))
}

/// Resolve origin+destination text (plus an optional promotion letter, e.g.
/// "e7e8Q") against the rules enumeration, so the returned move carries the
/// right kind and capture data.
pub fn find_move(pos: &Position, side: Color, text: &str) -> Result<Move, String> {
    let (from, to) = parse_squares(text)?;
    let promo = match text.len() {
        4 => None,
        5 => {
            let c = text.as_bytes()[4].to_ascii_uppercase() as char;
            Some(Figure::from_letter(c).ok_or_else(|| format!("bad promotion letter in '{text}'"))?)
        }
        _ => return Err(format!("bad relocation text '{text}'")),
    };

    for mv in rules::moves_for(pos, side) {
        if mv.origin() != from || mv.destination() != to {
            continue;
        }
        let wanted = match &mv {
            Move::Promotion(p) => p.promoted.piece.figure() == promo.unwrap_or(Figure::Queen),
            _ => promo.is_none(),
        };
        if wanted {
            return Ok(mv);
        }
    }
    Err(format!("{side:?} has no move {text}"))
}

/// Board diagram with rank 8 at the top, for interactive display.
pub fn board_text(pos: &Position) -> String {
    let mut out = String::new();
    for rank in (0..8).rev() {
        out.push((b'1' + rank as u8) as char);
        for file in 0..8 {
            let square = Square::from_file_rank(file, rank).unwrap();
            out.push(' ');
            out.push(match pos.piece_at(square) {
                Some(piece) => piece.glyph(),
                None => '.',
            });
        }
        out.push('\n');
    }
    out.push_str("  a b c d e f g h\n");
    out
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Move::Castling(m) => match m.wing {
                crate::position::Wing::Kingside => write!(f, "O-O"),
                crate::position::Wing::Queenside => write!(f, "O-O-O"),
            },
            Move::Basic(m) => {
                let sep = if m.capture.is_some() { "x" } else { "" };
                write!(f, "{}{sep}{}", m.relocation.from, m.relocation.to)
            }
            Move::EnPassant(m) => write!(f, "{}x{} e.p.", m.pawn.from, m.pawn.to),
            Move::Promotion(m) => {
                let sep = if m.capture.is_some() { "x" } else { "" };
                let letter = m.promoted.piece.figure().letter().unwrap_or('Q');
                write!(f, "{}{sep}{}={}", m.origin.square, m.promoted.square, letter)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::piece::Piece;

    #[test]
    fn placement_tokens_round_trip() {
        for piece in Piece::ALL {
            for square in [Square::parse("a1").unwrap(), Square::parse("h8").unwrap()] {
                let placement = Placement::new(piece, square);
                let text = placement_text(placement);
                assert_eq!(parse_placement(&text), Ok(placement));
            }
        }
    }

    #[test]
    fn pawn_tokens_have_no_figure_letter() {
        let placement = parse_placement("wa2").unwrap();
        assert_eq!(placement.piece, Piece::WhitePawn);
        assert_eq!(placement_text(placement), "wa2");
    }

    #[test]
    fn rejects_malformed_tokens() {
        for bad in ["", "K", "Xwe1", "Kqe1", "Kwe9", "Kwe1x"] {
            assert!(parse_placement(bad).is_err(), "accepted '{bad}'");
        }
    }

    #[test]
    fn relocation_text_round_trip() {
        let (from, to) = parse_squares("e2e4").unwrap();
        assert_eq!(format!("{from}{to}"), "e2e4");
        assert!(parse_squares("e2").is_err());
        assert!(parse_squares("e2e9").is_err());
    }

    #[test]
    fn finds_generated_move_with_kind() {
        let pos = Position::initial();
        let mv = find_move(&pos, Color::White, "e2e4").unwrap();
        match &mv {
            Move::Basic(m) => assert_eq!(m.grants_en_passant, Some(4)),
            other => panic!("expected a double step, got {other:?}"),
        }
        assert!(find_move(&pos, Color::White, "e2e5").is_err());
    }

    #[test]
    fn promotion_letter_selects_the_figure() {
        let pos = Position::from_placements("Kwe1 Kbe8 wa7").unwrap();
        let mv = find_move(&pos, Color::White, "a7a8N").unwrap();
        match &mv {
            Move::Promotion(p) => assert_eq!(p.promoted.piece.figure(), Figure::Knight),
            other => panic!("expected a promotion, got {other:?}"),
        }
        assert_eq!(mv.to_string(), "a7a8=N");
    }
}
