use super::*;
use crate::piece::{Figure, Piece, Relocation};
use crate::square::Square;

/// Plain material count, the minimal deterministic evaluator.
struct Material;

impl Evaluator for Material {
    fn score(&mut self, pos: &Position, side: Color) -> f64 {
        let mut score = 0.0;
        for piece in Piece::ALL {
            let value = match piece.figure() {
                Figure::Pawn => 1.0,
                Figure::Knight | Figure::Bishop => 3.0,
                Figure::Rook => 5.0,
                Figure::Queen => 9.0,
                Figure::King => 0.0,
            };
            let signed = if piece.color() == side { value } else { -value };
            score += signed * pos.count_of(piece) as f64;
        }
        score
    }
    fn name(&self) -> &str {
        "material"
    }
}

fn sq(text: &str) -> Square {
    Square::parse(text).unwrap()
}

fn pos(placements: &str) -> Position {
    Position::from_placements(placements).unwrap()
}

#[test]
fn takes_the_hanging_queen() {
    let mut position = pos("Kwa1 Rwd1 Kbh8 Qbd5");
    let best = pick_best_move(&mut position, Color::White, 1, &mut Material).unwrap();
    assert_eq!(
        best,
        Move::basic(
            Relocation::new(Piece::WhiteRook, sq("d1"), sq("d5")),
            Some(Piece::BlackQueen),
        )
    );
}

#[test]
fn search_leaves_the_position_structurally_unchanged() {
    let mut position = Position::initial();
    let before = position.clone();
    let _ = pick_best_move(&mut position, Color::White, 2, &mut Material);
    assert_eq!(position, before);
}

#[test]
fn search_is_deterministic() {
    let mut position = pos("Kwe1 Rwa1 Nwb1 wa2 wb2 Kbe8 Rba8 ba7 bb7");
    let first = pick_best_move(&mut position, Color::White, 2, &mut Material);
    let second = pick_best_move(&mut position, Color::White, 2, &mut Material);
    assert_eq!(first, second);
    assert!(first.is_some());
}

#[test]
fn zero_turns_and_no_pieces_yield_no_move() {
    let mut position = pos("Kwa1 Kbh8");
    assert_eq!(
        pick_best_move(&mut position, Color::White, 0, &mut Material),
        None
    );

    let mut empty_side = pos("Kbh8");
    assert_eq!(
        pick_best_move(&mut empty_side, Color::White, 1, &mut Material),
        None
    );
}

#[test]
fn avoids_the_defended_bait() {
    // Both black pawns are takable; one is defended by the king, the other is
    // free. Two plies see the recapture.
    let mut position = pos("Kwa1 Rwg1 Kbh8 bg7 bb7");
    let best = pick_best_move(&mut position, Color::White, 1, &mut Material).unwrap();
    assert_ne!(best.destination(), sq("g7"), "walked into the recapture");
}
