use super::*;
use crate::moves::Move;
use crate::piece::Relocation;

struct CountScorer;

impl Evaluator for CountScorer {
    fn score(&mut self, pos: &Position, side: Color) -> f64 {
        pos.piece_count(side) as f64
    }
    fn name(&self) -> &str {
        "count"
    }
}

fn sq(text: &str) -> Square {
    Square::parse(text).unwrap()
}

#[test]
fn initial_position_is_the_standard_array() {
    let pos = Position::initial();
    assert_eq!(pos.piece_count(Color::White), 16);
    assert_eq!(pos.piece_count(Color::Black), 16);
    assert_eq!(pos.king_square(Color::White), Some(sq("e1")));
    assert_eq!(pos.king_square(Color::Black), Some(sq("e8")));
    assert_eq!(pos.count_of(Piece::WhitePawn), 8);
    assert_eq!(pos.count_of(Piece::BlackQueen), 1);
    assert_eq!(pos.piece_at(sq("c1")), Some(Piece::WhiteBishop));
    assert_eq!(pos.en_passant_file(), None);
}

#[test]
fn from_placements_builds_the_listed_pieces() {
    let pos = Position::from_placements("Kwe1 Qwd1 wa2 Kbe8 bh7").unwrap();
    assert_eq!(pos.piece_at(sq("d1")), Some(Piece::WhiteQueen));
    assert_eq!(pos.piece_at(sq("a2")), Some(Piece::WhitePawn));
    assert_eq!(pos.piece_at(sq("h7")), Some(Piece::BlackPawn));
    assert_eq!(pos.piece_count(Color::White), 3);
    assert_eq!(pos.piece_count(Color::Black), 2);
}

#[test]
fn from_placements_rejects_malformed_and_duplicate_tokens() {
    assert!(Position::from_placements("Kwe1 bogus").is_err());
    assert!(Position::from_placements("Kwe1 Qwe1").is_err());
    assert!(Position::from_placements("Xwe1").is_err());
}

#[test]
fn board_and_register_stay_in_agreement() {
    let mut pos = Position::new();
    pos.place(Placement::new(Piece::WhiteRook, sq("a1")));
    pos.place(Placement::new(Piece::WhiteRook, sq("h1")));
    assert_eq!(pos.squares_of(Piece::WhiteRook), &[sq("a1"), sq("h1")]);

    pos.relocate(sq("a1"), sq("a5"));
    assert_eq!(pos.piece_at(sq("a1")), None);
    assert_eq!(pos.piece_at(sq("a5")), Some(Piece::WhiteRook));
    assert_eq!(pos.squares_of(Piece::WhiteRook), &[sq("a5"), sq("h1")]);

    let lifted = pos.lift(sq("h1"));
    assert_eq!(lifted, Piece::WhiteRook);
    assert_eq!(pos.squares_of(Piece::WhiteRook), &[sq("a5")]);
}

#[test]
#[should_panic]
fn placing_on_an_occupied_square_panics() {
    let mut pos = Position::new();
    pos.place(Placement::new(Piece::WhiteKing, sq("e1")));
    pos.place(Placement::new(Piece::BlackQueen, sq("e1")));
}

#[test]
fn score_cache_dies_with_the_next_mutation() {
    let mut pos = Position::from_placements("Kwe1 Kbe8 wa2").unwrap();
    assert_eq!(pos.score(), None);

    let value = pos.refresh_score(&mut CountScorer, Color::White);
    assert_eq!(value, 3.0);
    assert_eq!(pos.score(), Some(3.0));

    pos.relocate(sq("a2"), sq("a3"));
    assert_eq!(pos.score(), None);

    pos.refresh_score(&mut CountScorer, Color::White);
    assert_eq!(pos.score(), Some(3.0));
}

#[test]
fn equality_ignores_the_cache_and_generation() {
    let mut a = Position::from_placements("Kwe1 Kbe8").unwrap();
    let b = Position::from_placements("Kwe1 Kbe8").unwrap();
    a.refresh_score(&mut CountScorer, Color::White);
    assert_eq!(a, b);

    let mut c = b.clone();
    c.set_en_passant_file(Some(4));
    assert_ne!(a, c);
}

#[test]
fn attack_query_delegates_to_the_rules_engine() {
    let pos = Position::from_placements("Kwe1 Kbe8 Rbd8").unwrap();
    assert!(pos.is_attacked(sq("d1"), Color::Black));
    assert!(!pos.is_attacked(sq("e1"), Color::Black)); // the rook covers d-file and back rank only
    assert!(!pos.is_attacked(sq("a7"), Color::White));
}

#[test]
fn execute_reverse_keeps_equality_with_a_fresh_copy() {
    let mut pos = Position::initial();
    let copy = pos.clone();
    let mut mv = Move::basic(
        Relocation::new(Piece::WhiteKnight, sq("b1"), sq("c3")),
        None,
    );
    mv.execute(&mut pos);
    assert_ne!(pos, copy);
    mv.reverse(&mut pos);
    assert_eq!(pos, copy);
}
