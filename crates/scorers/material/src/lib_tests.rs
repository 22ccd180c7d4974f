use super::*;

#[test]
fn initial_position_is_balanced() {
    let pos = Position::initial();
    assert_eq!(material_balance(&pos, Color::White), 0.0);
    assert_eq!(material_balance(&pos, Color::Black), 0.0);
}

#[test]
fn score_is_antisymmetric_in_side() {
    let pos = Position::from_placements("Kwe1 Qwd1 wa2 Kbe8 Rbh8").unwrap();
    let mut scorer = MaterialScorer::new();
    let white = scorer.score(&pos, Color::White);
    let black = scorer.score(&pos, Color::Black);
    assert_eq!(white, 900.0 + 100.0 - 500.0);
    assert_eq!(white, -black);
}

#[test]
fn kings_carry_no_material() {
    let pos = Position::from_placements("Kwe1 Kbe8").unwrap();
    assert_eq!(material_balance(&pos, Color::White), 0.0);
}
