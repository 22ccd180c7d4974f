//! Heuristic scorer: material plus a mobility term (pseudo-legal move count
//! difference) and a pawn-advancement term.

use cormorant_core::{Color, Evaluator, Figure, Position, rules};
use material_scorer::material_balance;


#[derive(Debug, Clone, Copy)]
pub struct MobilityScorer {
    /// Centipawns per extra pseudo-legal move.
    pub mobility_weight: f64,
    /// Centipawns per rank a pawn has advanced beyond its start rank.
    pub advance_weight: f64,
}

impl Default for MobilityScorer {
    fn default() -> Self {
        MobilityScorer {
            mobility_weight: 5.0,
            advance_weight: 10.0,
        }
    }
}

impl MobilityScorer {
    pub fn new() -> Self {
        Self::default()
    }
}

fn pawn_advancement(pos: &Position, side: Color) -> f64 {
    let pawn = side.piece(Figure::Pawn);
    let start = side.pawn_start_rank();
    pos.squares_of(pawn)
        .iter()
        .map(|sq| (sq.rank() - start).abs() as f64)
        .sum()
}

impl Evaluator for MobilityScorer {
    fn score(&mut self, pos: &Position, side: Color) -> f64 {
        let mobility = rules::moves_for(pos, side).len() as f64
            - rules::moves_for(pos, side.opposite()).len() as f64;
        let advancement = pawn_advancement(pos, side) - pawn_advancement(pos, side.opposite());
        material_balance(pos, side)
            + self.mobility_weight * mobility
            + self.advance_weight * advancement
    }

    fn name(&self) -> &str {
        "mobility"
    }
}
