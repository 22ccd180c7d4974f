//! Piece-value scorer: sums fixed material values, nothing positional.
//! The baseline evaluator for the search.

use cormorant_core::{Color, Evaluator, Figure, Piece, Position};

#[cfg(test)]
mod lib_tests;

/// Conventional centipawn values.
pub fn figure_value(figure: Figure) -> f64 {
    match figure {
        Figure::Pawn => 100.0,
        Figure::Knight => 320.0,
        Figure::Bishop => 330.0,
        Figure::Rook => 500.0,
        Figure::Queen => 900.0,
        Figure::King => 0.0,
    }
}

/// Material balance from `side`'s perspective.
pub fn material_balance(pos: &Position, side: Color) -> f64 {
    let mut score = 0.0;
    for piece in Piece::ALL {
        let value = figure_value(piece.figure()) * pos.count_of(piece) as f64;
        if piece.color() == side {
            score += value;
        } else {
            score -= value;
        }
    }
    score
}

#[derive(Debug, Clone, Copy, Default)]
pub struct MaterialScorer;

impl MaterialScorer {
    pub fn new() -> Self {
        MaterialScorer
    }
}

impl Evaluator for MaterialScorer {
    fn score(&mut self, pos: &Position, side: Color) -> f64 {
        material_balance(pos, side)
    }

    fn name(&self) -> &str {
        "material"
    }
}
