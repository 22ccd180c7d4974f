pub mod game;
pub mod moves;
pub mod notation;
pub mod piece;
pub mod position;
pub mod register;
pub mod rules;
pub mod search;
pub mod square;

// Re-export the core game logic (not scorer-specific)
pub use game::Game;
pub use moves::{BasicMove, CastlingMove, EnPassantMove, Move, PromotionMove};
pub use piece::{Color, Figure, Piece, Placement, Relocation};
pub use position::{CastlingState, Position, Wing};
pub use search::pick_best_move;
pub use square::{Offset, Square};

// =============================================================================
// Evaluator trait — implemented by all scorers (material, mobility, ...)
// =============================================================================

/// Position scoring contract consumed by the search.
///
/// Higher means better for `side`. Implementations must be total over all
/// positions — including positions with no pseudo-legal replies, whose
/// terminal scoring is the evaluator's responsibility, not the search's —
/// and deterministic, or search results stop being reproducible.
pub trait Evaluator {
    fn score(&mut self, pos: &Position, side: Color) -> f64;

    /// Scorer name for display and configuration.
    fn name(&self) -> &str;
}
