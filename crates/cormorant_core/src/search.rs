use crate::Evaluator;
use crate::moves::Move;
use crate::piece::Color;
use crate::position::Position;
use crate::rules;

/// Fixed-depth minimax over the pseudo-legal move set. `turns` counts whole
/// turns; internally one turn is two plies. No pruning: the full tree is
/// explored. The position is mutated via execute/reverse during the search
/// and is structurally unchanged when this returns.
pub fn pick_best_move<E: Evaluator + ?Sized>(
    pos: &mut Position,
    side: Color,
    turns: u32,
    eval: &mut E,
) -> Option<Move> {
    let plies = turns.saturating_mul(2);
    step(pos, side, side, plies, true, eval).1
}

fn step<E: Evaluator + ?Sized>(
    pos: &mut Position,
    root: Color,
    to_move: Color,
    plies: u32,
    maximizing: bool,
    eval: &mut E,
) -> (f64, Option<Move>) {
    if plies == 0 {
        return (eval.score(pos, root), None);
    }

    let mut best: Option<(f64, Move)> = None;
    for mut mv in rules::moves_for(pos, to_move) {
        mv.execute(pos);
        let (score, _) = step(pos, root, to_move.opposite(), plies - 1, !maximizing, eval);
        mv.reverse(pos);

        // Strict comparison: ties keep the earlier enumerated candidate.
        let improves = match &best {
            None => true,
            Some((incumbent, _)) => {
                if maximizing {
                    score > *incumbent
                } else {
                    score < *incumbent
                }
            }
        };
        if improves {
            best = Some((score, mv));
        }
    }

    match best {
        Some((score, mv)) => (score, Some(mv)),
        // No pseudo-legal moves at all; the evaluator owns terminal scoring.
        None => (eval.score(pos, root), None),
    }
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod search_tests;
