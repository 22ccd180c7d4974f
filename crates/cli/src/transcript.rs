use serde::{Deserialize, Serialize};
use std::path::Path;

use cormorant_core::{Color, Game, Move, Position, notation};

/// A saved game: the moves played from the initial position, in relocation
/// text ("e2e4", "e1g1" for castling, "e7e8Q" for promotion).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transcript {
    pub moves: Vec<String>,
}

impl Transcript {
    /// Record the applied part of a game's history.
    pub fn of_game(game: &Game) -> Transcript {
        let moves = game.history()[..game.cursor()]
            .iter()
            .map(move_record)
            .collect();
        Transcript { moves }
    }

    /// Re-play the transcript from the initial position. White moved first.
    pub fn replay(&self) -> Result<Game, String> {
        let mut game = Game::new(Position::initial());
        for (i, text) in self.moves.iter().enumerate() {
            let side = if i % 2 == 0 { Color::White } else { Color::Black };
            let mv = notation::find_move(game.position(), side, text)
                .map_err(|e| format!("move {}: {}", i + 1, e))?;
            mv.validate(game.position(), side)
                .map_err(|e| format!("move {}: {}", i + 1, e))?;
            game.apply(mv);
        }
        Ok(game)
    }

    pub fn save(&self, path: &Path) -> Result<(), String> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| format!("Failed to serialize: {}", e))?;
        std::fs::write(path, json).map_err(|e| format!("Failed to write: {}", e))
    }

    pub fn load(path: &Path) -> Result<Transcript, String> {
        let contents =
            std::fs::read_to_string(path).map_err(|e| format!("Failed to read: {}", e))?;
        serde_json::from_str(&contents).map_err(|e| format!("Failed to parse: {}", e))
    }
}

/// Origin+destination text, with the promotion letter when needed.
fn move_record(mv: &Move) -> String {
    let mut text = format!("{}{}", mv.origin(), mv.destination());
    if let Move::Promotion(p) = mv {
        if let Some(letter) = p.promoted.piece.figure().letter() {
            text.push(letter);
        }
    }
    text
}
