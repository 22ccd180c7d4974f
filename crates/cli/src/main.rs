mod config;
mod transcript;

use std::io::{self, BufRead, Write};
use std::path::Path;

use config::CliConfig;
use cormorant_core::{Color, Evaluator, Game, Position, notation, pick_best_move};
use transcript::Transcript;

fn make_scorer(config: &CliConfig) -> Result<Box<dyn Evaluator>, String> {
    match config.scorer.as_str() {
        "material" => Ok(Box::new(material_scorer::MaterialScorer::new())),
        "mobility" => Ok(Box::new(mobility_scorer::MobilityScorer::new())),
        "random" => Ok(Box::new(random_scorer::RandomScorer::new(config.seed))),
        other => Err(format!("unknown scorer '{}'", other)),
    }
}

/// White moved first, so the cursor parity names the side to move.
fn side_to_move(game: &Game) -> Color {
    if game.cursor() % 2 == 0 {
        Color::White
    } else {
        Color::Black
    }
}

fn print_help() {
    println!("commands:");
    println!("  e2e4        play a move (e1g1 castles, e7e8Q promotes)");
    println!("  show        print the board");
    println!("  hint        ask the engine for a suggestion");
    println!("  undo / redo step one full turn back or forward");
    println!("  save PATH   write the game transcript as JSON");
    println!("  load PATH   resume a saved transcript");
    println!("  quit");
}

fn main() {
    let config = match CliConfig::load_or_default(Path::new("cormorant.toml")) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("cormorant.toml: {e}");
            std::process::exit(1);
        }
    };
    let mut scorer = match make_scorer(&config) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    };

    println!(
        "cormorant — scorer {}, depth {} turns",
        scorer.name(),
        config.depth_turns
    );

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    // The human picks a color; the engine takes the other one.
    let human = loop {
        print!("play as w or b? ");
        io::stdout().flush().ok();
        let Some(Ok(line)) = lines.next() else { return };
        match line.trim().chars().next().and_then(Color::from_letter) {
            Some(color) => break color,
            None => println!("answer w or b"),
        }
    };
    let engine = human.opposite();

    let mut game = Game::new(Position::initial());
    println!("{}", notation::board_text(game.position()));
    print_help();

    loop {
        if side_to_move(&game) == engine {
            let best = pick_best_move(
                game.position_mut(),
                engine,
                config.depth_turns,
                &mut *scorer,
            );
            match best {
                Some(mv) => {
                    println!("engine plays {mv}");
                    game.apply(mv);
                    println!("{}", notation::board_text(game.position()));
                }
                None => {
                    println!("the engine has no moves; game over");
                    break;
                }
            }
            continue;
        }

        print!("{}> ", human.letter());
        io::stdout().flush().ok();
        let Some(Ok(line)) = lines.next() else { break };
        let parts: Vec<&str> = line.trim().split_whitespace().collect();
        if parts.is_empty() {
            continue;
        }

        match parts[0] {
            "quit" => break,
            "help" => print_help(),
            "show" => println!("{}", notation::board_text(game.position())),
            "hint" => {
                let suggestion = pick_best_move(
                    game.position_mut(),
                    human,
                    config.depth_turns,
                    &mut *scorer,
                );
                match suggestion {
                    Some(mv) => println!("try {mv}"),
                    None => println!("no moves available"),
                }
            }
            "undo" => {
                // One full turn: the engine's reply and the human's move.
                if game.backward() {
                    game.backward();
                    println!("{}", notation::board_text(game.position()));
                } else {
                    println!("nothing to undo");
                }
            }
            "redo" => {
                if game.forward() {
                    game.forward();
                    println!("{}", notation::board_text(game.position()));
                } else {
                    println!("nothing to redo");
                }
            }
            "save" => match parts.get(1) {
                Some(path) => match Transcript::of_game(&game).save(Path::new(path)) {
                    Ok(()) => println!("saved {path}"),
                    Err(e) => println!("{e}"),
                },
                None => println!("save needs a path"),
            },
            "load" => match parts.get(1) {
                Some(path) => {
                    match Transcript::load(Path::new(path)).and_then(|t| t.replay()) {
                        Ok(loaded) => {
                            game = loaded;
                            println!("{}", notation::board_text(game.position()));
                        }
                        Err(e) => println!("{e}"),
                    }
                }
                None => println!("load needs a path"),
            },
            text => {
                match notation::find_move(game.position(), human, text)
                    .and_then(|mv| mv.validate(game.position(), human).map(|()| mv))
                {
                    Ok(mv) => {
                        game.apply(mv);
                        println!("{}", notation::board_text(game.position()));
                    }
                    Err(reason) => println!("{reason}"),
                }
            }
        }
    }
}
