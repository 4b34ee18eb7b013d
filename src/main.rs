//! Cycle Duel CLI
//!
//! Interactive frontend for the provably-fair move game. The move list
//! comes from the command line; one round is played per run. The
//! commitment is printed before the player chooses, and the key is
//! disclosed with the result so the round can be verified externally:
//! recomputing HMAC-SHA-256 over the computer's move with the disclosed
//! key must reproduce the commitment shown up front.

use std::env;
use std::io::{self, BufRead};

use anyhow::{Context, Result};
use tracing::{debug, Level};
use tracing_subscriber::FmtSubscriber;

use cycle_duel::{Commitment, MoveSet, OsMoveSource, OutcomeMatrix, RoundCoordinator, VERSION};

fn main() -> Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::WARN)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("failed to set tracing subscriber")?;

    let moves: Vec<String> = env::args().skip(1).collect();
    let move_set = match MoveSet::new(moves) {
        Ok(set) => set,
        Err(err) => {
            eprintln!("Error: {err}.");
            eprintln!("Pass an odd number (>= 3) of unique moves, e.g.:");
            eprintln!("    cycle-duel rock paper scissors lizard spock");
            std::process::exit(1);
        }
    };
    debug!(version = VERSION, moves = move_set.len(), "starting game");

    let mut coordinator = RoundCoordinator::new(move_set);
    let mut source = OsMoveSource;
    let commitment = coordinator.start_round(&mut source);

    print_menu(&coordinator, &commitment);

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line.context("failed to read input")?;
        let input = line.trim();

        if input == "?" {
            print_help(coordinator.move_set());
            print_menu(&coordinator, &commitment);
            continue;
        }

        match input.parse::<usize>() {
            Ok(0) => break,
            Ok(choice) if choice <= coordinator.move_set().len() => {
                // Menu numbers are 1-based
                let player_move = coordinator.move_set().moves()[choice - 1].clone();
                let result = coordinator
                    .resolve(&player_move)
                    .context("failed to resolve round")?;

                println!("Your move: {}", result.player_move);
                println!("Computer move: {}", result.computer_move);
                println!("{}", result.outcome);
                println!("HMAC key: {}", result.secret_key.to_hex());
                break;
            }
            _ => {
                println!("Invalid choice, try again.");
                print_menu(&coordinator, &commitment);
            }
        }
    }

    Ok(())
}

/// Show the commitment and the numbered move menu.
fn print_menu(coordinator: &RoundCoordinator, commitment: &Commitment) {
    println!("HMAC: {commitment}");
    for (index, name) in coordinator.move_set().moves().iter().enumerate() {
        println!("{} - {}", index + 1, name);
    }
    println!("0 - Exit");
    println!("? - Help");
    println!("Enter your choice:");
}

/// Render the outcome table, cells from the row move's perspective.
fn print_help(set: &MoveSet) {
    let matrix = OutcomeMatrix::build(set);
    println!("Help table (Win/Lose/Draw):");
    for (name, row) in matrix.rows() {
        let cells: Vec<&str> = row.iter().map(|o| o.cell()).collect();
        println!("{}: {}", name, cells.join(" | "));
    }
}
