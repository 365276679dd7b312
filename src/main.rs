//! Console front-end: collects configuration, prompts for human moves,
//! renders the board, and announces computer moves and results. All the
//! game semantics live in the library; this file is I/O glue.

use std::io::{self, BufRead, Write};
use std::ops::RangeInclusive;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

use gridtoe::{
    GameError, GameSession, MoveOutcome, PlayerKind, SessionBuilder, MAX_PLAYERS, MAX_SIZE,
    MIN_PLAYERS, MIN_SIZE, SYMBOLS,
};

const LOG_FILE: &str = "game_log.txt";

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let stdin = io::stdin();
    let mut input = stdin.lock();

    println!("=============================");
    println!("     TIC-TAC-TOE GAME");
    println!("=============================");

    let size = prompt_number(
        &mut input,
        &format!("\nEnter grid size ({MIN_SIZE}-{MAX_SIZE}): "),
        MIN_SIZE..=MAX_SIZE,
    )?;
    let player_count = prompt_number(
        &mut input,
        &format!("Enter number of players ({MIN_PLAYERS}-{MAX_PLAYERS}): "),
        MIN_PLAYERS..=MAX_PLAYERS,
    )?;

    let mut session = setup_players(&mut input, size, player_count)?;
    run_game(&mut input, &mut session)?;

    println!("\nGame log has been saved to '{LOG_FILE}'");
    println!("\nThank you for playing!");
    Ok(())
}

/// Per-player type menu, names for humans, then session construction.
fn setup_players(
    input: &mut impl BufRead,
    size: usize,
    player_count: usize,
) -> Result<GameSession> {
    println!("\n=== PLAYER SETUP ===");

    let mut builder = SessionBuilder::new().size(size).transcript_to(LOG_FILE);
    let mut any_human = false;

    for i in 0..player_count {
        println!("Player {} ({}) - Choose type:", i + 1, SYMBOLS[i]);
        println!("1. Human Player");
        println!("2. Computer Player");
        let choice = prompt_number(input, "Enter choice (1-2): ", 1..=2)?;

        if choice == 1 {
            any_human = true;
            print!("Enter name for Player {}: ", i + 1);
            io::stdout().flush()?;
            let name = read_line(input)?.trim().to_string();
            let name = if name.is_empty() {
                format!("Player {}", i + 1)
            } else {
                name
            };
            builder = builder.human(name);
        } else {
            builder = builder.computer();
        }
        println!();
    }

    if !any_human {
        println!("At least one player must be human. Setting Player 1 as human.");
    }

    builder.build().context("failed to start the game")
}

/// Main game loop: render, prompt or auto-move, announce the result.
fn run_game(input: &mut impl BufRead, session: &mut GameSession) -> Result<()> {
    println!("=== GAME STARTED ===");
    println!("Grid positions are numbered from 1 to {}", session.board().size());
    println!("Enter moves as: row column (e.g., 1 1 for top-left)");

    loop {
        println!("\n{}", session.board());
        print_status(session);

        let mover = session.current_player().clone();
        let outcome = match mover.kind {
            PlayerKind::Human => prompt_human_move(input, session)?,
            PlayerKind::Computer => {
                println!("\n{} is thinking...", mover.name);
                let (pos, outcome) = session
                    .play_computer()
                    .context("computer failed to choose a move")?;
                println!(
                    "{} ({}) plays at ({}, {})",
                    mover.name,
                    mover.symbol,
                    pos.row + 1,
                    pos.col + 1
                );
                outcome
            }
        };

        match outcome {
            MoveOutcome::Continue => {}
            MoveOutcome::Win(winner) => {
                let winner = session.roster().get(winner);
                println!("\n{}", session.board());
                println!("\nGAME OVER! {} ({}) WINS!", winner.name, winner.symbol);
                return Ok(());
            }
            MoveOutcome::Draw => {
                println!("\n{}", session.board());
                println!("\nGAME OVER! IT'S A DRAW!");
                return Ok(());
            }
        }
    }
}

/// Re-prompt until the current player enters a legal move.
fn prompt_human_move(input: &mut impl BufRead, session: &mut GameSession) -> Result<MoveOutcome> {
    loop {
        let mover = session.current_player();
        print!(
            "\n{} ({}), enter your move (row col): ",
            mover.name, mover.symbol
        );
        io::stdout().flush()?;

        let line = read_line(input)?;
        match session.play_human(&line) {
            Ok(outcome) => return Ok(outcome),
            Err(GameError::InvalidFormat(_)) => {
                println!(
                    "Invalid input! Please enter two numbers between 1 and {}.",
                    session.board().size()
                );
            }
            Err(GameError::OutOfBounds { .. }) => {
                println!(
                    "Invalid position! Please enter values between 1 and {}.",
                    session.board().size()
                );
            }
            Err(GameError::CellOccupied { .. }) => {
                println!("Position already occupied! Choose another position.");
            }
            Err(e) => return Err(e).context("move could not be applied"),
        }
    }
}

fn print_status(session: &GameSession) {
    let mover = session.current_player();
    println!(
        "Moves made: {} | Current: {} ({})",
        session.moves_made(),
        mover.name,
        mover.symbol
    );
}

/// Prompt until a number in `range` is entered.
fn prompt_number(
    input: &mut impl BufRead,
    prompt: &str,
    range: RangeInclusive<usize>,
) -> Result<usize> {
    loop {
        print!("{prompt}");
        io::stdout().flush()?;

        let line = read_line(input)?;
        match line.trim().parse::<usize>() {
            Ok(n) if range.contains(&n) => return Ok(n),
            Ok(n) => println!(
                "Value must be between {} and {}, got {n}.",
                range.start(),
                range.end()
            ),
            Err(_) => println!("Invalid input! Please enter a number."),
        }
    }
}

fn read_line(input: &mut impl BufRead) -> Result<String> {
    let mut line = String::new();
    let read = input.read_line(&mut line).context("failed to read input")?;
    if read == 0 {
        anyhow::bail!("input ended unexpectedly");
    }
    Ok(line)
}
