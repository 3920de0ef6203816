use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use dungeoneer::engine::{Output, OutputBlock};
use dungeoneer::{Game, TurnOutcome, world};

#[derive(Parser)]
#[command(
    name = "dungeoneer",
    about = "A text adventure interpreter: explore rooms, collect objects, fight enemies",
    version
)]
struct Cli {
    /// Path to the world description file (TOML)
    world_file: PathBuf,
}

fn flush_output(out: Output) {
    let mut printed_anything = false;
    let mut started_events = false;

    for block in out.blocks {
        match block {
            OutputBlock::Title(t) => {
                println!("\n{}", t);
                printed_anything = true;
            }
            OutputBlock::Text(line) => {
                println!("{}", line);
                printed_anything = true;
            }
            OutputBlock::Event(ev) => {
                if !started_events {
                    if printed_anything {
                        println!(); // visual separation before first event
                    }
                    started_events = true;
                }
                println!("{}", ev);
                printed_anything = true;
            }
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let world = match world::load_world_from_file(&cli.world_file) {
        Ok(w) => w,
        Err(e) => {
            eprintln!(
                "Failed to load world file '{}': {e}",
                cli.world_file.display()
            );
            return ExitCode::FAILURE;
        }
    };

    let problems = world::validate_world(&world);
    if !problems.is_empty() {
        for p in &problems {
            eprintln!("Invalid world: {}", p.message);
        }
        return ExitCode::FAILURE;
    }

    let mut game = Game::new(world);
    let stdin = io::stdin();

    loop {
        match game.render_current_room() {
            Ok(out) => flush_output(out),
            Err(e) => {
                eprintln!("Error: {e}");
                return ExitCode::FAILURE;
            }
        }

        print!("> ");
        if io::stdout().flush().is_err() {
            return ExitCode::FAILURE;
        }

        let mut input = String::new();
        match stdin.read_line(&mut input) {
            Ok(0) => {
                println!("\nGoodbye.");
                return ExitCode::SUCCESS;
            }
            Ok(_) => {}
            Err(e) => {
                eprintln!("Error reading input: {e}");
                return ExitCode::FAILURE;
            }
        }

        // Strip only the line terminator; the command grammar does its own
        // (deliberately strict) matching on the rest.
        let input = input.trim_end_matches(['\n', '\r']);

        match game.step(input) {
            Ok((out, outcome)) => {
                flush_output(out);
                match outcome {
                    TurnOutcome::Continue => {}
                    TurnOutcome::Won => return ExitCode::SUCCESS,
                    TurnOutcome::Died => return ExitCode::FAILURE,
                }
            }
            Err(e) => {
                eprintln!("Error: {e}");
                return ExitCode::FAILURE;
            }
        }
    }
}
