pub mod engine;
pub mod world;

use std::collections::HashMap;

use engine::{
    Command, Output, evaluate_objective, find_room, handle_kill, handle_move, handle_take,
    parse_command, render_room,
};
use world::{Object, World};

/// Unrecoverable world-consistency failure. The entry point maps this to a
/// nonzero exit status; nothing below it attempts recovery.
#[derive(Debug, thiserror::Error)]
pub enum GameError {
    #[error("current room '{0}' not found in the world")]
    RoomNotFound(String),
}

/// How a turn left the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnOutcome {
    Continue,
    Won,
    Died,
}

/// The whole mutable game state: the world plus the player's position and
/// inventory. Owned exclusively by the driving loop and handed `&mut` into
/// each transition handler.
pub struct Game {
    pub world: World,
    pub current_room: String,
    pub inventory: HashMap<String, Object>,
}

impl Game {
    pub fn new(world: World) -> Self {
        let current_room = world.start_room.clone();
        Game {
            world,
            current_room,
            inventory: HashMap::new(),
        }
    }

    /// Render the room the player is standing in. Fails if the current room
    /// id no longer resolves, which the caller treats as fatal.
    pub fn render_current_room(&self) -> Result<Output, GameError> {
        let room = find_room(&self.world, &self.current_room)?;
        let mut out = Output::new();
        render_room(&mut out, self, room);
        Ok(out)
    }

    /// Process one player input line: parse, apply the transition, then
    /// evaluate the objective against the resulting state.
    ///
    /// The objective runs after every command, `look` and unrecognized input
    /// included, but never after a turn that already ended the session.
    pub fn step(&mut self, input: &str) -> Result<(Output, TurnOutcome), GameError> {
        let mut out = Output::new();

        let outcome = match parse_command(input) {
            // The loop re-renders the room every turn; look changes nothing.
            Command::Look => TurnOutcome::Continue,
            Command::Move(direction) => handle_move(&mut out, self, &direction)?,
            Command::Take(object_id) => {
                handle_take(&mut out, self, &object_id);
                TurnOutcome::Continue
            }
            Command::Kill(enemy_id) => handle_kill(&mut out, self, &enemy_id),
            Command::Unrecognized => {
                out.say("Command not recognized.");
                TurnOutcome::Continue
            }
        };

        if outcome != TurnOutcome::Continue {
            return Ok((out, outcome));
        }

        let outcome = evaluate_objective(&mut out, self);
        Ok((out, outcome))
    }
}
