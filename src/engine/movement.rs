use crate::engine::output::Output;
use crate::engine::queries::find_room;
use crate::{Game, GameError, TurnOutcome};

/// Try to leave the current room via `direction`.
///
/// Preconditions run in order. First, an aggressive enemy anywhere in the
/// world pins the player in place and the attempt is fatal; the scan covers
/// the whole enemy collection, not just the current room. Second, a room with
/// no exits at all is a dead end and leaving it is equally fatal. Only then
/// is the direction looked up; an unknown direction is a plain mistake and
/// the turn continues.
pub fn handle_move(
    out: &mut Output,
    game: &mut Game,
    direction: &str,
) -> Result<TurnOutcome, GameError> {
    if game.world.enemies.iter().any(|e| e.aggressiveness > 0) {
        out.say("You cannot leave while an aggressive enemy is still on the loose.");
        out.event("You died.");
        return Ok(TurnOutcome::Died);
    }

    let room = find_room(&game.world, &game.current_room)?;

    if room.exits.is_empty() {
        out.say("This room has no valid exit.");
        out.event("You died.");
        return Ok(TurnOutcome::Died);
    }

    match room.exits.get(direction) {
        Some(target) => {
            let target = target.clone();
            out.say(format!("You go {}.", direction));
            game.current_room = target;
        }
        None => {
            out.say("No exit in that direction.");
        }
    }

    Ok(TurnOutcome::Continue)
}
