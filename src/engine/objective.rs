use crate::engine::output::Output;
use crate::engine::queries::is_in_inventory;
use crate::world::Objective;
use crate::{Game, TurnOutcome};

/// Decide win or continue after a turn's transition has applied.
///
/// The kill check iterates the objective's target list and gives up the
/// moment any remaining enemy's id matches a target; an empty target list
/// (or one naming enemies that never existed) is therefore satisfied
/// immediately.
pub fn evaluate_objective(out: &mut Output, game: &Game) -> TurnOutcome {
    match &game.world.objective {
        Objective::Kill(targets) => {
            let mut all_killed = true;
            for target in targets {
                if game.world.enemies.iter().any(|e| &e.id == target) {
                    all_killed = false;
                    break;
                }
            }
            if all_killed {
                out.event("Congratulations! You have killed every enemy you set out to slay. You win!");
                return TurnOutcome::Won;
            }
        }
        Objective::Room(targets) => {
            if targets.contains(&game.current_room) {
                out.event("Congratulations! You have reached the objective room. You win!");
                return TurnOutcome::Won;
            }
        }
        Objective::Collect(targets) => {
            if targets.iter().all(|id| is_in_inventory(&game.inventory, id)) {
                out.event("Congratulations! You have collected every required item. You win!");
                return TurnOutcome::Won;
            }
        }
    }

    TurnOutcome::Continue
}
