use std::collections::HashMap;

use crate::engine::items::report_inventory;
use crate::engine::output::Output;
use crate::engine::queries::is_in_inventory;
use crate::world::{Enemy, Object};
use crate::{Game, TurnOutcome};

/// An enemy can be killed when its requirement set is empty or every required
/// object id is in the inventory. No partial credit.
pub fn can_kill_enemy(enemy: &Enemy, inventory: &HashMap<String, Object>) -> bool {
    enemy
        .killed_by
        .iter()
        .all(|id| is_in_inventory(inventory, id))
}

/// Attack `enemy_id`.
///
/// The lookup is by id across the whole world, not just the current room.
/// An unknown enemy is a harmless mistake. A known enemy is either killed
/// outright (and removed from the world for good) or the attack fails and
/// the session ends in death.
pub fn handle_kill(out: &mut Output, game: &mut Game, enemy_id: &str) -> TurnOutcome {
    let found = game.world.enemies.iter().position(|e| e.id == enemy_id);

    let Some(index) = found else {
        out.say(format!("There is no {} to kill.", enemy_id));
        return TurnOutcome::Continue;
    };

    if can_kill_enemy(&game.world.enemies[index], &game.inventory) {
        let enemy = game.world.enemies.remove(index);
        out.say(format!("You killed the {}.", enemy.id));
        if game.world.enemies.is_empty() {
            // Cosmetic note; the objective evaluator is the authority on winning.
            out.event("All enemies are defeated.");
        }
        TurnOutcome::Continue
    } else {
        out.say(format!(
            "You cannot kill the {}. You are missing required objects.",
            enemy_id
        ));
        report_inventory(out, &game.inventory);
        out.event("You died.");
        TurnOutcome::Died
    }
}
