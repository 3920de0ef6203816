use crate::Game;
use crate::engine::output::Output;
use crate::engine::queries::{enemies_in_room, is_in_inventory, objects_in_room};
use crate::world::Room;

/// Emit the per-turn view of a room: header, description, then the objects
/// and enemies still present, each listing ending with a count line.
///
/// The ` (in your inventory)` suffix comes from the inventory membership
/// test on entity ids, enemies included.
pub fn render_room(out: &mut Output, game: &Game, room: &Room) {
    out.title(format!("Room: {}", room.id));
    out.say(format!("Description: {}", room.desc));

    let objects = objects_in_room(&game.world, &room.id);
    for object in &objects {
        let mut line = format!("- {}: {}", object.id, object.desc);
        if is_in_inventory(&game.inventory, &object.id) {
            line.push_str(" (in your inventory)");
        }
        out.say(line);
    }
    out.say(format!("Objects in the room: {}", objects.len()));

    let enemies = enemies_in_room(&game.world, &room.id);
    for enemy in &enemies {
        let mut line = format!(
            "- {}: {} Aggressiveness: {}",
            enemy.id, enemy.desc, enemy.aggressiveness
        );
        if is_in_inventory(&game.inventory, &enemy.id) {
            line.push_str(" (in your inventory)");
        }
        out.say(line);
    }
    out.say(format!("Enemies in the room: {}", enemies.len()));
}
