use std::collections::HashMap;

use crate::Game;
use crate::engine::output::Output;
use crate::world::Object;

/// Pick up `object_id` from the current room.
///
/// The object must be in the room the player is standing in. On success the
/// owned value moves out of the world and into the inventory, keyed by id;
/// insertion overwrites any stale entry under the same key. A miss leaves
/// everything untouched.
pub fn handle_take(out: &mut Output, game: &mut Game, object_id: &str) {
    let found = game
        .world
        .objects
        .iter()
        .position(|o| o.id == object_id && o.room == game.current_room);

    match found {
        Some(index) => {
            let object = game.world.objects.remove(index);
            out.say(format!("You took the {}.", object.id));
            game.inventory.insert(object.id.clone(), object);
        }
        None => {
            out.say(format!("There is no {} here to take.", object_id));
        }
    }
}

/// One line summarizing what the player carries, sorted by id so the listing
/// is stable.
pub fn report_inventory(out: &mut Output, inventory: &HashMap<String, Object>) {
    if inventory.is_empty() {
        out.say("You are carrying nothing.");
        return;
    }

    let mut ids: Vec<&str> = inventory.keys().map(|k| k.as_str()).collect();
    ids.sort_unstable();
    out.say(format!("You are carrying: {}", ids.join(", ")));
}
