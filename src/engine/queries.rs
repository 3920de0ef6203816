use std::collections::HashMap;

use crate::GameError;
use crate::world::{Enemy, Object, Room, World};

/// Resolve a room id to its room, first match in storage order. A miss means
/// the world references a room that does not exist; callers treat that as a
/// fatal consistency error.
pub fn find_room<'a>(world: &'a World, room_id: &str) -> Result<&'a Room, GameError> {
    world
        .rooms
        .iter()
        .find(|r| r.id == room_id)
        .ok_or_else(|| GameError::RoomNotFound(room_id.to_string()))
}

/// Objects currently on the floor of `room_id`, in storage order.
pub fn objects_in_room<'a>(world: &'a World, room_id: &str) -> Vec<&'a Object> {
    world.objects.iter().filter(|o| o.room == room_id).collect()
}

/// Enemies currently alive in `room_id`, in storage order.
pub fn enemies_in_room<'a>(world: &'a World, room_id: &str) -> Vec<&'a Enemy> {
    world.enemies.iter().filter(|e| e.room == room_id).collect()
}

/// Membership test on inventory keys. The same test is used for object ids
/// and, during rendering, for enemy ids.
pub fn is_in_inventory(inventory: &HashMap<String, Object>, id: &str) -> bool {
    inventory.contains_key(id)
}
