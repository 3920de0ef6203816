use std::collections::HashMap;

//////////////////////////////
/// GAME STRUCTS AND ENUMS ///
//////////////////////////////

/// Runtime world type used by the game loop.
///
/// `objects` and `enemies` hold only the entities still present in the world:
/// a taken object moves into the player's inventory and a killed enemy is
/// removed outright, so membership here doubles as "still on the floor" and
/// "still alive".
#[derive(Debug)]
pub struct World {
    pub start_room: String,
    pub rooms: Vec<Room>,
    pub objects: Vec<Object>,
    pub enemies: Vec<Enemy>,
    pub objective: Objective,
}

#[derive(Debug)]
pub struct Room {
    pub id: String,
    pub desc: String,
    /// Direction label -> destination room id. May be empty (a dead end).
    pub exits: HashMap<String, String>,
}

#[derive(Debug)]
pub struct Object {
    pub id: String,
    pub desc: String,
    /// Room currently holding the object.
    pub room: String,
}

#[derive(Debug)]
pub struct Enemy {
    pub id: String,
    pub desc: String,
    /// Greater than zero means the enemy blocks any attempt to leave a room
    /// until it is defeated.
    pub aggressiveness: u32,
    pub room: String,
    /// Object ids the player must carry to defeat this enemy. Empty means the
    /// enemy can always be killed.
    pub killed_by: Vec<String>,
}

/// Win condition, evaluated against the current world state once per turn.
#[derive(Debug)]
pub enum Objective {
    /// Every listed enemy id must be gone from the world.
    Kill(Vec<String>),
    /// The player must stand in one of the listed rooms.
    Room(Vec<String>),
    /// Every listed object id must be in the player's inventory.
    Collect(Vec<String>),
}
