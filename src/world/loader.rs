use serde::Deserialize;
use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::Path;

use super::model::{Enemy, Object, Objective, Room, World};

/// Errors produced while turning a world file into a runtime [`World`].
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("failed to read world file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse world file: {0}")]
    Parse(#[from] toml::de::Error),

    /// The document parsed but does not describe a usable world.
    #[error("invalid world: {0}")]
    Invalid(String),
}

////////////////////
/// TOML STRUCTS ///
////////////////////

#[derive(Deserialize)]
struct WorldFile {
    player: PlayerConfig,
    #[serde(default)]
    rooms: Vec<RoomConfig>, // [[rooms]] blocks
    #[serde(default)]
    objects: Vec<ObjectConfig>, // [[objects]] blocks
    #[serde(default)]
    enemies: Vec<EnemyConfig>, // [[enemies]] blocks
    objective: ObjectiveConfig,
}

#[derive(Deserialize)]
struct PlayerConfig {
    initialroom: String,
}

#[derive(Deserialize)]
struct RoomConfig {
    id: String,

    #[serde(default)]
    desc: String,

    #[serde(default)]
    exits: HashMap<String, String>, // direction -> room id
}

#[derive(Deserialize)]
struct ObjectConfig {
    id: String,

    #[serde(default)]
    desc: String,

    initialroom: String,
}

#[derive(Deserialize)]
struct EnemyConfig {
    id: String,

    #[serde(default)]
    desc: String,

    #[serde(default)]
    aggressiveness: u32,

    initialroom: String,

    #[serde(default)]
    killedby: Vec<String>,
}

#[derive(Deserialize)]
struct ObjectiveConfig {
    #[serde(rename = "type")]
    kind: String, // "kill" | "room" | "collect"

    #[serde(default)]
    what: Vec<String>,
}

/////////////////////////////
/// TOML PARSER FUNCTIONS ///
/////////////////////////////

/// Public API: load a world from a .toml file on disk.
pub fn load_world_from_file(path: &Path) -> Result<World, LoadError> {
    let contents = fs::read_to_string(path)?;
    load_world_from_str(&contents)
}

/// Public API: load a world from TOML source. Used by tests and by
/// [`load_world_from_file`].
pub fn load_world_from_str(contents: &str) -> Result<World, LoadError> {
    let world_file: WorldFile = toml::from_str(contents)?;

    if world_file.player.initialroom.trim().is_empty() {
        return Err(LoadError::Invalid(
            "player.initialroom may not be empty".to_string(),
        ));
    }

    // Build rooms, rejecting duplicate ids up front. Order is preserved:
    // the query layer resolves ids by first match.
    let mut seen_rooms: HashSet<String> = HashSet::new();
    let mut rooms: Vec<Room> = Vec::new();

    for rc in world_file.rooms {
        if !seen_rooms.insert(rc.id.clone()) {
            return Err(LoadError::Invalid(format!("duplicate room id: {}", rc.id)));
        }

        rooms.push(Room {
            id: rc.id,
            desc: rc.desc,
            exits: rc.exits,
        });
    }

    let mut seen_objects: HashSet<String> = HashSet::new();
    let mut objects: Vec<Object> = Vec::new();

    for oc in world_file.objects {
        if !seen_objects.insert(oc.id.clone()) {
            return Err(LoadError::Invalid(format!(
                "duplicate object id: {}",
                oc.id
            )));
        }

        objects.push(Object {
            id: oc.id,
            desc: oc.desc,
            room: oc.initialroom,
        });
    }

    let mut seen_enemies: HashSet<String> = HashSet::new();
    let mut enemies: Vec<Enemy> = Vec::new();

    for ec in world_file.enemies {
        if !seen_enemies.insert(ec.id.clone()) {
            return Err(LoadError::Invalid(format!("duplicate enemy id: {}", ec.id)));
        }

        enemies.push(Enemy {
            id: ec.id,
            desc: ec.desc,
            aggressiveness: ec.aggressiveness,
            room: ec.initialroom,
            killed_by: ec.killedby,
        });
    }

    let objective = parse_objective(&world_file.objective)?;

    Ok(World {
        start_room: world_file.player.initialroom,
        rooms,
        objects,
        enemies,
        objective,
    })
}

fn parse_objective(oc: &ObjectiveConfig) -> Result<Objective, LoadError> {
    match oc.kind.as_str() {
        "kill" => Ok(Objective::Kill(oc.what.clone())),
        "room" => Ok(Objective::Room(oc.what.clone())),
        "collect" => Ok(Objective::Collect(oc.what.clone())),
        other => Err(LoadError::Invalid(format!(
            "unknown objective type '{}': expected 'kill', 'room', or 'collect'",
            other
        ))),
    }
}
