use std::collections::HashSet;

use super::model::World;

/// A structural problem found in a loaded world. Collected rather than
/// short-circuited so a bad world file reports everything wrong with it.
#[derive(Debug, Clone)]
pub struct ValidationError {
    pub message: String,
}

impl ValidationError {
    fn new(msg: impl Into<String>) -> Self {
        ValidationError {
            message: msg.into(),
        }
    }
}

/// Check referential integrity of a freshly loaded world: the start room and
/// every room reference must resolve, and object/enemy ids must not collide
/// with each other (the inventory is keyed by id across both kinds).
///
/// Objective targets and `killedby` references are deliberately not checked;
/// a world is allowed to name entities that never exist, it is just harder
/// (or trivially easy) to win.
pub fn validate_world(world: &World) -> Vec<ValidationError> {
    let mut errors: Vec<ValidationError> = Vec::new();

    if world.rooms.is_empty() {
        errors.push(ValidationError::new("world has no rooms"));
    }

    let all_rooms: HashSet<&str> = world.rooms.iter().map(|r| r.id.as_str()).collect();

    if !all_rooms.contains(world.start_room.as_str()) {
        errors.push(ValidationError::new(format!(
            "player.initialroom '{}' not found among rooms",
            world.start_room
        )));
    }

    for room in &world.rooms {
        for (direction, target) in &room.exits {
            if !all_rooms.contains(target.as_str()) {
                errors.push(ValidationError::new(format!(
                    "room '{}' exit '{}' targets missing room '{}'",
                    room.id, direction, target
                )));
            }
        }
    }

    for object in &world.objects {
        if !all_rooms.contains(object.room.as_str()) {
            errors.push(ValidationError::new(format!(
                "object '{}' initialroom '{}' not found among rooms",
                object.id, object.room
            )));
        }
    }

    for enemy in &world.enemies {
        if !all_rooms.contains(enemy.room.as_str()) {
            errors.push(ValidationError::new(format!(
                "enemy '{}' initialroom '{}' not found among rooms",
                enemy.id, enemy.room
            )));
        }
    }

    // Object and enemy ids share the inventory key space.
    let object_ids: HashSet<&str> = world.objects.iter().map(|o| o.id.as_str()).collect();
    for enemy in &world.enemies {
        if object_ids.contains(enemy.id.as_str()) {
            errors.push(ValidationError::new(format!(
                "id '{}' is used by both an object and an enemy",
                enemy.id
            )));
        }
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::world::load_world_from_str;

    #[test]
    fn accepts_a_consistent_world() {
        let world = load_world_from_str(
            r#"
            [player]
            initialroom = "start"

            [[rooms]]
            id = "start"

            [[rooms]]
            id = "hall"

            [rooms.exits]
            south = "start"

            [[objects]]
            id = "key"
            initialroom = "start"

            [[enemies]]
            id = "ghoul"
            initialroom = "hall"

            [objective]
            type = "room"
            what = ["hall"]
        "#,
        )
        .unwrap();

        assert!(validate_world(&world).is_empty());
    }

    #[test]
    fn reports_every_dangling_reference() {
        let world = load_world_from_str(
            r#"
            [player]
            initialroom = "nowhere"

            [[rooms]]
            id = "start"

            [rooms.exits]
            up = "attic"

            [[objects]]
            id = "coin"
            initialroom = "vault"

            [[enemies]]
            id = "coin"
            initialroom = "start"

            [objective]
            type = "collect"
            what = ["coin"]
        "#,
        )
        .unwrap();

        let errors = validate_world(&world);
        let messages: Vec<&str> = errors.iter().map(|e| e.message.as_str()).collect();

        assert!(messages.iter().any(|m| m.contains("nowhere")));
        assert!(messages.iter().any(|m| m.contains("attic")));
        assert!(messages.iter().any(|m| m.contains("vault")));
        assert!(messages.iter().any(|m| m.contains("both an object and an enemy")));
    }

    #[test]
    fn dangling_objective_targets_are_not_errors() {
        let world = load_world_from_str(
            r#"
            [player]
            initialroom = "start"

            [[rooms]]
            id = "start"

            [objective]
            type = "kill"
            what = ["nobody"]
        "#,
        )
        .unwrap();

        assert!(validate_world(&world).is_empty());
    }
}
