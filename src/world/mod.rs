mod loader;
mod model;
mod validator;

pub use loader::{LoadError, load_world_from_file, load_world_from_str};

// Minimal, intentional surface area: re-export only what the game/engine uses.
pub use model::{Enemy, Object, Objective, Room, World};
pub use validator::{ValidationError, validate_world};
