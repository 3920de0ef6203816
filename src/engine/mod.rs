mod combat;
mod command;
mod items;
mod movement;
mod objective;
mod output;
mod queries;
mod render;

pub use combat::{can_kill_enemy, handle_kill};
pub use command::{Command, parse_command};
pub use items::{handle_take, report_inventory};
pub use movement::handle_move;
pub use objective::evaluate_objective;
pub use output::{Output, OutputBlock};
pub use queries::{enemies_in_room, find_room, is_in_inventory, objects_in_room};
pub use render::render_room;
