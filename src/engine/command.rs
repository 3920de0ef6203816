/// A parsed player command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Look,
    Move(String),
    Take(String),
    Kill(String),
    Unrecognized,
}

/// Parse one input line (line terminator already stripped) into a command.
///
/// Matching is strict prefix matching with no trimming or case folding:
/// `"look "` is not a look, and `"Go north"` is not a move. A line starting
/// with `door` moves using the whole line as the direction label, so worlds
/// can name exits `door1`, `door2`, ... and accept them as bare commands.
pub fn parse_command(input: &str) -> Command {
    if input == "look" {
        Command::Look
    } else if let Some(direction) = input.strip_prefix("go ") {
        Command::Move(direction.to_string())
    } else if input.starts_with("door") {
        Command::Move(input.to_string())
    } else if let Some(object_id) = input.strip_prefix("take ") {
        Command::Take(object_id.to_string())
    } else if let Some(enemy_id) = input.strip_prefix("kill ") {
        Command::Kill(enemy_id.to_string())
    } else {
        Command::Unrecognized
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn look_is_exact() {
        assert_eq!(parse_command("look"), Command::Look);
        assert_eq!(parse_command("look "), Command::Unrecognized);
        assert_eq!(parse_command("Look"), Command::Unrecognized);
    }

    #[test]
    fn go_takes_the_remainder_as_direction() {
        assert_eq!(
            parse_command("go north"),
            Command::Move("north".to_string())
        );
        // "go" must be followed by a space to be a move
        assert_eq!(parse_command("go"), Command::Unrecognized);
        assert_eq!(parse_command("golf club"), Command::Unrecognized);
    }

    #[test]
    fn door_prefix_moves_with_the_whole_line() {
        assert_eq!(parse_command("door3"), Command::Move("door3".to_string()));
        assert_eq!(parse_command("door"), Command::Move("door".to_string()));
    }

    #[test]
    fn take_and_kill_strip_their_verbs() {
        assert_eq!(parse_command("take key"), Command::Take("key".to_string()));
        assert_eq!(
            parse_command("kill warden"),
            Command::Kill("warden".to_string())
        );
        // bare verbs with no argument fall through
        assert_eq!(parse_command("take"), Command::Unrecognized);
        assert_eq!(parse_command("kill"), Command::Unrecognized);
    }

    #[test]
    fn everything_else_is_unrecognized() {
        assert_eq!(parse_command(""), Command::Unrecognized);
        assert_eq!(parse_command("dance"), Command::Unrecognized);
        assert_eq!(parse_command("  go north"), Command::Unrecognized);
    }
}
