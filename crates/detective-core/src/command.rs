//! Player commands.
//!
//! One command is a single letter, matched case-insensitively:
//!
//! | Key | Command |
//! |-----|---------|
//! | `e` | go left (*esquerda*) |
//! | `d` | go right (*direita*) |
//! | `p` | review clues (*pistas*) |
//! | `u` | review suspects (*suspeitos*) |
//! | `s` | leave the mansion (*sair*) |
//!
//! Any other character is kept as [`Command::Unknown`] so the driver can
//! report it and carry on.

use detective_world::Direction;

/// Key for [`Command::Move`] left.
pub const KEY_LEFT: char = 'e';
/// Key for [`Command::Move`] right.
pub const KEY_RIGHT: char = 'd';
/// Key for [`Command::ReviewClues`].
pub const KEY_CLUES: char = 'p';
/// Key for [`Command::ReviewSuspects`].
pub const KEY_SUSPECTS: char = 'u';
/// Key for [`Command::Exit`].
pub const KEY_EXIT: char = 's';

/// A parsed player command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Walk to a child room.
    Move(Direction),
    /// List collected clues in order.
    ReviewClues,
    /// List suspects and their clues.
    ReviewSuspects,
    /// End the session.
    Exit,
    /// Unrecognized key.
    Unknown(char),
}

impl Command {
    /// Interpret one key press.
    pub const fn from_key(key: char) -> Self {
        match key.to_ascii_lowercase() {
            KEY_LEFT => Self::Move(Direction::Left),
            KEY_RIGHT => Self::Move(Direction::Right),
            KEY_CLUES => Self::ReviewClues,
            KEY_SUSPECTS => Self::ReviewSuspects,
            KEY_EXIT => Self::Exit,
            _ => Self::Unknown(key),
        }
    }
}

impl From<char> for Command {
    fn from(key: char) -> Self {
        Self::from_key(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_map_to_commands() {
        assert_eq!(Command::from_key('e'), Command::Move(Direction::Left));
        assert_eq!(Command::from_key('d'), Command::Move(Direction::Right));
        assert_eq!(Command::from_key('p'), Command::ReviewClues);
        assert_eq!(Command::from_key('u'), Command::ReviewSuspects);
        assert_eq!(Command::from_key('s'), Command::Exit);
    }

    #[test]
    fn keys_are_case_insensitive() {
        assert_eq!(Command::from_key('E'), Command::Move(Direction::Left));
        assert_eq!(Command::from_key('D'), Command::Move(Direction::Right));
        assert_eq!(Command::from('S'), Command::Exit);
    }

    #[test]
    fn other_keys_are_unknown() {
        assert_eq!(Command::from_key('x'), Command::Unknown('x'));
        assert_eq!(Command::from_key('?'), Command::Unknown('?'));
        assert_eq!(Command::from_key('é'), Command::Unknown('é'));
    }
}
