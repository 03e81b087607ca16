//! Command sources.
//!
//! The driver pulls one key per prompt from a [`CommandSource`]. The trait
//! hides where keys come from: a terminal, a script file, or a fixed list
//! in a test.
//!
//! A source that returns `None` is finished. The driver treats that exactly
//! like the player leaving the mansion.

use std::collections::VecDeque;
use std::io::BufRead;

use tracing::warn;

/// A source of single-key player commands.
pub trait CommandSource {
    /// Next key, or `None` once input is exhausted or unreadable.
    fn next_key(&mut self) -> Option<char>;
}

/// Reads keys from a buffered reader, one non-whitespace character at a
/// time.
///
/// Whitespace (including newlines) is skipped. When a line holds several
/// characters, successive prompts consume them in order, the way a terminal
/// `scanf(" %c")` loop would.
#[derive(Debug)]
pub struct ReaderCommandSource<R> {
    reader: R,
    pending: VecDeque<char>,
    finished: bool,
}

impl<R: BufRead> ReaderCommandSource<R> {
    /// Wrap a reader.
    pub const fn new(reader: R) -> Self {
        Self {
            reader,
            pending: VecDeque::new(),
            finished: false,
        }
    }
}

impl<R: BufRead> CommandSource for ReaderCommandSource<R> {
    fn next_key(&mut self) -> Option<char> {
        while self.pending.is_empty() {
            if self.finished {
                return None;
            }
            let mut line = String::new();
            match self.reader.read_line(&mut line) {
                Ok(0) => self.finished = true,
                Ok(_) => self
                    .pending
                    .extend(line.chars().filter(|c| !c.is_whitespace())),
                Err(e) => {
                    warn!(error = %e, "command input unreadable, ending session");
                    self.finished = true;
                }
            }
        }
        self.pending.pop_front()
    }
}

/// Replays a fixed sequence of keys, then reports exhaustion.
#[derive(Debug, Clone, Default)]
pub struct ScriptedCommandSource {
    keys: VecDeque<char>,
}

impl ScriptedCommandSource {
    /// Source yielding `keys` in order.
    pub fn new(keys: impl IntoIterator<Item = char>) -> Self {
        Self {
            keys: keys.into_iter().collect(),
        }
    }

    /// Source yielding the non-whitespace characters of `script`.
    pub fn from_script(script: &str) -> Self {
        Self::new(script.chars().filter(|c| !c.is_whitespace()))
    }
}

impl CommandSource for ScriptedCommandSource {
    fn next_key(&mut self) -> Option<char> {
        self.keys.pop_front()
    }
}
