//! Exploration driver: the session loop.
//!
//! The driver has one state, the room the detective is standing in. Each
//! iteration prints where the player is and what paths exist, pulls one key
//! from a [`CommandSource`], and applies it:
//!
//! | Command | Effect |
//! |---|---|
//! | move left / right | walk to that child, or print a "no room" notice |
//! | review clues | print the clue index in order |
//! | review suspects | print the suspect ledger |
//! | exit | end the session |
//! | anything else | print an "invalid command" notice |
//!
//! Entering a room (the root at session start, then every successful move)
//! consults the [`CaseFile`]; matching evidence is filed in the
//! [`Notebook`], and the discovery is announced right under the next
//! location header. While the player stands in a room with no children, a
//! dead-end notice follows every command. When the source runs dry the
//! session ends exactly as if the player had chosen to exit, without any
//! extra output.

use std::io::{self, Write};

use detective_ledger::LedgerError;
use detective_world::{CaseFile, Direction, MansionMap, RoomId};
use tracing::{debug, info};

use crate::command::Command;
use crate::input::CommandSource;
use crate::notebook::{Discovery, Notebook};
use crate::report;

/// Errors that end a session abnormally.
#[derive(Debug, thiserror::Error)]
pub enum DriverError {
    /// The notebook could not grow.
    #[error("ledger error: {source}")]
    Ledger {
        /// The underlying ledger error.
        #[from]
        source: LedgerError,
    },

    /// Writing to the player's output failed.
    #[error("output error: {source}")]
    Output {
        /// The underlying I/O error.
        #[from]
        source: io::Error,
    },
}

impl DriverError {
    /// Whether the session died because memory ran out.
    pub const fn is_exhaustion(&self) -> bool {
        matches!(
            self,
            Self::Ledger {
                source: LedgerError::Exhausted { .. }
            }
        )
    }
}

/// Whether the loop keeps going after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Prompt for another command.
    Continue,
    /// The player asked to leave.
    Exit,
}

/// Why a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndReason {
    /// The player chose to leave.
    PlayerExit,
    /// The command source was exhausted or unreadable.
    InputExhausted,
}

/// Result of a completed session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionOutcome {
    /// Why the session ended.
    pub end_reason: EndReason,
    /// Number of keys read, the exit key included.
    pub commands: u64,
    /// Room the detective was in at the end.
    pub final_room: RoomId,
}

/// Drives one exploration session over a fixed mansion.
#[derive(Debug)]
pub struct ExplorationDriver<'a> {
    map: &'a MansionMap,
    case_file: &'a CaseFile,
    notebook: Notebook,
    current: RoomId,
    /// Room whose discovery notice is still owed to the player.
    unannounced: Option<&'a str>,
}

impl<'a> ExplorationDriver<'a> {
    /// Driver standing at the mansion's root. The root is not investigated
    /// until [`run`](Self::run) starts or [`enter_room`](Self::enter_room)
    /// is called.
    pub const fn new(map: &'a MansionMap, case_file: &'a CaseFile, notebook: Notebook) -> Self {
        Self {
            map,
            case_file,
            notebook,
            current: map.root(),
            unannounced: None,
        }
    }

    /// Room the detective is standing in.
    pub const fn current_room(&self) -> RoomId {
        self.current
    }

    /// Name of the current room.
    pub fn current_room_name(&self) -> &'a str {
        self.map.name(self.current).unwrap_or_default()
    }

    /// Evidence gathered so far.
    pub const fn notebook(&self) -> &Notebook {
        &self.notebook
    }

    /// Give up the notebook once the session is over.
    pub fn into_notebook(self) -> Notebook {
        self.notebook
    }

    /// Run a whole session: banner, root investigation, then the command
    /// loop until exit or exhaustion.
    ///
    /// # Errors
    ///
    /// Returns [`DriverError`] if the notebook cannot grow or `out` fails.
    pub fn run(
        &mut self,
        source: &mut dyn CommandSource,
        out: &mut dyn Write,
    ) -> Result<SessionOutcome, DriverError> {
        info!(
            start = self.current_room_name(),
            rooms = self.map.len(),
            evidence_rooms = self.case_file.len(),
            "exploration started"
        );

        report::write_banner(out)?;
        self.enter_room(self.current)?;

        let mut commands: u64 = 0;
        loop {
            report::write_location(out, self.map, self.current)?;
            if let Some(room_name) = self.unannounced.take() {
                report::write_discovery(out, room_name)?;
            }
            report::write_menu(out, self.map, self.current)?;
            out.flush()?;

            let Some(key) = source.next_key() else {
                return Ok(self.finish(EndReason::InputExhausted, commands));
            };
            commands = commands.saturating_add(1);
            writeln!(out)?;

            if self.step(Command::from_key(key), out)? == Flow::Exit {
                return Ok(self.finish(EndReason::PlayerExit, commands));
            }
        }
    }

    /// Apply one command, then the dead-end notice if it applies.
    ///
    /// # Errors
    ///
    /// Returns [`DriverError`] if the notebook cannot grow or `out` fails.
    pub fn step(&mut self, command: Command, out: &mut dyn Write) -> Result<Flow, DriverError> {
        debug!(?command, room = self.current_room_name(), "command received");

        match command {
            Command::Exit => {
                report::write_farewell(out)?;
                return Ok(Flow::Exit);
            }
            Command::ReviewClues => report::write_clues(out, self.notebook.clues())?,
            Command::ReviewSuspects => report::write_suspects(out, self.notebook.suspects())?,
            Command::Move(direction) => self.walk(direction, out)?,
            Command::Unknown(key) => {
                debug!(%key, "unrecognized command");
                report::write_invalid_command(out)?;
            }
        }

        if self.map.is_leaf(self.current) {
            report::write_dead_end(out, self.current_room_name())?;
        }
        Ok(Flow::Continue)
    }

    /// Move to `room` and investigate it.
    ///
    /// Entering the same room again files its evidence again, which the
    /// notebook ignores. The discovery notice is printed by [`run`](Self::run)
    /// after the room's location header.
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError`] if the notebook cannot grow.
    pub fn enter_room(&mut self, room: RoomId) -> Result<Option<Discovery>, LedgerError> {
        self.current = room;
        self.unannounced = None;
        let name = self.current_room_name();
        debug!(room = name, "room entered");

        let Some(evidence) = self.case_file.evidence_for(name) else {
            return Ok(None);
        };
        let discovery = self.notebook.record(evidence)?;
        self.unannounced = Some(name);
        Ok(Some(discovery))
    }

    fn walk(&mut self, direction: Direction, out: &mut dyn Write) -> Result<(), DriverError> {
        match self.map.child(self.current, direction) {
            Some(next) => {
                self.enter_room(next)?;
            }
            None => {
                debug!(?direction, room = self.current_room_name(), "no room that way");
                report::write_no_path(out, direction)?;
            }
        }
        Ok(())
    }

    fn finish(&self, end_reason: EndReason, commands: u64) -> SessionOutcome {
        info!(
            ?end_reason,
            commands,
            room = self.current_room_name(),
            clues = self.notebook.clues().len(),
            suspects = self.notebook.suspects().len(),
            "exploration finished"
        );
        SessionOutcome {
            end_reason,
            commands,
            final_room: self.current,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use detective_world::{StartingRoomIds, create_starting_mansion, starting_case_file};

    use super::*;
    use crate::input::ScriptedCommandSource;

    fn world() -> (MansionMap, StartingRoomIds, CaseFile) {
        let (map, ids) = create_starting_mansion().unwrap();
        (map, ids, starting_case_file().unwrap())
    }

    #[test]
    fn starts_at_root_without_investigating() {
        let (map, ids, file) = world();
        let driver = ExplorationDriver::new(&map, &file, Notebook::default());
        assert_eq!(driver.current_room(), ids.entrance_hall);
        assert!(driver.notebook().clues().is_empty());
    }

    #[test]
    fn moves_follow_children() {
        let (map, ids, file) = world();
        let mut driver = ExplorationDriver::new(&map, &file, Notebook::default());
        let mut out = Vec::new();

        driver.step(Command::Move(Direction::Left), &mut out).unwrap();
        assert_eq!(driver.current_room(), ids.living_room);
        driver.step(Command::Move(Direction::Right), &mut out).unwrap();
        assert_eq!(driver.current_room(), ids.garden);
        assert!(driver.notebook().clues().contains("Pegadas recentes no Jardim molhado."));
    }

    #[test]
    fn leaf_moves_stay_put_with_notice() {
        let (map, ids, file) = world();
        let mut driver = ExplorationDriver::new(&map, &file, Notebook::default());
        driver.enter_room(ids.pantry).unwrap();

        for direction in [Direction::Left, Direction::Right] {
            let mut out = Vec::new();
            let flow = driver.step(Command::Move(direction), &mut out).unwrap();
            assert_eq!(flow, Flow::Continue);
            assert_eq!(driver.current_room(), ids.pantry);
            let text = String::from_utf8(out).unwrap();
            let notice = match direction {
                Direction::Left => report::NO_ROOM_LEFT,
                Direction::Right => report::NO_ROOM_RIGHT,
            };
            assert!(text.contains(notice));
            assert!(text.contains(report::DEAD_END));
        }
    }

    #[test]
    fn unknown_commands_never_move() {
        let (map, ids, file) = world();
        let mut driver = ExplorationDriver::new(&map, &file, Notebook::default());
        let mut out = Vec::new();
        for key in ['x', 'q', '1', ' '] {
            driver.step(Command::from_key(key), &mut out).unwrap();
            assert_eq!(driver.current_room(), ids.entrance_hall);
        }
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.matches(report::INVALID_COMMAND).count(), 4);
        assert!(!text.contains(report::DEAD_END));
    }

    #[test]
    fn exit_stops_without_dead_end_notice() {
        let (map, ids, file) = world();
        let mut driver = ExplorationDriver::new(&map, &file, Notebook::default());
        driver.enter_room(ids.garage).unwrap();

        let mut out = Vec::new();
        assert_eq!(driver.step(Command::Exit, &mut out).unwrap(), Flow::Exit);
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains(report::FAREWELL));
        assert!(!text.contains(report::DEAD_END));
    }

    #[test]
    fn rooms_without_evidence_yield_nothing() {
        let (map, ids, file) = world();
        let mut driver = ExplorationDriver::new(&map, &file, Notebook::default());
        assert!(driver.enter_room(ids.pantry).unwrap().is_none());
    }

    #[test]
    fn discovery_is_announced_under_the_location() {
        let (map, _, file) = world();
        let mut driver = ExplorationDriver::new(&map, &file, Notebook::default());
        let mut source = ScriptedCommandSource::from_script("d d");
        let mut out = Vec::new();
        driver.run(&mut source, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        for room in ["Cozinha", "Garagem"] {
            let location = text.find(&format!("Voce esta em: {room}\n")).unwrap();
            let notice = text.find(&format!("Voce encontrou uma pista em {room}!")).unwrap();
            assert!(location < notice);
            assert_eq!(text.matches(&format!("uma pista em {room}!")).count(), 1);
        }
    }

    #[test]
    fn run_reports_exhaustion() {
        let (map, ids, file) = world();
        let mut driver = ExplorationDriver::new(&map, &file, Notebook::default());
        let mut source = ScriptedCommandSource::from_script("d e");
        let mut out = Vec::new();
        let outcome = driver.run(&mut source, &mut out).unwrap();
        assert_eq!(outcome.end_reason, EndReason::InputExhausted);
        assert_eq!(outcome.commands, 2);
        assert_eq!(outcome.final_room, ids.pantry);
    }

    struct FailingWriter;

    impl Write for FailingWriter {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn output_failure_is_an_error() {
        let (map, _, file) = world();
        let mut driver = ExplorationDriver::new(&map, &file, Notebook::default());
        let mut source = ScriptedCommandSource::from_script("s");
        let err = driver.run(&mut source, &mut FailingWriter).unwrap_err();
        assert!(matches!(err, DriverError::Output { .. }));
    }
}
