//! Error types for the Detective Quest binary.
//!
//! [`EngineError`] wraps every failure mode of a session so `main` can
//! propagate with `?` and pick an exit status in one place.

use std::io::{self, Write};

use detective_core::{ConfigError, DriverError};
use detective_world::WorldError;

/// Top-level error for the Detective Quest binary.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    /// Configuration loading failed.
    #[error("config error: {source}")]
    Config {
        /// The underlying config error.
        #[from]
        source: ConfigError,
    },

    /// Mansion or case file construction failed.
    #[error("world error: {source}")]
    World {
        /// The underlying world error.
        #[from]
        source: WorldError,
    },

    /// The session ended abnormally.
    #[error("session error: {source}")]
    Driver {
        /// The underlying driver error.
        #[from]
        source: DriverError,
    },

    /// Writing the final summary failed.
    #[error("output error: {source}")]
    Output {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },
}

impl EngineError {
    /// Process exit status: 1 when memory ran out, 2 for anything else.
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::World {
                source: WorldError::Exhausted { .. },
            } => 1,
            Self::Driver { source } if source.is_exhaustion() => 1,
            _ => 2,
        }
    }

    /// Write the one-line diagnostic shown to the player on a fatal exit.
    ///
    /// Goes straight to `out`, independent of the log filter.
    pub fn write_diagnostic<W: Write + ?Sized>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "detective-engine: {self}")
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use detective_ledger::LedgerError;

    use super::*;

    #[test]
    fn exhaustion_exits_with_one() {
        let mut buffer: Vec<u8> = Vec::new();
        let Err(source) = buffer.try_reserve(usize::MAX) else {
            return;
        };
        let err = EngineError::from(DriverError::from(LedgerError::Exhausted {
            what: "clue",
            source,
        }));
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn other_failures_exit_with_two() {
        let err = EngineError::from(WorldError::UnknownRoomName("Attic".to_owned()));
        assert_eq!(err.exit_code(), 2);
        let err = EngineError::from(std::io::Error::other("closed"));
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn diagnostic_names_the_failure() {
        let err = EngineError::from(WorldError::UnknownRoomName("Attic".to_owned()));
        let mut out = Vec::new();
        err.write_diagnostic(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("detective-engine: world error:"));
        assert!(text.contains("Attic"));
        assert!(text.ends_with('\n'));
    }
}
