//! Session logic for Detective Quest.
//!
//! Ties the mansion from `detective-world` to the evidence structures from
//! `detective-ledger` and runs the interactive exploration.
//!
//! # Modules
//!
//! - [`command`] -- Single-key commands and their letters.
//! - [`config`] -- Optional `detective-config.yaml` loading.
//! - [`driver`] -- [`ExplorationDriver`], the session state machine.
//! - [`input`] -- [`CommandSource`] and its reader and scripted forms.
//! - [`notebook`] -- [`Notebook`], the clues and suspects of one session.
//! - [`report`] -- Everything printed to the player.
//!
//! [`ExplorationDriver`]: driver::ExplorationDriver
//! [`CommandSource`]: input::CommandSource
//! [`Notebook`]: notebook::Notebook

pub mod command;
pub mod config;
pub mod driver;
pub mod input;
pub mod notebook;
pub mod report;

pub use command::Command;
pub use config::{ConfigError, QuestConfig};
pub use driver::{DriverError, EndReason, ExplorationDriver, Flow, SessionOutcome};
pub use input::{CommandSource, ReaderCommandSource, ScriptedCommandSource};
pub use notebook::{Discovery, Notebook};
