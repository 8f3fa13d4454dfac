//! Core engine types: players, state, commands, RNG, configuration, log.
//!
//! These are the building blocks every other module works against. Rules
//! that touch several of them live as methods on [`GameState`].

pub mod player;
pub mod rng;
pub mod config;
pub mod command;
pub mod log;
pub mod state;

pub use player::{PlayerId, PlayerMap, PlayerRecord, SEAT_COUNT};
pub use rng::GameRng;
pub use config::RulesConfig;
pub use command::{Command, CommandRecord};
pub use log::{money, GameLog, LogEntry};
pub use state::GameState;
