//! # spaceopoly
//!
//! The rules engine of a two-seat space-colony property-trading board game.
//!
//! ## Design Principles
//!
//! 1. **Explicit engine instance**: every game is an [`Engine`] owning its
//!    [`GameState`]. No global state; any number of games can run side by side.
//!
//! 2. **Deferred effects**: rent, tax, pot collection and card effects are
//!    queued per seat and run one at a time on explicit confirmation.
//!
//! 3. **Rejections, not faults**: an invalid command returns a
//!    [`CommandError`], leaves the game unchanged and logs an advisory line.
//!    Bankruptcy is the only terminal condition.
//!
//! ## Architecture
//!
//! - **Persistent Data Structures**: logs, queues and history use `im`, so a
//!   state snapshot is a cheap clone.
//!
//! - **Deterministic**: dice and deck shuffles come from a seeded ChaCha8
//!   stream; tests can script dice exactly.
//!
//! - **Caller-paced movement**: moves can be walked one tile at a time by the
//!   caller, with an event per step. The engine owns no timers.
//!
//! ## Modules
//!
//! - `core`: players, state, commands, RNG, configuration, log
//! - `board`: tiles, pricing, the board catalog
//! - `cards`: cards and ring decks
//! - `economy`: cash primitives and bankruptcy
//! - `ledger`: ownership, rent, building, mortgage
//! - `queue`: deferred effects and per-seat action queues
//! - `engine`: dice, jail, movement, landing, confirmation, events
//! - `error`: command, catalog and config errors

pub mod core;
pub mod board;
pub mod cards;
pub mod economy;
pub mod ledger;
pub mod queue;
pub mod engine;
pub mod error;

// Re-export commonly used types
pub use crate::core::{
    money, Command, CommandRecord, GameLog, GameRng, GameState, LogEntry,
    PlayerId, PlayerMap, PlayerRecord, RulesConfig,
};

pub use crate::board::{BoardCatalog, ColorGroup, Tile, TileFeature, TileId, TileKind};

pub use crate::cards::{Card, CardAction, CardDeck, DeckId};

pub use crate::economy::GameResult;

pub use crate::ledger::{Holding, PropertyLedger};

pub use crate::queue::{ActionQueue, Effect, QueuedAction};

pub use crate::engine::{
    DiceRoll, DiceRoller, Engine, EngineBuilder, EngineEvent, MovementStep, RollOutcome,
    ScriptedDice,
};

pub use crate::error::{CatalogError, CommandError, ConfigError};
