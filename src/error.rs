//! Error types.
//!
//! Rejected commands never fault: the engine leaves state unchanged, logs the
//! error's text as an advisory message and returns it to the caller.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::board::TileId;
use crate::core::PlayerId;

/// Why a command was rejected.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Error)]
pub enum CommandError {
    #[error("{0} must finish pending actions first")]
    ActionsPending(PlayerId),

    #[error("a move is still in progress")]
    MovementInProgress,

    #[error("the game is over")]
    GameOver,

    #[error("{0} has no pending actions")]
    NothingQueued(PlayerId),

    #[error("no property is on offer")]
    NoPendingOffer,

    #[error("not enough cash: need {needed}, have {available}")]
    InsufficientCash { needed: i64, available: i64 },

    #[error("{player} does not own tile {tile}")]
    NotOwner { player: PlayerId, tile: TileId },

    #[error("tile {0} cannot be owned")]
    NotPurchasable(TileId),

    #[error("tile {0} is already owned")]
    AlreadyOwned(TileId),

    #[error("tile {0} has no owner")]
    Unowned(TileId),

    #[error("tile {0} is not a colony site")]
    NotAProperty(TileId),

    #[error("need sector control with nothing decommissioned to build on tile {0}")]
    NoMonopoly(TileId),

    #[error("tile {0} is decommissioned")]
    Mortgaged(TileId),

    #[error("tile {0} has outposts or colonies; sell them first")]
    Developed(TileId),

    #[error("tile {0} has nothing to sell")]
    NoDevelopment(TileId),

    #[error("tile {0} cannot be developed further")]
    DevelopmentCapped(TileId),

    #[error("{0} is not in deep space")]
    NotInJail(PlayerId),

    #[error("{0} holds no rescue beacon")]
    NoRescueCard(PlayerId),

    #[error("tile {0} is not on the board")]
    InvalidTile(TileId),

    #[error("{0} is not seated at this table")]
    InvalidPlayer(PlayerId),

    #[error("amount must be positive")]
    InvalidAmount,
}

/// Why a board catalog failed to load.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to parse catalog: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("board must have {expected} tiles, found {found}")]
    TileCount { expected: usize, found: usize },

    #[error("tile 0 must be Launch")]
    MissingLaunch,

    #[error("no pricing entry for {0}")]
    MissingPricing(String),

    #[error("pricing for {0} does not match its tile kind")]
    PricingMismatch(String),

    #[error("board must have {expected} {kind} tiles, found {found}")]
    KindCount {
        kind: &'static str,
        expected: usize,
        found: usize,
    },

    #[error("property {0} has no color group")]
    MissingGroup(String),

    #[error("deck {0} is empty")]
    EmptyDeck(&'static str),

    #[error("card target {0} is off the board")]
    CardTarget(u8),
}

/// Why a rules config failed to load.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid config: {0}")]
    Invalid(&'static str),

    #[error("jail tile {0} is not a deep space tile")]
    JailTile(TileId),
}
