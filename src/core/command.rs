//! Command representation: the intents a presentation layer can send.
//!
//! Commands are plain data so they can be recorded, replayed against a
//! seeded engine, or sent over any boundary the caller likes. The engine
//! routes each one through [`crate::engine::Engine::apply`].

use serde::{Deserialize, Serialize};

use super::player::PlayerId;
use crate::board::TileId;

/// A user intent.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Command {
    Roll { player: PlayerId },
    ConfirmNextAction { player: PlayerId },
    BuyPendingProperty { player: PlayerId },
    PayBail { player: PlayerId },
    UseRescueCard { player: PlayerId },
    Build { player: PlayerId, tile: TileId },
    Sell { player: PlayerId, tile: TileId },
    ToggleMortgage { tile: TileId },
    GiftTile { tile: TileId, to: PlayerId },
    EndTurn,
    GiveCash { from: PlayerId, amount: i64 },
    PayBank { player: PlayerId, amount: i64 },
    CollectFromBank { player: PlayerId, amount: i64 },
    MovePlayerTo { player: PlayerId, tile: TileId },
    TeleportPlayer { player: PlayerId, tile: TileId },
    StartNewGame,
}

impl Command {
    /// The seat issuing or targeted by this command, if any.
    #[must_use]
    pub fn player(&self) -> Option<PlayerId> {
        match self {
            Command::Roll { player }
            | Command::ConfirmNextAction { player }
            | Command::BuyPendingProperty { player }
            | Command::PayBail { player }
            | Command::UseRescueCard { player }
            | Command::Build { player, .. }
            | Command::Sell { player, .. }
            | Command::PayBank { player, .. }
            | Command::CollectFromBank { player, .. }
            | Command::MovePlayerTo { player, .. }
            | Command::TeleportPlayer { player, .. } => Some(*player),
            Command::GiftTile { to, .. } => Some(*to),
            Command::GiveCash { from, .. } => Some(*from),
            Command::ToggleMortgage { .. } | Command::EndTurn | Command::StartNewGame => None,
        }
    }

    /// True for commands that only a table administrator should issue.
    ///
    /// These bypass normal trade economics.
    #[must_use]
    pub fn is_administrative(&self) -> bool {
        matches!(
            self,
            Command::GiftTile { .. }
                | Command::GiveCash { .. }
                | Command::PayBank { .. }
                | Command::CollectFromBank { .. }
                | Command::MovePlayerTo { .. }
                | Command::TeleportPlayer { .. }
        )
    }
}

/// An accepted command, in the order it was applied.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandRecord {
    /// Sequence number within the game (starts at 0).
    pub sequence: u32,

    /// The command applied.
    pub command: Command,
}

impl CommandRecord {
    /// Create a new record.
    #[must_use]
    pub fn new(sequence: u32, command: Command) -> Self {
        Self { sequence, command }
    }
}
