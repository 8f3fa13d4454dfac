//! Notifications for the presentation layer.

use serde::{Deserialize, Serialize};

use super::dice::DiceRoll;
use crate::board::TileId;
use crate::core::{Command, PlayerId};
use crate::error::CommandError;

/// One tile of a move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovementStep {
    pub player: PlayerId,
    pub from: TileId,
    pub to: TileId,
    /// Steps left after this one.
    pub remaining: usize,
}

impl MovementStep {
    /// True on the step that reaches the destination.
    #[must_use]
    pub fn is_last(&self) -> bool {
        self.remaining == 0
    }
}

/// What a roll did.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RollOutcome {
    /// The token started moving.
    Moved { dice: DiceRoll },
    /// Still stranded; `attempts` failed so far.
    StayedInJail { dice: DiceRoll, attempts: u8 },
    /// Too many doubles in a row.
    SentToJail { dice: DiceRoll },
}

impl RollOutcome {
    /// The dice behind this outcome.
    #[must_use]
    pub fn dice(&self) -> DiceRoll {
        match *self {
            RollOutcome::Moved { dice }
            | RollOutcome::StayedInJail { dice, .. }
            | RollOutcome::SentToJail { dice } => dice,
        }
    }
}

/// Fired by the engine as state changes.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum EngineEvent {
    /// A command was accepted and applied.
    StateChanged { command: Command },

    /// A token advanced one tile.
    Moved(MovementStep),

    /// A token came to rest and its landing was resolved.
    Landed { player: PlayerId, tile: TileId },

    /// A command was refused; state is unchanged apart from the log.
    Rejected { command: Command, error: CommandError },

    /// Bankruptcy ended the game.
    GameOver { winner: PlayerId },
}
