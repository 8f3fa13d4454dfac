//! Deferred effect definitions.
//!
//! Effects are pure data: a tag plus payload. Nothing happens when an effect
//! is created or queued; the engine interprets it when the owning seat
//! confirms it.

use serde::{Deserialize, Serialize};

use crate::board::TileId;
use crate::cards::DeckId;
use crate::core::{money, PlayerId};

/// A deferred state change.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum Effect {
    /// Credit the seat from the bank.
    Receive { amount: i64, reason: String },

    /// Debit the seat to the bank, optionally feeding the station pot.
    Pay {
        amount: i64,
        reason: String,
        to_pot: bool,
    },

    /// Pay a fixed amount to another seat.
    PayRent {
        owner: PlayerId,
        amount: i64,
        reason: String,
    },

    /// Roll two dice and pay the utility fee to `owner`.
    UtilityFee { owner: PlayerId },

    /// Collect the station pot and reset it.
    CollectPot { amount: i64 },

    /// Go directly to deep space.
    GoToJail,

    /// Draw from a deck and act on the card.
    DrawCard { deck: DeckId },

    /// Jump straight to a tile and resolve landing there.
    AdvanceTo { tile: TileId },
}

impl Effect {
    /// Credit from the bank.
    pub fn receive(amount: i64, reason: impl Into<String>) -> Self {
        Self::Receive {
            amount,
            reason: reason.into(),
        }
    }

    /// Debit to the bank, with the amount added to the station pot.
    pub fn pay_to_pot(amount: i64, reason: impl Into<String>) -> Self {
        Self::Pay {
            amount,
            reason: reason.into(),
            to_pot: true,
        }
    }

    /// Pay another seat.
    pub fn pay_rent(owner: PlayerId, amount: i64, reason: impl Into<String>) -> Self {
        Self::PayRent {
            owner,
            amount,
            reason: reason.into(),
        }
    }

    /// Default button label for this effect.
    #[must_use]
    pub fn label(&self) -> String {
        match self {
            Effect::Receive { amount, .. } => format!("Receive {}", money(*amount)),
            Effect::Pay { amount, .. } => format!("Pay {}", money(*amount)),
            Effect::PayRent { amount, reason, .. } => format!("Pay {}, {}", reason, money(*amount)),
            Effect::UtilityFee { .. } => "Roll & pay service fee".to_string(),
            Effect::CollectPot { amount } => {
                format!("Collect Deep Space Station cache ({})", money(*amount))
            }
            Effect::GoToJail => "Lost in Space — to Deep Space".to_string(),
            Effect::DrawCard { deck } => deck.name().to_string(),
            Effect::AdvanceTo { tile } => format!("Advance to tile {}", tile),
        }
    }
}

/// A queued effect with the label shown to the seat.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueuedAction {
    pub label: String,
    pub effect: Effect,
}

impl QueuedAction {
    /// Create an entry with an explicit label.
    pub fn new(label: impl Into<String>, effect: Effect) -> Self {
        Self {
            label: label.into(),
            effect,
        }
    }
}

impl From<Effect> for QueuedAction {
    fn from(effect: Effect) -> Self {
        Self {
            label: effect.label(),
            effect,
        }
    }
}
