//! Card definitions.

use serde::{Deserialize, Serialize};

use crate::board::TileId;

/// Which deck a card belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DeckId {
    /// Drawn on Nav Alert tiles.
    NavAlert,
    /// Drawn on Mission Control tiles.
    MissionControl,
}

impl DeckId {
    /// Both decks.
    pub const ALL: [DeckId; 2] = [DeckId::NavAlert, DeckId::MissionControl];

    /// Display name of the deck.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            DeckId::NavAlert => "Nav. Alert!",
            DeckId::MissionControl => "Mission Control",
        }
    }
}

/// What drawing a card does.
///
/// The last six variants exist in the deck data but have no engine behavior
/// yet: drawing one only logs its text.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum CardAction {
    Gain { amount: i64 },
    Pay { amount: i64 },
    MoveTo { tile: TileId },
    GoToJail,
    GrantRescueCard,

    AdvanceToNearestSpaceport,
    AdvanceToNearestUtility,
    MoveBack { steps: u8 },
    AssessedRepairs { per_outpost: i64, per_colony: i64 },
    CollectFromEachPlayer { amount: i64 },
    PayEachPlayer { amount: i64 },
}

impl CardAction {
    /// True for variants with no engine behavior.
    #[must_use]
    pub const fn is_inert(&self) -> bool {
        matches!(
            self,
            CardAction::AdvanceToNearestSpaceport
                | CardAction::AdvanceToNearestUtility
                | CardAction::MoveBack { .. }
                | CardAction::AssessedRepairs { .. }
                | CardAction::CollectFromEachPlayer { .. }
                | CardAction::PayEachPlayer { .. }
        )
    }
}

/// A card: display text plus its action.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub text: String,
    #[serde(flatten)]
    pub action: CardAction,
}

impl Card {
    /// Create a card.
    pub fn new(text: impl Into<String>, action: CardAction) -> Self {
        Self {
            text: text.into(),
            action,
        }
    }
}
