//! Game state: the aggregate root every component mutates.
//!
//! ## GameState
//!
//! - Both seats' `PlayerRecord`s
//! - The `PropertyLedger`
//! - One `ActionQueue` per seat
//! - Both card decks
//! - Station pot, pending purchase offer, movement flag, outcome
//! - Advisory log and command history
//!
//! Uses `im` persistent collections where the state grows during play, so a
//! snapshot for the presentation layer is a cheap clone.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::command::CommandRecord;
use super::config::RulesConfig;
use super::log::GameLog;
use super::player::{PlayerId, PlayerMap, PlayerRecord};
use super::rng::GameRng;
use crate::board::{BoardCatalog, TileId};
use crate::cards::{CardDeck, DeckId};
use crate::economy::GameResult;
use crate::ledger::PropertyLedger;
use crate::queue::ActionQueue;

/// Complete game state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    /// Per-seat finances and position.
    pub players: PlayerMap<PlayerRecord>,

    /// Ownership, mortgage and development per tile.
    pub ledger: PropertyLedger,

    /// Per-seat deferred actions.
    pub queues: PlayerMap<ActionQueue>,

    /// Drawn on Nav Alert tiles.
    pub nav_alert: CardDeck,

    /// Drawn on Mission Control tiles.
    pub mission_control: CardDeck,

    /// Seat that rolled last.
    pub current_player: PlayerId,

    /// Unowned tile the last lander may buy.
    pub pending_purchase: Option<TileId>,

    /// Deep Space Station cache.
    pub pot: i64,

    /// Set once, on bankruptcy.
    pub outcome: Option<GameResult>,

    /// A move is being walked tile by tile.
    pub is_animating_movement: bool,

    /// Advisory messages.
    pub log: GameLog,

    /// Accepted commands, in order.
    pub history: Vector<CommandRecord>,
}

impl GameState {
    /// Create a fresh game, shuffling both decks once.
    #[must_use]
    pub fn new(config: &RulesConfig, catalog: &BoardCatalog, shuffler: &mut GameRng) -> Self {
        Self {
            players: PlayerMap::new(|p| PlayerRecord::new(p.to_string(), config.starting_cash)),
            ledger: PropertyLedger::new(),
            queues: PlayerMap::with_default(),
            nav_alert: CardDeck::shuffled(catalog.deck(DeckId::NavAlert), shuffler),
            mission_control: CardDeck::shuffled(catalog.deck(DeckId::MissionControl), shuffler),
            current_player: PlayerId::new(0),
            pending_purchase: None,
            pot: config.pot_reset,
            outcome: None,
            is_animating_movement: false,
            log: GameLog::new(),
            history: Vector::new(),
        }
    }

    /// Get a seat's record.
    #[must_use]
    pub fn player(&self, player: PlayerId) -> &PlayerRecord {
        &self.players[player]
    }

    /// Get a seat's mutable record.
    pub fn player_mut(&mut self, player: PlayerId) -> &mut PlayerRecord {
        &mut self.players[player]
    }

    /// Get a seat's queue.
    #[must_use]
    pub fn queue(&self, player: PlayerId) -> &ActionQueue {
        &self.queues[player]
    }

    /// Get a deck.
    #[must_use]
    pub fn deck(&self, deck: DeckId) -> &CardDeck {
        match deck {
            DeckId::NavAlert => &self.nav_alert,
            DeckId::MissionControl => &self.mission_control,
        }
    }

    /// Get a mutable deck.
    pub fn deck_mut(&mut self, deck: DeckId) -> &mut CardDeck {
        match deck {
            DeckId::NavAlert => &mut self.nav_alert,
            DeckId::MissionControl => &mut self.mission_control,
        }
    }

    /// Whether bankruptcy has ended the game.
    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.outcome.is_some()
    }

    /// The winning seat, once the game is over.
    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        self.outcome.as_ref().map(|o| o.winner)
    }

    /// Append an advisory message.
    pub fn log(&mut self, message: impl Into<String>) {
        self.log.push(message);
    }

    /// Record an accepted command.
    pub fn record(&mut self, command: super::Command) {
        let sequence = self.history.len() as u32;
        self.history.push_back(CommandRecord::new(sequence, command));
    }
}
