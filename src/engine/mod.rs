//! The turn engine: one game, its dice, and the command surface.
//!
//! `Engine` owns a [`GameState`] and is the only way commands reach it.
//! Every command either applies fully or is rejected with a
//! [`CommandError`]; a rejection changes nothing but the advisory log.
//!
//! ## Notifications
//!
//! Subscribers receive an [`EngineEvent`] after every accepted or rejected
//! command, for each tile a token moves through, and when a token lands.
//!
//! ## Movement staging
//!
//! With `RulesConfig::staged_movement` off, a roll walks the whole path
//! before returning. With it on, the roll only starts the move and the
//! caller advances it with [`Engine::step_movement`] at its own pace. While
//! a move is in progress no seat may roll or confirm.
//!
//! ## Example
//!
//! ```
//! use spaceopoly::core::PlayerId;
//! use spaceopoly::engine::{Engine, ScriptedDice};
//!
//! let p0 = PlayerId::new(0);
//! let mut engine = Engine::builder()
//!     .dice(ScriptedDice::from_pairs([(2, 4)]))
//!     .build()
//!     .unwrap();
//!
//! engine.roll_for_player(p0).unwrap();
//! assert_eq!(engine.state().pending_purchase.map(|t| t.index()), Some(6));
//!
//! engine.buy_pending_property(p0).unwrap();
//! assert_eq!(engine.state().player(p0).cash, 1400);
//! ```

mod dice;
mod events;
mod landing;
mod manual;
mod movement;
mod queries;
mod resolve;
mod turn;

pub use dice::{DiceRoll, DiceRoller, ScriptedDice};
pub use events::{EngineEvent, MovementStep, RollOutcome};
pub use movement::Movement;

use std::sync::Arc;

use crate::board::{BoardCatalog, TileId, TileKind};
use crate::core::{Command, GameRng, GameState, PlayerId, RulesConfig};
use crate::error::{CommandError, ConfigError};

type Observer = Box<dyn FnMut(&EngineEvent)>;

/// A running game.
pub struct Engine {
    config: RulesConfig,
    catalog: Arc<BoardCatalog>,
    state: GameState,
    dice: Box<dyn DiceRoller>,
    shuffler: GameRng,
    movement: Option<Movement>,
    observers: Vec<Observer>,
}

impl std::fmt::Debug for Engine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Engine")
            .field("config", &self.config)
            .field("state", &self.state)
            .field("movement", &self.movement)
            .field("observers", &self.observers.len())
            .finish_non_exhaustive()
    }
}

/// Builder for an [`Engine`].
pub struct EngineBuilder {
    seed: u64,
    config: RulesConfig,
    catalog: Option<Arc<BoardCatalog>>,
    dice: Option<Box<dyn DiceRoller>>,
}

impl Default for EngineBuilder {
    fn default() -> Self {
        Self {
            seed: 0,
            config: RulesConfig::default(),
            catalog: None,
            dice: None,
        }
    }
}

impl EngineBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed for deck shuffles, and for dice unless `dice` is set.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn config(mut self, config: RulesConfig) -> Self {
        self.config = config;
        self
    }

    /// Board to play on. Defaults to the built-in space colony board.
    pub fn catalog(mut self, catalog: Arc<BoardCatalog>) -> Self {
        self.catalog = Some(catalog);
        self
    }

    /// Replace the seeded dice.
    pub fn dice(mut self, dice: impl DiceRoller + 'static) -> Self {
        self.dice = Some(Box::new(dice));
        self
    }

    /// Validate the configuration against the board and start a game.
    pub fn build(self) -> Result<Engine, ConfigError> {
        self.config.validate()?;
        let catalog = self
            .catalog
            .unwrap_or_else(|| Arc::new(BoardCatalog::space_colony()));
        if catalog.tile(self.config.jail_tile).kind() != TileKind::DeepSpace {
            return Err(ConfigError::JailTile(self.config.jail_tile));
        }

        let rng = GameRng::new(self.seed);
        let mut shuffler = rng.for_context("decks");
        let dice = self
            .dice
            .unwrap_or_else(|| Box::new(rng.for_context("dice")));
        let state = GameState::new(&self.config, &catalog, &mut shuffler);

        Ok(Engine {
            config: self.config,
            catalog,
            state,
            dice,
            shuffler,
            movement: None,
            observers: Vec::new(),
        })
    }
}

impl Engine {
    /// Start configuring an engine.
    #[must_use]
    pub fn builder() -> EngineBuilder {
        EngineBuilder::new()
    }

    /// Current state snapshot.
    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    #[must_use]
    pub fn config(&self) -> &RulesConfig {
        &self.config
    }

    #[must_use]
    pub fn catalog(&self) -> &BoardCatalog {
        &self.catalog
    }

    /// Register a callback for every [`EngineEvent`].
    pub fn subscribe(&mut self, observer: impl FnMut(&EngineEvent) + 'static) {
        self.observers.push(Box::new(observer));
    }

    fn emit(&mut self, event: EngineEvent) {
        for observer in &mut self.observers {
            observer(&event);
        }
    }

    /// Run one command: reject it with a log entry, or record it and notify.
    fn run<T>(
        &mut self,
        command: Command,
        op: impl FnOnce(&mut Self) -> Result<T, CommandError>,
    ) -> Result<T, CommandError> {
        let was_over = self.state.is_game_over();
        let result = match command.player() {
            Some(player) if !player.is_seated() => Err(CommandError::InvalidPlayer(player)),
            _ if was_over && command != Command::StartNewGame => Err(CommandError::GameOver),
            _ => op(self),
        };

        match &result {
            Ok(_) => {
                // A fresh game starts with an empty history.
                if command != Command::StartNewGame {
                    self.state.record(command.clone());
                }
                self.emit(EngineEvent::StateChanged { command });
                if let Some(winner) = self.state.winner().filter(|_| !was_over) {
                    self.emit(EngineEvent::GameOver { winner });
                }
            }
            Err(error) => {
                self.state.log(error.to_string());
                self.emit(EngineEvent::Rejected {
                    command,
                    error: error.clone(),
                });
            }
        }
        result
    }

    /// Route any command to its handler.
    pub fn apply(&mut self, command: Command) -> Result<(), CommandError> {
        match command {
            Command::Roll { player } => self.roll_for_player(player).map(drop),
            Command::ConfirmNextAction { player } => self.confirm_next_action(player).map(drop),
            Command::BuyPendingProperty { player } => self.buy_pending_property(player).map(drop),
            Command::PayBail { player } => self.pay_bail(player),
            Command::UseRescueCard { player } => self.use_rescue_card(player),
            Command::Build { player, tile } => self.build(player, tile).map(drop),
            Command::Sell { player, tile } => self.sell(player, tile).map(drop),
            Command::ToggleMortgage { tile } => self.toggle_mortgage(tile).map(drop),
            Command::GiftTile { tile, to } => self.gift_tile(tile, to),
            Command::EndTurn => self.end_turn(),
            Command::GiveCash { from, amount } => self.give_cash(from, amount),
            Command::PayBank { player, amount } => self.pay_bank(player, amount),
            Command::CollectFromBank { player, amount } => self.collect_from_bank(player, amount),
            Command::MovePlayerTo { player, tile } => self.move_player_to(player, tile),
            Command::TeleportPlayer { player, tile } => self.teleport_player(player, tile),
            Command::StartNewGame => {
                self.start_new_game();
                Ok(())
            }
        }
    }

    /// Throw the current game away and deal a new one.
    ///
    /// The state is rebuilt from scratch and both decks are reshuffled. Any
    /// move in progress is dropped.
    pub fn start_new_game(&mut self) {
        let _ = self.run(Command::StartNewGame, |engine| {
            engine.movement = None;
            engine.state = GameState::new(&engine.config, &engine.catalog, &mut engine.shuffler);
            Ok(())
        });
    }

    /// Buy the tile on offer. `player` must have nothing queued.
    pub fn buy_pending_property(&mut self, player: PlayerId) -> Result<TileId, CommandError> {
        self.run(Command::BuyPendingProperty { player }, |engine| {
            engine.require_no_movement()?;
            if !engine.state.queue(player).is_empty() {
                return Err(CommandError::ActionsPending(player));
            }
            let catalog = Arc::clone(&engine.catalog);
            engine.state.buy_pending_property(&catalog, player)
        })
    }

    /// Add one outpost or colony. Returns the new level.
    pub fn build(&mut self, player: PlayerId, tile: TileId) -> Result<u8, CommandError> {
        self.run(Command::Build { player, tile }, |engine| {
            let catalog = Arc::clone(&engine.catalog);
            engine.state.build(&catalog, player, tile)
        })
    }

    /// Remove one outpost or colony. Returns the new level.
    pub fn sell(&mut self, player: PlayerId, tile: TileId) -> Result<u8, CommandError> {
        self.run(Command::Sell { player, tile }, |engine| {
            let catalog = Arc::clone(&engine.catalog);
            engine.state.sell(&catalog, player, tile)
        })
    }

    /// Decommission or recommission a tile. Returns whether it is now
    /// mortgaged.
    pub fn toggle_mortgage(&mut self, tile: TileId) -> Result<bool, CommandError> {
        self.run(Command::ToggleMortgage { tile }, |engine| {
            let catalog = Arc::clone(&engine.catalog);
            engine.state.toggle_mortgage(&catalog, tile)
        })
    }

    /// Hand a tile to a seat without payment.
    pub fn gift_tile(&mut self, tile: TileId, to: PlayerId) -> Result<(), CommandError> {
        self.run(Command::GiftTile { tile, to }, |engine| {
            let catalog = Arc::clone(&engine.catalog);
            engine.state.gift_tile(&catalog, tile, to)
        })
    }

    fn require_no_movement(&self) -> Result<(), CommandError> {
        if self.state.is_animating_movement {
            Err(CommandError::MovementInProgress)
        } else {
            Ok(())
        }
    }
}
