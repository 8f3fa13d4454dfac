//! Tile-by-tile movement.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::events::{EngineEvent, MovementStep};
use super::Engine;
use crate::board::{TileId, BOARD_SIZE};
use crate::core::{money, Command, PlayerId};
use crate::error::CommandError;
use crate::queue::Effect;

/// A move in progress: the tiles still to walk.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Movement {
    player: PlayerId,
    path: SmallVec<[TileId; 12]>,
    taken: usize,
}

impl Movement {
    /// Walk `steps` tiles forward from `start`.
    #[must_use]
    pub fn new(player: PlayerId, start: TileId, steps: u8) -> Self {
        Self {
            player,
            path: start.path(steps),
            taken: 0,
        }
    }

    #[must_use]
    pub fn player(&self) -> PlayerId {
        self.player
    }

    /// Tiles not yet walked.
    #[must_use]
    pub fn remaining(&self) -> &[TileId] {
        &self.path[self.taken..]
    }

    /// The tile the move ends on.
    #[must_use]
    pub fn destination(&self) -> Option<TileId> {
        self.path.last().copied()
    }
}

impl Iterator for Movement {
    type Item = TileId;

    fn next(&mut self) -> Option<TileId> {
        let tile = self.path.get(self.taken).copied()?;
        self.taken += 1;
        Some(tile)
    }
}

impl Engine {
    /// Start moving `player` forward by `steps`.
    ///
    /// Queues the pass-Launch bonus once if the move reaches or wraps past
    /// tile 0. Unless staging is on, the whole path is walked before return.
    pub(crate) fn move_by(&mut self, player: PlayerId, steps: u8) {
        let start = self.state.player(player).position;
        if start.index() + usize::from(steps) >= BOARD_SIZE {
            let bonus = self.config.pass_launch_bonus;
            self.state.queues[player].enqueue(
                format!("Receive {}", money(bonus)),
                Effect::receive(bonus, "passing Launch"),
            );
        }

        if steps == 0 {
            self.land(player);
            return;
        }

        self.movement = Some(Movement::new(player, start, steps));
        self.state.is_animating_movement = true;
        if !self.config.staged_movement {
            self.finish_movement();
        }
    }

    /// Advance the move in progress by one tile.
    ///
    /// On the last tile the move ends and the landing is resolved. Returns
    /// `None` when nothing is moving.
    pub fn step_movement(&mut self) -> Option<MovementStep> {
        let movement = self.movement.as_mut()?;
        let player = movement.player();
        let to = movement.next()?;
        let remaining = movement.remaining().len();

        let from = self.state.player(player).position;
        self.state.player_mut(player).position = to;
        let step = MovementStep {
            player,
            from,
            to,
            remaining,
        };
        self.emit(EngineEvent::Moved(step));

        if step.is_last() {
            self.movement = None;
            self.state.is_animating_movement = false;
            self.land(player);
        }
        Some(step)
    }

    /// Walk whatever is left of the move in progress.
    pub fn finish_movement(&mut self) -> Vec<MovementStep> {
        std::iter::from_fn(|| self.step_movement()).collect()
    }

    /// The move in progress, if any.
    #[must_use]
    pub fn movement(&self) -> Option<&Movement> {
        self.movement.as_ref()
    }

    /// Put a token on `tile` and resolve landing there, without walking
    /// or paying the pass-Launch bonus.
    pub fn move_player_to(&mut self, player: PlayerId, tile: TileId) -> Result<(), CommandError> {
        self.run(Command::MovePlayerTo { player, tile }, |engine| {
            engine.place(player, tile)?;
            engine.land(player);
            Ok(())
        })
    }

    /// Put a token on `tile` without resolving anything.
    pub fn teleport_player(&mut self, player: PlayerId, tile: TileId) -> Result<(), CommandError> {
        self.run(Command::TeleportPlayer { player, tile }, |engine| {
            engine.place(player, tile)
        })
    }

    fn place(&mut self, player: PlayerId, tile: TileId) -> Result<(), CommandError> {
        if !tile.is_valid() {
            return Err(CommandError::InvalidTile(tile));
        }
        self.require_no_movement()?;
        self.state.player_mut(player).position = tile;
        Ok(())
    }
}
