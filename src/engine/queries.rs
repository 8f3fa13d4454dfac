//! Read-only questions a presentation layer asks between commands.
//!
//! Queries take a seated `PlayerId`. Unlike commands they are not routed
//! through the seat check, and an unseated ID panics on the per-seat lookup.

use super::Engine;
use crate::board::TileId;
use crate::core::PlayerId;
use crate::error::CommandError;

impl Engine {
    /// Where a seat stands, e.g. `Position: Deep Space (Lost in Deep Space)`.
    ///
    /// Panics if `player` is not seated.
    #[must_use]
    pub fn player_status(&self, player: PlayerId) -> String {
        let record = self.state.player(player);
        let tile = &self.catalog.tile(record.position).name;
        let suffix = if record.in_jail {
            " (Lost in Deep Space)"
        } else if record.position == self.config.jail_tile {
            " (Exploring Deep Space)"
        } else {
            ""
        };
        format!("Position: {}{}", tile, suffix)
    }

    #[must_use]
    pub fn can_roll(&self, player: PlayerId) -> bool {
        !self.state.is_game_over()
            && !self.state.is_animating_movement
            && self.state.queue(player).is_empty()
    }

    /// An offer is open on a tile nobody owns and `player` has nothing queued.
    #[must_use]
    pub fn can_buy(&self, player: PlayerId) -> bool {
        self.can_roll(player)
            && self
                .state
                .pending_purchase
                .is_some_and(|tile| self.state.ledger.owner(tile).is_none())
    }

    #[must_use]
    pub fn can_pay_bail(&self, player: PlayerId) -> bool {
        !self.state.is_game_over() && self.state.player(player).in_jail
    }

    #[must_use]
    pub fn can_use_rescue_card(&self, player: PlayerId) -> bool {
        self.can_pay_bail(player) && self.state.player(player).rescue_cards > 0
    }

    /// Label of the entry the next confirmation will run.
    #[must_use]
    pub fn next_action(&self, player: PlayerId) -> Option<&str> {
        self.state.queue(player).peek().map(|a| a.label.as_str())
    }

    /// Price of the next level on `tile`, if `player` may build there.
    pub fn build_cost(&self, player: PlayerId, tile: TileId) -> Result<i64, CommandError> {
        self.state.check_build(&self.catalog, player, tile)
    }

    /// Refund for removing a level from `tile`, if `player` may sell there.
    pub fn sell_refund(&self, player: PlayerId, tile: TileId) -> Result<i64, CommandError> {
        self.state.check_sell(&self.catalog, player, tile)
    }

    /// Building is allowed and affordable.
    #[must_use]
    pub fn can_build(&self, player: PlayerId, tile: TileId) -> bool {
        !self.state.is_game_over()
            && self
                .build_cost(player, tile)
                .is_ok_and(|cost| cost <= self.state.player(player).cash)
    }

    #[must_use]
    pub fn can_sell(&self, player: PlayerId, tile: TileId) -> bool {
        !self.state.is_game_over() && self.sell_refund(player, tile).is_ok()
    }
}
