//! Outposts and colonies: build and sell.
//!
//! Levels move one step at a time. Even building across a group is not
//! enforced.

use super::holdings::COLONY_LEVEL;
use crate::board::{BoardCatalog, PropertyTerms, TileId};
use crate::core::{money, GameState, PlayerId};
use crate::error::CommandError;

/// Cost of raising a site from `level` to `level + 1`.
///
/// Outposts cost the flat development cost, the first colony costs the
/// colony price, and every further colony five times the development cost.
#[must_use]
pub fn build_cost(terms: &PropertyTerms, level: u8) -> i64 {
    if level < COLONY_LEVEL - 1 {
        terms.development_cost
    } else if level == COLONY_LEVEL - 1 {
        terms.hotel_cost
    } else {
        5 * terms.development_cost
    }
}

/// Refund for lowering a site from `level` to `level - 1`: half of what that
/// step cost, rounded down. Zero at level 0.
#[must_use]
pub fn sell_refund(terms: &PropertyTerms, level: u8) -> i64 {
    if level == 0 {
        return 0;
    }
    build_cost(terms, level - 1) / 2
}

fn site<'a>(catalog: &'a BoardCatalog, tile: TileId) -> Result<&'a PropertyTerms, CommandError> {
    catalog
        .get(tile)
        .ok_or(CommandError::InvalidTile(tile))?
        .property()
        .ok_or(CommandError::NotAProperty(tile))
}

impl GameState {
    /// Check that `player` may build on `tile` and return the cost.
    ///
    /// Cash is not checked here.
    pub fn check_build(
        &self,
        catalog: &BoardCatalog,
        player: PlayerId,
        tile: TileId,
    ) -> Result<i64, CommandError> {
        let terms = site(catalog, tile)?;
        let holding = self.ledger.holding(tile);
        if holding.owner != Some(player) {
            return Err(CommandError::NotOwner { player, tile });
        }
        if holding.mortgaged {
            return Err(CommandError::Mortgaged(tile));
        }
        let group = catalog.group(terms.group);
        if !self.ledger.owns_all(group, player) || group.iter().any(|&t| self.ledger.is_mortgaged(t)) {
            return Err(CommandError::NoMonopoly(tile));
        }
        if holding.development == u8::MAX {
            return Err(CommandError::DevelopmentCapped(tile));
        }
        Ok(build_cost(terms, holding.development))
    }

    /// Check that `player` may sell on `tile` and return the refund.
    pub fn check_sell(
        &self,
        catalog: &BoardCatalog,
        player: PlayerId,
        tile: TileId,
    ) -> Result<i64, CommandError> {
        let terms = site(catalog, tile)?;
        let holding = self.ledger.holding(tile);
        if holding.owner != Some(player) {
            return Err(CommandError::NotOwner { player, tile });
        }
        if holding.development == 0 {
            return Err(CommandError::NoDevelopment(tile));
        }
        Ok(sell_refund(terms, holding.development))
    }

    /// Raise a site by one level. Returns the new level.
    pub fn build(
        &mut self,
        catalog: &BoardCatalog,
        player: PlayerId,
        tile: TileId,
    ) -> Result<u8, CommandError> {
        let cost = self.check_build(catalog, player, tile)?;
        let available = self.player(player).cash;
        if available < cost {
            return Err(CommandError::InsufficientCash {
                needed: cost,
                available,
            });
        }

        let level = self.ledger.development(tile);
        let (reason, what) = match level {
            l if l < COLONY_LEVEL - 1 => ("build outpost", "an outpost"),
            l if l == COLONY_LEVEL - 1 => ("build colony", "a colony"),
            _ => ("build outpost", "another colony"),
        };
        self.pay(player, cost, reason);
        self.ledger.holding_mut(tile).development = level + 1;

        let message = format!(
            "{} built {} on {}.",
            self.player(player).name,
            what,
            catalog.tile(tile).name
        );
        self.log(message);
        Ok(level + 1)
    }

    /// Lower a site by one level, refunding half the step's cost. Returns
    /// the new level.
    pub fn sell(
        &mut self,
        catalog: &BoardCatalog,
        player: PlayerId,
        tile: TileId,
    ) -> Result<u8, CommandError> {
        let refund = self.check_sell(catalog, player, tile)?;
        let level = self.ledger.development(tile);

        self.player_mut(player).cash += refund;
        self.ledger.holding_mut(tile).development = level - 1;

        let what = if level >= COLONY_LEVEL { "a colony" } else { "an outpost" };
        let message = format!(
            "{} sold {} on {} for {}.",
            self.player(player).name,
            what,
            catalog.tile(tile).name,
            money(refund)
        );
        self.log(message);
        Ok(level - 1)
    }
}
