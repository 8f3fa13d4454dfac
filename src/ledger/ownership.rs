//! Purchase, mortgage and gift.

use crate::board::{BoardCatalog, Tile, TileId};
use crate::core::{money, GameState, PlayerId};
use crate::error::CommandError;

fn ownable(catalog: &BoardCatalog, tile: TileId) -> Result<&Tile, CommandError> {
    let found = catalog.get(tile).ok_or(CommandError::InvalidTile(tile))?;
    if found.kind().is_purchasable() {
        Ok(found)
    } else {
        Err(CommandError::NotPurchasable(tile))
    }
}

impl GameState {
    fn assign(&mut self, tile: TileId, to: PlayerId) {
        if let Some(previous) = self.ledger.owner(tile) {
            self.player_mut(previous).owned_tiles.remove(&tile);
        }
        self.ledger.holding_mut(tile).owner = Some(to);
        self.player_mut(to).owned_tiles.insert(tile);
    }

    /// Buy the tile on offer at its list price.
    pub fn buy_pending_property(
        &mut self,
        catalog: &BoardCatalog,
        player: PlayerId,
    ) -> Result<TileId, CommandError> {
        let tile = self.pending_purchase.ok_or(CommandError::NoPendingOffer)?;
        let found = ownable(catalog, tile)?;
        if self.ledger.owner(tile).is_some() {
            return Err(CommandError::AlreadyOwned(tile));
        }
        let price = found.purchase_price().unwrap_or_default();
        let available = self.player(player).cash;
        if available < price {
            return Err(CommandError::InsufficientCash {
                needed: price,
                available,
            });
        }

        self.player_mut(player).cash -= price;
        self.assign(tile, player);
        self.pending_purchase = None;

        let message = format!(
            "{} bought {} for {}.",
            self.player(player).name,
            found.name,
            money(price)
        );
        self.log(message);
        Ok(tile)
    }

    /// Decommission an owned tile for its mortgage value, or recommission it
    /// by paying that value back. Returns whether the tile is now mortgaged.
    pub fn toggle_mortgage(
        &mut self,
        catalog: &BoardCatalog,
        tile: TileId,
    ) -> Result<bool, CommandError> {
        let found = ownable(catalog, tile)?;
        let owner = self.ledger.owner(tile).ok_or(CommandError::Unowned(tile))?;
        let value = found.mortgage_value().unwrap_or_default();

        if self.ledger.is_mortgaged(tile) {
            let available = self.player(owner).cash;
            if available < value {
                return Err(CommandError::InsufficientCash {
                    needed: value,
                    available,
                });
            }
            self.pay(owner, value, "recommission");
            self.ledger.holding_mut(tile).mortgaged = false;
            Ok(false)
        } else {
            if self.ledger.development(tile) > 0 {
                return Err(CommandError::Developed(tile));
            }
            self.player_mut(owner).cash += value;
            self.ledger.holding_mut(tile).mortgaged = true;
            let message = format!(
                "{} decommissioned {} for {}.",
                self.player(owner).name,
                found.name,
                money(value)
            );
            self.log(message);
            Ok(true)
        }
    }

    /// Hand a tile to a seat without payment.
    ///
    /// Unowned tiles are assigned outright. Mortgage and development travel
    /// with the tile.
    pub fn gift_tile(
        &mut self,
        catalog: &BoardCatalog,
        tile: TileId,
        to: PlayerId,
    ) -> Result<(), CommandError> {
        if !to.is_seated() {
            return Err(CommandError::InvalidPlayer(to));
        }
        let name = ownable(catalog, tile)?.name.clone();

        let message = match self.ledger.owner(tile) {
            Some(owner) if owner == to => return Err(CommandError::AlreadyOwned(tile)),
            Some(owner) => format!(
                "{} gave {} to {}.",
                self.player(owner).name,
                name,
                self.player(to).name
            ),
            None => format!("{} was given {}.", self.player(to).name, name),
        };
        self.assign(tile, to);
        self.log(message);
        Ok(())
    }
}
