//! Ownership, mortgage and development records, indexed by tile.

use serde::{Deserialize, Serialize};

use crate::board::{TileId, BOARD_SIZE};
use crate::core::PlayerId;

/// The ledger entry of one tile.
///
/// Invariant: `development > 0` implies an owner and no mortgage.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Holding {
    pub owner: Option<PlayerId>,
    pub mortgaged: bool,
    /// 0 = none, 1-4 = outposts, 5+ = colonies.
    pub development: u8,
}

/// Development level of the first colony.
pub const COLONY_LEVEL: u8 = 5;

/// Per-tile ownership state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyLedger {
    holdings: Vec<Holding>,
}

impl Default for PropertyLedger {
    fn default() -> Self {
        Self::new()
    }
}

impl PropertyLedger {
    /// Create a ledger with every tile unowned.
    #[must_use]
    pub fn new() -> Self {
        Self {
            holdings: vec![Holding::default(); BOARD_SIZE],
        }
    }

    /// Get a tile's entry. Panics if the ID is off the board.
    #[must_use]
    pub fn holding(&self, tile: TileId) -> &Holding {
        &self.holdings[tile.index()]
    }

    pub(crate) fn holding_mut(&mut self, tile: TileId) -> &mut Holding {
        &mut self.holdings[tile.index()]
    }

    /// Owner of a tile.
    #[must_use]
    pub fn owner(&self, tile: TileId) -> Option<PlayerId> {
        self.holding(tile).owner
    }

    /// Whether a tile is mortgaged.
    #[must_use]
    pub fn is_mortgaged(&self, tile: TileId) -> bool {
        self.holding(tile).mortgaged
    }

    /// Development level of a tile.
    #[must_use]
    pub fn development(&self, tile: TileId) -> u8 {
        self.holding(tile).development
    }

    /// Whether `owner` holds every tile in `tiles`.
    #[must_use]
    pub fn owns_all(&self, tiles: &[TileId], owner: PlayerId) -> bool {
        !tiles.is_empty() && tiles.iter().all(|&t| self.owner(t) == Some(owner))
    }

    /// How many of `tiles` belong to `owner` and are not mortgaged.
    #[must_use]
    pub fn count_active(&self, tiles: &[TileId], owner: PlayerId) -> usize {
        tiles
            .iter()
            .filter(|&&t| self.owner(t) == Some(owner) && !self.is_mortgaged(t))
            .count()
    }

    /// Iterate over (TileId, &Holding) pairs in board order.
    pub fn iter(&self) -> impl Iterator<Item = (TileId, &Holding)> {
        TileId::all().zip(self.holdings.iter())
    }
}
