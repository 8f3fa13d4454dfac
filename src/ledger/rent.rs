//! Rent tables.

use super::holdings::{PropertyLedger, COLONY_LEVEL};
use crate::board::{BoardCatalog, TileFeature, TileId};
use crate::core::{PlayerId, RulesConfig};

impl PropertyLedger {
    /// Rent `owner` charges on `tile`, for colony sites and spaceports.
    ///
    /// Returns `None` for utilities (their fee needs a fresh dice roll, see
    /// [`PropertyLedger::utility_multiplier`]) and for tiles that carry no
    /// rent at all.
    ///
    /// ## Rules
    ///
    /// - Colony site, level 0: base rent, doubled if `owner` holds the whole group
    /// - Level 1-4: the outpost table, monopoly bonus does not stack
    /// - Level 5+: colony rent scaled by `level - 4`
    /// - Spaceport: table indexed by `owner`'s unmortgaged spaceports, at most 4
    #[must_use]
    pub fn rent(&self, catalog: &BoardCatalog, tile: TileId, owner: PlayerId) -> Option<i64> {
        match &catalog.get(tile)?.feature {
            TileFeature::Property(terms) => {
                let level = self.development(tile);
                let rent = if level >= COLONY_LEVEL {
                    terms.hotel_rent * i64::from(level - (COLONY_LEVEL - 1))
                } else if level >= 1 {
                    terms.rent_by_development[usize::from(level - 1)]
                } else if self.owns_all(catalog.group(terms.group), owner) {
                    terms.base_rent * 2
                } else {
                    terms.base_rent
                };
                Some(rent)
            }
            TileFeature::Spaceport(terms) => {
                let active = self.count_active(catalog.spaceports(), owner).min(4);
                Some(
                    active
                        .checked_sub(1)
                        .map_or(0, |i| terms.rent_by_spaceports_owned[i]),
                )
            }
            _ => None,
        }
    }

    /// Dice multiplier for a service fee owed to `owner`.
    #[must_use]
    pub fn utility_multiplier(
        &self,
        catalog: &BoardCatalog,
        config: &RulesConfig,
        owner: PlayerId,
    ) -> i64 {
        if self.count_active(catalog.utilities(), owner) >= 2 {
            config.utility_pair_multiplier
        } else {
            config.utility_multiplier
        }
    }
}
