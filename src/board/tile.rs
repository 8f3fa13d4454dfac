//! Tile identifiers and tile descriptions.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Number of tiles on the ring.
pub const BOARD_SIZE: usize = 40;

/// Index of a tile on the ring (0-39).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TileId(pub u8);

impl TileId {
    /// The Launch tile, where every seat starts.
    pub const LAUNCH: TileId = TileId(0);

    /// Create a new tile ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Check that this ID is on the board.
    #[must_use]
    pub const fn is_valid(self) -> bool {
        (self.0 as usize) < BOARD_SIZE
    }

    /// The tile `steps` positions ahead, wrapping after 39.
    #[must_use]
    pub const fn advance(self, steps: u8) -> Self {
        Self(((self.0 as usize + steps as usize) % BOARD_SIZE) as u8)
    }

    /// Every tile visited when moving `steps` positions ahead, in order.
    ///
    /// ```
    /// use spaceopoly::board::TileId;
    ///
    /// let path = TileId::new(38).path(4);
    /// assert_eq!(path.as_slice(), &[TileId::new(39), TileId::new(0), TileId::new(1), TileId::new(2)]);
    /// ```
    #[must_use]
    pub fn path(self, steps: u8) -> SmallVec<[TileId; 12]> {
        (1..=steps).map(|k| self.advance(k)).collect()
    }

    /// Iterate over every tile on the board.
    pub fn all() -> impl Iterator<Item = TileId> {
        (0..BOARD_SIZE as u8).map(TileId)
    }
}

impl std::fmt::Display for TileId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Property color groups.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ColorGroup {
    Brown,
    LightBlue,
    Pink,
    Orange,
    Red,
    Yellow,
    Green,
    DarkBlue,
}

/// Tile categories.
///
/// This is the fieldless form used in catalog definitions; resolved tiles
/// carry their terms in [`TileFeature`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TileKind {
    Launch,
    Property,
    Spaceport,
    Utility,
    Tax,
    MissionControl,
    NavAlert,
    DeepSpace,
    DeepSpaceStation,
    LostInSpace,
}

impl TileKind {
    /// Whether tiles of this kind can be bought and owned.
    #[must_use]
    pub const fn is_purchasable(self) -> bool {
        matches!(self, TileKind::Property | TileKind::Spaceport | TileKind::Utility)
    }
}

/// Pricing and rent terms of a colony site.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyTerms {
    pub group: ColorGroup,
    pub purchase_price: i64,
    pub mortgage_value: i64,
    pub base_rent: i64,
    /// Rent with 1-4 outposts.
    pub rent_by_development: [i64; 4],
    /// Rent per colony.
    pub hotel_rent: i64,
    /// Cost of each outpost, and one fifth of each colony after the first.
    pub development_cost: i64,
    /// Cost of the first colony.
    pub hotel_cost: i64,
}

/// Pricing and fee terms of a spaceport.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpaceportTerms {
    pub purchase_price: i64,
    pub mortgage_value: i64,
    /// Fee when the owner holds 1-4 unmortgaged spaceports.
    pub rent_by_spaceports_owned: [i64; 4],
}

/// Pricing of a utility. The fee itself is dice-driven.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UtilityTerms {
    pub purchase_price: i64,
    pub mortgage_value: i64,
}

/// What a tile is, with its kind-specific terms.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TileFeature {
    Launch,
    Property(PropertyTerms),
    Spaceport(SpaceportTerms),
    Utility(UtilityTerms),
    Tax { cost: i64 },
    MissionControl,
    NavAlert,
    DeepSpace,
    DeepSpaceStation,
    LostInSpace,
}

/// A resolved board tile.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tile {
    pub name: String,
    pub feature: TileFeature,
}

impl Tile {
    /// The fieldless kind of this tile.
    #[must_use]
    pub fn kind(&self) -> TileKind {
        match self.feature {
            TileFeature::Launch => TileKind::Launch,
            TileFeature::Property(_) => TileKind::Property,
            TileFeature::Spaceport(_) => TileKind::Spaceport,
            TileFeature::Utility(_) => TileKind::Utility,
            TileFeature::Tax { .. } => TileKind::Tax,
            TileFeature::MissionControl => TileKind::MissionControl,
            TileFeature::NavAlert => TileKind::NavAlert,
            TileFeature::DeepSpace => TileKind::DeepSpace,
            TileFeature::DeepSpaceStation => TileKind::DeepSpaceStation,
            TileFeature::LostInSpace => TileKind::LostInSpace,
        }
    }

    /// Purchase price, for ownable tiles.
    #[must_use]
    pub fn purchase_price(&self) -> Option<i64> {
        match &self.feature {
            TileFeature::Property(t) => Some(t.purchase_price),
            TileFeature::Spaceport(t) => Some(t.purchase_price),
            TileFeature::Utility(t) => Some(t.purchase_price),
            _ => None,
        }
    }

    /// Mortgage value, for ownable tiles.
    #[must_use]
    pub fn mortgage_value(&self) -> Option<i64> {
        match &self.feature {
            TileFeature::Property(t) => Some(t.mortgage_value),
            TileFeature::Spaceport(t) => Some(t.mortgage_value),
            TileFeature::Utility(t) => Some(t.mortgage_value),
            _ => None,
        }
    }

    /// Property terms, if this is a colony site.
    #[must_use]
    pub fn property(&self) -> Option<&PropertyTerms> {
        match &self.feature {
            TileFeature::Property(t) => Some(t),
            _ => None,
        }
    }

    /// Color group, if this is a colony site.
    #[must_use]
    pub fn group(&self) -> Option<ColorGroup> {
        self.property().map(|t| t.group)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_advance_wraps() {
        assert_eq!(TileId::new(0).advance(7), TileId::new(7));
        assert_eq!(TileId::new(39).advance(1), TileId::new(0));
        assert_eq!(TileId::new(35).advance(12), TileId::new(7));
    }

    #[test]
    fn test_all_walks_the_ring() {
        let tiles: Vec<_> = TileId::all().collect();

        assert_eq!(tiles.len(), BOARD_SIZE);
        assert_eq!(tiles.first(), Some(&TileId::LAUNCH));
        assert!(tiles.iter().all(|t| t.is_valid()));
        assert!(!TileId::new(40).is_valid());
    }

    #[test]
    fn test_path_length() {
        let path = TileId::new(10).path(12);
        assert_eq!(path.len(), 12);
        assert_eq!(path[0], TileId::new(11));
        assert_eq!(path[11], TileId::new(22));
        assert!(TileId::new(10).path(0).is_empty());
    }

    #[test]
    fn test_kind_purchasable() {
        assert!(TileKind::Property.is_purchasable());
        assert!(TileKind::Spaceport.is_purchasable());
        assert!(TileKind::Utility.is_purchasable());
        assert!(!TileKind::Tax.is_purchasable());
        assert!(!TileKind::Launch.is_purchasable());
    }

    #[test]
    fn test_group_serde_names() {
        let json = serde_json::to_string(&ColorGroup::LightBlue).unwrap();
        assert_eq!(json, "\"LIGHT_BLUE\"");
    }
}
