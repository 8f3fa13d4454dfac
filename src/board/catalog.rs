//! Board catalog: the immutable description of the 40 tiles, their pricing,
//! and the two deck definitions.
//!
//! Catalogs are built from a [`CatalogDef`], the load-time form that mirrors
//! how the board is authored: a tile layout plus a pricing table keyed by tile
//! name. Building resolves every ownable tile against the pricing table and
//! validates the shape of the board once, so rules code can trust it.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::tile::{
    ColorGroup, PropertyTerms, SpaceportTerms, Tile, TileFeature, TileId, TileKind, UtilityTerms,
    BOARD_SIZE,
};
use crate::cards::{Card, CardAction, DeckId};
use crate::error::CatalogError;

/// Spaceports on a well-formed board.
pub const SPACEPORT_COUNT: usize = 4;

/// Utilities on a well-formed board.
pub const UTILITY_COUNT: usize = 2;

/// One tile of the layout.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TileDef {
    pub kind: TileKind,
    pub name: String,
    /// Color group, for properties.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group: Option<ColorGroup>,
    /// Flat cost, for tax tiles.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cost: Option<i64>,
}

/// Rent table of a pricing entry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RentDef {
    Property {
        base: i64,
        development: [i64; 4],
        hotel: i64,
    },
    Spaceport {
        by_spaceports_owned: [i64; 4],
    },
}

/// Pricing of one ownable tile, matched to the layout by name.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricingDef {
    pub name: String,
    pub purchase_price: i64,
    pub mortgage_value: i64,
    /// Absent for utilities.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rent: Option<RentDef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub development_cost: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hotel_cost: Option<i64>,
}

/// Load-time catalog definition.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogDef {
    pub tiles: Vec<TileDef>,
    pub pricing: Vec<PricingDef>,
    pub nav_alert: Vec<Card>,
    pub mission_control: Vec<Card>,
}

/// The resolved, validated board.
#[derive(Clone, Debug)]
pub struct BoardCatalog {
    tiles: Vec<Tile>,
    groups: FxHashMap<ColorGroup, SmallVec<[TileId; 3]>>,
    spaceports: SmallVec<[TileId; SPACEPORT_COUNT]>,
    utilities: SmallVec<[TileId; UTILITY_COUNT]>,
    nav_alert: Vec<Card>,
    mission_control: Vec<Card>,
}

impl BoardCatalog {
    /// The built-in space colony board.
    #[must_use]
    pub fn space_colony() -> Self {
        Self::from_def(super::data::space_colony())
            .expect("built-in space colony catalog is well-formed")
    }

    /// Parse and validate a catalog from JSON.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let def: CatalogDef = serde_json::from_str(json)?;
        Self::from_def(def)
    }

    /// Resolve and validate a catalog definition.
    pub fn from_def(def: CatalogDef) -> Result<Self, CatalogError> {
        if def.tiles.len() != BOARD_SIZE {
            return Err(CatalogError::TileCount {
                expected: BOARD_SIZE,
                found: def.tiles.len(),
            });
        }
        if def.tiles[0].kind != TileKind::Launch {
            return Err(CatalogError::MissingLaunch);
        }

        let pricing: FxHashMap<&str, &PricingDef> =
            def.pricing.iter().map(|p| (p.name.as_str(), p)).collect();

        let mut tiles = Vec::with_capacity(BOARD_SIZE);
        let mut groups: FxHashMap<ColorGroup, SmallVec<[TileId; 3]>> = FxHashMap::default();
        let mut spaceports = SmallVec::new();
        let mut utilities = SmallVec::new();

        for (idx, tile_def) in def.tiles.iter().enumerate() {
            let id = TileId::new(idx as u8);
            let feature = resolve_feature(tile_def, &pricing)?;

            match &feature {
                TileFeature::Property(terms) => groups.entry(terms.group).or_default().push(id),
                TileFeature::Spaceport(_) => spaceports.push(id),
                TileFeature::Utility(_) => utilities.push(id),
                _ => {}
            }

            tiles.push(Tile {
                name: tile_def.name.clone(),
                feature,
            });
        }

        if spaceports.len() != SPACEPORT_COUNT {
            return Err(CatalogError::KindCount {
                kind: "spaceport",
                expected: SPACEPORT_COUNT,
                found: spaceports.len(),
            });
        }
        if utilities.len() != UTILITY_COUNT {
            return Err(CatalogError::KindCount {
                kind: "utility",
                expected: UTILITY_COUNT,
                found: utilities.len(),
            });
        }

        for deck in DeckId::ALL {
            let cards = match deck {
                DeckId::NavAlert => &def.nav_alert,
                DeckId::MissionControl => &def.mission_control,
            };
            if cards.is_empty() {
                return Err(CatalogError::EmptyDeck(deck.name()));
            }
            for card in cards {
                if let CardAction::MoveTo { tile } = card.action {
                    if !tile.is_valid() {
                        return Err(CatalogError::CardTarget(tile.0));
                    }
                }
            }
        }

        Ok(Self {
            tiles,
            groups,
            spaceports,
            utilities,
            nav_alert: def.nav_alert,
            mission_control: def.mission_control,
        })
    }

    /// Get a tile. Panics if the ID is off the board.
    #[must_use]
    pub fn tile(&self, id: TileId) -> &Tile {
        &self.tiles[id.index()]
    }

    /// Get a tile if the ID is on the board.
    #[must_use]
    pub fn get(&self, id: TileId) -> Option<&Tile> {
        self.tiles.get(id.index())
    }

    /// Iterate over (TileId, &Tile) pairs in board order.
    pub fn tiles(&self) -> impl Iterator<Item = (TileId, &Tile)> {
        TileId::all().zip(self.tiles.iter())
    }

    /// Every tile in a color group.
    #[must_use]
    pub fn group(&self, group: ColorGroup) -> &[TileId] {
        self.groups
            .get(&group)
            .map_or(&[][..], |tiles| tiles.as_slice())
    }

    /// The spaceport tiles.
    #[must_use]
    pub fn spaceports(&self) -> &[TileId] {
        &self.spaceports
    }

    /// The utility tiles.
    #[must_use]
    pub fn utilities(&self) -> &[TileId] {
        &self.utilities
    }

    /// A deck definition, in authored order.
    #[must_use]
    pub fn deck(&self, deck: DeckId) -> &[Card] {
        match deck {
            DeckId::NavAlert => &self.nav_alert,
            DeckId::MissionControl => &self.mission_control,
        }
    }
}

fn resolve_feature(
    tile: &TileDef,
    pricing: &FxHashMap<&str, &PricingDef>,
) -> Result<TileFeature, CatalogError> {
    let priced = || {
        pricing
            .get(tile.name.as_str())
            .copied()
            .ok_or_else(|| CatalogError::MissingPricing(tile.name.clone()))
    };
    let mismatch = || CatalogError::PricingMismatch(tile.name.clone());

    let feature = match tile.kind {
        TileKind::Launch => TileFeature::Launch,
        TileKind::MissionControl => TileFeature::MissionControl,
        TileKind::NavAlert => TileFeature::NavAlert,
        TileKind::DeepSpace => TileFeature::DeepSpace,
        TileKind::DeepSpaceStation => TileFeature::DeepSpaceStation,
        TileKind::LostInSpace => TileFeature::LostInSpace,
        TileKind::Tax => TileFeature::Tax {
            cost: tile
                .cost
                .ok_or_else(|| CatalogError::MissingPricing(tile.name.clone()))?,
        },
        TileKind::Property => {
            let group = tile
                .group
                .ok_or_else(|| CatalogError::MissingGroup(tile.name.clone()))?;
            let p = priced()?;
            let Some(RentDef::Property {
                base,
                development,
                hotel,
            }) = p.rent
            else {
                return Err(mismatch());
            };
            let (Some(development_cost), Some(hotel_cost)) = (p.development_cost, p.hotel_cost)
            else {
                return Err(mismatch());
            };
            TileFeature::Property(PropertyTerms {
                group,
                purchase_price: p.purchase_price,
                mortgage_value: p.mortgage_value,
                base_rent: base,
                rent_by_development: development,
                hotel_rent: hotel,
                development_cost,
                hotel_cost,
            })
        }
        TileKind::Spaceport => {
            let p = priced()?;
            let Some(RentDef::Spaceport { by_spaceports_owned }) = p.rent else {
                return Err(mismatch());
            };
            TileFeature::Spaceport(SpaceportTerms {
                purchase_price: p.purchase_price,
                mortgage_value: p.mortgage_value,
                rent_by_spaceports_owned: by_spaceports_owned,
            })
        }
        TileKind::Utility => {
            let p = priced()?;
            if p.rent.is_some() {
                return Err(mismatch());
            }
            TileFeature::Utility(UtilityTerms {
                purchase_price: p.purchase_price,
                mortgage_value: p.mortgage_value,
            })
        }
    };

    Ok(feature)
}
