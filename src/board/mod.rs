//! The board: 40 tiles on a ring, their pricing, and the deck definitions.
//!
//! - `TileId`: ring index, wrapping after 39
//! - `Tile` / `TileFeature`: a tile and its kind-specific terms
//! - `BoardCatalog`: the validated, immutable board a game is played on
//!
//! A catalog never changes for the lifetime of a game. Engines share it
//! behind an `Arc`.

mod tile;
mod catalog;
pub mod data;

pub use tile::{
    ColorGroup, PropertyTerms, SpaceportTerms, Tile, TileFeature, TileId, TileKind, UtilityTerms,
    BOARD_SIZE,
};
pub use catalog::{
    BoardCatalog, CatalogDef, PricingDef, RentDef, TileDef, SPACEPORT_COUNT, UTILITY_COUNT,
};
