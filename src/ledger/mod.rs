//! Property ledger: who owns what, and what it earns.
//!
//! - `holdings`: per-tile owner, mortgage flag, development level
//! - `rent`: rent tables for sites and spaceports, utility multipliers
//! - `development`: build and sell outposts and colonies
//! - `ownership`: purchase, mortgage toggle, gift
//!
//! Mutating rules are methods on [`crate::core::GameState`] so they can keep
//! the ledger and each seat's `owned_tiles` in step.

mod holdings;
mod rent;
mod development;
mod ownership;

pub use holdings::{Holding, PropertyLedger, COLONY_LEVEL};
pub use development::{build_cost, sell_refund};
