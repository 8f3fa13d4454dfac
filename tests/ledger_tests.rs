//! Ownership, rent and development integration tests.
//!
//! Tiles are handed out with gifts and tokens placed with teleports so each
//! test exercises one charge from landing through confirmation.

use proptest::prelude::*;

use spaceopoly::board::TileId;
use spaceopoly::core::PlayerId;
use spaceopoly::engine::{Engine, ScriptedDice};
use spaceopoly::error::CommandError;
use spaceopoly::queue::Effect;

const P0: PlayerId = PlayerId::new(0);
const P1: PlayerId = PlayerId::new(1);

const CERES: TileId = TileId::new(11);
const PSYCHE: TileId = TileId::new(13);
const HALLEY: TileId = TileId::new(14);

fn engine_with(pairs: &[(u8, u8)]) -> Engine {
    Engine::builder()
        .dice(ScriptedDice::from_pairs(pairs.iter().copied()))
        .build()
        .unwrap()
}

fn give_pink(engine: &mut Engine, to: PlayerId) {
    for tile in [CERES, PSYCHE, HALLEY] {
        engine.gift_tile(tile, to).unwrap();
    }
}

/// Put `player` on `from` and roll.
fn walk(engine: &mut Engine, player: PlayerId, from: u8) {
    engine.teleport_player(player, TileId::new(from)).unwrap();
    engine.roll_for_player(player).unwrap();
}

// =============================================================================
// Colony Site Rent
// =============================================================================

/// Test that sector control doubles the base rent.
#[test]
fn test_monopoly_rent() {
    let mut engine = engine_with(&[(1, 2)]);
    give_pink(&mut engine, P0);

    walk(&mut engine, P1, 8);

    assert_eq!(
        engine.state().queue(P1).peek().map(|a| &a.effect),
        Some(&Effect::pay_rent(P0, 20, "rent"))
    );

    engine.confirm_next_action(P1).unwrap();

    assert_eq!(engine.state().player(P1).cash, 1480);
    assert_eq!(engine.state().player(P0).cash, 1520);
    assert!(engine.state().queue(P1).is_empty());
}

/// Test that a single site charges base rent.
#[test]
fn test_base_rent_without_monopoly() {
    let mut engine = engine_with(&[(1, 2)]);
    engine.gift_tile(CERES, P0).unwrap();

    walk(&mut engine, P1, 8);
    engine.confirm_next_action(P1).unwrap();

    assert_eq!(engine.state().player(P1).cash, 1490);
}

/// Test rent at each development tier.
#[test]
fn test_developed_rent() {
    let mut engine = engine_with(&[(1, 2), (1, 2)]);
    give_pink(&mut engine, P0);
    engine.build(P0, CERES).unwrap();
    engine.build(P0, CERES).unwrap();
    assert_eq!(engine.state().player(P0).cash, 1300);

    walk(&mut engine, P1, 8);
    engine.confirm_next_action(P1).unwrap();
    assert_eq!(engine.state().player(P1).cash, 1350);

    for _ in 0..3 {
        engine.build(P0, CERES).unwrap();
    }
    assert_eq!(engine.state().ledger.development(CERES), 5);

    walk(&mut engine, P1, 8);
    engine.confirm_next_action(P1).unwrap();
    assert_eq!(engine.state().player(P1).cash, 600);
}

/// Test that landing on a decommissioned site charges nothing.
#[test]
fn test_mortgaged_site_is_free() {
    let mut engine = engine_with(&[(1, 2)]);
    engine.gift_tile(CERES, P0).unwrap();
    assert_eq!(engine.toggle_mortgage(CERES), Ok(true));

    walk(&mut engine, P1, 8);

    assert!(engine.state().queue(P1).is_empty());
    assert_eq!(
        engine.state().log.last().unwrap().message,
        "Site is decommissioned — no rent."
    );
}

/// Test that landing on one's own site does nothing.
#[test]
fn test_own_site() {
    let mut engine = engine_with(&[(1, 2)]);
    engine.gift_tile(CERES, P1).unwrap();

    walk(&mut engine, P1, 8);

    assert!(engine.state().queue(P1).is_empty());
    assert_eq!(engine.state().pending_purchase, None);
    assert_eq!(engine.state().log.last().unwrap().message, "Your own site.");
}

// =============================================================================
// Spaceports and Services
// =============================================================================

/// Test that the spaceport fee follows the count of active spaceports.
#[test]
fn test_spaceport_fee_scales() {
    let mut engine = engine_with(&[(2, 3), (2, 3)]);
    engine.gift_tile(TileId::new(5), P0).unwrap();
    engine.gift_tile(TileId::new(15), P0).unwrap();

    walk(&mut engine, P1, 0);
    assert_eq!(engine.next_action(P1), Some("Pay spaceport fee, $50M"));
    engine.confirm_next_action(P1).unwrap();

    engine.toggle_mortgage(TileId::new(15)).unwrap();
    walk(&mut engine, P1, 0);
    assert_eq!(engine.next_action(P1), Some("Pay spaceport fee, $25M"));
}

/// Test the service fee with one and both services held.
#[test]
fn test_service_fee() {
    let mut engine = engine_with(&[(1, 1), (3, 4), (1, 1), (3, 4)]);
    engine.gift_tile(TileId::new(12), P0).unwrap();

    walk(&mut engine, P1, 10);
    assert_eq!(
        engine.state().queue(P1).peek().map(|a| &a.effect),
        Some(&Effect::UtilityFee { owner: P0 })
    );
    engine.confirm_next_action(P1).unwrap();
    assert_eq!(engine.state().player(P1).cash, 1472);
    assert_eq!(
        engine.state().log.last().unwrap().message,
        "Service fee: rolled 3+4=7 × 4 = $28M."
    );

    engine.gift_tile(TileId::new(28), P0).unwrap();
    walk(&mut engine, P1, 10);
    engine.confirm_next_action(P1).unwrap();
    assert_eq!(engine.state().player(P1).cash, 1402);
    assert_eq!(engine.state().player(P0).cash, 1598);
}

// =============================================================================
// Building and Selling
// =============================================================================

/// Test building and selling across the colony threshold.
#[test]
fn test_build_then_sell_back() {
    let mut engine = engine_with(&[]);
    give_pink(&mut engine, P0);

    assert_eq!(engine.build_cost(P0, CERES), Ok(100));
    for level in 1..=5 {
        assert_eq!(engine.build(P0, CERES), Ok(level));
    }
    assert_eq!(engine.build_cost(P0, CERES), Ok(500));
    assert_eq!(engine.state().player(P0).cash, 1000);

    assert_eq!(engine.sell(P0, CERES), Ok(4));
    assert_eq!(engine.state().player(P0).cash, 1050);
    assert_eq!(
        engine.state().log.last().unwrap().message,
        "Player 1 sold a colony on Ceres for $50M."
    );
}

/// Test that building needs sector control with nothing decommissioned.
#[test]
fn test_build_needs_clear_sector() {
    let mut engine = engine_with(&[]);
    engine.gift_tile(CERES, P0).unwrap();
    engine.gift_tile(PSYCHE, P0).unwrap();

    assert_eq!(engine.build(P0, CERES), Err(CommandError::NoMonopoly(CERES)));

    engine.gift_tile(HALLEY, P0).unwrap();
    engine.toggle_mortgage(HALLEY).unwrap();
    assert_eq!(engine.build(P0, CERES), Err(CommandError::NoMonopoly(CERES)));
    assert_eq!(engine.build(P1, CERES), Err(CommandError::NotOwner { player: P1, tile: CERES }));
    assert_eq!(engine.state().player(P0).cash, 1580);
}

/// Test that a developed site cannot be decommissioned.
#[test]
fn test_mortgage_blocked_by_development() {
    let mut engine = engine_with(&[]);
    give_pink(&mut engine, P0);
    engine.build(P0, PSYCHE).unwrap();

    assert_eq!(engine.toggle_mortgage(PSYCHE), Err(CommandError::Developed(PSYCHE)));

    engine.sell(P0, PSYCHE).unwrap();
    assert_eq!(engine.toggle_mortgage(PSYCHE), Ok(true));
    assert_eq!(engine.state().player(P0).cash, 1500 - 100 + 50 + 70);
}

// =============================================================================
// Gifts
// =============================================================================

/// Test that a gifted tile keeps its mortgage and leaves the old owner.
#[test]
fn test_gift_keeps_mortgage() {
    let mut engine = engine_with(&[]);
    engine.gift_tile(TileId::new(5), P0).unwrap();
    engine.toggle_mortgage(TileId::new(5)).unwrap();

    engine.gift_tile(TileId::new(5), P1).unwrap();

    let state = engine.state();
    assert!(!state.player(P0).owns(TileId::new(5)));
    assert!(state.player(P1).owns(TileId::new(5)));
    assert!(state.ledger.is_mortgaged(TileId::new(5)));
    assert_eq!(
        state.log.last().unwrap().message,
        "Player 1 gave Earth Space Elevator to Player 2."
    );
}

/// Test that only ownable tiles can be gifted.
#[test]
fn test_gift_rejects_fixed_tiles() {
    let mut engine = engine_with(&[]);

    assert_eq!(
        engine.gift_tile(TileId::new(4), P0),
        Err(CommandError::NotPurchasable(TileId::new(4)))
    );
    assert_eq!(
        engine.gift_tile(TileId::new(40), P0),
        Err(CommandError::InvalidTile(TileId::new(40)))
    );
}

// =============================================================================
// Ledger Consistency
// =============================================================================

#[derive(Clone, Debug)]
enum LedgerOp {
    Gift(u8, u8),
    Mortgage(u8),
    Build(u8, u8),
    Sell(u8, u8),
}

fn ledger_op() -> impl Strategy<Value = LedgerOp> {
    prop_oneof![
        (0u8..40, 0u8..2).prop_map(|(t, p)| LedgerOp::Gift(t, p)),
        (0u8..40).prop_map(LedgerOp::Mortgage),
        (0u8..40, 0u8..2).prop_map(|(t, p)| LedgerOp::Build(t, p)),
        (0u8..40, 0u8..2).prop_map(|(t, p)| LedgerOp::Sell(t, p)),
    ]
}

proptest! {
    /// Owned sets mirror the ledger, and developed tiles are never mortgaged.
    #[test]
    fn prop_ledger_stays_consistent(ops in prop::collection::vec(ledger_op(), 1..80)) {
        let mut engine = engine_with(&[]);

        for op in ops {
            let _ = match op {
                LedgerOp::Gift(t, p) => engine.gift_tile(TileId::new(t), PlayerId::new(p)),
                LedgerOp::Mortgage(t) => engine.toggle_mortgage(TileId::new(t)).map(|_| ()),
                LedgerOp::Build(t, p) => engine.build(PlayerId::new(p), TileId::new(t)).map(|_| ()),
                LedgerOp::Sell(t, p) => engine.sell(PlayerId::new(p), TileId::new(t)).map(|_| ()),
            };
        }

        let state = engine.state();
        for (tile, holding) in state.ledger.iter() {
            for (player, record) in state.players.iter() {
                prop_assert_eq!(record.owns(tile), holding.owner == Some(player));
            }
            if holding.development > 0 {
                prop_assert!(holding.owner.is_some());
                prop_assert!(!holding.mortgaged);
            }
        }
    }
}
