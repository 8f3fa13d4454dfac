//! Turn engine integration tests.
//!
//! These tests drive whole turns through the public command surface: rolls,
//! movement staging, pass-Launch bonuses, deep space and bankruptcy.

use std::cell::RefCell;
use std::rc::Rc;

use proptest::prelude::*;

use spaceopoly::board::TileId;
use spaceopoly::core::{Command, PlayerId, RulesConfig};
use spaceopoly::engine::{DiceRoll, Engine, EngineEvent, RollOutcome, ScriptedDice};
use spaceopoly::error::CommandError;
use spaceopoly::queue::Effect;

const P0: PlayerId = PlayerId::new(0);
const P1: PlayerId = PlayerId::new(1);

fn engine_with(pairs: &[(u8, u8)]) -> Engine {
    Engine::builder()
        .seed(42)
        .dice(ScriptedDice::from_pairs(pairs.iter().copied()))
        .build()
        .unwrap()
}

fn launch_bonuses(engine: &Engine, player: PlayerId) -> usize {
    engine
        .state()
        .queue(player)
        .iter()
        .filter(|a| matches!(&a.effect, Effect::Receive { reason, .. } if reason == "passing Launch"))
        .count()
}

fn record_events(engine: &mut Engine) -> Rc<RefCell<Vec<EngineEvent>>> {
    let events = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&events);
    engine.subscribe(move |e| sink.borrow_mut().push(e.clone()));
    events
}

// =============================================================================
// Purchase Flow
// =============================================================================

/// Test rolling onto an unowned site and buying it.
#[test]
fn test_roll_then_buy() {
    let mut engine = engine_with(&[(2, 4)]);

    engine.roll_for_player(P0).unwrap();

    // Mercury, price 100
    assert_eq!(engine.state().player(P0).position, TileId::new(6));
    assert_eq!(engine.state().pending_purchase, Some(TileId::new(6)));

    engine.buy_pending_property(P0).unwrap();

    let record = engine.state().player(P0);
    assert_eq!(record.cash, 1400);
    assert_eq!(record.owned_tiles.iter().copied().collect::<Vec<_>>(), vec![TileId::new(6)]);
    assert_eq!(engine.state().pending_purchase, None);
}

/// Test that a second buy has nothing to buy.
#[test]
fn test_buy_twice_rejected() {
    let mut engine = engine_with(&[(2, 4)]);
    engine.roll_for_player(P0).unwrap();
    engine.buy_pending_property(P0).unwrap();

    assert_eq!(
        engine.buy_pending_property(P1),
        Err(CommandError::NoPendingOffer)
    );
    assert_eq!(engine.state().player(P1).cash, 1500);
}

/// Test that a wrap onto an unowned site must settle the bonus before buying.
#[test]
fn test_buy_waits_for_queued_bonus() {
    let mut engine = engine_with(&[(1, 2)]);
    engine.teleport_player(P0, TileId::new(38)).unwrap();
    engine.roll_for_player(P0).unwrap();

    assert_eq!(engine.state().pending_purchase, Some(TileId::new(1)));
    assert!(!engine.can_buy(P0));
    assert_eq!(
        engine.buy_pending_property(P0),
        Err(CommandError::ActionsPending(P0))
    );
    assert_eq!(engine.state().ledger.owner(TileId::new(1)), None);

    engine.confirm_next_action(P0).unwrap();

    assert!(engine.can_buy(P0));
    assert_eq!(engine.buy_pending_property(P0), Ok(TileId::new(1)));
    assert_eq!(engine.state().player(P0).cash, 1640);
}

// =============================================================================
// Pass-Launch Bonus
// =============================================================================

/// Test that wrapping past Launch queues one bonus before the landing entry.
#[test]
fn test_wrap_queues_bonus_first() {
    let mut engine = engine_with(&[(2, 3)]);
    engine.teleport_player(P0, TileId::new(37)).unwrap();

    engine.roll_for_player(P0).unwrap();

    assert_eq!(engine.state().player(P0).position, TileId::new(2));
    let labels: Vec<_> = engine.state().queue(P0).iter().map(|a| a.label.clone()).collect();
    assert_eq!(labels, vec!["Receive $200M", "Mission Control"]);

    engine.confirm_next_action(P0).unwrap();
    assert_eq!(engine.state().player(P0).cash, 1700);
}

/// Test that landing exactly on Launch pays the bonus once and nothing else.
#[test]
fn test_land_on_launch() {
    let mut engine = engine_with(&[(2, 3)]);
    engine.teleport_player(P1, TileId::new(35)).unwrap();

    engine.roll_for_player(P1).unwrap();

    assert_eq!(engine.state().player(P1).position, TileId::LAUNCH);
    assert_eq!(engine.state().queue(P1).len(), 1);
    assert_eq!(launch_bonuses(&engine, P1), 1);
}

/// Test that manual placement never pays the bonus.
#[test]
fn test_move_player_to_skips_bonus() {
    let mut engine = engine_with(&[]);
    engine.teleport_player(P0, TileId::new(30)).unwrap();

    engine.move_player_to(P0, TileId::new(5)).unwrap();

    assert_eq!(launch_bonuses(&engine, P0), 0);
    assert_eq!(engine.state().pending_purchase, Some(TileId::new(5)));
}

proptest! {
    /// Any move queues at most one bonus, and exactly one iff it reaches tile 0.
    #[test]
    fn prop_pass_launch_once(start in 0u8..40, a in 1u8..=6, b in 1u8..=6) {
        let mut engine = engine_with(&[(a, b)]);
        engine.teleport_player(P0, TileId::new(start)).unwrap();

        engine.roll_for_player(P0).unwrap();

        let expected = usize::from(usize::from(start) + usize::from(a + b) >= 40);
        prop_assert_eq!(launch_bonuses(&engine, P0), expected);
        prop_assert_eq!(
            engine.state().player(P0).position,
            TileId::new(start).advance(a + b)
        );
    }
}

// =============================================================================
// Staged Movement
// =============================================================================

/// Test that a staged move is walked by the caller and blocks rolling.
#[test]
fn test_staged_movement() {
    let mut engine = Engine::builder()
        .config(RulesConfig::default().with_staged_movement(true))
        .dice(ScriptedDice::from_pairs([(1, 2), (1, 2)]))
        .build()
        .unwrap();
    let events = record_events(&mut engine);

    engine.roll_for_player(P0).unwrap();

    assert!(engine.state().is_animating_movement);
    assert_eq!(engine.state().player(P0).position, TileId::LAUNCH);
    assert_eq!(
        engine.roll_for_player(P1),
        Err(CommandError::MovementInProgress)
    );
    assert_eq!(
        engine.movement().map(|m| m.remaining().len()),
        Some(3)
    );

    let first = engine.step_movement().unwrap();
    assert_eq!((first.from, first.to, first.remaining), (TileId::new(0), TileId::new(1), 2));
    assert_eq!(engine.state().player(P0).position, TileId::new(1));

    let rest = engine.finish_movement();
    assert_eq!(rest.len(), 2);
    assert!(rest[1].is_last());
    assert!(!engine.state().is_animating_movement);
    assert_eq!(engine.state().pending_purchase, Some(TileId::new(3)));
    assert!(engine.step_movement().is_none());

    let events = events.borrow();
    let steps = events.iter().filter(|e| matches!(e, EngineEvent::Moved(_))).count();
    assert_eq!(steps, 3);
    assert_eq!(
        events.last(),
        Some(&EngineEvent::Landed {
            player: P0,
            tile: TileId::new(3)
        })
    );
}

/// Test that synchronous moves still emit one event per tile.
#[test]
fn test_synchronous_move_emits_steps() {
    let mut engine = engine_with(&[(6, 5)]);
    let events = record_events(&mut engine);

    engine.roll_for_player(P1).unwrap();

    let tiles: Vec<_> = events
        .borrow()
        .iter()
        .filter_map(|e| match e {
            EngineEvent::Moved(step) => Some(step.to.index()),
            _ => None,
        })
        .collect();
    assert_eq!(tiles, (1..=11).collect::<Vec<_>>());
    assert!(matches!(
        events.borrow().last(),
        Some(EngineEvent::StateChanged {
            command: Command::Roll { .. }
        })
    ));
}

/// Test that a new game drops a move in progress.
#[test]
fn test_new_game_cancels_movement() {
    let mut engine = Engine::builder()
        .config(RulesConfig::default().with_staged_movement(true))
        .build()
        .unwrap();
    engine.roll_for_player(P0).unwrap();

    engine.start_new_game();

    assert!(engine.movement().is_none());
    assert!(!engine.state().is_animating_movement);
    assert!(engine.can_roll(P0));
}

// =============================================================================
// Deep Space
// =============================================================================

/// Test the full stranded cycle: lost in space tile, failed rolls, forced fee.
#[test]
fn test_lost_in_space_cycle() {
    let mut engine = engine_with(&[(6, 4), (1, 2), (2, 3), (1, 3)]);
    engine.teleport_player(P0, TileId::new(20)).unwrap();

    engine.roll_for_player(P0).unwrap();
    assert_eq!(engine.next_action(P0), Some("Lost in Space — to Deep Space"));

    engine.confirm_next_action(P0).unwrap();
    assert!(engine.state().player(P0).in_jail);
    assert_eq!(
        engine.player_status(P0),
        "Position: Deep Space (Lost in Deep Space)"
    );

    let failed = [DiceRoll::new(1, 2), DiceRoll::new(2, 3)];
    for (attempts, dice) in (1..=2u8).zip(failed) {
        assert_eq!(
            engine.roll_for_player(P0),
            Ok(RollOutcome::StayedInJail { dice, attempts })
        );
    }

    engine.roll_for_player(P0).unwrap();

    let record = engine.state().player(P0);
    assert!(!record.in_jail);
    assert_eq!(record.cash, 1450);
    assert_eq!(record.position, TileId::new(14));
}

/// Test that a rescue beacon frees without touching cash.
#[test]
fn test_rescue_beacon_needs_jail() {
    let mut engine = engine_with(&[]);

    assert_eq!(
        engine.use_rescue_card(P0),
        Err(CommandError::NotInJail(P0))
    );
    assert!(!engine.can_use_rescue_card(P0));
}

// =============================================================================
// Bankruptcy
// =============================================================================

/// Test that rent the payer cannot cover ends the game exactly once.
#[test]
fn test_rent_bankruptcy() {
    let mut engine = engine_with(&[(1, 2)]);
    let events = record_events(&mut engine);
    engine.gift_tile(TileId::new(39), P0).unwrap();
    engine.pay_bank(P1, 1495).unwrap();
    engine.teleport_player(P1, TileId::new(36)).unwrap();

    engine.roll_for_player(P1).unwrap();
    engine.confirm_next_action(P1).unwrap();

    let state = engine.state();
    assert!(state.is_game_over());
    assert_eq!(state.winner(), Some(P0));
    assert!(state.player(P1).cash < 0);
    assert_eq!(
        state.log.last().unwrap().message,
        "Player 2 is bankrupt. Player 1 wins!"
    );

    let game_overs = events
        .borrow()
        .iter()
        .filter(|e| matches!(e, EngineEvent::GameOver { .. }))
        .count();
    assert_eq!(game_overs, 1);

    assert_eq!(engine.roll_for_player(P0), Err(CommandError::GameOver));
    assert_eq!(engine.pay_bank(P0, 1), Err(CommandError::GameOver));
    assert!(!engine.can_roll(P0));
}

/// Test that a new game after bankruptcy starts clean.
#[test]
fn test_new_game_after_bankruptcy() {
    let mut engine = engine_with(&[(1, 2)]);
    engine.gift_tile(TileId::new(39), P0).unwrap();
    engine.pay_bank(P1, 1495).unwrap();
    engine.teleport_player(P1, TileId::new(36)).unwrap();
    engine.roll_for_player(P1).unwrap();
    engine.confirm_next_action(P1).unwrap();

    engine.apply(Command::StartNewGame).unwrap();

    let state = engine.state();
    assert!(!state.is_game_over());
    assert_eq!(state.pot, 200);
    assert!(state.players.iter().all(|(_, r)| r.cash == 1500));
}

// =============================================================================
// Determinism
// =============================================================================

fn play(seed: u64, turns: usize) -> Engine {
    let mut engine = Engine::builder().seed(seed).build().unwrap();
    for turn in 0..turns {
        let player = PlayerId::new((turn % 2) as u8);
        let _ = engine.roll_for_player(player);
        let _ = engine.buy_pending_property(player);
        while engine.confirm_next_action(player).is_ok() {}
        if engine.state().player(player).in_jail {
            let _ = engine.pay_bail(player);
        }
        if engine.state().is_game_over() {
            break;
        }
    }
    engine
}

/// Test that the same seed replays the same game.
#[test]
fn test_seeded_games_match() {
    let a = play(2024, 120);
    let b = play(2024, 120);

    assert_eq!(a.state(), b.state());
}

/// Test that cash, ledger and owned sets stay in step over a long game.
#[test]
fn test_long_game_consistency() {
    let engine = play(7, 400);
    let state = engine.state();

    for (tile, holding) in state.ledger.iter() {
        for (player, record) in state.players.iter() {
            assert_eq!(record.owns(tile), holding.owner == Some(player));
        }
        if holding.development > 0 {
            assert!(holding.owner.is_some());
            assert!(!holding.mortgaged);
        }
    }
    assert!(state.players.iter().all(|(_, r)| r.cash >= 0) || state.is_game_over());
}
