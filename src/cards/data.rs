//! Built-in deck definitions for the space colony board.

use super::card::{Card, CardAction};
use crate::board::TileId;

fn gain(text: &str, amount: i64) -> Card {
    Card::new(text, CardAction::Gain { amount })
}

fn pay(text: &str, amount: i64) -> Card {
    Card::new(text, CardAction::Pay { amount })
}

fn move_to(text: &str, tile: u8) -> Card {
    Card::new(text, CardAction::MoveTo { tile: TileId::new(tile) })
}

/// Nav Alert deck, before shuffling.
pub fn nav_alert_deck() -> Vec<Card> {
    vec![
        move_to("Gravity Assist! Advance to Launch (collect $200M)", 0),
        Card::new(
            "Solar storm strands your crew — go directly to Deep Space (Lost in Space)",
            CardAction::GoToJail,
        ),
        move_to("Slingshot to Ceres", 11),
        move_to("Course set to Titan", 24),
        move_to("Fast transfer to Mars", 39),
        move_to("Ride the Earth Space Elevator", 5),
        gain("Tech licensing payout — collect $50M", 50),
        pay("Minor hull repairs — pay $15M", 15),
        Card::new("Emergency Rescue Beacon (keep)", CardAction::GrantRescueCard),
        gain("Fuel refinery matures — collect $150M", 150),
        Card::new(
            "Advance to the nearest Utility (pay double rent if owned)",
            CardAction::AdvanceToNearestUtility,
        ),
        Card::new(
            "Advance to the nearest Spaceport (pay double rent if owned)",
            CardAction::AdvanceToNearestSpaceport,
        ),
        Card::new(
            "Advance to the nearest Spaceport (pay double rent if owned)",
            CardAction::AdvanceToNearestSpaceport,
        ),
        Card::new(
            "Course correction — go back three spaces",
            CardAction::MoveBack { steps: 3 },
        ),
        Card::new(
            "General maintenance: $25M per outpost, $100M per colony",
            CardAction::AssessedRepairs {
                per_outpost: 25,
                per_colony: 100,
            },
        ),
        Card::new(
            "Elected Consortium Chair — pay each player $50M",
            CardAction::PayEachPlayer { amount: 50 },
        ),
    ]
}

/// Mission Control deck, before shuffling.
pub fn mission_control_deck() -> Vec<Card> {
    vec![
        gain("Public-Private grant — collect $200M", 200),
        gain("Funding windfall — collect $200M", 200),
        gain("Resupply efficiencies — collect $100M", 100),
        gain("Breakthrough bonus — collect $100M", 100),
        gain("Services revenue — collect $50M", 50),
        pay("Medical treatments — pay $100M", 100),
        pay("Facility upkeep — pay $50M", 50),
        pay("Training costs — pay $50M", 50),
        move_to("Mission completed — advance to Launch (collect $200M)", 0),
        Card::new("Navigation failure — go directly to Deep Space", CardAction::GoToJail),
        Card::new("Rescue Beacon — keep", CardAction::GrantRescueCard),
        Card::new(
            "Assessed for station repairs: $40M/outpost, $115M/colony",
            CardAction::AssessedRepairs {
                per_outpost: 40,
                per_colony: 115,
            },
        ),
        gain("Consulting services — collect $25M", 25),
        Card::new(
            "Public lecture tour — collect $50M from every player",
            CardAction::CollectFromEachPlayer { amount: 50 },
        ),
        gain("International grant — collect $100M", 100),
        Card::new(
            "Discovery celebrated — collect $10M from each player",
            CardAction::CollectFromEachPlayer { amount: 10 },
        ),
        gain("Tax refund — collect $20M", 20),
    ]
}
