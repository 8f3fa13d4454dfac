//! The built-in space colony board: layout, pricing table, and decks.

use super::catalog::{CatalogDef, PricingDef, RentDef, TileDef};
use super::tile::{ColorGroup, TileKind};
use crate::cards::data::{mission_control_deck, nav_alert_deck};

fn tile(kind: TileKind, name: &str) -> TileDef {
    TileDef {
        kind,
        name: name.to_string(),
        group: None,
        cost: None,
    }
}

fn site(name: &str, group: ColorGroup) -> TileDef {
    TileDef {
        group: Some(group),
        ..tile(TileKind::Property, name)
    }
}

fn tax(name: &str, cost: i64) -> TileDef {
    TileDef {
        cost: Some(cost),
        ..tile(TileKind::Tax, name)
    }
}

fn site_pricing(
    name: &str,
    price: i64,
    base: i64,
    development: [i64; 4],
    hotel: i64,
    build_cost: i64,
) -> PricingDef {
    PricingDef {
        name: name.to_string(),
        purchase_price: price,
        mortgage_value: price / 2,
        rent: Some(RentDef::Property {
            base,
            development,
            hotel,
        }),
        development_cost: Some(build_cost),
        hotel_cost: Some(build_cost),
    }
}

fn spaceport_pricing(name: &str) -> PricingDef {
    PricingDef {
        name: name.to_string(),
        purchase_price: 200,
        mortgage_value: 100,
        rent: Some(RentDef::Spaceport {
            by_spaceports_owned: [25, 50, 100, 200],
        }),
        development_cost: None,
        hotel_cost: None,
    }
}

fn utility_pricing(name: &str) -> PricingDef {
    PricingDef {
        name: name.to_string(),
        purchase_price: 150,
        mortgage_value: 75,
        rent: None,
        development_cost: None,
        hotel_cost: None,
    }
}

/// The 40-tile layout, in ring order from Launch.
pub fn layout() -> Vec<TileDef> {
    use ColorGroup::*;
    use TileKind::*;

    vec![
        tile(Launch, "Launch (Earth) — Collect $200M"),
        site("Low Earth Orbit (LEO)", Brown),
        tile(MissionControl, "📡 Mission Control"),
        site("Geostationary Orbit (GEO)", Brown),
        tax("Launch Insurance Fee", 200),
        tile(Spaceport, "Earth Space Elevator"),
        site("Mercury", LightBlue),
        tile(NavAlert, "💫 Nav. Alert!"),
        site("Venus", LightBlue),
        site("Solar Power Satellites", LightBlue),
        tile(DeepSpace, "Deep Space"),
        site("Ceres", Pink),
        tile(Utility, "Propellant Depot"),
        site("16 Psyche", Pink),
        site("Halley’s Comet", Pink),
        tile(Spaceport, "Lunar Gateway Station"),
        site("Europa", Orange),
        tile(MissionControl, "📡 Mission Control"),
        site("Ganymede", Orange),
        site("Callisto", Orange),
        tile(DeepSpaceStation, "Deep Space Station"),
        site("Enceladus", Red),
        tile(NavAlert, "💫 Nav. Alert!"),
        site("Rings of Saturn", Red),
        site("Titan", Red),
        tile(Spaceport, "Mars Spaceport"),
        site("Titania", Yellow),
        site("Oberon", Yellow),
        tile(Utility, "Life Support Services"),
        site("Triton", Yellow),
        tile(LostInSpace, "Lost in Space — Stranded in Deep Space"),
        site("Pluto & Charon", Green),
        site("Eris", Green),
        tile(MissionControl, "📡 Mission Control"),
        site("Haumea", Green),
        tile(Spaceport, "Asteroid Belt Outpost"),
        tile(NavAlert, "💫 Nav. Alert!"),
        site("Moon (Luna)", DarkBlue),
        tax("Maintenance Fee", 100),
        site("Mars", DarkBlue),
    ]
}

/// Pricing table, keyed by tile name.
pub fn pricing() -> Vec<PricingDef> {
    vec![
        site_pricing("Low Earth Orbit (LEO)", 60, 2, [10, 30, 90, 160], 250, 50),
        site_pricing("Geostationary Orbit (GEO)", 60, 4, [20, 60, 180, 320], 450, 50),
        site_pricing("Mercury", 100, 6, [30, 90, 270, 400], 550, 50),
        site_pricing("Venus", 100, 6, [30, 90, 270, 400], 550, 50),
        site_pricing("Solar Power Satellites", 120, 8, [40, 100, 300, 450], 600, 50),
        site_pricing("Ceres", 140, 10, [50, 150, 450, 625], 750, 100),
        site_pricing("16 Psyche", 140, 10, [50, 150, 450, 625], 750, 100),
        site_pricing("Halley’s Comet", 160, 12, [60, 180, 500, 700], 900, 100),
        site_pricing("Europa", 180, 14, [70, 200, 550, 750], 950, 100),
        site_pricing("Ganymede", 180, 14, [70, 200, 550, 750], 950, 100),
        site_pricing("Callisto", 200, 16, [80, 220, 600, 800], 1000, 100),
        site_pricing("Enceladus", 220, 18, [90, 250, 700, 875], 1050, 150),
        site_pricing("Rings of Saturn", 220, 18, [90, 250, 700, 875], 1050, 150),
        site_pricing("Titan", 240, 20, [100, 300, 750, 925], 1100, 150),
        site_pricing("Titania", 260, 22, [110, 330, 800, 975], 1150, 150),
        site_pricing("Oberon", 260, 22, [110, 330, 800, 975], 1150, 150),
        site_pricing("Triton", 280, 24, [120, 360, 850, 1025], 1200, 150),
        site_pricing("Pluto & Charon", 300, 26, [130, 390, 900, 1100], 1275, 200),
        site_pricing("Eris", 300, 26, [130, 390, 900, 1100], 1275, 200),
        site_pricing("Haumea", 320, 28, [150, 450, 1000, 1200], 1400, 200),
        site_pricing("Moon (Luna)", 350, 35, [175, 500, 1100, 1300], 1500, 200),
        site_pricing("Mars", 400, 50, [200, 600, 1400, 1700], 2000, 200),
        spaceport_pricing("Earth Space Elevator"),
        spaceport_pricing("Lunar Gateway Station"),
        spaceport_pricing("Mars Spaceport"),
        spaceport_pricing("Asteroid Belt Outpost"),
        utility_pricing("Propellant Depot"),
        utility_pricing("Life Support Services"),
    ]
}

/// The complete built-in catalog definition.
pub fn space_colony() -> CatalogDef {
    CatalogDef {
        tiles: layout(),
        pricing: pricing(),
        nav_alert: nav_alert_deck(),
        mission_control: mission_control_deck(),
    }
}
