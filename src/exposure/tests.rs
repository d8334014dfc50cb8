//! Exposure domain: tests for brightness precedence and exposure rates.

use bevy::prelude::*;

use super::{ExposureRates, Zone, ZoneForce, classify_brightness, exposure_rate};
use crate::health::Health;
use crate::movement::Polarity;

fn zone(force: ZoneForce) -> Zone {
    Zone {
        half_extents: Vec2::new(100.0, 100.0),
        force,
    }
}

// -----------------------------------------------------------------------------
// Zone containment and precedence
// -----------------------------------------------------------------------------

#[test]
fn test_zone_containment_is_inclusive_at_edges() {
    let z = zone(ZoneForce::Dark);
    let center = Vec2::ZERO;

    assert!(z.contains(center, Vec2::new(100.0, 0.0)));
    assert!(z.contains(center, Vec2::new(-100.0, 100.0)));
    assert!(!z.contains(center, Vec2::new(100.1, 0.0)));
}

#[test]
fn test_no_zones_falls_back_to_global_flag() {
    assert!(classify_brightness(Vec2::ZERO, [], true));
    assert!(!classify_brightness(Vec2::ZERO, [], false));
}

#[test]
fn test_dark_zone_overrides_global_day() {
    let dark = zone(ZoneForce::Dark);
    let zones = [(Vec2::ZERO, &dark)];
    assert!(!classify_brightness(Vec2::ZERO, zones, true));
}

#[test]
fn test_bright_zone_overrides_global_night() {
    let bright = zone(ZoneForce::Bright);
    let zones = [(Vec2::ZERO, &bright)];
    assert!(classify_brightness(Vec2::ZERO, zones, false));
}

#[test]
fn test_dark_wins_over_bright_regardless_of_order() {
    let dark = zone(ZoneForce::Dark);
    let bright = zone(ZoneForce::Bright);

    let dark_first = [(Vec2::ZERO, &dark), (Vec2::ZERO, &bright)];
    let bright_first = [(Vec2::ZERO, &bright), (Vec2::ZERO, &dark)];

    assert!(!classify_brightness(Vec2::ZERO, dark_first, true));
    assert!(!classify_brightness(Vec2::ZERO, bright_first, true));
}

#[test]
fn test_non_overlapping_zone_is_ignored() {
    let dark = zone(ZoneForce::Dark);
    let zones = [(Vec2::new(500.0, 0.0), &dark)];
    assert!(classify_brightness(Vec2::ZERO, zones, true));
}

// -----------------------------------------------------------------------------
// Exposure rates
// -----------------------------------------------------------------------------

#[test]
fn test_light_heals_in_bright_and_drains_in_dark() {
    let rates = ExposureRates::default();

    assert_eq!(
        exposure_rate(Polarity::Light, true, &rates),
        rates.heal_per_second
    );
    assert_eq!(
        exposure_rate(Polarity::Light, false, &rates),
        -rates.damage_per_second
    );
}

#[test]
fn test_exposure_sign_inverts_for_night_polarity() {
    let rates = ExposureRates::default();

    // Same forced-dark point: Light loses at damage rate, Night gains at
    // heal rate
    assert_eq!(
        exposure_rate(Polarity::Light, false, &rates),
        -rates.damage_per_second
    );
    assert_eq!(
        exposure_rate(Polarity::Night, false, &rates),
        rates.heal_per_second
    );
    assert_eq!(
        exposure_rate(Polarity::Night, true, &rates),
        -rates.damage_per_second
    );
}

#[test]
fn test_one_dark_frame_drains_to_zero_with_single_death_edge() {
    // health 5, 10 dps, one full second of frame time
    let rates = ExposureRates::default();
    let mut health = Health::new(100.0);
    health.current = 5.0;

    let rate = exposure_rate(Polarity::Light, false, &rates);
    assert_eq!(rate, -10.0);

    let change = health.take_damage(-rate * 1.0);
    assert_eq!(health.current, 0.0);
    assert!(change.died);

    // The next dark frame must not fire a second death
    let change = health.take_damage(-rate * 1.0);
    assert_eq!(health.current, 0.0);
    assert!(!change.died);
}

#[test]
fn test_exposure_is_frame_rate_independent() {
    let rates = ExposureRates::default();
    let rate = exposure_rate(Polarity::Night, false, &rates);

    // 60 small frames and one big frame apply the same total
    let mut a = Health::new(100.0);
    a.current = 50.0;
    for _ in 0..60 {
        a.heal(rate * (1.0 / 60.0));
    }

    let mut b = Health::new(100.0);
    b.current = 50.0;
    b.heal(rate * 1.0);

    assert!((a.current - b.current).abs() < 1e-3);
}
