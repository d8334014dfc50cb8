//! Content loading: tests for the tuning schema and its application.

use super::loader::parse_tuning;
use crate::exposure::{DayNight, DefaultExposureRates};
use crate::grapple::GrappleTuning;
use crate::health::RespawnTuning;
use crate::movement::MovementTuning;

fn apply(contents: &str) -> (MovementTuning, GrappleTuning, RespawnTuning, DefaultExposureRates, DayNight) {
    let file = parse_tuning(contents).unwrap();
    let mut movement = MovementTuning::default();
    let mut grapple = GrappleTuning::default();
    let mut respawn = RespawnTuning::default();
    let mut exposure = DefaultExposureRates::default();
    let mut day_night = DayNight::default();
    super::apply_tuning_file(
        &file,
        &mut movement,
        &mut grapple,
        &mut respawn,
        &mut exposure,
        &mut day_night,
    );
    (movement, grapple, respawn, exposure, day_night)
}

// -----------------------------------------------------------------------------
// Parsing
// -----------------------------------------------------------------------------

#[test]
fn test_missing_sections_keep_defaults() {
    let (movement, grapple, respawn, exposure, _) = apply("(schema_version: 1)");

    assert_eq!(movement.move_speed, MovementTuning::default().move_speed);
    assert_eq!(grapple.max_distance, GrappleTuning::default().max_distance);
    assert_eq!(respawn.respawn_delay, RespawnTuning::default().respawn_delay);
    assert_eq!(
        exposure.0.heal_per_second,
        DefaultExposureRates::default().0.heal_per_second
    );
}

#[test]
fn test_malformed_file_is_an_error() {
    assert!(parse_tuning("(schema_version: )").is_err());
    assert!(parse_tuning("").is_err());
}

// -----------------------------------------------------------------------------
// Application
// -----------------------------------------------------------------------------

#[test]
fn test_movement_section_overrides_resource() {
    let (movement, ..) = apply(
        r#"(
            schema_version: 1,
            movement: (
                move_speed: 250.0,
                jump_height: 180.0,
                time_to_apex: 0.4,
                low_jump_multiplier: 2.5,
                fall_speed_multiplier: 2.0,
                max_fall_speed: 800.0,
                glide_gravity_scale: 0.25,
            ),
        )"#,
    );

    assert_eq!(movement.move_speed, 250.0);
    assert_eq!(movement.jump_height, 180.0);
    assert_eq!(movement.glide_gravity_scale, 0.25);
}

#[test]
fn test_zero_swap_interval_disables_alternation() {
    let (.., day_night) = apply(
        r#"(
            schema_version: 1,
            exposure: (
                heal_per_second: 8.0,
                damage_per_second: 12.0,
                day_night_swap_seconds: 0.0,
            ),
        )"#,
    );

    assert!(day_night.swap_timer.is_none());
}

#[test]
fn test_exposure_section_sets_rates_and_swap_timer() {
    let (_, _, _, exposure, day_night) = apply(
        r#"(
            schema_version: 1,
            exposure: (
                heal_per_second: 8.0,
                damage_per_second: 12.0,
                day_night_swap_seconds: 30.0,
            ),
        )"#,
    );

    assert_eq!(exposure.0.heal_per_second, 8.0);
    assert_eq!(exposure.0.damage_per_second, 12.0);
    let timer = day_night.swap_timer.unwrap();
    assert_eq!(timer.duration().as_secs_f32(), 30.0);
}
