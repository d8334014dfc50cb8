//! Level domain: demo level layout and the two character spawns.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::exposure::{DefaultExposureRates, Zone, ZoneForce};
use crate::grapple::GrappleAnchor;
use crate::health::{Health, InstantDeathZone, Interactable, SpawnPoint};
use crate::movement::{
    Character, CharacterInput, GameLayer, Ground, InputBindings, MovementState, Polarity,
};

const CHARACTER_SIZE: Vec2 = Vec2::new(24.0, 48.0);
const CHARACTER_MAX_HEALTH: f32 = 100.0;

pub(crate) fn spawn_level(mut commands: Commands) {
    let ground_color = Color::srgb(0.35, 0.4, 0.35);
    let platform_color = Color::srgb(0.5, 0.4, 0.3);
    let anchor_color = Color::srgb(0.85, 0.75, 0.3);
    let bright_color = Color::srgba(1.0, 0.95, 0.6, 0.15);
    let dark_color = Color::srgba(0.2, 0.1, 0.4, 0.25);
    let hazard_color = Color::srgba(0.8, 0.2, 0.2, 0.3);
    let lever_color = Color::srgb(0.6, 0.6, 0.8);

    let ground_layers = CollisionLayers::new(GameLayer::Ground, [GameLayer::Character]);

    // Main floor
    commands.spawn((
        Ground,
        Sprite {
            color: ground_color,
            custom_size: Some(Vec2::new(1600.0, 40.0)),
            ..default()
        },
        Transform::from_xyz(0.0, -200.0, 0.0),
        RigidBody::Static,
        Collider::rectangle(1600.0, 40.0),
        ground_layers,
    ));

    // Floating platforms under the anchor line
    for (x, y) in [(-400.0, -60.0), (0.0, 20.0), (400.0, -60.0)] {
        commands.spawn((
            Ground,
            Sprite {
                color: platform_color,
                custom_size: Some(Vec2::new(220.0, 24.0)),
                ..default()
            },
            Transform::from_xyz(x, y, 0.0),
            RigidBody::Static,
            Collider::rectangle(220.0, 24.0),
            ground_layers,
        ));
    }

    // Grapple anchors. Plain points; line of sight is checked against
    // ground geometry only.
    for (x, y) in [(-250.0, 260.0), (0.0, 320.0), (250.0, 260.0)] {
        commands.spawn((
            GrappleAnchor,
            Sprite {
                color: anchor_color,
                custom_size: Some(Vec2::splat(14.0)),
                ..default()
            },
            Transform::from_xyz(x, y, 0.0),
        ));
    }

    // Brightness zones: forced-bright refuge on the left, forced-dark
    // cave on the right
    commands.spawn((
        Zone {
            half_extents: Vec2::new(250.0, 200.0),
            force: ZoneForce::Bright,
        },
        Sprite {
            color: bright_color,
            custom_size: Some(Vec2::new(500.0, 400.0)),
            ..default()
        },
        Transform::from_xyz(-500.0, 0.0, -1.0),
    ));
    commands.spawn((
        Zone {
            half_extents: Vec2::new(250.0, 200.0),
            force: ZoneForce::Dark,
        },
        Sprite {
            color: dark_color,
            custom_size: Some(Vec2::new(500.0, 400.0)),
            ..default()
        },
        Transform::from_xyz(500.0, 0.0, -1.0),
    ));

    // Kill floor under the whole level
    commands.spawn((
        InstantDeathZone::new(Vec2::new(1200.0, 40.0)),
        Sprite {
            color: hazard_color,
            custom_size: Some(Vec2::new(2400.0, 80.0)),
            ..default()
        },
        Transform::from_xyz(0.0, -420.0, -1.0),
    ));

    // A lever both characters can press; which channel fires depends on
    // who presses it
    commands.spawn((
        Interactable {
            half_extents: Vec2::new(30.0, 40.0),
        },
        Sprite {
            color: lever_color,
            custom_size: Some(Vec2::new(16.0, 40.0)),
            ..default()
        },
        Transform::from_xyz(0.0, 52.0, 0.0),
    ));

    info!("level spawned");
}

pub(crate) fn spawn_characters(mut commands: Commands, rates: Res<DefaultExposureRates>) {
    spawn_character(
        &mut commands,
        Polarity::Light,
        Vec2::new(-80.0, -120.0),
        InputBindings::light_default(),
        Color::srgb(0.95, 0.9, 0.7),
        &rates,
    );
    spawn_character(
        &mut commands,
        Polarity::Night,
        Vec2::new(80.0, -120.0),
        InputBindings::night_default(),
        Color::srgb(0.5, 0.4, 0.8),
        &rates,
    );
}

fn spawn_character(
    commands: &mut Commands,
    polarity: Polarity,
    position: Vec2,
    bindings: InputBindings,
    color: Color,
    rates: &DefaultExposureRates,
) {
    commands.spawn((
        // Identity & movement
        (
            Character,
            polarity,
            MovementState::default(),
            CharacterInput::default(),
            bindings,
        ),
        // Exposure & health
        (
            Health::new(CHARACTER_MAX_HEALTH),
            SpawnPoint(position),
            rates.0.clone(),
        ),
        // Rendering
        Sprite {
            color,
            custom_size: Some(CHARACTER_SIZE),
            ..default()
        },
        Transform::from_xyz(position.x, position.y, 0.0),
        // Physics
        (
            RigidBody::Dynamic,
            Collider::rectangle(CHARACTER_SIZE.x, CHARACTER_SIZE.y),
            LockedAxes::ROTATION_LOCKED,
            LinearVelocity::default(),
            GravityScale(1.0),
            Friction::new(0.0),
            CollisionLayers::new(GameLayer::Character, [GameLayer::Ground]),
        ),
    ));
    debug!("spawned {polarity:?} character at {position}");
}
