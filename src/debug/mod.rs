//! Dev-tools overlay for fast iteration.
//!
//! F3 toggles a state overlay (per-character mode, health, brightness),
//! F4 toggles the global movement lock.

use bevy::prelude::*;

use crate::core::MovementLock;
use crate::exposure::{DayNight, Zone, classify_brightness};
use crate::health::Health;
use crate::movement::{Character, MovementState, Polarity};

/// Resource tracking debug overlay state
#[derive(Resource, Debug, Default)]
pub struct DebugState {
    pub show_info: bool,
}

/// Marker for the state overlay text
#[derive(Component, Debug)]
pub struct DebugInfoOverlay;

pub struct DebugPlugin;

impl Plugin for DebugPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<DebugState>()
            .add_systems(Update, (handle_debug_hotkeys, update_debug_info_overlay).chain());
    }
}

fn handle_debug_hotkeys(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut debug_state: ResMut<DebugState>,
    mut lock: ResMut<MovementLock>,
) {
    if keyboard.just_pressed(KeyCode::F3) {
        debug_state.show_info = !debug_state.show_info;
    }
    if keyboard.just_pressed(KeyCode::F4) {
        if lock.locked {
            lock.unlock();
        } else {
            lock.lock();
        }
        info!("movement lock toggled: {}", lock.locked);
    }
}

fn update_debug_info_overlay(
    mut commands: Commands,
    debug_state: Res<DebugState>,
    lock: Res<MovementLock>,
    day_night: Res<DayNight>,
    zones: Query<(&Transform, &Zone)>,
    characters: Query<(&Polarity, &Transform, &MovementState, &Health), With<Character>>,
    mut overlay_query: Query<&mut Text, With<DebugInfoOverlay>>,
    existing_overlay: Query<Entity, With<DebugInfoOverlay>>,
) {
    if !debug_state.show_info {
        for entity in &existing_overlay {
            commands.entity(entity).despawn();
        }
        return;
    }

    if existing_overlay.is_empty() {
        spawn_debug_info_overlay(&mut commands);
        return;
    }

    let Ok(mut text) = overlay_query.single_mut() else {
        return;
    };

    let mut lines = format!(
        "DayNight: {:?}\nLocked: {}",
        day_night.mode, lock.locked
    );
    for (polarity, transform, state, health) in &characters {
        let point = transform.translation.truncate();
        let bright = classify_brightness(
            point,
            zones.iter().map(|(t, z)| (t.translation.truncate(), z)),
            day_night.is_day(),
        );
        lines.push_str(&format!(
            "\n{:?}: {:?} hp {:.0}/{:.0} ground {} bright {}",
            polarity, state.mode, health.current, health.max, state.on_ground, bright
        ));
    }
    **text = lines;
}

fn spawn_debug_info_overlay(commands: &mut Commands) {
    commands.spawn((
        DebugInfoOverlay,
        Text::new("Loading..."),
        TextFont {
            font_size: 12.0,
            ..default()
        },
        TextColor(Color::srgb(0.8, 0.9, 0.8)),
        Node {
            position_type: PositionType::Absolute,
            left: Val::Px(20.0),
            bottom: Val::Px(20.0),
            padding: UiRect::all(Val::Px(8.0)),
            ..default()
        },
        BackgroundColor(Color::srgba(0.0, 0.0, 0.0, 0.7)),
        ZIndex(500),
    ));
}
