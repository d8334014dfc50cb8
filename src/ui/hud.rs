//! UI domain: per-character HUD health bars.

use bevy::prelude::*;

use crate::health::Health;
use crate::movement::{Character, Polarity};

const HEALTHBAR_WIDTH: f32 = 220.0;
const HEALTHBAR_HEIGHT: f32 = 24.0;
const HEALTHBAR_PADDING: f32 = 16.0;

#[derive(Component)]
pub(crate) struct HealthBarUI;

/// Fill element tracking one character, matched by polarity.
#[derive(Component)]
pub(crate) struct HealthBarFill {
    pub polarity: Polarity,
}

pub(crate) fn spawn_health_bars(mut commands: Commands) {
    // Light bar top-left, Night bar top-right
    spawn_bar(
        &mut commands,
        Polarity::Light,
        UiRect {
            left: Val::Px(HEALTHBAR_PADDING),
            top: Val::Px(HEALTHBAR_PADDING),
            ..default()
        },
        Color::srgb(0.95, 0.9, 0.5),
    );
    spawn_bar(
        &mut commands,
        Polarity::Night,
        UiRect {
            right: Val::Px(HEALTHBAR_PADDING),
            top: Val::Px(HEALTHBAR_PADDING),
            ..default()
        },
        Color::srgb(0.55, 0.45, 0.9),
    );
}

fn spawn_bar(commands: &mut Commands, polarity: Polarity, edges: UiRect, fill_color: Color) {
    commands
        .spawn((
            HealthBarUI,
            Node {
                position_type: PositionType::Absolute,
                left: edges.left,
                right: edges.right,
                top: edges.top,
                width: Val::Px(HEALTHBAR_WIDTH),
                height: Val::Px(HEALTHBAR_HEIGHT),
                border: UiRect::all(Val::Px(2.0)),
                ..default()
            },
            BackgroundColor(Color::srgba(0.1, 0.1, 0.1, 0.8)),
            BorderColor::all(Color::srgb(0.3, 0.3, 0.3)),
        ))
        .with_children(|parent| {
            parent.spawn((
                HealthBarFill { polarity },
                Node {
                    width: Val::Percent(100.0),
                    height: Val::Percent(100.0),
                    ..default()
                },
                BackgroundColor(fill_color),
            ));
        });
}

pub(crate) fn update_health_bars(
    characters: Query<(&Polarity, &Health), With<Character>>,
    mut fills: Query<(&HealthBarFill, &mut Node)>,
) {
    for (fill, mut node) in &mut fills {
        let Some((_, health)) = characters.iter().find(|(p, _)| **p == fill.polarity) else {
            continue;
        };
        node.width = Val::Percent(health.percent() * 100.0);
    }
}
