use bevy::prelude::*;

use constants::palette::{NEON_CYAN, NEON_PINK};

use crate::radio::now_playing::NowPlaying;
use crate::radio::stream::RadioState;

#[derive(Component)]
pub struct FpsText;

#[derive(Component)]
pub struct PositionText;

#[derive(Component)]
pub struct NowPlayingText;

#[derive(Component)]
pub struct RadioButton;

#[derive(Component)]
pub struct RadioButtonLabel;

/// Scrolling marquee strip along the bottom edge.
#[derive(Component)]
pub struct Ribbon {
    pub offset: f32,
}

#[derive(Component)]
pub struct RibbonText;

pub fn spawn_hud(mut commands: Commands) {
    commands
        .spawn(Node {
            width: Val::Percent(100.0),
            height: Val::Percent(100.0),
            ..default()
        })
        .with_children(|parent| {
            parent.spawn((
                Text::new("FPS: "),
                TextFont {
                    font_size: 16.0,
                    ..default()
                },
                TextColor(Color::from(NEON_CYAN)),
                Node {
                    position_type: PositionType::Absolute,
                    top: Val::Px(12.0),
                    left: Val::Px(12.0),
                    ..default()
                },
                FpsText,
            ));
            parent.spawn((
                Text::new("X: 0 Y: 0 Z: 0"),
                TextFont {
                    font_size: 16.0,
                    ..default()
                },
                TextColor(Color::from(NEON_CYAN)),
                Node {
                    position_type: PositionType::Absolute,
                    top: Val::Px(34.0),
                    left: Val::Px(12.0),
                    ..default()
                },
                PositionText,
            ));
            parent.spawn((
                Text::new(""),
                TextFont {
                    font_size: 18.0,
                    ..default()
                },
                TextColor(Color::from(NEON_PINK)),
                Node {
                    position_type: PositionType::Absolute,
                    top: Val::Px(12.0),
                    right: Val::Px(12.0),
                    ..default()
                },
                NowPlayingText,
            ));
            parent
                .spawn((
                    Button,
                    Node {
                        position_type: PositionType::Absolute,
                        bottom: Val::Px(48.0),
                        right: Val::Px(12.0),
                        padding: UiRect::axes(Val::Px(14.0), Val::Px(8.0)),
                        border: UiRect::all(Val::Px(1.0)),
                        ..default()
                    },
                    BorderColor(Color::from(NEON_PINK)),
                    BackgroundColor(Color::srgba(0.0, 0.0, 0.0, 0.6)),
                    RadioButton,
                ))
                .with_children(|button| {
                    button.spawn((
                        Text::new("RADIO ON"),
                        TextFont {
                            font_size: 14.0,
                            ..default()
                        },
                        TextColor(Color::from(NEON_PINK)),
                        RadioButtonLabel,
                    ));
                });
            parent
                .spawn((
                    Node {
                        position_type: PositionType::Absolute,
                        bottom: Val::Px(8.0),
                        left: Val::Percent(100.0),
                        ..default()
                    },
                    Ribbon { offset: 100.0 },
                ))
                .with_children(|ribbon| {
                    ribbon.spawn((
                        Text::new(""),
                        TextFont {
                            font_size: 20.0,
                            ..default()
                        },
                        TextColor(Color::from(NEON_PINK)),
                        RibbonText,
                    ));
                });
        });
}

/// Mirror the fetched track label into both the corner readout and the
/// ribbon, only on change.
pub fn update_now_playing_text(
    now_playing: Res<NowPlaying>,
    mut query: Query<&mut Text, Or<(With<NowPlayingText>, With<RibbonText>)>>,
) {
    if !now_playing.is_changed() {
        return;
    }
    for mut text in &mut query {
        text.0 = now_playing.label.clone();
    }
}

pub fn update_radio_button_label(
    state: Res<RadioState>,
    mut query: Query<&mut Text, With<RadioButtonLabel>>,
) {
    if !state.is_changed() {
        return;
    }
    let label = if state.playing { "RADIO OFF" } else { "RADIO ON" };
    for mut text in &mut query {
        text.0 = label.to_string();
    }
}

/// Slide the ribbon right-to-left across the viewport while the radio
/// plays, wrapping past the left edge.
pub fn animate_ribbon(
    time: Res<Time>,
    state: Res<RadioState>,
    mut query: Query<(&mut Ribbon, &mut Node)>,
) {
    if !state.playing {
        return;
    }
    for (mut ribbon, mut node) in &mut query {
        ribbon.offset -= time.delta_secs() * 5.0;
        if ribbon.offset < -40.0 {
            ribbon.offset = 100.0;
        }
        node.left = Val::Percent(ribbon.offset);
    }
}
