//! Interactive air speed-gain explorer
//!
//! One slider drives the current speed in `[0, 2 * max_speed]`. Whenever it
//! changes, the gain curves of every air model are resampled over the wish
//! angle domain and redrawn. The update chain runs in order each frame:
//! input -> recompute -> widgets -> draw.

use bevy::prelude::*;
use bevy::ui::RelativeCursorPosition;
use bevy::window::PrimaryWindow;

use crate::simulation::scenario::Scenario;
use crate::simulation::trajectory::Curve;
use crate::visualization::panel::{Panel, PALETTE};

/// Height of the control strip under the plot, in pixels
const CONTROLS_HEIGHT: f32 = 110.0;

const TRACK_WIDTH: f32 = 600.0;
const TRACK_HEIGHT: f32 = 18.0;
const HANDLE_WIDTH: f32 = 10.0;

/// Fraction of the slider range covered per second while an arrow key is held
const KEY_RATE: f64 = 0.25;

/// The single continuous input of the explorer
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct SpeedInput {
    pub value: f64,
    pub max: f64,
}

impl SpeedInput {
    pub fn fraction(&self) -> f64 {
        if self.max > 0.0 { self.value / self.max } else { 0.0 }
    }

    pub fn set_fraction(&mut self, fraction: f64) {
        self.value = fraction.clamp(0.0, 1.0) * self.max;
    }
}

/// Latest gain curves, one per air model
#[derive(Resource, Default)]
struct GainCurves(Vec<(&'static str, Curve)>);

#[derive(Component)]
struct SliderTrack;

#[derive(Component)]
struct SliderHandle;

#[derive(Component)]
struct SpeedReadout;

pub fn run_air(scenario: Scenario) {
    println!("run_air: starting Bevy viewer with {} air models", scenario.air.len());

    let speed = SpeedInput {
        value: scenario.parameters.max_speed,
        max: 2.0 * scenario.parameters.max_speed,
    };

    App::new()
        .insert_resource(scenario)
        .insert_resource(speed)
        .init_resource::<GainCurves>()
        .insert_resource(ClearColor(Color::srgb(0.05, 0.05, 0.07)))
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "curvex: air speed gain".into(),
                ..Default::default()
            }),
            ..Default::default()
        }))
        .add_systems(Startup, setup_air)
        .add_systems(
            Update,
            (
                (slider_drag, slider_keys),
                recompute_gain_curves,
                (sync_slider_handle, update_readout),
                draw_gain_curves,
            )
                .chain(),
        )
        .run();
}

fn setup_air(mut commands: Commands, scenario: Res<Scenario>, speed: Res<SpeedInput>) {
    commands.spawn(Camera2dBundle::default());

    let text_style = |color: Color| TextStyle {
        font_size: 18.0,
        color,
        ..Default::default()
    };

    // Legend, top center
    let sections: Vec<TextSection> = scenario
        .air
        .names()
        .enumerate()
        .map(|(i, name)| TextSection::new(format!("{name}    "), text_style(PALETTE[i % PALETTE.len()])))
        .collect();
    commands
        .spawn(NodeBundle {
            style: Style {
                position_type: PositionType::Absolute,
                top: Val::Px(12.0),
                width: Val::Percent(100.0),
                justify_content: JustifyContent::Center,
                ..Default::default()
            },
            ..Default::default()
        })
        .with_children(|parent| {
            parent.spawn(TextBundle::from_sections(sections));
        });

    // Control strip: readout above the slider track
    commands
        .spawn(NodeBundle {
            style: Style {
                position_type: PositionType::Absolute,
                bottom: Val::Px(0.0),
                width: Val::Percent(100.0),
                height: Val::Px(CONTROLS_HEIGHT),
                flex_direction: FlexDirection::Column,
                align_items: AlignItems::Center,
                justify_content: JustifyContent::Center,
                row_gap: Val::Px(10.0),
                ..Default::default()
            },
            ..Default::default()
        })
        .with_children(|strip| {
            strip.spawn((TextBundle::from_section("", text_style(Color::WHITE)), SpeedReadout));

            strip
                .spawn((
                    ButtonBundle {
                        style: Style {
                            width: Val::Px(TRACK_WIDTH),
                            height: Val::Px(TRACK_HEIGHT),
                            ..Default::default()
                        },
                        background_color: BackgroundColor(Color::srgb(0.25, 0.25, 0.3)),
                        ..Default::default()
                    },
                    RelativeCursorPosition::default(),
                    SliderTrack,
                ))
                .with_children(|track| {
                    track.spawn((
                        NodeBundle {
                            style: Style {
                                position_type: PositionType::Absolute,
                                left: handle_left(speed.fraction()),
                                width: Val::Px(HANDLE_WIDTH),
                                height: Val::Percent(100.0),
                                ..Default::default()
                            },
                            background_color: BackgroundColor(Color::WHITE),
                            ..Default::default()
                        },
                        SliderHandle,
                    ));
                });
        });

    info!(
        "air explorer: speed range [0, {}], {} angle samples",
        speed.max, scenario.config.air.angle_points
    );
}

fn handle_left(fraction: f64) -> Val {
    Val::Px(fraction as f32 * (TRACK_WIDTH - HANDLE_WIDTH))
}

fn slider_drag(
    tracks: Query<(&Interaction, &RelativeCursorPosition), With<SliderTrack>>,
    mut speed: ResMut<SpeedInput>,
) {
    for (interaction, cursor) in &tracks {
        if *interaction != Interaction::Pressed {
            continue;
        }
        let Some(pos) = cursor.normalized else {
            continue;
        };
        let mut next = speed.clone();
        next.set_fraction(pos.x as f64);
        // only touch the resource on a real change so recompute stays idle
        speed.set_if_neq(next);
    }
}

fn slider_keys(keys: Res<ButtonInput<KeyCode>>, time: Res<Time>, mut speed: ResMut<SpeedInput>) {
    let mut direction = 0.0;
    if keys.pressed(KeyCode::ArrowRight) {
        direction += 1.0;
    }
    if keys.pressed(KeyCode::ArrowLeft) {
        direction -= 1.0;
    }
    if direction == 0.0 {
        return;
    }
    let mut next = speed.clone();
    next.set_fraction(speed.fraction() + direction * KEY_RATE * time.delta_seconds_f64());
    speed.set_if_neq(next);
}

fn recompute_gain_curves(scenario: Res<Scenario>, speed: Res<SpeedInput>, mut curves: ResMut<GainCurves>) {
    if !speed.is_changed() {
        return;
    }
    match scenario.air_gain_curves(speed.value) {
        Ok(c) => {
            debug!(speed = speed.value, "gain curves recomputed");
            curves.0 = c;
        }
        Err(e) => error!("failed to sample gain curves: {e}"),
    }
}

fn sync_slider_handle(speed: Res<SpeedInput>, mut handles: Query<&mut Style, With<SliderHandle>>) {
    if !speed.is_changed() {
        return;
    }
    for mut style in &mut handles {
        style.left = handle_left(speed.fraction());
    }
}

fn update_readout(
    speed: Res<SpeedInput>,
    scenario: Res<Scenario>,
    mut readouts: Query<&mut Text, With<SpeedReadout>>,
) {
    if !speed.is_changed() {
        return;
    }
    for mut text in &mut readouts {
        text.sections[0].value = format!(
            "current speed: {:.2}   (max speed {:.1}, tick {:.4} s, arrows to nudge)",
            speed.value, scenario.parameters.max_speed, scenario.config.air.tick
        );
    }
}

fn draw_gain_curves(
    curves: Res<GainCurves>,
    windows: Query<&Window, With<PrimaryWindow>>,
    mut gizmos: Gizmos,
) {
    let Ok(window) = windows.get_single() else {
        return;
    };
    let (w, h) = (window.width(), window.height());
    let cell = Rect::new(-w / 2.0, -h / 2.0 + CONTROLS_HEIGHT, w / 2.0, h / 2.0);

    let series: Vec<&Curve> = curves.0.iter().map(|(_, c)| c).collect();
    let panel = Panel::fit(cell, &series);
    panel.draw_frame(&mut gizmos);
    for (i, curve) in series.into_iter().enumerate() {
        panel.draw_series(&mut gizmos, curve, PALETTE[i % PALETTE.len()]);
    }
}
