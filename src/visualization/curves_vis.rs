use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use crate::simulation::scenario::Scenario;
use crate::simulation::trajectory::Series;
use crate::visualization::panel::{grid_cell, Panel, PALETTE};

/// Which panels the static explorer shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Resource)]
pub enum CurvesLayout {
    /// 2x2: simulated / theoretical acceleration over simulated / theoretical deceleration
    Full,
    /// simulated deceleration over theoretical deceleration
    DecelerationOnly,
}

impl CurvesLayout {
    fn grid(self) -> (usize, usize) {
        match self {
            CurvesLayout::Full => (2, 2),
            CurvesLayout::DecelerationOnly => (2, 1),
        }
    }
}

fn panel_entries(scenario: &Scenario, layout: CurvesLayout) -> Vec<(&'static str, &Series)> {
    match layout {
        CurvesLayout::Full => vec![
            ("simulated acceleration", &scenario.acceleration.trajectory),
            ("theoretical acceleration", &scenario.acceleration_theory),
            ("simulated deceleration", &scenario.deceleration.trajectory),
            ("theoretical deceleration", &scenario.deceleration_theory),
        ],
        CurvesLayout::DecelerationOnly => vec![
            ("simulated deceleration", &scenario.deceleration.trajectory),
            ("theoretical deceleration", &scenario.deceleration_theory),
        ],
    }
}

pub fn run_curves(scenario: Scenario, layout: CurvesLayout) {
    println!("run_curves: starting Bevy viewer with {:?} layout", layout);

    App::new()
        .insert_resource(scenario)
        .insert_resource(layout)
        .insert_resource(ClearColor(Color::srgb(0.05, 0.05, 0.07)))
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "curvex: acceleration / deceleration".into(),
                ..Default::default()
            }),
            ..Default::default()
        }))
        .add_systems(Startup, setup_panels)
        .add_systems(Update, draw_panels)
        .run();
}

fn setup_panels(mut commands: Commands, scenario: Res<Scenario>, layout: Res<CurvesLayout>) {
    commands.spawn(Camera2dBundle::default());

    let (rows, cols) = layout.grid();
    for (i, (title, _)) in panel_entries(&scenario, *layout).iter().enumerate() {
        let (row, col) = (i / cols, i % cols);
        // titles are UI nodes laid out in window percentages, matching grid_cell
        commands
            .spawn(NodeBundle {
                style: Style {
                    position_type: PositionType::Absolute,
                    left: Val::Percent(100.0 * col as f32 / cols as f32),
                    top: Val::Percent(100.0 * row as f32 / rows as f32),
                    width: Val::Percent(100.0 / cols as f32),
                    justify_content: JustifyContent::Center,
                    padding: UiRect::top(Val::Px(14.0)),
                    ..Default::default()
                },
                ..Default::default()
            })
            .with_children(|parent| {
                parent.spawn(TextBundle::from_section(
                    *title,
                    TextStyle {
                        font_size: 18.0,
                        color: Color::WHITE,
                        ..Default::default()
                    },
                ));
            });
    }

    info!("{}", scenario.diagnostics());
}

fn draw_panels(
    scenario: Res<Scenario>,
    layout: Res<CurvesLayout>,
    windows: Query<&Window, With<PrimaryWindow>>,
    mut gizmos: Gizmos,
) {
    let Ok(window) = windows.get_single() else {
        return;
    };
    let (rows, cols) = layout.grid();

    for (i, (_, series)) in panel_entries(&scenario, *layout).into_iter().enumerate() {
        let cell = grid_cell(window, rows, cols, i / cols, i % cols);
        let panel = Panel::fit(cell, &[series]);
        panel.draw_frame(&mut gizmos);
        panel.draw_series(&mut gizmos, series, PALETTE[0]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::configuration::config::ScenarioConfig;

    #[test]
    fn every_layout_cell_is_filled() {
        let scenario = Scenario::build_scenario(ScenarioConfig::default()).unwrap();
        for layout in [CurvesLayout::Full, CurvesLayout::DecelerationOnly] {
            let (rows, cols) = layout.grid();
            assert_eq!(panel_entries(&scenario, layout).len(), rows * cols);
        }
    }
}
