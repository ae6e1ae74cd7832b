//! Tossball - a single ball launched with the mouse, built with Bevy
//!
//! Main entry point: app setup and system registration.

use bevy::prelude::*;
use tossball::config_watcher::check_config_changes;
use tossball::ui::{
    HELP_TEXT, draw_aim_line, draw_charge_gauge, draw_ground, draw_trajectory, update_launch_text,
};
use tossball::{
    Ball, BallFlight, ConfigWatcher, DragCharge, LAUNCH_TUNING_FILE, LastLaunchInfo, LaunchInput,
    LaunchText, TrajectoryPath, advance_flight, capture_input, constants::*, launch_ball,
    load_launch_tuning_or_default, reset_ball, update_drag_charge,
};

fn main() {
    // Tuning sets the fixed loop rate, so it is loaded before the app is built
    let tuning = load_launch_tuning_or_default(LAUNCH_TUNING_FILE);
    let frame_rate = tuning.frame_rate;

    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                // Set scale_factor_override to 1.0 so world units match pixels on HiDPI displays
                resolution: bevy::window::WindowResolution::new(
                    WINDOW_WIDTH as u32,
                    WINDOW_HEIGHT as u32,
                )
                .with_scale_factor_override(1.0),
                title: WINDOW_TITLE.into(),
                resizable: false,
                ..default()
            }),
            ..default()
        }))
        .insert_resource(ClearColor(BACKGROUND_COLOR))
        .insert_resource(Time::<Fixed>::from_hz(frame_rate))
        .insert_resource(tuning)
        .insert_resource(ConfigWatcher::new(LAUNCH_TUNING_FILE))
        .init_resource::<LaunchInput>()
        .init_resource::<DragCharge>()
        .init_resource::<LastLaunchInfo>()
        .add_systems(Startup, setup)
        // Input must be captured before the charge mirror reads it
        .add_systems(Update, (capture_input, update_drag_charge).chain())
        .add_systems(Update, (check_config_changes, exit_on_escape))
        .add_systems(
            Update,
            (
                draw_ground,
                draw_trajectory,
                draw_aim_line,
                draw_charge_gauge,
                update_launch_text,
            ),
        )
        // Reset and launch consume buffered input, then the flight advances on the fixed clock
        .add_systems(FixedUpdate, (reset_ball, launch_ball, advance_flight).chain())
        .run();
}

/// Spawn camera, ball, and HUD
fn setup(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<ColorMaterial>>,
) {
    // Default 2D camera: origin at window center, one world unit per pixel
    commands.spawn(Camera2d);

    commands.spawn((
        Mesh2d(meshes.add(Circle::new(BALL_RADIUS))),
        MeshMaterial2d(materials.add(ColorMaterial::from_color(BALL_COLOR))),
        Transform::from_translation(INITIAL_BALL_POSITION.extend(1.0)),
        Ball,
        BallFlight::default(),
        TrajectoryPath::default(),
    ));

    commands.spawn((
        Text::new(""),
        TextFont {
            font_size: 16.0,
            ..default()
        },
        TextColor(TEXT_PRIMARY),
        Node {
            position_type: PositionType::Absolute,
            left: Val::Px(10.0),
            top: Val::Px(10.0),
            ..default()
        },
        LaunchText,
    ));

    commands.spawn((
        Text::new(HELP_TEXT),
        TextFont {
            font_size: 13.0,
            ..default()
        },
        TextColor(TEXT_SECONDARY),
        Node {
            position_type: PositionType::Absolute,
            left: Val::Px(10.0),
            bottom: Val::Px(10.0),
            ..default()
        },
    ));

    info!("Tossball ready: drag with the left mouse button to launch");
}

/// Close the window on Escape
fn exit_on_escape(keyboard: Res<ButtonInput<KeyCode>>, mut exit: MessageWriter<AppExit>) {
    if keyboard.just_pressed(KeyCode::Escape) {
        exit.write(AppExit::Success);
    }
}
