use bevy::input::mouse::{MouseMotion, MouseWheel};
use bevy::math::primitives::Circle;
use bevy::prelude::*;
use bevy::sprite::{Anchor, MaterialMesh2dBundle, Mesh2dHandle};
use bevy::window::PrimaryWindow;

use crate::simulation::engine::Simulation;
use crate::simulation::states::{NVec2, Rgb};
use crate::visualization::surface::{CommandBuffer, DrawCommand};

/// Pixels moved per arrow key press
const PAN_STEP: f64 = 20.0;

const LABEL_FONT_SIZE: f32 = 14.0;

/// Draw calls issued by the simulation during the current frame
#[derive(Resource, Default)]
struct Frame(CommandBuffer);

/// Unit circle shared by every disc entity, scaled to the drawn radius
#[derive(Resource)]
struct DiscMesh(Mesh2dHandle);

/// Index of the `fill_circle` call this entity displays
#[derive(Component)]
struct DiscSlot(usize);

/// Index of the `draw_text` call this entity displays
#[derive(Component)]
struct LabelSlot(usize);

pub fn run_2d(simulation: Simulation) {
    println!("run_2d: starting Bevy 2D viewer with {} bodies", simulation.bodies().len());

    App::new()
        .insert_resource(simulation)
        .init_resource::<Frame>()
        // trails keep the previous frame in the main texture
        .insert_resource(Msaa::Off)
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "orbitview".into(),
                resolution: (960.0, 960.0).into(),
                ..default()
            }),
            ..default()
        }))
        .add_systems(Startup, setup_view_system)
        .add_systems(
            Update,
            (keyboard_system, mouse_system, tick_system, present_frame_system).chain(),
        )
        .run();
}

fn setup_view_system(mut commands: Commands, mut meshes: ResMut<Assets<Mesh>>) {
    commands.spawn(Camera2dBundle {
        camera: Camera {
            clear_color: ClearColorConfig::Custom(Color::BLACK),
            ..default()
        },
        ..default()
    });
    commands.insert_resource(DiscMesh(Mesh2dHandle(meshes.add(Circle::new(1.0)))));
}

fn keyboard_system(keys: Res<ButtonInput<KeyCode>>, mut simulation: ResMut<Simulation>) {
    let mut pan = NVec2::zeros();
    if keys.just_pressed(KeyCode::ArrowLeft) {
        pan.x -= PAN_STEP;
    }
    if keys.just_pressed(KeyCode::ArrowRight) {
        pan.x += PAN_STEP;
    }
    if keys.just_pressed(KeyCode::ArrowUp) {
        pan.y -= PAN_STEP;
    }
    if keys.just_pressed(KeyCode::ArrowDown) {
        pan.y += PAN_STEP;
    }
    if pan != NVec2::zeros() {
        let offset = simulation.view().pan_offset + pan;
        simulation.set_pan_offset(offset);
    }

    if keys.any_just_pressed([KeyCode::Equal, KeyCode::NumpadAdd]) {
        simulation.zoom(-1.0);
    }
    if keys.any_just_pressed([KeyCode::Minus, KeyCode::NumpadSubtract]) {
        simulation.zoom(1.0);
    }

    if keys.just_pressed(KeyCode::Space) {
        simulation.toggle_pause();
        info!("{}", if simulation.is_paused() { "paused" } else { "running" });
    }
    if keys.just_pressed(KeyCode::KeyT) {
        let leave_trace = !simulation.view().leave_trace;
        simulation.set_leave_trace(leave_trace);
        info!("trails {}", if leave_trace { "on" } else { "off" });
    }

    if keys.just_pressed(KeyCode::Tab) {
        let next = next_center(&simulation);
        simulation.select_center_body(&next);
    }
    if keys.just_pressed(KeyCode::Escape) {
        simulation.select_center_body("");
    }
}

/// Body after the current center in `list_body_names`, or "" (no centering)
/// after the last one
fn next_center(simulation: &Simulation) -> String {
    let names = simulation.list_body_names();
    let next = match simulation.view().center.as_deref() {
        None => names.first(),
        Some(current) => names
            .iter()
            .position(|n| *n == current)
            .and_then(|i| names.get(i + 1)),
    };
    next.map(|n| n.to_string()).unwrap_or_default()
}

fn mouse_system(
    input_mouse: Res<ButtonInput<MouseButton>>,
    mut motion_events: EventReader<MouseMotion>,
    mut scroll_events: EventReader<MouseWheel>,
    mut simulation: ResMut<Simulation>,
) {
    let drag = input_mouse
        .pressed(MouseButton::Left)
        .then(|| motion_events.read().map(|ev| ev.delta).sum::<Vec2>())
        .unwrap_or_default();
    motion_events.clear();

    if drag != Vec2::ZERO {
        let offset = simulation.view().pan_offset + NVec2::new(drag.x as f64, drag.y as f64);
        simulation.set_pan_offset(offset);
    }

    let scroll = scroll_events.read().map(|ev| ev.y).sum::<f32>();

    // one zoom step per frame; wheel up zooms in, i.e. shrinks the view size
    if scroll != 0.0 {
        simulation.zoom(-(scroll.signum() as f64));
    }
}

fn tick_system(
    query_window: Query<&Window, With<PrimaryWindow>>,
    mut simulation: ResMut<Simulation>,
    mut frame: ResMut<Frame>,
) {
    match query_window.get_single() {
        Ok(window) => {
            let (width, height) = (window.width() as f64, window.height() as f64);
            simulation.tick(Some(&mut frame.0), width, height);
        }
        Err(_) => simulation.tick(None::<&mut CommandBuffer>, 0.0, 0.0),
    }
}

fn to_color(rgb: Rgb) -> Color {
    let [r, g, b] = rgb.to_unit();
    Color::srgb(r, g, b)
}

/// Surface pixels (origin top-left, y down) to 2D world space of a camera at
/// the window center (y up)
fn to_world(x: f64, y: f64, window: &Window, z: f32) -> Vec3 {
    Vec3::new(
        x as f32 - window.width() / 2.0,
        window.height() / 2.0 - y as f32,
        z,
    )
}

/// Replay the frame's draw calls onto pooled disc and label entities
#[allow(clippy::too_many_arguments)]
fn present_frame_system(
    mut commands: Commands,
    mut frame: ResMut<Frame>,
    disc_mesh: Res<DiscMesh>,
    mut materials: ResMut<Assets<ColorMaterial>>,
    query_window: Query<&Window, With<PrimaryWindow>>,
    mut query_camera: Query<&mut Camera>,
    mut query_discs: Query<
        (&DiscSlot, &mut Transform, &Handle<ColorMaterial>, &mut Visibility),
        Without<LabelSlot>,
    >,
    mut query_labels: Query<(&LabelSlot, &mut Transform, &mut Text, &mut Visibility), Without<DiscSlot>>,
) {
    // paused or no surface: nothing drawn, previous picture stays
    if frame.0.is_empty() {
        return;
    }
    let draw_calls = frame.0.take();
    let Ok(window) = query_window.get_single() else {
        return;
    };

    let cleared = draw_calls.iter().any(|c| matches!(c, DrawCommand::Clear { .. }));
    if let Ok(mut camera) = query_camera.get_single_mut() {
        camera.clear_color = if cleared {
            ClearColorConfig::Custom(Color::BLACK)
        } else {
            ClearColorConfig::None
        };
    }

    let circles: Vec<(Vec3, f32, Color)> = draw_calls
        .iter()
        .filter_map(|c| match c {
            DrawCommand::FillCircle { x, y, radius, color } => {
                Some((to_world(*x, *y, window, 0.0), *radius as f32, to_color(*color)))
            }
            _ => None,
        })
        .collect();
    let texts: Vec<(Vec3, &str)> = draw_calls
        .iter()
        .filter_map(|c| match c {
            DrawCommand::Text { x, y, text } => Some((to_world(*x, *y, window, 1.0), text.as_str())),
            _ => None,
        })
        .collect();

    let mut disc_slots = 0;
    for (DiscSlot(i), mut transform, material, mut visibility) in &mut query_discs {
        disc_slots = disc_slots.max(*i + 1);
        match circles.get(*i) {
            Some(&(translation, radius, color)) => {
                *transform = Transform::from_translation(translation).with_scale(Vec3::splat(radius));
                if let Some(m) = materials.get_mut(material) {
                    if m.color != color {
                        m.color = color;
                    }
                }
                *visibility = Visibility::Visible;
            }
            None => *visibility = Visibility::Hidden,
        }
    }
    for (i, &(translation, radius, color)) in circles.iter().enumerate().skip(disc_slots) {
        commands.spawn((
            MaterialMesh2dBundle {
                mesh: disc_mesh.0.clone(),
                material: materials.add(ColorMaterial::from(color)),
                transform: Transform::from_translation(translation).with_scale(Vec3::splat(radius)),
                ..default()
            },
            DiscSlot(i),
        ));
    }

    let mut label_slots = 0;
    for (LabelSlot(i), mut transform, mut text, mut visibility) in &mut query_labels {
        label_slots = label_slots.max(*i + 1);
        match texts.get(*i) {
            Some(&(translation, value)) => {
                transform.translation = translation;
                if text.sections[0].value != value {
                    text.sections[0].value = value.to_string();
                }
                *visibility = Visibility::Visible;
            }
            None => *visibility = Visibility::Hidden,
        }
    }
    for (i, &(translation, value)) in texts.iter().enumerate().skip(label_slots) {
        commands.spawn((
            Text2dBundle {
                text: Text::from_section(
                    value,
                    TextStyle {
                        font_size: LABEL_FONT_SIZE,
                        color: Color::WHITE,
                        ..default()
                    },
                ),
                text_anchor: Anchor::CenterLeft,
                transform: Transform::from_translation(translation),
                ..default()
            },
            LabelSlot(i),
        ));
    }
}
