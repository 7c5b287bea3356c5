use bevy::prelude::*;
use bevy::render::render_asset::RenderAssetUsages;
use bevy::render::render_resource::{Extent3d, TextureDimension, TextureFormat};
use bevy::window::{PresentMode, PrimaryWindow, WindowCloseRequested, WindowResolution};
use thiserror::Error;

use crate::simulation::engine::tick;
use crate::simulation::scenario::Scenario;
use crate::visualization::pixels::{PixelBuffer, PixelError, BACKGROUND};

/// Frames between two debug stat lines
const STATS_INTERVAL: u64 = 600;

#[derive(Debug, Error)]
pub enum ViewerError {
    #[error("no primary window to present frames into")]
    NoPrimaryWindow,
    #[error("frame texture was dropped")]
    MissingTexture,
    #[error("frame upload failed: {0}")]
    Upload(#[from] PixelError),
}

/// Streaming texture shown by the only sprite, plus the CPU frame behind it
#[derive(Resource)]
struct FrameTexture {
    image: Handle<Image>,
    buffer: PixelBuffer,
}

/// Open the window and run draw-then-step once per presented frame
///
/// Returns when the window is closed, `AppExit::Success`, or when the frame
/// texture cannot be set up or updated, `AppExit::Error`.
pub fn run_2d(scenario: Scenario) -> AppExit {
    let window = Window {
        title: scenario.engine.title.clone(),
        resolution: WindowResolution::new(
            scenario.engine.width as f32,
            scenario.engine.height as f32,
        ),
        resizable: false,
        present_mode: PresentMode::AutoVsync, // pacing comes from the display
        ..default()
    };

    App::new()
        .insert_resource(ClearColor(Color::WHITE))
        .insert_resource(scenario)
        .add_plugins(
            DefaultPlugins
                .set(WindowPlugin {
                    primary_window: Some(window),
                    ..default()
                })
                .set(ImagePlugin::default_nearest()),
        )
        .add_systems(Startup, setup_frame_system)
        .add_systems(Update, (frame_step_system, quit_request_system))
        .run()
}

fn setup_frame_system(
    mut commands: Commands,
    scenario: Res<Scenario>,
    windows: Query<&Window, With<PrimaryWindow>>,
    mut images: ResMut<Assets<Image>>,
    mut exit: EventWriter<AppExit>,
) {
    if windows.get_single().is_err() {
        error!("{}", ViewerError::NoPrimaryWindow);
        exit.send(AppExit::error());
        return;
    }

    let (width, height) = (scenario.engine.width, scenario.engine.height);
    let p = &scenario.state.pendulum;
    info!(
        "dpsim: {}x{} surface, arms ({}, {}), masses ({}, {}), angles ({:.4}, {:.4}), g = {}",
        width,
        height,
        p.arm_length.x,
        p.arm_length.y,
        p.mass.x,
        p.mass.y,
        p.angle.x,
        p.angle.y,
        scenario.parameters.g
    );

    commands.spawn(Camera2dBundle::default());

    let size = Extent3d {
        width,
        height,
        depth_or_array_layers: 1,
    };
    let image = Image::new_fill(
        size,
        TextureDimension::D2,
        &BACKGROUND.to_be_bytes(),
        TextureFormat::Rgba8UnormSrgb,
        RenderAssetUsages::MAIN_WORLD | RenderAssetUsages::RENDER_WORLD,
    );
    let handle = images.add(image);

    // Image is width x height pixels and the 2D camera maps one unit to one pixel
    commands.spawn(SpriteBundle {
        texture: handle.clone(),
        ..default()
    });

    commands.insert_resource(FrameTexture {
        image: handle,
        buffer: PixelBuffer::new(width, height, BACKGROUND),
    });
}

fn frame_step_system(
    mut scenario: ResMut<Scenario>,
    frame: Option<ResMut<FrameTexture>>,
    mut images: ResMut<Assets<Image>>,
    mut exit: EventWriter<AppExit>,
) {
    // Startup bailed out before creating the texture
    let Some(mut frame) = frame else {
        return;
    };
    let FrameTexture { image, buffer } = &mut *frame;

    let report = tick(&mut scenario, buffer);

    if let Err(err) = upload(buffer, image, &mut images) {
        error!("frame {}: {}", report.frame, err);
        exit.send(AppExit::error());
        return;
    }

    if report.frame % STATS_INTERVAL == 0 {
        let d = &scenario.diagnostics;
        debug!(
            "frame {}: {} trace frames, {} near-singular, angles ({:.3}, {:.3})",
            report.frame,
            d.stamped_frames,
            d.singular_frames,
            scenario.state.pendulum.angle.x,
            scenario.state.pendulum.angle.y
        );
    }
}

fn upload(
    buffer: &PixelBuffer,
    handle: &Handle<Image>,
    images: &mut Assets<Image>,
) -> Result<(), ViewerError> {
    let image = images.get_mut(handle).ok_or(ViewerError::MissingTexture)?;
    buffer.write_rgba8(&mut image.data)?;
    Ok(())
}

fn quit_request_system(mut requests: EventReader<WindowCloseRequested>, scenario: Res<Scenario>) {
    for _ in requests.read() {
        let d = &scenario.diagnostics;
        info!(
            "quit requested after {} frames ({} traced, {} near-singular)",
            d.frames, d.stamped_frames, d.singular_frames
        );
    }
}
