//! 3D viewer for building footprint room geometry using Bevy.
//!
//! Loads a footprint API response from disk, builds every room type face
//! with its atlas texture, and displays the result with an orbit camera.

mod camera;
mod launch_params;
mod mesh;
mod scene;

use std::process::ExitCode;

use bevy::prelude::*;
use camera::OrbitCameraPlugin;
use footprint::Response;
use scene::{FootprintData, FootprintScenePlugin};

/// Plugin for the main application.
pub struct AppPlugin;

impl Plugin for AppPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins((FootprintScenePlugin, OrbitCameraPlugin));
    }
}

fn main() -> ExitCode {
    {
        use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
        tracing_subscriber::registry()
            .with(tracing_subscriber::fmt::layer())
            .with(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
            )
            .init();
    }

    let params = launch_params::parse();

    let response = match Response::load(&params.input) {
        Ok(response) => response,
        Err(e) => {
            tracing::error!("Failed to load response: {}", e);
            return ExitCode::FAILURE;
        }
    };
    tracing::info!(
        "Loaded {}: {} buildings, {} faces",
        params.input.display(),
        response.data.len(),
        response.face_count()
    );

    let window = Window {
        title: "footprint-viewer".to_string(),
        resolution: (1280, 720).into(),
        ..Default::default()
    };

    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(window),
            ..Default::default()
        }))
        .insert_resource(params)
        .insert_resource(FootprintData { response })
        .add_plugins(AppPlugin)
        .run();

    ExitCode::SUCCESS
}
