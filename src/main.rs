use bevy::prelude::*;

mod camera;
mod config;
mod input;
mod visual;

use bevy::window::WindowResolution;
use camera::CameraPlugin;
use config::AppConfig;
use input::InputPlugin;

use crate::visual::plugin::MagneticTextPlugin;

fn main() {
    let config = AppConfig::load();

    let mut app = App::new();

    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: config.title.clone(),
            resolution: WindowResolution::new(config.width, config.height),
            resizable: true,
            ..default()
        }),
        ..default()
    }))
    .insert_resource(config)
    .add_plugins(CameraPlugin)
    .add_plugins(InputPlugin)
    .add_plugins(MagneticTextPlugin);

    app.run();
}
