use bevy::prelude::*;

pub struct CameraPlugin;

impl Plugin for CameraPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, setup_camera)
            .add_systems(Update, log_viewport_resize);
    }
}

/// UI renders through a plain 2D camera; the widget container covers the whole viewport
fn setup_camera(mut commands: Commands) {
    commands.spawn((Camera2d, Name::new("UI Camera")));
}

/// Log the logical viewport size whenever the window is resized
fn log_viewport_resize(mut last_size: Local<Vec2>, windows: Query<&Window>) {
    if let Ok(window) = windows.single() {
        let size = window.size();

        // Only log if the size actually changed
        if (size - *last_size).abs().max_element() > 0.5 {
            *last_size = size;
            info!("Viewport resized to {}x{}", size.x, size.y);
        }
    }
}
