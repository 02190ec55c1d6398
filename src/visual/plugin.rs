use bevy::prelude::*;
use bevy::ui::UiSystems;

use crate::config::AppConfig;
use crate::visual::cursor::restyle_cursor;
use crate::visual::layout::{MagneticText, mount_magnetic_text, render_letters, sync_layout_bounds};
use crate::visual::tracker::{
    animate_letters, attach_pointer_tracker, handle_pointer_input, release_pointer_tracker,
};

pub struct MagneticTextPlugin;

impl Plugin for MagneticTextPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_configured_widget)
            .add_systems(
                Update,
                (
                    // Layout
                    mount_magnetic_text,
                    render_letters,
                    restyle_cursor,
                    // Listener lifecycle
                    attach_pointer_tracker,
                    release_pointer_tracker,
                    // Pointer tracking + transitions
                    handle_pointer_input,
                    animate_letters,
                )
                    .chain(),
            )
            // Bounds must reflect this frame's layout, translations included
            .add_systems(PostUpdate, sync_layout_bounds.after(UiSystems::Layout));
    }
}

/// System: Spawn the widget described by the loaded config
fn spawn_configured_widget(mut commands: Commands, config: Option<Res<AppConfig>>) {
    let Some(config) = config else {
        warn!("No AppConfig resource, nothing to mount");
        return;
    };

    commands.spawn((MagneticText::from(config.as_ref()), Name::new("Magnetic Text")));
}
