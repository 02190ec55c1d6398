//! Layout side of the magnetic text widget.
//!
//! The entity holding [`MagneticText`] becomes a full-viewport container. Its
//! children are the cursor indicator and a single [`LetterRow`] holding one
//! [`Letter`] node per character of the text.

use bevy::prelude::*;
use bevy::ui::{ComputedNode, UiGlobalTransform, UiTransform};

use crate::config::{AppConfig, DEFAULT_INTENSITY, DEFAULT_MAX_DISTANCE};
use crate::visual::{
    cursor::cursor_bundle,
    displacement::{LetterMotion, TrackerSettings},
    theme::{Theme, theme_for_class},
};

/// Widget props. Spawn one to mount the widget; mutate it to re-render.
#[derive(Component, Debug, Clone, PartialEq)]
pub struct MagneticText {
    pub text: String,
    /// Whitespace-separated style class names, see [`crate::visual::theme`]
    pub class: Option<String>,
    pub intensity: f32,
    pub max_distance: f32,
}

impl MagneticText {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            class: None,
            intensity: DEFAULT_INTENSITY,
            max_distance: DEFAULT_MAX_DISTANCE,
        }
    }

    pub fn settings(&self) -> TrackerSettings {
        TrackerSettings {
            intensity: self.intensity,
            max_distance: self.max_distance,
        }
    }

    pub fn theme(&self) -> Theme {
        theme_for_class(self.class.as_deref())
    }
}

impl From<&AppConfig> for MagneticText {
    fn from(config: &AppConfig) -> Self {
        Self {
            text: config.text.clone(),
            class: config.class.clone(),
            intensity: config.intensity,
            max_distance: config.max_distance,
        }
    }
}

/// On-screen rectangle of the container in logical pixels; `None` until laid out
#[derive(Component, Debug, Default, Clone, Copy)]
pub struct ContainerBounds(pub Option<Rect>);

/// Row of letters, remembers what it was rendered from
#[derive(Component, Debug)]
pub struct LetterRow {
    pub text: String,
    pub class: Option<String>,
}

/// One character cell; the glyph itself lives in its `Text`
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Letter {
    pub index: usize,
}

/// On-screen rectangle of a letter in logical pixels, including its current translation
#[derive(Component, Debug, Default, Clone, Copy)]
pub struct LetterBounds(pub Rect);

fn container_node() -> Node {
    Node {
        width: Val::Vw(100.0),
        height: Val::Vh(100.0),
        justify_content: JustifyContent::Center,
        align_items: AlignItems::Center,
        overflow: Overflow::clip(),
        ..default()
    }
}

fn row_node(theme: &Theme) -> Node {
    Node {
        flex_direction: FlexDirection::Row,
        align_items: AlignItems::Center,
        column_gap: Val::Px(theme.letter_gap),
        ..default()
    }
}

fn letter_bundle(glyph: char, index: usize, theme: &Theme) -> impl Bundle {
    // Whitespace measures to nothing, keep a visible gap for it
    let min_width = if glyph.is_whitespace() {
        Val::Px(theme.font_size * 0.25)
    } else {
        Val::Auto
    };

    (
        Letter { index },
        Node {
            min_width,
            ..default()
        },
        Text::new(glyph.to_string()),
        TextFont {
            font_size: theme.font_size,
            ..default()
        },
        TextColor(theme.text_color),
        UiTransform::default(),
        LetterMotion::default(),
        LetterBounds::default(),
    )
}

/// System: Turn a freshly spawned `MagneticText` into a container with a cursor
pub fn mount_magnetic_text(
    mut commands: Commands,
    widgets: Query<(Entity, &MagneticText), Added<MagneticText>>,
) {
    for (entity, widget) in &widgets {
        let theme = widget.theme();
        commands
            .entity(entity)
            .insert((
                container_node(),
                BackgroundColor(theme.background),
                ContainerBounds::default(),
            ))
            .with_child(cursor_bundle(&theme));

        info!(
            "Mounted magnetic text {:?} ({} chars)",
            widget.text,
            widget.text.chars().count()
        );
    }
}

/// System: (Re)build the letter row when text or class changed
pub fn render_letters(
    mut commands: Commands,
    mut widgets: Query<
        (Entity, &MagneticText, Option<&Children>, Option<&mut BackgroundColor>),
        Changed<MagneticText>,
    >,
    rows: Query<&LetterRow>,
) {
    for (entity, widget, children, background) in &mut widgets {
        let existing: Vec<Entity> = children
            .map(|children| children.to_vec())
            .unwrap_or_default()
            .into_iter()
            .filter(|child| rows.contains(*child))
            .collect();

        let up_to_date = existing.len() == 1
            && rows
                .get(existing[0])
                .is_ok_and(|row| row.text == widget.text && row.class == widget.class);
        if up_to_date {
            continue;
        }

        for row in existing {
            commands.entity(row).despawn();
        }

        let theme = widget.theme();
        if let Some(mut background) = background {
            background.set_if_neq(BackgroundColor(theme.background));
        }

        let row = commands
            .spawn((
                LetterRow {
                    text: widget.text.clone(),
                    class: widget.class.clone(),
                },
                row_node(&theme),
                ChildOf(entity),
            ))
            .id();

        for (index, glyph) in widget.text.chars().enumerate() {
            commands.spawn((letter_bundle(glyph, index, &theme), ChildOf(row)));
        }

        debug!(
            "Rendered {} letters for {:?}",
            widget.text.chars().count(),
            widget.text
        );
    }
}

/// System: Read the laid-out rectangles of letters and containers (logical pixels)
pub fn sync_layout_bounds(
    mut letters: Query<(&ComputedNode, &UiGlobalTransform, &mut LetterBounds)>,
    mut containers: Query<(&ComputedNode, &UiGlobalTransform, &mut ContainerBounds)>,
) {
    for (node, transform, mut bounds) in &mut letters {
        bounds.0 = logical_rect(node, transform);
    }
    for (node, transform, mut bounds) in &mut containers {
        bounds.0 = Some(logical_rect(node, transform));
    }
}

fn logical_rect(node: &ComputedNode, transform: &UiGlobalTransform) -> Rect {
    let scale = node.inverse_scale_factor();
    Rect::from_center_size(transform.translation * scale, node.size() * scale)
}

#[cfg(test)]
mod tests {
    use bevy::ecs::system::RunSystemOnce;
    use bevy::math::Affine2;

    use super::*;

    #[test]
    fn test_bounds_converted_to_logical_pixels() {
        let mut world = World::new();

        // 2x display: physical center (300, 200), physical size 60x120
        let node = ComputedNode {
            size: Vec2::new(60.0, 120.0),
            inverse_scale_factor: 0.5,
            ..Default::default()
        };
        let transform = UiGlobalTransform::from(Affine2::from_translation(Vec2::new(300.0, 200.0)));

        let letter = world
            .spawn((node, transform, LetterBounds::default()))
            .id();
        let container = world
            .spawn((node, transform, ContainerBounds::default()))
            .id();

        world.run_system_once(sync_layout_bounds).unwrap();

        let expected = Rect::from_center_size(Vec2::new(150.0, 100.0), Vec2::new(30.0, 60.0));
        assert_eq!(world.get::<LetterBounds>(letter).unwrap().0, expected);
        assert_eq!(world.get::<ContainerBounds>(container).unwrap().0, Some(expected));
    }

    #[test]
    fn test_props_from_config() {
        let config = AppConfig {
            text: "hey".into(),
            class: Some("paper".into()),
            intensity: -0.25,
            max_distance: 120.0,
            ..AppConfig::default()
        };
        let widget = MagneticText::from(&config);

        assert_eq!(widget.text, "hey");
        assert_eq!(widget.theme(), crate::visual::theme::presets::PAPER);
        assert_eq!(
            widget.settings(),
            TrackerSettings {
                intensity: -0.25,
                max_distance: 120.0,
            }
        );
    }
}
