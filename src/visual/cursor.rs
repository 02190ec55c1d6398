use bevy::prelude::*;
use bevy::ui::{UiTransform, Val2};

use crate::visual::{layout::MagneticText, theme::Theme};

/// Circular marker that follows the raw pointer position
#[derive(Component, Debug, Default)]
pub struct CursorIndicator;

/// Drawn above the letters
const CURSOR_Z_INDEX: i32 = 10;

pub fn cursor_bundle(theme: &Theme) -> impl Bundle {
    (
        CursorIndicator,
        Node {
            position_type: PositionType::Absolute,
            width: Val::Px(theme.cursor_size),
            height: Val::Px(theme.cursor_size),
            border: UiRect::all(Val::Px(1.0)),
            ..default()
        },
        BackgroundColor(theme.cursor_color),
        BorderColor::all(theme.cursor_border),
        BorderRadius::MAX,
        // Center the marker on its left/top anchor
        UiTransform {
            translation: Val2::percent(-50.0, -50.0),
            ..default()
        },
        GlobalZIndex(CURSOR_Z_INDEX),
        // Nothing to show until the first pointer move
        Visibility::Hidden,
    )
}

/// Move the marker so its center sits on `position`
pub fn place_cursor(node: &mut Node, visibility: &mut Visibility, position: Vec2) {
    node.left = Val::Px(position.x);
    node.top = Val::Px(position.y);
    *visibility = Visibility::Inherited;
}

/// System: Keep cursor colors and size in line with the widget's style class
pub fn restyle_cursor(
    widgets: Query<(&MagneticText, &Children), Changed<MagneticText>>,
    mut cursors: Query<(&mut Node, &mut BackgroundColor, &mut BorderColor), With<CursorIndicator>>,
) {
    for (widget, children) in &widgets {
        let theme = widget.theme();
        for child in children.to_vec() {
            let Ok((mut node, mut background, mut border)) = cursors.get_mut(child) else {
                continue;
            };
            node.width = Val::Px(theme.cursor_size);
            node.height = Val::Px(theme.cursor_size);
            *background = BackgroundColor(theme.cursor_color);
            *border = BorderColor::all(theme.cursor_border);
        }
    }
}
