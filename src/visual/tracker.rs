//! Pointer tracking for mounted magnetic text widgets.
//!
//! A [`PointerTracker`] on the container is the widget's listener: pointer
//! messages only affect widgets that carry one. It is attached once the
//! container and its cursor indicator exist, swapped out whenever intensity or
//! max distance change, and dropped when the widget unmounts.

use bevy::prelude::*;
use bevy::ui::{UiTransform, Val2};

use crate::{
    input::{PointerEvent, PointerEventType},
    visual::{
        cursor::{CursorIndicator, place_cursor},
        displacement::{Displacement, LetterMotion, TrackerSettings, displacement},
        layout::{ContainerBounds, LetterBounds, LetterRow, MagneticText},
    },
};

#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct PointerTracker {
    pub settings: TrackerSettings,
    pub cursor: Entity,
    /// Whether the last pointer message landed inside the container
    pub pointer_inside: bool,
}

impl PointerTracker {
    pub fn new(settings: TrackerSettings, cursor: Entity) -> Self {
        Self {
            settings,
            cursor,
            pointer_inside: false,
        }
    }
}

/// System: Attach, replace or drop trackers as widget props change
pub fn attach_pointer_tracker(
    mut commands: Commands,
    widgets: Query<
        (Entity, &MagneticText, Option<&Children>, Option<&PointerTracker>),
        Changed<MagneticText>,
    >,
    cursors: Query<(), With<CursorIndicator>>,
) {
    for (entity, widget, children, tracker) in &widgets {
        let cursor = children
            .map(|children| children.to_vec())
            .unwrap_or_default()
            .into_iter()
            .find(|child| cursors.contains(*child));

        let Some(cursor) = cursor else {
            if tracker.is_some() {
                commands.entity(entity).remove::<PointerTracker>();
            }
            debug!("No cursor indicator under {entity}, pointer tracking not attached");
            continue;
        };

        let settings = widget.settings();
        if tracker.is_some_and(|t| t.settings == settings && t.cursor == cursor) {
            continue;
        }

        commands
            .entity(entity)
            .insert(PointerTracker::new(settings, cursor));
        info!(
            "Pointer tracker attached: intensity={}, max_distance={}",
            settings.intensity, settings.max_distance
        );
    }
}

/// System: Undo what mounting added when `MagneticText` goes away
pub fn release_pointer_tracker(
    mut commands: Commands,
    mut removed: RemovedComponents<MagneticText>,
    children: Query<&Children>,
    owned: Query<(), Or<(With<LetterRow>, With<CursorIndicator>)>>,
) {
    for entity in removed.read() {
        // Despawned outright: the tracker and children went with it
        let Ok(mut container) = commands.get_entity(entity) else {
            continue;
        };
        container.try_remove::<(PointerTracker, ContainerBounds, Node, BackgroundColor)>();

        for child in children
            .get(entity)
            .map(|children| children.to_vec())
            .unwrap_or_default()
        {
            if owned.contains(child) {
                commands.entity(child).despawn();
            }
        }
        info!("Pointer tracker released for {entity}");
    }
}

/// System: Recompute every letter's displacement on each pointer message
pub fn handle_pointer_input(
    mut pointer_events: MessageReader<PointerEvent>,
    mut trackers: Query<(&mut PointerTracker, &ContainerBounds, &Children)>,
    rows: Query<&Children, With<LetterRow>>,
    mut letters: Query<(&LetterBounds, &mut LetterMotion)>,
    mut cursors: Query<(&mut Node, &mut Visibility), With<CursorIndicator>>,
) {
    for event in pointer_events.read() {
        for (mut tracker, container, children) in &mut trackers {
            let inside = container
                .0
                .is_some_and(|rect| rect.contains(event.position));

            let letter_entities = children
                .to_vec()
                .into_iter()
                .filter_map(|child| rows.get(child).ok())
                .flat_map(|row| row.to_vec());

            match event.event_type {
                PointerEventType::Move if inside => {
                    tracker.pointer_inside = true;
                    for letter in letter_entities {
                        if let Ok((bounds, mut motion)) = letters.get_mut(letter) {
                            motion.retarget(displacement(event.position, bounds.0, tracker.settings));
                        }
                    }
                    if let Ok((mut node, mut visibility)) = cursors.get_mut(tracker.cursor) {
                        place_cursor(&mut node, &mut visibility, event.position);
                    }
                }
                // Moving out of the container counts as leaving it
                PointerEventType::Move | PointerEventType::Leave => {
                    if event.event_type == PointerEventType::Move && !tracker.pointer_inside {
                        continue;
                    }
                    tracker.pointer_inside = false;
                    for letter in letter_entities {
                        if let Ok((_, mut motion)) = letters.get_mut(letter) {
                            motion.retarget(Displacement::REST);
                        }
                    }
                }
            }
        }
    }
}

/// System: Step letter transitions and write the offsets into their transforms
pub fn animate_letters(time: Res<Time>, mut letters: Query<(&mut LetterMotion, &mut UiTransform)>) {
    let dt = time.delta_secs();

    for (mut motion, mut transform) in &mut letters {
        if motion.is_settled() && motion.offset == motion.target() {
            continue;
        }
        let offset = motion.advance(dt);
        transform.translation = Val2::px(offset.x, offset.y);
    }
}
