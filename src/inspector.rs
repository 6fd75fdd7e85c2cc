//! Editor-side access to actor state.
//!
//! The property panel shows an actor's state as an editable enum. Edits go
//! through [`Zombifiable::set_state`] exactly like gameplay code, using the
//! world's current time and [`ExecutionMode`], and flag the entity with
//! [`UnsavedChanges`] so the level is saved again.

use bevy::prelude::*;

use crate::error::InspectError;
use crate::services::{Notifier, Scoreboard, ScreenShake};
use crate::zombifiable::{ActorState, ExecutionMode, Zombifiable};

/// Marks an entity whose persisted data was edited in the inspector.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct UnsavedChanges;

/// Read-only snapshot of an actor for the property panel.
#[derive(Debug, Clone, PartialEq)]
pub struct ActorInspection {
    /// Current state.
    pub state: ActorState,
    /// Time the state was entered.
    pub entered_at: f32,
    /// Seconds spent in the state.
    pub elapsed: f32,
    /// Current tint.
    pub colour: Color,
    /// State whose behaviour is running, if any.
    pub active_behaviour: Option<ActorState>,
    /// Authoring lock flag.
    pub switching_locked: bool,
}

fn now(world: &World) -> f32 {
    world.get_resource::<Time>().map_or(0.0, Time::elapsed_secs)
}

/// Snapshot of `entity` for display.
///
/// # Errors
///
/// Returns [`InspectError::NotAnActor`] when `entity` has no
/// [`Zombifiable`].
pub fn inspect_actor(world: &World, entity: Entity) -> Result<ActorInspection, InspectError> {
    let actor = world
        .get::<Zombifiable>(entity)
        .ok_or(InspectError::NotAnActor(entity))?;
    let now = now(world);
    Ok(ActorInspection {
        state: actor.state(),
        entered_at: actor.entered_at(),
        elapsed: actor.elapsed(now),
        colour: actor.colour(),
        active_behaviour: actor.behaviours().enabled_states().next(),
        switching_locked: actor.switching_locked(),
    })
}

/// Sets `entity`'s state from the inspector.
///
/// Returns whether the state changed; only then is the entity marked with
/// [`UnsavedChanges`].
///
/// # Errors
///
/// Returns [`InspectError::NotAnActor`] when `entity` has no
/// [`Zombifiable`].
pub fn edit_actor_state(
    world: &mut World,
    entity: Entity,
    state: ActorState,
) -> Result<bool, InspectError> {
    if world.get::<Zombifiable>(entity).is_none() {
        return Err(InspectError::NotAnActor(entity));
    }
    let now = now(world);
    let mode = world
        .get_resource::<ExecutionMode>()
        .copied()
        .unwrap_or_default();

    let mut score = world.remove_resource::<Scoreboard>();
    let mut shake = world.remove_resource::<ScreenShake>();
    let changed = world.get_mut::<Zombifiable>(entity).is_some_and(|mut actor| {
        let mut notifier = Notifier::from_resources(score.as_mut(), shake.as_mut());
        actor.set_state(state, now, mode, &mut notifier)
    });
    if let Some(board) = score {
        world.insert_resource(board);
    }
    if let Some(feedback) = shake {
        world.insert_resource(feedback);
    }

    if changed {
        world.entity_mut(entity).insert(UnsavedChanges);
    }
    Ok(changed)
}
