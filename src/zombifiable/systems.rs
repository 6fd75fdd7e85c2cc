//! Bevy systems driving [`Zombifiable`] actors.

use bevy::prelude::*;
use log::debug;

use super::{ActorState, ExecutionMode, Zombifiable};
use crate::presentation::Tint;
use crate::services::{Notifier, Scoreboard, ScreenShake};

/// Ordering label for the actor update chain.
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ZombifiableSet;

/// Registers freshly spawned actors and runs their spawn-time entry.
#[expect(
    clippy::needless_pass_by_value,
    reason = "Bevy systems require parameters by value, not by reference."
)]
pub fn register_new_actors(
    time: Res<Time>,
    execution: Option<Res<ExecutionMode>>,
    mut score: Option<ResMut<Scoreboard>>,
    mut actors: Query<(Entity, &mut Zombifiable), Added<Zombifiable>>,
) {
    let mode = execution.map_or_else(ExecutionMode::default, |m| *m);
    let now = time.elapsed_secs();
    for (entity, mut actor) in &mut actors {
        if let Some(board) = score.as_deref_mut() {
            board.service_mut().register_actor(entity);
        }
        actor.start(now, mode);
        debug!("registered actor {entity} in {} state", actor.state());
    }
}

/// Advances every actor's dwell timer and tint.
#[expect(
    clippy::needless_pass_by_value,
    reason = "Bevy systems require parameters by value, not by reference."
)]
pub fn tick_actors(
    time: Res<Time>,
    execution: Option<Res<ExecutionMode>>,
    mut score: Option<ResMut<Scoreboard>>,
    mut shake: Option<ResMut<ScreenShake>>,
    mut actors: Query<&mut Zombifiable>,
) {
    let mode = execution.map_or_else(ExecutionMode::default, |m| *m);
    let now = time.elapsed_secs();
    let mut notifier = Notifier::from_resources(score.as_deref_mut(), shake.as_deref_mut());
    for mut actor in &mut actors {
        actor.tick(now, mode, &mut notifier);
    }
}

/// Copies each actor's tint onto its coloured sprites.
///
/// Sprite entities that have been despawned, or that carry no [`Tint`], are
/// skipped.
pub fn apply_actor_tints(actors: Query<&Zombifiable>, mut tints: Query<&mut Tint>) {
    for actor in &actors {
        let colour = actor.colour();
        for &sprite in actor.coloured_sprites() {
            match tints.get_mut(sprite) {
                Ok(mut tint) => {
                    if tint.0 != colour {
                        tint.0 = colour;
                    }
                }
                Err(_) => debug!("skipping tint for missing sprite {sprite}"),
            }
        }
    }
}

/// Unregisters actors whose [`Zombifiable`] was removed or despawned.
pub fn unregister_removed_actors(
    mut removed: RemovedComponents<Zombifiable>,
    mut score: Option<ResMut<Scoreboard>>,
) {
    for entity in removed.read() {
        if let Some(board) = score.as_deref_mut() {
            board.service_mut().unregister_actor(entity);
        }
        debug!("unregistered actor {entity}");
    }
}

/// Installs the actor state machine.
///
/// Adds the no-op services and [`ExecutionMode::Play`] unless the host app
/// already inserted its own.
#[derive(Debug, Default)]
pub struct ZombifiablePlugin;

impl Plugin for ZombifiablePlugin {
    fn build(&self, app: &mut App) {
        app.register_type::<ActorState>();
        app.init_resource::<ExecutionMode>();
        app.init_resource::<Scoreboard>();
        app.init_resource::<ScreenShake>();
        app.add_systems(
            Update,
            (register_new_actors, tick_actors, apply_actor_tints)
                .chain()
                .in_set(ZombifiableSet),
        );
        app.add_systems(Last, unregister_removed_actors);
    }
}
