//! Utility helpers for tests.
//!
//! Recording implementations of the score and shake services, plus builders
//! for the actors and plates used across integration tests.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use bevy::prelude::*;
use outbreak::{
    ActorState, Collider, PressurePlate, ScoreService, ShakeService, SpriteKey, StateTiming,
    ToggleBehaviour, Zombifiable, GROUND_MOVEMENT_SOLID,
};

/// Calls observed by the recording services.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ServiceLog {
    /// Actors passed to `register_actor`, in call order.
    pub registered: Vec<Entity>,
    /// Actors passed to `unregister_actor`, in call order.
    pub unregistered: Vec<Entity>,
    /// Number of `update_ui` calls.
    pub ui_updates: usize,
    /// Number of `shake` calls.
    pub shakes: usize,
}

/// Shared handle onto a [`ServiceLog`].
pub type SharedLog = Arc<Mutex<ServiceLog>>;

/// Locks `log`, recovering from a poisoned mutex.
pub fn lock_log(log: &SharedLog) -> MutexGuard<'_, ServiceLog> {
    log.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Score service appending every call to a shared log.
#[derive(Debug, Clone)]
pub struct RecordingScore(pub SharedLog);

impl ScoreService for RecordingScore {
    fn register_actor(&mut self, actor: Entity) {
        lock_log(&self.0).registered.push(actor);
    }

    fn unregister_actor(&mut self, actor: Entity) {
        lock_log(&self.0).unregistered.push(actor);
    }

    fn update_ui(&mut self) {
        lock_log(&self.0).ui_updates += 1;
    }
}

/// Shake service counting calls in a shared log.
#[derive(Debug, Clone)]
pub struct RecordingShake(pub SharedLog);

impl ShakeService for RecordingShake {
    fn shake(&mut self) {
        lock_log(&self.0).shakes += 1;
    }
}

/// Actor with toggle behaviours, the given timing and one tinted sprite.
///
/// # Panics
/// Panics if the actor cannot be built, which would be a bug in this helper.
pub fn actor(timing: StateTiming, sprite: Option<Entity>) -> Zombifiable {
    let builder = Zombifiable::builder()
        .behaviour(ActorState::Normal, ToggleBehaviour::new("graze"))
        .behaviour(ActorState::Infected, ToggleBehaviour::new("shamble"))
        .behaviour(ActorState::Immune, ToggleBehaviour::new("wander"))
        .timing(timing);
    let builder = match sprite {
        Some(entity) => builder.coloured_sprite(entity),
        None => builder,
    };
    builder
        .build()
        .unwrap_or_else(|e| panic!("test actor should build: {e}"))
}

/// Unit plate on the solid ground layer.
///
/// # Panics
/// Panics if the plate cannot be built, which would be a bug in this helper.
pub fn plate() -> PressurePlate {
    PressurePlate::builder()
        .shape(Collider::rectangle(Vec2::ONE, GROUND_MOVEMENT_SOLID))
        .pressed_sprite(SpriteKey::new("plate_down.png"))
        .depressed_sprite(SpriteKey::new("plate_up.png"))
        .build()
        .unwrap_or_else(|e| panic!("test plate should build: {e}"))
}
