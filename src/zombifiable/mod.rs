//! Actors that can be infected, cured and made temporarily immune.
//!
//! A [`Zombifiable`] holds one [`ActorState`] at a time. Each state maps to
//! one [`Behaviour`]; entering a state switches every other behaviour off and
//! that one on. `Infected` and `Immune` only last for their configured dwell
//! time, after which the actor falls back to `Normal` on the next tick.
//!
//! While infected, the tint fades through three tiers as the infection ages
//! (see [`colour_for`]). The tint is a pure function of the state and the
//! time spent in it, so it is recomputed every tick rather than stored per
//! transition.

mod behaviour;
mod colour;
mod state;
mod systems;

use bevy::prelude::*;
use log::{debug, info};

pub use behaviour::{Behaviour, BehaviourTable, BehaviourTableBuilder, ToggleBehaviour};
pub use colour::{colour_for, StatePalette, StateTiming};
pub use state::{ActorState, ExecutionMode, UnknownState};
pub use systems::{
    apply_actor_tints, register_new_actors, tick_actors, unregister_removed_actors,
    ZombifiablePlugin, ZombifiableSet,
};

use crate::error::ConfigError;
use crate::services::Notifier;

/// Health state machine attached to an actor entity.
#[derive(Component, Debug)]
pub struct Zombifiable {
    state: ActorState,
    entered_at: f32,
    behaviours: BehaviourTable,
    timing: StateTiming,
    palette: StatePalette,
    coloured_sprites: Vec<Entity>,
    colour: Color,
    switching_locked: bool,
}

impl Zombifiable {
    /// Starts configuring an actor.
    #[must_use]
    pub fn builder() -> ZombifiableBuilder {
        ZombifiableBuilder::default()
    }

    /// Current state.
    #[must_use]
    pub const fn state(&self) -> ActorState {
        self.state
    }

    /// Simulation time at which the current state was entered.
    #[must_use]
    pub const fn entered_at(&self) -> f32 {
        self.entered_at
    }

    /// Seconds spent in the current state as of `now`.
    #[must_use]
    pub fn elapsed(&self, now: f32) -> f32 {
        now - self.entered_at
    }

    /// Tint computed on the last transition or tick.
    #[must_use]
    pub const fn colour(&self) -> Color {
        self.colour
    }

    /// The per-state behaviours.
    #[must_use]
    pub const fn behaviours(&self) -> &BehaviourTable {
        &self.behaviours
    }

    /// Sprite entities whose tint follows this actor.
    #[must_use]
    pub fn coloured_sprites(&self) -> &[Entity] {
        &self.coloured_sprites
    }

    /// Timing parameters.
    #[must_use]
    pub const fn timing(&self) -> &StateTiming {
        &self.timing
    }

    /// Tint parameters.
    #[must_use]
    pub const fn palette(&self) -> &StatePalette {
        &self.palette
    }

    /// Authoring flag carried over from level data.
    ///
    /// Nothing consults it yet; transitions go through regardless.
    #[must_use]
    pub const fn switching_locked(&self) -> bool {
        self.switching_locked
    }

    /// Spawn-time entry into the current state.
    ///
    /// Stamps the entry time, switches behaviours (in play mode) and computes
    /// the tint. No services are notified: registration handles that.
    pub fn start(&mut self, now: f32, mode: ExecutionMode) {
        self.entered_at = now;
        if mode.is_live() {
            self.behaviours.activate(self.state);
        }
        self.refresh_colour(now);
    }

    /// Moves the actor to `next`.
    ///
    /// Setting the current state again does nothing at all. Otherwise the
    /// entry time is stamped, the score display is refreshed and entering
    /// `Infected` shakes the screen. Behaviours only switch in play mode.
    /// Returns whether the state changed.
    pub fn set_state(
        &mut self,
        next: ActorState,
        now: f32,
        mode: ExecutionMode,
        notifier: &mut Notifier<'_>,
    ) -> bool {
        if self.state == next {
            return false;
        }
        debug!("actor state {} -> {next} at {now:.2}", self.state);
        self.state = next;
        self.entered_at = now;
        if mode.is_live() {
            self.behaviours.activate(next);
        }
        notifier.update_ui();
        if next == ActorState::Infected {
            notifier.shake();
        }
        self.refresh_colour(now);
        true
    }

    /// Advances the actor to `now`.
    ///
    /// Reverts to `Normal` once the dwell limit has been strictly exceeded,
    /// then recomputes the tint. Returns whether the timeout fired.
    pub fn tick(&mut self, now: f32, mode: ExecutionMode, notifier: &mut Notifier<'_>) -> bool {
        let expired = self
            .timing
            .dwell_limit(self.state)
            .is_some_and(|limit| self.entered_at + limit < now);
        if expired {
            info!(
                "{} state expired after {:.2}s",
                self.state,
                self.elapsed(now)
            );
            self.set_state(ActorState::Normal, now, mode, notifier);
        }
        self.refresh_colour(now);
        expired
    }

    fn refresh_colour(&mut self, now: f32) {
        self.colour = colour_for(self.state, self.elapsed(now), &self.timing, &self.palette);
    }
}

/// Collects an actor's collaborators and parameters.
#[derive(Debug, Default)]
pub struct ZombifiableBuilder {
    behaviours: BehaviourTableBuilder,
    timing: StateTiming,
    palette: StatePalette,
    coloured_sprites: Vec<Entity>,
    switching_locked: bool,
}

impl ZombifiableBuilder {
    /// Registers the behaviour run while in `state`.
    #[must_use]
    pub fn behaviour(mut self, state: ActorState, behaviour: impl Behaviour + 'static) -> Self {
        self.behaviours = self.behaviours.with(state, behaviour);
        self
    }

    /// Overrides the timing parameters.
    #[must_use]
    pub fn timing(mut self, timing: StateTiming) -> Self {
        self.timing = timing;
        self
    }

    /// Overrides the tints.
    #[must_use]
    pub fn palette(mut self, palette: StatePalette) -> Self {
        self.palette = palette;
        self
    }

    /// Adds a sprite entity to tint.
    #[must_use]
    pub fn coloured_sprite(mut self, sprite: Entity) -> Self {
        self.coloured_sprites.push(sprite);
        self
    }

    /// Sets the authoring lock flag.
    #[must_use]
    pub fn switching_locked(mut self, locked: bool) -> Self {
        self.switching_locked = locked;
        self
    }

    /// Builds the component in the `Normal` state.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingBehaviour`] when any state has no
    /// behaviour.
    pub fn build(self) -> Result<Zombifiable, ConfigError> {
        let behaviours = self.behaviours.build()?;
        Ok(Zombifiable {
            state: ActorState::Normal,
            entered_at: 0.0,
            behaviours,
            timing: self.timing,
            palette: self.palette,
            coloured_sprites: self.coloured_sprites,
            colour: self.palette.normal,
            switching_locked: self.switching_locked,
        })
    }
}
