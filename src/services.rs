//! Score tracking and screen shake collaborators.
//!
//! Both services are optional. They are installed as resources wrapping a
//! boxed implementation, default to no-ops, and every call site also copes
//! with the resource being missing altogether.

use bevy::prelude::*;

/// Tracks actors for scoring and refreshes the score display.
#[cfg_attr(test, mockall::automock)]
pub trait ScoreService {
    /// Starts tracking `actor`.
    fn register_actor(&mut self, actor: Entity);
    /// Stops tracking `actor`.
    fn unregister_actor(&mut self, actor: Entity);
    /// Recomputes the score display after an actor changed state.
    fn update_ui(&mut self);
}

/// Camera shake feedback.
#[cfg_attr(test, mockall::automock)]
pub trait ShakeService {
    /// Plays one shake.
    fn shake(&mut self);
}

/// Score service that ignores every call.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoScore;

impl ScoreService for NoScore {
    fn register_actor(&mut self, _actor: Entity) {}
    fn unregister_actor(&mut self, _actor: Entity) {}
    fn update_ui(&mut self) {}
}

/// Shake service that ignores every call.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoShake;

impl ShakeService for NoShake {
    fn shake(&mut self) {}
}

/// Resource holding the active [`ScoreService`].
#[derive(Resource)]
pub struct Scoreboard(Box<dyn ScoreService + Send + Sync>);

impl Scoreboard {
    /// Wraps `service` for insertion into the world.
    pub fn new(service: impl ScoreService + Send + Sync + 'static) -> Self {
        Self(Box::new(service))
    }

    /// Borrows the wrapped service.
    pub fn service_mut(&mut self) -> &mut dyn ScoreService {
        self.0.as_mut()
    }
}

impl Default for Scoreboard {
    fn default() -> Self {
        Self::new(NoScore)
    }
}

/// Resource holding the active [`ShakeService`].
#[derive(Resource)]
pub struct ScreenShake(Box<dyn ShakeService + Send + Sync>);

impl ScreenShake {
    /// Wraps `service` for insertion into the world.
    pub fn new(service: impl ShakeService + Send + Sync + 'static) -> Self {
        Self(Box::new(service))
    }

    /// Borrows the wrapped service.
    pub fn service_mut(&mut self) -> &mut dyn ShakeService {
        self.0.as_mut()
    }
}

impl Default for ScreenShake {
    fn default() -> Self {
        Self::new(NoShake)
    }
}

/// Optional service references handed to state transitions.
#[derive(Default)]
pub struct Notifier<'a> {
    /// Score tracker, if any.
    pub score: Option<&'a mut dyn ScoreService>,
    /// Shake feedback, if any.
    pub shake: Option<&'a mut dyn ShakeService>,
}

impl<'a> Notifier<'a> {
    /// Notifier that drops every notification.
    #[must_use]
    pub fn silent() -> Self {
        Self::default()
    }

    /// Borrows the services out of their resources.
    pub fn from_resources(
        score: Option<&'a mut Scoreboard>,
        shake: Option<&'a mut ScreenShake>,
    ) -> Self {
        Self {
            score: score.map(Scoreboard::service_mut),
            shake: shake.map(ScreenShake::service_mut),
        }
    }

    /// Forwards to [`ScoreService::update_ui`] when a score service is set.
    pub fn update_ui(&mut self) {
        if let Some(score) = self.score.as_deref_mut() {
            score.update_ui();
        }
    }

    /// Forwards to [`ShakeService::shake`] when a shake service is set.
    pub fn shake(&mut self) {
        if let Some(shake) = self.shake.as_deref_mut() {
            shake.shake();
        }
    }
}

impl std::fmt::Debug for Notifier<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Notifier")
            .field("score", &self.score.is_some())
            .field("shake", &self.shake.is_some())
            .finish()
    }
}
