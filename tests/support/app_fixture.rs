//! Headless Bevy app shared by integration tests.

use std::ops::{Deref, DerefMut};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use bevy::prelude::*;
use bevy::time::TimeUpdateStrategy;
use outbreak::{PressurePlatePlugin, Scoreboard, ScreenShake, ZombifiablePlugin};
use test_utils::{RecordingScore, RecordingShake, SharedLog};

/// Simulated time per `App::update`.
pub const TICK: Duration = Duration::from_millis(100);

/// Wrapper that forwards `Send` and `Sync` because access is mutex-guarded.
#[derive(Debug)]
pub struct ThreadSafeApp(pub App);

impl Deref for ThreadSafeApp {
    type Target = App;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for ThreadSafeApp {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

// SAFETY: rspec fixtures must implement `Clone + Send + Sync`, and the suites
// run serially. All access to the wrapped `App` goes through the mutex.
unsafe impl Send for ThreadSafeApp {}
unsafe impl Sync for ThreadSafeApp {}

/// Shared pointer type for the wrapped app.
pub type SharedApp = Arc<Mutex<ThreadSafeApp>>;

/// Locks the shared app, recovering from a poisoned mutex.
pub fn lock_app(app: &SharedApp) -> MutexGuard<'_, ThreadSafeApp> {
    app.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Builds an app with both gameplay plugins, fixed-step time and recording
/// services writing into the returned log.
pub fn headless_app() -> (SharedApp, SharedLog) {
    let log = SharedLog::default();
    let mut app = App::new();
    app.add_plugins(MinimalPlugins)
        .insert_resource(TimeUpdateStrategy::ManualDuration(TICK))
        .insert_resource(Scoreboard::new(RecordingScore(Arc::clone(&log))))
        .insert_resource(ScreenShake::new(RecordingShake(Arc::clone(&log))))
        .add_plugins((ZombifiablePlugin, PressurePlatePlugin));
    (Arc::new(Mutex::new(ThreadSafeApp(app))), log)
}

/// Current virtual time of the app in seconds.
#[allow(dead_code, reason = "Not every test binary reads the clock.")]
pub fn now(app: &App) -> f32 {
    app.world().resource::<Time>().elapsed_secs()
}
