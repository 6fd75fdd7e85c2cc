#![cfg_attr(docsrs, feature(doc_cfg))]
//! Gameplay components for the Outbreak zombie herding game.
//!
//! Re-exports the actor state machine, the pressure plate sensor and the
//! plugins wiring them into a Bevy app.
pub mod config;
pub mod constants;
pub mod error;
pub mod inspector;
pub mod logging;
pub mod physics;
pub mod presentation;
pub mod pressure_plate;
pub mod services;
pub mod zombifiable;

pub use config::ZombifiableSettings;
pub use constants::*;
pub use error::{ConfigError, InspectError, SettingsError};
pub use inspector::{edit_actor_state, inspect_actor, ActorInspection, UnsavedChanges};
pub use logging::init as init_logging;
pub use physics::{Collider, CollisionLayer, ContactFilter, LayerMask};
pub use presentation::Tint;
#[cfg(feature = "render")]
#[cfg_attr(docsrs, doc(cfg(feature = "render")))]
pub use presentation::PresentationPlugin;
pub use pressure_plate::{ActiveSprite, PressurePlate, PressurePlatePlugin, SpriteKey};
pub use services::{Notifier, ScoreService, Scoreboard, ScreenShake, ShakeService};
pub use zombifiable::{
    ActorState, Behaviour, ExecutionMode, StatePalette, StateTiming, ToggleBehaviour,
    Zombifiable, ZombifiablePlugin,
};

pub mod prelude {
    //! Common imports for building scenes.
    //!
    //! ```rust,no_run
    //! use outbreak::prelude::*;
    //! ```

    pub use crate::{
        ActiveSprite, ActorState, Collider, ExecutionMode, PressurePlate, PressurePlatePlugin,
        SpriteKey, Tint, ToggleBehaviour, Zombifiable, ZombifiablePlugin,
    };
}
