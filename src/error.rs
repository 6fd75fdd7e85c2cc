//! Error types surfaced by component construction and tooling.

use std::path::PathBuf;

use bevy::prelude::Entity;
use thiserror::Error;

use crate::pressure_plate::PlateSpriteKind;
use crate::zombifiable::ActorState;

/// A required collaborator was not supplied when building a component.
///
/// These are authoring mistakes: the component is never created, so nothing
/// runs in a half-configured state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// No behaviour was registered for the given state.
    #[error("no behaviour configured for the {0} state")]
    MissingBehaviour(ActorState),
    /// The pressure plate has no collision shape.
    #[error("pressure plate has no collision shape")]
    MissingShape,
    /// One of the pressure plate sprites is missing.
    #[error("pressure plate has no {0} sprite")]
    MissingSprite(PlateSpriteKind),
}

/// Failure loading gameplay settings.
#[derive(Debug, Error)]
pub enum SettingsError {
    /// The settings file could not be read.
    #[error("failed to read settings from {path}: {source}")]
    Io {
        /// File that was being read.
        path: PathBuf,
        /// Underlying I/O failure.
        source: std::io::Error,
    },
    /// The settings document is not valid JSON for the settings schema.
    #[error("invalid settings document: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Failure raised by inspector edits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InspectError {
    /// The entity does not exist or carries no `Zombifiable` component.
    #[error("entity {0} is not a zombifiable actor")]
    NotAnActor(Entity),
}
