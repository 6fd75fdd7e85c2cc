//! Tunable gameplay settings loaded from JSON.
//!
//! Every field is optional in the document; anything left out keeps the
//! value from [`crate::constants`].

use std::fs;
use std::path::Path;

use bevy::prelude::*;
use serde::Deserialize;

use crate::constants::{
    DEFAULT_IMMUNE_DURATION, DEFAULT_INFECTED_DURATION, DEFAULT_WEAKER_AFTER,
    DEFAULT_WEAKEST_AFTER,
};
use crate::error::SettingsError;
use crate::zombifiable::{StatePalette, StateTiming};

/// sRGBA colour as stored in settings files.
pub type Rgba = [f32; 4];

/// Colours per state, as sRGBA arrays.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PaletteSettings {
    /// Healthy tint.
    pub normal: Rgba,
    /// Fresh infection tint.
    pub infected: Rgba,
    /// Aged infection tint.
    pub infected_weaker: Rgba,
    /// Nearly recovered tint.
    pub infected_weakest: Rgba,
    /// Immune tint.
    pub immune: Rgba,
}

impl Default for PaletteSettings {
    fn default() -> Self {
        Self {
            normal: [1.0, 1.0, 1.0, 1.0],
            infected: [0.0, 1.0, 0.0, 1.0],
            infected_weaker: [0.5, 1.0, 0.5, 1.0],
            infected_weakest: [0.8, 1.0, 0.8, 1.0],
            immune: [0.0, 0.0, 1.0, 1.0],
        }
    }
}

fn to_colour([r, g, b, a]: Rgba) -> Color {
    Color::srgba(r, g, b, a)
}

/// Settings shared by every zombifiable actor.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ZombifiableSettings {
    /// Seconds an infection lasts.
    pub infected_duration: f32,
    /// Seconds immunity lasts.
    pub immune_duration: f32,
    /// Infection age at which the weaker tint starts.
    pub weaker_after: f32,
    /// Infection age at which the weakest tint starts.
    pub weakest_after: f32,
    /// Tints.
    pub palette: PaletteSettings,
    /// Authoring lock copied onto each actor.
    pub switching_locked: bool,
}

impl Default for ZombifiableSettings {
    fn default() -> Self {
        Self {
            infected_duration: DEFAULT_INFECTED_DURATION,
            immune_duration: DEFAULT_IMMUNE_DURATION,
            weaker_after: DEFAULT_WEAKER_AFTER,
            weakest_after: DEFAULT_WEAKEST_AFTER,
            palette: PaletteSettings::default(),
            switching_locked: false,
        }
    }
}

impl ZombifiableSettings {
    /// Parses settings from a JSON document.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::Parse`] for malformed JSON, wrongly typed
    /// fields or unknown keys.
    pub fn from_json_str(json: &str) -> Result<Self, SettingsError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads and parses a JSON settings file.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::Io`] when the file cannot be read and
    /// [`SettingsError::Parse`] when its contents are invalid.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let file = path.as_ref();
        let json = fs::read_to_string(file).map_err(|source| SettingsError::Io {
            path: file.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    /// Timing parameters for actors.
    #[must_use]
    pub const fn timing(&self) -> StateTiming {
        StateTiming {
            infected: self.infected_duration,
            immune: self.immune_duration,
            weaker_after: self.weaker_after,
            weakest_after: self.weakest_after,
        }
    }

    /// Tints for actors.
    #[must_use]
    pub fn palette(&self) -> StatePalette {
        StatePalette {
            normal: to_colour(self.palette.normal),
            infected: to_colour(self.palette.infected),
            infected_weaker: to_colour(self.palette.infected_weaker),
            infected_weakest: to_colour(self.palette.infected_weakest),
            immune: to_colour(self.palette.immune),
        }
    }
}
