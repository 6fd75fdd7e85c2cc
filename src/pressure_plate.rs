//! Floor plates that are held down by anything walking on them.
//!
//! The plate is a level sensor: every tick it asks which colliders on the
//! ground-movement layers overlap its shape and is pressed while there is at
//! least one. Nothing carries over between ticks, so stepping on or off shows
//! up on the very next update.

use std::fmt;

use bevy::prelude::*;
use log::debug;

use crate::constants::GROUND_MOVEMENT_MASK;
use crate::error::ConfigError;
use crate::physics::{overlap_count, Collider, ContactFilter};

/// Path of a sprite asset, relative to the asset root.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Reflect)]
pub struct SpriteKey(pub String);

impl SpriteKey {
    /// Wraps an asset path.
    pub fn new(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    /// The asset path.
    #[must_use]
    pub fn path(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SpriteKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Sprite currently shown by an entity.
#[derive(Component, Debug, Clone, PartialEq, Eq, Default, Reflect)]
#[reflect(Component)]
pub struct ActiveSprite(pub SpriteKey);

/// Which of the two plate sprites is meant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlateSpriteKind {
    /// Shown while something stands on the plate.
    Pressed,
    /// Shown while the plate is free.
    Depressed,
}

impl fmt::Display for PlateSpriteKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Pressed => "pressed",
            Self::Depressed => "depressed",
        })
    }
}

/// Pressure plate sensor.
#[derive(Component, Debug, Clone, PartialEq)]
#[require(Transform, ActiveSprite)]
pub struct PressurePlate {
    shape: Collider,
    filter: ContactFilter,
    pressed_sprite: SpriteKey,
    depressed_sprite: SpriteKey,
    is_pressed: bool,
}

impl PressurePlate {
    /// Starts configuring a plate.
    #[must_use]
    pub fn builder() -> PressurePlateBuilder {
        PressurePlateBuilder::default()
    }

    /// Whether anything stood on the plate at the last update.
    #[must_use]
    pub const fn is_pressed(&self) -> bool {
        self.is_pressed
    }

    /// Collision shape, centred on the plate's `Transform`.
    #[must_use]
    pub const fn shape(&self) -> &Collider {
        &self.shape
    }

    /// Sprite for the given plate state.
    #[must_use]
    pub const fn sprite(&self, kind: PlateSpriteKind) -> &SpriteKey {
        match kind {
            PlateSpriteKind::Pressed => &self.pressed_sprite,
            PlateSpriteKind::Depressed => &self.depressed_sprite,
        }
    }

    /// Sprite matching the current pressed flag.
    #[must_use]
    pub const fn current_sprite(&self) -> &SpriteKey {
        if self.is_pressed {
            &self.pressed_sprite
        } else {
            &self.depressed_sprite
        }
    }

    /// Recomputes the pressed flag from the colliders around `at`.
    ///
    /// Returns the number of colliders holding the plate down.
    pub fn sense<'a, I>(&mut self, at: Vec2, candidates: I) -> usize
    where
        I: IntoIterator<Item = (Vec2, &'a Collider)>,
    {
        let count = overlap_count(&self.shape, at, self.filter, candidates);
        self.is_pressed = count > 0;
        count
    }
}

/// Collects the plate's shape and sprites.
#[derive(Debug, Clone, Default)]
pub struct PressurePlateBuilder {
    shape: Option<Collider>,
    pressed_sprite: Option<SpriteKey>,
    depressed_sprite: Option<SpriteKey>,
}

impl PressurePlateBuilder {
    /// Sets the collision shape.
    #[must_use]
    pub fn shape(mut self, shape: Collider) -> Self {
        self.shape = Some(shape);
        self
    }

    /// Sets the sprite shown while pressed.
    #[must_use]
    pub fn pressed_sprite(mut self, sprite: SpriteKey) -> Self {
        self.pressed_sprite = Some(sprite);
        self
    }

    /// Sets the sprite shown while free.
    #[must_use]
    pub fn depressed_sprite(mut self, sprite: SpriteKey) -> Self {
        self.depressed_sprite = Some(sprite);
        self
    }

    /// Builds an unpressed plate listening to the ground-movement layers.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingShape`] or [`ConfigError::MissingSprite`]
    /// when a collaborator was not supplied.
    pub fn build(self) -> Result<PressurePlate, ConfigError> {
        Ok(PressurePlate {
            shape: self.shape.ok_or(ConfigError::MissingShape)?,
            filter: ContactFilter::layers(GROUND_MOVEMENT_MASK),
            pressed_sprite: self
                .pressed_sprite
                .ok_or(ConfigError::MissingSprite(PlateSpriteKind::Pressed))?,
            depressed_sprite: self
                .depressed_sprite
                .ok_or(ConfigError::MissingSprite(PlateSpriteKind::Depressed))?,
            is_pressed: false,
        })
    }
}

/// Senses every plate and mirrors the result into its [`ActiveSprite`].
pub fn update_pressure_plates(
    mut plates: Query<(Entity, &Transform, &mut PressurePlate, &mut ActiveSprite)>,
    bodies: Query<(Entity, &Transform, &Collider)>,
) {
    for (plate_entity, plate_transform, mut plate, mut sprite) in &mut plates {
        let was_pressed = plate.is_pressed();
        let candidates = bodies
            .iter()
            .filter(|(entity, _, _)| *entity != plate_entity)
            .map(|(_, transform, collider)| (transform.translation.truncate(), collider));
        plate.sense(plate_transform.translation.truncate(), candidates);

        if plate.is_pressed() != was_pressed {
            debug!(
                "plate {plate_entity} {}",
                if plate.is_pressed() { "pressed" } else { "released" }
            );
        }
        if sprite.0 != *plate.current_sprite() {
            sprite.0 = plate.current_sprite().clone();
        }
    }
}

/// Installs the pressure plate sensor.
#[derive(Debug, Default)]
pub struct PressurePlatePlugin;

impl Plugin for PressurePlatePlugin {
    fn build(&self, app: &mut App) {
        app.register_type::<ActiveSprite>();
        app.register_type::<Collider>();
        app.add_systems(Update, update_pressure_plates);
    }
}
