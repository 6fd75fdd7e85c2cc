//! Gameplay constants shared across systems.
//!
//! Collision layer indices mirror the level layout used by the art team;
//! timing values are the fallbacks used when no settings file is supplied.

use crate::physics::{CollisionLayer, LayerMask};

/// Colliders that walk on the ground but can be pushed around.
pub const GROUND_MOVEMENT_PARTIAL: CollisionLayer = CollisionLayer(8);
/// Colliders that walk on the ground and block other walkers.
pub const GROUND_MOVEMENT_SOLID: CollisionLayer = CollisionLayer(9);
/// Colliders that walk on the ground and ignore terrain limits.
pub const GROUND_MOVEMENT_UNLIMITED: CollisionLayer = CollisionLayer(10);
/// Zombie detection radii and similar trigger volumes.
pub const DETECTION: CollisionLayer = CollisionLayer(11);
/// Airborne effects such as spray clouds.
pub const AIRBORNE: CollisionLayer = CollisionLayer(12);

/// Every layer whose colliders are considered to be moving on the ground.
pub const GROUND_MOVEMENT_MASK: LayerMask = LayerMask::EMPTY
    .with(GROUND_MOVEMENT_PARTIAL)
    .with(GROUND_MOVEMENT_SOLID)
    .with(GROUND_MOVEMENT_UNLIMITED);

/// Seconds an actor stays infected before recovering.
pub const DEFAULT_INFECTED_DURATION: f32 = 10.0;
/// Seconds an actor stays immune before becoming susceptible again.
pub const DEFAULT_IMMUNE_DURATION: f32 = 5.0;
/// Seconds into an infection after which the weaker tint is shown.
pub const DEFAULT_WEAKER_AFTER: f32 = 6.0;
/// Seconds into an infection after which the weakest tint is shown.
pub const DEFAULT_WEAKEST_AFTER: f32 = 8.0;
