//! Presentation layer: tints and sprite swaps.
//!
//! Gameplay systems only write [`Tint`] and [`ActiveSprite`]. With the
//! `render` feature, `PresentationPlugin` mirrors those onto Bevy's `Sprite`
//! so the simulation stays headless in tests.

use bevy::prelude::*;

#[cfg(feature = "render")]
use crate::pressure_plate::ActiveSprite;

/// Colour multiplied into an entity's sprite.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct Tint(pub Color);

impl Default for Tint {
    fn default() -> Self {
        Self(Color::WHITE)
    }
}

/// Copies changed tints into sprite colours.
#[cfg(feature = "render")]
#[cfg_attr(docsrs, doc(cfg(feature = "render")))]
pub fn sync_sprite_tints(mut sprites: Query<(&Tint, &mut Sprite), Changed<Tint>>) {
    for (tint, mut sprite) in &mut sprites {
        sprite.color = tint.0;
    }
}

/// Loads changed sprite keys into sprite images.
#[cfg(feature = "render")]
#[cfg_attr(docsrs, doc(cfg(feature = "render")))]
#[expect(
    clippy::needless_pass_by_value,
    reason = "Bevy systems require parameters by value, not by reference."
)]
pub fn sync_sprite_images(
    assets: Res<AssetServer>,
    mut sprites: Query<(&ActiveSprite, &mut Sprite), Changed<ActiveSprite>>,
) {
    for (active, mut sprite) in &mut sprites {
        sprite.image = assets.load(active.0.path().to_owned());
    }
}

/// Plugin mirroring gameplay visuals onto Bevy sprites.
#[cfg(feature = "render")]
#[cfg_attr(docsrs, doc(cfg(feature = "render")))]
#[derive(Debug, Default)]
pub struct PresentationPlugin;

#[cfg(feature = "render")]
impl Plugin for PresentationPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(PostUpdate, (sync_sprite_tints, sync_sprite_images));
    }
}
