//! Minimal 2D overlap queries.
//!
//! Colliders are axis-aligned boxes centred on their entity's `Transform`.
//! This is only as much physics as the trigger volumes need: there is no
//! broad phase, no rotation and no contact resolution.

use bevy::prelude::*;

/// Index of a collision layer, `0..32`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Reflect)]
pub struct CollisionLayer(pub u8);

impl CollisionLayer {
    /// Bit for this layer inside a [`LayerMask`].
    ///
    /// Layers outside `0..32` map to an empty mask.
    #[must_use]
    pub const fn bit(self) -> u32 {
        if self.0 < 32 {
            1 << self.0
        } else {
            0
        }
    }
}

/// Set of collision layers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Reflect)]
pub struct LayerMask(pub u32);

impl LayerMask {
    /// Mask matching no layer.
    pub const EMPTY: Self = Self(0);

    /// Returns the mask with `layer` added.
    #[must_use]
    pub const fn with(self, layer: CollisionLayer) -> Self {
        Self(self.0 | layer.bit())
    }

    /// Whether `layer` is part of the mask.
    #[must_use]
    pub const fn contains(self, layer: CollisionLayer) -> bool {
        self.0 & layer.bit() != 0
    }
}

impl FromIterator<CollisionLayer> for LayerMask {
    fn from_iter<I: IntoIterator<Item = CollisionLayer>>(iter: I) -> Self {
        iter.into_iter().fold(Self::EMPTY, Self::with)
    }
}

/// Axis-aligned box collider on a single layer.
#[derive(Component, Debug, Clone, Copy, PartialEq, Reflect)]
#[reflect(Component)]
pub struct Collider {
    /// Half the box size along each axis.
    pub half_extents: Vec2,
    /// Layer the collider lives on.
    pub layer: CollisionLayer,
}

impl Collider {
    /// Creates a box collider of the given full `size`.
    #[must_use]
    pub fn rectangle(size: Vec2, layer: CollisionLayer) -> Self {
        Self {
            half_extents: size * 0.5,
            layer,
        }
    }

    /// Whether this collider at `at` overlaps `other` at `other_at`.
    ///
    /// Boxes that merely touch along an edge do not overlap.
    #[must_use]
    pub fn overlaps(&self, at: Vec2, other: &Self, other_at: Vec2) -> bool {
        let gap = (at - other_at).abs();
        let reach = self.half_extents + other.half_extents;
        gap.x < reach.x && gap.y < reach.y
    }
}

/// Layer filter applied to overlap queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ContactFilter {
    /// Layers that are reported.
    pub mask: LayerMask,
}

impl ContactFilter {
    /// Filter reporting only colliders on layers in `mask`.
    #[must_use]
    pub const fn layers(mask: LayerMask) -> Self {
        Self { mask }
    }

    /// Whether `collider` passes the filter.
    #[must_use]
    pub const fn accepts(&self, collider: &Collider) -> bool {
        self.mask.contains(collider.layer)
    }
}

/// Counts the `candidates` overlapping `shape` placed at `at`.
///
/// Candidates rejected by `filter` are ignored. The count does not depend on
/// candidate order.
pub fn overlap_count<'a, I>(shape: &Collider, at: Vec2, filter: ContactFilter, candidates: I) -> usize
where
    I: IntoIterator<Item = (Vec2, &'a Collider)>,
{
    candidates
        .into_iter()
        .filter(|(_, collider)| filter.accepts(collider))
        .filter(|(pos, collider)| shape.overlaps(at, collider, *pos))
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    const GROUND: CollisionLayer = CollisionLayer(9);
    const AIR: CollisionLayer = CollisionLayer(12);

    fn unit(layer: CollisionLayer) -> Collider {
        Collider::rectangle(Vec2::ONE, layer)
    }

    #[test]
    fn mask_collects_layers() {
        let mask: LayerMask = [CollisionLayer(0), CollisionLayer(3)].into_iter().collect();
        assert_eq!(mask, LayerMask(0b1001));
        assert!(mask.contains(CollisionLayer(3)));
        assert!(!mask.contains(CollisionLayer(1)));
    }

    #[test]
    fn out_of_range_layer_is_never_contained() {
        let mask = LayerMask(u32::MAX).with(CollisionLayer(40));
        assert!(!mask.contains(CollisionLayer(40)));
    }

    #[rstest]
    #[case::concentric(Vec2::ZERO, true)]
    #[case::partial(Vec2::new(0.5, 0.5), true)]
    #[case::touching_edge(Vec2::new(1.0, 0.0), false)]
    #[case::far_away(Vec2::new(100.0, 0.0), false)]
    fn boxes_overlap_strictly(#[case] offset: Vec2, #[case] expected: bool) {
        let a = unit(GROUND);
        let b = unit(GROUND);
        assert_eq!(a.overlaps(Vec2::ZERO, &b, offset), expected);
    }

    #[test]
    fn overlap_count_respects_filter() {
        let plate = unit(GROUND);
        let walker = unit(GROUND);
        let cloud = unit(AIR);
        let filter = ContactFilter::layers(LayerMask::EMPTY.with(GROUND));
        let candidates = [(Vec2::ZERO, &walker), (Vec2::ZERO, &cloud)];
        assert_eq!(overlap_count(&plate, Vec2::ZERO, filter, candidates), 1);
    }

    #[test]
    fn overlap_count_is_zero_without_candidates() {
        let plate = unit(GROUND);
        let filter = ContactFilter::layers(LayerMask(u32::MAX));
        assert_eq!(overlap_count(&plate, Vec2::ZERO, filter, std::iter::empty()), 0);
    }
}
