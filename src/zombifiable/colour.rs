//! Dwell limits and tint selection for each state.

use bevy::prelude::*;

use super::ActorState;
use crate::constants::{
    DEFAULT_IMMUNE_DURATION, DEFAULT_INFECTED_DURATION, DEFAULT_WEAKER_AFTER,
    DEFAULT_WEAKEST_AFTER,
};

/// Timing parameters, in seconds of simulation time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StateTiming {
    /// How long an infection lasts.
    pub infected: f32,
    /// How long immunity lasts.
    pub immune: f32,
    /// Infection age at which the weaker tint kicks in.
    pub weaker_after: f32,
    /// Infection age at which the weakest tint kicks in.
    pub weakest_after: f32,
}

impl StateTiming {
    /// Maximum time an actor may stay in `state`; `None` means forever.
    #[must_use]
    pub const fn dwell_limit(&self, state: ActorState) -> Option<f32> {
        match state {
            ActorState::Normal => None,
            ActorState::Infected => Some(self.infected),
            ActorState::Immune => Some(self.immune),
        }
    }
}

impl Default for StateTiming {
    fn default() -> Self {
        Self {
            infected: DEFAULT_INFECTED_DURATION,
            immune: DEFAULT_IMMUNE_DURATION,
            weaker_after: DEFAULT_WEAKER_AFTER,
            weakest_after: DEFAULT_WEAKEST_AFTER,
        }
    }
}

/// Tints applied to an actor's sprites.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StatePalette {
    /// Healthy tint.
    pub normal: Color,
    /// Fresh infection.
    pub infected: Color,
    /// Infection after [`StateTiming::weaker_after`].
    pub infected_weaker: Color,
    /// Infection after [`StateTiming::weakest_after`].
    pub infected_weakest: Color,
    /// Immune tint.
    pub immune: Color,
}

impl Default for StatePalette {
    fn default() -> Self {
        Self {
            normal: Color::WHITE,
            infected: Color::srgb(0.0, 1.0, 0.0),
            infected_weaker: Color::srgb(0.5, 1.0, 0.5),
            infected_weakest: Color::srgb(0.8, 1.0, 0.8),
            immune: Color::srgb(0.0, 0.0, 1.0),
        }
    }
}

/// Tint for an actor that has been in `state` for `elapsed` seconds.
///
/// The infected tiers are checked weakest first, so a `weaker_after` above
/// `weakest_after` is accepted and simply means the weaker tint never shows.
#[must_use]
pub fn colour_for(
    state: ActorState,
    elapsed: f32,
    timing: &StateTiming,
    palette: &StatePalette,
) -> Color {
    match state {
        ActorState::Normal => palette.normal,
        ActorState::Immune => palette.immune,
        ActorState::Infected if elapsed >= timing.weakest_after => palette.infected_weakest,
        ActorState::Infected if elapsed >= timing.weaker_after => palette.infected_weaker,
        ActorState::Infected => palette.infected,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn timing(weaker_after: f32, weakest_after: f32) -> StateTiming {
        StateTiming {
            weaker_after,
            weakest_after,
            ..StateTiming::default()
        }
    }

    #[rstest]
    #[case::fresh(0.0, |p: &StatePalette| p.infected)]
    #[case::just_before_weaker(1.99, |p: &StatePalette| p.infected)]
    #[case::at_weaker(2.0, |p: &StatePalette| p.infected_weaker)]
    #[case::between(3.5, |p: &StatePalette| p.infected_weaker)]
    #[case::at_weakest(4.0, |p: &StatePalette| p.infected_weakest)]
    #[case::long_after(100.0, |p: &StatePalette| p.infected_weakest)]
    fn infected_tint_follows_tiers(
        #[case] elapsed: f32,
        #[case] expected: fn(&StatePalette) -> Color,
    ) {
        let palette = StatePalette::default();
        let colour = colour_for(ActorState::Infected, elapsed, &timing(2.0, 4.0), &palette);
        assert_eq!(colour, expected(&palette));
    }

    #[test]
    fn unordered_thresholds_skip_a_tier() {
        let palette = StatePalette::default();
        let reversed = timing(4.0, 2.0);
        assert_eq!(
            colour_for(ActorState::Infected, 1.0, &reversed, &palette),
            palette.infected
        );
        for elapsed in [2.0, 3.0, 5.0] {
            assert_eq!(
                colour_for(ActorState::Infected, elapsed, &reversed, &palette),
                palette.infected_weakest
            );
        }
    }

    #[rstest]
    #[case(ActorState::Normal, 0.0)]
    #[case(ActorState::Normal, 1e6)]
    #[case(ActorState::Immune, 0.0)]
    #[case(ActorState::Immune, 1e6)]
    fn other_states_ignore_elapsed_time(#[case] state: ActorState, #[case] elapsed: f32) {
        let palette = StatePalette::default();
        let expected = if state == ActorState::Normal {
            palette.normal
        } else {
            palette.immune
        };
        assert_eq!(
            colour_for(state, elapsed, &StateTiming::default(), &palette),
            expected
        );
    }

    #[test]
    fn normal_has_no_dwell_limit() {
        let timing = StateTiming::default();
        assert_eq!(timing.dwell_limit(ActorState::Normal), None);
        assert_eq!(timing.dwell_limit(ActorState::Infected), Some(timing.infected));
        assert_eq!(timing.dwell_limit(ActorState::Immune), Some(timing.immune));
    }
}
