//! Health states an actor can be in, and the mode transitions run under.

use std::fmt;
use std::str::FromStr;

use bevy::prelude::*;

/// Health state of a zombifiable actor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Reflect)]
pub enum ActorState {
    /// Healthy and susceptible.
    #[default]
    Normal,
    /// Infected; recovers after the configured duration.
    Infected,
    /// Recently cured and temporarily protected.
    Immune,
}

impl ActorState {
    /// Every state, in inspector order.
    pub const ALL: [Self; 3] = [Self::Normal, Self::Infected, Self::Immune];

    /// Lower-case label used in logs and the inspector.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Infected => "infected",
            Self::Immune => "immune",
        }
    }
}

impl fmt::Display for ActorState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Returned when a string names no [`ActorState`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown actor state `{0}`")]
pub struct UnknownState(pub String);

impl FromStr for ActorState {
    type Err = UnknownState;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "normal" => Ok(Self::Normal),
            // Level files written before the rename still say "zombie".
            "infected" | "zombie" => Ok(Self::Infected),
            "immune" => Ok(Self::Immune),
            _ => Err(UnknownState(s.to_owned())),
        }
    }
}

/// Whether the world is being simulated or edited.
///
/// Behaviour toggling only happens in [`ExecutionMode::Play`]; while editing,
/// the authored enable flags must stay as they are. Service notifications run
/// in both modes.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExecutionMode {
    /// Interactive simulation.
    #[default]
    Play,
    /// Design-time preview.
    Edit,
}

impl ExecutionMode {
    /// Whether behaviours should be enabled and disabled.
    #[must_use]
    pub const fn is_live(self) -> bool {
        matches!(self, Self::Play)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("normal", ActorState::Normal)]
    #[case("Infected", ActorState::Infected)]
    #[case("zombie", ActorState::Infected)]
    #[case(" IMMUNE ", ActorState::Immune)]
    fn parses_state_names(#[case] input: &str, #[case] expected: ActorState) {
        assert_eq!(input.parse::<ActorState>(), Ok(expected));
    }

    #[test]
    fn rejects_unknown_names() {
        assert_eq!(
            "undead".parse::<ActorState>(),
            Err(UnknownState("undead".to_owned()))
        );
    }

    #[test]
    fn display_round_trips_through_parse() {
        for state in ActorState::ALL {
            assert_eq!(state.to_string().parse::<ActorState>(), Ok(state));
        }
    }

    #[test]
    fn default_is_normal_and_play() {
        assert_eq!(ActorState::default(), ActorState::Normal);
        assert!(ExecutionMode::default().is_live());
        assert!(!ExecutionMode::Edit.is_live());
    }
}
