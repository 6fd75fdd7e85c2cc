//! Per-state behaviours and the table switching between them.

use log::debug;

use super::ActorState;
use crate::error::ConfigError;

/// Something an actor does while in one particular state.
///
/// Implementations are switched on and off by [`BehaviourTable::activate`];
/// at most one behaviour in a table is enabled at a time.
pub trait Behaviour: Send + Sync {
    /// Called when the owning state becomes active.
    fn on_enable(&mut self);
    /// Called when the owning state is left (and on every reactivation sweep).
    fn on_disable(&mut self);
    /// Whether the behaviour is currently running.
    fn is_enabled(&self) -> bool;
}

/// Plain on/off behaviour identified by name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToggleBehaviour {
    name: String,
    enabled: bool,
}

impl ToggleBehaviour {
    /// Creates a disabled behaviour.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            enabled: false,
        }
    }

    /// Name used in logs.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl Behaviour for ToggleBehaviour {
    fn on_enable(&mut self) {
        if !self.enabled {
            debug!("enabling behaviour {}", self.name);
        }
        self.enabled = true;
    }

    fn on_disable(&mut self) {
        if self.enabled {
            debug!("disabling behaviour {}", self.name);
        }
        self.enabled = false;
    }

    fn is_enabled(&self) -> bool {
        self.enabled
    }
}

type Slot = Box<dyn Behaviour>;

/// Exactly one behaviour per [`ActorState`].
pub struct BehaviourTable {
    normal: Slot,
    infected: Slot,
    immune: Slot,
}

impl BehaviourTable {
    /// Starts a table with no behaviours registered.
    #[must_use]
    pub fn builder() -> BehaviourTableBuilder {
        BehaviourTableBuilder::default()
    }

    /// Behaviour mapped to `state`.
    #[must_use]
    pub fn get(&self, state: ActorState) -> &dyn Behaviour {
        match state {
            ActorState::Normal => &*self.normal,
            ActorState::Infected => &*self.infected,
            ActorState::Immune => &*self.immune,
        }
    }

    fn get_mut(&mut self, state: ActorState) -> &mut dyn Behaviour {
        match state {
            ActorState::Normal => &mut *self.normal,
            ActorState::Infected => &mut *self.infected,
            ActorState::Immune => &mut *self.immune,
        }
    }

    /// Disables every behaviour, then enables the one for `state`.
    pub fn activate(&mut self, state: ActorState) {
        for other in ActorState::ALL {
            self.get_mut(other).on_disable();
        }
        self.get_mut(state).on_enable();
    }

    /// States whose behaviour is currently enabled.
    pub fn enabled_states(&self) -> impl Iterator<Item = ActorState> + '_ {
        ActorState::ALL
            .into_iter()
            .filter(move |state| self.get(*state).is_enabled())
    }
}

impl std::fmt::Debug for BehaviourTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BehaviourTable")
            .field("enabled", &self.enabled_states().collect::<Vec<_>>())
            .finish_non_exhaustive()
    }
}

/// Collects behaviours before checking that every state is covered.
#[derive(Default)]
pub struct BehaviourTableBuilder {
    normal: Option<Slot>,
    infected: Option<Slot>,
    immune: Option<Slot>,
}

impl BehaviourTableBuilder {
    /// Registers the behaviour for `state`, replacing any earlier one.
    #[must_use]
    pub fn with(mut self, state: ActorState, behaviour: impl Behaviour + 'static) -> Self {
        let slot = match state {
            ActorState::Normal => &mut self.normal,
            ActorState::Infected => &mut self.infected,
            ActorState::Immune => &mut self.immune,
        };
        *slot = Some(Box::new(behaviour));
        self
    }

    /// Finishes the table.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingBehaviour`] naming the first state, in
    /// [`ActorState::ALL`] order, that has no behaviour.
    pub fn build(self) -> Result<BehaviourTable, ConfigError> {
        let Self {
            normal,
            infected,
            immune,
        } = self;
        Ok(BehaviourTable {
            normal: normal.ok_or(ConfigError::MissingBehaviour(ActorState::Normal))?,
            infected: infected.ok_or(ConfigError::MissingBehaviour(ActorState::Infected))?,
            immune: immune.ok_or(ConfigError::MissingBehaviour(ActorState::Immune))?,
        })
    }
}

impl std::fmt::Debug for BehaviourTableBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BehaviourTableBuilder")
            .field("normal", &self.normal.is_some())
            .field("infected", &self.infected.is_some())
            .field("immune", &self.immune.is_some())
            .finish()
    }
}
