//! Mechanistic reactions: electron-flow rules applied to a reactant graph.
//!
//! A [`Reaction`] wraps one rule of the registry. [`Reaction::initiate`]
//! finds every reactive center of the rule in a reactant, rewrites a clone
//! of the reactant for each, splits the result into product molecules,
//! drops candidates whose products contain an atom without a valid type,
//! and returns one [`ReactionRecord`] per survivor, in discovery order.

pub mod edit;
pub mod error;
mod gate;
pub mod mapping;
pub mod matcher;
mod record;
pub mod rule;
mod runner;
pub mod split;

pub use edit::{Edit, OrderStep, Role};
pub use error::{EditError, ReactionError};
pub use mapping::{ChemObject, Mapping, ObjectRef};
pub use matcher::{CandidateMatch, MatchMode};
pub use record::{ReactionRecord, ReactionSet};
pub use rule::{lookup, lookup_name, registry, Adduct, CenterShape, RuleDescriptor, RuleId};

use serde::{Deserialize, Serialize};

use crate::atom_type::{AtomTypeOracle, ValenceOracle};
use crate::factory::{DefaultFactory, GraphFactory};

/// Options recognized by [`Reaction::set_parameters`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReactionParameter {
    /// `true`: the caller has flagged the reactive center on the reactant
    /// and only that site is used. `false`: search the whole reactant.
    ReactiveCenterPreset(bool),
}

impl ReactionParameter {
    fn name(self) -> &'static str {
        match self {
            ReactionParameter::ReactiveCenterPreset(_) => "reactive_center_preset",
        }
    }
}

/// Serializable description of a configured reaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReactionConfig {
    pub rule: RuleId,
    #[serde(default)]
    pub reactive_center_preset: bool,
}

/// Collaborators the engine calls out to.
#[derive(Clone, Copy)]
pub struct ReactionContext<'a> {
    pub oracle: &'a dyn AtomTypeOracle,
    pub factory: &'a dyn GraphFactory,
}

impl Default for ReactionContext<'static> {
    fn default() -> Self {
        Self {
            oracle: &ValenceOracle,
            factory: &DefaultFactory,
        }
    }
}

impl std::fmt::Debug for ReactionContext<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReactionContext").finish_non_exhaustive()
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Reaction {
    pub(crate) rule: &'static RuleDescriptor,
    pub(crate) mode: MatchMode,
}

impl Reaction {
    pub fn new(id: RuleId) -> Self {
        Self {
            rule: lookup(id),
            mode: MatchMode::Automatic,
        }
    }

    pub fn from_name(name: &str) -> Result<Self, ReactionError> {
        lookup_name(name).map(|rule| Self {
            rule,
            mode: MatchMode::Automatic,
        })
    }

    pub fn from_config(config: ReactionConfig) -> Self {
        let mut reaction = Self::new(config.rule);
        reaction.mode = mode_for(config.reactive_center_preset);
        reaction
    }

    /// Replace the parameter set. Each parameter may appear at most once;
    /// an empty set means automatic center search.
    pub fn set_parameters(&mut self, params: &[ReactionParameter]) -> Result<(), ReactionError> {
        let mut preset = None;
        for &param in params {
            match param {
                ReactionParameter::ReactiveCenterPreset(value) => {
                    if preset.replace(value).is_some() {
                        return Err(ReactionError::DuplicateParameter(param.name()));
                    }
                }
            }
        }
        self.mode = mode_for(preset.unwrap_or(false));
        Ok(())
    }

    pub fn rule(&self) -> &'static RuleDescriptor {
        self.rule
    }

    pub fn mode(&self) -> MatchMode {
        self.mode
    }

    pub fn config(&self) -> ReactionConfig {
        ReactionConfig {
            rule: self.rule.id,
            reactive_center_preset: self.mode == MatchMode::Manual,
        }
    }
}

fn mode_for(preset: bool) -> MatchMode {
    if preset {
        MatchMode::Manual
    } else {
        MatchMode::Automatic
    }
}
