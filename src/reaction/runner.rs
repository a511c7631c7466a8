use std::sync::Arc;

use tracing::{debug, trace};

use crate::electrons::electron_balance;
use crate::factory::GraphFactory;
use crate::Molecule;

use super::edit::apply;
use super::error::ReactionError;
use super::gate::validate;
use super::mapping::build_mappings;
use super::matcher::find_candidates;
use super::record::{ReactionRecord, ReactionSet};
use super::rule::Adduct;
use super::split::split;
use super::{Reaction, ReactionContext};

impl Reaction {
    /// Apply the rule to `reactants` with the default oracle and factory.
    ///
    /// Exactly one reactant is accepted. `agents` are only looked at by
    /// rules that add a small species (a proton, a sodium cation); when no
    /// agent is that species, it is created through the factory.
    pub fn initiate(
        &self,
        reactants: &[Molecule],
        agents: &[Molecule],
    ) -> Result<ReactionSet, ReactionError> {
        self.initiate_with(&ReactionContext::default(), reactants, agents)
    }

    pub fn initiate_with(
        &self,
        ctx: &ReactionContext<'_>,
        reactants: &[Molecule],
        agents: &[Molecule],
    ) -> Result<ReactionSet, ReactionError> {
        let reactant = match reactants {
            [] => return Err(ReactionError::EmptyReactants),
            [one] => one,
            _ => {
                return Err(ReactionError::WrongReactantCount {
                    expected: 1,
                    got: reactants.len(),
                })
            }
        };

        let rule = self.rule;
        let adduct: Option<Arc<Molecule>> = rule
            .adduct
            .map(|kind| Arc::new(pick_adduct(kind, agents, ctx.factory)));
        let candidates = find_candidates(reactant, rule, self.mode);
        debug!(
            rule = rule.name(),
            mode = ?self.mode,
            candidates = candidates.len(),
            "initiating reaction"
        );

        let consumed_reactant = Arc::new(reactant.clone());
        let balance_before =
            electron_balance(reactant) + adduct.as_deref().map_or(0, electron_balance);

        let mut set = ReactionSet::new();
        for candidate in candidates {
            let rewrite = match apply(reactant, &candidate, rule, adduct.as_deref(), ctx.factory) {
                Ok(rewrite) => rewrite,
                Err(err) => {
                    trace!(discovery = candidate.discovery, %err, "candidate rejected by edit");
                    continue;
                }
            };
            debug_assert_eq!(electron_balance(&rewrite.graph), balance_before);

            let fragments = split(&rewrite.graph, ctx.factory);
            if !validate(&fragments.molecules, ctx.oracle) {
                trace!(discovery = candidate.discovery, "candidate rejected by validity gate");
                continue;
            }

            let mappings = build_mappings(reactant, adduct.as_deref(), &rewrite, &fragments);
            let mut consumed = vec![Arc::clone(&consumed_reactant)];
            consumed.extend(adduct.iter().cloned());
            set.push(ReactionRecord {
                rule: rule.id,
                reactants: consumed,
                products: fragments.molecules,
                mappings,
                center: candidate,
            });
        }

        debug!(rule = rule.name(), records = set.len(), "reaction finished");
        Ok(set)
    }
}

/// The first agent that is the adduct species, or a fresh one.
fn pick_adduct(kind: Adduct, agents: &[Molecule], factory: &dyn GraphFactory) -> Molecule {
    if let Some(agent) = agents.iter().find(|m| kind.is_species(m)) {
        return agent.clone();
    }
    let mut mol = factory.new_molecule();
    let mut atom = factory.new_atom(kind.element());
    atom.formal_charge = 1;
    mol.add_atom(atom);
    mol
}
