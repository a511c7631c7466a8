//! The closed vocabulary of graph edits a rule may perform, and the
//! applier that runs a rule's edit sequence on a clone of the reactant.

use petgraph::stable_graph::{EdgeIndex, NodeIndex};

use crate::bond::BondOrder;
use crate::factory::GraphFactory;
use crate::rings::ring_bonds;
use crate::Molecule;

use super::error::EditError;
use super::matcher::CandidateMatch;
use super::rule::{EditPlan, RuleDescriptor};

/// Position of an atom inside a candidate's ordered atom list. Adduct atoms
/// follow the reactant atoms of the center.
pub type Role = usize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderStep {
    Raise,
    Lower,
}

/// One primitive rewrite. Bonds are addressed by the pair of roles they join.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edit {
    /// Step the bond order one up or down. Lowering a single bond removes
    /// the bond; raising where no bond exists creates a single bond.
    SetBondOrder(Role, Role, OrderStep),
    /// Shift the formal charge by the given delta.
    SetFormalCharge(Role, i8),
    AddLonePair(Role),
    RemoveLonePair(Role),
    AddSingleElectron(Role),
    RemoveSingleElectron(Role),
    /// Remove a single bond outright, releasing its pair from both atoms.
    DetachBond(Role, Role),
}

impl Edit {
    /// Change in [`electron_balance`](crate::electrons::electron_balance)
    /// caused by this edit.
    pub fn balance_delta(self) -> i32 {
        match self {
            Edit::SetBondOrder(_, _, OrderStep::Raise) => 2,
            Edit::SetBondOrder(_, _, OrderStep::Lower) => -2,
            Edit::SetFormalCharge(_, delta) => delta as i32,
            Edit::AddLonePair(_) => 2,
            Edit::RemoveLonePair(_) => -2,
            Edit::AddSingleElectron(_) => 1,
            Edit::RemoveSingleElectron(_) => -1,
            Edit::DetachBond(_, _) => -2,
        }
    }
}

/// The outcome of applying a rule to one candidate.
#[derive(Debug, Clone)]
pub struct Rewrite {
    /// The edited clone. Atom indices below `reactant_atoms` are the
    /// reactant's own; adduct atoms follow.
    pub graph: Molecule,
    pub reactant_atoms: usize,
    /// Where each adduct atom and bond landed in `graph`.
    pub adduct_atoms: Vec<NodeIndex>,
    pub adduct_bonds: Vec<EdgeIndex>,
    /// Bonds of the pre-edit graph that the edits removed.
    pub removed_bonds: Vec<EdgeIndex>,
    /// Bonds the edits created.
    pub created_bonds: Vec<EdgeIndex>,
}

impl Rewrite {
    fn new(reactant: &Molecule) -> Self {
        Self {
            graph: reactant.clone(),
            reactant_atoms: reactant.atom_count(),
            adduct_atoms: Vec::new(),
            adduct_bonds: Vec::new(),
            removed_bonds: Vec::new(),
            created_bonds: Vec::new(),
        }
    }

    /// Flag exactly the candidate's atoms and bonds as reactive center.
    fn mark_center(&mut self, candidate: &CandidateMatch) {
        let atoms: Vec<NodeIndex> = self.graph.atoms().collect();
        for idx in atoms {
            self.graph.atom_mut(idx).reactive_center = candidate.atoms.contains(&idx);
        }
        let bonds: Vec<EdgeIndex> = self.graph.bonds().collect();
        for e in bonds {
            self.graph.bond_mut(e).reactive_center = candidate.bonds.contains(&e);
        }
    }

    /// Copy `adduct` into the graph after the reactant atoms.
    fn merge(&mut self, adduct: &Molecule) {
        let mut index_map = Vec::with_capacity(adduct.atom_count());
        for idx in adduct.atoms() {
            let new_idx = self.graph.add_atom(adduct.atom(idx).clone());
            index_map.push(new_idx);
            self.adduct_atoms.push(new_idx);
        }
        for e in adduct.bonds() {
            if let Some((a, b)) = adduct.bond_endpoints(e) {
                let new_e = self.graph.add_bond(
                    index_map[a.index()],
                    index_map[b.index()],
                    adduct.bond(e).clone(),
                );
                self.adduct_bonds.push(new_e);
            }
        }
    }

    fn set_bond_order(
        &mut self,
        a: NodeIndex,
        b: NodeIndex,
        step: OrderStep,
        factory: &dyn GraphFactory,
    ) -> Result<(), EditError> {
        match (self.graph.bond_between(a, b), step) {
            (Some(e), OrderStep::Raise) => {
                let bond = self.graph.bond_mut(e);
                bond.order = bond.order.raised().ok_or(EditError::OrderOverflow(e))?;
            }
            (Some(e), OrderStep::Lower) => match self.graph.bond(e).order.lowered() {
                Some(order) => self.graph.bond_mut(e).order = order,
                None => self.remove(e),
            },
            (None, OrderStep::Raise) => {
                let e = self.graph.add_bond(a, b, factory.new_bond(BondOrder::Single));
                self.created_bonds.push(e);
            }
            (None, OrderStep::Lower) => return Err(EditError::MissingBond(a, b)),
        }
        Ok(())
    }

    fn detach_bond(&mut self, a: NodeIndex, b: NodeIndex) -> Result<(), EditError> {
        let e = self
            .graph
            .bond_between(a, b)
            .ok_or(EditError::MissingBond(a, b))?;
        if self.graph.bond(e).order != BondOrder::Single {
            return Err(EditError::DetachMultipleBond(e));
        }
        self.remove(e);
        Ok(())
    }

    fn remove(&mut self, e: EdgeIndex) {
        self.graph.remove_bond(e);
        match self.created_bonds.iter().position(|&c| c == e) {
            Some(pos) => {
                self.created_bonds.remove(pos);
            }
            None => self.removed_bonds.push(e),
        }
    }

    fn apply_edit(
        &mut self,
        edit: Edit,
        roles: &[NodeIndex],
        factory: &dyn GraphFactory,
    ) -> Result<(), EditError> {
        let role = |r: Role| roles.get(r).copied().ok_or(EditError::UnboundRole(r));
        match edit {
            Edit::SetBondOrder(a, b, step) => self.set_bond_order(role(a)?, role(b)?, step, factory)?,
            Edit::DetachBond(a, b) => self.detach_bond(role(a)?, role(b)?)?,
            Edit::SetFormalCharge(a, delta) => {
                let idx = role(a)?;
                let atom = self.graph.atom_mut(idx);
                atom.formal_charge = atom
                    .formal_charge
                    .checked_add(delta)
                    .ok_or(EditError::ChargeOverflow(idx))?;
            }
            Edit::AddLonePair(a) => {
                let idx = role(a)?;
                let atom = self.graph.atom_mut(idx);
                atom.lone_pairs = atom
                    .lone_pairs
                    .checked_add(1)
                    .ok_or(EditError::ElectronOverflow(idx))?;
            }
            Edit::RemoveLonePair(a) => {
                let idx = role(a)?;
                let atom = self.graph.atom_mut(idx);
                atom.lone_pairs = atom
                    .lone_pairs
                    .checked_sub(1)
                    .ok_or(EditError::NoLonePair(idx))?;
            }
            Edit::AddSingleElectron(a) => {
                let idx = role(a)?;
                let atom = self.graph.atom_mut(idx);
                atom.single_electrons = atom
                    .single_electrons
                    .checked_add(1)
                    .ok_or(EditError::ElectronOverflow(idx))?;
            }
            Edit::RemoveSingleElectron(a) => {
                let idx = role(a)?;
                let atom = self.graph.atom_mut(idx);
                atom.single_electrons = atom
                    .single_electrons
                    .checked_sub(1)
                    .ok_or(EditError::NoSingleElectron(idx))?;
            }
        }
        Ok(())
    }
}

/// Expand a rule's edit plan into concrete edits for one candidate.
pub fn plan_edits(
    reactant: &Molecule,
    candidate: &CandidateMatch,
    rule: &RuleDescriptor,
) -> Result<Vec<Edit>, EditError> {
    match rule.edits {
        EditPlan::Fixed(edits) => Ok(edits.to_vec()),
        EditPlan::RingShift => {
            let ring = &candidate.atoms;
            let bonds = ring_bonds(reactant, ring).ok_or(EditError::BrokenRing)?;
            Ok(bonds
                .iter()
                .enumerate()
                .map(|(i, &e)| {
                    let step = match reactant.bond(e).order {
                        BondOrder::Single => OrderStep::Raise,
                        _ => OrderStep::Lower,
                    };
                    Edit::SetBondOrder(i, (i + 1) % ring.len(), step)
                })
                .collect())
        }
    }
}

/// Apply `rule` to one candidate on a fresh clone of `reactant`.
///
/// `adduct`, when given, is merged into the clone first; its atoms take the
/// roles following the candidate's own atoms. Whatever reactive-center
/// flags the reactant carried, the clone has exactly the candidate flagged.
/// The reactant is never touched.
pub fn apply(
    reactant: &Molecule,
    candidate: &CandidateMatch,
    rule: &RuleDescriptor,
    adduct: Option<&Molecule>,
    factory: &dyn GraphFactory,
) -> Result<Rewrite, EditError> {
    let edits = plan_edits(reactant, candidate, rule)?;

    let mut rewrite = Rewrite::new(reactant);
    rewrite.mark_center(candidate);
    if let Some(adduct) = adduct {
        rewrite.merge(adduct);
    }

    let mut roles = candidate.atoms.clone();
    roles.extend(rewrite.adduct_atoms.iter().copied());

    for edit in edits {
        rewrite.apply_edit(edit, &roles, factory)?;
    }
    Ok(rewrite)
}
