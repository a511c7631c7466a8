use petgraph::stable_graph::{EdgeIndex, NodeIndex};

use crate::Molecule;

use super::edit::Rewrite;
use super::split::Fragments;

/// An atom or a bond of some molecule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ChemObject {
    Atom(NodeIndex),
    Bond(EdgeIndex),
}

/// A [`ChemObject`] qualified by the position of its molecule in a list of
/// reactants or products.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjectRef {
    pub molecule: usize,
    pub object: ChemObject,
}

impl ObjectRef {
    pub fn atom(molecule: usize, idx: NodeIndex) -> Self {
        Self {
            molecule,
            object: ChemObject::Atom(idx),
        }
    }

    pub fn bond(molecule: usize, idx: EdgeIndex) -> Self {
        Self {
            molecule,
            object: ChemObject::Bond(idx),
        }
    }
}

/// One reactant object and the product object it became.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mapping {
    pub reactant: ObjectRef,
    pub product: ObjectRef,
}

/// Correspondence between the consumed molecules and the products.
///
/// Reactant molecule 0 is the reactant, molecule 1 the adduct if there is
/// one. Every atom is carried through (atoms are never destroyed, an
/// expelled atom just lands in its own fragment). A bond is carried
/// through unless the rewrite removed it; bonds the rewrite created have no
/// reactant counterpart. Atoms come first, then bonds, each in index order.
pub fn build_mappings(
    reactant: &Molecule,
    adduct: Option<&Molecule>,
    rewrite: &Rewrite,
    fragments: &Fragments,
) -> Vec<Mapping> {
    let mut mappings = Vec::new();
    let mut push_atom = |source: ObjectRef, graph_idx: NodeIndex| {
        if let Some((frag, idx)) = fragments.atom(graph_idx) {
            mappings.push(Mapping {
                reactant: source,
                product: ObjectRef::atom(frag, idx),
            });
        }
    };

    for idx in reactant.atoms() {
        push_atom(ObjectRef::atom(0, idx), idx);
    }
    if let Some(adduct) = adduct {
        for (idx, &graph_idx) in adduct.atoms().zip(&rewrite.adduct_atoms) {
            push_atom(ObjectRef::atom(1, idx), graph_idx);
        }
    }

    let mut push_bond = |source: ObjectRef, graph_idx: EdgeIndex| {
        if rewrite.removed_bonds.contains(&graph_idx) {
            return;
        }
        if let Some((frag, idx)) = fragments.bond(graph_idx) {
            mappings.push(Mapping {
                reactant: source,
                product: ObjectRef::bond(frag, idx),
            });
        }
    };

    for e in reactant.bonds() {
        push_bond(ObjectRef::bond(0, e), e);
    }
    if let Some(adduct) = adduct {
        for (e, &graph_idx) in adduct.bonds().zip(&rewrite.adduct_bonds) {
            push_bond(ObjectRef::bond(1, e), graph_idx);
        }
    }

    mappings
}
