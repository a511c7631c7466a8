use petgraph::stable_graph::NodeIndex;

use crate::atom::Atom;
use crate::bond::{Bond, BondOrder};
use crate::element::Element;
use crate::Molecule;

/// Turn every implicit hydrogen into an explicit H atom.
///
/// Heavy atoms keep their indices and bonds keep theirs; the new hydrogens
/// are appended after all existing atoms, grouped by parent in parent index
/// order, each with a fresh single bond appended after the existing bonds.
pub fn make_hydrogens_explicit(mol: &Molecule) -> Molecule {
    let mut result = mol.clone();
    let parents: Vec<NodeIndex> = mol.atoms().collect();
    for parent in parents {
        let h_count = result.atom(parent).hydrogen_count;
        result.atom_mut(parent).hydrogen_count = 0;
        for _ in 0..h_count {
            let h = result.add_atom(Atom::new(Element::H));
            result.add_bond(parent, h, Bond::new(BondOrder::Single));
        }
    }
    result
}

/// Indices of explicit hydrogen atoms bonded to `idx` by a single bond,
/// ascending.
pub fn explicit_hydrogens(mol: &Molecule, idx: NodeIndex) -> Vec<NodeIndex> {
    let mut hs: Vec<NodeIndex> = mol
        .bonds_of(idx)
        .filter(|&e| mol.bond(e).order == BondOrder::Single)
        .filter_map(|e| mol.other_end(e, idx))
        .filter(|&nb| mol.atom(nb).is_hydrogen())
        .collect();
    hs.sort();
    hs
}
