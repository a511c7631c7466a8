//! Electron bookkeeping.
//!
//! Every atom's valence electrons are accounted for by its bonds (one
//! electron per bond order, implicit hydrogens included), its lone pairs
//! (two each) and its unpaired single electrons. The helpers here derive
//! lone pairs from that identity and compute the molecule-wide balance
//! that every electron-flow rewrite has to preserve.

use petgraph::stable_graph::NodeIndex;

use crate::element::Element;
use crate::mol::Mol;
use crate::traits::{
    HasAtomicNum, HasBondOrder, HasFormalCharge, HasHydrogenCount, HasLonePairs,
    HasSingleElectrons,
};
use crate::Molecule;

/// Sum of bond orders at `idx`, counting each implicit hydrogen as a single bond.
pub fn bond_order_sum<A, B>(mol: &Mol<A, B>, idx: NodeIndex) -> u16
where
    A: HasHydrogenCount,
    B: HasBondOrder,
{
    let bond_sum: u16 = mol
        .bonds_of(idx)
        .map(|ei| u16::from(mol.bond(ei).bond_order().as_u8()))
        .sum();
    bond_sum + u16::from(mol.atom(idx).hydrogen_count())
}

/// Number of pi bonds at `idx` (a double bond counts one, a triple two).
pub fn pi_bond_count<A, B: HasBondOrder>(mol: &Mol<A, B>, idx: NodeIndex) -> u16 {
    mol.bonds_of(idx)
        .map(|ei| u16::from(mol.bond(ei).bond_order().as_u8() - 1))
        .sum()
}

/// Electrons in the valence shell of `idx`: both electrons of each bond,
/// the lone pairs, and the single electrons.
pub fn shell_electrons<A, B>(mol: &Mol<A, B>, idx: NodeIndex) -> u16
where
    A: HasHydrogenCount + HasLonePairs + HasSingleElectrons,
    B: HasBondOrder,
{
    let atom = mol.atom(idx);
    2 * bond_order_sum(mol, idx)
        + 2 * u16::from(atom.lone_pairs())
        + u16::from(atom.single_electrons())
}

/// Valence electrons not yet placed in bonds, lone pairs or single
/// electrons. Zero for a fully described atom; negative when the atom is
/// over-committed.
pub fn unassigned_electrons<A, B>(mol: &Mol<A, B>, idx: NodeIndex) -> i16
where
    A: HasAtomicNum + HasFormalCharge + HasHydrogenCount + HasLonePairs + HasSingleElectrons,
    B: HasBondOrder,
{
    let atom = mol.atom(idx);
    let valence = match Element::from_atomic_num(atom.atomic_num()) {
        Some(e) => e.valence_electrons() as i16,
        None => return 0,
    };
    valence
        - atom.formal_charge() as i16
        - bond_order_sum(mol, idx) as i16
        - 2 * i16::from(atom.lone_pairs())
        - i16::from(atom.single_electrons())
}

/// Molecule-wide electron/charge balance.
///
/// Formal charge plus every bonding and non-bonding electron, where a bond
/// to an implicit hydrogen contributes only the heavy atom's electron. For a
/// fully described molecule this equals the sum of the graph atoms' valence
/// electrons, so it cannot change under a rewrite that only moves electrons
/// or exchanges an electron for a unit of charge.
pub fn electron_balance<A, B>(mol: &Mol<A, B>) -> i32
where
    A: HasFormalCharge + HasHydrogenCount + HasLonePairs + HasSingleElectrons,
    B: HasBondOrder,
{
    let atom_part: i32 = mol
        .atoms()
        .map(|idx| {
            let atom = mol.atom(idx);
            atom.formal_charge() as i32
                + 2 * atom.lone_pairs() as i32
                + atom.single_electrons() as i32
                + atom.hydrogen_count() as i32
        })
        .sum();
    let bond_part: i32 = mol
        .bonds()
        .map(|e| 2 * mol.bond(e).bond_order().as_u8() as i32)
        .sum();
    atom_part + bond_part
}

/// Fill in lone pairs from each atom's unassigned valence electrons.
///
/// Existing lone pairs are kept; hydrogen and alkali metals never receive
/// lone pairs. An odd leftover electron is left unassigned rather than
/// turned into a radical, because radicals are only ever set explicitly.
pub fn saturate_lone_pairs(mol: &mut Molecule) {
    let atoms: Vec<NodeIndex> = mol.atoms().collect();
    for idx in atoms {
        let elem = match mol.atom(idx).element() {
            Some(e) => e,
            None => continue,
        };
        if elem == Element::H || elem.is_alkali_metal() {
            continue;
        }
        let free = unassigned_electrons(mol, idx);
        if free >= 2 {
            let atom = mol.atom_mut(idx);
            atom.lone_pairs = atom.lone_pairs.saturating_add((free / 2) as u8);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bond::BondOrder::*;
    use crate::fixtures::build;
    use petgraph::stable_graph::NodeIndex;

    fn n(i: usize) -> NodeIndex {
        NodeIndex::new(i)
    }

    #[test]
    fn water_has_two_lone_pairs() {
        let mol = build(&[("O", 2, 0, 0)], &[]);
        assert_eq!(mol.atom(n(0)).lone_pairs, 2);
        assert_eq!(unassigned_electrons(&mol, n(0)), 0);
    }

    #[test]
    fn formaldehyde_lone_pairs() {
        let mol = build(&[("C", 2, 0, 0), ("O", 0, 0, 0)], &[(0, 1, Double)]);
        assert_eq!(mol.atom(n(0)).lone_pairs, 0);
        assert_eq!(mol.atom(n(1)).lone_pairs, 2);
    }

    #[test]
    fn hydroxide_has_three_lone_pairs() {
        let mol = build(&[("O", 1, -1, 0)], &[]);
        assert_eq!(mol.atom(n(0)).lone_pairs, 3);
    }

    #[test]
    fn radical_keeps_single_electron() {
        let mol = build(&[("C", 3, 0, 1)], &[]);
        assert_eq!(mol.atom(n(0)).lone_pairs, 0);
        assert_eq!(unassigned_electrons(&mol, n(0)), 0);
        assert_eq!(shell_electrons(&mol, n(0)), 7);
    }

    #[test]
    fn chloride_is_saturated() {
        let mol = build(&[("Cl", 0, -1, 0)], &[]);
        assert_eq!(mol.atom(n(0)).lone_pairs, 4);
        assert_eq!(shell_electrons(&mol, n(0)), 8);
    }

    #[test]
    fn pi_bonds_counted() {
        let mol = build(&[("C", 1, 0, 0), ("C", 1, 0, 0)], &[(0, 1, Triple)]);
        assert_eq!(pi_bond_count(&mol, n(0)), 2);
        assert_eq!(bond_order_sum(&mol, n(0)), 4);
    }

    #[test]
    fn oversized_hydrogen_count_does_not_overflow() {
        let mol = build(&[("C", 255, 0, 0), ("C", 3, 0, 0)], &[(0, 1, Single)]);
        assert_eq!(bond_order_sum(&mol, n(0)), 256);
        assert_eq!(shell_electrons(&mol, n(0)), 512);
        assert!(unassigned_electrons(&mol, n(0)) < 0);
    }

    #[test]
    fn balance_matches_valence_electrons() {
        // acetaldehyde: 2 C (4 each) + O (6)
        let mol = build(
            &[("C", 3, 0, 0), ("C", 1, 0, 0), ("O", 0, 0, 0)],
            &[(0, 1, Single), (1, 2, Double)],
        );
        assert_eq!(electron_balance(&mol), 4 + 4 + 6);
    }

    #[test]
    fn balance_of_ions() {
        let mol = build(&[("N", 4, 1, 0)], &[]);
        assert_eq!(electron_balance(&mol), 5);
        let mol = build(&[("H", 0, 1, 0)], &[]);
        assert_eq!(electron_balance(&mol), 1);
    }
}
