//! Atom-type perception used as the validity oracle for reaction products.
//!
//! An atom "has a type" when its element, charge, bonds, lone pairs and
//! single electrons describe a state a chemist would draw. Rewrites that
//! leave any atom without a type are discarded by the reaction engine.

use std::fmt;

use petgraph::stable_graph::NodeIndex;

use crate::electrons::{bond_order_sum, pi_bond_count, shell_electrons, unassigned_electrons};
use crate::element::Element;
use crate::Molecule;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Hybridization {
    S,
    SP,
    SP2,
    #[default]
    SP3,
    /// Three sigma partners and no pi bond: radicals and cations on carbon.
    Planar,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AtomType {
    pub element: Element,
    pub hybridization: Hybridization,
    pub formal_charge: i8,
    pub radical: bool,
}

impl fmt::Display for AtomType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let hyb = match self.hybridization {
            Hybridization::S => "s",
            Hybridization::SP => "sp",
            Hybridization::SP2 => "sp2",
            Hybridization::SP3 => "sp3",
            Hybridization::Planar => "planar",
        };
        write!(f, "{}.{hyb}", self.element)?;
        match self.formal_charge {
            0 => {}
            c if c > 0 => f.write_str(".plus")?,
            _ => f.write_str(".minus")?,
        }
        if self.radical {
            f.write_str(".radical")?;
        }
        Ok(())
    }
}

/// Classifies atoms of a molecule into known atom types.
pub trait AtomTypeOracle {
    fn classify(&self, mol: &Molecule, atom: NodeIndex) -> Option<AtomType>;
}

/// Default oracle based on octet bookkeeping.
///
/// An atom is accepted when its electrons are fully and consistently
/// assigned (valence electrons minus charge equals bond orders plus
/// non-bonding electrons), its shell holds a plausible number of
/// electrons, it carries at most one unit of charge and one unpaired
/// electron, and it is not a nitrogen or oxygen radical cation that has
/// neither a pi bond nor a lone pair to delocalize into.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValenceOracle;

impl AtomTypeOracle for ValenceOracle {
    fn classify(&self, mol: &Molecule, idx: NodeIndex) -> Option<AtomType> {
        let atom = mol.atom(idx);
        let element = atom.element()?;
        let charge = atom.formal_charge;
        if !(-1..=1).contains(&charge) || atom.single_electrons > 1 {
            return None;
        }
        if unassigned_electrons(mol, idx) != 0 {
            return None;
        }

        let bond_sum = bond_order_sum(mol, idx);
        let shell = shell_electrons(mol, idx);
        let pi = pi_bond_count(mol, idx);

        if element.is_alkali_metal() {
            if bond_sum > 1 || atom.lone_pairs > 0 {
                return None;
            }
            return Some(AtomType {
                element,
                hybridization: Hybridization::S,
                formal_charge: charge,
                radical: atom.single_electrons > 0,
            });
        }

        let min_shell = match element.period() {
            1 => 0,
            _ => 6,
        };
        if shell < min_shell || shell > u16::from(element.max_shell_electrons()) {
            return None;
        }

        let radical = atom.single_electrons > 0;
        if radical
            && charge > 0
            && matches!(element, Element::N | Element::O)
            && pi == 0
            && atom.lone_pairs == 0
        {
            return None;
        }

        let sigma = mol.degree(idx) + usize::from(atom.hydrogen_count);
        let hybridization = if element == Element::H {
            Hybridization::S
        } else {
            match pi {
                0 => match sigma + usize::from(atom.lone_pairs) {
                    n if n >= 4 => Hybridization::SP3,
                    3 if atom.lone_pairs == 0 => Hybridization::Planar,
                    3 => Hybridization::SP2,
                    _ => Hybridization::SP,
                },
                1 => Hybridization::SP2,
                _ => Hybridization::SP,
            }
        };

        Some(AtomType {
            element,
            hybridization,
            formal_charge: charge,
            radical,
        })
    }
}

/// First atom of `mol` the oracle cannot type, if any.
pub fn first_untyped_atom(oracle: &dyn AtomTypeOracle, mol: &Molecule) -> Option<NodeIndex> {
    mol.atoms().find(|&idx| oracle.classify(mol, idx).is_none())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bond::BondOrder::*;
    use crate::fixtures::build;

    fn n(i: usize) -> NodeIndex {
        NodeIndex::new(i)
    }

    fn type_name(mol: &Molecule, i: usize) -> Option<String> {
        ValenceOracle.classify(mol, n(i)).map(|t| t.to_string())
    }

    #[test]
    fn ethane_sp3() {
        let mol = build(&[("C", 3, 0, 0), ("C", 3, 0, 0)], &[(0, 1, Single)]);
        assert_eq!(type_name(&mol, 0).as_deref(), Some("C.sp3"));
    }

    #[test]
    fn formaldehyde() {
        let mol = build(&[("C", 2, 0, 0), ("O", 0, 0, 0)], &[(0, 1, Double)]);
        assert_eq!(type_name(&mol, 0).as_deref(), Some("C.sp2"));
        assert_eq!(type_name(&mol, 1).as_deref(), Some("O.sp2"));
    }

    #[test]
    fn methyl_radical_planar() {
        let mol = build(&[("C", 3, 0, 1)], &[]);
        assert_eq!(type_name(&mol, 0).as_deref(), Some("C.planar.radical"));
    }

    #[test]
    fn carbocation_planar() {
        let mol = build(&[("C", 3, 1, 0)], &[]);
        assert_eq!(type_name(&mol, 0).as_deref(), Some("C.planar.plus"));
    }

    #[test]
    fn hydroxide_minus() {
        let mol = build(&[("O", 1, -1, 0)], &[]);
        assert_eq!(type_name(&mol, 0).as_deref(), Some("O.sp3.minus"));
    }

    #[test]
    fn proton_and_hydrogen_atom() {
        let mol = build(&[("H", 0, 1, 0)], &[]);
        assert_eq!(type_name(&mol, 0).as_deref(), Some("H.s.plus"));
        let mol = build(&[("H", 0, 0, 1)], &[]);
        assert_eq!(type_name(&mol, 0).as_deref(), Some("H.s.radical"));
    }

    #[test]
    fn ammonium_radical_cation_rejected() {
        let mol = build(&[("N", 3, 1, 1)], &[]);
        assert_eq!(type_name(&mol, 0), None);
    }

    #[test]
    fn carbonyl_oxygen_radical_cation_accepted() {
        let mut mol = build(&[("C", 2, 0, 0), ("O", 0, 0, 0)], &[(0, 1, Double)]);
        let o = mol.atom_mut(n(1));
        o.lone_pairs -= 1;
        o.single_electrons = 1;
        o.formal_charge = 1;
        assert_eq!(type_name(&mol, 1).as_deref(), Some("O.sp2.plus.radical"));
    }

    #[test]
    fn pentavalent_carbon_rejected() {
        let mol = build(&[("C", 5, 0, 0)], &[]);
        assert_eq!(type_name(&mol, 0), None);
    }

    #[test]
    fn oversized_hydrogen_count_rejected() {
        let mol = build(&[("C", 255, 0, 0), ("C", 3, 0, 0)], &[(0, 1, Single)]);
        assert_eq!(type_name(&mol, 0), None);
        assert_eq!(type_name(&mol, 1).as_deref(), Some("C.sp3"));
    }

    #[test]
    fn inconsistent_electrons_rejected() {
        let mut mol = build(&[("O", 2, 0, 0)], &[]);
        mol.atom_mut(n(0)).lone_pairs = 1;
        assert_eq!(type_name(&mol, 0), None);
        assert_eq!(first_untyped_atom(&ValenceOracle, &mol), Some(n(0)));
    }

    #[test]
    fn sodium_states() {
        let mol = build(&[("Na", 0, 1, 0)], &[]);
        assert_eq!(type_name(&mol, 0).as_deref(), Some("Na.s.plus"));
        let mol = build(&[("O", 1, 0, 0), ("Na", 0, 0, 0)], &[(0, 1, Single)]);
        assert!(type_name(&mol, 1).is_some());
    }
}
