//! Molecule builders shared by the unit tests.

use petgraph::stable_graph::NodeIndex;

use crate::atom::Atom;
use crate::bond::{Bond, BondOrder};
use crate::electrons::saturate_lone_pairs;
use crate::element::Element;
use crate::Molecule;

/// Build a molecule from `(symbol, implicit H, charge, single electrons)`
/// atom tuples and `(a, b, order)` bonds, then saturate lone pairs.
pub(crate) fn build(atoms: &[(&str, u8, i8, u8)], bonds: &[(usize, usize, BondOrder)]) -> Molecule {
    let mut mol = Molecule::new();
    for &(sym, h, charge, se) in atoms {
        let elem = Element::from_symbol(sym).unwrap_or_else(|| panic!("bad symbol {sym:?}"));
        mol.add_atom(Atom {
            hydrogen_count: h,
            formal_charge: charge,
            single_electrons: se,
            ..Atom::new(elem)
        });
    }
    for &(a, b, order) in bonds {
        mol.add_bond(NodeIndex::new(a), NodeIndex::new(b), Bond::new(order));
    }
    saturate_lone_pairs(&mut mol);
    mol
}

/// Straight chain of carbons with single bonds and saturating implicit H.
/// `radical` places one unpaired electron (and one fewer H) on that atom.
pub(crate) fn carbon_chain(len: usize, radical: Option<usize>) -> Molecule {
    let atoms: Vec<(&str, u8, i8, u8)> = (0..len)
        .map(|i| {
            let neighbours = usize::from(i > 0) + usize::from(i + 1 < len);
            let mut h = 4 - neighbours as u8;
            let mut se = 0;
            if radical == Some(i) {
                h -= 1;
                se = 1;
            }
            ("C", h, 0, se)
        })
        .collect();
    let bonds: Vec<(usize, usize, BondOrder)> =
        (1..len).map(|i| (i - 1, i, BondOrder::Single)).collect();
    build(&atoms, &bonds)
}
