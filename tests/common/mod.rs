#![allow(dead_code)]

use arrowpush::electrons::saturate_lone_pairs;
use arrowpush::{Atom, Bond, BondOrder, Element, Molecule};
use petgraph::stable_graph::NodeIndex;

pub fn n(i: usize) -> NodeIndex {
    NodeIndex::new(i)
}

pub fn order(o: u8) -> BondOrder {
    match o {
        1 => BondOrder::Single,
        2 => BondOrder::Double,
        3 => BondOrder::Triple,
        other => panic!("bad bond order {other}"),
    }
}

/// `(symbol, implicit H, charge, single electrons)` atoms and
/// `(a, b, order)` bonds; lone pairs are filled in.
pub fn build(atoms: &[(&str, u8, i8, u8)], bonds: &[(usize, usize, u8)]) -> Molecule {
    let mut mol = Molecule::new();
    for &(sym, h, charge, se) in atoms {
        let element = Element::from_symbol(sym).unwrap_or_else(|| panic!("bad symbol {sym:?}"));
        mol.add_atom(Atom {
            hydrogen_count: h,
            formal_charge: charge,
            single_electrons: se,
            ..Atom::new(element)
        });
    }
    for &(a, b, o) in bonds {
        mol.add_bond(n(a), n(b), Bond::new(order(o)));
    }
    saturate_lone_pairs(&mut mol);
    mol
}

/// Saturated carbon chain, optionally with a radical at one position.
pub fn chain(len: usize, radical: Option<usize>) -> Molecule {
    let atoms: Vec<(&str, u8, i8, u8)> = (0..len)
        .map(|i| {
            let heavy = usize::from(i > 0) + usize::from(i + 1 < len);
            let radical = radical == Some(i);
            ("C", 4 - heavy as u8 - u8::from(radical), 0, u8::from(radical))
        })
        .collect();
    let bonds: Vec<(usize, usize, u8)> = (1..len).map(|i| (i - 1, i, 1)).collect();
    build(&atoms, &bonds)
}
