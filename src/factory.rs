use crate::atom::Atom;
use crate::bond::{Bond, BondOrder};
use crate::element::Element;
use crate::Molecule;

/// Construction primitives the reaction engine uses whenever it needs a
/// fresh molecule, atom or bond.
///
/// The engine never builds graph objects any other way, so a caller that
/// wants products to carry extra defaults (say, pre-set flags) only has to
/// swap the factory in the [`ReactionContext`](crate::reaction::ReactionContext).
pub trait GraphFactory {
    fn new_molecule(&self) -> Molecule {
        Molecule::new()
    }

    fn new_atom(&self, element: Element) -> Atom {
        Atom::new(element)
    }

    fn new_bond(&self, order: BondOrder) -> Bond {
        Bond::new(order)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultFactory;

impl GraphFactory for DefaultFactory {}
