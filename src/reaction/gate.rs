use tracing::trace;

use crate::atom_type::{first_untyped_atom, AtomTypeOracle};
use crate::Molecule;

/// Whether every atom of every product has a type under `oracle`.
pub fn validate(products: &[Molecule], oracle: &dyn AtomTypeOracle) -> bool {
    for (i, product) in products.iter().enumerate() {
        if let Some(atom) = first_untyped_atom(oracle, product) {
            trace!(product = i, atom = atom.index(), "product atom has no valid type");
            return false;
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::atom_type::ValenceOracle;
    use crate::bond::BondOrder::*;
    use crate::fixtures::build;

    #[test]
    fn valid_fragments_pass() {
        let methyl = build(&[("C", 3, 0, 1)], &[]);
        let ethyl = build(&[("C", 3, 0, 0), ("C", 2, 0, 1)], &[(0, 1, Single)]);
        assert!(validate(&[ethyl, methyl], &ValenceOracle));
    }

    #[test]
    fn one_bad_atom_rejects_everything() {
        let methyl = build(&[("C", 3, 0, 1)], &[]);
        let aminium = build(&[("N", 3, 1, 1)], &[]);
        assert!(!validate(&[methyl, aminium], &ValenceOracle));
    }

    #[test]
    fn empty_product_list_is_valid() {
        assert!(validate(&[], &ValenceOracle));
    }
}
