//! Mechanistic reaction enumeration over molecular graphs.
//!
//! Molecules carry explicit electron bookkeeping (formal charge, lone
//! pairs, single electrons, implicit hydrogens). A [`Reaction`] applies one
//! electron-pushing rule (homolysis, heterolysis, radical hydrogen
//! transfer, charge rearrangement, adduct addition, ...) at every matching
//! site and returns the valid products with an atom and bond mapping.
//!
//! ```
//! use arrowpush::{Atom, Bond, BondOrder, Element, Molecule, Reaction, RuleId};
//! use arrowpush::electrons::saturate_lone_pairs;
//!
//! // ethane
//! let mut mol = Molecule::new();
//! let a = mol.add_atom(Atom { hydrogen_count: 3, ..Atom::new(Element::C) });
//! let b = mol.add_atom(Atom { hydrogen_count: 3, ..Atom::new(Element::C) });
//! mol.add_bond(a, b, Bond::new(BondOrder::Single));
//! saturate_lone_pairs(&mut mol);
//!
//! let set = Reaction::new(RuleId::HomolyticCleavage).initiate(&[mol], &[]).unwrap();
//! assert_eq!(set.len(), 1);
//! assert_eq!(set[0].products().len(), 2);
//! ```

pub mod atom;
pub mod atom_type;
pub mod bond;
pub mod electrons;
pub mod element;
pub mod factory;
pub mod hydrogen;
pub mod mol;
pub mod reaction;
pub mod rings;
pub mod traits;

pub use atom::Atom;
pub use atom_type::{AtomType, AtomTypeOracle, Hybridization, ValenceOracle};
pub use bond::{Bond, BondOrder};
pub use element::Element;
pub use factory::{DefaultFactory, GraphFactory};
pub use mol::Mol;
pub use reaction::{
    ChemObject, Mapping, ObjectRef, Reaction, ReactionConfig, ReactionContext, ReactionError,
    ReactionParameter, ReactionRecord, ReactionSet, RuleId,
};
pub use traits::{
    HasAtomicNum, HasBondOrder, HasFormalCharge, HasHydrogenCount, HasLonePairs,
    HasReactiveCenter, HasSingleElectrons,
};

/// The molecule type the reaction engine works on.
pub type Molecule = Mol<Atom, Bond>;

#[cfg(test)]
mod fixtures;
#[cfg(test)]
mod tests;
