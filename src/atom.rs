use crate::element::Element;

/// Default atom type for a molecular graph node.
///
/// `Atom` stores the electronic state an electron-flow rule reads and
/// rewrites: element, formal charge, implicit hydrogens, and the explicit
/// non-bonding electrons (lone pairs and unpaired single electrons).
/// Computed properties such as hybridization or atom type are produced by
/// the [`atom_type`](crate::atom_type) oracle on demand.
///
/// # Examples
///
/// ```
/// use arrowpush::{Atom, Element};
///
/// let oxygen = Atom {
///     lone_pairs: 2,
///     hydrogen_count: 1,
///     ..Atom::new(Element::O)
/// };
/// assert_eq!(oxygen.atomic_num, 8);
/// assert_eq!(oxygen.formal_charge, 0);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Atom {
    /// Atomic number (1 = H, 6 = C, 7 = N, …). Identifies the element.
    pub atomic_num: u8,
    /// Formal charge in elementary charge units. An unset charge is `0`.
    pub formal_charge: i8,
    /// Number of virtual (suppressed) hydrogens on this atom.
    ///
    /// These are not graph nodes and can never be the moving hydrogen of a
    /// hydrogen-transfer rule; see
    /// [`make_hydrogens_explicit`](crate::hydrogen::make_hydrogens_explicit).
    pub hydrogen_count: u8,
    /// Non-bonding electron pairs owned by this atom.
    pub lone_pairs: u8,
    /// Unpaired electrons owned by this atom (1 for a monoradical).
    pub single_electrons: u8,
    /// Caller-set reactive-center flag, honoured in manual matching mode.
    pub reactive_center: bool,
}

impl Atom {
    pub fn new(element: Element) -> Self {
        Self {
            atomic_num: element.atomic_num(),
            ..Self::default()
        }
    }

    pub fn element(&self) -> Option<Element> {
        Element::from_atomic_num(self.atomic_num)
    }

    pub fn is_hydrogen(&self) -> bool {
        self.atomic_num == 1
    }
}

impl crate::traits::HasAtomicNum for Atom {
    fn atomic_num(&self) -> u8 {
        self.atomic_num
    }
}

impl crate::traits::HasFormalCharge for Atom {
    fn formal_charge(&self) -> i8 {
        self.formal_charge
    }
}

impl crate::traits::HasHydrogenCount for Atom {
    fn hydrogen_count(&self) -> u8 {
        self.hydrogen_count
    }
}

impl crate::traits::HasLonePairs for Atom {
    fn lone_pairs(&self) -> u8 {
        self.lone_pairs
    }
}

impl crate::traits::HasSingleElectrons for Atom {
    fn single_electrons(&self) -> u8 {
        self.single_electrons
    }
}

impl crate::traits::HasReactiveCenter for Atom {
    fn is_reactive_center(&self) -> bool {
        self.reactive_center
    }
}
