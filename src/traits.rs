use crate::bond::BondOrder;

pub trait HasAtomicNum {
    fn atomic_num(&self) -> u8;
}

pub trait HasFormalCharge {
    fn formal_charge(&self) -> i8;
}

pub trait HasHydrogenCount {
    fn hydrogen_count(&self) -> u8;
}

pub trait HasLonePairs {
    fn lone_pairs(&self) -> u8;
}

pub trait HasSingleElectrons {
    fn single_electrons(&self) -> u8;
}

pub trait HasBondOrder {
    fn bond_order(&self) -> BondOrder;
}

/// Atoms and bonds that can be flagged by the caller as part of a reactive
/// center.
pub trait HasReactiveCenter {
    fn is_reactive_center(&self) -> bool;
}
