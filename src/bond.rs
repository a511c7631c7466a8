#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
pub enum BondOrder {
    #[default]
    Single,
    Double,
    Triple,
}

impl BondOrder {
    pub fn as_u8(self) -> u8 {
        match self {
            BondOrder::Single => 1,
            BondOrder::Double => 2,
            BondOrder::Triple => 3,
        }
    }

    /// One step up. `None` past a triple bond.
    pub fn raised(self) -> Option<BondOrder> {
        match self {
            BondOrder::Single => Some(BondOrder::Double),
            BondOrder::Double => Some(BondOrder::Triple),
            BondOrder::Triple => None,
        }
    }

    /// One step down. `None` means the bond disappears.
    pub fn lowered(self) -> Option<BondOrder> {
        match self {
            BondOrder::Single => None,
            BondOrder::Double => Some(BondOrder::Single),
            BondOrder::Triple => Some(BondOrder::Double),
        }
    }

    pub fn is_pi(self) -> bool {
        self != BondOrder::Single
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bond {
    pub order: BondOrder,
    pub reactive_center: bool,
}

impl Bond {
    pub fn new(order: BondOrder) -> Self {
        Self {
            order,
            reactive_center: false,
        }
    }
}

impl Default for Bond {
    fn default() -> Self {
        Self::new(BondOrder::Single)
    }
}

impl crate::traits::HasBondOrder for Bond {
    fn bond_order(&self) -> BondOrder {
        self.order
    }
}

impl crate::traits::HasReactiveCenter for Bond {
    fn is_reactive_center(&self) -> bool {
        self.reactive_center
    }
}
