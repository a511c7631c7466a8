/// Main-group elements that take part in the electron-flow archetypes.
///
/// The set is deliberately restricted to elements whose bonding can be
/// described with the octet (or expanded-octet) bookkeeping the atom-type
/// oracle performs. Anything else is rejected at construction time by
/// [`Element::from_symbol`] / [`Element::from_atomic_num`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum Element {
    H = 1,
    Li = 3,
    B = 5,
    C = 6,
    N = 7,
    O = 8,
    F = 9,
    Na = 11,
    Si = 14,
    P = 15,
    S = 16,
    Cl = 17,
    K = 19,
    Br = 35,
    I = 53,
}

// symbol, Element pairs for from_symbol lookup
const SYMBOL_TABLE: [(&str, Element); 15] = [
    ("H", Element::H),
    ("Li", Element::Li),
    ("B", Element::B),
    ("C", Element::C),
    ("N", Element::N),
    ("O", Element::O),
    ("F", Element::F),
    ("Na", Element::Na),
    ("Si", Element::Si),
    ("P", Element::P),
    ("S", Element::S),
    ("Cl", Element::Cl),
    ("K", Element::K),
    ("Br", Element::Br),
    ("I", Element::I),
];

impl Element {
    pub fn from_atomic_num(n: u8) -> Option<Element> {
        SYMBOL_TABLE
            .iter()
            .find(|(_, e)| *e as u8 == n)
            .map(|(_, e)| *e)
    }

    pub fn from_symbol(s: &str) -> Option<Element> {
        SYMBOL_TABLE.iter().find(|(sym, _)| *sym == s).map(|(_, e)| *e)
    }

    pub fn atomic_num(self) -> u8 {
        self as u8
    }

    pub fn symbol(self) -> &'static str {
        SYMBOL_TABLE
            .iter()
            .find(|(_, e)| *e == self)
            .map(|(sym, _)| *sym)
            .unwrap_or("?")
    }

    /// Electrons in the outermost shell of the neutral atom.
    pub fn valence_electrons(self) -> u8 {
        match self {
            Element::H | Element::Li | Element::Na | Element::K => 1,
            Element::B => 3,
            Element::C | Element::Si => 4,
            Element::N | Element::P => 5,
            Element::O | Element::S => 6,
            Element::F | Element::Cl | Element::Br | Element::I => 7,
        }
    }

    pub fn period(self) -> u8 {
        match self {
            Element::H => 1,
            Element::Li | Element::B | Element::C | Element::N | Element::O | Element::F => 2,
            Element::Na | Element::Si | Element::P | Element::S | Element::Cl => 3,
            Element::K | Element::Br => 4,
            Element::I => 5,
        }
    }

    pub fn is_alkali_metal(self) -> bool {
        matches!(self, Element::Li | Element::Na | Element::K)
    }

    /// Heteroatoms in the organic sense: anything that is neither carbon,
    /// hydrogen nor a metal.
    pub fn is_heteroatom(self) -> bool {
        !matches!(self, Element::C | Element::H) && !self.is_alkali_metal()
    }

    /// Largest number of electrons the atom may hold in its valence shell.
    pub fn max_shell_electrons(self) -> u8 {
        match self.period() {
            1 => 2,
            2 => 8,
            _ => 12,
        }
    }
}

impl std::fmt::Display for Element {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.symbol())
    }
}
