//! The catalog of electron-flow archetypes.
//!
//! Each [`RuleDescriptor`] is plain data: the shape of the reactive center,
//! two pure predicates over the reactant graph, and the edit sequence that
//! rewrites a matched center. The registry is a `static` table, so lookups
//! are free and the descriptors can be shared across threads.

use std::fmt;
use std::str::FromStr;

use petgraph::stable_graph::{EdgeIndex, NodeIndex};
use serde::{Deserialize, Serialize};

use crate::atom::Atom;
use crate::bond::BondOrder;
use crate::element::Element;
use crate::rings::is_cyclic_bond;
use crate::Molecule;

use super::edit::Edit::{self, *};
use super::edit::OrderStep::{Lower, Raise};
use super::error::ReactionError;

/// Identifies one archetype.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleId {
    HomolyticCleavage,
    HeterolyticCleavageSb,
    HeterolyticCleavagePb,
    ElectronImpactNbe,
    ElectronImpactPdb,
    ElectronImpactSdb,
    RadicalSiteHrAlpha,
    RadicalSiteHrBeta,
    RadicalSiteHrGamma,
    RadicalSiteHrDelta,
    RadicalSiteInitiation,
    RadicalSiteInitiationH,
    RadicalChargeSiteInitiation,
    RadicalChargeSiteInitiationH,
    RearrangementAnion,
    RearrangementCation,
    RearrangementLonePair,
    RearrangementRadical,
    SharingLonePair,
    SharingAnion,
    Hyperconjugation,
    AdductionProtonLp,
    AdductionProtonPb,
    AdductionSodiumLp,
    PiBondingMovement,
}

impl RuleId {
    pub const ALL: [RuleId; 25] = [
        RuleId::HomolyticCleavage,
        RuleId::HeterolyticCleavageSb,
        RuleId::HeterolyticCleavagePb,
        RuleId::ElectronImpactNbe,
        RuleId::ElectronImpactPdb,
        RuleId::ElectronImpactSdb,
        RuleId::RadicalSiteHrAlpha,
        RuleId::RadicalSiteHrBeta,
        RuleId::RadicalSiteHrGamma,
        RuleId::RadicalSiteHrDelta,
        RuleId::RadicalSiteInitiation,
        RuleId::RadicalSiteInitiationH,
        RuleId::RadicalChargeSiteInitiation,
        RuleId::RadicalChargeSiteInitiationH,
        RuleId::RearrangementAnion,
        RuleId::RearrangementCation,
        RuleId::RearrangementLonePair,
        RuleId::RearrangementRadical,
        RuleId::SharingLonePair,
        RuleId::SharingAnion,
        RuleId::Hyperconjugation,
        RuleId::AdductionProtonLp,
        RuleId::AdductionProtonPb,
        RuleId::AdductionSodiumLp,
        RuleId::PiBondingMovement,
    ];

    pub fn name(self) -> &'static str {
        match self {
            RuleId::HomolyticCleavage => "homolytic_cleavage",
            RuleId::HeterolyticCleavageSb => "heterolytic_cleavage_sb",
            RuleId::HeterolyticCleavagePb => "heterolytic_cleavage_pb",
            RuleId::ElectronImpactNbe => "electron_impact_nbe",
            RuleId::ElectronImpactPdb => "electron_impact_pdb",
            RuleId::ElectronImpactSdb => "electron_impact_sdb",
            RuleId::RadicalSiteHrAlpha => "radical_site_hr_alpha",
            RuleId::RadicalSiteHrBeta => "radical_site_hr_beta",
            RuleId::RadicalSiteHrGamma => "radical_site_hr_gamma",
            RuleId::RadicalSiteHrDelta => "radical_site_hr_delta",
            RuleId::RadicalSiteInitiation => "radical_site_initiation",
            RuleId::RadicalSiteInitiationH => "radical_site_initiation_h",
            RuleId::RadicalChargeSiteInitiation => "radical_charge_site_initiation",
            RuleId::RadicalChargeSiteInitiationH => "radical_charge_site_initiation_h",
            RuleId::RearrangementAnion => "rearrangement_anion",
            RuleId::RearrangementCation => "rearrangement_cation",
            RuleId::RearrangementLonePair => "rearrangement_lone_pair",
            RuleId::RearrangementRadical => "rearrangement_radical",
            RuleId::SharingLonePair => "sharing_lone_pair",
            RuleId::SharingAnion => "sharing_anion",
            RuleId::Hyperconjugation => "hyperconjugation",
            RuleId::AdductionProtonLp => "adduction_proton_lp",
            RuleId::AdductionProtonPb => "adduction_proton_pb",
            RuleId::AdductionSodiumLp => "adduction_sodium_lp",
            RuleId::PiBondingMovement => "pi_bonding_movement",
        }
    }
}

impl fmt::Display for RuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for RuleId {
    type Err = ReactionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RuleId::ALL
            .into_iter()
            .find(|id| id.name() == s)
            .ok_or_else(|| ReactionError::UnknownRule(s.to_string()))
    }
}

/// Which bond orders a bond-centered rule accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderFilter {
    Single,
    Double,
    /// Double or triple.
    Pi,
}

impl OrderFilter {
    pub fn admits(self, order: BondOrder) -> bool {
        match self {
            OrderFilter::Single => order == BondOrder::Single,
            OrderFilter::Double => order == BondOrder::Double,
            OrderFilter::Pi => order.is_pi(),
        }
    }
}

/// How the matcher grows a candidate out of an anchor atom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CenterShape {
    /// The anchor alone: atoms `[a]`.
    Atom,
    /// The anchor and one incident bond: atoms `[a, b]`, bonds `[a–b]`.
    /// An undirected rule only binds each bond once, from its lower atom.
    Bond { orders: OrderFilter, directed: bool },
    /// Two consecutive bonds from the anchor: atoms `[a, b, c]`,
    /// bonds `[a–b, b–c]`.
    Path,
    /// A hydrogen reached `hops` single bonds away: atoms `[a, t, h]`,
    /// bonds `[t–h]`.
    Walk { hops: usize },
    /// A ring whose lowest atom is the anchor: ring atoms in ring order,
    /// ring bonds in ring order.
    Ring,
}

/// A small species merged into the reactant by addition rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Adduct {
    Proton,
    Sodium,
}

impl Adduct {
    pub fn element(self) -> Element {
        match self {
            Adduct::Proton => Element::H,
            Adduct::Sodium => Element::Na,
        }
    }

    /// Whether `mol` is this adduct: a lone, bare cation of the element.
    pub fn is_species(self, mol: &Molecule) -> bool {
        let mut atoms = mol.atoms();
        match (atoms.next(), atoms.next()) {
            (Some(idx), None) => {
                let atom = mol.atom(idx);
                atom.element() == Some(self.element())
                    && atom.formal_charge == 1
                    && atom.hydrogen_count == 0
                    && atom.single_electrons == 0
                    && atom.lone_pairs == 0
            }
            _ => false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditPlan {
    Fixed(&'static [Edit]),
    /// Toggle every bond of the matched ring between single and double.
    RingShift,
}

pub type AnchorFn = fn(&Molecule, NodeIndex) -> bool;
pub type AcceptFn = fn(&Molecule, &[NodeIndex], &[EdgeIndex]) -> bool;

#[derive(Clone, Copy)]
pub struct RuleDescriptor {
    pub id: RuleId,
    pub description: &'static str,
    pub shape: CenterShape,
    /// Cheap first check on the anchor atom.
    pub anchor: AnchorFn,
    /// Full check on a grown candidate. Must not depend on anything but the
    /// graph and the offered atoms and bonds.
    pub accept: AcceptFn,
    pub edits: EditPlan,
    pub adduct: Option<Adduct>,
}

impl RuleDescriptor {
    pub fn name(&self) -> &'static str {
        self.id.name()
    }
}

impl fmt::Debug for RuleDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RuleDescriptor")
            .field("id", &self.id)
            .field("shape", &self.shape)
            .field("edits", &self.edits)
            .field("adduct", &self.adduct)
            .finish_non_exhaustive()
    }
}

pub fn lookup(id: RuleId) -> &'static RuleDescriptor {
    &REGISTRY[id as usize]
}

pub fn lookup_name(name: &str) -> Result<&'static RuleDescriptor, ReactionError> {
    name.parse::<RuleId>().map(lookup)
}

pub fn registry() -> &'static [RuleDescriptor] {
    &REGISTRY
}

// --- predicate helpers ---

fn closed_shell(atom: &Atom) -> bool {
    atom.single_electrons == 0
}

fn neutral_closed_shell(atom: &Atom) -> bool {
    atom.formal_charge == 0 && closed_shell(atom)
}

fn bare_cation(atom: &Atom) -> bool {
    atom.formal_charge == 1 && atom.single_electrons == 0 && atom.lone_pairs == 0
}

fn order(mol: &Molecule, e: EdgeIndex) -> BondOrder {
    mol.bond(e).order
}

fn heavy(atom: &Atom) -> bool {
    !atom.is_hydrogen()
}

// --- anchors ---

fn any_closed_shell(mol: &Molecule, a: NodeIndex) -> bool {
    closed_shell(mol.atom(a))
}

fn neutral_anchor(mol: &Molecule, a: NodeIndex) -> bool {
    neutral_closed_shell(mol.atom(a))
}

fn neutral_heavy_anchor(mol: &Molecule, a: NodeIndex) -> bool {
    let atom = mol.atom(a);
    neutral_closed_shell(atom) && heavy(atom)
}

fn lone_pair_heteroatom(mol: &Molecule, a: NodeIndex) -> bool {
    let atom = mol.atom(a);
    neutral_closed_shell(atom)
        && atom.lone_pairs > 0
        && atom.element().is_some_and(Element::is_heteroatom)
}

fn neutral_radical(mol: &Molecule, a: NodeIndex) -> bool {
    let atom = mol.atom(a);
    atom.single_electrons == 1 && atom.formal_charge == 0 && heavy(atom)
}

fn radical_cation(mol: &Molecule, a: NodeIndex) -> bool {
    let atom = mol.atom(a);
    atom.single_electrons == 1 && atom.formal_charge == 1 && heavy(atom)
}

fn any_radical(mol: &Molecule, a: NodeIndex) -> bool {
    let atom = mol.atom(a);
    atom.single_electrons == 1 && heavy(atom)
}

fn anion_with_lone_pair(mol: &Molecule, a: NodeIndex) -> bool {
    let atom = mol.atom(a);
    atom.formal_charge == -1 && atom.lone_pairs > 0 && closed_shell(atom)
}

fn cation_anchor(mol: &Molecule, a: NodeIndex) -> bool {
    bare_cation(mol.atom(a))
}

fn lone_pair_donor(mol: &Molecule, a: NodeIndex) -> bool {
    let atom = mol.atom(a);
    neutral_closed_shell(atom) && atom.lone_pairs > 0
}

fn lone_pair_base(mol: &Molecule, a: NodeIndex) -> bool {
    let atom = mol.atom(a);
    atom.lone_pairs > 0 && atom.formal_charge <= 0 && closed_shell(atom) && heavy(atom)
}

fn lone_pair_hetero_base(mol: &Molecule, a: NodeIndex) -> bool {
    lone_pair_base(mol, a) && mol.atom(a).element().is_some_and(Element::is_heteroatom)
}

fn pi_atom(mol: &Molecule, a: NodeIndex) -> bool {
    mol.bonds_of(a).any(|e| order(mol, e).is_pi())
}

// --- full predicates ---

fn accept_any(_: &Molecule, _: &[NodeIndex], _: &[EdgeIndex]) -> bool {
    true
}

fn homolysis(mol: &Molecule, atoms: &[NodeIndex], bonds: &[EdgeIndex]) -> bool {
    closed_shell(mol.atom(atoms[1])) && !is_cyclic_bond(mol, bonds[0])
}

fn neutral_partner(mol: &Molecule, atoms: &[NodeIndex], _: &[EdgeIndex]) -> bool {
    neutral_closed_shell(mol.atom(atoms[1]))
}

fn neutral_heavy_partner(mol: &Molecule, atoms: &[NodeIndex], _: &[EdgeIndex]) -> bool {
    let partner = mol.atom(atoms[1]);
    neutral_closed_shell(partner) && heavy(partner)
}

fn hydrogen_walk(mol: &Molecule, atoms: &[NodeIndex], bonds: &[EdgeIndex]) -> bool {
    atoms[1] != atoms[0]
        && heavy(mol.atom(atoms[1]))
        && mol.atom(atoms[2]).is_hydrogen()
        && order(mol, bonds[0]) == BondOrder::Single
}

fn sigma_cleavage_path(mol: &Molecule, atoms: &[NodeIndex], bonds: &[EdgeIndex]) -> bool {
    order(mol, bonds[0]) == BondOrder::Single
        && order(mol, bonds[1]) == BondOrder::Single
        && neutral_closed_shell(mol.atom(atoms[1]))
        && neutral_closed_shell(mol.atom(atoms[2]))
}

fn sigma_cleavage_heavy(mol: &Molecule, atoms: &[NodeIndex], bonds: &[EdgeIndex]) -> bool {
    sigma_cleavage_path(mol, atoms, bonds) && heavy(mol.atom(atoms[2]))
}

fn sigma_cleavage_hydrogen(mol: &Molecule, atoms: &[NodeIndex], bonds: &[EdgeIndex]) -> bool {
    sigma_cleavage_path(mol, atoms, bonds) && mol.atom(atoms[2]).is_hydrogen()
}

fn allylic_path(mol: &Molecule, atoms: &[NodeIndex], bonds: &[EdgeIndex]) -> bool {
    order(mol, bonds[0]) == BondOrder::Single
        && order(mol, bonds[1]).is_pi()
        && neutral_closed_shell(mol.atom(atoms[1]))
        && neutral_closed_shell(mol.atom(atoms[2]))
}

fn cation_partner(mol: &Molecule, atoms: &[NodeIndex], _: &[EdgeIndex]) -> bool {
    bare_cation(mol.atom(atoms[1]))
}

fn anion_partner(mol: &Molecule, atoms: &[NodeIndex], _: &[EdgeIndex]) -> bool {
    anion_with_lone_pair(mol, atoms[1])
}

fn alternating_ring(mol: &Molecule, atoms: &[NodeIndex], bonds: &[EdgeIndex]) -> bool {
    if atoms.len() % 2 != 0 || bonds.len() != atoms.len() {
        return false;
    }
    if !atoms.iter().all(|&a| neutral_closed_shell(mol.atom(a))) {
        return false;
    }
    let first = order(mol, bonds[0]);
    if !matches!(first, BondOrder::Single | BondOrder::Double) {
        return false;
    }
    bonds.iter().enumerate().all(|(i, &e)| {
        let expected = if i % 2 == 0 {
            first
        } else if first == BondOrder::Single {
            BondOrder::Double
        } else {
            BondOrder::Single
        };
        order(mol, e) == expected
    })
}

// --- edit sequences ---

const HOMOLYSIS: [Edit; 3] = [
    SetBondOrder(0, 1, Lower),
    AddSingleElectron(0),
    AddSingleElectron(1),
];

const HETEROLYSIS: [Edit; 4] = [
    SetBondOrder(0, 1, Lower),
    SetFormalCharge(0, 1),
    SetFormalCharge(1, -1),
    AddLonePair(1),
];

const IONIZE_LONE_PAIR: [Edit; 3] = [
    RemoveLonePair(0),
    AddSingleElectron(0),
    SetFormalCharge(0, 1),
];

const IONIZE_BOND: [Edit; 3] = [
    SetBondOrder(0, 1, Lower),
    SetFormalCharge(0, 1),
    AddSingleElectron(1),
];

const HYDROGEN_TRANSFER: [Edit; 4] = [
    RemoveSingleElectron(0),
    DetachBond(1, 2),
    SetBondOrder(0, 2, Raise),
    AddSingleElectron(1),
];

const RADICAL_SHIFT: [Edit; 4] = [
    RemoveSingleElectron(0),
    SetBondOrder(0, 1, Raise),
    SetBondOrder(1, 2, Lower),
    AddSingleElectron(2),
];

const LONE_PAIR_SHIFT: [Edit; 6] = [
    RemoveLonePair(0),
    SetFormalCharge(0, 1),
    SetBondOrder(0, 1, Raise),
    SetBondOrder(1, 2, Lower),
    SetFormalCharge(2, -1),
    AddLonePair(2),
];

const CATION_SHIFT: [Edit; 4] = [
    SetFormalCharge(0, -1),
    SetBondOrder(0, 1, Raise),
    SetBondOrder(1, 2, Lower),
    SetFormalCharge(2, 1),
];

const SHARE_LONE_PAIR: [Edit; 4] = [
    RemoveLonePair(0),
    SetFormalCharge(0, 1),
    SetBondOrder(0, 1, Raise),
    SetFormalCharge(1, -1),
];

const SHARE_ANION: [Edit; 4] = [
    SetFormalCharge(0, -1),
    RemoveLonePair(1),
    SetFormalCharge(1, 1),
    SetBondOrder(0, 1, Raise),
];

const EXPEL_PROTON: [Edit; 4] = [
    SetFormalCharge(0, -1),
    SetBondOrder(0, 1, Raise),
    DetachBond(1, 2),
    SetFormalCharge(2, 1),
];

const ADD_CATION_TO_LONE_PAIR: [Edit; 4] = [
    RemoveLonePair(0),
    SetFormalCharge(0, 1),
    SetFormalCharge(1, -1),
    SetBondOrder(0, 1, Raise),
];

const ADD_PROTON_TO_PI_BOND: [Edit; 4] = [
    SetBondOrder(0, 1, Lower),
    SetFormalCharge(0, 1),
    SetFormalCharge(2, -1),
    SetBondOrder(1, 2, Raise),
];

const fn walk(id: RuleId, description: &'static str, hops: usize) -> RuleDescriptor {
    RuleDescriptor {
        id,
        description,
        shape: CenterShape::Walk { hops },
        anchor: any_radical,
        accept: hydrogen_walk,
        edits: EditPlan::Fixed(&HYDROGEN_TRANSFER),
        adduct: None,
    }
}

// Indexed by `RuleId as usize`; the order must follow the enum.
static REGISTRY: [RuleDescriptor; 25] = [
    RuleDescriptor {
        id: RuleId::HomolyticCleavage,
        description: "A-B => A* + B*: single non-ring bond breaks, one electron to each atom",
        shape: CenterShape::Bond { orders: OrderFilter::Single, directed: false },
        anchor: any_closed_shell,
        accept: homolysis,
        edits: EditPlan::Fixed(&HOMOLYSIS),
        adduct: None,
    },
    RuleDescriptor {
        id: RuleId::HeterolyticCleavageSb,
        description: "A-B => [A+] + [B-]: single bond breaks, pair to the partner",
        shape: CenterShape::Bond { orders: OrderFilter::Single, directed: true },
        anchor: neutral_anchor,
        accept: neutral_partner,
        edits: EditPlan::Fixed(&HETEROLYSIS),
        adduct: None,
    },
    RuleDescriptor {
        id: RuleId::HeterolyticCleavagePb,
        description: "A=B => [A+]-[B-]: pi bond breaks, pair to the partner",
        shape: CenterShape::Bond { orders: OrderFilter::Pi, directed: true },
        anchor: neutral_anchor,
        accept: neutral_partner,
        edits: EditPlan::Fixed(&HETEROLYSIS),
        adduct: None,
    },
    RuleDescriptor {
        id: RuleId::ElectronImpactNbe,
        description: "X: => [X*+]: one non-bonding electron of a heteroatom is removed",
        shape: CenterShape::Atom,
        anchor: lone_pair_heteroatom,
        accept: accept_any,
        edits: EditPlan::Fixed(&IONIZE_LONE_PAIR),
        adduct: None,
    },
    RuleDescriptor {
        id: RuleId::ElectronImpactPdb,
        description: "A=B => [A+]-[B*]: one electron of a pi bond is removed",
        shape: CenterShape::Bond { orders: OrderFilter::Pi, directed: true },
        anchor: neutral_heavy_anchor,
        accept: neutral_heavy_partner,
        edits: EditPlan::Fixed(&IONIZE_BOND),
        adduct: None,
    },
    RuleDescriptor {
        id: RuleId::ElectronImpactSdb,
        description: "A-B => [A+] + [B*]: one electron of a sigma bond is removed",
        shape: CenterShape::Bond { orders: OrderFilter::Single, directed: true },
        anchor: neutral_heavy_anchor,
        accept: neutral_heavy_partner,
        edits: EditPlan::Fixed(&IONIZE_BOND),
        adduct: None,
    },
    walk(RuleId::RadicalSiteHrAlpha, "[A*]-B-H => A(H)-[B*]", 1),
    walk(RuleId::RadicalSiteHrBeta, "[A*]-B-C-H => A(H)-B-[C*]", 2),
    walk(RuleId::RadicalSiteHrGamma, "[A*]-B-C-D-H => A(H)-B-C-[D*]", 3),
    walk(RuleId::RadicalSiteHrDelta, "[A*]-B-C-D-E-H => A(H)-B-C-D-[E*]", 4),
    RuleDescriptor {
        id: RuleId::RadicalSiteInitiation,
        description: "[A*]-B-C => A=B + [C*]",
        shape: CenterShape::Path,
        anchor: neutral_radical,
        accept: sigma_cleavage_heavy,
        edits: EditPlan::Fixed(&RADICAL_SHIFT),
        adduct: None,
    },
    RuleDescriptor {
        id: RuleId::RadicalSiteInitiationH,
        description: "[A*]-B-H => A=B + [H*]",
        shape: CenterShape::Path,
        anchor: neutral_radical,
        accept: sigma_cleavage_hydrogen,
        edits: EditPlan::Fixed(&RADICAL_SHIFT),
        adduct: None,
    },
    RuleDescriptor {
        id: RuleId::RadicalChargeSiteInitiation,
        description: "[A*+]-B-C => [A+]=B + [C*]",
        shape: CenterShape::Path,
        anchor: radical_cation,
        accept: sigma_cleavage_heavy,
        edits: EditPlan::Fixed(&RADICAL_SHIFT),
        adduct: None,
    },
    RuleDescriptor {
        id: RuleId::RadicalChargeSiteInitiationH,
        description: "[A*+]-B-H => [A+]=B + [H*]",
        shape: CenterShape::Path,
        anchor: radical_cation,
        accept: sigma_cleavage_hydrogen,
        edits: EditPlan::Fixed(&RADICAL_SHIFT),
        adduct: None,
    },
    RuleDescriptor {
        id: RuleId::RearrangementAnion,
        description: "[A-]-B=C => A=B-[C-]",
        shape: CenterShape::Path,
        anchor: anion_with_lone_pair,
        accept: allylic_path,
        edits: EditPlan::Fixed(&LONE_PAIR_SHIFT),
        adduct: None,
    },
    RuleDescriptor {
        id: RuleId::RearrangementCation,
        description: "[A+]-B=C => A=B-[C+]",
        shape: CenterShape::Path,
        anchor: cation_anchor,
        accept: allylic_path,
        edits: EditPlan::Fixed(&CATION_SHIFT),
        adduct: None,
    },
    RuleDescriptor {
        id: RuleId::RearrangementLonePair,
        description: "X:-B=C => [X+]=B-[C-]",
        shape: CenterShape::Path,
        anchor: lone_pair_heteroatom,
        accept: allylic_path,
        edits: EditPlan::Fixed(&LONE_PAIR_SHIFT),
        adduct: None,
    },
    RuleDescriptor {
        id: RuleId::RearrangementRadical,
        description: "[A*]-B=C => A=B-[C*]",
        shape: CenterShape::Path,
        anchor: neutral_radical,
        accept: allylic_path,
        edits: EditPlan::Fixed(&RADICAL_SHIFT),
        adduct: None,
    },
    RuleDescriptor {
        id: RuleId::SharingLonePair,
        description: "X:-[B+] => [X+]=B",
        shape: CenterShape::Bond { orders: OrderFilter::Single, directed: true },
        anchor: lone_pair_donor,
        accept: cation_partner,
        edits: EditPlan::Fixed(&SHARE_LONE_PAIR),
        adduct: None,
    },
    RuleDescriptor {
        id: RuleId::SharingAnion,
        description: "[A+]-[B-] => A=B",
        shape: CenterShape::Bond { orders: OrderFilter::Single, directed: true },
        anchor: cation_anchor,
        accept: anion_partner,
        edits: EditPlan::Fixed(&SHARE_ANION),
        adduct: None,
    },
    RuleDescriptor {
        id: RuleId::Hyperconjugation,
        description: "[A+]-B-H => A=B + [H+]",
        shape: CenterShape::Path,
        anchor: cation_anchor,
        accept: sigma_cleavage_hydrogen,
        edits: EditPlan::Fixed(&EXPEL_PROTON),
        adduct: None,
    },
    RuleDescriptor {
        id: RuleId::AdductionProtonLp,
        description: "X: + [H+] => [X+]-H",
        shape: CenterShape::Atom,
        anchor: lone_pair_base,
        accept: accept_any,
        edits: EditPlan::Fixed(&ADD_CATION_TO_LONE_PAIR),
        adduct: Some(Adduct::Proton),
    },
    RuleDescriptor {
        id: RuleId::AdductionProtonPb,
        description: "A=B + [H+] => [A+]-B-H",
        shape: CenterShape::Bond { orders: OrderFilter::Double, directed: true },
        anchor: neutral_heavy_anchor,
        accept: neutral_heavy_partner,
        edits: EditPlan::Fixed(&ADD_PROTON_TO_PI_BOND),
        adduct: Some(Adduct::Proton),
    },
    RuleDescriptor {
        id: RuleId::AdductionSodiumLp,
        description: "X: + [Na+] => [X+]-Na",
        shape: CenterShape::Atom,
        anchor: lone_pair_hetero_base,
        accept: accept_any,
        edits: EditPlan::Fixed(&ADD_CATION_TO_LONE_PAIR),
        adduct: Some(Adduct::Sodium),
    },
    RuleDescriptor {
        id: RuleId::PiBondingMovement,
        description: "ring of alternating single/double bonds shifts every pi bond by one position",
        shape: CenterShape::Ring,
        anchor: pi_atom,
        accept: alternating_ring,
        edits: EditPlan::RingShift,
        adduct: None,
    },
];
