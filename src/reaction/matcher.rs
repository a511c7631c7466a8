//! Locating reactive centers.

use std::collections::VecDeque;

use petgraph::stable_graph::{EdgeIndex, NodeIndex};

use crate::bond::BondOrder;
use crate::hydrogen::explicit_hydrogens;
use crate::rings::{ring_bonds, RingInfo, MAX_RING_SIZE};
use crate::traits::HasReactiveCenter;
use crate::Molecule;

use super::rule::{CenterShape, RuleDescriptor};

/// How candidates are found.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MatchMode {
    /// Only the atoms and bonds the caller flagged as reactive center.
    Manual,
    /// Search the whole graph, ignoring existing flags.
    #[default]
    Automatic,
}

/// One binding of a rule's center to concrete atoms and bonds.
///
/// `atoms` is ordered by role, so `atoms[0]` is always the anchor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateMatch {
    pub discovery: usize,
    pub atoms: Vec<NodeIndex>,
    pub bonds: Vec<EdgeIndex>,
}

/// Which explicit hydrogens of a walk terminal may be transferred.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TerminalHydrogens {
    Lowest,
    Each,
}

/// Every candidate for `rule` in `mol`, in discovery order.
///
/// Discovery order is anchor index first, then the index of the first
/// bond grown from the anchor, then the second bond (or walk terminal).
/// Overlapping candidates are all kept.
///
/// In manual mode the candidates are the bindings whose atoms and bonds are
/// exactly the flagged ones. A directed rule yields one candidate per
/// orientation of the flagged set, and a hydrogen-transfer rule moves the
/// flagged hydrogen whichever of the terminal's hydrogens it is.
pub fn find_candidates(mol: &Molecule, rule: &RuleDescriptor, mode: MatchMode) -> Vec<CandidateMatch> {
    match mode {
        MatchMode::Automatic => enumerate(mol, rule, |_| true, TerminalHydrogens::Lowest),
        MatchMode::Manual => manual(mol, rule),
    }
}

fn manual(mol: &Molecule, rule: &RuleDescriptor) -> Vec<CandidateMatch> {
    let mut flagged_atoms: Vec<NodeIndex> = mol
        .atoms()
        .filter(|&a| mol.atom(a).is_reactive_center())
        .collect();
    if flagged_atoms.is_empty() {
        return Vec::new();
    }
    let mut flagged_bonds: Vec<EdgeIndex> = mol
        .bonds()
        .filter(|&e| mol.bond(e).is_reactive_center())
        .collect();
    flagged_atoms.sort();
    flagged_bonds.sort();

    let anchors = flagged_atoms.clone();
    let allow_anchor = |a: NodeIndex| anchors.binary_search(&a).is_ok();
    enumerate(mol, rule, allow_anchor, TerminalHydrogens::Each)
        .into_iter()
        .filter(|c| {
            let mut atoms = c.atoms.clone();
            atoms.sort();
            atoms.dedup();
            let mut bonds = c.bonds.clone();
            bonds.sort();
            atoms == flagged_atoms && bonds == flagged_bonds
        })
        .enumerate()
        .map(|(discovery, c)| CandidateMatch { discovery, ..c })
        .collect()
}

fn enumerate(
    mol: &Molecule,
    rule: &RuleDescriptor,
    allow_anchor: impl Fn(NodeIndex) -> bool,
    hydrogens: TerminalHydrogens,
) -> Vec<CandidateMatch> {
    let rings = match rule.shape {
        CenterShape::Ring => Some(RingInfo::perceive(mol, MAX_RING_SIZE)),
        _ => None,
    };

    let mut grown = Vec::new();
    for anchor in mol.atoms() {
        if !allow_anchor(anchor) || !(rule.anchor)(mol, anchor) {
            continue;
        }
        match rule.shape {
            CenterShape::Atom => grown.push((vec![anchor], Vec::new())),
            CenterShape::Bond { orders, directed } => {
                for e in mol.bonds_of(anchor) {
                    if !orders.admits(mol.bond(e).order) {
                        continue;
                    }
                    let Some(partner) = mol.other_end(e, anchor) else {
                        continue;
                    };
                    if !directed && partner < anchor {
                        continue;
                    }
                    grown.push((vec![anchor, partner], vec![e]));
                }
            }
            CenterShape::Path => {
                for first in mol.bonds_of(anchor) {
                    let Some(middle) = mol.other_end(first, anchor) else {
                        continue;
                    };
                    for second in mol.bonds_of(middle) {
                        if second == first {
                            continue;
                        }
                        let Some(end) = mol.other_end(second, middle) else {
                            continue;
                        };
                        grown.push((vec![anchor, middle, end], vec![first, second]));
                    }
                }
            }
            CenterShape::Walk { hops } => {
                for terminal in atoms_at_distance(mol, anchor, hops) {
                    let mut movable = explicit_hydrogens(mol, terminal);
                    if hydrogens == TerminalHydrogens::Lowest {
                        movable.truncate(1);
                    }
                    for h in movable {
                        let Some(e) = mol.bond_between(terminal, h) else {
                            continue;
                        };
                        grown.push((vec![anchor, terminal, h], vec![e]));
                    }
                }
            }
            CenterShape::Ring => {
                let Some(rings) = &rings else {
                    continue;
                };
                for ring in rings.rings().iter().filter(|r| r[0] == anchor) {
                    if let Some(bonds) = ring_bonds(mol, ring) {
                        grown.push((ring.clone(), bonds));
                    }
                }
            }
        }
    }

    grown
        .into_iter()
        .filter(|(atoms, bonds)| (rule.accept)(mol, atoms, bonds))
        .enumerate()
        .map(|(discovery, (atoms, bonds))| CandidateMatch {
            discovery,
            atoms,
            bonds,
        })
        .collect()
}

/// Heavy atoms exactly `hops` single bonds from `start` along the shortest
/// path through heavy atoms, ascending.
fn atoms_at_distance(mol: &Molecule, start: NodeIndex, hops: usize) -> Vec<NodeIndex> {
    let mut dist: Vec<Option<usize>> = vec![None; mol.atom_count()];
    dist[start.index()] = Some(0);
    let mut queue = VecDeque::from([start]);
    while let Some(current) = queue.pop_front() {
        let d = dist[current.index()].unwrap_or(0);
        if d == hops {
            continue;
        }
        for e in mol.bonds_of(current) {
            if mol.bond(e).order != BondOrder::Single {
                continue;
            }
            let Some(nb) = mol.other_end(e, current) else {
                continue;
            };
            if mol.atom(nb).is_hydrogen() || dist[nb.index()].is_some() {
                continue;
            }
            dist[nb.index()] = Some(d + 1);
            queue.push_back(nb);
        }
    }
    mol.atoms()
        .filter(|a| dist[a.index()] == Some(hops))
        .collect()
}
