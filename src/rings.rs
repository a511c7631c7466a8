use std::collections::VecDeque;

use petgraph::stable_graph::{EdgeIndex, NodeIndex};

use crate::mol::Mol;

/// Largest ring the reaction rules ever look at.
pub const MAX_RING_SIZE: usize = 8;

/// Simple cycles of a molecule up to a size bound.
///
/// Every ring is stored normalized: it starts at its lowest atom index and
/// runs towards the lower of that atom's two ring neighbours. Rings are
/// sorted by size, then by atom sequence, which makes the order
/// reproducible for a given graph, though it is not canonical across
/// renumberings.
#[derive(Debug, Clone)]
pub struct RingInfo {
    rings: Vec<Vec<NodeIndex>>,
}

impl RingInfo {
    pub fn perceive<A, B>(mol: &Mol<A, B>, max_size: usize) -> Self {
        let mut rings = Vec::new();
        for start in mol.atoms() {
            let mut path = vec![start];
            extend_cycles(mol, start, &mut path, max_size, &mut rings);
        }
        rings.sort_by(|a: &Vec<NodeIndex>, b| a.len().cmp(&b.len()).then_with(|| a.cmp(b)));
        rings.dedup();
        Self { rings }
    }

    pub fn num_rings(&self) -> usize {
        self.rings.len()
    }

    pub fn rings(&self) -> &[Vec<NodeIndex>] {
        &self.rings
    }

    pub fn is_ring_atom(&self, atom: NodeIndex) -> bool {
        self.rings.iter().any(|ring| ring.contains(&atom))
    }

    pub fn is_ring_bond(&self, a: NodeIndex, b: NodeIndex) -> bool {
        self.rings.iter().any(|ring| {
            let len = ring.len();
            (0..len).any(|i| {
                let j = (i + 1) % len;
                (ring[i] == a && ring[j] == b) || (ring[i] == b && ring[j] == a)
            })
        })
    }
}

/// Bonds of a normalized ring, in ring order (`ring[0]–ring[1]` first).
pub fn ring_bonds<A, B>(mol: &Mol<A, B>, ring: &[NodeIndex]) -> Option<Vec<EdgeIndex>> {
    let len = ring.len();
    (0..len)
        .map(|i| mol.bond_between(ring[i], ring[(i + 1) % len]))
        .collect()
}

/// Whether `bond` lies on any cycle, of any size: its endpoints stay
/// connected once the bond itself is ignored.
pub fn is_cyclic_bond<A, B>(mol: &Mol<A, B>, bond: EdgeIndex) -> bool {
    let Some((from, to)) = mol.bond_endpoints(bond) else {
        return false;
    };
    let mut visited = vec![false; mol.atom_count()];
    visited[from.index()] = true;
    let mut queue = VecDeque::from([from]);
    while let Some(current) = queue.pop_front() {
        for e in mol.bonds_of(current) {
            if e == bond {
                continue;
            }
            let Some(nb) = mol.other_end(e, current) else {
                continue;
            };
            if nb == to {
                return true;
            }
            if !visited[nb.index()] {
                visited[nb.index()] = true;
                queue.push_back(nb);
            }
        }
    }
    false
}

fn extend_cycles<A, B>(
    mol: &Mol<A, B>,
    start: NodeIndex,
    path: &mut Vec<NodeIndex>,
    max_size: usize,
    rings: &mut Vec<Vec<NodeIndex>>,
) {
    let Some(&last) = path.last() else {
        return;
    };
    let neighbors: Vec<NodeIndex> = mol.neighbors(last).collect();
    for nb in neighbors {
        if nb == start {
            // each cycle is seen twice; keep the direction with the lower second atom
            if path.len() >= 3 && path[1] < path[path.len() - 1] {
                rings.push(path.clone());
            }
            continue;
        }
        if nb < start || path.contains(&nb) || path.len() >= max_size {
            continue;
        }
        path.push(nb);
        extend_cycles(mol, start, path, max_size, rings);
        path.pop();
    }
}
