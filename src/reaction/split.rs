use std::collections::VecDeque;

use petgraph::stable_graph::{EdgeIndex, NodeIndex};

use crate::factory::GraphFactory;
use crate::Molecule;

/// Connected components of a rewritten graph, each as its own molecule.
#[derive(Debug, Clone)]
pub struct Fragments {
    pub molecules: Vec<Molecule>,
    /// For each atom of the split graph: (fragment, atom index in it).
    pub atom_map: Vec<(usize, NodeIndex)>,
    /// For each surviving bond of the split graph: (bond, fragment, bond
    /// index in it), ascending by the original bond index.
    pub bond_map: Vec<(EdgeIndex, usize, EdgeIndex)>,
}

impl Fragments {
    pub fn atom(&self, idx: NodeIndex) -> Option<(usize, NodeIndex)> {
        self.atom_map.get(idx.index()).copied()
    }

    pub fn bond(&self, idx: EdgeIndex) -> Option<(usize, EdgeIndex)> {
        self.bond_map
            .binary_search_by_key(&idx, |&(e, _, _)| e)
            .ok()
            .map(|pos| (self.bond_map[pos].1, self.bond_map[pos].2))
    }
}

/// Partition `graph` into connected molecules.
///
/// Components are discovered by breadth-first search from the lowest
/// unvisited atom, so fragments come out ordered by their lowest atom.
/// Inside a fragment atoms keep their relative order, as do bonds.
pub fn split(graph: &Molecule, factory: &dyn GraphFactory) -> Fragments {
    let count = graph.atom_count();
    let mut component: Vec<Option<usize>> = vec![None; count];
    let mut n_components = 0;

    for start in graph.atoms() {
        if component[start.index()].is_some() {
            continue;
        }
        component[start.index()] = Some(n_components);
        let mut queue = VecDeque::from([start]);
        while let Some(current) = queue.pop_front() {
            for nb in graph.neighbors(current) {
                if component[nb.index()].is_none() {
                    component[nb.index()] = Some(n_components);
                    queue.push_back(nb);
                }
            }
        }
        n_components += 1;
    }

    let mut molecules: Vec<Molecule> = (0..n_components).map(|_| factory.new_molecule()).collect();
    let mut atom_map = Vec::with_capacity(count);
    for idx in graph.atoms() {
        let frag = component[idx.index()].unwrap_or(0);
        let new_idx = molecules[frag].add_atom(graph.atom(idx).clone());
        atom_map.push((frag, new_idx));
    }

    let mut bond_map = Vec::with_capacity(graph.bond_count());
    for e in graph.bonds() {
        let Some((a, b)) = graph.bond_endpoints(e) else {
            continue;
        };
        let (frag, new_a) = atom_map[a.index()];
        let (_, new_b) = atom_map[b.index()];
        let new_e = molecules[frag].add_bond(new_a, new_b, graph.bond(e).clone());
        bond_map.push((e, frag, new_e));
    }

    Fragments {
        molecules,
        atom_map,
        bond_map,
    }
}
