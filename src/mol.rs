use petgraph::stable_graph::{EdgeIndex, NodeIndex, StableUnGraph};
use petgraph::visit::EdgeRef;

/// A molecular graph with index-stable atoms and bonds.
///
/// Backed by a [`StableUnGraph`], so removing a bond never renumbers the
/// remaining bonds. Atoms are only ever appended, which keeps atom indices
/// dense; a clone of a molecule can therefore be rewritten while every
/// surviving atom and bond keeps the index it had in the original.
///
/// All iteration orders are ascending by index, including the incident
/// bonds of an atom, independent of insertion order.
pub struct Mol<A, B> {
    graph: StableUnGraph<A, B>,
}

impl<A, B> Mol<A, B> {
    pub fn new() -> Self {
        Self {
            graph: StableUnGraph::default(),
        }
    }

    pub fn graph(&self) -> &StableUnGraph<A, B> {
        &self.graph
    }

    pub fn atom(&self, idx: NodeIndex) -> &A {
        &self.graph[idx]
    }

    pub fn atom_mut(&mut self, idx: NodeIndex) -> &mut A {
        &mut self.graph[idx]
    }

    pub fn bond(&self, idx: EdgeIndex) -> &B {
        &self.graph[idx]
    }

    pub fn bond_mut(&mut self, idx: EdgeIndex) -> &mut B {
        &mut self.graph[idx]
    }

    pub fn add_atom(&mut self, atom: A) -> NodeIndex {
        self.graph.add_node(atom)
    }

    pub fn add_bond(&mut self, a: NodeIndex, b: NodeIndex, bond: B) -> EdgeIndex {
        self.graph.add_edge(a, b, bond)
    }

    /// Remove a bond, leaving every other bond index untouched.
    pub fn remove_bond(&mut self, idx: EdgeIndex) -> Option<B> {
        self.graph.remove_edge(idx)
    }

    pub fn contains_bond(&self, idx: EdgeIndex) -> bool {
        self.graph.edge_weight(idx).is_some()
    }

    pub fn atom_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn bond_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Neighbours of `idx`, ordered by the index of the connecting bond.
    pub fn neighbors(&self, idx: NodeIndex) -> impl Iterator<Item = NodeIndex> + '_ {
        self.bonds_of(idx)
            .filter_map(move |e| self.other_end(e, idx))
    }

    /// Bonds incident to `idx` in ascending bond index order.
    pub fn bonds_of(&self, idx: NodeIndex) -> impl Iterator<Item = EdgeIndex> + '_ {
        let mut incident: Vec<EdgeIndex> = self.graph.edges(idx).map(|e| e.id()).collect();
        incident.sort();
        incident.into_iter()
    }

    pub fn degree(&self, idx: NodeIndex) -> usize {
        self.graph.edges(idx).count()
    }

    pub fn atoms(&self) -> impl Iterator<Item = NodeIndex> + '_ {
        self.graph.node_indices()
    }

    pub fn bonds(&self) -> impl Iterator<Item = EdgeIndex> + '_ {
        self.graph.edge_indices()
    }

    pub fn bond_between(&self, a: NodeIndex, b: NodeIndex) -> Option<EdgeIndex> {
        self.graph.find_edge(a, b)
    }

    pub fn bond_endpoints(&self, idx: EdgeIndex) -> Option<(NodeIndex, NodeIndex)> {
        self.graph.edge_endpoints(idx)
    }

    /// The endpoint of `bond` that is not `atom`.
    pub fn other_end(&self, bond: EdgeIndex, atom: NodeIndex) -> Option<NodeIndex> {
        let (a, b) = self.bond_endpoints(bond)?;
        if a == atom {
            Some(b)
        } else if b == atom {
            Some(a)
        } else {
            None
        }
    }
}

impl<A: Clone, B: Clone> Clone for Mol<A, B> {
    fn clone(&self) -> Self {
        Self {
            graph: self.graph.clone(),
        }
    }
}

impl<A, B> Default for Mol<A, B> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A: PartialEq, B: PartialEq> PartialEq for Mol<A, B> {
    fn eq(&self, other: &Self) -> bool {
        if self.atom_count() != other.atom_count() || self.bond_count() != other.bond_count() {
            return false;
        }
        if !self.atoms().eq(other.atoms()) || !self.bonds().eq(other.bonds()) {
            return false;
        }
        for idx in self.atoms() {
            if self.atom(idx) != other.atom(idx) {
                return false;
            }
        }
        for idx in self.bonds() {
            if self.bond(idx) != other.bond(idx) {
                return false;
            }
            let ends = |m: &Self| {
                m.bond_endpoints(idx)
                    .map(|(a, b)| if a < b { (a, b) } else { (b, a) })
            };
            if ends(self) != ends(other) {
                return false;
            }
        }
        true
    }
}

impl<A: std::fmt::Debug, B: std::fmt::Debug> std::fmt::Debug for Mol<A, B> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let atoms: Vec<&A> = self.atoms().map(|i| self.atom(i)).collect();
        let bonds: Vec<(usize, usize, &B)> = self
            .bonds()
            .filter_map(|e| {
                let (a, b) = self.bond_endpoints(e)?;
                Some((a.index(), b.index(), self.bond(e)))
            })
            .collect();
        f.debug_struct("Mol")
            .field("atoms", &atoms)
            .field("bonds", &bonds)
            .finish()
    }
}
