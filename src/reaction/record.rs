use std::sync::Arc;

use crate::Molecule;

use super::mapping::{Mapping, ObjectRef};
use super::matcher::CandidateMatch;
use super::rule::RuleId;

/// One transformation produced by a rule: what went in, what came out,
/// and how the objects correspond.
#[derive(Debug, Clone)]
pub struct ReactionRecord {
    pub(crate) rule: RuleId,
    pub(crate) reactants: Vec<Arc<Molecule>>,
    pub(crate) products: Vec<Molecule>,
    pub(crate) mappings: Vec<Mapping>,
    pub(crate) center: CandidateMatch,
}

impl ReactionRecord {
    pub fn rule(&self) -> RuleId {
        self.rule
    }

    /// Consumed molecules: the reactant, then the adduct if the rule took one.
    pub fn reactants(&self) -> &[Arc<Molecule>] {
        &self.reactants
    }

    pub fn products(&self) -> &[Molecule] {
        &self.products
    }

    pub fn mappings(&self) -> &[Mapping] {
        &self.mappings
    }

    /// The reactive center this record was produced from, in reactant indices.
    pub fn center(&self) -> &CandidateMatch {
        &self.center
    }

    /// The product object `source` became, or `None` if it was not carried
    /// through (a bond the rewrite broke).
    pub fn resolve_mapped_object(&self, source: ObjectRef) -> Option<ObjectRef> {
        self.mappings
            .iter()
            .find(|m| m.reactant == source)
            .map(|m| m.product)
    }

    /// The reactant object `target` came from, or `None` for objects the
    /// rewrite created.
    pub fn resolve_origin(&self, target: ObjectRef) -> Option<ObjectRef> {
        self.mappings
            .iter()
            .find(|m| m.product == target)
            .map(|m| m.reactant)
    }

    pub fn total_product_atoms(&self) -> usize {
        self.products.iter().map(|p| p.atom_count()).sum()
    }
}

/// Records in candidate discovery order.
#[derive(Debug, Clone, Default)]
pub struct ReactionSet {
    records: Vec<ReactionRecord>,
}

impl ReactionSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, record: ReactionRecord) {
        self.records.push(record);
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, i: usize) -> Option<&ReactionRecord> {
        self.records.get(i)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ReactionRecord> {
        self.records.iter()
    }

    pub fn records(&self) -> &[ReactionRecord] {
        &self.records
    }
}

impl std::ops::Index<usize> for ReactionSet {
    type Output = ReactionRecord;

    fn index(&self, i: usize) -> &ReactionRecord {
        &self.records[i]
    }
}

impl IntoIterator for ReactionSet {
    type Item = ReactionRecord;
    type IntoIter = std::vec::IntoIter<ReactionRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.into_iter()
    }
}

impl<'a> IntoIterator for &'a ReactionSet {
    type Item = &'a ReactionRecord;
    type IntoIter = std::slice::Iter<'a, ReactionRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
