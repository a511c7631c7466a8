use petgraph::stable_graph::{EdgeIndex, NodeIndex};
use thiserror::Error;

use super::edit::Role;

/// Usage errors raised by [`Reaction::initiate`](super::Reaction::initiate)
/// before any candidate is examined.
///
/// Chemistry that simply does not work out (an invalid product, a flagged
/// set that matches nothing) is never an error; it shows up as a shorter
/// [`ReactionSet`](super::ReactionSet).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReactionError {
    /// No rule is registered under this name.
    #[error("unknown reaction rule {0:?}")]
    UnknownRule(String),
    /// The reactant set was empty.
    #[error("no reactant molecule supplied")]
    EmptyReactants,
    /// The number of reactant molecules does not match what the rule consumes.
    #[error("expected {expected} reactants, got {got}")]
    WrongReactantCount { expected: usize, got: usize },
    /// The same parameter was supplied more than once.
    #[error("parameter {0} given more than once")]
    DuplicateParameter(&'static str),
}

/// A primitive edit that could not be carried out on a candidate.
///
/// The engine treats this as a local rejection of that candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EditError {
    #[error("edit refers to role {0}, which the candidate does not bind")]
    UnboundRole(Role),
    #[error("no bond between atoms {} and {}", .0.index(), .1.index())]
    MissingBond(NodeIndex, NodeIndex),
    #[error("bond {} cannot be raised past a triple bond", .0.index())]
    OrderOverflow(EdgeIndex),
    #[error("bond {} is not a single bond and cannot be detached", .0.index())]
    DetachMultipleBond(EdgeIndex),
    #[error("formal charge of atom {} out of range", .0.index())]
    ChargeOverflow(NodeIndex),
    #[error("too many non-bonding electrons on atom {}", .0.index())]
    ElectronOverflow(NodeIndex),
    #[error("atom {} has no lone pair to remove", .0.index())]
    NoLonePair(NodeIndex),
    #[error("atom {} has no single electron to remove", .0.index())]
    NoSingleElectron(NodeIndex),
    #[error("ring center is not closed by bonds")]
    BrokenRing,
}
