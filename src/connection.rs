//! Connection integrity rules.
//!
//! Pure predicates over identifiers and the candidate's connectivity; no
//! canvas or registry access.

use crate::capabilities::Targetable;
use crate::registry::ItemId;
use thiserror::Error;

/// Why a proposed edge is refused.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum IllegalConnection {
    #[error("a node cannot connect to itself")]
    SelfLoop,

    #[error("the nodes are already connected")]
    AlreadyConnected,
}

/// Outcome of offering a candidate to a connector being drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Candidacy {
    /// The candidate already is the held target.
    Unchanged,
    /// The candidate should replace the held target (if any).
    Accepted,
    Rejected(IllegalConnection),
}

impl Candidacy {
    pub fn is_accepted(self) -> bool {
        !matches!(self, Candidacy::Rejected(_))
    }
}

/// Check an edge `source -> target` against the integrity rules.
///
/// Connectivity is a plain pair relation: an existing edge in either direction
/// forbids another one.
pub fn check(
    source: ItemId,
    target: ItemId,
    target_item: &dyn Targetable,
) -> Result<(), IllegalConnection> {
    if source == target {
        return Err(IllegalConnection::SelfLoop);
    }
    if target_item.is_already_connected_with(source) {
        return Err(IllegalConnection::AlreadyConnected);
    }
    Ok(())
}

/// Candidacy rule for a connector rooted at `source` currently holding `current`.
pub fn evaluate(
    source: ItemId,
    current: Option<ItemId>,
    candidate: ItemId,
    candidate_item: &dyn Targetable,
) -> Candidacy {
    if candidate == source {
        return Candidacy::Rejected(IllegalConnection::SelfLoop);
    }
    if current == Some(candidate) {
        return Candidacy::Unchanged;
    }
    match check(source, candidate, candidate_item) {
        Ok(()) => Candidacy::Accepted,
        Err(reason) => Candidacy::Rejected(reason),
    }
}
