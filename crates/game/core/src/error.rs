//! Error types guarding the world graph and the purchase budget.
//!
//! Every error enum of the workspace implements [`RiftError`], which pairs the
//! message with an [`ErrorSeverity`] and a stable code used in log fields and
//! tests. The runtime adds its own protocol errors on top of these.

use crate::state::ZoneId;

/// How far an error reaches into the match.
///
/// A purchase that cannot go through only costs one iteration of the budget
/// loop. A malformed map or observation is rejected outright, since the engine
/// has no way to guess the missing data. Broken input streams end the match.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum ErrorSeverity {
    /// The step is skipped and the turn carries on.
    Recoverable,
    /// The map or turn observation contradicts itself.
    Validation,
    /// The runtime was driven in an order it does not support.
    Internal,
    /// The match streams are unusable.
    Fatal,
}

/// Severity and stable code shared by every engine error.
pub trait RiftError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}

/// Errors raised while building or updating the [`crate::WorldGraph`].
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum GraphError {
    /// A zone or link references an id outside the declared zone range.
    #[error("zone {0} does not exist")]
    UnknownZone(ZoneId),

    /// The same zone id was declared twice.
    #[error("zone {0} declared more than once")]
    DuplicateZone(ZoneId),

    /// Zone ids must match their declaration index.
    #[error("zone declared at index {index} carries id {id}")]
    MisplacedZone { index: usize, id: ZoneId },

    /// A link connects a zone to itself.
    #[error("zone {0} cannot link to itself")]
    SelfLink(ZoneId),

    /// A zone exceeds the neighbour capacity of the map format.
    #[error("zone {zone} exceeds {max} neighbours")]
    TooManyLinks { zone: ZoneId, max: usize },

    /// The observation names an owner outside the player range.
    #[error("zone {zone} owned by unknown player {owner}")]
    UnknownOwner { zone: ZoneId, owner: i32 },

    /// The observation does not describe every zone exactly once.
    #[error("expected {expected} zone observations, got {actual}")]
    ObservationCount { expected: usize, actual: usize },
}

impl RiftError for GraphError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        use GraphError::*;
        match self {
            UnknownZone(_) => "GRAPH_UNKNOWN_ZONE",
            DuplicateZone(_) => "GRAPH_DUPLICATE_ZONE",
            MisplacedZone { .. } => "GRAPH_MISPLACED_ZONE",
            SelfLink(_) => "GRAPH_SELF_LINK",
            TooManyLinks { .. } => "GRAPH_TOO_MANY_LINKS",
            UnknownOwner { .. } => "GRAPH_UNKNOWN_OWNER",
            ObservationCount { .. } => "GRAPH_OBSERVATION_COUNT",
        }
    }
}

/// Reasons a purchase request is skipped.
///
/// Purchases never abort a turn: the Overmind logs the rejection and moves on
/// to the next iteration of its budget loop.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum PurchaseError {
    /// Units cannot be dropped on a zone held by another player.
    #[error("zone {0} is held by another player")]
    HostileZone(ZoneId),

    /// The remaining balance does not cover one unit.
    #[error("balance {balance} below unit price {price}")]
    InsufficientFunds { balance: u32, price: u32 },
}

impl RiftError for PurchaseError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Recoverable
    }

    fn error_code(&self) -> &'static str {
        match self {
            PurchaseError::HostileZone(_) => "PURCHASE_HOSTILE_ZONE",
            PurchaseError::InsufficientFunds { .. } => "PURCHASE_INSUFFICIENT_FUNDS",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn purchase_errors_are_recoverable() {
        let err = PurchaseError::HostileZone(ZoneId(3));
        assert_eq!(err.severity(), ErrorSeverity::Recoverable);
        assert_eq!(err.severity().to_string(), "recoverable");
        assert_eq!(err.error_code(), "PURCHASE_HOSTILE_ZONE");
    }

    #[test]
    fn graph_errors_reject_input() {
        let err = GraphError::TooManyLinks {
            zone: ZoneId(1),
            max: 6,
        };
        assert_eq!(err.severity(), ErrorSeverity::Validation);
        assert_eq!(err.to_string(), "zone #1 exceeds 6 neighbours");
    }
}
