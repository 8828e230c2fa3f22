//! Refusal codes for rejected operations.
//!
//! Every machine operation is total: it either succeeds (`Ok(())`) or
//! refuses with one of these codes. No operation panics, and a refused
//! operation never mutates machine state.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Reasons a machine operation can be refused.
///
/// The variants form a closed taxonomy:
/// - `InvalidParam`: a caller-supplied argument is outside its documented
///   range (non-positive count, over-capacity fill, bad admin code).
/// - `IllegalOperation`: the operation is not legal in the current mode.
/// - `CannotPerform`: the operation is legal in principle but blocked by the
///   current state (coin slot at capacity, admin entry mid-transaction).
/// - `InsufficientProduct` / `InsufficientMoney` / `UnsuitableChange`:
///   purchase-flow refusals, each leaving the machine untouched.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Error, Serialize, Deserialize)]
pub enum Refusal {
    /// A parameter is outside its documented range.
    #[error("parameter outside its documented range")]
    InvalidParam,

    /// The operation is not permitted in the current mode.
    #[error("operation not permitted in the current mode")]
    IllegalOperation,

    /// The machine's current state blocks an otherwise legal operation.
    #[error("machine state does not allow the operation right now")]
    CannotPerform,

    /// Not enough units of the requested product in stock.
    #[error("not enough product in stock")]
    InsufficientProduct,

    /// The inserted balance does not cover the cost.
    #[error("inserted balance does not cover the cost")]
    InsufficientMoney,

    /// Exact change cannot be assembled from the available coins.
    #[error("exact change cannot be assembled from available coins")]
    UnsuitableChange,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn refusal_displays_a_reason() {
        let message = Refusal::UnsuitableChange.to_string();
        assert!(message.contains("change"));
    }

    #[test]
    fn refusal_serializes_correctly() {
        let refusal = Refusal::InsufficientMoney;
        let json = serde_json::to_string(&refusal).unwrap();
        let deserialized: Refusal = serde_json::from_str(&json).unwrap();
        assert_eq!(refusal, deserialized);
    }

    #[test]
    fn refusal_is_comparable() {
        assert_eq!(Refusal::InvalidParam, Refusal::InvalidParam);
        assert_ne!(Refusal::InvalidParam, Refusal::IllegalOperation);
    }
}
