//! Operating modes of the vending machine.
//!
//! The machine is always in exactly one mode, and every command is legal
//! in exactly one of them. Accessors are mode-independent.

use serde::{Deserialize, Serialize};

/// The two operating modes of the machine.
///
/// `Operation` is the customer-facing mode: coins go in, products come out.
/// `Administering` is the privileged mode: restocking, coin provisioning
/// and pricing. The machine starts in `Operation` and only a valid
/// administrator code moves it to `Administering`.
///
/// # Example
///
/// ```rust
/// use coinbox::core::Mode;
///
/// assert_eq!(Mode::Operation.name(), "Operation");
/// assert!(Mode::Administering.is_privileged());
/// assert!(!Mode::Operation.is_privileged());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum Mode {
    /// Customer-facing mode: coin insertion, dispensing, refunds.
    Operation,
    /// Privileged mode: restocking, coin fills, price changes.
    Administering,
}

impl Mode {
    /// Get the mode's name for display/logging.
    pub fn name(&self) -> &str {
        match self {
            Self::Operation => "Operation",
            Self::Administering => "Administering",
        }
    }

    /// Check if this mode grants administrative capabilities.
    pub fn is_privileged(&self) -> bool {
        matches!(self, Self::Administering)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mode_name_returns_correct_value() {
        assert_eq!(Mode::Operation.name(), "Operation");
        assert_eq!(Mode::Administering.name(), "Administering");
    }

    #[test]
    fn is_privileged_identifies_admin_mode() {
        assert!(!Mode::Operation.is_privileged());
        assert!(Mode::Administering.is_privileged());
    }

    #[test]
    fn mode_serializes_correctly() {
        let mode = Mode::Administering;
        let json = serde_json::to_string(&mode).unwrap();
        let deserialized: Mode = serde_json::from_str(&json).unwrap();
        assert_eq!(mode, deserialized);
    }

    #[test]
    fn mode_is_comparable() {
        assert_eq!(Mode::Operation, Mode::Operation);
        assert_ne!(Mode::Operation, Mode::Administering);
    }
}
