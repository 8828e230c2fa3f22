//! Mode transition history tracking.
//!
//! Provides immutable tracking of the machine's mode changes over time,
//! following functional programming principles. The history is a
//! diagnostics surface: nothing in the controller's behavior depends on it.

use super::mode::Mode;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Record of a single mode transition.
///
/// Transitions are immutable values representing a move from one mode
/// to another at a specific point in time.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ModeTransition {
    /// The mode being transitioned from
    pub from: Mode,
    /// The mode being transitioned to
    pub to: Mode,
    /// When the transition occurred
    pub timestamp: DateTime<Utc>,
}

/// Ordered history of mode transitions.
///
/// History is immutable - the `record` method returns a new history
/// with the transition added, following functional programming principles.
///
/// # Example
///
/// ```rust
/// use coinbox::core::{Mode, ModeHistory, ModeTransition};
/// use chrono::Utc;
///
/// let history = ModeHistory::new();
///
/// let history = history.record(ModeTransition {
///     from: Mode::Operation,
///     to: Mode::Administering,
///     timestamp: Utc::now(),
/// });
///
/// let history = history.record(ModeTransition {
///     from: Mode::Administering,
///     to: Mode::Operation,
///     timestamp: Utc::now(),
/// });
///
/// let path = history.path();
/// assert_eq!(path.len(), 3); // Operation -> Administering -> Operation
/// ```
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct ModeHistory {
    transitions: Vec<ModeTransition>,
}

impl ModeHistory {
    /// Create a new empty history.
    pub fn new() -> Self {
        Self {
            transitions: Vec::new(),
        }
    }

    /// Record a transition, returning a new history.
    ///
    /// This is a pure function - it does not mutate the existing history
    /// but returns a new one with the transition added.
    pub fn record(&self, transition: ModeTransition) -> Self {
        let mut transitions = self.transitions.clone();
        transitions.push(transition);
        Self { transitions }
    }

    /// Get the path of modes traversed.
    ///
    /// Returns modes in order: initial mode, then the `to` mode of each
    /// transition. Empty when no transition has been recorded.
    pub fn path(&self) -> Vec<Mode> {
        let mut path = Vec::new();
        if let Some(first) = self.transitions.first() {
            path.push(first.from);
        }
        for transition in &self.transitions {
            path.push(transition.to);
        }
        path
    }

    /// Calculate total duration from first to last transition.
    ///
    /// Returns `None` if there are no transitions.
    pub fn duration(&self) -> Option<Duration> {
        if let (Some(first), Some(last)) = (self.transitions.first(), self.transitions.last()) {
            let duration = last.timestamp.signed_duration_since(first.timestamp);
            duration.to_std().ok()
        } else {
            None
        }
    }

    /// Get all transitions.
    pub fn transitions(&self) -> &[ModeTransition] {
        &self.transitions
    }
}
