//! Core vending machine types and logic.
//!
//! This module contains the whole controller:
//! - Mode definitions and mode-gated access rules
//! - Refusal codes for every rejected operation
//! - The pure exact-change planner
//! - Immutable mode-transition history
//! - The `VendingMachine` controller itself
//!
//! Everything except the controller's own mutation paths is pure,
//! following the "pure core, imperative shell" philosophy.

mod change;
mod history;
mod machine;
mod mode;
mod refusal;

pub use change::{plan_change, ChangePlan};
pub use history::{ModeHistory, ModeTransition};
pub use machine::{
    VendingMachine, ADMIN_CODE, COIN1_VALUE, COIN2_VALUE, COIN_CAPACITY, PRODUCT1_CAPACITY,
    PRODUCT2_CAPACITY,
};
pub use mode::Mode;
pub use refusal::Refusal;
