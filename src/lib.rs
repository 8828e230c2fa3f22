//! Coinbox: a deterministic vending machine controller
//!
//! Coinbox models a two-product, two-denomination vending machine as a
//! mode-gated state machine. The controller owns all mutable state (mode,
//! coin reserve, product stock, prices, in-flight customer balance) and every
//! operation either fully applies or fully refuses with a [`Refusal`] -
//! no operation panics and no failure path leaves partial state behind.
//!
//! # Core Concepts
//!
//! - **Modes**: `Operation` serves customers; `Administering` restocks and
//!   prices. Each command is legal in exactly one mode (accessors in both).
//! - **Exact change**: an owed amount is paid out only if it decomposes
//!   exactly into available coin units; otherwise the purchase is refused
//!   and nothing is committed.
//! - **History**: mode transitions are tracked immutably for diagnostics.
//!
//! # Example
//!
//! ```rust
//! use coinbox::core::{Mode, VendingMachine, ADMIN_CODE};
//!
//! let mut machine = VendingMachine::new();
//! assert_eq!(machine.mode(), Mode::Operation);
//!
//! // Stock the machine.
//! machine.enter_admin_mode(ADMIN_CODE)?;
//! machine.fill_products()?;
//! machine.set_prices(2, 3)?;
//! machine.exit_admin_mode()?;
//!
//! // A customer buys one unit of product 1 with exact money.
//! machine.put_coin2()?;
//! machine.give_product1(1)?;
//! assert_eq!(machine.current_balance(), 0);
//! assert_eq!(machine.product1_count(), 29);
//! # Ok::<(), coinbox::core::Refusal>(())
//! ```

pub mod core;

// Re-export commonly used types
pub use core::{ChangePlan, Mode, ModeHistory, ModeTransition, Refusal, VendingMachine};
