//! The vending machine controller.
//!
//! A single stateful controller owning mode, coin reserve, product stock,
//! prices and the in-flight customer balance. Every operation is total:
//! it validates first and either fully applies its effect or fully refuses
//! with a [`Refusal`], never leaving partial state behind.

use super::change::plan_change;
use super::history::{ModeHistory, ModeTransition};
use super::mode::Mode;
use super::refusal::Refusal;
use chrono::Utc;
use serde::{Deserialize, Serialize};

/// The fixed administrator identifier accepted by [`VendingMachine::enter_admin_mode`].
pub const ADMIN_CODE: u64 = 117_345_294_655_382;

/// Value of a coin1 unit.
pub const COIN1_VALUE: u64 = 1;

/// Value of a coin2 unit.
pub const COIN2_VALUE: u64 = 2;

/// Capacity of each coin slot, per denomination, for both the reserve
/// and the customer-facing intake.
pub const COIN_CAPACITY: u32 = 50;

/// Stock capacity for product 1.
pub const PRODUCT1_CAPACITY: u32 = 30;

/// Stock capacity for product 2.
pub const PRODUCT2_CAPACITY: u32 = 40;

const DEFAULT_PRICE1: u64 = 8;
const DEFAULT_PRICE2: u64 = 5;

/// A two-product, two-denomination vending machine.
///
/// The machine starts in [`Mode::Operation`] with empty reserve, empty
/// stock and default prices. Commands are mode-gated: customer commands
/// (coin insertion, dispensing, refunds) require `Operation`, restocking
/// commands require `Administering`, and accessors work in either mode.
///
/// # Example
///
/// ```rust
/// use coinbox::core::{Refusal, VendingMachine, ADMIN_CODE};
///
/// let mut machine = VendingMachine::new();
///
/// // Customer commands refuse while administering, and vice versa.
/// machine.enter_admin_mode(ADMIN_CODE)?;
/// assert_eq!(machine.put_coin1(), Err(Refusal::IllegalOperation));
/// machine.fill_products()?;
/// machine.exit_admin_mode()?;
/// assert_eq!(machine.fill_products(), Err(Refusal::IllegalOperation));
/// # Ok::<(), Refusal>(())
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct VendingMachine {
    mode: Mode,
    coin1_count: u32,
    coin2_count: u32,
    customer_coin1: u32,
    customer_coin2: u32,
    product1_count: u32,
    product2_count: u32,
    price1: u64,
    price2: u64,
    history: ModeHistory,
}

impl Default for VendingMachine {
    fn default() -> Self {
        Self::new()
    }
}

impl VendingMachine {
    /// Create a machine in `Operation` mode with zero coins, zero
    /// products and default prices (8 and 5).
    pub fn new() -> Self {
        Self {
            mode: Mode::Operation,
            coin1_count: 0,
            coin2_count: 0,
            customer_coin1: 0,
            customer_coin2: 0,
            product1_count: 0,
            product2_count: 0,
            price1: DEFAULT_PRICE1,
            price2: DEFAULT_PRICE2,
            history: ModeHistory::new(),
        }
    }

    // --- Mode & authentication ---

    /// Enter administering mode.
    ///
    /// Refuses with [`Refusal::CannotPerform`] while a customer transaction
    /// is in progress (non-zero inserted balance), and with
    /// [`Refusal::InvalidParam`] when `code` is not the administrator
    /// identifier. The mode is unchanged on either refusal.
    pub fn enter_admin_mode(&mut self, code: u64) -> Result<(), Refusal> {
        if self.current_balance() > 0 {
            return Err(Refusal::CannotPerform);
        }
        if code != ADMIN_CODE {
            return Err(Refusal::InvalidParam);
        }
        self.transition_to(Mode::Administering);
        Ok(())
    }

    /// Leave administering mode. Always succeeds.
    ///
    /// Coins provisioned during the admin session vanish from the visible
    /// counters on exit: the reserve is cleared, not merely hidden. Product
    /// stock and prices persist.
    pub fn exit_admin_mode(&mut self) -> Result<(), Refusal> {
        self.coin1_count = 0;
        self.coin2_count = 0;
        self.transition_to(Mode::Operation);
        Ok(())
    }

    /// Current operating mode.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Log of mode transitions since construction.
    pub fn history(&self) -> &ModeHistory {
        &self.history
    }

    // --- Coin reserve management (admin-only) ---

    /// Add `coin1` and `coin2` units to the machine's own reserve.
    ///
    /// Legal only while administering. Each count must lie in
    /// `[1, COIN_CAPACITY]` or the whole call refuses with
    /// [`Refusal::InvalidParam`] and neither slot changes. A fill that
    /// would push a slot past its capacity refuses with
    /// [`Refusal::CannotPerform`].
    pub fn fill_coins(&mut self, coin1: i64, coin2: i64) -> Result<(), Refusal> {
        self.require_mode(Mode::Administering)?;
        let coin1 = checked_fill(coin1)?;
        let coin2 = checked_fill(coin2)?;
        if self.coin1_count + coin1 > COIN_CAPACITY || self.coin2_count + coin2 > COIN_CAPACITY {
            return Err(Refusal::CannotPerform);
        }
        self.coin1_count += coin1;
        self.coin2_count += coin2;
        Ok(())
    }

    /// Total value of the machine's coin reserve, in coin units.
    ///
    /// Reads 0 outside an admin session: exiting admin mode clears the
    /// reserve counters.
    pub fn current_sum(&self) -> u64 {
        u64::from(self.coin1_count) * COIN1_VALUE + u64::from(self.coin2_count) * COIN2_VALUE
    }

    /// Number of coin1 units in the reserve.
    pub fn coins1(&self) -> u32 {
        self.coin1_count
    }

    /// Number of coin2 units in the reserve.
    pub fn coins2(&self) -> u32 {
        self.coin2_count
    }

    // --- Product inventory management (admin-only) ---

    /// Restock both products to full capacity (30 and 40 units).
    ///
    /// Legal only while administering. There is no partial-fill variant.
    pub fn fill_products(&mut self) -> Result<(), Refusal> {
        self.require_mode(Mode::Administering)?;
        self.product1_count = PRODUCT1_CAPACITY;
        self.product2_count = PRODUCT2_CAPACITY;
        Ok(())
    }

    /// Units of product 1 in stock.
    pub fn product1_count(&self) -> u32 {
        self.product1_count
    }

    /// Units of product 2 in stock.
    pub fn product2_count(&self) -> u32 {
        self.product2_count
    }

    /// Set both prices atomically.
    ///
    /// Legal only while administering. Both prices must be strictly
    /// positive; otherwise the whole call refuses with
    /// [`Refusal::InvalidParam`] and neither price changes.
    pub fn set_prices(&mut self, price1: i64, price2: i64) -> Result<(), Refusal> {
        self.require_mode(Mode::Administering)?;
        let price1 = checked_price(price1)?;
        let price2 = checked_price(price2)?;
        self.price1 = price1;
        self.price2 = price2;
        Ok(())
    }

    /// Price of product 1.
    pub fn price1(&self) -> u64 {
        self.price1
    }

    /// Price of product 2.
    pub fn price2(&self) -> u64 {
        self.price2
    }

    // --- Customer coin insertion (operation-only) ---

    /// Insert one coin1 unit toward the current transaction.
    ///
    /// Legal only in operation mode. Refuses with
    /// [`Refusal::CannotPerform`] once the intake holds `COIN_CAPACITY`
    /// units of this denomination.
    pub fn put_coin1(&mut self) -> Result<(), Refusal> {
        self.require_mode(Mode::Operation)?;
        if self.customer_coin1 >= COIN_CAPACITY {
            return Err(Refusal::CannotPerform);
        }
        self.customer_coin1 += 1;
        Ok(())
    }

    /// Insert one coin2 unit toward the current transaction.
    pub fn put_coin2(&mut self) -> Result<(), Refusal> {
        self.require_mode(Mode::Operation)?;
        if self.customer_coin2 >= COIN_CAPACITY {
            return Err(Refusal::CannotPerform);
        }
        self.customer_coin2 += 1;
        Ok(())
    }

    /// Value inserted by the customer so far, in coin units.
    pub fn current_balance(&self) -> u64 {
        u64::from(self.customer_coin1) * COIN1_VALUE + u64::from(self.customer_coin2) * COIN2_VALUE
    }

    // --- Dispensing ---

    /// Dispense `count` units of product 1.
    ///
    /// Legal only in operation mode. Validation order, first failure wins,
    /// with no state change on any failure:
    ///
    /// 1. `count` must be positive and strictly below the stock capacity
    ///    (`PRODUCT1_CAPACITY`), else [`Refusal::InvalidParam`];
    /// 2. `count` must not exceed current stock, else
    ///    [`Refusal::InsufficientProduct`];
    /// 3. the inserted balance must cover `count × price1`, else
    ///    [`Refusal::InsufficientMoney`];
    /// 4. the overpayment must decompose exactly into available coin
    ///    units, else [`Refusal::UnsuitableChange`].
    ///
    /// On success the stock drops by `count`, the change is paid out, the
    /// remaining inserted coins are banked into the reserve and the
    /// customer balance returns to zero.
    pub fn give_product1(&mut self, count: i64) -> Result<(), Refusal> {
        self.product1_count =
            self.dispense(count, PRODUCT1_CAPACITY, self.price1, self.product1_count)?;
        Ok(())
    }

    /// Dispense `count` units of product 2.
    ///
    /// Same contract as [`Self::give_product1`] with capacity
    /// `PRODUCT2_CAPACITY` and price `price2`.
    pub fn give_product2(&mut self, count: i64) -> Result<(), Refusal> {
        self.product2_count =
            self.dispense(count, PRODUCT2_CAPACITY, self.price2, self.product2_count)?;
        Ok(())
    }

    /// Return every coin the customer has inserted. Always succeeds in
    /// operation mode, including with a zero balance.
    ///
    /// Returned coins go back to the customer; the reserve is untouched.
    pub fn return_money(&mut self) -> Result<(), Refusal> {
        self.require_mode(Mode::Operation)?;
        self.customer_coin1 = 0;
        self.customer_coin2 = 0;
        Ok(())
    }

    // --- Internals ---

    fn require_mode(&self, required: Mode) -> Result<(), Refusal> {
        if self.mode == required {
            Ok(())
        } else {
            Err(Refusal::IllegalOperation)
        }
    }

    fn transition_to(&mut self, to: Mode) {
        if self.mode == to {
            return;
        }
        self.history = self.history.record(ModeTransition {
            from: self.mode,
            to,
            timestamp: Utc::now(),
        });
        self.mode = to;
    }

    /// Validate and settle a purchase, returning the new stock count.
    ///
    /// All checks run before any mutation; the coin movement commits only
    /// once a change plan exists.
    fn dispense(
        &mut self,
        count: i64,
        capacity: u32,
        price: u64,
        stock: u32,
    ) -> Result<u32, Refusal> {
        self.require_mode(Mode::Operation)?;
        let count = checked_count(count, capacity)?;
        if count > stock {
            return Err(Refusal::InsufficientProduct);
        }
        // An overflowing cost exceeds any balance the intake can hold.
        let cost = u64::from(count)
            .checked_mul(price)
            .ok_or(Refusal::InsufficientMoney)?;
        let balance = self.current_balance();
        if balance < cost {
            return Err(Refusal::InsufficientMoney);
        }
        let due = balance - cost;
        // Change is assembled from everything the machine holds once the
        // sale commits: the reserve plus the coins inserted for this
        // purchase, which are banked at the same instant.
        let pool_ones = self.coin1_count + self.customer_coin1;
        let pool_twos = self.coin2_count + self.customer_coin2;
        let plan = plan_change(due, pool_ones, pool_twos).ok_or(Refusal::UnsuitableChange)?;
        self.coin1_count = pool_ones - plan.ones;
        self.coin2_count = pool_twos - plan.twos;
        self.customer_coin1 = 0;
        self.customer_coin2 = 0;
        Ok(stock - count)
    }
}

fn checked_fill(count: i64) -> Result<u32, Refusal> {
    match u32::try_from(count) {
        Ok(count) if (1..=COIN_CAPACITY).contains(&count) => Ok(count),
        _ => Err(Refusal::InvalidParam),
    }
}

fn checked_count(count: i64, capacity: u32) -> Result<u32, Refusal> {
    match u32::try_from(count) {
        Ok(count) if count >= 1 && count < capacity => Ok(count),
        _ => Err(Refusal::InvalidParam),
    }
}

fn checked_price(price: i64) -> Result<u64, Refusal> {
    match u64::try_from(price) {
        Ok(price) if price > 0 => Ok(price),
        _ => Err(Refusal::InvalidParam),
    }
}
