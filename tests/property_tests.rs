//! Property-based tests for the vending machine controller.
//!
//! These tests use proptest to verify properties hold across
//! many randomly generated inputs.

use coinbox::core::{plan_change, Mode, Refusal, VendingMachine, ADMIN_CODE, COIN_CAPACITY};
use proptest::prelude::*;

/// Brute-force feasibility: is there any coin2 count that leaves a
/// remainder coin1 can cover one-for-one?
fn change_exists(due: u64, ones: u32, twos: u32) -> bool {
    (0..=u64::from(twos)).any(|k| 2 * k <= due && due - 2 * k <= u64::from(ones))
}

fn insert(machine: &mut VendingMachine, ones: u32, twos: u32) {
    for _ in 0..ones {
        machine.put_coin1().unwrap();
    }
    for _ in 0..twos {
        machine.put_coin2().unwrap();
    }
}

proptest! {
    #[test]
    fn change_plan_sums_exactly(due in 0..200u64, ones in 0..60u32, twos in 0..60u32) {
        if let Some(plan) = plan_change(due, ones, twos) {
            prop_assert_eq!(plan.value(), due);
        }
    }

    #[test]
    fn change_plan_never_exceeds_available(due in 0..200u64, ones in 0..60u32, twos in 0..60u32) {
        if let Some(plan) = plan_change(due, ones, twos) {
            prop_assert!(plan.ones <= ones);
            prop_assert!(plan.twos <= twos);
        }
    }

    #[test]
    fn change_plan_matches_brute_force(due in 0..200u64, ones in 0..60u32, twos in 0..60u32) {
        let found = plan_change(due, ones, twos).is_some();
        prop_assert_eq!(found, change_exists(due, ones, twos));
    }

    #[test]
    fn balance_tracks_inserted_coins(ones in 0..=COIN_CAPACITY, twos in 0..=COIN_CAPACITY) {
        let mut machine = VendingMachine::new();
        insert(&mut machine, ones, twos);
        prop_assert_eq!(machine.current_balance(), u64::from(ones) + 2 * u64::from(twos));
    }

    #[test]
    fn fill_coins_within_range_accumulates(ones in 1..=50i64, twos in 1..=50i64) {
        let mut machine = VendingMachine::new();
        machine.enter_admin_mode(ADMIN_CODE).unwrap();
        prop_assert_eq!(machine.fill_coins(ones, twos), Ok(()));
        prop_assert_eq!(u64::from(machine.coins1()), ones as u64);
        prop_assert_eq!(u64::from(machine.coins2()), twos as u64);
        prop_assert_eq!(machine.current_sum(), ones as u64 + 2 * twos as u64);
    }

    #[test]
    fn fill_coins_out_of_range_is_refused(ones in prop::sample::select(vec![-10i64, 0, 51, 1000]), twos in 1..=50i64) {
        let mut machine = VendingMachine::new();
        machine.enter_admin_mode(ADMIN_CODE).unwrap();
        prop_assert_eq!(machine.fill_coins(ones, twos), Err(Refusal::InvalidParam));
        prop_assert_eq!(machine.coins1(), 0);
        prop_assert_eq!(machine.coins2(), 0);
    }

    #[test]
    fn wrong_code_never_enters_admin_mode(code in any::<u64>()) {
        prop_assume!(code != ADMIN_CODE);
        let mut machine = VendingMachine::new();
        prop_assert_eq!(machine.enter_admin_mode(code), Err(Refusal::InvalidParam));
        prop_assert_eq!(machine.mode(), Mode::Operation);
    }

    #[test]
    fn refused_purchase_preserves_observable_state(
        ones in 0..=20u32,
        twos in 0..=20u32,
        count in 1..10i64,
        price in 1..10i64,
    ) {
        let mut machine = VendingMachine::new();
        machine.enter_admin_mode(ADMIN_CODE).unwrap();
        machine.fill_products().unwrap();
        machine.set_prices(price, price).unwrap();
        machine.exit_admin_mode().unwrap();
        insert(&mut machine, ones, twos);

        let balance = machine.current_balance();
        let stock = machine.product1_count();
        let sum = machine.current_sum();

        match machine.give_product1(count) {
            Ok(()) => {
                prop_assert_eq!(machine.current_balance(), 0);
                prop_assert_eq!(machine.product1_count(), stock - count as u32);
            }
            Err(_) => {
                prop_assert_eq!(machine.current_balance(), balance);
                prop_assert_eq!(machine.product1_count(), stock);
                prop_assert_eq!(machine.current_sum(), sum);
            }
        }
    }

    #[test]
    fn return_money_always_clears_balance(ones in 0..=10u32, twos in 0..=10u32) {
        let mut machine = VendingMachine::new();
        insert(&mut machine, ones, twos);
        prop_assert_eq!(machine.return_money(), Ok(()));
        prop_assert_eq!(machine.current_balance(), 0);
    }

    #[test]
    fn purchase_conserves_coin_value(
        ones in 0..=20u32,
        twos in 0..=20u32,
        count in 1..5i64,
        price in 1..6i64,
    ) {
        let mut machine = VendingMachine::new();
        machine.enter_admin_mode(ADMIN_CODE).unwrap();
        machine.fill_products().unwrap();
        machine.set_prices(price, price).unwrap();
        machine.exit_admin_mode().unwrap();
        insert(&mut machine, ones, twos);

        if machine.give_product1(count).is_ok() {
            // Everything inserted either left as change or was banked:
            // the reserve keeps exactly the purchase cost.
            let cost = count as u64 * price as u64;
            prop_assert_eq!(machine.current_sum(), cost);
        }
    }
}
