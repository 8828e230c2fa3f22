//! Exact-change planning for the two fixed coin denominations.
//!
//! Change must be exact: the owed amount is decomposed into coin1 (value 1)
//! and coin2 (value 2) units drawn from what the machine holds, or the
//! purchase is refused. With only two denominations and bounded counts the
//! search is closed-form: start from the largest feasible number of coin2
//! units and walk down until the remainder fits in coin1.

use serde::{Deserialize, Serialize};

/// An exact decomposition of an owed amount into coin units.
///
/// Produced by [`plan_change`]; `ones * 1 + twos * 2` always equals the
/// amount the plan was computed for.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct ChangePlan {
    /// Number of coin1 (value 1) units to pay out.
    pub ones: u32,
    /// Number of coin2 (value 2) units to pay out.
    pub twos: u32,
}

impl ChangePlan {
    /// Total value of the plan in coin units.
    pub fn value(&self) -> u64 {
        u64::from(self.ones) + 2 * u64::from(self.twos)
    }
}

/// Plan exact change for `due` from `ones` coin1 and `twos` coin2 units.
///
/// This is a pure function. Returns `None` when no combination of the
/// available coins sums exactly to `due`. The plan maximizes coin2 usage:
/// a large coin2 count can leave an odd remainder that coin1 must cover,
/// so the search walks the coin2 count down until the remainder fits.
///
/// # Example
///
/// ```rust
/// use coinbox::core::plan_change;
///
/// // 5 = 2 + 2 + 1
/// let plan = plan_change(5, 3, 2).unwrap();
/// assert_eq!((plan.ones, plan.twos), (1, 2));
///
/// // 5 from coin2 only: the odd unit is unpayable.
/// assert!(plan_change(5, 0, 4).is_none());
/// ```
pub fn plan_change(due: u64, ones: u32, twos: u32) -> Option<ChangePlan> {
    let mut use_twos = (due / 2).min(u64::from(twos));
    loop {
        let rest = due - 2 * use_twos;
        if rest <= u64::from(ones) {
            return Some(ChangePlan {
                // rest <= ones, so it fits in u32
                ones: rest as u32,
                twos: use_twos as u32,
            });
        }
        if use_twos == 0 {
            return None;
        }
        use_twos -= 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_due_needs_no_coins() {
        let plan = plan_change(0, 0, 0).unwrap();
        assert_eq!((plan.ones, plan.twos), (0, 0));
        assert_eq!(plan.value(), 0);
    }

    #[test]
    fn prefers_larger_denomination() {
        let plan = plan_change(6, 10, 10).unwrap();
        assert_eq!((plan.ones, plan.twos), (0, 3));
    }

    #[test]
    fn odd_remainder_falls_back_to_ones() {
        let plan = plan_change(7, 1, 5).unwrap();
        assert_eq!((plan.ones, plan.twos), (1, 3));
        assert_eq!(plan.value(), 7);
    }

    #[test]
    fn walks_down_when_ones_are_short() {
        // 8 with 4 ones and 3 twos: 3 twos leave 2 ones, fine.
        // 8 with 0 ones and 3 twos: 3 twos leave 2 unpayable units.
        let plan = plan_change(8, 4, 3).unwrap();
        assert_eq!(plan.value(), 8);
        assert!(plan_change(8, 0, 3).is_none());
    }

    #[test]
    fn odd_due_without_ones_is_unsatisfiable() {
        assert!(plan_change(5, 0, 4).is_none());
        assert!(plan_change(1, 0, 50).is_none());
    }

    #[test]
    fn insufficient_total_is_unsatisfiable() {
        assert!(plan_change(10, 1, 2).is_none());
    }

    #[test]
    fn exhausts_ones_when_no_twos_available() {
        let plan = plan_change(4, 10, 0).unwrap();
        assert_eq!((plan.ones, plan.twos), (4, 0));
    }

    #[test]
    fn plan_serializes_correctly() {
        let plan = plan_change(3, 1, 1).unwrap();
        let json = serde_json::to_string(&plan).unwrap();
        let deserialized: ChangePlan = serde_json::from_str(&json).unwrap();
        assert_eq!(plan, deserialized);
    }
}
