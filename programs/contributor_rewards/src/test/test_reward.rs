use test_case::test_case;
use crate::constants::MONTHLY_UNLOCK_SUPPLY;
use crate::error::ContributorRewardsError;
use crate::utils::{calculate_award, unlock_supply};
use super::assert_error;

#[test_case(10_000, 400, 1_000, 4_000; "proportional share")]
#[test_case(10_000, 1_000, 1_000, 10_000; "sole contributor takes the pool")]
#[test_case(10, 1, 3, 3; "rounds down")]
#[test_case(10_000, 0, 1_000, 0; "no points no award")]
#[test_case(0, 400, 1_000, 0; "empty pool")]
#[test_case(u64::MAX, u64::MAX, u64::MAX, u64::MAX; "full range without overflow")]
#[test_case(u64::MAX, 1, 2, u64::MAX / 2; "wide intermediate product")]
fn test_calculate_award(vault_balance: u64, points: u64, global_points: u64, expected: u64) {
    assert_eq!(calculate_award(vault_balance, points, global_points).unwrap(), expected);
}

#[test]
fn test_award_never_exceeds_balance() {
    let balance = 9_999_999u64;
    let global = 7_919u64;
    for points in [1, 13, 500, 4_000, global - 1, global] {
        let award = calculate_award(balance, points, global).unwrap();
        assert!(award <= balance, "award {} exceeds balance {}", award, balance);
    }
}

#[test]
fn test_points_above_global_rejected() {
    assert_error(
        calculate_award(10_000, 501, 500),
        ContributorRewardsError::ArithmeticUnderflow,
    );
}

#[test]
fn test_sequential_claims_drain_exactly_the_pool() {
    // Settling claims one after another, the way the program does
    let mut balance = 10u64;
    let mut global = 3u64;
    let mut paid = Vec::new();
    for points in [1u64, 1, 1] {
        let award = calculate_award(balance, points, global).unwrap();
        balance -= award;
        global -= points;
        paid.push(award);
    }

    assert_eq!(paid, vec![3, 3, 4]);
    assert_eq!(balance, 0);
    assert_eq!(global, 0);
}

#[test]
fn test_claim_order_does_not_change_total_paid() {
    let shares = [400u64, 600, 250, 1];
    let pool = 10_000_000_000u64;

    let total_paid = |order: &[u64]| {
        let mut balance = pool;
        let mut global: u64 = order.iter().sum();
        for &points in order {
            let award = calculate_award(balance, points, global).unwrap();
            balance -= award;
            global -= points;
        }
        pool - balance
    };

    let mut reversed = shares;
    reversed.reverse();
    assert_eq!(total_paid(&shares), pool);
    assert_eq!(total_paid(&reversed), pool);
}

#[test_case(0, MONTHLY_UNLOCK_SUPPLY; "no decimals")]
#[test_case(6, MONTHLY_UNLOCK_SUPPLY * 1_000_000; "six decimals")]
#[test_case(9, MONTHLY_UNLOCK_SUPPLY * 1_000_000_000; "nine decimals")]
fn test_unlock_supply(decimals: u8, expected: u64) {
    assert_eq!(unlock_supply(decimals).unwrap(), expected);
}

#[test]
fn test_unlock_supply_overflow() {
    assert_error(unlock_supply(19), ContributorRewardsError::ArithmeticOverflow);
    assert_error(unlock_supply(16), ContributorRewardsError::ArithmeticOverflow);
}
