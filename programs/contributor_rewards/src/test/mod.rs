pub mod test_reward;

use anchor_lang::prelude::*;
use crate::error::ContributorRewardsError;

pub(crate) const T0: i64 = 1_700_000_000;
pub(crate) const DAY: i64 = 24 * 60 * 60;

pub(crate) fn clock_at(slot: u64, unix_timestamp: i64) -> Clock {
    Clock {
        slot,
        unix_timestamp,
        ..Clock::default()
    }
}

pub(crate) fn assert_error<T: std::fmt::Debug>(result: Result<T>, expected: ContributorRewardsError) {
    let expected: anchor_lang::error::Error = expected.into();
    match result {
        Ok(value) => panic!("expected {:?}, got Ok({:?})", expected, value),
        Err(err) => assert_eq!(err, expected),
    }
}
