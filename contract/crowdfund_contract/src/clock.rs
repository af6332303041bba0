use soroban_sdk::Env;

pub const SECONDS_PER_DAY: u64 = 24 * 60 * 60;

/// Current ledger close time in seconds.
///
/// This is the only clock the contract reads. Tests move it through
/// `soroban_sdk::testutils::Ledger::set_timestamp`.
pub fn now(env: &Env) -> u64 {
    env.ledger().timestamp()
}

/// Convert days to seconds
pub const fn days(days: u64) -> u64 {
    days * SECONDS_PER_DAY
}

/// Convert weeks to seconds
pub const fn weeks(weeks: u64) -> u64 {
    days(weeks * 7)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage_types::{CLOSURE_DELAY, WITHDRAWAL_DELAY};

    #[test]
    fn delays_match_week_horizons() {
        assert_eq!(WITHDRAWAL_DELAY, 1_209_600);
        assert_eq!(CLOSURE_DELAY, 2_419_200);
        assert_eq!(days(10), 864_000);
    }
}
