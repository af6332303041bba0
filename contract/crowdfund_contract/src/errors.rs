use soroban_sdk::contracterror;

/// Errors returned by [`crate::CrowdfundContract`] entry points.
///
/// Every entry point checks its preconditions before writing to storage, and
/// a returned error aborts the invocation, so a failed call never leaves
/// partial ledger changes behind.
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    /// `initialize` was already called for this deployment.
    AlreadyInitialized = 1,
    /// No campaign has been initialized yet.
    NotInitialized = 2,
    /// Caller is not the beneficiary for a beneficiary-only operation.
    Unauthorized = 3,
    /// Current ledger time is at or past `closure_timestamp`. Also returned by
    /// `close` once closed, so closure can never be reopened.
    CampaignClosed = 4,
    /// `close` has already been used once.
    AlreadyRescheduled = 5,
    /// Redemption attempted before `closure_timestamp`.
    NotYetClosed = 6,
    /// The collected pool has already been redeemed.
    AlreadyRedeemed = 7,
    /// Withdrawal attempted before the donor's eligibility time, or without
    /// a scheduled withdrawal.
    TooEarly = 8,
    /// No frozen funds to pay: either already withdrawn, or the donor scheduled
    /// a withdrawal with nothing donated.
    AlreadyWithdrawn = 9,
    /// Amount must be positive (`target_amount` may be zero).
    InvalidAmount = 10,
    /// Campaign duration must be positive.
    InvalidDuration = 11,
    /// Balance or timestamp arithmetic overflowed.
    Overflow = 12,
}
