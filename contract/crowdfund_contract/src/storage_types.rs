use soroban_sdk::{contracttype, Address};

use crate::clock::weeks;

// Storage keys for instance data
#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    Campaign,
}

// Storage keys for persistent data
#[derive(Clone)]
#[contracttype]
pub enum PersistentKey {
    Pledge(Address),
}

// Lifecycle phase, derived from timestamps and never stored
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[contracttype]
pub enum Phase {
    Open,
    ScheduledForClosure,
    Closed,
}

// Campaign singleton
#[derive(Clone, Debug, PartialEq)]
#[contracttype]
pub struct Campaign {
    pub beneficiary: Address,
    pub token: Address,                // Asset contract moving pledged value
    pub target_amount: i128,           // Informational only
    pub creation_timestamp: u64,
    pub closure_timestamp: u64,
    pub rescheduled_closure: bool,
    pub redeemed: bool,
    pub collected_amount: i128,        // Redeemable by the beneficiary
    pub frozen_amount: i128,           // Escrowed for scheduled donor withdrawals
}

// Per-donor ledger entry
#[derive(Clone, Debug, Default, PartialEq)]
#[contracttype]
pub struct Pledge {
    pub collected: i128,
    pub frozen: i128,
    pub available_from: Option<u64>,
}

// Constants
pub const WITHDRAWAL_DELAY: u64 = weeks(2); // Measured from creation, not from the request
pub const CLOSURE_DELAY: u64 = weeks(4); // Measured from the close() call
pub const TTL_INSTANCE: u32 = 17280 * 30; // 30 days
pub const TTL_PERSISTENT: u32 = 17280 * 90; // 90 days
