//! Per-donor pledge accounting.
//!
//! The campaign aggregates and the donor's [`Pledge`] are updated together
//! on in-memory copies; callers persist both only after every check passed.
//! Funds only ever move between three places: a donor's `collected` share
//! (part of `collected_amount`), a donor's `frozen` share (part of
//! `frozen_amount`), and out of the contract.

use soroban_sdk::{log, token, Address, Env};

use crate::errors::Error;
use crate::storage_types::{Campaign, Pledge, PersistentKey, TTL_PERSISTENT};

pub fn read_pledge(env: &Env, donor: &Address) -> Pledge {
    env.storage()
        .persistent()
        .get(&PersistentKey::Pledge(donor.clone()))
        .unwrap_or_default()
}

pub fn write_pledge(env: &Env, donor: &Address, pledge: &Pledge) {
    let key = PersistentKey::Pledge(donor.clone());
    env.storage().persistent().set(&key, pledge);
    env.storage()
        .persistent()
        .extend_ttl(&key, TTL_PERSISTENT, TTL_PERSISTENT);
}

/// Add a donation to the donor's unfrozen share and the redeemable pool.
pub fn credit(campaign: &mut Campaign, pledge: &mut Pledge, amount: i128) -> Result<(), Error> {
    if amount <= 0 {
        return Err(Error::InvalidAmount);
    }
    pledge.collected = pledge.collected.checked_add(amount).ok_or(Error::Overflow)?;
    campaign.collected_amount = campaign
        .collected_amount
        .checked_add(amount)
        .ok_or(Error::Overflow)?;
    Ok(())
}

/// Move the donor's current unfrozen share out of the redeemable pool.
///
/// Returns the amount frozen by this call, which is zero when nothing was
/// donated since the previous request.
pub fn freeze(
    campaign: &mut Campaign,
    pledge: &mut Pledge,
    available_from: u64,
) -> Result<i128, Error> {
    let amount = pledge.collected;
    campaign.collected_amount = campaign
        .collected_amount
        .checked_sub(amount)
        .ok_or(Error::Overflow)?;
    campaign.frozen_amount = campaign
        .frozen_amount
        .checked_add(amount)
        .ok_or(Error::Overflow)?;
    pledge.frozen = pledge.frozen.checked_add(amount).ok_or(Error::Overflow)?;
    pledge.collected = 0;
    pledge.available_from = Some(available_from);
    Ok(amount)
}

/// Release the donor's frozen share for payout.
///
/// A donor without a scheduled withdrawal is treated as eligible never.
pub fn release(
    env: &Env,
    now: u64,
    campaign: &mut Campaign,
    pledge: &mut Pledge,
) -> Result<i128, Error> {
    let available_from = pledge.available_from.unwrap_or(u64::MAX);
    if pledge.available_from.is_none() || now < available_from {
        log!(env, "withdrawal not yet available", now, available_from);
        return Err(Error::TooEarly);
    }
    if pledge.frozen == 0 {
        return Err(Error::AlreadyWithdrawn);
    }

    let amount = pledge.frozen;
    campaign.frozen_amount = campaign
        .frozen_amount
        .checked_sub(amount)
        .ok_or(Error::Overflow)?;
    pledge.frozen = 0;
    Ok(amount)
}

/// Take the whole redeemable pool for the beneficiary. Frozen funds stay.
pub fn redeem(campaign: &mut Campaign) -> Result<i128, Error> {
    if campaign.redeemed {
        return Err(Error::AlreadyRedeemed);
    }
    let amount = campaign.collected_amount;
    campaign.collected_amount = 0;
    campaign.redeemed = true;
    Ok(amount)
}

/// Pull a pledge from the donor into the contract.
pub fn receive(env: &Env, campaign: &Campaign, from: &Address, amount: i128) {
    let token_client = token::Client::new(env, &campaign.token);
    token_client.transfer(from, &env.current_contract_address(), &amount);
}

/// Pay `amount` out of the contract.
pub fn pay(env: &Env, campaign: &Campaign, to: &Address, amount: i128) {
    if amount <= 0 {
        return;
    }
    let token_client = token::Client::new(env, &campaign.token);
    token_client.transfer(&env.current_contract_address(), to, &amount);
}
