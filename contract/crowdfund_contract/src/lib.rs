#![no_std]

mod campaign;
mod clock;
mod errors;
mod events;
mod ledger;
mod storage_types;


use soroban_sdk::{contract, contractimpl, Address, Env};

pub use errors::Error;
pub use events::*;
pub use storage_types::*;

#[contract]
pub struct CrowdfundContract;

#[contractimpl]
impl CrowdfundContract {
    /// Open a campaign for `beneficiary`, closing `duration` seconds from now.
    ///
    /// `token` is the asset contract pledges are paid in. `target_amount` is
    /// recorded for observers and never gates redemption.
    pub fn initialize(
        env: Env,
        beneficiary: Address,
        token: Address,
        target_amount: i128,
        duration: u64,
    ) -> Result<(), Error> {
        if campaign::has_campaign(&env) {
            return Err(Error::AlreadyInitialized);
        }
        beneficiary.require_auth();

        if duration == 0 {
            return Err(Error::InvalidDuration);
        }
        if target_amount < 0 {
            return Err(Error::InvalidAmount);
        }

        let now = clock::now(&env);
        let closure_timestamp = now.checked_add(duration).ok_or(Error::Overflow)?;

        let state = Campaign {
            beneficiary: beneficiary.clone(),
            token,
            target_amount,
            creation_timestamp: now,
            closure_timestamp,
            rescheduled_closure: false,
            redeemed: false,
            collected_amount: 0,
            frozen_amount: 0,
        };
        campaign::save(&env, &state);

        events::emit_campaign_created(
            &env,
            CampaignCreatedEvent {
                beneficiary,
                target_amount,
                closure_timestamp,
            },
        );

        Ok(())
    }

    /// Pledge `amount` to the campaign while it is not yet closed.
    pub fn donate(env: Env, donor: Address, amount: i128) -> Result<(), Error> {
        donor.require_auth();

        let mut state = campaign::load(&env)?;
        campaign::ensure_accepting(&env, clock::now(&env), &state)?;

        let mut pledge = ledger::read_pledge(&env, &donor);
        ledger::credit(&mut state, &mut pledge, amount)?;

        ledger::receive(&env, &state, &donor, amount);

        ledger::write_pledge(&env, &donor, &pledge);
        campaign::save(&env, &state);

        events::emit_donation_received(&env, DonationReceivedEvent { donor, amount });

        Ok(())
    }

    /// Freeze the donor's unfrozen pledge for a delayed withdrawal.
    ///
    /// Every donor shares the same eligibility time: creation plus
    /// [`WITHDRAWAL_DELAY`], independent of when the request is made.
    pub fn schedule_withdrawal(env: Env, donor: Address) -> Result<u64, Error> {
        donor.require_auth();

        let mut state = campaign::load(&env)?;
        campaign::ensure_accepting(&env, clock::now(&env), &state)?;

        let available_from = state
            .creation_timestamp
            .checked_add(WITHDRAWAL_DELAY)
            .ok_or(Error::Overflow)?;

        let mut pledge = ledger::read_pledge(&env, &donor);
        ledger::freeze(&mut state, &mut pledge, available_from)?;

        ledger::write_pledge(&env, &donor, &pledge);
        campaign::save(&env, &state);

        events::emit_withdrawal_scheduled(
            &env,
            WithdrawalScheduledEvent {
                donor,
                available_from,
            },
        );

        Ok(available_from)
    }

    /// Pay out the donor's frozen share once its eligibility time is reached.
    ///
    /// Available in every phase; only the withdrawal delay gates it.
    pub fn withdraw(env: Env, donor: Address) -> Result<i128, Error> {
        donor.require_auth();

        let mut state = campaign::load(&env)?;
        let mut pledge = ledger::read_pledge(&env, &donor);
        let amount = ledger::release(&env, clock::now(&env), &mut state, &mut pledge)?;

        ledger::write_pledge(&env, &donor, &pledge);
        campaign::save(&env, &state);

        ledger::pay(&env, &state, &donor, amount);

        events::emit_withdrawal_succeeded(&env, WithdrawalSucceededEvent { donor, amount });

        Ok(amount)
    }

    /// Reschedule closure to [`CLOSURE_DELAY`] from now. Beneficiary only, once,
    /// and only while the campaign has not closed.
    pub fn close(env: Env, caller: Address) -> Result<u64, Error> {
        caller.require_auth();

        let mut state = campaign::load(&env)?;
        campaign::ensure_beneficiary(&state, &caller)?;
        if state.rescheduled_closure {
            return Err(Error::AlreadyRescheduled);
        }
        let now = clock::now(&env);
        campaign::ensure_accepting(&env, now, &state)?;

        let closure_timestamp = campaign::rescheduled_closure_timestamp(now, CLOSURE_DELAY)?;
        state.closure_timestamp = closure_timestamp;
        state.rescheduled_closure = true;
        campaign::save(&env, &state);

        events::emit_closure_rescheduled(&env, ClosureRescheduledEvent { closure_timestamp });

        Ok(closure_timestamp)
    }

    /// Pay the redeemable pool to the beneficiary after closure. Once.
    pub fn redeem_funds(env: Env, caller: Address) -> Result<i128, Error> {
        caller.require_auth();

        let mut state = campaign::load(&env)?;
        campaign::ensure_beneficiary(&state, &caller)?;
        if state.redeemed {
            return Err(Error::AlreadyRedeemed);
        }
        campaign::ensure_closed(&env, clock::now(&env), &state)?;

        let amount = ledger::redeem(&mut state)?;
        campaign::save(&env, &state);

        ledger::pay(&env, &state, &caller, amount);

        events::emit_redeem_succeeded(&env, RedeemSucceededEvent { amount });

        Ok(amount)
    }

    pub fn phase(env: Env) -> Result<Phase, Error> {
        let state = campaign::load(&env)?;
        Ok(campaign::phase(clock::now(&env), &state))
    }

    pub fn get_campaign(env: Env) -> Result<Campaign, Error> {
        campaign::load(&env)
    }

    pub fn beneficiary(env: Env) -> Result<Address, Error> {
        Ok(campaign::load(&env)?.beneficiary)
    }

    pub fn target_amount(env: Env) -> Result<i128, Error> {
        Ok(campaign::load(&env)?.target_amount)
    }

    pub fn creation_timestamp(env: Env) -> Result<u64, Error> {
        Ok(campaign::load(&env)?.creation_timestamp)
    }

    pub fn closure_timestamp(env: Env) -> Result<u64, Error> {
        Ok(campaign::load(&env)?.closure_timestamp)
    }

    pub fn rescheduled_closure(env: Env) -> Result<bool, Error> {
        Ok(campaign::load(&env)?.rescheduled_closure)
    }

    pub fn redeemed(env: Env) -> Result<bool, Error> {
        Ok(campaign::load(&env)?.redeemed)
    }

    /// Pool the beneficiary may redeem, excluding frozen funds.
    pub fn collected_amount(env: Env) -> Result<i128, Error> {
        Ok(campaign::load(&env)?.collected_amount)
    }

    /// Total awaiting scheduled donor withdrawals.
    pub fn frozen_amount(env: Env) -> Result<i128, Error> {
        Ok(campaign::load(&env)?.frozen_amount)
    }

    pub fn collected_funds(env: Env, donor: Address) -> i128 {
        ledger::read_pledge(&env, &donor).collected
    }

    pub fn frozen_funds(env: Env, donor: Address) -> i128 {
        ledger::read_pledge(&env, &donor).frozen
    }

    /// Eligibility time of the donor's scheduled withdrawal, if any.
    pub fn scheduled_withdrawals(env: Env, donor: Address) -> Option<u64> {
        ledger::read_pledge(&env, &donor).available_from
    }

    pub fn pledge(env: Env, donor: Address) -> Pledge {
        ledger::read_pledge(&env, &donor)
    }
}
