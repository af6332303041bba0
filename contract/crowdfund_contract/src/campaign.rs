use soroban_sdk::{log, Address, Env};

use crate::errors::Error;
use crate::storage_types::{Campaign, DataKey, Phase, TTL_INSTANCE};

/// Derive the lifecycle phase of `campaign` at `now`.
///
/// The closure threshold is the only thing separating "accepting pledges"
/// from Closed. `ScheduledForClosure` is reported once the beneficiary has
/// rescheduled closure, but gates behave exactly as in `Open`.
pub fn phase(now: u64, campaign: &Campaign) -> Phase {
    if now >= campaign.closure_timestamp {
        Phase::Closed
    } else if campaign.rescheduled_closure {
        Phase::ScheduledForClosure
    } else {
        Phase::Open
    }
}

pub fn is_closed(now: u64, campaign: &Campaign) -> bool {
    phase(now, campaign) == Phase::Closed
}

/// Reject pledge-side mutations once the closure threshold has passed.
pub fn ensure_accepting(env: &Env, now: u64, campaign: &Campaign) -> Result<(), Error> {
    if is_closed(now, campaign) {
        log!(env, "campaign closed", now, campaign.closure_timestamp);
        return Err(Error::CampaignClosed);
    }
    Ok(())
}

pub fn ensure_closed(env: &Env, now: u64, campaign: &Campaign) -> Result<(), Error> {
    if !is_closed(now, campaign) {
        log!(env, "campaign not yet closed", now, campaign.closure_timestamp);
        return Err(Error::NotYetClosed);
    }
    Ok(())
}

pub fn ensure_beneficiary(campaign: &Campaign, caller: &Address) -> Result<(), Error> {
    if *caller != campaign.beneficiary {
        return Err(Error::Unauthorized);
    }
    Ok(())
}

/// Closure threshold produced by a `close()` call at `now`.
pub fn rescheduled_closure_timestamp(now: u64, delay: u64) -> Result<u64, Error> {
    now.checked_add(delay).ok_or(Error::Overflow)
}

pub fn has_campaign(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Campaign)
}

pub fn load(env: &Env) -> Result<Campaign, Error> {
    env.storage()
        .instance()
        .get(&DataKey::Campaign)
        .ok_or(Error::NotInitialized)
}

pub fn save(env: &Env, campaign: &Campaign) {
    env.storage().instance().set(&DataKey::Campaign, campaign);
    extend_instance(env);
}

pub fn extend_instance(env: &Env) {
    env.storage().instance().extend_ttl(TTL_INSTANCE, TTL_INSTANCE);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage_types::CLOSURE_DELAY;
    use soroban_sdk::testutils::Address as _;

    const T0: u64 = 1_700_000_000;

    fn campaign(env: &Env, closure_timestamp: u64, rescheduled_closure: bool) -> Campaign {
        Campaign {
            beneficiary: Address::generate(env),
            token: Address::generate(env),
            target_amount: 1000,
            creation_timestamp: T0,
            closure_timestamp,
            rescheduled_closure,
            redeemed: false,
            collected_amount: 0,
            frozen_amount: 0,
        }
    }

    #[test]
    fn phase_follows_closure_threshold() {
        let env = Env::default();
        let c = campaign(&env, T0 + 100, false);

        assert_eq!(phase(T0, &c), Phase::Open);
        assert_eq!(phase(T0 + 99, &c), Phase::Open);
        assert_eq!(phase(T0 + 100, &c), Phase::Closed);
        assert_eq!(phase(u64::MAX, &c), Phase::Closed);
    }

    #[test]
    fn rescheduled_campaign_is_scheduled_for_closure_until_threshold() {
        let env = Env::default();
        let c = campaign(&env, T0 + 100, true);

        assert_eq!(phase(T0 + 1, &c), Phase::ScheduledForClosure);
        assert!(!is_closed(T0 + 1, &c));
        assert_eq!(phase(T0 + 100, &c), Phase::Closed);
    }

    #[test]
    fn gates_split_on_the_same_threshold() {
        let env = Env::default();
        let c = campaign(&env, T0 + 100, false);

        assert_eq!(ensure_accepting(&env, T0 + 99, &c), Ok(()));
        assert_eq!(ensure_closed(&env, T0 + 99, &c), Err(Error::NotYetClosed));
        assert_eq!(ensure_accepting(&env, T0 + 100, &c), Err(Error::CampaignClosed));
        assert_eq!(ensure_closed(&env, T0 + 100, &c), Ok(()));
    }

    #[test]
    fn only_beneficiary_passes_beneficiary_gate() {
        let env = Env::default();
        let c = campaign(&env, T0 + 100, false);
        let stranger = Address::generate(&env);

        assert_eq!(ensure_beneficiary(&c, &c.beneficiary), Ok(()));
        assert_eq!(ensure_beneficiary(&c, &stranger), Err(Error::Unauthorized));
    }

    #[test]
    fn reschedule_is_measured_from_call_time() {
        assert_eq!(
            rescheduled_closure_timestamp(T0 + 3600, CLOSURE_DELAY),
            Ok(T0 + 3600 + CLOSURE_DELAY)
        );
        assert_eq!(
            rescheduled_closure_timestamp(u64::MAX, CLOSURE_DELAY),
            Err(Error::Overflow)
        );
    }
}
