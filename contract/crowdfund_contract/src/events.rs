use soroban_sdk::{contracttype, Address, Env, Symbol};

#[contracttype]
#[derive(Clone, Debug, PartialEq)]
pub struct CampaignCreatedEvent {
    pub beneficiary: Address,
    pub target_amount: i128,
    pub closure_timestamp: u64,
}

#[contracttype]
#[derive(Clone, Debug, PartialEq)]
pub struct DonationReceivedEvent {
    pub donor: Address,
    pub amount: i128,
}

#[contracttype]
#[derive(Clone, Debug, PartialEq)]
pub struct ClosureRescheduledEvent {
    pub closure_timestamp: u64,
}

#[contracttype]
#[derive(Clone, Debug, PartialEq)]
pub struct WithdrawalScheduledEvent {
    pub donor: Address,
    pub available_from: u64,
}

#[contracttype]
#[derive(Clone, Debug, PartialEq)]
pub struct RedeemSucceededEvent {
    pub amount: i128,
}

#[contracttype]
#[derive(Clone, Debug, PartialEq)]
pub struct WithdrawalSucceededEvent {
    pub donor: Address,
    pub amount: i128,
}

pub fn emit_campaign_created(env: &Env, event: CampaignCreatedEvent) {
    env.events()
        .publish((Symbol::new(env, "campaign_created"),), event);
}

pub fn emit_donation_received(env: &Env, event: DonationReceivedEvent) {
    env.events()
        .publish((Symbol::new(env, "donation_received"),), event);
}

pub fn emit_closure_rescheduled(env: &Env, event: ClosureRescheduledEvent) {
    env.events()
        .publish((Symbol::new(env, "closure_rescheduled"),), event);
}

pub fn emit_withdrawal_scheduled(env: &Env, event: WithdrawalScheduledEvent) {
    env.events()
        .publish((Symbol::new(env, "withdrawal_scheduled"),), event);
}

pub fn emit_redeem_succeeded(env: &Env, event: RedeemSucceededEvent) {
    env.events()
        .publish((Symbol::new(env, "redeem_succeeded"),), event);
}

pub fn emit_withdrawal_succeeded(env: &Env, event: WithdrawalSucceededEvent) {
    env.events()
        .publish((Symbol::new(env, "withdrawal_succeeded"),), event);
}
