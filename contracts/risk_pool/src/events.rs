use soroban_sdk::{contracttype, Env, String};

use crate::types::Enrollment;

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum LedgerEvent {
    Initialized,
    ConfigUpdated,
    MemberRegistered,
    InsurerRegistered,
    GroupCreated,
    RiskRegistered,
    RiskEnrolled,
    ClaimFiled,
    RawWrite,
    RawDelete,
    JournalReplayed,
}

pub fn initialized(env: &Env) {
    env.events().publish((LedgerEvent::Initialized,), ());
}

pub fn config_updated(env: &Env) {
    env.events().publish((LedgerEvent::ConfigUpdated,), ());
}

pub fn member_registered(env: &Env, member_id: &String) {
    env.events()
        .publish((LedgerEvent::MemberRegistered, member_id.clone()), ());
}

pub fn insurer_registered(env: &Env, insurer_id: &String) {
    env.events()
        .publish((LedgerEvent::InsurerRegistered, insurer_id.clone()), ());
}

pub fn group_created(env: &Env, group_id: &String, insurer_id: &String) {
    env.events().publish(
        (LedgerEvent::GroupCreated, group_id.clone()),
        insurer_id.clone(),
    );
}

pub fn risk_registered(env: &Env, risk_id: &String, owner_id: &String) {
    env.events().publish(
        (LedgerEvent::RiskRegistered, risk_id.clone()),
        owner_id.clone(),
    );
}

pub fn risk_enrolled(env: &Env, enrollment: &Enrollment) {
    env.events().publish(
        (
            LedgerEvent::RiskEnrolled,
            enrollment.risk_id.clone(),
            enrollment.group_id.clone(),
        ),
        (
            enrollment.premium,
            enrollment.pool_amount,
            enrollment.insurer_amount,
            enrollment.admin_amount,
        ),
    );
}

pub fn claim_filed(env: &Env, claim_id: &String, risk_id: &String) {
    env.events().publish(
        (LedgerEvent::ClaimFiled, claim_id.clone()),
        risk_id.clone(),
    );
}

pub fn raw_write(env: &Env, key: &String) {
    env.events().publish((LedgerEvent::RawWrite, key.clone()), ());
}

pub fn raw_delete(env: &Env, key: &String) {
    env.events().publish((LedgerEvent::RawDelete, key.clone()), ());
}

pub fn journal_replayed(env: &Env, entries: u32) {
    env.events()
        .publish((LedgerEvent::JournalReplayed,), entries);
}
