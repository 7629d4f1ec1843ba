use soroban_sdk::{contracttype, Address, Env};

use election_shared::constants::{
    INSTANCE_BUMP_AMOUNT, INSTANCE_LIFETIME_THRESHOLD, NO_WINNER, RECORD_BUMP_AMOUNT,
    RECORD_LIFETIME_THRESHOLD,
};
use election_shared::{Proposal, Voter, WorkflowStatus};

/// Storage keys
///
/// Singletons live in instance storage; per-voter and per-proposal records
/// live in persistent storage so each has its own TTL.
#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Admin,
    Status,
    ProposalCount,
    WinningProposalId,
    Voter(Address),
    Proposal(u32),
}

fn bump_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

// ── Admin ────────────────────────────────────────────────────────────────────

pub fn set_admin(env: &Env, admin: &Address) {
    env.storage().instance().set(&DataKey::Admin, admin);
    bump_instance(env);
}

/// Written by the constructor, so it is present for every deployed instance.
pub fn get_admin(env: &Env) -> Address {
    env.storage().instance().get(&DataKey::Admin).unwrap()
}

// ── Workflow Status ──────────────────────────────────────────────────────────

pub fn get_status(env: &Env) -> WorkflowStatus {
    env.storage()
        .instance()
        .get(&DataKey::Status)
        .unwrap_or(WorkflowStatus::RegisteringVoters)
}

pub fn set_status(env: &Env, status: WorkflowStatus) {
    env.storage().instance().set(&DataKey::Status, &status);
    bump_instance(env);
}

// ── Voters ───────────────────────────────────────────────────────────────────

pub fn get_voter(env: &Env, voter: &Address) -> Option<Voter> {
    env.storage()
        .persistent()
        .get(&DataKey::Voter(voter.clone()))
}

pub fn save_voter(env: &Env, address: &Address, voter: &Voter) {
    let key = DataKey::Voter(address.clone());
    env.storage().persistent().set(&key, voter);
    env.storage()
        .persistent()
        .extend_ttl(&key, RECORD_LIFETIME_THRESHOLD, RECORD_BUMP_AMOUNT);
}

// ── Proposals ────────────────────────────────────────────────────────────────

pub fn get_proposal_count(env: &Env) -> u32 {
    env.storage()
        .instance()
        .get(&DataKey::ProposalCount)
        .unwrap_or(0u32)
}

pub fn set_proposal_count(env: &Env, count: u32) {
    env.storage().instance().set(&DataKey::ProposalCount, &count);
    bump_instance(env);
}

pub fn get_proposal(env: &Env, id: u32) -> Option<Proposal> {
    env.storage().persistent().get(&DataKey::Proposal(id))
}

pub fn save_proposal(env: &Env, proposal: &Proposal) {
    let key = DataKey::Proposal(proposal.id);
    env.storage().persistent().set(&key, proposal);
    env.storage()
        .persistent()
        .extend_ttl(&key, RECORD_LIFETIME_THRESHOLD, RECORD_BUMP_AMOUNT);
}

// ── Tally Result ─────────────────────────────────────────────────────────────

pub fn get_winning_proposal_id(env: &Env) -> u32 {
    env.storage()
        .instance()
        .get(&DataKey::WinningProposalId)
        .unwrap_or(NO_WINNER)
}

pub fn set_winning_proposal_id(env: &Env, id: u32) {
    env.storage().instance().set(&DataKey::WinningProposalId, &id);
    bump_instance(env);
}
