//! Contract events
//!
//! Observers (indexers, UIs, audit logs) follow the election through these
//! events. Publishing never fails and nothing in the contract reads them
//! back.

use soroban_sdk::{symbol_short, Address, Env, Symbol};

use election_shared::WorkflowStatus;

pub const INITIALIZED: Symbol = symbol_short!("init");
pub const VOTER_REGISTERED: Symbol = symbol_short!("voter_reg");
pub const PROPOSAL_REGISTERED: Symbol = symbol_short!("prop_reg");
pub const WORKFLOW_STATUS_CHANGE: Symbol = symbol_short!("wf_status");
pub const VOTED: Symbol = symbol_short!("voted");

pub fn initialized(env: &Env, admin: &Address) {
    env.events().publish((INITIALIZED,), admin.clone());
}

pub fn voter_registered(env: &Env, voter: &Address) {
    env.events().publish((VOTER_REGISTERED,), voter.clone());
}

pub fn proposal_registered(env: &Env, proposal_id: u32) {
    env.events().publish((PROPOSAL_REGISTERED,), proposal_id);
}

pub fn workflow_status_change(env: &Env, previous: WorkflowStatus, new: WorkflowStatus) {
    env.events().publish((WORKFLOW_STATUS_CHANGE,), (previous, new));
}

pub fn voted(env: &Env, voter: &Address, proposal_id: u32) {
    env.events().publish((VOTED,), (voter.clone(), proposal_id));
}
