//! Proposal registry
//!
//! Proposals are numbered 1, 2, 3, ... in submission order. The stored
//! count doubles as the highest assigned id, which keeps ids dense.

use soroban_sdk::{Address, Env, String};

use election_shared::workflow::Operation;
use election_shared::{safe_increment, validate_description, validate_proposal_id};
use election_shared::{Proposal, VotingError};

use crate::{access, events, lifecycle, storage};

/// Submit a proposal and return its id.
pub fn add_proposal(
    env: &Env,
    caller: &Address,
    description: String,
) -> Result<u32, VotingError> {
    access::require_voter(env, caller)?;
    lifecycle::require_status(env, Operation::AddProposal)?;
    validate_description(&description)?;

    let id = safe_increment(storage::get_proposal_count(env))?;
    let proposal = Proposal {
        id,
        description,
        vote_count: 0,
    };

    storage::save_proposal(env, &proposal);
    storage::set_proposal_count(env, id);
    events::proposal_registered(env, id);

    Ok(id)
}

/// Fetch a proposal on behalf of a registered voter.
pub fn get_one_proposal(env: &Env, caller: &Address, id: u32) -> Result<Proposal, VotingError> {
    access::require_voter(env, caller)?;
    load(env, id)
}

pub fn proposal_count(env: &Env) -> u32 {
    storage::get_proposal_count(env)
}

pub(crate) fn load(env: &Env, id: u32) -> Result<Proposal, VotingError> {
    validate_proposal_id(id, storage::get_proposal_count(env))?;
    storage::get_proposal(env, id).ok_or(VotingError::NotFound)
}
