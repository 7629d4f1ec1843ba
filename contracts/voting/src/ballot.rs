//! Ballot casting and tallying

use soroban_sdk::{log, Address, Env, Vec};

use election_shared::constants::{FIRST_PROPOSAL_ID, NO_WINNER};
use election_shared::workflow::Operation;
use election_shared::{safe_increment, winning_proposal};
use election_shared::{Proposal, VotingError, WorkflowStatus};

use crate::{access, events, lifecycle, proposals, storage};

/// Record the caller's vote for `proposal_id`.
///
/// All checks run before the voter record and the proposal counter are
/// written, so a rejected vote changes nothing.
pub fn set_vote(env: &Env, caller: &Address, proposal_id: u32) -> Result<(), VotingError> {
    access::require_voter(env, caller)?;
    lifecycle::require_status(env, Operation::SetVote)?;

    let mut voter = storage::get_voter(env, caller).ok_or(VotingError::NotRegistered)?;
    if voter.has_voted {
        log!(env, "voter already voted", caller.clone(), voter.voted_proposal_id);
        return Err(VotingError::AlreadyVoted);
    }

    let mut proposal = proposals::load(env, proposal_id)?;
    proposal.vote_count = safe_increment(proposal.vote_count)?;

    voter.has_voted = true;
    voter.voted_proposal_id = proposal_id;

    storage::save_voter(env, caller, &voter);
    storage::save_proposal(env, &proposal);
    events::voted(env, caller, proposal_id);

    Ok(())
}

/// Compute the winner, cache it and close the election.
pub fn tally_votes(env: &Env, caller: &Address) -> Result<u32, VotingError> {
    access::require_admin(env, caller)?;
    lifecycle::require_status(env, Operation::TallyVotes)?;

    let count = storage::get_proposal_count(env);
    let mut tallies: Vec<(u32, u32)> = Vec::new(env);
    for id in FIRST_PROPOSAL_ID..=count {
        let proposal = storage::get_proposal(env, id).ok_or(VotingError::NotFound)?;
        tallies.push_back((proposal.id, proposal.vote_count));
    }

    let winner = winning_proposal(tallies.iter());
    storage::set_winning_proposal_id(env, winner);
    lifecycle::commit_transition(env, Operation::TallyVotes)?;

    log!(env, "votes tallied", winner, count);

    Ok(winner)
}

/// The cached tally result; `NO_WINNER` until tallied.
pub fn winning_proposal_id(env: &Env) -> u32 {
    storage::get_winning_proposal_id(env)
}

/// The winning proposal itself, once votes are tallied.
pub fn get_winning_proposal(env: &Env) -> Result<Proposal, VotingError> {
    if storage::get_status(env) != WorkflowStatus::VotesTallied {
        return Err(VotingError::InvalidPhase);
    }

    let id = storage::get_winning_proposal_id(env);
    if id == NO_WINNER {
        return Err(VotingError::NotFound);
    }

    proposals::load(env, id)
}
