use soroban_sdk::{contract, contractimpl, Address, Env, String};

use election_shared::workflow::Operation;
use election_shared::{Proposal, Voter, VotingError, WorkflowStatus};

use crate::{ballot, lifecycle, proposals, storage, voters};

#[contract]
pub struct VotingContract;

#[contractimpl]
impl VotingContract {
    // ── Construction ─────────────────────────────────────────────────────────

    /// Deploy the election with its administrator, in `RegisteringVoters`.
    pub fn __constructor(env: Env, admin: Address) {
        lifecycle::open(&env, &admin);
    }

    /// Get the election administrator.
    pub fn get_admin(env: Env) -> Address {
        storage::get_admin(&env)
    }

    // ── Voter Registry ───────────────────────────────────────────────────────

    /// Register a voter. Admin only, during `RegisteringVoters`.
    pub fn add_voter(env: Env, caller: Address, voter: Address) -> Result<(), VotingError> {
        voters::add_voter(&env, &caller, &voter)
    }

    /// Read a voter record. Registered voters only.
    pub fn get_voter(env: Env, caller: Address, voter: Address) -> Result<Voter, VotingError> {
        voters::get_voter(&env, &caller, &voter)
    }

    // ── Workflow ─────────────────────────────────────────────────────────────

    pub fn start_proposals_registering(env: Env, caller: Address) -> Result<(), VotingError> {
        lifecycle::advance(&env, &caller, Operation::StartProposalsRegistering)?;
        Ok(())
    }

    pub fn end_proposals_registering(env: Env, caller: Address) -> Result<(), VotingError> {
        lifecycle::advance(&env, &caller, Operation::EndProposalsRegistering)?;
        Ok(())
    }

    pub fn start_voting_session(env: Env, caller: Address) -> Result<(), VotingError> {
        lifecycle::advance(&env, &caller, Operation::StartVotingSession)?;
        Ok(())
    }

    pub fn end_voting_session(env: Env, caller: Address) -> Result<(), VotingError> {
        lifecycle::advance(&env, &caller, Operation::EndVotingSession)?;
        Ok(())
    }

    /// Current workflow status.
    pub fn workflow_status(env: Env) -> WorkflowStatus {
        storage::get_status(&env)
    }

    // ── Proposal Registry ────────────────────────────────────────────────────

    /// Submit a proposal and return its id. Registered voters only, during
    /// `ProposalsRegistrationStarted`.
    pub fn add_proposal(
        env: Env,
        caller: Address,
        description: String,
    ) -> Result<u32, VotingError> {
        proposals::add_proposal(&env, &caller, description)
    }

    /// Read a proposal by id. Registered voters only.
    pub fn get_one_proposal(
        env: Env,
        caller: Address,
        proposal_id: u32,
    ) -> Result<Proposal, VotingError> {
        proposals::get_one_proposal(&env, &caller, proposal_id)
    }

    /// Number of proposals submitted so far.
    pub fn proposal_count(env: Env) -> u32 {
        proposals::proposal_count(&env)
    }

    // ── Ballot ───────────────────────────────────────────────────────────────

    /// Vote for a proposal. Registered voters only, once, during
    /// `VotingSessionStarted`.
    pub fn set_vote(env: Env, caller: Address, proposal_id: u32) -> Result<(), VotingError> {
        ballot::set_vote(&env, &caller, proposal_id)
    }

    /// Tally the votes and move to `VotesTallied`. Admin only, during
    /// `VotingSessionEnded`. Returns the winning proposal id.
    pub fn tally_votes(env: Env, caller: Address) -> Result<u32, VotingError> {
        ballot::tally_votes(&env, &caller)
    }

    /// Winning proposal id; 0 until votes are tallied or when nobody voted.
    pub fn winning_proposal_id(env: Env) -> u32 {
        ballot::winning_proposal_id(&env)
    }

    /// The winning proposal.
    pub fn get_winning_proposal(env: Env) -> Result<Proposal, VotingError> {
        ballot::get_winning_proposal(&env)
    }
}
