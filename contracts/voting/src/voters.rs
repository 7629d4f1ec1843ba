//! Voter registry

use soroban_sdk::{log, Address, Env};

use election_shared::workflow::Operation;
use election_shared::{Voter, VotingError};

use crate::{access, events, lifecycle, storage};

/// Register `voter`. Admin only, while voters are being registered.
pub fn add_voter(env: &Env, caller: &Address, voter: &Address) -> Result<(), VotingError> {
    access::require_admin(env, caller)?;
    lifecycle::require_status(env, Operation::AddVoter)?;

    if access::is_registered_voter(env, voter) {
        log!(env, "voter already registered", voter.clone());
        return Err(VotingError::AlreadyRegistered);
    }

    storage::save_voter(env, voter, &Voter::registered());
    events::voter_registered(env, voter);

    Ok(())
}

/// Look up a voter record on behalf of a registered voter.
///
/// Unknown addresses yield a record with `is_registered == false`.
pub fn get_voter(env: &Env, caller: &Address, voter: &Address) -> Result<Voter, VotingError> {
    access::require_voter(env, caller)?;
    Ok(storage::get_voter(env, voter).unwrap_or_else(Voter::unregistered))
}
