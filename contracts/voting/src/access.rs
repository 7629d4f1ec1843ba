//! Access control for the election
//!
//! Two roles exist: the administrator fixed at deployment, and the
//! voters the administrator registers. Every guard first asks the host to
//! verify the caller's identity (`require_auth`) and then checks the role
//! against contract state. Guards never write.

use soroban_sdk::{log, Address, Env};

use election_shared::{Role, VotingError};

use crate::storage;

/// Check if an address is the election administrator
pub fn is_admin(env: &Env, address: &Address) -> bool {
    storage::get_admin(env) == *address
}

/// Check if an address was registered as a voter
pub fn is_registered_voter(env: &Env, address: &Address) -> bool {
    storage::get_voter(env, address)
        .map(|voter| voter.is_registered)
        .unwrap_or(false)
}

/// Verify the caller's identity, then require `role`
///
/// Fails with `Unauthorized` for a non-admin and `NotRegistered` for a
/// non-voter.
pub fn require_role(env: &Env, caller: &Address, role: Role) -> Result<(), VotingError> {
    caller.require_auth();

    match role {
        Role::Administrator => {
            if !is_admin(env, caller) {
                log!(env, "caller is not the administrator", caller.clone());
                return Err(VotingError::Unauthorized);
            }
        }
        Role::Voter => {
            if !is_registered_voter(env, caller) {
                log!(env, "caller is not a registered voter", caller.clone());
                return Err(VotingError::NotRegistered);
            }
        }
    }

    Ok(())
}

/// Require administrator privileges
pub fn require_admin(env: &Env, caller: &Address) -> Result<(), VotingError> {
    require_role(env, caller, Role::Administrator)
}

/// Require a registered voter
pub fn require_voter(env: &Env, caller: &Address) -> Result<(), VotingError> {
    require_role(env, caller, Role::Voter)
}
