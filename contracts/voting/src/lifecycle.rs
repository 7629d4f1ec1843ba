//! Workflow status driver
//!
//! Wraps the pure state machine from `election_shared::workflow` with the
//! stored status: reads it, gates operations on it and commits transitions.

use soroban_sdk::{log, Address, Env, String};

use election_shared::workflow::{ensure_allowed, transition, Operation};
use election_shared::{VotingError, WorkflowStatus};

use crate::{access, events, storage};

/// Open the election with its administrator.
///
/// Runs once, inside the deployment that creates the instance, so there is
/// no window in which the contract exists without an administrator.
pub fn open(env: &Env, admin: &Address) {
    storage::set_admin(env, admin);
    storage::set_status(env, WorkflowStatus::RegisteringVoters);
    storage::set_proposal_count(env, 0);

    events::initialized(env, admin);
    log!(env, "election opened", admin.clone());
}

/// Fail with `InvalidPhase` unless `op` is legal in the stored status.
/// Returns the current status.
pub fn require_status(env: &Env, op: Operation) -> Result<WorkflowStatus, VotingError> {
    let current = storage::get_status(env);
    if let Err(err) = ensure_allowed(op, current) {
        log!(
            env,
            "operation rejected in current status",
            String::from_str(env, op.rejection_message()),
            current
        );
        return Err(err);
    }
    Ok(current)
}

/// Store the status that follows `op` and notify observers.
///
/// Callers are responsible for the role check.
pub fn commit_transition(env: &Env, op: Operation) -> Result<WorkflowStatus, VotingError> {
    let previous = require_status(env, op)?;
    let next = transition(op, previous)?;

    storage::set_status(env, next);
    events::workflow_status_change(env, previous, next);
    log!(env, "workflow status changed", previous, next);

    Ok(next)
}

/// Admin-driven transition.
pub fn advance(env: &Env, caller: &Address, op: Operation) -> Result<WorkflowStatus, VotingError> {
    access::require_admin(env, caller)?;
    commit_transition(env, op)
}
