//! Phase-gated election state machine
//!
//! Every mutating operation is legal in exactly one `WorkflowStatus` and
//! needs exactly one role. The table lives here as plain data so the whole
//! (status, operation) space can be checked without a contract instance.

use crate::errors::VotingError;
use crate::types::WorkflowStatus;

/// Role a caller must hold for an operation
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Role {
    /// The address the contract was deployed with
    Administrator,
    /// Any address registered through `add_voter`
    Voter,
}

/// Operations gated by the workflow status
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Operation {
    AddVoter,
    AddProposal,
    SetVote,
    StartProposalsRegistering,
    EndProposalsRegistering,
    StartVotingSession,
    EndVotingSession,
    TallyVotes,
}

impl Operation {
    pub const ALL: [Operation; 8] = [
        Operation::AddVoter,
        Operation::AddProposal,
        Operation::SetVote,
        Operation::StartProposalsRegistering,
        Operation::EndProposalsRegistering,
        Operation::StartVotingSession,
        Operation::EndVotingSession,
        Operation::TallyVotes,
    ];

    /// The single status in which this operation is legal.
    pub fn required_status(self) -> WorkflowStatus {
        match self {
            Operation::AddVoter | Operation::StartProposalsRegistering => {
                WorkflowStatus::RegisteringVoters
            }
            Operation::AddProposal | Operation::EndProposalsRegistering => {
                WorkflowStatus::ProposalsRegistrationStarted
            }
            Operation::StartVotingSession => WorkflowStatus::ProposalsRegistrationEnded,
            Operation::SetVote | Operation::EndVotingSession => {
                WorkflowStatus::VotingSessionStarted
            }
            Operation::TallyVotes => WorkflowStatus::VotingSessionEnded,
        }
    }

    pub fn required_role(self) -> Role {
        match self {
            Operation::AddProposal | Operation::SetVote => Role::Voter,
            _ => Role::Administrator,
        }
    }

    /// Status after a successful call, `None` for operations that do not
    /// move the workflow.
    pub fn resulting_status(self) -> Option<WorkflowStatus> {
        match self {
            Operation::AddVoter | Operation::AddProposal | Operation::SetVote => None,
            _ => self.required_status().next(),
        }
    }

    pub fn is_transition(self) -> bool {
        self.resulting_status().is_some()
    }

    /// Message logged when the operation is attempted in the wrong status.
    pub fn rejection_message(self) -> &'static str {
        match self {
            Operation::AddVoter => "Voters registration is not open yet",
            Operation::AddProposal => "Proposals are not allowed yet",
            Operation::SetVote => "Voting session havent started yet",
            Operation::StartProposalsRegistering => "Registering proposals cant be started now",
            Operation::EndProposalsRegistering => "Registering proposals havent started yet",
            Operation::StartVotingSession => "Registering proposals phase is not finished",
            Operation::EndVotingSession => "Voting session havent started yet",
            Operation::TallyVotes => "Current status is not voting session ended",
        }
    }
}

/// Check that `op` may run while the election is in `current`.
pub fn ensure_allowed(op: Operation, current: WorkflowStatus) -> Result<(), VotingError> {
    if op.required_status() == current {
        Ok(())
    } else {
        Err(VotingError::InvalidPhase)
    }
}

/// Apply a transition operation to `current` and return the new status.
///
/// Fails with `InvalidPhase` when `current` is not the operation's
/// precondition or when `op` does not move the workflow at all.
pub fn transition(op: Operation, current: WorkflowStatus) -> Result<WorkflowStatus, VotingError> {
    ensure_allowed(op, current)?;
    op.resulting_status().ok_or(VotingError::InvalidPhase)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_operation_is_legal_in_exactly_one_status() {
        for op in Operation::ALL {
            let allowed = WorkflowStatus::ALL
                .iter()
                .filter(|status| ensure_allowed(op, **status).is_ok())
                .count();
            assert_eq!(allowed, 1, "{:?}", op);
        }
    }

    #[test]
    fn test_status_operation_table() {
        for status in WorkflowStatus::ALL {
            for op in Operation::ALL {
                let result = ensure_allowed(op, status);
                if op.required_status() == status {
                    assert_eq!(result, Ok(()));
                } else {
                    assert_eq!(result, Err(VotingError::InvalidPhase));
                }
            }
        }
    }

    #[test]
    fn test_transitions_advance_exactly_one_step() {
        for op in Operation::ALL
            .iter()
            .copied()
            .filter(|op| op.is_transition())
        {
            for status in WorkflowStatus::ALL {
                match transition(op, status) {
                    Ok(next) => {
                        assert_eq!(status, op.required_status());
                        assert_eq!(Some(next), status.next());
                    }
                    Err(err) => {
                        assert_eq!(err, VotingError::InvalidPhase);
                        assert_ne!(status, op.required_status());
                    }
                }
            }
        }
    }

    #[test]
    fn test_full_lifecycle_in_order() {
        let sequence = [
            Operation::StartProposalsRegistering,
            Operation::EndProposalsRegistering,
            Operation::StartVotingSession,
            Operation::EndVotingSession,
            Operation::TallyVotes,
        ];

        let mut status = WorkflowStatus::RegisteringVoters;
        for op in sequence {
            status = transition(op, status).unwrap();
        }
        assert_eq!(status, WorkflowStatus::VotesTallied);

        for op in Operation::ALL {
            assert_eq!(ensure_allowed(op, status), Err(VotingError::InvalidPhase));
        }
    }

    #[test]
    fn test_no_transition_skips_a_status() {
        assert_eq!(
            transition(
                Operation::StartVotingSession,
                WorkflowStatus::RegisteringVoters
            ),
            Err(VotingError::InvalidPhase)
        );
        assert_eq!(
            transition(Operation::TallyVotes, WorkflowStatus::VotingSessionStarted),
            Err(VotingError::InvalidPhase)
        );
    }

    #[test]
    fn test_non_transition_operations_do_not_move_the_workflow() {
        for op in [
            Operation::AddVoter,
            Operation::AddProposal,
            Operation::SetVote,
        ] {
            assert_eq!(op.resulting_status(), None);
            assert_eq!(
                transition(op, op.required_status()),
                Err(VotingError::InvalidPhase)
            );
        }
    }

    #[test]
    fn test_required_roles() {
        assert_eq!(Operation::AddVoter.required_role(), Role::Administrator);
        assert_eq!(Operation::TallyVotes.required_role(), Role::Administrator);
        assert_eq!(Operation::AddProposal.required_role(), Role::Voter);
        assert_eq!(Operation::SetVote.required_role(), Role::Voter);
    }
}
