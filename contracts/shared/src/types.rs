//! Election data types
//!
//! These are stored in contract storage and returned to callers, so all of
//! them are `#[contracttype]`.

use soroban_sdk::{contracttype, String};

/// Lifecycle phase of the election
///
/// # Transitions
/// - `RegisteringVoters` → `ProposalsRegistrationStarted`
/// - `ProposalsRegistrationStarted` → `ProposalsRegistrationEnded`
/// - `ProposalsRegistrationEnded` → `VotingSessionStarted`
/// - `VotingSessionStarted` → `VotingSessionEnded`
/// - `VotingSessionEnded` → `VotesTallied`
/// - `VotesTallied` → Terminal (no further transitions)
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq, PartialOrd, Ord)]
pub enum WorkflowStatus {
    /// Administrator is registering voters
    RegisteringVoters = 0,

    /// Registered voters may submit proposals
    ProposalsRegistrationStarted = 1,

    /// Proposal submission is closed
    ProposalsRegistrationEnded = 2,

    /// Registered voters may vote
    VotingSessionStarted = 3,

    /// Voting is closed, waiting for the tally
    VotingSessionEnded = 4,

    /// Winner computed
    VotesTallied = 5,
}

impl WorkflowStatus {
    /// Every status in lifecycle order.
    pub const ALL: [WorkflowStatus; 6] = [
        WorkflowStatus::RegisteringVoters,
        WorkflowStatus::ProposalsRegistrationStarted,
        WorkflowStatus::ProposalsRegistrationEnded,
        WorkflowStatus::VotingSessionStarted,
        WorkflowStatus::VotingSessionEnded,
        WorkflowStatus::VotesTallied,
    ];

    /// The only status reachable from this one, if any.
    pub fn next(self) -> Option<WorkflowStatus> {
        match self {
            WorkflowStatus::RegisteringVoters => {
                Some(WorkflowStatus::ProposalsRegistrationStarted)
            }
            WorkflowStatus::ProposalsRegistrationStarted => {
                Some(WorkflowStatus::ProposalsRegistrationEnded)
            }
            WorkflowStatus::ProposalsRegistrationEnded => {
                Some(WorkflowStatus::VotingSessionStarted)
            }
            WorkflowStatus::VotingSessionStarted => Some(WorkflowStatus::VotingSessionEnded),
            WorkflowStatus::VotingSessionEnded => Some(WorkflowStatus::VotesTallied),
            WorkflowStatus::VotesTallied => None,
        }
    }

    pub fn is_terminal(self) -> bool {
        self.next().is_none()
    }
}

/// Per-voter record, keyed by the voter's address
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Voter {
    /// Set once by the administrator, never cleared
    pub is_registered: bool,

    /// Flips to true on the voter's only vote
    pub has_voted: bool,

    /// Proposal the voter chose; 0 until `has_voted`
    pub voted_proposal_id: u32,
}

impl Voter {
    /// Record stored for a freshly registered voter.
    pub fn registered() -> Self {
        Voter {
            is_registered: true,
            has_voted: false,
            voted_proposal_id: 0,
        }
    }

    /// Record returned for an address that was never registered.
    pub fn unregistered() -> Self {
        Voter {
            is_registered: false,
            has_voted: false,
            voted_proposal_id: 0,
        }
    }
}

/// A proposal submitted during `ProposalsRegistrationStarted`
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Proposal {
    /// 1-based sequential identifier
    pub id: u32,

    /// Free text, never empty
    pub description: String,

    /// Votes received so far
    pub vote_count: u32,
}
