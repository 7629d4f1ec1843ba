//! Error codes for the voting contract
//!
//! Every rejected operation returns one of these codes. A rejection never
//! leaves partial state behind: guards run before any write and the host
//! rolls back the invocation on an error return.

use soroban_sdk::contracterror;

/// Error type returned by every voting contract entry point
///
/// Codes are stable and part of the contract interface:
/// - 1-2: Authorization errors
/// - 3: Workflow errors
/// - 4-7: Registry and ballot errors
/// - 8: Arithmetic errors
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum VotingError {
    // ===== Authorization Errors (1-2) =====
    /// Caller is not the election administrator
    Unauthorized = 1,

    /// Caller is not a registered voter
    NotRegistered = 2,

    // ===== Workflow Errors (3) =====
    /// Operation is not legal in the current workflow status
    InvalidPhase = 3,

    // ===== Registry and Ballot Errors (4-7) =====
    /// Voter was already registered
    AlreadyRegistered = 4,

    /// Voter has already cast a vote
    AlreadyVoted = 5,

    /// Proposal does not exist
    NotFound = 6,

    /// Proposal description is empty
    EmptyInput = 7,

    // ===== Arithmetic Errors (8) =====
    /// Counter arithmetic overflowed
    Overflow = 8,
}

impl VotingError {
    /// Get a human-readable description of the error
    pub fn message(&self) -> &'static str {
        match self {
            VotingError::Unauthorized => "Caller is not the administrator",
            VotingError::NotRegistered => "You're not a voter",
            VotingError::InvalidPhase => "Operation not allowed in the current workflow status",
            VotingError::AlreadyRegistered => "Already registered",
            VotingError::AlreadyVoted => "You have already voted",
            VotingError::NotFound => "Proposal not found",
            VotingError::EmptyInput => "Proposal description cannot be empty",
            VotingError::Overflow => "Arithmetic overflow",
        }
    }

    /// True when the caller lacked the role the operation requires.
    pub fn is_authorization(&self) -> bool {
        matches!(self, VotingError::Unauthorized | VotingError::NotRegistered)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes_are_stable() {
        assert_eq!(VotingError::Unauthorized as u32, 1);
        assert_eq!(VotingError::NotRegistered as u32, 2);
        assert_eq!(VotingError::InvalidPhase as u32, 3);
        assert_eq!(VotingError::AlreadyRegistered as u32, 4);
        assert_eq!(VotingError::AlreadyVoted as u32, 5);
        assert_eq!(VotingError::NotFound as u32, 6);
        assert_eq!(VotingError::EmptyInput as u32, 7);
        assert_eq!(VotingError::Overflow as u32, 8);
    }

    #[test]
    fn test_authorization_grouping() {
        assert!(VotingError::Unauthorized.is_authorization());
        assert!(VotingError::NotRegistered.is_authorization());
        assert!(!VotingError::InvalidPhase.is_authorization());
        assert!(!VotingError::AlreadyVoted.is_authorization());
    }

    #[test]
    fn test_messages() {
        assert_eq!(
            VotingError::AlreadyRegistered.message(),
            "Already registered"
        );
        assert_eq!(VotingError::NotFound.message(), "Proposal not found");
    }
}
