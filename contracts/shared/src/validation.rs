//! Input validation helpers
//!
//! Each helper returns the `VotingError` the entry point should report, so
//! callers chain them with `?` before touching storage.

use crate::constants::FIRST_PROPOSAL_ID;
use crate::errors::VotingError;
use soroban_sdk::String;

/// Validate that a proposal description is not empty
pub fn validate_description(description: &String) -> Result<(), VotingError> {
    if description.len() == 0 {
        return Err(VotingError::EmptyInput);
    }
    Ok(())
}

/// Validate that `id` names an existing proposal given `count` proposals
///
/// Ids are dense from 1, so existence is a range check. Id 0 is reserved
/// and always fails.
pub fn validate_proposal_id(id: u32, count: u32) -> Result<(), VotingError> {
    if id < FIRST_PROPOSAL_ID || id > count {
        return Err(VotingError::NotFound);
    }
    Ok(())
}

/// Add one to a counter, failing instead of wrapping
pub fn safe_increment(value: u32) -> Result<u32, VotingError> {
    value.checked_add(1).ok_or(VotingError::Overflow)
}

#[cfg(test)]
mod tests {
    use super::*;
    use soroban_sdk::Env;

    #[test]
    fn test_validate_description() {
        let env = Env::default();
        assert_eq!(
            validate_description(&String::from_str(&env, "")),
            Err(VotingError::EmptyInput)
        );
        assert_eq!(validate_description(&String::from_str(&env, "p2")), Ok(()));
    }

    #[test]
    fn test_validate_proposal_id() {
        assert_eq!(validate_proposal_id(0, 3), Err(VotingError::NotFound));
        assert_eq!(validate_proposal_id(1, 3), Ok(()));
        assert_eq!(validate_proposal_id(3, 3), Ok(()));
        assert_eq!(validate_proposal_id(4, 3), Err(VotingError::NotFound));
        assert_eq!(validate_proposal_id(1, 0), Err(VotingError::NotFound));
    }

    #[test]
    fn test_safe_increment() {
        assert_eq!(safe_increment(0), Ok(1));
        assert_eq!(safe_increment(u32::MAX), Err(VotingError::Overflow));
    }
}
