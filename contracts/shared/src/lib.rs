#![no_std]
//! # Election Shared Library
//!
//! Types, error codes and pure election logic used by the voting contract.
//! Nothing in this crate touches contract storage, so every rule here can be
//! exercised without deploying a contract.
//!
//! ## Modules
//!
//! - `errors` - `VotingError`, the error codes returned by every entry point
//! - `types` - `Voter`, `Proposal` and `WorkflowStatus`
//! - `workflow` - the phase-gated state machine and the operation table
//! - `tally` - winner selection over proposal vote counts
//! - `constants` - storage TTL windows and reserved ids
//! - `validation` - input checks for proposals and ids
//!
//! ## Usage
//!
//! ```rust,ignore
//! use election_shared::workflow::{transition, Operation};
//! use election_shared::types::WorkflowStatus;
//!
//! let next = transition(Operation::StartProposalsRegistering, WorkflowStatus::RegisteringVoters)?;
//! assert_eq!(next, WorkflowStatus::ProposalsRegistrationStarted);
//! ```

pub mod constants;
pub mod errors;
pub mod tally;
pub mod types;
pub mod validation;
pub mod workflow;

pub use errors::VotingError;
pub use tally::winning_proposal;
pub use types::{Proposal, Voter, WorkflowStatus};
pub use validation::{safe_increment, validate_description, validate_proposal_id};
pub use workflow::{ensure_allowed, transition, Operation, Role};
