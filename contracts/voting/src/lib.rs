#![no_std]
//! # Voting Contract
//!
//! Runs a single election: the administrator registers voters, voters submit
//! proposals, voters vote, and the administrator tallies the result. Each
//! step is only legal in its own `WorkflowStatus`; see
//! `election_shared::workflow` for the table.

mod access;
mod ballot;
mod contract;
mod events;
mod lifecycle;
mod proposals;
mod storage;
mod voters;

pub use contract::{VotingContract, VotingContractClient};
pub use election_shared::{Proposal, Voter, VotingError, WorkflowStatus};
