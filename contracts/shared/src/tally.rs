//! Winner selection

use crate::constants::NO_WINNER;

/// Pick the winning proposal from `(id, vote_count)` pairs.
///
/// Pairs must arrive in ascending id order. The running best starts at
/// `(NO_WINNER, 0)` and only a strictly greater count replaces it, so ties
/// go to the lowest id and an election without votes has no winner.
pub fn winning_proposal<I>(tallies: I) -> u32
where
    I: IntoIterator<Item = (u32, u32)>,
{
    let mut winner = NO_WINNER;
    let mut best = 0u32;

    for (id, vote_count) in tallies {
        if vote_count > best {
            best = vote_count;
            winner = id;
        }
    }

    winner
}
