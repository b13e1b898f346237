//! Vote tallying.

use std::collections::BTreeMap;

use chameleon_protocol::{PlayerId, VoteEntry};

/// The outcome of counting votes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tally {
    /// Votes received per target.
    pub counts: BTreeMap<PlayerId, u32>,
    /// The single player with the most votes, if there is one.
    pub accused: Option<PlayerId>,
    /// True when no single player leads: either the top count is
    /// shared, or no votes were cast at all.
    pub tie: bool,
}

/// Counts votes and determines the accused.
///
/// A tie (including zero votes) accuses nobody; the rules treat that as
/// the outsider escaping.
pub fn tally_votes(votes: &[VoteEntry]) -> Tally {
    let mut counts: BTreeMap<PlayerId, u32> = BTreeMap::new();
    for vote in votes {
        *counts.entry(vote.target).or_insert(0) += 1;
    }

    let max = counts.values().copied().max().unwrap_or(0);
    let leaders: Vec<PlayerId> = counts
        .iter()
        .filter(|&(_, &n)| n == max && max > 0)
        .map(|(&p, _)| p)
        .collect();

    match leaders.as_slice() {
        [single] => Tally {
            accused: Some(*single),
            tie: false,
            counts,
        },
        _ => Tally {
            accused: None,
            tie: true,
            counts,
        },
    }
}

// =========================================================================
// Tests
// =========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn vote(voter: u64, target: u64) -> VoteEntry {
        VoteEntry {
            voter: PlayerId(voter),
            target: PlayerId(target),
        }
    }

    #[test]
    fn test_tally_single_leader_is_accused() {
        let tally = tally_votes(&[vote(1, 2), vote(3, 2), vote(4, 1)]);
        assert_eq!(tally.accused, Some(PlayerId(2)));
        assert!(!tally.tie);
        assert_eq!(tally.counts[&PlayerId(2)], 2);
        assert_eq!(tally.counts[&PlayerId(1)], 1);
    }

    #[test]
    fn test_tally_two_way_tie_accuses_nobody() {
        let tally = tally_votes(&[vote(1, 2), vote(3, 2), vote(2, 1), vote(4, 1)]);
        assert!(tally.tie);
        assert_eq!(tally.accused, None);
        assert_eq!(tally.counts[&PlayerId(1)], 2);
        assert_eq!(tally.counts[&PlayerId(2)], 2);
    }

    #[test]
    fn test_tally_three_way_split_is_tie() {
        // P-1 → P-2, P-2 → P-3, P-3 → P-1: everyone has one vote.
        let tally = tally_votes(&[vote(1, 2), vote(2, 3), vote(3, 1)]);
        assert!(tally.tie);
        assert_eq!(tally.accused, None);
        assert!(tally.counts.values().all(|&n| n == 1));
    }

    #[test]
    fn test_tally_no_votes_is_tie() {
        let tally = tally_votes(&[]);
        assert!(tally.tie);
        assert_eq!(tally.accused, None);
        assert!(tally.counts.is_empty());
    }

    #[test]
    fn test_tally_unanimous() {
        let tally = tally_votes(&[vote(1, 4), vote(2, 4), vote(3, 4)]);
        assert_eq!(tally.accused, Some(PlayerId(4)));
        assert_eq!(tally.counts[&PlayerId(4)], 3);
    }
}
