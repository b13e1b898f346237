//! Round scoring.

use std::collections::BTreeMap;

use chameleon_protocol::{PlayerId, VoteEntry};

/// Points awarded for a finished round.
///
/// Only the deltas for this round are returned; the engine folds them
/// into the running ledger.
///
/// - Outsider caught and fails the guess: every player who voted for
///   the outsider earns 2.
/// - Outsider caught but names the secret word: the outsider earns 1.
/// - Outsider escapes (tie or wrong accusation): the outsider earns 2.
pub fn score_round(
    outsider: PlayerId,
    caught: bool,
    guessed_word: bool,
    votes: &[VoteEntry],
) -> BTreeMap<PlayerId, u32> {
    let mut deltas = BTreeMap::new();
    match (caught, guessed_word) {
        (true, false) => {
            for vote in votes.iter().filter(|v| v.target == outsider) {
                *deltas.entry(vote.voter).or_insert(0) += 2;
            }
        }
        (true, true) => {
            deltas.insert(outsider, 1);
        }
        (false, _) => {
            deltas.insert(outsider, 2);
        }
    }
    deltas
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
    fn test_score_caught_and_wrong_guess_rewards_correct_voters() {
        // P-2 is the outsider; P-1 and P-3 voted for them, P-4 did not.
        let votes = [vote(1, 2), vote(3, 2), vote(4, 1)];
        let deltas = score_round(PlayerId(2), true, false, &votes);

        assert_eq!(deltas.get(&PlayerId(1)), Some(&2));
        assert_eq!(deltas.get(&PlayerId(3)), Some(&2));
        assert_eq!(deltas.get(&PlayerId(4)), None);
        assert_eq!(deltas.get(&PlayerId(2)), None);
    }

    #[test]
    fn test_score_caught_but_correct_guess_rewards_outsider() {
        let votes = [vote(1, 2), vote(3, 2)];
        let deltas = score_round(PlayerId(2), true, true, &votes);

        assert_eq!(deltas.get(&PlayerId(2)), Some(&1));
        assert_eq!(deltas.len(), 1);
    }

    #[test]
    fn test_score_escape_rewards_outsider() {
        let deltas = score_round(PlayerId(2), false, false, &[]);
        assert_eq!(deltas.get(&PlayerId(2)), Some(&2));
        assert_eq!(deltas.len(), 1);
    }
}
