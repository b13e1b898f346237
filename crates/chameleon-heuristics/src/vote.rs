//! Vote selection for both roles.

use rand::Rng;
use rand::seq::IndexedRandom;
use tracing::debug;

use chameleon_content::associations;
use chameleon_protocol::{ClueEntry, PlayerId};

use crate::infer::similar;
use crate::profile::Profile;

/// Words that mark a clue as hedged rather than informed.
const WEAK_WORDS: &[&str] = &[
    "common",
    "typical",
    "popular",
    "famous",
    "important",
    "good",
    "bad",
    "nice",
];

/// A vote from a player who knows the secret word: suspicion lands on
/// whoever's clue fits the secret worst. A clue with no association
/// match at all scores highest, a weak partial match scores lower, and
/// a clue suspiciously close to the secret itself adds a little.
/// Jittery profiles blur the scores. Total tie goes to the first
/// eligible target.
pub fn knower_vote<R: Rng + ?Sized>(
    clues: &[ClueEntry],
    secret: &str,
    eligible: &[PlayerId],
    profile: Profile,
    rng: &mut R,
) -> Option<PlayerId> {
    let first = *eligible.first()?;
    let expected: Vec<String> = associations(secret)
        .map(|set| set.all().map(|c| c.to_lowercase()).collect())
        .unwrap_or_default();

    let mut suspicion: Vec<(PlayerId, f64)> = eligible.iter().map(|&id| (id, 0.0)).collect();

    for entry in clues {
        let Some(slot) = suspicion.iter_mut().find(|(id, _)| *id == entry.player) else {
            continue;
        };
        let clue = entry.word.to_lowercase();

        let mut relevance = 0u32;
        for exp in &expected {
            if *exp == clue {
                relevance = 10;
                break;
            } else if exp.contains(&clue) || clue.contains(exp) {
                relevance = relevance.max(5);
            }
        }

        if relevance == 0 {
            slot.1 += 10.0;
        } else if relevance < 10 {
            slot.1 += 5.0;
        }

        // Parroting the secret word is its own tell.
        if similar(&clue, &secret.to_lowercase()) {
            slot.1 += 3.0;
        }
    }

    if profile.jittery() {
        for (_, score) in &mut suspicion {
            *score += rng.random_range(0.0..5.0);
        }
    }

    let mut target = first;
    let mut highest = f64::NEG_INFINITY;
    for (id, score) in suspicion {
        if score > highest {
            highest = score;
            target = id;
        }
    }
    debug!(target = %target, "suspicion vote");
    Some(target)
}

/// A vote from the outsider: frame whoever gave the weakest clue, so
/// suspicion pools away from them. Vague clues read weakest, short
/// clues next; ties break randomly.
pub fn outsider_vote<R: Rng + ?Sized>(
    clues: &[ClueEntry],
    eligible: &[PlayerId],
    _profile: Profile,
    rng: &mut R,
) -> Option<PlayerId> {
    if eligible.is_empty() {
        return None;
    }

    let strength_of = |id: PlayerId| -> u32 {
        let Some(entry) = clues.iter().find(|c| c.player == id) else {
            return 2;
        };
        let clue = entry.word.to_lowercase();
        let vague = WEAK_WORDS.iter().any(|w| clue.contains(w) || clue == *w);
        if vague {
            1
        } else if clue.chars().count() > 3 {
            3
        } else {
            2
        }
    };

    let weakest = eligible.iter().map(|&id| strength_of(id)).min()?;
    let candidates: Vec<PlayerId> = eligible
        .iter()
        .copied()
        .filter(|&id| strength_of(id) == weakest)
        .collect();
    candidates.choose(rng).copied()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chameleon_protocol::Difficulty;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(3)
    }

    fn clue(player: u64, word: &str) -> ClueEntry {
        ClueEntry {
            player: PlayerId(player),
            word: word.to_string(),
        }
    }

    fn steady() -> Profile {
        Profile::new(Difficulty::Hard, None)
    }

    #[test]
    fn test_knower_vote_targets_unrelated_clue() {
        // Secret is Pizza; P3's clue has no association match.
        let clues = vec![clue(1, "Italy"), clue(2, "cheese"), clue(3, "galaxy")];
        let eligible = vec![PlayerId(1), PlayerId(2), PlayerId(3)];
        let vote = knower_vote(&clues, "Pizza", &eligible, steady(), &mut rng());
        assert_eq!(vote, Some(PlayerId(3)));
    }

    #[test]
    fn test_knower_vote_total_tie_takes_first_eligible() {
        let clues = vec![clue(1, "Italy"), clue(2, "cheese")];
        let eligible = vec![PlayerId(1), PlayerId(2)];
        let vote = knower_vote(&clues, "Pizza", &eligible, steady(), &mut rng());
        assert_eq!(vote, Some(PlayerId(1)));
    }

    #[test]
    fn test_knower_vote_empty_eligible_is_none() {
        let vote = knower_vote(&[], "Pizza", &[], steady(), &mut rng());
        assert_eq!(vote, None);
    }

    #[test]
    fn test_knower_vote_parroting_the_secret_adds_suspicion() {
        // Both clues miss the table, but P2 echoes the secret word.
        let clues = vec![clue(1, "galaxy"), clue(2, "pizzas")];
        let eligible = vec![PlayerId(1), PlayerId(2)];
        let vote = knower_vote(&clues, "Pizza", &eligible, steady(), &mut rng());
        assert_eq!(vote, Some(PlayerId(2)));
    }

    #[test]
    fn test_outsider_vote_frames_the_vague_clue() {
        let clues = vec![clue(1, "Naples"), clue(2, "popular"), clue(3, "cheese")];
        let eligible = vec![PlayerId(1), PlayerId(2), PlayerId(3)];
        let vote = outsider_vote(&clues, &eligible, steady(), &mut rng());
        assert_eq!(vote, Some(PlayerId(2)));
    }

    #[test]
    fn test_outsider_vote_empty_eligible_is_none() {
        let vote = outsider_vote(&[], &[], steady(), &mut rng());
        assert_eq!(vote, None);
    }

    #[test]
    fn test_outsider_vote_tie_stays_within_eligible() {
        let clues = vec![clue(1, "Naples"), clue(2, "cheese")];
        let eligible = vec![PlayerId(1), PlayerId(2)];
        let mut r = rng();
        for _ in 0..10 {
            let vote = outsider_vote(&clues, &eligible, steady(), &mut r);
            assert!(eligible.contains(&vote.unwrap()));
        }
    }
}
