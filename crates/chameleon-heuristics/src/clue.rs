//! Clue generation for both roles, plus the outsider's final guess.

use rand::Rng;
use rand::seq::IndexedRandom;
use tracing::debug;

use chameleon_content::associations;
use chameleon_protocol::{ClueEntry, Difficulty};

use crate::infer::rank_candidates;
use crate::profile::Profile;

/// Broadly-applicable words the outsider can hide behind when the clue
/// log gives nothing to work with.
pub(crate) const VAGUE_CLUES: &[&str] = &[
    "interesting",
    "common",
    "popular",
    "classic",
    "favorite",
    "traditional",
    "famous",
    "important",
    "essential",
    "typical",
    "original",
    "unique",
    "special",
    "everyday",
    "universal",
    "natural",
    "modern",
    "ancient",
    "basic",
    "standard",
];

/// Generic relation words used when the association table is exhausted
/// for the secret word.
const FALLBACK_CLUES: &[&str] = &[
    "related",
    "connected",
    "associated",
    "linked",
    "similar",
    "typical",
    "common",
    "known",
    "familiar",
    "obvious",
];

/// A clue for a player who knows the secret word: an unused
/// association from the profile's tier, then any unused association,
/// then a generic relation word, then a synthesized token.
pub fn knower_clue<R: Rng + ?Sized>(
    secret: &str,
    clues: &[ClueEntry],
    profile: Profile,
    rng: &mut R,
) -> String {
    let used = used_words(clues);

    if let Some(clue) = association_clue(secret, profile.clue_tier(), &used, rng) {
        return clue;
    }

    if let Some(fallback) = pick_unused(FALLBACK_CLUES, &used, rng) {
        debug!(secret, "association table exhausted, falling back");
        return fallback.to_string();
    }

    synthesize(secret)
}

/// A clue for the outsider, who must bluff. With clues on the log,
/// infer the likely secret and give a subtle (hard-tier) association
/// for it; otherwise hide behind a vague word.
pub fn outsider_clue<R: Rng + ?Sized>(
    topic_words: &[&'static str],
    clues: &[ClueEntry],
    _profile: Profile,
    rng: &mut R,
) -> String {
    let used = used_words(clues);

    if !clues.is_empty() {
        let ranked = rank_candidates(clues, topic_words);
        if let Some(&best) = ranked.first() {
            if let Some(clue) = association_clue(best, Difficulty::Hard, &used, rng) {
                debug!(guess = best, "bluffing off inferred secret");
                return clue;
            }
        }
    }

    if let Some(vague) = pick_unused(VAGUE_CLUES, &used, rng) {
        return vague.to_string();
    }

    // Even the vague pool is spent. Hint at an arbitrary topic word.
    if let Some(&word) = topic_words.choose(rng) {
        if let Some(clue) = association_clue(word, Difficulty::Hard, &used, rng) {
            return clue;
        }
    }
    "related".to_string()
}

/// The outsider's end-of-round guess at the secret word. Hard tier
/// reads the inference ranking straight; lower tiers model imperfect
/// deduction by sometimes taking a runner-up.
pub fn outsider_guess<R: Rng + ?Sized>(
    topic_words: &[&'static str],
    clues: &[ClueEntry],
    profile: Profile,
    rng: &mut R,
) -> String {
    let ranked = rank_candidates(clues, topic_words);

    if !ranked.is_empty() {
        let index = match profile.difficulty {
            Difficulty::Hard => 0,
            Difficulty::Medium => {
                if rng.random_range(0.0..1.0) < 0.7 {
                    0
                } else {
                    1.min(ranked.len() - 1)
                }
            }
            Difficulty::Easy => rng.random_range(0..ranked.len().min(3)),
        };
        return ranked[index].to_string();
    }

    // No signal at all: guess blind.
    topic_words
        .choose(rng)
        .copied()
        .unwrap_or_default()
        .to_string()
}

/// Picks an unused association for `word` from the given tier, widening
/// to all tiers when the preferred one is spent.
fn association_clue<R: Rng + ?Sized>(
    word: &str,
    tier: Difficulty,
    used: &[String],
    rng: &mut R,
) -> Option<String> {
    let set = associations(word)?;

    let preferred: Vec<&str> = set
        .tier(tier)
        .iter()
        .copied()
        .filter(|c| !is_used(c, used))
        .collect();
    if let Some(&clue) = preferred.choose(rng) {
        return Some(clue.to_string());
    }

    let any: Vec<&str> = set.all().filter(|c| !is_used(c, used)).collect();
    any.choose(rng).map(|c| c.to_string())
}

fn used_words(clues: &[ClueEntry]) -> Vec<String> {
    clues.iter().map(|c| c.word.to_lowercase()).collect()
}

fn is_used(candidate: &str, used: &[String]) -> bool {
    let lower = candidate.to_lowercase();
    used.iter().any(|u| *u == lower)
}

fn pick_unused<R: Rng + ?Sized>(
    pool: &[&'static str],
    used: &[String],
    rng: &mut R,
) -> Option<&'static str> {
    let available: Vec<&'static str> = pool
        .iter()
        .copied()
        .filter(|c| !is_used(c, used))
        .collect();
    available.choose(rng).copied()
}

/// Last-resort token when every pool is exhausted.
fn synthesize(secret: &str) -> String {
    let initial = secret
        .chars()
        .next()
        .map(|c| c.to_ascii_uppercase())
        .unwrap_or('X');
    format!("{initial}word")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chameleon_content::topic_by_id;
    use chameleon_protocol::PlayerId;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(11)
    }

    fn clue(player: u64, word: &str) -> ClueEntry {
        ClueEntry {
            player: PlayerId(player),
            word: word.to_string(),
        }
    }

    #[test]
    fn test_knower_clue_comes_from_tier() {
        let profile = Profile::new(Difficulty::Easy, None);
        let word = knower_clue("Pizza", &[], profile, &mut rng());
        let set = associations("Pizza").unwrap();
        assert!(set.tier(Difficulty::Easy).contains(&word.as_str()));
    }

    #[test]
    fn test_knower_clue_skips_used_words() {
        let profile = Profile::new(Difficulty::Easy, None);
        let used: Vec<ClueEntry> = ["Italy", "cheese", "pepperoni", "slice"]
            .iter()
            .enumerate()
            .map(|(i, w)| clue(i as u64, w))
            .collect();
        let mut r = rng();
        for _ in 0..20 {
            let word = knower_clue("Pizza", &used, profile, &mut r);
            assert_eq!(word, "delivery");
        }
    }

    #[test]
    fn test_knower_clue_widens_tiers_when_preferred_spent() {
        let profile = Profile::new(Difficulty::Easy, None);
        let set = associations("Pizza").unwrap();
        let used: Vec<ClueEntry> = set
            .tier(Difficulty::Easy)
            .iter()
            .enumerate()
            .map(|(i, w)| clue(i as u64, w))
            .collect();
        let word = knower_clue("Pizza", &used, profile, &mut rng());
        assert!(set.all().any(|c| c == word));
        assert!(!set.tier(Difficulty::Easy).contains(&word.as_str()));
    }

    #[test]
    fn test_knower_clue_unknown_word_uses_fallback_pool() {
        let profile = Profile::default();
        let word = knower_clue("Zzyzx", &[], profile, &mut rng());
        assert!(FALLBACK_CLUES.contains(&word.as_str()));
    }

    #[test]
    fn test_knower_clue_synthesizes_as_last_resort() {
        let profile = Profile::default();
        let used: Vec<ClueEntry> = FALLBACK_CLUES
            .iter()
            .enumerate()
            .map(|(i, w)| clue(i as u64, w))
            .collect();
        let word = knower_clue("Zzyzx", &used, profile, &mut rng());
        assert_eq!(word, "Zword");
    }

    #[test]
    fn test_outsider_clue_no_clues_is_vague() {
        let topic = topic_by_id("food").unwrap();
        let profile = Profile::default();
        let word = outsider_clue(&topic.words, &[], profile, &mut rng());
        assert!(VAGUE_CLUES.contains(&word.as_str()));
    }

    #[test]
    fn test_outsider_clue_bluffs_off_inference() {
        let topic = topic_by_id("food").unwrap();
        let profile = Profile::default();
        let log = vec![clue(1, "Italy"), clue(2, "cheese")];
        let word = outsider_clue(&topic.words, &log, profile, &mut rng());
        // Inference points at Pizza, so the bluff is one of its
        // associations (tier widening included).
        let set = associations("Pizza").unwrap();
        assert!(set.all().any(|c| c == word));
    }

    #[test]
    fn test_outsider_guess_hard_takes_top_candidate() {
        let topic = topic_by_id("food").unwrap();
        let profile = Profile::new(Difficulty::Hard, None);
        let log = vec![clue(1, "Italy"), clue(2, "cheese"), clue(3, "pepperoni")];
        let word = outsider_guess(&topic.words, &log, profile, &mut rng());
        assert_eq!(word, "Pizza");
    }

    #[test]
    fn test_outsider_guess_no_signal_is_a_topic_word() {
        let topic = topic_by_id("food").unwrap();
        let profile = Profile::new(Difficulty::Easy, None);
        let word = outsider_guess(&topic.words, &[], profile, &mut rng());
        assert!(topic.words.contains(&word.as_str()));
    }
}
