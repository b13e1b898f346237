//! Inferring the secret word from other players' clues.

use chameleon_content::associations;
use chameleon_protocol::ClueEntry;

/// Ranks topic words by how well the logged clues fit each word's
/// association table. An exact association match weighs most, a
/// substring overlap least, and a clue that lexically resembles the
/// word itself counts as a secondary signal. Words with no signal at
/// all are dropped; ties keep grid order.
pub fn rank_candidates(clues: &[ClueEntry], topic_words: &[&'static str]) -> Vec<&'static str> {
    let mut scores: Vec<(&'static str, u32)> = topic_words.iter().map(|&w| (w, 0)).collect();

    for entry in clues {
        let clue = entry.word.to_lowercase();

        for (word, score) in &mut scores {
            if let Some(set) = associations(word) {
                for assoc in set.all() {
                    let assoc = assoc.to_lowercase();
                    if assoc == clue {
                        *score += 10;
                    } else if assoc.contains(&clue) || clue.contains(&assoc) {
                        *score += 3;
                    }
                }
            }
            if similar(&clue, &word.to_lowercase()) {
                *score += 5;
            }
        }
    }

    scores.sort_by(|a, b| b.1.cmp(&a.1));
    scores
        .into_iter()
        .filter(|&(_, score)| score > 0)
        .map(|(word, _)| word)
        .collect()
}

/// Lexical similarity: containment either way, or a shared prefix
/// covering 60% of the shorter word (both at least four chars).
pub(crate) fn similar(a: &str, b: &str) -> bool {
    if a.contains(b) || b.contains(a) {
        return true;
    }
    let min_len = a.chars().count().min(b.chars().count());
    if min_len < 4 {
        return false;
    }
    let prefix_len = min_len * 6 / 10;
    let pa: String = a.chars().take(prefix_len).collect();
    let pb: String = b.chars().take(prefix_len).collect();
    pa == pb
}

#[cfg(test)]
mod tests {
    use super::*;
    use chameleon_content::topic_by_id;
    use chameleon_protocol::PlayerId;

    fn clue(player: u64, word: &str) -> ClueEntry {
        ClueEntry {
            player: PlayerId(player),
            word: word.to_string(),
        }
    }

    #[test]
    fn test_rank_candidates_exact_association_wins() {
        let topic = topic_by_id("food").unwrap();
        // "Italy" and "cheese" are both Pizza associations.
        let clues = vec![clue(1, "Italy"), clue(2, "cheese")];
        let ranked = rank_candidates(&clues, &topic.words);
        assert_eq!(ranked.first(), Some(&"Pizza"));
    }

    #[test]
    fn test_rank_candidates_no_signal_is_empty() {
        let topic = topic_by_id("food").unwrap();
        let clues = vec![clue(1, "xylophone")];
        assert!(rank_candidates(&clues, &topic.words).is_empty());
    }

    #[test]
    fn test_rank_candidates_no_clues_is_empty() {
        let topic = topic_by_id("food").unwrap();
        assert!(rank_candidates(&[], &topic.words).is_empty());
    }

    #[test]
    fn test_similar_containment() {
        assert!(similar("pizzas", "pizza"));
        assert!(similar("pizza", "pizzas"));
    }

    #[test]
    fn test_similar_shared_prefix() {
        // 4-char minimum, 60% prefix.
        assert!(similar("burger", "burgers"));
        assert!(!similar("cat", "car"));
        assert!(!similar("pasta", "pizza"));
    }
}
