//! Static game content: topic grids and word associations.
//!
//! All content is compiled in as `&'static str` tables. Two modules:
//!
//! - [`topics`] — the 4x4 word grids players see on the table.
//! - [`associations`] — per-word clue pools at three difficulty tiers,
//!   used by bot players to give and read clues.
//!
//! The data is behavior-free by design; the heuristics crate decides
//! how to pick from these pools.

pub mod associations;
pub mod topics;

pub use associations::{AssociationSet, associations};
pub use topics::{GRID_COLS, GRID_ROWS, TOPICS, Topic, WORDS_PER_TOPIC, topic_by_id};

// =========================================================================
// Tests
// =========================================================================

#[cfg(test)]
mod tests {
    //! Cross-module data integrity checks. The association table and the
    //! topic grids are maintained by hand, so these tests catch a topic
    //! word that lost its clue pool in an edit.

    use super::*;

    #[test]
    fn test_every_topic_word_has_associations() {
        for topic in TOPICS {
            for word in &topic.words {
                assert!(
                    associations(word).is_some(),
                    "topic '{}' word '{}' has no association entry",
                    topic.id,
                    word
                );
            }
        }
    }

    #[test]
    fn test_association_table_has_no_orphan_entries() {
        // Every entry in the association table must belong to some topic.
        for (word, _) in associations::all_entries() {
            let known = TOPICS
                .iter()
                .any(|t| t.words.iter().any(|w| w.eq_ignore_ascii_case(word)));
            assert!(known, "association entry '{}' matches no topic word", word);
        }
    }

    #[test]
    fn test_no_tier_contains_its_own_secret_word() {
        // A clue equal to the secret word would be rejected by the clue
        // rules, leaving bots stuck on a fallback.
        for (word, set) in associations::all_entries() {
            for clue in set.all() {
                assert!(
                    !clue.eq_ignore_ascii_case(word),
                    "'{}' lists itself as a clue",
                    word
                );
            }
        }
    }
}
