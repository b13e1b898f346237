//! Topic definitions: each topic is a 4x4 grid of sixteen words.
//!
//! The grid layout matters: the dice roll maps to `(row, col)`, so word
//! order within a topic is part of the game, not cosmetic.

use chameleon_protocol::TopicView;

pub const GRID_ROWS: usize = 4;
pub const GRID_COLS: usize = 4;
pub const WORDS_PER_TOPIC: usize = GRID_ROWS * GRID_COLS;

/// A topic card: a named 4x4 grid of candidate secret words.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Topic {
    pub id: &'static str,
    pub name: &'static str,
    pub icon: &'static str,
    /// Row-major: `words[row * GRID_COLS + col]`.
    pub words: [&'static str; WORDS_PER_TOPIC],
}

impl Topic {
    /// The word at a flattened grid index.
    pub fn word_at(&self, index: usize) -> Option<&'static str> {
        self.words.get(index).copied()
    }

    /// The public projection of this topic.
    pub fn view(&self) -> TopicView {
        TopicView {
            id: self.id.to_string(),
            name: self.name.to_string(),
            icon: self.icon.to_string(),
            words: self.words.iter().map(|w| w.to_string()).collect(),
        }
    }
}

/// Looks up a topic by its id.
pub fn topic_by_id(id: &str) -> Option<&'static Topic> {
    TOPICS.iter().find(|t| t.id == id)
}

/// All playable topics.
pub static TOPICS: &[Topic] = &[
    Topic {
        id: "food",
        name: "Food",
        icon: "🍕",
        words: [
            "Pizza", "Sushi", "Burger", "Pasta", //
            "Salad", "Steak", "Tacos", "Curry", //
            "Ramen", "Sandwich", "Soup", "Rice", //
            "Bread", "Cheese", "Chicken", "Fish",
        ],
    },
    Topic {
        id: "movies",
        name: "Movie Genres",
        icon: "🎬",
        words: [
            "Horror", "Comedy", "Action", "Romance", //
            "Sci-Fi", "Drama", "Thriller", "Western", //
            "Musical", "Animation", "Documentary", "Mystery", //
            "Fantasy", "Adventure", "Crime", "War",
        ],
    },
    Topic {
        id: "animals",
        name: "Animals",
        icon: "🦁",
        words: [
            "Dog", "Cat", "Lion", "Eagle", //
            "Shark", "Elephant", "Snake", "Dolphin", //
            "Tiger", "Bear", "Wolf", "Rabbit", //
            "Horse", "Monkey", "Penguin", "Owl",
        ],
    },
    Topic {
        id: "sports",
        name: "Sports",
        icon: "⚽",
        words: [
            "Soccer", "Basketball", "Tennis", "Swimming", //
            "Golf", "Baseball", "Hockey", "Boxing", //
            "Rugby", "Cricket", "Volleyball", "Skiing", //
            "Surfing", "Cycling", "Wrestling", "Archery",
        ],
    },
    Topic {
        id: "countries",
        name: "Countries",
        icon: "🌍",
        words: [
            "USA", "Japan", "Brazil", "France", //
            "Egypt", "Australia", "India", "Germany", //
            "Mexico", "Italy", "Canada", "China", //
            "Spain", "Russia", "Kenya", "Greece",
        ],
    },
    Topic {
        id: "professions",
        name: "Professions",
        icon: "👔",
        words: [
            "Doctor", "Teacher", "Chef", "Pilot", //
            "Artist", "Engineer", "Lawyer", "Nurse", //
            "Firefighter", "Police", "Scientist", "Writer", //
            "Musician", "Architect", "Farmer", "Actor",
        ],
    },
    Topic {
        id: "technology",
        name: "Technology",
        icon: "💻",
        words: [
            "Smartphone", "Laptop", "Robot", "Drone", //
            "Internet", "Satellite", "Camera", "Television", //
            "Headphones", "Tablet", "Console", "Printer", //
            "Speaker", "Keyboard", "Monitor", "Router",
        ],
    },
    Topic {
        id: "weather",
        name: "Weather",
        icon: "🌤️",
        words: [
            "Sunny", "Rainy", "Snowy", "Windy", //
            "Cloudy", "Stormy", "Foggy", "Humid", //
            "Freezing", "Hot", "Mild", "Hail", //
            "Thunder", "Rainbow", "Tornado", "Hurricane",
        ],
    },
    Topic {
        id: "emotions",
        name: "Emotions",
        icon: "😊",
        words: [
            "Happy", "Sad", "Angry", "Scared", //
            "Excited", "Nervous", "Calm", "Confused", //
            "Proud", "Jealous", "Surprised", "Bored", //
            "Grateful", "Lonely", "Hopeful", "Anxious",
        ],
    },
    Topic {
        id: "transportation",
        name: "Transportation",
        icon: "🚗",
        words: [
            "Car", "Airplane", "Train", "Bicycle", //
            "Bus", "Motorcycle", "Boat", "Helicopter", //
            "Subway", "Taxi", "Truck", "Scooter", //
            "Ferry", "Rocket", "Ambulance", "Tram",
        ],
    },
    Topic {
        id: "music",
        name: "Music Genres",
        icon: "🎵",
        words: [
            "Rock", "Pop", "Jazz", "Classical", //
            "Hip-Hop", "Country", "Electronic", "Blues", //
            "Reggae", "Metal", "Folk", "Soul", //
            "Punk", "Opera", "Disco", "Gospel",
        ],
    },
    Topic {
        id: "places",
        name: "Places",
        icon: "🏛️",
        words: [
            "Beach", "Mountain", "City", "Forest", //
            "Desert", "Island", "Lake", "Cave", //
            "Castle", "Museum", "Park", "Stadium", //
            "Hospital", "Airport", "Library", "Temple",
        ],
    },
];

// =========================================================================
// Tests
// =========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_topics_are_nonempty_and_unique() {
        assert!(!TOPICS.is_empty());

        let mut ids: Vec<_> = TOPICS.iter().map(|t| t.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), TOPICS.len(), "duplicate topic ids");
    }

    #[test]
    fn test_no_duplicate_words_within_a_topic() {
        for topic in TOPICS {
            let mut words: Vec<_> = topic.words.iter().map(|w| w.to_lowercase()).collect();
            words.sort_unstable();
            words.dedup();
            assert_eq!(
                words.len(),
                WORDS_PER_TOPIC,
                "topic '{}' has duplicate words",
                topic.id
            );
        }
    }

    #[test]
    fn test_word_at_maps_row_major() {
        let food = topic_by_id("food").unwrap();
        assert_eq!(food.word_at(0), Some("Pizza"));
        // Row 1, col 1 → index 5.
        assert_eq!(food.word_at(1 * GRID_COLS + 1), Some("Steak"));
        assert_eq!(food.word_at(WORDS_PER_TOPIC), None);
    }

    #[test]
    fn test_topic_by_id_unknown_returns_none() {
        assert!(topic_by_id("colors").is_none());
    }

    #[test]
    fn test_view_carries_full_grid() {
        let view = topic_by_id("animals").unwrap().view();
        assert_eq!(view.id, "animals");
        assert_eq!(view.words.len(), WORDS_PER_TOPIC);
        assert_eq!(view.words[0], "Dog");
    }
}
