use chameleon_protocol::{Archetype, Difficulty};

/// How a particular autonomous player plays: the room's difficulty
/// tier plus an optional behavioral archetype assigned at seat time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Profile {
    pub difficulty: Difficulty,
    pub archetype: Option<Archetype>,
}

impl Profile {
    pub fn new(difficulty: Difficulty, archetype: Option<Archetype>) -> Self {
        Profile {
            difficulty,
            archetype,
        }
    }

    /// Association tier used when giving a clue. Cautious and
    /// analytical players shade one tier subtler than the room
    /// setting; aggressive players shade one tier plainer.
    pub fn clue_tier(&self) -> Difficulty {
        match self.archetype {
            Some(Archetype::Cautious) | Some(Archetype::Analytical) => subtler(self.difficulty),
            Some(Archetype::Aggressive) => plainer(self.difficulty),
            _ => self.difficulty,
        }
    }

    /// Whether vote scores get random jitter. Easy rooms play
    /// imperfectly across the board; erratic players do it at any
    /// difficulty.
    pub fn jittery(&self) -> bool {
        self.difficulty == Difficulty::Easy || self.archetype == Some(Archetype::Erratic)
    }
}

impl Default for Profile {
    fn default() -> Self {
        Profile {
            difficulty: Difficulty::Medium,
            archetype: None,
        }
    }
}

fn subtler(d: Difficulty) -> Difficulty {
    match d {
        Difficulty::Easy => Difficulty::Medium,
        _ => Difficulty::Hard,
    }
}

fn plainer(d: Difficulty) -> Difficulty {
    match d {
        Difficulty::Hard => Difficulty::Medium,
        _ => Difficulty::Easy,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clue_tier_cautious_shades_subtler() {
        let profile = Profile::new(Difficulty::Medium, Some(Archetype::Cautious));
        assert_eq!(profile.clue_tier(), Difficulty::Hard);
    }

    #[test]
    fn test_clue_tier_aggressive_shades_plainer() {
        let profile = Profile::new(Difficulty::Hard, Some(Archetype::Aggressive));
        assert_eq!(profile.clue_tier(), Difficulty::Medium);
    }

    #[test]
    fn test_clue_tier_no_archetype_uses_room_difficulty() {
        let profile = Profile::new(Difficulty::Easy, None);
        assert_eq!(profile.clue_tier(), Difficulty::Easy);
    }

    #[test]
    fn test_jittery_easy_or_erratic() {
        assert!(Profile::new(Difficulty::Easy, None).jittery());
        assert!(Profile::new(Difficulty::Hard, Some(Archetype::Erratic)).jittery());
        assert!(!Profile::new(Difficulty::Hard, Some(Archetype::Cautious)).jittery());
    }
}
