//! Decision glue for autonomous seats.
//!
//! These read the session the same way a human client reads their
//! projection, pick a move with the heuristics crate, and hand it back
//! for submission through the normal validated entry points.

use rand::Rng;

use chameleon_heuristics::{Profile, knower_clue, knower_vote, outsider_clue, outsider_guess, outsider_vote};
use chameleon_protocol::PlayerId;

use crate::session::GameSession;

fn profile_for(session: &GameSession, player: PlayerId) -> Profile {
    let archetype = session.seat(player).and_then(|s| s.archetype);
    Profile::new(session.config().difficulty, archetype)
}

/// The clue an autonomous player gives on their turn.
pub fn bot_clue<R: Rng + ?Sized>(
    session: &GameSession,
    player: PlayerId,
    rng: &mut R,
) -> String {
    let profile = profile_for(session, player);
    if player == session.outsider() {
        outsider_clue(&session.topic().words, session.clues(), profile, rng)
    } else {
        knower_clue(session.secret(), session.clues(), profile, rng)
    }
}

/// The vote an autonomous player casts. `None` only when nobody else
/// is seated, which a running game never produces.
pub fn bot_vote<R: Rng + ?Sized>(
    session: &GameSession,
    player: PlayerId,
    rng: &mut R,
) -> Option<PlayerId> {
    let eligible: Vec<PlayerId> = session
        .seats()
        .iter()
        .map(|s| s.id)
        .filter(|&id| id != player)
        .collect();
    let profile = profile_for(session, player);
    if player == session.outsider() {
        outsider_vote(session.clues(), &eligible, profile, rng)
    } else {
        knower_vote(session.clues(), session.secret(), &eligible, profile, rng)
    }
}

/// The caught autonomous outsider's guess at the secret word.
pub fn bot_guess<R: Rng + ?Sized>(
    session: &GameSession,
    player: PlayerId,
    rng: &mut R,
) -> String {
    let profile = profile_for(session, player);
    outsider_guess(&session.topic().words, session.clues(), profile, rng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::{RoundSetup, Seat};
    use chameleon_content::topic_by_id;
    use chameleon_protocol::{Archetype, DiceRoll, RoomConfig};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(5)
    }

    fn bot_session() -> GameSession {
        let seats = vec![
            Seat::human(PlayerId(1)),
            Seat::bot(PlayerId(2), Archetype::Analytical),
            Seat::bot(PlayerId(3), Archetype::Erratic),
            Seat::bot(PlayerId(4), Archetype::Cautious),
        ];
        let setup = RoundSetup {
            topic: topic_by_id("food").unwrap(),
            dice: DiceRoll {
                die1: 1,
                die2: 1,
                row: 0,
                col: 0,
                index: 0,
            },
            outsider: PlayerId(3),
            turn_order: vec![PlayerId(1), PlayerId(2), PlayerId(3), PlayerId(4)],
        };
        let mut s = GameSession::with_setup(seats, RoomConfig::default(), setup);
        s.begin_dice_roll().unwrap();
        s.begin_clue_giving().unwrap();
        s
    }

    #[test]
    fn test_bot_clue_is_submittable() {
        let mut s = bot_session();
        s.submit_clue(PlayerId(1), "Italy").unwrap();
        let clue = bot_clue(&s, PlayerId(2), &mut rng());
        s.submit_clue(PlayerId(2), &clue).unwrap();
    }

    #[test]
    fn test_bot_outsider_clue_is_not_the_secret() {
        let mut s = bot_session();
        let mut r = rng();
        s.submit_clue(PlayerId(1), "Italy").unwrap();
        s.submit_clue(PlayerId(2), "cheese").unwrap();
        for _ in 0..20 {
            let clue = bot_clue(&s, PlayerId(3), &mut r);
            assert!(!clue.eq_ignore_ascii_case("Pizza"));
        }
    }

    #[test]
    fn test_bot_vote_never_self() {
        let mut s = bot_session();
        let mut r = rng();
        for (player, clue) in [(1, "Italy"), (2, "cheese"), (3, "popular"), (4, "Naples")] {
            s.submit_clue(PlayerId(player), clue).unwrap();
        }
        s.begin_voting().unwrap();
        for id in [2u64, 3, 4] {
            let vote = bot_vote(&s, PlayerId(id), &mut r).unwrap();
            assert_ne!(vote, PlayerId(id));
        }
    }

    #[test]
    fn test_bot_guess_is_a_topic_word() {
        let s = bot_session();
        let topic = topic_by_id("food").unwrap();
        let guess = bot_guess(&s, PlayerId(3), &mut rng());
        assert!(topic.words.contains(&guess.as_str()));
    }
}
