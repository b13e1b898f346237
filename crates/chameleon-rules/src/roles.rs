//! Role assignment and turn ordering.

use rand::Rng;
use rand::seq::{IndexedRandom, SliceRandom};

use chameleon_protocol::PlayerId;

/// Picks the outsider uniformly from the participants. The engine
/// never starts a round with an empty seat list; the fallback id only
/// exists to keep the signature total.
pub fn assign_outsider<R: Rng + ?Sized>(players: &[PlayerId], rng: &mut R) -> PlayerId {
    players.choose(rng).copied().unwrap_or(PlayerId(0))
}

/// Shuffles the first round's turn order.
pub fn first_turn_order<R: Rng + ?Sized>(players: &[PlayerId], rng: &mut R) -> Vec<PlayerId> {
    let mut order: Vec<PlayerId> = players.to_vec();
    order.shuffle(rng);
    order
}

/// Rotates the turn order for a follow-up round.
///
/// The player after last round's opener goes first, preserving seat
/// order. Works on the current participant list, so players who left
/// between rounds simply drop out of the rotation; if last round's
/// opener is gone, the rotation restarts from the first seat.
pub fn rotated_turn_order(prev: &[PlayerId], players: &[PlayerId]) -> Vec<PlayerId> {
    if players.is_empty() {
        return Vec::new();
    }
    let start = prev
        .first()
        .and_then(|opener| players.iter().position(|p| p == opener))
        .map(|i| (i + 1) % players.len())
        .unwrap_or(0);

    let mut order = Vec::with_capacity(players.len());
    for i in 0..players.len() {
        order.push(players[(start + i) % players.len()]);
    }
    order
}

// =========================================================================
// Tests
// =========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn players(ids: &[u64]) -> Vec<PlayerId> {
        ids.iter().map(|&i| PlayerId(i)).collect()
    }

    #[test]
    fn test_assign_outsider_is_a_participant() {
        let mut rng = StdRng::seed_from_u64(3);
        let ps = players(&[1, 2, 3, 4]);
        for _ in 0..50 {
            let outsider = assign_outsider(&ps, &mut rng);
            assert!(ps.contains(&outsider));
        }
    }

    #[test]
    fn test_first_turn_order_is_permutation() {
        let mut rng = StdRng::seed_from_u64(9);
        let ps = players(&[1, 2, 3, 4, 5]);
        let order = first_turn_order(&ps, &mut rng);

        let mut sorted = order.clone();
        sorted.sort();
        assert_eq!(sorted, ps);
    }

    #[test]
    fn test_rotated_turn_order_advances_opener_by_one() {
        let ps = players(&[1, 2, 3, 4]);
        let prev = players(&[2, 3, 4, 1]);

        let next = rotated_turn_order(&prev, &ps);
        // Previous opener was P-2 (seat index 1), so P-3 opens now.
        assert_eq!(next, players(&[3, 4, 1, 2]));
    }

    #[test]
    fn test_rotated_turn_order_missing_opener_restarts() {
        let ps = players(&[1, 3, 4]);
        let prev = players(&[2, 3, 4, 1]);

        // P-2 left the room; rotation restarts from the first seat.
        let next = rotated_turn_order(&prev, &ps);
        assert_eq!(next, players(&[1, 3, 4]));
    }

    #[test]
    fn test_rotated_turn_order_wraps_around() {
        let ps = players(&[1, 2, 3]);
        let prev = players(&[3, 1, 2]);

        let next = rotated_turn_order(&prev, &ps);
        assert_eq!(next, players(&[1, 2, 3]));
    }

    #[test]
    fn test_rotated_turn_order_empty_players() {
        let prev = players(&[1, 2]);
        assert!(rotated_turn_order(&prev, &[]).is_empty());
    }
}
