//! Deterministic target selection

use super::{MersenneTwister, PuzzleId};
use crate::core::Word;
use crate::game::NUM_BOARDS;
use crate::wordlists::WordLists;
use rustc_hash::FxHashSet;

/// Select the targets for puzzle `id`, in board order
///
/// Draws indices from an MT19937 stream seeded with `id`, skipping words that were already
/// drawn, until every board has a target. `WordLists` guarantees enough distinct targets.
///
/// # Examples
/// ```
/// use quadrasexordle::puzzle::generate_targets;
/// use quadrasexordle::wordlists::WordLists;
///
/// let lists = WordLists::embedded().unwrap();
/// assert_eq!(generate_targets(7, &lists), generate_targets(7, &lists));
/// ```
#[must_use]
pub fn generate_targets(id: PuzzleId, lists: &WordLists) -> Vec<Word> {
    let pool = lists.targets();
    let pool_len = pool.len() as u64;
    let mut rng = MersenneTwister::new(id);
    let mut chosen: FxHashSet<usize> = FxHashSet::default();
    let mut targets = Vec::with_capacity(NUM_BOARDS);

    while targets.len() < NUM_BOARDS {
        let idx = (u64::from(rng.next_u32()) % pool_len) as usize;
        if chosen.insert(idx) {
            targets.push(pool[idx].clone());
        }
    }

    targets
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::loader::words_from_slice;
    use crate::wordlists::TARGETS;

    fn lists() -> WordLists {
        WordLists::embedded().unwrap()
    }

    #[test]
    fn generation_is_deterministic() {
        let lists = lists();
        for id in [0, 1, 42, 1_000, u32::MAX] {
            assert_eq!(generate_targets(id, &lists), generate_targets(id, &lists));
        }
    }

    #[test]
    fn generates_one_target_per_board() {
        let targets = generate_targets(123, &lists());
        assert_eq!(targets.len(), NUM_BOARDS);
    }

    #[test]
    fn targets_are_unique() {
        let lists = lists();
        for id in 0..200 {
            let targets = generate_targets(id, &lists);
            let unique: FxHashSet<&Word> = targets.iter().collect();
            assert_eq!(unique.len(), NUM_BOARDS, "duplicate target in puzzle {id}");
        }
    }

    #[test]
    fn targets_come_from_target_list() {
        let lists = lists();
        let pool: FxHashSet<&Word> = lists.targets().iter().collect();
        for target in generate_targets(9, &lists) {
            assert!(pool.contains(&target));
        }
    }

    #[test]
    fn different_ids_give_different_puzzles() {
        let lists = lists();
        assert_ne!(generate_targets(1, &lists), generate_targets(2, &lists));
    }

    #[test]
    fn first_board_follows_rng_stream() {
        let lists = lists();
        let mut rng = MersenneTwister::new(77);
        let first_idx = rng.next_u32() as usize % lists.targets().len();
        assert_eq!(generate_targets(77, &lists)[0], lists.targets()[first_idx]);
    }

    #[test]
    fn exact_size_pool_uses_every_word() {
        let pool = words_from_slice(&TARGETS[..NUM_BOARDS]);
        let lists = WordLists::new(pool.clone(), Vec::new()).unwrap();

        let mut targets = generate_targets(5, &lists);
        let mut expected = pool;
        targets.sort_by(|a, b| a.text().cmp(b.text()));
        expected.sort_by(|a, b| a.text().cmp(b.text()));
        assert_eq!(targets, expected);
    }
}
