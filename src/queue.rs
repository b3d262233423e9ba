// Copyright 2025 Fernando Borretti
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use rand::Rng;

use crate::types::card::Card;

/// Builds the order in which a test session visits the cards. Each card
/// appears `weight` times, so harder cards come up more often, and the
/// whole sequence is shuffled uniformly. The result holds indices into
/// `cards`.
///
/// Returns `None` when there are no cards; callers check for an empty set
/// before starting a test.
pub fn build_test_queue<R: Rng>(cards: &[Card], rng: &mut R) -> Option<Vec<usize>> {
    if cards.is_empty() {
        return None;
    }
    let mut queue: Vec<usize> = Vec::new();
    for (index, card) in cards.iter().enumerate() {
        let weight = card.difficulty.weight();
        queue.extend(std::iter::repeat_n(index, weight));
    }
    shuffle(&mut queue, rng);
    log::debug!(
        "Built test queue of {} entries from {} cards.",
        queue.len(),
        cards.len()
    );
    Some(queue)
}

/// Fisher–Yates.
fn shuffle<T, R: Rng>(items: &mut [T], rng: &mut R) {
    for i in (1..items.len()).rev() {
        let j = rng.random_range(0..=i);
        items.swap(i, j);
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;
    use crate::types::tier::Tier;

    fn cards(tiers: &[Tier]) -> Vec<Card> {
        tiers
            .iter()
            .enumerate()
            .map(|(i, tier)| {
                let mut card = Card::new(&format!("s{i}"), &format!("t{i}"), "Basics").unwrap();
                card.difficulty = tier.clone();
                card
            })
            .collect()
    }

    #[test]
    fn test_empty_set_has_no_queue() {
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(build_test_queue(&[], &mut rng), None);
    }

    #[test]
    fn test_queue_length() {
        let mut rng = StdRng::seed_from_u64(0);
        let cards = cards(&[Tier::Hard, Tier::Medium, Tier::Easy]);
        let queue = build_test_queue(&cards, &mut rng).unwrap();
        assert_eq!(queue.len(), 12);
    }

    #[test]
    fn test_queue_is_permutation_of_weights() {
        let cards = cards(&[
            Tier::Hard,
            Tier::Medium,
            Tier::Easy,
            Tier::Unrecognized("Trudne".to_string()),
        ]);
        for seed in 0..200 {
            let mut rng = StdRng::seed_from_u64(seed);
            let mut queue = build_test_queue(&cards, &mut rng).unwrap();
            queue.sort();
            let mut expected = vec![0; 8];
            expected.extend([1, 1, 1, 2, 3, 3, 3]);
            assert_eq!(queue, expected);
        }
    }

    #[test]
    fn test_same_seed_same_order() {
        let cards = cards(&[Tier::Hard, Tier::Medium, Tier::Easy]);
        let a = build_test_queue(&cards, &mut StdRng::seed_from_u64(7)).unwrap();
        let b = build_test_queue(&cards, &mut StdRng::seed_from_u64(7)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_shuffle_reaches_every_position() {
        // Over many seeds, the single Easy card must land in every slot.
        let cards = cards(&[Tier::Medium, Tier::Easy]);
        let mut seen = [false; 4];
        for seed in 0..500 {
            let queue = build_test_queue(&cards, &mut StdRng::seed_from_u64(seed)).unwrap();
            let position = queue.iter().position(|&i| i == 1).unwrap();
            seen[position] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }
}
