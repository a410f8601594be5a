//! Board module - deals and holds the cards of one game
//!
//! A board of `K` pairs holds `2K` cards in row-major order. Every label
//! `1..=K` appears exactly twice for the whole lifetime of the board; only
//! card statuses change while a game is played.

use crate::rng::SimpleRng;
use crate::types::{CardLabel, CardStatus, MAX_PAIR_COUNT};

/// Produce a shuffled deal of `2 * pair_count` labels.
///
/// Labels are `1..=pair_count`, each exactly twice, in a Fisher-Yates
/// permutation driven by `rng`. `pair_count` is clamped to
/// `1..=MAX_PAIR_COUNT`.
pub fn generate(pair_count: u8, rng: &mut SimpleRng) -> Vec<CardLabel> {
    let k = pair_count.clamp(1, MAX_PAIR_COUNT);
    let mut labels: Vec<CardLabel> = (1..=k)
        .filter_map(CardLabel::new)
        .flat_map(|label| [label, label])
        .collect();
    rng.shuffle(&mut labels);
    labels
}

/// A single card on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    pub index: usize,
    pub label: CardLabel,
    pub status: CardStatus,
}

/// The dealt cards of one game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cards: Vec<Card>,
}

impl Board {
    /// Wrap a deal as face-down cards.
    pub fn new(labels: Vec<CardLabel>) -> Self {
        let cards = labels
            .into_iter()
            .enumerate()
            .map(|(index, label)| Card {
                index,
                label,
                status: CardStatus::FaceDown,
            })
            .collect();
        Self { cards }
    }

    /// Deal a fresh shuffled board.
    pub fn deal(pair_count: u8, rng: &mut SimpleRng) -> Self {
        Self::new(generate(pair_count, rng))
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn pair_count(&self) -> usize {
        self.cards.len() / 2
    }

    pub fn get(&self, index: usize) -> Option<&Card> {
        self.cards.get(index)
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Set a card's status. Returns false if out of bounds.
    pub(crate) fn set_status(&mut self, index: usize, status: CardStatus) -> bool {
        match self.cards.get_mut(index) {
            Some(card) => {
                card.status = status;
                true
            }
            None => false,
        }
    }

    pub fn count_status(&self, status: CardStatus) -> usize {
        self.cards.iter().filter(|c| c.status == status).count()
    }

    /// Occurrences of each label, indexed by `label - 1`.
    pub fn label_counts(&self) -> Vec<usize> {
        let mut counts = vec![0usize; self.pair_count()];
        for card in &self.cards {
            if let Some(slot) = counts.get_mut(card.label.get() as usize - 1) {
                *slot += 1;
            }
        }
        counts
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{CARD_COUNT, PAIR_COUNT};

    #[test]
    fn test_generate_has_each_label_twice() {
        for seed in 0..50 {
            let mut rng = SimpleRng::new(seed);
            let board = Board::deal(PAIR_COUNT, &mut rng);

            assert_eq!(board.len(), CARD_COUNT);
            assert_eq!(board.label_counts(), vec![2; PAIR_COUNT as usize]);
        }
    }

    #[test]
    fn test_generate_other_sizes() {
        let mut rng = SimpleRng::new(3);
        for k in [1u8, 2, 5, 12] {
            let labels = generate(k, &mut rng);
            assert_eq!(labels.len(), 2 * k as usize);
            assert_eq!(Board::new(labels).label_counts(), vec![2; k as usize]);
        }
    }

    #[test]
    fn test_generate_is_deterministic_per_seed() {
        let a = generate(PAIR_COUNT, &mut SimpleRng::new(42));
        let b = generate(PAIR_COUNT, &mut SimpleRng::new(42));
        assert_eq!(a, b);
    }

    #[test]
    fn test_new_board_is_face_down_and_indexed() {
        let board = Board::deal(PAIR_COUNT, &mut SimpleRng::new(1));
        for (i, card) in board.cards().iter().enumerate() {
            assert_eq!(card.index, i);
            assert_eq!(card.status, CardStatus::FaceDown);
        }
        assert_eq!(board.count_status(CardStatus::FaceDown), CARD_COUNT);
    }

    #[test]
    fn test_set_status_out_of_bounds() {
        let mut board = Board::deal(PAIR_COUNT, &mut SimpleRng::new(1));
        assert!(!board.set_status(CARD_COUNT, CardStatus::FaceUp));
        assert!(board.set_status(0, CardStatus::FaceUp));
        assert_eq!(board.get(0).map(|c| c.status), Some(CardStatus::FaceUp));
    }
}
