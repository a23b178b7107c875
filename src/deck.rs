//! The card shoe.
//!
//! A [`Deck`] is a single 52-card deck that is replaced wholesale once it
//! runs dry. Discards are never merged back in.

extern crate alloc;

use alloc::vec::Vec;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::card::{Card, DECK_SIZE, Suit};
use crate::error::DeckError;

/// An ordered pool of cards. Cards are drawn from the front.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Builds an unshuffled deck, one card per (rank, suit) pair.
    #[must_use]
    pub fn ordered() -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);

        for suit in Suit::ALL {
            for rank in 1..=13 {
                cards.push(Card::new(suit, rank));
            }
        }

        Self { cards }
    }

    /// Builds a fresh deck and applies one uniform Fisher–Yates shuffle.
    pub fn new_shuffled<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut deck = Self::ordered();
        deck.cards.shuffle(rng);
        deck
    }

    /// Creates a deck with an exact card order; the first card is drawn first.
    #[must_use]
    pub const fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    /// Removes and returns the first `n` cards.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::Exhausted`] if fewer than `n` cards remain. The
    /// deck is left untouched in that case.
    pub fn draw(&mut self, n: usize) -> Result<Vec<Card>, DeckError> {
        if n > self.cards.len() {
            return Err(DeckError::Exhausted {
                requested: n,
                remaining: self.cards.len(),
            });
        }

        Ok(self.cards.drain(..n).collect())
    }

    /// Removes and returns the first card.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::Exhausted`] if the deck is empty.
    pub fn draw_one(&mut self) -> Result<Card, DeckError> {
        if self.cards.is_empty() {
            return Err(DeckError::Exhausted {
                requested: 1,
                remaining: 0,
            });
        }

        Ok(self.cards.remove(0))
    }

    /// Returns the remaining cards in draw order.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the number of cards left.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
