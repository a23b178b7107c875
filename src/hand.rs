//! Hand valuation and hand representations.
//!
//! The free functions here are the evaluator: they take any slice of cards
//! and never look at game state. [`value`] and the predicates built on it
//! always count every card. Only [`displayed_value`] honours
//! [`Card::visible`], for showing a partial dealer total.

extern crate alloc;

use alloc::vec::Vec;

use crate::card::Card;

const fn card_value(rank: u8) -> u8 {
    match rank {
        1 => 11,
        2..=10 => rank,
        11..=13 => 10,
        _ => 0,
    }
}

fn evaluate<'a>(cards: impl Iterator<Item = &'a Card>) -> (u8, bool) {
    let mut value: u8 = 0;
    let mut aces: u8 = 0;

    for card in cards {
        if card.is_ace() {
            aces += 1;
        }
        value = value.saturating_add(card_value(card.rank));
    }

    while value > 21 && aces > 0 {
        value -= 10;
        aces -= 1;
    }

    let is_soft = aces > 0 && value <= 21;
    (value, is_soft)
}

/// Blackjack value of the cards, face-down cards included.
///
/// Aces count 11, then drop to 1 one at a time while the total exceeds 21.
#[must_use]
pub fn value(cards: &[Card]) -> u8 {
    evaluate(cards.iter()).0
}

/// Value of the face-up cards only.
#[must_use]
pub fn displayed_value(cards: &[Card]) -> u8 {
    evaluate(cards.iter().filter(|c| c.visible)).0
}

/// Value of a single card on its own (an ace alone is 11).
#[must_use]
pub const fn single_card_value(card: &Card) -> u8 {
    card_value(card.rank)
}

/// Whether at least one ace is still counted as 11.
#[must_use]
pub fn is_soft(cards: &[Card]) -> bool {
    evaluate(cards.iter()).1
}

/// Exactly two cards totalling 21.
#[must_use]
pub fn is_blackjack(cards: &[Card]) -> bool {
    cards.len() == 2 && value(cards) == 21
}

/// Exactly `size` cards without busting.
#[must_use]
pub fn is_charlie(cards: &[Card], size: usize) -> bool {
    cards.len() == size && value(cards) <= 21
}

/// Over 21.
#[must_use]
pub fn is_bust(cards: &[Card]) -> bool {
    value(cards) > 21
}

/// Hand status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum HandStatus {
    /// Hand is active and can take actions.
    Active,
    /// Player has stood (or doubled without busting).
    Stand,
    /// Hand has busted (over 21).
    Bust,
    /// Hand is a natural blackjack from the initial deal.
    Blackjack,
    /// Hand reached the Charlie card count without busting.
    Charlie,
}

impl HandStatus {
    /// Whether the hand still needs the dealer's final total to settle.
    #[must_use]
    pub const fn awaits_dealer(self) -> bool {
        matches!(self, Self::Active | Self::Stand)
    }
}

/// A player's hand together with the chips riding on it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hand {
    cards: Vec<Card>,
    status: HandStatus,
    stake: usize,
}

impl Hand {
    /// Creates a new empty hand with the given stake.
    #[must_use]
    pub const fn new(stake: usize) -> Self {
        Self {
            cards: Vec::new(),
            status: HandStatus::Active,
            stake,
        }
    }

    /// Creates a new hand from a split with a single card.
    #[must_use]
    pub fn from_split(card: Card, stake: usize) -> Self {
        Self {
            cards: alloc::vec![card],
            status: HandStatus::Active,
            stake,
        }
    }

    /// Adds a card and marks the hand bust if it went over 21.
    ///
    /// Blackjack and Charlie are game rules and are assigned by the caller.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);

        if is_bust(&self.cards) {
            self.status = HandStatus::Bust;
        }
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the current status of the hand.
    #[must_use]
    pub const fn status(&self) -> HandStatus {
        self.status
    }

    /// Sets the hand status.
    pub const fn set_status(&mut self, status: HandStatus) {
        self.status = status;
    }

    /// Returns the chips riding on this hand.
    #[must_use]
    pub const fn stake(&self) -> usize {
        self.stake
    }

    /// Doubles the stake.
    pub const fn double_stake(&mut self) {
        self.stake *= 2;
    }

    /// Calculates the value of the hand.
    #[must_use]
    pub fn value(&self) -> u8 {
        value(&self.cards)
    }

    /// Returns whether the hand is soft (contains an ace counted as 11).
    #[must_use]
    pub fn is_soft(&self) -> bool {
        is_soft(&self.cards)
    }

    /// Two cards whose individual values match (10 and K may be split).
    #[must_use]
    pub fn can_split(&self) -> bool {
        self.cards.len() == 2
            && single_card_value(&self.cards[0]) == single_card_value(&self.cards[1])
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Removes and returns the second card (for splitting).
    pub fn take_split_card(&mut self) -> Option<Card> {
        if self.cards.len() == 2 {
            self.cards.pop()
        } else {
            None
        }
    }
}

/// The dealer's hand. The second card is dealt face down.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DealerHand {
    cards: Vec<Card>,
}

impl DealerHand {
    /// Creates a new empty dealer hand.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Adds a card to the hand.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Returns all cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the up card (first card).
    #[must_use]
    pub fn up_card(&self) -> Option<&Card> {
        self.cards.first()
    }

    /// Returns whether every card is face up.
    #[must_use]
    pub fn is_hole_revealed(&self) -> bool {
        self.cards.iter().all(|c| c.visible)
    }

    /// Turns every face-down card up and returns the cards that flipped.
    pub fn reveal_hole(&mut self) -> Vec<Card> {
        let mut flipped = Vec::new();
        for card in &mut self.cards {
            if !card.visible {
                *card = card.face_up();
                flipped.push(*card);
            }
        }
        flipped
    }

    /// Value of the face-up cards only.
    #[must_use]
    pub fn visible_value(&self) -> u8 {
        displayed_value(&self.cards)
    }

    /// Calculates the full value of the hand.
    #[must_use]
    pub fn value(&self) -> u8 {
        value(&self.cards)
    }

    /// Returns whether the hand is a blackjack.
    #[must_use]
    pub fn is_blackjack(&self) -> bool {
        is_blackjack(&self.cards)
    }

    /// Returns whether the hand is bust.
    #[must_use]
    pub fn is_bust(&self) -> bool {
        is_bust(&self.cards)
    }

    /// Returns the number of cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Clears the hand for a new round.
    pub fn clear(&mut self) {
        self.cards.clear();
    }
}
