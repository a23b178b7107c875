//! Round result types.

extern crate alloc;

use alloc::vec::Vec;

/// Outcome of a single settled hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum HandOutcome {
    /// Player wins (dealer busts or player has higher value).
    Win,
    /// Player has the lower value.
    Lose,
    /// Push (tie); the stake comes back.
    Push,
    /// Natural blackjack.
    Blackjack,
    /// Player went over 21.
    Bust,
    /// Five cards without busting.
    Charlie,
}

impl HandOutcome {
    /// Win, blackjack and Charlie.
    #[must_use]
    pub const fn is_win(self) -> bool {
        matches!(self, Self::Win | Self::Blackjack | Self::Charlie)
    }

    /// Lose and bust.
    #[must_use]
    pub const fn is_loss(self) -> bool {
        matches!(self, Self::Lose | Self::Bust)
    }
}

/// Which of the player's hands a result or action refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum HandSlot {
    /// The hand dealt at the start of the round.
    Main,
    /// The hand created by a split.
    Split,
}

/// Result for a single hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct HandResult {
    /// The hand this result is for.
    pub slot: HandSlot,
    /// The outcome of the hand.
    pub outcome: HandOutcome,
    /// The chips riding on the hand.
    pub stake: usize,
    /// Chips credited back to the balance.
    pub payout: usize,
    /// The player's hand value.
    pub player_value: u8,
}

/// Result of a settled round.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct RoundResult {
    /// Results for each hand, main hand first.
    pub hands: Vec<HandResult>,
    /// Insurance stake (0 if not taken).
    pub insurance_bet: usize,
    /// Insurance payout (0 unless the dealer had blackjack).
    pub insurance_payout: usize,
    /// The dealer's final hand value.
    pub dealer_value: u8,
    /// Whether the dealer busted.
    pub dealer_bust: bool,
    /// Whether the dealer had blackjack.
    pub dealer_blackjack: bool,
}

impl RoundResult {
    /// Outcome of the main hand, which stands for the round as a whole.
    #[must_use]
    pub fn outcome(&self) -> Option<HandOutcome> {
        self.hands
            .iter()
            .find(|h| h.slot == HandSlot::Main)
            .map(|h| h.outcome)
    }

    /// Total chips credited back, insurance included.
    #[must_use]
    pub fn total_payout(&self) -> usize {
        self.hands.iter().map(|h| h.payout).sum::<usize>() + self.insurance_payout
    }

    /// Total chips that were at risk, insurance included.
    #[must_use]
    pub fn total_staked(&self) -> usize {
        self.hands.iter().map(|h| h.stake).sum::<usize>() + self.insurance_bet
    }

    /// Net result (positive = profit, negative = loss).
    #[must_use]
    #[expect(clippy::cast_possible_wrap, reason = "chip totals fit in isize")]
    pub fn net(&self) -> isize {
        self.total_payout() as isize - self.total_staked() as isize
    }
}
