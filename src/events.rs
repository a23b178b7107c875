//! Events emitted for presentation and notification collaborators.
//!
//! Every transition appends its events to an outbox. [`Game::take_steps`]
//! hands them out as a [`Steps`] sequence that a presenter may replay at its
//! own pace. Starting the next round cancels the previous round's token, so
//! a stale sequence stops yielding instead of showing superseded cards.
//!
//! [`Game::take_steps`]: crate::Game::take_steps

extern crate alloc;

use alloc::collections::VecDeque;
use alloc::sync::Arc;
use alloc::vec::Vec;
use core::sync::atomic::{AtomicBool, Ordering};

use crate::achievement::AchievementId;
use crate::card::{Card, CardView};
use crate::game::GameState;
use crate::options::ChipStack;
use crate::result::{HandOutcome, HandSlot};

/// Where a card was dealt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Seat {
    /// One of the player's hands.
    Player(HandSlot),
    /// The dealer.
    Dealer,
}

/// What a stake was placed for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum StakeKind {
    /// The opening bet.
    Bet,
    /// Extra stake of a double down.
    Double,
    /// Stake of the new split hand.
    Split,
    /// Insurance side bet.
    Insurance,
}

/// A discrete, informational game event.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum GameEvent {
    /// The game moved between states.
    StateChanged {
        /// Previous state.
        from: GameState,
        /// New state.
        to: GameState,
    },
    /// A card was dealt. Face-down cards are not disclosed.
    CardDealt {
        /// Receiving hand.
        seat: Seat,
        /// The card as shown.
        card: CardView,
    },
    /// A face-down dealer card was turned up.
    CardFlipped {
        /// The revealed card.
        card: Card,
    },
    /// Chips were moved onto the table.
    ChipPlaced {
        /// What the chips are for.
        kind: StakeKind,
        /// Total amount.
        amount: usize,
        /// Amount broken down into chip denominations.
        chips: Vec<ChipStack>,
    },
    /// A staged bet was taken back.
    BetReturned {
        /// Chips returned to the balance.
        amount: usize,
    },
    /// The shoe ran dry and a fresh shuffled deck replaced it.
    Reshuffled,
    /// A hand won.
    Won {
        /// The hand.
        slot: HandSlot,
        /// Win, blackjack or Charlie.
        outcome: HandOutcome,
        /// Chips credited back.
        payout: usize,
    },
    /// A hand lost.
    Lost {
        /// The hand.
        slot: HandSlot,
        /// Lose or bust.
        outcome: HandOutcome,
        /// Chips forfeited.
        stake: usize,
    },
    /// A hand pushed.
    Pushed {
        /// The hand.
        slot: HandSlot,
        /// Chips returned.
        stake: usize,
    },
    /// Insurance paid out against a dealer blackjack.
    InsurancePaid {
        /// Chips credited back.
        payout: usize,
    },
    /// An achievement was unlocked.
    AchievementUnlocked {
        /// Which one.
        id: AchievementId,
        /// Display name.
        name: &'static str,
    },
}

/// Shared cancellation flag for a round's step sequence.
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    /// Creates a live token.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Cancels every sequence holding this token.
    pub fn cancel(&self) {
        self.0.store(true, Ordering::Release);
    }

    /// Returns whether the token was cancelled.
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }
}

/// Receives events. Must not block.
pub trait EventSink {
    /// Handles one event.
    fn notify(&mut self, event: &GameEvent);
}

impl<F: FnMut(&GameEvent)> EventSink for F {
    fn notify(&mut self, event: &GameEvent) {
        self(event);
    }
}

/// An ordered run of events from one round.
///
/// Yields nothing once the round's token is cancelled.
#[derive(Debug, Clone)]
pub struct Steps {
    round: u64,
    events: VecDeque<GameEvent>,
    token: CancelToken,
}

impl Steps {
    pub(crate) const fn new(round: u64, events: VecDeque<GameEvent>, token: CancelToken) -> Self {
        Self {
            round,
            events,
            token,
        }
    }

    /// The round these steps belong to.
    #[must_use]
    pub const fn round(&self) -> u64 {
        self.round
    }

    /// Whether the round has been superseded.
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.token.is_cancelled()
    }

    /// Steps not yet delivered.
    #[must_use]
    pub fn remaining(&self) -> usize {
        if self.is_cancelled() {
            0
        } else {
            self.events.len()
        }
    }

    /// Forwards every remaining step to `sink` and returns how many were delivered.
    pub fn deliver<S: EventSink + ?Sized>(self, sink: &mut S) -> usize {
        let mut delivered = 0;
        for event in self {
            sink.notify(&event);
            delivered += 1;
        }
        delivered
    }
}

impl Iterator for Steps {
    type Item = GameEvent;

    fn next(&mut self) -> Option<Self::Item> {
        if self.token.is_cancelled() {
            self.events.clear();
            return None;
        }
        self.events.pop_front()
    }
}
