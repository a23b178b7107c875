//! Game state, actions and snapshots.

extern crate alloc;

use alloc::vec::Vec;

use crate::achievement::Achievement;
use crate::card::CardView;
use crate::hand;
use crate::result::{HandOutcome, HandSlot};

use super::Table;

/// Game state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum GameState {
    /// Accepting bets for the next round.
    Betting,
    /// Dealing initial cards.
    Dealing,
    /// Dealer shows an Ace; waiting for the insurance decision.
    InsurancePending,
    /// Waiting for player actions.
    PlayerTurn,
    /// Dealer plays out their hand.
    DealerTurn,
    /// Hands are being settled.
    Evaluating,
    /// Round has been settled.
    GameOver,
}

/// An action the player can take.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Action {
    /// Stage chips as the bet.
    PlaceBet(usize),
    /// Take the staged bet back.
    ResetBet,
    /// Deal the round.
    StartRound,
    /// Draw a card into the active hand.
    Hit,
    /// Keep the active hand.
    Stand,
    /// Double the active hand's stake and draw exactly one card.
    DoubleDown,
    /// Split a pair into two hands.
    Split,
    /// Take (`true`) or decline (`false`) insurance.
    DecideInsurance(bool),
    /// Clear the table after a settled round.
    NewRound,
}

/// Read-only view of the table after a transition.
///
/// Cards are given as [`CardView`]s, so the dealer's hole card stays hidden
/// until it is turned up. Values are the displayed totals.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Snapshot {
    /// Current state.
    pub state: GameState,
    /// Round counter, bumped by every new round.
    pub round: u64,
    /// The player's main hand.
    pub player: Vec<CardView>,
    /// The split hand, if the player split.
    pub split: Option<Vec<CardView>>,
    /// The dealer's hand.
    pub dealer: Vec<CardView>,
    /// Hand the next action applies to, while the player is acting.
    pub active_hand: Option<HandSlot>,
    /// Displayed value of the main hand.
    pub player_value: u8,
    /// Displayed value of the split hand.
    pub split_value: Option<u8>,
    /// Displayed value of the dealer's hand.
    pub dealer_value: u8,
    /// Chips available.
    pub balance: usize,
    /// Chips on the player's hands.
    pub bet: usize,
    /// Chips on insurance.
    pub insurance: usize,
    /// Consecutive winning rounds.
    pub streak: u32,
    /// Rounds dealt this session.
    pub hands_played: u32,
    /// Outcome of the main hand once settled.
    pub result: Option<HandOutcome>,
    /// Achievement progress.
    pub achievements: Vec<Achievement>,
    /// Cards left in the deck.
    pub cards_remaining: usize,
}

fn view(cards: &[crate::card::Card]) -> Vec<CardView> {
    cards.iter().copied().map(CardView::from).collect()
}

impl Table {
    pub(super) fn snapshot(&self) -> Snapshot {
        Snapshot {
            state: self.state,
            round: self.round,
            player: view(self.main.cards()),
            split: self.split.as_ref().map(|h| view(h.cards())),
            dealer: view(self.dealer.cards()),
            active_hand: (self.state == GameState::PlayerTurn).then_some(self.active),
            player_value: hand::displayed_value(self.main.cards()),
            split_value: self
                .split
                .as_ref()
                .map(|h| hand::displayed_value(h.cards())),
            dealer_value: self.dealer.visible_value(),
            balance: self.ledger.balance(),
            bet: self.ledger.bet(),
            insurance: self.ledger.insurance(),
            streak: self.streak,
            hands_played: self.hands_played,
            result: self.result.as_ref().and_then(crate::result::RoundResult::outcome),
            achievements: self.achievements.list().to_vec(),
            cards_remaining: self.deck.len(),
        }
    }
}
