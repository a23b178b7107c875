//! Error types for game operations.
//!
//! Every rejected action leaves the game exactly as it was before the call.

use thiserror::Error;

/// Errors that can occur while staging a bet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BetError {
    /// Invalid game state for betting.
    #[error("bets can only be changed before the deal")]
    InvalidState,
    /// Bet amount is zero.
    #[error("bet amount is zero")]
    ZeroBet,
    /// Insufficient funds.
    #[error("insufficient funds")]
    InsufficientFunds,
    /// There is no staged bet to take back.
    #[error("no bet has been placed")]
    NoBet,
}

/// Errors that can occur when starting a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// Invalid game state for dealing.
    #[error("invalid game state for dealing")]
    InvalidState,
    /// No bet has been placed.
    #[error("place a bet first")]
    NoBet,
}

/// Errors that can occur during player actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    /// Invalid game state for this action.
    #[error("invalid game state for this action")]
    InvalidState,
    /// Cannot double down on this hand.
    #[error("cannot double down on this hand")]
    CannotDouble,
    /// Cannot split this hand.
    #[error("cannot split this hand")]
    CannotSplit,
    /// The hand has already been split once.
    #[error("hand has already been split")]
    AlreadySplit,
    /// Insufficient funds for this action.
    #[error("insufficient funds for this action")]
    InsufficientFunds,
}

/// Errors that can occur during the insurance decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InsuranceError {
    /// Insurance is not being offered (not pending, or already decided).
    #[error("insurance is not being offered")]
    InvalidState,
}

/// Errors that can occur when clearing the table for the next round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RoundError {
    /// The current round has not finished.
    #[error("the current round has not finished")]
    InvalidState,
}

/// Errors raised by the deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DeckError {
    /// Fewer cards remain than were requested.
    #[error("deck exhausted: requested {requested}, {remaining} remaining")]
    Exhausted {
        /// Cards requested.
        requested: usize,
        /// Cards left in the deck.
        remaining: usize,
    },
}

/// Errors raised by the betting ledger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LedgerError {
    /// The balance cannot cover the debit.
    #[error("insufficient funds: needed {needed}, available {available}")]
    InsufficientFunds {
        /// Chips required.
        needed: usize,
        /// Chips on hand.
        available: usize,
    },
}

/// Broad classification of a rejection, for user-facing messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Zero bet, bet over balance, or nothing to reset.
    InvalidBet,
    /// Action not allowed in the current position.
    IllegalAction,
}

/// Any rejection returned by [`Game::apply`](crate::Game::apply).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GameError {
    /// Betting was rejected.
    #[error(transparent)]
    Bet(#[from] BetError),
    /// Dealing was rejected.
    #[error(transparent)]
    Deal(#[from] DealError),
    /// A player action was rejected.
    #[error(transparent)]
    Action(#[from] ActionError),
    /// The insurance decision was rejected.
    #[error(transparent)]
    Insurance(#[from] InsuranceError),
    /// Starting the next round was rejected.
    #[error(transparent)]
    Round(#[from] RoundError),
}

impl GameError {
    /// Classifies the rejection.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Bet(BetError::InvalidState) => ErrorKind::IllegalAction,
            Self::Bet(_) | Self::Deal(DealError::NoBet) => ErrorKind::InvalidBet,
            _ => ErrorKind::IllegalAction,
        }
    }
}
