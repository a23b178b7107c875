//! A single-player blackjack simulator engine with optional `no_std` support.
//!
//! The crate provides a [`Game`] type that runs the full round flow: betting,
//! dealing, insurance, player actions, dealer play and settlement. It keeps
//! the betting ledger, win streak and achievement progress for the session,
//! and knows nothing about rendering, sound or user accounts. Hosts drive it
//! with actions, read [`Snapshot`]s back and replay the emitted [`Steps`] at
//! whatever pace suits them.
//!
//! # Example
//!
//! ```
//! use blackjack_sim::{Game, GameOptions, GameState};
//!
//! let game = Game::new(GameOptions::default(), 7);
//! game.place_bet(25).unwrap();
//! let snapshot = game.start_round().unwrap();
//! assert_eq!(snapshot.bet, 25);
//! if snapshot.state == GameState::PlayerTurn {
//!     game.stand().unwrap();
//! }
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod achievement;
pub mod card;
pub mod deck;
pub mod error;
pub mod events;
pub mod game;
pub mod hand;
pub mod ledger;
pub mod options;
pub mod payout;
pub mod result;
mod sync;

// Re-export main types
pub use achievement::{Achievement, AchievementId, AchievementTracker};
pub use card::{ACE, Card, CardView, DECK_SIZE, JACK, KING, QUEEN, Suit};
pub use deck::Deck;
pub use error::{
    ActionError, BetError, DealError, DeckError, ErrorKind, GameError, InsuranceError,
    LedgerError, RoundError,
};
pub use events::{CancelToken, EventSink, GameEvent, Seat, StakeKind, Steps};
pub use game::{Action, Game, GameState, Snapshot};
pub use hand::{DealerHand, Hand, HandStatus};
pub use ledger::Ledger;
pub use options::{ChipStack, GameOptions, Payout};
pub use result::{HandOutcome, HandResult, HandSlot, RoundResult};
