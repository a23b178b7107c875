//! Game engine and state management.

use alloc::boxed::Box;
use alloc::collections::VecDeque;
use core::fmt::Display;

use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info};

use crate::achievement::{AchievementId, AchievementTracker};
use crate::card::{Card, CardView};
use crate::deck::Deck;
use crate::error::{ActionError, BetError, DealError, GameError, InsuranceError, RoundError};
use crate::events::{CancelToken, GameEvent, Seat, Steps};
use crate::hand::{DealerHand, Hand};
use crate::ledger::Ledger;
use crate::options::GameOptions;
use crate::result::{HandSlot, RoundResult};
use crate::sync::Serial;

mod actions;
mod bet;
mod dealer;
mod insurance;
pub mod state;

pub use state::{Action, GameState, Snapshot};

/// Everything one table knows. Only reachable through [`Game`], which hands
/// it to one transition at a time.
pub(crate) struct Table {
    options: GameOptions,
    deck: Deck,
    rng: Box<dyn RngCore + Send>,
    state: GameState,
    ledger: Ledger,
    main: Hand,
    split: Option<Hand>,
    active: HandSlot,
    dealer: DealerHand,
    result: Option<RoundResult>,
    streak: u32,
    hands_played: u32,
    achievements: AchievementTracker,
    round: u64,
    outbox: VecDeque<GameEvent>,
    token: CancelToken,
}

impl Table {
    fn new(options: GameOptions, mut rng: Box<dyn RngCore + Send>) -> Self {
        let deck = Deck::new_shuffled(&mut *rng);
        let ledger = Ledger::new(options.starting_balance);

        Self {
            options,
            deck,
            rng,
            state: GameState::Betting,
            ledger,
            main: Hand::new(0),
            split: None,
            active: HandSlot::Main,
            dealer: DealerHand::new(),
            result: None,
            streak: 0,
            hands_played: 0,
            achievements: AchievementTracker::new(),
            round: 0,
            outbox: VecDeque::new(),
            token: CancelToken::new(),
        }
    }

    fn emit(&mut self, event: GameEvent) {
        self.outbox.push_back(event);
    }

    fn transition(&mut self, to: GameState) {
        let from = self.state;
        debug!(?from, ?to, "state transition");
        self.state = to;
        self.emit(GameEvent::StateChanged { from, to });
    }

    /// Draws the next card, replacing the deck with a fresh shuffle when it is empty.
    fn draw(&mut self) -> Card {
        if let Ok(card) = self.deck.draw_one() {
            return card;
        }

        debug!("deck exhausted, reshuffling");
        self.deck = Deck::new_shuffled(&mut *self.rng);
        self.emit(GameEvent::Reshuffled);
        self.deck
            .draw_one()
            .expect("a freshly built deck holds 52 cards")
    }

    fn hand(&self, slot: HandSlot) -> &Hand {
        match (slot, self.split.as_ref()) {
            (HandSlot::Split, Some(split)) => split,
            _ => &self.main,
        }
    }

    fn hand_mut(&mut self, slot: HandSlot) -> &mut Hand {
        match (slot, self.split.as_mut()) {
            (HandSlot::Split, Some(split)) => split,
            _ => &mut self.main,
        }
    }

    fn player_hands(&self) -> impl Iterator<Item = (HandSlot, &Hand)> {
        core::iter::once((HandSlot::Main, &self.main))
            .chain(self.split.iter().map(|h| (HandSlot::Split, h)))
    }

    fn deal_player(&mut self, slot: HandSlot) {
        let card = self.draw();
        debug!(?slot, rank = card.rank, suit = ?card.suit, "card to player");
        self.hand_mut(slot).add_card(card);
        self.emit(GameEvent::CardDealt {
            seat: Seat::Player(slot),
            card: CardView::from(card),
        });
    }

    fn deal_dealer(&mut self, face_up: bool) {
        let drawn = self.draw();
        let card = if face_up { drawn } else { drawn.face_down() };
        debug!(face_up, "card to dealer");
        self.dealer.add_card(card);
        self.emit(GameEvent::CardDealt {
            seat: Seat::Dealer,
            card: CardView::from(card),
        });
    }

    fn reveal_dealer(&mut self) {
        for card in self.dealer.reveal_hole() {
            self.emit(GameEvent::CardFlipped { card });
        }
    }

    fn record_achievement(&mut self, id: AchievementId, progress: Progress) {
        let unlocked = match progress {
            Progress::Add(amount) => self.achievements.advance(id, amount),
            Progress::AtLeast(value) => self.achievements.raise_to(id, value),
        }
        .map(|a| (a.id, a.name));

        if let Some((id, name)) = unlocked {
            info!(id = id.as_str(), "achievement unlocked");
            self.emit(GameEvent::AchievementUnlocked { id, name });
        }
    }

    fn take_steps(&mut self) -> Steps {
        let events = core::mem::take(&mut self.outbox);
        Steps::new(self.round, events, self.token.clone())
    }

    fn new_round(&mut self) -> Result<(), RoundError> {
        if self.state != GameState::GameOver {
            return Err(RoundError::InvalidState);
        }

        self.token.cancel();
        self.token = CancelToken::new();
        self.outbox.clear();
        self.round += 1;

        self.ledger.clear_round();
        self.main = Hand::new(0);
        self.split = None;
        self.active = HandSlot::Main;
        self.dealer.clear();
        self.result = None;

        self.transition(GameState::Betting);
        Ok(())
    }
}

enum Progress {
    Add(u32),
    AtLeast(u32),
}

/// A single-player blackjack table.
///
/// The game owns the deck, the betting ledger, the hands and achievement
/// progress. Every action locks the table for the whole transition, so
/// actions never interleave. Each action returns a fresh [`Snapshot`], or the
/// reason it was rejected; a rejected action changes nothing.
///
/// # Example
///
/// ```
/// use blackjack_sim::{Game, GameOptions, GameState};
///
/// let game = Game::new(GameOptions::default(), 42);
/// game.place_bet(100).unwrap();
/// let snapshot = game.start_round().unwrap();
/// assert_ne!(snapshot.state, GameState::Betting);
/// assert_eq!(snapshot.hands_played, 1);
/// ```
pub struct Game {
    table: Serial<Table>,
}

impl Game {
    /// Creates a new game whose deck is shuffled from `seed`.
    #[must_use]
    pub fn new(options: GameOptions, seed: u64) -> Self {
        Self::with_rng(options, ChaCha8Rng::seed_from_u64(seed))
    }

    /// Creates a new game shuffling with the given random source.
    #[must_use]
    pub fn with_rng<R: RngCore + Send + 'static>(options: GameOptions, rng: R) -> Self {
        Self {
            table: Serial::new(Table::new(options, Box::new(rng))),
        }
    }

    fn run<E: Display>(
        &self,
        action: &'static str,
        f: impl FnOnce(&mut Table) -> Result<(), E>,
    ) -> Result<Snapshot, E> {
        self.table.with(|table| match f(table) {
            Ok(()) => Ok(table.snapshot()),
            Err(err) => {
                debug!(action, %err, "action rejected");
                Err(err)
            }
        })
    }

    /// Moves `amount` from the balance onto the bet.
    ///
    /// # Errors
    ///
    /// Returns an error outside of betting, for a zero amount, or when the
    /// balance does not cover it.
    pub fn place_bet(&self, amount: usize) -> Result<Snapshot, BetError> {
        self.run("place_bet", |t| t.place_bet(amount))
    }

    /// Returns the staged bet to the balance.
    ///
    /// # Errors
    ///
    /// Returns an error outside of betting or when nothing is staged.
    pub fn reset_bet(&self) -> Result<Snapshot, BetError> {
        self.run("reset_bet", Table::reset_bet)
    }

    /// Deals the round.
    ///
    /// # Errors
    ///
    /// Returns an error outside of betting or when no bet is staged.
    pub fn start_round(&self) -> Result<Snapshot, DealError> {
        self.run("start_round", Table::start_round)
    }

    /// Takes or declines insurance while the dealer shows an Ace.
    ///
    /// An insurance stake the balance cannot cover is recorded as declined.
    ///
    /// # Errors
    ///
    /// Returns an error unless insurance is pending.
    pub fn decide_insurance(&self, take: bool) -> Result<Snapshot, InsuranceError> {
        self.run("decide_insurance", |t| t.decide_insurance(take))
    }

    /// Draws a card into the active hand.
    ///
    /// # Errors
    ///
    /// Returns an error unless it is the player's turn.
    pub fn hit(&self) -> Result<Snapshot, ActionError> {
        self.run("hit", Table::hit)
    }

    /// Keeps the active hand.
    ///
    /// # Errors
    ///
    /// Returns an error unless it is the player's turn.
    pub fn stand(&self) -> Result<Snapshot, ActionError> {
        self.run("stand", Table::stand)
    }

    /// Doubles the active hand's stake, draws one card and stands.
    ///
    /// # Errors
    ///
    /// Returns an error unless it is the player's turn, the active hand has
    /// exactly two cards and the balance covers the extra stake.
    pub fn double_down(&self) -> Result<Snapshot, ActionError> {
        self.run("double_down", Table::double_down)
    }

    /// Splits a pair into two hands, staking the bet again.
    ///
    /// # Errors
    ///
    /// Returns an error unless it is the player's turn, the main hand is two
    /// cards of equal value, no split was made yet and the balance covers the
    /// extra stake.
    pub fn split(&self) -> Result<Snapshot, ActionError> {
        self.run("split", Table::split)
    }

    /// Clears the table after a settled round and reopens betting.
    ///
    /// Steps still undelivered from the finished round are cancelled.
    ///
    /// # Errors
    ///
    /// Returns an error unless the round is over.
    pub fn new_round(&self) -> Result<Snapshot, RoundError> {
        self.run("new_round", Table::new_round)
    }

    /// Applies any action. This is the single entry point for hosts that
    /// drive the game from a queue of actions.
    ///
    /// # Errors
    ///
    /// Returns the rejection of the underlying action.
    pub fn apply(&self, action: Action) -> Result<Snapshot, GameError> {
        match action {
            Action::PlaceBet(amount) => Ok(self.place_bet(amount)?),
            Action::ResetBet => Ok(self.reset_bet()?),
            Action::StartRound => Ok(self.start_round()?),
            Action::Hit => Ok(self.hit()?),
            Action::Stand => Ok(self.stand()?),
            Action::DoubleDown => Ok(self.double_down()?),
            Action::Split => Ok(self.split()?),
            Action::DecideInsurance(take) => Ok(self.decide_insurance(take)?),
            Action::NewRound => Ok(self.new_round()?),
        }
    }

    /// Returns the current snapshot.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        self.table.with(|t| t.snapshot())
    }

    /// Returns the current game state.
    #[must_use]
    pub fn state(&self) -> GameState {
        self.table.with(|t| t.state)
    }

    /// Returns the current balance.
    #[must_use]
    pub fn balance(&self) -> usize {
        self.table.with(|t| t.ledger.balance())
    }

    /// Returns the player's hands, main first. Cards carry their real faces.
    #[must_use]
    pub fn hands(&self) -> (Hand, Option<Hand>) {
        self.table.with(|t| (t.main.clone(), t.split.clone()))
    }

    /// Returns the dealer's hand, hole card included.
    #[must_use]
    pub fn dealer_hand(&self) -> DealerHand {
        self.table.with(|t| t.dealer.clone())
    }

    /// Returns the settled result of the current round.
    #[must_use]
    pub fn last_result(&self) -> Option<RoundResult> {
        self.table.with(|t| t.result.clone())
    }

    /// Returns the number of cards left in the deck.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.table.with(|t| t.deck.len())
    }

    /// Installs a deck with a known order, for example to replay a recorded shoe.
    pub fn replace_deck(&self, deck: Deck) {
        self.table.with(|t| t.deck = deck);
    }

    /// Drains the events produced since the last call into a step sequence.
    #[must_use]
    pub fn take_steps(&self) -> Steps {
        self.table.with(Table::take_steps)
    }
}
