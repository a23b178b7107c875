use tracing::debug;

use crate::achievement::AchievementId;
use crate::error::{BetError, DealError};
use crate::events::{GameEvent, StakeKind};
use crate::hand::{self, Hand, HandStatus};
use crate::result::HandSlot;

use super::{GameState, Progress, Table};

impl Table {
    pub(super) fn place_bet(&mut self, amount: usize) -> Result<(), BetError> {
        if self.state != GameState::Betting {
            return Err(BetError::InvalidState);
        }

        if amount == 0 {
            return Err(BetError::ZeroBet);
        }

        self.ledger
            .stake(amount)
            .map_err(|_| BetError::InsufficientFunds)?;

        let chips = self.options.chip_breakdown(amount);
        self.emit(GameEvent::ChipPlaced {
            kind: StakeKind::Bet,
            amount,
            chips,
        });

        if self.ledger.bet() >= self.options.high_roller_bet {
            self.record_achievement(AchievementId::HighRoller, Progress::Add(1));
        }

        Ok(())
    }

    pub(super) fn reset_bet(&mut self) -> Result<(), BetError> {
        if self.state != GameState::Betting {
            return Err(BetError::InvalidState);
        }

        if self.ledger.bet() == 0 {
            return Err(BetError::NoBet);
        }

        let amount = self.ledger.withdraw_bet();
        self.emit(GameEvent::BetReturned { amount });
        Ok(())
    }

    /// Deals player, dealer up card, player, dealer hole card.
    pub(super) fn start_round(&mut self) -> Result<(), DealError> {
        if self.state != GameState::Betting {
            return Err(DealError::InvalidState);
        }

        let bet = self.ledger.bet();
        if bet == 0 {
            return Err(DealError::NoBet);
        }

        self.hands_played += 1;
        self.main = Hand::new(bet);
        self.split = None;
        self.active = HandSlot::Main;
        self.dealer.clear();
        self.result = None;

        self.transition(GameState::Dealing);

        self.deal_player(HandSlot::Main);
        self.deal_dealer(true);
        self.deal_player(HandSlot::Main);
        self.deal_dealer(false);

        let dealer_shows_ace = self.dealer.up_card().is_some_and(|c| c.is_ace());
        if dealer_shows_ace {
            self.transition(GameState::InsurancePending);
        } else {
            self.check_player_blackjack();
        }

        Ok(())
    }

    /// A natural settles on the spot; anything else hands the turn to the player.
    pub(super) fn check_player_blackjack(&mut self) {
        if hand::is_blackjack(self.main.cards()) {
            debug!("player blackjack");
            self.main.set_status(HandStatus::Blackjack);
            self.reveal_dealer();
            self.settle();
        } else {
            self.transition(GameState::PlayerTurn);
        }
    }
}
