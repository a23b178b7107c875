use tracing::debug;

use crate::error::ActionError;
use crate::events::{GameEvent, StakeKind};
use crate::hand::{self, Hand, HandStatus};
use crate::result::HandSlot;

use super::{GameState, Table};

impl Table {
    fn ensure_player_turn(&self) -> Result<(), ActionError> {
        if self.state != GameState::PlayerTurn {
            return Err(ActionError::InvalidState);
        }

        if self.hand(self.active).status() != HandStatus::Active {
            return Err(ActionError::InvalidState);
        }

        Ok(())
    }

    /// Marks the hand a Charlie if it reached the card count without busting.
    fn check_charlie(&mut self, slot: HandSlot) {
        let charlie_cards = self.options.charlie_cards;
        let current = self.hand_mut(slot);
        if current.status() == HandStatus::Active
            && hand::is_charlie(current.cards(), charlie_cards)
        {
            debug!(?slot, "charlie");
            current.set_status(HandStatus::Charlie);
        }
    }

    /// Moves play on once the active hand is finished: to the split hand if
    /// one is waiting, otherwise to the dealer.
    fn advance_after_hand(&mut self) {
        if self.active == HandSlot::Main && self.split.is_some() {
            self.active = HandSlot::Split;

            // The split hand was left with one card.
            if self.hand(HandSlot::Split).len() == 1 {
                self.deal_player(HandSlot::Split);
                self.check_charlie(HandSlot::Split);
            }

            if self.hand(HandSlot::Split).status() != HandStatus::Active {
                self.advance_after_hand();
            }
            return;
        }

        self.finish_player_turn();
    }

    /// Player action: Hit (draw a card).
    pub(super) fn hit(&mut self) -> Result<(), ActionError> {
        self.ensure_player_turn()?;

        let slot = self.active;
        self.deal_player(slot);
        self.check_charlie(slot);

        if self.hand(slot).status() != HandStatus::Active {
            self.advance_after_hand();
        }

        Ok(())
    }

    /// Player action: Stand (keep current hand).
    pub(super) fn stand(&mut self) -> Result<(), ActionError> {
        self.ensure_player_turn()?;

        let slot = self.active;
        self.hand_mut(slot).set_status(HandStatus::Stand);
        self.advance_after_hand();

        Ok(())
    }

    /// Player action: Double down (double stake, receive one card, then stand).
    pub(super) fn double_down(&mut self) -> Result<(), ActionError> {
        self.ensure_player_turn()?;

        let slot = self.active;
        let hand = self.hand(slot);

        // Can only double on first two cards
        if hand.len() != 2 {
            return Err(ActionError::CannotDouble);
        }

        let stake = hand.stake();
        self.ledger
            .stake(stake)
            .map_err(|_| ActionError::InsufficientFunds)?;

        let chips = self.options.chip_breakdown(stake);
        self.emit(GameEvent::ChipPlaced {
            kind: StakeKind::Double,
            amount: stake,
            chips,
        });

        self.hand_mut(slot).double_stake();
        self.deal_player(slot);
        self.check_charlie(slot);

        let hand = self.hand_mut(slot);
        if hand.status() == HandStatus::Active {
            hand.set_status(HandStatus::Stand);
        }

        self.advance_after_hand();

        Ok(())
    }

    /// Player action: Split (split a pair into two hands).
    ///
    /// The main hand gets a new second card straight away; the split hand
    /// gets its second card when play reaches it.
    pub(super) fn split(&mut self) -> Result<(), ActionError> {
        self.ensure_player_turn()?;

        if self.split.is_some() {
            return Err(ActionError::AlreadySplit);
        }

        if self.active != HandSlot::Main || !self.main.can_split() {
            return Err(ActionError::CannotSplit);
        }

        let stake = self.main.stake();
        self.ledger
            .stake(stake)
            .map_err(|_| ActionError::InsufficientFunds)?;

        let split_card = self
            .main
            .take_split_card()
            .expect("can_split() was verified above");
        self.split = Some(Hand::from_split(split_card, stake));

        let chips = self.options.chip_breakdown(stake);
        self.emit(GameEvent::ChipPlaced {
            kind: StakeKind::Split,
            amount: stake,
            chips,
        });

        self.deal_player(HandSlot::Main);
        self.check_charlie(HandSlot::Main);
        if self.main.status() != HandStatus::Active {
            self.advance_after_hand();
        }

        Ok(())
    }
}
