use tracing::debug;

use crate::error::InsuranceError;
use crate::events::{GameEvent, StakeKind};
use crate::hand::HandStatus;

use super::{GameState, Table};

impl Table {
    /// Records the insurance decision, then the dealer peeks.
    ///
    /// The insurance stake is half the bet, rounded down. If the balance
    /// cannot cover it the decision counts as declined. A dealer blackjack
    /// ends the round at once: the main hand pushes on a player blackjack and
    /// loses otherwise.
    pub(super) fn decide_insurance(&mut self, take: bool) -> Result<(), InsuranceError> {
        if self.state != GameState::InsurancePending {
            return Err(InsuranceError::InvalidState);
        }

        if take {
            let amount = self.ledger.bet() / 2;
            if amount > 0 && self.ledger.insure(amount).is_ok() {
                let chips = self.options.chip_breakdown(amount);
                self.emit(GameEvent::ChipPlaced {
                    kind: StakeKind::Insurance,
                    amount,
                    chips,
                });
            } else {
                debug!(amount, "insurance not affordable, declined");
            }
        }

        if self.dealer.is_blackjack() {
            debug!("dealer blackjack");
            // Compared on value: 21 against 21 pushes, anything less loses.
            self.main.set_status(HandStatus::Stand);
            self.reveal_dealer();
            self.settle();
        } else {
            self.check_player_blackjack();
        }

        Ok(())
    }
}
