use alloc::vec::Vec;

use tracing::info;

use crate::achievement::AchievementId;
use crate::events::GameEvent;
use crate::payout;
use crate::result::{HandOutcome, HandResult, RoundResult};

use super::{GameState, Progress, Table};

impl Table {
    /// Hands the round to the dealer if any hand still depends on the
    /// dealer's total, then settles.
    pub(super) fn finish_player_turn(&mut self) {
        let needs_dealer = self
            .player_hands()
            .any(|(_, hand)| hand.status().awaits_dealer());

        if needs_dealer {
            self.transition(GameState::DealerTurn);
            self.dealer_play();
        } else {
            self.reveal_dealer();
        }

        self.settle();
    }

    /// Dealer reveals the hole card and draws until reaching the stand total.
    /// Soft totals count, so the dealer stands on soft 17.
    fn dealer_play(&mut self) {
        self.reveal_dealer();

        while self.dealer.value() < self.options.dealer_stands_on {
            self.deal_dealer(true);
        }
    }

    /// Pays insurance, then each hand against the dealer's final total.
    pub(super) fn settle(&mut self) {
        self.transition(GameState::Evaluating);

        let dealer_value = self.dealer.value();
        let dealer_bust = self.dealer.is_bust();
        let dealer_blackjack = self.dealer.is_blackjack();

        let insurance_bet = self.ledger.insurance();
        let insurance_payout =
            payout::insurance_payout(insurance_bet, dealer_blackjack, &self.options);
        if insurance_payout > 0 {
            self.ledger.credit(insurance_payout);
            self.emit(GameEvent::InsurancePaid {
                payout: insurance_payout,
            });
        }

        let hands: Vec<HandResult> = self
            .player_hands()
            .map(|(slot, hand)| {
                let player_value = hand.value();
                let outcome =
                    payout::resolve(hand.status(), player_value, dealer_value, dealer_bust);
                HandResult {
                    slot,
                    outcome,
                    stake: hand.stake(),
                    payout: payout::payout(outcome, hand.stake(), &self.options),
                    player_value,
                }
            })
            .collect();

        for result in &hands {
            self.ledger.credit(result.payout);
            let event = if result.outcome.is_win() {
                GameEvent::Won {
                    slot: result.slot,
                    outcome: result.outcome,
                    payout: result.payout,
                }
            } else if result.outcome.is_loss() {
                GameEvent::Lost {
                    slot: result.slot,
                    outcome: result.outcome,
                    stake: result.stake,
                }
            } else {
                GameEvent::Pushed {
                    slot: result.slot,
                    stake: result.stake,
                }
            };
            self.emit(event);
        }

        let result = RoundResult {
            hands,
            insurance_bet,
            insurance_payout,
            dealer_value,
            dealer_bust,
            dealer_blackjack,
        };

        info!(
            outcome = ?result.outcome(),
            dealer_value,
            net = result.net(),
            balance = self.ledger.balance(),
            "round settled"
        );

        if let Some(outcome) = result.outcome() {
            self.record_round(outcome);
        }
        self.result = Some(result);

        self.transition(GameState::GameOver);
    }

    /// Streak and win achievements follow the main hand's outcome.
    fn record_round(&mut self, outcome: HandOutcome) {
        if outcome.is_win() {
            self.streak += 1;
            self.record_achievement(AchievementId::FirstWin, Progress::Add(1));
            self.record_achievement(AchievementId::WinningStreak, Progress::AtLeast(self.streak));
            if outcome == HandOutcome::Blackjack {
                self.record_achievement(AchievementId::BlackjackMaster, Progress::Add(1));
            }
        } else if outcome.is_loss() {
            self.streak = 0;
        }
    }
}
