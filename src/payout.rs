//! Payout calculation.
//!
//! Stakes are taken off the balance when they are placed, so a payout is the
//! full amount credited back: stake plus winnings, or nothing.

use crate::hand::HandStatus;
use crate::options::GameOptions;
use crate::result::HandOutcome;

/// Chips credited back for a settled hand.
#[must_use]
pub const fn payout(outcome: HandOutcome, stake: usize, options: &GameOptions) -> usize {
    match outcome {
        HandOutcome::Blackjack => options.blackjack_pays.apply(stake),
        HandOutcome::Charlie => options.charlie_pays.apply(stake),
        HandOutcome::Win => options.win_pays.apply(stake),
        HandOutcome::Push => stake,
        HandOutcome::Lose | HandOutcome::Bust => 0,
    }
}

/// Balance change a settled hand represents, measured from before the stake was placed.
#[must_use]
#[expect(clippy::cast_possible_wrap, reason = "chip totals fit in isize")]
pub const fn net(outcome: HandOutcome, stake: usize, options: &GameOptions) -> isize {
    payout(outcome, stake, options) as isize - stake as isize
}

/// Chips credited back on the insurance side bet.
#[must_use]
pub const fn insurance_payout(
    insurance: usize,
    dealer_blackjack: bool,
    options: &GameOptions,
) -> usize {
    if dealer_blackjack && insurance > 0 {
        options.insurance_pays.apply(insurance)
    } else {
        0
    }
}

/// Resolves a finished hand against the dealer's final total.
///
/// Busted, blackjack and Charlie hands resolve without looking at the dealer.
#[must_use]
pub const fn resolve(
    status: HandStatus,
    player_value: u8,
    dealer_value: u8,
    dealer_bust: bool,
) -> HandOutcome {
    match status {
        HandStatus::Bust => HandOutcome::Bust,
        HandStatus::Blackjack => HandOutcome::Blackjack,
        HandStatus::Charlie => HandOutcome::Charlie,
        HandStatus::Stand | HandStatus::Active => {
            if player_value > 21 {
                HandOutcome::Bust
            } else if dealer_bust || player_value > dealer_value {
                HandOutcome::Win
            } else if player_value == dealer_value {
                HandOutcome::Push
            } else {
                HandOutcome::Lose
            }
        }
    }
}
