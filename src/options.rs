//! Game configuration options.

extern crate alloc;

use alloc::vec::Vec;

/// A payout expressed as the total returned per chip staked.
///
/// `Payout::new(5, 2)` returns two and a half times the stake: the stake
/// itself plus 3:2 winnings. Results are rounded down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Payout {
    /// Numerator of the multiplier.
    pub numerator: usize,
    /// Denominator of the multiplier. Zero is treated as one.
    pub denominator: usize,
}

impl Payout {
    /// Creates a payout multiplier of `numerator / denominator`.
    #[must_use]
    pub const fn new(numerator: usize, denominator: usize) -> Self {
        Self {
            numerator,
            denominator,
        }
    }

    /// Total amount returned for `stake`, rounded down.
    #[must_use]
    pub const fn apply(&self, stake: usize) -> usize {
        let denominator = if self.denominator == 0 {
            1
        } else {
            self.denominator
        };
        stake.saturating_mul(self.numerator) / denominator
    }
}

/// A number of chips of one denomination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ChipStack {
    /// Value of one chip.
    pub denomination: usize,
    /// How many chips.
    pub count: usize,
}

impl ChipStack {
    /// Creates a stack of `count` chips worth `denomination` each.
    #[must_use]
    pub const fn new(denomination: usize, count: usize) -> Self {
        Self {
            denomination,
            count,
        }
    }
}

/// Configuration options for a blackjack table.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use blackjack_sim::{GameOptions, Payout};
///
/// let options = GameOptions::default()
///     .with_starting_balance(500)
///     .with_blackjack_pays(Payout::new(12, 5))
///     .with_dealer_stands_on(17);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameOptions {
    /// Chips the player starts the session with.
    pub starting_balance: usize,
    /// Chip denominations offered for betting, in any order.
    pub chips: [usize; 4],
    /// Dealer stands once reaching this total, soft totals included.
    pub dealer_stands_on: u8,
    /// Number of cards that makes an automatic Charlie win.
    pub charlie_cards: usize,
    /// Total returned for a natural blackjack.
    pub blackjack_pays: Payout,
    /// Total returned for a Charlie.
    pub charlie_pays: Payout,
    /// Total returned for an ordinary win.
    pub win_pays: Payout,
    /// Total returned on the insurance stake when the dealer has blackjack.
    pub insurance_pays: Payout,
    /// Staged bet that counts toward the high roller achievement.
    pub high_roller_bet: usize,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            starting_balance: 1000,
            chips: [5, 25, 100, 500],
            dealer_stands_on: 17,
            charlie_cards: 5,
            blackjack_pays: Payout::new(5, 2),
            charlie_pays: Payout::new(3, 1),
            win_pays: Payout::new(2, 1),
            insurance_pays: Payout::new(3, 1),
            high_roller_bet: 500,
        }
    }
}

impl GameOptions {
    /// Sets the starting balance.
    ///
    /// # Example
    ///
    /// ```
    /// use blackjack_sim::GameOptions;
    ///
    /// let options = GameOptions::default().with_starting_balance(250);
    /// assert_eq!(options.starting_balance, 250);
    /// ```
    #[must_use]
    pub const fn with_starting_balance(mut self, balance: usize) -> Self {
        self.starting_balance = balance;
        self
    }

    /// Sets the chip denominations.
    #[must_use]
    pub const fn with_chips(mut self, chips: [usize; 4]) -> Self {
        self.chips = chips;
        self
    }

    /// Sets the total the dealer stands on.
    ///
    /// # Example
    ///
    /// ```
    /// use blackjack_sim::GameOptions;
    ///
    /// let options = GameOptions::default().with_dealer_stands_on(18);
    /// assert_eq!(options.dealer_stands_on, 18);
    /// ```
    #[must_use]
    pub const fn with_dealer_stands_on(mut self, total: u8) -> Self {
        self.dealer_stands_on = total;
        self
    }

    /// Sets the Charlie card count.
    #[must_use]
    pub const fn with_charlie_cards(mut self, cards: usize) -> Self {
        self.charlie_cards = cards;
        self
    }

    /// Sets the blackjack payout.
    #[must_use]
    pub const fn with_blackjack_pays(mut self, payout: Payout) -> Self {
        self.blackjack_pays = payout;
        self
    }

    /// Sets the Charlie payout.
    #[must_use]
    pub const fn with_charlie_pays(mut self, payout: Payout) -> Self {
        self.charlie_pays = payout;
        self
    }

    /// Sets the ordinary win payout.
    #[must_use]
    pub const fn with_win_pays(mut self, payout: Payout) -> Self {
        self.win_pays = payout;
        self
    }

    /// Sets the insurance payout.
    #[must_use]
    pub const fn with_insurance_pays(mut self, payout: Payout) -> Self {
        self.insurance_pays = payout;
        self
    }

    /// Sets the high roller threshold.
    #[must_use]
    pub const fn with_high_roller_bet(mut self, amount: usize) -> Self {
        self.high_roller_bet = amount;
        self
    }

    /// Splits `amount` into stacks of chips, largest denomination first.
    ///
    /// Returns at most one stack per denomination. Any remainder smaller than
    /// the smallest chip is left out.
    ///
    /// # Example
    ///
    /// ```
    /// use blackjack_sim::{ChipStack, GameOptions};
    ///
    /// let chips = GameOptions::default().chip_breakdown(135);
    /// assert_eq!(
    ///     chips,
    ///     vec![ChipStack::new(100, 1), ChipStack::new(25, 1), ChipStack::new(5, 2)]
    /// );
    /// ```
    #[must_use]
    pub fn chip_breakdown(&self, amount: usize) -> Vec<ChipStack> {
        let mut denominations = self.chips;
        denominations.sort_unstable();

        let mut remaining = amount;
        let mut stacks = Vec::new();

        for denomination in denominations.into_iter().rev() {
            if denomination == 0 || remaining < denomination {
                continue;
            }
            let count = remaining / denomination;
            remaining %= denomination;
            stacks.push(ChipStack::new(denomination, count));
        }

        stacks
    }
}
