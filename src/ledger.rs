//! The betting ledger.
//!
//! Balance, the chips on the table and the insurance side bet live together
//! so that every movement updates both sides at once. A debit that the
//! balance cannot cover fails without touching anything.

use crate::error::LedgerError;

/// Chip accounting for the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Ledger {
    balance: usize,
    bet: usize,
    insurance: usize,
}

impl Ledger {
    /// Opens a ledger with the given balance and nothing staked.
    #[must_use]
    pub const fn new(balance: usize) -> Self {
        Self {
            balance,
            bet: 0,
            insurance: 0,
        }
    }

    /// Chips available to bet.
    #[must_use]
    pub const fn balance(&self) -> usize {
        self.balance
    }

    /// Chips staked on the player's hands this round.
    #[must_use]
    pub const fn bet(&self) -> usize {
        self.bet
    }

    /// Chips staked on insurance this round.
    #[must_use]
    pub const fn insurance(&self) -> usize {
        self.insurance
    }

    /// Whether the balance covers `amount`.
    #[must_use]
    pub const fn can_afford(&self, amount: usize) -> bool {
        self.balance >= amount
    }

    const fn debit(&mut self, amount: usize) -> Result<(), LedgerError> {
        if self.balance < amount {
            return Err(LedgerError::InsufficientFunds {
                needed: amount,
                available: self.balance,
            });
        }
        self.balance -= amount;
        Ok(())
    }

    /// Moves `amount` from the balance onto the table.
    ///
    /// Used for the opening bet as well as the extra stake of a double or split.
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError::InsufficientFunds`] if the balance is too small.
    pub const fn stake(&mut self, amount: usize) -> Result<(), LedgerError> {
        match self.debit(amount) {
            Ok(()) => {
                self.bet += amount;
                Ok(())
            }
            Err(e) => Err(e),
        }
    }

    /// Moves `amount` from the balance onto the insurance line.
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError::InsufficientFunds`] if the balance is too small.
    pub const fn insure(&mut self, amount: usize) -> Result<(), LedgerError> {
        match self.debit(amount) {
            Ok(()) => {
                self.insurance += amount;
                Ok(())
            }
            Err(e) => Err(e),
        }
    }

    /// Returns the whole staged bet to the balance and returns the amount.
    pub const fn withdraw_bet(&mut self) -> usize {
        let amount = self.bet;
        self.balance += amount;
        self.bet = 0;
        amount
    }

    /// Credits settled winnings (stake included) to the balance.
    ///
    /// The table amounts stay visible until [`Ledger::clear_round`].
    pub const fn credit(&mut self, amount: usize) {
        self.balance += amount;
    }

    /// Forgets the settled round's bet and insurance.
    pub const fn clear_round(&mut self) {
        self.bet = 0;
        self.insurance = 0;
    }
}
