use std::fmt;
use thiserror::Error;

/// A whole-rupee monetary value.
///
/// Wraps an `i64` so balances and amounts cannot be confused with menu
/// choices or PINs, which are read from the same console as plain integers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct Balance(i64);

impl Balance {
    pub const ZERO: Self = Self(0);

    pub fn new(value: i64) -> Self {
        Self(value)
    }

    pub fn checked_add(self, rhs: Self) -> Option<Self> {
        self.0.checked_add(rhs.0).map(Self)
    }

    pub fn checked_sub(self, rhs: Self) -> Option<Self> {
        self.0.checked_sub(rhs.0).map(Self)
    }
}

impl fmt::Display for Balance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Error, Debug, PartialEq, Eq, Clone, Copy)]
pub enum AccountError {
    #[error("insufficient funds: requested {requested}, available {available}")]
    InsufficientFunds { requested: Balance, available: Balance },
    #[error("balance overflow")]
    Overflow,
}

/// Outcome of a successful deposit, carrying what the receipt shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DepositReceipt {
    pub starting_balance: Balance,
    pub current_balance: Balance,
}

/// The single account operated on during a session.
///
/// `starting_balance` is fixed at creation and only ever displayed.
/// `current_balance` moves with deposits and withdrawals. Amounts are not
/// sign-checked: a negative deposit lowers the balance and a negative
/// withdrawal raises it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    starting_balance: Balance,
    current_balance: Balance,
}

impl Account {
    pub fn new(starting_balance: Balance, current_balance: Balance) -> Self {
        Self {
            starting_balance,
            current_balance,
        }
    }

    pub fn starting_balance(&self) -> Balance {
        self.starting_balance
    }

    /// Adds `amount` to the current balance.
    pub fn deposit(&mut self, amount: Balance) -> Result<DepositReceipt, AccountError> {
        self.current_balance = self
            .current_balance
            .checked_add(amount)
            .ok_or(AccountError::Overflow)?;
        Ok(DepositReceipt {
            starting_balance: self.starting_balance,
            current_balance: self.current_balance,
        })
    }

    /// Subtracts `amount` if it does not exceed the current balance, returning
    /// what remains.
    pub fn withdraw(&mut self, amount: Balance) -> Result<Balance, AccountError> {
        if amount > self.current_balance {
            return Err(AccountError::InsufficientFunds {
                requested: amount,
                available: self.current_balance,
            });
        }
        self.current_balance = self
            .current_balance
            .checked_sub(amount)
            .ok_or(AccountError::Overflow)?;
        Ok(self.current_balance)
    }

    pub fn check_balance(&self) -> Balance {
        self.current_balance
    }
}
