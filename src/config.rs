use crate::domain::account::{Account, Balance};

pub const DEFAULT_PIN: i64 = 12345;
pub const DEFAULT_STARTING_BALANCE: i64 = 60000;
pub const DEFAULT_OPENING_BALANCE: i64 = 20000;

/// The numeric code a user must enter to reach the operations menu.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Pin(i64);

impl Pin {
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    pub fn matches(&self, entered: i64) -> bool {
        self.0 == entered
    }
}

// Keep the code out of logs and panic messages.
impl std::fmt::Debug for Pin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Pin(****)")
    }
}

/// Everything a session needs that is fixed for the whole run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AtmConfig {
    pub pin: Pin,
    pub starting_balance: Balance,
    pub opening_balance: Balance,
}

impl Default for AtmConfig {
    fn default() -> Self {
        Self {
            pin: Pin::new(DEFAULT_PIN),
            starting_balance: Balance::new(DEFAULT_STARTING_BALANCE),
            opening_balance: Balance::new(DEFAULT_OPENING_BALANCE),
        }
    }
}

impl AtmConfig {
    pub fn with_pin(mut self, pin: Pin) -> Self {
        self.pin = pin;
        self
    }

    pub fn open_account(&self) -> Account {
        Account::new(self.starting_balance, self.opening_balance)
    }
}
