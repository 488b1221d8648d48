//! Screens and messages shown by the ATM.
//!
//! Stateless free functions over any writer. The session decides what to
//! show; these only decide how it looks.

use crate::domain::account::{Balance, DepositReceipt};
use chrono::{DateTime, Local};
use std::io::{self, Write};

pub const CHOICE_PROMPT: &str = "Enter your choice: ";
pub const PIN_PROMPT: &str = "\nEnter ATM PIN: ";
pub const DEPOSIT_PROMPT: &str = "\nEnter amount to deposit: ";
pub const WITHDRAW_PROMPT: &str = "\nEnter amount to withdraw: ";

const RULE: &str = "=============================";
const DATE_TIME_FORMAT: &str = "%a %b %e %H:%M:%S %Y";

pub fn welcome<W: Write>(out: &mut W, now: DateTime<Local>) -> io::Result<()> {
    writeln!(out, "{RULE}")?;
    writeln!(out, "      Welcome to ATM")?;
    writeln!(out, "{RULE}")?;
    writeln!(out, "Current Date and Time: {}", now.format(DATE_TIME_FORMAT))?;
    writeln!(out)
}

pub fn main_menu<W: Write>(out: &mut W) -> io::Result<()> {
    write!(out, "\n1. Enter ATM PIN\n2. Help\n3. Exit\n")
}

pub fn help_screen<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "\n--- Help Screen ---")?;
    writeln!(out, "1. Enter correct ATM PIN to access your account.")?;
    writeln!(out, "2. You can Deposit, Withdraw, or Check Balance.")?;
    writeln!(out, "3. Only one attempt is allowed to enter the PIN.")?;
    writeln!(out, "{RULE}{RULE}===")
}

pub fn goodbye<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "\nThank you for using ATM. Goodbye!")
}

pub fn invalid_main_choice<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "\nInvalid choice. Please try again.")
}

pub fn incorrect_pin<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "\nIncorrect PIN. Exiting...")
}

pub fn operations_menu<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "\n--- ATM MENU ---")?;
    writeln!(out, "1. Deposit\n2. Withdraw\n3. Check Balance\n4. Exit")
}

pub fn invalid_operation<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "\nInvalid choice. Try again.")
}

pub fn leaving_operations<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "\nExiting... Thank you!")
}

pub fn invalid_amount<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "\nInvalid amount. Please enter a whole number.")
}

pub fn amount_too_large<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "\nAmount too large.")
}

pub fn deposit_receipt<W: Write>(out: &mut W, receipt: &DepositReceipt) -> io::Result<()> {
    writeln!(out, "\n--- Deposit Successful ---")?;
    writeln!(out, "Initial Starting Balance: Rs. {}", receipt.starting_balance)?;
    writeln!(out, "Present Account Balance: Rs. {}", receipt.current_balance)
}

pub fn withdrawal_receipt<W: Write>(out: &mut W, remaining: Balance) -> io::Result<()> {
    writeln!(out, "\n--- Withdrawal Successful ---")?;
    writeln!(out, "Remaining Balance: Rs. {remaining}")
}

pub fn withdrawal_failed<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "\n--- Withdrawal Failed ---")?;
    writeln!(out, "Insufficient Balance! Try a lower amount.")
}

pub fn balance<W: Write>(out: &mut W, current: Balance) -> io::Result<()> {
    writeln!(out, "\n--- Account Balance ---")?;
    writeln!(out, "Current Balance: Rs. {current}")
}
