use crate::config::AtmConfig;
use crate::domain::account::{Account, AccountError, Balance};
use crate::domain::menu::{MainChoice, Operation, OperationsState, SessionState};
use crate::error::Result;
use crate::interfaces::console::display;
use crate::interfaces::console::{Console, Input};
use chrono::{DateTime, Local};
use std::io::{BufRead, Write};
use std::ops::ControlFlow;
use tracing::{debug, info, warn};

/// How a session ended.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum SessionOutcome {
    /// The user chose "Exit" from the top-level menu.
    Exited,
    /// The PIN matched and the operations loop was left with "Exit".
    Authenticated,
    /// The PIN did not match.
    Denied,
    /// Input ran out before the session reached a terminal state.
    InputClosed,
}

/// Drives one ATM session over a console.
///
/// The session owns the single account for the run. Top-level navigation
/// follows [`SessionState`]; once the PIN flow has run, matched or not, the
/// session is over.
pub struct Session<R: BufRead, W: Write> {
    config: AtmConfig,
    account: Account,
    console: Console<R, W>,
    state: SessionState,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Creates a session with a freshly opened account.
    ///
    /// # Arguments
    ///
    /// * `config` - PIN and initial balances for this run.
    /// * `input` - Where choices, PINs and amounts are read from.
    /// * `output` - Where prompts and screens are written.
    pub fn new(config: AtmConfig, input: R, output: W) -> Self {
        let account = config.open_account();
        Self {
            config,
            account,
            console: Console::new(input, output),
            state: SessionState::Menu,
        }
    }

    pub fn account(&self) -> &Account {
        &self.account
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Shows the banner stamped with the current local time, then runs the
    /// top-level menu to completion.
    pub fn run(&mut self) -> Result<SessionOutcome> {
        self.welcome(Local::now())?;
        self.main_loop()
    }

    pub fn welcome(&mut self, now: DateTime<Local>) -> Result<()> {
        display::welcome(self.console.output(), now)?;
        Ok(())
    }

    pub fn help_screen(&mut self) -> Result<()> {
        display::help_screen(self.console.output())?;
        Ok(())
    }

    /// Runs the top-level menu until the session reaches `Exit`.
    pub fn main_loop(&mut self) -> Result<SessionOutcome> {
        let mut outcome = SessionOutcome::Exited;

        while !self.state.is_terminal() {
            match self.state {
                SessionState::Menu => {
                    display::main_menu(self.console.output())?;
                    let choice = match self.console.prompt_number(display::CHOICE_PROMPT)? {
                        Input::EndOfInput => {
                            debug!("input closed at main menu");
                            return Ok(SessionOutcome::InputClosed);
                        }
                        Input::Number(n) => MainChoice::try_from(n).ok(),
                        Input::Invalid(_) => None,
                    };

                    match choice {
                        Some(MainChoice::EnterPin) => {}
                        Some(MainChoice::Help) => self.help_screen()?,
                        Some(MainChoice::Exit) => display::goodbye(self.console.output())?,
                        None => display::invalid_main_choice(self.console.output())?,
                    }
                    self.state = self.state.on_choice(choice);
                    debug!(state = ?self.state, "main menu transition");
                }
                SessionState::AuthFlow => {
                    outcome = self.authenticate()?;
                    self.state = self.state.after_auth();
                }
                SessionState::Exit => {}
            }
        }

        info!(?outcome, "session finished");
        Ok(outcome)
    }

    /// Reads one PIN. A match hands over to the operations loop.
    fn authenticate(&mut self) -> Result<SessionOutcome> {
        let entered = match self.console.prompt_number(display::PIN_PROMPT)? {
            Input::EndOfInput => return Ok(SessionOutcome::InputClosed),
            Input::Number(n) => Some(n),
            Input::Invalid(_) => None,
        };

        if entered.is_some_and(|pin| self.config.pin.matches(pin)) {
            info!("PIN accepted");
            Ok(match self.operations_loop()? {
                ControlFlow::Continue(()) => SessionOutcome::Authenticated,
                ControlFlow::Break(()) => SessionOutcome::InputClosed,
            })
        } else {
            warn!("PIN rejected");
            display::incorrect_pin(self.console.output())?;
            Ok(SessionOutcome::Denied)
        }
    }

    /// Runs the operations menu until "Exit" is chosen. Breaks if input
    /// runs out.
    fn operations_loop(&mut self) -> Result<ControlFlow<()>> {
        let mut state = OperationsState::Menu;

        while state != OperationsState::Exit {
            display::operations_menu(self.console.output())?;
            let operation = match self.console.prompt_number(display::CHOICE_PROMPT)? {
                Input::EndOfInput => return Ok(ControlFlow::Break(())),
                Input::Number(n) => Operation::try_from(n).ok(),
                Input::Invalid(_) => None,
            };

            let flow = match operation {
                Some(Operation::Deposit) => self.deposit()?,
                Some(Operation::Withdraw) => self.withdraw()?,
                Some(Operation::CheckBalance) => {
                    self.check_balance()?;
                    ControlFlow::Continue(())
                }
                Some(Operation::Exit) => {
                    display::leaving_operations(self.console.output())?;
                    ControlFlow::Continue(())
                }
                None => {
                    display::invalid_operation(self.console.output())?;
                    ControlFlow::Continue(())
                }
            };
            if flow.is_break() {
                return Ok(flow);
            }
            state = state.on_operation(operation);
        }

        Ok(ControlFlow::Continue(()))
    }

    /// Prompts until a whole number is entered.
    fn read_amount(&mut self, label: &str) -> Result<ControlFlow<(), Balance>> {
        loop {
            match self.console.prompt_number(label)? {
                Input::Number(n) => return Ok(ControlFlow::Continue(Balance::new(n))),
                Input::Invalid(text) => {
                    debug!(%text, "unreadable amount");
                    display::invalid_amount(self.console.output())?;
                }
                Input::EndOfInput => return Ok(ControlFlow::Break(())),
            }
        }
    }

    fn deposit(&mut self) -> Result<ControlFlow<()>> {
        let amount = match self.read_amount(display::DEPOSIT_PROMPT)? {
            ControlFlow::Continue(amount) => amount,
            ControlFlow::Break(()) => return Ok(ControlFlow::Break(())),
        };

        match self.account.deposit(amount) {
            Ok(receipt) => {
                debug!(%amount, balance = %receipt.current_balance, "deposit");
                display::deposit_receipt(self.console.output(), &receipt)?;
            }
            Err(e) => {
                debug!(%amount, error = %e, "deposit rejected");
                warn!("deposit rejected: balance overflow");
                display::amount_too_large(self.console.output())?;
            }
        }
        Ok(ControlFlow::Continue(()))
    }

    fn withdraw(&mut self) -> Result<ControlFlow<()>> {
        let amount = match self.read_amount(display::WITHDRAW_PROMPT)? {
            ControlFlow::Continue(amount) => amount,
            ControlFlow::Break(()) => return Ok(ControlFlow::Break(())),
        };

        match self.account.withdraw(amount) {
            Ok(remaining) => {
                debug!(%amount, balance = %remaining, "withdrawal");
                display::withdrawal_receipt(self.console.output(), remaining)?;
            }
            Err(e @ AccountError::InsufficientFunds { .. }) => {
                debug!(error = %e, "withdrawal rejected");
                warn!("withdrawal rejected: insufficient funds");
                display::withdrawal_failed(self.console.output())?;
            }
            Err(e @ AccountError::Overflow) => {
                debug!(%amount, error = %e, "withdrawal rejected");
                warn!("withdrawal rejected: balance overflow");
                display::amount_too_large(self.console.output())?;
            }
        }
        Ok(ControlFlow::Continue(()))
    }

    fn check_balance(&mut self) -> Result<()> {
        display::balance(self.console.output(), self.account.check_balance())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Pin;

    fn run_with(config: AtmConfig, input: &str) -> (SessionOutcome, Account, String) {
        let mut output = Vec::new();
        let mut session = Session::new(config, input.as_bytes(), &mut output);
        let outcome = session.main_loop().unwrap();
        let account = session.account().clone();
        assert!(session.state().is_terminal() || outcome == SessionOutcome::InputClosed);
        drop(session);
        (outcome, account, String::from_utf8(output).unwrap())
    }

    fn run(input: &str) -> (SessionOutcome, Account, String) {
        run_with(AtmConfig::default(), input)
    }

    #[test]
    fn test_deposit_scenario() {
        let (outcome, account, out) = run("1\n12345\n1\n5000\n4\n");
        assert_eq!(outcome, SessionOutcome::Authenticated);
        assert_eq!(account.check_balance(), Balance::new(25000));
        assert!(out.contains("Initial Starting Balance: Rs. 60000"));
        assert!(out.contains("Present Account Balance: Rs. 25000"));
        assert!(out.contains("Exiting... Thank you!"));
    }

    #[test]
    fn test_overdraw_rejected() {
        let (_, account, out) = run("1\n12345\n2\n25000\n3\n4\n");
        assert_eq!(account.check_balance(), Balance::new(20000));
        assert!(out.contains("Insufficient Balance! Try a lower amount."));
        assert!(out.contains("Current Balance: Rs. 20000"));
    }

    #[test]
    fn test_withdraw_scenario() {
        let (_, account, out) = run("1\n12345\n2\n15000\n4\n");
        assert_eq!(account.check_balance(), Balance::new(5000));
        assert!(out.contains("Remaining Balance: Rs. 5000"));
    }

    #[test]
    fn test_wrong_pin_ends_session() {
        let (outcome, account, out) = run("1\n1\n3\n");
        assert_eq!(outcome, SessionOutcome::Denied);
        assert_eq!(account.check_balance(), Balance::new(20000));
        assert!(out.contains("Incorrect PIN. Exiting..."));
        // The trailing "3" is never read, so no goodbye and no second menu.
        assert!(!out.contains("Goodbye"));
        assert_eq!(out.matches("1. Enter ATM PIN").count(), 1);
    }

    #[test]
    fn test_non_numeric_pin_is_denied() {
        let (outcome, _, _) = run("1\nabc\n");
        assert_eq!(outcome, SessionOutcome::Denied);
    }

    #[test]
    fn test_help_returns_to_menu() {
        let (outcome, _, out) = run("2\n3\n");
        assert_eq!(outcome, SessionOutcome::Exited);
        assert!(out.contains("--- Help Screen ---"));
        assert_eq!(out.matches("1. Enter ATM PIN").count(), 2);
        assert!(out.contains("Thank you for using ATM. Goodbye!"));
    }

    #[test]
    fn test_invalid_choices_reprompt() {
        let (outcome, _, out) = run("9\nxyz\n3\n");
        assert_eq!(outcome, SessionOutcome::Exited);
        assert_eq!(out.matches("Invalid choice. Please try again.").count(), 2);
    }

    #[test]
    fn test_operations_loop_only_exits_on_four() {
        let (outcome, account, out) = run("1\n12345\n0\n5\n3\n3\n4\n");
        assert_eq!(outcome, SessionOutcome::Authenticated);
        assert_eq!(out.matches("Invalid choice. Try again.").count(), 2);
        assert_eq!(out.matches("--- Account Balance ---").count(), 2);
        assert_eq!(out.matches("--- ATM MENU ---").count(), 5);
        assert_eq!(account.check_balance(), Balance::new(20000));
    }

    #[test]
    fn test_negative_amounts_are_accepted() {
        let (_, account, _) = run("1\n12345\n1\n-500\n2\n-1500\n4\n");
        assert_eq!(account.check_balance(), Balance::new(21000));
    }

    #[test]
    fn test_unreadable_amount_reprompts() {
        let (_, account, out) = run("1\n12345\n1\nlots\n100\n4\n");
        assert!(out.contains("Invalid amount. Please enter a whole number."));
        assert_eq!(out.matches("Enter amount to deposit:").count(), 2);
        assert_eq!(account.check_balance(), Balance::new(20100));
    }

    #[test]
    fn test_injected_pin() {
        let config = AtmConfig::default().with_pin(Pin::new(4321));
        let (outcome, _, _) = run_with(config.clone(), "1\n12345\n");
        assert_eq!(outcome, SessionOutcome::Denied);

        let (outcome, _, _) = run_with(config, "1\n4321\n4\n");
        assert_eq!(outcome, SessionOutcome::Authenticated);
    }

    #[test]
    fn test_end_of_input() {
        assert_eq!(run("").0, SessionOutcome::InputClosed);
        assert_eq!(run("1\n").0, SessionOutcome::InputClosed);
        assert_eq!(run("1\n12345\n1\n").0, SessionOutcome::InputClosed);
        assert_eq!(run("1\n12345\n3\n").0, SessionOutcome::InputClosed);
    }

    #[test]
    fn test_welcome_banner() {
        let mut output = Vec::new();
        let mut session = Session::new(AtmConfig::default(), "".as_bytes(), &mut output);
        session.welcome(Local::now()).unwrap();
        drop(session);
        let out = String::from_utf8(output).unwrap();
        assert!(out.contains("Welcome to ATM"));
        assert!(out.contains("Current Date and Time: "));
    }
}
