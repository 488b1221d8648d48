/// A selection from the top-level menu.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum MainChoice {
    EnterPin,
    Help,
    Exit,
}

impl TryFrom<i64> for MainChoice {
    type Error = i64;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Self::EnterPin),
            2 => Ok(Self::Help),
            3 => Ok(Self::Exit),
            other => Err(other),
        }
    }
}

/// A selection from the authenticated operations menu.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Operation {
    Deposit,
    Withdraw,
    CheckBalance,
    Exit,
}

impl TryFrom<i64> for Operation {
    type Error = i64;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Self::Deposit),
            2 => Ok(Self::Withdraw),
            3 => Ok(Self::CheckBalance),
            4 => Ok(Self::Exit),
            other => Err(other),
        }
    }
}

/// Top-level session state.
///
/// `AuthFlow` always moves to `Exit`, whatever the PIN outcome: a PIN may be
/// entered once per run.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum SessionState {
    Menu,
    AuthFlow,
    Exit,
}

impl SessionState {
    /// Transition taken from `Menu` on a parsed choice. `None` stands for an
    /// unreadable or out-of-range choice. Other states ignore menu choices.
    pub fn on_choice(self, choice: Option<MainChoice>) -> Self {
        match (self, choice) {
            (Self::Menu, Some(MainChoice::EnterPin)) => Self::AuthFlow,
            (Self::Menu, Some(MainChoice::Help)) | (Self::Menu, None) => Self::Menu,
            (Self::Menu, Some(MainChoice::Exit)) => Self::Exit,
            (other, _) => other,
        }
    }

    /// Transition taken once the PIN flow has run, whatever its result.
    pub fn after_auth(self) -> Self {
        match self {
            Self::AuthFlow | Self::Exit => Self::Exit,
            Self::Menu => Self::Menu,
        }
    }

    pub fn is_terminal(self) -> bool {
        self == Self::Exit
    }
}

/// State of the authenticated operations loop.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum OperationsState {
    Menu,
    Exit,
}

impl OperationsState {
    pub fn on_operation(self, operation: Option<Operation>) -> Self {
        match (self, operation) {
            (Self::Menu, Some(Operation::Exit)) => Self::Exit,
            (Self::Menu, _) => Self::Menu,
            (Self::Exit, _) => Self::Exit,
        }
    }
}
