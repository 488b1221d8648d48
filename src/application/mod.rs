//! Application layer: the interactive ATM session.
//!
//! `Session` owns the account and the console for one run and walks the
//! top-level and operations state machines defined in `domain::menu`.

pub mod session;
