pub mod account;
pub mod menu;
