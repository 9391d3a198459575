//! Feature slices: state and logic compile everywhere, views on wasm only.
pub mod account;
pub mod cafes;
pub mod home;
pub mod leaderboard;
pub mod login;
pub mod status;
