//! Reusable widgets for the tokenbridge views.
//!
//! - [`balance`]: token balance with a loading spinner
//! - [`chain_badge`]: boxed chain names and the source → destination route
//! - [`spinner`]: braille loading indicator
//! - [`helpers`]: text formatting shared by the views

pub mod balance;
pub mod chain_badge;
pub mod helpers;
pub mod spinner;

pub use balance::{BalanceDisplay, BalanceView};
pub use chain_badge::{BadgeRole, ChainBadge, route_lines};
pub use helpers::truncate_middle;
pub use spinner::Spinner;
