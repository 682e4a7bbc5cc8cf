//! One module per route.

pub mod activity;
pub mod confirmation;
pub mod home;
