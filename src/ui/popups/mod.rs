//! Modal popups drawn on top of the active route.

pub mod confirm;
pub mod transfer_form;
