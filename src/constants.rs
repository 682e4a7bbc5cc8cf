//! Application constants for the tokenbridge TUI.
//!
//! Display rules, UI dimensions and timing values live here so the views and
//! the state layer agree on them.

use std::time::Duration;

// ============================================================================
// Display Rules
// ============================================================================

/// Key of the chain that is the canonical home of the native asset.
pub const PRIMARY_CHAIN: &str = "ethereum";

/// Symbol of the native asset on the primary chain.
pub const NATIVE_SYMBOL: &str = "ETH";

/// Symbol shown for the native asset on every other chain.
pub const ALTERNATE_NATIVE_SYMBOL: &str = "MORE";

/// Maximum number of fractional digits shown for any amount.
pub const MAX_DISPLAY_DECIMALS: usize = 6;

// ============================================================================
// UI Dimensions
// ============================================================================

/// Height of the application header (in rows).
pub const HEADER_HEIGHT: u16 = 3;

/// Height of the footer (in rows).
pub const FOOTER_HEIGHT: u16 = 1;

/// Spinner width used in token lists.
pub const LIST_SPINNER_SIZE: u16 = 1;

/// Width of the transfer confirmation card.
pub const CONFIRMATION_CARD_WIDTH: u16 = 56;

// ============================================================================
// Timing
// ============================================================================

/// Main loop tick; drives redraws, spinners and toast countdowns.
pub const TICK_RATE: Duration = Duration::from_millis(100);

/// Toast lifetime in ticks.
pub const TOAST_TICKS: u8 = 30;

/// Default interval for polling an RPC wallet's connected network.
pub const DEFAULT_POLL_INTERVAL_SECS: u64 = 4;

/// Default timeout for JSON-RPC requests.
pub const RPC_TIMEOUT: Duration = Duration::from_secs(20);
