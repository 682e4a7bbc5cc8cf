//! Shared test utilities and Mother pattern factories.
//!
//! Use these helpers to avoid copy-pasting setup code across tests.
#![allow(dead_code)]

use chrono::{TimeZone, Utc};
use ratatui::{Terminal, backend::TestBackend};
use rstest::fixture;

use crate::client::sandbox::SANDBOX_ACCOUNT;
use crate::domain::{
    Address, Amount, AsyncValue, ChainDescriptor, PendingTransaction, Token, TransferReceipt,
    parse_units,
};
use crate::state::{App, AppConfig, Backends};

// ============================================================================
// Mother Pattern Factories
// ============================================================================

/// The account the sandbox wallet reports.
#[must_use]
pub fn sandbox_account() -> Address {
    Address::parse(SANDBOX_ACCOUNT).expect("sandbox account should be valid")
}

/// Parses `value` in units of `decimals`.
#[must_use]
pub fn units(value: &str, decimals: u8) -> Amount {
    parse_units(value, decimals).expect("test amount should parse")
}

pub struct ChainMother;

impl ChainMother {
    #[must_use]
    pub fn ethereum() -> ChainDescriptor {
        ChainDescriptor::new("ethereum", "Ethereum", 1, "sandbox://ethereum")
            .with_explorer("https://etherscan.io")
    }

    #[must_use]
    pub fn polygon() -> ChainDescriptor {
        ChainDescriptor::new("polygon", "Polygon", 137, "sandbox://polygon")
            .with_explorer("https://polygonscan.com")
    }

    /// A chain with no explorer.
    #[must_use]
    pub fn local() -> ChainDescriptor {
        ChainDescriptor::new("local", "Local", 31337, "http://127.0.0.1:8545")
    }
}

pub struct TokenMother;

impl TokenMother {
    #[must_use]
    pub fn eth() -> Token {
        Token::native("ETH", 18)
    }

    #[must_use]
    pub fn usdc() -> Token {
        let address = Address::parse("0xA0b86991c6218b36c1d19D4a2e9Eb0cE3606eB48")
            .expect("USDC address should be valid");
        Token {
            logo_uri: Some("https://example.invalid/usdc.png".to_string()),
            ..Token::erc20("USDC", 6, address)
        }
    }

    #[must_use]
    pub fn eth_with(balance: AsyncValue<Amount>) -> Token {
        Self::eth().with_balance(balance)
    }
}

pub struct TransferMother;

impl TransferMother {
    /// 1.5 ETH from Ethereum to Polygon with a 0.0015 ETH fee.
    #[must_use]
    pub fn eth_to_polygon() -> PendingTransaction {
        PendingTransaction {
            token: TokenMother::eth(),
            amount: units("1.5", 18),
            from: ChainMother::ethereum(),
            to: ChainMother::polygon(),
            estimated_fee: units("0.0015", 18),
        }
    }

    /// 250 USDC from Polygon to Ethereum.
    #[must_use]
    pub fn usdc_to_ethereum() -> PendingTransaction {
        PendingTransaction {
            token: TokenMother::usdc(),
            amount: units("250", 6),
            from: ChainMother::polygon(),
            to: ChainMother::ethereum(),
            estimated_fee: units("0.25", 6),
        }
    }

    /// Receipt for [`TransferMother::eth_to_polygon`].
    #[must_use]
    pub fn receipt() -> TransferReceipt {
        TransferReceipt {
            request: Self::eth_to_polygon().to_request(sandbox_account()),
            tx_hash: format!("0x{:064x}", 1),
            submitted_at: Utc
                .with_ymd_and_hms(2024, 5, 1, 12, 30, 0)
                .single()
                .expect("timestamp should be valid"),
        }
    }
}

// ============================================================================
// App Helpers
// ============================================================================

/// App on the default configuration with zero-latency sandbox backends.
#[must_use]
pub fn sandbox_app() -> App {
    let config = AppConfig::default();
    let backends = Backends::sandbox(&config);
    App::with_backends(config, backends)
}

/// Lets spawned tasks run and folds their messages into `app`.
///
/// Requires a current-thread tokio runtime (`#[tokio::test]`).
pub async fn settle(app: &mut App) {
    for _ in 0..16 {
        tokio::task::yield_now().await;
        app.process_messages();
    }
}

// ============================================================================
// rstest Fixtures
// ============================================================================

#[fixture]
pub fn test_terminal() -> Terminal<TestBackend> {
    Terminal::new(TestBackend::new(100, 40)).expect("terminal creation should succeed")
}

#[fixture]
pub fn test_terminal_80x24() -> Terminal<TestBackend> {
    Terminal::new(TestBackend::new(80, 24)).expect("terminal creation should succeed")
}

#[fixture]
pub fn app() -> App {
    sandbox_app()
}

/// Renders the whole buffer of `terminal` into one string per row.
#[must_use]
pub fn buffer_lines(terminal: &Terminal<TestBackend>) -> Vec<String> {
    let buffer = terminal.backend().buffer();
    let area = buffer.area;
    (0..area.height)
        .map(|y| {
            (0..area.width)
                .map(|x| buffer[(x, y)].symbol())
                .collect::<String>()
        })
        .collect()
}

/// Returns `true` if any row of `terminal` contains `needle`.
#[must_use]
pub fn buffer_contains(terminal: &Terminal<TestBackend>, needle: &str) -> bool {
    buffer_lines(terminal).iter().any(|line| line.contains(needle))
}
