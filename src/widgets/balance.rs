//! Token balance display widget.
//!
//! Shows a settled balance as `"<amount> <symbol>"`, or a spinner next to the
//! token's own symbol while the balance is still loading.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Widget,
};

use crate::domain::{Amount, AsyncValue, Token, format_token_amount};
use crate::theme::{AMOUNT_STYLE, LABEL_STYLE, WARNING_COLOR};
use crate::widgets::spinner::Spinner;

// ============================================================================
// Balance View
// ============================================================================

/// What a [`BalanceDisplay`] shows, independent of styling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BalanceView {
    /// Loading indicator followed by the token symbol.
    Loading { symbol: String },
    /// Formatted amount with the display symbol.
    Amount(String),
}

// ============================================================================
// BalanceDisplay Widget
// ============================================================================

/// A token's balance on one chain.
///
/// # Example
///
/// ```text
/// 1,204.5 USDC
/// ⠙ ETH
/// ```
#[derive(Debug, Clone)]
pub struct BalanceDisplay<'a> {
    chain_key: &'a str,
    token: &'a Token,
    spinner_size: u16,
    style: Style,
    tick: u64,
}

impl<'a> BalanceDisplay<'a> {
    #[must_use]
    pub const fn new(chain_key: &'a str, token: &'a Token) -> Self {
        Self {
            chain_key,
            token,
            spinner_size: 1,
            style: AMOUNT_STYLE,
            tick: 0,
        }
    }

    /// Width of the loading indicator in glyph cells.
    #[must_use]
    pub const fn spinner_size(mut self, size: u16) -> Self {
        self.spinner_size = size;
        self
    }

    /// Style for the settled amount text.
    #[must_use]
    pub const fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    /// Animation tick driving the spinner.
    #[must_use]
    pub const fn tick(mut self, tick: u64) -> Self {
        self.tick = tick;
        self
    }

    /// Decides what to show for the token's current balance state.
    ///
    /// A failed load shows zero. The error itself is logged where the
    /// balance was fetched and never reaches the view.
    #[must_use]
    pub fn view(&self) -> BalanceView {
        let zero = Amount::zero();
        let amount = match &self.token.balance {
            None
            | Some(AsyncValue::Pending | AsyncValue::Loading | AsyncValue::Reloading(_)) => {
                return BalanceView::Loading {
                    symbol: self.token.symbol.clone(),
                };
            }
            Some(AsyncValue::Successful(amount)) => amount,
            Some(AsyncValue::Failed(_)) => &zero,
        };

        BalanceView::Amount(format!(
            "{} {}",
            format_token_amount(amount, self.token),
            self.token.display_symbol(self.chain_key)
        ))
    }

    /// Get the styled line for rendering this balance.
    #[must_use]
    pub fn to_line(&self) -> Line<'static> {
        match self.view() {
            BalanceView::Loading { symbol } => Line::from(vec![
                Spinner::new(self.tick, self.spinner_size)
                    .to_span(Style::default().fg(WARNING_COLOR)),
                Span::raw(" "),
                Span::styled(symbol, LABEL_STYLE),
            ]),
            BalanceView::Amount(text) => Line::from(Span::styled(text, self.style)),
        }
    }
}

impl Widget for &BalanceDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 {
            return;
        }
        self.to_line().render(area, buf);
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{TokenMother, units};
    use rstest::rstest;

    fn line_text(line: &Line<'_>) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[rstest]
    #[case::absent(None)]
    #[case::pending(Some(AsyncValue::Pending))]
    #[case::loading(Some(AsyncValue::Loading))]
    #[case::reloading_empty(Some(AsyncValue::Reloading(None)))]
    #[case::reloading_cached(Some(AsyncValue::Reloading(Some(units("3", 18)))))]
    fn test_unsettled_balance_shows_loading(#[case] balance: Option<AsyncValue<Amount>>) {
        let token = Token {
            balance,
            ..TokenMother::eth()
        };
        let display = BalanceDisplay::new("ethereum", &token);

        assert_eq!(
            display.view(),
            BalanceView::Loading {
                symbol: "ETH".to_string()
            }
        );
        assert!(!line_text(&display.to_line()).contains('3'));
    }

    #[test]
    fn test_loading_uses_token_symbol_off_primary_chain() {
        let token = TokenMother::eth_with(AsyncValue::Loading);
        let display = BalanceDisplay::new("polygon", &token);

        assert_eq!(
            display.view(),
            BalanceView::Loading {
                symbol: "ETH".to_string()
            }
        );
    }

    #[test]
    fn test_failed_balance_shows_zero_without_error() {
        let token = TokenMother::eth_with(AsyncValue::Failed("rpc timeout".to_string()));
        let display = BalanceDisplay::new("ethereum", &token);

        assert_eq!(display.view(), BalanceView::Amount("0 ETH".to_string()));
        assert!(!line_text(&display.to_line()).contains("timeout"));
    }

    #[rstest]
    #[case::primary("ethereum", "1.5 ETH")]
    #[case::polygon("polygon", "1.5 MORE")]
    #[case::other("arbitrum", "1.5 MORE")]
    fn test_native_symbol_depends_on_chain(#[case] chain: &str, #[case] expected: &str) {
        let token = TokenMother::eth_with(AsyncValue::Successful(units("1.5", 18)));
        let display = BalanceDisplay::new(chain, &token);

        assert_eq!(display.view(), BalanceView::Amount(expected.to_string()));
    }

    #[test]
    fn test_contract_token_symbol_unchanged() {
        let token = TokenMother::usdc().with_balance(AsyncValue::Successful(units("1204.5", 6)));
        let display = BalanceDisplay::new("polygon", &token);

        assert_eq!(
            display.view(),
            BalanceView::Amount("1,204.5 USDC".to_string())
        );
    }

    #[test]
    fn test_loading_line_snapshot() {
        let token = TokenMother::eth_with(AsyncValue::Loading);
        let display = BalanceDisplay::new("ethereum", &token)
            .spinner_size(2)
            .tick(4);

        insta::assert_snapshot!(line_text(&display.to_line()), @"⠼⠴ ETH");
    }

    #[test]
    fn test_renders_into_buffer() {
        let token = TokenMother::eth_with(AsyncValue::Successful(units("2.5", 18)));
        let display = BalanceDisplay::new("polygon", &token);
        let area = Rect::new(0, 0, 12, 1);
        let mut buf = Buffer::empty(area);

        (&display).render(area, &mut buf);

        let rendered: String = (0..area.width).map(|x| buf[(x, 0)].symbol()).collect();
        assert_eq!(rendered, "2.5 MORE    ");
    }
}
