//! App-level flow tests: route guard, transfer form, confirmation outcomes.

use super::*;
use crate::client::{SandboxBridge, SandboxWallet, WalletBackend};
use crate::commands::AppCommand;
use crate::domain::{AsyncValue, ChainId};
use crate::test_utils::{TransferMother, sandbox_account, sandbox_app, settle, units};

fn sandbox_wallet(app: &App) -> SandboxWallet {
    match &app.backends.wallet {
        WalletBackend::Sandbox(wallet) => wallet.clone(),
        WalletBackend::Rpc(_) => panic!("test app should use the sandbox wallet"),
    }
}

fn type_amount(app: &mut App, amount: &str) {
    for c in amount.chars() {
        app.execute_command(AppCommand::TypeChar(c));
    }
}

/// Boots the app and opens the confirmation screen for 1.5 ETH to Polygon.
async fn app_on_confirmation(wallet_network: ChainId) -> App {
    let mut app = sandbox_app();
    app.start_background_tasks();
    app.refresh_account();
    settle(&mut app).await;

    sandbox_wallet(&app).set_network(Some(wallet_network));
    settle(&mut app).await;

    app.execute_command(AppCommand::Select);
    type_amount(&mut app, "1.5");
    app.execute_command(AppCommand::SubmitForm);
    settle(&mut app).await;

    assert_eq!(app.nav.route(), Route::TransferConfirmation);
    app
}

// ============================================================================
// Startup
// ============================================================================

#[tokio::test]
async fn test_startup_loads_account_and_balances() {
    let mut app = sandbox_app();
    app.start_background_tasks();
    app.refresh_account();
    settle(&mut app).await;

    assert_eq!(app.data.account, AsyncValue::Successful(sandbox_account()));
    assert_eq!(app.data.connected_network, Some(ChainId(1)));
    assert_eq!(
        app.data.balance("ethereum", "ETH"),
        Some(&AsyncValue::Successful(units("2.5", 18)))
    );
    assert_eq!(
        app.data.balance("polygon", "USDC"),
        Some(&AsyncValue::Successful(units("1", 6)))
    );

    let tokens = app.home_tokens();
    assert_eq!(tokens.len(), 2);
    assert!(tokens.iter().all(|t| t.balance.as_ref().is_some_and(AsyncValue::is_settled)));
}

#[tokio::test]
async fn test_refresh_moves_balances_to_reloading() {
    let mut app = sandbox_app();
    app.refresh_account();
    settle(&mut app).await;

    app.execute_command(AppCommand::Refresh);
    assert_eq!(
        app.data.balance("ethereum", "ETH"),
        Some(&AsyncValue::Reloading(Some(units("2.5", 18))))
    );

    settle(&mut app).await;
    assert!(app.data.balance("ethereum", "ETH").is_some_and(AsyncValue::is_settled));
}

// ============================================================================
// Route Guard
// ============================================================================

#[test]
fn test_confirmation_without_transaction_redirects_home() {
    let mut app = sandbox_app();
    app.nav.navigate_to(Route::TransferConfirmation);

    app.process_messages();

    assert_eq!(app.nav.route(), Route::Home);
}

#[test]
fn test_confirm_without_transaction_is_noop() {
    let mut app = sandbox_app();
    app.execute_command(AppCommand::Confirm);
    assert_eq!(app.confirmation.phase(), ConfirmationPhase::Unverified);
    assert_eq!(app.nav.route(), Route::Home);
}

// ============================================================================
// Transfer Form
// ============================================================================

#[test]
fn test_form_requires_account() {
    let mut app = sandbox_app();
    app.execute_command(AppCommand::Select);
    type_amount(&mut app, "1");
    app.execute_command(AppCommand::SubmitForm);

    let form = app.ui.transfer_form_mut().expect("form should stay open");
    assert_eq!(form.error.as_deref(), Some("Wallet not connected"));
    assert!(!form.estimating);
}

#[tokio::test]
async fn test_form_rejects_bad_amount() {
    let mut app = sandbox_app();
    app.refresh_account();
    settle(&mut app).await;

    app.execute_command(AppCommand::Select);
    type_amount(&mut app, "0");
    app.execute_command(AppCommand::SubmitForm);

    let form = app.ui.transfer_form_mut().expect("form should stay open");
    assert!(form.error.as_deref().is_some_and(|e| e.contains("greater than zero")));
    assert_eq!(app.get_input_context(), crate::commands::InputContext::TransferForm);
}

#[tokio::test]
async fn test_form_submit_stores_pending_transaction() {
    let app = app_on_confirmation(ChainId(1)).await;

    let pending = app.transactions.get().expect("transfer should be pending");
    assert_eq!(pending.amount, units("1.5", 18));
    assert_eq!(pending.from.key, "ethereum");
    assert_eq!(pending.to.key, "polygon");
    assert_eq!(pending.estimated_fee, units("0.0015", 18));
    assert!(!app.ui.has_active_popup());
    assert_eq!(app.confirmation.phase(), ConfirmationPhase::Ready);
}

#[tokio::test]
async fn test_cancelled_form_ignores_late_fee_estimate() {
    let mut app = sandbox_app();
    app.refresh_account();
    settle(&mut app).await;

    app.execute_command(AppCommand::Select);
    type_amount(&mut app, "1");
    app.execute_command(AppCommand::SubmitForm);
    app.execute_command(AppCommand::Dismiss);
    settle(&mut app).await;

    assert_eq!(app.nav.route(), Route::Home);
    assert!(app.transactions.is_empty());
    assert!(!app.ui.has_active_popup());
}

// ============================================================================
// Confirmation
// ============================================================================

#[tokio::test]
async fn test_switch_and_submit_navigates_to_activity() {
    let mut app = app_on_confirmation(ChainId(137)).await;
    assert_eq!(app.confirmation.phase(), ConfirmationPhase::WrongNetwork);

    app.execute_command(AppCommand::Confirm);
    settle(&mut app).await;

    let submissions = app.backends.bridge.submissions();
    assert_eq!(submissions.len(), 1);
    assert_eq!(submissions[0].destination_address, sandbox_account());
    assert_eq!(app.nav.route(), Route::Activity);
    assert!(app.transactions.is_empty());
    assert_eq!(app.data.activity.len(), 1);
    assert_eq!(app.data.connected_network, Some(ChainId(1)));
    assert_eq!(
        app.ui.toast.as_ref().map(|(msg, _)| msg.as_str()),
        Some("[+] Transfer submitted")
    );
}

#[tokio::test]
async fn test_double_confirm_submits_once() {
    let mut app = app_on_confirmation(ChainId(1)).await;

    app.execute_command(AppCommand::Confirm);
    assert!(app.confirmation.is_submitting());
    app.execute_command(AppCommand::Confirm);
    settle(&mut app).await;

    assert_eq!(app.backends.bridge.submissions().len(), 1);
    assert_eq!(app.data.activity.len(), 1);
}

#[tokio::test]
async fn test_rejected_switch_shows_message_until_wallet_moves() {
    let mut app = app_on_confirmation(ChainId(137)).await;
    let wallet = sandbox_wallet(&app);
    wallet.set_reject_switch(true);

    app.execute_command(AppCommand::Confirm);
    settle(&mut app).await;

    assert_eq!(app.nav.route(), Route::TransferConfirmation);
    assert_eq!(
        app.confirmation.mismatch_message(),
        Some("Switch to Ethereum to continue")
    );
    assert!(app.backends.bridge.submissions().is_empty());

    // The user switches by hand; the watch channel triggers a re-check.
    wallet.set_network(Some(ChainId(1)));
    settle(&mut app).await;

    assert_eq!(app.confirmation.phase(), ConfirmationPhase::Ready);
    assert!(app.confirmation.mismatch_message().is_none());
}

#[tokio::test]
async fn test_bridge_failure_reaches_view() {
    let config = AppConfig::default();
    let backends = Backends::sandbox(&config);
    let backends = Backends::new(
        backends.wallet.clone(),
        config
            .chains
            .iter()
            .filter_map(|c| backends.chain(&c.key).map(|b| (c.key.clone(), b.clone())))
            .collect(),
        SandboxBridge::new().failing("relayer offline"),
    );
    let mut app = App::with_backends(config, backends);
    app.refresh_account();
    settle(&mut app).await;

    app.transactions.set(TransferMother::eth_to_polygon());
    app.nav.navigate_to(Route::TransferConfirmation);
    app.execute_command(AppCommand::Confirm);
    settle(&mut app).await;

    assert_eq!(app.nav.route(), Route::TransferConfirmation);
    assert_eq!(app.confirmation.phase(), ConfirmationPhase::Ready);
    assert!(
        app.confirmation
            .last_error()
            .is_some_and(|e| e.contains("relayer offline"))
    );
    assert!(
        app.ui
            .toast
            .as_ref()
            .is_some_and(|(msg, _)| msg.starts_with("[x] Transfer failed"))
    );
    assert!(!app.transactions.is_empty());
}

// ============================================================================
// Navigation
// ============================================================================

#[test]
fn test_input_context_follows_route_and_popup() {
    use crate::commands::InputContext;

    let mut app = sandbox_app();
    assert_eq!(app.get_input_context(), InputContext::Home);

    app.execute_command(AppCommand::OpenActivity);
    assert_eq!(app.get_input_context(), InputContext::Activity);

    app.execute_command(AppCommand::RequestQuit);
    assert_eq!(app.get_input_context(), InputContext::ConfirmQuit);
    app.execute_command(AppCommand::Dismiss);
    assert_eq!(app.get_input_context(), InputContext::Activity);

    app.execute_command(AppCommand::Dismiss);
    assert_eq!(app.nav.route(), Route::Home);

    app.execute_command(AppCommand::ConfirmQuit);
    assert!(app.exit);
}

#[test]
fn test_cycle_source_chain_changes_home_tokens() {
    let mut app = sandbox_app();
    assert_eq!(app.source_chain().map(|c| c.key.as_str()), Some("ethereum"));
    assert!(app.home_tokens()[0].is_native());

    app.execute_command(AppCommand::CycleSourceChain);
    assert_eq!(app.source_chain().map(|c| c.key.as_str()), Some("polygon"));
    assert!(app.home_tokens().iter().all(|t| !t.is_native()));
}
