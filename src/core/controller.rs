//! Wallet connection controller.
//!
//! Owns the connection state and serializes every transition through
//! explicit calls. Collaborators (provider handle, notification sink)
//! are injected at construction so tests can supply fakes instead of
//! relying on the browser globals.

use std::cell::Cell;
use std::rc::Rc;

use leptos::logging;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::config::{WALLET_INSTALL_URL, messages};
use crate::core::error::ProviderError;
use crate::core::notify::Notify;
use crate::core::provider::WalletProvider;
use crate::models::{AccountsChange, ButtonAction, ButtonView, Notification, WalletState};
use crate::utils::dom;

/// The single controller instance behind the connect button.
///
/// Cloning is cheap (signal + `Rc` handles) and every clone shares the
/// same state, so event closures can carry one around freely.
#[derive(Clone)]
pub struct WalletController {
    state: RwSignal<WalletState>,
    provider: Option<Rc<dyn WalletProvider>>,
    notifier: Rc<dyn Notify>,
    subscribed: Rc<Cell<bool>>,
}

impl WalletController {
    pub fn new(provider: Option<Rc<dyn WalletProvider>>, notifier: Rc<dyn Notify>) -> Self {
        Self {
            state: RwSignal::new(WalletState::default()),
            provider,
            notifier,
            subscribed: Rc::new(Cell::new(false)),
        }
    }

    /// The connection state signal, for reactive view derivation.
    pub fn state(&self) -> RwSignal<WalletState> {
        self.state
    }

    pub fn has_provider(&self) -> bool {
        self.provider.is_some()
    }

    /// Silent startup check for an already-authorized account.
    ///
    /// Uses the non-interactive query; a failure here is logged and
    /// otherwise ignored, leaving the state disconnected.
    pub async fn check_connection(&self) {
        let Some(provider) = self.provider.clone() else {
            return;
        };
        match provider.authorized_accounts().await {
            Ok(accounts) => {
                if let Some(address) = accounts.first() {
                    self.state.set(WalletState::Connected {
                        address: address.clone(),
                    });
                }
            }
            Err(error) => {
                logging::error!("{}{}", messages::CHECK_FAILED_PREFIX, error);
            }
        }
    }

    /// Interactive authorization request.
    ///
    /// Without a provider this degrades to the install prompt. A
    /// successful response with an empty account list is a silent
    /// no-op.
    pub async fn connect(&self) {
        let Some(provider) = self.provider.clone() else {
            dom::alert(messages::INSTALL_PROMPT);
            dom::open_in_new_tab(WALLET_INSTALL_URL);
            return;
        };
        match provider.request_accounts().await {
            Ok(accounts) => {
                let Some(address) = accounts.first() else {
                    return;
                };
                self.state.set(WalletState::Connected {
                    address: address.clone(),
                });
                self.notifier.notify(Notification::success(messages::CONNECTED));
                self.subscribe_provider_events(&provider);
            }
            Err(ProviderError::UserRejected) => {
                self.notifier.notify(Notification::error(messages::REJECTED));
            }
            Err(error) => {
                self.notifier.notify(Notification::error(format!(
                    "{}{}",
                    messages::CONNECT_FAILED_PREFIX,
                    error
                )));
            }
        }
    }

    /// Forget the cached address. Local UI action only: providers
    /// expose no disconnect RPC.
    pub fn disconnect(&self) {
        self.state.set(WalletState::Disconnected);
        self.notifier.notify(Notification::info(messages::DISCONNECTED));
    }

    /// Provider-originated `accountsChanged` event.
    pub fn handle_accounts_changed(&self, accounts: Vec<String>) {
        let current = self.state.get_untracked();
        match AccountsChange::classify(current.address(), &accounts) {
            AccountsChange::Cleared => self.disconnect(),
            AccountsChange::Adopted(address) => {
                self.state.set(WalletState::Connected { address });
                self.notifier
                    .notify(Notification::info(messages::ACCOUNT_CHANGED));
            }
            AccountsChange::Unchanged => {}
        }
    }

    /// Single click handler: the action is chosen from the current
    /// state, never stored on the element.
    pub fn dispatch_click(&self) {
        let view = ButtonView::derive(&self.state.get_untracked(), self.has_provider());
        match view.action {
            ButtonAction::Install => {
                dom::open_in_new_tab(WALLET_INSTALL_URL);
            }
            ButtonAction::Connect => {
                let controller = self.clone();
                spawn_local(async move { controller.connect().await });
            }
            ButtonAction::Disconnect => self.disconnect(),
        }
    }

    /// Subscribe to provider events, once.
    ///
    /// Account changes resync the cached state; a chain change is a
    /// trust-boundary change, answered with a full page reload.
    fn subscribe_provider_events(&self, provider: &Rc<dyn WalletProvider>) {
        if self.subscribed.get() {
            return;
        }
        let controller = self.clone();
        let accounts = provider.on_accounts_changed(Box::new(move |accounts| {
            controller.handle_accounts_changed(accounts);
        }));
        let chain = provider.on_chain_changed(Box::new(|_chain_id| dom::reload()));
        match (accounts, chain) {
            (Ok(()), Ok(())) => self.subscribed.set(true),
            _ => logging::warn!("wallet event subscription failed"),
        }
    }

    /// Drop provider listeners, for unmount.
    pub fn teardown(&self) {
        if let Some(provider) = &self.provider {
            provider.unsubscribe_all();
        }
        self.subscribed.set(false);
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use async_trait::async_trait;

    use super::*;
    use crate::core::provider::{AccountsCallback, ChainCallback};
    use crate::models::Severity;

    /// In-memory provider: canned responses, recorded listeners.
    struct FakeProvider {
        authorized: Result<Vec<String>, ProviderError>,
        interactive: Result<Vec<String>, ProviderError>,
        interactive_calls: Cell<usize>,
        accounts_listeners: RefCell<Vec<AccountsCallback>>,
        chain_listeners: RefCell<Vec<ChainCallback>>,
    }

    impl FakeProvider {
        fn new(
            authorized: Result<Vec<String>, ProviderError>,
            interactive: Result<Vec<String>, ProviderError>,
        ) -> Rc<Self> {
            Rc::new(Self {
                authorized,
                interactive,
                interactive_calls: Cell::new(0),
                accounts_listeners: RefCell::new(Vec::new()),
                chain_listeners: RefCell::new(Vec::new()),
            })
        }

        fn emit_accounts_changed(&self, accounts: Vec<String>) {
            for listener in self.accounts_listeners.borrow().iter() {
                listener(accounts.clone());
            }
        }
    }

    #[async_trait(?Send)]
    impl WalletProvider for FakeProvider {
        async fn authorized_accounts(&self) -> Result<Vec<String>, ProviderError> {
            self.authorized.clone()
        }

        async fn request_accounts(&self) -> Result<Vec<String>, ProviderError> {
            self.interactive_calls.set(self.interactive_calls.get() + 1);
            self.interactive.clone()
        }

        fn on_accounts_changed(&self, callback: AccountsCallback) -> Result<(), ProviderError> {
            self.accounts_listeners.borrow_mut().push(callback);
            Ok(())
        }

        fn on_chain_changed(&self, callback: ChainCallback) -> Result<(), ProviderError> {
            self.chain_listeners.borrow_mut().push(callback);
            Ok(())
        }

        fn unsubscribe_all(&self) {
            self.accounts_listeners.borrow_mut().clear();
            self.chain_listeners.borrow_mut().clear();
        }
    }

    #[derive(Default)]
    struct RecordingNotifier {
        sent: RefCell<Vec<Notification>>,
    }

    impl Notify for RecordingNotifier {
        fn notify(&self, notification: Notification) {
            self.sent.borrow_mut().push(notification);
        }
    }

    fn controller_with(
        provider: Rc<FakeProvider>,
    ) -> (WalletController, Rc<RecordingNotifier>) {
        let notifier = Rc::new(RecordingNotifier::default());
        let controller = WalletController::new(Some(provider), notifier.clone());
        (controller, notifier)
    }

    const ADDRESS: &str = "0x1234567890abcdef1234567890abcdef12345678";

    #[tokio::test]
    async fn check_connection_adopts_authorized_account() {
        let provider = FakeProvider::new(Ok(vec![ADDRESS.to_string()]), Ok(vec![]));
        let (controller, notifier) = controller_with(provider);

        controller.check_connection().await;

        assert_eq!(controller.state().get_untracked().address(), Some(ADDRESS));
        // Silent: the startup path never notifies.
        assert!(notifier.sent.borrow().is_empty());
    }

    #[tokio::test]
    async fn check_connection_failure_is_silent() {
        let provider = FakeProvider::new(
            Err(ProviderError::Rpc("provider unavailable".to_string())),
            Ok(vec![]),
        );
        let (controller, notifier) = controller_with(provider);

        controller.check_connection().await;

        assert_eq!(controller.state().get_untracked(), WalletState::Disconnected);
        assert!(notifier.sent.borrow().is_empty());
    }

    #[tokio::test]
    async fn connect_success_notifies_once_and_subscribes() {
        let provider = FakeProvider::new(Ok(vec![]), Ok(vec![ADDRESS.to_string()]));
        let (controller, notifier) = controller_with(provider.clone());

        controller.connect().await;

        assert_eq!(controller.state().get_untracked().address(), Some(ADDRESS));
        let sent = notifier.sent.borrow();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].severity(), Severity::Success);
        assert_eq!(sent[0].message(), "Carteira conectada com sucesso!");
        assert_eq!(provider.accounts_listeners.borrow().len(), 1);
        assert_eq!(provider.chain_listeners.borrow().len(), 1);
    }

    #[tokio::test]
    async fn connect_twice_subscribes_once() {
        let provider = FakeProvider::new(Ok(vec![]), Ok(vec![ADDRESS.to_string()]));
        let (controller, _notifier) = controller_with(provider.clone());

        controller.connect().await;
        controller.connect().await;

        assert_eq!(provider.interactive_calls.get(), 2);
        assert_eq!(provider.accounts_listeners.borrow().len(), 1);
        assert_eq!(provider.chain_listeners.borrow().len(), 1);
    }

    #[tokio::test]
    async fn connect_with_empty_account_list_is_a_noop() {
        let provider = FakeProvider::new(Ok(vec![]), Ok(vec![]));
        let (controller, notifier) = controller_with(provider.clone());

        controller.connect().await;

        assert_eq!(controller.state().get_untracked(), WalletState::Disconnected);
        assert!(notifier.sent.borrow().is_empty());
        assert!(provider.accounts_listeners.borrow().is_empty());
    }

    #[tokio::test]
    async fn connect_rejection_shows_fixed_message() {
        let provider = FakeProvider::new(Ok(vec![]), Err(ProviderError::UserRejected));
        let (controller, notifier) = controller_with(provider);

        controller.connect().await;

        assert_eq!(controller.state().get_untracked(), WalletState::Disconnected);
        let sent = notifier.sent.borrow();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].severity(), Severity::Error);
        assert_eq!(sent[0].message(), "Conexão rejeitada pelo usuário.");
    }

    #[tokio::test]
    async fn connect_failure_carries_error_text() {
        let provider = FakeProvider::new(
            Ok(vec![]),
            Err(ProviderError::Rpc("Already processing.".to_string())),
        );
        let (controller, notifier) = controller_with(provider);

        controller.connect().await;

        let sent = notifier.sent.borrow();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].severity(), Severity::Error);
        assert_eq!(
            sent[0].message(),
            "Erro ao conectar carteira: Already processing."
        );
    }

    #[tokio::test]
    async fn click_while_connected_disconnects_without_provider_call() {
        let provider = FakeProvider::new(Ok(vec![]), Ok(vec![ADDRESS.to_string()]));
        let (controller, notifier) = controller_with(provider.clone());
        controller.connect().await;
        let calls_before = provider.interactive_calls.get();

        controller.dispatch_click();

        assert_eq!(controller.state().get_untracked(), WalletState::Disconnected);
        assert_eq!(provider.interactive_calls.get(), calls_before);
        let sent = notifier.sent.borrow();
        assert_eq!(sent.last().unwrap().severity(), Severity::Info);
        assert_eq!(sent.last().unwrap().message(), "Carteira desconectada.");
    }

    #[tokio::test]
    async fn accounts_changed_empty_event_disconnects() {
        let provider = FakeProvider::new(Ok(vec![]), Ok(vec![ADDRESS.to_string()]));
        let (controller, notifier) = controller_with(provider.clone());
        controller.connect().await;

        provider.emit_accounts_changed(vec![]);

        assert_eq!(controller.state().get_untracked(), WalletState::Disconnected);
        assert_eq!(sent_messages(&notifier).last().unwrap(), "Carteira desconectada.");
    }

    #[tokio::test]
    async fn accounts_changed_same_account_is_silent() {
        let provider = FakeProvider::new(Ok(vec![]), Ok(vec![ADDRESS.to_string()]));
        let (controller, notifier) = controller_with(provider.clone());
        controller.connect().await;
        let sent_before = notifier.sent.borrow().len();

        provider.emit_accounts_changed(vec![ADDRESS.to_string()]);

        assert_eq!(controller.state().get_untracked().address(), Some(ADDRESS));
        assert_eq!(notifier.sent.borrow().len(), sent_before);
    }

    #[tokio::test]
    async fn accounts_changed_new_account_is_adopted() {
        let provider = FakeProvider::new(Ok(vec![]), Ok(vec![ADDRESS.to_string()]));
        let (controller, notifier) = controller_with(provider.clone());
        controller.connect().await;

        provider.emit_accounts_changed(vec!["0xBEEF".to_string()]);

        assert_eq!(controller.state().get_untracked().address(), Some("0xBEEF"));
        assert_eq!(sent_messages(&notifier).last().unwrap(), "Conta alterada.");
    }

    #[tokio::test]
    async fn teardown_drops_provider_listeners() {
        let provider = FakeProvider::new(Ok(vec![]), Ok(vec![ADDRESS.to_string()]));
        let (controller, _notifier) = controller_with(provider.clone());
        controller.connect().await;
        assert_eq!(provider.accounts_listeners.borrow().len(), 1);

        controller.teardown();

        assert!(provider.accounts_listeners.borrow().is_empty());
        assert!(provider.chain_listeners.borrow().is_empty());
    }

    fn sent_messages(notifier: &RecordingNotifier) -> Vec<String> {
        notifier
            .sent
            .borrow()
            .iter()
            .map(|n| n.message().to_string())
            .collect()
    }
}
