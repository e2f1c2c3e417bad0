//! Wallet provider abstraction and its EIP-1193 implementation.
//!
//! [`WalletProvider`] captures the collaborator surface the controller
//! needs: the two account calls plus observer registration for the two
//! provider events. The production implementation wraps the
//! browser-injected provider object through direct JavaScript interop
//! via the Reflect API; tests supply an in-memory fake.

use std::cell::RefCell;
use std::rc::Rc;

use async_trait::async_trait;
use js_sys::{Array, Function, Object, Promise, Reflect};
use serde::Serialize;
use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen::prelude::Closure;
use wasm_bindgen_futures::JsFuture;

use crate::core::error::ProviderError;
use crate::utils::dom;

/// Callback for `accountsChanged`: the ordered list of authorized
/// addresses, possibly empty.
pub type AccountsCallback = Box<dyn Fn(Vec<String>)>;

/// Callback for `chainChanged`: the new chain id as a hex string.
pub type ChainCallback = Box<dyn Fn(String)>;

/// The provider surface the controller depends on.
///
/// Registered observers stay alive until [`WalletProvider::unsubscribe_all`],
/// so the controller can tear listeners down if it is ever unmounted.
#[async_trait(?Send)]
pub trait WalletProvider {
    /// Query already-authorized accounts (`eth_accounts`). Never prompts.
    async fn authorized_accounts(&self) -> Result<Vec<String>, ProviderError>;

    /// Request authorization (`eth_requestAccounts`). May prompt the
    /// user and fails with [`ProviderError::UserRejected`] on dismissal.
    async fn request_accounts(&self) -> Result<Vec<String>, ProviderError>;

    /// Register an observer for `accountsChanged`.
    fn on_accounts_changed(&self, callback: AccountsCallback) -> Result<(), ProviderError>;

    /// Register an observer for `chainChanged`.
    fn on_chain_changed(&self, callback: ChainCallback) -> Result<(), ProviderError>;

    /// Drop every observer registered through this handle.
    fn unsubscribe_all(&self);
}

/// Locate the injected provider.
///
/// Probes `window.ethereum` first, then the legacy
/// `window.web3.currentProvider` binding. Absence is a normal outcome,
/// not a failure; the only side effect is wrapping the reference.
pub fn detect() -> Option<Rc<dyn WalletProvider>> {
    let raw = injected_provider()?;
    Some(Rc::new(EthereumProvider::new(raw)))
}

fn injected_provider() -> Option<Object> {
    let window = dom::window()?;
    if let Ok(value) = Reflect::get(&window, &"ethereum".into())
        && let Ok(object) = value.dyn_into::<Object>()
    {
        return Some(object);
    }
    let web3 = Reflect::get(&window, &"web3".into()).ok()?;
    let legacy = Reflect::get(&web3, &"currentProvider".into()).ok()?;
    legacy.dyn_into::<Object>().ok()
}

/// Shape of the single argument to `provider.request`.
#[derive(Serialize)]
struct RequestArguments<'a> {
    method: &'a str,
}

/// A registered provider listener, kept so it can be removed later.
struct ListenerHandle {
    event: &'static str,
    closure: Closure<dyn Fn(JsValue)>,
}

/// [`WalletProvider`] backed by the browser-injected EIP-1193 object.
pub struct EthereumProvider {
    raw: Object,
    listeners: RefCell<Vec<ListenerHandle>>,
}

impl EthereumProvider {
    pub fn new(raw: Object) -> Self {
        Self {
            raw,
            listeners: RefCell::new(Vec::new()),
        }
    }

    /// Call `provider.request({ method })` and await the promise.
    async fn request(&self, method: &str) -> Result<JsValue, ProviderError> {
        let args = serde_wasm_bindgen::to_value(&RequestArguments { method })
            .map_err(|_| ProviderError::Interface)?;

        let request = Reflect::get(&self.raw, &"request".into())
            .map_err(|_| ProviderError::Interface)?
            .dyn_into::<Function>()
            .map_err(|_| ProviderError::Interface)?;

        let promise: Promise = request
            .call1(&self.raw, &args)
            .map_err(|e| ProviderError::from_js(&e))?
            .into();

        JsFuture::from(promise)
            .await
            .map_err(|e| ProviderError::from_js(&e))
    }

    fn subscribe(
        &self,
        event: &'static str,
        closure: Closure<dyn Fn(JsValue)>,
    ) -> Result<(), ProviderError> {
        let on = Reflect::get(&self.raw, &"on".into())
            .map_err(|_| ProviderError::Interface)?
            .dyn_into::<Function>()
            .map_err(|_| ProviderError::Interface)?;
        on.call2(&self.raw, &event.into(), closure.as_ref())
            .map_err(|_| ProviderError::Interface)?;
        self.listeners
            .borrow_mut()
            .push(ListenerHandle { event, closure });
        Ok(())
    }
}

/// Collect the string entries of a provider account array, in order.
fn account_list(value: &JsValue) -> Vec<String> {
    Array::from(value)
        .iter()
        .filter_map(|entry| entry.as_string())
        .collect()
}

#[async_trait(?Send)]
impl WalletProvider for EthereumProvider {
    async fn authorized_accounts(&self) -> Result<Vec<String>, ProviderError> {
        let result = self.request("eth_accounts").await?;
        Ok(account_list(&result))
    }

    async fn request_accounts(&self) -> Result<Vec<String>, ProviderError> {
        let result = self.request("eth_requestAccounts").await?;
        Ok(account_list(&result))
    }

    fn on_accounts_changed(&self, callback: AccountsCallback) -> Result<(), ProviderError> {
        let closure = Closure::wrap(Box::new(move |payload: JsValue| {
            callback(account_list(&payload));
        }) as Box<dyn Fn(JsValue)>);
        self.subscribe("accountsChanged", closure)
    }

    fn on_chain_changed(&self, callback: ChainCallback) -> Result<(), ProviderError> {
        let closure = Closure::wrap(Box::new(move |chain_id: JsValue| {
            if let Some(id) = chain_id.as_string() {
                callback(id);
            }
        }) as Box<dyn Fn(JsValue)>);
        self.subscribe("chainChanged", closure)
    }

    fn unsubscribe_all(&self) {
        let remove = Reflect::get(&self.raw, &"removeListener".into())
            .ok()
            .and_then(|f| f.dyn_into::<Function>().ok());
        for handle in self.listeners.borrow_mut().drain(..) {
            if let Some(remove) = &remove {
                let _ = remove.call2(&self.raw, &handle.event.into(), handle.closure.as_ref());
            }
        }
    }
}
