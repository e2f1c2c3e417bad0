//! Error types for provider interaction.

use js_sys::Reflect;
use thiserror::Error;
use wasm_bindgen::JsValue;

/// EIP-1193 error code for a user-rejected request.
const USER_REJECTED_CODE: f64 = 4001.0;

/// Errors surfaced by the wallet provider.
///
/// Two classes matter to callers: [`ProviderError::UserRejected`] gets a
/// dedicated user-facing message, everything else is collapsed into the
/// generic message carrying the error's own text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProviderError {
    /// The injected provider object does not expose the expected
    /// callable interface.
    #[error("wallet provider interface is not callable")]
    Interface,
    /// User dismissed the authorization prompt (code 4001).
    #[error("request rejected by user")]
    UserRejected,
    /// Any other provider rejection, carrying its message text.
    #[error("{0}")]
    Rpc(String),
}

impl ProviderError {
    /// Map a JavaScript rejection value to a [`ProviderError`].
    ///
    /// Inspects the conventional `code` and `message` fields of EIP-1193
    /// provider errors.
    pub(crate) fn from_js(value: &JsValue) -> Self {
        let code = Reflect::get(value, &"code".into())
            .ok()
            .and_then(|c| c.as_f64());
        if code == Some(USER_REJECTED_CODE) {
            return ProviderError::UserRejected;
        }
        let message = Reflect::get(value, &"message".into())
            .ok()
            .and_then(|m| m.as_string())
            .unwrap_or_else(|| format!("{value:?}"));
        ProviderError::Rpc(message)
    }
}
