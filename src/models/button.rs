use crate::config::labels;
use crate::models::wallet::{WalletState, short_address};

/// What a click on the button should do.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ButtonAction {
    /// Issue the interactive authorization request.
    Connect,
    /// Forget the cached address locally.
    Disconnect,
    /// Open the wallet install page.
    Install,
}

/// Derived presentation of the connect button.
///
/// Never stored: label, tooltip, and click action are a pure function
/// of the connection state and provider availability.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ButtonView {
    pub label: String,
    pub tooltip: Option<String>,
    pub action: ButtonAction,
}

impl ButtonView {
    pub fn derive(state: &WalletState, provider_available: bool) -> Self {
        if !provider_available {
            return ButtonView {
                label: labels::INSTALL.to_string(),
                tooltip: None,
                action: ButtonAction::Install,
            };
        }
        match state {
            WalletState::Disconnected => ButtonView {
                label: labels::CONNECT.to_string(),
                tooltip: None,
                action: ButtonAction::Connect,
            },
            WalletState::Connected { address } => ButtonView {
                label: short_address(address),
                tooltip: Some(format!("{}{}", labels::CONNECTED_TOOLTIP_PREFIX, address)),
                action: ButtonAction::Disconnect,
            },
        }
    }
}
