use crate::config::eth_address;

/// Wallet connection state.
///
/// Owned exclusively by the controller and reset on page reload. The
/// state always reflects the provider's last reported authorized
/// account set; it is resynchronized on every provider event and after
/// every connect/disconnect action, never assumed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum WalletState {
    #[default]
    Disconnected,
    Connected {
        address: String,
    },
}

impl WalletState {
    /// Check if a wallet account is currently connected.
    pub fn is_connected(&self) -> bool {
        matches!(self, WalletState::Connected { .. })
    }

    /// Get the cached account address, if any.
    pub fn address(&self) -> Option<&str> {
        match self {
            WalletState::Connected { address } => Some(address),
            WalletState::Disconnected => None,
        }
    }
}

/// Shorten an address for display (`0x1234...5678`).
///
/// The address is opaque: no format validation is applied beyond this
/// truncation. Addresses too short to truncate are shown as-is.
pub fn short_address(address: &str) -> String {
    if address.len() > eth_address::PREFIX_LEN + eth_address::SUFFIX_LEN {
        format!(
            "{}...{}",
            &address[..eth_address::PREFIX_LEN],
            &address[address.len() - eth_address::SUFFIX_LEN..]
        )
    } else {
        address.to_string()
    }
}

/// Outcome of a provider `accountsChanged` event against the cached state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AccountsChange {
    /// The provider reported an empty account set.
    Cleared,
    /// The first reported account differs from the cached one.
    Adopted(String),
    /// The first reported account matches the cached one.
    Unchanged,
}

impl AccountsChange {
    /// Classify a reported account list against the currently cached address.
    pub fn classify(current: Option<&str>, accounts: &[String]) -> Self {
        match accounts.first() {
            None => AccountsChange::Cleared,
            Some(first) if Some(first.as_str()) != current => {
                AccountsChange::Adopted(first.clone())
            }
            Some(_) => AccountsChange::Unchanged,
        }
    }
}
