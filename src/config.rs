//! Application configuration.
//!
//! Centralizes all fixed constants: DOM ids, the wallet install URL,
//! address display truncation, notification timing, and every
//! user-visible string literal.

// =============================================================================
// DOM Surface
// =============================================================================

/// Id of the element the widget mounts into. The widget is a no-op when
/// the host page does not carry this element.
pub const WALLET_BUTTON_ID: &str = "wallet-connect";

// =============================================================================
// Wallet Configuration
// =============================================================================

/// Install page opened when no provider is injected.
pub const WALLET_INSTALL_URL: &str = "https://metamask.io/download/";

/// Address display truncation (`0x1234...5678`).
pub mod eth_address {
    /// Leading characters kept in the shortened form.
    pub const PREFIX_LEN: usize = 6;
    /// Trailing characters kept in the shortened form.
    pub const SUFFIX_LEN: usize = 4;
}

// =============================================================================
// Notification Configuration
// =============================================================================

/// Notification element classes and lifecycle timing (milliseconds).
pub mod notification {
    /// Base class carried by every notification element.
    pub const BASE_CLASS: &str = "wallet-notification";
    /// Class toggled to drive the CSS show/hide transition.
    pub const SHOW_CLASS: &str = "show";
    /// Delay between insertion and the visible marker, so the CSS
    /// transition has a hidden frame to animate from.
    pub const REVEAL_DELAY_MS: u32 = 10;
    /// How long a notification stays visible.
    pub const VISIBLE_MS: u32 = 3000;
    /// Fade-out duration before the element is disposed.
    pub const FADE_MS: u32 = 300;
}

// =============================================================================
// User-Visible Strings
// =============================================================================

/// Button labels and tooltip.
pub mod labels {
    /// Default label while disconnected.
    pub const CONNECT: &str = "Conectar";
    /// Label shown when no provider is injected.
    pub const INSTALL: &str = "Instalar Carteira";
    /// Tooltip prefix, followed by the full address.
    pub const CONNECTED_TOOLTIP_PREFIX: &str = "Conectado: ";
}

/// Notification and alert messages.
pub mod messages {
    /// Blocking alert shown when connecting without a provider.
    pub const INSTALL_PROMPT: &str =
        "Por favor, instale MetaMask ou outra carteira Web3 para continuar.";
    pub const CONNECTED: &str = "Carteira conectada com sucesso!";
    pub const REJECTED: &str = "Conexão rejeitada pelo usuário.";
    /// Prefix for the generic connect failure, followed by the error text.
    pub const CONNECT_FAILED_PREFIX: &str = "Erro ao conectar carteira: ";
    pub const DISCONNECTED: &str = "Carteira desconectada.";
    pub const ACCOUNT_CHANGED: &str = "Conta alterada.";
    /// Console-only prefix for the silent startup query failure.
    pub const CHECK_FAILED_PREFIX: &str = "Erro ao verificar conexão: ";
}
