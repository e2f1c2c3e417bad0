//! Core logic for the wallet connect widget.
//!
//! This module provides:
//! - [`WalletController`] - state ownership and transition logic
//! - [`WalletProvider`] / [`detect`] - provider abstraction and the
//!   EIP-1193 interop implementation
//! - [`Notify`] / [`DomNotifier`] - notification presentation
//! - [`ProviderError`] - provider error mapping

pub mod controller;
pub mod error;
pub mod notify;
pub mod provider;

pub use controller::WalletController;
pub use error::ProviderError;
pub use notify::{DomNotifier, Notify};
pub use provider::{WalletProvider, detect};
