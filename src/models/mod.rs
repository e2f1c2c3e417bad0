//! Data models and types for the widget.
//!
//! Contains the pure domain types:
//! - [`WalletState`], [`AccountsChange`] - connection state and event
//!   classification
//! - [`ButtonView`], [`ButtonAction`] - derived button presentation
//! - [`Notification`], [`Severity`] - transient user messages and their
//!   timed lifecycle
//!
//! Nothing in this module touches browser APIs.

mod button;
mod notification;
mod wallet;

pub use button::{ButtonAction, ButtonView};
pub use notification::{LifecycleAction, LifecycleStep, Notification, Severity};
pub use wallet::{AccountsChange, WalletState, short_address};
