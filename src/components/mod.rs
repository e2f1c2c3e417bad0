//! UI components built with Leptos.

mod connect;

pub use connect::ConnectButton;
