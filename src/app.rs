//! Root application module.
//!
//! Wires the controller into the reactive tree: detects the injected
//! provider, runs the silent startup authorization check, and renders
//! the connect button.

use std::rc::Rc;

use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::components::ConnectButton;
use crate::core::{DomNotifier, WalletController, provider};

/// Root component.
#[component]
pub fn App() -> impl IntoView {
    let controller = WalletController::new(provider::detect(), Rc::new(DomNotifier));
    provide_context(send_wrapper::SendWrapper::new(controller.clone()));

    // Silently restore an already-authorized connection on load.
    let startup = controller.clone();
    spawn_local(async move { startup.check_connection().await });

    // Drop provider listeners if the widget is ever unmounted.
    let unmount = send_wrapper::SendWrapper::new(controller.clone());
    on_cleanup(move || unmount.teardown());

    view! { <ConnectButton /> }
}
