//! Connect button component.
//!
//! Pure view layer: label, tooltip, and click dispatch all derive from
//! the controller's state through [`ButtonView`].

use leptos::prelude::*;

use crate::core::WalletController;
use crate::models::ButtonView;

/// The wallet connect/disconnect toggle button.
#[component]
pub fn ConnectButton() -> impl IntoView {
    let controller = use_context::<send_wrapper::SendWrapper<WalletController>>()
        .expect("WalletController must be provided at root")
        .take();

    let state = controller.state();
    let has_provider = controller.has_provider();
    let view_model = Signal::derive(move || ButtonView::derive(&state.get(), has_provider));

    let on_click = {
        let controller = controller.clone();
        move |ev: leptos::ev::MouseEvent| {
            ev.prevent_default();
            controller.dispatch_click();
        }
    };

    view! {
        <button
            class="wallet-connect"
            title=move || view_model.get().tooltip
            on:click=on_click
        >
            {move || view_model.get().label}
        </button>
    }
}
