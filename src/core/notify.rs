//! Notification presenter.
//!
//! Turns [`Notification`] values into transient DOM elements. Each
//! element is independent; overlapping notifications simply coexist and
//! their layering is left to styling. The timed show/fade/dispose
//! schedule lives on the model ([`Notification::lifecycle`]); this
//! module only walks it with timer futures and applies the class
//! mutations.

use gloo_timers::future::TimeoutFuture;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;

use crate::config::notification as cfg;
use crate::models::{LifecycleAction, Notification};
use crate::utils::dom;

/// Sink for user-facing notifications.
pub trait Notify {
    fn notify(&self, notification: Notification);
}

/// [`Notify`] implementation that inserts `wallet-notification` elements
/// into the document body.
pub struct DomNotifier;

impl Notify for DomNotifier {
    fn notify(&self, notification: Notification) {
        let Some(element) = insert_element(&notification) else {
            return;
        };
        // Fire-and-forget; the element owns the rest of its lifetime.
        spawn_local(drive_lifecycle(element));
    }
}

fn insert_element(notification: &Notification) -> Option<Element> {
    let document = dom::document()?;
    let body = document.body()?;
    let element = document.create_element("div").ok()?;
    element.set_class_name(&notification.class_name());
    element.set_text_content(Some(notification.message()));
    body.append_child(&element).ok()?;
    Some(element)
}

async fn drive_lifecycle(element: Element) {
    for step in Notification::lifecycle() {
        TimeoutFuture::new(step.delay_ms).await;
        match step.action {
            LifecycleAction::Reveal => {
                let _ = element.class_list().add_1(cfg::SHOW_CLASS);
            }
            LifecycleAction::Fade => {
                let _ = element.class_list().remove_1(cfg::SHOW_CLASS);
            }
            LifecycleAction::Dispose => element.remove(),
        }
    }
}
