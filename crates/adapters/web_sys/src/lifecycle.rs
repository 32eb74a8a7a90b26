//! `DOMContentLoaded` as a [`PageLifecycle`].

use darkmode_app::ports::{LoadCallback, PageLifecycle};
use darkmode_domain::error::{DarkModeError, LifecycleError};
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{AddEventListenerOptions, DocumentReadyState};

use crate::js_reason;

const CONTENT_LOADED: &str = "DOMContentLoaded";

/// Runs load callbacks on the document's `DOMContentLoaded` event.
///
/// The listener is registered with `once: true` and its closure is handed
/// over to the JS garbage collector, so nothing needs tearing down.
#[derive(Debug, Clone, Copy, Default)]
pub struct DomContentLoaded;

/// Whether a listener must wait for `DOMContentLoaded`.
///
/// Past `loading` the event has already fired and a new listener would never
/// run, so the callback is invoked straight away instead.
pub(crate) fn must_wait(state: DocumentReadyState) -> bool {
    matches!(state, DocumentReadyState::Loading)
}

impl PageLifecycle for DomContentLoaded {
    fn on_content_loaded(&self, callback: LoadCallback) -> Result<(), DarkModeError> {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| LifecycleError {
                reason: "no document".to_string(),
            })?;

        if !must_wait(document.ready_state()) {
            tracing::debug!("document already loaded, running callback now");
            callback();
            return Ok(());
        }

        let options = AddEventListenerOptions::new();
        options.set_once(true);
        let listener = Closure::once_into_js(callback);
        document
            .add_event_listener_with_callback_and_add_event_listener_options(
                CONTENT_LOADED,
                listener.unchecked_ref(),
                &options,
            )
            .map_err(|err| {
                LifecycleError {
                    reason: js_reason(&err),
                }
                .into()
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_wait_while_loading() {
        assert!(must_wait(DocumentReadyState::Loading));
    }

    #[test]
    fn should_run_now_once_interactive_or_complete() {
        assert!(!must_wait(DocumentReadyState::Interactive));
        assert!(!must_wait(DocumentReadyState::Complete));
    }
}
