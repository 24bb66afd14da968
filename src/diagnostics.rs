use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{ErrorEvent, PromiseRejectionEvent};

/// Logs uncaught script errors and unhandled promise rejections. Nothing is recovered.
pub fn install_error_logging() {
    let Some(window) = web_sys::window() else {
        return;
    };

    let on_error = Closure::wrap(Box::new(move |e: ErrorEvent| {
        gloo_console::error!("JavaScript Error:", e.error());
    }) as Box<dyn FnMut(ErrorEvent)>);

    let on_rejection = Closure::wrap(Box::new(move |e: PromiseRejectionEvent| {
        gloo_console::error!("Unhandled Promise Rejection:", e.reason());
    }) as Box<dyn FnMut(PromiseRejectionEvent)>);

    let installed = window
        .add_event_listener_with_callback("error", on_error.as_ref().unchecked_ref())
        .and_then(|_| {
            window.add_event_listener_with_callback(
                "unhandledrejection",
                on_rejection.as_ref().unchecked_ref(),
            )
        });
    if let Err(e) = installed {
        gloo_console::error!("Failed to install error listeners:", e);
        return;
    }

    // Listeners live for the whole page.
    on_error.forget();
    on_rejection.forget();
}
