//! Platform glue for spawning futures and poking the host viewport.

use std::future::Future;

/// Spawn a fire-and-forget future on the UI task queue.
pub fn spawn_future<F>(fut: F)
where
    F: Future<Output = ()> + 'static,
{
    #[cfg(target_arch = "wasm32")]
    {
        wasm_bindgen_futures::spawn_local(fut);
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = dioxus::prelude::spawn(fut);
    }
}

/// Reset the window scroll position, used when a new session screen mounts.
pub fn scroll_to_top() {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            window.scroll_to_with_x_and_y(0.0, 0.0);
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = dioxus::document::eval("window.scrollTo(0, 0);");
    }
}
