//! Window-level scroll observing for the session screens.
//!
//! Scroll depth is `scrollY + innerHeight`, the lowest viewport edge the
//! participant has reached. Clicks need no observer (the session root
//! catches bubbled clicks), so scroll is the only raw listener. The
//! observer lives exactly as long as the session screen that installed it:
//! dropping it detaches the listener so a later session never inherits
//! events from an earlier one.

/// Browser builds attach a real `scroll` listener on the window and keep
/// the closure alive until drop.
#[cfg(target_arch = "wasm32")]
pub struct ScrollObserver {
    handler: wasm_bindgen::closure::Closure<dyn FnMut()>,
}

#[cfg(target_arch = "wasm32")]
impl ScrollObserver {
    pub fn install(on_depth: impl Fn(f64) + 'static) -> Option<Self> {
        use wasm_bindgen::JsCast;

        let window = web_sys::window()?;
        let handler = wasm_bindgen::closure::Closure::<dyn FnMut()>::new(move || {
            let Some(window) = web_sys::window() else {
                return;
            };
            let scroll_y = window.scroll_y().unwrap_or(0.0);
            let viewport = window
                .inner_height()
                .ok()
                .and_then(|height| height.as_f64())
                .unwrap_or(0.0);
            on_depth(scroll_y + viewport);
        });
        window
            .add_event_listener_with_callback("scroll", handler.as_ref().unchecked_ref())
            .ok()?;
        Some(Self { handler })
    }
}

#[cfg(target_arch = "wasm32")]
impl Drop for ScrollObserver {
    fn drop(&mut self) {
        use wasm_bindgen::JsCast;

        if let Some(window) = web_sys::window() {
            let _ = window.remove_event_listener_with_callback(
                "scroll",
                self.handler.as_ref().unchecked_ref(),
            );
        }
    }
}

/// Webview builds reach the window through the document eval bridge: a
/// small script forwards depths over the eval channel until told to stop.
/// Install replaces any handler left behind by an interrupted teardown.
#[cfg(not(target_arch = "wasm32"))]
const INSTALL_SCROLL_JS: &str = r#"
if (window.__pfScrollHandler) {
    window.removeEventListener('scroll', window.__pfScrollHandler);
    window.__pfScrollHandler = null;
}
window.__pfScrollHandler = () => {
    try {
        dioxus.send(window.scrollY + window.innerHeight);
    } catch (_e) {
        window.removeEventListener('scroll', window.__pfScrollHandler);
        window.__pfScrollHandler = null;
    }
};
window.addEventListener('scroll', window.__pfScrollHandler, { passive: true });
"#;

#[cfg(not(target_arch = "wasm32"))]
const DETACH_SCROLL_JS: &str = r#"
if (window.__pfScrollHandler) {
    window.removeEventListener('scroll', window.__pfScrollHandler);
    window.__pfScrollHandler = null;
}
"#;

#[cfg(not(target_arch = "wasm32"))]
pub struct ScrollObserver {
    stop: Option<futures_channel::oneshot::Sender<()>>,
}

#[cfg(not(target_arch = "wasm32"))]
impl ScrollObserver {
    pub fn install(on_depth: impl Fn(f64) + 'static) -> Option<Self> {
        use futures_util::{future, pin_mut};

        let (stop_tx, stop_rx) = futures_channel::oneshot::channel::<()>();
        crate::core::platform::spawn_future(async move {
            let mut eval = dioxus::document::eval(INSTALL_SCROLL_JS);
            let forward = async {
                while let Ok(depth) = eval.recv::<f64>().await {
                    on_depth(depth);
                }
            };
            pin_mut!(forward);
            let _ = future::select(forward, stop_rx).await;
            let _ = dioxus::document::eval(DETACH_SCROLL_JS).await;
        });
        Some(Self {
            stop: Some(stop_tx),
        })
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl Drop for ScrollObserver {
    fn drop(&mut self) {
        if let Some(stop) = self.stop.take() {
            let _ = stop.send(());
        }
    }
}
