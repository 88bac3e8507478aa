//! Browser Bindings
//!
//! `AnimNode` for `HtmlElement` and a `Scroller` backed by the window.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Event, HtmlElement, Window};

use crate::host::{AnimNode, FrameKind, NodeBounds, Observer, ScrollFrame, Scroller};

const SCROLL_EVENTS: [&str; 2] = ["scroll", "resize"];

impl AnimNode for HtmlElement {
    fn find(&self, selector: &str) -> Option<Self> {
        self.query_selector(selector)
            .ok()
            .flatten()
            .and_then(|el| el.dyn_into::<HtmlElement>().ok())
    }

    fn bounds(&self) -> NodeBounds {
        let rect = self.get_bounding_client_rect();
        NodeBounds { top: rect.top(), height: rect.height() }
    }

    fn inline_style(&self, name: &str) -> Option<String> {
        self.style()
            .get_property_value(name)
            .ok()
            .filter(|v| !v.is_empty())
    }

    fn set_style(&self, name: &str, value: &str) {
        let _ = self.style().set_property(name, value);
    }

    fn remove_style(&self, name: &str) {
        let _ = self.style().remove_property(name);
    }
}

/// The browser window as a scroll source
#[derive(Clone)]
pub struct WindowScroller {
    window: Window,
}

impl WindowScroller {
    /// `None` outside a browser
    pub fn new() -> Option<Self> {
        web_sys::window().map(|window| Self { window })
    }
}

fn window_frame(window: &Window, kind: FrameKind) -> ScrollFrame {
    ScrollFrame {
        scroll_y: window.scroll_y().unwrap_or(0.0),
        viewport_height: window
            .inner_height()
            .ok()
            .and_then(|h| h.as_f64())
            .unwrap_or(0.0),
        kind,
    }
}

impl Scroller for WindowScroller {
    fn frame(&self, kind: FrameKind) -> ScrollFrame {
        window_frame(&self.window, kind)
    }

    fn observe(&self, mut callback: Box<dyn FnMut(ScrollFrame)>) -> Observer {
        let window = self.window.clone();
        let listener = Closure::<dyn FnMut(Event)>::new(move |ev: Event| {
            let kind = if ev.type_() == "resize" { FrameKind::Resize } else { FrameKind::Scroll };
            callback(window_frame(&window, kind));
        });

        for event in SCROLL_EVENTS {
            let _ = self
                .window
                .add_event_listener_with_callback(event, listener.as_ref().unchecked_ref());
        }

        let window = self.window.clone();
        Observer::new(move || {
            for event in SCROLL_EVENTS {
                let _ = window
                    .remove_event_listener_with_callback(event, listener.as_ref().unchecked_ref());
            }
            // `listener` is dropped here, freeing the JS closure
        })
    }
}
