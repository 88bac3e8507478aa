//! Host Abstraction
//!
//! The two things a timeline needs from its environment: nodes it can measure
//! and style, and a scroll source it can observe.

/// Viewport-relative box of a node
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct NodeBounds {
    pub top: f64,
    pub height: f64,
}

/// A node that can be queried, measured and styled
pub trait AnimNode: Clone + 'static {
    /// First descendant matching a CSS selector
    fn find(&self, selector: &str) -> Option<Self>;
    /// Box relative to the viewport
    fn bounds(&self) -> NodeBounds;
    /// Inline style value, `None` when unset
    fn inline_style(&self, name: &str) -> Option<String>;
    fn set_style(&self, name: &str, value: &str);
    fn remove_style(&self, name: &str);
}

/// Why a frame was delivered
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FrameKind {
    /// Initial measurement when a timeline is added
    Refresh,
    Scroll,
    /// Viewport size changed; bounds must be re-measured
    Resize,
}

/// Snapshot of the scroll source
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollFrame {
    pub scroll_y: f64,
    pub viewport_height: f64,
    pub kind: FrameKind,
}

/// A scroll source (the window, or a mock in tests)
pub trait Scroller: 'static {
    fn frame(&self, kind: FrameKind) -> ScrollFrame;
    /// Call `callback` on every scroll and resize until the observer is dropped
    fn observe(&self, callback: Box<dyn FnMut(ScrollFrame)>) -> Observer;
}

/// Live subscription to a scroll source; detaches on drop
#[must_use = "dropping an Observer detaches it immediately"]
pub struct Observer {
    detach: Option<Box<dyn FnOnce()>>,
}

impl Observer {
    pub fn new(detach: impl FnOnce() + 'static) -> Self {
        Self { detach: Some(Box::new(detach)) }
    }
}

impl Drop for Observer {
    fn drop(&mut self) {
        if let Some(detach) = self.detach.take() {
            detach();
        }
    }
}
