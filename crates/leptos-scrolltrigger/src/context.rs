//! Scroll Context
//!
//! Owns every timeline and observer created while binding a view, and releases
//! them together.

use std::cell::RefCell;
use std::rc::Rc;

use crate::host::{AnimNode, FrameKind, Observer, Scroller};
use crate::timeline::{ScrollTimeline, TriggerConfig};
use crate::tween::Tween;

struct Entry<N: AnimNode> {
    timeline: Rc<RefCell<ScrollTimeline<N>>>,
    observer: Observer,
}

/// Disposer for a group of scroll timelines.
///
/// Dropping the context has the same effect as calling [`ScrollContext::revert`].
pub struct ScrollContext<S: Scroller, N: AnimNode> {
    scroller: S,
    entries: Vec<Entry<N>>,
}

impl<S: Scroller, N: AnimNode> ScrollContext<S, N> {
    pub fn new(scroller: S) -> Self {
        Self { scroller, entries: Vec::new() }
    }

    /// Bind `tween` on `target` to the scroll range of `trigger`.
    ///
    /// The target is styled for the current scroll offset right away.
    pub fn add(&mut self, config: TriggerConfig, trigger: N, target: N, tween: Tween) {
        let mut timeline = ScrollTimeline::new(config, trigger, target, tween);
        timeline.on_frame(self.scroller.frame(FrameKind::Refresh));

        let timeline = Rc::new(RefCell::new(timeline));
        let handle = Rc::clone(&timeline);
        let observer = self.scroller.observe(Box::new(move |frame| {
            handle.borrow_mut().on_frame(frame);
        }));

        self.entries.push(Entry { timeline, observer });
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Timeline ids in binding order
    pub fn ids(&self) -> Vec<String> {
        self.entries
            .iter()
            .map(|e| e.timeline.borrow().id().to_string())
            .collect()
    }

    /// Detach every observer and restore every target's inline style
    pub fn revert(&mut self) {
        if self.entries.is_empty() {
            return;
        }
        let count = self.entries.len();
        // Newest first: later timelines saved the styles earlier ones rendered
        for Entry { timeline, observer } in self.entries.drain(..).rev() {
            drop(observer);
            timeline.borrow().revert();
        }
        log::debug!("[SCROLL] reverted {} timelines", count);
    }
}

impl<S: Scroller, N: AnimNode> Drop for ScrollContext<S, N> {
    fn drop(&mut self) {
        self.revert();
    }
}
