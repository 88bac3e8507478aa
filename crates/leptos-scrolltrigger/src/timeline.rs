//! Scroll Timelines
//!
//! One tween on one target, scrubbed by the scroll range of a trigger node.

use crate::host::{AnimNode, FrameKind, ScrollFrame};
use crate::position::{ScrollBounds, TriggerPosition};
use crate::tween::Tween;

/// Where a timeline starts and ends
#[derive(Clone, Debug, PartialEq)]
pub struct TriggerConfig {
    /// Label used in logs and `ScrollContext::ids`
    pub id: String,
    pub start: TriggerPosition,
    pub end: TriggerPosition,
}

impl TriggerConfig {
    pub fn new(id: impl Into<String>, start: TriggerPosition, end: TriggerPosition) -> Self {
        Self { id: id.into(), start, end }
    }
}

pub struct ScrollTimeline<N: AnimNode> {
    config: TriggerConfig,
    trigger: N,
    target: N,
    tween: Tween,
    bounds: ScrollBounds,
    /// Inline values of the animated properties before binding
    saved: Vec<(&'static str, Option<String>)>,
}

impl<N: AnimNode> ScrollTimeline<N> {
    pub fn new(config: TriggerConfig, trigger: N, target: N, tween: Tween) -> Self {
        let saved = tween
            .properties()
            .map(|p| (p.css_name(), target.inline_style(p.css_name())))
            .collect();
        Self {
            config,
            trigger,
            target,
            tween,
            bounds: ScrollBounds::default(),
            saved,
        }
    }

    pub fn id(&self) -> &str {
        &self.config.id
    }

    /// Re-measure the trigger against the current viewport
    pub fn refresh(&mut self, frame: ScrollFrame) {
        let rect = self.trigger.bounds();
        self.bounds = ScrollBounds::resolve(
            self.config.start,
            self.config.end,
            rect.top + frame.scroll_y,
            rect.height,
            frame.viewport_height,
        );
    }

    pub fn progress(&self, scroll_y: f64) -> f64 {
        self.bounds.progress(scroll_y)
    }

    /// Write the style for a scroll offset onto the target
    pub fn render(&self, scroll_y: f64) {
        let state = self.tween.state_at(self.progress(scroll_y));
        for (name, value) in state.css() {
            self.target.set_style(name, &value);
        }
    }

    /// Handle a frame from the scroll source
    pub fn on_frame(&mut self, frame: ScrollFrame) {
        if frame.kind != FrameKind::Scroll {
            self.refresh(frame);
        }
        self.render(frame.scroll_y);
    }

    /// Put the target's inline style back the way it was
    pub fn revert(&self) {
        for (name, value) in &self.saved {
            match value {
                Some(v) => self.target.set_style(name, v),
                None => self.target.remove_style(name),
            }
        }
    }
}
