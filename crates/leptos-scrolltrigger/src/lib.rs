//! Leptos ScrollTrigger
//!
//! Scroll-scrubbed tweens for Leptos views.
//! A timeline maps the scroll range of a trigger node to a tween on a target
//! node; a `ScrollContext` owns the timelines of one view and releases them
//! together.

pub mod context;
pub mod hook;
pub mod host;
pub mod position;
pub mod timeline;
pub mod tween;
pub mod web;

#[cfg(any(test, feature = "test-util"))]
pub mod mock;

pub use context::ScrollContext;
pub use hook::{use_scroll_binding, use_scroll_context, ScrollBinding, WindowScrollContext};
pub use host::{AnimNode, FrameKind, NodeBounds, Observer, ScrollFrame, Scroller};
pub use position::{Offset, PositionError, ScrollBounds, TriggerPosition};
pub use timeline::{ScrollTimeline, TriggerConfig};
pub use tween::{Ease, Property, StyleState, Tween, TweenVars};
pub use web::WindowScroller;
