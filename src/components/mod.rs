//! UI Components
//!
//! Reusable Leptos components.

mod slide_section;

pub use slide_section::SlideSection;
