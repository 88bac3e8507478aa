//! Frontend Models
//!
//! Data shown on the page.

/// One destination, rendered as a full-screen section
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slide {
    /// Asset path served from `public/`
    pub image: &'static str,
    pub title: &'static str,
    pub location: &'static str,
    pub description: &'static str,
}
