//! Slide Section Component
//!
//! One full-screen destination: parallax background plus a text panel.

use leptos::prelude::*;

use crate::catalog::section_id;
use crate::models::Slide;

#[component]
pub fn SlideSection(
    /// Position in the catalog; also the section's DOM key
    index: usize,
    slide: Slide,
) -> impl IntoView {
    let background_style = format!(
        "background-image: url({}); will-change: transform;",
        slide.image
    );

    view! {
        <section id=section_id(index) class="slide-section">
            <div class="background-image" style=background_style />

            <div class="content-frame">
                <div class="content-container">
                    <h3 class="slide-location">{slide.location}</h3>
                    <h1 class="slide-title">{slide.title}</h1>
                    <p class="slide-description">{slide.description}</p>
                </div>
            </div>
        </section>
    }
}
