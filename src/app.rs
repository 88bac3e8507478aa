//! Wanderlust Frontend App
//!
//! A full-screen section per destination, animated by scroll position.

use leptos::html::Main;
use leptos::prelude::*;
use leptos_scrolltrigger::use_scroll_context;

use crate::catalog::{self, SLIDES};
use crate::components::SlideSection;
use crate::timeline;

#[component]
pub fn App() -> impl IntoView {
    let main_ref = NodeRef::<Main>::new();

    // Bind after <main> is mounted; reverted when App is disposed
    use_scroll_context(
        move || main_ref.get(),
        |ctx, root| timeline::bind_sections(ctx, root, SLIDES.len()),
    );

    view! {
        <main node_ref=main_ref class="showcase">
            {catalog::sections()
                .map(|(index, slide)| view! { <SlideSection index=index slide=*slide /> })
                .collect_view()}
        </main>
    }
}
