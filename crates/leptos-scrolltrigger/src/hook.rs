//! Leptos Integration
//!
//! Bind timelines once the view is mounted and revert them with the owner.

use leptos::prelude::*;
use web_sys::HtmlElement;

use crate::context::ScrollContext;
use crate::host::{AnimNode, Scroller};
use crate::web::WindowScroller;

pub type WindowScrollContext = ScrollContext<WindowScroller, HtmlElement>;

/// Owner-scoped slot holding the scroll context of one view.
///
/// Binding again reverts the previous context first; cleaning up the owner
/// the binding was created under reverts the last one.
pub struct ScrollBinding<S: Scroller, N: AnimNode> {
    slot: StoredValue<Option<ScrollContext<S, N>>, LocalStorage>,
}

impl<S: Scroller, N: AnimNode> Clone for ScrollBinding<S, N> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S: Scroller, N: AnimNode> Copy for ScrollBinding<S, N> {}

impl<S: Scroller, N: AnimNode> ScrollBinding<S, N> {
    /// Create under the current reactive owner
    pub fn new() -> Self {
        let binding = Self { slot: StoredValue::new_local(None) };
        on_cleanup(move || binding.release());
        binding
    }

    /// Replace the current context with a fresh one built by `setup`
    pub fn bind<F>(&self, scroller: S, root: &N, setup: F)
    where
        F: FnOnce(&mut ScrollContext<S, N>, &N),
    {
        self.slot.update_value(|current| {
            // Revert before measuring so layout is read without our transforms
            drop(current.take());
            let mut ctx = ScrollContext::new(scroller);
            setup(&mut ctx, root);
            log::debug!("[SCROLL] bound {} timelines", ctx.len());
            *current = Some(ctx);
        });
    }

    /// Revert and forget the current context, if any
    pub fn release(&self) {
        if let Some(ctx) = self.slot.try_update_value(Option::take).flatten() {
            drop(ctx);
        }
    }

    /// Timelines in the current context
    pub fn len(&self) -> usize {
        self.slot
            .try_with_value(|current| current.as_ref().map_or(0, ScrollContext::len))
            .unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Bind with `setup` whenever `root` and `scroller` both yield a value.
///
/// Runs in an `Effect`, so it happens after the view is mounted and again if
/// `root` changes.
pub fn use_scroll_binding<S, N, R, M, F>(root: R, scroller: M, setup: F) -> ScrollBinding<S, N>
where
    S: Scroller,
    N: AnimNode,
    R: Fn() -> Option<N> + 'static,
    M: Fn() -> Option<S> + 'static,
    F: Fn(&mut ScrollContext<S, N>, &N) + 'static,
{
    let binding = ScrollBinding::new();

    Effect::new(move |_| {
        let Some(root) = root() else {
            return;
        };
        let Some(scroller) = scroller() else {
            return;
        };
        binding.bind(scroller, &root, &setup);
    });

    binding
}

/// `use_scroll_binding` against the browser window
pub fn use_scroll_context<R, F>(root: R, setup: F) -> ScrollBinding<WindowScroller, HtmlElement>
where
    R: Fn() -> Option<HtmlElement> + 'static,
    F: Fn(&mut WindowScrollContext, &HtmlElement) + 'static,
{
    use_scroll_binding(root, WindowScroller::new, setup)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::{MockNode, MockPage, MockScroller};
    use crate::position::{Offset, TriggerPosition};
    use crate::timeline::TriggerConfig;
    use crate::tween::{Tween, TweenVars};
    use leptos::reactive::owner::Owner;

    /// Two timelines per `.panel` section under `root`
    fn setup(ctx: &mut ScrollContext<MockScroller, MockNode>, root: &MockNode) {
        let Some(section) = root.find("#hero") else {
            return;
        };
        let Some(panel) = section.find(".panel") else {
            return;
        };
        let position = TriggerPosition::new(Offset::TOP, Offset::BOTTOM);
        ctx.add(
            TriggerConfig::new("fade", position, TriggerPosition::new(Offset::TOP, Offset::TOP)),
            section.clone(),
            panel.clone(),
            Tween::from_vars(TweenVars { opacity: Some(0.0), ..Default::default() }),
        );
        ctx.add(
            TriggerConfig::new("lift", position, TriggerPosition::new(Offset::BOTTOM, Offset::TOP)),
            section,
            panel,
            Tween::to_vars(TweenVars { y_percent: Some(-10.0), ..Default::default() }),
        );
    }

    fn page() -> (MockPage, MockNode, MockNode) {
        let page = MockPage::new(1000.0);
        let root = page.node();
        let section = page.node().with_id("hero").at(500.0, 1000.0);
        let panel = page.node().with_class("panel");
        root.append(&section);
        section.append(&panel);
        (page, root, panel)
    }

    #[test]
    fn test_owner_cleanup_releases_binding() {
        let (page, root, panel) = page();
        let owner = Owner::new();
        let binding = owner.with(ScrollBinding::<MockScroller, MockNode>::new);

        binding.bind(page.scroller(), &root, setup);
        assert_eq!(binding.len(), 2);
        assert_eq!(page.live_observers(), 2);
        assert!(panel.style("opacity").is_some());

        owner.cleanup();
        assert_eq!(page.live_observers(), 0);
        assert_eq!(panel.style("opacity"), None);
        assert_eq!(panel.style("transform"), None);
    }

    #[test]
    fn test_rebind_replaces_previous_context() {
        let (page, root, panel) = page();
        let owner = Owner::new();
        let binding = owner.with(ScrollBinding::<MockScroller, MockNode>::new);

        binding.bind(page.scroller(), &root, setup);
        page.scroll_to(300.0);
        let before = (panel.style("opacity"), panel.style("transform"));

        binding.bind(page.scroller(), &root, setup);
        assert_eq!(binding.len(), 2);
        assert_eq!(page.live_observers(), 2);
        assert_eq!((panel.style("opacity"), panel.style("transform")), before);

        binding.release();
        assert!(binding.is_empty());
        assert_eq!(page.live_observers(), 0);

        // Releasing twice, then cleaning up, is harmless
        binding.release();
        owner.cleanup();
        assert_eq!(page.live_observers(), 0);
    }
}
