//! Section Timelines
//!
//! Binds the content reveal and the background parallax to every rendered
//! slide section. A section missing one of its regions just gets fewer
//! timelines.

use leptos_scrolltrigger::{
    AnimNode, Ease, Offset, ScrollContext, Scroller, TriggerConfig, TriggerPosition, Tween,
    TweenVars,
};

use crate::catalog::section_id;

/// Class selectors of the regions inside a section
pub mod selectors {
    pub const CONTENT: &str = ".content-container";
    pub const BACKGROUND: &str = ".background-image";
}

/// Content panel slides up and fades in as the section enters the viewport
pub mod reveal {
    use super::*;

    /// Section top at 80% of the viewport height
    pub const START: TriggerPosition = TriggerPosition::new(Offset::TOP, Offset::Fraction(0.8));
    /// Section top at 40% of the viewport height
    pub const END: TriggerPosition = TriggerPosition::new(Offset::TOP, Offset::Fraction(0.4));
    pub const FROM_Y_PERCENT: f64 = 50.0;
    pub const FROM_OPACITY: f64 = 0.0;

    pub fn tween() -> Tween {
        Tween::from_vars(TweenVars {
            y_percent: Some(FROM_Y_PERCENT),
            opacity: Some(FROM_OPACITY),
        })
        .with_ease(Ease::None)
    }
}

/// Background drifts up while the section scrolls out of the top
pub mod parallax {
    use super::*;

    /// Section top at the viewport top
    pub const START: TriggerPosition = TriggerPosition::new(Offset::TOP, Offset::TOP);
    /// Section bottom at the viewport top
    pub const END: TriggerPosition = TriggerPosition::new(Offset::BOTTOM, Offset::TOP);
    pub const TO_Y_PERCENT: f64 = -15.0;

    pub fn tween() -> Tween {
        Tween::to_vars(TweenVars { y_percent: Some(TO_Y_PERCENT), ..Default::default() })
            .with_ease(Ease::None)
    }
}

/// Attach both timelines to sections `0..count` found under `root`
pub fn bind_sections<S, N>(ctx: &mut ScrollContext<S, N>, root: &N, count: usize)
where
    S: Scroller,
    N: AnimNode,
{
    for index in 0..count {
        let id = section_id(index);
        let Some(section) = root.find(&format!("#{}", id)) else {
            continue;
        };

        if let Some(content) = section.find(selectors::CONTENT) {
            ctx.add(
                TriggerConfig::new(format!("{}/reveal", id), reveal::START, reveal::END),
                section.clone(),
                content,
                reveal::tween(),
            );
        }

        if let Some(background) = section.find(selectors::BACKGROUND) {
            ctx.add(
                TriggerConfig::new(format!("{}/parallax", id), parallax::START, parallax::END),
                section.clone(),
                background,
                parallax::tween(),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::SLIDES;
    use leptos_scrolltrigger::mock::{MockNode, MockPage};

    const VIEWPORT: f64 = 1000.0;

    struct Fixture {
        page: MockPage,
        root: MockNode,
        contents: Vec<MockNode>,
        backgrounds: Vec<MockNode>,
    }

    /// One viewport-tall section per slide, stacked from y=0
    fn fixture(skip_content: &[usize], skip_background: &[usize]) -> Fixture {
        let page = MockPage::new(VIEWPORT);
        let root = page.node().at(0.0, VIEWPORT * SLIDES.len() as f64);
        let mut contents = Vec::new();
        let mut backgrounds = Vec::new();

        for index in 0..SLIDES.len() {
            let section = page
                .node()
                .with_id(&section_id(index))
                .at(index as f64 * VIEWPORT, VIEWPORT);
            root.append(&section);

            let background = page.node().with_class("background-image");
            if !skip_background.contains(&index) {
                section.append(&background);
            }
            let frame = page.node().with_class("content-frame");
            section.append(&frame);
            let content = page.node().with_class("content-container");
            if !skip_content.contains(&index) {
                frame.append(&content);
            }

            contents.push(content);
            backgrounds.push(background);
        }

        Fixture { page, root, contents, backgrounds }
    }

    fn bind(f: &Fixture) -> ScrollContext<leptos_scrolltrigger::mock::MockScroller, MockNode> {
        let mut ctx = ScrollContext::new(f.page.scroller());
        bind_sections(&mut ctx, &f.root, SLIDES.len());
        ctx
    }

    fn snapshot(f: &Fixture) -> Vec<(Option<String>, Option<String>, Option<String>)> {
        f.contents
            .iter()
            .zip(&f.backgrounds)
            .map(|(c, b)| (c.style("transform"), c.style("opacity"), b.style("transform")))
            .collect()
    }

    #[test]
    fn test_two_timelines_per_section_in_catalog_order() {
        let f = fixture(&[], &[]);
        let ctx = bind(&f);

        let expected: Vec<String> = (0..SLIDES.len())
            .flat_map(|i| [format!("section-{}/reveal", i), format!("section-{}/parallax", i)])
            .collect();
        assert_eq!(ctx.ids(), expected);
        assert_eq!(f.page.live_observers(), SLIDES.len() * 2);
    }

    #[test]
    fn test_content_reveal_between_80_and_40_percent() {
        let f = fixture(&[], &[]);
        let _ctx = bind(&f);
        let content = &f.contents[1];

        // Section 1 top is at 1000: 80% line at scroll 200, 40% line at 600
        assert_eq!(content.style("transform").as_deref(), Some("translateY(50%)"));
        assert_eq!(content.style("opacity").as_deref(), Some("0"));

        f.page.scroll_to(200.0);
        assert_eq!(content.style("transform").as_deref(), Some("translateY(50%)"));
        assert_eq!(content.style("opacity").as_deref(), Some("0"));

        f.page.scroll_to(400.0);
        assert_eq!(content.style("transform").as_deref(), Some("translateY(25%)"));
        assert_eq!(content.style("opacity").as_deref(), Some("0.5"));

        f.page.scroll_to(600.0);
        assert_eq!(content.style("transform").as_deref(), Some("translateY(0%)"));
        assert_eq!(content.style("opacity").as_deref(), Some("1"));

        // Scrolling back reverses exactly
        f.page.scroll_to(400.0);
        assert_eq!(content.style("opacity").as_deref(), Some("0.5"));
        f.page.scroll_to(0.0);
        assert_eq!(content.style("opacity").as_deref(), Some("0"));
    }

    #[test]
    fn test_content_reveal_is_monotonic() {
        let f = fixture(&[], &[]);
        let _ctx = bind(&f);
        let opacity = |n: &MockNode| n.style("opacity").unwrap().parse::<f64>().unwrap();

        let mut last = -1.0;
        for step in 0..=40 {
            f.page.scroll_to(200.0 + step as f64 * 10.0);
            let current = opacity(&f.contents[1]);
            assert!(current >= last, "opacity dropped at step {}", step);
            last = current;
        }
        for step in (0..=40).rev() {
            f.page.scroll_to(200.0 + step as f64 * 10.0);
            let current = opacity(&f.contents[1]);
            assert!(current <= last, "opacity rose at step {}", step);
            last = current;
        }
    }

    #[test]
    fn test_first_section_is_revealed_at_load() {
        let f = fixture(&[], &[]);
        let _ctx = bind(&f);
        assert_eq!(f.contents[0].style("opacity").as_deref(), Some("1"));
        assert_eq!(f.backgrounds[0].style("transform").as_deref(), Some("translateY(0%)"));
    }

    #[test]
    fn test_background_parallax_while_section_leaves() {
        let f = fixture(&[], &[]);
        let _ctx = bind(&f);
        let background = &f.backgrounds[1];

        f.page.scroll_to(1000.0);
        assert_eq!(background.style("transform").as_deref(), Some("translateY(0%)"));

        f.page.scroll_to(1500.0);
        assert_eq!(background.style("transform").as_deref(), Some("translateY(-7.5%)"));

        f.page.scroll_to(2000.0);
        assert_eq!(background.style("transform").as_deref(), Some("translateY(-15%)"));

        f.page.scroll_to(3500.0);
        assert_eq!(background.style("transform").as_deref(), Some("translateY(-15%)"));

        f.page.scroll_to(1500.0);
        assert_eq!(background.style("transform").as_deref(), Some("translateY(-7.5%)"));
        assert_eq!(background.style("opacity"), None);
    }

    #[test]
    fn test_missing_regions_skip_only_their_timeline() {
        let f = fixture(&[3], &[2]);
        let ctx = bind(&f);

        let ids = ctx.ids();
        assert_eq!(ids.len(), SLIDES.len() * 2 - 2);
        assert!(ids.contains(&"section-2/reveal".to_string()));
        assert!(!ids.contains(&"section-2/parallax".to_string()));
        assert!(ids.contains(&"section-3/parallax".to_string()));
        assert!(!ids.contains(&"section-3/reveal".to_string()));

        // Detached regions are never touched
        assert_eq!(f.backgrounds[2].style("transform"), None);
        assert_eq!(f.contents[3].style("opacity"), None);
    }

    #[test]
    fn test_missing_section_is_skipped() {
        let f = fixture(&[], &[]);
        let mut ctx = ScrollContext::new(f.page.scroller());
        bind_sections(&mut ctx, &f.root, SLIDES.len() + 2);
        assert_eq!(ctx.len(), SLIDES.len() * 2);
    }

    #[test]
    fn test_remount_rebinds_without_leaks() {
        let f = fixture(&[], &[]);
        f.page.scroll_to(1500.0);

        let first = bind(&f);
        let first_ids = first.ids();
        let bound = snapshot(&f);
        drop(first);

        assert_eq!(f.page.live_observers(), 0);
        assert!(snapshot(&f).iter().all(|s| *s == (None, None, None)));

        let second = bind(&f);
        assert_eq!(second.ids(), first_ids);
        assert_eq!(snapshot(&f), bound);
        assert_eq!(f.page.live_observers(), SLIDES.len() * 2);
    }

    #[test]
    fn test_scroll_round_trip_is_idempotent() {
        let f = fixture(&[], &[]);
        let _ctx = bind(&f);

        f.page.scroll_to(1730.0);
        let before = snapshot(&f);

        for y in [0.0, 4200.0, 950.0, 2600.0] {
            f.page.scroll_to(y);
        }
        f.page.scroll_to(1730.0);
        assert_eq!(snapshot(&f), before);
    }
}
