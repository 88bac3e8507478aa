//! In-memory host for tests
//!
//! `MockPage` plays the window: it owns the scroll offset and viewport height
//! and dispatches frames to its observers. `MockNode` is a tiny element tree
//! that understands `#id` and `.class` selectors.

use std::cell::{Cell, RefCell};
use std::collections::BTreeMap;
use std::rc::{Rc, Weak};

use crate::host::{AnimNode, FrameKind, NodeBounds, Observer, ScrollFrame, Scroller};

type Callback = Rc<RefCell<Box<dyn FnMut(ScrollFrame)>>>;

struct Slot {
    id: usize,
    attached: Rc<Cell<bool>>,
    callback: Callback,
}

struct PageInner {
    scroll_y: Cell<f64>,
    viewport_height: Cell<f64>,
    next_id: Cell<usize>,
    observers: RefCell<Vec<Slot>>,
}

impl PageInner {
    fn frame(&self, kind: FrameKind) -> ScrollFrame {
        ScrollFrame {
            scroll_y: self.scroll_y.get(),
            viewport_height: self.viewport_height.get(),
            kind,
        }
    }

    /// Callbacks may attach or detach observers while this runs
    fn dispatch(&self, kind: FrameKind) {
        let frame = self.frame(kind);
        let snapshot: Vec<(Rc<Cell<bool>>, Callback)> = self
            .observers
            .borrow()
            .iter()
            .map(|slot| (Rc::clone(&slot.attached), Rc::clone(&slot.callback)))
            .collect();

        for (attached, callback) in snapshot {
            if attached.get() {
                let mut callback = callback.borrow_mut();
                (*callback)(frame);
            }
        }
    }
}

#[derive(Clone)]
pub struct MockPage {
    inner: Rc<PageInner>,
}

impl MockPage {
    pub fn new(viewport_height: f64) -> Self {
        Self {
            inner: Rc::new(PageInner {
                scroll_y: Cell::new(0.0),
                viewport_height: Cell::new(viewport_height),
                next_id: Cell::new(0),
                observers: RefCell::new(Vec::new()),
            }),
        }
    }

    pub fn scroller(&self) -> MockScroller {
        MockScroller { page: Rc::clone(&self.inner) }
    }

    /// New detached node whose bounds follow this page's scroll offset
    pub fn node(&self) -> MockNode {
        MockNode(Rc::new(NodeInner {
            page: Rc::downgrade(&self.inner),
            id: RefCell::new(None),
            classes: RefCell::new(Vec::new()),
            top: Cell::new(0.0),
            height: Cell::new(0.0),
            styles: RefCell::new(BTreeMap::new()),
            children: RefCell::new(Vec::new()),
        }))
    }

    pub fn scroll_to(&self, scroll_y: f64) {
        self.inner.scroll_y.set(scroll_y);
        self.inner.dispatch(FrameKind::Scroll);
    }

    pub fn resize(&self, viewport_height: f64) {
        self.inner.viewport_height.set(viewport_height);
        self.inner.dispatch(FrameKind::Resize);
    }

    /// Observers that have not been detached
    pub fn live_observers(&self) -> usize {
        self.inner.observers.borrow().len()
    }
}

pub struct MockScroller {
    page: Rc<PageInner>,
}

impl Scroller for MockScroller {
    fn frame(&self, kind: FrameKind) -> ScrollFrame {
        self.page.frame(kind)
    }

    fn observe(&self, callback: Box<dyn FnMut(ScrollFrame)>) -> Observer {
        let id = self.page.next_id.get();
        self.page.next_id.set(id + 1);
        let attached = Rc::new(Cell::new(true));
        self.page.observers.borrow_mut().push(Slot {
            id,
            attached: Rc::clone(&attached),
            callback: Rc::new(RefCell::new(callback)),
        });

        let page = Rc::downgrade(&self.page);
        Observer::new(move || {
            attached.set(false);
            if let Some(page) = page.upgrade() {
                page.observers.borrow_mut().retain(|slot| slot.id != id);
            }
        })
    }
}

struct NodeInner {
    page: Weak<PageInner>,
    id: RefCell<Option<String>>,
    classes: RefCell<Vec<String>>,
    /// Document offset
    top: Cell<f64>,
    height: Cell<f64>,
    styles: RefCell<BTreeMap<String, String>>,
    children: RefCell<Vec<MockNode>>,
}

#[derive(Clone)]
pub struct MockNode(Rc<NodeInner>);

impl MockNode {
    pub fn with_id(self, id: &str) -> Self {
        *self.0.id.borrow_mut() = Some(id.to_string());
        self
    }

    pub fn with_class(self, class: &str) -> Self {
        self.0.classes.borrow_mut().push(class.to_string());
        self
    }

    /// Place the node at a document offset
    pub fn at(self, top: f64, height: f64) -> Self {
        self.0.top.set(top);
        self.0.height.set(height);
        self
    }

    pub fn append(&self, child: &MockNode) {
        self.0.children.borrow_mut().push(child.clone());
    }

    pub fn style(&self, name: &str) -> Option<String> {
        self.0.styles.borrow().get(name).cloned()
    }

    fn matches(&self, selector: &str) -> bool {
        if let Some(id) = selector.strip_prefix('#') {
            self.0.id.borrow().as_deref() == Some(id)
        } else if let Some(class) = selector.strip_prefix('.') {
            self.0.classes.borrow().iter().any(|c| c == class)
        } else {
            false
        }
    }
}

impl AnimNode for MockNode {
    fn find(&self, selector: &str) -> Option<Self> {
        for child in self.0.children.borrow().iter() {
            if child.matches(selector) {
                return Some(child.clone());
            }
            if let Some(found) = child.find(selector) {
                return Some(found);
            }
        }
        None
    }

    fn bounds(&self) -> NodeBounds {
        let scroll_y = self.0.page.upgrade().map(|p| p.scroll_y.get()).unwrap_or(0.0);
        NodeBounds {
            top: self.0.top.get() - scroll_y,
            height: self.0.height.get(),
        }
    }

    fn inline_style(&self, name: &str) -> Option<String> {
        self.style(name)
    }

    fn set_style(&self, name: &str, value: &str) {
        self.0.styles.borrow_mut().insert(name.to_string(), value.to_string());
    }

    fn remove_style(&self, name: &str) {
        self.0.styles.borrow_mut().remove(name);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_by_id_and_class() {
        let page = MockPage::new(800.0);
        let root = page.node();
        let section = page.node().with_id("section-0");
        let inner = page.node().with_class("wrapper");
        let content = page.node().with_class("content-container");
        root.append(&section);
        section.append(&inner);
        inner.append(&content);

        assert!(root.find("#section-0").is_some());
        assert!(root.find(".content-container").is_some());
        assert!(section.find("#section-0").is_none());
        assert!(root.find("#section-1").is_none());
    }

    #[test]
    fn test_observer_detached_mid_dispatch_is_skipped() {
        let page = MockPage::new(800.0);
        let calls = Rc::new(Cell::new(0));

        // The first observer drops the second while a frame is being delivered
        let second: Rc<RefCell<Option<Observer>>> = Rc::new(RefCell::new(None));
        let victim = Rc::clone(&second);
        let _first = page.scroller().observe(Box::new(move |_| {
            victim.borrow_mut().take();
        }));
        let counter = Rc::clone(&calls);
        *second.borrow_mut() = Some(page.scroller().observe(Box::new(move |_| {
            counter.set(counter.get() + 1);
        })));
        assert_eq!(page.live_observers(), 2);

        page.scroll_to(100.0);
        assert_eq!(calls.get(), 0);
        assert_eq!(page.live_observers(), 1);
    }

    #[test]
    fn test_bounds_follow_scroll() {
        let page = MockPage::new(800.0);
        let node = page.node().at(1200.0, 800.0);
        page.scroll_to(200.0);
        assert_eq!(node.bounds(), NodeBounds { top: 1000.0, height: 800.0 });
    }
}
