//! Pattern 3: Chain of Responsibility (linked list)
//!
//! Each handler lives in a node that owns the rest of the chain. A handler
//! receives a `next` callback and decides whether, when, and how often to
//! pass the click further down.
//!
//! Registering prepends, so the most recently added handler runs first.

use std::ops::{Deref, DerefMut};

use crate::draw;

/// A click handler: `handler(x, y, next)`.
pub type ClickHandler = Box<dyn Fn(i32, i32, &dyn Fn(i32, i32))>;

/// One node of the handler list.
pub struct ChainItem {
    handler: ClickHandler,
    next: Option<Box<ChainItem>>,
}

impl ChainItem {
    /// Passes a click to `item`; `None` is the end of the chain.
    pub fn call(item: Option<&ChainItem>, x: i32, y: i32) {
        let Some(item) = item else {
            return;
        };
        let rest = item.next.as_deref();
        (item.handler)(x, y, &|x, y| ChainItem::call(rest, x, y));
    }
}

#[derive(Default)]
pub struct Window {
    on_click_chain_head: Option<Box<ChainItem>>,
}

impl Window {
    pub fn new() -> Self {
        Self::default()
    }

    /// Puts `handler` in front of the current chain.
    pub fn add_on_click_handler<H>(&mut self, handler: H)
    where
        H: Fn(i32, i32, &dyn Fn(i32, i32)) + 'static,
    {
        let old = self.on_click_chain_head.take();
        self.on_click_chain_head = Some(Box::new(ChainItem {
            handler: Box::new(handler),
            next: old,
        }));
    }

    pub fn notify_click(&self, x: i32, y: i32) {
        ChainItem::call(self.on_click_chain_head.as_deref(), x, y);
    }

    pub fn len(&self) -> usize {
        std::iter::successors(self.on_click_chain_head.as_deref(), |item| {
            item.next.as_deref()
        })
        .count()
    }

    pub fn is_empty(&self) -> bool {
        self.on_click_chain_head.is_none()
    }
}

// Unlink iteratively; the default recursive drop can blow the stack on long chains.
impl Drop for Window {
    fn drop(&mut self) {
        let mut current = self.on_click_chain_head.take();
        while let Some(mut item) = current {
            current = item.next.take();
        }
    }
}

// =============================================================================
// A window that ships with its own behavior
// =============================================================================

/// Ends its chain with a solid-circle handler.
pub struct MyWindow {
    window: Window,
}

impl MyWindow {
    pub fn new() -> Self {
        Self::with_output(|line| println!("{line}"))
    }

    pub fn with_output(out: impl Fn(String) + 'static) -> Self {
        let mut window = Window::new();
        window.add_on_click_handler(move |x, y, _next| out(draw::solid_circle(x, y)));
        Self { window }
    }
}

impl Default for MyWindow {
    fn default() -> Self {
        Self::new()
    }
}

impl Deref for MyWindow {
    type Target = Window;

    fn deref(&self) -> &Window {
        &self.window
    }
}

impl DerefMut for MyWindow {
    fn deref_mut(&mut self) -> &mut Window {
        &mut self.window
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    type Log = Rc<RefCell<Vec<String>>>;

    fn recorder() -> Log {
        Rc::new(RefCell::new(Vec::new()))
    }

    fn forwarding(log: &Log, name: &'static str) -> impl Fn(i32, i32, &dyn Fn(i32, i32)) {
        let log = Rc::clone(log);
        move |x: i32, y: i32, next: &dyn Fn(i32, i32)| {
            log.borrow_mut().push(name.to_string());
            next(x, y);
        }
    }

    #[test]
    fn test_empty_chain_is_noop() {
        let window = Window::new();
        assert!(window.is_empty());
        assert_eq!(window.len(), 0);
        window.notify_click(1, 1);
    }

    #[test]
    fn test_call_on_none_is_noop() {
        ChainItem::call(None, 0, 0);
    }

    #[test]
    fn test_last_registered_runs_first() {
        let log = recorder();
        let mut window = Window::new();
        window.add_on_click_handler(forwarding(&log, "a"));
        window.add_on_click_handler(forwarding(&log, "b"));
        window.add_on_click_handler(forwarding(&log, "c"));

        window.notify_click(0, 0);

        assert_eq!(window.len(), 3);
        assert_eq!(*log.borrow(), vec!["c", "b", "a"]);
    }

    #[test]
    fn test_handler_without_next_suppresses_older_handlers() {
        let log = recorder();
        let mut window = Window::new();
        window.add_on_click_handler(forwarding(&log, "oldest"));
        let stop = Rc::clone(&log);
        window.add_on_click_handler(move |_, _, _next| stop.borrow_mut().push("stop".to_string()));
        window.add_on_click_handler(forwarding(&log, "newest"));

        window.notify_click(0, 0);

        assert_eq!(*log.borrow(), vec!["newest", "stop"]);
    }

    #[test]
    fn test_handler_can_wrap_the_rest_of_the_chain() {
        let log = recorder();
        let mut window = Window::new();
        window.add_on_click_handler(forwarding(&log, "inner"));
        let wrap = Rc::clone(&log);
        window.add_on_click_handler(move |x, y, next| {
            wrap.borrow_mut().push("before".to_string());
            next(x, y);
            wrap.borrow_mut().push("after".to_string());
        });

        window.notify_click(0, 0);

        assert_eq!(*log.borrow(), vec!["before", "inner", "after"]);
    }

    #[test]
    fn test_handler_can_rewrite_coordinates() {
        let log = recorder();
        let mut window = Window::new();
        let sink = Rc::clone(&log);
        window.add_on_click_handler(move |x, y, _| sink.borrow_mut().push(draw::dot(x, y)));
        window.add_on_click_handler(|x, y, next| next(x * 2, y + 1));

        window.notify_click(5, 5);

        assert_eq!(*log.borrow(), vec!["Draw a dot at (10, 6)"]);
    }

    #[test]
    fn test_my_window_demo_sequence() {
        let log = recorder();
        let circle = Rc::clone(&log);
        let mut window = MyWindow::with_output(move |line| circle.borrow_mut().push(line));
        let line = Rc::clone(&log);
        window.add_on_click_handler(move |x, y, next| {
            line.borrow_mut().push(draw::line(x, y));
            next(x, y);
        });

        window.notify_click(100, 200);

        assert_eq!(
            *log.borrow(),
            vec![
                "Draw a line from (90, 200) to (110, 200)",
                "Draw a solid circle at (100, 200)",
            ]
        );
    }

    #[test]
    fn test_long_chain_drops_without_overflow() {
        let mut window = Window::new();
        for _ in 0..200_000 {
            window.add_on_click_handler(|_, _, _| {});
        }
        assert_eq!(window.len(), 200_000);
        drop(window);
    }
}
