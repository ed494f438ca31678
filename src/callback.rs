//! Pattern 1: Single Callback
//!
//! A window holds at most one click listener. Registering a new listener
//! replaces the old one, so the last registration wins.

use std::ops::{Deref, DerefMut};

use crate::draw;

pub type ClickListener = Box<dyn Fn(i32, i32)>;

#[derive(Default)]
pub struct Window {
    on_click: Option<ClickListener>,
}

impl Window {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers the click listener, dropping any previous one.
    pub fn set_on_click_listener(&mut self, listener: impl Fn(i32, i32) + 'static) {
        self.on_click = Some(Box::new(listener));
    }

    pub fn has_listener(&self) -> bool {
        self.on_click.is_some()
    }

    /// Passes a click to the registered listener, if any.
    pub fn notify_click(&self, x: i32, y: i32) {
        if let Some(listener) = &self.on_click {
            listener(x, y);
        }
    }
}

// =============================================================================
// A window that ships with its own behavior
// =============================================================================

/// Draws a solid circle on click until someone overwrites the listener.
pub struct MyWindow {
    window: Window,
}

impl MyWindow {
    pub fn new() -> Self {
        Self::with_output(|line| println!("{line}"))
    }

    /// Same as [`MyWindow::new`] but the drawn line goes to `out`.
    pub fn with_output(out: impl Fn(String) + 'static) -> Self {
        let mut window = Window::new();
        window.set_on_click_listener(move |x, y| out(draw::solid_circle(x, y)));
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

    fn recorder() -> Rc<RefCell<Vec<String>>> {
        Rc::new(RefCell::new(Vec::new()))
    }

    #[test]
    fn test_notify_without_listener_is_noop() {
        let window = Window::new();
        assert!(!window.has_listener());
        window.notify_click(1, 2);
    }

    #[test]
    fn test_listener_receives_coordinates() {
        let log = recorder();
        let sink = Rc::clone(&log);
        let mut window = Window::new();
        window.set_on_click_listener(move |x, y| sink.borrow_mut().push(draw::dot(x, y)));

        window.notify_click(100, 200);

        assert_eq!(*log.borrow(), vec!["Draw a dot at (100, 200)"]);
    }

    #[test]
    fn test_second_registration_overwrites_first() {
        let log = recorder();
        let mut window = Window::new();

        let first = Rc::clone(&log);
        window.set_on_click_listener(move |_, _| first.borrow_mut().push("first".to_string()));
        let second = Rc::clone(&log);
        window.set_on_click_listener(move |_, _| second.borrow_mut().push("second".to_string()));

        window.notify_click(0, 0);

        assert_eq!(*log.borrow(), vec!["second"]);
    }

    #[test]
    fn test_each_notify_fires_once() {
        let log = recorder();
        let sink = Rc::clone(&log);
        let mut window = Window::new();
        window.set_on_click_listener(move |x, _| sink.borrow_mut().push(x.to_string()));

        window.notify_click(1, 0);
        window.notify_click(2, 0);

        assert_eq!(*log.borrow(), vec!["1", "2"]);
    }

    #[test]
    fn test_my_window_draws_circle_by_default() {
        let log = recorder();
        let sink = Rc::clone(&log);
        let window = MyWindow::with_output(move |line| sink.borrow_mut().push(line));

        window.notify_click(100, 200);

        assert_eq!(*log.borrow(), vec!["Draw a solid circle at (100, 200)"]);
    }

    #[test]
    fn test_my_window_behavior_can_be_overwritten() {
        let log = recorder();
        let circle = Rc::clone(&log);
        let mut window = MyWindow::with_output(move |line| circle.borrow_mut().push(line));

        let dot = Rc::clone(&log);
        window.set_on_click_listener(move |x, y| dot.borrow_mut().push(draw::dot(x, y)));
        window.notify_click(100, 200);

        assert_eq!(*log.borrow(), vec!["Draw a dot at (100, 200)"]);
    }
}
