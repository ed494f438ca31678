//! Pattern 2: Observer List
//!
//! Listeners are appended and every one of them sees every click,
//! in the order they were added.

use std::ops::{Deref, DerefMut};

use crate::draw;

pub type ClickListener = Box<dyn Fn(i32, i32)>;

#[derive(Default)]
pub struct Window {
    on_click_listeners: Vec<ClickListener>,
}

impl Window {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_on_click_listener(&mut self, listener: impl Fn(i32, i32) + 'static) {
        self.on_click_listeners.push(Box::new(listener));
    }

    pub fn listener_count(&self) -> usize {
        self.on_click_listeners.len()
    }

    pub fn notify_click(&self, x: i32, y: i32) {
        for listener in &self.on_click_listeners {
            listener(x, y);
        }
    }
}

// =============================================================================
// A window that ships with its own behavior
// =============================================================================

/// Starts with a solid-circle listener; added listeners run after it.
pub struct MyWindow {
    window: Window,
}

impl MyWindow {
    pub fn new() -> Self {
        Self::with_output(|line| println!("{line}"))
    }

    pub fn with_output(out: impl Fn(String) + 'static) -> Self {
        let mut window = Window::new();
        window.add_on_click_listener(move |x, y| out(draw::solid_circle(x, y)));
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
