//! Pattern 4: Chain of Responsibility (nested closures)
//!
//! Same contract as [`crate::chain_list`], but there is no node type: each
//! registration captures the previously composed chain inside a new closure.

use std::cell::RefCell;
use std::ops::{Deref, DerefMut};
use std::rc::Rc;

use crate::draw;

type ComposedChain = Box<dyn Fn(i32, i32)>;

/// Where a closure keeps the chain it wraps. The window holds a second
/// handle to every slot so it can empty them one by one on drop.
type ChainSlot = Rc<RefCell<Option<ComposedChain>>>;

#[derive(Default)]
pub struct Window {
    on_click_chain: Option<ComposedChain>,
    slots: Vec<ChainSlot>,
}

impl Window {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wraps the current chain so that `handler` runs first and gets the
    /// old chain as `next`.
    pub fn add_on_click_handler<H>(&mut self, handler: H)
    where
        H: Fn(i32, i32, &dyn Fn(i32, i32)) + 'static,
    {
        let old: ChainSlot = Rc::new(RefCell::new(self.on_click_chain.take()));
        self.slots.push(Rc::clone(&old));
        self.on_click_chain = Some(Box::new(move |x, y| {
            let next = |x: i32, y: i32| {
                if let Some(old) = &*old.borrow() {
                    old(x, y);
                }
            };
            handler(x, y, &next);
        }));
    }

    pub fn notify_click(&self, x: i32, y: i32) {
        if let Some(chain) = &self.on_click_chain {
            chain(x, y);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.on_click_chain.is_none()
    }
}

// Each closure owns the one before it, so the default drop recurses once per
// handler. Emptying the slots newest first frees one closure at a time.
impl Drop for Window {
    fn drop(&mut self) {
        for slot in self.slots.iter().rev() {
            let older = slot.borrow_mut().take();
            drop(older);
        }
    }
}

// =============================================================================
// A window that ships with its own behavior
// =============================================================================

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
