//! Pattern 1: Single Callback
//!
//! Run with: cargo run --bin callback

use event_patterns::callback::{MyWindow, Window};
use event_patterns::draw;

fn main() {
    println!("{}", draw::banner("Single Callback"));

    let mut window1 = Window::new();
    window1.set_on_click_listener(|x, y| println!("{}", draw::dot(x, y)));

    // Simulate a click event; a real window would get this from the OS.
    window1.notify_click(100, 200);

    // window2 draws a circle out of the box, but the only slot gets overwritten.
    let mut window2 = MyWindow::new();
    window2.set_on_click_listener(|x, y| println!("{}", draw::dot(x, y)));
    window2.notify_click(100, 200);
}
