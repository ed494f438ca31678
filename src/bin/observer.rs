//! Pattern 2: Observer List
//!
//! Run with: cargo run --bin observer

use event_patterns::draw;
use event_patterns::observer::MyWindow;

fn main() {
    println!("{}", draw::banner("Observer List"));

    // Adding a listener does not replace the built-in circle, both run.
    let mut window2 = MyWindow::new();
    window2.add_on_click_listener(|x, y| println!("{}", draw::dot(x, y)));

    window2.notify_click(100, 200);
}
