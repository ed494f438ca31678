//! Pattern 4: Chain of Responsibility (nested closures)
//!
//! Run with: cargo run --bin chain

use event_patterns::chain::MyWindow;
use event_patterns::draw;

fn main() {
    println!("{}", draw::banner("Chain of Responsibility: Closures"));

    let mut window2 = MyWindow::new();

    // Handlers are free to call next as they wish.
    window2.add_on_click_handler(|x, y, next| {
        println!("{}", draw::line(x, y));
        next(x, y);
    });

    window2.notify_click(100, 200);
}
