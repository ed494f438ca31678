//! Pattern 3: Chain of Responsibility (linked list)
//!
//! Run with: cargo run --bin chain_list

use event_patterns::chain_list::MyWindow;
use event_patterns::draw;

fn main() {
    println!("{}", draw::banner("Chain of Responsibility: Linked List"));

    let mut window2 = MyWindow::new();

    // Handlers are free to call next as they wish.
    window2.add_on_click_handler(|x, y, next| {
        println!("{}", draw::line(x, y));
        next(x, y);
    });

    window2.notify_click(100, 200);
}
