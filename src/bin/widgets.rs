//! Pattern 5: Mutually Exclusive Roles
//!
//! Run with: cargo run --bin widgets

use event_patterns::draw;
use event_patterns::widget::{render, Counter, Label, MyWidget, Rendered, Widget, WiredWidget};

fn main() {
    event_patterns::logging::init("warn");
    println!("{}", draw::banner("Mutually Exclusive Roles"));

    let w = MyWidget::new("widget1");
    println!("{w}");

    let widgets: Vec<Box<dyn Widget>> = vec![
        Box::new(w),
        Box::new(Counter::new("counter", 1)),
        Box::new(Label::new("title", "hello")),
        Box::new(WiredWidget::new("wired")),
    ];

    println!("\n{}", draw::banner("Render"));
    for widget in &widgets {
        match render(widget.as_ref()) {
            Rendered::Stateful { widget, child } => {
                println!("{widget}: stateful, state built {child}")
            }
            Rendered::Stateless { widget, child } => {
                println!("{widget}: stateless, built {child}")
            }
            Rendered::Unhandled(widget) => println!("{widget}: no role, default branch"),
        }
    }
}
