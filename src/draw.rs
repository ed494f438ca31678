//! Output lines shared by the click demos.

use colored::Colorize;

pub fn dot(x: i32, y: i32) -> String {
    format!("Draw a dot at ({x}, {y})")
}

pub fn solid_circle(x: i32, y: i32) -> String {
    format!("Draw a solid circle at ({x}, {y})")
}

/// A horizontal line 20 units long, centered on the click. The ends are
/// computed in `i64` so clicks at the edge of the `i32` range still print.
pub fn line(x: i32, y: i32) -> String {
    let x = i64::from(x);
    format!("Draw a line from ({}, {y}) to ({}, {y})", x - 10, x + 10)
}

/// Section header printed by the demo binaries.
pub fn banner(title: &str) -> String {
    let header = format!("=== {title} ===");
    if std::env::var("NO_COLOR").is_ok() {
        header
    } else {
        header.bold().cyan().to_string()
    }
}
