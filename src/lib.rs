//! # Event Dispatch Patterns in Rust
//!
//! Short, independent examples of how a window can hand a click event to
//! user code, plus one trait-design trick for mutually exclusive roles.
//!
//! ## Dispatch policies
//! - [`callback`]: one slot, registering overwrites
//! - [`observer`]: a list, registering appends, everyone is notified
//! - [`chain_list`]: chain of responsibility as a `Box`-linked list
//! - [`chain`]: the same chain built from nested closures
//! - [`middleware`]: the closure chain applied to HTTP requests
//!
//! ## Trait design
//! - [`widget`]: stateful vs stateless widgets that cannot both be claimed
//!
//! Run a demo with: `cargo run --bin <name>`

pub mod callback;
pub mod chain;
pub mod chain_list;
pub mod config;
pub mod draw;
pub mod error;
pub mod logging;
pub mod middleware;
pub mod observer;
pub mod widget;

pub use config::ServerConfig;
pub use error::{Error, Result};
