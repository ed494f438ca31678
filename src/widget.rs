//! Pattern 5: Mutually Exclusive Roles
//!
//! A widget is either *stateless* (it builds its child right away) or
//! *stateful* (it creates a state object that builds the child later).
//! The renderer must never see a widget that claims both.
//!
//! Rust traits are opt-in, so nothing satisfies [`StatefulWidget`] or
//! [`StatelessWidget`] by accident. What still needs guarding is a type that
//! implements both. The guard is the single role method [`Widget::kind`]:
//! a type has exactly one `kind`, so it can show the renderer at most one
//! role. The [`stateful_widget!`](crate::stateful_widget) and
//! [`stateless_widget!`](crate::stateless_widget) macros write the `Widget`
//! impl with the matching marker, so claiming both roles does not compile:
//!
//! ```compile_fail,E0119
//! use event_patterns::widget::{StatefulWidget, StatelessWidget, Widget, WidgetId, WidgetState};
//! use event_patterns::{stateful_widget, stateless_widget};
//!
//! struct Both {
//!     id: WidgetId,
//! }
//!
//! impl StatefulWidget for Both {
//!     fn create_state(&self) -> Box<dyn WidgetState> {
//!         unimplemented!()
//!     }
//! }
//!
//! impl StatelessWidget for Both {
//!     fn build(&self) -> Box<dyn Widget> {
//!         unimplemented!()
//!     }
//! }
//!
//! stateful_widget!(Both, id);
//! stateless_widget!(Both, id); // error[E0119]: conflicting implementations
//! ```

use std::fmt;

use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct WidgetId(String);

impl WidgetId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for WidgetId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl fmt::Display for WidgetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The role a widget presents to [`render`].
pub enum WidgetKind<'a> {
    Stateful(&'a dyn StatefulWidget),
    Stateless(&'a dyn StatelessWidget),
    Other,
}

pub trait Widget {
    /// Unique identifier of the widget.
    fn id(&self) -> WidgetId;

    /// Role marker. Left at the default, the widget is neither stateful
    /// nor stateless, whatever other traits it implements.
    fn kind(&self) -> WidgetKind<'_> {
        WidgetKind::Other
    }
}

pub trait WidgetState {
    /// Builds the widget with its state.
    fn build(&self) -> Box<dyn Widget>;
}

pub trait StatefulWidget: Widget {
    fn create_state(&self) -> Box<dyn WidgetState>;
}

pub trait StatelessWidget: Widget {
    fn build(&self) -> Box<dyn Widget>;
}

/// Implements [`Widget`] for a [`StatefulWidget`], reading the id from `$field`.
#[macro_export]
macro_rules! stateful_widget {
    ($ty:ty, $field:ident) => {
        impl $crate::widget::Widget for $ty {
            fn id(&self) -> $crate::widget::WidgetId {
                self.$field.clone()
            }

            fn kind(&self) -> $crate::widget::WidgetKind<'_> {
                $crate::widget::WidgetKind::Stateful(self)
            }
        }
    };
}

/// Implements [`Widget`] for a [`StatelessWidget`], reading the id from `$field`.
#[macro_export]
macro_rules! stateless_widget {
    ($ty:ty, $field:ident) => {
        impl $crate::widget::Widget for $ty {
            fn id(&self) -> $crate::widget::WidgetId {
                self.$field.clone()
            }

            fn kind(&self) -> $crate::widget::WidgetKind<'_> {
                $crate::widget::WidgetKind::Stateless(self)
            }
        }
    };
}

// =============================================================================
// Rendering
// =============================================================================

/// What [`render`] did with a widget.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rendered {
    /// State was created and built `child`.
    Stateful { widget: WidgetId, child: WidgetId },
    /// The widget built `child` directly.
    Stateless { widget: WidgetId, child: WidgetId },
    /// No role marker: fell through to the default branch.
    Unhandled(WidgetId),
}

/// A toy framework entry point that branches on the widget's role.
pub fn render(widget: &dyn Widget) -> Rendered {
    match widget.kind() {
        WidgetKind::Stateful(stateful) => {
            let state = stateful.create_state();
            let child = state.build().id();
            debug!(widget = %widget.id(), %child, "rendered stateful widget");
            Rendered::Stateful {
                widget: widget.id(),
                child,
            }
        }
        WidgetKind::Stateless(stateless) => {
            let child = stateless.build().id();
            debug!(widget = %widget.id(), %child, "rendered stateless widget");
            Rendered::Stateless {
                widget: widget.id(),
                child,
            }
        }
        WidgetKind::Other => {
            debug!(widget = %widget.id(), "no role marker, default branch");
            Rendered::Unhandled(widget.id())
        }
    }
}

// =============================================================================
// Sample widgets
// =============================================================================

/// A plain widget with no role.
#[derive(Debug, Clone)]
pub struct MyWidget {
    id: WidgetId,
}

impl MyWidget {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: WidgetId::new(id),
        }
    }
}

impl Widget for MyWidget {
    fn id(&self) -> WidgetId {
        self.id.clone()
    }
}

impl fmt::Display for MyWidget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "myWidget({:?})", self.id.as_str())
    }
}

pub struct WiredState;

impl WidgetState for WiredState {
    fn build(&self) -> Box<dyn Widget> {
        Box::new(MyWidget::new("wired-stateful"))
    }
}

/// Implements both role traits but never sets a role marker, so the
/// renderer treats it as neither.
pub struct WiredWidget {
    id: WidgetId,
}

impl WiredWidget {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: WidgetId::new(id),
        }
    }
}

impl Widget for WiredWidget {
    fn id(&self) -> WidgetId {
        self.id.clone()
    }
}

impl StatefulWidget for WiredWidget {
    fn create_state(&self) -> Box<dyn WidgetState> {
        Box::new(WiredState)
    }
}

impl StatelessWidget for WiredWidget {
    fn build(&self) -> Box<dyn Widget> {
        Box::new(MyWidget::new("wired-stateless"))
    }
}

pub struct CounterState {
    count: u32,
}

impl WidgetState for CounterState {
    fn build(&self) -> Box<dyn Widget> {
        Box::new(MyWidget::new(format!("count-{}", self.count)))
    }
}

pub struct Counter {
    id: WidgetId,
    start: u32,
}

impl Counter {
    pub fn new(id: impl Into<String>, start: u32) -> Self {
        Self {
            id: WidgetId::new(id),
            start,
        }
    }
}

crate::stateful_widget!(Counter, id);

impl StatefulWidget for Counter {
    fn create_state(&self) -> Box<dyn WidgetState> {
        Box::new(CounterState { count: self.start })
    }
}

pub struct Label {
    id: WidgetId,
    text: String,
}

impl Label {
    pub fn new(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: WidgetId::new(id),
            text: text.into(),
        }
    }
}

crate::stateless_widget!(Label, id);

impl StatelessWidget for Label {
    fn build(&self) -> Box<dyn Widget> {
        Box::new(MyWidget::new(format!("label-{}", self.text)))
    }
}
