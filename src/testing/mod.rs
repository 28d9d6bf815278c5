//! Spy utilities for asserting on dispatch behavior in tests.
//!
//! Two small tools, both safe to share across the threads a
//! [`SyncDispatcher`](crate::SyncDispatcher) test spawns:
//!
//! - [`Probe`] records every event a handler receives.
//! - [`Trace`] mints labeled handlers that append to one shared log, which
//!   makes cross-handler invocation order visible.
//!
//! ```rust
//! use evoke::{Dispatcher, Event, EventType};
//! use evoke::testing::Trace;
//!
//! let ty = EventType::named("observed");
//! let trace = Trace::new();
//!
//! let mut dispatcher = Dispatcher::new();
//! dispatcher.register(&ty, trace.handler("A"));
//! dispatcher.register(&ty, trace.handler("B"));
//!
//! dispatcher.dispatch(&Event::with_type("src", &ty));
//! assert_eq!(trace.entries(), ["A", "B"]);
//! ```
//!
//! These types are test instrumentation. They hold their records behind a
//! mutex and clone freely; keep them out of hot production paths.

mod probe;
mod trace;

pub use probe::Probe;
pub use trace::Trace;
