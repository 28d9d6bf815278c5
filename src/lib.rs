#![cfg_attr(docsrs, feature(doc_cfg))]
//! # Evoke
//!
//! In-process, typed publish/subscribe dispatch over a tree of event types.
//!
//! Callers build a single-rooted hierarchy of [`EventType`]s, tag each
//! [`Event`] with one of them, and register [`EventHandler`]s against any
//! type in the tree. Dispatching an event walks its type chain from the
//! exact type up to the root and invokes every handler registered at every
//! visited level, so a handler subscribed to a type hears that type and
//! everything below it.
//!
//! ## Quick Start
//!
//! ```rust
//! use std::sync::{
//!     atomic::{AtomicUsize, Ordering},
//!     Arc,
//! };
//! use evoke::{Dispatcher, Event, EventType};
//!
//! let clicks = EventType::named("click");
//! let double_clicks = clicks.subtype_named("double-click");
//!
//! let seen = Arc::new(AtomicUsize::new(0));
//! let counter = {
//!     let seen = Arc::clone(&seen);
//!     Arc::new(move |_event: &Event| {
//!         seen.fetch_add(1, Ordering::Relaxed);
//!     })
//! };
//!
//! let mut dispatcher = Dispatcher::new();
//! dispatcher.register(&clicks, counter);
//!
//! // A double-click is a click: handlers at ancestor types fire too.
//! dispatcher.dispatch(&Event::with_type("button-7", &double_clicks));
//! dispatcher.dispatch(&Event::with_type("button-7", &clicks));
//! assert_eq!(seen.load(Ordering::Relaxed), 2);
//! ```
//!
//! ## Core Types
//!
//! | Type | Description |
//! |------|-------------|
//! | [`EventType`] | Node in the single-rooted type tree; identity-keyed |
//! | [`Event`] | Immutable (source, type) carrier handed to handlers |
//! | [`EventHandler`] / [`HandlerRef`] | Callback contract and its shared handle |
//! | [`Dispatcher`] | Single-threaded registry + ancestor-chain dispatch |
//! | [`SyncDispatcher`] | The same registry behind a readers-writer lock |
//! | [`Delivery`] | Pluggable final "hand event to handler" step |
//!
//! ## Hierarchy Dispatch
//!
//! Types are compared by identity, never by name, and every type except
//! [`EventType::root`] has exactly one supertype fixed at construction.
//! Registering under the root subscribes to everything; registering the
//! same handler twice means it runs twice. Registration order within one
//! type is invocation order. Dispatch with nothing registered is a no-op,
//! as is unregistering a handler that was never there.
//!
//! ## Thread Safety
//!
//! [`Dispatcher`] is for single-threaded ownership and does no locking.
//! [`SyncDispatcher`] guards the identical registry with one readers-writer
//! lock: dispatches share the read lock and run in parallel, mutations take
//! the write lock and wait for in-flight dispatches. Handlers run under the
//! read lock, so they must not re-enter `register`/`unregister` on the same
//! dispatcher; see the [`SyncDispatcher`] docs.
//!
//! ## Features
//!
//! - **`logging`** - built-in [`handlers::LogHandler`] that logs every
//!   received event through `tracing`.
//!
//! The [`testing`] module ships spy handlers ([`testing::Probe`],
//! [`testing::Trace`]) for asserting on dispatch behavior in tests.

mod delivery;
mod dispatcher;
mod error;
mod event;
mod event_type;
mod handler;
mod sync_dispatcher;
mod type_id;

pub mod testing;

#[cfg(feature = "logging")]
#[cfg_attr(docsrs, doc(cfg(feature = "logging")))]
pub mod handlers;

pub use delivery::{Delivery, DirectDelivery};
pub use dispatcher::Dispatcher;
pub use error::{Error, Result};
pub use event::{Event, EventSource};
pub use event_type::EventType;
pub use handler::{EventHandler, HandlerRef};
pub use sync_dispatcher::SyncDispatcher;
pub use type_id::EventTypeId;
