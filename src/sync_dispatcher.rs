use std::sync::RwLock;

use crate::{Delivery, Dispatcher, Event, EventType, HandlerRef, Result};

/// Concurrent dispatcher: a [`Dispatcher`] behind one readers-writer lock.
///
/// Same registry, same walk. The lock discipline is the classic one:
///
/// - [`register`](SyncDispatcher::register) and
///   [`unregister`](SyncDispatcher::unregister) take the **write** lock for
///   the duration of the mutation.
/// - [`dispatch`](SyncDispatcher::dispatch) takes the **read** lock for the
///   whole ancestor-chain walk, handler invocations included. Any number
///   of dispatches proceed in parallel; a writer waits for every in-flight
///   dispatch to finish and holds off later calls until it is done.
///
/// Handlers run while the read lock is held, so a slow or blocking handler
/// delays pending registrations.
///
/// # Reentrancy
///
/// A handler must not call `register` or `unregister` on the dispatcher
/// that is currently invoking it: the write lock would be requested while
/// the same call stack holds the read lock, which deadlocks. Collect such
/// changes during dispatch and apply them after `dispatch` returns.
///
/// # Errors
///
/// Every operation returns [`Error::Poisoned`](crate::Error::Poisoned) if
/// a thread panicked while holding the write lock. A handler panic during
/// dispatch unwinds through a read guard and does not poison the lock.
pub struct SyncDispatcher {
    inner: RwLock<Dispatcher>,
}

impl SyncDispatcher {
    /// Creates a dispatcher that delivers via
    /// [`DirectDelivery`](crate::DirectDelivery).
    pub fn new() -> SyncDispatcher {
        SyncDispatcher {
            inner: RwLock::new(Dispatcher::new()),
        }
    }

    /// Creates a dispatcher with a custom [`Delivery`] strategy.
    pub fn with_delivery(delivery: impl Delivery + 'static) -> SyncDispatcher {
        SyncDispatcher {
            inner: RwLock::new(Dispatcher::with_delivery(delivery)),
        }
    }

    /// Registers `handler` for events of `event_type` and its subtypes.
    ///
    /// Blocks until in-flight dispatches finish. See
    /// [`Dispatcher::register`] for the registration semantics.
    pub fn register(&self, event_type: &EventType, handler: HandlerRef) -> Result<()> {
        self.inner.write()?.register(event_type, handler);
        Ok(())
    }

    /// Removes the first registration of `handler` under `event_type`.
    ///
    /// Blocks until in-flight dispatches finish. See
    /// [`Dispatcher::unregister`] for the matching semantics.
    pub fn unregister(&self, event_type: &EventType, handler: &HandlerRef) -> Result<()> {
        self.inner.write()?.unregister(event_type, handler);
        Ok(())
    }

    /// Broadcasts `event` to every matching handler.
    ///
    /// Holds the read lock across the whole walk, so the registry a
    /// dispatch observes is a consistent snapshot: a concurrent
    /// registration either happens entirely before or entirely after it.
    pub fn dispatch(&self, event: &Event) -> Result<()> {
        self.inner.read()?.dispatch(event);
        Ok(())
    }

    /// Number of live registrations under exactly `event_type`.
    pub fn handler_count(&self, event_type: &EventType) -> Result<usize> {
        Ok(self.inner.read()?.handler_count(event_type))
    }

    /// Returns true while nothing at all is registered.
    pub fn is_empty(&self) -> Result<bool> {
        Ok(self.inner.read()?.is_empty())
    }
}

impl Default for SyncDispatcher {
    fn default() -> Self {
        SyncDispatcher::new()
    }
}
