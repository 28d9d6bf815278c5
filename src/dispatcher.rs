use std::{collections::HashMap, fmt, ptr, sync::Arc};

use crate::{Delivery, DirectDelivery, Event, EventType, HandlerRef};

type Registry = HashMap<EventType, Vec<HandlerRef>>;

/// Single-threaded dispatcher: the type → handlers registry plus the
/// ancestor-chain dispatch walk.
///
/// Registering a handler under a type subscribes it to events of that type
/// and of every subtype; [`dispatch`](Dispatcher::dispatch) walks the
/// event's type chain from the exact type to the root and invokes every
/// handler registered at every visited level, in registration order.
///
/// ```rust
/// use std::sync::Arc;
/// use evoke::{Dispatcher, Event, EventType};
///
/// let io = EventType::named("io");
/// let read = io.subtype_named("read");
///
/// let mut dispatcher = Dispatcher::new();
/// dispatcher.register(&io, Arc::new(|event: &Event| println!("io: {event}")));
///
/// // The handler sits at an ancestor level, so it fires for reads too.
/// dispatcher.dispatch(&Event::with_type("disk-1", &read));
/// ```
///
/// Intended for single-threaded ownership; mutations take `&mut self` and
/// there is no internal locking. Use [`SyncDispatcher`](crate::SyncDispatcher)
/// when several threads share one registry.
pub struct Dispatcher {
    // Allocated on the first register, dropped again when the last
    // handler goes. An empty sequence never stays in the map.
    handlers: Option<Registry>,
    delivery: Box<dyn Delivery>,
}

impl Dispatcher {
    /// Creates a dispatcher that delivers via [`DirectDelivery`].
    pub fn new() -> Dispatcher {
        Dispatcher::with_delivery(DirectDelivery)
    }

    /// Creates a dispatcher with a custom [`Delivery`] strategy.
    pub fn with_delivery(delivery: impl Delivery + 'static) -> Dispatcher {
        Dispatcher {
            handlers: None,
            delivery: Box::new(delivery),
        }
    }

    /// Registers `handler` for events of `event_type` and its subtypes.
    ///
    /// Registrations are not deduplicated: the same handler registered
    /// twice under one type is invoked twice per matching dispatch.
    pub fn register(&mut self, event_type: &EventType, handler: HandlerRef) {
        self.handlers
            .get_or_insert_with(HashMap::new)
            .entry(event_type.clone())
            .or_default()
            .push(handler);
        tracing::trace!(event_type = %event_type, "handler registered");
    }

    /// Removes the first registration of `handler` under `event_type`.
    ///
    /// Handlers are matched by [`HandlerRef`] pointer identity. If the
    /// handler was never registered under that type this is a silent
    /// no-op, never an error.
    pub fn unregister(&mut self, event_type: &EventType, handler: &HandlerRef) {
        let Some(registry) = self.handlers.as_mut() else {
            return;
        };
        let Some(sequence) = registry.get_mut(event_type) else {
            return;
        };
        let Some(position) = sequence.iter().position(|h| handler_eq(h, handler)) else {
            return;
        };

        sequence.remove(position);
        tracing::trace!(event_type = %event_type, "handler unregistered");

        if sequence.is_empty() {
            registry.remove(event_type);
            if registry.is_empty() {
                self.handlers = None;
            }
        }
    }

    /// Broadcasts `event` to every matching handler.
    ///
    /// Walks the event's type chain from the exact type up to the root.
    /// At each level with registrations, every handler runs once, in the
    /// order it was registered at that level, and receives `event`
    /// unchanged. A handler registered at two levels of the chain runs
    /// twice. With nothing registered this is a no-op.
    pub fn dispatch(&self, event: &Event) {
        let Some(registry) = self.handlers.as_ref() else {
            return;
        };
        for event_type in event.event_type().chain() {
            if let Some(sequence) = registry.get(event_type) {
                tracing::trace!(
                    event_type = %event_type,
                    handlers = sequence.len(),
                    "delivering"
                );
                for handler in sequence {
                    self.delivery.deliver(handler.as_ref(), event);
                }
            }
        }
    }

    /// Number of live registrations under exactly `event_type`.
    pub fn handler_count(&self, event_type: &EventType) -> usize {
        self.handlers
            .as_ref()
            .and_then(|registry| registry.get(event_type))
            .map_or(0, Vec::len)
    }

    /// Returns true while nothing at all is registered.
    pub fn is_empty(&self) -> bool {
        self.handlers.is_none()
    }
}

impl Default for Dispatcher {
    fn default() -> Self {
        Dispatcher::new()
    }
}

impl fmt::Debug for Dispatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Dispatcher")
            .field("types", &self.handlers.as_ref().map_or(0, HashMap::len))
            .finish_non_exhaustive()
    }
}

fn handler_eq(a: &HandlerRef, b: &HandlerRef) -> bool {
    // Identity of a registration is the Arc allocation, vtable aside.
    ptr::addr_eq(Arc::as_ptr(a), Arc::as_ptr(b))
}
