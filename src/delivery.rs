use crate::{Event, EventHandler};

/// Strategy for the final "hand this event to that handler" step.
///
/// The dispatch walk itself is fixed; this trait only replaces the call at
/// the end of it, so alternative listener shapes can be adapted without
/// touching the dispatcher. An override must still invoke every handler it
/// is given, exactly once, in the order it is given them.
///
/// Closures of type `Fn(&dyn EventHandler, &Event)` implement the trait
/// directly:
///
/// ```rust
/// use evoke::{Dispatcher, Event, EventHandler};
///
/// let dispatcher = Dispatcher::with_delivery(|handler: &dyn EventHandler, event: &Event| {
///     tracing::trace!("delivering {event}");
///     handler.handle(event);
/// });
/// # let _ = dispatcher;
/// ```
pub trait Delivery: Send + Sync {
    /// Invokes `handler` with `event`.
    fn deliver(&self, handler: &dyn EventHandler, event: &Event);
}

/// Default strategy: call [`EventHandler::handle`] directly.
#[derive(Debug, Default, Clone, Copy)]
pub struct DirectDelivery;

impl Delivery for DirectDelivery {
    fn deliver(&self, handler: &dyn EventHandler, event: &Event) {
        handler.handle(event);
    }
}

impl<F> Delivery for F
where
    F: Fn(&dyn EventHandler, &Event) + Send + Sync,
{
    fn deliver(&self, handler: &dyn EventHandler, event: &Event) {
        self(handler, event)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{
        atomic::{AtomicUsize, Ordering},
        Arc,
    };

    use super::*;
    use crate::{Event, HandlerRef};

    #[test]
    fn direct_delivery_invokes_the_handler() {
        let calls = Arc::new(AtomicUsize::new(0));
        let handler: HandlerRef = {
            let calls = Arc::clone(&calls);
            Arc::new(move |_event: &Event| {
                calls.fetch_add(1, Ordering::SeqCst);
            })
        };

        DirectDelivery.deliver(handler.as_ref(), &Event::new("src"));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn closures_are_delivery_strategies() {
        let delivered = Arc::new(AtomicUsize::new(0));
        let handled = Arc::new(AtomicUsize::new(0));

        let strategy = {
            let delivered = Arc::clone(&delivered);
            move |handler: &dyn EventHandler, event: &Event| {
                delivered.fetch_add(1, Ordering::SeqCst);
                handler.handle(event);
            }
        };
        let handler: HandlerRef = {
            let handled = Arc::clone(&handled);
            Arc::new(move |_event: &Event| {
                handled.fetch_add(1, Ordering::SeqCst);
            })
        };

        strategy.deliver(handler.as_ref(), &Event::new("src"));
        assert_eq!(delivered.load(Ordering::SeqCst), 1);
        assert_eq!(handled.load(Ordering::SeqCst), 1);
    }
}
