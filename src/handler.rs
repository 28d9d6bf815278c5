use std::sync::Arc;

use crate::Event;

/// The callback contract invoked once per matching dispatch.
///
/// Handlers carry whatever state they need; the dispatcher only calls
/// [`handle`](EventHandler::handle). Closures of type `Fn(&Event)` get the
/// trait for free, so a handler can be as small as
/// `Arc::new(|event: &Event| println!("{event}"))`.
pub trait EventHandler: Send + Sync {
    /// Processes one event.
    fn handle(&self, event: &Event);
}

/// Shared handle to a handler.
///
/// The `Arc` allocation is the registration identity: unregistering
/// compares handles by pointer, so keep the one you registered with.
pub type HandlerRef = Arc<dyn EventHandler>;

impl<F> EventHandler for F
where
    F: Fn(&Event) + Send + Sync,
{
    fn handle(&self, event: &Event) {
        self(event)
    }
}
