use crate::{Event, EventHandler};

/// A handler that logs every event it receives through `tracing`.
///
/// Register it under the [root type](crate::EventType::root) for a debug
/// line per dispatched event, or under a narrower type to watch a single
/// branch of the tree.
///
/// ```rust
/// use std::sync::Arc;
/// use evoke::{Dispatcher, EventType};
/// use evoke::handlers::LogHandler;
///
/// let mut dispatcher = Dispatcher::new();
/// dispatcher.register(&EventType::root(), Arc::new(LogHandler::new()));
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct LogHandler;

impl LogHandler {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl EventHandler for LogHandler {
    fn handle(&self, event: &Event) {
        tracing::debug!(
            event_type = %event.event_type(),
            source = ?event.source(),
            "event received"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Event, EventType};

    #[test]
    fn logs_without_touching_the_event() {
        let clicks = EventType::named("click");
        let event = Event::with_type("button", &clicks);

        LogHandler::new().handle(&event);
        assert_eq!(event.event_type(), &clicks);
    }
}
