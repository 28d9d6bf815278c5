use std::{any::Any, fmt, sync::Arc};

use crate::EventType;

/// Source object attached to every [`Event`].
///
/// The source identifies where an event came from and is opaque to the
/// dispatcher; handlers that care can recover the concrete type through
/// [`Event::source_as`]. Implemented automatically for anything that is
/// `Debug + Send + Sync + 'static`, so plain values work as sources:
///
/// ```rust
/// use evoke::Event;
///
/// let event = Event::new("sensor-3");
/// assert_eq!(event.source_as::<&str>(), Some(&"sensor-3"));
/// ```
pub trait EventSource: fmt::Debug + Send + Sync + 'static {
    /// Upcast used by [`Event::source_as`] for downcasting.
    fn as_any(&self) -> &dyn Any;
}

impl<T: fmt::Debug + Send + Sync + 'static> EventSource for T {
    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// An immutable (source, [`EventType`]) pair broadcast to handlers.
///
/// Created per occurrence and read-only afterwards. The dispatcher hands
/// the same instance to every matching handler and keeps no reference to
/// it once dispatch returns.
#[derive(Clone)]
pub struct Event {
    source: Arc<dyn EventSource>,
    event_type: EventType,
}

impl Event {
    /// Creates an event of the [root type](EventType::root).
    pub fn new(source: impl EventSource) -> Event {
        Event::with_type(source, &EventType::root())
    }

    /// Creates an event of the given type.
    pub fn with_type(source: impl EventSource, event_type: &EventType) -> Event {
        Event {
            source: Arc::new(source),
            event_type: event_type.clone(),
        }
    }

    /// Creates an event from an already shared source.
    ///
    /// Use this when handlers compare sources by identity; the caller's
    /// `Arc` is carried as-is.
    pub fn from_shared(source: Arc<dyn EventSource>, event_type: &EventType) -> Event {
        Event {
            source,
            event_type: event_type.clone(),
        }
    }

    /// Returns the source object.
    pub fn source(&self) -> &Arc<dyn EventSource> {
        &self.source
    }

    /// Downcasts the source to a concrete type.
    pub fn source_as<T: 'static>(&self) -> Option<&T> {
        self.source.as_any().downcast_ref::<T>()
    }

    /// Returns the type this event was tagged with.
    pub fn event_type(&self) -> &EventType {
        &self.event_type
    }
}

impl fmt::Debug for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Event")
            .field("type", &self.event_type)
            .field("source", &self.source)
            .finish()
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Event {{ type: {}, source: {:?} }}",
            self.event_type, self.source
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    struct Widget {
        id: u32,
    }

    #[test]
    fn new_defaults_to_the_root_type() {
        let event = Event::new(Widget { id: 1 });
        assert!(event.event_type().is_root());
    }

    #[test]
    fn with_type_tags_the_event() {
        let clicks = EventType::named("click");
        let event = Event::with_type(Widget { id: 2 }, &clicks);
        assert_eq!(event.event_type(), &clicks);
    }

    #[test]
    fn source_downcasts_to_the_concrete_type() {
        let event = Event::new(Widget { id: 7 });
        assert_eq!(event.source_as::<Widget>(), Some(&Widget { id: 7 }));
        assert_eq!(event.source_as::<String>(), None);
    }

    #[test]
    fn from_shared_keeps_source_identity() {
        let source: Arc<dyn EventSource> = Arc::new(Widget { id: 3 });
        let event = Event::from_shared(Arc::clone(&source), &EventType::root());
        assert!(Arc::ptr_eq(event.source(), &source));
    }

    #[test]
    fn display_combines_type_and_source() {
        let clicks = EventType::named("click");
        let event = Event::with_type(Widget { id: 9 }, &clicks);
        let text = event.to_string();
        assert!(text.contains("click"));
        assert!(text.contains("Widget"));
    }
}
