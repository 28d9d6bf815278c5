use std::sync::{Arc, Mutex};

use crate::{Event, HandlerRef};

/// A shared invocation log.
///
/// [`handler`](Trace::handler) mints handlers that append their label on
/// every invocation; [`entries`](Trace::entries) then yields the combined
/// order in which the dispatcher ran them. Clones share the same log.
#[derive(Debug, Default, Clone)]
pub struct Trace {
    log: Arc<Mutex<Vec<String>>>,
}

impl Trace {
    pub fn new() -> Trace {
        Trace::default()
    }

    /// Mints a handler that appends `label` for every event it receives.
    pub fn handler(&self, label: impl Into<String>) -> HandlerRef {
        let label = label.into();
        let log = Arc::clone(&self.log);
        Arc::new(move |_event: &Event| {
            log.lock().expect("trace log poisoned").push(label.clone());
        })
    }

    /// Appends an entry directly, for marks made by the test itself.
    pub fn note(&self, label: impl Into<String>) {
        self.log
            .lock()
            .expect("trace log poisoned")
            .push(label.into());
    }

    /// Labels in invocation order.
    pub fn entries(&self) -> Vec<String> {
        self.log.lock().expect("trace log poisoned").clone()
    }

    /// Forgets everything recorded so far.
    pub fn clear(&self) {
        self.log.lock().expect("trace log poisoned").clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::EventHandler;

    #[test]
    fn labels_arrive_in_invocation_order() {
        let trace = Trace::new();
        let a = trace.handler("a");
        let b = trace.handler("b");

        b.handle(&Event::new("src"));
        a.handle(&Event::new("src"));
        trace.note("done");

        assert_eq!(trace.entries(), ["b", "a", "done"]);
    }

    #[test]
    fn clear_resets_the_log() {
        let trace = Trace::new();
        trace.note("stale");
        trace.clear();
        assert!(trace.entries().is_empty());
    }
}
