use std::sync::{Arc, Mutex};

use crate::{Event, EventHandler, HandlerRef};

/// A recording handler for tests.
///
/// Every event the probe receives is noted as its type's display form.
/// Clones share the same records, so a probe can stay on the test thread
/// while its handlers run inside a dispatcher on other threads.
#[derive(Debug, Default, Clone)]
pub struct Probe {
    received: Arc<Mutex<Vec<String>>>,
}

impl Probe {
    pub fn new() -> Probe {
        Probe::default()
    }

    /// Mints a registrable handle to this probe.
    ///
    /// Each call allocates a fresh [`HandlerRef`], which is a distinct
    /// registration identity; hold on to the returned handle if the test
    /// unregisters it later.
    pub fn handler(&self) -> HandlerRef {
        Arc::new(self.clone())
    }

    /// Number of events received so far.
    pub fn received(&self) -> usize {
        self.records().len()
    }

    /// Display forms of the received events' types, in arrival order.
    pub fn event_types(&self) -> Vec<String> {
        self.records().clone()
    }

    fn records(&self) -> std::sync::MutexGuard<'_, Vec<String>> {
        self.received.lock().expect("probe records poisoned")
    }
}

impl EventHandler for Probe {
    fn handle(&self, event: &Event) {
        self.records().push(event.event_type().to_string());
    }
}
