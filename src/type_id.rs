use std::{fmt, hash};

use uuid::Uuid;

/// Identity token of an [`EventType`](crate::EventType).
///
/// Minted once when the type is constructed and never reused. Equality and
/// hashing of event types go through this token, never through names: two
/// types that happen to share a name remain distinct.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, hash::Hash)]
pub struct EventTypeId(u128);

impl EventTypeId {
    pub(crate) fn mint() -> Self {
        Self(Uuid::new_v4().as_u128())
    }

    /// Returns the raw token value.
    pub fn value(&self) -> u128 {
        self.0
    }
}

impl fmt::Display for EventTypeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", Uuid::from_u128(self.0))
    }
}
