use std::sync::PoisonError;

/// The single error type for all evoke operations.
///
/// Fallible APIs return [`Result<T>`](Result). The only runtime failure in
/// the crate comes from the standard library lock underneath
/// [`SyncDispatcher`](crate::SyncDispatcher); it is mapped into a variant
/// here so callers handle one error type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The registry lock was poisoned by a thread that panicked while
    /// holding it in write mode. The registry may be mid-mutation, so
    /// every later operation on that dispatcher refuses to run.
    #[error("dispatcher lock poisoned: a thread panicked while mutating the registry")]
    Poisoned,
}

impl<T> From<PoisonError<T>> for Error {
    fn from(_: PoisonError<T>) -> Self {
        Error::Poisoned
    }
}

/// Alias for `std::result::Result<T, evoke::Error>`.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn poison_errors_map_to_the_crate_variant() {
        let err: Error = PoisonError::new(()).into();
        assert_eq!(err, Error::Poisoned);
        assert!(err.to_string().contains("poisoned"));
    }
}
