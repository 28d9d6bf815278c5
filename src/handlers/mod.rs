//! Built-in handlers.
//!
//! Enable with the `logging` feature:
//!
//! ```toml
//! [dependencies]
//! evoke = { version = "0.1", features = ["logging"] }
//! ```

mod log;

pub use log::LogHandler;
