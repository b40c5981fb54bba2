//! Common infrastructure shared by the certkey crates
//!
//! Currently this is the logging bootstrap: `env_logger` initialization driven
//! by `RUST_LOG`, plus helpers that log cryptographic events without leaking
//! key material or subject identifiers.

#![forbid(unsafe_code)]

pub mod logging;

pub use logging::LoggingTransformer;
