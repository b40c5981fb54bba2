//! Structured logging infrastructure
//!
//! Provides env_logger-based logging with secure handling of sensitive data
//! and proper integration with the standard log crate.

use log::{debug, error, info, warn};
use sha2::{Digest, Sha256};
use std::sync::Once;

static INIT_LOGGER: Once = Once::new();

/// Logging entry points shared by the certkey crates
pub struct LoggingTransformer;

impl LoggingTransformer {
    /// Initialize logging system (should be called once at application startup)
    ///
    /// Configure logging levels via `RUST_LOG` environment variable:
    /// - `RUST_LOG=debug` - Enable all debug logs
    /// - `RUST_LOG=info` - Enable info and above
    /// - `RUST_LOG=certkey_key=debug,certkey_x509=warn` - Module-specific levels
    pub fn init() {
        INIT_LOGGER.call_once(|| {
            // A host application may already own the global logger.
            if env_logger::Builder::from_default_env()
                .format_timestamp_micros()
                .try_init()
                .is_ok()
            {
                info!("Structured logging initialized");
            }
        });
    }

    /// Initialize logging for test environments
    ///
    /// Safe to call from every test; later calls are ignored.
    pub fn init_test() {
        let _ = env_logger::Builder::from_default_env()
            .is_test(true)
            .try_init();
    }

    /// Log a completed key generation without touching the key material
    pub fn log_key_generation(algorithm: &str, size_bits: usize, aba_applied: bool) {
        if aba_applied {
            debug!("Generated {algorithm} key ({size_bits} bits, ABA layout)");
        } else {
            debug!("Generated {algorithm} key ({size_bits} bits)");
        }
    }

    /// Log an alternative name decode, hashing each value that could identify a subject
    pub fn log_name_decoded(tag: &str, value: &str) {
        debug!("Decoded {tag} alternative name (value_hash: {})", Self::secure_hash(value));
    }

    /// Secure logging of cryptographic errors
    ///
    /// Error messages in this workspace never carry key bytes or name values,
    /// so the message is logged together with the operation.
    pub fn log_crypto_error(operation: &str, error: &dyn std::error::Error) {
        match error.source() {
            Some(cause) => error!("Cryptographic operation failed: {operation}: {error} ({cause})"),
            None => error!("Cryptographic operation failed: {operation}: {error}"),
        }
    }

    /// Log a recoverable condition that callers may want to know about
    pub fn log_degraded(component: &str, reason: &str) {
        warn!("{component} degraded: {reason}");
    }

    /// Cryptographically secure hashing for logging
    ///
    /// Returns `#` followed by the first 12 hex characters of the SHA-256 digest.
    #[must_use]
    pub fn secure_hash(value: &str) -> String {
        let hash = Sha256::digest(value.as_bytes());
        let hex_hash = format!("{hash:x}");
        format!("#{}", &hex_hash[..12])
    }
}
