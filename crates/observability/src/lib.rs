//! Shared tracing/logging setup for corebank services.
//!
//! The domain crates emit structured events through `tracing`; this crate
//! owns the process-wide subscriber so every embedding binary configures
//! logging the same way.

/// Tracing configuration (filters, output format).
pub mod tracing;

/// Initialize process-wide logging.
///
/// Safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    tracing::init();
}
