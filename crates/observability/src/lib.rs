//! Tracing/logging setup shared by every binary in the workspace.

/// Initialize process-wide observability (tracing/logging).
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    tracing::init();
}

/// Subscriber configuration (filters, formatting).
pub mod tracing;
