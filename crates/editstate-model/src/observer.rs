//! Diagnostics hooks.
//!
//! The model never writes output on its own. Anything worth reporting (a
//! validator that returned no value, a rejected input, an array element
//! dropped on reset) is handed to an [`Observer`]. The default is
//! [`NoopObserver`]; [`TracingObserver`] forwards to `tracing`.

/// Receiver for model diagnostics. Every hook defaults to doing nothing.
pub trait Observer {
    /// A validator reported success without producing a value.
    fn validator_misuse(&self, property: Option<&str>) {
        let _ = property;
    }

    /// A validator rejected an input.
    fn validation_failed(&self, property: Option<&str>, message: &str) {
        let _ = (property, message);
    }

    /// An invalid element was dropped by an array reset.
    fn element_dropped(&self, index: usize) {
        let _ = index;
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl Observer for NoopObserver {}

/// Forwards diagnostics as `tracing` events.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl Observer for TracingObserver {
    fn validator_misuse(&self, property: Option<&str>) {
        tracing::warn!(
            property = property.unwrap_or("<unnamed>"),
            "validator returned no value; input not applied"
        );
    }

    fn validation_failed(&self, property: Option<&str>, message: &str) {
        tracing::debug!(
            property = property.unwrap_or("<unnamed>"),
            message,
            "validation failed"
        );
    }

    fn element_dropped(&self, index: usize) {
        tracing::warn!(index, "array element is not valid, dropping it");
    }
}
