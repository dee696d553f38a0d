use std::sync::Arc;

use robolink_core::lifecycle::EnabledGate;

/// Minimal actuator write capability.
///
/// This is intentionally tiny so we can:
/// - unit test gating without hardware
/// - adapt a concrete runtime's actuator handles in the host layer
pub trait OutputLike<T>: Send + Sync {
    type Error: std::error::Error + Send + Sync + 'static;

    fn write(&self, value: &T) -> Result<(), Self::Error>;
}

/// Enable-gated actuator wrapper.
///
/// Writes are suppressed unless the robot is enabled, so subsystem code can
/// hold one of these and stay neutral through Disabled without checking the
/// mode itself.
pub struct GatedOutput<T, O>
where
    O: OutputLike<T>,
{
    gate: Arc<EnabledGate>,
    inner: Arc<O>,
    _phantom: std::marker::PhantomData<T>,
}

impl<T, O> GatedOutput<T, O>
where
    O: OutputLike<T>,
{
    pub fn new(gate: Arc<EnabledGate>, inner: Arc<O>) -> Self {
        Self {
            gate,
            inner,
            _phantom: std::marker::PhantomData,
        }
    }

    /// Write only when the enabled gate is on.
    ///
    /// Returns:
    /// - Ok(true): written
    /// - Ok(false): suppressed because the robot is disabled
    /// - Err(_): underlying output error
    pub fn write(&self, value: &T) -> Result<bool, O::Error> {
        if !self.gate.is_enabled() {
            return Ok(false);
        }
        self.inner.write(value)?;
        Ok(true)
    }

    /// Access to the underlying output (escape hatch).
    pub fn inner(&self) -> &Arc<O> {
        &self.inner
    }
}
