//! Step observer trait for monitoring simulation progress.

/// Trait for observing simulation ticks.
///
/// Implement this to monitor world progress (e.g., for debugging,
/// visualization, or performance profiling). All methods have default
/// no-op implementations.
pub trait StepObserver {
    /// Called after the force registry has run for a sub-step.
    fn on_forces_applied(&mut self) {}

    /// Called after all particles have been integrated for a sub-step.
    fn on_integrate(&mut self) {}

    /// Called when a simulation step is fully complete.
    fn on_step_complete(&mut self) {}
}

/// A no-op observer that does nothing. Use as default when no observation
/// is needed.
pub struct NoOpStepObserver;

impl StepObserver for NoOpStepObserver {}
