//! Blocking delay abstractions
//!
//! Provides a trait for blocking delays that can be implemented by
//! chip-specific timers or busy-wait loops.

/// Blocking millisecond delay
///
/// Implementations must block for at least the requested duration.
/// Drivers use this for hardware settle times (reset pulses and the
/// like), so overshooting is harmless but undershooting is not.
pub trait DelayMs {
    /// Block for at least `ms` milliseconds
    fn delay_ms(&mut self, ms: u32);
}
