//! Arena configuration parameters.

use crate::error::ArenaError;

/// Configuration for a [`crate::PoolArena`].
///
/// Validated at arena construction; all values are immutable after creation.
#[derive(Clone, Debug)]
pub struct ArenaConfig {
    /// Total size of the backing buffer in bytes.
    ///
    /// Must be greater than zero. The buffer is allocated once, up front,
    /// and never grows.
    pub capacity_bytes: usize,

    /// Number of free-list entries to reserve at construction.
    ///
    /// Default: 64. Freeing pushes a new entry per call, so a steady-state
    /// alloc/free workload stays within the reservation and the bookkeeping
    /// collection never reallocates on the hot path.
    pub region_capacity: usize,
}

impl ArenaConfig {
    /// Default buffer capacity: 64 KiB.
    pub const DEFAULT_CAPACITY_BYTES: usize = 64 * 1024;

    /// Default free-list reservation.
    pub const DEFAULT_REGION_CAPACITY: usize = 64;

    /// Create a new arena config for the given buffer capacity.
    ///
    /// Uses default values for all other parameters.
    pub fn new(capacity_bytes: usize) -> Self {
        Self {
            capacity_bytes,
            region_capacity: Self::DEFAULT_REGION_CAPACITY,
        }
    }

    /// Check the configuration for values the arena cannot honour.
    ///
    /// # Errors
    ///
    /// Returns [`ArenaError::ZeroCapacity`] if `capacity_bytes` is zero.
    pub fn validate(&self) -> Result<(), ArenaError> {
        if self.capacity_bytes == 0 {
            return Err(ArenaError::ZeroCapacity);
        }
        Ok(())
    }
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self::new(Self::DEFAULT_CAPACITY_BYTES)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_preserves_capacity() {
        let config = ArenaConfig::new(4096);
        assert_eq!(config.capacity_bytes, 4096);
        assert_eq!(config.region_capacity, ArenaConfig::DEFAULT_REGION_CAPACITY);
    }

    #[test]
    fn default_config_validates() {
        ArenaConfig::default().validate().unwrap();
    }

    #[test]
    fn zero_capacity_rejected() {
        let config = ArenaConfig::new(0);
        assert_eq!(config.validate(), Err(ArenaError::ZeroCapacity));
    }
}
