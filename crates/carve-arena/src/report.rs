//! Usage snapshots for diagnostics.

use std::fmt;

/// A point-in-time view of arena occupancy, in bytes.
///
/// Produced by [`crate::PoolArena::report`]; reading one never mutates the
/// arena, so two snapshots taken with no intervening allocation or free
/// compare equal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[must_use]
pub struct ArenaReport {
    /// Total buffer capacity.
    pub total_bytes: usize,
    /// Bytes currently handed out, net of frees.
    pub allocated_bytes: usize,
    /// Bytes currently free: always `total_bytes - allocated_bytes`.
    pub available_bytes: usize,
}

impl fmt::Display for ArenaReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "total memory: {} bytes", self.total_bytes)?;
        writeln!(f, "allocated memory: {} bytes", self.allocated_bytes)?;
        write!(f, "available memory: {} bytes", self.available_bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_renders_three_lines() {
        let report = ArenaReport {
            total_bytes: 1024,
            allocated_bytes: 12,
            available_bytes: 1012,
        };
        let text = report.to_string();
        assert_eq!(text.lines().count(), 3);
        assert!(text.contains("total memory: 1024 bytes"));
        assert!(text.contains("allocated memory: 12 bytes"));
        assert!(text.contains("available memory: 1012 bytes"));
    }
}
