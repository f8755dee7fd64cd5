//! The fixed-capacity pool arena.
//!
//! [`PoolArena`] is the public allocator: one backing buffer, one free list,
//! and a running count of handed-out bytes. Allocation is a first-fit scan
//! over the free list (linear in the number of regions); freeing is a
//! constant-time push. Nothing here suspends or performs I/O; the only
//! system-allocator call is the one-time buffer acquisition at construction.

use std::mem;
use std::ptr::NonNull;

use crate::config::ArenaConfig;
use crate::error::ArenaError;
use crate::freelist::{FreeList, FreeRegion};
use crate::raw::RawBuffer;
use crate::report::ArenaReport;

/// A fixed-capacity arena serving allocations from a single pre-allocated
/// buffer.
///
/// Pointers handed out by the arena are lent: the caller may read and write
/// through them while the arena is alive, and returns them via
/// [`PoolArena::free`]. Dropping the arena releases the buffer and
/// invalidates every outstanding pointer at once.
///
/// Holds raw pointers, so it is neither `Send` nor `Sync`; use one arena per
/// thread.
pub struct PoolArena {
    buffer: RawBuffer,
    free: FreeList,
    /// Bytes currently handed out, net of frees.
    allocated: usize,
}

impl PoolArena {
    /// Create an arena from a validated configuration.
    ///
    /// Allocates the backing buffer (the one use of the general-purpose
    /// allocator, exactly once per arena) and seeds the free list with a
    /// single region spanning the whole buffer.
    ///
    /// # Errors
    ///
    /// Returns [`ArenaError::ZeroCapacity`] for an empty configuration and
    /// [`ArenaError::BackingAllocationFailed`] when the system allocator
    /// cannot provide the buffer.
    pub fn new(config: ArenaConfig) -> Result<Self, ArenaError> {
        config.validate()?;
        let buffer = RawBuffer::allocate(config.capacity_bytes)?;
        debug!(
            "pool arena initialized: {} bytes, {} reserved free-list entries",
            config.capacity_bytes, config.region_capacity
        );
        Ok(Self {
            buffer,
            free: FreeList::seeded(config.capacity_bytes, config.region_capacity),
            allocated: 0,
        })
    }

    /// Create an arena with the given capacity and default configuration.
    ///
    /// # Errors
    ///
    /// Same conditions as [`PoolArena::new`].
    pub fn with_capacity(capacity_bytes: usize) -> Result<Self, ArenaError> {
        Self::new(ArenaConfig::new(capacity_bytes))
    }

    /// Total buffer capacity in bytes.
    pub fn capacity(&self) -> usize {
        self.buffer.len()
    }

    /// Bytes currently handed out, net of frees.
    pub fn allocated_bytes(&self) -> usize {
        self.allocated
    }

    /// Bytes currently free; always `capacity() - allocated_bytes()`.
    pub fn available_bytes(&self) -> usize {
        self.capacity() - self.allocated
    }

    /// Whether `ptr` addresses a byte inside the arena buffer.
    pub fn contains(&self, ptr: *const u8) -> bool {
        self.buffer.contains(ptr)
    }

    /// Number of free-list regions, zero-length entries included.
    ///
    /// Grows by one per free; never shrinks. Useful for observing
    /// fragmentation in tests and diagnostics.
    pub fn free_region_count(&self) -> usize {
        self.free.region_count()
    }

    /// Size of the largest single free region in bytes.
    ///
    /// The largest request that can currently succeed, regardless of how
    /// many free bytes exist in total.
    pub fn largest_free_region(&self) -> usize {
        self.free.largest()
    }

    /// Allocate `len` raw bytes.
    ///
    /// First-fit over the free list in most-recently-freed-first order. The
    /// returned memory is uninitialized, not zeroed.
    ///
    /// # Errors
    ///
    /// [`ArenaError::Exhausted`] when fewer than `len` bytes are free in
    /// total, [`ArenaError::Fragmented`] when enough bytes are free but no
    /// single contiguous region fits.
    pub fn alloc_bytes(&mut self, len: usize) -> Result<NonNull<u8>, ArenaError> {
        let offset = self.claim(len)?;
        Ok(self.buffer.at(offset))
    }

    /// Allocate an uninitialized slot for a `T`.
    ///
    /// Sized by `size_of::<T>()`. Placement is natural: no padding is
    /// inserted, so interleaving differently-sized types can place a `T` at
    /// an address not aligned for it; write and read through such pointers
    /// with unaligned accesses. Zero-sized types consume no arena bytes and
    /// yield a dangling (well-aligned, non-null) pointer.
    ///
    /// # Errors
    ///
    /// Same conditions as [`PoolArena::alloc_bytes`].
    pub fn alloc_uninit<T>(&mut self) -> Result<NonNull<T>, ArenaError> {
        if mem::size_of::<T>() == 0 {
            return Ok(NonNull::dangling());
        }
        Ok(self.alloc_bytes(mem::size_of::<T>())?.cast())
    }

    /// Allocate a slot for a `T` and move `value` into it.
    ///
    /// The store tolerates unaligned placement. On failure `value` is
    /// dropped.
    ///
    /// # Errors
    ///
    /// Same conditions as [`PoolArena::alloc_bytes`].
    pub fn alloc<T>(&mut self, value: T) -> Result<NonNull<T>, ArenaError> {
        if mem::size_of::<T>() == 0 {
            mem::forget(value);
            return Ok(NonNull::dangling());
        }
        let offset = self.claim(mem::size_of::<T>())?;
        self.buffer.write_value(offset, value);
        Ok(self.buffer.at(offset).cast())
    }

    /// Return a `T`-sized allocation to the arena.
    ///
    /// Accepts any pointer: null and addresses outside the buffer are
    /// silent no-ops, and membership is an address-range check only: the
    /// arena does not verify that `ptr` is an outstanding allocation, so a
    /// double free is silently accepted and corrupts the free list with a
    /// duplicate region. `T`'s destructor is NOT run; the arena lends
    /// memory, it does not own objects.
    pub fn free<T>(&mut self, ptr: *mut T) {
        if mem::size_of::<T>() == 0 {
            return;
        }
        self.free_bytes(ptr.cast::<u8>(), mem::size_of::<T>());
    }

    /// Return `len` raw bytes at `ptr` to the arena.
    ///
    /// Same membership semantics as [`PoolArena::free`]. The freed range
    /// becomes the first candidate for the next allocation of equal or
    /// smaller size; it is never merged with adjacent free regions.
    pub fn free_bytes(&mut self, ptr: *mut u8, len: usize) {
        if ptr.is_null() {
            return;
        }
        let Some(offset) = self.buffer.offset_of(ptr) else {
            return;
        };
        // A region must not extend past the buffer, whatever size the
        // caller claims the allocation had.
        let len = len.min(self.capacity() - offset);
        self.free.release(FreeRegion { offset, len });
        // Double frees are accepted; clamp instead of underflowing.
        self.allocated = self.allocated.saturating_sub(len);
        trace!("released {len} bytes at offset {offset}");
    }

    /// Snapshot the current occupancy counters.
    ///
    /// Pure read; two reports with no intervening allocation or free are
    /// identical.
    pub fn report(&self) -> ArenaReport {
        ArenaReport {
            total_bytes: self.capacity(),
            allocated_bytes: self.allocated,
            available_bytes: self.available_bytes(),
        }
    }

    /// First-fit claim of `len` bytes; returns the claimed offset.
    fn claim(&mut self, len: usize) -> Result<usize, ArenaError> {
        match self.free.claim_first_fit(len) {
            Some(offset) => {
                self.allocated += len;
                trace!("claimed {len} bytes at offset {offset}");
                Ok(offset)
            }
            None => Err(self.no_fit(len)),
        }
    }

    /// Classify a failed claim as exhaustion or fragmentation.
    fn no_fit(&self, requested: usize) -> ArenaError {
        let available = self.available_bytes();
        if requested > available {
            ArenaError::Exhausted {
                requested,
                available,
            }
        } else {
            ArenaError::Fragmented {
                requested,
                available,
                largest_free: self.free.largest(),
            }
        }
    }
}
