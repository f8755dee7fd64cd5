//! Fixed-capacity pool arena allocation for latency-sensitive object churn.
//!
//! A [`PoolArena`] owns one contiguous buffer, obtained from the system
//! allocator exactly once at construction. Objects are carved out of that
//! buffer with a first-fit scan over a free-region list and handed back by
//! address, so steady-state allocation and reclamation never touch the
//! general-purpose heap. This trades fragmentation handling for latency:
//! freed regions are never merged, and a request fails as soon as no single
//! contiguous region can hold it.
//!
//! # Architecture
//!
//! ```text
//! PoolArena (public allocator)
//! ├── RawBuffer (one-shot 16-byte-aligned system allocation)
//! └── FreeList → FreeRegion[] (first-fit claim, push-front release, no merging)
//! ```
//!
//! # Safety
//!
//! This crate contains `unsafe` code, confined to the internal `raw` module;
//! every unsafe block there carries a `// SAFETY:` comment. The pointers returned by
//! [`PoolArena::alloc`] and friends are lent, not owned: dereferencing them
//! is sound only while the arena is alive, and the arena performs natural
//! placement only: no alignment is inserted between differently-sized
//! requests. A `PoolArena` holds raw pointers and is therefore neither
//! `Send` nor `Sync`; the design is single-threaded by contract.
//!
//! # Quick start
//!
//! ```rust
//! use carve_arena::PoolArena;
//!
//! let mut arena = PoolArena::with_capacity(1024).unwrap();
//! let value = arena.alloc(25_u32).unwrap();
//! // SAFETY: `value` came from this arena, which is still alive, and the
//! // first allocation from a fresh arena is aligned for u32.
//! assert_eq!(unsafe { *value.as_ptr() }, 25);
//! arena.free(value.as_ptr());
//! assert_eq!(arena.report().allocated_bytes, 0);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

#[macro_use]
mod logging;

pub mod arena;
pub mod config;
pub mod error;
pub mod freelist;
mod raw;
pub mod report;

// Public re-exports for the primary API surface.
pub use arena::PoolArena;
pub use config::ArenaConfig;
pub use error::ArenaError;
pub use report::ArenaReport;
