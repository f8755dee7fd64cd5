//! Benchmark workloads and sizing helpers for the carve pool arena.
//!
//! Provides deterministic workload builders shared by the criterion benches
//! and the demo example:
//!
//! - [`arena_for`]: an arena sized to hold exactly `count` objects of a type
//! - [`churn_sequence`]: a seeded alloc/free decision stream
//! - [`run_churn`]: drive an arena through a churn sequence

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use std::mem;
use std::ptr::NonNull;

use carve_arena::PoolArena;
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

/// One step of a churn workload.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChurnOp {
    /// Allocate one object.
    Alloc,
    /// Free the most recently allocated live object.
    Free,
}

/// Build an arena sized to hold exactly `count` objects of type `T`.
///
/// # Panics
///
/// Panics if `T` is zero-sized or `count` is zero (the arena rejects empty
/// buffers).
pub fn arena_for<T>(count: usize) -> PoolArena {
    PoolArena::with_capacity(count * mem::size_of::<T>()).unwrap()
}

/// Generate a deterministic alloc/free decision stream.
///
/// Uses a seeded ChaCha8 RNG, so identical seeds produce identical
/// sequences across runs and machines. `alloc_bias` is the probability of
/// an [`ChurnOp::Alloc`] at each step.
pub fn churn_sequence(seed: u64, len: usize, alloc_bias: f64) -> Vec<ChurnOp> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..len)
        .map(|_| {
            if rng.random_bool(alloc_bias) {
                ChurnOp::Alloc
            } else {
                ChurnOp::Free
            }
        })
        .collect()
}

/// Drive `arena` through a churn sequence of `u64` objects.
///
/// Maintains a stack of live allocations: `Alloc` pushes a new object,
/// `Free` returns the most recent one. Allocation failures and frees on an
/// empty stack are skipped, so any sequence is valid against any arena
/// size. Returns the number of successful allocations.
pub fn run_churn(arena: &mut PoolArena, ops: &[ChurnOp]) -> usize {
    let mut live: Vec<NonNull<u64>> = Vec::new();
    let mut completed = 0;
    for (i, op) in ops.iter().enumerate() {
        match op {
            ChurnOp::Alloc => {
                if let Ok(ptr) = arena.alloc(i as u64) {
                    live.push(ptr);
                    completed += 1;
                }
            }
            ChurnOp::Free => {
                if let Some(ptr) = live.pop() {
                    arena.free(ptr.as_ptr());
                }
            }
        }
    }
    completed
}
