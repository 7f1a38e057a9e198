//! Identifier sources for created records.

use std::sync::atomic::{AtomicU64, Ordering};

use uuid::Uuid;

use mediconnect_core::traits::IdProvider;

/// Hands out 1, 2, 3, ... in call order.
#[derive(Debug)]
pub struct SequentialIds {
    next: AtomicU64,
}

impl SequentialIds {
    pub fn new() -> Self {
        Self::starting_at(1)
    }

    pub fn starting_at(first: u64) -> Self {
        Self {
            next: AtomicU64::new(first),
        }
    }
}

impl Default for SequentialIds {
    fn default() -> Self {
        Self::new()
    }
}

impl IdProvider for SequentialIds {
    fn next_id(&self) -> u64 {
        self.next.fetch_add(1, Ordering::Relaxed)
    }
}

/// Largest id `RandomIds` hands out: 2^53 - 1, the top of the range a JSON
/// number holds exactly in a JavaScript client.
pub const MAX_RANDOM_ID: u64 = (1 << 53) - 1;

/// Random ids in `0..=MAX_RANDOM_ID`, taken from the high bits of a v4 uuid.
///
/// Collisions are possible in principle and not checked.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomIds;

impl IdProvider for RandomIds {
    fn next_id(&self) -> u64 {
        ((Uuid::new_v4().as_u128() >> 64) as u64) & MAX_RANDOM_ID
    }
}
