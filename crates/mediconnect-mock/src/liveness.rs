//! Discarding results that arrive after their consumer went away.
//!
//! A view takes a `MountHandle` when it mounts and calls `unmount` when it
//! leaves. Facade calls wrapped in `deliver_if_mounted` still run to
//! completion, but their result is dropped if the handle was unmounted in the
//! meantime.

use std::{
    future::Future,
    sync::{
        atomic::{AtomicBool, Ordering},
        Arc,
    },
};

use tracing::debug;

/// Liveness flag shared between a view and its in-flight calls.
#[derive(Debug, Clone)]
pub struct MountHandle {
    mounted: Arc<AtomicBool>,
}

impl MountHandle {
    pub fn new() -> Self {
        Self {
            mounted: Arc::new(AtomicBool::new(true)),
        }
    }

    pub fn unmount(&self) {
        self.mounted.store(false, Ordering::SeqCst);
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted.load(Ordering::SeqCst)
    }
}

impl Default for MountHandle {
    fn default() -> Self {
        Self::new()
    }
}

/// Await `fut` and return its output only if `handle` is still mounted.
pub async fn deliver_if_mounted<F, T>(handle: &MountHandle, op: &str, fut: F) -> Option<T>
where
    F: Future<Output = T>,
{
    let value = fut.await;
    if handle.is_mounted() {
        Some(value)
    } else {
        debug!(op, "result discarded: consumer unmounted");
        None
    }
}
