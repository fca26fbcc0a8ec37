//! Shared controller handle
//!
//! UI toolkits deliver pager, resize and touch callbacks through separate
//! closures. Each one holds a clone of this handle; all of them lock the same
//! controller, so events are still applied one at a time in arrival order.

use parking_lot::Mutex;
use std::sync::Arc;

use crate::controller::PagerSyncController;

pub struct SharedController {
    inner: Arc<Mutex<PagerSyncController>>,
}

impl SharedController {
    pub fn new(controller: PagerSyncController) -> Self {
        Self {
            inner: Arc::new(Mutex::new(controller)),
        }
    }

    pub fn with<F, T>(&self, f: F) -> T
    where
        F: FnOnce(&mut PagerSyncController) -> T,
    {
        let mut guard = self.inner.lock();
        f(&mut guard)
    }
}

impl Clone for SharedController {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TabsConfig;
    use crate::controller::SyncPhase;

    #[test]
    fn test_clones_share_state() {
        let shared = SharedController::new(PagerSyncController::new(TabsConfig::default()).unwrap());
        let other = shared.clone();

        other.with(|c| c.resize(320.0)).unwrap();
        assert_eq!(shared.with(|c| c.strip().width()), 320.0);
        assert_eq!(shared.with(|c| c.phase()), SyncPhase::Settled);
    }
}
