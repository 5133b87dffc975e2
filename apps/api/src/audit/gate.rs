use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Allows at most one audit in flight. A second trigger while the first is
/// outstanding is refused instead of queued.
#[derive(Debug, Clone, Default)]
pub struct AuditGate {
    busy: Arc<AtomicBool>,
}

/// Held for the duration of one audit; dropping it reopens the gate.
#[derive(Debug)]
pub struct AuditPermit {
    busy: Arc<AtomicBool>,
}

impl AuditGate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn try_acquire(&self) -> Option<AuditPermit> {
        self.busy
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| AuditPermit {
                busy: Arc::clone(&self.busy),
            })
    }

    pub fn is_busy(&self) -> bool {
        self.busy.load(Ordering::Acquire)
    }
}

impl Drop for AuditPermit {
    fn drop(&mut self) {
        self.busy.store(false, Ordering::Release);
    }
}
