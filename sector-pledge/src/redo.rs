use std::collections::HashSet;
use std::sync::Mutex;

use crate::metadata::SectorNumber;

const FATAL_NOLOCK: &str = "error acquiring redo-set lock";

/// Membership set of sectors with a redo in flight. Guarded by its own
/// mutex, never by the pledge lock: redo registration for one sector must
/// stay schedulable while a pledge call (or a slow redo of another sector)
/// is running. The mutex is held only for the membership operation itself.
#[derive(Default)]
pub struct RedoSet {
    inner: Mutex<HashSet<SectorNumber>>,
}

impl RedoSet {
    pub fn new() -> RedoSet {
        Default::default()
    }

    /// Atomically tests membership and inserts. Returns false without
    /// mutating when a redo for this sector is already registered.
    pub fn try_begin(&self, id: SectorNumber) -> bool {
        let mut set = self.inner.lock().expect(FATAL_NOLOCK);
        set.insert(id)
    }

    /// Releases a registration made by try_begin. Called when the redo
    /// workflow completes, whether it succeeded or failed, so the sector
    /// can be redone again later.
    pub fn finish(&self, id: SectorNumber) {
        let mut set = self.inner.lock().expect(FATAL_NOLOCK);
        set.remove(&id);
    }
}
