use std::sync::{Condvar, Mutex};

const FATAL_NOLOCK: &str = "error acquiring startup-gate lock";

/// One-shot readiness barrier. All pipeline entry points wait on it before
/// doing any work; the embedding host opens it once startup (metadata
/// restore, collaborator wiring) has finished. Opening is irreversible.
pub struct StartupGate {
    ready: Mutex<bool>,
    cvar: Condvar,
}

impl Default for StartupGate {
    fn default() -> StartupGate {
        StartupGate {
            ready: Mutex::new(false),
            cvar: Condvar::new(),
        }
    }
}

impl StartupGate {
    pub fn new() -> StartupGate {
        Default::default()
    }

    /// Marks startup complete and wakes all waiters.
    pub fn open(&self) {
        let mut ready = self.ready.lock().expect(FATAL_NOLOCK);
        *ready = true;
        self.cvar.notify_all();
    }

    /// Blocks until the gate has been opened. Returns immediately if it
    /// already has.
    pub fn wait(&self) {
        let mut ready = self.ready.lock().expect(FATAL_NOLOCK);
        while !*ready {
            ready = self.cvar.wait(ready).expect(FATAL_NOLOCK);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::thread;

    use super::*;

    #[test]
    fn test_wait_returns_after_open() {
        let gate = Arc::new(StartupGate::new());

        let waiter = {
            let gate = gate.clone();
            thread::spawn(move || gate.wait())
        };

        gate.open();
        waiter.join().unwrap();
    }

    #[test]
    fn test_wait_after_open_is_immediate() {
        let gate = StartupGate::new();
        gate.open();
        gate.wait();
    }
}
