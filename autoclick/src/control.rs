use std::sync::atomic::{AtomicBool, Ordering};

/// Shared control flags. The hotkey listener and the interrupt handler flip
/// them; the scan loop reads them once per tick, so a toggle takes effect on
/// the next tick at the latest.
#[derive(Debug)]
pub struct ControlFlags {
    active: AtomicBool,
    running: AtomicBool,
}

impl ControlFlags {
    pub fn new() -> Self {
        Self {
            active: AtomicBool::new(false),
            running: AtomicBool::new(true),
        }
    }

    pub fn is_active(&self) -> bool {
        self.active.load(Ordering::Relaxed)
    }

    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::Relaxed)
    }

    /// Flips the activation flag and returns the new value.
    pub fn toggle_active(&self) -> bool {
        !self.active.fetch_xor(true, Ordering::Relaxed)
    }

    pub fn request_exit(&self) {
        self.running.store(false, Ordering::Relaxed);
    }
}

impl Default for ControlFlags {
    fn default() -> Self {
        Self::new()
    }
}
