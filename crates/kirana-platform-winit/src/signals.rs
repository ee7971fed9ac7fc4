use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};

use kirana_viewport::RawEvent;

/// Close request raised outside the event loop (Ctrl+C).
///
/// The loop polls it and feeds the result to the monitor like a window close,
/// so close listeners run exactly once whichever way the shell goes down.
#[derive(Clone, Default)]
pub(crate) struct CloseSignal {
    pending: Arc<AtomicBool>,
}

impl CloseSignal {
    pub(crate) fn request(&self) {
        self.pending.store(true, Ordering::Release);
    }

    /// `CloseRequested` the first time after a request, `None` otherwise.
    pub(crate) fn take(&self) -> Option<RawEvent> {
        self.pending
            .swap(false, Ordering::AcqRel)
            .then_some(RawEvent::CloseRequested)
    }

    pub(crate) fn install_ctrlc(&self) -> Result<(), ctrlc::Error> {
        let signal = self.clone();
        ctrlc::set_handler(move || signal.request())
    }
}
