use std::time::Duration;

use crate::core::types::Viewport;

/// Default quiescent period before a resize request flushes.
pub const DEFAULT_RESIZE_QUIESCENT: Duration = Duration::from_millis(120);

/// Coalesces resize requests into one flush per quiescent period.
///
/// Each new request restarts the wait, so a drag-resize settles into a
/// single layout recomputation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResizeDebouncer {
    quiescent: Duration,
    pending: Option<(Viewport, Duration)>,
}

impl Default for ResizeDebouncer {
    fn default() -> Self {
        Self::new(DEFAULT_RESIZE_QUIESCENT)
    }
}

impl ResizeDebouncer {
    #[must_use]
    pub fn new(quiescent: Duration) -> Self {
        Self {
            quiescent,
            pending: None,
        }
    }

    pub fn request(&mut self, viewport: Viewport) {
        self.pending = Some((viewport, Duration::ZERO));
    }

    /// Advances the wait; returns the coalesced viewport once quiescent.
    pub fn step(&mut self, elapsed: Duration) -> Option<Viewport> {
        let (_, waited) = self.pending.as_mut()?;
        *waited += elapsed;
        if *waited >= self.quiescent {
            return self.pending.take().map(|(viewport, _)| viewport);
        }
        None
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}
