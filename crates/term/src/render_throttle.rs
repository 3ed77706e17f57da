//! Redraw throttling for a mostly idle screen.
//!
//! The card grid only changes on input, on the clock's once-a-second refresh,
//! and when a mismatch flips back. Rendering every 16ms tick would rewrite an
//! identical frame ~60 times a second.

#[derive(Debug, Clone)]
pub struct RenderThrottle {
    /// Upper bound between redraws even when nothing changed, so a resized
    /// or scribbled-over terminal recovers on its own.
    max_idle_ms: u64,
    last_render_ms: u64,
    last_fingerprint: Option<u64>,
}

impl RenderThrottle {
    pub fn new(max_idle_ms: u64) -> Self {
        Self {
            max_idle_ms,
            last_render_ms: 0,
            last_fingerprint: None,
        }
    }

    /// Decide whether to render a new frame.
    ///
    /// Renders the first frame, any frame whose fingerprint differs from the
    /// last rendered one, and otherwise at most once per `max_idle_ms`.
    pub fn should_render(&mut self, now_ms: u64, fingerprint: u64) -> bool {
        let changed = self.last_fingerprint != Some(fingerprint);
        let stale = now_ms.saturating_sub(self.last_render_ms) >= self.max_idle_ms;
        if !changed && !stale {
            return false;
        }
        self.last_render_ms = now_ms;
        self.last_fingerprint = Some(fingerprint);
        true
    }

    /// Force the next call to render.
    pub fn invalidate(&mut self) {
        self.last_fingerprint = None;
    }
}
