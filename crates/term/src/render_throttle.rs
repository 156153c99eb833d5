//! Frame pacing for the terminal front end.
//!
//! While a game is running every tick asks for a redraw. On the idle and
//! game-over screens nothing moves, so frames are only pushed when the picture
//! changes or a refresh interval has passed.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use crate::core::GameSnapshot;

#[derive(Debug, Clone)]
pub struct RenderThrottle {
    min_static_interval_ms: u64,
    last_render_ms: u64,
    last_fingerprint: u64,
    has_rendered: bool,
}

impl RenderThrottle {
    pub fn new(min_static_interval_ms: u64) -> Self {
        Self {
            min_static_interval_ms,
            last_render_ms: 0,
            last_fingerprint: 0,
            has_rendered: false,
        }
    }

    /// Decide whether to render a new frame.
    ///
    /// - `redraw_requested`: always render.
    /// - otherwise render on fingerprint change, or at most once per
    ///   `min_static_interval_ms`.
    pub fn should_render(&mut self, now_ms: u64, fingerprint: u64, redraw_requested: bool) -> bool {
        let render = !self.has_rendered
            || redraw_requested
            || fingerprint != self.last_fingerprint
            || now_ms.saturating_sub(self.last_render_ms) >= self.min_static_interval_ms;

        if render {
            self.has_rendered = true;
            self.last_render_ms = now_ms;
            self.last_fingerprint = fingerprint;
        }
        render
    }

    /// Forget the previous frame so the next call always renders (e.g. after resize).
    pub fn reset(&mut self) {
        self.has_rendered = false;
    }
}

/// Stable hash of everything a frame shows.
pub fn snapshot_fingerprint(snap: &GameSnapshot) -> u64 {
    let mut hasher = DefaultHasher::new();
    snap.hash(&mut hasher);
    hasher.finish()
}
