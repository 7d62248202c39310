/// Frames further apart than this (a backgrounded tab, a long GC pause) are treated as lag.
pub const LAG_THRESHOLD_MS: f64 = 500.0;
/// What a lagging frame advances by instead, roughly one frame at 30fps.
pub const LAG_FRAME_MS: f64 = 33.0;

/// Converts the time between two animation frames into seconds, so a long stall doesn't make
/// every animation jump straight to its end.
pub fn frame_delta(elapsed_ms: f64) -> f64 {
    let elapsed_ms = if elapsed_ms.is_finite() {
        elapsed_ms.max(0.0)
    } else {
        0.0
    };
    let elapsed_ms = if elapsed_ms > LAG_THRESHOLD_MS {
        LAG_FRAME_MS
    } else {
        elapsed_ms
    };
    elapsed_ms / 1000.0
}
