//! Millisecond clock shared by every deadline-driven model.
//!
//! In the browser this reads `performance.now()`, which is also the time base of
//! `requestAnimationFrame` timestamps. Elsewhere it measures from the first call.

#[cfg(all(feature = "web", target_arch = "wasm32"))]
use web_sys::window;

#[cfg(not(all(feature = "web", target_arch = "wasm32")))]
use std::sync::OnceLock;
#[cfg(not(all(feature = "web", target_arch = "wasm32")))]
use std::time::Instant;

/// Current time in milliseconds.
pub fn now_ms() -> f64 {
    #[cfg(all(feature = "web", target_arch = "wasm32"))]
    {
        window()
            .and_then(|w| w.performance())
            .map(|p| p.now())
            .unwrap_or(0.0)
    }

    #[cfg(not(all(feature = "web", target_arch = "wasm32")))]
    {
        static ORIGIN: OnceLock<Instant> = OnceLock::new();
        ORIGIN.get_or_init(Instant::now).elapsed().as_secs_f64() * 1000.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_now_is_monotonic() {
        let a = now_ms();
        let b = now_ms();
        assert!(b >= a);
    }
}
