#[cfg(target_arch = "wasm32")]
use js_sys;

/// Milliseconds on a monotonic-enough clock shared by all components.
/// Browser: `Date.now()`. Native: time since first call.
pub fn now_ms() -> f64 {
    #[cfg(target_arch = "wasm32")]
    {
        js_sys::Date::now()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        use std::sync::OnceLock;
        use std::time::Instant;

        static ORIGIN: OnceLock<Instant> = OnceLock::new();
        ORIGIN.get_or_init(Instant::now).elapsed().as_secs_f64() * 1000.0
    }
}

/// Stopwatch on the engine clock, for per-step timing
#[derive(Clone, Copy, Debug)]
pub(crate) struct PerfTimer {
    started_at: f64,
}

impl PerfTimer {
    pub(crate) fn start() -> Self {
        Self { started_at: now_ms() }
    }

    pub(crate) fn elapsed_ms(&self) -> f64 {
        (now_ms() - self.started_at).max(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clock_never_goes_backwards() {
        let a = now_ms();
        let b = now_ms();
        assert!(b >= a);
    }

    #[test]
    fn stopwatch_measures_elapsed_time() {
        let timer = PerfTimer::start();
        std::thread::sleep(std::time::Duration::from_millis(5));
        assert!(timer.elapsed_ms() >= 4.0);
    }
}
