#[cfg(target_arch = "wasm32")]
use js_sys;

/// Phase stopwatch: `lap_ms` returns the time since the previous lap.
#[derive(Clone, Copy)]
pub(crate) struct PerfTimer {
    origin_ms: f64,
    last_ms: f64,
    #[cfg(not(target_arch = "wasm32"))]
    origin: std::time::Instant,
}

impl PerfTimer {
    pub(crate) fn start() -> Self {
        #[cfg(target_arch = "wasm32")]
        {
            let now = js_sys::Date::now();
            PerfTimer { origin_ms: now, last_ms: now }
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            PerfTimer { origin_ms: 0.0, last_ms: 0.0, origin: std::time::Instant::now() }
        }
    }

    fn now_ms(&self) -> f64 {
        #[cfg(target_arch = "wasm32")]
        {
            js_sys::Date::now()
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            self.origin.elapsed().as_secs_f64() * 1000.0
        }
    }

    pub(crate) fn lap_ms(&mut self) -> f64 {
        let now = self.now_ms();
        let lap = now - self.last_ms;
        self.last_ms = now;
        lap
    }

    pub(crate) fn total_ms(&self) -> f64 {
        self.now_ms() - self.origin_ms
    }
}
