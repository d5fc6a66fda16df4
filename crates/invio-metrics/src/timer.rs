use std::time::Instant;

#[derive(Debug, Clone, Copy)]
pub struct RequestTimer {
    started_at: Instant,
}

impl RequestTimer {
    pub fn start() -> Self {
        Self {
            started_at: Instant::now(),
        }
    }

    pub fn elapsed_seconds(&self) -> f64 {
        Instant::now()
            .checked_duration_since(self.started_at)
            .unwrap_or_default()
            .as_secs_f64()
    }
}
