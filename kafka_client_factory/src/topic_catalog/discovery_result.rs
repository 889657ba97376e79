use std::time::Duration;

#[derive(Debug, Clone)]
pub struct DiscoveryResult {
    /// Unique topic names in ascending order.
    pub topics: Vec<String>,
    pub duration: Duration,
}

impl DiscoveryResult {
    pub fn duration_secs(&self) -> f64 {
        self.duration.as_secs_f64()
    }
}
