use serde::{Deserialize, Serialize};

/// Stream format fixed by the engine's resource bundle at load time.
///
/// Sessions read this once at construction and serve all format queries from
/// the cached copy, so the triple cannot change over a session's lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreamFormat {
    pub sample_rate_hz: u32,
    pub channels: u16,
    pub bits_per_sample: u16,
}

impl StreamFormat {
    pub fn frame_duration_ms(&self, samples: usize) -> f32 {
        (samples as f32 * 1000.0) / self.sample_rate_hz as f32
    }
}
