//! Deterministic reference engines for tests and demos.
//!
//! These engines honor the full trait contracts (path checks on load, tunable
//! settings, stream-closed tracking) but replace trained acoustic scoring
//! with a simple RMS energy threshold: loud frames count as hotword 1 /
//! voice, quiet frames as no event / no voice. Real backends live out of
//! tree.

use std::path::PathBuf;
use tracing::debug;

use crate::config::{HotwordConfig, VadConfig};
use crate::engine::{HotwordEngine, VadEngine};
use crate::error::EngineError;

/// Raw code returned when audio arrives after the end-of-stream marker
/// without an intervening reset.
pub const CODE_STREAM_CLOSED: i32 = -1;

/// Raw code returned for a chunk the engine cannot interpret (empty frame,
/// odd-length encoded buffer).
pub const CODE_BAD_CHUNK: i32 = -2;

const MOCK_SAMPLE_RATE_HZ: u32 = 16_000;
const MOCK_CHANNELS: u16 = 1;
const MOCK_BITS_PER_SAMPLE: u16 = 16;

/// Fixed voice threshold for the mock VAD engine.
const VOICE_THRESHOLD_DBFS: f32 = -40.0;

/// Energy-threshold hotword engine.
pub struct MockHotwordEngine {
    model_paths: Vec<PathBuf>,
    sensitivity: String,
    audio_gain: f32,
    frontend: bool,
    stream_closed: bool,
}

impl MockHotwordEngine {
    /// Whether the signal-conditioning front end is currently enabled.
    pub fn frontend_enabled(&self) -> bool {
        self.frontend
    }

    /// Detection threshold in dBFS derived from the first sensitivity value:
    /// sensitivity 1.0 triggers at -60 dBFS, sensitivity 0.0 at -20 dBFS.
    fn trigger_threshold_dbfs(&self) -> f32 {
        let s = self
            .sensitivity
            .split(',')
            .next()
            .and_then(|v| v.trim().parse::<f32>().ok())
            .unwrap_or(0.5)
            .clamp(0.0, 1.0);
        -60.0 + (1.0 - s) * 40.0
    }

    fn score(&mut self, frame: &[i16], is_end: bool) -> i32 {
        if self.stream_closed {
            return CODE_STREAM_CLOSED;
        }
        if frame.is_empty() {
            return CODE_BAD_CHUNK;
        }

        let db = energy_dbfs(frame, self.audio_gain);
        if is_end {
            self.stream_closed = true;
        }

        if db > self.trigger_threshold_dbfs() {
            1 // first configured model
        } else {
            0
        }
    }
}

impl HotwordEngine for MockHotwordEngine {
    fn load(config: &HotwordConfig) -> Result<Self, EngineError> {
        config.validate()?;

        let model_paths: Vec<PathBuf> =
            config.model_paths().into_iter().map(PathBuf::from).collect();
        debug!("mock hotword engine loaded: {} model(s)", model_paths.len());

        let sensitivity = vec!["0.5"; model_paths.len()].join(",");
        Ok(Self {
            model_paths,
            sensitivity,
            audio_gain: 1.0,
            frontend: false,
            stream_closed: false,
        })
    }

    fn reset(&mut self) -> bool {
        self.stream_closed = false;
        true
    }

    fn run_frame(&mut self, frame: &[i16], is_end: bool) -> i32 {
        self.score(frame, is_end)
    }

    fn run_encoded(&mut self, data: &[u8]) -> i32 {
        match decode_le_i16(data) {
            Some(pcm) => self.score(&pcm, false),
            None => CODE_BAD_CHUNK,
        }
    }

    fn set_sensitivity(&mut self, sensitivity: &str) {
        self.sensitivity = sensitivity.to_string();
    }

    fn sensitivity(&self) -> String {
        self.sensitivity.clone()
    }

    fn set_audio_gain(&mut self, gain: f32) {
        self.audio_gain = gain;
    }

    fn update_model(&mut self) -> Result<(), EngineError> {
        for path in &self.model_paths {
            if !path.exists() {
                return Err(EngineError::ModelReload(format!(
                    "model file disappeared: {:?}",
                    path
                )));
            }
        }
        debug!("mock hotword engine reloaded {} model(s)", self.model_paths.len());
        Ok(())
    }

    fn num_hotwords(&self) -> usize {
        self.model_paths.len()
    }

    fn apply_frontend(&mut self, enabled: bool) {
        self.frontend = enabled;
    }

    fn sample_rate(&self) -> u32 {
        MOCK_SAMPLE_RATE_HZ
    }

    fn num_channels(&self) -> u16 {
        MOCK_CHANNELS
    }

    fn bits_per_sample(&self) -> u16 {
        MOCK_BITS_PER_SAMPLE
    }
}

/// Energy-threshold VAD engine.
pub struct MockVadEngine {
    audio_gain: f32,
    frontend: bool,
    stream_closed: bool,
}

impl MockVadEngine {
    /// Whether the signal-conditioning front end is currently enabled.
    pub fn frontend_enabled(&self) -> bool {
        self.frontend
    }

    fn classify(&mut self, frame: &[i16], is_end: bool) -> i32 {
        if self.stream_closed {
            return CODE_STREAM_CLOSED;
        }
        if frame.is_empty() {
            return CODE_BAD_CHUNK;
        }

        let db = energy_dbfs(frame, self.audio_gain);
        if is_end {
            self.stream_closed = true;
        }

        if db > VOICE_THRESHOLD_DBFS {
            0 // voice present
        } else {
            1 // no voice
        }
    }
}

impl VadEngine for MockVadEngine {
    fn load(config: &VadConfig) -> Result<Self, EngineError> {
        config.validate()?;
        debug!("mock VAD engine loaded");
        Ok(Self {
            audio_gain: 1.0,
            frontend: false,
            stream_closed: false,
        })
    }

    fn reset(&mut self) -> bool {
        self.stream_closed = false;
        true
    }

    fn run_frame(&mut self, frame: &[i16], is_end: bool) -> i32 {
        self.classify(frame, is_end)
    }

    fn run_encoded(&mut self, data: &[u8]) -> i32 {
        match decode_le_i16(data) {
            Some(pcm) => self.classify(&pcm, false),
            None => CODE_BAD_CHUNK,
        }
    }

    fn set_audio_gain(&mut self, gain: f32) {
        self.audio_gain = gain;
    }

    fn apply_frontend(&mut self, enabled: bool) {
        self.frontend = enabled;
    }

    fn sample_rate(&self) -> u32 {
        MOCK_SAMPLE_RATE_HZ
    }

    fn num_channels(&self) -> u16 {
        MOCK_CHANNELS
    }

    fn bits_per_sample(&self) -> u16 {
        MOCK_BITS_PER_SAMPLE
    }
}

/// RMS energy of a gained frame in dBFS, where 0 dBFS is the i16 full scale.
fn energy_dbfs(frame: &[i16], gain: f32) -> f32 {
    let sum_sq = frame.iter().map(|&s| (s as f64).powi(2)).sum::<f64>();
    let rms = (sum_sq / frame.len() as f64).sqrt() * gain as f64;

    if rms <= 0.0 {
        return -96.0;
    }
    20.0 * (rms / i16::MAX as f64).log10() as f32
}

/// Mock interpretation of encoded bytes: little-endian 16-bit PCM. Returns
/// `None` for buffers that do not split into whole samples.
fn decode_le_i16(data: &[u8]) -> Option<Vec<i16>> {
    if data.len() % 2 != 0 {
        return None;
    }
    Some(
        data.chunks_exact(2)
            .map(|pair| i16::from_le_bytes([pair[0], pair[1]]))
            .collect(),
    )
}
