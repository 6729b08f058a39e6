use crate::config::{HotwordConfig, VadConfig};
use crate::error::EngineError;

/// A trait for hotword detection engines.
///
/// This defines the common interface for acoustic backends so the session
/// layer can drive them interchangeably. All run entry points return a raw
/// engine code: `0` means "no event, keep listening", a positive value means
/// "hotword N detected" (1-based index into the configured model list), and
/// negative values are engine-defined error codes that the session layer
/// passes through without decoding.
pub trait HotwordEngine: Send {
    /// Load the resource bundle and the models named by the configuration.
    fn load(config: &HotwordConfig) -> Result<Self, EngineError>
    where
        Self: Sized;

    /// Clear accumulated temporal state back to a fresh-stream baseline.
    /// Tunable settings and loaded models are untouched. Returns whether the
    /// reset succeeded.
    fn reset(&mut self) -> bool;

    /// Score one chunk of native 16-bit PCM. `is_end` marks the final chunk
    /// of the stream; behavior of later calls without an intervening reset is
    /// engine-defined.
    fn run_frame(&mut self, frame: &[i16], is_end: bool) -> i32;

    /// Score one chunk of engine-interpreted encoded bytes.
    fn run_encoded(&mut self, data: &[u8]) -> i32;

    /// Set the per-hotword sensitivity string. Not validated at this layer;
    /// malformed values surface as engine-level misbehavior.
    fn set_sensitivity(&mut self, sensitivity: &str);

    /// The current sensitivity string, exactly as last set.
    fn sensitivity(&self) -> String;

    fn set_audio_gain(&mut self, gain: f32);

    /// Reload the hotword models from their original paths, e.g. after the
    /// files changed on disk. The model specification itself is unchanged.
    fn update_model(&mut self) -> Result<(), EngineError>;

    /// Number of configured hotwords. Fixed after load except across a
    /// successful [`update_model`](Self::update_model).
    fn num_hotwords(&self) -> usize;

    fn apply_frontend(&mut self, enabled: bool);

    fn sample_rate(&self) -> u32;
    fn num_channels(&self) -> u16;
    fn bits_per_sample(&self) -> u16;
}

/// A trait for voice activity detection engines.
///
/// Raw code convention for the run entry points: `0` means "voice present",
/// a positive value means "no voice", and negative values are engine-defined
/// error codes passed through opaquely.
pub trait VadEngine: Send {
    /// Load the engine from its resource bundle.
    fn load(config: &VadConfig) -> Result<Self, EngineError>
    where
        Self: Sized;

    /// Clear accumulated temporal state; returns whether the reset succeeded.
    fn reset(&mut self) -> bool;

    /// Classify one chunk of native 16-bit PCM.
    fn run_frame(&mut self, frame: &[i16], is_end: bool) -> i32;

    /// Classify one chunk of engine-interpreted encoded bytes.
    fn run_encoded(&mut self, data: &[u8]) -> i32;

    fn set_audio_gain(&mut self, gain: f32);

    fn apply_frontend(&mut self, enabled: bool);

    fn sample_rate(&self) -> u32;
    fn num_channels(&self) -> u16;
    fn bits_per_sample(&self) -> u16;
}
