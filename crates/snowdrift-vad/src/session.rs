use snowdrift_engine::{
    pcm16_from_f32, pcm16_from_i32, AudioChunk, EngineError, SampleBuf, StreamFormat, VadConfig,
    VadEngine,
};
use tracing::{debug, info};

use crate::decision::VadDecision;

/// A stateful voice activity detection session over one engine instance.
///
/// Mirrors the hotword session minus the model operations: created from a
/// resource bundle alone, fed audio chunks in any supported encoding, torn
/// down by `Drop`.
pub struct VadSession<E> {
    engine: E,
    format: StreamFormat,
}

impl<E: VadEngine> VadSession<E> {
    /// Open a session: validate the resource path, load the engine, apply
    /// the initial gain and frontend settings. On error no session exists.
    pub fn open(config: VadConfig) -> Result<Self, EngineError> {
        config.validate()?;

        let mut engine = E::load(&config)?;
        engine.set_audio_gain(config.audio_gain);
        engine.apply_frontend(config.apply_frontend);

        let format = StreamFormat {
            sample_rate_hz: engine.sample_rate(),
            channels: engine.num_channels(),
            bits_per_sample: engine.bits_per_sample(),
        };

        info!(
            "VAD session opened: {} Hz {}ch {}-bit",
            format.sample_rate_hz, format.channels, format.bits_per_sample,
        );

        Ok(Self { engine, format })
    }

    /// Clear accumulated temporal state; gain and the frontend flag are
    /// untouched.
    pub fn reset(&mut self) -> bool {
        debug!("VAD session reset");
        self.engine.reset()
    }

    /// Feed one chunk and classify it. Numeric samples are converted once to
    /// the engine's native 16-bit PCM, encoded bytes go to the engine
    /// verbatim.
    pub fn run_vad(&mut self, chunk: AudioChunk<'_>) -> VadDecision {
        let raw = match chunk.samples() {
            SampleBuf::Encoded(data) => self.engine.run_encoded(data),
            SampleBuf::I16(pcm) => self.engine.run_frame(pcm, chunk.is_end()),
            SampleBuf::F32(samples) => self
                .engine
                .run_frame(&pcm16_from_f32(samples), chunk.is_end()),
            SampleBuf::I32(samples) => self
                .engine
                .run_frame(&pcm16_from_i32(samples), chunk.is_end()),
        };
        VadDecision::from_raw(raw)
    }

    /// Takes effect on subsequent runs only; each call supersedes the last.
    pub fn set_audio_gain(&mut self, gain: f32) {
        self.engine.set_audio_gain(gain);
    }

    pub fn apply_frontend(&mut self, enabled: bool) {
        self.engine.apply_frontend(enabled);
    }

    /// The stream format fixed at construction.
    pub fn format(&self) -> StreamFormat {
        self.format
    }

    pub fn sample_rate(&self) -> u32 {
        self.format.sample_rate_hz
    }

    pub fn num_channels(&self) -> u16 {
        self.format.channels
    }

    pub fn bits_per_sample(&self) -> u16 {
        self.format.bits_per_sample
    }
}
