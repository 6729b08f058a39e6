use snowdrift_engine::{
    pcm16_from_f32, pcm16_from_i32, AudioChunk, EngineError, HotwordConfig, HotwordEngine,
    SampleBuf, StreamFormat,
};
use tracing::{debug, info};

use crate::detection::Detection;

/// A stateful hotword detection session over one engine instance.
///
/// Created from a resource bundle and a model specification, fed audio
/// chunks in any supported encoding, and torn down by `Drop`. The session is
/// the engine's single owner; ownership rules make use-after-release and
/// double-release unrepresentable.
pub struct HotwordSession<E> {
    engine: E,
    format: StreamFormat,
}

impl<E: HotwordEngine> HotwordSession<E> {
    /// Open a session: validate the configured paths, load the engine, and
    /// apply the initial tunable settings. On error no session exists.
    pub fn open(config: HotwordConfig) -> Result<Self, EngineError> {
        config.validate()?;

        let mut engine = E::load(&config)?;
        if let Some(sensitivity) = &config.sensitivity {
            engine.set_sensitivity(sensitivity);
        }
        engine.set_audio_gain(config.audio_gain);
        engine.apply_frontend(config.apply_frontend);

        let format = StreamFormat {
            sample_rate_hz: engine.sample_rate(),
            channels: engine.num_channels(),
            bits_per_sample: engine.bits_per_sample(),
        };

        info!(
            "Hotword session opened: {} hotword(s), {} Hz {}ch {}-bit",
            engine.num_hotwords(),
            format.sample_rate_hz,
            format.channels,
            format.bits_per_sample,
        );

        Ok(Self { engine, format })
    }

    /// Clear accumulated temporal state so the session behaves as if no
    /// audio had been submitted. Sensitivity, gain, the frontend flag, and
    /// the loaded models are untouched.
    pub fn reset(&mut self) -> bool {
        debug!("Hotword session reset");
        self.engine.reset()
    }

    /// Feed one chunk and classify it. All encodings reach the same scoring
    /// path: numeric samples are converted once to the engine's native
    /// 16-bit PCM, encoded bytes go to the engine verbatim.
    ///
    /// After a chunk with the end-of-stream flag, further runs have
    /// engine-defined results until [`reset`](Self::reset) is called.
    pub fn run_detection(&mut self, chunk: AudioChunk<'_>) -> Detection {
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
        Detection::from_raw(raw)
    }

    /// Pass-through setter; no validation beyond handing the string to the
    /// engine.
    pub fn set_sensitivity(&mut self, sensitivity: &str) {
        self.engine.set_sensitivity(sensitivity);
    }

    pub fn sensitivity(&self) -> String {
        self.engine.sensitivity()
    }

    /// Takes effect on subsequent runs only; each call supersedes the last.
    pub fn set_audio_gain(&mut self, gain: f32) {
        self.engine.set_audio_gain(gain);
    }

    /// Reload the hotword models from their original paths, e.g. after the
    /// files changed on disk.
    pub fn update_model(&mut self) -> Result<(), EngineError> {
        debug!("Hotword session model update");
        self.engine.update_model()
    }

    pub fn num_hotwords(&self) -> usize {
        self.engine.num_hotwords()
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

#[cfg(test)]
mod tests {
    use super::*;
    use snowdrift_engine::mock::MockHotwordEngine;
    use std::fs;
    use tempfile::TempDir;

    fn fixture() -> (TempDir, HotwordConfig) {
        let dir = tempfile::tempdir().unwrap();
        let resource = dir.path().join("common.res");
        fs::write(&resource, b"resource").unwrap();
        let model = dir.path().join("hey.umdl");
        fs::write(&model, b"model").unwrap();

        let config = HotwordConfig::new(&resource, model.display().to_string());
        (dir, config)
    }

    #[test]
    fn open_applies_initial_settings() {
        let (_dir, mut config) = fixture();
        config.sensitivity = Some("0.7".to_string());

        let session = HotwordSession::<MockHotwordEngine>::open(config).unwrap();
        assert_eq!(session.sensitivity(), "0.7");
        assert_eq!(session.num_hotwords(), 1);
    }

    #[test]
    fn open_fails_without_resource() {
        let (_dir, mut config) = fixture();
        config.resource_path = "/nonexistent/common.res".into();

        assert!(matches!(
            HotwordSession::<MockHotwordEngine>::open(config),
            Err(EngineError::ResourceNotFound { .. })
        ));
    }

    #[test]
    fn format_is_cached_from_the_engine() {
        let (_dir, config) = fixture();
        let session = HotwordSession::<MockHotwordEngine>::open(config).unwrap();

        assert_eq!(session.sample_rate(), 16_000);
        assert_eq!(session.num_channels(), 1);
        assert_eq!(session.bits_per_sample(), 16);
        assert_eq!(
            session.format(),
            StreamFormat {
                sample_rate_hz: 16_000,
                channels: 1,
                bits_per_sample: 16,
            }
        );
    }
}
