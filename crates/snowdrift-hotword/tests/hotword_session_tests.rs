//! Comprehensive hotword session tests
//!
//! Tests cover:
//! - Construction (valid bundles, missing resource/model, malformed spec)
//! - Sensitivity round-trip and persistence across reset
//! - Detection scenarios (silence, loud trigger chunk, end-of-stream)
//! - Encoding equivalence across f32 / i16 / i32 / encoded-byte chunks
//! - Audio gain supersession
//! - Model update after on-disk changes

use snowdrift_engine::mock::MockHotwordEngine;
use snowdrift_engine::{AudioChunk, EngineError, HotwordConfig};
use snowdrift_hotword::{Detection, HotwordSession};
use std::fs;
use tempfile::TempDir;

type MockSession = HotwordSession<MockHotwordEngine>;

fn bundle(models: &[&str]) -> (TempDir, HotwordConfig) {
    let dir = tempfile::tempdir().unwrap();
    let resource = dir.path().join("common.res");
    fs::write(&resource, b"resource").unwrap();

    let mut paths = Vec::new();
    for name in models {
        let model = dir.path().join(name);
        fs::write(&model, b"model").unwrap();
        paths.push(model.display().to_string());
    }

    let config = HotwordConfig::new(&resource, paths.join(","));
    (dir, config)
}

// ─── Construction ────────────────────────────────────────────────────

#[test]
fn session_reports_configured_hotword_count() {
    let (_dir, config) = bundle(&["hey.umdl", "ok.pmdl", "stop.pmdl"]);
    let session = MockSession::open(config).unwrap();
    assert_eq!(session.num_hotwords(), 3);
}

#[test]
fn missing_model_fails_construction() {
    let (_dir, mut config) = bundle(&["hey.umdl"]);
    config.model_spec.push_str(",/nonexistent/other.umdl");

    assert!(matches!(
        MockSession::open(config),
        Err(EngineError::ModelNotFound { .. })
    ));
}

#[test]
fn empty_model_spec_fails_construction() {
    let (_dir, mut config) = bundle(&["hey.umdl"]);
    config.model_spec = String::new();

    assert!(matches!(
        MockSession::open(config),
        Err(EngineError::InvalidModelSpec(_))
    ));
}

// ─── Tunable settings ────────────────────────────────────────────────

#[test]
fn sensitivity_round_trips_exactly() {
    let (_dir, config) = bundle(&["hey.umdl", "ok.pmdl"]);
    let mut session = MockSession::open(config).unwrap();

    for value in ["0.5,0.5", "0.38,0.45", "not-a-number"] {
        session.set_sensitivity(value);
        assert_eq!(session.sensitivity(), value);
    }
}

#[test]
fn settings_survive_reset() {
    let (_dir, config) = bundle(&["hey.umdl"]);
    let mut session = MockSession::open(config).unwrap();

    session.set_sensitivity("0.9");
    session.set_audio_gain(2.0);
    session.apply_frontend(true);

    assert!(session.reset());
    assert_eq!(session.sensitivity(), "0.9");
    // Gain still in effect: a ~-50 dBFS frame only triggers with gain and
    // high sensitivity applied.
    let quiet = vec![100i16; 512];
    assert_eq!(
        session.run_detection(AudioChunk::i16(&quiet, false)),
        Detection::Hotword(1)
    );
}

#[test]
fn reset_succeeds_on_fresh_session() {
    let (_dir, config) = bundle(&["hey.umdl"]);
    let mut session = MockSession::open(config).unwrap();
    assert!(session.reset());
}

#[test]
fn audio_gain_supersedes_previous_value() {
    let (_dir, config) = bundle(&["hey.umdl"]);
    let mut session = MockSession::open(config).unwrap();

    // ~-50 dBFS frame, default threshold -40 dBFS: gain 8 lifts it above
    // the threshold, gain 1 does not. If gains accumulated (8 * 1 = 8) the
    // second run would still trigger.
    let quiet = vec![100i16; 512];

    session.set_audio_gain(8.0);
    assert_eq!(
        session.run_detection(AudioChunk::i16(&quiet, false)),
        Detection::Hotword(1)
    );

    session.set_audio_gain(1.0);
    assert_eq!(
        session.run_detection(AudioChunk::i16(&quiet, false)),
        Detection::NoEvent
    );
}

// ─── Detection scenarios ─────────────────────────────────────────────

#[test]
fn silence_then_trigger_scenario() {
    let (_dir, config) = bundle(&["hey.umdl"]);
    let mut session = MockSession::open(config).unwrap();

    let silence = vec![0.0f32; 512];
    assert_eq!(
        session.run_detection(AudioChunk::f32(&silence, false)),
        Detection::NoEvent
    );

    let trigger = vec![0.5f32; 512];
    assert_eq!(
        session.run_detection(AudioChunk::f32(&trigger, true)),
        Detection::Hotword(1)
    );
}

#[test]
fn runs_after_end_of_stream_error_until_reset() {
    let (_dir, config) = bundle(&["hey.umdl"]);
    let mut session = MockSession::open(config).unwrap();

    let silence = vec![0i16; 512];
    session.run_detection(AudioChunk::i16(&silence, true));

    let after_end = session.run_detection(AudioChunk::i16(&silence, false));
    assert!(after_end.is_error());
    assert!(after_end.raw() < 0);

    assert!(session.reset());
    assert_eq!(
        session.run_detection(AudioChunk::i16(&silence, false)),
        Detection::NoEvent
    );
}

#[test]
fn empty_chunk_surfaces_engine_error() {
    let (_dir, config) = bundle(&["hey.umdl"]);
    let mut session = MockSession::open(config).unwrap();

    let detection = session.run_detection(AudioChunk::i16(&[], false));
    assert!(detection.is_error());
}

// ─── Encoding equivalence ────────────────────────────────────────────

#[test]
fn all_encodings_classify_identically() {
    let (_dir, config) = bundle(&["hey.umdl"]);

    // A mid-energy ramp: content matters, encoding must not.
    let pcm: Vec<i16> = (0..512).map(|i| ((i % 64) * 256) as i16).collect();
    let as_f32: Vec<f32> = pcm.iter().map(|&s| s as f32 / 32768.0).collect();
    let as_i32: Vec<i32> = pcm.iter().map(|&s| (s as i32) << 16).collect();
    let as_bytes: Vec<u8> = pcm.iter().flat_map(|s| s.to_le_bytes()).collect();

    let mut on_i16 = MockSession::open(config.clone()).unwrap();
    let mut on_f32 = MockSession::open(config.clone()).unwrap();
    let mut on_i32 = MockSession::open(config.clone()).unwrap();
    let mut on_bytes = MockSession::open(config).unwrap();

    let expected = on_i16.run_detection(AudioChunk::i16(&pcm, false));
    assert_eq!(on_f32.run_detection(AudioChunk::f32(&as_f32, false)), expected);
    assert_eq!(on_i32.run_detection(AudioChunk::i32(&as_i32, false)), expected);
    assert_eq!(on_bytes.run_detection(AudioChunk::encoded(&as_bytes)), expected);
}

// ─── Model update ────────────────────────────────────────────────────

#[test]
fn update_model_reflects_on_disk_state() {
    let (dir, config) = bundle(&["hey.umdl"]);
    let mut session = MockSession::open(config).unwrap();

    assert!(session.update_model().is_ok());
    assert_eq!(session.num_hotwords(), 1);

    fs::remove_file(dir.path().join("hey.umdl")).unwrap();
    assert!(matches!(
        session.update_model(),
        Err(EngineError::ModelReload(_))
    ));
}
