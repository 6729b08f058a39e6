//! Detection engine boundary for Snowdrift
//!
//! This crate provides the core abstractions shared by the hotword and VAD
//! session layers: the engine traits, audio chunk encodings, configuration,
//! stream format, and the error type. A deterministic reference engine for
//! tests lives in [`mock`]; real acoustic backends implement the traits out
//! of tree.

pub mod chunk;
pub mod config;
pub mod engine;
pub mod error;
pub mod format;
pub mod mock;

pub use chunk::{pcm16_from_f32, pcm16_from_i32, AudioChunk, SampleBuf};
pub use config::{HotwordConfig, VadConfig};
pub use engine::{HotwordEngine, VadEngine};
pub use error::EngineError;
pub use format::StreamFormat;
