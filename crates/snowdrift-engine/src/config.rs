use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::EngineError;

/// Configuration for a hotword detection session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HotwordConfig {
    /// Path to the engine's resource bundle.
    pub resource_path: PathBuf,

    /// Comma-delimited list of hotword model files. The format beyond the
    /// delimiter is engine-defined; this layer only splits and checks paths.
    pub model_spec: String,

    /// Initial per-hotword sensitivity string, applied right after load.
    /// `None` leaves the engine's own default in place.
    pub sensitivity: Option<String>,

    /// Gain multiplier applied to incoming samples before scoring.
    pub audio_gain: f32,

    /// Whether the engine applies its signal-conditioning front end.
    pub apply_frontend: bool,
}

impl Default for HotwordConfig {
    fn default() -> Self {
        Self {
            resource_path: PathBuf::from("resources/common.res"),
            model_spec: String::new(), // must be provided by user
            sensitivity: None,
            audio_gain: 1.0,
            apply_frontend: false,
        }
    }
}

impl HotwordConfig {
    pub fn new(resource_path: impl Into<PathBuf>, model_spec: impl Into<String>) -> Self {
        Self {
            resource_path: resource_path.into(),
            model_spec: model_spec.into(),
            ..Default::default()
        }
    }

    /// The individual model paths named by the spec, in configured order.
    pub fn model_paths(&self) -> Vec<&str> {
        self.model_spec
            .split(',')
            .map(str::trim)
            .filter(|entry| !entry.is_empty())
            .collect()
    }

    /// Validate paths and the model specification before loading an engine.
    pub fn validate(&self) -> Result<(), EngineError> {
        check_resource(&self.resource_path)?;

        if self.model_spec.trim().is_empty() {
            return Err(EngineError::InvalidModelSpec(
                "model specification is empty".to_string(),
            ));
        }

        if self.model_spec.split(',').any(|entry| entry.trim().is_empty()) {
            return Err(EngineError::InvalidModelSpec(format!(
                "empty entry in model specification {:?}",
                self.model_spec
            )));
        }

        for entry in self.model_paths() {
            if !Path::new(entry).exists() {
                return Err(EngineError::ModelNotFound {
                    path: PathBuf::from(entry),
                });
            }
        }

        Ok(())
    }
}

/// Configuration for a VAD session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VadConfig {
    /// Path to the engine's resource bundle.
    pub resource_path: PathBuf,

    /// Gain multiplier applied to incoming samples before scoring.
    pub audio_gain: f32,

    /// Whether the engine applies its signal-conditioning front end.
    pub apply_frontend: bool,
}

impl Default for VadConfig {
    fn default() -> Self {
        Self {
            resource_path: PathBuf::from("resources/common.res"),
            audio_gain: 1.0,
            apply_frontend: false,
        }
    }
}

impl VadConfig {
    pub fn new(resource_path: impl Into<PathBuf>) -> Self {
        Self {
            resource_path: resource_path.into(),
            ..Default::default()
        }
    }

    pub fn validate(&self) -> Result<(), EngineError> {
        check_resource(&self.resource_path)
    }
}

fn check_resource(path: &Path) -> Result<(), EngineError> {
    if !path.exists() {
        return Err(EngineError::ResourceNotFound {
            path: path.to_path_buf(),
        });
    }
    Ok(())
}
