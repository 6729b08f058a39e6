/// Classification of one audio chunk by a VAD session.
///
/// Mapped from the raw engine code: `0` is voice, any positive code is no
/// voice, negative codes are engine-defined errors carried through opaquely.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VadDecision {
    /// The chunk contains voice.
    Voice,

    /// The chunk does not contain voice.
    NoVoice,

    /// Engine-defined error code for this chunk; opaque to this layer.
    EngineError(i32),
}

impl VadDecision {
    pub fn from_raw(raw: i32) -> Self {
        match raw {
            0 => VadDecision::Voice,
            n if n > 0 => VadDecision::NoVoice,
            n => VadDecision::EngineError(n),
        }
    }

    /// The raw engine code. `NoVoice` normalizes to `1`; the distinct
    /// positive codes, if an engine emits several, are not preserved.
    pub fn raw(&self) -> i32 {
        match *self {
            VadDecision::Voice => 0,
            VadDecision::NoVoice => 1,
            VadDecision::EngineError(code) => code,
        }
    }

    pub fn is_voice(&self) -> bool {
        matches!(self, VadDecision::Voice)
    }

    pub fn is_error(&self) -> bool {
        matches!(self, VadDecision::EngineError(_))
    }
}
