/// Classification of one audio chunk by a hotword session.
///
/// Mapped from the raw engine code so callers get an exhaustive case
/// analysis instead of a bare integer; the raw code is recoverable via
/// [`Detection::raw`] for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Detection {
    /// No event in this chunk, keep listening.
    NoEvent,

    /// Hotword detected; the index is 1-based into the configured model
    /// list.
    Hotword(u32),

    /// Engine-defined error code for this chunk. Negative, opaque to this
    /// layer; treat any value as "an error occurred for this chunk".
    EngineError(i32),
}

impl Detection {
    pub fn from_raw(raw: i32) -> Self {
        match raw {
            0 => Detection::NoEvent,
            n if n > 0 => Detection::Hotword(n as u32),
            n => Detection::EngineError(n),
        }
    }

    /// The raw engine code this classification was mapped from.
    pub fn raw(&self) -> i32 {
        match *self {
            Detection::NoEvent => 0,
            Detection::Hotword(index) => index as i32,
            Detection::EngineError(code) => code,
        }
    }

    pub fn is_hotword(&self) -> bool {
        matches!(self, Detection::Hotword(_))
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Detection::EngineError(_))
    }
}
