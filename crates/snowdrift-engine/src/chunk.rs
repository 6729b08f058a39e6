//! Audio chunk encodings accepted by detection sessions.
//!
//! A session accepts one chunk per run call, in any of four encodings. The
//! three numeric encodings are converted once to the engine's native 16-bit
//! PCM; engine-interpreted byte buffers pass through untouched. The
//! conversions are fixed so that lossless re-encodings of the same content
//! classify identically: `f32` is full-scale at ±1.0 with a scale factor of
//! 32768, `i32` carries the 16-bit sample in its upper half.

/// One chunk's sample data, borrowed from the caller.
#[derive(Debug, Clone, Copy)]
pub enum SampleBuf<'a> {
    /// Raw encoded bytes, interpreted by the engine itself.
    Encoded(&'a [u8]),
    /// 32-bit float PCM, full scale at ±1.0.
    F32(&'a [f32]),
    /// 16-bit integer PCM, the engines' native scoring format.
    I16(&'a [i16]),
    /// 32-bit integer PCM, sample in the upper 16 bits.
    I32(&'a [i32]),
}

impl SampleBuf<'_> {
    pub fn len(&self) -> usize {
        match self {
            SampleBuf::Encoded(data) => data.len(),
            SampleBuf::F32(samples) => samples.len(),
            SampleBuf::I16(samples) => samples.len(),
            SampleBuf::I32(samples) => samples.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// One discrete unit of submitted audio in a streaming sequence.
///
/// `is_end` marks the final chunk of the logical stream. What an engine does
/// with audio submitted after the end marker is engine-defined; callers
/// should treat the stream as closed and reset the session before resuming.
#[derive(Debug, Clone, Copy)]
pub struct AudioChunk<'a> {
    samples: SampleBuf<'a>,
    is_end: bool,
}

impl<'a> AudioChunk<'a> {
    /// Chunk of engine-interpreted encoded bytes. The encoded path carries no
    /// end-of-stream marker, matching the engines' encoded run entry point.
    pub fn encoded(data: &'a [u8]) -> Self {
        Self {
            samples: SampleBuf::Encoded(data),
            is_end: false,
        }
    }

    pub fn f32(samples: &'a [f32], is_end: bool) -> Self {
        Self {
            samples: SampleBuf::F32(samples),
            is_end,
        }
    }

    pub fn i16(samples: &'a [i16], is_end: bool) -> Self {
        Self {
            samples: SampleBuf::I16(samples),
            is_end,
        }
    }

    pub fn i32(samples: &'a [i32], is_end: bool) -> Self {
        Self {
            samples: SampleBuf::I32(samples),
            is_end,
        }
    }

    pub fn samples(&self) -> SampleBuf<'a> {
        self.samples
    }

    pub fn is_end(&self) -> bool {
        self.is_end
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}

/// Convert float PCM (full scale ±1.0) to 16-bit PCM.
///
/// Inverse of `s as f32 / 32768.0`, so an i16 -> f32 -> i16 round trip is
/// lossless.
pub fn pcm16_from_f32(samples: &[f32]) -> Vec<i16> {
    samples
        .iter()
        .map(|&s| (s * 32768.0).round().clamp(i16::MIN as f32, i16::MAX as f32) as i16)
        .collect()
}

/// Convert 32-bit integer PCM (sample in the upper 16 bits) to 16-bit PCM.
pub fn pcm16_from_i32(samples: &[i32]) -> Vec<i16> {
    samples.iter().map(|&s| (s >> 16) as i16).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn f32_round_trip_is_lossless() {
        let original: Vec<i16> = vec![0, 1, -1, 100, -100, 12000, i16::MAX, i16::MIN];
        let as_f32: Vec<f32> = original.iter().map(|&s| s as f32 / 32768.0).collect();
        assert_eq!(pcm16_from_f32(&as_f32), original);
    }

    #[test]
    fn f32_out_of_range_clamps() {
        assert_eq!(pcm16_from_f32(&[2.0]), vec![i16::MAX]);
        assert_eq!(pcm16_from_f32(&[-2.0]), vec![i16::MIN]);
    }

    #[test]
    fn i32_round_trip_is_lossless() {
        let original: Vec<i16> = vec![0, 1, -1, 100, -100, 12000, i16::MAX, i16::MIN];
        let as_i32: Vec<i32> = original.iter().map(|&s| (s as i32) << 16).collect();
        assert_eq!(pcm16_from_i32(&as_i32), original);
    }

    #[test]
    fn chunk_reports_length_and_end_flag() {
        let samples = [0i16; 512];
        let chunk = AudioChunk::i16(&samples, true);
        assert_eq!(chunk.len(), 512);
        assert!(!chunk.is_empty());
        assert!(chunk.is_end());

        let empty = AudioChunk::f32(&[], false);
        assert!(empty.is_empty());
        assert!(!empty.is_end());
    }

    #[test]
    fn encoded_chunk_never_carries_end_flag() {
        let chunk = AudioChunk::encoded(&[0u8, 1, 2, 3]);
        assert!(!chunk.is_end());
        assert_eq!(chunk.len(), 4);
    }
}
