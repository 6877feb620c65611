//! Audio format value objects

use std::fmt;
use std::str::FromStr;

use crate::domain::error::{InvalidAudioFormatError, InvalidSampleFormatError};

/// All supported container formats
pub const ALL_AUDIO_FORMATS: &[AudioFormat] = &[AudioFormat::Wav];

/// Container format of the recorded file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AudioFormat {
    #[default]
    Wav,
}

impl AudioFormat {
    /// Get the string identifier for this format
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Wav => "wav",
        }
    }

    /// Value passed to the recorder's `--file-format` option
    pub const fn file_format(&self) -> &'static str {
        match self {
            Self::Wav => "wav",
        }
    }
}

impl FromStr for AudioFormat {
    type Err = InvalidAudioFormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "wav" => Ok(Self::Wav),
            _ => Err(InvalidAudioFormatError {
                input: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for AudioFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Raw sample encoding requested from the sound server
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SampleFormat {
    U8,
    #[default]
    S16Le,
    S16Be,
    S24Le,
    S24Be,
    S32Le,
    S32Be,
    Float32Le,
    Float32Be,
}

impl SampleFormat {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::U8 => "u8",
            Self::S16Le => "s16le",
            Self::S16Be => "s16be",
            Self::S24Le => "s24le",
            Self::S24Be => "s24be",
            Self::S32Le => "s32le",
            Self::S32Be => "s32be",
            Self::Float32Le => "float32le",
            Self::Float32Be => "float32be",
        }
    }
}

impl FromStr for SampleFormat {
    type Err = InvalidSampleFormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "u8" => Ok(Self::U8),
            "s16le" => Ok(Self::S16Le),
            "s16be" => Ok(Self::S16Be),
            "s24le" => Ok(Self::S24Le),
            "s24be" => Ok(Self::S24Be),
            "s32le" => Ok(Self::S32Le),
            "s32be" => Ok(Self::S32Be),
            "float32le" => Ok(Self::Float32Le),
            "float32be" => Ok(Self::Float32Be),
            _ => Err(InvalidSampleFormatError {
                input: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for SampleFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
