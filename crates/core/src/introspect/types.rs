//! Types for the introspection module.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Version of an installed FFmpeg binary, parsed from its `-version` banner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct FfmpegVersion {
    pub major: u32,
    pub minor: u32,
    pub revision: u32,
}

impl FfmpegVersion {
    pub fn new(major: u32, minor: u32, revision: u32) -> Self {
        Self {
            major,
            minor,
            revision,
        }
    }
}

impl fmt::Display for FfmpegVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.revision)
    }
}

/// Muxing/demuxing support reported for a container format.
///
/// FFmpeg's `-formats` listing marks each format with a `D` column
/// (demuxing supported), an `E` column (muxing supported), or both.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MuxSupport {
    /// Demuxing only (`D `).
    Demux,
    /// Muxing only (` E`).
    Mux,
    /// Both directions (`DE`).
    Both,
}

impl MuxSupport {
    /// Parses a mux flag token as it appears in the listing, whitespace
    /// already trimmed.
    pub fn from_flags(token: &str) -> Option<Self> {
        match token {
            "D" => Some(Self::Demux),
            "E" => Some(Self::Mux),
            "DE" => Some(Self::Both),
            _ => None,
        }
    }

    /// Whether the format can be written (muxed).
    pub fn can_mux(&self) -> bool {
        matches!(self, Self::Mux | Self::Both)
    }

    /// Whether the format can be read (demuxed).
    pub fn can_demux(&self) -> bool {
        matches!(self, Self::Demux | Self::Both)
    }
}

/// Media kind of a codec listing row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MediaKind {
    Audio,
    Video,
}

impl MediaKind {
    /// Returns the row prefix letter FFmpeg uses for this kind.
    pub fn letter(&self) -> char {
        match self {
            Self::Audio => 'A',
            Self::Video => 'V',
        }
    }
}

/// Direction of a codec listing query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CodecDirection {
    Encode,
    Decode,
}

impl CodecDirection {
    /// Returns the CLI flag that produces the listing for this direction.
    pub fn flag(&self) -> &'static str {
        match self {
            Self::Encode => "-encoders",
            Self::Decode => "-decoders",
        }
    }
}
