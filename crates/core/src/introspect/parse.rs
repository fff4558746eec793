//! Pure parsers for FFmpeg listing output.
//!
//! Each function takes the full captured stdout of one invocation and
//! returns structured records. No I/O happens here, so the extraction
//! behavior can be pinned down with literal text fixtures.

use once_cell::sync::Lazy;
use regex_lite::Regex;
use std::collections::HashMap;

use super::error::IntrospectError;
use super::types::{CodecDirection, FfmpegVersion, MediaKind, MuxSupport};

/// Version banner: `<name> version <major>.<minor>.<revision>`, each
/// component one to three decimal digits.
static VERSION_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\w+ version (\d{1,3})\.(\d{1,3})\.(\d{1,3})").unwrap());

/// Formats listing row: a two-character mux flag token (`D `, ` E` or `DE`)
/// followed by whitespace and a format name of 3 to 11 non-whitespace
/// characters.
static FORMAT_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(D\s|\sE|DE)\s(\S{3,11})\s").unwrap());

// Codec listing rows: the kind letter, exactly five single-character
// capability flags, whitespace, then the codec name. Decoder listings use
// the stricter word-character name class.
static AUDIO_ENCODER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"A[\w.]{5}\s(\S{3,20})\s").unwrap());
static VIDEO_ENCODER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"V[\w.]{5}\s(\S{3,20})\s").unwrap());
static AUDIO_DECODER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"A[\w.]{5}\s(\w{3,20})\s").unwrap());
static VIDEO_DECODER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"V[\w.]{5}\s(\w{3,20})\s").unwrap());

/// Parses the `-version` banner into a [`FfmpegVersion`].
///
/// A banner that does not match the expected three-part dotted shape is a
/// parse error; the version is never silently zeroed.
pub fn parse_version(text: &str) -> Result<FfmpegVersion, IntrospectError> {
    let caps = VERSION_RE
        .captures(text)
        .ok_or_else(|| IntrospectError::parse("version banner not found"))?;

    let field = |index: usize| -> Result<u32, IntrospectError> {
        caps[index]
            .parse()
            .map_err(|_| IntrospectError::parse("version component is not a number"))
    };

    Ok(FfmpegVersion {
        major: field(1)?,
        minor: field(2)?,
        revision: field(3)?,
    })
}

/// Parses the `-formats` listing into a map of format name to mux support.
///
/// All rows across the whole text are extracted; if a format name repeats,
/// the later occurrence wins. Text with no matching rows yields an empty
/// map.
pub fn parse_formats(text: &str) -> HashMap<String, MuxSupport> {
    let mut formats = HashMap::new();
    for caps in FORMAT_RE.captures_iter(text) {
        if let Some(support) = MuxSupport::from_flags(caps[1].trim()) {
            formats.insert(caps[2].to_string(), support);
        }
    }
    formats
}

/// Parses an `-encoders` or `-decoders` listing into the codec names of the
/// requested media kind.
///
/// Rows are matched on the kind letter plus its five capability flag
/// characters, which is what separates audio rows from video rows in the
/// otherwise homogeneous columns. Names are returned in document order,
/// duplicates kept.
pub fn parse_codecs(text: &str, kind: MediaKind, direction: CodecDirection) -> Vec<String> {
    let re: &Regex = match (kind, direction) {
        (MediaKind::Audio, CodecDirection::Encode) => &AUDIO_ENCODER_RE,
        (MediaKind::Video, CodecDirection::Encode) => &VIDEO_ENCODER_RE,
        (MediaKind::Audio, CodecDirection::Decode) => &AUDIO_DECODER_RE,
        (MediaKind::Video, CodecDirection::Decode) => &VIDEO_DECODER_RE,
    };

    re.captures_iter(text)
        .map(|caps| caps[1].to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const VERSION_BANNER: &str = "\
ffmpeg version 6.1.1 Copyright (c) 2000-2023 the FFmpeg developers
built with gcc 13 (Ubuntu 13.2.0-23ubuntu4)
configuration: --prefix=/usr --extra-version=3ubuntu5
";

    const FORMATS_LISTING: &str = "\
File formats:
 D. = Demuxing supported
 .E = Muxing supported
 --
 D  aac             raw ADTS AAC (Advanced Audio Coding)
 DE ac3             raw AC-3
  E adts            ADTS AAC (Advanced Audio Coding)
 DE mp3             MP3 (MPEG audio layer 3)
 D  mpegvideo       raw MPEG video
 DE wav             WAV / WAVE (Waveform Audio)
";

    const ENCODERS_LISTING: &str = "\
Encoders:
 V..... = Video
 A..... = Audio
 S..... = Subtitle
 ------
 V..... libx264              libx264 H.264 / AVC / MPEG-4 AVC
 V....D libx265              libx265 H.265 / HEVC
 A....D aac                  AAC (Advanced Audio Coding)
 A..X.. libmp3lame           libmp3lame MP3 (MPEG audio layer 3)
 A....D libopus              libopus Opus
 S..... mov_text             3GPP Timed Text subtitle
";

    const DECODERS_LISTING: &str = "\
Decoders:
 V..... = Video
 A..... = Audio
 ------
 VFS..D h264                 H.264 / AVC / MPEG-4 AVC
 V....D mpeg2video           MPEG-2 video
 A....D aac                  AAC (Advanced Audio Coding)
 A....D mp3float             MP3 (MPEG audio layer 3)
 A....D pcm_s16le            PCM signed 16-bit little-endian
";

    #[test]
    fn test_parse_version() {
        let version = parse_version(VERSION_BANNER).unwrap();
        assert_eq!(version, FfmpegVersion::new(6, 1, 1));
    }

    #[test]
    fn test_parse_version_three_digit_components() {
        let version = parse_version("ffmpeg version 4.10.100 Copyright").unwrap();
        assert_eq!(version, FfmpegVersion::new(4, 10, 100));
    }

    #[test]
    fn test_parse_version_missing_banner() {
        let err = parse_version("not a banner at all").unwrap_err();
        assert!(matches!(err, IntrospectError::Parse { .. }));
    }

    #[test]
    fn test_parse_version_empty_output() {
        let err = parse_version("").unwrap_err();
        assert!(matches!(err, IntrospectError::Parse { .. }));
    }

    #[test]
    fn test_parse_version_incomplete_triplet() {
        let err = parse_version("ffmpeg version 6.1").unwrap_err();
        assert!(matches!(err, IntrospectError::Parse { .. }));
    }

    #[test]
    fn test_parse_formats() {
        let formats = parse_formats(FORMATS_LISTING);
        assert_eq!(formats.get("aac"), Some(&MuxSupport::Demux));
        assert_eq!(formats.get("ac3"), Some(&MuxSupport::Both));
        assert_eq!(formats.get("adts"), Some(&MuxSupport::Mux));
        assert_eq!(formats.get("mp3"), Some(&MuxSupport::Both));
        assert_eq!(formats.get("wav"), Some(&MuxSupport::Both));
        assert_eq!(formats.get("mpegvideo"), Some(&MuxSupport::Demux));
    }

    #[test]
    fn test_parse_formats_later_occurrence_wins() {
        let listing = " D  mp4   first row\n DE mp4   second row\n";
        let formats = parse_formats(listing);
        assert_eq!(formats.len(), 1);
        assert_eq!(formats.get("mp4"), Some(&MuxSupport::Both));
    }

    #[test]
    fn test_parse_formats_empty_output() {
        assert!(parse_formats("").is_empty());
        assert!(parse_formats("no listing rows here").is_empty());
    }

    #[test]
    fn test_parse_audio_encoders() {
        let names = parse_codecs(ENCODERS_LISTING, MediaKind::Audio, CodecDirection::Encode);
        assert_eq!(names, vec!["aac", "libmp3lame", "libopus"]);
    }

    #[test]
    fn test_parse_video_encoders() {
        let names = parse_codecs(ENCODERS_LISTING, MediaKind::Video, CodecDirection::Encode);
        assert_eq!(names, vec!["libx264", "libx265"]);
    }

    #[test]
    fn test_parse_audio_decoders() {
        let names = parse_codecs(DECODERS_LISTING, MediaKind::Audio, CodecDirection::Decode);
        assert_eq!(names, vec!["aac", "mp3float", "pcm_s16le"]);
    }

    #[test]
    fn test_parse_video_decoders() {
        let names = parse_codecs(DECODERS_LISTING, MediaKind::Video, CodecDirection::Decode);
        assert_eq!(names, vec!["h264", "mpeg2video"]);
    }

    #[test]
    fn test_parse_codecs_keeps_document_order_and_duplicates() {
        let listing = " A....D aac   one\n A....D opus  two\n A....D aac   again\n";
        let names = parse_codecs(listing, MediaKind::Audio, CodecDirection::Encode);
        assert_eq!(names, vec!["aac", "opus", "aac"]);
    }

    #[test]
    fn test_parse_codecs_empty_output() {
        assert!(parse_codecs("", MediaKind::Audio, CodecDirection::Encode).is_empty());
        assert!(parse_codecs("Encoders:\n", MediaKind::Video, CodecDirection::Decode).is_empty());
    }
}
