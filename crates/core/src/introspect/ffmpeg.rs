//! FFmpeg-based introspector implementation.

use async_trait::async_trait;
use std::collections::HashMap;
use std::path::Path;
use std::process::Stdio;
use tokio::process::Command;
use tokio::time::{timeout, Duration};
use tracing::{debug, warn};

use super::config::IntrospectorConfig;
use super::error::IntrospectError;
use super::parse::{parse_codecs, parse_formats, parse_version};
use super::traits::Introspector;
use super::types::{CodecDirection, FfmpegVersion, MediaKind, MuxSupport};

/// FFmpeg-based introspector implementation.
///
/// Construction only stores the configuration; a missing binary surfaces as
/// [`IntrospectError::ExecutableNotFound`] on every query, and
/// [`Introspector::validate`] offers the explicit up-front check.
pub struct FfmpegIntrospector {
    config: IntrospectorConfig,
}

impl FfmpegIntrospector {
    /// Creates a new FFmpeg introspector with the given configuration.
    pub fn new(config: IntrospectorConfig) -> Self {
        Self { config }
    }

    /// Creates an introspector with default configuration.
    pub fn with_defaults() -> Self {
        Self::new(IntrospectorConfig::default())
    }

    /// Runs the binary with a single listing flag and captures its stdout.
    async fn capture(&self, flag: &str) -> Result<String, IntrospectError> {
        debug!(flag, path = %self.config.ffmpeg_path.display(), "querying ffmpeg");

        let mut command = Command::new(&self.config.ffmpeg_path);
        command
            .arg(flag)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);

        let run = timeout(Duration::from_secs(self.config.timeout_secs), command.output());
        let output = match run.await {
            Ok(Ok(output)) => output,
            Ok(Err(e)) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(IntrospectError::ExecutableNotFound {
                    path: self.config.ffmpeg_path.clone(),
                });
            }
            Ok(Err(e)) => return Err(IntrospectError::Io(e)),
            Err(_) => {
                return Err(IntrospectError::Timeout {
                    timeout_secs: self.config.timeout_secs,
                });
            }
        };

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).to_string();
            warn!(flag, code = ?output.status.code(), "ffmpeg exited abnormally");
            return Err(IntrospectError::invocation_failed(
                format!("FFmpeg exited with code: {:?}", output.status.code()),
                if stderr.is_empty() { None } else { Some(stderr) },
            ));
        }

        Ok(String::from_utf8_lossy(&output.stdout).to_string())
    }
}

#[async_trait]
impl Introspector for FfmpegIntrospector {
    fn name(&self) -> &str {
        "ffmpeg"
    }

    fn path(&self) -> &Path {
        &self.config.ffmpeg_path
    }

    async fn version(&self) -> Result<FfmpegVersion, IntrospectError> {
        let text = self.capture("-version").await?;
        parse_version(&text)
    }

    async fn formats(&self) -> Result<HashMap<String, MuxSupport>, IntrospectError> {
        let text = self.capture("-formats").await?;
        Ok(parse_formats(&text))
    }

    async fn encoders(&self, kind: MediaKind) -> Result<Vec<String>, IntrospectError> {
        let text = self.capture(CodecDirection::Encode.flag()).await?;
        Ok(parse_codecs(&text, kind, CodecDirection::Encode))
    }

    async fn decoders(&self, kind: MediaKind) -> Result<Vec<String>, IntrospectError> {
        let text = self.capture(CodecDirection::Decode.flag()).await?;
        Ok(parse_codecs(&text, kind, CodecDirection::Decode))
    }

    async fn validate(&self) -> Result<(), IntrospectError> {
        self.capture("-version").await.map(|_| ())
    }
}

/// Returns whether the configured installation can encode to `codec`.
///
/// Unions the audio and video encoder sets and tests exact-name membership.
/// An absent name is `Ok(false)`; a query that cannot be answered is an
/// error.
pub async fn can_encode(
    config: &IntrospectorConfig,
    codec: &str,
) -> Result<bool, IntrospectError> {
    let introspector = FfmpegIntrospector::new(config.clone());
    let mut names = introspector.audio_encoders().await?;
    names.extend(introspector.video_encoders().await?);
    Ok(names.iter().any(|name| name == codec))
}

/// Returns whether the configured installation can decode `codec`.
///
/// Same call pattern as [`can_encode`], against the decoder listings.
pub async fn can_decode(
    config: &IntrospectorConfig,
    codec: &str,
) -> Result<bool, IntrospectError> {
    let introspector = FfmpegIntrospector::new(config.clone());
    let mut names = introspector.audio_decoders().await?;
    names.extend(introspector.video_decoders().await?);
    Ok(names.iter().any(|name| name == codec))
}
