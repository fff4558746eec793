//! Trait definitions for the introspection module.

use async_trait::async_trait;
use std::collections::HashMap;
use std::path::Path;

use super::error::IntrospectError;
use super::types::{FfmpegVersion, MediaKind, MuxSupport};

/// A capability introspector for an installed transcoding engine.
///
/// Every query re-invokes the engine and re-parses its output; there is no
/// cached state, so repeated calls reflect the installation as it currently
/// is.
#[async_trait]
pub trait Introspector: Send + Sync {
    /// Returns the name of this introspector implementation.
    fn name(&self) -> &str;

    /// Returns the configured path of the engine executable.
    fn path(&self) -> &Path;

    /// Queries and parses the engine version.
    async fn version(&self) -> Result<FfmpegVersion, IntrospectError>;

    /// Queries the supported container formats and their mux/demux support.
    async fn formats(&self) -> Result<HashMap<String, MuxSupport>, IntrospectError>;

    /// Queries the encodable codec names of the given media kind.
    async fn encoders(&self, kind: MediaKind) -> Result<Vec<String>, IntrospectError>;

    /// Queries the decodable codec names of the given media kind.
    async fn decoders(&self, kind: MediaKind) -> Result<Vec<String>, IntrospectError>;

    /// Validates that the engine is reachable and answers a version query.
    async fn validate(&self) -> Result<(), IntrospectError>;

    /// Audio codec names the engine can encode.
    async fn audio_encoders(&self) -> Result<Vec<String>, IntrospectError> {
        self.encoders(MediaKind::Audio).await
    }

    /// Video codec names the engine can encode.
    async fn video_encoders(&self) -> Result<Vec<String>, IntrospectError> {
        self.encoders(MediaKind::Video).await
    }

    /// Audio codec names the engine can decode.
    async fn audio_decoders(&self) -> Result<Vec<String>, IntrospectError> {
        self.decoders(MediaKind::Audio).await
    }

    /// Video codec names the engine can decode.
    async fn video_decoders(&self) -> Result<Vec<String>, IntrospectError> {
        self.decoders(MediaKind::Video).await
    }
}
