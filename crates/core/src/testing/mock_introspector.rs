//! Mock introspector for testing.

use async_trait::async_trait;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::introspect::{
    FfmpegVersion, IntrospectError, Introspector, MediaKind, MuxSupport,
};

/// Mock implementation of the Introspector trait.
///
/// Provides controllable behavior for testing:
/// - Configure the reported version, format map and codec sets
/// - Simulate a one-shot query failure
/// - Record performed queries for assertions
///
/// # Example
///
/// ```rust,ignore
/// use ffcaps_core::testing::MockIntrospector;
///
/// let introspector = MockIntrospector::new();
/// introspector.set_encoders(MediaKind::Audio, vec!["aac".to_string()]).await;
///
/// let names = introspector.audio_encoders().await?;
/// assert_eq!(names, vec!["aac"]);
/// assert_eq!(introspector.recorded_queries().await, vec!["encoders"]);
/// ```
#[derive(Debug, Clone)]
pub struct MockIntrospector {
    /// Configured executable path, returned by `path()`.
    path: PathBuf,
    /// Version returned by `version()`.
    version: Arc<RwLock<FfmpegVersion>>,
    /// Format map returned by `formats()`.
    formats: Arc<RwLock<HashMap<String, MuxSupport>>>,
    /// Encoder names per media kind.
    encoders: Arc<RwLock<HashMap<MediaKind, Vec<String>>>>,
    /// Decoder names per media kind.
    decoders: Arc<RwLock<HashMap<MediaKind, Vec<String>>>>,
    /// If set, the next query will fail with this error.
    next_error: Arc<RwLock<Option<IntrospectError>>>,
    /// Recorded query names.
    queries: Arc<RwLock<Vec<String>>>,
}

impl Default for MockIntrospector {
    fn default() -> Self {
        Self::new()
    }
}

impl MockIntrospector {
    /// Create a new mock introspector.
    pub fn new() -> Self {
        Self {
            path: PathBuf::from("/mock/ffmpeg"),
            version: Arc::new(RwLock::new(FfmpegVersion::new(6, 1, 1))),
            formats: Arc::new(RwLock::new(HashMap::new())),
            encoders: Arc::new(RwLock::new(HashMap::new())),
            decoders: Arc::new(RwLock::new(HashMap::new())),
            next_error: Arc::new(RwLock::new(None)),
            queries: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// Set the reported version.
    pub async fn set_version(&self, version: FfmpegVersion) {
        *self.version.write().await = version;
    }

    /// Set the reported format map.
    pub async fn set_formats(&self, formats: HashMap<String, MuxSupport>) {
        *self.formats.write().await = formats;
    }

    /// Set the encoder names for a media kind.
    pub async fn set_encoders(&self, kind: MediaKind, names: Vec<String>) {
        self.encoders.write().await.insert(kind, names);
    }

    /// Set the decoder names for a media kind.
    pub async fn set_decoders(&self, kind: MediaKind, names: Vec<String>) {
        self.decoders.write().await.insert(kind, names);
    }

    /// Configure the next query to fail with the given error.
    pub async fn set_next_error(&self, error: IntrospectError) {
        *self.next_error.write().await = Some(error);
    }

    /// Get all recorded query names, in call order.
    pub async fn recorded_queries(&self) -> Vec<String> {
        self.queries.read().await.clone()
    }

    /// Clear recorded queries.
    pub async fn clear_recorded(&self) {
        self.queries.write().await.clear();
    }

    async fn record(&self, query: &str) -> Result<(), IntrospectError> {
        self.queries.write().await.push(query.to_string());
        if let Some(err) = self.next_error.write().await.take() {
            return Err(err);
        }
        Ok(())
    }
}

#[async_trait]
impl Introspector for MockIntrospector {
    fn name(&self) -> &str {
        "mock"
    }

    fn path(&self) -> &Path {
        &self.path
    }

    async fn version(&self) -> Result<FfmpegVersion, IntrospectError> {
        self.record("version").await?;
        Ok(*self.version.read().await)
    }

    async fn formats(&self) -> Result<HashMap<String, MuxSupport>, IntrospectError> {
        self.record("formats").await?;
        Ok(self.formats.read().await.clone())
    }

    async fn encoders(&self, kind: MediaKind) -> Result<Vec<String>, IntrospectError> {
        self.record("encoders").await?;
        Ok(self
            .encoders
            .read()
            .await
            .get(&kind)
            .cloned()
            .unwrap_or_default())
    }

    async fn decoders(&self, kind: MediaKind) -> Result<Vec<String>, IntrospectError> {
        self.record("decoders").await?;
        Ok(self
            .decoders
            .read()
            .await
            .get(&kind)
            .cloned()
            .unwrap_or_default())
    }

    async fn validate(&self) -> Result<(), IntrospectError> {
        self.record("validate").await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_returns_configured_sets() {
        let introspector = MockIntrospector::new();
        introspector
            .set_encoders(MediaKind::Audio, vec!["aac".to_string(), "libopus".to_string()])
            .await;

        let names = introspector.audio_encoders().await.unwrap();
        assert_eq!(names, vec!["aac", "libopus"]);

        // Unconfigured kinds are empty, not errors.
        assert!(introspector.video_encoders().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_mock_one_shot_error() {
        let introspector = MockIntrospector::new();
        introspector
            .set_next_error(IntrospectError::parse("broken banner"))
            .await;

        let err = introspector.version().await.unwrap_err();
        assert!(matches!(err, IntrospectError::Parse { .. }));

        // Error is consumed; subsequent queries succeed.
        assert!(introspector.version().await.is_ok());
    }

    #[tokio::test]
    async fn test_mock_records_queries() {
        let introspector = MockIntrospector::new();
        let _ = introspector.version().await;
        let _ = introspector.formats().await;
        let _ = introspector.audio_decoders().await;

        assert_eq!(
            introspector.recorded_queries().await,
            vec!["version", "formats", "decoders"]
        );
    }
}
