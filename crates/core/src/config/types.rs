use serde::{Deserialize, Serialize};

use crate::introspect::IntrospectorConfig;

/// Root configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    /// FFmpeg binary resolution and invocation settings.
    #[serde(default)]
    pub ffmpeg: IntrospectorConfig,
}
