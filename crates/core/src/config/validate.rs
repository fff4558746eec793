use super::{types::Config, ConfigError};

/// Validate configuration
/// Currently validates:
/// - ffmpeg path is not empty
/// - invocation timeout is not 0
pub fn validate_config(config: &Config) -> Result<(), ConfigError> {
    if config.ffmpeg.ffmpeg_path.as_os_str().is_empty() {
        return Err(ConfigError::ValidationError(
            "ffmpeg.ffmpeg_path cannot be empty".to_string(),
        ));
    }

    if config.ffmpeg.timeout_secs == 0 {
        return Err(ConfigError::ValidationError(
            "ffmpeg.timeout_secs cannot be 0".to_string(),
        ));
    }

    Ok(())
}
