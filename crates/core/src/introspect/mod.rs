//! Introspection module for querying FFmpeg installation capabilities.
//!
//! This module provides the `Introspector` trait and an FFmpeg-backed
//! implementation that invokes the installed binary with a listing flag and
//! parses its textual output into structured records.
//!
//! # Features
//!
//! - Version detection from the `-version` banner
//! - Container format support map from `-formats` (mux/demux flags)
//! - Audio/video encoder and decoder name listings
//! - `can_encode` / `can_decode` membership predicates
//!
//! Queries are never cached: every call re-invokes the binary, so results
//! always reflect the installation as it currently is.
//!
//! # Example
//!
//! ```ignore
//! use ffcaps_core::introspect::{can_encode, FfmpegIntrospector, Introspector, IntrospectorConfig};
//!
//! let introspector = FfmpegIntrospector::with_defaults();
//!
//! // Validate ffmpeg is available
//! introspector.validate().await?;
//!
//! let version = introspector.version().await?;
//! println!("ffmpeg {}", version);
//!
//! let formats = introspector.formats().await?;
//! if formats.get("matroska").is_some_and(|m| m.can_mux()) {
//!     println!("can write mkv");
//! }
//!
//! if can_encode(&IntrospectorConfig::default(), "libopus").await? {
//!     println!("opus encoding available");
//! }
//! ```

mod config;
mod error;
mod extract;
mod ffmpeg;
mod parse;
mod traits;
mod types;

pub use config::IntrospectorConfig;
pub use error::IntrospectError;
pub use extract::{extract_between, extract_list};
pub use ffmpeg::{can_decode, can_encode, FfmpegIntrospector};
pub use parse::{parse_codecs, parse_formats, parse_version};
pub use traits::Introspector;
pub use types::{CodecDirection, FfmpegVersion, MediaKind, MuxSupport};
