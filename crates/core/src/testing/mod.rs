//! Testing utilities and mock implementations.
//!
//! This module provides a mock implementation of the [`Introspector`]
//! trait, so downstream code that gates behavior on engine capabilities can
//! be tested without a real FFmpeg installation.
//!
//! # Example
//!
//! ```rust,ignore
//! use ffcaps_core::testing::MockIntrospector;
//! use ffcaps_core::introspect::MediaKind;
//!
//! let introspector = MockIntrospector::new();
//! introspector.set_encoders(MediaKind::Audio, vec!["aac".to_string()]).await;
//!
//! // Use wherever an Introspector is expected...
//! ```
//!
//! [`Introspector`]: crate::introspect::Introspector

mod mock_introspector;

pub use mock_introspector::MockIntrospector;
