//! Build configuration for the tempus-fugit stylesheet pipeline.
//!
//! The crate exposes the [`BuildConfig`] value the external stylesheet
//! compiler consumes, the built-in declaration returned by [`load`], and
//! support for the legacy `config.rb` syntax the project was first
//! described in.

pub mod app_dirs;
pub mod build_config;
pub mod legacy;
pub mod logging;

pub use build_config::{BuildConfig, InvalidConfig, OutputStyle, ProjectType, load};
