//! Support for the Ruby-style `config.rb` declaration.
//!
//! Older projects describe their build with flat assignments such as
//! `http_path = "/site/"` and `output_style = :compressed`. This module reads
//! those files into the sectioned key layout used by the TOML configuration
//! and can write a [`BuildConfig`](crate::BuildConfig) back out in the same
//! syntax.

mod format;
mod parse;
mod write;

pub use format::LegacyFormat;
pub use parse::{Assignment, LegacyKey, LegacyParseError, LegacyValue, apply, parse};
pub use write::to_ruby;

/// File names probed, relative to the project directory, when looking for a
/// legacy declaration.
pub const DEFAULT_LOCATIONS: &[&str] = &[
	"config.rb",
	"config/compass.rb",
	".compass/config.rb",
	"src/config.rb",
];

#[cfg(test)]
mod tests;
