//! The build configuration handed to the stylesheet compiler.
//!
//! [`BuildConfig`] is a flat, immutable record. [`load`] produces the
//! project's declared values; the layered loader in the binary starts from
//! the same value and applies file, environment and CLI overrides on top.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Conventions the external compiler applies to the project layout.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ProjectType {
	StandAlone,
	Rails,
	/// A value the compiler may understand but this crate does not name.
	Other(String),
}

impl ProjectType {
	pub fn as_str(&self) -> &str {
		match self {
			Self::StandAlone => "stand_alone",
			Self::Rails => "rails",
			Self::Other(value) => value,
		}
	}

	pub fn is_known(&self) -> bool {
		!matches!(self, Self::Other(_))
	}
}

impl From<&str> for ProjectType {
	fn from(value: &str) -> Self {
		let (raw, normalized) = normalize_identifier(value);
		match normalized.as_str() {
			"stand_alone" | "standalone" => Self::StandAlone,
			"rails" => Self::Rails,
			_ => Self::Other(raw.to_string()),
		}
	}
}

impl From<String> for ProjectType {
	fn from(value: String) -> Self {
		Self::from(value.as_str())
	}
}

impl From<ProjectType> for String {
	fn from(value: ProjectType) -> Self {
		value.as_str().to_string()
	}
}

impl fmt::Display for ProjectType {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// Whitespace and formatting mode of the generated CSS.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum OutputStyle {
	Nested,
	Expanded,
	Compact,
	Compressed,
	/// A value the compiler may understand but this crate does not name.
	Other(String),
}

impl OutputStyle {
	pub fn as_str(&self) -> &str {
		match self {
			Self::Nested => "nested",
			Self::Expanded => "expanded",
			Self::Compact => "compact",
			Self::Compressed => "compressed",
			Self::Other(value) => value,
		}
	}

	pub fn is_known(&self) -> bool {
		!matches!(self, Self::Other(_))
	}
}

impl From<&str> for OutputStyle {
	fn from(value: &str) -> Self {
		let (raw, normalized) = normalize_identifier(value);
		match normalized.as_str() {
			"nested" => Self::Nested,
			"expanded" => Self::Expanded,
			"compact" => Self::Compact,
			"compressed" => Self::Compressed,
			_ => Self::Other(raw.to_string()),
		}
	}
}

impl From<String> for OutputStyle {
	fn from(value: String) -> Self {
		Self::from(value.as_str())
	}
}

impl From<OutputStyle> for String {
	fn from(value: OutputStyle) -> Self {
		value.as_str().to_string()
	}
}

impl fmt::Display for OutputStyle {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// Strip surrounding whitespace and a leading symbol colon, returning the
/// raw text alongside its lowercase, underscore-separated form.
fn normalize_identifier(value: &str) -> (&str, String) {
	let raw = value.trim().trim_start_matches(':');
	let normalized = raw.to_ascii_lowercase().replace('-', "_");
	(raw, normalized)
}

/// Settings consumed by the external stylesheet compiler for one build.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BuildConfig {
	pub project_type: ProjectType,
	/// Public base path of the published site.
	pub http_path: String,
	pub http_images_path: String,
	pub http_fonts_path: String,
	/// Where compiled CSS is written.
	pub css_output_dir: PathBuf,
	/// Where `.scss`/`.sass` sources are read from.
	pub sass_source_dir: PathBuf,
	pub images_source_dir: PathBuf,
	pub fonts_source_dir: PathBuf,
	/// Annotate output CSS with source line markers.
	pub line_comments: bool,
	pub output_style: OutputStyle,
}

/// Return the project's declared build configuration.
pub fn load() -> BuildConfig {
	BuildConfig {
		project_type: ProjectType::StandAlone,
		http_path: "/tempus-fugit-site/".to_string(),
		http_images_path: "/tempus-fugit-site/images".to_string(),
		http_fonts_path: "/tempus-fugit-site/fonts".to_string(),
		css_output_dir: PathBuf::from("public/tempus-fugit-site/stylesheets"),
		sass_source_dir: PathBuf::from("sass"),
		images_source_dir: PathBuf::from("source/images"),
		fonts_source_dir: PathBuf::from("source/fonts"),
		line_comments: false,
		output_style: OutputStyle::Compressed,
	}
}

impl Default for BuildConfig {
	fn default() -> Self {
		load()
	}
}

/// A configuration value that the compiler cannot work with.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid value for {key}: {reason} (value: {value:?})")]
pub struct InvalidConfig {
	pub key: &'static str,
	pub value: String,
	pub reason: &'static str,
}

impl BuildConfig {
	/// Check the field invariants, reporting the first violation found.
	pub fn validate(&self) -> Result<(), InvalidConfig> {
		require_non_empty("project_type", self.project_type.as_str())?;

		let urls = [
			("publish.http_path", self.http_path.as_str()),
			("publish.http_images_path", self.http_images_path.as_str()),
			("publish.http_fonts_path", self.http_fonts_path.as_str()),
		];
		for (key, value) in urls {
			require_non_empty(key, value)?;
		}

		let dirs = [
			("publish.css_dir", self.css_output_dir.as_path()),
			("sources.sass_dir", self.sass_source_dir.as_path()),
			("sources.images_dir", self.images_source_dir.as_path()),
			("sources.fonts_dir", self.fonts_source_dir.as_path()),
		];
		for (key, path) in dirs {
			require_non_empty(key, &path_text(path))?;
		}

		if !self.http_path.starts_with('/') {
			return Err(InvalidConfig {
				key: "publish.http_path",
				value: self.http_path.clone(),
				reason: "must be an absolute URL path starting with '/'",
			});
		}

		require_non_empty("output.output_style", self.output_style.as_str())?;

		Ok(())
	}
}

fn require_non_empty(key: &'static str, value: &str) -> Result<(), InvalidConfig> {
	if value.trim().is_empty() {
		return Err(InvalidConfig {
			key,
			value: value.to_string(),
			reason: "must not be empty",
		});
	}
	Ok(())
}

fn path_text(path: &Path) -> String {
	path.to_string_lossy().into_owned()
}
