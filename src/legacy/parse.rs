use std::path::PathBuf;

use thiserror::Error;
use tracing::{debug, warn};

use crate::build_config::{BuildConfig, OutputStyle, ProjectType};

/// A `config.rb` line that could not be understood.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("config.rb line {line}: {message}")]
pub struct LegacyParseError {
	pub line: usize,
	pub message: String,
}

impl LegacyParseError {
	fn new(line: usize, message: impl Into<String>) -> Self {
		Self {
			line,
			message: message.into(),
		}
	}
}

/// Right-hand side of a recognised assignment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LegacyValue {
	Str(String),
	Symbol(String),
	Bool(bool),
	Nil,
}

/// Settings understood in a `config.rb`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LegacyKey {
	ProjectType,
	HttpPath,
	HttpImagesPath,
	HttpFontsPath,
	CssDir,
	SassDir,
	ImagesDir,
	FontsDir,
	LineComments,
	OutputStyle,
}

impl LegacyKey {
	pub const ALL: [LegacyKey; 10] = [
		Self::ProjectType,
		Self::HttpPath,
		Self::HttpImagesPath,
		Self::HttpFontsPath,
		Self::CssDir,
		Self::SassDir,
		Self::ImagesDir,
		Self::FontsDir,
		Self::LineComments,
		Self::OutputStyle,
	];

	pub fn from_name(name: &str) -> Option<Self> {
		Self::ALL.into_iter().find(|key| key.name() == name)
	}

	/// Name of the assignment in `config.rb`.
	pub fn name(self) -> &'static str {
		match self {
			Self::ProjectType => "project_type",
			Self::HttpPath => "http_path",
			Self::HttpImagesPath => "http_images_path",
			Self::HttpFontsPath => "http_fonts_path",
			Self::CssDir => "css_dir",
			Self::SassDir => "sass_dir",
			Self::ImagesDir => "images_dir",
			Self::FontsDir => "fonts_dir",
			Self::LineComments => "line_comments",
			Self::OutputStyle => "output_style",
		}
	}

	/// Table the key lives under in the sectioned layout, if any.
	pub fn section(self) -> Option<&'static str> {
		match self {
			Self::ProjectType => None,
			Self::HttpPath | Self::HttpImagesPath | Self::HttpFontsPath | Self::CssDir => {
				Some("publish")
			}
			Self::SassDir | Self::ImagesDir | Self::FontsDir => Some("sources"),
			Self::LineComments | Self::OutputStyle => Some("output"),
		}
	}

	fn expects_bool(self) -> bool {
		matches!(self, Self::LineComments)
	}
}

/// One recognised assignment together with its source line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignment {
	pub line: usize,
	pub key: LegacyKey,
	pub value: LegacyValue,
}

/// Parse a `config.rb` declaration into the assignments this crate knows.
///
/// Unknown settings are skipped. Statements that are not plain assignments
/// are rejected.
pub fn parse(text: &str) -> Result<Vec<Assignment>, LegacyParseError> {
	let mut assignments = Vec::new();

	for (index, raw_line) in text.lines().enumerate() {
		let line_no = index + 1;
		let line = strip_comment(raw_line).trim();
		if line.is_empty() {
			continue;
		}

		let Some((lhs, rhs)) = split_assignment(line) else {
			if line == "require" || line.starts_with("require ") {
				debug!(line = line_no, "skipping plugin require");
				continue;
			}
			return Err(LegacyParseError::new(line_no, "expected `key = value`"));
		};

		let name = lhs.trim();
		if !is_identifier(name) {
			return Err(LegacyParseError::new(
				line_no,
				format!("`{name}` is not a setting name"),
			));
		}

		let Some(key) = LegacyKey::from_name(name) else {
			warn!(line = line_no, setting = name, "ignoring unsupported setting");
			continue;
		};

		let value = parse_value(rhs.trim())
			.and_then(|value| check_kind(key, &value).map(|()| value))
			.map_err(|message| LegacyParseError::new(line_no, message))?;

		assignments.push(Assignment {
			line: line_no,
			key,
			value,
		});
	}

	Ok(assignments)
}

/// Parse `text` and apply its assignments on top of `config`.
pub fn apply(text: &str, config: &mut BuildConfig) -> Result<(), LegacyParseError> {
	for assignment in parse(text)? {
		let value = match assignment.value {
			LegacyValue::Nil => continue,
			LegacyValue::Bool(flag) => {
				config.line_comments = flag;
				continue;
			}
			LegacyValue::Str(value) | LegacyValue::Symbol(value) => value,
		};

		match assignment.key {
			LegacyKey::ProjectType => config.project_type = ProjectType::from(value),
			LegacyKey::HttpPath => config.http_path = value,
			LegacyKey::HttpImagesPath => config.http_images_path = value,
			LegacyKey::HttpFontsPath => config.http_fonts_path = value,
			LegacyKey::CssDir => config.css_output_dir = PathBuf::from(value),
			LegacyKey::SassDir => config.sass_source_dir = PathBuf::from(value),
			LegacyKey::ImagesDir => config.images_source_dir = PathBuf::from(value),
			LegacyKey::FontsDir => config.fonts_source_dir = PathBuf::from(value),
			LegacyKey::OutputStyle => config.output_style = OutputStyle::from(value),
			LegacyKey::LineComments => {}
		}
	}
	Ok(())
}

fn check_kind(key: LegacyKey, value: &LegacyValue) -> Result<(), String> {
	match value {
		LegacyValue::Nil => Ok(()),
		LegacyValue::Bool(_) if key.expects_bool() => Ok(()),
		LegacyValue::Str(_) | LegacyValue::Symbol(_) if !key.expects_bool() => Ok(()),
		_ if key.expects_bool() => Err(format!("`{}` must be true or false", key.name())),
		_ => Err(format!("`{}` must be a string or symbol", key.name())),
	}
}

/// Drop a trailing `#` comment that is not inside a string literal.
fn strip_comment(line: &str) -> &str {
	let mut quote: Option<char> = None;
	let mut escaped = false;

	for (idx, ch) in line.char_indices() {
		if escaped {
			escaped = false;
			continue;
		}
		match (quote, ch) {
			(Some(_), '\\') => escaped = true,
			(Some(open), c) if c == open => quote = None,
			(None, '"' | '\'') => quote = Some(ch),
			(None, '#') => return &line[..idx],
			_ => {}
		}
	}

	line
}

/// Split on the first `=` that is a plain assignment, not `==`.
fn split_assignment(line: &str) -> Option<(&str, &str)> {
	let idx = line.find('=')?;
	let rest = &line[idx + 1..];
	if rest.starts_with('=') || rest.starts_with('~') {
		return None;
	}
	Some((&line[..idx], rest))
}

fn is_identifier(name: &str) -> bool {
	let mut chars = name.chars();
	match chars.next() {
		Some(c) if c.is_ascii_lowercase() || c == '_' => {}
		_ => return false,
	}
	chars.all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_')
}

fn parse_value(text: &str) -> Result<LegacyValue, String> {
	match text {
		"" => return Err("missing value".to_string()),
		"true" => return Ok(LegacyValue::Bool(true)),
		"false" => return Ok(LegacyValue::Bool(false)),
		"nil" => return Ok(LegacyValue::Nil),
		_ => {}
	}

	if let Some(symbol) = text.strip_prefix(':') {
		if is_identifier(symbol) {
			return Ok(LegacyValue::Symbol(symbol.to_string()));
		}
		return Err(format!("`{text}` is not a valid symbol"));
	}

	if text.starts_with('"') {
		return parse_double_quoted(text).map(LegacyValue::Str);
	}
	if text.starts_with('\'') {
		return parse_single_quoted(text).map(LegacyValue::Str);
	}

	Err(format!("unsupported value `{text}`"))
}

fn parse_double_quoted(text: &str) -> Result<String, String> {
	let mut out = String::new();
	let mut chars = text[1..].chars();

	while let Some(ch) = chars.next() {
		match ch {
			'"' => return finish_literal(chars.as_str(), out),
			'\\' => match chars.next() {
				Some('n') => out.push('\n'),
				Some('t') => out.push('\t'),
				Some(c @ ('"' | '\\' | '#')) => out.push(c),
				Some(c) => return Err(format!("unsupported escape `\\{c}`")),
				None => break,
			},
			'#' if chars.as_str().starts_with('{') => {
				return Err("string interpolation is not supported".to_string());
			}
			c => out.push(c),
		}
	}

	Err("unterminated string".to_string())
}

fn parse_single_quoted(text: &str) -> Result<String, String> {
	let mut out = String::new();
	let mut chars = text[1..].chars();

	while let Some(ch) = chars.next() {
		match ch {
			'\'' => return finish_literal(chars.as_str(), out),
			'\\' => match chars.next() {
				Some(c @ ('\'' | '\\')) => out.push(c),
				Some(c) => {
					out.push('\\');
					out.push(c);
				}
				None => break,
			},
			c => out.push(c),
		}
	}

	Err("unterminated string".to_string())
}

fn finish_literal(rest: &str, value: String) -> Result<String, String> {
	if rest.trim().is_empty() {
		Ok(value)
	} else {
		Err(format!("unexpected `{}` after string", rest.trim()))
	}
}
