use std::fmt::Write;
use std::path::Path;

use crate::build_config::BuildConfig;

/// Render `config` as a `config.rb` declaration.
pub fn to_ruby(config: &BuildConfig) -> String {
	let mut out = String::new();

	let _ = writeln!(out, "project_type = {}", symbol_or_string(config.project_type.as_str()));
	let _ = writeln!(out);
	let _ = writeln!(out, "# Publishing paths");
	let _ = writeln!(out, "http_path = {}", quoted(&config.http_path));
	let _ = writeln!(out, "http_images_path = {}", quoted(&config.http_images_path));
	let _ = writeln!(out, "http_fonts_path = {}", quoted(&config.http_fonts_path));
	let _ = writeln!(out, "css_dir = {}", quoted_path(&config.css_output_dir));
	let _ = writeln!(out);
	let _ = writeln!(out, "# Local development paths");
	let _ = writeln!(out, "sass_dir = {}", quoted_path(&config.sass_source_dir));
	let _ = writeln!(out, "images_dir = {}", quoted_path(&config.images_source_dir));
	let _ = writeln!(out, "fonts_dir = {}", quoted_path(&config.fonts_source_dir));
	let _ = writeln!(out);
	let _ = writeln!(out, "line_comments = {}", config.line_comments);
	let _ = writeln!(out, "output_style = {}", symbol_or_string(config.output_style.as_str()));

	out
}

fn symbol_or_string(value: &str) -> String {
	let is_symbol = value
		.chars()
		.next()
		.is_some_and(|c| c.is_ascii_lowercase() || c == '_')
		&& value
			.chars()
			.all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_');

	if is_symbol {
		format!(":{value}")
	} else {
		quoted(value)
	}
}

fn quoted_path(path: &Path) -> String {
	quoted(&path.to_string_lossy())
}

fn quoted(value: &str) -> String {
	let mut out = String::with_capacity(value.len() + 2);
	out.push('"');
	for ch in value.chars() {
		match ch {
			'"' | '\\' | '#' => {
				out.push('\\');
				out.push(ch);
			}
			'\n' => out.push_str("\\n"),
			'\t' => out.push_str("\\t"),
			c => out.push(c),
		}
	}
	out.push('"');
	out
}
