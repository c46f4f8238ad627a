use std::io::Write;

use anyhow::Result;
use stylecfg::BuildConfig;
use stylecfg::legacy::to_ruby;
use tracing::info;

use super::{CliArgs, OutputFormat};
use crate::settings::ResolvedConfig;

/// Write the resolved configuration in the format selected on the command
/// line. `--check` writes nothing.
pub(crate) fn render<W: Write>(
	cli: &CliArgs,
	resolved: &ResolvedConfig,
	out: &mut W,
) -> Result<()> {
	if cli.check {
		info!(files = resolved.files.len(), "configuration is valid");
		return Ok(());
	}

	let build = &resolved.build;
	match cli.output {
		OutputFormat::Plain => write!(out, "{}", format_plain(build))?,
		OutputFormat::Json => writeln!(out, "{}", format_json(build)?)?,
		OutputFormat::Ruby => write!(out, "{}", to_ruby(build))?,
	}
	out.flush()?;

	Ok(())
}

/// Format the configuration as aligned `key = value` lines.
pub(crate) fn format_plain(config: &BuildConfig) -> String {
	let rows = [
		("project_type", config.project_type.to_string()),
		("http_path", config.http_path.clone()),
		("http_images_path", config.http_images_path.clone()),
		("http_fonts_path", config.http_fonts_path.clone()),
		("css_dir", config.css_output_dir.display().to_string()),
		("sass_dir", config.sass_source_dir.display().to_string()),
		("images_dir", config.images_source_dir.display().to_string()),
		("fonts_dir", config.fonts_source_dir.display().to_string()),
		("line_comments", config.line_comments.to_string()),
		("output_style", config.output_style.to_string()),
	];

	let width = rows.iter().map(|(key, _)| key.len()).max().unwrap_or(0);
	rows.iter()
		.map(|(key, value)| format!("{key:<width$} = {value}\n"))
		.collect()
}

/// Format the configuration as a JSON string.
pub(crate) fn format_json(config: &BuildConfig) -> Result<String> {
	Ok(serde_json::to_string_pretty(config)?)
}
