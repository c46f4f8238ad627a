use std::fmt::Write;

use super::ResolvedConfig;

pub(super) fn render_summary(config: &ResolvedConfig) -> String {
	let build = &config.build;
	let sources = &config.sources;
	let mut out = String::new();

	let _ = writeln!(out, "Effective configuration:");
	if config.files.is_empty() {
		let _ = writeln!(out, "  Files: (none)");
	} else {
		let _ = writeln!(out, "  Files:");
		for file in &config.files {
			let _ = writeln!(out, "    {}", file.display());
		}
	}

	let rows = [
		("project_type", build.project_type.to_string()),
		("publish.http_path", build.http_path.clone()),
		("publish.http_images_path", build.http_images_path.clone()),
		("publish.http_fonts_path", build.http_fonts_path.clone()),
		("publish.css_dir", build.css_output_dir.display().to_string()),
		("sources.sass_dir", build.sass_source_dir.display().to_string()),
		("sources.images_dir", build.images_source_dir.display().to_string()),
		("sources.fonts_dir", build.fonts_source_dir.display().to_string()),
		("output.line_comments", bool_to_word(build.line_comments).to_string()),
		("output.output_style", build.output_style.to_string()),
	];

	for (key, value) in rows {
		let _ = writeln!(out, "  {key}: {value} [{}]", sources.source_for(key));
	}

	out
}

fn bool_to_word(value: bool) -> &'static str {
	if value { "yes" } else { "no" }
}

#[cfg(test)]
mod tests {
	use std::path::PathBuf;

	use super::super::{ConfigSources, SettingSource};
	use super::*;

	#[test]
	fn bool_to_word_matches_expectations() {
		assert_eq!(super::bool_to_word(true), "yes");
		assert_eq!(super::bool_to_word(false), "no");
	}

	#[test]
	fn summary_lists_values_with_their_sources() {
		let mut sources = ConfigSources::default();
		sources.record("output.output_style", SettingSource::CliFlag("--output-style"));
		let config = ResolvedConfig {
			build: stylecfg::load(),
			sources,
			files: vec![PathBuf::from("/site/config.rb")],
		};

		let text = render_summary(&config);
		assert!(text.contains("    /site/config.rb\n"));
		assert!(text.contains("  output.output_style: compressed [CLI flag `--output-style`]\n"));
		assert!(text.contains("  sources.sass_dir: sass [built-in default]\n"));
		assert!(text.contains("  output.line_comments: no [built-in default]\n"));
	}
}
