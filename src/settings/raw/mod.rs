use std::path::PathBuf;

use anyhow::{Error, Result};
use config::Map;
use serde::Deserialize;
use stylecfg::ProjectType;

use crate::cli::CliArgs;

use super::resolved::{ConfigSources, ResolvedConfig, SettingSource};
use super::sources::ENV_PREFIX;

mod local;
mod output;
mod publish;

use local::SourcesSection;
use output::OutputSection;
use publish::PublishSection;

/// Mirror of the configuration file representation before CLI overrides and
/// validation are applied.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct RawConfig {
	project_type: Option<String>,
	publish: PublishSection,
	sources: SourcesSection,
	output: OutputSection,
}

impl RawConfig {
	/// Apply CLI overrides on top of the raw configuration values.
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(value) = cli.project_type.clone() {
			self.project_type = Some(value);
		}
		self.publish.apply_cli_overrides(cli);
		self.sources.apply_cli_overrides(cli);
		self.output.apply_cli_overrides(cli);
	}

	/// Convert the raw configuration into a [`ResolvedConfig`], filling
	/// unset values from the built-in declaration and validating the result.
	pub(super) fn resolve(
		self,
		cli: &CliArgs,
		vars: &Map<String, String>,
		files: Vec<PathBuf>,
	) -> Result<ResolvedConfig> {
		let sources = self.detect_sources(cli, vars);

		let mut build = stylecfg::load();
		if let Some(value) = self.project_type {
			build.project_type = ProjectType::from(value);
		}
		self.publish.apply_to(&mut build);
		self.sources.apply_to(&mut build);
		self.output.apply_to(&mut build);

		let config = ResolvedConfig {
			build,
			sources,
			files,
		};

		config.validate().map_err(Error::new)?;

		Ok(config)
	}

	fn detect_sources(&self, cli: &CliArgs, vars: &Map<String, String>) -> ConfigSources {
		let publish = &self.publish;
		let local = &self.sources;
		let output = &self.output;

		let settings = [
			(
				"project_type",
				"--project-type",
				cli.project_type.is_some(),
				self.project_type.is_some(),
			),
			(
				"publish.http_path",
				"--http-path",
				cli.http_path.is_some(),
				publish.http_path.is_some(),
			),
			(
				"publish.http_images_path",
				"--http-images-path",
				cli.http_images_path.is_some(),
				publish.http_images_path.is_some(),
			),
			(
				"publish.http_fonts_path",
				"--http-fonts-path",
				cli.http_fonts_path.is_some(),
				publish.http_fonts_path.is_some(),
			),
			(
				"publish.css_dir",
				"--css-dir",
				cli.css_dir.is_some(),
				publish.css_dir.is_some(),
			),
			(
				"sources.sass_dir",
				"--sass-dir",
				cli.sass_dir.is_some(),
				local.sass_dir.is_some(),
			),
			(
				"sources.images_dir",
				"--images-dir",
				cli.images_dir.is_some(),
				local.images_dir.is_some(),
			),
			(
				"sources.fonts_dir",
				"--fonts-dir",
				cli.fonts_dir.is_some(),
				local.fonts_dir.is_some(),
			),
			(
				"output.line_comments",
				"--line-comments",
				cli.line_comments.is_some(),
				output.line_comments.is_some(),
			),
			(
				"output.output_style",
				"--output-style",
				cli.output_style.is_some(),
				output.output_style.is_some(),
			),
		];

		let mut sources = ConfigSources::default();
		for (key, cli_flag, cli_present, value_present) in settings {
			if let Some(source) = detect_source(cli_present, value_present, vars, cli_flag, key) {
				sources.record(key, source);
			}
		}
		sources
	}
}

/// Name of the environment variable that sets `key`, e.g.
/// `STYLECFG__PUBLISH__HTTP_PATH` for `publish.http_path`.
pub(super) fn env_var_for(key: &str) -> String {
	format!(
		"{ENV_PREFIX}__{}",
		key.replace('.', "__").to_ascii_uppercase()
	)
}

fn detect_source(
	cli_present: bool,
	value_present: bool,
	vars: &Map<String, String>,
	cli_flag: &'static str,
	key: &'static str,
) -> Option<SettingSource> {
	if !value_present {
		return None;
	}

	if cli_present {
		return Some(SettingSource::CliFlag(cli_flag));
	}

	let env_var = env_var_for(key);
	if vars.keys().any(|name| name.eq_ignore_ascii_case(&env_var)) {
		return Some(SettingSource::Environment(env_var));
	}

	Some(SettingSource::ConfigKey(key))
}
