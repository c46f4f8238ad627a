use std::path::PathBuf;

use serde::Deserialize;
use stylecfg::BuildConfig;

use crate::cli::CliArgs;

/// Local development directories the compiler reads from.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct SourcesSection {
	pub(super) sass_dir: Option<PathBuf>,
	pub(super) images_dir: Option<PathBuf>,
	pub(super) fonts_dir: Option<PathBuf>,
}

impl SourcesSection {
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(value) = cli.sass_dir.clone() {
			self.sass_dir = Some(value);
		}
		if let Some(value) = cli.images_dir.clone() {
			self.images_dir = Some(value);
		}
		if let Some(value) = cli.fonts_dir.clone() {
			self.fonts_dir = Some(value);
		}
	}

	pub(super) fn apply_to(self, config: &mut BuildConfig) {
		if let Some(value) = self.sass_dir {
			config.sass_source_dir = value;
		}
		if let Some(value) = self.images_dir {
			config.images_source_dir = value;
		}
		if let Some(value) = self.fonts_dir {
			config.fonts_source_dir = value;
		}
	}
}
