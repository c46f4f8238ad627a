use std::path::PathBuf;

use serde::Deserialize;
use stylecfg::BuildConfig;

use crate::cli::CliArgs;

/// Publishing paths as they are read from disk.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct PublishSection {
	pub(super) http_path: Option<String>,
	pub(super) http_images_path: Option<String>,
	pub(super) http_fonts_path: Option<String>,
	pub(super) css_dir: Option<PathBuf>,
}

impl PublishSection {
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(value) = cli.http_path.clone() {
			self.http_path = Some(value);
		}
		if let Some(value) = cli.http_images_path.clone() {
			self.http_images_path = Some(value);
		}
		if let Some(value) = cli.http_fonts_path.clone() {
			self.http_fonts_path = Some(value);
		}
		if let Some(value) = cli.css_dir.clone() {
			self.css_dir = Some(value);
		}
	}

	pub(super) fn apply_to(self, config: &mut BuildConfig) {
		if let Some(value) = self.http_path {
			config.http_path = value;
		}
		if let Some(value) = self.http_images_path {
			config.http_images_path = value;
		}
		if let Some(value) = self.http_fonts_path {
			config.http_fonts_path = value;
		}
		if let Some(value) = self.css_dir {
			config.css_output_dir = value;
		}
	}
}
