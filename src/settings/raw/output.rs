use serde::Deserialize;
use stylecfg::{BuildConfig, OutputStyle};

use crate::cli::CliArgs;

/// Formatting toggles for the generated CSS.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct OutputSection {
	pub(super) line_comments: Option<bool>,
	pub(super) output_style: Option<String>,
}

impl OutputSection {
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(value) = cli.line_comments {
			self.line_comments = Some(value);
		}
		if let Some(value) = cli.output_style.clone() {
			self.output_style = Some(value);
		}
	}

	pub(super) fn apply_to(self, config: &mut BuildConfig) {
		if let Some(value) = self.line_comments {
			config.line_comments = value;
		}
		if let Some(value) = self.output_style {
			config.output_style = OutputStyle::from(value);
		}
	}
}
