use std::path::PathBuf;

use stylecfg::BuildConfig;

mod errors;
mod sources;
mod summary;
mod validation;

pub(crate) use errors::ConfigError;
pub(crate) use sources::{ConfigSources, SettingSource};

/// Build configuration derived from defaults, files, environment and CLI
/// flags, together with the origin of each value.
#[derive(Debug)]
pub struct ResolvedConfig {
	pub build: BuildConfig,
	pub(crate) sources: ConfigSources,
	/// Configuration files that contributed, lowest precedence first.
	pub files: Vec<PathBuf>,
}

impl ResolvedConfig {
	pub(super) fn validate(&self) -> Result<(), ConfigError> {
		validation::validate(self)
	}

	/// Print a human readable summary of the effective configuration.
	pub fn print_summary(&self) {
		eprint!("{}", summary::render_summary(self));
	}
}
