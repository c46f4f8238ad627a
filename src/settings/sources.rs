use std::env;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use config::{Config, ConfigError, Environment, File, Map, Source};
use tracing::debug;

use stylecfg::app_dirs;
use stylecfg::legacy::{self, LegacyFormat};

use crate::cli::CliArgs;

pub(super) const ENV_PREFIX: &str = "STYLECFG";

/// Build a [`Config`] from the default locations, explicit `--config` files
/// and environment overrides. Also returns the files that were found.
pub(super) fn build_config(
	cli: &CliArgs,
	vars: &Map<String, String>,
) -> Result<(Config, Vec<PathBuf>)> {
	let mut builder = Config::builder();
	let mut loaded = Vec::new();

	if !cli.no_config {
		let project_dir = project_dir(cli)?;

		for path in default_legacy_files(&project_dir) {
			if path.is_file() {
				debug!(path = %path.display(), "loading legacy declaration");
				builder = builder.add_source(legacy_file(&path, false));
				loaded.push(path);
			}
		}

		for path in default_config_files(&project_dir) {
			if path.is_file() {
				debug!(path = %path.display(), "loading configuration file");
				builder = builder.add_source(File::from(path.clone()).required(false));
				loaded.push(path);
			}
		}
	}

	for path in &cli.config {
		debug!(path = %path.display(), "loading configuration file");
		builder = if is_legacy(path) {
			builder.add_source(legacy_file(path, true))
		} else {
			builder.add_source(File::from(path.clone()).required(true))
		};
		loaded.push(path.clone());
	}

	builder = builder.add_source(
		Environment::with_prefix(ENV_PREFIX)
			.separator("__")
			.try_parsing(true)
			.source(Some(vars.clone())),
	);

	let config = builder.build().map_err(|err| match err {
		ConfigError::Frozen => anyhow!("configuration builder is frozen"),
		other => other.into(),
	})?;

	Ok((config, loaded))
}

fn project_dir(cli: &CliArgs) -> Result<PathBuf> {
	match &cli.project_dir {
		Some(dir) => Ok(dir.clone()),
		None => env::current_dir().context("failed to determine working directory"),
	}
}

fn legacy_file(path: &Path, required: bool) -> impl Source + Send + Sync + 'static {
	File::new(&path.to_string_lossy(), LegacyFormat).required(required)
}

fn is_legacy(path: &Path) -> bool {
	path.extension().is_some_and(|ext| ext == "rb")
}

/// Legacy `config.rb` locations, lowest precedence first.
pub(super) fn default_legacy_files(project_dir: &Path) -> Vec<PathBuf> {
	legacy::DEFAULT_LOCATIONS
		.iter()
		.map(|name| project_dir.join(name))
		.collect()
}

/// TOML configuration locations, lowest precedence first.
pub(super) fn default_config_files(project_dir: &Path) -> Vec<PathBuf> {
	let mut files = Vec::new();

	if let Ok(dir) = app_dirs::get_config_dir() {
		files.push(dir.join("config.toml"));
	}

	files.push(project_dir.join(".stylecfg.toml"));
	files.push(project_dir.join("stylecfg.toml"));

	files
}
