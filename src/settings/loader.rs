use std::env;

use anyhow::{Result, anyhow};
use config::Map;

use super::raw::RawConfig;
use super::resolved::ResolvedConfig;
use super::sources::{ENV_PREFIX, build_config};
use crate::cli::CliArgs;

/// Load configuration by combining CLI arguments, config files and environment
/// variables.
pub fn load(cli: &CliArgs) -> Result<ResolvedConfig> {
	let prefix = format!("{ENV_PREFIX}__");
	let vars: Map<String, String> = env::vars()
		.filter(|(key, _)| key.to_ascii_uppercase().starts_with(&prefix))
		.collect();
	load_with_env(cli, &vars)
}

/// Same as [`load`], reading environment overrides from `vars` instead of the
/// process environment.
pub fn load_with_env(cli: &CliArgs, vars: &Map<String, String>) -> Result<ResolvedConfig> {
	let (builder, files) = build_config(cli, vars)?;
	let mut raw: RawConfig = builder
		.try_deserialize()
		.map_err(|err| anyhow!("failed to deserialize configuration: {err}"))?;
	raw.apply_cli_overrides(cli);
	raw.resolve(cli, vars, files)
}

#[cfg(test)]
mod tests {
	use std::fs;
	use std::path::PathBuf;

	use clap::Parser;
	use stylecfg::{OutputStyle, ProjectType};
	use tempfile::tempdir;

	use super::*;

	fn cli(args: &[&str]) -> CliArgs {
		CliArgs::parse_from(std::iter::once("stylecfg").chain(args.iter().copied()))
	}

	#[test]
	fn no_config_yields_declared_build() {
		let resolved = load_with_env(&cli(&["--no-config"]), &Map::new()).expect("loads");
		assert_eq!(resolved.build, stylecfg::load());
		assert!(resolved.files.is_empty());
	}

	#[test]
	fn project_files_layer_in_order() {
		let dir = tempdir().unwrap();
		fs::write(
			dir.path().join("config.rb"),
			"sass_dir = \"from-ruby\"\nfonts_dir = \"ruby-fonts\"\noutput_style = :expanded\n",
		)
		.unwrap();
		fs::write(
			dir.path().join("stylecfg.toml"),
			"[sources]\nsass_dir = \"from-toml\"\n",
		)
		.unwrap();

		let project = dir.path().to_string_lossy().into_owned();
		let resolved = load_with_env(&cli(&["-C", &project]), &Map::new()).expect("loads");

		assert_eq!(resolved.build.sass_source_dir, PathBuf::from("from-toml"));
		assert_eq!(resolved.build.fonts_source_dir, PathBuf::from("ruby-fonts"));
		assert_eq!(resolved.build.output_style, OutputStyle::Expanded);
		assert!(resolved.files.contains(&dir.path().join("config.rb")));
		assert!(resolved.files.contains(&dir.path().join("stylecfg.toml")));
	}

	#[test]
	fn no_config_ignores_project_files() {
		let dir = tempdir().unwrap();
		fs::write(dir.path().join("stylecfg.toml"), "project_type = \"rails\"\n").unwrap();

		let project = dir.path().to_string_lossy().into_owned();
		let resolved =
			load_with_env(&cli(&["-C", &project, "--no-config"]), &Map::new()).expect("loads");

		assert_eq!(resolved.build.project_type, ProjectType::StandAlone);
	}

	#[test]
	fn environment_beats_files_and_cli_beats_environment() {
		let dir = tempdir().unwrap();
		let file = dir.path().join("site.toml");
		fs::write(
			&file,
			"[publish]\nhttp_path = \"/file/\"\ncss_dir = \"file-css\"\n\n[output]\nline_comments = false\n",
		)
		.unwrap();

		let mut vars = Map::new();
		vars.insert("STYLECFG__PUBLISH__HTTP_PATH".to_string(), "/env/".to_string());
		vars.insert("STYLECFG__PUBLISH__CSS_DIR".to_string(), "env-css".to_string());
		vars.insert("STYLECFG__OUTPUT__LINE_COMMENTS".to_string(), "true".to_string());

		let path = file.to_string_lossy().into_owned();
		let resolved = load_with_env(
			&cli(&["-n", "-c", &path, "--css-dir", "cli-css"]),
			&vars,
		)
		.expect("loads");

		assert_eq!(resolved.build.http_path, "/env/");
		assert_eq!(resolved.build.css_output_dir, PathBuf::from("cli-css"));
		assert!(resolved.build.line_comments);
		assert_eq!(resolved.files, vec![file]);
	}

	#[test]
	fn explicit_ruby_file_uses_legacy_format() {
		let dir = tempdir().unwrap();
		let file = dir.path().join("compass.rb");
		fs::write(&file, "require 'susy'\nhttp_path = '/legacy/'\nline_comments = true\n").unwrap();

		let path = file.to_string_lossy().into_owned();
		let resolved = load_with_env(&cli(&["-n", "-c", &path]), &Map::new()).expect("loads");

		assert_eq!(resolved.build.http_path, "/legacy/");
		assert!(resolved.build.line_comments);
	}

	#[test]
	fn missing_explicit_file_is_an_error() {
		let dir = tempdir().unwrap();
		let path = dir.path().join("absent.toml").to_string_lossy().into_owned();
		assert!(load_with_env(&cli(&["-n", "-c", &path]), &Map::new()).is_err());
	}

	#[test]
	fn empty_environment_value_is_rejected_with_its_origin() {
		let mut vars = Map::new();
		vars.insert("STYLECFG__SOURCES__IMAGES_DIR".to_string(), String::new());

		let err = load_with_env(&cli(&["-n"]), &vars).unwrap_err();
		let message = err.to_string();
		assert!(message.contains("sources.images_dir"));
		assert!(message.contains("STYLECFG__SOURCES__IMAGES_DIR"));
	}

	#[test]
	fn blank_output_style_flag_is_rejected() {
		let err = load_with_env(&cli(&["-n", "--output-style", ""]), &Map::new()).unwrap_err();
		let message = format!("{err:#}");
		assert!(message.contains("output.output_style"));
		assert!(message.contains("CLI flag `--output-style`"));
	}

	#[test]
	fn malformed_legacy_file_fails_fast() {
		let dir = tempdir().unwrap();
		fs::write(dir.path().join("config.rb"), "add_import_path \"vendor\"\n").unwrap();

		let project = dir.path().to_string_lossy().into_owned();
		let err = load_with_env(&cli(&["-C", &project]), &Map::new()).unwrap_err();
		assert!(format!("{err:#}").contains("line 1"));
	}
}
