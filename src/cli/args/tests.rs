use std::path::PathBuf;

use clap::{CommandFactory, Parser};

use super::{CliArgs, OutputFormat};

#[test]
fn command_definition_is_consistent() {
	CliArgs::command().debug_assert();
}

#[test]
fn parse_cli_accepts_default_arguments() {
	let parsed = CliArgs::try_parse_from(["stylecfg"]).expect("parses");
	assert_eq!(parsed.output, OutputFormat::Plain);
	assert!(parsed.config.is_empty());
	assert!(parsed.line_comments.is_none());
	assert_eq!(parsed.verbose, 0);
}

#[test]
fn overrides_and_repeated_flags_are_collected() {
	let parsed = CliArgs::try_parse_from([
		"stylecfg",
		"-c",
		"a.toml",
		"--config",
		"config.rb",
		"--line-comments",
		"yes",
		"--css-dir",
		"dist/css",
		"-o",
		"ruby",
		"-vv",
	])
	.expect("parses");

	assert_eq!(
		parsed.config,
		vec![PathBuf::from("a.toml"), PathBuf::from("config.rb")]
	);
	assert_eq!(parsed.line_comments, Some(true));
	assert_eq!(parsed.css_dir, Some(PathBuf::from("dist/css")));
	assert_eq!(parsed.output, OutputFormat::Ruby);
	assert_eq!(parsed.verbose, 2);
}
