use std::path::PathBuf;

use clap::builder::BoolishValueParser;
use clap::{ArgAction, ColorChoice, Parser};

use super::options::OutputFormat;
use super::styles::{cli_styles, long_version};

/// Command-line arguments accepted by the `stylecfg` binary.
#[derive(Parser, Debug)]
#[command(
	name = "stylecfg",
	version,
	long_version = long_version(),
	about = "Resolve the stylesheet build configuration handed to the CSS compiler",
	color = ColorChoice::Auto,
	styles = cli_styles()
)]
pub(crate) struct CliArgs {
	#[arg(
		short,
		long = "config",
		value_name = "FILE",
		env = "STYLECFG_CONFIG",
		action = ArgAction::Append,
		help = "Additional configuration file to merge, .toml or .rb (default: none)"
	)]
	pub(crate) config: Vec<PathBuf>,
	#[arg(
		short = 'n',
		long = "no-config",
		help = "Skip loading default configuration files (default: disabled)"
	)]
	pub(crate) no_config: bool,
	#[arg(
		short = 'C',
		long = "project-dir",
		value_name = "DIR",
		help = "Directory searched for default configuration files (default: current directory)"
	)]
	pub(crate) project_dir: Option<PathBuf>,
	#[arg(
		long = "project-type",
		value_name = "TYPE",
		help = "Project conventions, e.g. stand_alone or rails (default: stand_alone)"
	)]
	pub(crate) project_type: Option<String>,
	#[arg(
		long = "http-path",
		value_name = "URL_PATH",
		help = "Public base path of the published site (default: /tempus-fugit-site/)"
	)]
	pub(crate) http_path: Option<String>,
	#[arg(
		long = "http-images-path",
		value_name = "URL_PATH",
		help = "Public base path for images (default: /tempus-fugit-site/images)"
	)]
	pub(crate) http_images_path: Option<String>,
	#[arg(
		long = "http-fonts-path",
		value_name = "URL_PATH",
		help = "Public base path for fonts (default: /tempus-fugit-site/fonts)"
	)]
	pub(crate) http_fonts_path: Option<String>,
	#[arg(
		long = "css-dir",
		value_name = "DIR",
		help = "Where compiled CSS is written (default: public/tempus-fugit-site/stylesheets)"
	)]
	pub(crate) css_dir: Option<PathBuf>,
	#[arg(
		long = "sass-dir",
		value_name = "DIR",
		help = "Where stylesheet sources are read from (default: sass)"
	)]
	pub(crate) sass_dir: Option<PathBuf>,
	#[arg(
		long = "images-dir",
		value_name = "DIR",
		help = "Where source images are read from (default: source/images)"
	)]
	pub(crate) images_dir: Option<PathBuf>,
	#[arg(
		long = "fonts-dir",
		value_name = "DIR",
		help = "Where source fonts are read from (default: source/fonts)"
	)]
	pub(crate) fonts_dir: Option<PathBuf>,
	#[arg(
		long = "line-comments",
		value_name = "BOOL",
		value_parser = BoolishValueParser::new(),
		help = "Annotate output CSS with source line markers (default: disabled)"
	)]
	pub(crate) line_comments: Option<bool>,
	#[arg(
		long = "output-style",
		value_name = "STYLE",
		help = "Generated CSS formatting, e.g. expanded or compressed (default: compressed)"
	)]
	pub(crate) output_style: Option<String>,
	#[arg(
		short = 'p',
		long = "print-config",
		help = "Print where each setting came from to stderr (default: disabled)"
	)]
	pub(crate) print_config: bool,
	#[arg(
		long = "check",
		help = "Only validate the configuration, printing nothing on success (default: disabled)"
	)]
	pub(crate) check: bool,
	#[arg(
		short = 'o',
		long = "output",
		value_enum,
		default_value_t = OutputFormat::Plain,
		help = "Choose how to print the configuration"
	)]
	pub(crate) output: OutputFormat,
	#[arg(
		short = 'v',
		long = "verbose",
		action = ArgAction::Count,
		help = "Increase log verbosity, repeat for more (default: warnings only)"
	)]
	pub(crate) verbose: u8,
}
