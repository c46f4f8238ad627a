use std::path::PathBuf;

use config::{Config, File, FileFormat};

use super::*;
use crate::build_config::{self, BuildConfig, OutputStyle, ProjectType};

const DECLARATION: &str = r#"# Require any additional compass plugins here.
project_type = :stand_alone

# Publishing paths
http_path = "/tempus-fugit-site/"
http_images_path = "/tempus-fugit-site/images"
http_fonts_path = "/tempus-fugit-site/fonts"
css_dir = "public/tempus-fugit-site/stylesheets"

# Local development paths
sass_dir = "sass"
images_dir = "source/images"
fonts_dir = "source/fonts"

line_comments = false
output_style = :compressed
"#;

fn blank() -> BuildConfig {
	BuildConfig {
		project_type: ProjectType::Rails,
		http_path: String::new(),
		http_images_path: String::new(),
		http_fonts_path: String::new(),
		css_output_dir: PathBuf::new(),
		sass_source_dir: PathBuf::new(),
		images_source_dir: PathBuf::new(),
		fonts_source_dir: PathBuf::new(),
		line_comments: true,
		output_style: OutputStyle::Nested,
	}
}

#[test]
fn declaration_matches_built_in_values() {
	let mut config = blank();
	apply(DECLARATION, &mut config).expect("declaration parses");
	assert_eq!(config, build_config::load());
}

#[test]
fn written_declaration_reads_back() {
	let original = BuildConfig {
		http_path: "/a \"quoted\" #site/".into(),
		output_style: OutputStyle::Other("Fancy Style".into()),
		line_comments: true,
		..build_config::load()
	};

	let mut parsed = blank();
	apply(&to_ruby(&original), &mut parsed).expect("written text parses");
	assert_eq!(parsed, original);
}

#[test]
fn comments_and_quotes_are_respected() {
	let text = "sass_dir = 'styles # not a comment' # trailing\nfonts_dir = \"f\\\"x\"\n";
	let assignments = parse(text).unwrap();
	assert_eq!(
		assignments[0].value,
		LegacyValue::Str("styles # not a comment".into())
	);
	assert_eq!(assignments[1].value, LegacyValue::Str("f\"x".into()));
}

#[test]
fn requires_and_unknown_settings_are_skipped() {
	let text = "require 'susy'\nrelative_assets = true\njavascripts_dir = \"js\"\nsass_dir = \"scss\"\n";
	let assignments = parse(text).unwrap();
	assert_eq!(assignments.len(), 1);
	assert_eq!(assignments[0].key, LegacyKey::SassDir);
	assert_eq!(assignments[0].line, 4);
}

#[test]
fn nil_leaves_value_untouched() {
	let mut config = build_config::load();
	apply("sass_dir = nil\n", &mut config).unwrap();
	assert_eq!(config.sass_source_dir, PathBuf::from("sass"));
}

#[test]
fn malformed_statements_report_line_numbers() {
	let err = parse("sass_dir = \"sass\"\n\nadd_import_path \"vendor\"\n").unwrap_err();
	assert_eq!(err.line, 3);
	assert!(err.to_string().contains("line 3"));

	let err = parse("http_path = File.join('a', 'b')\n").unwrap_err();
	assert_eq!(err.line, 1);
	assert!(err.message.contains("unsupported value"));

	let err = parse("http_path = \"/#{site}/\"\n").unwrap_err();
	assert!(err.message.contains("interpolation"));

	let err = parse("css_dir = \"open\n").unwrap_err();
	assert!(err.message.contains("unterminated"));
}

#[test]
fn value_kinds_are_checked() {
	let err = parse("line_comments = \"no\"\n").unwrap_err();
	assert!(err.message.contains("true or false"));

	let err = parse("output_style = false\n").unwrap_err();
	assert!(err.message.contains("string or symbol"));
}

#[test]
fn unknown_symbols_pass_through() {
	let mut config = build_config::load();
	apply("project_type = :sinatra\n", &mut config).unwrap();
	assert_eq!(config.project_type, ProjectType::Other("sinatra".into()));
}

#[test]
fn format_produces_sectioned_keys() {
	let config = Config::builder()
		.add_source(File::from_str(DECLARATION, LegacyFormat))
		.add_source(File::from_str("[output]\nline_comments = true\n", FileFormat::Toml))
		.build()
		.expect("sources merge");

	assert_eq!(config.get_string("project_type").unwrap(), "stand_alone");
	assert_eq!(
		config.get_string("publish.css_dir").unwrap(),
		"public/tempus-fugit-site/stylesheets"
	);
	assert_eq!(config.get_string("sources.fonts_dir").unwrap(), "source/fonts");
	assert_eq!(config.get_string("output.output_style").unwrap(), "compressed");
	assert!(config.get_bool("output.line_comments").unwrap());
}

#[test]
fn format_surfaces_parse_errors() {
	let result = Config::builder()
		.add_source(File::from_str("this is ruby code\n", LegacyFormat))
		.build();
	let message = result.unwrap_err().to_string();
	assert!(message.contains("line 1"));
}
