use tracing::warn;

use super::{ConfigError, ResolvedConfig};

pub(super) fn validate(config: &ResolvedConfig) -> Result<(), ConfigError> {
	let build = &config.build;

	build.validate().map_err(|source| ConfigError {
		origin: config.sources.source_for(source.key),
		source,
	})?;

	if !build.project_type.is_known() {
		warn!(
			value = build.project_type.as_str(),
			origin = %config.sources.source_for("project_type"),
			"passing unrecognised project type through to the compiler"
		);
	}
	if !build.output_style.is_known() {
		warn!(
			value = build.output_style.as_str(),
			origin = %config.sources.source_for("output.output_style"),
			"passing unrecognised output style through to the compiler"
		);
	}

	Ok(())
}
