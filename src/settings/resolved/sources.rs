use std::collections::HashMap;
use std::fmt;

/// Where an effective setting came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum SettingSource {
	CliFlag(&'static str),
	Environment(String),
	ConfigKey(&'static str),
	Default,
}

impl fmt::Display for SettingSource {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::CliFlag(flag) => write!(f, "CLI flag `{flag}`"),
			Self::Environment(var) => write!(f, "environment variable `{var}`"),
			Self::ConfigKey(key) => write!(f, "configuration key `{key}`"),
			Self::Default => f.write_str("built-in default"),
		}
	}
}

#[derive(Debug, Default, Clone)]
pub(crate) struct ConfigSources {
	entries: HashMap<&'static str, SettingSource>,
}

impl ConfigSources {
	pub(crate) fn record(&mut self, key: &'static str, source: SettingSource) {
		self.entries.insert(key, source);
	}

	/// Source of `key`, or [`SettingSource::Default`] when nothing set it.
	pub(crate) fn source_for(&self, key: &str) -> SettingSource {
		self.entries
			.get(key)
			.cloned()
			.unwrap_or(SettingSource::Default)
	}
}
