use stylecfg::InvalidConfig;
use thiserror::Error;

use super::SettingSource;

/// A rejected value together with the layer that supplied it.
#[derive(Debug, Error)]
#[error("invalid value for {} from {origin}", .source.key)]
pub(crate) struct ConfigError {
	#[source]
	pub(crate) source: InvalidConfig,
	pub(crate) origin: SettingSource,
}
