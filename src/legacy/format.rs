use std::error::Error;

use config::{FileStoredFormat, Format, Map, Value, ValueKind};

use super::parse::{LegacyValue, parse};

/// `config` crate format that reads `config.rb` files into the sectioned
/// key layout.
#[derive(Debug, Clone, Copy, Default)]
pub struct LegacyFormat;

impl Format for LegacyFormat {
	fn parse(
		&self,
		uri: Option<&String>,
		text: &str,
	) -> Result<Map<String, Value>, Box<dyn Error + Send + Sync>> {
		let mut root: Map<String, Value> = Map::new();
		let mut sections: Map<String, Map<String, Value>> = Map::new();

		for assignment in parse(text)? {
			let kind = match assignment.value {
				LegacyValue::Nil => continue,
				LegacyValue::Bool(flag) => ValueKind::Boolean(flag),
				LegacyValue::Str(text) | LegacyValue::Symbol(text) => ValueKind::String(text),
			};
			let value = Value::new(uri, kind);
			let name = assignment.key.name().to_string();

			match assignment.key.section() {
				Some(section) => {
					sections
						.entry(section.to_string())
						.or_default()
						.insert(name, value);
				}
				None => {
					root.insert(name, value);
				}
			}
		}

		for (section, table) in sections {
			root.insert(section, Value::new(uri, ValueKind::Table(table)));
		}

		Ok(root)
	}
}

impl FileStoredFormat for LegacyFormat {
	fn file_extensions(&self) -> &'static [&'static str] {
		&["rb"]
	}
}
