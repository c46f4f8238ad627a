//! Configuration loading and resolution.
//!
//! `load` layers built-in defaults, legacy `config.rb` files, TOML files,
//! environment variables and CLI flags, then validates the result and
//! returns a [`ResolvedConfig`].

mod loader;
mod raw;
mod resolved;
mod sources;

pub use loader::load;
#[cfg(test)]
pub(crate) use loader::load_with_env;
pub use resolved::ResolvedConfig;
