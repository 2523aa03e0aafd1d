//! Configuration loaded from `.fixture-calc.toml`.
//!
//! Discovery walks up from the working directory; an explicit `--config`
//! path skips discovery and must load cleanly.

mod core;
mod loader;

pub use self::core::{
    DemoConfig, FixtureConfig, OutputConfig, ParsingConfig, DEFAULT_NUMBERS, MAX_MARKERS,
};
pub use loader::{
    default_config_toml, directory_ancestors, load_config, load_config_from,
    load_explicit_config, parse_and_validate_config, resolve_config, CONFIG_FILE_NAME,
};
