use std::fs;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use super::core::FixtureConfig;
use crate::core::errors::{Error, Result};

pub const CONFIG_FILE_NAME: &str = ".fixture-calc.toml";

const MAX_TRAVERSAL_DEPTH: usize = 10;

/// Read config file contents
pub(crate) fn read_config_file(path: &Path) -> std::result::Result<String, std::io::Error> {
    let file = fs::File::open(path)?;
    let mut reader = BufReader::new(file);
    let mut contents = String::new();
    reader.read_to_string(&mut contents)?;
    Ok(contents)
}

/// Parse and validate config from a TOML string
pub fn parse_and_validate_config(contents: &str, path: &Path) -> Result<FixtureConfig> {
    let config = toml::from_str::<FixtureConfig>(contents).map_err(|source| Error::ConfigFile {
        path: path.to_path_buf(),
        source,
    })?;
    config.validate()?;
    Ok(config)
}

/// Try loading config from a discovered path; failures fall back to `None`
pub(crate) fn try_load_config_from_path(config_path: &Path) -> Option<FixtureConfig> {
    let contents = match read_config_file(config_path) {
        Ok(contents) => contents,
        Err(e) => {
            handle_read_error(config_path, &e);
            return None;
        }
    };

    match parse_and_validate_config(&contents, config_path) {
        Ok(config) => {
            debug!("Loaded config from {}", config_path.display());
            Some(config)
        }
        Err(e) => {
            warn!("{}. Using defaults.", e);
            None
        }
    }
}

/// Handle file read errors with appropriate logging
pub(crate) fn handle_read_error(config_path: &Path, error: &std::io::Error) {
    // Only log actual errors, not "file not found"
    if error.kind() != std::io::ErrorKind::NotFound {
        warn!(
            "Failed to read config file {}: {}",
            config_path.display(),
            error
        );
    }
}

/// Directory ancestors of `start`, `start` included, up to `max_depth` entries
pub fn directory_ancestors(start: PathBuf, max_depth: usize) -> impl Iterator<Item = PathBuf> {
    std::iter::successors(Some(start), |dir| {
        let mut parent = dir.clone();
        if parent.pop() {
            Some(parent)
        } else {
            None
        }
    })
    .take(max_depth)
}

/// Search `start` and its ancestors for a config file
pub fn load_config_from(start: &Path) -> FixtureConfig {
    directory_ancestors(start.to_path_buf(), MAX_TRAVERSAL_DEPTH)
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .find_map(|path| try_load_config_from_path(&path))
        .unwrap_or_else(|| {
            debug!(
                "No config found after checking {} directories. Using default config.",
                MAX_TRAVERSAL_DEPTH
            );
            FixtureConfig::default()
        })
}

pub fn load_config() -> FixtureConfig {
    match std::env::current_dir() {
        Ok(dir) => load_config_from(&dir),
        Err(e) => {
            warn!(
                "Failed to get current directory: {}. Using default config.",
                e
            );
            FixtureConfig::default()
        }
    }
}

/// Load a config the user named explicitly. Unlike discovery, any failure is an error.
pub fn load_explicit_config(path: &Path) -> Result<FixtureConfig> {
    let contents = read_config_file(path)?;
    let config = parse_and_validate_config(&contents, path)?;
    debug!("Loaded config from {}", path.display());
    Ok(config)
}

/// Explicit path if given, discovery otherwise
pub fn resolve_config(explicit: Option<&Path>) -> Result<FixtureConfig> {
    match explicit {
        Some(path) => load_explicit_config(path),
        None => Ok(load_config()),
    }
}

/// Contents written by `init`
pub fn default_config_toml() -> &'static str {
    r#"# fixture-calc configuration

[demo]
greeting_prefix = "Hello"
name = "world"
iterations = 3
parity_markers = 5
compute_n = 10
numbers = "1,2,3,4,5,6,7,8,9,10,21,22,23,24,25,26,27,28,29,30"

[parsing]
# "strict" fails on the first malformed segment, "lenient" skips it
policy = "strict"

[output]
format = "terminal"
"#
}
