use serde::Deserialize;
use std::fs;
use std::path::Path;

pub const CONFIG_FILE: &str = "config.json";

/// Settings read from `config.json` in the working directory. Every field is optional.
/// They only change the status lines written to stderr; prompts and the shifted
/// line on stdout are fixed.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    pub debug: bool,
    pub color: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self { debug: false, color: true }
    }
}

impl Config {
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }
}

/// Load the config file at `path`.
///
/// A missing file gives the defaults. A file that can't be read or parsed
/// also gives the defaults, together with a message describing the problem.
pub fn load_config(path: &Path) -> (Config, Option<String>) {
    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return (Config::default(), None),
        Err(e) => {
            return (
                Config::default(),
                Some(format!("could not read {}: {}", path.display(), e)),
            )
        }
    };
    match Config::from_json(&text) {
        Ok(config) => (config, None),
        Err(e) => (
            Config::default(),
            Some(format!("ignoring {}: {}", path.display(), e)),
        ),
    }
}
