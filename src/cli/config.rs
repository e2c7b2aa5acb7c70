//! Shared configuration types for CLI commands

use std::{fs, path::Path};

use serde::{Deserialize, Serialize};

use crate::{render::RenderOptions, tree::BuildConfig};

/// Common configuration shared across commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CommonConfig {
    /// Whether to show progress bars
    pub progress: bool,

    /// Verbose output
    pub verbose: bool,
}

impl Default for CommonConfig {
    fn default() -> Self {
        Self {
            progress: true,
            verbose: false,
        }
    }
}

/// Settings for `tictree build`, optionally read from a JSON file.
///
/// `build.depth` has no default: a file must name it, or the command line
/// must pass `--depth`.
///
/// ```json
/// {
///   "build": { "depth": 4 },
///   "render": { "hide_bad": true },
///   "common": { "progress": false }
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunConfig {
    pub build: BuildConfig,

    #[serde(default)]
    pub render: RenderOptions,

    #[serde(default)]
    pub common: CommonConfig,
}

impl RunConfig {
    pub fn new(build: BuildConfig) -> Self {
        Self {
            build,
            render: RenderOptions::default(),
            common: CommonConfig::default(),
        }
    }

    /// Load and validate a JSON configuration file.
    ///
    /// # Errors
    ///
    /// Returns error if the file cannot be read, is not valid JSON for this
    /// type, or names an out-of-range depth.
    pub fn load(path: &Path) -> crate::Result<Self> {
        let text = fs::read_to_string(path).map_err(|source| crate::Error::Io {
            operation: format!("read config file {}", path.display()),
            source,
        })?;
        let config: RunConfig = serde_json::from_str(&text)?;
        config.build.validate()?;
        Ok(config)
    }
}
