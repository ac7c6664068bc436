//! Project configuration loaded from `typegen.toml`.
//!
//! ```toml
//! dialect = "clickhouse"
//! type_only_imports = false
//! out_file = "src/db.ts"
//! ```
//!
//! Every key is optional; command line flags take precedence.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;
use typegen_ir::Dialect;

/// Looked up in the working directory when `--config` is not given
pub const CONFIG_FILENAME: &str = "typegen.toml";

/// Settings read from `typegen.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Database dialect used when `--dialect` is not given
    pub dialect: Option<Dialect>,
    /// Emit `import type { ... }` for imports
    pub type_only_imports: Option<bool>,
    /// Output file; relative paths resolve against the working directory
    pub out_file: Option<PathBuf>,
}

impl Config {
    /// Load an explicit config file, or `typegen.toml` from `cwd` if present.
    pub fn load(explicit: Option<&Path>, cwd: &Path) -> Result<Self, String> {
        match explicit {
            Some(path) => Self::from_file(path),
            None => {
                let default_path = cwd.join(CONFIG_FILENAME);
                if default_path.exists() {
                    Self::from_file(&default_path)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    /// Read and parse one config file.
    pub fn from_file(path: &Path) -> Result<Self, String> {
        let contents = fs::read_to_string(path)
            .map_err(|err| format!("Failed to read config {}: {err}", path.display()))?;
        let config: Config = toml::from_str(&contents)
            .map_err(|err| format!("Failed to parse config {}: {err}", path.display()))?;
        debug!(path = %path.display(), ?config, "loaded config");
        Ok(config)
    }
}
