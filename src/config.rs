//! Configuration for the `qsplit` command
//!
//! Settings live in the `[split]` table of a `config.toml`. Lookup order:
//! an explicit `--config` path, then `.qsplit/config.toml` in the working
//! directory, then `~/.qsplit/config.toml`. Missing files fall back to
//! defaults.

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::models::NamedDelimiter;
use crate::splitter::DEFAULT_DELIMITER;

/// Directory name holding project and user config files
pub const CONFIG_DIR: &str = ".qsplit";

/// Split configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SplitConfig {
    /// Delimiter spec: a single character, an escape like `\n`, or a name like `semicolon`
    #[serde(default = "default_delimiter")]
    pub delimiter: String,

    /// Emit a JSON report instead of plain lines
    #[serde(default)]
    pub json: bool,

    /// Pretty-print JSON output
    #[serde(default)]
    pub pretty: bool,

    /// Warn on stderr when an unterminated trailing segment is discarded
    #[serde(default = "default_warn_on_truncation")]
    pub warn_on_truncation: bool,
}

fn default_delimiter() -> String {
    DEFAULT_DELIMITER.to_string()
}

fn default_warn_on_truncation() -> bool {
    true
}

impl Default for SplitConfig {
    fn default() -> Self {
        Self {
            delimiter: default_delimiter(),
            json: false,
            pretty: false,
            warn_on_truncation: true,
        }
    }
}

impl SplitConfig {
    /// Resolve the configured delimiter to a character
    pub fn delimiter_char(&self) -> Result<char> {
        parse_delimiter(&self.delimiter)
            .with_context(|| format!("Invalid delimiter in config: {:?}", self.delimiter))
    }
}

/// Parse a delimiter spec into a single character
///
/// Accepts one literal character, one of the escapes `\n`, `\r`, `\t`, `\0`,
/// `\\`, or a [`NamedDelimiter`] name (case-insensitive).
pub fn parse_delimiter(spec: &str) -> Result<char> {
    let mut chars = spec.chars();
    match (chars.next(), chars.next(), chars.next()) {
        (None, _, _) => bail!("Delimiter must not be empty"),
        (Some(c), None, _) => return Ok(c),
        (Some('\\'), Some(esc), None) => {
            return match esc {
                'n' => Ok('\n'),
                'r' => Ok('\r'),
                't' => Ok('\t'),
                '0' => Ok('\0'),
                '\\' => Ok('\\'),
                other => bail!("Unknown escape sequence '\\{}' in delimiter", other),
            };
        }
        _ => {}
    }

    match NamedDelimiter::from_str(spec) {
        Ok(named) => Ok(named.as_char()),
        Err(_) => bail!(
            "Delimiter must be a single character, an escape (\\n, \\r, \\t, \\0, \\\\) \
             or a name (lf, cr, tab, space, nul, semicolon, comma, pipe); got {:?}",
            spec
        ),
    }
}

/// Load config, honoring an explicit path if one was given
///
/// An explicit path must exist. Otherwise the project config in `cwd` is
/// tried, then the user config in the home directory.
pub fn load_config(explicit: Option<&Path>, cwd: &Path) -> Result<SplitConfig> {
    if let Some(path) = explicit {
        if !path.exists() {
            bail!("Config file not found: {}", path.display());
        }
        return load_config_file(path);
    }

    let project_path = cwd.join(CONFIG_DIR).join("config.toml");
    if project_path.exists() {
        return load_config_file(&project_path);
    }

    match user_config_path() {
        Some(user_path) if user_path.exists() => load_config_file(&user_path),
        _ => {
            log::debug!("No config.toml found, using default split config");
            Ok(SplitConfig::default())
        }
    }
}

/// Load the `[split]` section of a single config file
pub fn load_config_file(path: &Path) -> Result<SplitConfig> {
    log::debug!("Loading config from {}", path.display());

    let config_str = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    let toml_value: toml::Value = toml::from_str(&config_str)
        .with_context(|| format!("Failed to parse {}", path.display()))?;

    if let Some(split_table) = toml_value.get("split") {
        let config: SplitConfig = split_table
            .clone()
            .try_into()
            .context("Failed to parse [split] section")?;
        Ok(config)
    } else {
        log::debug!("No [split] section in {}, using defaults", path.display());
        Ok(SplitConfig::default())
    }
}

/// Path of the per-user config file, if the home directory is known
fn user_config_path() -> Option<PathBuf> {
    match dirs::home_dir() {
        Some(home) => Some(home.join(CONFIG_DIR).join("config.toml")),
        None => {
            log::debug!("Could not determine home directory");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_parse_single_char() {
        assert_eq!(parse_delimiter(";").unwrap(), ';');
        assert_eq!(parse_delimiter("\n").unwrap(), '\n');
        assert_eq!(parse_delimiter("→").unwrap(), '→');
        assert_eq!(parse_delimiter("\\").unwrap(), '\\');
    }

    #[test]
    fn test_parse_escapes() {
        assert_eq!(parse_delimiter(r"\n").unwrap(), '\n');
        assert_eq!(parse_delimiter(r"\r").unwrap(), '\r');
        assert_eq!(parse_delimiter(r"\t").unwrap(), '\t');
        assert_eq!(parse_delimiter(r"\0").unwrap(), '\0');
        assert_eq!(parse_delimiter(r"\\").unwrap(), '\\');
        assert!(parse_delimiter(r"\q").is_err());
    }

    #[test]
    fn test_parse_names() {
        assert_eq!(parse_delimiter("semicolon").unwrap(), ';');
        assert_eq!(parse_delimiter("LF").unwrap(), '\n');
    }

    #[test]
    fn test_parse_rejects_multi_char() {
        assert!(parse_delimiter("").is_err());
        assert!(parse_delimiter("--").is_err());
        assert!(parse_delimiter("newline").is_err());
    }

    #[test]
    fn test_defaults() {
        let config = SplitConfig::default();
        assert_eq!(config.delimiter_char().unwrap(), '\n');
        assert!(!config.json);
        assert!(config.warn_on_truncation);
    }

    #[test]
    fn test_load_split_section() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");
        std::fs::write(&path, "[split]\ndelimiter = \"semicolon\"\njson = true\n").unwrap();

        let config = load_config_file(&path).unwrap();
        assert_eq!(config.delimiter_char().unwrap(), ';');
        assert!(config.json);
        assert!(!config.pretty);
        assert!(config.warn_on_truncation);
    }

    #[test]
    fn test_missing_section_uses_defaults() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");
        std::fs::write(&path, "[other]\nkey = 1\n").unwrap();

        assert_eq!(load_config_file(&path).unwrap(), SplitConfig::default());
    }

    #[test]
    fn test_invalid_toml_is_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");
        std::fs::write(&path, "[split\n").unwrap();

        assert!(load_config_file(&path).is_err());
    }

    #[test]
    fn test_project_config_found_in_cwd() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join(CONFIG_DIR);
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join("config.toml"), "[split]\ndelimiter = \",\"\n").unwrap();

        let config = load_config(None, temp.path()).unwrap();
        assert_eq!(config.delimiter_char().unwrap(), ',');
    }

    #[test]
    fn test_explicit_config_must_exist() {
        let temp = TempDir::new().unwrap();
        let missing = temp.path().join("nope.toml");
        assert!(load_config(Some(&missing), temp.path()).is_err());
    }
}
