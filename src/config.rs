//! Configuration management for the `twiml` command.
//!
//! Handles:
//! - Command-line argument parsing
//! - Optional TOML configuration file (macro defaults, strict mode)

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use serde::Deserialize;

use crate::parser::MacroDefaults;

/// Output produced by the command
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Rendered markup document
    Xml,
    /// The parsed node tree as JSON
    Json,
}

/// Command-line arguments for the `twiml` command
#[derive(Debug, Parser)]
#[command(name = "twiml")]
#[command(about = "Render macro strings into call-control markup")]
#[command(version)]
pub struct Args {
    /// Macro string to render; read from stdin when neither this nor --file is given
    pub input: Option<String>,

    /// Read the macro string from a file
    #[arg(long, conflicts_with = "input")]
    pub file: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value = "xml")]
    pub format: OutputFormat,

    /// Only validate the document and report the result
    #[arg(long)]
    pub check: bool,

    /// Treat unknown macro verbs as errors
    #[arg(long)]
    pub strict: bool,

    /// Configuration file (defaults to <config dir>/twiml/config.toml)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log level for the command
    #[arg(
        long,
        default_value = "info",
        help = "Log level (trace, debug, info, warn, error)"
    )]
    pub log_level: String,
}

/// Settings read from the TOML configuration file
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    #[serde(default)]
    pub strict: bool,
    #[serde(default)]
    pub macros: MacroDefaults,
}

impl FileConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading config file {}", path.display()))?;
        toml::from_str(&text).with_context(|| format!("parsing config file {}", path.display()))
    }
}

/// Where the macro string comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    Inline(String),
    File(PathBuf),
    Stdin,
}

/// Combined configuration from all sources
#[derive(Debug, Clone)]
pub struct Config {
    pub input: InputSource,
    pub format: OutputFormat,
    pub check: bool,
    pub strict: bool,
    pub macro_defaults: MacroDefaults,
    pub log_level: String,
}

impl Config {
    /// Create configuration from command-line arguments
    pub fn from_args_and_env() -> Result<Self> {
        Self::from_args(Args::parse())
    }

    /// Create configuration from explicit arguments (useful for testing)
    pub fn from_args(args: Args) -> Result<Self> {
        let file_config = match Self::config_path(args.config.as_deref()) {
            Some(path) => {
                log::debug!("loading configuration from {}", path.display());
                FileConfig::load(&path)?
            }
            None => FileConfig::default(),
        };

        let input = match (args.input, args.file) {
            (Some(text), _) => InputSource::Inline(text),
            (None, Some(path)) => InputSource::File(path),
            (None, None) => InputSource::Stdin,
        };

        Ok(Config {
            input,
            format: args.format,
            check: args.check,
            strict: args.strict || file_config.strict,
            macro_defaults: file_config.macros,
            log_level: args.log_level,
        })
    }

    /// An explicit path always wins; the default location is only used
    /// when the file exists
    fn config_path(explicit: Option<&Path>) -> Option<PathBuf> {
        if let Some(path) = explicit {
            return Some(path.to_path_buf());
        }
        dirs::config_dir()
            .map(|dir| dir.join("twiml").join("config.toml"))
            .filter(|path| path.is_file())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_config_defaults() {
        let config: FileConfig = toml::from_str("").unwrap();
        assert_eq!(config, FileConfig::default());
    }

    #[test]
    fn test_file_config_macros_table() {
        let config: FileConfig = toml::from_str(
            r#"
strict = true

[macros]
voice = "alice"
language = "en-GB"
"#,
        )
        .unwrap();

        assert!(config.strict);
        assert_eq!(config.macros.voice.as_deref(), Some("alice"));
        assert_eq!(config.macros.language.as_deref(), Some("en-GB"));
    }

    #[test]
    fn test_unknown_keys_are_rejected() {
        assert!(toml::from_str::<FileConfig>("colour = \"blue\"").is_err());
    }

    #[test]
    fn test_args_parse() {
        let args = Args::try_parse_from(["twiml", "--format", "json", "--strict", "{say|Hi}"])
            .unwrap();
        assert_eq!(args.format, OutputFormat::Json);
        assert!(args.strict);
        assert_eq!(args.input.as_deref(), Some("{say|Hi}"));
        assert_eq!(args.log_level, "info");
    }
}
