//! Converter configuration module.
//!
//! Handles loading and validating the optional `web-to-header.toml` file.
//! Every key has a default, so the tool runs with no file at all and
//! converts `static/` into `src/` exactly like the plain script it replaces.
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! source_dir = "static"             # Directory holding the web assets
//! output_dir = "src"                # Directory receiving the headers
//! extensions = ["html", "css", "js"] # Eligible file extensions
//!
//! [minify]
//! enabled = true                    # Minify HTML before dumping
//! minify_js = false                 # Minify inline <script> blocks
//! minify_css = false                # Minify inline <style> blocks
//! keep_comments = false
//! remove_processing_instructions = true
//!
//! [header]
//! include_guard = "#pragma once"
//! memory_attribute = "PROGMEM"      # Inserted as `name[] PROGMEM =`
//! storage_keyword = "inline"        # Prefixed as `inline unsigned ...`
//!
//! [dump]
//! backend = "builtin"               # "builtin" or "xxd"
//! program = "xxd"                   # Binary used by the xxd backend
//! bytes_per_line = 12
//! ```
//!
//! Unknown keys are rejected to catch typos early.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Default config file name, looked up in the working directory.
pub const CONFIG_FILENAME: &str = "web-to-header.toml";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Converter configuration loaded from `web-to-header.toml`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConverterConfig {
    /// Directory holding the web assets.
    pub source_dir: PathBuf,
    /// Directory receiving the generated headers. Created when absent.
    pub output_dir: PathBuf,
    /// File extensions (without the dot) eligible for conversion.
    pub extensions: Vec<String>,
    /// HTML minification options.
    pub minify: MinifyConfig,
    /// Header post-processing options.
    pub header: HeaderConfig,
    /// Byte-array dump options.
    pub dump: DumpConfig,
}

impl Default for ConverterConfig {
    fn default() -> Self {
        Self {
            source_dir: PathBuf::from("static"),
            output_dir: PathBuf::from("src"),
            extensions: vec!["html".into(), "css".into(), "js".into()],
            minify: MinifyConfig::default(),
            header: HeaderConfig::default(),
            dump: DumpConfig::default(),
        }
    }
}

impl ConverterConfig {
    /// Validate config values are within acceptable ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.extensions.is_empty() {
            return Err(ConfigError::Validation(
                "extensions must not be empty".into(),
            ));
        }
        for ext in &self.extensions {
            if ext.is_empty() || ext.starts_with('.') {
                return Err(ConfigError::Validation(format!(
                    "extension {ext:?} must be non-empty and written without a leading dot"
                )));
            }
        }
        if !(1..=256).contains(&self.dump.bytes_per_line) {
            return Err(ConfigError::Validation(
                "dump.bytes_per_line must be 1-256".into(),
            ));
        }
        if self.dump.program.trim().is_empty() {
            return Err(ConfigError::Validation(
                "dump.program must not be empty".into(),
            ));
        }
        for (key, value) in [
            ("header.include_guard", &self.header.include_guard),
            ("header.memory_attribute", &self.header.memory_attribute),
            ("header.storage_keyword", &self.header.storage_keyword),
        ] {
            if value.trim().is_empty() {
                return Err(ConfigError::Validation(format!("{key} must not be empty")));
            }
        }
        Ok(())
    }

    /// Whether a file name carries one of the eligible extensions.
    ///
    /// Matching is on the literal suffix, case-sensitive: `index.HTML` is
    /// not eligible under the default extension list.
    pub fn is_eligible(&self, file_name: &str) -> bool {
        self.extensions.iter().any(|ext| {
            file_name
                .strip_suffix(ext.as_str())
                .is_some_and(|stem| stem.ends_with('.'))
        })
    }
}

/// HTML minification options, mapped onto `minify_html::Cfg`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MinifyConfig {
    /// Minify HTML assets before dumping them. CSS and JS are never minified.
    pub enabled: bool,
    /// Minify the contents of inline `<script>` blocks.
    pub minify_js: bool,
    /// Minify the contents of inline `<style>` blocks.
    pub minify_css: bool,
    /// Keep `<!-- -->` comments.
    pub keep_comments: bool,
    /// Drop `<?...?>` processing instructions.
    pub remove_processing_instructions: bool,
}

impl Default for MinifyConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            minify_js: false,
            minify_css: false,
            keep_comments: false,
            remove_processing_instructions: true,
        }
    }
}

/// Header post-processing options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HeaderConfig {
    /// First line of every header.
    pub include_guard: String,
    /// Attribute inserted between `[]` and `=` of the array declaration.
    pub memory_attribute: String,
    /// Keyword prefixed to every `unsigned` declaration.
    pub storage_keyword: String,
}

impl Default for HeaderConfig {
    fn default() -> Self {
        Self {
            include_guard: "#pragma once".to_string(),
            memory_attribute: "PROGMEM".to_string(),
            storage_keyword: "inline".to_string(),
        }
    }
}

/// Which implementation produces the byte-array text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DumpBackendKind {
    /// In-process encoder, no external tools required.
    #[default]
    Builtin,
    /// Shell out to `xxd -i`.
    Xxd,
}

/// Byte-array dump options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DumpConfig {
    pub backend: DumpBackendKind,
    /// Binary invoked by the xxd backend.
    pub program: String,
    /// Bytes per row of the array literal.
    pub bytes_per_line: usize,
}

impl Default for DumpConfig {
    fn default() -> Self {
        Self {
            backend: DumpBackendKind::Builtin,
            program: "xxd".to_string(),
            bytes_per_line: 12,
        }
    }
}

// =============================================================================
// Config loading and validation
// =============================================================================

/// Parse and validate config text.
pub fn parse_config(content: &str) -> Result<ConverterConfig, ConfigError> {
    let config: ConverterConfig = toml::from_str(content)?;
    config.validate()?;
    Ok(config)
}

/// Load config from a file path.
///
/// Returns the stock defaults if the file doesn't exist.
/// Returns `Err` if the file exists but is invalid TOML or fails validation.
pub fn load_config(path: &Path) -> Result<ConverterConfig, ConfigError> {
    if !path.exists() {
        return Ok(ConverterConfig::default());
    }
    let content = fs::read_to_string(path)?;
    parse_config(&content)
}

/// Returns a fully-commented stock `web-to-header.toml` with all keys.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# web-to-header Configuration
# ===========================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults.
#
# Unknown keys will cause an error.

# Directory holding the web assets.
source_dir = "static"

# Directory receiving the generated headers. Created when absent.
output_dir = "src"

# Eligible file extensions, without the leading dot. Matching is case-sensitive.
extensions = ["html", "css", "js"]

# ---------------------------------------------------------------------------
# HTML minification (CSS and JS assets are embedded verbatim)
# ---------------------------------------------------------------------------
[minify]
enabled = true

# Minify the contents of inline <script> and <style> blocks.
minify_js = false
minify_css = false

# Keep <!-- --> comments in the embedded page.
keep_comments = false

# Drop <?...?> processing instructions.
remove_processing_instructions = true

# ---------------------------------------------------------------------------
# Header post-processing
# ---------------------------------------------------------------------------
[header]
# First line of every generated header.
include_guard = "#pragma once"

# Inserted into the array declaration: `unsigned char x[] PROGMEM = {`.
memory_attribute = "PROGMEM"

# Prefixed to every `unsigned` declaration so the header can be included
# from several translation units.
storage_keyword = "inline"

# ---------------------------------------------------------------------------
# Byte-array dump
# ---------------------------------------------------------------------------
[dump]
# "builtin" encodes in process; "xxd" shells out to `xxd -i`.
backend = "builtin"

# Binary used by the xxd backend.
program = "xxd"

# Bytes per row of the array literal.
bytes_per_line = 12
"##
}
