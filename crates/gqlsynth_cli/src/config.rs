//! Configuration file support.
//!
//! ```json
//! {
//!   "introspection": {
//!     "operationNames": { "GET_LIST": "list{name}" },
//!     "exclude": ["AuditLog"]
//!   },
//!   "format": { "indentSize": 4 }
//! }
//! ```

use crate::error::CliError;
use gqlsynth_core::IntrospectionOptions;
use gqlsynth_syntax::FormatOptions;
use serde::Deserialize;
use std::path::Path;

/// Contents of a `--config` file. Every section is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Config {
    pub introspection: IntrospectionOptions,
    pub format: FormatConfig,
}

/// Printer settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FormatConfig {
    pub indent_size: usize,
    pub use_tabs: bool,
}

impl Default for FormatConfig {
    fn default() -> Self {
        let defaults = FormatOptions::default();
        Self {
            indent_size: defaults.indent_size,
            use_tabs: defaults.use_tabs,
        }
    }
}

impl From<&FormatConfig> for FormatOptions {
    fn from(config: &FormatConfig) -> Self {
        Self {
            indent_size: config.indent_size,
            use_tabs: config.use_tabs,
        }
    }
}

impl Config {
    pub fn from_json(source: &str) -> Result<Self, CliError> {
        serde_json::from_str(source).map_err(CliError::json("configuration"))
    }

    /// Reads `path`, or returns the defaults when no file is given.
    pub fn load(path: Option<&Path>) -> Result<Self, CliError> {
        match path {
            Some(path) => Self::from_json(&crate::read_file(path)?),
            None => Ok(Self::default()),
        }
    }

    #[must_use]
    pub fn format_options(&self) -> FormatOptions {
        FormatOptions::from(&self.format)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gqlsynth_core::FetchKind;

    #[test]
    fn test_empty_config() {
        let config = Config::from_json("{}").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.format_options().indent_size, 2);
        assert_eq!(
            config
                .introspection
                .operation_names
                .resolve(&FetchKind::GetList, "Post")
                .as_deref(),
            Some("allPosts")
        );
    }

    #[test]
    fn test_partial_overrides() {
        let config = Config::from_json(
            r#"{
                "introspection": {
                    "operationNames": { "GET_LIST": "list{name}" },
                    "exclude": ["AuditLog"]
                },
                "format": { "useTabs": true }
            }"#,
        )
        .unwrap();
        let names = &config.introspection.operation_names;

        assert_eq!(names.resolve(&FetchKind::GetList, "Post").as_deref(), Some("listPost"));
        assert_eq!(names.resolve(&FetchKind::GetOne, "Post").as_deref(), Some("Post"));
        assert_eq!(config.introspection.exclude, Some(vec!["AuditLog".to_string()]));
        assert!(config.format.use_tabs);
        assert_eq!(config.format.indent_size, 2);
    }

    #[test]
    fn test_invalid_config() {
        let err = Config::from_json(r#"{ "format": { "indentSize": "wide" } }"#).unwrap_err();
        assert!(matches!(err, CliError::Json { what: "configuration", .. }));
    }
}
