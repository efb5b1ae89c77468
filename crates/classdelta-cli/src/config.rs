//! Configuration file and settings resolution
//!
//! Settings come from three layers: command-line flags, then the TOML
//! config file, then built-in defaults.
//!
//! ```toml
//! [filter]
//! include = ["com.acme."]
//! exclude = ["com.acme.internal."]
//!
//! [report]
//! min_severity = "WARNING"
//! format = "json"
//!
//! [logging]
//! profile = "production"
//! ```

use std::path::Path;

use clap::ValueEnum;
use classdelta_core::errors::{ExError, ExErrorKind};
use classdelta_core::logging_facility::Profile;
use classdelta_core::Severity;
use classdelta_engine::ClassFilter;
use serde::Deserialize;

use crate::commands::diff::DiffArgs;

/// Config file picked up from the working directory when `--config` is absent.
pub const DEFAULT_CONFIG_FILE: &str = "classdelta.toml";

const OP_LOAD_CONFIG: &str = "load_config";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct FileConfig {
    pub filter: FilterSection,
    pub report: ReportSection,
    pub logging: LoggingSection,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct FilterSection {
    pub include: Vec<String>,
    pub exclude: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct ReportSection {
    pub min_severity: Option<Severity>,
    pub format: Option<OutputFormat>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct LoggingSection {
    pub profile: Option<Profile>,
}

impl FileConfig {
    pub fn parse(text: &str) -> Result<Self, ExError> {
        toml::from_str(text).map_err(|e| {
            ExError::new(ExErrorKind::Config)
                .with_op(OP_LOAD_CONFIG)
                .with_message(e.to_string())
        })
    }
}

/// Load `explicit`, or the default file if it exists, or nothing.
///
/// A missing explicit file is an error; a missing default file is not.
pub fn load(explicit: Option<&Path>) -> Result<FileConfig, ExError> {
    let path = match explicit {
        Some(path) => path,
        None => {
            let default = Path::new(DEFAULT_CONFIG_FILE);
            if !default.is_file() {
                return Ok(FileConfig::default());
            }
            default
        }
    };

    let text = std::fs::read_to_string(path).map_err(|e| {
        ExError::new(ExErrorKind::Io)
            .with_op(OP_LOAD_CONFIG)
            .with_path(path.display().to_string())
            .with_message(e.to_string())
    })?;
    FileConfig::parse(&text).map_err(|e| e.with_path(path.display().to_string()))
}

/// Effective settings for one `diff` run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub filter: ClassFilter,
    pub min_severity: Severity,
    pub format: OutputFormat,
    pub profile: Profile,
}

impl Settings {
    pub fn resolve(args: &DiffArgs, file: FileConfig) -> Self {
        let include = if args.include.is_empty() {
            file.filter.include
        } else {
            args.include.clone()
        };
        let exclude = if args.exclude.is_empty() {
            file.filter.exclude
        } else {
            args.exclude.clone()
        };

        Self {
            filter: ClassFilter::new(include, exclude),
            min_severity: args
                .min_severity
                .or(file.report.min_severity)
                .unwrap_or(Severity::Info),
            format: args.format.or(file.report.format).unwrap_or_default(),
            profile: file.logging.profile.unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn args() -> DiffArgs {
        DiffArgs {
            previous: PathBuf::from("prev"),
            next: PathBuf::from("next"),
            format: None,
            min_severity: None,
            include: Vec::new(),
            exclude: Vec::new(),
            config: None,
        }
    }

    #[test]
    fn test_parse_full_config() {
        let config = FileConfig::parse(
            r#"
            [filter]
            include = ["com.acme."]
            exclude = ["com.acme.internal."]

            [report]
            min_severity = "WARNING"
            format = "json"

            [logging]
            profile = "production"
            "#,
        )
        .unwrap();

        assert_eq!(config.filter.include, vec!["com.acme."]);
        assert_eq!(config.filter.exclude, vec!["com.acme.internal."]);
        assert_eq!(config.report.min_severity, Some(Severity::Warning));
        assert_eq!(config.report.format, Some(OutputFormat::Json));
        assert_eq!(config.logging.profile, Some(Profile::Production));
    }

    #[test]
    fn test_empty_config_is_default() {
        assert_eq!(FileConfig::parse("").unwrap(), FileConfig::default());
    }

    #[test]
    fn test_unknown_keys_are_rejected() {
        let err = FileConfig::parse("[report]\ncolour = \"red\"\n").unwrap_err();
        assert_eq!(err.kind(), ExErrorKind::Config);
        assert!(err.message().contains("colour"), "{}", err.message());

        let err = FileConfig::parse("[output]\nformat = \"json\"\n").unwrap_err();
        assert_eq!(err.code(), "ERR_CONFIG");
    }

    #[test]
    fn test_defaults_without_flags_or_file() {
        let settings = Settings::resolve(&args(), FileConfig::default());
        assert_eq!(settings.filter, ClassFilter::default());
        assert_eq!(settings.min_severity, Severity::Info);
        assert_eq!(settings.format, OutputFormat::Text);
        assert_eq!(settings.profile, Profile::Development);
    }

    #[test]
    fn test_flags_override_file() {
        let file = FileConfig::parse(
            r#"
            [filter]
            include = ["com.acme."]
            exclude = ["com.acme.internal."]
            [report]
            min_severity = "ERROR"
            format = "json"
            "#,
        )
        .unwrap();
        let mut cli = args();
        cli.include = vec!["org.example.".to_string()];
        cli.min_severity = Some(Severity::Warning);

        let settings = Settings::resolve(&cli, file);

        assert_eq!(settings.filter.include, vec!["org.example."]);
        assert_eq!(settings.filter.exclude, vec!["com.acme.internal."]);
        assert_eq!(settings.min_severity, Severity::Warning);
        assert_eq!(settings.format, OutputFormat::Json);
    }

    #[test]
    fn test_missing_explicit_file_is_io_error() {
        let err = load(Some(Path::new("/no/such/dir/classdelta.toml"))).unwrap_err();
        assert_eq!(err.kind(), ExErrorKind::Io);
        assert_eq!(err.path(), Some("/no/such/dir/classdelta.toml"));
    }
}
