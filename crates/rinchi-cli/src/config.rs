use crate::cli::{DecomposeArgs, OutputFormat};
use crate::error::{CliError, Result};
use clap::ValueEnum;
use rinchi_core::engine::config::{FormatConfig, FormatConfigBuilder};
use serde::Deserialize;
use std::path::Path;
use tracing::debug;

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
struct PartialFormatConfig {
    #[serde(rename = "rinchi-header")]
    rinchi_header: Option<String>,
    #[serde(rename = "rauxinfo-header")]
    rauxinfo_header: Option<String>,
    #[serde(rename = "inchi-header")]
    inchi_header: Option<String>,
    #[serde(rename = "auxinfo-header")]
    auxinfo_header: Option<String>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
struct PartialOutputConfig {
    format: Option<OutputFormat>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
pub struct PartialConfig {
    format: Option<PartialFormatConfig>,
    output: Option<PartialOutputConfig>,
}

/// Settings for one `decompose` run after all sources have been merged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub format: FormatConfig,
    pub output: OutputFormat,
}

impl PartialConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        debug!("Loading configuration from file: {:?}", path);
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| CliError::FileParsing {
            path: path.to_path_buf(),
            source: e.into(),
        })
    }

    /// Loads `path` if given, otherwise starts from an empty configuration.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        path.map_or_else(|| Ok(Self::default()), Self::from_file)
    }

    /// Resolves the final configuration. Precedence, lowest first: built-in defaults,
    /// this file, command-line flags, then `-S` values.
    pub fn merge_with_cli(mut self, args: &DecomposeArgs) -> Result<AppConfig> {
        if let Some(format) = args.format {
            self.output.get_or_insert_with(Default::default).format = Some(format);
        }
        self.apply_set_values(&args.set_values)?;

        let format_config = self.format.unwrap_or_default();
        let mut builder = FormatConfigBuilder::new();
        if let Some(header) = format_config.rinchi_header {
            builder = builder.rinchi_header(header);
        }
        if let Some(header) = format_config.rauxinfo_header {
            builder = builder.rauxinfo_header(header);
        }
        if let Some(header) = format_config.inchi_header {
            builder = builder.inchi_header(header);
        }
        if let Some(header) = format_config.auxinfo_header {
            builder = builder.auxinfo_header(header);
        }
        let format = builder
            .build()
            .map_err(|e| CliError::Config(e.to_string()))?;

        let output = self
            .output
            .and_then(|output| output.format)
            .unwrap_or_default();

        Ok(AppConfig { format, output })
    }

    fn apply_set_values(&mut self, set_values: &[String]) -> Result<()> {
        for kv_pair in set_values {
            let (key, value_str) = kv_pair.split_once('=').ok_or_else(|| {
                CliError::Config(format!(
                    "Invalid --set format: '{}'. Expected KEY=VALUE.",
                    kv_pair
                ))
            })?;
            let value = value_str.to_string();

            match key {
                "format.rinchi-header" => {
                    self.format
                        .get_or_insert_with(Default::default)
                        .rinchi_header = Some(value);
                }
                "format.rauxinfo-header" => {
                    self.format
                        .get_or_insert_with(Default::default)
                        .rauxinfo_header = Some(value);
                }
                "format.inchi-header" => {
                    self.format
                        .get_or_insert_with(Default::default)
                        .inchi_header = Some(value);
                }
                "format.auxinfo-header" => {
                    self.format
                        .get_or_insert_with(Default::default)
                        .auxinfo_header = Some(value);
                }
                "output.format" => {
                    let format = OutputFormat::from_str(value_str, true).map_err(|_| {
                        CliError::Config(format!(
                            "Invalid output format for {}: {}. Expected 'text' or 'json'.",
                            key, value_str
                        ))
                    })?;
                    self.output.get_or_insert_with(Default::default).format = Some(format);
                }
                _ => {
                    return Err(CliError::Config(format!(
                        "Unsupported configuration key for --set: '{}'",
                        key
                    )));
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::{Cli, Commands};
    use clap::Parser;
    use std::fs;
    use std::path::PathBuf;
    use std::sync::LazyLock;
    use tempfile::{TempDir, tempdir};

    static TEST_DIR: LazyLock<TempDir> =
        LazyLock::new(|| tempdir().expect("Failed to create temp dir"));

    fn write_config_file(name: &str, content: &str) -> PathBuf {
        let file_path = TEST_DIR.path().join(name);
        fs::write(&file_path, content).unwrap();
        file_path
    }

    fn decompose_args(extra: &[&str]) -> DecomposeArgs {
        let mut args = vec!["rinchi", "decompose", "-r", "RInChI=1.00.1S/"];
        args.extend_from_slice(extra);
        match Cli::parse_from(args).command {
            Commands::Decompose(args) => args,
            other => panic!("Expected 'decompose' subcommand, got {other:?}"),
        }
    }

    #[test]
    fn no_config_file_yields_defaults() {
        let config = PartialConfig::load(None)
            .unwrap()
            .merge_with_cli(&decompose_args(&[]))
            .unwrap();
        assert_eq!(config.format, FormatConfig::default());
        assert_eq!(config.output, OutputFormat::Text);
    }

    #[test]
    fn file_values_override_defaults() {
        let path = write_config_file(
            "config_file_values.toml",
            r#"
        [format]
        rinchi-header = "RInChI=1.00.1/"
        inchi-header = "InChI=1/"

        [output]
        format = "json"
        "#,
        );

        let config = PartialConfig::load(Some(path.as_path()))
            .unwrap()
            .merge_with_cli(&decompose_args(&[]))
            .unwrap();
        assert_eq!(config.format.rinchi_header, "RInChI=1.00.1/");
        assert_eq!(config.format.inchi_header, "InChI=1/");
        assert_eq!(config.format.rauxinfo_header, "RAuxInfo=1.00.1/");
        assert_eq!(config.format.auxinfo_header, "AuxInfo=1/");
        assert_eq!(config.output, OutputFormat::Json);
    }

    #[test]
    fn cli_flag_overrides_file_and_set_overrides_flag() {
        let path = write_config_file(
            "config_precedence.toml",
            r#"
        [output]
        format = "json"
        "#,
        );

        let partial = PartialConfig::from_file(&path).unwrap();
        let config = partial
            .merge_with_cli(&decompose_args(&["--format", "text"]))
            .unwrap();
        assert_eq!(config.output, OutputFormat::Text);

        let partial = PartialConfig::from_file(&path).unwrap();
        let config = partial
            .merge_with_cli(&decompose_args(&["--format", "text", "-S", "output.format=json"]))
            .unwrap();
        assert_eq!(config.output, OutputFormat::Json);
    }

    #[test]
    fn set_values_override_headers() {
        let args = decompose_args(&[
            "-S",
            "format.auxinfo-header=AuxInfo=2/",
            "-S",
            "format.rauxinfo-header=RAuxInfo=1.00.1/",
        ]);
        let config = PartialConfig::default().merge_with_cli(&args).unwrap();
        assert_eq!(config.format.auxinfo_header, "AuxInfo=2/");
        assert_eq!(config.format.rauxinfo_header, "RAuxInfo=1.00.1/");
    }

    #[test]
    fn unknown_set_key_is_rejected() {
        let args = decompose_args(&["-S", "format.unknown=1"]);
        let result = PartialConfig::default().merge_with_cli(&args);
        assert!(matches!(result, Err(CliError::Config(msg)) if msg.contains("format.unknown")));
    }

    #[test]
    fn set_value_without_equals_is_rejected() {
        let args = decompose_args(&["-S", "output.format"]);
        let result = PartialConfig::default().merge_with_cli(&args);
        assert!(matches!(result, Err(CliError::Config(msg)) if msg.contains("KEY=VALUE")));
    }

    #[test]
    fn invalid_output_format_in_set_is_rejected() {
        let args = decompose_args(&["-S", "output.format=xml"]);
        assert!(matches!(
            PartialConfig::default().merge_with_cli(&args),
            Err(CliError::Config(_))
        ));
    }

    #[test]
    fn empty_header_is_a_config_error() {
        let path = write_config_file(
            "config_empty_header.toml",
            r#"
        [format]
        inchi-header = ""
        "#,
        );
        let result = PartialConfig::from_file(&path)
            .unwrap()
            .merge_with_cli(&decompose_args(&[]));
        assert!(matches!(result, Err(CliError::Config(msg)) if msg.contains("inchi_header")));
    }

    #[test]
    fn unknown_keys_in_file_are_rejected() {
        let path = write_config_file(
            "config_unknown_key.toml",
            r#"
        [format]
        rinchi-headr = "RInChI=1.00.1S/"
        "#,
        );
        let result = PartialConfig::from_file(&path);
        assert!(matches!(result, Err(CliError::FileParsing { .. })));
    }

    #[test]
    fn missing_config_file_is_an_io_error() {
        let path = TEST_DIR.path().join("does_not_exist.toml");
        assert!(matches!(
            PartialConfig::from_file(&path),
            Err(CliError::Io(_))
        ));
    }
}
