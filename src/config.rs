//! Command-line configuration.
//!
//! Resolved once at startup from the environment (after `.env` has been loaded) and the global
//! flags, then passed to the commands. Commands never read environment variables themselves.

use anyhow::{Context, bail};
use sdb_model::WireFormat;

/// Output format for rendered documents (`json` or `yaml`).
pub const OUTPUT_FORMAT_VAR: &str = "SDB_OUTPUT_FORMAT";
/// Pretty-print JSON output (`true`/`false`, `1`/`0`, `yes`/`no`, `on`/`off`).
pub const PRETTY_VAR: &str = "SDB_PRETTY";

/// Configuration resolved at startup.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CliConfig {
    pub output: WireFormat,
    pub pretty: bool,
}

impl CliConfig {
    /// Resolves configuration from the process environment, with flags taking precedence.
    pub fn from_env(format_flag: Option<WireFormat>, pretty_flag: bool) -> anyhow::Result<Self> {
        Self::resolve(|name| std::env::var(name).ok(), format_flag, pretty_flag)
    }

    /// Resolves configuration from an arbitrary variable source.
    ///
    /// `--pretty` can only switch pretty printing on; an unset flag defers to the environment.
    pub fn resolve<F>(
        lookup: F,
        format_flag: Option<WireFormat>,
        pretty_flag: bool,
    ) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let output = match format_flag {
            Some(format) => format,
            None => match lookup(OUTPUT_FORMAT_VAR) {
                Some(raw) if !raw.trim().is_empty() => raw
                    .parse::<WireFormat>()
                    .with_context(|| format!("invalid {OUTPUT_FORMAT_VAR}"))?,
                _ => WireFormat::default(),
            },
        };

        let pretty = pretty_flag
            || match lookup(PRETTY_VAR) {
                Some(raw) => parse_flag(&raw).with_context(|| format!("invalid {PRETTY_VAR}"))?,
                None => false,
            };

        Ok(Self { output, pretty })
    }
}

fn parse_flag(raw: &str) -> anyhow::Result<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "" | "0" | "false" | "no" | "off" => Ok(false),
        "1" | "true" | "yes" | "on" => Ok(true),
        other => bail!("expected a boolean, got '{other}'"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    fn vars(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn resolve_with(
        env: &HashMap<String, String>,
        format_flag: Option<WireFormat>,
        pretty_flag: bool,
    ) -> anyhow::Result<CliConfig> {
        CliConfig::resolve(|name| env.get(name).cloned(), format_flag, pretty_flag)
    }

    #[test]
    fn defaults_to_compact_json() {
        let config = resolve_with(&HashMap::new(), None, false).expect("defaults");
        assert_eq!(config, CliConfig::default());
        assert_eq!(config.output, WireFormat::Json);
        assert!(!config.pretty);
    }

    #[test]
    fn environment_is_used_when_flags_are_absent() {
        let env = vars(&[(OUTPUT_FORMAT_VAR, "yaml"), (PRETTY_VAR, "yes")]);
        let config = resolve_with(&env, None, false).expect("env");
        assert_eq!(config.output, WireFormat::Yaml);
        assert!(config.pretty);
    }

    #[test]
    fn flags_win_over_environment() {
        let env = vars(&[(OUTPUT_FORMAT_VAR, "yaml"), (PRETTY_VAR, "0")]);
        let config = resolve_with(&env, Some(WireFormat::Json), true).expect("flags");
        assert_eq!(config.output, WireFormat::Json);
        assert!(config.pretty);
    }

    #[test]
    fn invalid_values_are_rejected() {
        let env = vars(&[(OUTPUT_FORMAT_VAR, "xml")]);
        let err = resolve_with(&env, None, false).expect_err("bad format");
        assert!(err.to_string().contains(OUTPUT_FORMAT_VAR), "{err}");

        let env = vars(&[(PRETTY_VAR, "sometimes")]);
        let err = resolve_with(&env, None, false).expect_err("bad flag");
        assert!(err.to_string().contains(PRETTY_VAR), "{err}");
    }

    #[test]
    fn reads_values_from_a_dotenv_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join(".env");
        let mut file = std::fs::File::create(&path).expect("create .env");
        writeln!(file, "# output settings").expect("write");
        writeln!(file, "{OUTPUT_FORMAT_VAR}=yaml").expect("write");
        writeln!(file, "{PRETTY_VAR}=on").expect("write");
        drop(file);

        let env: HashMap<String, String> = dotenvy::from_path_iter(&path)
            .expect("read .env")
            .collect::<Result<_, _>>()
            .expect("parse .env");

        let config = resolve_with(&env, None, false).expect("dotenv");
        assert_eq!(
            config,
            CliConfig {
                output: WireFormat::Yaml,
                pretty: true
            }
        );
    }
}
