//! Command implementations.
//!
//! Each command returns the text to print so it can be checked without spawning the binary.

use anyhow::Context;
use sdb_keys::{KeyTable, ValueKind};
use sdb_model::{Model, WireFormat, wire};
use sdb_types::Key;
use serde::Serialize;
use serde_json::Value;

use crate::config::CliConfig;

#[derive(Debug, Serialize)]
struct TableSummary {
    name: &'static str,
    kind: &'static str,
    size: usize,
}

#[derive(Debug, Serialize)]
struct Alias {
    table: &'static str,
    mnemonic: &'static str,
}

fn kind_name(table: &KeyTable) -> &'static str {
    match table.kind() {
        ValueKind::Uuid => "uuid",
        ValueKind::Pattern => "pattern",
    }
}

fn emit<T: Serialize>(config: &CliConfig, value: &T) -> anyhow::Result<String> {
    let text = wire::render(value, config.output, config.pretty)?;
    Ok(text.trim_end().to_owned())
}

pub fn tables(config: &CliConfig) -> anyhow::Result<String> {
    let summaries: Vec<_> = sdb_keys::ALL_TABLES
        .iter()
        .map(|table| TableSummary {
            name: table.name(),
            kind: kind_name(table),
            size: table.len(),
        })
        .collect();
    emit(config, &summaries)
}

pub fn keys(config: &CliConfig, table: &str) -> anyhow::Result<String> {
    let table = sdb_keys::require_table(table)?;
    emit(config, table)
}

/// Prints the bare value, so the output can be used in shell substitutions.
pub fn lookup(table: &str, mnemonic: &str) -> anyhow::Result<String> {
    let value = sdb_keys::require_table(table)?.require(mnemonic)?;
    Ok(value.to_owned())
}

/// Lists every mnemonic for a value. UUIDs are matched in any textual form.
pub fn reverse(config: &CliConfig, value: &str) -> anyhow::Result<String> {
    let key = Key::from(value.trim());
    let needle = match key.to_uuid() {
        Ok(uuid) => uuid.hyphenated().to_string(),
        Err(_) => key.into_inner(),
    };

    let aliases: Vec<_> = sdb_keys::find_mnemonics(&needle)
        .into_iter()
        .map(|(table, mnemonic)| Alias { table, mnemonic })
        .collect();
    if aliases.is_empty() {
        tracing::info!(value = %needle, "no table holds this value");
    }
    emit(config, &aliases)
}

pub fn types(config: &CliConfig) -> anyhow::Result<String> {
    emit(config, &Model::TYPE_NAMES)
}

pub fn new(config: &CliConfig, type_name: &str) -> anyhow::Result<String> {
    let model = Model::empty(type_name)?;
    emit(config, &model)
}

/// Copies the fields of `type_name` out of a JSON or YAML source document.
///
/// Properties that are not fields of the type, or do not fit them, are dropped.
pub fn project(config: &CliConfig, type_name: &str, source: &str) -> anyhow::Result<String> {
    let source = read_source(source)?;
    let model = Model::project(type_name, Some(&source))?;
    emit(config, &model)
}

/// Strictly parses a `$type`-tagged document and reports what it holds.
pub fn check(source: &str) -> anyhow::Result<String> {
    let format = sniff(source);
    tracing::debug!(%format, "checking document");

    let model: Model = wire::parse(source, format)?;
    let value = model.to_value()?;
    let set = value
        .as_object()
        .map(|fields| fields.keys().filter(|k| k.as_str() != "$type").count())
        .unwrap_or(0);

    let mut report = format!("{}: ok ({set} fields set)", model.type_name());
    if let Model::Bundle(bundle) = &model {
        let items = bundle.item.as_deref().unwrap_or_default();
        let unrecognised = items.iter().filter(|item| item.record().is_none()).count();
        report.push_str(&format!(", {} items", items.len()));
        if unrecognised > 0 {
            report.push_str(&format!(" ({unrecognised} unrecognised)"));
        }
    }
    Ok(report)
}

fn sniff(source: &str) -> WireFormat {
    match source.trim_start().chars().next() {
        Some('{') | Some('[') => WireFormat::Json,
        _ => WireFormat::Yaml,
    }
}

fn read_source(source: &str) -> anyhow::Result<Value> {
    match sniff(source) {
        WireFormat::Json => serde_json::from_str(source).context("source is not valid JSON"),
        WireFormat::Yaml => serde_yaml::from_str(source).context("source is not valid YAML"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sdb_keys::{EntityClassKeys, StatusKeys};
    use serde_json::json;

    fn json_config() -> CliConfig {
        CliConfig::default()
    }

    #[test]
    fn lookup_prints_the_bare_value() {
        let value = lookup("StatusKeys", "Active").expect("known key");
        assert_eq!(value, StatusKeys::ACTIVE);
    }

    #[test]
    fn lookup_of_unknown_names_fails() {
        assert!(lookup("NoSuchKeys", "Active").is_err());
        let err = lookup("StatusKeys", "Dormant").expect_err("unknown key");
        assert!(err.to_string().contains("Dormant"), "{err}");
    }

    #[test]
    fn reverse_accepts_any_uuid_spelling() {
        let upper = EntityClassKeys::PROVIDER.to_ascii_uppercase();
        let out = reverse(&json_config(), &upper).expect("reverse");
        let aliases: Value = serde_json::from_str(&out).expect("json");
        let aliases = aliases.as_array().expect("array");
        assert!(aliases.contains(&json!({ "table": "EntityClassKeys", "mnemonic": "Provider" })));
        assert!(aliases.contains(&json!({
            "table": "EntityRelationshipTypeKeys",
            "mnemonic": "HealthcareProvider"
        })));
    }

    #[test]
    fn reverse_of_unknown_value_is_empty() {
        let out = reverse(&json_config(), "not-a-key").expect("reverse");
        assert_eq!(out, "[]");
    }

    #[test]
    fn tables_and_keys_render_in_order() {
        let out = tables(&json_config()).expect("tables");
        let summaries: Value = serde_json::from_str(&out).expect("json");
        let summaries = summaries.as_array().expect("array");
        assert_eq!(summaries.len(), sdb_keys::ALL_TABLES.len());
        assert!(summaries.contains(&json!({ "name": "StatusKeys", "kind": "uuid", "size": 8 })));

        let out = keys(&json_config(), "StatusKeys").expect("keys");
        assert!(out.starts_with(r#"{"Active":"c8064cbd-fa06-4530-b430-1a52f1530c27""#), "{out}");
        assert!(keys(&json_config(), "NoSuchKeys").is_err());
    }

    #[test]
    fn new_and_project_render_records() {
        assert_eq!(new(&json_config(), "Patient").expect("new"), r#"{"$type":"Patient"}"#);
        assert!(new(&json_config(), "Spaceship").is_err());

        let source = "id: X\ndateOfBirth: '2000-01-01'\nshoeSize: 9\n";
        let out = project(&json_config(), "Patient", source).expect("project");
        assert_eq!(out, r#"{"$type":"Patient","id":"X","dateOfBirth":"2000-01-01"}"#);
    }

    #[test]
    fn yaml_output_is_honoured() {
        let config = CliConfig {
            output: WireFormat::Yaml,
            pretty: false,
        };
        let out = types(&config).expect("types");
        assert!(out.lines().any(|line| line == "- Patient"), "{out}");
    }

    #[test]
    fn check_reports_type_and_rejects_mismatches() {
        let doc = r#"{"$type":"Bundle","item":[{"$type":"Patient","id":"p1"}],"count":1}"#;
        assert_eq!(check(doc).expect("valid"), "Bundle: ok (2 fields set), 1 items");

        let doc = r#"{"$type":"Bundle","item":[{"$type":"Patient"},{"id":"x"}]}"#;
        assert_eq!(
            check(doc).expect("valid"),
            "Bundle: ok (1 fields set), 2 items (1 unrecognised)"
        );

        let bad = r#"{"$type":"Patient","multipleBirthOrder":"second"}"#;
        assert!(check(bad).is_err());
        assert!(check("id: X\n").is_err());
    }
}
