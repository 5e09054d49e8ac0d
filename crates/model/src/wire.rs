//! Strict parsing and rendering of wire documents.
//!
//! [`Record::copy_from`](crate::Record::copy_from) is forgiving by design. The helpers here are
//! not: a document that does not match the declared shape is rejected, and the error names the
//! path of the offending property (for example `item[0].name.Legal`).

use crate::{ModelError, ModelResult};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Text encodings a document can be read from or written to.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum WireFormat {
    /// The server's format.
    #[default]
    Json,
    Yaml,
}

impl fmt::Display for WireFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WireFormat::Json => f.write_str("json"),
            WireFormat::Yaml => f.write_str("yaml"),
        }
    }
}

impl FromStr for WireFormat {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(WireFormat::Json),
            "yaml" | "yml" => Ok(WireFormat::Yaml),
            other => Err(ModelError::Translation(format!(
                "unknown wire format '{other}' (expected json or yaml)"
            ))),
        }
    }
}

/// Parses `text` as `T`, reporting the path of the first mismatch.
///
/// # Errors
///
/// Returns [`ModelError::Translation`] if the text is malformed or does not match `T`.
pub fn parse<T: DeserializeOwned>(text: &str, format: WireFormat) -> ModelResult<T> {
    match format {
        WireFormat::Json => {
            let mut deserializer = serde_json::Deserializer::from_str(text);
            serde_path_to_error::deserialize(&mut deserializer)
                .map_err(|err| mismatch(err.path().to_string(), err.into_inner()))
        }
        WireFormat::Yaml => {
            let deserializer = serde_yaml::Deserializer::from_str(text);
            serde_path_to_error::deserialize(deserializer)
                .map_err(|err| mismatch(err.path().to_string(), err.into_inner()))
        }
    }
}

fn mismatch(path: String, source: impl fmt::Display) -> ModelError {
    let path = if path.is_empty() || path == "." {
        "<root>".to_owned()
    } else {
        path
    };
    ModelError::Translation(format!("schema mismatch at {path}: {source}"))
}

/// Renders `value` as text.
///
/// `pretty` only affects JSON; YAML is always block-formatted.
pub fn render<T: Serialize>(value: &T, format: WireFormat, pretty: bool) -> ModelResult<String> {
    match format {
        WireFormat::Json if pretty => serde_json::to_string_pretty(value).map_err(ModelError::Json),
        WireFormat::Json => serde_json::to_string(value).map_err(ModelError::Json),
        WireFormat::Yaml => serde_yaml::to_string(value).map_err(ModelError::Yaml),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Model, Patient, Record};

    #[test]
    fn parses_tagged_json() {
        let text = r#"{"$type":"Patient","id":"X","dateOfBirth":"2000-01-01"}"#;
        let model: Model = parse(text, WireFormat::Json).expect("parse");
        match model {
            Model::Patient(patient) => {
                assert_eq!(patient.id.as_ref().map(|k| k.as_str()), Some("X"));
                assert_eq!(patient.date_of_birth.as_deref(), Some("2000-01-01"));
            }
            other => panic!("expected Patient, got {}", other.type_name()),
        }
    }

    #[test]
    fn reports_path_of_mismatch() {
        let text = r#"{"$type":"Patient","multipleBirthOrder":"second"}"#;
        let err = parse::<Patient>(text, WireFormat::Json).expect_err("wrong type");
        match err {
            ModelError::Translation(msg) => assert!(msg.contains("multipleBirthOrder"), "{msg}"),
            other => panic!("expected Translation error, got {other:?}"),
        }
    }

    #[test]
    fn malformed_json_is_rejected() {
        let err = parse::<Patient>("{", WireFormat::Json).expect_err("malformed");
        assert!(matches!(err, ModelError::Translation(_)));
    }

    #[test]
    fn yaml_reads_the_same_shape() {
        let yaml = "$type: Patient\nid: X\nmultipleBirthOrder: 2\n";
        let patient: Patient = parse(yaml, WireFormat::Yaml).expect("parse yaml");
        assert_eq!(patient.multiple_birth_order, Some(2));
    }

    #[test]
    fn renders_json_and_yaml() {
        let mut patient = Patient::new();
        patient.id = Some("X".into());

        let json = render(&patient, WireFormat::Json, false).expect("json");
        assert_eq!(json, r#"{"$type":"Patient","id":"X"}"#);

        let yaml = render(&patient, WireFormat::Yaml, false).expect("yaml");
        assert!(yaml.contains("$type"), "{yaml}");
        assert!(yaml.contains("Patient"), "{yaml}");

        let reparsed: Patient = parse(&yaml, WireFormat::Yaml).expect("reparse");
        assert_eq!(reparsed, patient);
        assert_eq!(Patient::TYPE_NAME, "Patient");
    }

    #[test]
    fn format_names() {
        assert_eq!("JSON".parse::<WireFormat>().ok(), Some(WireFormat::Json));
        assert_eq!("yml".parse::<WireFormat>().ok(), Some(WireFormat::Yaml));
        assert!("xml".parse::<WireFormat>().is_err());
        assert_eq!(WireFormat::default().to_string(), "json");
    }
}
