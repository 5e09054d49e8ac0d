//! Mnemonic-to-identifier lookup tables.
//!
//! The server schema names its coded concepts, classes and relationship types by UUID. Clients
//! refer to them by mnemonic (`"Active"`, `"Patient"`, `"Legal"`) and resolve the mnemonic through
//! the tables in this crate.
//!
//! ## Table values are wire constants
//! Every value is a fixed string shared with the server and with other clients. Values are written
//! in the lowercase hyphenated form the server emits and must never be edited in place. Some values
//! are deliberately shared between tables (for example `EntityClassKeys::PROVIDER` and
//! `EntityRelationshipTypeKeys::HEALTHCARE_PROVIDER`); [`find_mnemonics`] lists every alias of a
//! value.
//!
//! ## Shape
//! Each table is a unit struct with one associated constant per mnemonic and a `TABLE` constant of
//! type [`KeyTable`] for lookup by mnemonic text:
//!
//! ```rust
//! use sdb_keys::StatusKeys;
//!
//! assert_eq!(StatusKeys::ACTIVE, "c8064cbd-fa06-4530-b430-1a52f1530c27");
//! assert_eq!(StatusKeys::TABLE.get("Active"), Some(StatusKeys::ACTIVE));
//! assert_eq!(StatusKeys::TABLE.get("NoSuchState"), None);
//! ```

#[macro_use]
mod table;
mod precision;
mod tables;

pub use precision::{DatePrecision, PrecisionValue};
pub use table::{KeyTable, ValueKind};
pub use tables::*;

/// Error type for table lookups.
#[derive(Debug, thiserror::Error)]
pub enum KeyError {
    #[error("unknown key table: {0}")]
    UnknownTable(String),

    #[error("{table} has no key named {mnemonic}")]
    UnknownKey {
        table: &'static str,
        mnemonic: String,
    },

    #[error("{table}.{mnemonic} is not a UUID: {value}")]
    InvalidUuid {
        table: &'static str,
        mnemonic: String,
        value: &'static str,
    },
}

/// Result type for table lookups.
pub type KeyResult<T> = Result<T, KeyError>;

/// Every table, in name order.
pub static ALL_TABLES: &[&KeyTable] = &[
    &ActClassKeys::TABLE,
    &ActMoodKeys::TABLE,
    &ActParticipationKeys::TABLE,
    &ActRelationshipTypeKeys::TABLE,
    &AddressComponentKeys::TABLE,
    &AddressUseKeys::TABLE,
    &AdministrativeGenderConceptKeys::TABLE,
    &ConceptClassKeys::TABLE,
    &ConceptRelationshipTypeKeys::TABLE,
    &DatePrecisionFormats::TABLE,
    &DeterminerKeys::TABLE,
    &EntityClassKeys::TABLE,
    &EntityRelationshipTypeKeys::TABLE,
    &NameComponentKeys::TABLE,
    &NameUseKeys::TABLE,
    &NullReasonKeys::TABLE,
    &PhoneticAlgorithmKeys::TABLE,
    &StatusKeys::TABLE,
    &TelecomAddressUseKeys::TABLE,
    &UserClassKeys::TABLE,
];

/// Finds a table by its name (case-sensitive, e.g. `"StatusKeys"`).
pub fn table(name: &str) -> Option<&'static KeyTable> {
    ALL_TABLES.iter().copied().find(|t| t.name() == name)
}

/// Like [`table`], but reports an unknown name as an error.
pub fn require_table(name: &str) -> KeyResult<&'static KeyTable> {
    table(name).ok_or_else(|| KeyError::UnknownTable(name.to_owned()))
}

/// Lists every `(table name, mnemonic)` pair whose value equals `value`.
///
/// The comparison ignores ASCII case so that upper-case UUIDs from other sources still match.
pub fn find_mnemonics(value: &str) -> Vec<(&'static str, &'static str)> {
    ALL_TABLES
        .iter()
        .flat_map(|t| t.mnemonics_of(value).map(move |m| (t.name(), m)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn documented_literals() {
        assert_eq!(StatusKeys::ACTIVE, "c8064cbd-fa06-4530-b430-1a52f1530c27");
        assert_eq!(
            EntityClassKeys::PROVIDER,
            "6b04fed8-c164-469c-910b-f824c2bda4f0"
        );
        assert_eq!(
            StatusKeys::CANCELLED,
            "3efd3b6e-02d5-4cc9-9088-ef8f31e321c8"
        );
        assert_ne!(StatusKeys::CANCELLED, StatusKeys::NULLIFIED);
    }

    #[test]
    fn table_sizes_are_pinned() {
        let expected = [
            ("ActClassKeys", 13),
            ("ActMoodKeys", 5),
            ("ActParticipationKeys", 16),
            ("ActRelationshipTypeKeys", 5),
            ("AddressComponentKeys", 8),
            ("AddressUseKeys", 16),
            ("AdministrativeGenderConceptKeys", 3),
            ("ConceptClassKeys", 12),
            ("ConceptRelationshipTypeKeys", 4),
            ("DatePrecisionFormats", 6),
            ("DeterminerKeys", 3),
            ("EntityClassKeys", 21),
            ("EntityRelationshipTypeKeys", 14),
            ("NameComponentKeys", 6),
            ("NameUseKeys", 16),
            ("NullReasonKeys", 4),
            ("PhoneticAlgorithmKeys", 3),
            ("StatusKeys", 8),
            ("TelecomAddressUseKeys", 8),
            ("UserClassKeys", 3),
        ];
        let actual: Vec<_> = ALL_TABLES.iter().map(|t| (t.name(), t.len())).collect();
        assert_eq!(actual, expected);
    }

    #[test]
    fn table_names_are_unique_and_sorted() {
        let names: Vec<_> = ALL_TABLES.iter().map(|t| t.name()).collect();
        let mut sorted = names.clone();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(names, sorted);
    }

    #[test]
    fn uuid_tables_hold_lowercase_hyphenated_uuids() {
        for table in ALL_TABLES.iter().filter(|t| t.kind() == ValueKind::Uuid) {
            for (mnemonic, value) in table.iter() {
                let parsed = uuid::Uuid::parse_str(value)
                    .unwrap_or_else(|_| panic!("{}.{mnemonic} is not a UUID", table.name()));
                assert_eq!(
                    parsed.hyphenated().to_string(),
                    value,
                    "{}.{mnemonic} is not in canonical form",
                    table.name()
                );
            }
        }
    }

    #[test]
    fn values_are_unique_within_each_table() {
        for table in ALL_TABLES {
            let mut seen = HashSet::new();
            for (mnemonic, value) in table.iter() {
                assert!(
                    seen.insert(value),
                    "{}.{mnemonic} repeats a value",
                    table.name()
                );
            }
        }
    }

    #[test]
    fn mnemonics_are_unique_within_each_table() {
        for table in ALL_TABLES {
            let mut seen = HashSet::new();
            for (mnemonic, _) in table.iter() {
                assert!(seen.insert(mnemonic), "{}.{mnemonic} listed twice", table.name());
            }
        }
    }

    #[test]
    fn shared_values_are_preserved() {
        assert_eq!(
            EntityRelationshipTypeKeys::HEALTHCARE_PROVIDER,
            EntityClassKeys::PROVIDER
        );
        assert_eq!(
            EntityRelationshipTypeKeys::REPLACES,
            ActRelationshipTypeKeys::REPLACES
        );

        let aliases = find_mnemonics(EntityClassKeys::PROVIDER);
        assert!(aliases.contains(&("EntityClassKeys", "Provider")));
        assert!(aliases.contains(&("EntityRelationshipTypeKeys", "HealthcareProvider")));
    }

    #[test]
    fn reverse_lookup_ignores_case() {
        let aliases = find_mnemonics("C8064CBD-FA06-4530-B430-1A52F1530C27");
        assert_eq!(aliases, vec![("StatusKeys", "Active")]);
    }

    #[test]
    fn finds_tables_by_name() {
        assert_eq!(table("NameUseKeys").map(|t| t.name()), Some("NameUseKeys"));
        assert!(table("nameusekeys").is_none());
        match require_table("Missing") {
            Err(KeyError::UnknownTable(name)) => assert_eq!(name, "Missing"),
            other => panic!("expected UnknownTable, got {other:?}"),
        }
    }

    #[test]
    fn repeated_access_is_stable() {
        let first = StatusKeys::TABLE.get("Active");
        let second = table("StatusKeys").and_then(|t| t.get("Active"));
        assert_eq!(first, Some("c8064cbd-fa06-4530-b430-1a52f1530c27"));
        assert_eq!(first, second);
    }
}
