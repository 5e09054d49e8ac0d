//! The lookup table type and the macro that declares tables.

use crate::{KeyError, KeyResult};
use uuid::Uuid;

/// What a table's values are.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ValueKind {
    /// Lowercase hyphenated UUIDs.
    Uuid,
    /// Date format patterns.
    Pattern,
}

/// An immutable, ordered mapping from mnemonic to wire value.
///
/// Tables are built at compile time and never change. Lookups are linear scans; the largest
/// table holds a few dozen entries.
#[derive(Clone, Copy, Debug)]
pub struct KeyTable {
    name: &'static str,
    kind: ValueKind,
    entries: &'static [(&'static str, &'static str)],
}

impl KeyTable {
    pub const fn new(
        name: &'static str,
        kind: ValueKind,
        entries: &'static [(&'static str, &'static str)],
    ) -> Self {
        Self {
            name,
            kind,
            entries,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn kind(&self) -> ValueKind {
        self.kind
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the value for `mnemonic`, or `None` if the table has no such key.
    ///
    /// Mnemonics are case-sensitive, matching property access on the wire model.
    pub fn get(&self, mnemonic: &str) -> Option<&'static str> {
        self.entries
            .iter()
            .find(|(m, _)| *m == mnemonic)
            .map(|(_, v)| *v)
    }

    /// Returns the value for `mnemonic`.
    ///
    /// # Errors
    ///
    /// Returns [`KeyError::UnknownKey`] if the table has no such key.
    pub fn require(&self, mnemonic: &str) -> KeyResult<&'static str> {
        self.get(mnemonic).ok_or_else(|| KeyError::UnknownKey {
            table: self.name,
            mnemonic: mnemonic.to_owned(),
        })
    }

    /// Returns the value for `mnemonic` parsed as a UUID.
    ///
    /// `None` when the key is missing or the table holds patterns rather than UUIDs.
    pub fn uuid(&self, mnemonic: &str) -> Option<Uuid> {
        self.get(mnemonic)
            .and_then(|value| Uuid::parse_str(value).ok())
    }

    /// Like [`KeyTable::uuid`], but says why no UUID was produced.
    pub fn require_uuid(&self, mnemonic: &str) -> KeyResult<Uuid> {
        let value = self.require(mnemonic)?;
        Uuid::parse_str(value).map_err(|_| KeyError::InvalidUuid {
            table: self.name,
            mnemonic: mnemonic.to_owned(),
            value,
        })
    }

    /// Mnemonics whose value equals `value`, ignoring ASCII case.
    pub fn mnemonics_of<'a>(&self, value: &'a str) -> impl Iterator<Item = &'static str> + 'a {
        let entries = self.entries;
        entries
            .iter()
            .filter(move |(_, v)| v.eq_ignore_ascii_case(value))
            .map(|(m, _)| *m)
    }

    /// Entries in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &'static str)> {
        let entries = self.entries;
        entries.iter().copied()
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for KeyTable {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeMap;

        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (mnemonic, value) in self.entries {
            map.serialize_entry(mnemonic, value)?;
        }
        map.end()
    }
}

/// Declares a table of UUID-valued keys.
///
/// ```ignore
/// key_table! {
///     /// Record status codes.
///     pub struct StatusKeys {
///         ACTIVE = "Active" => "c8064cbd-fa06-4530-b430-1a52f1530c27",
///     }
/// }
/// ```
///
/// expands to a unit struct with `StatusKeys::ACTIVE` and `StatusKeys::TABLE`.
macro_rules! key_table {
    (
        $(#[$meta:meta])*
        pub struct $name:ident {
            $(
                $(#[$key_meta:meta])*
                $key:ident = $mnemonic:literal => $value:literal,
            )*
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug)]
        pub struct $name;

        impl $name {
            $(
                $(#[$key_meta])*
                pub const $key: &'static str = $value;
            )*

            /// Lookup by mnemonic text.
            pub const TABLE: $crate::KeyTable = $crate::KeyTable::new(
                stringify!($name),
                $crate::ValueKind::Uuid,
                &[$(($mnemonic, $value)),*],
            );
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    key_table! {
        pub struct Sample {
            FIRST = "First" => "00000000-0000-0000-0000-000000000001",
            SECOND = "Second" => "00000000-0000-0000-0000-00000000000a",
        }
    }

    #[test]
    fn macro_builds_constants_and_table() {
        assert_eq!(Sample::FIRST, "00000000-0000-0000-0000-000000000001");
        assert_eq!(Sample::TABLE.name(), "Sample");
        assert_eq!(Sample::TABLE.len(), 2);
        assert_eq!(Sample::TABLE.get("Second"), Some(Sample::SECOND));
    }

    #[test]
    fn unknown_keys_are_absent() {
        assert_eq!(Sample::TABLE.get("Third"), None);
        assert_eq!(Sample::TABLE.get("first"), None);
        match Sample::TABLE.require("Third") {
            Err(KeyError::UnknownKey { table, mnemonic }) => {
                assert_eq!(table, "Sample");
                assert_eq!(mnemonic, "Third");
            }
            other => panic!("expected UnknownKey, got {other:?}"),
        }
    }

    #[test]
    fn parses_uuid_values() {
        let uuid = Sample::TABLE.uuid("Second").expect("uuid");
        assert_eq!(uuid.as_u128(), 10);
        assert!(Sample::TABLE.uuid("Missing").is_none());
    }

    #[test]
    fn pattern_values_are_not_uuids() {
        let table = KeyTable::new("Patterns", ValueKind::Pattern, &[("Year", "YYYY")]);
        assert!(table.uuid("Year").is_none());
        assert!(matches!(
            table.require_uuid("Year"),
            Err(KeyError::InvalidUuid { value: "YYYY", .. })
        ));
    }

    #[test]
    fn reverse_lookup_matches_any_case() {
        let found: Vec<_> = Sample::TABLE
            .mnemonics_of("00000000-0000-0000-0000-00000000000A")
            .collect();
        assert_eq!(found, vec!["Second"]);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serialises_as_ordered_map() {
        let json = serde_json::to_string(&Sample::TABLE).expect("serialise");
        assert_eq!(
            json,
            r#"{"First":"00000000-0000-0000-0000-000000000001","Second":"00000000-0000-0000-0000-00000000000a"}"#
        );
    }
}
