use crate::{KeyError, KeyResult};
use std::fmt;
use uuid::Uuid;

/// An identifier as it appears on the wire.
///
/// Identifiers are usually hyphenated UUIDs, but the string is never validated or normalised: the
/// value that was read is the value that is written back. Use [`Key::to_uuid`] when the caller
/// needs a parsed UUID.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Key(String);

impl Key {
    /// Wraps the given text without inspecting it.
    pub fn new(input: impl Into<String>) -> Self {
        Self(input.into())
    }

    /// Returns the key text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Parses the key as a UUID.
    ///
    /// # Errors
    ///
    /// Returns [`KeyError::InvalidUuid`] when the text is not a UUID in any form the `uuid`
    /// crate accepts (hyphenated, simple, braced or URN).
    pub fn to_uuid(&self) -> KeyResult<Uuid> {
        Uuid::parse_str(&self.0).map_err(|_| KeyError::InvalidUuid(self.0.clone()))
    }

    /// Returns `true` if the key parses as a UUID.
    pub fn is_uuid(&self) -> bool {
        self.to_uuid().is_ok()
    }

    /// Consumes the key, returning the inner string.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for Key {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Key {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

impl From<String> for Key {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<Uuid> for Key {
    /// Uses the lowercase hyphenated form, which is how the server writes identifiers.
    fn from(value: Uuid) -> Self {
        Self(value.hyphenated().to_string())
    }
}

impl PartialEq<str> for Key {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for Key {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl serde::Serialize for Key {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> serde::Deserialize<'de> for Key {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        String::deserialize(deserializer).map(Self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_text_verbatim() {
        let key = Key::new("C8064CBD-FA06-4530-B430-1A52F1530C27");
        assert_eq!(key.as_str(), "C8064CBD-FA06-4530-B430-1A52F1530C27");
        assert_eq!(key.to_string(), "C8064CBD-FA06-4530-B430-1A52F1530C27");
    }

    #[test]
    fn parses_uuid_on_request() {
        let key = Key::from("c8064cbd-fa06-4530-b430-1a52f1530c27");
        let uuid = key.to_uuid().expect("valid uuid");
        assert_eq!(Key::from(uuid), key);
        assert!(key.is_uuid());
    }

    #[test]
    fn non_uuid_keys_are_still_keys() {
        let key = Key::from("X");
        assert!(!key.is_uuid());
        match key.to_uuid() {
            Err(KeyError::InvalidUuid(text)) => assert_eq!(text, "X"),
            other => panic!("expected InvalidUuid, got {other:?}"),
        }
    }

    #[test]
    fn serialises_as_bare_string() {
        let key = Key::from("abc");
        let json = serde_json::to_string(&key).expect("serialise");
        assert_eq!(json, "\"abc\"");
        let back: Key = serde_json::from_str(&json).expect("deserialise");
        assert_eq!(back, "abc");
    }

    #[test]
    fn rejects_non_string_json() {
        assert!(serde_json::from_str::<Key>("42").is_err());
    }
}
