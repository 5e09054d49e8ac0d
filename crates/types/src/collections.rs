use serde::de::{DeserializeOwned, Error as _};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// A single value or an array of values.
///
/// Classifier-keyed collections hold either form for each classifier. The variant that was read is
/// the variant that is written, so a document survives a read/write cycle unchanged.
///
/// An array is always read as `Many`; if one of its elements does not fit `T` the whole value is
/// rejected rather than being reread as a single item.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum OneOrMany<T> {
    Many(Vec<T>),
    One(T),
}

impl<'de, T: DeserializeOwned> Deserialize<'de> for OneOrMany<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let read = match Value::deserialize(deserializer)? {
            Value::Array(items) => items
                .into_iter()
                .map(T::deserialize)
                .collect::<Result<Vec<_>, _>>()
                .map(OneOrMany::Many),
            single => T::deserialize(single).map(OneOrMany::One),
        };
        read.map_err(D::Error::custom)
    }
}

impl<T> OneOrMany<T> {
    pub fn len(&self) -> usize {
        match self {
            OneOrMany::Many(items) => items.len(),
            OneOrMany::One(_) => 1,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn first(&self) -> Option<&T> {
        match self {
            OneOrMany::Many(items) => items.first(),
            OneOrMany::One(item) => Some(item),
        }
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        match self {
            OneOrMany::Many(items) => items.iter(),
            OneOrMany::One(item) => std::slice::from_ref(item).iter(),
        }
    }

    pub fn into_vec(self) -> Vec<T> {
        match self {
            OneOrMany::Many(items) => items,
            OneOrMany::One(item) => vec![item],
        }
    }
}

impl<T> From<T> for OneOrMany<T> {
    fn from(value: T) -> Self {
        OneOrMany::One(value)
    }
}

impl<T> From<Vec<T>> for OneOrMany<T> {
    fn from(values: Vec<T>) -> Self {
        OneOrMany::Many(values)
    }
}

impl<'a, T> IntoIterator for &'a OneOrMany<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// A collection keyed by classifier.
///
/// Keys are classifier mnemonics (`"Legal"`, `"RecordTarget"`) or classifier UUIDs; the map is not
/// an ordered list and carries no position semantics.
pub type Classified<T> = BTreeMap<String, OneOrMany<T>>;

/// A name or address component.
///
/// The server writes components either as bare text (`"Given": ["John"]`) or as a full component
/// record. `Text` is tried first because a record can never be read from a bare string.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ComponentValue<T> {
    Text(String),
    Detailed(T),
}

impl<T> ComponentValue<T> {
    /// Returns the text when the component was given as bare text.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            ComponentValue::Text(text) => Some(text),
            ComponentValue::Detailed(_) => None,
        }
    }
}

impl<T> From<&str> for ComponentValue<T> {
    fn from(value: &str) -> Self {
        ComponentValue::Text(value.to_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
    struct Part {
        value: Option<String>,
    }

    #[test]
    fn single_and_array_forms_keep_their_shape() {
        let input = json!({
            "Legal": [{ "value": "a" }, { "value": "b" }],
            "Alias": { "value": "c" }
        });
        let parsed: Classified<Part> = serde_json::from_value(input.clone()).expect("parse");
        assert_eq!(parsed["Legal"].len(), 2);
        assert!(matches!(parsed["Alias"], OneOrMany::One(_)));
        assert_eq!(serde_json::to_value(&parsed).expect("render"), input);
    }

    #[test]
    fn single_element_array_stays_an_array() {
        let input = json!([{ "value": "only" }]);
        let parsed: OneOrMany<Part> = serde_json::from_value(input.clone()).expect("parse");
        assert!(matches!(parsed, OneOrMany::Many(ref v) if v.len() == 1));
        assert_eq!(serde_json::to_value(&parsed).expect("render"), input);
    }

    #[test]
    fn array_with_a_bad_element_is_rejected() {
        let input = json!([{ "value": "fine" }, { "value": 5 }]);
        let err = serde_json::from_value::<OneOrMany<Part>>(input).expect_err("bad element");
        assert!(err.to_string().contains("invalid type"), "{err}");
    }

    #[test]
    fn iterates_both_forms() {
        let one: OneOrMany<u8> = 3.into();
        let many: OneOrMany<u8> = vec![1, 2].into();
        assert_eq!(one.iter().copied().collect::<Vec<_>>(), vec![3]);
        assert_eq!(many.first(), Some(&1));
        assert_eq!(many.into_vec(), vec![1, 2]);
    }

    #[test]
    fn components_accept_text_or_record() {
        let text: ComponentValue<Part> = serde_json::from_value(json!("John")).expect("text");
        assert_eq!(text.as_text(), Some("John"));

        let detailed: ComponentValue<Part> =
            serde_json::from_value(json!({ "value": "Smith" })).expect("record");
        assert_eq!(
            detailed,
            ComponentValue::Detailed(Part {
                value: Some("Smith".into())
            })
        );
    }
}
