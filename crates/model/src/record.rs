//! The record contract shared by every model type.
//!
//! A record is a flat struct of optional fields. Each record knows its own `$type` name and the
//! wire names of the fields it declares (inherited fields included; there is no runtime
//! inheritance). Records are built in one of three ways:
//!
//! - empty, with every field unset ([`Record::from_source`] with `None`, or `Default`),
//! - by copying the declared fields out of an arbitrary JSON object ([`Record::copy_from`]),
//! - by copying the same-named fields of another record ([`Record::from_record`]).
//!
//! Copying never fails. A source property that is missing, `null`, or does not fit the declared
//! field type leaves the field unset; undeclared source properties are ignored. A copied value is
//! kept as it was: a nested record keeps its own `$type` (or the lack of one) and any properties
//! its type does not declare, so it is written back unchanged.

use crate::{Model, ModelError, ModelResult};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};
use std::fmt;
use std::marker::PhantomData;

/// Behaviour common to every model record.
pub trait Record: Sized + Default + Serialize + DeserializeOwned + Into<Model> {
    /// The `$type` discriminator written for this record.
    const TYPE_NAME: &'static str;

    /// Wire names of every declared field, in declaration order. `$type` is not included.
    const FIELDS: &'static [&'static str];

    /// Builds a record from the same-named properties of `source`.
    fn copy_from(source: &Value) -> Self;

    /// Builds a record from an optional source; `None` gives an empty record.
    fn from_source(source: Option<&Value>) -> Self {
        source.map(Self::copy_from).unwrap_or_default()
    }

    /// Builds a record from the same-named fields of another record.
    ///
    /// Used to widen or narrow along the type hierarchy, e.g. a `Patient` from a `Person`.
    fn from_record<R: Record>(other: &R) -> Self {
        match serde_json::to_value(other) {
            Ok(value) => Self::copy_from(&value),
            Err(err) => {
                tracing::warn!(
                    from = R::TYPE_NAME,
                    to = Self::TYPE_NAME,
                    error = %err,
                    "could not serialise source record; returning an empty record"
                );
                Self::default()
            }
        }
    }

    /// Serialises the record, `$type` included.
    fn to_value(&self) -> ModelResult<Value> {
        serde_json::to_value(self).map_err(ModelError::Json)
    }

    fn into_model(self) -> Model {
        self.into()
    }
}

/// The `$type` field of a record.
///
/// A record built in code (or copy-constructed) carries its own [`Record::TYPE_NAME`]. A record
/// read as a nested value keeps whatever `$type` the document had, including none, so that it is
/// written back exactly as it was read.
pub struct TypeTag<T> {
    written: Written,
    marker: PhantomData<fn() -> T>,
}

#[derive(Clone, Debug, PartialEq)]
enum Written {
    Own,
    Absent,
    Other(Value),
}

impl<T> TypeTag<T> {
    fn with(written: Written) -> Self {
        Self {
            written,
            marker: PhantomData,
        }
    }

    /// A tag that is not written at all.
    pub fn absent() -> Self {
        Self::with(Written::Absent)
    }

    pub fn is_absent(&self) -> bool {
        self.written == Written::Absent
    }

    /// Whether the tag is the record's own type name.
    pub fn is_own(&self) -> bool {
        self.written == Written::Own
    }
}

impl<T: Record> TypeTag<T> {
    /// The `$type` text written for the record, if it is written as a string.
    pub fn wire_name(&self) -> Option<&str> {
        match &self.written {
            Written::Own => Some(T::TYPE_NAME),
            Written::Absent => None,
            Written::Other(value) => value.as_str(),
        }
    }
}

impl<T> Default for TypeTag<T> {
    fn default() -> Self {
        Self::with(Written::Own)
    }
}

impl<T> Clone for TypeTag<T> {
    fn clone(&self) -> Self {
        Self::with(self.written.clone())
    }
}

impl<T> PartialEq for TypeTag<T> {
    fn eq(&self, other: &Self) -> bool {
        self.written == other.written
    }
}

impl<T: Record> fmt::Debug for TypeTag<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.written {
            Written::Own => write!(f, "{:?}", T::TYPE_NAME),
            Written::Absent => f.write_str("(absent)"),
            Written::Other(value) => write!(f, "{value}"),
        }
    }
}

impl<T: Record> Serialize for TypeTag<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match &self.written {
            Written::Own => serializer.serialize_str(T::TYPE_NAME),
            Written::Absent => serializer.serialize_none(),
            Written::Other(value) => value.serialize(serializer),
        }
    }
}

impl<'de, T: Record> Deserialize<'de> for TypeTag<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        if value.as_str() == Some(T::TYPE_NAME) {
            Ok(Self::with(Written::Own))
        } else {
            Ok(Self::with(Written::Other(value)))
        }
    }
}

/// Copies one property out of a source object, leaving the field unset if it does not fit.
pub(crate) fn copy_field<T: DeserializeOwned>(
    source: &Map<String, Value>,
    record: &'static str,
    field: &'static str,
) -> Option<T> {
    let value = source.get(field)?;
    if value.is_null() {
        return None;
    }
    match T::deserialize(value) {
        Ok(copied) => Some(copied),
        Err(err) => {
            tracing::debug!(
                record,
                field,
                error = %err,
                "source property does not fit the declared field type; left unset"
            );
            None
        }
    }
}

pub(crate) fn log_non_object(record: &'static str, source: &Value) {
    if !source.is_null() {
        tracing::debug!(record, "copy source is not an object; record left empty");
    }
}

/// Declares a record: a struct of optional fields plus its [`Record`] implementation.
///
/// ```ignore
/// record! {
///     /// Docs.
///     pub struct Place {
///         id: Key = "id",
///         lat: Number = "lat",
///     }
/// }
/// ```
///
/// Every field is wrapped in `Option` and serialised under the given wire name; unset fields are
/// omitted. The struct name doubles as the `$type` value. Undeclared properties met while
/// deserialising are kept in `other` and written back; copy-construction never fills it.
macro_rules! record {
    (
        $(#[$meta:meta])*
        pub struct $name:ident {
            $(
                $(#[$field_meta:meta])*
                $field:ident: $ty:ty = $wire:literal,
            )*
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
        pub struct $name {
            #[serde(
                rename = "$type",
                default = "crate::record::TypeTag::absent",
                skip_serializing_if = "crate::record::TypeTag::is_absent"
            )]
            pub type_tag: $crate::record::TypeTag<$name>,
            $(
                $(#[$field_meta])*
                #[serde(rename = $wire, default, skip_serializing_if = "Option::is_none")]
                pub $field: Option<$ty>,
            )*
            /// Undeclared properties, kept as read.
            #[serde(flatten)]
            pub other: serde_json::Map<String, serde_json::Value>,
        }

        impl $name {
            /// An empty record with every field unset.
            pub fn new() -> Self {
                Self::default()
            }
        }

        impl $crate::record::Record for $name {
            const TYPE_NAME: &'static str = stringify!($name);
            const FIELDS: &'static [&'static str] = &[$($wire),*];

            fn copy_from(source: &serde_json::Value) -> Self {
                let mut record = Self::default();
                match source.as_object() {
                    Some(fields) => {
                        $(
                            record.$field =
                                $crate::record::copy_field(fields, Self::TYPE_NAME, $wire);
                        )*
                    }
                    None => $crate::record::log_non_object(Self::TYPE_NAME, source),
                }
                record
            }
        }
    };
}
