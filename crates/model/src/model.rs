//! The tagged union of every record.
//!
//! Records are told apart on the wire by their `$type` property. [`Model`] reads that property
//! to pick the record type, and writes it back through the record's own serialisation.

use crate::record::Record;
use crate::{act, base, bundle, components, concept, entity, security};
use crate::{ModelError, ModelResult};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

macro_rules! models {
    ($($module:ident :: $ty:ident),* $(,)?) => {
        /// Any record, discriminated by its `$type`.
        #[derive(Clone, Debug, PartialEq)]
        pub enum Model {
            $($ty($module::$ty),)*
        }

        impl Model {
            /// Every `$type` value this crate understands.
            pub const TYPE_NAMES: &'static [&'static str] = &[$(stringify!($ty)),*];

            pub fn type_name(&self) -> &'static str {
                match self {
                    $(Model::$ty(_) => <$module::$ty as Record>::TYPE_NAME,)*
                }
            }

            /// Field wire names of the record type, or `None` for an unknown type.
            pub fn fields_of(type_name: &str) -> Option<&'static [&'static str]> {
                $(
                    if type_name == <$module::$ty as Record>::TYPE_NAME {
                        return Some(<$module::$ty as Record>::FIELDS);
                    }
                )*
                None
            }

            /// Builds a record of the named type from an optional source, as
            /// [`Record::from_source`] does for a statically known type.
            ///
            /// # Errors
            ///
            /// Returns [`ModelError::UnknownType`] if no record has that name.
            pub fn project(type_name: &str, source: Option<&Value>) -> ModelResult<Model> {
                $(
                    if type_name == <$module::$ty as Record>::TYPE_NAME {
                        return Ok(Model::$ty($module::$ty::from_source(source)));
                    }
                )*
                Err(ModelError::UnknownType(type_name.to_owned()))
            }

            fn from_tagged(type_name: &str, value: Value) -> ModelResult<Model> {
                $(
                    if type_name == <$module::$ty as Record>::TYPE_NAME {
                        return serde_json::from_value(value)
                            .map(Model::$ty)
                            .map_err(ModelError::Json);
                    }
                )*
                Err(ModelError::UnknownType(type_name.to_owned()))
            }

            pub fn to_value(&self) -> ModelResult<Value> {
                match self {
                    $(Model::$ty(record) => record.to_value(),)*
                }
            }
        }

        impl Serialize for Model {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: Serializer,
            {
                match self {
                    $(Model::$ty(record) => record.serialize(serializer),)*
                }
            }
        }

        $(
            impl From<$module::$ty> for Model {
                fn from(record: $module::$ty) -> Self {
                    Model::$ty(record)
                }
            }
        )*
    };
}

models! {
    base::IdentifiedData,
    base::BaseEntityData,
    base::NonVersionedEntityData,
    base::VersionedEntityData,
    base::Association,
    base::VersionedAssociation,
    security::SecurityUser,
    security::SecurityRole,
    security::SecurityApplication,
    security::SecurityDevice,
    security::SecurityPolicy,
    security::SecurityPolicyInstance,
    concept::Concept,
    concept::ConceptClass,
    concept::ConceptName,
    concept::ConceptReferenceTerm,
    concept::ConceptRelationship,
    concept::ConceptRelationshipType,
    concept::ConceptSet,
    concept::ReferenceTerm,
    concept::ReferenceTermName,
    concept::CodeSystem,
    entity::Entity,
    entity::Person,
    entity::Patient,
    entity::Provider,
    entity::Organization,
    entity::Place,
    entity::Material,
    entity::ManufacturedMaterial,
    entity::DeviceEntity,
    entity::ApplicationEntity,
    entity::UserEntity,
    components::EntityName,
    components::EntityNameComponent,
    components::EntityAddress,
    components::EntityAddressComponent,
    components::EntityIdentifier,
    components::EntityRelationship,
    components::EntityTelecomAddress,
    components::EntityNote,
    components::EntityTag,
    components::EntityExtension,
    components::PersonLanguageCommunication,
    components::PlaceService,
    components::AssigningAuthority,
    components::IdentifierType,
    components::ExtensionType,
    components::TemplateDefinition,
    act::Act,
    act::Observation,
    act::QuantityObservation,
    act::TextObservation,
    act::CodedObservation,
    act::SubstanceAdministration,
    act::PatientEncounter,
    act::ControlAct,
    act::ActParticipation,
    act::ActRelationship,
    act::ActIdentifier,
    act::ActNote,
    act::ActTag,
    act::ActExtension,
    bundle::Bundle,
}

impl Model {
    /// An empty record of the named type.
    pub fn empty(type_name: &str) -> ModelResult<Model> {
        Self::project(type_name, None)
    }

    /// Reads a record whose type is given by its `$type` property.
    ///
    /// Unlike [`Model::project`] this is strict: a declared field holding a value of the wrong
    /// shape is an error rather than being left unset.
    ///
    /// # Errors
    ///
    /// - [`ModelError::MissingType`] if `$type` is absent or not a string,
    /// - [`ModelError::UnknownType`] if no record has that name,
    /// - [`ModelError::Json`] if a declared field does not fit its type.
    pub fn from_value(value: Value) -> ModelResult<Model> {
        let type_name = match value.get("$type") {
            Some(Value::String(name)) => name.clone(),
            _ => return Err(ModelError::MissingType),
        };
        Self::from_tagged(&type_name, value)
    }
}

impl<'de> Deserialize<'de> for Model {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Model::from_value(value).map_err(serde::de::Error::custom)
    }
}

/// A value in a position that may hold any record: a `Bundle` item or a `*Model` reference.
///
/// Read leniently. A value that is not a recognisable record (no `$type`, an unknown one, or a
/// declared field of the wrong shape) is kept as it was read, so a copied list never loses its
/// siblings.
#[derive(Clone, Debug, PartialEq)]
pub enum AnyModel {
    Record(Box<Model>),
    Other(Value),
}

impl AnyModel {
    pub fn from_value(value: Value) -> Self {
        match Model::from_value(value.clone()) {
            Ok(model) => AnyModel::Record(Box::new(model)),
            Err(err) => {
                tracing::debug!(error = %err, "value is not a known record; kept as read");
                AnyModel::Other(value)
            }
        }
    }

    pub fn record(&self) -> Option<&Model> {
        match self {
            AnyModel::Record(model) => Some(model),
            AnyModel::Other(_) => None,
        }
    }

    /// The record's type name, or the `$type` text of an unrecognised value.
    pub fn type_name(&self) -> Option<&str> {
        match self {
            AnyModel::Record(model) => Some(model.type_name()),
            AnyModel::Other(value) => value.get("$type").and_then(Value::as_str),
        }
    }

    pub fn to_value(&self) -> ModelResult<Value> {
        match self {
            AnyModel::Record(model) => model.to_value(),
            AnyModel::Other(value) => Ok(value.clone()),
        }
    }
}

impl From<Model> for AnyModel {
    fn from(model: Model) -> Self {
        AnyModel::Record(Box::new(model))
    }
}

impl Serialize for AnyModel {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            AnyModel::Record(model) => model.serialize(serializer),
            AnyModel::Other(value) => value.serialize(serializer),
        }
    }
}

impl<'de> Deserialize<'de> for AnyModel {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Value::deserialize(deserializer).map(AnyModel::from_value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{Map, json};
    use std::collections::BTreeSet;

    /// One value of each wire shape the records declare, tried in order.
    fn candidates() -> Vec<Value> {
        vec![
            json!("text"),
            json!(3),
            json!(true),
            json!({ "note": "kept" }),
            json!({ "Legal": [{ "note": "kept" }] }),
            json!([{ "note": "kept" }]),
            json!(["text"]),
        ]
    }

    /// The first candidate that the field accepts.
    fn fitting_value(type_name: &str, field: &str) -> Option<Value> {
        candidates().into_iter().find(|candidate| {
            let mut source = Map::new();
            source.insert(field.to_owned(), candidate.clone());
            Model::project(type_name, Some(&Value::Object(source)))
                .and_then(|model| model.to_value())
                .map(|value| value.get(field).is_some())
                .unwrap_or(false)
        })
    }

    #[test]
    fn type_names_are_unique() {
        let unique: BTreeSet<_> = Model::TYPE_NAMES.iter().collect();
        assert_eq!(unique.len(), Model::TYPE_NAMES.len());
        assert!(Model::TYPE_NAMES.len() >= 60);
    }

    #[test]
    fn every_empty_record_carries_only_its_own_tag() {
        for name in Model::TYPE_NAMES {
            let model = Model::empty(name).expect("known type");
            assert_eq!(model.type_name(), *name);
            assert_eq!(model.to_value().expect("value"), json!({ "$type": name }));
        }
    }

    #[test]
    fn every_record_copies_id_and_drops_unknown_properties() {
        let source = json!({ "id": "X", "notAField": true });
        for name in Model::TYPE_NAMES {
            let fields = Model::fields_of(name).expect("known type");
            assert!(fields.contains(&"id"), "{name} lacks id");
            assert!(!fields.contains(&"$type"), "{name} lists $type as a field");

            let model = Model::project(name, Some(&source)).expect("known type");
            assert_eq!(
                model.to_value().expect("value"),
                json!({ "$type": name, "id": "X" }),
                "{name}"
            );
        }
    }

    #[test]
    fn every_record_copies_every_declared_field_exactly() {
        for name in Model::TYPE_NAMES {
            let mut source = Map::new();
            let mut expected = Map::new();
            expected.insert("$type".to_owned(), json!(name));
            for field in Model::fields_of(name).expect("known type") {
                let value = fitting_value(name, field)
                    .unwrap_or_else(|| panic!("no value fits {name}.{field}"));
                source.insert((*field).to_owned(), value.clone());
                expected.insert((*field).to_owned(), value);
            }
            source.insert("$type".to_owned(), json!("SomethingElse"));
            source.insert("notAField".to_owned(), json!({ "kept": false }));
            let source = Value::Object(source);

            let once = Model::project(name, Some(&source)).expect("known type");
            let once_value = once.to_value().expect("value");
            assert_eq!(once_value, Value::Object(expected), "{name}");

            let twice = Model::project(name, Some(&once_value)).expect("known type");
            assert_eq!(twice, once, "{name}");
        }
    }

    #[test]
    fn any_model_keeps_unrecognised_values() {
        let untyped = json!({ "id": "b" });
        let item = AnyModel::from_value(untyped.clone());
        assert_eq!(item, AnyModel::Other(untyped.clone()));
        assert_eq!(item.type_name(), None);
        assert_eq!(item.to_value().expect("value"), untyped);

        let unknown = json!({ "$type": "Spaceship", "id": "c" });
        let item: AnyModel = serde_json::from_value(unknown.clone()).expect("lenient");
        assert_eq!(item.type_name(), Some("Spaceship"));
        assert!(item.record().is_none());
        assert_eq!(serde_json::to_value(&item).expect("serialise"), unknown);

        let known = AnyModel::from_value(json!({ "$type": "Place", "id": "d" }));
        assert_eq!(known.record().map(Model::type_name), Some("Place"));
    }

    #[test]
    fn from_value_dispatches_on_type() {
        let value = json!({ "$type": "Place", "id": "X", "lat": 51.5, "lng": -0.12 });
        let model = Model::from_value(value.clone()).expect("place");
        assert_eq!(model.type_name(), "Place");
        assert_eq!(model.to_value().expect("value"), value);

        let parsed: Model = serde_json::from_value(value).expect("deserialize");
        assert_eq!(parsed, model);
    }

    #[test]
    fn missing_or_unknown_type_is_an_error() {
        assert!(matches!(
            Model::from_value(json!({ "id": "X" })),
            Err(ModelError::MissingType)
        ));
        assert!(matches!(
            Model::from_value(json!({ "$type": 7 })),
            Err(ModelError::MissingType)
        ));
        match Model::from_value(json!({ "$type": "Spaceship" })) {
            Err(ModelError::UnknownType(name)) => assert_eq!(name, "Spaceship"),
            other => panic!("expected UnknownType, got {other:?}"),
        }
        assert!(matches!(Model::empty("Spaceship"), Err(ModelError::UnknownType(_))));
        assert_eq!(Model::fields_of("Spaceship"), None);
    }

    #[test]
    fn from_value_is_strict_where_project_is_lenient() {
        let value = json!({ "$type": "Patient", "id": "X", "multipleBirthOrder": "second" });
        assert!(matches!(Model::from_value(value.clone()), Err(ModelError::Json(_))));

        let projected = Model::project("Patient", Some(&value)).expect("lenient");
        assert_eq!(projected.to_value().expect("value"), json!({ "$type": "Patient", "id": "X" }));
    }

    #[test]
    fn nested_models_are_read_by_their_own_type() {
        let value = json!({
            "$type": "EntityRelationship",
            "id": "r1",
            "sourceModel": { "$type": "Organization", "id": "o1" }
        });
        let model = Model::from_value(value).expect("relationship");
        match model {
            Model::EntityRelationship(rel) => {
                let source = rel.source_model.expect("source model");
                assert_eq!(source.type_name(), Some("Organization"));
                assert!(source.record().is_some());
            }
            other => panic!("expected EntityRelationship, got {}", other.type_name()),
        }
    }

    #[test]
    fn records_convert_into_models() {
        let model: Model = entity::Patient::new().into();
        assert_eq!(model.type_name(), "Patient");
    }
}
