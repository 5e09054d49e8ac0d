//! Record types for the health-data schema.
//!
//! Every record is a flat struct of optional fields tagged with a `$type` discriminator on the
//! wire. Records are grouped by area:
//! - [`base`]: the abstract roots (identified data, audited entity data, associations)
//! - [`security`]: users, roles, applications, devices, policies
//! - [`concept`]: the terminology layer
//! - [`entity`] and [`components`]: people, places, organisations and their names, addresses,
//!   identifiers and relationships
//! - [`act`]: clinical acts and observations
//! - [`bundle`]: the pagination envelope
//!
//! [`Model`] is the union of all of them, read and written by `$type`. [`Exception`] describes a
//! server-side failure. The [`wire`] helpers parse and render documents in JSON or YAML.
//!
//! The mnemonic key tables live in `sdb-keys` and are re-exported here for convenience.

#[macro_use]
mod record;

pub mod act;
pub mod base;
pub mod bundle;
pub mod components;
pub mod concept;
pub mod entity;
pub mod exception;
pub mod model;
pub mod security;
pub mod wire;

pub use act::{
    Act, ActExtension, ActIdentifier, ActNote, ActParticipation, ActRelationship, ActTag,
    CodedObservation, ControlAct, Observation, PatientEncounter, QuantityObservation,
    SubstanceAdministration, TextObservation,
};
pub use base::{
    Association, BaseEntityData, IdentifiedData, NonVersionedEntityData, VersionedAssociation,
    VersionedEntityData,
};
pub use bundle::Bundle;
pub use components::{
    AssigningAuthority, EntityAddress, EntityAddressComponent, EntityExtension, EntityIdentifier,
    EntityName, EntityNameComponent, EntityNote, EntityRelationship, EntityTag,
    EntityTelecomAddress, ExtensionType, IdentifierType, PersonLanguageCommunication,
    PlaceService, TemplateDefinition,
};
pub use concept::{
    CodeSystem, Concept, ConceptClass, ConceptName, ConceptReferenceTerm, ConceptRelationship,
    ConceptRelationshipType, ConceptSet, ReferenceTerm, ReferenceTermName,
};
pub use entity::{
    ApplicationEntity, DeviceEntity, Entity, ManufacturedMaterial, Material, Organization,
    Patient, Person, Place, Provider, UserEntity,
};
pub use exception::Exception;
pub use model::{AnyModel, Model};
pub use record::{Record, TypeTag};
pub use security::{
    SecurityApplication, SecurityDevice, SecurityPolicy, SecurityPolicyInstance, SecurityRole,
    SecurityUser,
};
pub use wire::WireFormat;

pub use sdb_keys as keys;
pub use sdb_keys::{DatePrecision, PrecisionValue};
pub use sdb_types::{Classified, ComponentValue, Key, OneOrMany};

/// Errors returned by the model crate.
#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    #[error("document has no string `$type` property")]
    MissingType,

    #[error("unknown record type: {0}")]
    UnknownType(String),

    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("translation error: {0}")]
    Translation(String),
}

pub type ModelResult<T> = std::result::Result<T, ModelError>;
