//! Components owned by entities and acts, and the reference records they point at.

use crate::concept::Concept;
use crate::security::SecurityUser;
use crate::AnyModel;
use sdb_types::{Classified, ComponentValue, Key};

record! {
    /// A name of an entity; `component` is keyed by component type (`"Given"`, `"Family"`).
    pub struct EntityName {
        /// Primary key.
        id: Key = "id",
        /// Opaque change token.
        etag: String = "etag",
        modified_on: String = "modifiedOn",
        /// Key of the record that owns this association.
        source: Key = "source",
        source_model: AnyModel = "sourceModel",
        effective_version_sequence: i64 = "effectiveVersionSequence",
        obsolete_version_sequence: i64 = "obsoleteVersionSequence",
        name_use: Key = "use",
        use_model: Box<Concept> = "useModel",
        component: Classified<ComponentValue<EntityNameComponent>> = "component",
    }
}

record! {
    pub struct EntityNameComponent {
        /// Primary key.
        id: Key = "id",
        /// Opaque change token.
        etag: String = "etag",
        modified_on: String = "modifiedOn",
        /// Key of the record that owns this association.
        source: Key = "source",
        source_model: AnyModel = "sourceModel",
        value: String = "value",
        component_type: Key = "type",
        type_model: Box<Concept> = "typeModel",
        phonetic_code: String = "phoneticCode",
        phonetic_algorithm: Key = "phoneticAlgorithm",
    }
}

record! {
    pub struct EntityAddress {
        /// Primary key.
        id: Key = "id",
        /// Opaque change token.
        etag: String = "etag",
        modified_on: String = "modifiedOn",
        /// Key of the record that owns this association.
        source: Key = "source",
        source_model: AnyModel = "sourceModel",
        effective_version_sequence: i64 = "effectiveVersionSequence",
        obsolete_version_sequence: i64 = "obsoleteVersionSequence",
        address_use: Key = "use",
        use_model: Box<Concept> = "useModel",
        component: Classified<ComponentValue<EntityAddressComponent>> = "component",
    }
}

record! {
    pub struct EntityAddressComponent {
        /// Primary key.
        id: Key = "id",
        /// Opaque change token.
        etag: String = "etag",
        modified_on: String = "modifiedOn",
        /// Key of the record that owns this association.
        source: Key = "source",
        source_model: AnyModel = "sourceModel",
        value: String = "value",
        component_type: Key = "type",
        type_model: Box<Concept> = "typeModel",
    }
}

record! {
    /// An identifier issued to an entity by an assigning authority.
    pub struct EntityIdentifier {
        /// Primary key.
        id: Key = "id",
        /// Opaque change token.
        etag: String = "etag",
        modified_on: String = "modifiedOn",
        /// Key of the record that owns this association.
        source: Key = "source",
        source_model: AnyModel = "sourceModel",
        effective_version_sequence: i64 = "effectiveVersionSequence",
        obsolete_version_sequence: i64 = "obsoleteVersionSequence",
        authority: Key = "authority",
        authority_model: Box<AssigningAuthority> = "authorityModel",
        identifier_type: Key = "identifierType",
        identifier_type_model: Box<IdentifierType> = "identifierTypeModel",
        value: String = "value",
        issue_date: String = "issueDate",
        expiry_date: String = "expiryDate",
    }
}

record! {
    /// A typed link from the source entity to a target entity.
    pub struct EntityRelationship {
        /// Primary key.
        id: Key = "id",
        /// Opaque change token.
        etag: String = "etag",
        modified_on: String = "modifiedOn",
        /// Key of the record that owns this association.
        source: Key = "source",
        source_model: AnyModel = "sourceModel",
        effective_version_sequence: i64 = "effectiveVersionSequence",
        obsolete_version_sequence: i64 = "obsoleteVersionSequence",
        target: Key = "target",
        target_model: AnyModel = "targetModel",
        holder: Key = "holder",
        holder_model: AnyModel = "holderModel",
        relationship_type: Key = "relationshipType",
        relationship_type_model: Box<Concept> = "relationshipTypeModel",
        quantity: i64 = "quantity",
    }
}

record! {
    pub struct EntityTelecomAddress {
        /// Primary key.
        id: Key = "id",
        /// Opaque change token.
        etag: String = "etag",
        modified_on: String = "modifiedOn",
        /// Key of the record that owns this association.
        source: Key = "source",
        source_model: AnyModel = "sourceModel",
        effective_version_sequence: i64 = "effectiveVersionSequence",
        obsolete_version_sequence: i64 = "obsoleteVersionSequence",
        address_use: Key = "use",
        use_model: Box<Concept> = "useModel",
        address_type: Key = "type",
        type_model: Box<Concept> = "typeModel",
        value: String = "value",
    }
}

record! {
    pub struct EntityNote {
        /// Primary key.
        id: Key = "id",
        /// Opaque change token.
        etag: String = "etag",
        modified_on: String = "modifiedOn",
        /// Key of the record that owns this association.
        source: Key = "source",
        source_model: AnyModel = "sourceModel",
        effective_version_sequence: i64 = "effectiveVersionSequence",
        obsolete_version_sequence: i64 = "obsoleteVersionSequence",
        author: Key = "author",
        author_model: AnyModel = "authorModel",
        text: String = "text",
    }
}

record! {
    /// A free-form key/value label on an entity.
    pub struct EntityTag {
        /// Primary key.
        id: Key = "id",
        /// Opaque change token.
        etag: String = "etag",
        modified_on: String = "modifiedOn",
        creation_time: String = "creationTime",
        obsoletion_time: String = "obsoletionTime",
        created_by: Key = "createdBy",
        created_by_model: Box<SecurityUser> = "createdByModel",
        obsoleted_by: Key = "obsoletedBy",
        obsoleted_by_model: Box<SecurityUser> = "obsoletedByModel",
        source: Key = "source",
        key: String = "key",
        value: String = "value",
    }
}

record! {
    pub struct EntityExtension {
        /// Primary key.
        id: Key = "id",
        /// Opaque change token.
        etag: String = "etag",
        modified_on: String = "modifiedOn",
        /// Key of the record that owns this association.
        source: Key = "source",
        source_model: AnyModel = "sourceModel",
        effective_version_sequence: i64 = "effectiveVersionSequence",
        obsolete_version_sequence: i64 = "obsoleteVersionSequence",
        extension_type: Key = "extensionType",
        extension_type_model: Box<ExtensionType> = "extensionTypeModel",
        /// Extension payload, base64 encoded by the server.
        value: String = "value",
    }
}

record! {
    /// A language a person speaks.
    pub struct PersonLanguageCommunication {
        /// Primary key.
        id: Key = "id",
        /// Opaque change token.
        etag: String = "etag",
        modified_on: String = "modifiedOn",
        /// Key of the record that owns this association.
        source: Key = "source",
        source_model: AnyModel = "sourceModel",
        effective_version_sequence: i64 = "effectiveVersionSequence",
        obsolete_version_sequence: i64 = "obsoleteVersionSequence",
        language_code: String = "languageCode",
        is_preferred: bool = "isPreferred",
    }
}

record! {
    /// A service offered at a place, with its schedule.
    pub struct PlaceService {
        /// Primary key.
        id: Key = "id",
        /// Opaque change token.
        etag: String = "etag",
        modified_on: String = "modifiedOn",
        /// Key of the record that owns this association.
        source: Key = "source",
        source_model: AnyModel = "sourceModel",
        effective_version_sequence: i64 = "effectiveVersionSequence",
        obsolete_version_sequence: i64 = "obsoleteVersionSequence",
        service_schedule: String = "serviceSchedule",
        service_concept: Key = "serviceConcept",
        service_concept_model: Box<Concept> = "serviceConceptModel",
    }
}

record! {
    /// An authority that issues identifiers.
    pub struct AssigningAuthority {
        /// Primary key.
        id: Key = "id",
        /// Opaque change token.
        etag: String = "etag",
        modified_on: String = "modifiedOn",
        creation_time: String = "creationTime",
        obsoletion_time: String = "obsoletionTime",
        created_by: Key = "createdBy",
        created_by_model: Box<SecurityUser> = "createdByModel",
        obsoleted_by: Key = "obsoletedBy",
        obsoleted_by_model: Box<SecurityUser> = "obsoletedByModel",
        name: String = "name",
        domain_name: String = "domainName",
        description: String = "description",
        oid: String = "oid",
        url: String = "url",
        assigning_application: Key = "assigningApplication",
        /// Pattern identifiers from this authority are expected to match.
        validation: String = "validation",
        is_unique: bool = "isUnique",
        scope: Vec<Key> = "scope",
    }
}

record! {
    pub struct IdentifierType {
        /// Primary key.
        id: Key = "id",
        /// Opaque change token.
        etag: String = "etag",
        modified_on: String = "modifiedOn",
        creation_time: String = "creationTime",
        obsoletion_time: String = "obsoletionTime",
        created_by: Key = "createdBy",
        created_by_model: Box<SecurityUser> = "createdByModel",
        obsoleted_by: Key = "obsoletedBy",
        obsoleted_by_model: Box<SecurityUser> = "obsoletedByModel",
        type_concept: Key = "typeConcept",
        type_concept_model: Box<Concept> = "typeConceptModel",
        scope_concept: Key = "scopeConcept",
        scope_concept_model: Box<Concept> = "scopeConceptModel",
    }
}

record! {
    pub struct ExtensionType {
        /// Primary key.
        id: Key = "id",
        /// Opaque change token.
        etag: String = "etag",
        modified_on: String = "modifiedOn",
        creation_time: String = "creationTime",
        obsoletion_time: String = "obsoletionTime",
        created_by: Key = "createdBy",
        created_by_model: Box<SecurityUser> = "createdByModel",
        obsoleted_by: Key = "obsoletedBy",
        obsoleted_by_model: Box<SecurityUser> = "obsoletedByModel",
        updated_time: String = "updatedTime",
        updated_by: Key = "updatedBy",
        updated_by_model: Box<SecurityUser> = "updatedByModel",
        name: String = "name",
        handler_class: String = "handlerClass",
        is_enabled: bool = "isEnabled",
    }
}

record! {
    /// A template that a record claims to conform to.
    pub struct TemplateDefinition {
        /// Primary key.
        id: Key = "id",
        /// Opaque change token.
        etag: String = "etag",
        modified_on: String = "modifiedOn",
        creation_time: String = "creationTime",
        obsoletion_time: String = "obsoletionTime",
        created_by: Key = "createdBy",
        created_by_model: Box<SecurityUser> = "createdByModel",
        obsoleted_by: Key = "obsoletedBy",
        obsoleted_by_model: Box<SecurityUser> = "obsoletedByModel",
        updated_time: String = "updatedTime",
        updated_by: Key = "updatedBy",
        updated_by_model: Box<SecurityUser> = "updatedByModel",
        mnemonic: String = "mnemonic",
        name: String = "name",
        oid: String = "oid",
        description: String = "description",
    }
}
