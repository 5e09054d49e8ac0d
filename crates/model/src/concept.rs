//! Terminology: concepts, their names and relationships, and reference terms.

use crate::security::SecurityUser;
use crate::AnyModel;
use sdb_types::{Classified, ComponentValue, Key};

record! {
    /// A coded concept with its names, relationships and reference-term mappings.
    pub struct Concept {
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
        previous_version: Key = "previousVersion",
        version: Key = "version",
        /// Version sequence number assigned by the server.
        sequence: i64 = "sequence",
        is_readonly: bool = "isReadonly",
        mnemonic: String = "mnemonic",
        status_concept: Key = "statusConcept",
        status_concept_model: Box<Concept> = "statusConceptModel",
        concept_class: Key = "conceptClass",
        concept_class_model: Box<ConceptClass> = "conceptClassModel",
        relationship: Classified<ConceptRelationship> = "relationship",
        reference_term: Classified<ConceptReferenceTerm> = "referenceTerm",
        /// Display names keyed by language code.
        name: Classified<ComponentValue<ConceptName>> = "name",
        concept_set: Vec<Key> = "conceptSet",
    }
}

record! {
    pub struct ConceptClass {
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
        mnemonic: String = "mnemonic",
    }
}

record! {
    /// A display name of a concept in one language.
    pub struct ConceptName {
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
        language: String = "language",
        value: String = "value",
        phonetic_code: String = "phoneticCode",
        phonetic_algorithm: Key = "phoneticAlgorithm",
    }
}

record! {
    /// Maps a concept onto a term of an external code system.
    pub struct ConceptReferenceTerm {
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
        term: Key = "term",
        term_model: Box<ReferenceTerm> = "termModel",
        relationship_type: Key = "relationshipType",
        relationship_type_model: Box<ConceptRelationshipType> = "relationshipTypeModel",
    }
}

record! {
    pub struct ConceptRelationship {
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
        target_concept: Key = "targetConcept",
        target_concept_model: Box<Concept> = "targetConceptModel",
        relationship_type: Key = "relationshipType",
        relationship_type_model: Box<ConceptRelationshipType> = "relationshipTypeModel",
    }
}

record! {
    pub struct ConceptRelationshipType {
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
        mnemonic: String = "mnemonic",
    }
}

record! {
    /// A named, addressable set of concepts.
    pub struct ConceptSet {
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
        mnemonic: String = "mnemonic",
        oid: String = "oid",
        url: String = "url",
        concept: Vec<Key> = "concept",
    }
}

record! {
    /// A code from an external code system.
    pub struct ReferenceTerm {
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
        code_system: Key = "codeSystem",
        code_system_model: Box<CodeSystem> = "codeSystemModel",
        name: Classified<ComponentValue<ReferenceTermName>> = "name",
    }
}

record! {
    pub struct ReferenceTermName {
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
        language: String = "language",
        value: String = "value",
        phonetic_code: String = "phoneticCode",
        phonetic_algorithm: Key = "phoneticAlgorithm",
    }
}

record! {
    /// An external code system (LOINC, ICD-10, ...).
    pub struct CodeSystem {
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
        oid: String = "oid",
        authority: String = "authority",
        obsoletion_reason: String = "obsoletionReason",
        url: String = "url",
        version: String = "version",
        description: String = "description",
    }
}
