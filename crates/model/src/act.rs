//! The act hierarchy.

use crate::components::{AssigningAuthority, ExtensionType, IdentifierType, TemplateDefinition};
use crate::concept::Concept;
use crate::security::{SecurityPolicyInstance, SecurityUser};
use crate::AnyModel;
use sdb_types::{Classified, Key};
use serde_json::Number;

record! {
    /// Something that happened, is intended, or was requested.
    ///
    /// `moodConcept` says which; `actTime`, `startTime` and `stopTime` carry the timing as sent.
    pub struct Act {
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
        template: Key = "template",
        template_model: Box<TemplateDefinition> = "templateModel",
        is_negated: bool = "isNegated",
        act_time: String = "actTime",
        start_time: String = "startTime",
        stop_time: String = "stopTime",
        class_concept: Key = "classConcept",
        class_concept_model: Box<Concept> = "classConceptModel",
        mood_concept: Key = "moodConcept",
        mood_concept_model: Box<Concept> = "moodConceptModel",
        reason_concept: Key = "reasonConcept",
        reason_concept_model: Box<Concept> = "reasonConceptModel",
        status_concept: Key = "statusConcept",
        status_concept_model: Box<Concept> = "statusConceptModel",
        type_concept: Key = "typeConcept",
        type_concept_model: Box<Concept> = "typeConceptModel",
        identifier: Classified<ActIdentifier> = "identifier",
        relationship: Classified<ActRelationship> = "relationship",
        extension: Classified<ActExtension> = "extension",
        note: Classified<ActNote> = "note",
        tag: Classified<ActTag> = "tag",
        participation: Classified<ActParticipation> = "participation",
        policy: Vec<SecurityPolicyInstance> = "policy",
    }
}

record! {
    pub struct Observation {
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
        template: Key = "template",
        template_model: Box<TemplateDefinition> = "templateModel",
        is_negated: bool = "isNegated",
        act_time: String = "actTime",
        start_time: String = "startTime",
        stop_time: String = "stopTime",
        class_concept: Key = "classConcept",
        class_concept_model: Box<Concept> = "classConceptModel",
        mood_concept: Key = "moodConcept",
        mood_concept_model: Box<Concept> = "moodConceptModel",
        reason_concept: Key = "reasonConcept",
        reason_concept_model: Box<Concept> = "reasonConceptModel",
        status_concept: Key = "statusConcept",
        status_concept_model: Box<Concept> = "statusConceptModel",
        type_concept: Key = "typeConcept",
        type_concept_model: Box<Concept> = "typeConceptModel",
        identifier: Classified<ActIdentifier> = "identifier",
        relationship: Classified<ActRelationship> = "relationship",
        extension: Classified<ActExtension> = "extension",
        note: Classified<ActNote> = "note",
        tag: Classified<ActTag> = "tag",
        participation: Classified<ActParticipation> = "participation",
        policy: Vec<SecurityPolicyInstance> = "policy",
        interpretation_concept: Key = "interpretationConcept",
        interpretation_concept_model: Box<Concept> = "interpretationConceptModel",
    }
}

record! {
    /// An observation with a numeric value and unit.
    pub struct QuantityObservation {
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
        template: Key = "template",
        template_model: Box<TemplateDefinition> = "templateModel",
        is_negated: bool = "isNegated",
        act_time: String = "actTime",
        start_time: String = "startTime",
        stop_time: String = "stopTime",
        class_concept: Key = "classConcept",
        class_concept_model: Box<Concept> = "classConceptModel",
        mood_concept: Key = "moodConcept",
        mood_concept_model: Box<Concept> = "moodConceptModel",
        reason_concept: Key = "reasonConcept",
        reason_concept_model: Box<Concept> = "reasonConceptModel",
        status_concept: Key = "statusConcept",
        status_concept_model: Box<Concept> = "statusConceptModel",
        type_concept: Key = "typeConcept",
        type_concept_model: Box<Concept> = "typeConceptModel",
        identifier: Classified<ActIdentifier> = "identifier",
        relationship: Classified<ActRelationship> = "relationship",
        extension: Classified<ActExtension> = "extension",
        note: Classified<ActNote> = "note",
        tag: Classified<ActTag> = "tag",
        participation: Classified<ActParticipation> = "participation",
        policy: Vec<SecurityPolicyInstance> = "policy",
        interpretation_concept: Key = "interpretationConcept",
        interpretation_concept_model: Box<Concept> = "interpretationConceptModel",
        value: Number = "value",
        unit_of_measure: Key = "unitOfMeasure",
        unit_of_measure_model: Box<Concept> = "unitOfMeasureModel",
    }
}

record! {
    pub struct TextObservation {
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
        template: Key = "template",
        template_model: Box<TemplateDefinition> = "templateModel",
        is_negated: bool = "isNegated",
        act_time: String = "actTime",
        start_time: String = "startTime",
        stop_time: String = "stopTime",
        class_concept: Key = "classConcept",
        class_concept_model: Box<Concept> = "classConceptModel",
        mood_concept: Key = "moodConcept",
        mood_concept_model: Box<Concept> = "moodConceptModel",
        reason_concept: Key = "reasonConcept",
        reason_concept_model: Box<Concept> = "reasonConceptModel",
        status_concept: Key = "statusConcept",
        status_concept_model: Box<Concept> = "statusConceptModel",
        type_concept: Key = "typeConcept",
        type_concept_model: Box<Concept> = "typeConceptModel",
        identifier: Classified<ActIdentifier> = "identifier",
        relationship: Classified<ActRelationship> = "relationship",
        extension: Classified<ActExtension> = "extension",
        note: Classified<ActNote> = "note",
        tag: Classified<ActTag> = "tag",
        participation: Classified<ActParticipation> = "participation",
        policy: Vec<SecurityPolicyInstance> = "policy",
        interpretation_concept: Key = "interpretationConcept",
        interpretation_concept_model: Box<Concept> = "interpretationConceptModel",
        value: String = "value",
    }
}

record! {
    /// An observation whose value is a concept.
    pub struct CodedObservation {
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
        template: Key = "template",
        template_model: Box<TemplateDefinition> = "templateModel",
        is_negated: bool = "isNegated",
        act_time: String = "actTime",
        start_time: String = "startTime",
        stop_time: String = "stopTime",
        class_concept: Key = "classConcept",
        class_concept_model: Box<Concept> = "classConceptModel",
        mood_concept: Key = "moodConcept",
        mood_concept_model: Box<Concept> = "moodConceptModel",
        reason_concept: Key = "reasonConcept",
        reason_concept_model: Box<Concept> = "reasonConceptModel",
        status_concept: Key = "statusConcept",
        status_concept_model: Box<Concept> = "statusConceptModel",
        type_concept: Key = "typeConcept",
        type_concept_model: Box<Concept> = "typeConceptModel",
        identifier: Classified<ActIdentifier> = "identifier",
        relationship: Classified<ActRelationship> = "relationship",
        extension: Classified<ActExtension> = "extension",
        note: Classified<ActNote> = "note",
        tag: Classified<ActTag> = "tag",
        participation: Classified<ActParticipation> = "participation",
        policy: Vec<SecurityPolicyInstance> = "policy",
        interpretation_concept: Key = "interpretationConcept",
        interpretation_concept_model: Box<Concept> = "interpretationConceptModel",
        value: Key = "value",
        value_model: Box<Concept> = "valueModel",
    }
}

record! {
    /// Administration of a substance, e.g. a vaccine dose.
    pub struct SubstanceAdministration {
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
        template: Key = "template",
        template_model: Box<TemplateDefinition> = "templateModel",
        is_negated: bool = "isNegated",
        act_time: String = "actTime",
        start_time: String = "startTime",
        stop_time: String = "stopTime",
        class_concept: Key = "classConcept",
        class_concept_model: Box<Concept> = "classConceptModel",
        mood_concept: Key = "moodConcept",
        mood_concept_model: Box<Concept> = "moodConceptModel",
        reason_concept: Key = "reasonConcept",
        reason_concept_model: Box<Concept> = "reasonConceptModel",
        status_concept: Key = "statusConcept",
        status_concept_model: Box<Concept> = "statusConceptModel",
        type_concept: Key = "typeConcept",
        type_concept_model: Box<Concept> = "typeConceptModel",
        identifier: Classified<ActIdentifier> = "identifier",
        relationship: Classified<ActRelationship> = "relationship",
        extension: Classified<ActExtension> = "extension",
        note: Classified<ActNote> = "note",
        tag: Classified<ActTag> = "tag",
        participation: Classified<ActParticipation> = "participation",
        policy: Vec<SecurityPolicyInstance> = "policy",
        route: Key = "route",
        route_model: Box<Concept> = "routeModel",
        dose_unit: Key = "doseUnit",
        dose_unit_model: Box<Concept> = "doseUnitModel",
        dose_quantity: Number = "doseQuantity",
        dose_sequence: i32 = "doseSequence",
        site: Key = "site",
        site_model: Box<Concept> = "siteModel",
    }
}

record! {
    pub struct PatientEncounter {
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
        template: Key = "template",
        template_model: Box<TemplateDefinition> = "templateModel",
        is_negated: bool = "isNegated",
        act_time: String = "actTime",
        start_time: String = "startTime",
        stop_time: String = "stopTime",
        class_concept: Key = "classConcept",
        class_concept_model: Box<Concept> = "classConceptModel",
        mood_concept: Key = "moodConcept",
        mood_concept_model: Box<Concept> = "moodConceptModel",
        reason_concept: Key = "reasonConcept",
        reason_concept_model: Box<Concept> = "reasonConceptModel",
        status_concept: Key = "statusConcept",
        status_concept_model: Box<Concept> = "statusConceptModel",
        type_concept: Key = "typeConcept",
        type_concept_model: Box<Concept> = "typeConceptModel",
        identifier: Classified<ActIdentifier> = "identifier",
        relationship: Classified<ActRelationship> = "relationship",
        extension: Classified<ActExtension> = "extension",
        note: Classified<ActNote> = "note",
        tag: Classified<ActTag> = "tag",
        participation: Classified<ActParticipation> = "participation",
        policy: Vec<SecurityPolicyInstance> = "policy",
        discharge_disposition: Key = "dischargeDisposition",
        discharge_disposition_model: Box<Concept> = "dischargeDispositionModel",
    }
}

record! {
    /// An act that records a change to other records.
    pub struct ControlAct {
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
        template: Key = "template",
        template_model: Box<TemplateDefinition> = "templateModel",
        is_negated: bool = "isNegated",
        act_time: String = "actTime",
        start_time: String = "startTime",
        stop_time: String = "stopTime",
        class_concept: Key = "classConcept",
        class_concept_model: Box<Concept> = "classConceptModel",
        mood_concept: Key = "moodConcept",
        mood_concept_model: Box<Concept> = "moodConceptModel",
        reason_concept: Key = "reasonConcept",
        reason_concept_model: Box<Concept> = "reasonConceptModel",
        status_concept: Key = "statusConcept",
        status_concept_model: Box<Concept> = "statusConceptModel",
        type_concept: Key = "typeConcept",
        type_concept_model: Box<Concept> = "typeConceptModel",
        identifier: Classified<ActIdentifier> = "identifier",
        relationship: Classified<ActRelationship> = "relationship",
        extension: Classified<ActExtension> = "extension",
        note: Classified<ActNote> = "note",
        tag: Classified<ActTag> = "tag",
        participation: Classified<ActParticipation> = "participation",
        policy: Vec<SecurityPolicyInstance> = "policy",
    }
}

record! {
    /// The role an entity plays in an act.
    pub struct ActParticipation {
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
        player: Key = "player",
        player_model: AnyModel = "playerModel",
        act: Key = "act",
        act_model: AnyModel = "actModel",
        participation_role: Key = "participationRole",
        participation_role_model: Box<Concept> = "participationRoleModel",
        quantity: i64 = "quantity",
    }
}

record! {
    pub struct ActRelationship {
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
        relationship_type: Key = "relationshipType",
        relationship_type_model: Box<Concept> = "relationshipTypeModel",
    }
}

record! {
    pub struct ActIdentifier {
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
    pub struct ActNote {
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
    pub struct ActTag {
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
    pub struct ActExtension {
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
