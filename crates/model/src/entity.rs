//! The entity hierarchy.

use crate::act::ActParticipation;
use crate::components::{
    EntityAddress, EntityExtension, EntityIdentifier, EntityName, EntityNote, EntityRelationship,
    EntityTag, EntityTelecomAddress, PersonLanguageCommunication, PlaceService, TemplateDefinition,
};
use crate::concept::Concept;
use crate::security::{
    SecurityApplication, SecurityDevice, SecurityPolicyInstance, SecurityUser,
};
use crate::AnyModel;
use sdb_keys::PrecisionValue;
use sdb_types::{Classified, Key};
use serde_json::Number;

record! {
    /// A person, place, organisation or thing.
    ///
    /// Collections (`identifier`, `name`, `address`, ...) are keyed by classifier: a use or type
    /// mnemonic such as `"Legal"`, or the classifier UUID.
    pub struct Entity {
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
        class_concept: Key = "classConcept",
        class_concept_model: Box<Concept> = "classConceptModel",
        determiner_concept: Key = "determinerConcept",
        determiner_concept_model: Box<Concept> = "determinerConceptModel",
        status_concept: Key = "statusConcept",
        status_concept_model: Box<Concept> = "statusConceptModel",
        creation_act: Key = "creationAct",
        creation_act_model: AnyModel = "creationActModel",
        type_concept: Key = "typeConcept",
        type_concept_model: Box<Concept> = "typeConceptModel",
        identifier: Classified<EntityIdentifier> = "identifier",
        relationship: Classified<EntityRelationship> = "relationship",
        telecom: Classified<EntityTelecomAddress> = "telecom",
        extension: Classified<EntityExtension> = "extension",
        name: Classified<EntityName> = "name",
        address: Classified<EntityAddress> = "address",
        note: Classified<EntityNote> = "note",
        tag: Classified<EntityTag> = "tag",
        participation: Classified<ActParticipation> = "participation",
        policy: Vec<SecurityPolicyInstance> = "policy",
    }
}

record! {
    pub struct Person {
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
        class_concept: Key = "classConcept",
        class_concept_model: Box<Concept> = "classConceptModel",
        determiner_concept: Key = "determinerConcept",
        determiner_concept_model: Box<Concept> = "determinerConceptModel",
        status_concept: Key = "statusConcept",
        status_concept_model: Box<Concept> = "statusConceptModel",
        creation_act: Key = "creationAct",
        creation_act_model: AnyModel = "creationActModel",
        type_concept: Key = "typeConcept",
        type_concept_model: Box<Concept> = "typeConceptModel",
        identifier: Classified<EntityIdentifier> = "identifier",
        relationship: Classified<EntityRelationship> = "relationship",
        telecom: Classified<EntityTelecomAddress> = "telecom",
        extension: Classified<EntityExtension> = "extension",
        name: Classified<EntityName> = "name",
        address: Classified<EntityAddress> = "address",
        note: Classified<EntityNote> = "note",
        tag: Classified<EntityTag> = "tag",
        participation: Classified<ActParticipation> = "participation",
        policy: Vec<SecurityPolicyInstance> = "policy",
        date_of_birth: String = "dateOfBirth",
        date_of_birth_precision: PrecisionValue = "dateOfBirthPrecision",
        language: Vec<PersonLanguageCommunication> = "language",
    }
}

record! {
    /// A person who receives care.
    pub struct Patient {
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
        class_concept: Key = "classConcept",
        class_concept_model: Box<Concept> = "classConceptModel",
        determiner_concept: Key = "determinerConcept",
        determiner_concept_model: Box<Concept> = "determinerConceptModel",
        status_concept: Key = "statusConcept",
        status_concept_model: Box<Concept> = "statusConceptModel",
        creation_act: Key = "creationAct",
        creation_act_model: AnyModel = "creationActModel",
        type_concept: Key = "typeConcept",
        type_concept_model: Box<Concept> = "typeConceptModel",
        identifier: Classified<EntityIdentifier> = "identifier",
        relationship: Classified<EntityRelationship> = "relationship",
        telecom: Classified<EntityTelecomAddress> = "telecom",
        extension: Classified<EntityExtension> = "extension",
        name: Classified<EntityName> = "name",
        address: Classified<EntityAddress> = "address",
        note: Classified<EntityNote> = "note",
        tag: Classified<EntityTag> = "tag",
        participation: Classified<ActParticipation> = "participation",
        policy: Vec<SecurityPolicyInstance> = "policy",
        date_of_birth: String = "dateOfBirth",
        date_of_birth_precision: PrecisionValue = "dateOfBirthPrecision",
        language: Vec<PersonLanguageCommunication> = "language",
        deceased_date: String = "deceasedDate",
        deceased_date_precision: PrecisionValue = "deceasedDatePrecision",
        /// Birth order for multiple births; unset for single births.
        multiple_birth_order: i32 = "multipleBirthOrder",
        gender_concept: Key = "genderConcept",
        gender_concept_model: Box<Concept> = "genderConceptModel",
        marital_status: Key = "maritalStatus",
        marital_status_model: Box<Concept> = "maritalStatusModel",
        education_level: Key = "educationLevel",
        education_level_model: Box<Concept> = "educationLevelModel",
        living_arrangement: Key = "livingArrangement",
        living_arrangement_model: Box<Concept> = "livingArrangementModel",
        religious_affiliation: Key = "religiousAffiliation",
        religious_affiliation_model: Box<Concept> = "religiousAffiliationModel",
        ethnic_group: Key = "ethnicGroup",
        ethnic_group_model: Box<Concept> = "ethnicGroupModel",
        vip_status: Key = "vipStatus",
        vip_status_model: Box<Concept> = "vipStatusModel",
    }
}

record! {
    /// A person who provides care.
    pub struct Provider {
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
        class_concept: Key = "classConcept",
        class_concept_model: Box<Concept> = "classConceptModel",
        determiner_concept: Key = "determinerConcept",
        determiner_concept_model: Box<Concept> = "determinerConceptModel",
        status_concept: Key = "statusConcept",
        status_concept_model: Box<Concept> = "statusConceptModel",
        creation_act: Key = "creationAct",
        creation_act_model: AnyModel = "creationActModel",
        type_concept: Key = "typeConcept",
        type_concept_model: Box<Concept> = "typeConceptModel",
        identifier: Classified<EntityIdentifier> = "identifier",
        relationship: Classified<EntityRelationship> = "relationship",
        telecom: Classified<EntityTelecomAddress> = "telecom",
        extension: Classified<EntityExtension> = "extension",
        name: Classified<EntityName> = "name",
        address: Classified<EntityAddress> = "address",
        note: Classified<EntityNote> = "note",
        tag: Classified<EntityTag> = "tag",
        participation: Classified<ActParticipation> = "participation",
        policy: Vec<SecurityPolicyInstance> = "policy",
        date_of_birth: String = "dateOfBirth",
        date_of_birth_precision: PrecisionValue = "dateOfBirthPrecision",
        language: Vec<PersonLanguageCommunication> = "language",
        provider_specialty: Key = "providerSpecialty",
        provider_specialty_model: Box<Concept> = "providerSpecialtyModel",
    }
}

record! {
    pub struct Organization {
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
        class_concept: Key = "classConcept",
        class_concept_model: Box<Concept> = "classConceptModel",
        determiner_concept: Key = "determinerConcept",
        determiner_concept_model: Box<Concept> = "determinerConceptModel",
        status_concept: Key = "statusConcept",
        status_concept_model: Box<Concept> = "statusConceptModel",
        creation_act: Key = "creationAct",
        creation_act_model: AnyModel = "creationActModel",
        type_concept: Key = "typeConcept",
        type_concept_model: Box<Concept> = "typeConceptModel",
        identifier: Classified<EntityIdentifier> = "identifier",
        relationship: Classified<EntityRelationship> = "relationship",
        telecom: Classified<EntityTelecomAddress> = "telecom",
        extension: Classified<EntityExtension> = "extension",
        name: Classified<EntityName> = "name",
        address: Classified<EntityAddress> = "address",
        note: Classified<EntityNote> = "note",
        tag: Classified<EntityTag> = "tag",
        participation: Classified<ActParticipation> = "participation",
        policy: Vec<SecurityPolicyInstance> = "policy",
        industry_concept: Key = "industryConcept",
        industry_concept_model: Box<Concept> = "industryConceptModel",
    }
}

record! {
    /// A physical place, such as a clinic or a city.
    pub struct Place {
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
        class_concept: Key = "classConcept",
        class_concept_model: Box<Concept> = "classConceptModel",
        determiner_concept: Key = "determinerConcept",
        determiner_concept_model: Box<Concept> = "determinerConceptModel",
        status_concept: Key = "statusConcept",
        status_concept_model: Box<Concept> = "statusConceptModel",
        creation_act: Key = "creationAct",
        creation_act_model: AnyModel = "creationActModel",
        type_concept: Key = "typeConcept",
        type_concept_model: Box<Concept> = "typeConceptModel",
        identifier: Classified<EntityIdentifier> = "identifier",
        relationship: Classified<EntityRelationship> = "relationship",
        telecom: Classified<EntityTelecomAddress> = "telecom",
        extension: Classified<EntityExtension> = "extension",
        name: Classified<EntityName> = "name",
        address: Classified<EntityAddress> = "address",
        note: Classified<EntityNote> = "note",
        tag: Classified<EntityTag> = "tag",
        participation: Classified<ActParticipation> = "participation",
        policy: Vec<SecurityPolicyInstance> = "policy",
        is_mobile: bool = "isMobile",
        lat: Number = "lat",
        lng: Number = "lng",
        service: Vec<PlaceService> = "service",
    }
}

record! {
    pub struct Material {
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
        class_concept: Key = "classConcept",
        class_concept_model: Box<Concept> = "classConceptModel",
        determiner_concept: Key = "determinerConcept",
        determiner_concept_model: Box<Concept> = "determinerConceptModel",
        status_concept: Key = "statusConcept",
        status_concept_model: Box<Concept> = "statusConceptModel",
        creation_act: Key = "creationAct",
        creation_act_model: AnyModel = "creationActModel",
        type_concept: Key = "typeConcept",
        type_concept_model: Box<Concept> = "typeConceptModel",
        identifier: Classified<EntityIdentifier> = "identifier",
        relationship: Classified<EntityRelationship> = "relationship",
        telecom: Classified<EntityTelecomAddress> = "telecom",
        extension: Classified<EntityExtension> = "extension",
        name: Classified<EntityName> = "name",
        address: Classified<EntityAddress> = "address",
        note: Classified<EntityNote> = "note",
        tag: Classified<EntityTag> = "tag",
        participation: Classified<ActParticipation> = "participation",
        policy: Vec<SecurityPolicyInstance> = "policy",
        quantity: Number = "quantity",
        expiry_date: String = "expiryDate",
        is_administrative: bool = "isAdministrative",
        form_concept: Key = "formConcept",
        form_concept_model: Box<Concept> = "formConceptModel",
        quantity_concept: Key = "quantityConcept",
        quantity_concept_model: Box<Concept> = "quantityConceptModel",
    }
}

record! {
    /// A material produced by a manufacturer, tracked by lot.
    pub struct ManufacturedMaterial {
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
        class_concept: Key = "classConcept",
        class_concept_model: Box<Concept> = "classConceptModel",
        determiner_concept: Key = "determinerConcept",
        determiner_concept_model: Box<Concept> = "determinerConceptModel",
        status_concept: Key = "statusConcept",
        status_concept_model: Box<Concept> = "statusConceptModel",
        creation_act: Key = "creationAct",
        creation_act_model: AnyModel = "creationActModel",
        type_concept: Key = "typeConcept",
        type_concept_model: Box<Concept> = "typeConceptModel",
        identifier: Classified<EntityIdentifier> = "identifier",
        relationship: Classified<EntityRelationship> = "relationship",
        telecom: Classified<EntityTelecomAddress> = "telecom",
        extension: Classified<EntityExtension> = "extension",
        name: Classified<EntityName> = "name",
        address: Classified<EntityAddress> = "address",
        note: Classified<EntityNote> = "note",
        tag: Classified<EntityTag> = "tag",
        participation: Classified<ActParticipation> = "participation",
        policy: Vec<SecurityPolicyInstance> = "policy",
        quantity: Number = "quantity",
        expiry_date: String = "expiryDate",
        is_administrative: bool = "isAdministrative",
        form_concept: Key = "formConcept",
        form_concept_model: Box<Concept> = "formConceptModel",
        quantity_concept: Key = "quantityConcept",
        quantity_concept_model: Box<Concept> = "quantityConceptModel",
        lot_number: String = "lotNumber",
    }
}

record! {
    /// A device known to the security layer.
    pub struct DeviceEntity {
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
        class_concept: Key = "classConcept",
        class_concept_model: Box<Concept> = "classConceptModel",
        determiner_concept: Key = "determinerConcept",
        determiner_concept_model: Box<Concept> = "determinerConceptModel",
        status_concept: Key = "statusConcept",
        status_concept_model: Box<Concept> = "statusConceptModel",
        creation_act: Key = "creationAct",
        creation_act_model: AnyModel = "creationActModel",
        type_concept: Key = "typeConcept",
        type_concept_model: Box<Concept> = "typeConceptModel",
        identifier: Classified<EntityIdentifier> = "identifier",
        relationship: Classified<EntityRelationship> = "relationship",
        telecom: Classified<EntityTelecomAddress> = "telecom",
        extension: Classified<EntityExtension> = "extension",
        name: Classified<EntityName> = "name",
        address: Classified<EntityAddress> = "address",
        note: Classified<EntityNote> = "note",
        tag: Classified<EntityTag> = "tag",
        participation: Classified<ActParticipation> = "participation",
        policy: Vec<SecurityPolicyInstance> = "policy",
        manufacturer_model_name: String = "manufacturerModelName",
        operating_system_name: String = "operatingSystemName",
        security_device: Key = "securityDevice",
        security_device_model: Box<SecurityDevice> = "securityDeviceModel",
    }
}

record! {
    /// An application known to the security layer.
    pub struct ApplicationEntity {
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
        class_concept: Key = "classConcept",
        class_concept_model: Box<Concept> = "classConceptModel",
        determiner_concept: Key = "determinerConcept",
        determiner_concept_model: Box<Concept> = "determinerConceptModel",
        status_concept: Key = "statusConcept",
        status_concept_model: Box<Concept> = "statusConceptModel",
        creation_act: Key = "creationAct",
        creation_act_model: AnyModel = "creationActModel",
        type_concept: Key = "typeConcept",
        type_concept_model: Box<Concept> = "typeConceptModel",
        identifier: Classified<EntityIdentifier> = "identifier",
        relationship: Classified<EntityRelationship> = "relationship",
        telecom: Classified<EntityTelecomAddress> = "telecom",
        extension: Classified<EntityExtension> = "extension",
        name: Classified<EntityName> = "name",
        address: Classified<EntityAddress> = "address",
        note: Classified<EntityNote> = "note",
        tag: Classified<EntityTag> = "tag",
        participation: Classified<ActParticipation> = "participation",
        policy: Vec<SecurityPolicyInstance> = "policy",
        security_application: Key = "securityApplication",
        security_application_model: Box<SecurityApplication> = "securityApplicationModel",
        software_name: String = "softwareName",
        version_name: String = "versionName",
        vendor_name: String = "vendorName",
    }
}

record! {
    /// The person behind a security user account.
    pub struct UserEntity {
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
        class_concept: Key = "classConcept",
        class_concept_model: Box<Concept> = "classConceptModel",
        determiner_concept: Key = "determinerConcept",
        determiner_concept_model: Box<Concept> = "determinerConceptModel",
        status_concept: Key = "statusConcept",
        status_concept_model: Box<Concept> = "statusConceptModel",
        creation_act: Key = "creationAct",
        creation_act_model: AnyModel = "creationActModel",
        type_concept: Key = "typeConcept",
        type_concept_model: Box<Concept> = "typeConceptModel",
        identifier: Classified<EntityIdentifier> = "identifier",
        relationship: Classified<EntityRelationship> = "relationship",
        telecom: Classified<EntityTelecomAddress> = "telecom",
        extension: Classified<EntityExtension> = "extension",
        name: Classified<EntityName> = "name",
        address: Classified<EntityAddress> = "address",
        note: Classified<EntityNote> = "note",
        tag: Classified<EntityTag> = "tag",
        participation: Classified<ActParticipation> = "participation",
        policy: Vec<SecurityPolicyInstance> = "policy",
        date_of_birth: String = "dateOfBirth",
        date_of_birth_precision: PrecisionValue = "dateOfBirthPrecision",
        language: Vec<PersonLanguageCommunication> = "language",
        security_user: Key = "securityUser",
        security_user_model: Box<SecurityUser> = "securityUserModel",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Record;
    use sdb_keys::DatePrecision;
    use serde_json::json;

    fn patient_source() -> serde_json::Value {
        json!({
            "id": "X",
            "name": {
                "Legal": [{
                    "component": { "Given": ["Jane", "Q"], "Family": "Doe" },
                    "displayHint": "formal"
                }]
            },
            "dateOfBirth": "2000-01-01"
        })
    }

    #[test]
    fn patient_copies_only_supplied_fields() {
        let source = patient_source();
        let patient = Patient::from_source(Some(&source));

        assert_eq!(patient.type_tag.wire_name(), Some("Patient"));
        assert_eq!(patient.id.as_ref().map(|k| k.as_str()), Some("X"));
        assert_eq!(patient.date_of_birth.as_deref(), Some("2000-01-01"));
        assert_eq!(patient.gender_concept, None);
        assert_eq!(patient.multiple_birth_order, None);

        let names = serde_json::to_value(patient.name.as_ref().expect("name copied"))
            .expect("serialise names");
        assert_eq!(names, source["name"]);
    }

    #[test]
    fn empty_patient_has_only_its_tag() {
        let patient = Patient::from_source(None);
        assert_eq!(patient, Patient::new());
        assert_eq!(patient.to_value().expect("value"), json!({ "$type": "Patient" }));
    }

    #[test]
    fn extraneous_properties_are_dropped() {
        let source = json!({ "id": "X", "favouriteColour": "green", "$type": "Person" });
        let value = Patient::copy_from(&source).to_value().expect("value");
        assert_eq!(value, json!({ "$type": "Patient", "id": "X" }));
    }

    #[test]
    fn copy_is_idempotent() {
        let once = Patient::copy_from(&patient_source());
        let twice = Patient::copy_from(&once.to_value().expect("value"));
        assert_eq!(once, twice);
    }

    #[test]
    fn mistyped_and_null_properties_are_left_unset() {
        let source = json!({
            "id": "X",
            "multipleBirthOrder": "second",
            "genderConcept": null,
            "dateOfBirthPrecision": "Day"
        });
        let patient = Patient::copy_from(&source);
        assert_eq!(patient.id.as_ref().map(|k| k.as_str()), Some("X"));
        assert_eq!(patient.multiple_birth_order, None);
        assert_eq!(patient.gender_concept, None);
        assert_eq!(
            patient.date_of_birth_precision,
            Some(PrecisionValue::Named(DatePrecision::Day))
        );
    }

    #[test]
    fn non_object_source_gives_empty_record() {
        assert_eq!(Patient::copy_from(&json!(42)), Patient::new());
        assert_eq!(Patient::copy_from(&json!(["id", "X"])), Patient::new());
    }

    #[test]
    fn widening_and_narrowing_between_records() {
        let mut person = Person::new();
        person.id = Some("X".into());
        person.date_of_birth = Some("1980-05-17".to_owned());

        let patient = Patient::from_record(&person);
        assert_eq!(patient.id, person.id);
        assert_eq!(patient.date_of_birth, person.date_of_birth);
        assert_eq!(patient.type_tag.wire_name(), Some("Patient"));

        let mut patient = patient;
        patient.multiple_birth_order = Some(2);
        let back = Person::from_record(&patient);
        assert_eq!(back, person);
    }

    #[test]
    fn type_tag_is_written_first() {
        let mut patient = Patient::new();
        patient.id = Some("X".into());
        let text = serde_json::to_string(&patient).expect("serialise");
        assert!(text.starts_with(r#"{"$type":"Patient""#), "{text}");
    }

    #[test]
    fn standalone_read_keeps_the_tag_it_was_given() {
        let patient: Patient =
            serde_json::from_value(json!({ "$type": "Provider", "id": "X" })).expect("parse");
        assert_eq!(patient.type_tag.wire_name(), Some("Provider"));
        assert!(!patient.type_tag.is_own());

        let copied = Patient::copy_from(&json!({ "$type": "Provider", "id": "X" }));
        assert!(copied.type_tag.is_own());
    }

    #[test]
    fn nested_records_are_copied_verbatim() {
        let source = json!({
            "name": { "Legal": [{ "component": { "Given": ["Jane"] } }] },
            "genderConceptModel": { "mnemonic": "Female", "sortOrder": 2 },
            "policy": [{ "$type": "SecurityPolicyInstance", "grant": 1, "audited": true }]
        });
        let value = Patient::copy_from(&source).to_value().expect("value");
        assert_eq!(value["name"], source["name"]);
        assert_eq!(value["genderConceptModel"], source["genderConceptModel"]);
        assert_eq!(value["policy"], source["policy"]);
    }

    #[test]
    fn scalars_keep_the_form_they_were_read_in() {
        let source = json!({ "dateOfBirthPrecision": 3, "deceasedDatePrecision": "Year" });
        let value = Patient::copy_from(&source).to_value().expect("value");
        assert_eq!(value["dateOfBirthPrecision"], json!(3));
        assert_eq!(value["deceasedDatePrecision"], json!("Year"));

        let place = json!({ "lat": 5, "lng": -0.125 });
        let value = Place::copy_from(&place).to_value().expect("value");
        assert_eq!(value["lat"], json!(5));
        assert_eq!(value["lng"], json!(-0.125));
        assert_eq!(value.to_string(), r#"{"$type":"Place","lat":5,"lng":-0.125}"#);
    }

    #[test]
    fn array_with_a_malformed_element_is_not_reread_as_one_record() {
        let source = json!({
            "id": "X",
            "name": { "Alias": [{ "sequence": "x", "effectiveVersionSequence": "one" }] }
        });
        let patient = Patient::copy_from(&source);
        assert_eq!(patient.name, None);
        assert_eq!(patient.id.as_ref().map(|k| k.as_str()), Some("X"));
    }
}
