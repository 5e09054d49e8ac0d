//! Act classification tables.

key_table! {
    /// Act class concepts (`Act.classConcept`).
    pub struct ActClassKeys {
        ACCOUNT = "Account" => "ca44a469-81d7-4484-9189-ca1d55afecbc",
        ACT = "Act" => "d874424e-c692-4fd8-b94e-642e1cbf83e9",
        BATTERY = "Battery" => "676de278-64aa-44f2-9b69-60d61fc1f5f5",
        CARE_PROVISION = "CareProvision" => "1071d24e-6fe9-480f-8a20-b1825ae4d707",
        CONDITION = "Condition" => "1987c53c-7ab8-4461-9ebc-0d428744a8c0",
        CONTROL_ACT = "ControlAct" => "b35488ce-b7cd-4dd4-b4de-5f83dc55af9f",
        ENCOUNTER = "Encounter" => "54b52119-1709-4098-8911-5df6d6c84140",
        INFORM = "Inform" => "192f1768-d39e-409d-87be-5afd0ee0d1fe",
        OBSERVATION = "Observation" => "28d022c6-8a8b-47c4-9e6a-2bc67308739e",
        PROCEDURE = "Procedure" => "8cc5ef0d-3911-4d99-937f-6cfdc2a27d55",
        REGISTRATION = "Registration" => "6be8d358-f591-4a3a-9a57-1889b0147c7e",
        SUBSTANCE_ADMINISTRATION = "SubstanceAdministration" => "932a3c7e-ad77-450a-8a1f-030fc2855450",
        SUPPLY = "Supply" => "a064984f-9847-4480-8bea-dddf64b3c77c",
    }
}

key_table! {
    /// Mood concepts: whether an act happened, is intended, requested, and so on.
    pub struct ActMoodKeys {
        /// The act happened.
        EVENTOCCURRENCE = "Eventoccurrence" => "ec74541f-87c4-4327-a4b9-97f325501747",
        INTENT = "Intent" => "099bcc5e-8e2f-4d50-b509-9f9d5bbeb58e",
        PROMISE = "Promise" => "b389dedf-be61-456b-aa70-786e1a5a69e0",
        /// A proposal, e.g. a scheduled dose from a care plan.
        PROPOSE = "Propose" => "acf7baf2-221f-4bc2-8116-ceb5165be079",
        REQUEST = "Request" => "e658ca72-3b6a-4099-ab6e-7cf6861a5b61",
    }
}

key_table! {
    /// Roles an entity plays in an act (`ActParticipation.participationRole`).
    pub struct ActParticipationKeys {
        ADMITTER = "Admitter" => "a0174216-6439-4351-9483-a241a48029b7",
        ATTENDER = "Attender" => "6cbf29ad-ac51-48c9-885a-cfe3026ecf6e",
        AUTHENTICATOR = "Authenticator" => "1b2dbf82-a503-4cf4-9ecb-a8e111b4674e",
        AUTHORORIGINATOR = "Authororiginator" => "f0cb3faf-435d-4704-9217-b884f757bc14",
        CUSTODIAN = "Custodian" => "649d6d69-139c-4006-ae45-aff4649d6079",
        DESTINATION = "Destination" => "727b3624-ea62-46bb-a68b-b9e49e302eca",
        ENTRY_LOCATION = "EntryLocation" => "ac05185b-5a80-47a8-b924-060deb6d0eb2",
        INFORMANT = "Informant" => "39604248-7812-4b60-bc54-8cc1fffb1de6",
        LOCATION = "Location" => "61848557-d78d-40e5-954f-0b9c97307a04",
        PERFORMER = "Performer" => "fa5e70a4-a46e-4665-8a20-94d4d7b86fc8",
        PRODUCT = "Product" => "99e77288-cb09-4050-a8cf-385513f32f0a",
        /// The subject of the record, usually the patient.
        RECORD_TARGET = "RecordTarget" => "3f92dbee-a65e-434f-98ce-841feeb02e3f",
        REFERRER = "Referrer" => "353f9255-765e-4336-8007-1d61ab09aad6",
        RESPONSIBLE_PARTY = "ResponsibleParty" => "64474c12-b978-4bb6-a584-46dadec2d952",
        VERIFIER = "Verifier" => "f9dc5787-dd4d-42c6-a082-ac7d11956fda",
        WITNESS = "Witness" => "0b82357f-5ae0-4543-ab8e-a33e9b315bab",
    }
}

key_table! {
    /// Relationship types between two acts (`ActRelationship.relationshipType`).
    pub struct ActRelationshipTypeKeys {
        FULFILLS = "Fulfills" => "646551e1-4ae2-4bd6-b5b2-5ec5a1b6f0b4",
        HAS_COMPONENT = "HasComponent" => "78b9540f-438b-4b6f-8d83-aaf4979dbc64",
        HAS_SUBJECT = "HasSubject" => "9871c3bc-b57a-479d-a031-7b56ce06fa8f",
        REFERS_TO = "RefersTo" => "8fce259a-b46b-4b09-a9f8-7f0ad6e1aa5e",
        REPLACES = "Replaces" => "d1578637-e1cb-415e-b319-4011da033813",
    }
}
