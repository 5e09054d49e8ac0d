//! Name tables.

key_table! {
    /// Parts of a person or organisation name (`EntityNameComponent.type`).
    pub struct NameComponentKeys {
        DELIMITER = "Delimiter" => "4c6b9519-a493-44a9-80e6-32d85109b04b",
        FAMILY = "Family" => "29b98455-ed61-49f8-a161-2d73363e1df0",
        GIVEN = "Given" => "2f64bde2-a696-4b0a-9690-739a77c8a07f",
        PREFIX = "Prefix" => "a787187b-6be4-401e-8836-97fc000c5d16",
        SUFFIX = "Suffix" => "064523df-bb03-4932-9323-cdf0cc9590ba",
        TITLE = "Title" => "4386d92a-d81b-4033-b968-01e57e20d5e0",
    }
}

key_table! {
    /// Uses of a name (`EntityName.use`); also the classifier keys of `Entity.name`.
    pub struct NameUseKeys {
        ALPHABETIC = "Alphabetic" => "71d1c07c-6ee6-4240-8a95-19f96583512e",
        ANONYMOUS = "Anonymous" => "95e6843a-26ff-4046-b6f4-eb440d4b85f7",
        ARTIST = "Artist" => "4a7bf199-f33b-42f9-8b99-32433ea67bd7",
        ASSIGNED = "Assigned" => "a87a6d21-2ca6-4aea-88f3-6135cceb58d1",
        IDEOGRAPHIC = "Ideographic" => "09000479-4672-44f8-bb4a-72fb25f7356a",
        INDIGENOUS = "Indigenous" => "a3fb2a05-5ebe-47ae-afd0-4c1b22336090",
        /// The name on legal documents.
        LEGAL = "Legal" => "effe122d-8d30-491d-805d-addcb4466c35",
        LICENSE = "License" => "48075d19-7b29-4ca5-9c73-0cbd31248446",
        MAIDEN_NAME = "MaidenName" => "0674c1c8-963a-4658-aff9-8cdcd308fa68",
        OFFICIAL_RECORD = "OfficialRecord" => "1ec9583a-b019-4baa-b856-b99caf368656",
        PHONETIC = "Phonetic" => "2b085d38-3308-4664-9f89-48d8ef4daba7",
        PSEUDONYM = "Pseudonym" => "c31564ef-ca8d-4528-85a8-88245fcef344",
        RELIGIOUS = "Religious" => "15207687-5290-4672-a7df-2880a23dcbb5",
        SEARCH = "Search" => "87964bff-e442-481d-9749-69b2a84a1fbe",
        SOUNDEX = "Soundex" => "e5794e3b-3025-436f-9417-5886feead55a",
        SYLLABIC = "Syllabic" => "b4ca3bf0-a7fc-44f3-87d5-e126beda93ff",
    }
}

key_table! {
    /// Algorithms used to compute `phoneticCode` on names and components.
    pub struct PhoneticAlgorithmKeys {
        METAPHONE = "Metaphone" => "d79a4dc6-66a6-4602-8fcb-7dc09a895793",
        NONE = "None" => "402cd339-d0e4-46ce-8fc2-12a4b0e17226",
        SOUNDEX = "Soundex" => "3352a79a-d2e0-4e0c-9b48-6fd2a202c681",
    }
}
