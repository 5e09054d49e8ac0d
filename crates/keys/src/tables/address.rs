key_table! {
    /// Address component types (`EntityAddressComponent.type`).
    ///
    /// Geographic levels reuse the matching `EntityClassKeys` values.
    pub struct AddressComponentKeys {
        ADDITIONAL_LOCATOR = "AdditionalLocator" => "d2312b8e-bdfb-4012-9397-f14336f8d206",
        ADDRESS_LINE = "AddressLine" => "4f342d28-8850-4daf-8bca-0b44a255f7ed",
        BUILDING_NUMBER = "BuildingNumber" => "f3c86e99-8afc-4947-9dc6-fae4b4a3d7b8",
        COUNTRY = "Country" => "48b2ffb3-07db-47ba-ad73-fc8fb8502471",
        COUNTY = "County" => "d9489d56-ddac-4596-b5c6-8f41d73d8dc5",
        POSTAL_CODE = "PostalCode" => "78a47122-f9bf-450f-a93f-90a103c5f1e8",
        PRECINCT = "Precinct" => "acafe0f2-e209-43bb-8633-3665fd7c90ba",
        STATE = "State" => "8cf4b0b0-84e5-4122-85fe-6afa8240c218",
    }
}

key_table! {
    /// Uses of an address (`EntityAddress.use`).
    pub struct AddressUseKeys {
        ALPHABETIC = "Alphabetic" => "71d1c07c-6ee6-4240-8a95-19f96583512e",
        BAD_ADDRESS = "BadAddress" => "f3132fc0-aadd-40b7-b875-961c40695389",
        DIRECT = "Direct" => "d0db6246-e1a5-4d1d-b5df-0ee8a6eba337",
        HOME_ADDRESS = "HomeAddress" => "493c3e9d-4f65-4e4d-9582-c9008f4f2eb4",
        IDEOGRAPHIC = "Ideographic" => "09000479-4672-44f8-bb4a-72fb25f7356a",
        PHONETIC = "Phonetic" => "2b085d38-3308-4664-9f89-48d8ef4daba7",
        PHYSICAL_VISIT = "PhysicalVisit" => "5724a9b6-24b6-43b7-8075-7a0d61fcb814",
        POSTAL_ADDRESS = "PostalAddress" => "7246e98d-20c6-4ae6-85ad-4aa09649feb7",
        PRIMARY_HOME = "PrimaryHome" => "c4faafd8-fc90-4330-8b4b-e4e64c86b87b",
        PUBLIC = "Public" => "ec35ea7c-55d2-4619-a56b-f7a986412f7f",
        SEARCH = "Search" => "87964bff-e442-481d-9749-69b2a84a1fbe",
        SOUNDEX = "Soundex" => "e5794e3b-3025-436f-9417-5886feead55a",
        SYLLABIC = "Syllabic" => "b4ca3bf0-a7fc-44f3-87d5-e126beda93ff",
        TEMPORARY_ADDRESS = "TemporaryAddress" => "cef6ea31-a097-4f59-8723-a38c727c6597",
        VACATION_HOME = "VacationHome" => "5d69534c-4597-4d11-bc9c-4de5b10f6c2e",
        WORK_PLACE = "WorkPlace" => "eaa6f08e-bb8e-4457-9dc0-3a1555fadf5c",
    }
}

key_table! {
    /// Uses of a telecom address (`EntityTelecomAddress.use`).
    pub struct TelecomAddressUseKeys {
        ANSWERING_SERVICE = "AnsweringService" => "1ecd7b17-b5ff-4cae-9c3b-c1258132d137",
        EMERGENCY_CONTACT = "EmergencyContact" => "25985f42-476a-4455-a977-4e97a554d710",
        HOME_ADDRESS = "HomeAddress" => "493c3e9d-4f65-4e4d-9582-c9008f4f2eb4",
        MOBILE_CONTACT = "MobileContact" => "e161f90e-5939-430e-861a-f8e885cc353d",
        PAGER = "Pager" => "788000b4-e37a-4055-a2aa-c650089ce3b1",
        PUBLIC = "Public" => "ec35ea7c-55d2-4619-a56b-f7a986412f7f",
        TEMPORARY_ADDRESS = "TemporaryAddress" => "cef6ea31-a097-4f59-8723-a38c727c6597",
        WORK_PLACE = "WorkPlace" => "eaa6f08e-bb8e-4457-9dc0-3a1555fadf5c",
    }
}
