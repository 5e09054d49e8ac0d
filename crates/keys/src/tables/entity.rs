//! Entity classification tables.

key_table! {
    /// Entity class concepts (`Entity.classConcept`).
    ///
    /// Several values are also used as address component types (`Country`, `State`,
    /// `CountyOrParish`, `Precinct`) and as a relationship type (`Provider`).
    pub struct EntityClassKeys {
        ANIMAL = "Animal" => "61fcbf42-b5e0-4fb5-9392-108a5c6dbec7",
        CHEMICAL_SUBSTANCE = "ChemicalSubstance" => "2e9fa332-9391-48c6-9fc8-920a750b25d3",
        CITY_OR_TOWN = "CityOrTown" => "79dd4f75-68e8-4722-a7f5-8bc2e08f5cd6",
        CONTAINER = "Container" => "b76ff324-b174-40b7-a6ac-d1fdf8e23967",
        COUNTRY = "Country" => "48b2ffb3-07db-47ba-ad73-fc8fb8502471",
        COUNTY_OR_PARISH = "CountyOrParish" => "d9489d56-ddac-4596-b5c6-8f41d73d8dc5",
        DEVICE = "Device" => "1373ff04-a6ef-420a-b1d0-4a07465fe8e8",
        ENTITY = "Entity" => "e29fcfad-ec1d-4c60-a055-039a494248ae",
        FOOD = "Food" => "e5a09cc2-5ae5-40c2-8e32-687dba06715d",
        LIVING_SUBJECT = "LivingSubject" => "8ba5e5c9-693b-49d4-973c-d7010f3a23ee",
        MANUFACTURED_MATERIAL = "ManufacturedMaterial" => "fafec286-89d5-420b-9085-054aca9d1eef",
        MATERIAL = "Material" => "d39073be-0f8f-440e-b8c8-7034cc138a95",
        NON_LIVING_SUBJECT = "NonLivingSubject" => "9025e5c9-693b-49d4-973c-d7010f3a23ee",
        ORGANIZATION = "Organization" => "7c08bd55-4d42-49cd-92f8-6388d6c4183f",
        PATIENT = "Patient" => "bacd9c6f-3fa9-481e-9636-37457962804d",
        PERSON = "Person" => "9de2a846-ddf2-4ebc-902e-84508c5089ea",
        PLACE = "Place" => "21ab7873-8ef3-4d78-9c19-4582b3c40631",
        PRECINCT = "Precinct" => "acafe0f2-e209-43bb-8633-3665fd7c90ba",
        PROVIDER = "Provider" => "6b04fed8-c164-469c-910b-f824c2bda4f0",
        SERVICE_DELIVERY_LOCATION = "ServiceDeliveryLocation" => "ff34dfa7-c6d3-4f8b-bc9f-14bcdc13ba6c",
        STATE = "State" => "8cf4b0b0-84e5-4122-85fe-6afa8240c218",
    }
}

key_table! {
    /// Relationship types between two entities (`EntityRelationship.relationshipType`).
    ///
    /// `HealthcareProvider` shares its value with `EntityClassKeys::PROVIDER` and `Replaces`
    /// shares its value with `ActRelationshipTypeKeys::REPLACES`. Both are kept as published.
    pub struct EntityRelationshipTypeKeys {
        BIRTHPLACE = "Birthplace" => "f3ef7e48-d8b7-4030-b431-aff7e0e1cb76",
        CHILD = "Child" => "739457d0-835a-4a9c-811c-42b5e92ed1ca",
        CITIZEN = "Citizen" => "35b13152-e43c-4bcb-8649-a9e83bee33a2",
        DEDICATED_SERVICE_DELIVERY_LOCATION = "DedicatedServiceDeliveryLocation" => "455f1772-f580-47e8-86bd-b5ce25d351f9",
        EMPLOYEE = "Employee" => "b43c9513-1c1c-4ed0-92db-55a904c122e6",
        FATHER = "Father" => "40d18ecc-8ff8-4e03-8e58-97a980f04060",
        HEALTHCARE_PROVIDER = "HealthcareProvider" => "6b04fed8-c164-469c-910b-f824c2bda4f0",
        INSTANCE = "Instance" => "ac45a740-b0c7-4425-84d8-b3f8a41fef9f",
        MANUFACTURED_PRODUCT = "ManufacturedProduct" => "6780df3b-afbd-44a3-8627-cbb3dc2f02f6",
        MOTHER = "Mother" => "29ff64e5-b564-411a-92c7-6818c02a9e48",
        NEXT_OF_KIN = "NextOfKin" => "1ee4e74f-542d-4544-96f6-266a6247f274",
        PARENT = "Parent" => "bfcbb345-86db-43ba-b47e-e7411276ac7c",
        REPLACES = "Replaces" => "d1578637-e1cb-415e-b319-4011da033813",
        SCOPER = "Scoper" => "fcd37959-5bc2-48db-bbb5-36afd9edf19a",
    }
}

key_table! {
    /// Whether an entity is a specific instance or a kind.
    pub struct DeterminerKeys {
        /// A kind of thing ("a vial of vaccine").
        DESCRIBED = "Described" => "ad28a7ac-a66b-42c4-91b4-de40a2b11980",
        DESCRIBED_QUALIFIED = "DescribedQualified" => "604cf1b7-8891-49fb-b95f-3e4e875691bc",
        /// One identifiable thing ("this vial").
        SPECIFIC = "Specific" => "f29f08de-78a7-4a5e-aeaf-7b545ba19a09",
    }
}

key_table! {
    pub struct AdministrativeGenderConceptKeys {
        FEMALE = "Female" => "094941e9-a3db-48b5-862c-bc289bd7f86c",
        MALE = "Male" => "f4e3a6bb-612e-46b2-9f77-ff844d971198",
        UNDIFFERENTIATED = "Undifferentiated" => "ae94a782-1485-4241-9bca-5b09db2156bf",
    }
}
