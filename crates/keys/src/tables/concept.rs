key_table! {
    /// Concept classes (`Concept.conceptClass`).
    pub struct ConceptClassKeys {
        CLASS_CODE = "ClassCode" => "17fd5254-8c25-4abb-b246-083fbe9afa15",
        DIAGNOSIS = "Diagnosis" => "92cdea39-b9a3-4a5b-bc88-a6646c74240d",
        FINDING = "Finding" => "e445e207-60a3-401a-9b81-a8ac2479f9a6",
        FORM = "Form" => "17ee5254-8c25-4abb-b246-083fbe9afa15",
        MATERIAL = "Material" => "dc9cbc32-b8ea-4144-bef1-dc618e28f4d7",
        OTHER = "Other" => "0d6b3439-c9be-4480-af39-eeb457c052d0",
        PROBLEM = "Problem" => "4bd7f8e6-e4b8-4dbc-93a7-cf14fbaf9700",
        RELATIONSHIP = "Relationship" => "f51dfdcd-039b-4e1f-90be-3cf56aef8da4",
        ROUTE = "Route" => "a8a900d3-a07e-4e02-b45f-580d09baf047",
        STATUS = "Status" => "54b93182-fc19-47a2-82c6-089fd70a4f45",
        STOCK = "Stock" => "ffd8304a-43ec-4ebc-95fc-fb4a4f2338f0",
        UNIT_OF_MEASURE = "UnitOfMeasure" => "1ef69347-ef03-4ff7-b3c5-6334448845e6",
    }
}

key_table! {
    /// Relationship types between concepts (`ConceptRelationship.relationshipType`).
    pub struct ConceptRelationshipTypeKeys {
        INVERSE_OF = "InverseOf" => "ad27293d-433c-4b75-88d2-b5360cd95450",
        MEMBER_OF = "MemberOf" => "a159d45b-3c34-4e0a-9d5b-d2e6e9c61a57",
        NEGATION_OF = "NegationOf" => "ae8b4f2f-009f-4e0d-b35e-5a89555c5947",
        SAME_AS = "SameAs" => "2c4dafc2-566a-41ae-9ebc-3097d7d22f4a",
    }
}
