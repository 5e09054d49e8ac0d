//! Status and null-flavour concepts.

key_table! {
    /// Status concepts carried in `statusConcept` of acts, entities and concepts.
    pub struct StatusKeys {
        /// The record is in force.
        ACTIVE = "Active" => "c8064cbd-fa06-4530-b430-1a52f1530c27",
        CANCELLED = "Cancelled" => "3efd3b6e-02d5-4cc9-9088-ef8f31e321c8",
        COMPLETED = "Completed" => "afc33800-8225-4061-b168-bacc09cdbae3",
        INACTIVE = "Inactive" => "0bbec253-21a1-49cb-b376-7fe4d0592cda",
        NEW = "New" => "c34fcbf1-e0fe-4989-90fd-0dc49e1b9685",
        /// Entered in error.
        NULLIFIED = "Nullified" => "cd4aa3c4-02d5-4cc9-9088-ef8f31e321c5",
        /// Superseded by a newer record.
        OBSOLETE = "Obsolete" => "bdef5f90-5497-4f26-956c-8f818cce2bd2",
        PURGED = "Purged" => "39995c08-0a5c-4549-8ba7-d187f9b3c4fd",
    }
}

key_table! {
    /// Reasons a value is absent.
    pub struct NullReasonKeys {
        MASKED = "Masked" => "9b16bf12-073e-4ea4-b6c5-e1b93e8fd490",
        NO_INFORMATION = "NoInformation" => "61d8f65c-747e-4a99-982f-a42ac5437473",
        NOT_APPLICABLE = "NotApplicable" => "fea2cfb1-f231-413d-b111-372b525a8b5b",
        UNKNOWN = "Unknown" => "70fe34ce-caff-4f46-b6e6-9cd6d8f289d6",
    }
}
