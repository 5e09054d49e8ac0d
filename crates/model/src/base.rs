//! Abstract bases of the record hierarchy.
//!
//! These are constructible like any other record; concrete records re-list their fields.

use crate::security::SecurityUser;
use crate::AnyModel;
use sdb_types::Key;

record! {
    /// Root of every record: a key, a change token and a modification time.
    pub struct IdentifiedData {
        /// Primary key.
        id: Key = "id",
        /// Opaque change token.
        etag: String = "etag",
        modified_on: String = "modifiedOn",
    }
}

record! {
    /// Adds creation and obsoletion audit fields.
    pub struct BaseEntityData {
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
    }
}

record! {
    /// Audit fields for records that are updated in place.
    pub struct NonVersionedEntityData {
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
    }
}

record! {
    /// Audit and version-chain fields for records that keep history.
    pub struct VersionedEntityData {
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
    }
}

record! {
    /// A component that belongs to a source record.
    pub struct Association {
        /// Primary key.
        id: Key = "id",
        /// Opaque change token.
        etag: String = "etag",
        modified_on: String = "modifiedOn",
        /// Key of the record that owns this association.
        source: Key = "source",
        source_model: AnyModel = "sourceModel",
    }
}

record! {
    /// An association bounded by the source record's version sequence.
    ///
    /// The component is in force from `effectiveVersionSequence` up to, but not including,
    /// `obsoleteVersionSequence`.
    pub struct VersionedAssociation {
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
    }
}
