//! Security principals and policies.

use sdb_types::Key;
use serde_json::Value;

use crate::AnyModel;

record! {
    /// A security principal (a user account).
    pub struct SecurityUser {
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
        user_name: String = "userName",
        email: String = "email",
        email_confirmed: bool = "emailConfirmed",
        invalid_login_attempts: i32 = "invalidLoginAttempts",
        /// Time until which the account is locked.
        lockout: String = "lockout",
        phone_number: String = "phoneNumber",
        phone_number_confirmed: bool = "phoneNumberConfirmed",
        last_login_time: String = "lastLoginTime",
        two_factor_enabled: bool = "twoFactorEnabled",
        security_stamp: String = "securityStamp",
        user_class: Key = "userClass",
        role: Vec<SecurityRole> = "role",
    }
}

record! {
    /// A named group of users sharing policies.
    pub struct SecurityRole {
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
        description: String = "description",
        policy: Vec<SecurityPolicyInstance> = "policy",
    }
}

record! {
    pub struct SecurityApplication {
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
        lockout: String = "lockout",
        invalid_auth_attempts: i32 = "invalidAuthAttempts",
        last_authentication_time: String = "lastAuthenticationTime",
        policy: Vec<SecurityPolicyInstance> = "policy",
    }
}

record! {
    pub struct SecurityDevice {
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
        lockout: String = "lockout",
        invalid_auth_attempts: i32 = "invalidAuthAttempts",
        last_authentication_time: String = "lastAuthenticationTime",
        policy: Vec<SecurityPolicyInstance> = "policy",
    }
}

record! {
    /// A policy that can be granted or denied to principals.
    pub struct SecurityPolicy {
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
        is_public: bool = "isPublic",
        can_override: bool = "canOverride",
        handler: String = "handler",
    }
}

record! {
    /// A policy applied to a principal or a record, with its grant decision.
    pub struct SecurityPolicyInstance {
        /// Primary key.
        id: Key = "id",
        /// Opaque change token.
        etag: String = "etag",
        modified_on: String = "modifiedOn",
        /// Key of the record that owns this association.
        source: Key = "source",
        source_model: AnyModel = "sourceModel",
        policy: Key = "policy",
        policy_model: Box<SecurityPolicy> = "policyModel",
        /// Grant decision as sent: a name (`"Grant"`) or a numeric code.
        grant: Value = "grant",
    }
}
