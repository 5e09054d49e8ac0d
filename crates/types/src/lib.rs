//! Wire primitives shared by every model record.
//!
//! The records in `sdb-model` are mirrors of a server-side schema. Their field values travel as
//! JSON, and the types here keep those values in the exact shape they arrived in:
//!
//! - [`Key`]: an identifier string, normally a hyphenated UUID, kept verbatim.
//! - [`OneOrMany`]: a single value or an array of values.
//! - [`Classified`]: a collection keyed by classifier (a mnemonic such as `"Legal"` or a UUID).
//! - [`ComponentValue`]: a name/address component given either as bare text or as a full record.

mod collections;
mod key;

pub use collections::{Classified, ComponentValue, OneOrMany};
pub use key::Key;

/// Errors returned when interpreting wire primitives.
#[derive(Debug, thiserror::Error)]
pub enum KeyError {
    /// The key text is not a UUID.
    #[error("not a UUID: {0}")]
    InvalidUuid(String),
}

/// Result type for key operations.
pub type KeyResult<T> = Result<T, KeyError>;
