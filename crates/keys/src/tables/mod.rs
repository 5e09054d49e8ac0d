mod act;
mod address;
mod concept;
mod entity;
mod formats;
mod name;
mod security;
mod status;

pub use act::{ActClassKeys, ActMoodKeys, ActParticipationKeys, ActRelationshipTypeKeys};
pub use address::{AddressComponentKeys, AddressUseKeys, TelecomAddressUseKeys};
pub use concept::{ConceptClassKeys, ConceptRelationshipTypeKeys};
pub use entity::{
    AdministrativeGenderConceptKeys, DeterminerKeys, EntityClassKeys, EntityRelationshipTypeKeys,
};
pub use formats::DatePrecisionFormats;
pub use name::{NameComponentKeys, NameUseKeys, PhoneticAlgorithmKeys};
pub use security::UserClassKeys;
pub use status::{NullReasonKeys, StatusKeys};
