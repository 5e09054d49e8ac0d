use crate::AnyModel;
use sdb_types::{Key, OneOrMany};

record! {
    /// A page of results.
    ///
    /// `item` holds the records of the page, `entry` the keys of the focal records among them;
    /// `count`, `offset` and `totalResults` describe the page within the whole result set.
    pub struct Bundle {
        /// Primary key.
        id: Key = "id",
        /// Opaque change token.
        etag: String = "etag",
        modified_on: String = "modifiedOn",
        item: Vec<AnyModel> = "item",
        entry: OneOrMany<Key> = "entry",
        count: i64 = "count",
        offset: i64 = "offset",
        total_results: i64 = "totalResults",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Model, Patient, Record};
    use serde_json::json;

    fn page() -> serde_json::Value {
        json!({
            "$type": "Bundle",
            "item": [
                { "$type": "Patient", "id": "p1", "dateOfBirth": "2000-01-01" },
                { "$type": "Organization", "id": "o1" },
                { "$type": "Concept", "id": "c1", "mnemonic": "Female" }
            ],
            "entry": "p1",
            "count": 3,
            "offset": 0,
            "totalResults": 41
        })
    }

    #[test]
    fn mixed_items_keep_their_types() {
        let bundle = Bundle::copy_from(&page());
        let items = bundle.item.as_ref().expect("items");
        let types: Vec<_> = items.iter().map(AnyModel::type_name).collect();
        assert_eq!(types, [Some("Patient"), Some("Organization"), Some("Concept")]);
        assert_eq!(bundle.total_results, Some(41));
        assert_eq!(bundle.entry, Some(OneOrMany::One(Key::from("p1"))));

        match items[0].record() {
            Some(Model::Patient(patient)) => {
                assert_eq!(patient, &Patient::copy_from(&page()["item"][0]));
            }
            other => panic!("expected Patient, got {other:?}"),
        }
    }

    #[test]
    fn bundle_round_trips_through_json() {
        let bundle = Bundle::copy_from(&page());
        assert_eq!(bundle.to_value().expect("value"), page());
    }

    #[test]
    fn unrecognised_items_are_kept_with_their_siblings() {
        let source = json!({
            "item": [
                { "$type": "Patient", "id": "a" },
                { "id": "b" },
                { "$type": "Spaceship", "id": "c" },
                { "$type": "Patient", "multipleBirthOrder": "second" }
            ],
            "count": 4
        });
        let bundle = Bundle::copy_from(&source);
        let items = bundle.item.as_ref().expect("items kept");
        assert_eq!(items.len(), 4);
        assert!(items[0].record().is_some());
        assert!(items[1..].iter().all(|item| item.record().is_none()));

        let value = bundle.to_value().expect("value");
        assert_eq!(value["item"], source["item"]);
        assert_eq!(value["count"], json!(4));
    }
}
