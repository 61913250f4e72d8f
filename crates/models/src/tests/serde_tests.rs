use chrono::{TimeZone, Utc};
use serde_json::json;

use crate::restaurant::{Model, RestaurantCreate, RestaurantUpdate};

#[test]
fn model_serializes_address_field() {
    let ts = Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap().into();
    let m = Model { id: 7, name: "Tani".into(), address: "10 Pham Van Dong".into(), created_at: ts, updated_at: ts };
    let v = serde_json::to_value(&m).unwrap();
    assert_eq!(v["id"], 7);
    assert_eq!(v["name"], "Tani");
    assert_eq!(v["address"], "10 Pham Van Dong");
    assert!(v.get("addr").is_none());
}

#[test]
fn create_accepts_legacy_addr_and_ignores_id() {
    let c: RestaurantCreate = serde_json::from_value(json!({"id": 99, "name": "Tani", "addr": "x"})).unwrap();
    assert_eq!(c, RestaurantCreate { name: "Tani".into(), address: "x".into() });
}

#[test]
fn create_requires_both_fields() {
    assert!(serde_json::from_value::<RestaurantCreate>(json!({"name": "Tani"})).is_err());
    assert!(serde_json::from_value::<RestaurantCreate>(json!({"address": "x"})).is_err());
}

#[test]
fn update_distinguishes_missing_from_empty() {
    let u: RestaurantUpdate = serde_json::from_value(json!({"name": ""})).unwrap();
    assert_eq!(u.name.as_deref(), Some(""));
    assert_eq!(u.address, None);
    assert!(!u.is_empty());

    let u: RestaurantUpdate = serde_json::from_value(json!({})).unwrap();
    assert!(u.is_empty());

    let u: RestaurantUpdate = serde_json::from_value(json!({"address": null})).unwrap();
    assert!(u.is_empty());
}
