// crates/common/tests/lib.rs
use accounts_common::{ChangePassword, Credentials, UpdatePassword, UserRecord};
use serde_json::json;

#[test]
fn test_user_record_field_names() {
    let record = UserRecord {
        name: "alice".to_string(),
        password: "$scrypt$...".to_string(),
    };

    let value = serde_json::to_value(&record).unwrap();
    assert_eq!(value, json!({ "name": "alice", "password": "$scrypt$..." }));
}

#[test]
fn test_credentials_from_json() {
    let creds: Credentials =
        serde_json::from_value(json!({ "name": "alice", "password": "p1" })).unwrap();
    assert_eq!(creds.name, "alice");
    assert_eq!(creds.password, "p1");
}

#[test]
fn test_change_password_uses_camel_case() {
    let body: ChangePassword =
        serde_json::from_value(json!({ "oldPassword": "old", "newPassword": "new" })).unwrap();
    assert_eq!(body.old_password, "old");
    assert_eq!(body.new_password, "new");
}

#[test]
fn test_update_password_presence() {
    let present: UpdatePassword =
        serde_json::from_value(json!({ "newPassword": "next" })).unwrap();
    assert_eq!(present.provided(), Some("next"));

    // missing and empty both count as "not provided", like the form check
    let missing: UpdatePassword = serde_json::from_value(json!({})).unwrap();
    assert_eq!(missing.provided(), None);

    let empty: UpdatePassword = serde_json::from_value(json!({ "newPassword": "" })).unwrap();
    assert_eq!(empty.provided(), None);
}
