//! Nullable wrappers as struct fields, through `serde_json`.

use chrono::DateTime;
use nullable::{NullBool, NullFloat64, NullInt, NullString, NullTime, NullUint};
use pretty_assertions::assert_eq;
use serde::{Deserialize, Serialize};

#[derive(Debug, PartialEq, Serialize, Deserialize)]
struct Account {
    id: NullUint,
    balance: NullInt,
    rate: NullFloat64,
    owner: NullString,
    verified: NullBool,
    closed_at: NullTime,
}

fn full_account() -> Account {
    Account {
        id: NullUint::from_value(12),
        balance: NullInt::from_value(-300),
        rate: NullFloat64::from_value(0.25),
        owner: NullString::from_value("ana".to_string()),
        verified: NullBool::from_value(true),
        closed_at: NullTime::from_value(DateTime::parse_from_rfc3339("2024-05-01T10:00:00.5+02:00").unwrap()),
    }
}

fn empty_account() -> Account {
    Account {
        id: NullUint::default(),
        balance: NullInt::default(),
        rate: NullFloat64::default(),
        owner: NullString::default(),
        verified: NullBool::default(),
        closed_at: NullTime::default(),
    }
}

#[test]
fn serializes_valid_fields_as_values() {
    let json = serde_json::to_value(full_account()).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "id": 12,
            "balance": -300,
            "rate": 0.25,
            "owner": "ana",
            "verified": true,
            "closed_at": "2024-05-01T10:00:00.5+02:00",
        })
    );
}

#[test]
fn serializes_invalid_fields_as_null() {
    let json = serde_json::to_string(&empty_account()).unwrap();
    assert_eq!(
        json,
        r#"{"id":null,"balance":null,"rate":null,"owner":null,"verified":null,"closed_at":null}"#
    );
}

#[test]
fn serde_and_document_encoding_agree() {
    let account = full_account();
    assert_eq!(serde_json::to_vec(&account.balance).unwrap(), account.balance.to_document().unwrap());
    assert_eq!(serde_json::to_vec(&account.owner).unwrap(), account.owner.to_document().unwrap());
    assert_eq!(serde_json::to_vec(&account.closed_at).unwrap(), account.closed_at.to_document().unwrap());
}

#[test]
fn deserializes_back_to_equal_records() {
    for account in [full_account(), empty_account()] {
        let json = serde_json::to_string(&account).unwrap();
        let back: Account = serde_json::from_str(&json).unwrap();
        assert_eq!(back, account);
    }
}

#[test]
fn rejects_fields_of_the_wrong_kind() {
    let json = r#"{"id":-1,"balance":null,"rate":null,"owner":null,"verified":null,"closed_at":null}"#;
    let err = serde_json::from_str::<Account>(json).unwrap_err();
    assert!(err.to_string().contains("cannot convert"), "{}", err);

    let json = r#"{"id":null,"balance":null,"rate":null,"owner":null,"verified":"yes","closed_at":null}"#;
    let err = serde_json::from_str::<Account>(json).unwrap_err();
    assert!(err.to_string().contains("expected boolean or null, got string"), "{}", err);

    let json = r#"{"id":null,"balance":null,"rate":null,"owner":null,"verified":null,"closed_at":"noon"}"#;
    let err = serde_json::from_str::<Account>(json).unwrap_err();
    assert!(err.to_string().contains("cannot parse 'noon'"), "{}", err);
}
