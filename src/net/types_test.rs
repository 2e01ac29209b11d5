use chrono::NaiveDate;

use super::*;

#[test]
fn credentials_serialize_with_backend_field_names() {
    let creds = Credentials { user_name: "ram".to_owned(), password: "secret".to_owned() };
    let json = serde_json::to_value(&creds).expect("serialize");
    assert_eq!(json, serde_json::json!({"userName":"ram","password":"secret"}));
}

#[test]
fn journal_entry_parses_backend_shape() {
    let entry: JournalEntry = serde_json::from_str(
        r#"{"id":"66b2","title":"Trip","content":"Long day.","date":"2024-03-05T10:15:30"}"#,
    )
    .expect("deserialize");

    assert_eq!(entry.id, "66b2");
    assert_eq!(entry.title, "Trip");
    let date = entry.date.expect("date");
    assert_eq!(
        date,
        NaiveDate::from_ymd_opt(2024, 3, 5)
            .unwrap()
            .and_hms_opt(10, 15, 30)
            .unwrap()
    );
}

#[test]
fn journal_entry_tolerates_missing_fields() {
    let entry: JournalEntry = serde_json::from_str(r#"{"id":"66b2"}"#).expect("deserialize");
    assert!(entry.title.is_empty());
    assert!(entry.content.is_empty());
    assert!(entry.date.is_none());
}

#[test]
fn user_account_parses_roles_when_present() {
    let account: UserAccount =
        serde_json::from_str(r#"{"userName":"admin","roles":["USER","ADMIN"]}"#)
            .expect("deserialize");
    assert_eq!(account.user_name, "admin");
    assert_eq!(account.roles, vec!["USER", "ADMIN"]);
}
