use super::*;

// =============================================================
// Journal form
// =============================================================

#[test]
fn journal_requires_a_title_first() {
    assert_eq!(validate_journal("", "some content"), Err("Title is required"));
    assert_eq!(validate_journal("   ", "some content"), Err("Title is required"));
}

#[test]
fn journal_requires_content_second() {
    assert_eq!(validate_journal("A day", ""), Err("Content is required"));
}

#[test]
fn journal_accepts_both_fields_populated() {
    assert_eq!(validate_journal("A day", "It went fine."), Ok(()));
}

// =============================================================
// Email form
// =============================================================

#[test]
fn email_requires_a_recipient_first() {
    assert_eq!(validate_email_form("", "hi", "body"), Err("Recipient email is required"));
}

#[test]
fn email_rejects_malformed_recipients_before_other_fields() {
    assert_eq!(
        validate_email_form("not-an-address", "", ""),
        Err("Please enter a valid email address")
    );
}

#[test]
fn email_checks_subject_then_body() {
    assert_eq!(validate_email_form("a@b.com", " ", "body"), Err("Subject is required"));
    assert_eq!(validate_email_form("a@b.com", "hi", ""), Err("Email body is required"));
    assert_eq!(validate_email_form("a@b.com", "hi", "body"), Ok(()));
}

// =============================================================
// Credentials
// =============================================================

#[test]
fn credentials_require_username_then_password() {
    assert_eq!(validate_credentials("", "pw"), Err("Username is required"));
    assert_eq!(validate_credentials("ram", ""), Err("Password is required"));
    assert_eq!(validate_credentials("ram", "pw"), Ok(()));
}

// =============================================================
// Email shape
// =============================================================

#[test]
fn accepts_common_addresses() {
    assert!(is_valid_email("a@b.com"));
    assert!(is_valid_email("first.last@sub.domain.org"));
    assert!(is_valid_email("user+tag@example.co"));
}

#[test]
fn rejects_missing_or_duplicate_at_signs() {
    assert!(!is_valid_email("plainaddress"));
    assert!(!is_valid_email("a@@b.com"));
    assert!(!is_valid_email("a@b@c.com"));
}

#[test]
fn rejects_whitespace_and_undotted_domains() {
    assert!(!is_valid_email("a b@c.com"));
    assert!(!is_valid_email(" a@b.com"));
    assert!(!is_valid_email("a@localhost"));
    assert!(!is_valid_email("a@.com"));
    assert!(!is_valid_email("@b.com"));
}
