//! Client-side form validation.
//!
//! Checks run in field order before any network call; the returned
//! messages are the exact strings shown in the inline banner.

#[cfg(test)]
#[path = "validate_test.rs"]
mod validate_test;

/// Validate the journal entry form.
pub fn validate_journal(title: &str, content: &str) -> Result<(), &'static str> {
    if title.trim().is_empty() {
        return Err("Title is required");
    }
    if content.trim().is_empty() {
        return Err("Content is required");
    }
    Ok(())
}

/// Validate the outbound email form: recipient presence and shape
/// first, then subject, then body.
pub fn validate_email_form(to: &str, subject: &str, body: &str) -> Result<(), &'static str> {
    if to.trim().is_empty() {
        return Err("Recipient email is required");
    }
    if !is_valid_email(to) {
        return Err("Please enter a valid email address");
    }
    if subject.trim().is_empty() {
        return Err("Subject is required");
    }
    if body.trim().is_empty() {
        return Err("Email body is required");
    }
    Ok(())
}

/// Validate the login/signup form.
pub fn validate_credentials(user_name: &str, password: &str) -> Result<(), &'static str> {
    if user_name.trim().is_empty() {
        return Err("Username is required");
    }
    if password.is_empty() {
        return Err("Password is required");
    }
    Ok(())
}

/// Loose shape check: exactly one `@`, no whitespace, dotted domain.
pub fn is_valid_email(address: &str) -> bool {
    if address.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = address.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    match domain.split_once('.') {
        Some((host, rest)) => !host.is_empty() && !rest.is_empty(),
        None => false,
    }
}
