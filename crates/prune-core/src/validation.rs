//! Compose request validation.
//!
//! Runs before any request is dispatched; a rejected request never reaches
//! the network.

use std::collections::BTreeMap;

use crate::model::EmailRequest;

/// Validation error for a compose request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValidationError {
    /// Recipient is empty.
    EmptyTo,
    /// Recipient is not a valid address.
    InvalidTo,
    /// Subject is empty.
    EmptySubject,
    /// Body is empty.
    EmptyBody,
    /// Draft has neither a recipient nor a subject.
    EmptyDraft,
}

impl ValidationError {
    /// Get human-readable error message.
    #[must_use]
    pub const fn message(&self) -> &'static str {
        match self {
            Self::EmptyTo => "Recipient is required",
            Self::InvalidTo => "Invalid email address format",
            Self::EmptySubject => "Subject is required",
            Self::EmptyBody => "Message body is required",
            Self::EmptyDraft => "A draft needs a recipient or a subject",
        }
    }

    /// Get the field name this error relates to.
    #[must_use]
    pub const fn field(&self) -> &'static str {
        match self {
            Self::EmptyTo | Self::InvalidTo | Self::EmptyDraft => "to",
            Self::EmptySubject => "subject",
            Self::EmptyBody => "body",
        }
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for ValidationError {}

/// Result of validating a request.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// Validate a request for sending.
///
/// Recipient, subject and body are required (non-empty; whitespace counts)
/// and the recipient must be a syntactically valid address. CC and BCC are
/// not checked.
///
/// # Errors
///
/// Returns a vector of `ValidationError` if any fields are invalid.
pub fn validate_send(request: &EmailRequest) -> ValidationResult {
    let mut errors = Vec::new();

    if request.to.is_empty() {
        errors.push(ValidationError::EmptyTo);
    } else if !is_valid_email(&request.to) {
        errors.push(ValidationError::InvalidTo);
    }

    if request.subject.is_empty() {
        errors.push(ValidationError::EmptySubject);
    }

    if request.body.is_empty() {
        errors.push(ValidationError::EmptyBody);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Validate a request for saving as a draft.
///
/// Looser than [`validate_send`]: a draft only needs a
/// recipient or a subject, and neither is checked for format.
///
/// # Errors
///
/// Returns `EmptyDraft` if both recipient and subject are empty.
pub fn validate_draft(request: &EmailRequest) -> ValidationResult {
    if request.to.is_empty() && request.subject.is_empty() {
        Err(vec![ValidationError::EmptyDraft])
    } else {
        Ok(())
    }
}

/// Collapse errors into a field → message mapping.
///
/// When a field has several errors the first one wins.
#[must_use]
pub fn field_messages(errors: &[ValidationError]) -> BTreeMap<&'static str, &'static str> {
    let mut map = BTreeMap::new();
    for error in errors {
        map.entry(error.field()).or_insert_with(|| error.message());
    }
    map
}

/// Basic email validation.
///
/// Accepts `local@domain` where the local part uses the usual address
/// characters and the domain is one or more hostname labels, so
/// `admin@localhost` is valid. Surrounding whitespace is ignored.
#[must_use]
pub fn is_valid_email(email: &str) -> bool {
    let email = email.trim();

    // Must contain exactly one @
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if domain.contains('@') {
        return false;
    }

    if local.is_empty() || !local.chars().all(is_local_char) {
        return false;
    }

    !domain.is_empty() && domain.split('.').all(is_domain_label)
}

fn is_local_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || ".!#$%&'*+/=?^_`{|}~-".contains(c)
}

fn is_domain_label(label: &str) -> bool {
    !label.is_empty()
        && label.len() <= 63
        && !label.starts_with('-')
        && !label.ends_with('-')
        && label.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn valid_request() -> EmailRequest {
        EmailRequest::new("john.doe@example.com", "Hello", "Body text")
    }

    #[test]
    fn test_valid_email() {
        assert!(is_valid_email("user@example.com"));
        assert!(is_valid_email("user.name@example.com"));
        assert!(is_valid_email("user@sub.example.com"));
        assert!(is_valid_email("  user@example.com  "));
        assert!(is_valid_email("admin@localhost"));
        assert!(is_valid_email("first+tag@mail-relay.example.org"));
    }

    #[test]
    fn test_invalid_email() {
        assert!(!is_valid_email(""));
        assert!(!is_valid_email("user"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("user@"));
        assert!(!is_valid_email("user@-example.com"));
        assert!(!is_valid_email("user@example.com."));
        assert!(!is_valid_email("user@@example.com"));
        assert!(!is_valid_email("user@example..com"));
        assert!(!is_valid_email("us er@example.com"));
    }

    #[test]
    fn test_validate_complete_request() {
        assert!(validate_send(&valid_request()).is_ok());
    }

    #[test]
    fn test_validate_empty_request() {
        let errors = validate_send(&EmailRequest::default()).unwrap_err();
        assert_eq!(
            errors,
            vec![
                ValidationError::EmptyTo,
                ValidationError::EmptySubject,
                ValidationError::EmptyBody
            ]
        );
    }

    #[test]
    fn test_validate_invalid_recipient() {
        let mut request = valid_request();
        request.to = "not-an-address".to_string();
        let errors = validate_send(&request).unwrap_err();
        assert_eq!(errors, vec![ValidationError::InvalidTo]);
    }

    #[test]
    fn test_field_messages() {
        let errors = validate_send(&EmailRequest::default()).unwrap_err();
        let map = field_messages(&errors);
        assert_eq!(map.len(), 3);
        assert_eq!(map["to"], "Recipient is required");
        assert_eq!(map["subject"], "Subject is required");
        assert_eq!(map["body"], "Message body is required");
    }

    #[test]
    fn test_draft_needs_to_or_subject() {
        assert!(validate_draft(&EmailRequest::default()).is_err());
        assert!(validate_draft(&EmailRequest::new("x", "", "")).is_ok());
        assert!(validate_draft(&EmailRequest::new("", "Plans", "")).is_ok());
        assert!(validate_draft(&EmailRequest::new("  ", "", "a body")).is_ok());
        assert!(validate_draft(&EmailRequest::new("", "", "a body")).is_err());
    }

    #[test]
    fn test_whitespace_counts_as_present_on_send() {
        let request = EmailRequest::new("admin@localhost", " ", "\n");
        assert!(validate_send(&request).is_ok());

        let errors = validate_send(&EmailRequest::new("   ", "s", "b")).unwrap_err();
        assert_eq!(errors, vec![ValidationError::InvalidTo]);
    }

    fn address() -> impl Strategy<Value = String> {
        ("[a-z][a-z0-9.]{0,10}", "[a-z]{1,10}", "[a-z]{2,4}")
            .prop_map(|(local, host, tld)| format!("{local}@{host}.{tld}"))
    }

    proptest! {
        #[test]
        fn prop_well_formed_requests_pass(
            to in address(),
            subject in "[A-Za-z0-9][A-Za-z0-9 ]{0,30}",
            body in "[A-Za-z0-9][A-Za-z0-9 \n]{0,80}",
            cc in "[ -~]{0,20}",
            is_html in any::<bool>(),
        ) {
            let request = EmailRequest::new(to, subject, body).cc(cc).html(is_html);
            prop_assert!(validate_send(&request).is_ok());
        }

        #[test]
        fn prop_recipient_without_at_is_rejected(
            to in "[a-z0-9.]{0,20}",
            subject in "[A-Za-z]{1,20}",
            body in "[A-Za-z]{1,20}",
        ) {
            let request = EmailRequest::new(to, subject, body);
            let errors = validate_send(&request).unwrap_err();
            prop_assert!(errors.iter().all(|e| e.field() == "to"));
        }

        #[test]
        fn prop_draft_ignores_other_fields(
            to in "[ -~]{0,20}",
            subject in "[ -~]{0,20}",
            body in "[ -~]{0,40}",
            cc in "[ -~]{0,20}",
            bcc in "[ -~]{0,20}",
        ) {
            let request = EmailRequest::new(to.clone(), subject.clone(), body).cc(cc).bcc(bcc);
            let expected = !to.is_empty() || !subject.is_empty();
            prop_assert_eq!(validate_draft(&request).is_ok(), expected);
        }
    }
}
