use serde::{Deserialize, Serialize};
use std::fmt;

/// Email address value object.
///
/// # Invariants
/// - Has the shape `local@domain` with a non-empty part on each side
/// - Immutable after construction
///
/// # Example
/// ```
/// use crowsnest_api::domain::user::value_objects::Email;
///
/// let email = Email::parse("rep@northwind.io").expect("valid email");
/// assert_eq!(email.as_str(), "rep@northwind.io");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Email(String);

impl Email {
    /// Parses a raw string into an `Email`.
    pub fn parse(raw: impl Into<String>) -> Result<Self, String> {
        let raw = raw.into();
        match raw.split_once('@') {
            Some((local, domain)) if !local.is_empty() && !domain.is_empty() => Ok(Email(raw)),
            _ => Err(format!("invalid email address: {raw}")),
        }
    }

    /// Returns the address as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_plain_address() {
        assert!(Email::parse("rep@northwind.io").is_ok());
    }

    #[test]
    fn accepts_subdomains() {
        assert!(Email::parse("sales@mail.northwind.io").is_ok());
    }

    #[test]
    fn rejects_missing_at_sign() {
        assert!(Email::parse("northwind.io").is_err());
    }

    #[test]
    fn rejects_empty_local_part() {
        assert!(Email::parse("@northwind.io").is_err());
    }

    #[test]
    fn rejects_empty_domain() {
        assert!(Email::parse("rep@").is_err());
    }

    #[test]
    fn rejects_empty_string() {
        assert!(Email::parse("").is_err());
    }

    #[test]
    fn displays_raw_address() {
        let email = Email::parse("rep@northwind.io").unwrap();
        assert_eq!(email.to_string(), "rep@northwind.io");
    }
}
