//! Strongly-typed keys used across the domain.

use core::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};

static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^@]+@[^@]+\.[^@]+$").expect("email pattern is a valid regex"));

/// Customer key: an email address of the shape `local@domain.tld`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Email(String);

/// Room key: free-form room number (the facade restricts it to 3 digits).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoomNumber(String);

impl Email {
    /// Validate and wrap an email address.
    pub fn parse(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if !EMAIL_PATTERN.is_match(&value) {
            return Err(DomainError::invalid_argument(format!(
                "customer email is in incorrect format: {value:?}"
            )));
        }
        Ok(Self(value))
    }
}

impl RoomNumber {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }
}

macro_rules! impl_string_key {
    ($t:ty) => {
        impl $t {
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl core::fmt::Display for $t {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl AsRef<str> for $t {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl core::borrow::Borrow<str> for $t {
            fn borrow(&self) -> &str {
                &self.0
            }
        }

        impl From<$t> for String {
            fn from(value: $t) -> Self {
                value.0
            }
        }
    };
}

impl_string_key!(Email);
impl_string_key!(RoomNumber);

impl FromStr for Email {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Email {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<&str> for RoomNumber {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for RoomNumber {
    fn from(value: String) -> Self {
        Self(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn well_formed_emails_are_accepted() {
        for raw in ["j@domain.com", "aatmore0@gizmodo.com", "smutter8@auda.org.au"] {
            let email = Email::parse(raw).unwrap();
            assert_eq!(email.as_str(), raw);
        }
    }

    #[test]
    fn malformed_emails_are_invalid_arguments() {
        for raw in ["email", "", "@domain.com", "name@", "name@domain", "a@b@c.d", "name@.", "name@domain."] {
            match Email::parse(raw) {
                Err(DomainError::InvalidArgument(_)) => {}
                other => panic!("expected InvalidArgument for {raw:?}, got {other:?}"),
            }
        }
    }

    #[test]
    fn email_deserialization_validates() {
        let ok: Email = serde_json::from_str("\"j@domain.com\"").unwrap();
        assert_eq!(ok.to_string(), "j@domain.com");
        assert!(serde_json::from_str::<Email>("\"nope\"").is_err());
    }

    #[test]
    fn room_number_is_free_form() {
        let number: RoomNumber = "A-12".into();
        assert_eq!(number.as_str(), "A-12");
        assert_eq!(serde_json::to_string(&number).unwrap(), "\"A-12\"");
    }
}
