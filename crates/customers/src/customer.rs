use serde::Serialize;

use hotelres_core::{DomainError, DomainResult, Email, Entity, impl_entity_identity};

/// A registered hotel guest, identified by email.
#[derive(Debug, Clone, Serialize)]
pub struct Customer {
    first_name: String,
    last_name: String,
    email: Email,
}

impl Customer {
    /// Build a customer from raw input.
    ///
    /// Fails with `InvalidArgument` when either name is empty or the email is
    /// not of the form `local@domain.tld`.
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: impl Into<String>,
    ) -> DomainResult<Self> {
        let first_name = first_name.into();
        let last_name = last_name.into();
        if first_name.is_empty() || last_name.is_empty() {
            return Err(DomainError::invalid_argument("customer first and last name must not be empty"));
        }

        Ok(Self {
            first_name,
            last_name,
            email: Email::parse(email)?,
        })
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn email(&self) -> &Email {
        &self.email
    }
}

impl Entity for Customer {
    type Id = Email;

    fn id(&self) -> &Self::Id {
        &self.email
    }
}

impl_entity_identity!(Customer);

impl core::fmt::Display for Customer {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{} {} <{}>", self.first_name, self.last_name, self.email)
    }
}
