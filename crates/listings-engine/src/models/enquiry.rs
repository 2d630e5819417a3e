use std::sync::LazyLock;

use chrono::{DateTime, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};

use super::property::PropertyId;

static EMAIL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap());

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EnquiryError {
    #[error("Please enter your name")]
    MissingName,
    #[error("Please enter a valid email address")]
    InvalidEmail,
    #[error("Please enter a message")]
    MissingMessage,
}

/// A lead captured from the property page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Enquiry {
    pub id: String,
    pub property_id: PropertyId,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

impl Enquiry {
    pub fn new(
        property_id: PropertyId,
        name: impl Into<String>,
        email: impl Into<String>,
        phone: Option<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            property_id,
            name: name.into().trim().to_string(),
            email: email.into().trim().to_string(),
            phone: phone
                .map(|p| p.trim().to_string())
                .filter(|p| !p.is_empty()),
            message: message.into().trim().to_string(),
            created_at: Utc::now(),
        }
    }

    pub fn validate(&self) -> Result<(), EnquiryError> {
        if self.name.is_empty() {
            return Err(EnquiryError::MissingName);
        }
        if !EMAIL.is_match(&self.email) {
            return Err(EnquiryError::InvalidEmail);
        }
        if self.message.is_empty() {
            return Err(EnquiryError::MissingMessage);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn enquiry(name: &str, email: &str, message: &str) -> Enquiry {
        Enquiry::new(PropertyId::from("p1"), name, email, None, message)
    }

    #[test]
    fn test_valid_enquiry() {
        assert_eq!(
            enquiry("Sam", "sam@example.com", "Is it still available?").validate(),
            Ok(())
        );
    }

    #[rstest]
    #[case::blank_name("  ", "sam@example.com", "Hi", EnquiryError::MissingName)]
    #[case::no_at("Sam", "sam.example.com", "Hi", EnquiryError::InvalidEmail)]
    #[case::no_domain_dot("Sam", "sam@example", "Hi", EnquiryError::InvalidEmail)]
    #[case::blank_message("Sam", "sam@example.com", "\n", EnquiryError::MissingMessage)]
    fn test_invalid_enquiries(
        #[case] name: &str,
        #[case] email: &str,
        #[case] message: &str,
        #[case] expected: EnquiryError,
    ) {
        assert_eq!(enquiry(name, email, message).validate(), Err(expected));
    }

    #[test]
    fn test_blank_phone_is_dropped() {
        let enquiry = Enquiry::new(
            PropertyId::from("p1"),
            "Sam",
            "sam@example.com",
            Some("   ".to_string()),
            "Hello",
        );
        assert_eq!(enquiry.phone, None);
    }
}
