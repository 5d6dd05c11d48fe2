use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use thiserror::Error;

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern should compile")
});

const NO_COMPANY: &str = "Not provided";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContactError {
    #[error("Please fill in all required fields.")]
    MissingFields,
    #[error("Please enter a valid email address.")]
    InvalidEmail,
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// Raw contact form submission, as typed by the visitor.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub company: String,
    pub message: String,
}

/// A validated inquiry, ready to hand to whatever delivers it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactInquiry {
    pub name: String,
    pub email: String,
    pub company: String,
    pub message: String,
}

impl ContactForm {
    pub fn validate(&self) -> Result<ContactInquiry, ContactError> {
        let name = self.name.trim();
        let email = self.email.trim();
        let message = self.message.trim();
        if name.is_empty() || email.is_empty() || message.is_empty() {
            return Err(ContactError::MissingFields);
        }
        if !is_valid_email(email) {
            return Err(ContactError::InvalidEmail);
        }
        let company = match self.company.trim() {
            "" => NO_COMPANY,
            c => c,
        };
        Ok(ContactInquiry {
            name: name.to_string(),
            email: email.to_string(),
            company: company.to_string(),
            message: message.to_string(),
        })
    }
}

impl ContactInquiry {
    pub fn subject(&self) -> String {
        format!("Consulting Inquiry from {}", self.name)
    }

    pub fn plain_text(&self) -> String {
        format!(
            "New Consulting Inquiry\n\nName: {}\nEmail: {}\nCompany: {}\n\nMessage:\n{}",
            self.name, self.email, self.company, self.message
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(name: &str, email: &str, company: &str, message: &str) -> ContactForm {
        ContactForm {
            name: name.to_string(),
            email: email.to_string(),
            company: company.to_string(),
            message: message.to_string(),
        }
    }

    #[test]
    fn test_valid_submission_is_trimmed() {
        let inquiry = form("  Ada ", " ada@example.com", " Analytical ", "Hello\n")
            .validate()
            .unwrap();
        assert_eq!(inquiry.name, "Ada");
        assert_eq!(inquiry.email, "ada@example.com");
        assert_eq!(inquiry.company, "Analytical");
        assert_eq!(inquiry.message, "Hello");
    }

    #[test]
    fn test_company_defaults() {
        let inquiry = form("Ada", "ada@example.com", "   ", "Hi").validate().unwrap();
        assert_eq!(inquiry.company, "Not provided");
    }

    #[test]
    fn test_missing_fields() {
        assert_eq!(
            form("", "ada@example.com", "", "Hi").validate(),
            Err(ContactError::MissingFields)
        );
        assert_eq!(
            form("Ada", "  ", "", "Hi").validate(),
            Err(ContactError::MissingFields)
        );
        assert_eq!(
            form("Ada", "ada@example.com", "Co", "\n\t").validate(),
            Err(ContactError::MissingFields)
        );
    }

    #[test]
    fn test_invalid_email() {
        for email in ["ada", "ada@example", "ada @example.com", "@example.com", "a@b@c"] {
            assert_eq!(
                form("Ada", email, "", "Hi").validate(),
                Err(ContactError::InvalidEmail),
                "{email} should be rejected"
            );
        }
        assert!(is_valid_email("first.last+tag@sub.example.co"));
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            ContactError::MissingFields.to_string(),
            "Please fill in all required fields."
        );
        assert_eq!(
            ContactError::InvalidEmail.to_string(),
            "Please enter a valid email address."
        );
    }

    #[test]
    fn test_plain_text_body() {
        let inquiry = form("Ada", "ada@example.com", "", "Line one\nLine two")
            .validate()
            .unwrap();
        assert_eq!(inquiry.subject(), "Consulting Inquiry from Ada");
        let body = inquiry.plain_text();
        assert!(body.starts_with("New Consulting Inquiry"));
        assert!(body.contains("Email: ada@example.com"));
        assert!(body.contains("Company: Not provided"));
        assert!(body.ends_with("Message:\nLine one\nLine two"));
    }
}
