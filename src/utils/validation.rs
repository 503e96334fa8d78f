use std::collections::BTreeMap;
use std::sync::OnceLock;

use regex::Regex;

use crate::data::availability::ContactDetails;

static EMAIL_PATTERN: OnceLock<Regex> = OnceLock::new();

fn email_pattern() -> &'static Regex {
    EMAIL_PATTERN.get_or_init(|| Regex::new(r"\S+@\S+\.\S+").expect("valid email pattern"))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ContactField {
    FirstName,
    LastName,
    Email,
    PhoneNumber,
}

impl ContactField {
    pub const ALL: [ContactField; 4] = [
        ContactField::FirstName,
        ContactField::LastName,
        ContactField::Email,
        ContactField::PhoneNumber,
    ];

    /// Form input name, also the JSON key in stored contact details.
    pub fn name(self) -> &'static str {
        match self {
            ContactField::FirstName => "firstName",
            ContactField::LastName => "lastName",
            ContactField::Email => "email",
            ContactField::PhoneNumber => "phoneNumber",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ContactField::FirstName => "First Name",
            ContactField::LastName => "Last Name",
            ContactField::Email => "Email Address",
            ContactField::PhoneNumber => "Phone Number",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            ContactField::FirstName => "Enter your first name",
            ContactField::LastName => "Enter your last name",
            ContactField::Email => "Enter your email address",
            ContactField::PhoneNumber => "Enter your phone number",
        }
    }

    pub fn value(self, contact: &ContactDetails) -> &str {
        match self {
            ContactField::FirstName => &contact.first_name,
            ContactField::LastName => &contact.last_name,
            ContactField::Email => &contact.email,
            ContactField::PhoneNumber => &contact.phone_number,
        }
    }

    pub fn set(self, contact: &mut ContactDetails, value: String) {
        match self {
            ContactField::FirstName => contact.first_name = value,
            ContactField::LastName => contact.last_name = value,
            ContactField::Email => contact.email = value,
            ContactField::PhoneNumber => contact.phone_number = value,
        }
    }

    pub fn input_type(self) -> &'static str {
        match self {
            ContactField::Email => "email",
            ContactField::PhoneNumber => "tel",
            _ => "text",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<ContactField, &'static str>);

impl FieldErrors {
    pub fn get(&self, field: ContactField) -> Option<&'static str> {
        self.0.get(&field).copied()
    }

    pub fn clear(&mut self, field: ContactField) {
        self.0.remove(&field);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

pub fn is_valid_email(value: &str) -> bool {
    email_pattern().is_match(value)
}

pub fn validate_contact(contact: &ContactDetails) -> FieldErrors {
    let mut errors = BTreeMap::new();

    if contact.first_name.trim().is_empty() {
        errors.insert(ContactField::FirstName, "First name is required");
    }
    if contact.last_name.trim().is_empty() {
        errors.insert(ContactField::LastName, "Last name is required");
    }
    if contact.email.trim().is_empty() {
        errors.insert(ContactField::Email, "Email is required");
    } else if !is_valid_email(&contact.email) {
        errors.insert(ContactField::Email, "Please enter a valid email address");
    }
    if contact.phone_number.trim().is_empty() {
        errors.insert(ContactField::PhoneNumber, "Phone number is required");
    }

    FieldErrors(errors)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contact(first: &str, last: &str, email: &str, phone: &str) -> ContactDetails {
        ContactDetails {
            first_name: first.into(),
            last_name: last.into(),
            email: email.into(),
            phone_number: phone.into(),
        }
    }

    #[test]
    fn empty_form_reports_every_field() {
        let errors = validate_contact(&ContactDetails::default());
        assert_eq!(errors.len(), 4);
        assert_eq!(errors.get(ContactField::FirstName), Some("First name is required"));
        assert_eq!(errors.get(ContactField::LastName), Some("Last name is required"));
        assert_eq!(errors.get(ContactField::Email), Some("Email is required"));
        assert_eq!(errors.get(ContactField::PhoneNumber), Some("Phone number is required"));
    }

    #[test]
    fn whitespace_counts_as_missing() {
        let errors = validate_contact(&contact("  ", "Doe", "jane@example.com", "\t"));
        assert_eq!(errors.get(ContactField::FirstName), Some("First name is required"));
        assert_eq!(errors.get(ContactField::PhoneNumber), Some("Phone number is required"));
        assert_eq!(errors.len(), 2);
    }

    #[test]
    fn malformed_email_is_rejected() {
        for email in ["jane", "jane@example", "@example.com", "jane@.com"] {
            let errors = validate_contact(&contact("Jane", "Doe", email, "0123"));
            assert_eq!(
                errors.get(ContactField::Email),
                Some("Please enter a valid email address"),
                "{email}"
            );
        }
    }

    #[test]
    fn complete_form_passes() {
        let errors = validate_contact(&contact("Jane", "Doe", "jane@example.co.uk", "07700 900000"));
        assert!(errors.is_empty());
    }

    #[test]
    fn fields_read_and_write_their_own_value() {
        let mut details = ContactDetails::default();
        for field in ContactField::ALL {
            field.set(&mut details, field.name().to_uppercase());
        }
        assert_eq!(details.email, "EMAIL");
        assert_eq!(ContactField::PhoneNumber.value(&details), "PHONENUMBER");
    }

    #[test]
    fn clearing_a_field_error() {
        let mut errors = validate_contact(&ContactDetails::default());
        errors.clear(ContactField::Email);
        assert_eq!(errors.get(ContactField::Email), None);
        assert_eq!(errors.len(), 3);
    }
}
