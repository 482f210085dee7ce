//! "Get in Touch" contact form checks
//!
//! Every field is checked on each pass, in form order, so all messages can be
//! shown together. Phone is optional but must look like a phone number when
//! given.

use regex::Regex;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

pub const MIN_CONTACT_NAME_LEN: usize = 2;
pub const MIN_CONTACT_MESSAGE_LEN: usize = 10;

static CONTACT_EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
	Regex::new(r"(?i)^[A-Z0-9._%+-]+@[A-Z0-9.-]+\.[A-Z]{2,}$")
		.expect("CONTACT_EMAIL_REGEX: invalid regex pattern")
});

// Optional leading +, then digits, spaces, dashes and parentheses.
static CONTACT_PHONE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
	Regex::new(r"^\+?[0-9\s\-()]+$").expect("CONTACT_PHONE_REGEX: invalid regex pattern")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ContactField {
	Name,
	Email,
	Phone,
	Subject,
	Message,
	Consent,
}

/// Topic picked from the subject dropdown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactSubject {
	Volunteer,
	Donation,
	Partnership,
	General,
	Support,
}

impl ContactSubject {
	pub const ALL: [ContactSubject; 5] = [
		ContactSubject::Volunteer,
		ContactSubject::Donation,
		ContactSubject::Partnership,
		ContactSubject::General,
		ContactSubject::Support,
	];

	pub fn as_str(self) -> &'static str {
		match self {
			ContactSubject::Volunteer => "volunteer",
			ContactSubject::Donation => "donation",
			ContactSubject::Partnership => "partnership",
			ContactSubject::General => "general",
			ContactSubject::Support => "support",
		}
	}

	pub fn label(self) -> &'static str {
		match self {
			ContactSubject::Volunteer => "Volunteer Opportunities",
			ContactSubject::Donation => "Donation Inquiry",
			ContactSubject::Partnership => "Partnership",
			ContactSubject::General => "General Inquiry",
			ContactSubject::Support => "Support Request",
		}
	}
}

impl fmt::Display for ContactSubject {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.label())
	}
}

impl FromStr for ContactSubject {
	type Err = ();

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let s = s.trim();
		Self::ALL
			.into_iter()
			.find(|subject| subject.as_str() == s || subject.label() == s)
			.ok_or(())
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ContactError {
	#[error("Name is required")]
	NameRequired,
	#[error("Name must be at least 2 characters")]
	NameTooShort,
	#[error("Email is required")]
	EmailRequired,
	#[error("Invalid email address")]
	EmailInvalid,
	#[error("Invalid phone number")]
	PhoneInvalid,
	#[error("Please select a subject")]
	SubjectRequired,
	#[error("Message is required")]
	MessageRequired,
	#[error("Message must be at least 10 characters")]
	MessageTooShort,
	#[error("Please agree to our privacy policy")]
	ConsentRequired,
}

impl ContactError {
	/// Input the message is shown under
	pub fn field(self) -> ContactField {
		match self {
			ContactError::NameRequired | ContactError::NameTooShort => ContactField::Name,
			ContactError::EmailRequired | ContactError::EmailInvalid => ContactField::Email,
			ContactError::PhoneInvalid => ContactField::Phone,
			ContactError::SubjectRequired => ContactField::Subject,
			ContactError::MessageRequired | ContactError::MessageTooShort => ContactField::Message,
			ContactError::ConsentRequired => ContactField::Consent,
		}
	}
}

/// A message for the organisation.
///
/// Values are kept as typed; only emptiness and length are checked, not
/// surrounding whitespace.
///
/// # Examples
///
/// ```
/// use namaskar_forms::contact::{ContactError, ContactForm, ContactSubject};
///
/// let mut form = ContactForm {
///     name: "Asha".to_string(),
///     email: "asha@example.org".to_string(),
///     subject: Some(ContactSubject::Volunteer),
///     message: "Hi".to_string(),
///     ..ContactForm::default()
/// };
/// assert_eq!(
///     form.validate(),
///     Err(vec![ContactError::MessageTooShort, ContactError::ConsentRequired])
/// );
///
/// form.message = "I would like to help on weekends.".to_string();
/// form.consent = true;
/// assert!(form.validate().is_ok());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ContactForm {
	pub name: String,
	pub email: String,
	pub phone: String,
	pub subject: Option<ContactSubject>,
	pub message: String,
	pub consent: bool,
}

impl ContactForm {
	pub fn new() -> Self {
		Self::default()
	}

	/// Pick a subject by value or label; an empty string clears it
	pub fn select_subject(&mut self, value: &str) -> Result<(), ContactError> {
		if value.trim().is_empty() {
			self.subject = None;
			return Ok(());
		}
		self.subject = Some(value.parse().map_err(|_| ContactError::SubjectRequired)?);
		Ok(())
	}

	/// Every failing check, at most one per field
	pub fn validate(&self) -> Result<(), Vec<ContactError>> {
		let errors: Vec<ContactError> = [
			check_name(&self.name),
			check_email(&self.email),
			check_phone(&self.phone),
			self.subject.is_none().then_some(ContactError::SubjectRequired),
			check_message(&self.message),
			(!self.consent).then_some(ContactError::ConsentRequired),
		]
		.into_iter()
		.flatten()
		.collect();

		if errors.is_empty() {
			Ok(())
		} else {
			tracing::debug!(error_count = errors.len(), "contact form failed validation");
			Err(errors)
		}
	}
}

fn check_name(name: &str) -> Option<ContactError> {
	if name.is_empty() {
		Some(ContactError::NameRequired)
	} else if name.chars().count() < MIN_CONTACT_NAME_LEN {
		Some(ContactError::NameTooShort)
	} else {
		None
	}
}

fn check_email(email: &str) -> Option<ContactError> {
	if email.is_empty() {
		Some(ContactError::EmailRequired)
	} else if !CONTACT_EMAIL_REGEX.is_match(email) {
		Some(ContactError::EmailInvalid)
	} else {
		None
	}
}

fn check_phone(phone: &str) -> Option<ContactError> {
	(!phone.is_empty() && !CONTACT_PHONE_REGEX.is_match(phone)).then_some(ContactError::PhoneInvalid)
}

fn check_message(message: &str) -> Option<ContactError> {
	if message.is_empty() {
		Some(ContactError::MessageRequired)
	} else if message.chars().count() < MIN_CONTACT_MESSAGE_LEN {
		Some(ContactError::MessageTooShort)
	} else {
		None
	}
}
