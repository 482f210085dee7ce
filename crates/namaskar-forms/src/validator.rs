//! Registration form validation
//!
//! [`validate`] checks every field on every call and returns the complete
//! error snapshot, so all problems can be shown at once. E-mail only needs an
//! `@` followed later by a dot; phone and PIN code are plain digit counts.

use crate::error::{FieldError, FieldResult};
use crate::field::{FieldErrors, FieldName};
use crate::store::ApplicantRecord;
use regex::Regex;
use std::sync::LazyLock;

// Something, an @, something, a dot, something. Not anchored.
static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
	Regex::new(r"\S+@\S+\.\S+").expect("EMAIL_REGEX: invalid regex pattern")
});

/// Loose e-mail address check.
///
/// # Examples
///
/// ```
/// use namaskar_forms::validator::EmailValidator;
///
/// let validator = EmailValidator::new();
/// assert!(validator.validate("asha@example.org").is_ok());
/// assert!(validator.validate("asha@example").is_err());
/// assert!(validator.validate("asha.example.org").is_err());
/// ```
#[derive(Debug, Clone)]
pub struct EmailValidator {
	message: Option<String>,
}

impl EmailValidator {
	pub fn new() -> Self {
		Self { message: None }
	}

	pub fn with_message(mut self, message: impl Into<String>) -> Self {
		self.message = Some(message.into());
		self
	}

	pub fn validate(&self, value: &str) -> FieldResult<()> {
		if EMAIL_REGEX.is_match(value) {
			Ok(())
		} else {
			let msg = self.message.as_deref().unwrap_or("Enter a valid email address");
			Err(FieldError::Invalid(msg.to_string()))
		}
	}
}

impl Default for EmailValidator {
	fn default() -> Self {
		Self::new()
	}
}

/// Exactly `len` ASCII digits, nothing else.
///
/// # Examples
///
/// ```
/// use namaskar_forms::validator::DigitsValidator;
///
/// let pincode = DigitsValidator::new(6);
/// assert!(pincode.validate("110001").is_ok());
/// assert!(pincode.validate("11000").is_err());
/// assert!(pincode.validate("11000a").is_err());
/// ```
#[derive(Debug, Clone)]
pub struct DigitsValidator {
	len: usize,
	message: Option<String>,
}

impl DigitsValidator {
	pub fn new(len: usize) -> Self {
		Self { len, message: None }
	}

	pub fn with_message(mut self, message: impl Into<String>) -> Self {
		self.message = Some(message.into());
		self
	}

	pub fn validate(&self, value: &str) -> FieldResult<()> {
		if value.len() == self.len && value.bytes().all(|b| b.is_ascii_digit()) {
			Ok(())
		} else {
			Err(FieldError::Invalid(match &self.message {
				Some(msg) => msg.clone(),
				None => format!("Enter exactly {} digits", self.len),
			}))
		}
	}
}

fn required(value: &str, message: &str) -> FieldResult<()> {
	if value.trim().is_empty() {
		Err(FieldError::Required(message.to_string()))
	} else {
		Ok(())
	}
}

fn push_error(errors: &mut FieldErrors, field: FieldName, result: FieldResult<()>) {
	if let Err(e) = result {
		errors.insert(field, e.message());
	}
}

/// Validate a full applicant record.
///
/// Pure: the same record always yields the same snapshot. An empty result
/// means the record may be submitted.
///
/// # Examples
///
/// ```
/// use namaskar_forms::{ApplicantRecord, FieldName, validate};
///
/// let errors = validate(&ApplicantRecord::default());
/// assert_eq!(errors.get(FieldName::Name), Some("Full name is required"));
/// assert_eq!(errors.get(FieldName::DateOfBirth), Some("Complete date of birth is required"));
/// assert!(!errors.contains(FieldName::Avatar));
/// ```
pub fn validate(record: &ApplicantRecord) -> FieldErrors {
	let mut errors = FieldErrors::new();

	push_error(
		&mut errors,
		FieldName::Name,
		required(&record.name, "Full name is required"),
	);
	if record.qualification.is_none() {
		errors.insert(FieldName::Qualification, "Qualification is required");
	}
	push_error(
		&mut errors,
		FieldName::FatherName,
		required(&record.father_name, "Father's name is required"),
	);
	push_error(
		&mut errors,
		FieldName::MotherName,
		required(&record.mother_name, "Mother's name is required"),
	);
	push_error(
		&mut errors,
		FieldName::Email,
		required(&record.email, "Email is required").and_then(|_| {
			EmailValidator::new()
				.with_message("Email format is invalid")
				.validate(&record.email)
		}),
	);
	push_error(
		&mut errors,
		FieldName::Phone,
		required(&record.phone, "Mobile number is required").and_then(|_| {
			DigitsValidator::new(10)
				.with_message("Mobile number should be 10 digits")
				.validate(&record.phone)
		}),
	);
	if record.gender.is_none() {
		errors.insert(FieldName::Gender, "Gender is required");
	}
	if !record.dob.is_complete() {
		errors.insert(FieldName::DateOfBirth, "Complete date of birth is required");
	}
	push_error(
		&mut errors,
		FieldName::Skills,
		required(&record.skills, "Skills are required"),
	);
	push_error(
		&mut errors,
		FieldName::Address,
		required(&record.address, "Address is required"),
	);
	push_error(
		&mut errors,
		FieldName::City,
		required(&record.city, "City is required"),
	);
	push_error(
		&mut errors,
		FieldName::State,
		required(&record.state, "State is required"),
	);
	push_error(
		&mut errors,
		FieldName::Pincode,
		required(&record.pincode, "PIN code is required").and_then(|_| {
			DigitsValidator::new(6)
				.with_message("PIN code should be 6 digits")
				.validate(&record.pincode)
		}),
	);

	tracing::debug!(error_count = errors.len(), "registration form validated");
	errors
}
