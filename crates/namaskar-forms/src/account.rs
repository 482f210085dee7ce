//! Pre-flight checks for the sign-in, sign-up and password reset forms
//!
//! These guards run before anything is sent to the auth endpoints. A failed
//! guard means no request is made.

use serde::Serialize;

/// Shortest password accepted by the reset form.
pub const MIN_PASSWORD_LEN: usize = 6;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AccountFormError {
	#[error("Please fill all the fields!")]
	MissingCredentials,
	#[error("Please enter your email address")]
	MissingEmail,
	#[error("Please fill all required fields")]
	MissingResetFields,
	#[error("Passwords do not match")]
	PasswordMismatch,
	#[error("Password must be at least {min} characters long")]
	PasswordTooShort { min: usize },
}

fn is_blank(value: &str) -> bool {
	value.trim().is_empty()
}

/// Credentials for an existing account, trimmed as they are entered
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SignInForm {
	pub email: String,
	pub password: String,
}

impl SignInForm {
	pub fn new(email: &str, password: &str) -> Self {
		Self {
			email: email.trim().to_string(),
			password: password.trim().to_string(),
		}
	}

	pub fn validate(&self) -> Result<(), AccountFormError> {
		if self.email.is_empty() || self.password.is_empty() {
			return Err(AccountFormError::MissingCredentials);
		}
		Ok(())
	}
}

/// Registration of a new site account.
///
/// Values are trimmed as they are entered.
///
/// # Examples
///
/// ```
/// use namaskar_forms::account::SignUpForm;
///
/// let form = SignUpForm::new("  Asha ", "asha@example.org ", "secret1");
/// assert_eq!(form.name, "Asha");
/// assert!(form.validate().is_ok());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SignUpForm {
	pub name: String,
	pub email: String,
	pub password: String,
}

impl SignUpForm {
	pub fn new(name: &str, email: &str, password: &str) -> Self {
		Self {
			name: name.trim().to_string(),
			email: email.trim().to_string(),
			password: password.trim().to_string(),
		}
	}

	pub fn validate(&self) -> Result<(), AccountFormError> {
		if self.name.is_empty() || self.email.is_empty() || self.password.is_empty() {
			return Err(AccountFormError::MissingCredentials);
		}
		Ok(())
	}
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct OtpRequest {
	pub email: String,
}

impl OtpRequest {
	pub fn new(email: impl Into<String>) -> Self {
		Self {
			email: email.into(),
		}
	}

	pub fn validate(&self) -> Result<(), AccountFormError> {
		if is_blank(&self.email) {
			return Err(AccountFormError::MissingEmail);
		}
		Ok(())
	}
}

/// New password entry after an OTP has been sent.
///
/// Only `otp` and `password` are sent to the server; the confirmation stays
/// local.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PasswordResetForm {
	pub otp: String,
	pub password: String,
	#[serde(skip)]
	pub confirm_password: String,
}

impl PasswordResetForm {
	pub fn new(
		otp: impl Into<String>,
		password: impl Into<String>,
		confirm_password: impl Into<String>,
	) -> Self {
		Self {
			otp: otp.into(),
			password: password.into(),
			confirm_password: confirm_password.into(),
		}
	}

	/// Presence first, then the confirmation, then length.
	pub fn validate(&self) -> Result<(), AccountFormError> {
		if is_blank(&self.otp) || self.password.is_empty() || self.confirm_password.is_empty() {
			return Err(AccountFormError::MissingResetFields);
		}
		if self.password != self.confirm_password {
			return Err(AccountFormError::PasswordMismatch);
		}
		if self.password.chars().count() < MIN_PASSWORD_LEN {
			return Err(AccountFormError::PasswordTooShort {
				min: MIN_PASSWORD_LEN,
			});
		}
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case("", "secret")]
	#[case("asha@example.org", "")]
	#[case("  ", "secret")]
	fn test_sign_in_requires_both_fields(#[case] email: &str, #[case] password: &str) {
		let err = SignInForm::new(email, password).validate().unwrap_err();
		assert_eq!(err.to_string(), "Please fill all the fields!");
	}

	#[rstest]
	fn test_sign_in_trims_on_entry() {
		// Act
		let form = SignInForm::new(" asha@example.org ", " secret1 ");

		// Assert
		assert_eq!(form.email, "asha@example.org");
		assert_eq!(form.password, "secret1");
		assert!(form.validate().is_ok());
	}

	#[rstest]
	fn test_sign_up_trims_before_checking() {
		let form = SignUpForm::new("Asha", "asha@example.org", "   ");
		assert_eq!(form.validate(), Err(AccountFormError::MissingCredentials));
	}

	#[rstest]
	fn test_otp_request_requires_email() {
		assert_eq!(
			OtpRequest::new(" ").validate().unwrap_err().to_string(),
			"Please enter your email address"
		);
		assert!(OtpRequest::new("asha@example.org").validate().is_ok());
	}

	#[rstest]
	#[case("", "secret1", "secret1", "Please fill all required fields")]
	#[case("123456", "secret1", "", "Please fill all required fields")]
	#[case("123456", "abc", "abd", "Passwords do not match")]
	#[case("123456", "abc", "abc", "Password must be at least 6 characters long")]
	fn test_password_reset_guard_order(
		#[case] otp: &str,
		#[case] password: &str,
		#[case] confirm: &str,
		#[case] message: &str,
	) {
		// Arrange
		let form = PasswordResetForm::new(otp, password, confirm);

		// Act
		let err = form.validate().unwrap_err();

		// Assert
		assert_eq!(err.to_string(), message);
	}

	#[rstest]
	fn test_password_reset_body_omits_confirmation() {
		// Arrange
		let form = PasswordResetForm::new("123456", "secret1", "secret1");

		// Act
		let body = serde_json::to_value(&form).unwrap();

		// Assert
		assert!(form.validate().is_ok());
		assert_eq!(
			body,
			serde_json::json!({ "otp": "123456", "password": "secret1" })
		);
	}
}
