//! Submission lifecycle of one registration form session

use crate::envelope::ApiEnvelope;
use crate::error::ClientResult;
use crate::payload::VolunteerPayload;
use namaskar_forms::{
	ApplicantRecord, AvatarError, AvatarFile, DatePart, FieldErrors, FieldName, FieldStore,
	FormResult,
};
use std::fmt;

pub const VALIDATION_FAILED_MESSAGE: &str = "Please fill in all required fields correctly";
pub const SUBMITTED_MESSAGE: &str = "Volunteer Application Submitted Successfully!";
pub const SUBMIT_FAILED_MESSAGE: &str = "Failed to submit application. Please try again.";

/// Where a form session is in its submission lifecycle.
///
/// `Success` is terminal: the session ends with a reset and a redirect.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SubmissionState {
	#[default]
	Idle,
	Submitting,
	Success,
	Failed,
}

impl fmt::Display for SubmissionState {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let s = match self {
			SubmissionState::Idle => "idle",
			SubmissionState::Submitting => "submitting",
			SubmissionState::Success => "success",
			SubmissionState::Failed => "failed",
		};
		f.write_str(s)
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
	Success,
	Error,
}

/// Top-level message shown above the form (a toast on the site)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
	pub kind: NoticeKind,
	pub message: String,
}

impl Notice {
	pub fn success(message: impl Into<String>) -> Self {
		Self {
			kind: NoticeKind::Success,
			message: message.into(),
		}
	}

	pub fn error(message: impl Into<String>) -> Self {
		Self {
			kind: NoticeKind::Error,
			message: message.into(),
		}
	}
}

/// Result of asking to submit
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitAttempt {
	/// Validation passed; the form is now `Submitting` and this payload must be sent
	Ready(VolunteerPayload),
	/// Validation failed; nothing may be sent
	Invalid(FieldErrors),
	/// A submission is already in flight
	Busy,
	/// The session already succeeded
	Closed,
}

/// Field store plus submission state for one form session.
///
/// Network I/O happens outside this type: [`begin_submit`](Self::begin_submit)
/// hands out the payload and [`complete_submit`](Self::complete_submit)
/// records how it went.
///
/// # Examples
///
/// ```
/// use namaskar_client::{RegistrationForm, SubmissionState, SubmitAttempt};
///
/// let mut form = RegistrationForm::new();
/// assert!(matches!(form.begin_submit(), SubmitAttempt::Invalid(_)));
/// assert_eq!(form.state(), SubmissionState::Idle);
/// assert_eq!(
///     form.notice().map(|n| n.message.as_str()),
///     Some("Please fill in all required fields correctly")
/// );
/// ```
#[derive(Debug, Default)]
pub struct RegistrationForm {
	store: FieldStore,
	state: SubmissionState,
	notice: Option<Notice>,
}

impl RegistrationForm {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn with_store(store: FieldStore) -> Self {
		Self {
			store,
			..Self::default()
		}
	}

	pub fn store(&self) -> &FieldStore {
		&self.store
	}

	pub fn record(&self) -> &ApplicantRecord {
		self.store.record()
	}

	pub fn errors(&self) -> &FieldErrors {
		self.store.errors()
	}

	pub fn state(&self) -> SubmissionState {
		self.state
	}

	pub fn notice(&self) -> Option<&Notice> {
		self.notice.as_ref()
	}

	pub fn set_field(&mut self, field: FieldName, value: impl Into<String>) -> FormResult<()> {
		self.store.set_field(field, value)?;
		self.edited();
		Ok(())
	}

	pub fn select_date(&mut self, part: DatePart, value: &str) -> FormResult<()> {
		self.store.select_date(part, value)?;
		self.edited();
		Ok(())
	}

	pub fn offer_avatar(&mut self, file: AvatarFile) -> Result<(), AvatarError> {
		let result = self.store.offer_avatar(file);
		self.edited();
		result
	}

	pub fn clear_avatar(&mut self) {
		self.store.clear_avatar();
		self.edited();
	}

	/// Validate and, when clean, move to `Submitting`.
	pub fn begin_submit(&mut self) -> SubmitAttempt {
		match self.state {
			SubmissionState::Submitting => return SubmitAttempt::Busy,
			SubmissionState::Success => return SubmitAttempt::Closed,
			SubmissionState::Idle | SubmissionState::Failed => {}
		}

		if !self.store.validate() {
			let errors = self.store.errors().clone();
			tracing::warn!(
				error_count = errors.len(),
				fields = ?errors.fields().map(FieldName::as_str).collect::<Vec<_>>(),
				"volunteer application failed validation"
			);
			self.transition(SubmissionState::Idle);
			self.notice = Some(Notice::error(VALIDATION_FAILED_MESSAGE));
			return SubmitAttempt::Invalid(errors);
		}

		self.notice = None;
		self.transition(SubmissionState::Submitting);
		SubmitAttempt::Ready(VolunteerPayload::from_record(self.store.record()))
	}

	/// Record the server's answer to the submission in flight.
	///
	/// Ignored unless the form is `Submitting`. On failure the entered values
	/// and field errors are kept.
	pub fn complete_submit(&mut self, outcome: ClientResult<ApiEnvelope>) -> SubmissionState {
		if self.state != SubmissionState::Submitting {
			tracing::warn!(state = %self.state, "submission outcome arrived with nothing in flight");
			return self.state;
		}

		match outcome {
			Ok(_) => {
				self.notice = Some(Notice::success(SUBMITTED_MESSAGE));
				self.transition(SubmissionState::Success);
			}
			Err(e) => {
				tracing::warn!(error = %e, status = ?e.status(), "volunteer application rejected");
				self.notice = Some(Notice::error(e.user_message(SUBMIT_FAILED_MESSAGE)));
				self.transition(SubmissionState::Failed);
			}
		}
		self.state
	}

	/// Give up on the submission in flight without an answer.
	///
	/// The form becomes `Failed` with the fallback notice, so it can be edited
	/// and sent again. Ignored unless the form is `Submitting`.
	pub fn abandon_submit(&mut self) -> SubmissionState {
		if self.state != SubmissionState::Submitting {
			return self.state;
		}
		tracing::warn!("volunteer application abandoned before the server answered");
		self.notice = Some(Notice::error(SUBMIT_FAILED_MESSAGE));
		self.transition(SubmissionState::Failed);
		self.state
	}

	/// Empty every field. The submission state is left alone.
	pub fn reset(&mut self) {
		self.store.reset();
	}

	pub fn dismiss_notice(&mut self) {
		self.notice = None;
	}

	// Editing after a failure makes the form ready for another attempt.
	fn edited(&mut self) {
		if self.state == SubmissionState::Failed {
			self.transition(SubmissionState::Idle);
		}
	}

	fn transition(&mut self, next: SubmissionState) {
		if self.state != next {
			tracing::info!(from = %self.state, to = %next, "submission state changed");
			self.state = next;
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::error::ClientError;
	use rstest::{fixture, rstest};

	#[fixture]
	fn filled() -> RegistrationForm {
		let mut form = RegistrationForm::new();
		for (field, value) in [
			(FieldName::Name, "Asha Verma"),
			(FieldName::FatherName, "Ravi Verma"),
			(FieldName::MotherName, "Meena Verma"),
			(FieldName::Qualification, "PhD"),
			(FieldName::Email, "asha@example.org"),
			(FieldName::Phone, "9876543210"),
			(FieldName::Gender, "Female"),
			(FieldName::Skills, "Teaching"),
			(FieldName::Address, "12 Gandhi Road"),
			(FieldName::City, "Lucknow"),
			(FieldName::State, "Uttar Pradesh"),
			(FieldName::Pincode, "226001"),
		] {
			form.set_field(field, value).unwrap();
		}
		form.select_date(DatePart::Day, "01").unwrap();
		form.select_date(DatePart::Month, "01").unwrap();
		form.select_date(DatePart::Year, "2000").unwrap();
		form
	}

	fn rejected(message: &str) -> ClientError {
		ClientError::Rejected {
			status: Some(400),
			message: Some(message.to_string()),
		}
	}

	#[rstest]
	fn test_valid_form_moves_to_submitting(mut filled: RegistrationForm) {
		// Act
		let attempt = filled.begin_submit();

		// Assert
		assert!(matches!(attempt, SubmitAttempt::Ready(_)));
		assert_eq!(filled.state(), SubmissionState::Submitting);
	}

	#[rstest]
	fn test_second_attempt_while_submitting_is_busy(mut filled: RegistrationForm) {
		filled.begin_submit();
		assert_eq!(filled.begin_submit(), SubmitAttempt::Busy);
		assert_eq!(filled.state(), SubmissionState::Submitting);
	}

	#[rstest]
	fn test_invalid_form_stays_idle_with_errors(mut filled: RegistrationForm) {
		// Arrange
		filled.set_field(FieldName::Phone, "12345").unwrap();

		// Act
		let attempt = filled.begin_submit();

		// Assert
		let SubmitAttempt::Invalid(errors) = attempt else {
			panic!("expected validation failure");
		};
		assert_eq!(
			errors.get(FieldName::Phone),
			Some("Mobile number should be 10 digits")
		);
		assert_eq!(filled.state(), SubmissionState::Idle);
		assert_eq!(filled.errors(), &errors);
	}

	#[rstest]
	fn test_success_sets_notice_and_is_terminal(mut filled: RegistrationForm) {
		// Arrange
		filled.begin_submit();

		// Act
		let state = filled.complete_submit(Ok(ApiEnvelope::ok("saved")));

		// Assert
		assert_eq!(state, SubmissionState::Success);
		assert_eq!(
			filled.notice(),
			Some(&Notice::success(SUBMITTED_MESSAGE))
		);
		assert_eq!(filled.begin_submit(), SubmitAttempt::Closed);
	}

	#[rstest]
	fn test_failure_keeps_values_and_shows_server_message(mut filled: RegistrationForm) {
		// Arrange
		let before = filled.record().clone();
		filled.begin_submit();

		// Act
		let state = filled.complete_submit(Err(rejected("Email already exists")));

		// Assert
		assert_eq!(state, SubmissionState::Failed);
		assert_eq!(filled.notice(), Some(&Notice::error("Email already exists")));
		assert_eq!(filled.record(), &before);
	}

	#[rstest]
	fn test_failure_without_message_uses_fallback(mut filled: RegistrationForm) {
		filled.begin_submit();

		filled.complete_submit(Err(ClientError::Rejected {
			status: None,
			message: None,
		}));

		assert_eq!(
			filled.notice().map(|n| n.message.as_str()),
			Some(SUBMIT_FAILED_MESSAGE)
		);
	}

	#[rstest]
	fn test_edit_after_failure_returns_to_idle(mut filled: RegistrationForm) {
		// Arrange
		filled.begin_submit();
		filled.complete_submit(Err(rejected("Email already exists")));

		// Act
		filled
			.set_field(FieldName::Email, "asha.verma@example.org")
			.unwrap();

		// Assert
		assert_eq!(filled.state(), SubmissionState::Idle);
	}

	#[rstest]
	fn test_retry_from_failed_resubmits(mut filled: RegistrationForm) {
		filled.begin_submit();
		filled.complete_submit(Err(rejected("Server busy")));

		assert!(matches!(filled.begin_submit(), SubmitAttempt::Ready(_)));
		assert_eq!(filled.notice(), None);
	}

	#[rstest]
	fn test_outcome_without_submission_is_ignored(mut filled: RegistrationForm) {
		let state = filled.complete_submit(Ok(ApiEnvelope::ok("saved")));

		assert_eq!(state, SubmissionState::Idle);
		assert_eq!(filled.notice(), None);
	}

	#[rstest]
	fn test_abandoned_submission_can_be_retried(mut filled: RegistrationForm) {
		// Arrange
		filled.begin_submit();

		// Act
		let state = filled.abandon_submit();

		// Assert
		assert_eq!(state, SubmissionState::Failed);
		assert_eq!(filled.notice(), Some(&Notice::error(SUBMIT_FAILED_MESSAGE)));
		assert!(matches!(filled.begin_submit(), SubmitAttempt::Ready(_)));
	}

	#[rstest]
	fn test_abandon_after_answer_is_ignored(mut filled: RegistrationForm) {
		filled.begin_submit();
		filled.complete_submit(Ok(ApiEnvelope::ok("saved")));

		assert_eq!(filled.abandon_submit(), SubmissionState::Success);
		assert_eq!(filled.notice(), Some(&Notice::success(SUBMITTED_MESSAGE)));
	}

	#[rstest]
	fn test_reset_keeps_success_state(mut filled: RegistrationForm) {
		filled.begin_submit();
		filled.complete_submit(Ok(ApiEnvelope::ok("saved")));

		filled.reset();

		assert!(filled.store().is_empty());
		assert_eq!(filled.state(), SubmissionState::Success);
	}
}
