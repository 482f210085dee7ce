//! Submission controller: drives a [`RegistrationForm`] against a transport
//!
//! The form lock is never held across the network call. A submit issued
//! while another is in flight sees `Submitting` and returns without sending.
//! A submit that is cancelled mid-flight leaves the form `Failed`.

use crate::error::ClientResult;
use crate::form::{Notice, RegistrationForm, SubmissionState, SubmitAttempt};
use crate::transport::{HttpTransport, SubmissionTransport};
use namaskar_conf::ClientSettings;
use parking_lot::Mutex;
use std::sync::{Arc, Weak};
use std::time::Duration;
use tokio::task::JoinHandle;

/// Moves the user to another page once a submission has succeeded
pub trait Navigator: Send + Sync {
	fn navigate(&self, path: &str);
}

/// Timing of the reset and redirect that follow a successful submission.
///
/// Both delays count from the moment the success is recorded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuccessSchedule {
	pub reset_delay: Duration,
	pub redirect_delay: Duration,
	pub redirect_path: String,
}

impl Default for SuccessSchedule {
	fn default() -> Self {
		Self {
			reset_delay: Duration::from_millis(2_000),
			redirect_delay: Duration::from_millis(4_000),
			redirect_path: "/".to_string(),
		}
	}
}

impl From<&ClientSettings> for SuccessSchedule {
	fn from(settings: &ClientSettings) -> Self {
		Self {
			reset_delay: settings.reset_delay,
			redirect_delay: settings.redirect_delay,
			redirect_path: settings.redirect_path.clone(),
		}
	}
}

/// Owner of one registration form session.
///
/// Edits go through [`with_form`](Self::with_form); [`submit`](Self::submit)
/// validates, sends and records the outcome. After a success the form is
/// emptied and the navigator is called on the configured schedule. If the
/// controller is dropped first, those steps do nothing.
pub struct SubmissionController {
	form: Arc<Mutex<RegistrationForm>>,
	transport: Arc<dyn SubmissionTransport>,
	navigator: Arc<dyn Navigator>,
	schedule: SuccessSchedule,
	follow_up: Mutex<Option<JoinHandle<()>>>,
}

impl SubmissionController {
	pub fn new(
		transport: Arc<dyn SubmissionTransport>,
		navigator: Arc<dyn Navigator>,
		schedule: SuccessSchedule,
	) -> Self {
		Self {
			form: Arc::new(Mutex::new(RegistrationForm::new())),
			transport,
			navigator,
			schedule,
			follow_up: Mutex::new(None),
		}
	}

	/// Controller posting to the configured server over HTTP
	pub fn from_settings(
		settings: &ClientSettings,
		navigator: Arc<dyn Navigator>,
	) -> ClientResult<Self> {
		let transport = HttpTransport::new(settings)?;
		Ok(Self::new(
			Arc::new(transport),
			navigator,
			SuccessSchedule::from(settings),
		))
	}

	/// Run `f` with exclusive access to the form
	pub fn with_form<R>(&self, f: impl FnOnce(&mut RegistrationForm) -> R) -> R {
		f(&mut *self.form.lock())
	}

	pub fn state(&self) -> SubmissionState {
		self.form.lock().state()
	}

	pub fn notice(&self) -> Option<Notice> {
		self.form.lock().notice().cloned()
	}

	/// Submit the form and return the state it ends up in.
	///
	/// Invalid forms stay `Idle` without contacting the server. Calls made
	/// while a submission is in flight, or after a success, change nothing.
	pub async fn submit(&self) -> SubmissionState {
		let attempt = self.form.lock().begin_submit();
		let payload = match attempt {
			SubmitAttempt::Ready(payload) => payload,
			SubmitAttempt::Invalid(_) => return SubmissionState::Idle,
			SubmitAttempt::Busy => {
				tracing::debug!("submit ignored, submission already in flight");
				return SubmissionState::Submitting;
			}
			SubmitAttempt::Closed => {
				tracing::debug!("submit ignored, application already submitted");
				return SubmissionState::Success;
			}
		};

		let in_flight = InFlight::new(&self.form);
		let outcome = self.transport.submit(payload).await;

		let state = self.form.lock().complete_submit(outcome);
		in_flight.disarm();
		if state == SubmissionState::Success {
			self.schedule_follow_up();
		}
		state
	}

	/// Handle of the pending reset/redirect task, if one was scheduled
	pub fn take_follow_up(&self) -> Option<JoinHandle<()>> {
		self.follow_up.lock().take()
	}

	fn schedule_follow_up(&self) {
		let form = Arc::downgrade(&self.form);
		let navigator = Arc::clone(&self.navigator);
		let schedule = self.schedule.clone();

		let handle = tokio::spawn(async move {
			run_follow_up(form, navigator, schedule).await;
		});
		*self.follow_up.lock() = Some(handle);
	}
}

/// Marks the form `Failed` when a submit future is dropped before the
/// transport answers, e.g. under `tokio::time::timeout`.
struct InFlight {
	form: Weak<Mutex<RegistrationForm>>,
	armed: bool,
}

impl InFlight {
	fn new(form: &Arc<Mutex<RegistrationForm>>) -> Self {
		Self {
			form: Arc::downgrade(form),
			armed: true,
		}
	}

	fn disarm(mut self) {
		self.armed = false;
	}
}

impl Drop for InFlight {
	fn drop(&mut self) {
		if !self.armed {
			return;
		}
		if let Some(form) = self.form.upgrade() {
			form.lock().abandon_submit();
		}
	}
}

async fn run_follow_up(
	form: Weak<Mutex<RegistrationForm>>,
	navigator: Arc<dyn Navigator>,
	schedule: SuccessSchedule,
) {
	tokio::time::sleep(schedule.reset_delay).await;
	match form.upgrade() {
		Some(form) => {
			form.lock().reset();
		}
		None => {
			tracing::debug!("form closed before reset");
			return;
		}
	}

	tokio::time::sleep(schedule.redirect_delay.saturating_sub(schedule.reset_delay)).await;
	if form.strong_count() == 0 {
		tracing::debug!("form closed before redirect");
		return;
	}
	tracing::info!(path = %schedule.redirect_path, "redirecting after submission");
	navigator.navigate(&schedule.redirect_path);
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::envelope::ApiEnvelope;
	use crate::error::ClientError;
	use crate::payload::VolunteerPayload;
	use async_trait::async_trait;
	use mockall::mock;
	use namaskar_forms::{DatePart, FieldName};
	use rstest::rstest;

	mock! {
		pub Transport {}

		#[async_trait]
		impl SubmissionTransport for Transport {
			async fn submit(&self, payload: VolunteerPayload) -> ClientResult<ApiEnvelope>;
		}
	}

	mock! {
		pub Nav {}

		impl Navigator for Nav {
			fn navigate(&self, path: &str);
		}
	}

	fn fill(form: &mut RegistrationForm) {
		for (field, value) in [
			(FieldName::Name, "Asha Verma"),
			(FieldName::FatherName, "Ravi Verma"),
			(FieldName::MotherName, "Meena Verma"),
			(FieldName::Qualification, "Graduate"),
			(FieldName::Email, "asha@example.org"),
			(FieldName::Phone, "9876543210"),
			(FieldName::Gender, "Male"),
			(FieldName::Skills, "Logistics"),
			(FieldName::Address, "4 Station Road"),
			(FieldName::City, "Patna"),
			(FieldName::State, "Bihar"),
			(FieldName::Pincode, "800001"),
		] {
			form.set_field(field, value).unwrap();
		}
		form.select_date(DatePart::Day, "29").unwrap();
		form.select_date(DatePart::Month, "02").unwrap();
		form.select_date(DatePart::Year, "1992").unwrap();
	}

	#[rstest]
	#[tokio::test]
	async fn test_invalid_form_never_reaches_transport() {
		// Arrange
		let mut transport = MockTransport::new();
		transport.expect_submit().times(0);
		let mut navigator = MockNav::new();
		navigator.expect_navigate().times(0);
		let controller = SubmissionController::new(
			Arc::new(transport),
			Arc::new(navigator),
			SuccessSchedule::default(),
		);

		// Act
		let state = controller.submit().await;

		// Assert
		assert_eq!(state, SubmissionState::Idle);
		assert!(controller.take_follow_up().is_none());
	}

	#[rstest]
	#[tokio::test]
	async fn test_payload_carries_composed_dob() {
		// Arrange
		let mut transport = MockTransport::new();
		transport
			.expect_submit()
			.withf(|payload| payload.get("dob") == Some("29-02-1992"))
			.times(1)
			.returning(|_| Ok(ApiEnvelope::ok("saved")));
		let controller = SubmissionController::new(
			Arc::new(transport),
			Arc::new(MockNav::new()),
			SuccessSchedule::default(),
		);
		controller.with_form(fill);

		// Act
		let state = controller.submit().await;

		// Assert
		assert_eq!(state, SubmissionState::Success);
		if let Some(handle) = controller.take_follow_up() {
			handle.abort();
		}
	}

	#[rstest]
	#[tokio::test]
	async fn test_transport_failure_uses_fallback_notice() {
		// Arrange
		let mut transport = MockTransport::new();
		transport.expect_submit().times(1).returning(|_| {
			Err(ClientError::Rejected {
				status: None,
				message: None,
			})
		});
		let controller = SubmissionController::new(
			Arc::new(transport),
			Arc::new(MockNav::new()),
			SuccessSchedule::default(),
		);
		controller.with_form(fill);

		// Act
		let state = controller.submit().await;

		// Assert
		assert_eq!(state, SubmissionState::Failed);
		assert_eq!(
			controller.notice(),
			Some(Notice::error(crate::form::SUBMIT_FAILED_MESSAGE))
		);
		assert!(controller.take_follow_up().is_none());
	}

	#[rstest]
	#[tokio::test(start_paused = true)]
	async fn test_dropped_controller_skips_follow_up() {
		// Arrange
		let mut transport = MockTransport::new();
		transport
			.expect_submit()
			.returning(|_| Ok(ApiEnvelope::ok("saved")));
		let mut navigator = MockNav::new();
		navigator.expect_navigate().times(0);
		let controller = SubmissionController::new(
			Arc::new(transport),
			Arc::new(navigator),
			SuccessSchedule::default(),
		);
		controller.with_form(fill);
		controller.submit().await;
		let handle = controller.take_follow_up().unwrap();

		// Act
		drop(controller);
		let result = handle.await;

		// Assert
		assert!(result.is_ok());
	}
}
