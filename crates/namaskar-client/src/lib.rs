//! Backend client for the Namaskar website
//!
//! - Multipart delivery of volunteer applications
//! - The submission lifecycle (`Idle`, `Submitting`, `Success`, `Failed`)
//!   with reset and redirect after a success
//! - Sign-in, sign-up, password reset and logout calls
//! - Team and program listings
//!
//! All endpoints answer with the same [`ApiEnvelope`].
//!
//! # Examples
//!
//! ```no_run
//! use namaskar_client::{Navigator, SubmissionController};
//! use namaskar_conf::ClientSettings;
//! use namaskar_forms::FieldName;
//! use std::sync::Arc;
//!
//! struct Router;
//!
//! impl Navigator for Router {
//!     fn navigate(&self, path: &str) {
//!         println!("navigate to {path}");
//!     }
//! }
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let settings = ClientSettings::from_env()?;
//! let controller = SubmissionController::from_settings(&settings, Arc::new(Router))?;
//!
//! controller.with_form(|form| form.set_field(FieldName::Name, "Asha Verma"))?;
//! let state = controller.submit().await;
//! println!("{state}: {:?}", controller.notice());
//! # Ok(())
//! # }
//! ```

pub mod account;
pub mod content;
pub mod controller;
pub mod envelope;
pub mod error;
pub mod form;
pub mod payload;
pub mod transport;

pub use account::{AccountClient, GENERIC_FAILURE_MESSAGE};
pub use content::{ContentClient, ImageRef, Program, TeamMember};
pub use controller::{Navigator, SubmissionController, SuccessSchedule};
pub use envelope::ApiEnvelope;
pub use error::{ClientError, ClientResult};
pub use form::{
	Notice, NoticeKind, RegistrationForm, SUBMIT_FAILED_MESSAGE, SUBMITTED_MESSAGE,
	SubmissionState, SubmitAttempt, VALIDATION_FAILED_MESSAGE,
};
pub use payload::VolunteerPayload;
pub use transport::{HttpTransport, SubmissionTransport, VOLUNTEER_PATH};
