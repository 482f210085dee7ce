//! # Namaskar
//!
//! Volunteer registration and account flows for the Namaskar Humanity Welfare
//! Society website.
//!
//! ## Feature Flags
//!
//! - `forms` - Field store, date of birth selects, validation, photo gate
//! - `conf` - Settings from `NAMASKAR_*` environment variables
//! - `client` - Backend client: volunteer submission, account calls, site content
//! - `full` (default) - Everything above
//!
//! ## Quick Example
//!
//! ```rust
//! # #[cfg(feature = "forms")]
//! # {
//! use namaskar::forms::{DatePart, FieldName, FieldStore};
//!
//! let mut store = FieldStore::new();
//! store.set_field(FieldName::Name, "Asha Verma").unwrap();
//! store.select_date(DatePart::Month, "02").unwrap();
//!
//! assert!(!store.validate());
//! assert!(!store.errors().contains(FieldName::Name));
//! # }
//! ```

#[cfg(feature = "forms")]
pub use namaskar_forms as forms;

#[cfg(feature = "conf")]
pub use namaskar_conf as conf;

#[cfg(feature = "client")]
pub use namaskar_client as client;

/// Commonly used types
pub mod prelude {
	#[cfg(feature = "forms")]
	pub use namaskar_forms::{
		ApplicantRecord, AvatarFile, ContactForm, DatePart, DateSelection, FieldErrors, FieldName,
		FieldStore, Gender, Qualification, validate,
	};

	#[cfg(feature = "conf")]
	pub use namaskar_conf::ClientSettings;

	#[cfg(feature = "client")]
	pub use namaskar_client::{
		AccountClient, ApiEnvelope, ClientError, ContentClient, Navigator, SubmissionController,
		SubmissionState,
	};
}
