//! Volunteer registration form state and validation for Namaskar
//!
//! This crate holds everything the registration page needs before a request
//! leaves the browser:
//! - Field store with clear-on-edit error handling
//! - Date of birth composed from day/month/year selects
//! - Whole-record validation producing an immutable error snapshot
//! - Profile photo size gate and data URL preview
//! - Pre-flight checks for the account forms and the contact form

pub mod account;
pub mod avatar;
pub mod choices;
pub mod contact;
pub mod date;
pub mod error;
pub mod field;
pub mod preview;
pub mod store;
pub mod validator;

pub use account::{AccountFormError, OtpRequest, PasswordResetForm, SignInForm, SignUpForm};
pub use avatar::{
	AvatarError, AvatarFile, AvatarGate, AvatarLoadError, MAX_AVATAR_SIZE, MIN_AVATAR_SIZE,
};
pub use choices::{Gender, Qualification};
pub use contact::{ContactError, ContactField, ContactForm, ContactSubject};
pub use date::{DatePart, DateSelection, days_in_month};
pub use error::{FieldError, FieldResult, FormError, FormResult};
pub use field::{FieldErrors, FieldName};
pub use store::{ApplicantRecord, FieldStore};
pub use validator::validate;
