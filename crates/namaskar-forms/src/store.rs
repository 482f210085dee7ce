//! Current values of the registration form and their error messages

use crate::avatar::{AvatarError, AvatarFile, AvatarGate, AvatarLoadError};
use std::path::Path;
use crate::choices::{Gender, Qualification};
use crate::date::{DatePart, DateSelection};
use crate::error::{FormError, FormResult};
use crate::field::{FieldErrors, FieldName};
use crate::validator;

/// Everything the applicant has entered so far.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApplicantRecord {
	pub name: String,
	pub father_name: String,
	pub mother_name: String,
	pub qualification: Option<Qualification>,
	pub email: String,
	pub phone: String,
	pub gender: Option<Gender>,
	pub dob: DateSelection,
	pub skills: String,
	pub address: String,
	pub city: String,
	pub state: String,
	pub pincode: String,
	pub avatar: Option<AvatarFile>,
}

impl ApplicantRecord {
	/// Raw text of a text or choice field; `None` for the date and photo
	pub fn text(&self, field: FieldName) -> Option<&str> {
		let value = match field {
			FieldName::Name => &self.name,
			FieldName::FatherName => &self.father_name,
			FieldName::MotherName => &self.mother_name,
			FieldName::Email => &self.email,
			FieldName::Phone => &self.phone,
			FieldName::Skills => &self.skills,
			FieldName::Address => &self.address,
			FieldName::City => &self.city,
			FieldName::State => &self.state,
			FieldName::Pincode => &self.pincode,
			FieldName::Qualification => {
				return Some(self.qualification.map(Qualification::as_str).unwrap_or(""));
			}
			FieldName::Gender => return Some(self.gender.map(Gender::as_str).unwrap_or("")),
			FieldName::DateOfBirth | FieldName::Avatar => return None,
		};
		Some(value)
	}
}

/// Owner of the applicant record and the per-field error snapshot.
///
/// All edits go through this type. Editing a field clears that field's
/// error; errors come back only on the next [`validate`](Self::validate).
///
/// # Examples
///
/// ```
/// use namaskar_forms::{FieldName, FieldStore};
///
/// let mut store = FieldStore::new();
/// assert!(!store.validate());
/// assert!(store.errors().contains(FieldName::Email));
///
/// store.set_field(FieldName::Email, "asha@example.org").unwrap();
/// assert!(!store.errors().contains(FieldName::Email));
/// ```
#[derive(Debug, Clone, Default)]
pub struct FieldStore {
	record: ApplicantRecord,
	errors: FieldErrors,
	gate: AvatarGate,
}

impl FieldStore {
	pub fn new() -> Self {
		Self::default()
	}

	/// Use a gate with non-default size bounds
	pub fn with_gate(gate: AvatarGate) -> Self {
		Self {
			gate,
			..Self::default()
		}
	}

	pub fn record(&self) -> &ApplicantRecord {
		&self.record
	}

	pub fn errors(&self) -> &FieldErrors {
		&self.errors
	}

	/// Overwrite a text or choice field and clear its error.
	///
	/// Choice fields take the submitted value or the display label; an empty
	/// string clears the selection. An unknown choice leaves the field as it
	/// was.
	pub fn set_field(&mut self, field: FieldName, value: impl Into<String>) -> FormResult<()> {
		let value = value.into();
		match field {
			FieldName::Qualification => {
				self.record.qualification = parse_choice(field, &value)?;
			}
			FieldName::Gender => {
				self.record.gender = parse_choice(field, &value)?;
			}
			_ => match self.text_slot(field) {
				Some(slot) => *slot = value,
				None => return Err(FormError::NotSettable(field)),
			},
		}
		self.errors.remove(field);
		tracing::debug!(field = %field, "field updated");
		Ok(())
	}

	/// Change one part of the date of birth and clear the date error
	pub fn select_date(&mut self, part: DatePart, value: &str) -> FormResult<()> {
		self.record.dob.select(part, value)?;
		self.errors.remove(FieldName::DateOfBirth);
		Ok(())
	}

	/// Offer a photo to the upload gate.
	///
	/// On rejection the error is recorded against the photo field and any
	/// previously accepted photo is kept.
	pub fn offer_avatar(&mut self, file: AvatarFile) -> Result<(), AvatarError> {
		match self.gate.admit(file) {
			Ok(file) => {
				tracing::debug!(size = file.size(), file_name = %file.file_name, "avatar accepted");
				self.record.avatar = Some(file);
				self.errors.remove(FieldName::Avatar);
				Ok(())
			}
			Err(e) => {
				tracing::warn!(error = %e, "avatar rejected");
				self.errors.insert(FieldName::Avatar, e.to_string());
				Err(e)
			}
		}
	}

	/// Offer a photo from disk. Files outside the gate's bounds are not read.
	pub fn offer_avatar_path(&mut self, path: impl AsRef<Path>) -> Result<(), AvatarLoadError> {
		match self.gate.open(path) {
			Ok(file) => {
				self.offer_avatar(file)?;
				Ok(())
			}
			Err(AvatarLoadError::Rejected(e)) => {
				tracing::warn!(error = %e, "avatar rejected");
				self.errors.insert(FieldName::Avatar, e.to_string());
				Err(e.into())
			}
			Err(e) => Err(e),
		}
	}

	pub fn clear_avatar(&mut self) {
		self.record.avatar = None;
		self.errors.remove(FieldName::Avatar);
	}

	/// Run a full validation pass, replacing the error snapshot.
	///
	/// Returns `true` when the record has no errors.
	pub fn validate(&mut self) -> bool {
		self.errors = validator::validate(&self.record);
		self.errors.is_empty()
	}

	/// Replace the error snapshot wholesale
	pub fn apply_errors(&mut self, errors: FieldErrors) {
		self.errors = errors;
	}

	/// Restore every field to empty and drop all errors
	pub fn reset(&mut self) {
		self.record = ApplicantRecord::default();
		self.errors = FieldErrors::new();
	}

	pub fn is_empty(&self) -> bool {
		self.record == ApplicantRecord::default()
	}

	fn text_slot(&mut self, field: FieldName) -> Option<&mut String> {
		let slot = match field {
			FieldName::Name => &mut self.record.name,
			FieldName::FatherName => &mut self.record.father_name,
			FieldName::MotherName => &mut self.record.mother_name,
			FieldName::Email => &mut self.record.email,
			FieldName::Phone => &mut self.record.phone,
			FieldName::Skills => &mut self.record.skills,
			FieldName::Address => &mut self.record.address,
			FieldName::City => &mut self.record.city,
			FieldName::State => &mut self.record.state,
			FieldName::Pincode => &mut self.record.pincode,
			FieldName::Qualification
			| FieldName::Gender
			| FieldName::DateOfBirth
			| FieldName::Avatar => return None,
		};
		Some(slot)
	}
}

fn parse_choice<T: std::str::FromStr>(field: FieldName, value: &str) -> FormResult<Option<T>> {
	if value.trim().is_empty() {
		return Ok(None);
	}
	value
		.parse::<T>()
		.map(Some)
		.map_err(|_| FormError::InvalidChoice {
			field,
			value: value.to_string(),
		})
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::avatar::MIN_AVATAR_SIZE;
	use rstest::{fixture, rstest};

	#[fixture]
	fn store() -> FieldStore {
		FieldStore::new()
	}

	fn photo(size: u64, name: &str) -> AvatarFile {
		AvatarFile::new(name, "image/jpeg", vec![0; size as usize])
	}

	#[rstest]
	fn test_set_field_clears_only_that_error(mut store: FieldStore) {
		// Arrange
		store.validate();
		let before = store.errors().len();

		// Act
		store.set_field(FieldName::City, "Varanasi").unwrap();

		// Assert
		assert!(!store.errors().contains(FieldName::City));
		assert_eq!(store.errors().len(), before - 1);
		assert_eq!(store.record().city, "Varanasi");
	}

	#[rstest]
	fn test_clearing_a_field_does_not_bring_error_back(mut store: FieldStore) {
		store.set_field(FieldName::Name, "Asha").unwrap();
		store.set_field(FieldName::Name, "").unwrap();

		assert!(store.errors().is_empty());
		assert!(!store.validate());
		assert!(store.errors().contains(FieldName::Name));
	}

	#[rstest]
	fn test_choice_fields_parse_values(mut store: FieldStore) {
		store
			.set_field(FieldName::Qualification, "Post Graduate")
			.unwrap();
		store.set_field(FieldName::Gender, "Other").unwrap();

		assert_eq!(
			store.record().qualification,
			Some(Qualification::PostGraduate)
		);
		assert_eq!(store.record().gender, Some(Gender::Other));
		assert_eq!(
			store.record().text(FieldName::Qualification),
			Some("Post Graduate")
		);
	}

	#[rstest]
	fn test_unknown_choice_is_rejected_and_keeps_value(mut store: FieldStore) {
		// Arrange
		store.set_field(FieldName::Gender, "Male").unwrap();

		// Act
		let result = store.set_field(FieldName::Gender, "Unknown");

		// Assert
		assert_eq!(
			result,
			Err(FormError::InvalidChoice {
				field: FieldName::Gender,
				value: "Unknown".to_string(),
			})
		);
		assert_eq!(store.record().gender, Some(Gender::Male));
	}

	#[rstest]
	#[case(FieldName::DateOfBirth)]
	#[case(FieldName::Avatar)]
	fn test_structured_fields_are_not_settable(mut store: FieldStore, #[case] field: FieldName) {
		assert_eq!(
			store.set_field(field, "x"),
			Err(FormError::NotSettable(field))
		);
	}

	#[rstest]
	fn test_select_date_clears_dob_error(mut store: FieldStore) {
		store.validate();
		assert!(store.errors().contains(FieldName::DateOfBirth));

		store.select_date(DatePart::Month, "06").unwrap();

		assert!(!store.errors().contains(FieldName::DateOfBirth));
		assert_eq!(store.record().dob.month(), Some(6));
	}

	#[rstest]
	fn test_rejected_avatar_keeps_previous_photo(mut store: FieldStore) {
		// Arrange
		store
			.offer_avatar(photo(MIN_AVATAR_SIZE * 2, "first.jpg"))
			.unwrap();

		// Act
		let result = store.offer_avatar(photo(10, "tiny.jpg"));

		// Assert
		assert!(result.is_err());
		assert_eq!(
			store.record().avatar.as_ref().map(|a| a.file_name.as_str()),
			Some("first.jpg")
		);
		assert_eq!(
			store.errors().get(FieldName::Avatar),
			Some("File size should be 100KB to 2MB")
		);
	}

	#[rstest]
	fn test_rejected_avatar_without_previous_stays_empty(mut store: FieldStore) {
		let _ = store.offer_avatar(photo(10, "tiny.jpg"));
		assert!(store.record().avatar.is_none());
	}

	#[rstest]
	fn test_accepted_avatar_clears_error(mut store: FieldStore) {
		let _ = store.offer_avatar(photo(10, "tiny.jpg"));
		store
			.offer_avatar(photo(MIN_AVATAR_SIZE, "ok.jpg"))
			.unwrap();
		assert!(!store.errors().contains(FieldName::Avatar));
	}

	#[rstest]
	fn test_oversized_avatar_path_records_error(mut store: FieldStore) {
		// Arrange
		let dir = tempfile::tempdir().unwrap();
		let path = dir.path().join("scan.png");
		std::fs::File::create(&path)
			.unwrap()
			.set_len(10 * 1024 * 1024)
			.unwrap();

		// Act
		let result = store.offer_avatar_path(&path);

		// Assert
		assert!(matches!(result, Err(AvatarLoadError::Rejected(_))));
		assert!(store.record().avatar.is_none());
		assert_eq!(
			store.errors().get(FieldName::Avatar),
			Some("File size should be 100KB to 2MB")
		);
	}

	#[rstest]
	fn test_reset_restores_defaults(mut store: FieldStore) {
		// Arrange
		store.set_field(FieldName::Name, "Asha").unwrap();
		store.select_date(DatePart::Year, "1990").unwrap();
		store
			.offer_avatar(photo(MIN_AVATAR_SIZE, "ok.jpg"))
			.unwrap();
		store.validate();

		// Act
		store.reset();

		// Assert
		assert!(store.is_empty());
		assert!(store.errors().is_empty());
	}
}
