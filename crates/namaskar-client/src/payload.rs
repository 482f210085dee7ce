//! Outbound multipart body for a volunteer application

use crate::error::{ClientError, ClientResult};
use namaskar_forms::{ApplicantRecord, AvatarFile, FieldName};
use reqwest::multipart;

// Order in which text parts are written to the body.
const TEXT_PARTS: [FieldName; 13] = [
	FieldName::Qualification,
	FieldName::Name,
	FieldName::FatherName,
	FieldName::MotherName,
	FieldName::Email,
	FieldName::Phone,
	FieldName::Gender,
	FieldName::DateOfBirth,
	FieldName::Skills,
	FieldName::Address,
	FieldName::State,
	FieldName::City,
	FieldName::Pincode,
];

/// A validated applicant record flattened into wire fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VolunteerPayload {
	fields: Vec<(&'static str, String)>,
	avatar: Option<AvatarFile>,
}

impl VolunteerPayload {
	/// Flatten `record`, composing the date of birth as `DD-MM-YYYY`.
	///
	/// Meant for records that passed validation; an incomplete date is sent
	/// as an empty string.
	///
	/// # Examples
	///
	/// ```
	/// use namaskar_client::VolunteerPayload;
	/// use namaskar_forms::ApplicantRecord;
	///
	/// let mut record = ApplicantRecord::default();
	/// record.name = "Asha".to_string();
	///
	/// let payload = VolunteerPayload::from_record(&record);
	/// assert_eq!(payload.get("name"), Some("Asha"));
	/// assert_eq!(payload.fields().next(), Some(("qualification", "")));
	/// ```
	pub fn from_record(record: &ApplicantRecord) -> Self {
		let fields = TEXT_PARTS
			.iter()
			.map(|&field| {
				let value = match field {
					FieldName::DateOfBirth => record.dob.compose().unwrap_or_default(),
					_ => record.text(field).unwrap_or_default().to_string(),
				};
				(field.as_str(), value)
			})
			.collect();
		Self {
			fields,
			avatar: record.avatar.clone(),
		}
	}

	/// Text parts in the order they are sent
	pub fn fields(&self) -> impl Iterator<Item = (&'static str, &str)> + '_ {
		self.fields.iter().map(|(key, value)| (*key, value.as_str()))
	}

	pub fn get(&self, key: &str) -> Option<&str> {
		self.fields
			.iter()
			.find(|(k, _)| *k == key)
			.map(|(_, v)| v.as_str())
	}

	pub fn avatar(&self) -> Option<&AvatarFile> {
		self.avatar.as_ref()
	}

	/// Build the multipart body. The photo part, when present, keeps its
	/// original file name and content type.
	pub fn into_multipart(self) -> ClientResult<multipart::Form> {
		let mut form = multipart::Form::new();
		for (key, value) in self.fields {
			form = form.text(key, value);
		}

		if let Some(avatar) = self.avatar {
			let part = multipart::Part::bytes(avatar.bytes)
				.file_name(avatar.file_name)
				.mime_str(&avatar.content_type)
				.map_err(|e| ClientError::Attachment(format!("Failed to set MIME type: {}", e)))?;
			form = form.part(FieldName::Avatar.as_str(), part);
		}

		Ok(form)
	}
}
