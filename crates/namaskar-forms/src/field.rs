use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

/// Every input of the volunteer registration form, in display order.
///
/// The string form of each variant is the key the backend expects in the
/// multipart submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum FieldName {
	#[serde(rename = "name")]
	Name,
	#[serde(rename = "fname")]
	FatherName,
	#[serde(rename = "mname")]
	MotherName,
	#[serde(rename = "qualification")]
	Qualification,
	#[serde(rename = "email")]
	Email,
	#[serde(rename = "phone")]
	Phone,
	#[serde(rename = "gender")]
	Gender,
	#[serde(rename = "dob")]
	DateOfBirth,
	#[serde(rename = "skills")]
	Skills,
	#[serde(rename = "address")]
	Address,
	#[serde(rename = "city")]
	City,
	#[serde(rename = "state")]
	State,
	#[serde(rename = "pincode")]
	Pincode,
	#[serde(rename = "avatar")]
	Avatar,
}

impl FieldName {
	pub const ALL: [FieldName; 14] = [
		FieldName::Name,
		FieldName::FatherName,
		FieldName::MotherName,
		FieldName::Qualification,
		FieldName::Email,
		FieldName::Phone,
		FieldName::Gender,
		FieldName::DateOfBirth,
		FieldName::Skills,
		FieldName::Address,
		FieldName::City,
		FieldName::State,
		FieldName::Pincode,
		FieldName::Avatar,
	];

	/// Wire key of the field
	///
	/// # Examples
	///
	/// ```
	/// use namaskar_forms::FieldName;
	///
	/// assert_eq!(FieldName::FatherName.as_str(), "fname");
	/// assert_eq!(FieldName::DateOfBirth.as_str(), "dob");
	/// ```
	pub fn as_str(self) -> &'static str {
		match self {
			FieldName::Name => "name",
			FieldName::FatherName => "fname",
			FieldName::MotherName => "mname",
			FieldName::Qualification => "qualification",
			FieldName::Email => "email",
			FieldName::Phone => "phone",
			FieldName::Gender => "gender",
			FieldName::DateOfBirth => "dob",
			FieldName::Skills => "skills",
			FieldName::Address => "address",
			FieldName::City => "city",
			FieldName::State => "state",
			FieldName::Pincode => "pincode",
			FieldName::Avatar => "avatar",
		}
	}

	/// Look a field up by its wire key
	pub fn from_key(key: &str) -> Option<Self> {
		Self::ALL.into_iter().find(|f| f.as_str() == key)
	}
}

impl fmt::Display for FieldName {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// Snapshot of per-field error messages.
///
/// A field without an entry is currently valid. Produced wholesale by
/// [`validate`](crate::validate); the only incremental change is the
/// removal of a single entry when that field is edited.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<FieldName, String>);

impl FieldErrors {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	pub fn len(&self) -> usize {
		self.0.len()
	}

	pub fn get(&self, field: FieldName) -> Option<&str> {
		self.0.get(&field).map(String::as_str)
	}

	pub fn contains(&self, field: FieldName) -> bool {
		self.0.contains_key(&field)
	}

	pub fn fields(&self) -> impl Iterator<Item = FieldName> + '_ {
		self.0.keys().copied()
	}

	pub fn iter(&self) -> impl Iterator<Item = (FieldName, &str)> {
		self.0.iter().map(|(k, v)| (*k, v.as_str()))
	}

	pub(crate) fn insert(&mut self, field: FieldName, message: impl Into<String>) {
		self.0.insert(field, message.into());
	}

	pub(crate) fn remove(&mut self, field: FieldName) -> Option<String> {
		self.0.remove(&field)
	}
}

impl FromIterator<(FieldName, String)> for FieldErrors {
	fn from_iter<I: IntoIterator<Item = (FieldName, String)>>(iter: I) -> Self {
		Self(iter.into_iter().collect())
	}
}
