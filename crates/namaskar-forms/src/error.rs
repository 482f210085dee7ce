use crate::field::FieldName;

/// A single rule failure, carrying the message shown next to the field.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FieldError {
	#[error("{0}")]
	Required(String),
	#[error("{0}")]
	Invalid(String),
}

impl FieldError {
	pub fn message(&self) -> &str {
		match self {
			FieldError::Required(msg) | FieldError::Invalid(msg) => msg,
		}
	}
}

pub type FieldResult<T> = Result<T, FieldError>;

/// Errors raised while editing the form, before any validation pass.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
	#[error("'{value}' is not a valid choice for {field}")]
	InvalidChoice { field: FieldName, value: String },
	#[error("Invalid date selection: {0}")]
	InvalidDate(String),
	#[error("{0} cannot be set as text")]
	NotSettable(FieldName),
}

pub type FormResult<T> = Result<T, FormError>;
