//! The `{ success, message, ... }` body every backend endpoint returns

use crate::error::{ClientError, ClientResult};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Response envelope shared by the volunteer and auth endpoints.
///
/// Fields other than `success` and `message` are kept in `data`.
///
/// # Examples
///
/// ```
/// use namaskar_client::ApiEnvelope;
///
/// let envelope: ApiEnvelope =
///     serde_json::from_str(r#"{"success":true,"message":"Welcome","accessToken":"t0k"}"#)
///         .unwrap();
/// assert!(envelope.success);
/// assert_eq!(envelope.message.as_deref(), Some("Welcome"));
/// assert_eq!(envelope.data["accessToken"], "t0k");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ApiEnvelope {
	#[serde(default)]
	pub success: bool,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub message: Option<String>,
	#[serde(flatten)]
	pub data: Map<String, Value>,
}

impl ApiEnvelope {
	pub fn ok(message: impl Into<String>) -> Self {
		Self {
			success: true,
			message: Some(message.into()),
			data: Map::new(),
		}
	}

	pub fn rejected(message: impl Into<String>) -> Self {
		Self {
			success: false,
			message: Some(message.into()),
			data: Map::new(),
		}
	}

	/// Decode one extra field of the body, `None` when absent
	pub fn field<T: DeserializeOwned>(&self, key: &str) -> ClientResult<Option<T>> {
		match self.data.get(key) {
			Some(value) => Ok(Some(serde_json::from_value(value.clone())?)),
			None => Ok(None),
		}
	}

	/// `Ok` only when the server acknowledged the request
	pub fn into_result(self, status: Option<u16>) -> ClientResult<Self> {
		if self.success {
			Ok(self)
		} else {
			Err(ClientError::Rejected {
				status,
				message: self.message,
			})
		}
	}
}

/// Read a response body into an acknowledged envelope.
///
/// Error statuses, bodies that are not an envelope and `success: false` all
/// become [`ClientError::Rejected`], carrying the server message when one
/// could be read.
pub(crate) async fn read_envelope(response: reqwest::Response) -> ClientResult<ApiEnvelope> {
	let status = response.status();
	let body = response.text().await?;

	let envelope = match serde_json::from_str::<ApiEnvelope>(&body) {
		Ok(envelope) => envelope,
		Err(e) => {
			tracing::warn!(status = status.as_u16(), error = %e, "response body is not an API envelope");
			return Err(ClientError::Rejected {
				status: Some(status.as_u16()),
				message: None,
			});
		}
	};

	if !status.is_success() {
		return Err(ClientError::Rejected {
			status: Some(status.as_u16()),
			message: envelope.message,
		});
	}
	envelope.into_result(Some(status.as_u16()))
}
