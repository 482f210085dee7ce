use namaskar_forms::AccountFormError;

/// Errors from talking to the backend service
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
	/// No usable response: connection refused, timeout, TLS failure
	#[error("Request failed: {0}")]
	Transport(#[from] reqwest::Error),

	/// The server answered but did not acknowledge the request
	#[error("Request rejected (status: {status:?}): {}", .message.as_deref().unwrap_or("no message"))]
	Rejected {
		status: Option<u16>,
		message: Option<String>,
	},

	#[error("Failed to decode response data: {0}")]
	Decode(#[from] serde_json::Error),

	#[error("Invalid request URL: {0}")]
	InvalidUrl(#[from] url::ParseError),

	#[error("Invalid attachment: {0}")]
	Attachment(String),

	/// A local pre-flight check failed; nothing was sent
	#[error(transparent)]
	Invalid(#[from] AccountFormError),
}

impl ClientError {
	/// The text to show the user for this failure.
	///
	/// Server-provided messages and local check failures are shown as-is;
	/// everything else falls back to `fallback`.
	///
	/// # Examples
	///
	/// ```
	/// use namaskar_client::ClientError;
	///
	/// let rejected = ClientError::Rejected {
	///     status: Some(409),
	///     message: Some("Email already exists".to_string()),
	/// };
	/// assert_eq!(rejected.user_message("Try again"), "Email already exists");
	///
	/// let silent = ClientError::Rejected { status: Some(500), message: None };
	/// assert_eq!(silent.user_message("Try again"), "Try again");
	/// ```
	pub fn user_message(&self, fallback: &str) -> String {
		match self {
			ClientError::Rejected {
				message: Some(message),
				..
			} if !message.trim().is_empty() => message.clone(),
			ClientError::Invalid(e) => e.to_string(),
			_ => fallback.to_string(),
		}
	}

	/// HTTP status of the response, when there was one
	pub fn status(&self) -> Option<u16> {
		match self {
			ClientError::Rejected { status, .. } => *status,
			ClientError::Transport(e) => e.status().map(|s| s.as_u16()),
			_ => None,
		}
	}
}

pub type ClientResult<T> = Result<T, ClientError>;
