//! Delivery of volunteer applications to the backend

use crate::envelope::{ApiEnvelope, read_envelope};
use crate::error::ClientResult;
use crate::payload::VolunteerPayload;
use async_trait::async_trait;
use namaskar_conf::ClientSettings;
use reqwest::Client;
use url::Url;

/// Path of the volunteer registration endpoint, relative to the server URL.
pub const VOLUNTEER_PATH: &str = "/volunteer/re-as-volunteer";

/// Sends a volunteer application and reports the server's answer.
///
/// `Ok` means the server acknowledged the application.
#[async_trait]
pub trait SubmissionTransport: Send + Sync {
	async fn submit(&self, payload: VolunteerPayload) -> ClientResult<ApiEnvelope>;
}

/// [`SubmissionTransport`] over HTTP multipart.
///
/// # Examples
///
/// ```
/// use namaskar_client::HttpTransport;
/// use namaskar_conf::ClientSettings;
///
/// let settings = ClientSettings::new("https://api.example.org").unwrap();
/// let transport = HttpTransport::new(&settings).unwrap();
/// assert_eq!(
///     transport.endpoint().as_str(),
///     "https://api.example.org/volunteer/re-as-volunteer"
/// );
/// ```
#[derive(Debug, Clone)]
pub struct HttpTransport {
	client: Client,
	endpoint: Url,
}

impl HttpTransport {
	/// Build a client with the configured request timeout
	pub fn new(settings: &ClientSettings) -> ClientResult<Self> {
		let client = Client::builder()
			.timeout(settings.request_timeout)
			.build()?;
		Ok(Self::with_client(settings, client))
	}

	/// Use an existing HTTP client
	pub fn with_client(settings: &ClientSettings, client: Client) -> Self {
		Self {
			client,
			endpoint: settings.endpoint(VOLUNTEER_PATH),
		}
	}

	pub fn endpoint(&self) -> &Url {
		&self.endpoint
	}
}

#[async_trait]
impl SubmissionTransport for HttpTransport {
	async fn submit(&self, payload: VolunteerPayload) -> ClientResult<ApiEnvelope> {
		let has_avatar = payload.avatar().is_some();
		let form = payload.into_multipart()?;

		tracing::debug!(endpoint = %self.endpoint, has_avatar, "sending volunteer application");
		let response = self
			.client
			.post(self.endpoint.clone())
			.multipart(form)
			.send()
			.await?;

		read_envelope(response).await
	}
}
