//! Client for the site's `/auth/*` endpoints
//!
//! Every call runs the matching local check first; when it fails the server
//! is never contacted.

use crate::envelope::{ApiEnvelope, read_envelope};
use crate::error::ClientResult;
use namaskar_conf::ClientSettings;
use namaskar_forms::{OtpRequest, PasswordResetForm, SignInForm, SignUpForm};
use reqwest::Client;
use reqwest::header::AUTHORIZATION;
use serde::Serialize;

/// Shown when an auth call fails without a server message.
pub const GENERIC_FAILURE_MESSAGE: &str = "Something went wrong. Please try again.";

const SIGN_IN_PATH: &str = "/auth/sign-in";
const SIGN_UP_PATH: &str = "/auth/sign-up";
const SEND_OTP_PATH: &str = "/auth/send-otp";
const FORGOT_PASSWORD_PATH: &str = "/auth/forgot-password";
const LOGOUT_PATH: &str = "/auth/logout";

/// Account API client.
///
/// # Examples
///
/// ```no_run
/// use namaskar_client::AccountClient;
/// use namaskar_conf::ClientSettings;
/// use namaskar_forms::SignInForm;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let settings = ClientSettings::new("https://api.example.org")?;
/// let client = AccountClient::new(&settings)?;
///
/// let envelope = client
///     .sign_in(&SignInForm::new("asha@example.org", "secret1"))
///     .await?;
/// let token: Option<String> = envelope.field("accessToken")?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct AccountClient {
	client: Client,
	settings: ClientSettings,
}

impl AccountClient {
	pub fn new(settings: &ClientSettings) -> ClientResult<Self> {
		let client = Client::builder()
			.timeout(settings.request_timeout)
			.build()?;
		Ok(Self::with_client(settings, client))
	}

	pub fn with_client(settings: &ClientSettings, client: Client) -> Self {
		Self {
			client,
			settings: settings.clone(),
		}
	}

	pub async fn sign_in(&self, form: &SignInForm) -> ClientResult<ApiEnvelope> {
		form.validate()?;
		self.post_json(SIGN_IN_PATH, form).await
	}

	pub async fn sign_up(&self, form: &SignUpForm) -> ClientResult<ApiEnvelope> {
		form.validate()?;
		self.post_json(SIGN_UP_PATH, form).await
	}

	/// Ask the server to e-mail a password reset code
	pub async fn send_otp(&self, request: &OtpRequest) -> ClientResult<ApiEnvelope> {
		request.validate()?;
		self.post_json(SEND_OTP_PATH, request).await
	}

	/// Set a new password using the e-mailed code
	pub async fn reset_password(&self, form: &PasswordResetForm) -> ClientResult<ApiEnvelope> {
		form.validate()?;
		self.post_json(FORGOT_PASSWORD_PATH, form).await
	}

	/// End the session identified by `access_token`
	pub async fn logout(&self, access_token: &str) -> ClientResult<ApiEnvelope> {
		let url = self.settings.endpoint(LOGOUT_PATH);
		tracing::debug!(%url, "logging out");
		let response = self
			.client
			.post(url)
			.header(AUTHORIZATION, access_token)
			.send()
			.await?;
		read_envelope(response)
			.await
			.inspect_err(|e| tracing::warn!(error = %e, "logout failed"))
	}

	async fn post_json<B>(&self, path: &str, body: &B) -> ClientResult<ApiEnvelope>
	where
		B: Serialize + ?Sized,
	{
		let url = self.settings.endpoint(path);
		tracing::debug!(%url, "calling auth endpoint");
		let response = self.client.post(url).json(body).send().await?;
		read_envelope(response)
			.await
			.inspect_err(|e| tracing::warn!(path, error = %e, "auth request failed"))
	}
}
