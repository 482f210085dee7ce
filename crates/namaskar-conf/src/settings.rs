//! Client settings
//!
//! Everything the website client needs to reach the backend and to sequence
//! the post-submission follow-up. Variables carry the `NAMASKAR_` prefix:
//!
//! | Variable | Default |
//! |---|---|
//! | `NAMASKAR_SERVER_URL` | required |
//! | `NAMASKAR_REQUEST_TIMEOUT_SECS` | `30` |
//! | `NAMASKAR_RESET_DELAY_MS` | `2000` |
//! | `NAMASKAR_REDIRECT_DELAY_MS` | `4000` |
//! | `NAMASKAR_REDIRECT_PATH` | `/` |

use crate::env::{Env, EnvError};
use std::time::Duration;
use url::Url;

/// Prefix shared by every settings variable.
pub const ENV_PREFIX: &str = "NAMASKAR_";

const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
const DEFAULT_RESET_DELAY_MS: u64 = 2_000;
const DEFAULT_REDIRECT_DELAY_MS: u64 = 4_000;
const DEFAULT_REDIRECT_PATH: &str = "/";

/// Settings errors
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
	#[error(transparent)]
	Env(#[from] EnvError),

	#[error("Server URL cannot be used as a base: {0}")]
	InvalidServerUrl(String),

	#[error("Redirect delay ({redirect:?}) must not be shorter than reset delay ({reset:?})")]
	DelayOrder { reset: Duration, redirect: Duration },
}

/// Resolved client settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientSettings {
	/// Base URL of the backend service
	pub server_url: Url,
	/// Timeout applied to every outbound request
	pub request_timeout: Duration,
	/// Delay between a successful submission and the form reset
	pub reset_delay: Duration,
	/// Delay between a successful submission and navigating away
	pub redirect_delay: Duration,
	/// Where to navigate after a successful submission
	pub redirect_path: String,
}

impl ClientSettings {
	/// Create settings for `server_url` with every other value at its default
	///
	/// # Examples
	///
	/// ```
	/// use namaskar_conf::ClientSettings;
	/// use std::time::Duration;
	///
	/// let settings = ClientSettings::new("https://api.example.org").unwrap();
	/// assert_eq!(settings.request_timeout, Duration::from_secs(30));
	/// assert_eq!(settings.redirect_path, "/");
	/// ```
	pub fn new(server_url: &str) -> Result<Self, SettingsError> {
		let server_url =
			Url::parse(server_url).map_err(|e| SettingsError::InvalidServerUrl(e.to_string()))?;
		Self::from_parts(
			server_url,
			Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
			Duration::from_millis(DEFAULT_RESET_DELAY_MS),
			Duration::from_millis(DEFAULT_REDIRECT_DELAY_MS),
			DEFAULT_REDIRECT_PATH.to_string(),
		)
	}

	/// Load settings from the process environment, reading `.env` first when present
	pub fn from_env() -> Result<Self, SettingsError> {
		if let Err(e) = dotenv::dotenv() {
			tracing::debug!(error = %e, "no .env file loaded");
		}
		Self::from_source(&Env::new().with_prefix(ENV_PREFIX))
	}

	/// Load settings from an explicit [`Env`] reader
	///
	/// # Examples
	///
	/// ```
	/// use namaskar_conf::{ClientSettings, Env};
	///
	/// let env = Env::from_pairs([
	///     ("NAMASKAR_SERVER_URL", "https://api.example.org"),
	///     ("NAMASKAR_REDIRECT_PATH", "/thanks"),
	/// ])
	/// .with_prefix("NAMASKAR_");
	///
	/// let settings = ClientSettings::from_source(&env).unwrap();
	/// assert_eq!(settings.redirect_path, "/thanks");
	/// ```
	pub fn from_source(env: &Env) -> Result<Self, SettingsError> {
		let server_url = env.url("SERVER_URL")?;
		let request_timeout =
			env.u64_with_default("REQUEST_TIMEOUT_SECS", Some(DEFAULT_REQUEST_TIMEOUT_SECS))?;
		let reset_delay = env.u64_with_default("RESET_DELAY_MS", Some(DEFAULT_RESET_DELAY_MS))?;
		let redirect_delay =
			env.u64_with_default("REDIRECT_DELAY_MS", Some(DEFAULT_REDIRECT_DELAY_MS))?;
		let redirect_path = env.str_with_default("REDIRECT_PATH", Some(DEFAULT_REDIRECT_PATH))?;

		let settings = Self::from_parts(
			server_url,
			Duration::from_secs(request_timeout),
			Duration::from_millis(reset_delay),
			Duration::from_millis(redirect_delay),
			redirect_path,
		)?;
		tracing::debug!(
			server_url = %settings.server_url,
			timeout_secs = request_timeout,
			"client settings loaded"
		);
		Ok(settings)
	}

	fn from_parts(
		server_url: Url,
		request_timeout: Duration,
		reset_delay: Duration,
		redirect_delay: Duration,
		redirect_path: String,
	) -> Result<Self, SettingsError> {
		if server_url.cannot_be_a_base() {
			return Err(SettingsError::InvalidServerUrl(server_url.to_string()));
		}
		if redirect_delay < reset_delay {
			return Err(SettingsError::DelayOrder {
				reset: reset_delay,
				redirect: redirect_delay,
			});
		}
		Ok(Self {
			server_url,
			request_timeout,
			reset_delay,
			redirect_delay,
			redirect_path,
		})
	}

	/// Override the follow-up delays
	pub fn with_delays(
		mut self,
		reset_delay: Duration,
		redirect_delay: Duration,
	) -> Result<Self, SettingsError> {
		if redirect_delay < reset_delay {
			return Err(SettingsError::DelayOrder {
				reset: reset_delay,
				redirect: redirect_delay,
			});
		}
		self.reset_delay = reset_delay;
		self.redirect_delay = redirect_delay;
		Ok(self)
	}

	/// Override the request timeout
	pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
		self.request_timeout = timeout;
		self
	}

	/// Resolve an endpoint path against the server URL
	///
	/// The server URL may carry a path prefix (`https://host/api`); the
	/// endpoint is appended to it rather than replacing it.
	///
	/// # Examples
	///
	/// ```
	/// use namaskar_conf::ClientSettings;
	///
	/// let settings = ClientSettings::new("https://host.example/api").unwrap();
	/// assert_eq!(
	///     settings.endpoint("/volunteer/re-as-volunteer").as_str(),
	///     "https://host.example/api/volunteer/re-as-volunteer"
	/// );
	/// ```
	pub fn endpoint(&self, path: &str) -> Url {
		let mut url = self.server_url.clone();
		let joined = format!(
			"{}/{}",
			url.path().trim_end_matches('/'),
			path.trim_start_matches('/')
		);
		url.set_path(&joined);
		url
	}
}
