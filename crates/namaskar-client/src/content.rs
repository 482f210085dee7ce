//! Read-only site content: the team roster and the program list
//!
//! Both endpoints answer with the usual envelope and put the records in its
//! `data` field.

use crate::envelope::read_envelope;
use crate::error::ClientResult;
use namaskar_conf::ClientSettings;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

const TEAM_PATH: &str = "/team/get";
const PROGRAM_PATH: &str = "/program/get";

/// Hosted image reference
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageRef {
	#[serde(default)]
	pub url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamMember {
	#[serde(rename = "_id", default)]
	pub id: String,
	#[serde(default)]
	pub name: String,
	#[serde(default)]
	pub role: String,
	#[serde(default)]
	pub avatar: Option<ImageRef>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Program {
	#[serde(rename = "_id", default)]
	pub id: String,
	#[serde(default)]
	pub title: String,
	#[serde(default)]
	pub description: String,
	#[serde(rename = "coverImage", default)]
	pub cover_image: Option<ImageRef>,
}

impl Program {
	/// First `max_chars` characters of the description, for cards
	pub fn summary(&self, max_chars: usize) -> &str {
		match self.description.char_indices().nth(max_chars) {
			Some((end, _)) => &self.description[..end],
			None => &self.description,
		}
	}
}

/// Client for the public content endpoints.
///
/// # Examples
///
/// ```no_run
/// use namaskar_client::ContentClient;
/// use namaskar_conf::ClientSettings;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let settings = ClientSettings::new("https://api.example.org")?;
/// let content = ContentClient::new(&settings)?;
///
/// for member in content.team().await? {
///     println!("{} ({})", member.name, member.role);
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct ContentClient {
	client: Client,
	settings: ClientSettings,
}

impl ContentClient {
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

	pub async fn team(&self) -> ClientResult<Vec<TeamMember>> {
		self.list(TEAM_PATH).await
	}

	pub async fn programs(&self) -> ClientResult<Vec<Program>> {
		self.list(PROGRAM_PATH).await
	}

	// A missing `data` field reads as an empty list.
	async fn list<T: DeserializeOwned>(&self, path: &str) -> ClientResult<Vec<T>> {
		let url = self.settings.endpoint(path);
		tracing::debug!(%url, "fetching content");
		let response = self.client.get(url).send().await?;
		let envelope = read_envelope(response)
			.await
			.inspect_err(|e| tracing::warn!(path, error = %e, "content request failed"))?;
		let items = envelope.field::<Vec<T>>("data")?.unwrap_or_default();
		tracing::debug!(path, count = items.len(), "content loaded");
		Ok(items)
	}
}
