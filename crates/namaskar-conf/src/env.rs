//! Prefixed environment lookups
//!
//! Typed reads of prefixed environment variables. Values come either from the
//! process environment or from an in-memory table, so settings can be built
//! in tests without touching global state.

use std::collections::HashMap;
use std::env;
use std::path::Path;
use url::Url;

/// Where [`Env`] reads raw values from.
#[derive(Debug, Clone, Default)]
enum Source {
	#[default]
	Process,
	Table(HashMap<String, String>),
}

/// Environment variable reader with prefix support
#[derive(Debug, Clone, Default)]
pub struct Env {
	/// Optional prefix for environment variables (e.g., "NAMASKAR_")
	pub prefix: Option<String>,
	source: Source,
}

impl Env {
	/// Create a reader over the process environment
	pub fn new() -> Self {
		Self::default()
	}

	/// Create a reader over a fixed table of variables
	///
	/// # Examples
	///
	/// ```
	/// use namaskar_conf::Env;
	///
	/// let env = Env::from_pairs([("NAMASKAR_SERVER_URL", "http://localhost:4000")])
	///     .with_prefix("NAMASKAR_");
	/// assert_eq!(env.str("SERVER_URL").unwrap(), "http://localhost:4000");
	/// ```
	pub fn from_pairs<I, K, V>(pairs: I) -> Self
	where
		I: IntoIterator<Item = (K, V)>,
		K: Into<String>,
		V: Into<String>,
	{
		let table = pairs
			.into_iter()
			.map(|(k, v)| (k.into(), v.into()))
			.collect();
		Self {
			prefix: None,
			source: Source::Table(table),
		}
	}

	/// Create a reader over the variables declared in a `.env` file
	///
	/// The file is parsed without exporting anything into the process
	/// environment.
	pub fn from_dotenv_file(path: impl AsRef<Path>) -> Result<Self, EnvError> {
		let mut table = HashMap::new();
		for entry in dotenv::from_path_iter(path.as_ref())? {
			let (key, value) = entry?;
			table.insert(key, value);
		}
		Ok(Self {
			prefix: None,
			source: Source::Table(table),
		})
	}

	/// Prepend `prefix` to every key looked up
	pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
		self.prefix.replace(prefix.into());
		self
	}

	fn full_key(&self, key: &str) -> String {
		let prefix = self.prefix.as_deref().unwrap_or_default();
		format!("{prefix}{key}")
	}

	fn lookup(&self, full_key: &str) -> Option<String> {
		match &self.source {
			Source::Process => env::var(full_key).ok(),
			Source::Table(table) => table.get(full_key).cloned(),
		}
	}

	/// Required string value
	pub fn str(&self, key: &str) -> Result<String, EnvError> {
		self.str_with_default(key, None)
	}

	/// String value, falling back to `default` when unset
	pub fn str_with_default(&self, key: &str, default: Option<&str>) -> Result<String, EnvError> {
		let key = self.full_key(key);
		validate_env_var_name(&key)?;

		self.lookup(&key)
			.or_else(|| default.map(str::to_string))
			.ok_or(EnvError::MissingVariable(key))
	}

	/// Unsigned integer value, falling back to `default` when unset
	pub fn u64_with_default(&self, key: &str, default: Option<u64>) -> Result<u64, EnvError> {
		let key = self.full_key(key);
		validate_env_var_name(&key)?;

		let Some(raw) = self.lookup(&key) else {
			return default.ok_or(EnvError::MissingVariable(key));
		};
		raw.trim().parse::<u64>().map_err(|e| EnvError::ParseError {
			value_len: raw.len(),
			error: e.to_string(),
			key,
		})
	}

	/// Required absolute URL
	pub fn url(&self, key: &str) -> Result<Url, EnvError> {
		let raw = self.str(key)?;

		Url::parse(raw.trim()).map_err(|e| EnvError::ParseError {
			key: self.full_key(key),
			value_len: raw.len(),
			error: e.to_string(),
		})
	}
}

/// Check that `name` can be used as a variable name.
///
/// Empty names, names with `=` and names with control characters are
/// rejected.
pub fn validate_env_var_name(name: &str) -> Result<(), EnvError> {
	let reason = if name.is_empty() {
		Some("name is empty".to_string())
	} else if let Some(pos) = name.find(char::is_control) {
		Some(format!("control character at byte {}", pos))
	} else if name.contains('=') {
		Some("'=' is not allowed".to_string())
	} else {
		None
	};

	match reason {
		Some(reason) => Err(EnvError::InvalidVariableName {
			name: name.escape_default().to_string(),
			reason,
		}),
		None => Ok(()),
	}
}

#[derive(Debug, thiserror::Error)]
pub enum EnvError {
	#[error("{0} is not set")]
	MissingVariable(String),

	/// The raw value is left out in case it is a secret.
	#[error("{key} could not be parsed ({value_len} bytes): {error}")]
	ParseError {
		key: String,
		value_len: usize,
		error: String,
	},

	#[error("'{name}' is not a valid variable name: {reason}")]
	InvalidVariableName { name: String, reason: String },

	#[error("Could not read .env file: {0}")]
	Dotenv(#[from] dotenv::Error),
}
