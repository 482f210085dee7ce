//! Configuration for the Namaskar website client
//!
//! Settings are read from `NAMASKAR_`-prefixed environment variables, with an
//! optional `.env` file for local development.
//!
//! ```rust,no_run
//! use namaskar_conf::ClientSettings;
//!
//! let settings = ClientSettings::from_env().expect("NAMASKAR_SERVER_URL must be set");
//! println!("talking to {}", settings.server_url);
//! ```

pub mod env;
pub mod settings;

pub use env::{Env, EnvError, validate_env_var_name};
pub use settings::{ClientSettings, ENV_PREFIX, SettingsError};
