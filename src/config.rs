use std::{net::SocketAddr, path::PathBuf, time::Duration};

use anyhow::Context;

pub const DEFAULT_GEOCODER_URL: &str = "https://nominatim.openstreetmap.org";

/// Server settings read from the environment.
///
/// | Var                     | Default                               |
/// |-------------------------|---------------------------------------|
/// | `HOST`                  | `0.0.0.0`                             |
/// | `PORT`                  | `4000`                                |
/// | `FLEET_PATH`            | unset, the embedded fleet is used     |
/// | `GEOCODER_URL`          | `https://nominatim.openstreetmap.org` |
/// | `GEOCODER_USER_AGENT`   | `car-rental-server/<version>`         |
/// | `GEOCODER_TIMEOUT_SECS` | `10`                                  |
#[derive(Debug, Clone)]
pub struct Config {
	pub host: String,
	pub port: u16,
	pub fleet_path: Option<PathBuf>,
	pub geocoder_url: String,
	pub geocoder_user_agent: String,
	pub geocoder_timeout: Duration,
}

impl Default for Config {
	fn default() -> Self {
		Config {
			host: "0.0.0.0".to_owned(),
			port: 4000,
			fleet_path: None,
			geocoder_url: DEFAULT_GEOCODER_URL.to_owned(),
			geocoder_user_agent: default_user_agent(),
			geocoder_timeout: Duration::from_secs(10),
		}
	}
}

impl Config {
	pub fn from_env() -> anyhow::Result<Self> {
		Self::from_lookup(|key| std::env::var(key).ok())
	}

	/// Builds a config from any key lookup; `from_env` passes `std::env::var`.
	pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
	where
		F: Fn(&str) -> Option<String>,
	{
		let defaults = Config::default();
		let var = |key: &str| lookup(key).map(|v| v.trim().to_owned()).filter(|v| !v.is_empty());

		let port = match var("PORT") {
			Some(raw) => raw.parse().with_context(|| format!("PORT must be a valid port number, got '{}'", raw))?,
			None => defaults.port,
		};
		let geocoder_timeout = match var("GEOCODER_TIMEOUT_SECS") {
			Some(raw) => {
				let secs: u64 = raw
					.parse()
					.with_context(|| format!("GEOCODER_TIMEOUT_SECS must be a whole number of seconds, got '{}'", raw))?;
				Duration::from_secs(secs)
			}
			None => defaults.geocoder_timeout,
		};

		Ok(Config {
			host: var("HOST").unwrap_or(defaults.host),
			port,
			fleet_path: var("FLEET_PATH").map(PathBuf::from),
			geocoder_url: var("GEOCODER_URL").unwrap_or(defaults.geocoder_url),
			geocoder_user_agent: var("GEOCODER_USER_AGENT").unwrap_or(defaults.geocoder_user_agent),
			geocoder_timeout,
		})
	}

	pub fn addr(&self) -> anyhow::Result<SocketAddr> {
		let addr = format!("{}:{}", self.host, self.port);
		addr.parse().with_context(|| format!("invalid bind address {}", addr))
	}
}

fn default_user_agent() -> String {
	format!("car-rental-server/{}", env!("CARGO_PKG_VERSION"))
}

#[cfg(test)]
mod tests {
	use std::collections::HashMap;

	use super::*;

	fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
		let map: HashMap<String, String> = pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
		move |key| map.get(key).cloned()
	}

	#[test]
	fn defaults_when_nothing_is_set() {
		let config = Config::from_lookup(lookup(&[])).unwrap();
		assert_eq!(config.host, "0.0.0.0");
		assert_eq!(config.port, 4000);
		assert!(config.fleet_path.is_none());
		assert_eq!(config.geocoder_url, DEFAULT_GEOCODER_URL);
		assert_eq!(config.geocoder_timeout, Duration::from_secs(10));
		assert!(config.geocoder_user_agent.starts_with("car-rental-server/"));
	}

	#[test]
	fn overrides_are_applied() {
		let config = Config::from_lookup(lookup(&[
			("HOST", "127.0.0.1"),
			("PORT", "8080"),
			("FLEET_PATH", "/srv/fleet.json"),
			("GEOCODER_TIMEOUT_SECS", "3"),
		]))
		.unwrap();
		assert_eq!(config.addr().unwrap().to_string(), "127.0.0.1:8080");
		assert_eq!(config.fleet_path, Some(PathBuf::from("/srv/fleet.json")));
		assert_eq!(config.geocoder_timeout, Duration::from_secs(3));
	}

	#[test]
	fn blank_values_fall_back_to_defaults() {
		let config = Config::from_lookup(lookup(&[("PORT", "  "), ("FLEET_PATH", "")])).unwrap();
		assert_eq!(config.port, 4000);
		assert!(config.fleet_path.is_none());
	}

	#[test]
	fn malformed_port_is_an_error() {
		let err = Config::from_lookup(lookup(&[("PORT", "eighty")])).unwrap_err();
		assert!(err.to_string().contains("PORT"));
	}
}
