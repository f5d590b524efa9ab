use std::time::Duration;

use clap::Parser;
use secrecy::{ExposeSecret, SecretString};
use thiserror::Error;

use crate::report::OutputFormat;

pub const DEFAULT_BASE_URL: &str = "https://api.aihubmix.com";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// List the models an OpenAI-compatible endpoint serves, sorted by id.
#[derive(Parser, Debug)]
#[command(name = "modelist")]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Bearer token sent with the request
    #[arg(long, env = "API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Endpoint base url; `/v1/models` is appended
    #[arg(long, env = "API_BASE_URL", default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Request timeout in seconds
    #[arg(long, env = "API_TIMEOUT_SECS", default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout: u64,

    /// Print the listing as JSON
    #[arg(long)]
    pub json: bool,

    /// Enable debug logging (equivalent to RUST_LOG=debug)
    #[arg(short = 'd', long)]
    pub debug: bool,

    /// Enable verbose logging (equivalent to RUST_LOG=trace)
    #[arg(short = 'v', long)]
    pub verbose: bool,
}

impl Args {
    /// Log filter used when `RUST_LOG` is not set.
    pub fn default_log_filter(&self) -> &'static str {
        if self.verbose {
            "trace"
        } else if self.debug {
            "debug"
        } else {
            "warn"
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("No API key configured. Set the API_KEY environment variable or pass --api-key.")]
    MissingApiKey,

    #[error("The request timeout must be at least one second.")]
    InvalidTimeout,
}

/// Validated settings for one listing run.
#[derive(Debug)]
pub struct Config {
    pub api_key: SecretString,
    pub base_url: String,
    pub timeout: Duration,
    pub format: OutputFormat,
}

impl TryFrom<Args> for Config {
    type Error = ConfigError;

    fn try_from(args: Args) -> Result<Self, Self::Error> {
        let api_key = args
            .api_key
            .map(|key| key.trim().to_owned())
            .filter(|key| !key.is_empty())
            .ok_or(ConfigError::MissingApiKey)?;

        if args.timeout == 0 {
            return Err(ConfigError::InvalidTimeout);
        }

        Ok(Self {
            api_key: api_key.into(),
            base_url: args.base_url,
            timeout: Duration::from_secs(args.timeout),
            format: if args.json {
                OutputFormat::Json
            } else {
                OutputFormat::Text
            },
        })
    }
}

impl Config {
    pub fn api_key(&self) -> &str {
        self.api_key.expose_secret()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(api_key: Option<&str>) -> Args {
        Args {
            api_key: api_key.map(str::to_owned),
            base_url: DEFAULT_BASE_URL.to_owned(),
            timeout: DEFAULT_TIMEOUT_SECS,
            json: false,
            debug: false,
            verbose: false,
        }
    }

    #[test]
    fn test_missing_api_key() {
        let result = Config::try_from(args(None));

        assert!(matches!(result, Err(ConfigError::MissingApiKey)));
    }

    #[test]
    fn test_blank_api_key() {
        let result = Config::try_from(args(Some("   ")));

        assert!(matches!(result, Err(ConfigError::MissingApiKey)));
    }

    #[test]
    fn test_valid_config() {
        let config = Config::try_from(args(Some(" sk-test "))).unwrap();

        assert_eq!(config.api_key(), "sk-test");
        assert_eq!(config.base_url, "https://api.aihubmix.com");
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert_eq!(config.format, OutputFormat::Text);
    }

    #[test]
    fn test_json_flag() {
        let config = Config::try_from(Args {
            json: true,
            ..args(Some("sk-test"))
        })
        .unwrap();

        assert_eq!(config.format, OutputFormat::Json);
    }

    #[test]
    fn test_zero_timeout() {
        let result = Config::try_from(Args {
            timeout: 0,
            ..args(Some("sk-test"))
        });

        assert!(matches!(result, Err(ConfigError::InvalidTimeout)));
    }

    #[test]
    fn test_parse_flags() {
        let args = Args::try_parse_from([
            "modelist",
            "--api-key",
            "sk-flag",
            "--base-url",
            "http://localhost:8080/v1",
            "--timeout",
            "5",
            "--json",
            "-d",
        ])
        .unwrap();

        assert_eq!(args.api_key.as_deref(), Some("sk-flag"));
        assert_eq!(args.base_url, "http://localhost:8080/v1");
        assert_eq!(args.timeout, 5);
        assert!(args.json);
        assert_eq!(args.default_log_filter(), "debug");
    }

    #[test]
    fn test_log_filter_defaults_to_warn() {
        assert_eq!(args(None).default_log_filter(), "warn");
        assert_eq!(
            Args {
                verbose: true,
                ..args(None)
            }
            .default_log_filter(),
            "trace"
        );
    }

    #[test]
    fn test_args_definition() {
        use clap::CommandFactory;
        Args::command().debug_assert();
    }
}
