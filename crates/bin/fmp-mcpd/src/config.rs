use clap::{Parser, builder::BoolishValueParser};
use std::error::Error;
use std::fmt;
use std::net::SocketAddr;
use std::time::Duration;

use fmp_core::client::FmpConfig;
use url::Url;

const DEFAULT_BASE_URL: &str = "https://financialmodelingprep.com/api/v3/";
const DEFAULT_MCP_HTTP_ADDR: &str = "127.0.0.1:4030";
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;

#[derive(Parser, Debug)]
#[command(name = "fmp-mcpd", version, about = "Financial Modeling Prep MCP daemon.")]
struct CliArgs {
    #[arg(long, env = "FMP_API_KEY", hide_env_values = true)]
    api_key: Option<String>,

    #[arg(long, env = "FMP_BASE_URL", default_value = DEFAULT_BASE_URL)]
    base_url: String,

    #[arg(
        long,
        env = "FMP_REQUEST_TIMEOUT_SECS",
        default_value_t = DEFAULT_REQUEST_TIMEOUT_SECS
    )]
    request_timeout_secs: u64,

    #[arg(
        long = "stdio",
        env = "FMP_ENABLE_STDIO",
        default_value_t = true,
        value_parser = BoolishValueParser::new()
    )]
    enable_stdio: bool,

    #[arg(long, env = "FMP_MCP_HTTP_ADDR", default_value = DEFAULT_MCP_HTTP_ADDR)]
    mcp_http_addr: SocketAddr,
}

/// Runtime configuration loaded from CLI arguments and environment variables.
#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub api_key: Option<String>,
    pub base_url: Url,
    pub request_timeout: Duration,
    pub enable_stdio: bool,
    pub mcp_http_addr: SocketAddr,
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidSetting { name: &'static str, value: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSetting { name, value } => {
                write!(f, "invalid {name} value: {value}")
            }
        }
    }
}

impl Error for ConfigError {}

impl ServerConfig {
    pub fn from_args() -> Result<Self, ConfigError> {
        let args = CliArgs::parse();
        Self::try_from(args)
    }

    /// Gateway settings derived from this configuration.
    #[must_use]
    pub fn fmp_config(&self) -> FmpConfig {
        FmpConfig::new(self.api_key.clone())
            .with_base_url(self.base_url.clone())
            .with_timeout(self.request_timeout)
    }
}

impl TryFrom<CliArgs> for ServerConfig {
    type Error = ConfigError;

    fn try_from(args: CliArgs) -> Result<Self, Self::Error> {
        let api_key = args.api_key.filter(|value| !value.trim().is_empty());

        let Ok(base_url) = Url::parse(&args.base_url) else {
            return Err(ConfigError::InvalidSetting {
                name: "FMP_BASE_URL",
                value: args.base_url,
            });
        };

        if args.request_timeout_secs == 0 {
            return Err(ConfigError::InvalidSetting {
                name: "FMP_REQUEST_TIMEOUT_SECS",
                value: args.request_timeout_secs.to_string(),
            });
        }

        Ok(Self {
            api_key,
            base_url,
            request_timeout: Duration::from_secs(args.request_timeout_secs),
            enable_stdio: args.enable_stdio,
            mcp_http_addr: args.mcp_http_addr,
        })
    }
}
