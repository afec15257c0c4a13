use std::time;
use url::Url;

use crate::errors::TagError;

/// Constants for HTTP Config
pub const HTTP_TIMEOUT: u64 = 8000;
pub const HTTP_CONNECT_TIMEOUT: u64 = 2000;
pub const HTTP_POOL_MAX_IDLE: usize = 16;
pub const HTTP_POOL_IDLE_TIMEOUT: u64 = 90000;
pub const HTTP_MAX_REDIRECTS: u8 = 4;

/// The fixed endpoint every operation is issued against.
pub const DEFAULT_ENDPOINT: &str = "https://barbershoptags.com/api.php";
const EXPECTED_HOST: &str = "barbershoptags.com";

/// Ensures that url is https
fn ensure_https(url: &Url) -> Result<(), String> {
    if url.scheme() == "https" {
        Ok(())
    } else {
        Err(format!("URL must be https: {url}"))
    }
}

fn ensure_host(url: &Url, expected_host: &str) -> Result<(), String> {
    match url.host_str() {
        Some(h)
            if h.eq_ignore_ascii_case(expected_host)
                || h.strip_prefix("www.")
                    .is_some_and(|bare| bare.eq_ignore_ascii_case(expected_host)) =>
        {
            Ok(())
        }
        Some(h) => Err(format!(
            "Unexpected host for {url} (got {h}, expected {expected_host})"
        )),
        None => Err(format!("URL missing host: {url}")),
    }
}

///
/// Configuration for Http timeouts, pooling, etc.
///
#[derive(Debug, Clone)]
pub struct HttpConfig {
    pub timeout: time::Duration,
    pub connect_timeout: time::Duration,
    pub pool_max_idle_per_host: usize,
    pub pool_idle_timeout: time::Duration,
    pub max_redirects: u8,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout: time::Duration::from_millis(HTTP_TIMEOUT),
            connect_timeout: time::Duration::from_millis(HTTP_CONNECT_TIMEOUT),
            pool_max_idle_per_host: HTTP_POOL_MAX_IDLE,
            pool_idle_timeout: time::Duration::from_millis(HTTP_POOL_IDLE_TIMEOUT),
            max_redirects: HTTP_MAX_REDIRECTS,
        }
    }
}

///
/// Configuration for the tags client: where to send requests and
/// who to identify as
///
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub endpoint: Url,
    /// Appended as the `client` parameter on fetch and query requests
    /// when set. Never sent on rate requests.
    pub client_name: Option<String>,
    pub http: HttpConfig,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            endpoint: Url::parse(DEFAULT_ENDPOINT).unwrap(),
            client_name: None,
            http: HttpConfig::default(),
        }
    }
}

///
/// Return endpoint and identity configuration at program start.
/// `TAGS_BASE_URL` overrides the endpoint (validated against the service
/// host), `TAGS_CLIENT` sets the client identifier.
///
pub fn load_config() -> Result<ClientConfig, TagError> {
    dotenvy::dotenv().ok();

    let endpoint =
        std::env::var("TAGS_BASE_URL").unwrap_or_else(|_| DEFAULT_ENDPOINT.to_string());
    let endpoint = Url::parse(&endpoint)
        .map_err(|e| TagError::Config(format!("TAGS_BASE_URL invalid {e}")))?;

    // https and hostname check
    ensure_https(&endpoint).map_err(TagError::Config)?;
    ensure_host(&endpoint, EXPECTED_HOST).map_err(TagError::Config)?;

    let client_name = std::env::var("TAGS_CLIENT")
        .ok()
        .filter(|s| !s.trim().is_empty());

    Ok(ClientConfig {
        endpoint,
        client_name,
        http: HttpConfig::default(),
    })
}
