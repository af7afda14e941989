use crate::core::content_type;
use crate::core::errors::{Error, Result};
use crate::core::ip_set::IpSet;
use crate::core::json;
use log::{debug, info, warn};
use reqwest::header::CONTENT_TYPE;
use reqwest::{StatusCode, Url};
use std::env;

/*-------------------------------------------------------------------------------------------------
  Constants
-------------------------------------------------------------------------------------------------*/

/// Production Namikoda API endpoint.
pub const DEFAULT_URL: &str = "https://api.namikoda.com";

/// Owner scope used when none is configured.
pub const DEFAULT_OWNER: &str = "public";

/// Request header carrying the API key.
pub const API_KEY_HEADER: &str = "X-Namikoda-Key";

/// Environment variable read by [ClientBuilder::new] to override the base URL.
pub const URL_ENV_VAR: &str = "NAMIKODA_URL";

/*-------------------------------------------------------------------------------------------------
  Simple Interface
-------------------------------------------------------------------------------------------------*/

/// _**Simple library interface**_ fetches an IP set using the default client configuration.
///
/// `owner` defaults to `public` when `None`.
///
/// ```no_run
/// let ip_set = namikoda::fetch(None, "dummy-success", "aaaabbbb-cccc-dddd-eeee-ffffgggghhhh")?;
/// for cidr in &ip_set.value {
///     println!("{cidr}");
/// }
/// # Ok::<(), namikoda::Error>(())
/// ```
pub fn fetch(owner: Option<&str>, id: &str, api_key: &str) -> Result<IpSet> {
    Client::new().fetch(owner, id, api_key)
}

/*-------------------------------------------------------------------------------------------------
  Client Builder
-------------------------------------------------------------------------------------------------*/

/// A builder for the [Client] struct.
///
/// ```
/// let client = namikoda::ClientBuilder::new()
///     .url("http://127.0.0.1:8080")
///     .build();
///
/// assert_eq!(client.url(), "http://127.0.0.1:8080");
/// ```
///
/// The [ClientBuilder::new] method sources the base URL from the `NAMIKODA_URL` environment
/// variable when set. Use [ClientBuilder::default] to ignore the environment.
#[derive(Debug, Clone)]
pub struct ClientBuilder {
    url: String,
}

/*--------------------------------------------------------------------------------------
  Client Builder Implementation
--------------------------------------------------------------------------------------*/

impl Default for ClientBuilder {
    /// Create a new [ClientBuilder] with default configuration values.
    ///
    /// ```
    /// let client = namikoda::ClientBuilder::default().build();
    ///
    /// assert_eq!(client.url(), "https://api.namikoda.com");
    /// ```
    fn default() -> Self {
        Self {
            url: DEFAULT_URL.to_string(),
        }
    }
}

impl ClientBuilder {
    /// Create a new [ClientBuilder] reading the base URL from `NAMIKODA_URL` when set.
    pub fn new() -> Self {
        let default = ClientBuilder::default();

        Self {
            url: get_env_var(URL_ENV_VAR, default.url),
        }
    }

    /// Set the base URL of the Namikoda API; defaults to `https://api.namikoda.com`.
    pub fn url(&mut self, url: &str) -> &mut Self {
        self.url = url.to_string();
        self
    }

    pub fn build(&self) -> Client {
        Client {
            url: self.url.clone(),
        }
    }
}

/*-------------------------------------------------------------------------------------------------
  Client
-------------------------------------------------------------------------------------------------*/

/// A blocking client for the Namikoda `ipsfor` endpoint.
///
/// Each [Client::fetch] issues exactly one `GET`; there is no caching and no retry.
///
/// ```no_run
/// let client = namikoda::Client::new();
/// let ip_set = client.fetch(Some("otherowner"), "dummy-success", "my-api-key")?;
/// # Ok::<(), namikoda::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct Client {
    url: String,
}

/*--------------------------------------------------------------------------------------
  Client Implementation
--------------------------------------------------------------------------------------*/

impl Default for Client {
    fn default() -> Self {
        ClientBuilder::default().build()
    }
}

impl Client {
    pub fn new() -> Self {
        ClientBuilder::new().build()
    }

    /// Get the base URL of the Namikoda API.
    ///
    /// ```
    /// let client = namikoda::Client::default();
    /// assert_eq!(client.url(), "https://api.namikoda.com");
    /// ```
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Build `{url}/v1/{owner}/ipsfor/{id}`. The owner and id are each escaped as a single path
    /// segment, so an id containing `/` cannot address another resource. The dot segments `.` and
    /// `..` are rejected for both, since URL normalization would resolve them against the path.
    ///
    /// ```
    /// let client = namikoda::ClientBuilder::default()
    ///     .url("http://127.0.0.1:8080")
    ///     .build();
    /// let url = client.ips_for_url(None, "dummy-success").unwrap();
    ///
    /// assert_eq!(url.path(), "/v1/public/ipsfor/dummy-success");
    /// ```
    pub fn ips_for_url(&self, owner: Option<&str>, id: &str) -> Result<Url> {
        let owner = owner
            .filter(|owner| !owner.is_empty())
            .unwrap_or(DEFAULT_OWNER);

        for (field, segment) in [("owner", owner), ("id", id)] {
            if is_dot_segment(segment) {
                return Err(Error::RequestConstruction(format!(
                    "{field} `{segment}` is not a valid path segment"
                )));
            }
        }

        let mut url = Url::parse(&self.url).map_err(|error| {
            Error::RequestConstruction(format!("invalid base URL `{}`: {}", self.url, error))
        })?;

        url.path_segments_mut()
            .map_err(|_| {
                Error::RequestConstruction(format!("base URL `{}` cannot carry a path", self.url))
            })?
            .pop_if_empty()
            .extend(["v1", owner, "ipsfor", id]);

        Ok(url)
    }

    /*-------------------------------------------------------------------------
      Fetch
    -------------------------------------------------------------------------*/

    /// Fetch and decode the IP set `id` in the `owner` scope (default `public`).
    ///
    /// The lookup succeeds only for a `200 OK` response whose Content-Type is exactly
    /// `application/json` and whose body decodes as an IP set.
    pub fn fetch(&self, owner: Option<&str>, id: &str, api_key: &str) -> Result<IpSet> {
        require("id", id)?;
        require("apikey", api_key)?;

        let url = self.ips_for_url(owner, id)?;
        info!("Get IP set: GET {}", url);

        let http = reqwest::blocking::Client::builder()
            .build()
            .map_err(|error| Error::RequestConstruction(error.to_string()))?;

        let response = http
            .get(url.clone())
            .header(API_KEY_HEADER, api_key)
            .send()
            .map_err(|error| {
                if error.is_builder() {
                    Error::RequestConstruction(error.to_string())
                } else {
                    Error::Transport(error)
                }
            })
            .inspect_err(|error| log::error!("GET {} FAILED: {}", url, error))?;

        let status = response.status();
        debug!("GET {}: {}", url, status);
        if status != StatusCode::OK {
            warn!("GET {}: unexpected response code {}", url, status.as_u16());
            return Err(Error::RequestFailed(status.as_u16()));
        }

        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .map(|value| String::from_utf8_lossy(value.as_bytes()).into_owned());
        content_type::check(content_type.as_deref())?;

        let body = response.bytes().map_err(Error::BodyRead)?;
        let ip_set = json::parse(&body)?;

        info!(
            "Got IP set `{}`: {} IPv4 and {} IPv6 prefixes, last updated {}",
            ip_set.id,
            ip_set.ipv4s.len(),
            ip_set.ipv6s.len(),
            ip_set.last_update
        );

        Ok(ip_set)
    }
}

/*-------------------------------------------------------------------------------------------------
  Helper Functions
-------------------------------------------------------------------------------------------------*/

/// Get and parse an environment variable value or return a default value.
fn get_env_var<T: std::str::FromStr>(env_var: &str, default: T) -> T {
    env::var(env_var)
        .ok()
        .and_then(|value| {
            value
                .parse::<T>()
                .inspect(|_| info!("Using {}: {}", env_var, value))
                .inspect_err(|_| warn!("Invalid {}: {}", env_var, value))
                .ok()
        })
        .unwrap_or(default)
}

/// `.` and `..` cannot be escaped into a single literal path segment.
fn is_dot_segment(segment: &str) -> bool {
    matches!(segment, "." | "..")
}

/// Reject an empty required value.
fn require(field: &str, value: &str) -> Result<()> {
    if value.is_empty() {
        Err(Error::MissingField(field.to_string()))
    } else {
        Ok(())
    }
}

/*-------------------------------------------------------------------------------------------------
  Unit Tests
-------------------------------------------------------------------------------------------------*/
